//! Iterated big integer multiplication driver

use apint::Apint;

fn fact(n: u32) -> Apint {
    let mut res = Apint::one();
    for i in 2..=n {
        res = res * Apint::from(i);
    }
    res
}

fn main() {
    println!("20!  = {}", fact(20));
    println!("100! = {}", fact(100));
}
