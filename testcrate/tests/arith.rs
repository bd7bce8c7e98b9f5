//! Table driven checks of the arithmetic operators over decimal vectors

use apint::Apint;

fn int(s: &str) -> Apint {
    Apint::from_str_radix(s, 10).unwrap()
}

fn hex(s: &str) -> Apint {
    Apint::from_str_radix(s, 16).unwrap()
}

#[test]
fn addition() {
    let test_data: &[(&str, &str, &str)] = &[
        ("0", "0", "0"),
        ("0", "1", "1"),
        ("1", "1", "2"),
        ("1", "-1", "0"),
        ("-1", "-1", "-2"),
        ("10", "100", "110"),
        ("1000", "1000000", "1001000"),
        ("1000000000000000", "100000000000000000000", "100001000000000000000"),
        ("-1000000000000000", "100000000000000000000", "99999000000000000000"),
        ("1000000000000000", "-100000000000000000000", "-99999000000000000000"),
        ("-1000000000000000", "-100000000000000000000", "-100001000000000000000"),
    ];
    for (x_str, y_str, expected) in test_data {
        let x = int(x_str);
        let y = int(y_str);
        assert_eq!((&x + &y).to_string(), *expected, "({x_str})+({y_str})");
        assert_eq!((&y + &x).to_string(), *expected, "({y_str})+({x_str})");
    }
}

#[test]
fn subtraction() {
    let test_data: &[(&str, &str, &str)] = &[
        ("0", "0", "0"),
        ("0", "1", "-1"),
        ("1", "0", "1"),
        ("1", "1", "0"),
        ("1", "-1", "2"),
        ("-1", "1", "-2"),
        ("-1", "-1", "0"),
        ("10", "100", "-90"),
        ("1000", "1000000", "-999000"),
        ("1000000000000000", "100000000000000000000", "-99999000000000000000"),
        ("100000000000000000000", "1000000000000000", "99999000000000000000"),
        ("-1000000000000000", "100000000000000000000", "-100001000000000000000"),
        ("1000000000000000", "-100000000000000000000", "100001000000000000000"),
        ("-1000000000000000", "-100000000000000000000", "99999000000000000000"),
    ];
    for (x_str, y_str, expected) in test_data {
        assert_eq!((int(x_str) - int(y_str)).to_string(), *expected);
    }
}

#[test]
fn multiplication() {
    let test_data: &[(&str, &str, &str)] = &[
        ("0", "0", "0"),
        ("0", "1", "0"),
        ("1", "1", "1"),
        ("1", "-1", "-1"),
        ("-1", "-1", "1"),
        ("10", "100", "1000"),
        ("1000", "1000000", "1000000000"),
        (
            "1000000000000000",
            "100000000000000000000",
            "100000000000000000000000000000000000",
        ),
        (
            "-1000000000000000",
            "100000000000000000000",
            "-100000000000000000000000000000000000",
        ),
        (
            "1000000000000000",
            "-100000000000000000000",
            "-100000000000000000000000000000000000",
        ),
        (
            "-1000000000000000",
            "-100000000000000000000",
            "100000000000000000000000000000000000",
        ),
        (
            "100000",
            "-1000000000000000000000000000000",
            "-100000000000000000000000000000000000",
        ),
    ];
    for (x_str, y_str, expected) in test_data {
        let x = int(x_str);
        let y = int(y_str);
        assert_eq!((&x * &y).to_string(), *expected, "({x_str})*({y_str})");
        assert_eq!((&y * &x).to_string(), *expected, "({y_str})*({x_str})");
    }
}

#[test]
fn division() {
    // every product divided by one factor gives back the other
    let test_data: &[(&str, &str, &str)] = &[
        ("1", "1", "1"),
        ("1", "-1", "-1"),
        ("-1", "1", "-1"),
        ("-1", "-1", "1"),
        ("10", "100", "1000"),
        ("1000", "1000000", "1000000000"),
        (
            "1000000000000000",
            "100000000000000000000",
            "100000000000000000000000000000000000",
        ),
        (
            "100000000000000000000",
            "1000000000000000",
            "100000000000000000000000000000000000",
        ),
        (
            "-1000000000000000",
            "100000000000000000000",
            "-100000000000000000000000000000000000",
        ),
        (
            "1000000000000000",
            "-100000000000000000000",
            "-100000000000000000000000000000000000",
        ),
        (
            "-1000000000000000",
            "-100000000000000000000",
            "100000000000000000000000000000000000",
        ),
        (
            "100000",
            "-1000000000000000000000000000000",
            "-100000000000000000000000000000000000",
        ),
    ];
    for (x_str, y_str, product) in test_data {
        let product = int(product);
        assert_eq!((&product / &int(y_str)).to_string(), *x_str);
        assert_eq!((&product / &int(x_str)).to_string(), *y_str);
        assert_eq!((&product % &int(x_str)).to_string(), "0");
        assert_eq!((&product % &int(y_str)).to_string(), "0");
    }
    // a dividend smaller in magnitude than the divisor
    for (duo, div) in [
        ("1000000", "12345678901234567890"),
        ("1000000", "-12345678901234567890"),
        ("-1000000", "12345678901234567890"),
        ("-1000000", "-12345678901234567890"),
    ] {
        assert_eq!((int(duo) / int(div)).to_string(), "0");
        assert_eq!((int(duo) % int(div)).to_string(), duo);
    }
}

#[test]
fn remainder() {
    let test_data: &[(&str, &str, &str)] = &[
        ("1", "1", "0"),
        ("1", "-1", "0"),
        ("-1", "1", "0"),
        ("-1", "-1", "0"),
        ("1234", "10", "4"),
        ("1234", "100", "34"),
        ("1234567890", "1000000", "567890"),
        ("-1234567890", "1000000", "-567890"),
        ("1234567890", "-1000000", "567890"),
        ("-1234567890", "-1000000", "-567890"),
        (
            "123456789012345678901234567890123456",
            "100000000000000000000",
            "78901234567890123456",
        ),
        (
            "123456789012345678901234567890123456",
            "1000000000000000",
            "234567890123456",
        ),
        (
            "-123456789012345678901234567890123456",
            "100000000000000000000",
            "-78901234567890123456",
        ),
        (
            "-123456789012345678901234567890123456",
            "1000000000000000",
            "-234567890123456",
        ),
        (
            "123456789012345678901234567890123456",
            "-100000000000000000000",
            "78901234567890123456",
        ),
        (
            "123456789012345678901234567890123456",
            "-1000000000000000",
            "234567890123456",
        ),
        (
            "-123456789012345678901234567890123456",
            "-100000000000000000000",
            "-78901234567890123456",
        ),
        (
            "-123456789012345678901234567890123456",
            "-1000000000000000",
            "-234567890123456",
        ),
        (
            "123456789012345678901234567890123456",
            "1000000000000000000000000000000",
            "789012345678901234567890123456",
        ),
        ("123456789012345678901234567890123456", "100000", "23456"),
        (
            "-123456789012345678901234567890123456",
            "1000000000000000000000000000000",
            "-789012345678901234567890123456",
        ),
        ("-123456789012345678901234567890123456", "100000", "-23456"),
    ];
    for (duo, div, expected) in test_data {
        assert_eq!((int(duo) % int(div)).to_string(), *expected, "({duo})%({div})");
    }
}

#[test]
fn one_digit_minimum_over_its_magnitude() {
    // -2^63 over +2^63: the only case where a one digit dividend meets a
    // two digit divisor without a zero quotient
    let duo = hex("-8000000000000000");
    let div = hex("8000000000000000");
    assert_eq!((&duo / &div).to_string(), "-1");
    assert_eq!((&duo % &div).to_string(), "0");
    assert_eq!((&div / &duo).to_string(), "-1");
    let (q, r) = duo.quotient_and_remainder(&div);
    assert_eq!(q.to_string(), "-1");
    assert!(r.is_zero());
}

#[test]
fn negation_and_not() {
    let negate_data: &[(&str, &str)] = &[
        ("0", "0"),
        ("1", "-1"),
        ("2", "-2"),
        ("100000000000", "-100000000000"),
        ("1000000000000000000000", "-1000000000000000000000"),
    ];
    for (x_str, y_str) in negate_data {
        assert_eq!((-int(x_str)).to_string(), *y_str, "-({x_str})");
        assert_eq!((-int(y_str)).to_string(), *x_str, "-({y_str})");
    }
    let not_data: &[(&str, &str)] = &[
        ("0", "-1"),
        ("1", "-2"),
        ("100000000000", "-100000000001"),
        ("1000000000000000000000", "-1000000000000000000001"),
    ];
    for (x_str, y_str) in not_data {
        assert_eq!((!int(x_str)).to_string(), *y_str, "~{x_str}");
        assert_eq!((!int(y_str)).to_string(), *x_str, "~{y_str}");
    }
}

#[test]
#[should_panic(expected = "division by zero")]
fn division_by_zero_is_fatal() {
    let _ = int("123456789012345678901234567890") / Apint::zero();
}

#[test]
#[should_panic(expected = "remainder by zero")]
fn remainder_by_zero_is_fatal() {
    let _ = int("5") % Apint::zero();
}
