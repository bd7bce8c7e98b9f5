mod int_buf;

pub use int_buf::IntBuf;
