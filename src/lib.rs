pub mod decode;
pub mod encode;
pub mod scan;

mod object;

pub use object::{Entry, Object};

#[cfg(test)]
mod decode_tests;
