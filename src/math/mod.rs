//! Mathematical utilities: exact binomials and big-ratio conversion.

pub mod binomial;

pub use binomial::*;
