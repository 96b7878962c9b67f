pub mod bits;
pub mod errors;
pub mod prng;
