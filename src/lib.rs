#![cfg_attr(feature = "cargo-clippy", feature(tool_lints))]
#![cfg_attr(
    feature = "cargo-clippy",
    allow(clippy::len_without_is_empty)
)]

extern crate itertools;
#[macro_use]
extern crate log;
extern crate num_bigint as bigint;
extern crate num_traits;
extern crate rand;

pub mod utils;

pub use utils::errors::{Error, Result};
pub use utils::prng::lfsr::{Cycle, Register};
pub use utils::prng::Prng;
