use super::Prng;
use bigint::BigUint;
use rand::Rng;
use std::collections::VecDeque;
use std::fmt::{self, Display, Formatter};
use utils::bits::{
    bits_to_string, fold_bits_be, parse_bits, random_bits, random_bits_from, validate_bits,
    xor_reduce,
};
use utils::errors::{Error, Result};

/// A Fibonacci linear-feedback shift register.
///
/// Taps are given in binary-positional notation, read from right to left: tap
/// `t` on an `n`-bit register reads array index `(n - 1) - t`. On a nine-bit
/// register `taps = [3]` reads index 5.
///
/// Each step the bits under the taps are xored together, the leftmost bit is
/// dropped and the xor result is appended on the right. An empty tap set always
/// feeds back 0, and a tap listed twice cancels itself out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Register {
    state: VecDeque<u8>,
    taps: Vec<usize>,
    tap_indices: Vec<usize>,
}

/// Shape of the state sequence from some starting state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cycle {
    /// Steps taken before the first state of the cycle is reached.
    pub lead_in: u64,
    pub period: u64,
}

impl Register {
    pub fn new(fill: &[u8], taps: &[usize]) -> Result<Register> {
        validate_bits(fill)?;

        let len = fill.len();
        let mut tap_indices = Vec::with_capacity(taps.len());
        for &tap in taps {
            if tap >= len {
                return Err(Error::InvalidTap { tap, len });
            }
            tap_indices.push((len - 1) - tap);
        }

        let register = Register {
            state: fill.iter().cloned().collect(),
            taps: taps.to_vec(),
            tap_indices,
        };
        debug!("created {}", register);

        Ok(register)
    }

    /// Builds a register from a fill written as `'0'`/`'1'` characters.
    pub fn from_bit_str(fill: &str, taps: &[usize]) -> Result<Register> {
        let bits = parse_bits(fill)?;
        Register::new(&bits[..], taps)
    }

    pub fn from_rng<R: Rng>(rng: &mut R, len: usize, taps: &[usize]) -> Result<Register> {
        let fill = random_bits_from(rng, len);
        Register::new(&fill[..], taps)
    }

    /// Builds a register with a fill drawn from the operating system RNG.
    pub fn random(len: usize, taps: &[usize]) -> Result<Register> {
        let fill = random_bits(len)?;
        Register::new(&fill[..], taps)
    }

    pub fn len(&self) -> usize {
        self.state.len()
    }

    pub fn state(&self) -> Vec<u8> {
        self.state.iter().cloned().collect()
    }

    pub fn taps(&self) -> &[usize] {
        &self.taps[..]
    }

    /// The all-zero state never changes, whatever the taps.
    pub fn is_zero(&self) -> bool {
        self.state.iter().all(|&bit| bit == 0)
    }

    /// Advances the register by one bit and returns the bit appended on the right.
    pub fn step(&mut self) -> u8 {
        let new_bit = xor_reduce(self.tap_indices.iter().map(|&i| self.state[i]));

        self.state.pop_front();
        self.state.push_back(new_bit);
        trace!("step -> {}, state {}", new_bit, bits_to_string(&self.state));

        new_bit
    }

    /// Steps `k` times and reads the produced bits as a `k`-bit number, first
    /// bit most significant.
    pub fn rand(&mut self, k: i64) -> Result<BigUint> {
        if k < 0 {
            return Err(Error::InvalidArgument(format!(
                "cannot generate a number of {} bits",
                k
            )));
        }

        Ok(fold_bits_be((0..k).map(|_| self.step())))
    }

    /// Same as `rand` for widths that fit in a `u64`.
    pub fn rand_u64(&mut self, k: u32) -> Result<u64> {
        if k > 64 {
            return Err(Error::InvalidArgument(format!(
                "{} bits do not fit in a u64",
                k
            )));
        }

        Ok(self.fold_u64(k))
    }

    // k must be at most 64.
    fn fold_u64(&mut self, k: u32) -> u64 {
        let mut num: u64 = 0;
        for _ in 0..k {
            num = (num << 1) | u64::from(self.step());
        }

        num
    }

    /// Finds the cycle the state sequence falls into from the current state,
    /// without advancing this register.
    ///
    /// Named apart from `Iterator::cycle`, which would take the register by value.
    ///
    /// Uses Brent's algorithm, so it only ever holds two states at once. The
    /// cost is proportional to `lead_in + period`, which is at most `2^n`.
    pub fn find_cycle(&self) -> Cycle {
        let mut power: u64 = 1;
        let mut period: u64 = 1;
        let mut tortoise = self.clone();
        let mut hare = self.clone();
        hare.step();

        while tortoise.state != hare.state {
            if power == period {
                tortoise.state.clone_from(&hare.state);
                power *= 2;
                period = 0;
            }
            hare.step();
            period += 1;
        }

        let mut tortoise = self.clone();
        let mut hare = self.clone();
        for _ in 0..period {
            hare.step();
        }

        let mut lead_in: u64 = 0;
        while tortoise.state != hare.state {
            tortoise.step();
            hare.step();
            lead_in += 1;
        }

        Cycle { lead_in, period }
    }
}

impl Display for Register {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(
            formatter,
            "<LFSR: {}, taps: {:?}>",
            bits_to_string(&self.state),
            self.taps
        )
    }
}

impl Iterator for Register {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        Some(self.step())
    }
}

impl Prng for Register {
    fn gen_rand(&mut self) -> u32 {
        self.fold_u64(32) as u32
    }

    fn gen_rand_byte(&mut self) -> u8 {
        self.fold_u64(8) as u8
    }
}
