pub mod lfsr;

/// A generator producing 32-bit words.
pub trait Prng {
    fn gen_rand(&mut self) -> u32;

    fn gen_rand_byte(&mut self) -> u8;
}
