use bigint::BigUint;
use itertools::Itertools;
use num_traits::Zero;
use rand::rngs::OsRng;
use rand::Rng;
use utils::errors::{Error, Result};

/// Checks that every element of `bits` is 0 or 1 and that there is at least one.
pub fn validate_bits(bits: &[u8]) -> Result<()> {
    if bits.is_empty() {
        return Err(Error::InvalidState {
            index: None,
            value: String::new(),
        });
    }

    match bits.iter().position(|&bit| bit > 1) {
        Some(index) => Err(Error::InvalidState {
            index: Some(index),
            value: bits[index].to_string(),
        }),
        None => Ok(()),
    }
}

/// Parses a string such as `"01101000010"` into bits, leftmost character first.
pub fn parse_bits(string: &str) -> Result<Vec<u8>> {
    let mut bits: Vec<u8> = Vec::with_capacity(string.len());
    for (index, c) in string.chars().enumerate() {
        match c {
            '0' => bits.push(0),
            '1' => bits.push(1),
            _ => {
                return Err(Error::InvalidState {
                    index: Some(index),
                    value: format!("{:?}", c),
                })
            }
        }
    }

    validate_bits(&bits)?;
    Ok(bits)
}

pub fn bits_to_string<'a, I>(bits: I) -> String
where
    I: IntoIterator<Item = &'a u8>,
{
    format!("{}", bits.into_iter().format(""))
}

/// Exclusive-or of every bit; 0 for no bits.
pub fn xor_reduce<I>(bits: I) -> u8
where
    I: IntoIterator<Item = u8>,
{
    bits.into_iter().fold(0, |acc, bit| acc ^ bit)
}

/// Folds bits most-significant-first: the first bit becomes the top bit.
pub fn fold_bits_be<I>(bits: I) -> BigUint
where
    I: IntoIterator<Item = u8>,
{
    bits.into_iter().fold(BigUint::zero(), |acc, bit| {
        (acc << 1) + BigUint::from(bit)
    })
}

pub fn random_bits_from<R: Rng>(rng: &mut R, len: usize) -> Vec<u8> {
    (0..len).map(|_| rng.gen_range(0, 2)).collect()
}

pub fn random_bits(len: usize) -> Result<Vec<u8>> {
    let mut rng = OsRng::new()?;

    Ok(random_bits_from(&mut rng, len))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prng::XorShiftRng;
    use rand::SeedableRng;

    #[test]
    fn validate_rejects_non_bits() {
        match validate_bits(&[0, 2, 1]) {
            Err(Error::InvalidState { index, value }) => {
                assert_eq!(index, Some(1));
                assert_eq!(value, "2");
            }
            other => panic!("expected InvalidState, got {:?}", other),
        }
    }

    #[test]
    fn validate_rejects_empty() {
        match validate_bits(&[]) {
            Err(Error::InvalidState { index, .. }) => assert_eq!(index, None),
            other => panic!("expected InvalidState, got {:?}", other),
        }
    }

    #[test]
    fn parse_bits_test() {
        assert_eq!(
            parse_bits("01101000010").unwrap(),
            vec![0, 1, 1, 0, 1, 0, 0, 0, 0, 1, 0]
        );
    }

    #[test]
    fn parse_bits_rejects_other_chars() {
        match parse_bits("01x1") {
            Err(Error::InvalidState { index, value }) => {
                assert_eq!(index, Some(2));
                assert_eq!(value, "'x'");
            }
            other => panic!("expected InvalidState, got {:?}", other),
        }
    }

    #[test]
    fn bits_to_string_test() {
        assert_eq!(bits_to_string(&[1u8, 1, 0, 1]), "1101");
        assert_eq!(bits_to_string(&Vec::<u8>::new()), "");
    }

    #[test]
    fn xor_reduce_test() {
        assert_eq!(xor_reduce(Vec::new()), 0);
        assert_eq!(xor_reduce(vec![1]), 1);
        assert_eq!(xor_reduce(vec![1, 1]), 0);
        assert_eq!(xor_reduce(vec![1, 0, 1, 1]), 1);
    }

    #[test]
    fn fold_bits_be_test() {
        assert_eq!(fold_bits_be(Vec::new()), BigUint::from(0u32));
        assert_eq!(fold_bits_be(vec![1, 0, 0, 0, 0, 1, 0, 1]), BigUint::from(133u32));
        assert_eq!(fold_bits_be(vec![0, 0, 1]), BigUint::from(1u32));
    }

    #[test]
    fn random_bits_are_bits() {
        let mut rng = XorShiftRng::from_seed([7; 16]);
        let bits = random_bits_from(&mut rng, 256);
        assert_eq!(bits.len(), 256);
        assert!(bits.iter().all(|&bit| bit <= 1));
        assert!(bits.contains(&0));
        assert!(bits.contains(&1));
    }
}
