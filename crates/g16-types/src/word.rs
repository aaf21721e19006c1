// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! 32-byte big-endian words, the flat unit every key, proof and scalar
//! encodes to (EVM `uint256` layout).
//!
//! Decoding is strict: a word whose value is not below the target modulus is
//! rejected, never reduced.

use ark_bn254::{Fq, Fr};
use ark_ff::{BigInt, BigInteger, PrimeField};
use num_bigint::BigUint;

use crate::error::{G16Error, G16Result};

/// One flat field-element value.
pub type Word = [u8; 32];

pub const WORD_BYTES: usize = 32;

/// Parse a hex word. The `0x` prefix is optional and short values are
/// left-padded with zeros.
pub fn word_from_hex(s: &str) -> G16Result<Word> {
    let s = s.trim();
    let s = s.strip_prefix("0x").unwrap_or(s);
    if s.is_empty() || s.len() > 2 * WORD_BYTES {
        return Err(G16Error::Encoding(format!(
            "hex word must be 1..=64 digits, got {}",
            s.len()
        )));
    }
    // hex::decode wants an even number of digits
    let padded = if s.len() % 2 == 1 {
        format!("0{s}")
    } else {
        s.to_string()
    };
    let bytes = hex::decode(&padded).map_err(|e| G16Error::Encoding(format!("invalid hex: {e}")))?;
    let mut word = [0u8; WORD_BYTES];
    word[WORD_BYTES - bytes.len()..].copy_from_slice(&bytes);
    Ok(word)
}

/// Parse an unsigned decimal integer of at most 256 bits.
pub fn word_from_decimal(s: &str) -> G16Result<Word> {
    let s = s.trim();
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(G16Error::Encoding(format!("not an unsigned decimal integer: {s:?}")));
    }
    let value = BigUint::parse_bytes(s.as_bytes(), 10)
        .ok_or_else(|| G16Error::Encoding(format!("not an unsigned decimal integer: {s:?}")))?;
    let bytes = value.to_bytes_be();
    if bytes.len() > WORD_BYTES {
        return Err(G16Error::Encoding("decimal value exceeds 256 bits".into()));
    }
    let mut word = [0u8; WORD_BYTES];
    word[WORD_BYTES - bytes.len()..].copy_from_slice(&bytes);
    Ok(word)
}

/// Parse a scalar written as `0x`-hex or decimal.
///
/// A leading `-` is refused with [`G16Error::ScalarRange`]: negative
/// coefficients belong to a negatively signed input slot, not to the scalar.
pub fn fr_from_str(s: &str) -> G16Result<Fr> {
    let s = s.trim();
    if s.starts_with('-') {
        return Err(G16Error::ScalarRange);
    }
    let word = if s.starts_with("0x") {
        word_from_hex(s)?
    } else {
        word_from_decimal(s)?
    };
    fr_from_word(&word)
}

/// `0x`-prefixed, 64 hex digits.
pub fn word_to_hex(word: &Word) -> String {
    format!("0x{}", hex::encode(word))
}

/// Split a byte string into words. The length must be a multiple of 32.
pub fn words_from_bytes(bytes: &[u8]) -> G16Result<Vec<Word>> {
    if bytes.len() % WORD_BYTES != 0 {
        return Err(G16Error::Encoding(format!(
            "byte length {} is not a multiple of {WORD_BYTES}",
            bytes.len()
        )));
    }
    Ok(bytes
        .chunks_exact(WORD_BYTES)
        .map(|chunk| {
            let mut w = [0u8; WORD_BYTES];
            w.copy_from_slice(chunk);
            w
        })
        .collect())
}

pub fn words_to_bytes(words: &[Word]) -> Vec<u8> {
    words.iter().flat_map(|w| w.iter().copied()).collect()
}

fn bigint_from_word(word: &Word) -> BigInt<4> {
    let mut limbs = [0u64; 4];
    // BE bytes -> LE limbs
    for (i, chunk) in word.rchunks(8).enumerate() {
        let mut buf = [0u8; 8];
        buf.copy_from_slice(chunk);
        limbs[i] = u64::from_be_bytes(buf);
    }
    BigInt::new(limbs)
}

fn word_from_bigint(bigint: &BigInt<4>) -> Word {
    let bytes = bigint.to_bytes_be();
    let mut word = [0u8; WORD_BYTES];
    word[WORD_BYTES - bytes.len()..].copy_from_slice(&bytes);
    word
}

/// Base-field element from a word; `None` if the value is `>= p`.
pub fn fq_from_word(word: &Word) -> Option<Fq> {
    Fq::from_bigint(bigint_from_word(word))
}

pub fn fq_to_word(fq: &Fq) -> Word {
    word_from_bigint(&fq.into_bigint())
}

/// Scalar from a word. Values `>= r` are a [`G16Error::ScalarRange`].
pub fn fr_from_word(word: &Word) -> G16Result<Fr> {
    Fr::from_bigint(bigint_from_word(word)).ok_or(G16Error::ScalarRange)
}

pub fn fr_to_word(fr: &Fr) -> Word {
    word_from_bigint(&fr.into_bigint())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_ff::UniformRand;
    use ark_std::rand::{rngs::StdRng, SeedableRng};

    const R_HEX: &str = "0x30644e72e131a029b85045b68181585d2833e84879b9709143e1f593f0000001";
    const P_HEX: &str = "0x30644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd47";

    #[test]
    fn short_hex_is_left_padded() {
        let w = word_from_hex("0x2").unwrap();
        assert_eq!(w[31], 2);
        assert!(w[..31].iter().all(|b| *b == 0));
        assert_eq!(word_from_hex("02").unwrap(), w);
    }

    #[test]
    fn rejects_oversized_and_empty_hex() {
        let long = format!("0x1{}", "0".repeat(64));
        assert!(matches!(word_from_hex(&long), Err(G16Error::Encoding(_))));
        assert!(matches!(word_from_hex("0x"), Err(G16Error::Encoding(_))));
        assert!(matches!(word_from_hex("0xzz"), Err(G16Error::Encoding(_))));
    }

    #[test]
    fn hex_output_is_canonical() {
        let w = fr_to_word(&Fr::from(255u64));
        let h = word_to_hex(&w);
        assert_eq!(h.len(), 66);
        assert!(h.ends_with("ff"));
    }

    #[test]
    fn group_order_is_out_of_scalar_range() {
        let r = word_from_hex(R_HEX).unwrap();
        assert_eq!(fr_from_word(&r), Err(G16Error::ScalarRange));
        // r is still a valid base-field element since r < p
        assert!(fq_from_word(&r).is_some());
    }

    #[test]
    fn base_modulus_is_out_of_field() {
        let p = word_from_hex(P_HEX).unwrap();
        assert!(fq_from_word(&p).is_none());
    }

    #[test]
    fn largest_scalar_decodes() {
        let r_minus_one = -Fr::from(1u64);
        let w = fr_to_word(&r_minus_one);
        let mut expected = word_from_hex(R_HEX).unwrap();
        expected[31] = 0;
        assert_eq!(w, expected);
        assert_eq!(fr_from_word(&w).unwrap(), r_minus_one);
    }

    #[test]
    fn random_scalar_survives_word() {
        let mut rng = StdRng::seed_from_u64(42);
        let s = Fr::rand(&mut rng);
        assert_eq!(fr_from_word(&fr_to_word(&s)).unwrap(), s);
    }

    #[test]
    fn scalars_parse_from_decimal_and_hex() {
        assert_eq!(fr_from_str("4").unwrap(), Fr::from(4u64));
        assert_eq!(fr_from_str("0x10").unwrap(), Fr::from(16u64));
        assert_eq!(
            fr_from_str("21888242871839275222246405745257275088548364400416034343698204186575808495616").unwrap(),
            -Fr::from(1u64)
        );
    }

    #[test]
    fn scalar_strings_are_strict() {
        assert_eq!(fr_from_str("-4"), Err(G16Error::ScalarRange));
        assert_eq!(
            fr_from_str("21888242871839275222246405745257275088548364400416034343698204186575808495617"),
            Err(G16Error::ScalarRange)
        );
        assert!(matches!(fr_from_str("4a"), Err(G16Error::Encoding(_))));
        assert!(matches!(fr_from_str(""), Err(G16Error::Encoding(_))));
    }

    #[test]
    fn bytes_split_into_words() {
        let words = vec![fr_to_word(&Fr::from(1u64)), fr_to_word(&Fr::from(2u64))];
        let bytes = words_to_bytes(&words);
        assert_eq!(bytes.len(), 64);
        assert_eq!(words_from_bytes(&bytes).unwrap(), words);
        assert!(words_from_bytes(&bytes[..33]).is_err());
    }
}
