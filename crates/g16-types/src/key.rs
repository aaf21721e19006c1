// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Verification key and its canonical flat encoding.

use crate::curve::{G1Point, G2Point};
use crate::error::{G16Error, G16Result};
use crate::word::{word_from_hex, word_to_hex, words_from_bytes, words_to_bytes, Word};

/// Fixed points from the trusted setup. Immutable once built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VerificationKey {
    pub alpha1: G1Point,
    pub beta2: G2Point,
    pub gamma2: G2Point,
    pub delta2: G2Point,
}

impl VerificationKey {
    /// alpha1 (2) + beta2, gamma2, delta2 (4 each)
    pub const WORDS: usize = G1Point::WORDS + 3 * G2Point::WORDS;

    pub fn new(alpha1: G1Point, beta2: G2Point, gamma2: G2Point, delta2: G2Point) -> Self {
        Self {
            alpha1,
            beta2,
            gamma2,
            delta2,
        }
    }

    /// `[alpha.x, alpha.y, beta.x_im, beta.x_re, beta.y_im, beta.y_re, gamma.., delta..]`
    pub fn encode(&self) -> [Word; Self::WORDS] {
        let mut out = [[0u8; 32]; Self::WORDS];
        out[..2].copy_from_slice(&self.alpha1.to_words());
        out[2..6].copy_from_slice(&self.beta2.to_words());
        out[6..10].copy_from_slice(&self.gamma2.to_words());
        out[10..14].copy_from_slice(&self.delta2.to_words());
        out
    }

    /// Inverse of [`encode`](Self::encode). Every point is re-validated.
    pub fn decode(words: &[Word]) -> G16Result<Self> {
        if words.len() != Self::WORDS {
            return Err(G16Error::Encoding(format!(
                "verification key needs {} words, got {}",
                Self::WORDS,
                words.len()
            )));
        }
        let g2 = |at: usize| G2Point::from_words(&[words[at], words[at + 1], words[at + 2], words[at + 3]]);
        Ok(Self {
            alpha1: G1Point::from_words(&[words[0], words[1]])?,
            beta2: g2(2)?,
            gamma2: g2(6)?,
            delta2: g2(10)?,
        })
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        words_to_bytes(&self.encode())
    }

    pub fn from_bytes(bytes: &[u8]) -> G16Result<Self> {
        Self::decode(&words_from_bytes(bytes)?)
    }

    pub fn to_hex_words(&self) -> Vec<String> {
        self.encode().iter().map(word_to_hex).collect()
    }

    pub fn from_hex_words<S: AsRef<str>>(hex: &[S]) -> G16Result<Self> {
        let words = hex
            .iter()
            .map(|h| word_from_hex(h.as_ref()))
            .collect::<G16Result<Vec<_>>>()?;
        Self::decode(&words)
    }
}
