// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Per-call verification inputs: the proof triple and the public scalars.

use ark_bn254::Fr;

use crate::curve::{G1Point, G2Point};
use crate::error::{G16Error, G16Result};
use crate::word::{fr_from_word, fr_to_word, Word};

/// Public inputs are scalars reduced modulo the group order.
pub type Scalar = Fr;

/// Groth16 proof `(A1, B2, C1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Proof {
    pub a: G1Point,
    pub b: G2Point,
    pub c: G1Point,
}

impl Proof {
    pub const WORDS: usize = 8;

    pub fn new(a: G1Point, b: G2Point, c: G1Point) -> Self {
        Self { a, b, c }
    }

    /// `[A.x, A.y, B.x_im, B.x_re, B.y_im, B.y_re, C.x, C.y]`
    pub fn to_words(&self) -> [Word; 8] {
        let a = self.a.to_words();
        let b = self.b.to_words();
        let c = self.c.to_words();
        [a[0], a[1], b[0], b[1], b[2], b[3], c[0], c[1]]
    }

    pub fn from_words(words: &[Word]) -> G16Result<Self> {
        if words.len() != Self::WORDS {
            return Err(G16Error::Encoding(format!(
                "proof needs {} words, got {}",
                Self::WORDS,
                words.len()
            )));
        }
        Ok(Self {
            a: G1Point::from_words(&[words[0], words[1]])?,
            b: G2Point::from_words(&[words[2], words[3], words[4], words[5]])?,
            c: G1Point::from_words(&[words[6], words[7]])?,
        })
    }
}

/// Ordered public inputs of one verification call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PublicInputs(Vec<Scalar>);

impl PublicInputs {
    pub fn new(values: Vec<Scalar>) -> Self {
        Self(values)
    }

    /// Decode strictly: a word `>= r` is a [`G16Error::ScalarRange`].
    pub fn from_words(words: &[Word]) -> G16Result<Self> {
        words.iter().map(fr_from_word).collect::<G16Result<_>>().map(Self)
    }

    pub fn to_words(&self) -> Vec<Word> {
        self.0.iter().map(fr_to_word).collect()
    }

    pub fn as_slice(&self) -> &[Scalar] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Scalar>> for PublicInputs {
    fn from(values: Vec<Scalar>) -> Self {
        Self(values)
    }
}

impl<const N: usize> From<[u64; N]> for PublicInputs {
    fn from(values: [u64; N]) -> Self {
        Self(values.iter().map(|v| Fr::from(*v)).collect())
    }
}
