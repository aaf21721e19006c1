// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Derived constants, laid out for hardcoding into a deployed verifier.
//!
//! G1 points print as `[x, y]`, G2 points as `[[x_im, x_re], [y_im, y_re]]`,
//! the order the EVM pairing precompile takes.

use g16_types::word::{fr_to_word, word_to_hex};
use g16_types::{G1Point, G2Point, Proof, PublicInputs, VerificationKey};
use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct G1Hex(pub [String; 2]);

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct G2Hex(pub [[String; 2]; 2]);

impl From<&G1Point> for G1Hex {
    fn from(p: &G1Point) -> Self {
        Self(p.to_words().map(|w| word_to_hex(&w)))
    }
}

impl From<&G2Point> for G2Hex {
    fn from(p: &G2Point) -> Self {
        let [x_im, x_re, y_im, y_re] = p.to_words().map(|w| word_to_hex(&w));
        Self([[x_im, x_re], [y_im, y_re]])
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct KeyReport {
    pub alpha1: G1Hex,
    pub beta2: G2Hex,
    pub gamma2: G2Hex,
    pub delta2: G2Hex,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ProofReport {
    pub a1: G1Hex,
    pub b2: G2Hex,
    pub c1: G1Hex,
    pub inputs: Vec<String>,
}

impl From<&VerificationKey> for KeyReport {
    fn from(vk: &VerificationKey) -> Self {
        Self {
            alpha1: (&vk.alpha1).into(),
            beta2: (&vk.beta2).into(),
            gamma2: (&vk.gamma2).into(),
            delta2: (&vk.delta2).into(),
        }
    }
}

impl ProofReport {
    pub fn new(proof: &Proof, inputs: &PublicInputs) -> Self {
        Self {
            a1: (&proof.a).into(),
            b2: (&proof.b).into(),
            c1: (&proof.c).into(),
            inputs: inputs.as_slice().iter().map(|x| word_to_hex(&fr_to_word(x))).collect(),
        }
    }
}

impl KeyReport {
    /// `NAME: value` lines, one coordinate group per line.
    pub fn lines(&self) -> Vec<(String, String)> {
        vec![
            ("ALPHA1".into(), g1_line(&self.alpha1)),
            ("BETA2".into(), g2_line(&self.beta2)),
            ("GAMMA2".into(), g2_line(&self.gamma2)),
            ("DELTA2".into(), g2_line(&self.delta2)),
        ]
    }
}

impl ProofReport {
    pub fn lines(&self) -> Vec<(String, String)> {
        let mut out = vec![
            ("A1".into(), g1_line(&self.a1)),
            ("B2".into(), g2_line(&self.b2)),
            ("C1".into(), g1_line(&self.c1)),
        ];
        for (i, x) in self.inputs.iter().enumerate() {
            out.push((format!("x{}", i + 1), x.clone()));
        }
        out
    }
}

fn g1_line(p: &G1Hex) -> String {
    format!("({}, {})", p.0[0], p.0[1])
}

fn g2_line(p: &G2Hex) -> String {
    format!("(({}, {}), ({}, {}))", p.0[0][0], p.0[0][1], p.0[1][0], p.0[1][1])
}
