// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Pairing equation evaluator.
//!
//! Checks
//!
//! ```text
//! e(-A1, B2) · e(alpha1, beta2) · e(X1, gamma2) · e(C1, delta2) == 1
//! ```
//!
//! Exactly one operand of exactly one term is negated: `A1`. Every point is
//! already subgroup-checked by its type, so no pairing ever runs on an
//! unchecked point.

use core::fmt;
use core::str::FromStr;

use g16_types::{multi_pairing, pairing, G16Error, G16Result, G1Point, G2Point, GtElement, Proof, VerificationKey};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// How the four-term product is computed. Both give the same answer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PairingMode {
    /// One multi-Miller loop and a single final exponentiation.
    #[default]
    Combined,
    /// Four full pairings multiplied in GT.
    Separated,
}

impl FromStr for PairingMode {
    type Err = G16Error;

    fn from_str(s: &str) -> G16Result<Self> {
        match s {
            "combined" => Ok(PairingMode::Combined),
            "separated" => Ok(PairingMode::Separated),
            other => Err(G16Error::Encoding(format!(
                "pairing mode must be 'combined' or 'separated', got {other:?}"
            ))),
        }
    }
}

impl fmt::Display for PairingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PairingMode::Combined => f.write_str("combined"),
            PairingMode::Separated => f.write_str("separated"),
        }
    }
}

/// The four `(G1, G2)` operands, in equation order.
pub fn equation_terms(proof: &Proof, x1: &G1Point, vk: &VerificationKey) -> [(G1Point, G2Point); 4] {
    [
        (-proof.a, proof.b),
        (vk.alpha1, vk.beta2),
        (*x1, vk.gamma2),
        (proof.c, vk.delta2),
    ]
}

/// Combined form: true iff the multi-pairing product is the GT identity.
pub fn check(proof: &Proof, x1: &G1Point, vk: &VerificationKey) -> G16Result<bool> {
    let product = multi_pairing(&equation_terms(proof, x1, vk))?;
    let holds = product.is_identity();
    trace!(holds, "combined pairing check");
    Ok(holds)
}

/// Separated form: four pairings, three GT multiplications.
pub fn check_separated(proof: &Proof, x1: &G1Point, vk: &VerificationKey) -> G16Result<bool> {
    let product = equation_terms(proof, x1, vk)
        .iter()
        .map(|(p, q)| pairing(p, q))
        .fold(GtElement::identity(), |acc, term| acc.mul(&term));
    let holds = product.is_identity();
    trace!(holds, "separated pairing check");
    Ok(holds)
}

pub fn check_with(mode: PairingMode, proof: &Proof, x1: &G1Point, vk: &VerificationKey) -> G16Result<bool> {
    match mode {
        PairingMode::Combined => check(proof, x1, vk),
        PairingMode::Separated => check_separated(proof, x1, vk),
    }
}
