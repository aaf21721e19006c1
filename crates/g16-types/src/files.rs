// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! JSON file formats shared by the offline setup tool (writer) and the
//! runtime CLI (reader). All numbers are hex words.

use serde::{Deserialize, Serialize};

use crate::curve::G1Point;
use crate::error::{G16Error, G16Result};
use crate::proof::{Proof, PublicInputs};
use crate::word::{word_from_hex, word_to_hex, Word};

/// Verification key plus the circuit's public-input layout.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct KeyFile {
    /// 14 words, see [`VerificationKey::encode`](crate::VerificationKey::encode)
    pub vk: Vec<String>,
    pub inputs: InputLayoutFile,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct InputLayoutFile {
    /// One `+` or `-` per public input
    pub signs: String,
    /// Circuit-specific IC points; absent for the single-generator scheme
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub basis: Option<BasisFile>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct BasisFile {
    pub constant: [String; 2],
    pub coefficients: Vec<[String; 2]>,
}

/// A proof together with the public inputs it claims.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ProofFile {
    /// 8 words, see [`Proof::to_words`]
    pub proof: Vec<String>,
    pub inputs: Vec<String>,
}

pub fn parse_hex_words<S: AsRef<str>>(hex: &[S]) -> G16Result<Vec<Word>> {
    hex.iter().map(|h| word_from_hex(h.as_ref())).collect()
}

pub fn g1_to_hex(point: &G1Point) -> [String; 2] {
    point.to_words().map(|w| word_to_hex(&w))
}

pub fn g1_from_hex(hex: &[String; 2]) -> G16Result<G1Point> {
    G1Point::from_words(&[word_from_hex(&hex[0])?, word_from_hex(&hex[1])?])
}

impl ProofFile {
    pub fn new(proof: &Proof, inputs: &PublicInputs) -> Self {
        Self {
            proof: proof.to_words().iter().map(word_to_hex).collect(),
            inputs: inputs.to_words().iter().map(word_to_hex).collect(),
        }
    }

    pub fn decode(&self) -> G16Result<(Proof, PublicInputs)> {
        let proof = Proof::from_words(&parse_hex_words(&self.proof)?)?;
        let inputs = PublicInputs::from_words(&parse_hex_words(&self.inputs)?)?;
        Ok((proof, inputs))
    }
}

impl InputLayoutFile {
    pub fn basis_points(&self) -> G16Result<Option<(G1Point, Vec<G1Point>)>> {
        let Some(basis) = &self.basis else {
            return Ok(None);
        };
        let constant = g1_from_hex(&basis.constant)?;
        let coefficients = basis
            .coefficients
            .iter()
            .map(g1_from_hex)
            .collect::<G16Result<Vec<_>>>()?;
        if coefficients.len() != self.signs.chars().count() {
            return Err(G16Error::Encoding(format!(
                "basis has {} coefficients for {} signed inputs",
                coefficients.len(),
                self.signs.chars().count()
            )));
        }
        Ok(Some((constant, coefficients)))
    }
}
