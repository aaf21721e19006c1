// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Conversion between [`KeyFile`] and a ready [`Verifier`].

use g16_types::files::{g1_to_hex, parse_hex_words, BasisFile, InputLayoutFile, KeyFile};
use g16_types::{G16Result, VerificationKey};
use tracing::debug;

use crate::folder::{InputBasis, InputLayout, PublicInputFolder};
use crate::verifier::Verifier;

impl Verifier {
    /// Decode and validate every point in the file.
    pub fn from_key_file(file: &KeyFile) -> G16Result<Self> {
        let vk = VerificationKey::decode(&parse_hex_words(&file.vk)?)?;
        let layout: InputLayout = file.inputs.signs.parse()?;
        let basis = match file.inputs.basis_points()? {
            None => InputBasis::Generator,
            Some((constant, coefficients)) => InputBasis::Circuit {
                constant,
                coefficients,
            },
        };
        let folder = PublicInputFolder::new(layout, basis)?;
        debug!(arity = folder.arity(), "loaded verification key");
        Ok(Self::new(vk, folder))
    }

    pub fn to_key_file(&self) -> KeyFile {
        let basis = match self.folder().basis() {
            InputBasis::Generator => None,
            InputBasis::Circuit {
                constant,
                coefficients,
            } => Some(BasisFile {
                constant: g1_to_hex(constant),
                coefficients: coefficients.iter().map(g1_to_hex).collect(),
            }),
        };
        KeyFile {
            vk: self.vk().to_hex_words(),
            inputs: InputLayoutFile {
                signs: self.folder().layout().to_string(),
                basis,
            },
        }
    }
}
