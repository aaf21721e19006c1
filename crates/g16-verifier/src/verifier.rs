// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Verifier: fold the public inputs, then evaluate the pairing equation
//! against a fixed verification key.
//!
//! A `Verifier` holds no mutable state. Build it once at startup and share
//! it by reference (or `Arc`) across threads.

use g16_types::{G16Result, Proof, PublicInputs, VerificationKey};
use tracing::debug;

use crate::evaluator::{check_with, PairingMode};
use crate::folder::{InputLayout, PublicInputFolder};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Verifier {
    vk: VerificationKey,
    folder: PublicInputFolder,
    mode: PairingMode,
}

impl Verifier {
    pub fn new(vk: VerificationKey, folder: PublicInputFolder) -> Self {
        Self {
            vk,
            folder,
            mode: PairingMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: PairingMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn vk(&self) -> &VerificationKey {
        &self.vk
    }

    pub fn folder(&self) -> &PublicInputFolder {
        &self.folder
    }

    pub fn mode(&self) -> PairingMode {
        self.mode
    }

    /// `Ok(true)` iff the proof satisfies the pairing equation for these
    /// inputs. `Ok(false)` is a cryptographic rejection; `Err` means the
    /// inputs were not even well-formed for this circuit.
    pub fn verify(&self, proof: &Proof, inputs: &PublicInputs) -> G16Result<bool> {
        let x1 = self.folder.fold(inputs.as_slice())?;
        let valid = check_with(self.mode, proof, &x1, &self.vk)?;
        debug!(valid, inputs = inputs.len(), mode = %self.mode, "verified proof");
        Ok(valid)
    }
}

/// One-shot verification in the single-generator scheme with every input
/// slot positive.
pub fn verify(proof: &Proof, inputs: &PublicInputs, vk: &VerificationKey) -> G16Result<bool> {
    let folder = PublicInputFolder::generator(InputLayout::positive(inputs.len()));
    Verifier::new(*vk, folder).verify(proof, inputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bn254::Fr;
    use g16_types::{G16Error, G1Point, G2Point};

    fn scenario() -> (Verifier, Proof) {
        let g1 = G1Point::generator();
        let g2 = G2Point::generator();
        let vk = VerificationKey::new(g1, g2, g2, -g2);
        let folder = PublicInputFolder::generator("++-".parse().unwrap());
        (Verifier::new(vk, folder), Proof::new(g1, g2, g1))
    }

    #[test]
    fn scenario_verifies() {
        let (verifier, proof) = scenario();
        assert!(verifier.verify(&proof, &PublicInputs::from([2, 3, 4])).unwrap());
    }

    #[test]
    fn wrong_inputs_are_rejected_not_errors() {
        let (verifier, proof) = scenario();
        assert_eq!(verifier.verify(&proof, &PublicInputs::from([2, 3, 5])), Ok(false));
    }

    #[test]
    fn malformed_arity_is_an_error() {
        let (verifier, proof) = scenario();
        assert_eq!(
            verifier.verify(&proof, &PublicInputs::from([2, 3])),
            Err(G16Error::InputArity { expected: 3, got: 2 })
        );
    }

    #[test]
    fn separated_mode_agrees() {
        let (verifier, proof) = scenario();
        let separated = verifier.clone().with_mode(PairingMode::Separated);
        for inputs in [[2, 3, 4], [2, 3, 5]] {
            let inputs = PublicInputs::from(inputs);
            assert_eq!(verifier.verify(&proof, &inputs), separated.verify(&proof, &inputs));
        }
    }

    #[test]
    fn free_function_uses_positive_slots() {
        let (verifier, proof) = scenario();
        // x3 pre-negated as r - 4 in a positive slot
        let inputs = PublicInputs::new(vec![Fr::from(2u64), Fr::from(3u64), -Fr::from(4u64)]);
        assert!(verify(&proof, &inputs, verifier.vk()).unwrap());
    }
}
