// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Proof fixtures built directly from discrete logs.
//!
//! Whoever knows the setup scalars can satisfy the pairing equation for any
//! `X1` by solving for `c`. That is exactly why those scalars must be
//! destroyed after a real ceremony, and why this module is test tooling only.

use ark_bn254::Fr;
use ark_ff::Field;
use g16_types::{G1Point, G2Point, Proof, PublicInputs, Scalar, VerificationKey};
use g16_verifier::{InputLayout, InputSign, PublicInputFolder, Verifier};

use crate::setup::{build_verification_key, SetupScalars};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProofScalars {
    pub a: Scalar,
    pub b: Scalar,
    pub c: Scalar,
}

impl ProofScalars {
    pub fn from_u64(a: u64, b: u64, c: u64) -> Self {
        Self {
            a: Fr::from(a),
            b: Fr::from(b),
            c: Fr::from(c),
        }
    }

    /// Choose `c` so the proof verifies against
    /// [`build_verification_key(setup)`](build_verification_key) for a
    /// folded input with discrete log `x1`.
    ///
    /// With `delta2 = -delta·G2` the equation reads
    /// `-ab + alpha·beta + x1·gamma - c·delta = 0`. `None` if `delta` is zero.
    pub fn satisfying(setup: &SetupScalars, a: Scalar, b: Scalar, x1: Scalar) -> Option<Self> {
        let inv = setup.delta.inverse()?;
        let c = (setup.alpha * setup.beta + x1 * setup.gamma - a * b) * inv;
        Some(Self { a, b, c })
    }
}

/// `A1 = a·G1`, `B2 = b·G2`, `C1 = c·G1`.
pub fn build_proof(scalars: &ProofScalars) -> Proof {
    let g1 = G1Point::generator();
    Proof::new(
        g1.mul_scalar(&scalars.a),
        G2Point::generator().mul_scalar(&scalars.b),
        g1.mul_scalar(&scalars.c),
    )
}

/// The reference scenario: unit setup scalars, unit proof scalars, inputs
/// `x1 = 2, x2 = 3, x3 = -4` with the minus carried by the input layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DemoFixture {
    pub setup: SetupScalars,
    pub proof: ProofScalars,
    pub layout: InputLayout,
    pub inputs: [u64; 3],
}

pub fn demo_fixture() -> DemoFixture {
    DemoFixture {
        setup: SetupScalars::from_u64(1, 1, 1, 1),
        proof: ProofScalars::from_u64(1, 1, 1),
        layout: InputLayout::new(vec![InputSign::Positive, InputSign::Positive, InputSign::Negative]),
        inputs: [2, 3, 4],
    }
}

impl DemoFixture {
    pub fn vk(&self) -> VerificationKey {
        build_verification_key(&self.setup)
    }

    pub fn proof(&self) -> Proof {
        build_proof(&self.proof)
    }

    pub fn public_inputs(&self) -> PublicInputs {
        PublicInputs::from(self.inputs)
    }

    pub fn verifier(&self) -> Verifier {
        Verifier::new(self.vk(), PublicInputFolder::generator(self.layout.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_ff::UniformRand;
    use ark_std::rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn demo_fixture_verifies() {
        let demo = demo_fixture();
        assert_eq!(demo.layout.to_string(), "++-");
        assert!(demo.verifier().verify(&demo.proof(), &demo.public_inputs()).unwrap());
    }

    #[test]
    fn demo_proof_scalars_are_the_solved_ones() {
        let demo = demo_fixture();
        // X1 = (2 + 3 - 4)·G1
        let solved = ProofScalars::satisfying(&demo.setup, Fr::from(1u64), Fr::from(1u64), Fr::from(1u64)).unwrap();
        assert_eq!(solved, demo.proof);
    }

    #[test]
    fn solved_proofs_verify_for_random_inputs() {
        let mut rng = StdRng::seed_from_u64(17);
        let setup = SetupScalars::random(&mut rng);
        let inputs: Vec<Fr> = (0..3).map(|_| Fr::rand(&mut rng)).collect();
        let x1: Fr = inputs.iter().sum();
        let scalars = ProofScalars::satisfying(&setup, Fr::rand(&mut rng), Fr::rand(&mut rng), x1).unwrap();

        let verifier = Verifier::new(
            build_verification_key(&setup),
            PublicInputFolder::generator(InputLayout::positive(3)),
        );
        let proof = build_proof(&scalars);
        assert!(verifier.verify(&proof, &PublicInputs::new(inputs.clone())).unwrap());

        let mut tampered = inputs;
        tampered.swap(0, 1);
        tampered[2] += Fr::from(1u64);
        assert!(!verifier.verify(&proof, &PublicInputs::new(tampered)).unwrap());
    }

    #[test]
    fn zero_delta_cannot_be_solved() {
        let setup = SetupScalars::from_u64(1, 1, 1, 0);
        assert!(ProofScalars::satisfying(&setup, Fr::from(1u64), Fr::from(1u64), Fr::from(1u64)).is_none());
    }
}
