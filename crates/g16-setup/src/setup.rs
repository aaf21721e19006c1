// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Verification key construction from setup scalars.

use ark_bn254::Fr;
use ark_ff::UniformRand;
use ark_std::rand::Rng;
use g16_types::{G1Point, G2Point, Scalar, VerificationKey};
use tracing::trace;

/// Seeds of the four key points. Toxic waste in a real ceremony.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetupScalars {
    pub alpha: Scalar,
    pub beta: Scalar,
    pub gamma: Scalar,
    pub delta: Scalar,
}

impl SetupScalars {
    pub fn from_u64(alpha: u64, beta: u64, gamma: u64, delta: u64) -> Self {
        Self {
            alpha: Fr::from(alpha),
            beta: Fr::from(beta),
            gamma: Fr::from(gamma),
            delta: Fr::from(delta),
        }
    }

    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            alpha: Fr::rand(rng),
            beta: Fr::rand(rng),
            gamma: Fr::rand(rng),
            delta: Fr::rand(rng),
        }
    }
}

/// `alpha1 = alpha·G1`, `beta2 = beta·G2`, `gamma2 = gamma·G2`,
/// `delta2 = -(delta·G2)`.
pub fn build_verification_key(scalars: &SetupScalars) -> VerificationKey {
    trace!(?scalars, "deriving verification key");
    let g1 = G1Point::generator();
    let g2 = G2Point::generator();
    VerificationKey::new(
        g1.mul_scalar(&scalars.alpha),
        g2.mul_scalar(&scalars.beta),
        g2.mul_scalar(&scalars.gamma),
        -g2.mul_scalar(&scalars.delta),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_std::rand::{rngs::StdRng, SeedableRng};
    use g16_verifier::demo_key;

    #[test]
    fn unit_scalars_reproduce_embedded_demo_key() {
        let vk = build_verification_key(&SetupScalars::from_u64(1, 1, 1, 1));
        assert_eq!(vk, demo_key().unwrap());
    }

    #[test]
    fn delta_is_negated() {
        let vk = build_verification_key(&SetupScalars::from_u64(1, 1, 1, 5));
        assert_eq!(vk.delta2, -G2Point::generator().mul_scalar(&Fr::from(5u64)));
    }

    #[test]
    fn random_scalars_give_distinct_keys() {
        let mut rng = StdRng::seed_from_u64(42);
        let a = build_verification_key(&SetupScalars::random(&mut rng));
        let b = build_verification_key(&SetupScalars::random(&mut rng));
        assert_ne!(a, b);
    }
}
