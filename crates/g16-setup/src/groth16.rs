// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Import arkworks Groth16 artifacts.
//!
//! arkworks checks `e(A, B) = e(alpha, beta)·e(L, gamma)·e(C, delta)`, which
//! is the same equation with `A` moved across, so its `delta_g2` is taken
//! as-is (no negation) and `gamma_abc_g1` becomes the circuit input basis.
//! Every point is re-validated on the way in.

use ark_bn254::Bn254;
use g16_types::{G16Error, G16Result, G1Point, G2Point, Proof, VerificationKey};
use g16_verifier::{PublicInputFolder, Verifier};

pub fn import_key(vk: &ark_groth16::VerifyingKey<Bn254>) -> G16Result<Verifier> {
    let (ic0, ic) = vk
        .gamma_abc_g1
        .split_first()
        .ok_or_else(|| G16Error::Encoding("groth16 key has no IC points".into()))?;
    let key = VerificationKey::new(
        G1Point::try_from(vk.alpha_g1)?,
        G2Point::try_from(vk.beta_g2)?,
        G2Point::try_from(vk.gamma_g2)?,
        G2Point::try_from(vk.delta_g2)?,
    );
    let coefficients = ic
        .iter()
        .map(|p| G1Point::try_from(*p))
        .collect::<G16Result<Vec<_>>>()?;
    let folder = PublicInputFolder::circuit(G1Point::try_from(*ic0)?, coefficients);
    Ok(Verifier::new(key, folder))
}

pub fn import_proof(proof: &ark_groth16::Proof<Bn254>) -> G16Result<Proof> {
    Ok(Proof::new(
        G1Point::try_from(proof.a)?,
        G2Point::try_from(proof.b)?,
        G1Point::try_from(proof.c)?,
    ))
}
