// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Built-in demo key, embedded the way a deployed verifier bakes its key in.
//!
//! Derived offline from setup scalars `alpha = beta = gamma = delta = 1`
//! with `delta2` negated: `alpha1 = G1`, `beta2 = gamma2 = G2`,
//! `delta2 = -G2`. The public-input layout is `x1 + x2 - x3`.

use g16_types::{G16Result, VerificationKey};

use crate::folder::PublicInputFolder;
use crate::verifier::Verifier;

pub const DEMO_VK: [&str; VerificationKey::WORDS] = [
    // alpha1
    "0x0000000000000000000000000000000000000000000000000000000000000001",
    "0x0000000000000000000000000000000000000000000000000000000000000002",
    // beta2
    "0x198e9393920d483a7260bfb731fb5d25f1aa493335a9e71297e485b7aef312c2",
    "0x1800deef121f1e76426a00665e5c4479674322d4f75edadd46debd5cd992f6ed",
    "0x090689d0585ff075ec9e99ad690c3395bc4b313370b38ef355acdadcd122975b",
    "0x12c85ea5db8c6deb4aab71808dcb408fe3d1e7690c43d37b4ce6cc0166fa7daa",
    // gamma2
    "0x198e9393920d483a7260bfb731fb5d25f1aa493335a9e71297e485b7aef312c2",
    "0x1800deef121f1e76426a00665e5c4479674322d4f75edadd46debd5cd992f6ed",
    "0x090689d0585ff075ec9e99ad690c3395bc4b313370b38ef355acdadcd122975b",
    "0x12c85ea5db8c6deb4aab71808dcb408fe3d1e7690c43d37b4ce6cc0166fa7daa",
    // delta2
    "0x198e9393920d483a7260bfb731fb5d25f1aa493335a9e71297e485b7aef312c2",
    "0x1800deef121f1e76426a00665e5c4479674322d4f75edadd46debd5cd992f6ed",
    "0x275dc4a288d1afb3cbb1ac09187524c7db36395df7be3b99e673b13a075a65ec",
    "0x1d9befcd05a5323e6da4d435f3b617cdb3af83285c2df711ef39c01571827f9d",
];

pub const DEMO_INPUT_SIGNS: &str = "++-";

/// Public inputs of the demo proof, as magnitudes.
pub const DEMO_INPUTS: [u64; 3] = [2, 3, 4];

pub fn demo_key() -> G16Result<VerificationKey> {
    VerificationKey::from_hex_words(&DEMO_VK)
}

pub fn demo_verifier() -> G16Result<Verifier> {
    let folder = PublicInputFolder::generator(DEMO_INPUT_SIGNS.parse()?);
    Ok(Verifier::new(demo_key()?, folder))
}

#[cfg(test)]
mod tests {
    use super::*;
    use g16_types::{G1Point, G2Point};

    #[test]
    fn demo_key_decodes_to_generators() {
        let vk = demo_key().unwrap();
        assert_eq!(vk.alpha1, G1Point::generator());
        assert_eq!(vk.beta2, G2Point::generator());
        assert_eq!(vk.gamma2, G2Point::generator());
        assert_eq!(vk.delta2, -G2Point::generator());
    }

    #[test]
    fn demo_key_hex_is_canonical() {
        let vk = demo_key().unwrap();
        assert_eq!(vk.to_hex_words(), DEMO_VK.to_vec());
    }
}
