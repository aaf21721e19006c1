// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! # g16-types
//!
//! Shared vocabulary for the g16 verifier: validated BN254 points, the
//! proof and verification key, the flat word codec and the error taxonomy.
//!
//! | Module | Purpose |
//! |---|---|
//! | [`curve`] | G1/G2/GT wrappers over arkworks, pairing primitives |
//! | [`word`] | 32-byte big-endian words, strict field decoding |
//! | [`proof`] | `Proof`, `PublicInputs` |
//! | [`key`] | `VerificationKey` and its 14-word encoding |
//! | [`files`] | JSON key and proof files |
//! | [`error`] | `G16Error` |

pub mod curve;
pub mod error;
pub mod files;
pub mod key;
pub mod proof;
pub mod word;

pub use curve::{multi_pairing, pairing, G1Point, G2Point, GtElement};
pub use error::{G16Error, G16Result, Group};
pub use key::VerificationKey;
pub use proof::{Proof, PublicInputs, Scalar};
pub use word::Word;
