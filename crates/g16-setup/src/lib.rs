// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! # g16-setup
//!
//! Offline, one-time tooling that sits next to the trusted setup. Nothing in
//! here runs on the verification path.
//!
//! | Module | Purpose |
//! |---|---|
//! | [`setup`] | `build_verification_key` from setup scalars |
//! | [`fixture`] | algebraic proof fixtures and the reference demo |
//! | [`groth16`] | import arkworks Groth16 keys and proofs |
//! | [`report`] | printable constants in precompile coordinate order |

pub mod fixture;
pub mod groth16;
pub mod report;
pub mod setup;

pub use fixture::{build_proof, demo_fixture, DemoFixture, ProofScalars};
pub use groth16::{import_key, import_proof};
pub use setup::{build_verification_key, SetupScalars};
