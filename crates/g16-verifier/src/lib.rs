// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! g16-verifier: Groth16-style proof verification over BN254
//!
//! The runtime core. Offline key construction lives in `g16-setup` and is
//! never linked here.

mod constants;
mod evaluator;
mod folder;
mod keyfile;
mod verifier;

pub use constants::*;
pub use evaluator::*;
pub use folder::*;
pub use verifier::*;
