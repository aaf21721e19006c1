// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Typed errors for decoding, validation and verification.
//!
//! A malformed input is always an `Err`; a well-formed proof that fails the
//! pairing equation is `Ok(false)`. Callers can therefore tell a sound
//! rejection apart from garbage input.

use core::fmt;

/// Source group a point was supplied for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Group {
    G1,
    G2,
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Group::G1 => f.write_str("G1"),
            Group::G2 => f.write_str("G2"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum G16Error {
    #[error("malformed {group} point: {reason}")]
    MalformedPoint { group: Group, reason: &'static str },

    #[error("{0} point is on the curve but not in the prime-order subgroup")]
    SubgroupMembership(Group),

    #[error("scalar not reduced modulo the group order")]
    ScalarRange,

    #[error("expected {expected} public inputs, got {got}")]
    InputArity { expected: usize, got: usize },

    #[error("arithmetic primitive failure: {0}")]
    ArithmeticPrimitive(&'static str),

    #[error("encoding: {0}")]
    Encoding(String),
}

pub type G16Result<T> = Result<T, G16Error>;
