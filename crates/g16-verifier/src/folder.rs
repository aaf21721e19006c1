// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Public-input folder: the MSM that turns the public scalars into the single
//! G1 point `X1` paired with `gamma2`.
//!
//! `X1 = IC0 + sum(sign_i * x_i * IC_i)`. In the single-generator scheme
//! `IC0` is the identity and every `IC_i` is the G1 generator.
//!
//! A negative slot negates the point contribution. Passing `r - k` into a
//! negative slot is not the same as passing `k`: the point gets negated on top
//! of the already negated scalar. Callers holding a pre-negated scalar must
//! use a positive slot instead.

use core::fmt;
use core::str::FromStr;

use g16_types::{G16Error, G16Result, G1Point, Scalar};
use tracing::trace;

/// Sign of one public-input slot in the circuit layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputSign {
    Positive,
    Negative,
}

impl InputSign {
    pub fn as_char(self) -> char {
        match self {
            InputSign::Positive => '+',
            InputSign::Negative => '-',
        }
    }
}

/// Ordered slot signs, written as e.g. `"++-"`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputLayout(Vec<InputSign>);

impl InputLayout {
    pub fn new(signs: Vec<InputSign>) -> Self {
        Self(signs)
    }

    /// `n` positive slots.
    pub fn positive(n: usize) -> Self {
        Self(vec![InputSign::Positive; n])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn signs(&self) -> &[InputSign] {
        &self.0
    }
}

impl FromStr for InputLayout {
    type Err = G16Error;

    fn from_str(s: &str) -> G16Result<Self> {
        s.chars()
            .map(|c| match c {
                '+' => Ok(InputSign::Positive),
                '-' => Ok(InputSign::Negative),
                other => Err(G16Error::Encoding(format!("input sign must be '+' or '-', got {other:?}"))),
            })
            .collect::<G16Result<Vec<_>>>()
            .map(Self)
    }
}

impl fmt::Display for InputLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|s| write!(f, "{}", s.as_char()))
    }
}

/// Points the public inputs are multiplied against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputBasis {
    /// Every input is paired with the G1 generator, no constant term.
    Generator,
    /// Circuit-specific Groth16 `IC` points.
    Circuit {
        constant: G1Point,
        coefficients: Vec<G1Point>,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicInputFolder {
    layout: InputLayout,
    basis: InputBasis,
}

impl PublicInputFolder {
    pub fn new(layout: InputLayout, basis: InputBasis) -> G16Result<Self> {
        if let InputBasis::Circuit { coefficients, .. } = &basis {
            if coefficients.len() != layout.len() {
                return Err(G16Error::InputArity {
                    expected: layout.len(),
                    got: coefficients.len(),
                });
            }
        }
        Ok(Self { layout, basis })
    }

    /// Single-generator scheme with the given slot signs.
    pub fn generator(layout: InputLayout) -> Self {
        Self {
            layout,
            basis: InputBasis::Generator,
        }
    }

    /// Circuit basis with all slots positive, the plain Groth16 case.
    pub fn circuit(constant: G1Point, coefficients: Vec<G1Point>) -> Self {
        Self {
            layout: InputLayout::positive(coefficients.len()),
            basis: InputBasis::Circuit {
                constant,
                coefficients,
            },
        }
    }

    pub fn arity(&self) -> usize {
        self.layout.len()
    }

    pub fn layout(&self) -> &InputLayout {
        &self.layout
    }

    pub fn basis(&self) -> &InputBasis {
        &self.basis
    }

    /// Fold the inputs into `X1`. An empty layout folds to the identity (or
    /// to `IC0` for a circuit basis).
    pub fn fold(&self, inputs: &[Scalar]) -> G16Result<G1Point> {
        if inputs.len() != self.arity() {
            return Err(G16Error::InputArity {
                expected: self.arity(),
                got: inputs.len(),
            });
        }

        let apply_sign = |base: G1Point, sign: &InputSign| match sign {
            InputSign::Positive => base,
            InputSign::Negative => -base,
        };

        // negate the base, never the scalar: x * (-P) == -(x * P)
        let (constant, signed): (G1Point, Vec<G1Point>) = match &self.basis {
            InputBasis::Generator => (
                G1Point::identity(),
                self.layout.signs().iter().map(|sign| apply_sign(G1Point::generator(), sign)).collect(),
            ),
            InputBasis::Circuit {
                constant,
                coefficients,
            } => (
                *constant,
                coefficients
                    .iter()
                    .zip(self.layout.signs())
                    .map(|(base, sign)| apply_sign(*base, sign))
                    .collect(),
            ),
        };

        let sum = G1Point::msm(&signed, inputs)?;
        let x1 = constant + sum;
        trace!(layout = %self.layout, identity = x1.is_identity(), "folded public inputs");
        Ok(x1)
    }
}
