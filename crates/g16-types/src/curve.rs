// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Arithmetic primitive boundary over BN254.
//!
//! [`G1Point`] and [`G2Point`] can only be built through validating
//! constructors, so every point that reaches a pairing is on the curve and in
//! the prime-order subgroup. Group operations on validated points stay in the
//! subgroup and need no re-check.
//!
//! # Coordinate order
//!
//! Flat encodings use the EVM precompile order. G1 is `[x, y]`. G2 is
//! `[x_im, x_re, y_im, y_re]`, while arkworks stores `Fq2` as
//! `c0 + c1·u`, i.e. `c0 = re`, `c1 = im`.

use core::ops::{Add, Neg};

use ark_bn254::{Bn254, Fq, Fq12, Fq2, Fr, G1Affine, G1Projective, G2Affine};
use ark_ec::pairing::Pairing;
use ark_ec::{AffineRepr, CurveGroup, VariableBaseMSM};
use ark_ff::{One, Zero};

use crate::error::{G16Error, G16Result, Group};
use crate::word::{fq_from_word, fq_to_word, Word};

/// Element of G1, validated on construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct G1Point(G1Affine);

/// Element of G2, validated on construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct G2Point(G2Affine);

/// Element of the target group GT (a subgroup of `Fq12^*`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GtElement(Fq12);

fn coordinate(group: Group, word: &Word) -> G16Result<Fq> {
    fq_from_word(word).ok_or(G16Error::MalformedPoint {
        group,
        reason: "coordinate not reduced modulo the base field",
    })
}

impl G1Point {
    pub const WORDS: usize = 2;

    pub fn generator() -> Self {
        Self(G1Affine::generator())
    }

    /// The point at infinity.
    pub fn identity() -> Self {
        Self(G1Affine::zero())
    }

    /// Build from affine coordinates. `(0, 0)` is the point at infinity.
    pub fn new(x: Fq, y: Fq) -> G16Result<Self> {
        if x.is_zero() && y.is_zero() {
            return Ok(Self::identity());
        }
        Self::from_affine(G1Affine::new_unchecked(x, y))
    }

    pub fn from_affine(point: G1Affine) -> G16Result<Self> {
        if point.is_zero() {
            return Ok(Self(point));
        }
        if !point.is_on_curve() {
            return Err(G16Error::MalformedPoint {
                group: Group::G1,
                reason: "coordinates do not satisfy the curve equation",
            });
        }
        // cofactor is 1 on BN254 G1, kept for parity with G2
        if !point.is_in_correct_subgroup_assuming_on_curve() {
            return Err(G16Error::SubgroupMembership(Group::G1));
        }
        Ok(Self(point))
    }

    pub fn from_words(words: &[Word; 2]) -> G16Result<Self> {
        let x = coordinate(Group::G1, &words[0])?;
        let y = coordinate(Group::G1, &words[1])?;
        Self::new(x, y)
    }

    pub fn to_words(&self) -> [Word; 2] {
        let (x, y) = self.coordinates();
        [fq_to_word(&x), fq_to_word(&y)]
    }

    /// `(x, y)`, or `(0, 0)` for the point at infinity.
    pub fn coordinates(&self) -> (Fq, Fq) {
        if self.0.is_zero() {
            (Fq::zero(), Fq::zero())
        } else {
            (self.0.x, self.0.y)
        }
    }

    pub fn is_identity(&self) -> bool {
        self.0.is_zero()
    }

    pub fn as_affine(&self) -> &G1Affine {
        &self.0
    }

    pub fn mul_scalar(&self, scalar: &Fr) -> Self {
        Self((self.0 * scalar).into_affine())
    }

    /// `sum(bases[i] * scalars[i])`.
    pub fn msm(bases: &[G1Point], scalars: &[Fr]) -> G16Result<Self> {
        if bases.is_empty() && scalars.is_empty() {
            return Ok(Self::identity());
        }
        let affine: Vec<G1Affine> = bases.iter().map(|p| p.0).collect();
        let sum = G1Projective::msm(&affine, scalars)
            .map_err(|_| G16Error::ArithmeticPrimitive("msm over mismatched base/scalar lengths"))?;
        Ok(Self(sum.into_affine()))
    }
}

impl Neg for G1Point {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Add for G1Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self((self.0 + rhs.0).into_affine())
    }
}

impl TryFrom<G1Affine> for G1Point {
    type Error = G16Error;

    fn try_from(point: G1Affine) -> G16Result<Self> {
        Self::from_affine(point)
    }
}

impl G2Point {
    pub const WORDS: usize = 4;

    pub fn generator() -> Self {
        Self(G2Affine::generator())
    }

    pub fn identity() -> Self {
        Self(G2Affine::zero())
    }

    /// Build from affine coordinates. `(0, 0)` is the point at infinity.
    pub fn new(x: Fq2, y: Fq2) -> G16Result<Self> {
        if x.is_zero() && y.is_zero() {
            return Ok(Self::identity());
        }
        Self::from_affine(G2Affine::new_unchecked(x, y))
    }

    pub fn from_affine(point: G2Affine) -> G16Result<Self> {
        if point.is_zero() {
            return Ok(Self(point));
        }
        if !point.is_on_curve() {
            return Err(G16Error::MalformedPoint {
                group: Group::G2,
                reason: "coordinates do not satisfy the twist equation",
            });
        }
        if !point.is_in_correct_subgroup_assuming_on_curve() {
            return Err(G16Error::SubgroupMembership(Group::G2));
        }
        Ok(Self(point))
    }

    /// Decode `[x_im, x_re, y_im, y_re]`.
    pub fn from_words(words: &[Word; 4]) -> G16Result<Self> {
        let x_im = coordinate(Group::G2, &words[0])?;
        let x_re = coordinate(Group::G2, &words[1])?;
        let y_im = coordinate(Group::G2, &words[2])?;
        let y_re = coordinate(Group::G2, &words[3])?;
        Self::new(Fq2::new(x_re, x_im), Fq2::new(y_re, y_im))
    }

    /// Encode as `[x_im, x_re, y_im, y_re]`.
    pub fn to_words(&self) -> [Word; 4] {
        let (x, y) = self.coordinates();
        [
            fq_to_word(&x.c1),
            fq_to_word(&x.c0),
            fq_to_word(&y.c1),
            fq_to_word(&y.c0),
        ]
    }

    pub fn coordinates(&self) -> (Fq2, Fq2) {
        if self.0.is_zero() {
            (Fq2::zero(), Fq2::zero())
        } else {
            (self.0.x, self.0.y)
        }
    }

    pub fn is_identity(&self) -> bool {
        self.0.is_zero()
    }

    pub fn as_affine(&self) -> &G2Affine {
        &self.0
    }

    pub fn mul_scalar(&self, scalar: &Fr) -> Self {
        Self((self.0 * scalar).into_affine())
    }
}

impl Neg for G2Point {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Add for G2Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self((self.0 + rhs.0).into_affine())
    }
}

impl TryFrom<G2Affine> for G2Point {
    type Error = G16Error;

    fn try_from(point: G2Affine) -> G16Result<Self> {
        Self::from_affine(point)
    }
}

impl GtElement {
    /// Multiplicative identity of GT.
    pub fn identity() -> Self {
        Self(Fq12::one())
    }

    pub fn is_identity(&self) -> bool {
        self.0.is_one()
    }

    /// Group operation of GT (field multiplication in `Fq12`).
    pub fn mul(&self, rhs: &Self) -> Self {
        Self(self.0 * rhs.0)
    }

    pub fn as_fq12(&self) -> &Fq12 {
        &self.0
    }
}

/// Optimal ate pairing `e(p, q)`.
pub fn pairing(p: &G1Point, q: &G2Point) -> GtElement {
    GtElement(Bn254::pairing(p.0, q.0).0)
}

/// Product of pairings over all pairs, with a single shared final
/// exponentiation.
pub fn multi_pairing(pairs: &[(G1Point, G2Point)]) -> G16Result<GtElement> {
    let miller = Bn254::multi_miller_loop(
        pairs.iter().map(|(p, _)| p.0),
        pairs.iter().map(|(_, q)| q.0),
    );
    let out = Bn254::final_exponentiation(miller)
        .ok_or(G16Error::ArithmeticPrimitive("final exponentiation of a zero miller loop output"))?;
    Ok(GtElement(out.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::word::word_from_hex;
    use ark_ff::UniformRand;
    use ark_std::rand::{rngs::StdRng, SeedableRng};

    // EIP-197 G2 generator, precompile order
    const G2_WORDS: [&str; 4] = [
        "0x198e9393920d483a7260bfb731fb5d25f1aa493335a9e71297e485b7aef312c2",
        "0x1800deef121f1e76426a00665e5c4479674322d4f75edadd46debd5cd992f6ed",
        "0x090689d0585ff075ec9e99ad690c3395bc4b313370b38ef355acdadcd122975b",
        "0x12c85ea5db8c6deb4aab71808dcb408fe3d1e7690c43d37b4ce6cc0166fa7daa",
    ];

    fn words<const N: usize>(hex: [&str; N]) -> [Word; N] {
        hex.map(|h| word_from_hex(h).unwrap())
    }

    #[test]
    fn g1_generator_is_one_two() {
        let w = G1Point::generator().to_words();
        assert_eq!(w, words(["0x1", "0x2"]));
    }

    #[test]
    fn g2_generator_uses_im_re_order() {
        assert_eq!(G2Point::generator().to_words(), words(G2_WORDS));
        assert_eq!(G2Point::from_words(&words(G2_WORDS)).unwrap(), G2Point::generator());
    }

    #[test]
    fn swapped_g2_components_are_rejected() {
        let w = words(G2_WORDS);
        let swapped = [w[1], w[0], w[3], w[2]];
        assert!(matches!(
            G2Point::from_words(&swapped),
            Err(G16Error::MalformedPoint { group: Group::G2, .. })
        ));
    }

    #[test]
    fn g1_off_curve_is_malformed() {
        let err = G1Point::from_words(&words(["0x1", "0x3"])).unwrap_err();
        assert!(matches!(err, G16Error::MalformedPoint { group: Group::G1, .. }));
    }

    #[test]
    fn coordinate_above_modulus_is_malformed() {
        let p = "0x30644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd47";
        let err = G1Point::from_words(&words([p, "0x2"])).unwrap_err();
        assert!(matches!(err, G16Error::MalformedPoint { group: Group::G1, .. }));
    }

    #[test]
    fn zero_words_decode_to_identity() {
        assert!(G1Point::from_words(&words(["0x0", "0x0"])).unwrap().is_identity());
        assert!(G2Point::from_words(&words(["0x0"; 4])).unwrap().is_identity());
        assert_eq!(G1Point::identity().to_words(), words(["0x0", "0x0"]));
    }

    #[test]
    fn g2_twist_point_outside_subgroup_is_rejected() {
        // walk x until the twist has a point there; BN254's G2 cofactor is huge,
        // so such a point is outside the r-torsion
        let point = (1u64..)
            .find_map(|i| G2Affine::get_point_from_x_unchecked(Fq2::new(Fq::from(i), Fq::one()), false))
            .unwrap();
        assert!(point.is_on_curve());
        assert_eq!(
            G2Point::from_affine(point),
            Err(G16Error::SubgroupMembership(Group::G2))
        );

        let (x, y) = (point.x, point.y);
        let encoded = [
            fq_to_word(&x.c1),
            fq_to_word(&x.c0),
            fq_to_word(&y.c1),
            fq_to_word(&y.c0),
        ];
        assert_eq!(
            G2Point::from_words(&encoded),
            Err(G16Error::SubgroupMembership(Group::G2))
        );
    }

    #[test]
    fn negation_cancels() {
        let mut rng = StdRng::seed_from_u64(7);
        let p = G1Point::generator().mul_scalar(&Fr::rand(&mut rng));
        assert!((p + -p).is_identity());
        let q = G2Point::generator().mul_scalar(&Fr::rand(&mut rng));
        assert!((q + -q).is_identity());
    }

    #[test]
    fn msm_matches_naive_sum() {
        let mut rng = StdRng::seed_from_u64(9);
        let bases: Vec<G1Point> = (0..3)
            .map(|_| G1Point::generator().mul_scalar(&Fr::rand(&mut rng)))
            .collect();
        let scalars: Vec<Fr> = (0..3).map(|_| Fr::rand(&mut rng)).collect();
        let naive = bases
            .iter()
            .zip(&scalars)
            .fold(G1Point::identity(), |acc, (b, s)| acc + b.mul_scalar(s));
        assert_eq!(G1Point::msm(&bases, &scalars).unwrap(), naive);
    }

    #[test]
    fn msm_length_mismatch_is_primitive_failure() {
        let err = G1Point::msm(&[G1Point::generator()], &[]).unwrap_err();
        assert!(matches!(err, G16Error::ArithmeticPrimitive(_)));
    }

    #[test]
    fn pairing_is_bilinear() {
        let a = Fr::from(6u64);
        let b = Fr::from(7u64);
        let lhs = pairing(&G1Point::generator().mul_scalar(&a), &G2Point::generator().mul_scalar(&b));
        let rhs = pairing(&G1Point::generator().mul_scalar(&(a * b)), &G2Point::generator());
        assert_eq!(lhs, rhs);
        assert!(!lhs.is_identity());
    }

    #[test]
    fn multi_pairing_matches_product() {
        let g1 = G1Point::generator();
        let g2 = G2Point::generator();
        let pairs = [(g1, g2), (-g1, g2)];
        let combined = multi_pairing(&pairs).unwrap();
        let separate = pairing(&g1, &g2).mul(&pairing(&-g1, &g2));
        assert_eq!(combined, separate);
        assert!(combined.is_identity());
    }
}
