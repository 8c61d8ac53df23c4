//! # Vectors
//!
//! Plain 2D and 3D vector types used by `sysevent` event payloads: window sizes, pointer and
//! touch positions, sensor readings.
//!
//! The vector types are generic over their component type, `T`, so that sizes can stay unsigned
//! ([`Vector2u`]), positions can be signed ([`Vector2i`]) and sensor readings can be
//! floating-point ([`Vector3f`]). If `T` is a floating-point type, please do not cast the
//! components with `as {int}`. Doing so truncates the fractional part rather than rounding to the
//! nearest integer. Use the provided `cast` function or the tuple/array conversions, which round
//! properly.
//!
//! ## Cargo Features
//!
//! This crate provides the following Cargo features:
//!
//! * `serde`: Enables serialization/deserialization of the vector types with [Serde](https://crates.io/crates/serde).
//! * `mint`: Enables mint (math interoperability standard types) conversions.

#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg_hide), doc(cfg_hide(doc, docsrs)))]
#![forbid(unsafe_code)]

use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A vector component type.
///
/// Conversions between component types go through `f64`; integer targets round to the nearest
/// value instead of truncating.
pub trait Scalar: Copy + Into<f64> {
    fn from_f64(f: f64) -> Self;
    fn cast<S: Scalar>(self) -> S {
        S::from_f64(self.into())
    }
}

impl Scalar for u8 {
    fn from_f64(f: f64) -> Self {
        f.round() as u8
    }
}
impl Scalar for u16 {
    fn from_f64(f: f64) -> Self {
        f.round() as u16
    }
}
impl Scalar for u32 {
    fn from_f64(f: f64) -> Self {
        f.round() as u32
    }
}
impl Scalar for i8 {
    fn from_f64(f: f64) -> Self {
        f.round() as i8
    }
}
impl Scalar for i16 {
    fn from_f64(f: f64) -> Self {
        f.round() as i16
    }
}
impl Scalar for i32 {
    fn from_f64(f: f64) -> Self {
        f.round() as i32
    }
}
impl Scalar for f32 {
    fn from_f64(f: f64) -> Self {
        f as f32
    }
}
impl Scalar for f64 {
    fn from_f64(f: f64) -> Self {
        f
    }
}

/// A two-dimensional vector.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Default, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vector2<T> {
    pub x: T,
    pub y: T,
}

/// Unsigned two-dimensional vector, used for sizes.
pub type Vector2u = Vector2<u32>;
/// Signed two-dimensional vector, used for positions.
pub type Vector2i = Vector2<i32>;
/// Floating-point two-dimensional vector.
pub type Vector2f = Vector2<f32>;

impl<T> Vector2<T> {
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Vector2 { x, y }
    }
}

impl<T: Scalar> Vector2<T> {
    #[inline]
    pub fn cast<S: Scalar>(&self) -> Vector2<S> {
        Vector2 { x: self.x.cast(), y: self.y.cast() }
    }

    /// Extends the vector with a `z` component.
    #[inline]
    pub fn extend(self, z: T) -> Vector3<T> {
        Vector3::new(self.x, self.y, z)
    }
}

impl<T: Scalar, S: Scalar> From<(S, S)> for Vector2<T> {
    fn from((x, y): (S, S)) -> Vector2<T> {
        Vector2::new(x.cast(), y.cast())
    }
}

impl<T: Scalar, S: Scalar> From<Vector2<T>> for (S, S) {
    fn from(v: Vector2<T>) -> (S, S) {
        (v.x.cast(), v.y.cast())
    }
}

impl<T: Scalar, S: Scalar> From<[S; 2]> for Vector2<T> {
    fn from([x, y]: [S; 2]) -> Vector2<T> {
        Vector2::new(x.cast(), y.cast())
    }
}

impl<T: Scalar, S: Scalar> From<Vector2<T>> for [S; 2] {
    fn from(v: Vector2<T>) -> [S; 2] {
        [v.x.cast(), v.y.cast()]
    }
}

impl<T: Add<Output = T>> Add for Vector2<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Vector2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: AddAssign> AddAssign for Vector2<T> {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl<T: Sub<Output = T>> Sub for Vector2<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: SubAssign> SubAssign for Vector2<T> {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl<T: Mul<Output = T> + Copy> Mul<T> for Vector2<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Vector2::new(self.x * rhs, self.y * rhs)
    }
}

impl<T: Neg<Output = T>> Neg for Vector2<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Vector2::new(-self.x, -self.y)
    }
}

#[cfg(feature = "mint")]
impl<T> From<mint::Vector2<T>> for Vector2<T> {
    fn from(v: mint::Vector2<T>) -> Self {
        Self::new(v.x, v.y)
    }
}

#[cfg(feature = "mint")]
impl<T> From<Vector2<T>> for mint::Vector2<T> {
    fn from(v: Vector2<T>) -> Self {
        mint::Vector2 { x: v.x, y: v.y }
    }
}

#[cfg(feature = "mint")]
impl<T> From<mint::Point2<T>> for Vector2<T> {
    fn from(p: mint::Point2<T>) -> Self {
        Self::new(p.x, p.y)
    }
}

#[cfg(feature = "mint")]
impl<T> From<Vector2<T>> for mint::Point2<T> {
    fn from(v: Vector2<T>) -> Self {
        mint::Point2 { x: v.x, y: v.y }
    }
}

/// A three-dimensional vector.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Default, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vector3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

/// Floating-point three-dimensional vector, used for sensor readings.
pub type Vector3f = Vector3<f32>;

impl<T> Vector3<T> {
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Vector3 { x, y, z }
    }
}

impl<T: Scalar> Vector3<T> {
    #[inline]
    pub fn cast<S: Scalar>(&self) -> Vector3<S> {
        Vector3 { x: self.x.cast(), y: self.y.cast(), z: self.z.cast() }
    }

    /// Drops the `z` component.
    #[inline]
    pub fn truncate(self) -> Vector2<T> {
        Vector2::new(self.x, self.y)
    }
}

impl<T: Scalar, S: Scalar> From<(S, S, S)> for Vector3<T> {
    fn from((x, y, z): (S, S, S)) -> Vector3<T> {
        Vector3::new(x.cast(), y.cast(), z.cast())
    }
}

impl<T: Scalar, S: Scalar> From<Vector3<T>> for (S, S, S) {
    fn from(v: Vector3<T>) -> (S, S, S) {
        (v.x.cast(), v.y.cast(), v.z.cast())
    }
}

impl<T: Scalar, S: Scalar> From<[S; 3]> for Vector3<T> {
    fn from([x, y, z]: [S; 3]) -> Vector3<T> {
        Vector3::new(x.cast(), y.cast(), z.cast())
    }
}

impl<T: Scalar, S: Scalar> From<Vector3<T>> for [S; 3] {
    fn from(v: Vector3<T>) -> [S; 3] {
        [v.x.cast(), v.y.cast(), v.z.cast()]
    }
}

impl<T: Add<Output = T>> Add for Vector3<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Vector3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl<T: Sub<Output = T>> Sub for Vector3<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl<T: Mul<Output = T> + Copy> Mul<T> for Vector3<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Vector3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl<T: Neg<Output = T>> Neg for Vector3<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

#[cfg(feature = "mint")]
impl<T> From<mint::Vector3<T>> for Vector3<T> {
    fn from(v: mint::Vector3<T>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

#[cfg(feature = "mint")]
impl<T> From<Vector3<T>> for mint::Vector3<T> {
    fn from(v: Vector3<T>) -> Self {
        mint::Vector3 { x: v.x, y: v.y, z: v.z }
    }
}
