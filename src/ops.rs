//! Operator bindings for [`Vector`].
//!
//! Each operator is a thin wrapper over the named method on `Vector`.
//! Operators that need matching dimensions return `Result`, so
//! `(&a + &b)?` reads the same as `a.add(&b)?`.

use crate::{vector::Vector, Result};
use std::ops::{Add, Index, IndexMut, Mul, MulAssign, Neg, Sub};

/// Right-hand side of [`Vector::multiply`].
#[derive(Debug, Clone, Copy)]
pub enum Operand<'a> {
    Scalar(f64),
    Vector(&'a Vector),
}

impl From<f64> for Operand<'_> {
    fn from(scalar: f64) -> Self {
        Operand::Scalar(scalar)
    }
}

impl From<i32> for Operand<'_> {
    fn from(scalar: i32) -> Self {
        Operand::Scalar(scalar.into())
    }
}

impl<'a> From<&'a Vector> for Operand<'a> {
    fn from(vector: &'a Vector) -> Self {
        Operand::Vector(vector)
    }
}

/// Result of [`Vector::multiply`]: a dot product or a scaled vector.
#[derive(Debug, Clone, PartialEq)]
pub enum Product {
    Scalar(f64),
    Vector(Vector),
}

impl Product {
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Product::Scalar(s) => Some(*s),
            Product::Vector(_) => None,
        }
    }

    pub fn into_vector(self) -> Option<Vector> {
        match self {
            Product::Vector(v) => Some(v),
            Product::Scalar(_) => None,
        }
    }
}

impl Vector {
    /// Vector times vector is the dot product, vector times scalar scales
    /// every component.
    pub fn multiply<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Product> {
        match rhs.into() {
            Operand::Scalar(s) => Ok(Product::Vector(self.scalar_multiply(s))),
            Operand::Vector(other) => self.dot(other).map(Product::Scalar),
        }
    }
}

impl Add<&Vector> for &Vector {
    type Output = Result<Vector>;

    fn add(self, rhs: &Vector) -> Self::Output {
        Vector::add(self, rhs)
    }
}

impl Sub<&Vector> for &Vector {
    type Output = Result<Vector>;

    fn sub(self, rhs: &Vector) -> Self::Output {
        Vector::sub(self, rhs)
    }
}

// Dot product
impl Mul<&Vector> for &Vector {
    type Output = Result<f64>;

    fn mul(self, rhs: &Vector) -> Self::Output {
        self.dot(rhs)
    }
}

impl Mul for Vector {
    type Output = Result<f64>;

    fn mul(self, rhs: Vector) -> Self::Output {
        self.dot(&rhs)
    }
}

impl Mul<f64> for &Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        self.scalar_multiply(rhs)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        self.scalar_multiply(rhs)
    }
}

impl Mul<&Vector> for f64 {
    type Output = Vector;

    fn mul(self, rhs: &Vector) -> Vector {
        rhs.scalar_multiply(self)
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;

    fn mul(self, rhs: Vector) -> Vector {
        rhs.scalar_multiply(self)
    }
}

impl MulAssign<f64> for Vector {
    fn mul_assign(&mut self, rhs: f64) {
        *self = self.scalar_multiply(rhs);
    }
}

impl Neg for &Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector::neg(self)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector::neg(&self)
    }
}

/// Panics when `index` is out of range; use [`Vector::get`] for a checked read.
impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.as_array()[index]
    }
}

impl IndexMut<usize> for Vector {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        &mut self.as_array_mut()[index]
    }
}
