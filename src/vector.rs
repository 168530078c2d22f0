use crate::{Result, VectorError};
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered, resizable sequence of numeric components.
///
/// The dimension is always derived from the stored components, so it can
/// never drift out of sync after `insert`/`delete`. Cloning is a deep copy.
#[derive(Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<f64>", into = "Vec<f64>")]
pub struct Vector {
    data: Array1<f64>,
}

impl Vector {
    /// Builds a vector from any sequence of integers or floats.
    pub fn new<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<f64>,
    {
        values.into_iter().map(Into::<f64>::into).collect()
    }

    /// Zero vector of the given dimension. A dimension of 0 yields an empty
    /// vector; a negative one is rejected.
    pub fn zeros(dimension: isize) -> Result<Self> {
        let dimension = usize::try_from(dimension).map_err(|_| {
            log::debug!("zeros: rejected negative dimension {}", dimension);
            VectorError::InvalidArgument(format!(
                "dimension must not be negative, got {}",
                dimension
            ))
        })?;
        Ok(Self {
            data: Array1::zeros(dimension),
        })
    }

    pub fn dimension(&self) -> usize {
        self.data.len()
    }

    /// Same as [`Vector::dimension`].
    pub fn len(&self) -> usize {
        self.dimension()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_array(&self) -> &Array1<f64> {
        &self.data
    }

    pub(crate) fn as_array_mut(&mut self) -> &mut Array1<f64> {
        &mut self.data
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.data.to_vec()
    }

    // Container protocol

    pub fn get(&self, index: usize) -> Result<f64> {
        self.data
            .get(index)
            .copied()
            .ok_or_else(|| self.out_of_bounds(index, "get"))
    }

    pub fn set(&mut self, index: usize, value: f64) -> Result<()> {
        let dimension = self.dimension();
        match self.data.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => {
                log::debug!("set: index {} outside dimension {}", index, dimension);
                Err(VectorError::OutOfBounds { index, dimension })
            }
        }
    }

    /// Removes and returns the component at `index`; later components shift
    /// down by one.
    pub fn delete(&mut self, index: usize) -> Result<f64> {
        if index >= self.dimension() {
            return Err(self.out_of_bounds(index, "delete"));
        }
        let removed = self.data[index];
        self.data = self
            .data
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != index)
            .map(|(_, &x)| x)
            .collect();
        Ok(removed)
    }

    /// Inserts `value` before `index`. `index == dimension` appends.
    pub fn insert(&mut self, index: usize, value: f64) -> Result<()> {
        if index > self.dimension() {
            return Err(self.out_of_bounds(index, "insert"));
        }
        self.data = self
            .data
            .iter()
            .take(index)
            .copied()
            .chain(std::iter::once(value))
            .chain(self.data.iter().skip(index).copied())
            .collect();
        Ok(())
    }

    /// Appends `value`. Like `insert` and `delete` this rebuilds the
    /// backing array, so it costs one allocation of the new dimension.
    pub fn push(&mut self, value: f64) {
        self.data = self
            .data
            .iter()
            .copied()
            .chain(std::iter::once(value))
            .collect();
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = f64> + ExactSizeIterator + '_ {
        self.data.iter().copied()
    }

    pub fn iter_rev(&self) -> impl Iterator<Item = f64> + ExactSizeIterator + '_ {
        self.data.iter().rev().copied()
    }

    // Axis accessors: x/r = 0, y/g = 1, z/b = 2, w/a = 3

    pub fn x(&self) -> Result<f64> {
        self.get(0)
    }

    pub fn set_x(&mut self, value: f64) -> Result<()> {
        self.set(0, value)
    }

    pub fn y(&self) -> Result<f64> {
        self.get(1)
    }

    pub fn set_y(&mut self, value: f64) -> Result<()> {
        self.set(1, value)
    }

    pub fn z(&self) -> Result<f64> {
        self.get(2)
    }

    pub fn set_z(&mut self, value: f64) -> Result<()> {
        self.set(2, value)
    }

    pub fn w(&self) -> Result<f64> {
        self.get(3)
    }

    pub fn set_w(&mut self, value: f64) -> Result<()> {
        self.set(3, value)
    }

    pub fn r(&self) -> Result<f64> {
        self.x()
    }

    pub fn set_r(&mut self, value: f64) -> Result<()> {
        self.set_x(value)
    }

    pub fn g(&self) -> Result<f64> {
        self.y()
    }

    pub fn set_g(&mut self, value: f64) -> Result<()> {
        self.set_y(value)
    }

    pub fn b(&self) -> Result<f64> {
        self.z()
    }

    pub fn set_b(&mut self, value: f64) -> Result<()> {
        self.set_z(value)
    }

    pub fn a(&self) -> Result<f64> {
        self.w()
    }

    pub fn set_a(&mut self, value: f64) -> Result<()> {
        self.set_w(value)
    }

    // Norms

    /// The p-norm `(sum |x_i|^p)^(1/p)` for `p >= 1`.
    ///
    /// `p = f64::INFINITY` gives the largest absolute component, computed
    /// directly. `p = 2` is the magnitude.
    pub fn norm(&self, p: f64) -> Result<f64> {
        if p.is_nan() || p < 1.0 {
            log::debug!("norm: rejected order {}", p);
            return Err(VectorError::InvalidArgument(format!(
                "the p-norm is not defined for p < 1, got {}",
                p
            )));
        }
        if p == f64::INFINITY {
            return Ok(self.data.iter().fold(0.0, |max, x| max.max(x.abs())));
        }
        if p == 2.0 {
            return Ok(self.magnitude());
        }
        let sum: f64 = self.data.iter().map(|x| x.abs().powf(p)).sum();
        Ok(sum.powf(1.0 / p))
    }

    pub fn magnitude(&self) -> f64 {
        self.data.dot(&self.data).sqrt()
    }

    /// Unit vector in the same direction. The zero vector comes back as is.
    pub fn normalized(&self) -> Vector {
        let magnitude = self.magnitude();
        if magnitude > 0.0 {
            Vector::from(&self.data / magnitude)
        } else {
            self.clone()
        }
    }

    // Products

    pub fn dot(&self, other: &Vector) -> Result<f64> {
        self.check_dimension(other, "dot")?;
        Ok(self.data.dot(&other.data))
    }

    /// Right-handed cross product, defined only for two 3-vectors.
    ///
    /// Operands of different dimension are a `DimensionMismatch`; matching
    /// operands of any dimension other than 3 are `UnsupportedDimension`.
    pub fn cross(&self, other: &Vector) -> Result<Vector> {
        self.check_dimension(other, "cross")?;
        if self.dimension() != 3 {
            return Err(self.unsupported("cross product"));
        }
        let (a, b) = (&self.data, &other.data);
        Ok(Vector::from([
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ]))
    }

    pub fn scalar_multiply(&self, scalar: f64) -> Vector {
        Vector::from(&self.data * scalar)
    }

    // Elementwise arithmetic

    pub fn add(&self, other: &Vector) -> Result<Vector> {
        self.check_dimension(other, "add")?;
        Ok(Vector::from(&self.data + &other.data))
    }

    pub fn sub(&self, other: &Vector) -> Result<Vector> {
        self.check_dimension(other, "sub")?;
        Ok(Vector::from(&self.data - &other.data))
    }

    /// Adds `other` into `self`. On a dimension mismatch `self` is left
    /// untouched.
    pub fn try_add_assign(&mut self, other: &Vector) -> Result<()> {
        *self = Vector::add(self, other)?;
        Ok(())
    }

    pub fn try_sub_assign(&mut self, other: &Vector) -> Result<()> {
        *self = Vector::sub(self, other)?;
        Ok(())
    }

    /// Unary plus.
    pub fn pos(&self) -> Vector {
        self.clone()
    }

    pub fn neg(&self) -> Vector {
        Vector::from(self.data.mapv(|x| -x))
    }

    // Comparison

    /// Exact componentwise equality. Unlike `==`, comparing vectors of
    /// different dimension is an error rather than `false`.
    pub fn equals(&self, other: &Vector) -> Result<bool> {
        self.check_dimension(other, "equals")?;
        Ok(self.data == other.data)
    }

    pub fn not_equals(&self, other: &Vector) -> Result<bool> {
        self.equals(other).map(|equal| !equal)
    }

    pub fn approx_eq(&self, other: &Vector, tolerance: f64) -> Result<bool> {
        self.check_dimension(other, "approx_eq")?;
        Ok(self
            .data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| (a - b).abs() <= tolerance))
    }

    // Rounding family

    /// Rounds every component to `digits` fractional digits, ties to even.
    /// Negative `digits` round to tens, hundreds and so on.
    pub fn round(&self, digits: i32) -> Vector {
        let factor = 10f64.powi(digits.saturating_abs());
        Vector::from(self.data.mapv(|x| round_component(x, digits, factor)))
    }

    pub fn floor(&self) -> Vector {
        Vector::from(self.data.mapv(f64::floor))
    }

    pub fn ceil(&self) -> Vector {
        Vector::from(self.data.mapv(f64::ceil))
    }

    /// Rounds every component toward zero.
    pub fn trunc(&self) -> Vector {
        Vector::from(self.data.mapv(f64::trunc))
    }

    /// Counter-clockwise rotation by `theta` radians. 2-vectors only.
    pub fn rotated(&self, theta: f64) -> Result<Vector> {
        if self.dimension() != 2 {
            return Err(self.unsupported("rotation"));
        }
        let (sin, cos) = theta.sin_cos();
        let (x, y) = (self.data[0], self.data[1]);
        Ok(Vector::from([x * cos - y * sin, x * sin + y * cos]))
    }

    pub(crate) fn check_dimension(&self, other: &Vector, operation: &str) -> Result<()> {
        if self.dimension() != other.dimension() {
            log::debug!(
                "{}: dimension {} does not match {}",
                operation,
                self.dimension(),
                other.dimension()
            );
            return Err(VectorError::DimensionMismatch {
                expected: self.dimension(),
                found: other.dimension(),
            });
        }
        Ok(())
    }

    fn out_of_bounds(&self, index: usize, operation: &str) -> VectorError {
        log::debug!(
            "{}: index {} outside dimension {}",
            operation,
            index,
            self.dimension()
        );
        VectorError::OutOfBounds {
            index,
            dimension: self.dimension(),
        }
    }

    fn unsupported(&self, operation: &'static str) -> VectorError {
        log::debug!("{} rejected for dimension {}", operation, self.dimension());
        VectorError::UnsupportedDimension {
            operation,
            dimension: self.dimension(),
        }
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, x) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write_component(f, *x)?;
        }
        write!(f, ")")
    }
}

// Values whose scaled form is at least 2^52 have no fractional digits left
// at that precision, so rounding leaves them as they are.
const NO_FRACTION: f64 = 4_503_599_627_370_496.0;

fn round_component(x: f64, digits: i32, factor: f64) -> f64 {
    if !x.is_finite() {
        return x;
    }
    if digits >= 0 {
        let scaled = x * factor;
        if !scaled.is_finite() || scaled.abs() >= NO_FRACTION {
            return x;
        }
        scaled.round_ties_even() / factor
    } else if factor.is_infinite() {
        0.0_f64.copysign(x)
    } else {
        (x / factor).round_ties_even() * factor
    }
}

/// Integral values print without a fraction (`4`); very large or very small
/// magnitudes switch to exponent form (`1e+300`, `1.5e-07`).
fn write_component(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    let magnitude = x.abs();
    if !x.is_finite() || x == 0.0 || (1e-4..1e16).contains(&magnitude) {
        return write!(f, "{}", x);
    }
    let exponent_form = format!("{:e}", x);
    match exponent_form.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, exponent) = match exponent.strip_prefix('-') {
                Some(rest) => ('-', rest),
                None => ('+', exponent),
            };
            write!(f, "{}e{}{:0>2}", mantissa, sign, exponent)
        }
        None => write!(f, "{}", exponent_form),
    }
}

// Debug output is the display form.
impl fmt::Debug for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl From<Array1<f64>> for Vector {
    fn from(data: Array1<f64>) -> Self {
        Self { data }
    }
}

impl From<Vec<f64>> for Vector {
    fn from(values: Vec<f64>) -> Self {
        Self {
            data: Array1::from(values),
        }
    }
}

impl From<&[f64]> for Vector {
    fn from(values: &[f64]) -> Self {
        Self::from(values.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for Vector {
    fn from(values: [f64; N]) -> Self {
        Self::from(values.to_vec())
    }
}

impl From<Vector> for Vec<f64> {
    fn from(vector: Vector) -> Self {
        vector.data.to_vec()
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a f64;
    type IntoIter = ndarray::iter::Iter<'a, f64, ndarray::Ix1>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
