use arrow_array::types::{ArrowPrimitiveType, Float64Type, Int32Type};
use arrow_array::{Array, Float64Array, Int32Array, PrimitiveArray};

use crate::error::{ConstructiveError, Result};

/// An enum over primitive types defined by [`ArrowPrimitiveType`]. These include i32, f64, etc.
///
/// A `Scalar` applies to every element of a broadcast. An `Array` is aligned with the geometry
/// array; its null slots produce null outputs.
#[derive(Debug)]
pub enum BroadcastablePrimitive<T>
where
    T: ArrowPrimitiveType,
{
    Scalar(T::Native),
    Array(PrimitiveArray<T>),
}

// Arrow's type markers are not `Clone`.
impl<T> Clone for BroadcastablePrimitive<T>
where
    T: ArrowPrimitiveType,
{
    fn clone(&self) -> Self {
        match self {
            BroadcastablePrimitive::Scalar(val) => BroadcastablePrimitive::Scalar(*val),
            BroadcastablePrimitive::Array(arr) => BroadcastablePrimitive::Array(arr.clone()),
        }
    }
}

impl<T> BroadcastablePrimitive<T>
where
    T: ArrowPrimitiveType,
{
    /// The array length, or `None` for a scalar.
    pub fn len(&self) -> Option<usize> {
        match self {
            BroadcastablePrimitive::Scalar(_) => None,
            BroadcastablePrimitive::Array(arr) => Some(arr.len()),
        }
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, BroadcastablePrimitive::Scalar(_))
    }

    /// The value at a broadcast position. Scalars ignore `index`.
    pub fn get(&self, index: usize) -> Option<T::Native> {
        match self {
            BroadcastablePrimitive::Scalar(val) => Some(*val),
            BroadcastablePrimitive::Array(arr) => {
                if arr.is_null(index) {
                    None
                } else {
                    Some(arr.value(index))
                }
            }
        }
    }

    /// The scalar value, or a [`ConstructiveError::ScalarOnly`] naming `parameter`.
    pub(crate) fn as_scalar(&self, parameter: &'static str) -> Result<T::Native> {
        match self {
            BroadcastablePrimitive::Scalar(val) => Ok(*val),
            BroadcastablePrimitive::Array(_) => Err(ConstructiveError::ScalarOnly(parameter)),
        }
    }
}

impl From<f64> for BroadcastablePrimitive<Float64Type> {
    fn from(value: f64) -> Self {
        BroadcastablePrimitive::Scalar(value)
    }
}

impl From<i32> for BroadcastablePrimitive<Int32Type> {
    fn from(value: i32) -> Self {
        BroadcastablePrimitive::Scalar(value)
    }
}

impl From<Float64Array> for BroadcastablePrimitive<Float64Type> {
    fn from(value: Float64Array) -> Self {
        BroadcastablePrimitive::Array(value)
    }
}

impl From<Int32Array> for BroadcastablePrimitive<Int32Type> {
    fn from(value: Int32Array) -> Self {
        BroadcastablePrimitive::Array(value)
    }
}

impl From<Vec<f64>> for BroadcastablePrimitive<Float64Type> {
    fn from(value: Vec<f64>) -> Self {
        BroadcastablePrimitive::Array(value.into())
    }
}

impl From<Vec<i32>> for BroadcastablePrimitive<Int32Type> {
    fn from(value: Vec<i32>) -> Self {
        BroadcastablePrimitive::Array(value.into())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn scalar_repeats() {
        let val = BroadcastablePrimitive::<Float64Type>::from(2.0);
        assert_eq!(val.len(), None);
        assert_eq!(val.get(0), Some(2.0));
        assert_eq!(val.get(100), Some(2.0));
    }

    #[test]
    fn array_nulls() {
        let arr = Float64Array::from(vec![Some(1.0), None, Some(3.0)]);
        let val = BroadcastablePrimitive::from(arr);
        assert_eq!(val.len(), Some(3));
        assert_eq!(val.get(1), None);
        assert_eq!(val.get(2), Some(3.0));
    }

    #[test]
    fn scalar_only() {
        let val = BroadcastablePrimitive::<Int32Type>::from(vec![1, 2]);
        assert!(matches!(
            val.as_scalar("quadsegs"),
            Err(ConstructiveError::ScalarOnly("quadsegs"))
        ));
        assert_eq!(BroadcastablePrimitive::<Int32Type>::from(8).as_scalar("quadsegs").unwrap(), 8);
    }

    #[test]
    fn clone_without_clone_marker() {
        let arr = BroadcastablePrimitive::<Float64Type>::from(vec![1.0, 2.0]);
        let copy = arr.clone();
        assert_eq!(copy.len(), Some(2));
        assert_eq!(copy.get(1), Some(2.0));

        let scalar = BroadcastablePrimitive::<Int32Type>::from(3).clone();
        assert_eq!(scalar.get(7), Some(3));
    }
}
