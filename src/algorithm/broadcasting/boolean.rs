use arrow_array::{Array, BooleanArray};

use crate::error::{ConstructiveError, Result};

/// A boolean scalar or an Arrow [`BooleanArray`].
#[derive(Debug, Clone)]
pub enum BroadcastableBool {
    Scalar(bool),
    Array(BooleanArray),
}

impl BroadcastableBool {
    /// The array length, or `None` for a scalar.
    pub fn len(&self) -> Option<usize> {
        match self {
            BroadcastableBool::Scalar(_) => None,
            BroadcastableBool::Array(arr) => Some(arr.len()),
        }
    }

    pub fn get(&self, index: usize) -> Option<bool> {
        match self {
            BroadcastableBool::Scalar(val) => Some(*val),
            BroadcastableBool::Array(arr) => {
                if arr.is_null(index) {
                    None
                } else {
                    Some(arr.value(index))
                }
            }
        }
    }

    pub(crate) fn as_scalar(&self, parameter: &'static str) -> Result<bool> {
        match self {
            BroadcastableBool::Scalar(val) => Ok(*val),
            BroadcastableBool::Array(_) => Err(ConstructiveError::ScalarOnly(parameter)),
        }
    }
}

impl From<bool> for BroadcastableBool {
    fn from(value: bool) -> Self {
        BroadcastableBool::Scalar(value)
    }
}

impl From<BooleanArray> for BroadcastableBool {
    fn from(value: BooleanArray) -> Self {
        BroadcastableBool::Array(value)
    }
}

impl From<Vec<bool>> for BroadcastableBool {
    fn from(value: Vec<bool>) -> Self {
        BroadcastableBool::Array(value.into())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn broadcast_values() {
        let arr = BroadcastableBool::from(BooleanArray::from(vec![Some(true), None]));
        assert_eq!(arr.len(), Some(2));
        assert_eq!(arr.get(0), Some(true));
        assert_eq!(arr.get(1), None);
        assert!(arr.as_scalar("single_sided").is_err());
        assert_eq!(BroadcastableBool::from(false).get(7), Some(false));
    }
}
