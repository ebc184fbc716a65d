//! Scalar-or-array inputs and the rules for aligning them.
//!
//! A scalar broadcasts against an array of any length. All array arguments of one call must
//! share a single length.

mod boolean;
mod geometry;
mod primitive;

pub use boolean::BroadcastableBool;
pub use geometry::BroadcastableGeometry;
pub use primitive::BroadcastablePrimitive;

use crate::error::{ConstructiveError, Result};

/// Compute the broadcast length of a set of named arguments.
///
/// Each argument is given as its name and its length, where `None` marks a scalar. Returns
/// `None` when every argument is scalar.
pub(crate) fn broadcast_len(args: &[(&'static str, Option<usize>)]) -> Result<Option<usize>> {
    let mut expected: Option<usize> = None;
    for (parameter, len) in args {
        match (expected, len) {
            (_, None) => {}
            (None, Some(len)) => expected = Some(*len),
            (Some(expected), Some(found)) if expected != *found => {
                return Err(ConstructiveError::ShapeMismatch {
                    parameter,
                    expected,
                    found: *found,
                });
            }
            _ => {}
        }
    }
    Ok(expected)
}
