//! Broadcasting helpers and the geometry kernels that operations are dispatched to.

pub mod broadcasting;
pub mod geo;
#[cfg(feature = "geos")]
pub mod geos;
pub mod kernel;
