//! Vectorized constructive geometry operations.
//!
//! Every operation in this crate (boundary, buffer, centroid, convex hull, Delaunay
//! triangulation, envelope, unique point extraction, point on surface, simplification, snapping
//! and Voronoi diagrams) accepts either a single geometry or a [`GeometryArray`], broadcasts
//! scalar parameters against array inputs, and hands each element to a [`GeometryKernel`].
//!
//! ```
//! use geo::{point, Geometry};
//! use geoarrow_constructive::{buffer, BufferOptions};
//!
//! let point = Geometry::Point(point!(x: 10., y: 10.));
//! let options = BufferOptions::default().with_quadsegs(1);
//! let buffered = buffer(point, 2.0, &options).unwrap();
//! assert!(buffered.is_scalar());
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub mod algorithm;
pub mod array;
pub mod constructive;
pub mod error;
pub mod geometry;
#[cfg(test)]
pub(crate) mod test;

pub use algorithm::broadcasting::{BroadcastableBool, BroadcastableGeometry, BroadcastablePrimitive};
pub use algorithm::geo::GeoKernel;
#[cfg(feature = "geos")]
pub use algorithm::geos::GeosKernel;
pub use algorithm::kernel::{BufferParams, GeometryKernel};
pub use array::GeometryArray;
pub use constructive::style::{BufferCapStyle, BufferJoinStyle, StyleParam, StyleValue};
pub use constructive::{
    boundary, buffer, centroid, convex_hull, delaunay_triangles, envelope,
    extract_unique_points, point_on_surface, simplify, snap, voronoi_polygons, BufferOptions,
    Constructive, DelaunayOptions, VoronoiOptions,
};
pub use error::{ConstructiveError, Result};
