//! The primitive operations a geometry engine must provide.

use geo::Geometry;
use serde::{Deserialize, Serialize};

use crate::constructive::style::{BufferCapStyle, BufferJoinStyle};
use crate::error::Result;

/// Fully resolved buffer parameters, in the integer protocol kernels understand.
///
/// Style codes are the [`BufferCapStyle`] and [`BufferJoinStyle`] discriminants. They are not
/// re-validated here; a kernel may reject codes it does not know.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BufferParams {
    pub quadsegs: i32,
    pub cap_style: i32,
    pub join_style: i32,
    pub mitre_limit: f64,
    pub single_sided: bool,
}

impl Default for BufferParams {
    fn default() -> Self {
        Self {
            quadsegs: 8,
            cap_style: BufferCapStyle::Round.into(),
            join_style: BufferJoinStyle::Round.into(),
            mitre_limit: 5.0,
            single_sided: false,
        }
    }
}

/// A geometry engine.
///
/// Each method is invoked once per broadcast element with a non-null geometry and resolved
/// scalar parameters. Implementations must be pure: the result may depend only on the
/// arguments. Errors are returned to the caller unchanged.
pub trait GeometryKernel: Send + Sync {
    /// The topological boundary.
    fn boundary(&self, geometry: &Geometry) -> Result<Geometry>;

    /// The Minkowski sum (or difference, for negative `radius`) with a disc.
    fn buffer(&self, geometry: &Geometry, radius: f64, params: &BufferParams) -> Result<Geometry>;

    /// The center of mass.
    fn centroid(&self, geometry: &Geometry) -> Result<Geometry>;

    /// The smallest convex geometry containing every vertex.
    fn convex_hull(&self, geometry: &Geometry) -> Result<Geometry>;

    /// The Delaunay triangulation of the vertices, as triangles or as edges.
    fn delaunay_triangles(
        &self,
        geometry: &Geometry,
        tolerance: f64,
        only_edges: bool,
    ) -> Result<Geometry>;

    /// The axis-aligned bounding geometry.
    fn envelope(&self, geometry: &Geometry) -> Result<Geometry>;

    /// Every distinct vertex as a multi point.
    fn extract_unique_points(&self, geometry: &Geometry) -> Result<Geometry>;

    /// A point guaranteed to intersect the geometry.
    fn point_on_surface(&self, geometry: &Geometry) -> Result<Geometry>;

    /// Douglas-Peucker simplification.
    fn simplify(&self, geometry: &Geometry, tolerance: f64) -> Result<Geometry>;

    /// Simplification that never introduces self-intersections or collapses rings.
    fn simplify_preserve_topology(&self, geometry: &Geometry, tolerance: f64) -> Result<Geometry>;

    /// Snap the vertices and segments of `geometry` to the vertices of `reference`.
    fn snap(&self, geometry: &Geometry, reference: &Geometry, tolerance: f64) -> Result<Geometry>;

    /// The Voronoi diagram of the vertices, as cells or as edges.
    fn voronoi_polygons(
        &self,
        geometry: &Geometry,
        envelope: Option<&Geometry>,
        tolerance: f64,
        only_edges: bool,
    ) -> Result<Geometry>;
}
