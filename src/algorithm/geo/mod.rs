//! A pure-Rust [`GeometryKernel`] built on georust/geo algorithms.
//!
//! Where `geo` has the algorithm (centroid, interior point, convex hull, Douglas-Peucker,
//! boolean operations) it is used directly. Buffering, snapping, topology-preserving
//! simplification, Delaunay triangulation and Voronoi diagrams are implemented here on top of
//! `geo` types.

mod boundary;
mod buffer;
mod centroid;
mod convex_hull;
mod delaunay;
mod envelope;
mod simplify;
mod snap;
mod unique_points;
pub(crate) mod utils;
mod voronoi;

use geo::Geometry;

use crate::algorithm::kernel::{BufferParams, GeometryKernel};
use crate::error::Result;

/// The default kernel. Stateless, and so free to share across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeoKernel;

impl GeometryKernel for GeoKernel {
    fn boundary(&self, geometry: &Geometry) -> Result<Geometry> {
        boundary::boundary(geometry)
    }

    fn buffer(&self, geometry: &Geometry, radius: f64, params: &BufferParams) -> Result<Geometry> {
        buffer::buffer(geometry, radius, params)
    }

    fn centroid(&self, geometry: &Geometry) -> Result<Geometry> {
        Ok(centroid::centroid(geometry))
    }

    fn convex_hull(&self, geometry: &Geometry) -> Result<Geometry> {
        Ok(convex_hull::convex_hull(geometry))
    }

    fn delaunay_triangles(
        &self,
        geometry: &Geometry,
        tolerance: f64,
        only_edges: bool,
    ) -> Result<Geometry> {
        Ok(delaunay::delaunay_triangles(geometry, tolerance, only_edges))
    }

    fn envelope(&self, geometry: &Geometry) -> Result<Geometry> {
        Ok(envelope::envelope(geometry))
    }

    fn extract_unique_points(&self, geometry: &Geometry) -> Result<Geometry> {
        Ok(unique_points::extract_unique_points(geometry))
    }

    fn point_on_surface(&self, geometry: &Geometry) -> Result<Geometry> {
        Ok(centroid::point_on_surface(geometry))
    }

    fn simplify(&self, geometry: &Geometry, tolerance: f64) -> Result<Geometry> {
        Ok(simplify::simplify(geometry, tolerance))
    }

    fn simplify_preserve_topology(&self, geometry: &Geometry, tolerance: f64) -> Result<Geometry> {
        Ok(simplify::simplify_preserve_topology(geometry, tolerance))
    }

    fn snap(&self, geometry: &Geometry, reference: &Geometry, tolerance: f64) -> Result<Geometry> {
        Ok(snap::snap(geometry, reference, tolerance))
    }

    fn voronoi_polygons(
        &self,
        geometry: &Geometry,
        envelope: Option<&Geometry>,
        tolerance: f64,
        only_edges: bool,
    ) -> Result<Geometry> {
        Ok(voronoi::voronoi_polygons(
            geometry, envelope, tolerance, only_edges,
        ))
    }
}
