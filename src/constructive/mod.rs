//! Constructive operations, applied element-wise over scalars and arrays.
//!
//! Each operation is available as a method on [`Constructive`], which is generic over the
//! [`GeometryKernel`] doing the geometric work, and as a free function using the default
//! [`GeoKernel`].
//!
//! Broadcasting follows one rule: scalars apply to every element, and every array argument must
//! have the same length. The result is an array of that length, or a scalar when every input
//! was scalar. A null in any geometry or numeric input yields a null output at that position.

mod options;
pub mod style;

pub use options::{BufferOptions, DelaunayOptions, VoronoiOptions};

use arrow_array::types::Float64Type;
use geo::Geometry;
use log::debug;
#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::algorithm::broadcasting::{
    broadcast_len, BroadcastableGeometry, BroadcastablePrimitive,
};
use crate::algorithm::geo::GeoKernel;
use crate::algorithm::kernel::GeometryKernel;
use crate::array::GeometryArray;
use crate::error::Result;

/// The vectorized front end to a [`GeometryKernel`].
#[derive(Debug, Clone, Default)]
pub struct Constructive<K = GeoKernel> {
    kernel: K,
}

impl<K: GeometryKernel> Constructive<K> {
    pub fn new(kernel: K) -> Self {
        Self { kernel }
    }

    pub fn kernel(&self) -> &K {
        &self.kernel
    }

    /// See [`boundary`].
    pub fn boundary(
        &self,
        geometry: impl Into<BroadcastableGeometry>,
    ) -> Result<BroadcastableGeometry> {
        self.unary("boundary", geometry.into(), |g| self.kernel.boundary(g))
    }

    /// See [`buffer`].
    pub fn buffer(
        &self,
        geometry: impl Into<BroadcastableGeometry>,
        radius: impl Into<BroadcastablePrimitive<Float64Type>>,
        options: &BufferOptions,
    ) -> Result<BroadcastableGeometry> {
        let params = options.resolve()?;
        self.with_f64("buffer", geometry.into(), "radius", radius.into(), |g, r| {
            self.kernel.buffer(g, r, &params)
        })
    }

    /// See [`centroid`].
    pub fn centroid(
        &self,
        geometry: impl Into<BroadcastableGeometry>,
    ) -> Result<BroadcastableGeometry> {
        self.unary("centroid", geometry.into(), |g| self.kernel.centroid(g))
    }

    /// See [`convex_hull`].
    pub fn convex_hull(
        &self,
        geometry: impl Into<BroadcastableGeometry>,
    ) -> Result<BroadcastableGeometry> {
        self.unary("convex_hull", geometry.into(), |g| self.kernel.convex_hull(g))
    }

    /// See [`delaunay_triangles`].
    pub fn delaunay_triangles(
        &self,
        geometry: impl Into<BroadcastableGeometry>,
        options: &DelaunayOptions,
    ) -> Result<BroadcastableGeometry> {
        let geometry = geometry.into();
        let DelaunayOptions {
            tolerance,
            only_edges,
        } = options;
        let len = broadcast_len(&[
            ("geometry", geometry.len()),
            ("tolerance", tolerance.len()),
            ("only_edges", only_edges.len()),
        ])?;
        dispatch("delaunay_triangles", len, |i| {
            match (geometry.get(i), tolerance.get(i), only_edges.get(i)) {
                (Some(g), Some(tolerance), Some(only_edges)) => self
                    .kernel
                    .delaunay_triangles(g, tolerance, only_edges)
                    .map(Some),
                _ => Ok(None),
            }
        })
    }

    /// See [`envelope`].
    pub fn envelope(
        &self,
        geometry: impl Into<BroadcastableGeometry>,
    ) -> Result<BroadcastableGeometry> {
        self.unary("envelope", geometry.into(), |g| self.kernel.envelope(g))
    }

    /// See [`extract_unique_points`].
    pub fn extract_unique_points(
        &self,
        geometry: impl Into<BroadcastableGeometry>,
    ) -> Result<BroadcastableGeometry> {
        self.unary("extract_unique_points", geometry.into(), |g| {
            self.kernel.extract_unique_points(g)
        })
    }

    /// See [`point_on_surface`].
    pub fn point_on_surface(
        &self,
        geometry: impl Into<BroadcastableGeometry>,
    ) -> Result<BroadcastableGeometry> {
        self.unary("point_on_surface", geometry.into(), |g| {
            self.kernel.point_on_surface(g)
        })
    }

    /// See [`simplify`].
    pub fn simplify(
        &self,
        geometry: impl Into<BroadcastableGeometry>,
        tolerance: impl Into<BroadcastablePrimitive<Float64Type>>,
        preserve_topology: bool,
    ) -> Result<BroadcastableGeometry> {
        let geometry = geometry.into();
        let tolerance = tolerance.into();
        if preserve_topology {
            self.with_f64(
                "simplify_preserve_topology",
                geometry,
                "tolerance",
                tolerance,
                |g, t| self.kernel.simplify_preserve_topology(g, t),
            )
        } else {
            self.with_f64("simplify", geometry, "tolerance", tolerance, |g, t| {
                self.kernel.simplify(g, t)
            })
        }
    }

    /// See [`snap`].
    pub fn snap(
        &self,
        geometry: impl Into<BroadcastableGeometry>,
        reference: impl Into<BroadcastableGeometry>,
        tolerance: impl Into<BroadcastablePrimitive<Float64Type>>,
    ) -> Result<BroadcastableGeometry> {
        let geometry = geometry.into();
        let reference = reference.into();
        let tolerance = tolerance.into();
        let len = broadcast_len(&[
            ("geometry", geometry.len()),
            ("reference", reference.len()),
            ("tolerance", tolerance.len()),
        ])?;
        dispatch("snap", len, |i| {
            match (geometry.get(i), reference.get(i), tolerance.get(i)) {
                (Some(g), Some(reference), Some(tolerance)) => {
                    self.kernel.snap(g, reference, tolerance).map(Some)
                }
                _ => Ok(None),
            }
        })
    }

    /// See [`voronoi_polygons`].
    pub fn voronoi_polygons(
        &self,
        geometry: impl Into<BroadcastableGeometry>,
        options: &VoronoiOptions,
    ) -> Result<BroadcastableGeometry> {
        let geometry = geometry.into();
        let VoronoiOptions {
            envelope,
            tolerance,
            only_edges,
        } = options;
        let len = broadcast_len(&[
            ("geometry", geometry.len()),
            ("envelope", envelope.len()),
            ("tolerance", tolerance.len()),
            ("only_edges", only_edges.len()),
        ])?;
        dispatch("voronoi_polygons", len, |i| {
            // A null envelope means "no envelope", not a null result.
            match (geometry.get(i), tolerance.get(i), only_edges.get(i)) {
                (Some(g), Some(tolerance), Some(only_edges)) => self
                    .kernel
                    .voronoi_polygons(g, envelope.get(i), tolerance, only_edges)
                    .map(Some),
                _ => Ok(None),
            }
        })
    }

    fn unary<F>(
        &self,
        operation: &'static str,
        geometry: BroadcastableGeometry,
        op: F,
    ) -> Result<BroadcastableGeometry>
    where
        F: Fn(&Geometry) -> Result<Geometry> + Sync + Send,
    {
        let len = broadcast_len(&[("geometry", geometry.len())])?;
        dispatch(operation, len, |i| geometry.get(i).map(&op).transpose())
    }

    fn with_f64<F>(
        &self,
        operation: &'static str,
        geometry: BroadcastableGeometry,
        parameter: &'static str,
        value: BroadcastablePrimitive<Float64Type>,
        op: F,
    ) -> Result<BroadcastableGeometry>
    where
        F: Fn(&Geometry, f64) -> Result<Geometry> + Sync + Send,
    {
        let len = broadcast_len(&[("geometry", geometry.len()), (parameter, value.len())])?;
        dispatch(operation, len, |i| match (geometry.get(i), value.get(i)) {
            (Some(g), Some(value)) => op(g, value).map(Some),
            _ => Ok(None),
        })
    }
}

/// Evaluate `element` at every broadcast position and assemble the result.
///
/// Any element error fails the whole call; no partial array is returned.
fn dispatch<F>(operation: &'static str, len: Option<usize>, element: F) -> Result<BroadcastableGeometry>
where
    F: Fn(usize) -> Result<Option<Geometry>> + Sync + Send,
{
    let Some(len) = len else {
        debug!("{operation}: scalar input");
        return Ok(BroadcastableGeometry::Scalar(element(0)?));
    };
    debug!("{operation}: broadcasting over {len} elements");

    #[cfg(feature = "rayon")]
    let geoms = (0..len)
        .into_par_iter()
        .map(&element)
        .collect::<Result<Vec<_>>>()?;

    #[cfg(not(feature = "rayon"))]
    let geoms = (0..len).map(&element).collect::<Result<Vec<_>>>()?;

    Ok(BroadcastableGeometry::Array(GeometryArray::new(geoms)))
}

/// Returns the topological boundary of a geometry.
///
/// Points, multi points, closed line strings and empty geometries have an empty boundary. The
/// boundary of a non-empty geometry collection is undefined and is reported as an error by the
/// kernel.
///
/// ```
/// use geo::{line_string, point, Geometry, MultiPoint};
/// use geoarrow_constructive::boundary;
///
/// let line = Geometry::LineString(line_string![(x: 0., y: 0.), (x: 1., y: 1.), (x: 1., y: 2.)]);
/// let result = boundary(line).unwrap();
/// let expected = Geometry::MultiPoint(MultiPoint::new(vec![
///     point!(x: 0., y: 0.),
///     point!(x: 1., y: 2.),
/// ]));
/// assert_eq!(result.as_scalar(), Some(&expected));
/// ```
pub fn boundary(geometry: impl Into<BroadcastableGeometry>) -> Result<BroadcastableGeometry> {
    Constructive::new(GeoKernel).boundary(geometry)
}

/// Computes the buffer of a geometry for positive and negative buffer radius.
///
/// The buffer is the Minkowski sum (or difference, for a negative radius) of the geometry with
/// a disc whose radius is the absolute value of `radius`. The result is always polygonal or
/// empty; the zero or negative buffer of points and lines is empty.
///
/// Curves are approximated with `quadsegs` segments per quarter circle. All
/// [`BufferOptions`] are scalar-only; `radius` may be an array.
///
/// ```
/// use geo::{point, Geometry, Polygon};
/// use geoarrow_constructive::{buffer, geometry::is_empty, BufferOptions};
///
/// let point = Geometry::Point(point!(x: 10., y: 10.));
/// let options = BufferOptions::default().with_quadsegs(1);
///
/// let diamond = buffer(point.clone(), 2.0, &options).unwrap();
/// let diamond = Polygon::try_from(diamond.as_scalar().unwrap().clone()).unwrap();
/// assert_eq!(diamond.exterior().0.len(), 5);
///
/// let eroded = buffer(point, -2.0, &options).unwrap();
/// assert!(is_empty(eroded.as_scalar().unwrap()));
/// ```
pub fn buffer(
    geometry: impl Into<BroadcastableGeometry>,
    radius: impl Into<BroadcastablePrimitive<Float64Type>>,
    options: &BufferOptions,
) -> Result<BroadcastableGeometry> {
    Constructive::new(GeoKernel).buffer(geometry, radius, options)
}

/// Computes the geometric center (center-of-mass) of a geometry.
///
/// For multi points this is the mean of the coordinates, for line strings it is weighted by
/// segment length and for polygons by area. The centroid of an empty geometry is empty.
pub fn centroid(geometry: impl Into<BroadcastableGeometry>) -> Result<BroadcastableGeometry> {
    Constructive::new(GeoKernel).centroid(geometry)
}

/// Computes the smallest convex geometry containing all vertices of a geometry.
pub fn convex_hull(geometry: impl Into<BroadcastableGeometry>) -> Result<BroadcastableGeometry> {
    Constructive::new(GeoKernel).convex_hull(geometry)
}

/// Computes a Delaunay triangulation of the vertices of a geometry.
///
/// The result is a collection of triangles, or a multi line string of the triangulation's edges
/// when `only_edges` is set.
pub fn delaunay_triangles(
    geometry: impl Into<BroadcastableGeometry>,
    options: &DelaunayOptions,
) -> Result<BroadcastableGeometry> {
    Constructive::new(GeoKernel).delaunay_triangles(geometry, options)
}

/// Computes the minimum axis-aligned bounding geometry.
pub fn envelope(geometry: impl Into<BroadcastableGeometry>) -> Result<BroadcastableGeometry> {
    Constructive::new(GeoKernel).envelope(geometry)
}

/// Returns every distinct vertex of a geometry as a multi point.
pub fn extract_unique_points(
    geometry: impl Into<BroadcastableGeometry>,
) -> Result<BroadcastableGeometry> {
    Constructive::new(GeoKernel).extract_unique_points(geometry)
}

/// Returns a point that is guaranteed to lie on the geometry.
pub fn point_on_surface(
    geometry: impl Into<BroadcastableGeometry>,
) -> Result<BroadcastableGeometry> {
    Constructive::new(GeoKernel).point_on_surface(geometry)
}

/// Simplifies a geometry using the Douglas-Peucker algorithm.
///
/// With `preserve_topology` a different algorithm is used, which never introduces
/// self-intersections or collapses rings, at the cost of being slower and keeping more
/// vertices.
pub fn simplify(
    geometry: impl Into<BroadcastableGeometry>,
    tolerance: impl Into<BroadcastablePrimitive<Float64Type>>,
    preserve_topology: bool,
) -> Result<BroadcastableGeometry> {
    Constructive::new(GeoKernel).simplify(geometry, tolerance, preserve_topology)
}

/// Snaps the vertices and segments of a geometry to the vertices of `reference`.
pub fn snap(
    geometry: impl Into<BroadcastableGeometry>,
    reference: impl Into<BroadcastableGeometry>,
    tolerance: impl Into<BroadcastablePrimitive<Float64Type>>,
) -> Result<BroadcastableGeometry> {
    Constructive::new(GeoKernel).snap(geometry, reference, tolerance)
}

/// Computes a Voronoi diagram of the vertices of a geometry.
pub fn voronoi_polygons(
    geometry: impl Into<BroadcastableGeometry>,
    options: &VoronoiOptions,
) -> Result<BroadcastableGeometry> {
    Constructive::new(GeoKernel).voronoi_polygons(geometry, options)
}
