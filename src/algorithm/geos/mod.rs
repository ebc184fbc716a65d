//! A [`GeometryKernel`] delegating to libgeos through the [`geos`] crate.

use geos::{CapStyle, Geom, JoinStyle};

use crate::algorithm::kernel::{BufferParams, GeometryKernel};
use crate::constructive::style::{BufferCapStyle, BufferJoinStyle};
use crate::error::{ConstructiveError, Result};
use crate::geometry::empty;

/// Kernel backed by GEOS. Results follow GEOS exactly, including its vertex ordering.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeosKernel;

fn to_geos(geometry: &geo::Geometry) -> Result<geos::Geometry> {
    Ok(geos::Geometry::try_from(geometry)?)
}

fn from_geos(geometry: geos::Geometry) -> Result<geo::Geometry> {
    // geo has no typed empty geometries to convert into
    if geometry.is_empty()? {
        return Ok(empty());
    }
    Ok(geo::Geometry::try_from(geometry)?)
}

fn cap_style(code: i32) -> Result<CapStyle> {
    match BufferCapStyle::try_from(code) {
        Ok(BufferCapStyle::Round) => Ok(CapStyle::Round),
        Ok(BufferCapStyle::Flat) => Ok(CapStyle::Flat),
        Ok(BufferCapStyle::Square) => Ok(CapStyle::Square),
        Err(_) => Err(ConstructiveError::InvalidParameter(format!(
            "unknown cap style code {code}"
        ))),
    }
}

fn join_style(code: i32) -> Result<JoinStyle> {
    match BufferJoinStyle::try_from(code) {
        Ok(BufferJoinStyle::Round) => Ok(JoinStyle::Round),
        Ok(BufferJoinStyle::Mitre) => Ok(JoinStyle::Mitre),
        Ok(BufferJoinStyle::Bevel) => Ok(JoinStyle::Bevel),
        Err(_) => Err(ConstructiveError::InvalidParameter(format!(
            "unknown join style code {code}"
        ))),
    }
}

impl GeometryKernel for GeosKernel {
    fn boundary(&self, geometry: &geo::Geometry) -> Result<geo::Geometry> {
        from_geos(to_geos(geometry)?.boundary()?)
    }

    fn buffer(
        &self,
        geometry: &geo::Geometry,
        radius: f64,
        params: &BufferParams,
    ) -> Result<geo::Geometry> {
        let geos_params = geos::BufferParams::builder()
            .end_cap_style(cap_style(params.cap_style)?)
            .join_style(join_style(params.join_style)?)
            .mitre_limit(params.mitre_limit)
            .quadrant_segments(params.quadsegs)
            .single_sided(params.single_sided)
            .build()?;
        from_geos(to_geos(geometry)?.buffer_with_params(radius, &geos_params)?)
    }

    fn centroid(&self, geometry: &geo::Geometry) -> Result<geo::Geometry> {
        from_geos(to_geos(geometry)?.get_centroid()?)
    }

    fn convex_hull(&self, geometry: &geo::Geometry) -> Result<geo::Geometry> {
        from_geos(to_geos(geometry)?.convex_hull()?)
    }

    fn delaunay_triangles(
        &self,
        geometry: &geo::Geometry,
        tolerance: f64,
        only_edges: bool,
    ) -> Result<geo::Geometry> {
        from_geos(to_geos(geometry)?.delaunay_triangulation(tolerance, only_edges)?)
    }

    fn envelope(&self, geometry: &geo::Geometry) -> Result<geo::Geometry> {
        from_geos(to_geos(geometry)?.envelope()?)
    }

    fn extract_unique_points(&self, geometry: &geo::Geometry) -> Result<geo::Geometry> {
        from_geos(to_geos(geometry)?.extract_unique_points()?)
    }

    fn point_on_surface(&self, geometry: &geo::Geometry) -> Result<geo::Geometry> {
        from_geos(to_geos(geometry)?.point_on_surface()?)
    }

    fn simplify(&self, geometry: &geo::Geometry, tolerance: f64) -> Result<geo::Geometry> {
        from_geos(to_geos(geometry)?.simplify(tolerance)?)
    }

    fn simplify_preserve_topology(
        &self,
        geometry: &geo::Geometry,
        tolerance: f64,
    ) -> Result<geo::Geometry> {
        from_geos(to_geos(geometry)?.topology_preserve_simplify(tolerance)?)
    }

    fn snap(
        &self,
        geometry: &geo::Geometry,
        reference: &geo::Geometry,
        tolerance: f64,
    ) -> Result<geo::Geometry> {
        let reference = to_geos(reference)?;
        from_geos(to_geos(geometry)?.snap(&reference, tolerance)?)
    }

    fn voronoi_polygons(
        &self,
        geometry: &geo::Geometry,
        envelope: Option<&geo::Geometry>,
        tolerance: f64,
        only_edges: bool,
    ) -> Result<geo::Geometry> {
        let envelope = envelope.map(to_geos).transpose()?;
        from_geos(to_geos(geometry)?.voronoi(envelope.as_ref(), tolerance, only_edges)?)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::constructive::{BufferOptions, Constructive};
    use crate::test::assert_topo_eq;
    use crate::test::geometry::{ls1, p10, square_geom};
    use geo::{point, Geometry};

    #[test]
    fn point_buffer_matches_geo_kernel() {
        let ops = Constructive::new(GeosKernel);
        let options = BufferOptions::default().with_quadsegs(1);
        let result = ops.buffer(Geometry::Point(p10()), 2.0, &options).unwrap();
        let expected = crate::buffer(Geometry::Point(p10()), 2.0, &options).unwrap();
        assert_topo_eq(result.as_scalar().unwrap(), expected.as_scalar().unwrap());
    }

    #[test]
    fn flat_line_buffer() {
        let options = BufferOptions::default().with_cap_style("flat");
        let result = Constructive::new(GeosKernel)
            .buffer(Geometry::LineString(ls1()), 2.0, &options)
            .unwrap();
        let expected = crate::buffer(Geometry::LineString(ls1()), 2.0, &options).unwrap();
        assert_topo_eq(result.as_scalar().unwrap(), expected.as_scalar().unwrap());
    }

    #[test]
    fn centroid_and_empty_results() {
        let ops = Constructive::new(GeosKernel);
        let centroid = ops.centroid(square_geom()).unwrap();
        assert_eq!(
            centroid.as_scalar(),
            Some(&Geometry::Point(point!(x: 5., y: 5.)))
        );

        let boundary = ops.boundary(Geometry::Point(p10())).unwrap();
        assert!(crate::geometry::is_empty(boundary.as_scalar().unwrap()));
    }

    #[test]
    fn unknown_style_code() {
        let options = BufferOptions::default().with_join_style(9i32);
        let err = Constructive::new(GeosKernel)
            .buffer(Geometry::Point(p10()), 1.0, &options)
            .unwrap_err();
        assert!(matches!(err, ConstructiveError::InvalidParameter(_)));
    }
}
