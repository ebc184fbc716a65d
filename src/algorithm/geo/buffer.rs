use std::f64::consts::FRAC_PI_2;

use geo::orient::{Direction, Orient};
use geo::{
    coord, Area, BooleanOps, Coord, Geometry, HasDimensions, LineString, MultiPolygon, Polygon,
};
use itertools::Itertools;
use log::trace;

use crate::algorithm::geo::utils::segments;
use crate::algorithm::kernel::BufferParams;
use crate::constructive::style::{BufferCapStyle, BufferJoinStyle};
use crate::error::{ConstructiveError, Result};
use crate::geometry::{empty, from_polygons};

/// Pieces and results with an area below this fraction of the squared radius are dropped.
const MIN_AREA: f64 = 1e-12;

/// Buffer a geometry by `radius`.
///
/// Lines and points are buffered as the union of simple pieces: one rectangle per segment,
/// one join polygon per convex vertex, and the caps. Polygons are grown by the union with, or
/// shrunk by the difference from, the buffer of their rings.
///
/// Every resulting polygon has a clockwise exterior and counter-clockwise holes.
pub(crate) fn buffer(geometry: &Geometry, radius: f64, params: &BufferParams) -> Result<Geometry> {
    let builder = BufferBuilder::new(params)?;
    if !radius.is_finite() {
        return Err(ConstructiveError::Kernel(format!(
            "buffer radius must be finite, got {radius}"
        )));
    }
    if geometry.is_empty() {
        return Ok(empty());
    }

    let min_area = MIN_AREA * radius * radius;
    let polygons = builder
        .geometry(geometry, radius)
        .0
        .into_iter()
        .filter(|polygon| polygon.unsigned_area() > min_area)
        .map(|polygon| polygon.orient(Direction::Reversed))
        .collect();
    Ok(from_polygons(polygons))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
    Both,
}

impl Side {
    fn covers(self, other: Side) -> bool {
        self == Side::Both || self == other
    }
}

#[derive(Debug)]
struct BufferBuilder {
    quadsegs: usize,
    cap: BufferCapStyle,
    join: BufferJoinStyle,
    mitre_limit: f64,
    single_sided: bool,
}

impl BufferBuilder {
    fn new(params: &BufferParams) -> Result<Self> {
        let cap = BufferCapStyle::try_from(params.cap_style).map_err(|_| {
            ConstructiveError::InvalidParameter(format!(
                "unknown cap style code {}",
                params.cap_style
            ))
        })?;
        let join = BufferJoinStyle::try_from(params.join_style).map_err(|_| {
            ConstructiveError::InvalidParameter(format!(
                "unknown join style code {}",
                params.join_style
            ))
        })?;
        let builder = Self {
            quadsegs: params.quadsegs.max(1) as usize,
            cap,
            join,
            mitre_limit: params.mitre_limit,
            single_sided: params.single_sided,
        };
        trace!("buffer builder: {builder:?}");
        Ok(builder)
    }

    fn geometry(&self, geometry: &Geometry, radius: f64) -> MultiPolygon {
        match geometry {
            Geometry::Point(point) => self.point(point.0, radius),
            Geometry::MultiPoint(points) => {
                union_all(points.iter().map(|point| self.point(point.0, radius)))
            }
            Geometry::Line(line) => self.line(&[line.start, line.end], radius),
            Geometry::LineString(line) => self.line(&line.0, radius),
            Geometry::MultiLineString(lines) => {
                union_all(lines.iter().map(|line| self.line(&line.0, radius)))
            }
            Geometry::Polygon(polygon) => self.polygon(polygon, radius),
            Geometry::MultiPolygon(polygons) => {
                union_all(polygons.iter().map(|polygon| self.polygon(polygon, radius)))
            }
            Geometry::Rect(rect) => self.polygon(&rect.to_polygon(), radius),
            Geometry::Triangle(triangle) => self.polygon(&triangle.to_polygon(), radius),
            Geometry::GeometryCollection(collection) => union_all(
                collection
                    .iter()
                    .map(|geometry| self.geometry(geometry, radius)),
            ),
        }
    }

    fn point(&self, center: Coord, radius: f64) -> MultiPolygon {
        if radius <= 0.0 {
            return nothing();
        }
        match self.cap {
            BufferCapStyle::Round => MultiPolygon::new(vec![self.disc(center, radius)]),
            BufferCapStyle::Square => {
                let d = radius;
                MultiPolygon::new(vec![polygon(vec![
                    coord! { x: center.x + d, y: center.y - d },
                    coord! { x: center.x - d, y: center.y - d },
                    coord! { x: center.x - d, y: center.y + d },
                    coord! { x: center.x + d, y: center.y + d },
                ])])
            }
            BufferCapStyle::Flat => nothing(),
        }
    }

    /// A regular polygon with `4 * quadsegs` vertices, starting at angle zero and running
    /// clockwise.
    fn disc(&self, center: Coord, radius: f64) -> Polygon {
        let step = FRAC_PI_2 / self.quadsegs as f64;
        polygon(
            (0..4 * self.quadsegs)
                .map(|k| {
                    let angle = -(k as f64) * step;
                    coord! {
                        x: center.x + radius * angle.cos(),
                        y: center.y + radius * angle.sin(),
                    }
                })
                .collect(),
        )
    }

    fn line(&self, coords: &[Coord], radius: f64) -> MultiPolygon {
        let mut coords = coords.to_vec();
        coords.dedup();
        match coords.len() {
            0 => return nothing(),
            1 => return self.point(coords[0], radius),
            _ => {}
        }

        let side = match (self.single_sided, radius) {
            (true, r) if r > 0.0 => Side::Left,
            (true, r) if r < 0.0 => Side::Right,
            (false, r) if r > 0.0 => Side::Both,
            _ => return nothing(),
        };
        self.curve(&coords, radius.abs(), side, !self.single_sided)
    }

    fn polygon(&self, polygon: &Polygon, radius: f64) -> MultiPolygon {
        if polygon.is_empty() {
            return nothing();
        }
        let solid = MultiPolygon::new(vec![polygon.clone()]);
        if radius == 0.0 {
            return solid;
        }

        let d = radius.abs();
        let rings = union_all(
            std::iter::once(polygon.exterior())
                .chain(polygon.interiors())
                .map(|ring| {
                    let mut coords = ring.0.clone();
                    coords.dedup();
                    if coords.len() < 2 {
                        return nothing();
                    }
                    self.curve(&coords, d, Side::Both, false)
                }),
        );
        if radius > 0.0 {
            solid.union(&rings)
        } else {
            solid.difference(&rings)
        }
    }

    /// The buffer of a curve without repeated coordinates, at a positive distance `d`.
    fn curve(&self, coords: &[Coord], d: f64, side: Side, capped: bool) -> MultiPolygon {
        let closed = coords.len() >= 4 && coords.first() == coords.last();
        let capped = capped && !closed;
        let last = coords.len() - 2;

        let mut pieces = Vec::with_capacity(2 * coords.len() + 2);
        for (i, (mut a, mut b)) in segments(coords).enumerate() {
            let u = unit(b - a);
            if capped && self.cap == BufferCapStyle::Square {
                if i == 0 {
                    a = a - u * d;
                }
                if i == last {
                    b = b + u * d;
                }
            }
            pieces.push(rectangle(a, b, left_normal(u) * d, side));
        }

        let mut corners: Vec<(Coord, Coord, Coord)> =
            coords.iter().copied().tuple_windows().collect();
        if closed {
            corners.push((coords[coords.len() - 2], coords[0], coords[1]));
        }
        for (previous, vertex, next) in corners {
            pieces.extend(self.join(previous, vertex, next, d, side));
        }

        if capped && self.cap == BufferCapStyle::Round {
            pieces.push(self.disc(coords[0], d));
            pieces.push(self.disc(coords[coords.len() - 1], d));
        }

        let min_area = MIN_AREA * d * d;
        union_all(
            pieces
                .into_iter()
                .filter(|piece| piece.unsigned_area() > min_area)
                .map(|piece| MultiPolygon::new(vec![piece])),
        )
    }

    /// Join pieces filling the gap on the outer side of `vertex`.
    fn join(&self, previous: Coord, vertex: Coord, next: Coord, d: f64, side: Side) -> Vec<Polygon> {
        let s = unit(vertex - previous);
        let e = unit(next - vertex);
        let turn = s.x * e.y - s.y * e.x;
        let outer = if turn > 0.0 {
            vec![Side::Right]
        } else if turn < 0.0 {
            vec![Side::Left]
        } else if dot(s, e) < 0.0 {
            vec![Side::Left, Side::Right]
        } else {
            return Vec::new();
        };

        outer
            .into_iter()
            .filter(|outer| side.covers(*outer))
            .map(|outer| {
                let sign = if outer == Side::Left { 1.0 } else { -1.0 };
                let a = left_normal(s) * (sign * d);
                let b = left_normal(e) * (sign * d);
                let bisector = if (a + b).x.hypot((a + b).y) > f64::EPSILON * d {
                    unit(a + b)
                } else {
                    s
                };
                match self.join {
                    BufferJoinStyle::Round => self.round_join(vertex, a, b, bisector, d),
                    BufferJoinStyle::Mitre => self.mitre_join(vertex, a, b, bisector, s, e, d),
                    BufferJoinStyle::Bevel => polygon(vec![vertex, vertex + a, vertex + b]),
                }
            })
            .collect()
    }

    /// A circular wedge from offset `a` to offset `b`, sweeping through `bisector`.
    fn round_join(&self, vertex: Coord, a: Coord, b: Coord, bisector: Coord, d: f64) -> Polygon {
        let start = a.y.atan2(a.x);
        let sweep = (dot(a, b) / (d * d)).clamp(-1.0, 1.0).acos();
        let direction = if a.x * bisector.y - a.y * bisector.x >= 0.0 {
            1.0
        } else {
            -1.0
        };
        // the tolerance keeps exact quarter turns from rounding up to an extra step
        let steps = ((sweep / (FRAC_PI_2 / self.quadsegs as f64) - 1e-9).ceil() as usize).max(1);

        let mut ring = Vec::with_capacity(steps + 2);
        ring.push(vertex);
        ring.extend((0..=steps).map(|k| {
            let angle = start + direction * sweep * k as f64 / steps as f64;
            coord! { x: vertex.x + d * angle.cos(), y: vertex.y + d * angle.sin() }
        }));
        polygon(ring)
    }

    /// A mitre reaching at most `mitre_limit * d` from the vertex along the bisector.
    #[allow(clippy::too_many_arguments)]
    fn mitre_join(
        &self,
        vertex: Coord,
        a: Coord,
        b: Coord,
        bisector: Coord,
        s: Coord,
        e: Coord,
        d: f64,
    ) -> Polygon {
        let reach = dot(a, bisector);
        let limit = self.mitre_limit * d;
        if reach > 0.0 && d * d / reach <= limit {
            let tip = vertex + bisector * (d * d / reach);
            return polygon(vec![vertex, vertex + a, tip, vertex + b]);
        }

        let (along_in, along_out) = (dot(s, bisector), -dot(e, bisector));
        if limit <= reach || along_in <= 0.0 || along_out <= 0.0 {
            return polygon(vec![vertex, vertex + a, vertex + b]);
        }
        let first = vertex + a + s * ((limit - reach) / along_in);
        let second = vertex + b - e * ((limit - dot(b, bisector)) / along_out);
        polygon(vec![vertex, vertex + a, first, second, vertex + b])
    }
}

fn nothing() -> MultiPolygon {
    MultiPolygon::new(Vec::new())
}

fn polygon(ring: Vec<Coord>) -> Polygon {
    Polygon::new(LineString::new(ring), Vec::new())
}

/// The rectangle swept by segment `a b`, clockwise from the left offset of `b`.
fn rectangle(a: Coord, b: Coord, normal: Coord, side: Side) -> Polygon {
    match side {
        Side::Both => polygon(vec![b + normal, b - normal, a - normal, a + normal]),
        Side::Left => polygon(vec![b + normal, b, a, a + normal]),
        Side::Right => polygon(vec![b, b - normal, a - normal, a]),
    }
}

fn dot(a: Coord, b: Coord) -> f64 {
    a.x * b.x + a.y * b.y
}

fn unit(v: Coord) -> Coord {
    v / v.x.hypot(v.y)
}

fn left_normal(u: Coord) -> Coord {
    coord! { x: -u.y, y: u.x }
}

/// Union many areas by merging them pairwise, level by level.
fn union_all(parts: impl IntoIterator<Item = MultiPolygon>) -> MultiPolygon {
    let mut parts: Vec<MultiPolygon> = parts
        .into_iter()
        .filter(|part| !part.0.is_empty())
        .collect();
    while parts.len() > 1 {
        let mut merged = Vec::with_capacity(parts.len() / 2 + 1);
        let mut parts_iter = parts.into_iter();
        while let Some(first) = parts_iter.next() {
            merged.push(match parts_iter.next() {
                Some(second) => first.union(&second),
                None => first,
            });
        }
        parts = merged;
    }
    parts.pop().unwrap_or_else(nothing)
}
