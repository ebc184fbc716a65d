use geo::algorithm::line_intersection::{line_intersection, LineIntersection};
use geo::{
    Contains, Coord, Geometry, Line, LineString, MultiLineString, MultiPolygon, Point, Polygon,
    Simplify,
};

use crate::algorithm::geo::utils::{map_sequences, segment_distance, SequenceKind};
use crate::geometry::empty;

/// Douglas-Peucker simplification.
///
/// Rings that collapse below four coordinates are dropped. A polygon whose exterior collapses
/// becomes empty, or disappears from its multi polygon.
pub(crate) fn simplify(geometry: &Geometry, tolerance: f64) -> Geometry {
    match geometry {
        Geometry::Point(_) | Geometry::MultiPoint(_) => geometry.clone(),
        Geometry::Line(line) => Geometry::LineString(LineString::from(*line)),
        Geometry::LineString(line) => Geometry::LineString(line.simplify(&tolerance)),
        Geometry::MultiLineString(lines) => {
            Geometry::MultiLineString(MultiLineString::new(
                lines.iter().map(|line| line.simplify(&tolerance)).collect(),
            ))
        }
        Geometry::Polygon(polygon) => {
            simplify_polygon(polygon, tolerance).map_or_else(empty, Geometry::Polygon)
        }
        Geometry::MultiPolygon(polygons) => {
            let polygons: Vec<Polygon> = polygons
                .iter()
                .filter_map(|polygon| simplify_polygon(polygon, tolerance))
                .collect();
            if polygons.is_empty() {
                empty()
            } else {
                Geometry::MultiPolygon(MultiPolygon::new(polygons))
            }
        }
        Geometry::Rect(rect) => simplify(&Geometry::Polygon(rect.to_polygon()), tolerance),
        Geometry::Triangle(triangle) => {
            simplify(&Geometry::Polygon(triangle.to_polygon()), tolerance)
        }
        Geometry::GeometryCollection(collection) => Geometry::GeometryCollection(
            collection
                .iter()
                .map(|geometry| simplify(geometry, tolerance))
                .collect(),
        ),
    }
}

fn simplify_polygon(polygon: &Polygon, tolerance: f64) -> Option<Polygon> {
    let exterior = simplify_ring(polygon.exterior(), tolerance)?;
    let interiors = polygon
        .interiors()
        .iter()
        .filter_map(|ring| simplify_ring(ring, tolerance))
        .collect();
    Some(Polygon::new(exterior, interiors))
}

fn simplify_ring(ring: &LineString, tolerance: f64) -> Option<LineString> {
    let ring = ring.simplify(&tolerance);
    (ring.0.len() >= 4).then_some(ring)
}

/// Simplification that keeps the geometry's topology.
///
/// Starts from the Douglas-Peucker result and re-inserts vertices until no simplified segment
/// crosses or touches another segment of the geometry or sweeps over another vertex, and every
/// ring keeps at least four coordinates. Points are unchanged.
pub(crate) fn simplify_preserve_topology(geometry: &Geometry, tolerance: f64) -> Geometry {
    let mut sequences: Vec<Sequence> = Vec::new();
    map_sequences(geometry, &mut |coords, kind| {
        sequences.push(Sequence::new(coords, kind, tolerance));
        coords.to_vec()
    });

    for sequence in sequences.iter_mut() {
        sequence.keep_ring_valid();
    }
    while let Some((index, start, end)) = find_conflict(&sequences) {
        sequences[index].refine(start, end);
    }

    let mut simplified = sequences.into_iter().map(Sequence::into_coords);
    map_sequences(geometry, &mut |coords, _| {
        simplified.next().unwrap_or_else(|| coords.to_vec())
    })
}

struct Sequence {
    coords: Vec<Coord>,
    kind: SequenceKind,
    keep: Vec<bool>,
}

impl Sequence {
    fn new(coords: &[Coord], kind: SequenceKind, tolerance: f64) -> Self {
        let keep = match kind {
            SequenceKind::Point => vec![true; coords.len()],
            SequenceKind::Line | SequenceKind::Ring => douglas_peucker(coords, tolerance),
        };
        Self {
            coords: coords.to_vec(),
            kind,
            keep,
        }
    }

    fn kept(&self) -> Vec<usize> {
        (0..self.coords.len()).filter(|i| self.keep[*i]).collect()
    }

    /// Re-insert the skipped vertex farthest from the segment `start end`.
    fn refine(&mut self, start: usize, end: usize) {
        let (a, b) = (self.coords[start], self.coords[end]);
        let farthest = (start + 1..end).max_by(|i, j| {
            segment_distance(self.coords[*i], a, b)
                .total_cmp(&segment_distance(self.coords[*j], a, b))
        });
        if let Some(i) = farthest {
            self.keep[i] = true;
        }
    }

    fn keep_ring_valid(&mut self) {
        if self.kind != SequenceKind::Ring {
            return;
        }
        loop {
            let kept = self.kept();
            if kept.len() >= 4 || kept.len() == self.coords.len() {
                return;
            }
            let widest = kept
                .windows(2)
                .filter(|pair| pair[1] - pair[0] > 1)
                .max_by(|p, q| self.skipped_extent(p).total_cmp(&self.skipped_extent(q)));
            match widest {
                Some(pair) => self.refine(pair[0], pair[1]),
                None => return,
            }
        }
    }

    fn skipped_extent(&self, pair: &[usize]) -> f64 {
        let (a, b) = (self.coords[pair[0]], self.coords[pair[1]]);
        (pair[0] + 1..pair[1])
            .map(|i| segment_distance(self.coords[i], a, b))
            .fold(0.0, f64::max)
    }

    fn into_coords(self) -> Vec<Coord> {
        self.coords
            .into_iter()
            .zip(self.keep)
            .filter_map(|(coord, keep)| keep.then_some(coord))
            .collect()
    }
}

/// Keep-mask of the Douglas-Peucker simplification of `coords`.
fn douglas_peucker(coords: &[Coord], tolerance: f64) -> Vec<bool> {
    let mut keep = vec![false; coords.len()];
    if coords.len() < 3 {
        keep.fill(true);
        return keep;
    }
    let last = coords.len() - 1;
    keep[0] = true;
    keep[last] = true;

    let mut stack = vec![(0, last)];
    while let Some((start, end)) = stack.pop() {
        let (a, b) = (coords[start], coords[end]);
        let farthest = (start + 1..end)
            .map(|i| (i, segment_distance(coords[i], a, b)))
            .max_by(|p, q| p.1.total_cmp(&q.1));
        if let Some((i, distance)) = farthest {
            if distance > tolerance {
                keep[i] = true;
                stack.push((start, i));
                stack.push((i, end));
            }
        }
    }
    keep
}

struct Segment {
    sequence: usize,
    start: usize,
    end: usize,
    line: Line,
}

/// The first simplified segment that conflicts with any other current segment or vertex.
fn find_conflict(sequences: &[Sequence]) -> Option<(usize, usize, usize)> {
    let mut segments: Vec<Segment> = Vec::new();
    let mut vertices: Vec<(usize, usize, Coord)> = Vec::new();
    for (index, sequence) in sequences.iter().enumerate() {
        let kept = sequence.kept();
        vertices.extend(kept.iter().map(|i| (index, *i, sequence.coords[*i])));
        if sequence.kind == SequenceKind::Point {
            continue;
        }
        segments.extend(kept.windows(2).map(|pair| Segment {
            sequence: index,
            start: pair[0],
            end: pair[1],
            line: Line::new(sequence.coords[pair[0]], sequence.coords[pair[1]]),
        }));
    }

    segments
        .iter()
        .enumerate()
        .filter(|(_, segment)| segment.end - segment.start > 1)
        .find(|(i, segment)| {
            segments
                .iter()
                .enumerate()
                .any(|(j, other)| *i != j && conflicts(segment.line, other.line))
                || sweeps_vertex(&sequences[segment.sequence], segment, &vertices)
        })
        .map(|(_, segment)| (segment.sequence, segment.start, segment.end))
}

/// Whether replacing the chain under `segment` would move any other vertex to its other side.
fn sweeps_vertex(
    sequence: &Sequence,
    segment: &Segment,
    vertices: &[(usize, usize, Coord)],
) -> bool {
    let chain = Polygon::new(
        LineString::new(sequence.coords[segment.start..=segment.end].to_vec()),
        vec![],
    );
    vertices
        .iter()
        .filter(|(index, i, _)| {
            *index != segment.sequence || !(segment.start..=segment.end).contains(i)
        })
        .any(|(_, _, coord)| chain.contains(&Point::from(*coord)))
}

/// Whether two segments meet anywhere other than a shared endpoint.
fn conflicts(a: Line, b: Line) -> bool {
    match line_intersection(a, b) {
        None => false,
        Some(LineIntersection::SinglePoint {
            intersection,
            is_proper,
        }) => {
            let shared = (intersection == a.start || intersection == a.end)
                && (intersection == b.start || intersection == b.end);
            is_proper || !shared
        }
        Some(LineIntersection::Collinear { intersection }) => intersection.start != intersection.end,
    }
}
