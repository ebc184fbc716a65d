use geo::{Coord, Geometry};

use crate::algorithm::geo::utils::{
    closest_on_segment, coord_key, distance, map_sequences, segments, unique_coords,
    SequenceKind,
};

/// Snap the vertices and segments of `geometry` to the vertices of `reference`.
///
/// Each vertex moves to the nearest reference vertex within `tolerance`. Afterwards, every
/// reference vertex within `tolerance` of a segment, and not already a vertex, is inserted into
/// the nearest such segment. Points only snap their vertex.
pub(crate) fn snap(geometry: &Geometry, reference: &Geometry, tolerance: f64) -> Geometry {
    let targets = unique_coords(reference);
    if targets.is_empty() {
        return geometry.clone();
    }
    map_sequences(geometry, &mut |coords, kind| {
        let snapped: Vec<Coord> = coords
            .iter()
            .map(|coord| snap_vertex(*coord, &targets, tolerance))
            .collect();
        match kind {
            SequenceKind::Point => snapped,
            SequenceKind::Line | SequenceKind::Ring => {
                snap_segments(snapped, &targets, tolerance)
            }
        }
    })
}

fn snap_vertex(coord: Coord, targets: &[Coord], tolerance: f64) -> Coord {
    targets
        .iter()
        .map(|target| (*target, distance(coord, *target)))
        .filter(|(_, d)| *d <= tolerance)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map_or(coord, |(target, _)| target)
}

fn snap_segments(coords: Vec<Coord>, targets: &[Coord], tolerance: f64) -> Vec<Coord> {
    if coords.len() < 2 {
        return coords;
    }
    let vertices: Vec<(u64, u64)> = coords.iter().map(|coord| coord_key(*coord)).collect();

    // (segment index, position along it, target)
    let mut inserts: Vec<(usize, f64, Coord)> = Vec::new();
    for target in targets {
        if vertices.contains(&coord_key(*target)) {
            continue;
        }
        let nearest = segments(&coords)
            .enumerate()
            .map(|(i, (a, b))| {
                let (closest, t) = closest_on_segment(*target, a, b);
                (i, t, distance(*target, closest))
            })
            .filter(|(_, t, d)| *d <= tolerance && *t > 0.0 && *t < 1.0)
            .min_by(|a, b| a.2.total_cmp(&b.2));
        if let Some((i, t, _)) = nearest {
            inserts.push((i, t, *target));
        }
    }
    if inserts.is_empty() {
        return dedup(coords);
    }
    inserts.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.total_cmp(&b.1)));

    let mut snapped = Vec::with_capacity(coords.len() + inserts.len());
    let mut pending = inserts.into_iter().peekable();
    for (i, coord) in coords.iter().enumerate() {
        snapped.push(*coord);
        while let Some((_, _, target)) = pending.next_if(|(segment, _, _)| *segment == i) {
            snapped.push(target);
        }
    }
    dedup(snapped)
}

fn dedup(mut coords: Vec<Coord>) -> Vec<Coord> {
    coords.dedup();
    coords
}
