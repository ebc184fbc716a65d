use geo::{coord, BoundingRect, Coord, Geometry, GeometryCollection, LineString, MultiLineString, Polygon, Rect};

use crate::algorithm::geo::utils::sites;
use crate::geometry::empty;

/// What a cell edge borders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edge {
    Frame,
    Site(usize),
}

/// The Voronoi diagram of the vertices of `geometry`.
///
/// Cells are clipped to the sites' bounding box grown by its larger side on every side, and
/// further extended to cover `envelope` if one is given. Cells come back in site order (first
/// occurrence of each distinct vertex). With `only_edges` the result is instead a multi line
/// string of the edges shared by two cells.
pub(crate) fn voronoi_polygons(
    geometry: &Geometry,
    envelope: Option<&Geometry>,
    tolerance: f64,
    only_edges: bool,
) -> Geometry {
    let sites = sites(geometry, tolerance);
    if sites.len() < 2 {
        return empty();
    }

    let frame = frame(&sites, envelope.and_then(|envelope| envelope.bounding_rect()));
    let cells: Vec<Vec<(Coord, Edge)>> = (0..sites.len()).map(|i| cell(&sites, i, frame)).collect();

    if only_edges {
        let edges: Vec<LineString> = cells
            .iter()
            .enumerate()
            .flat_map(|(i, cell)| {
                (0..cell.len()).filter_map(move |k| {
                    let (start, end) = (cell[k].0, cell[(k + 1) % cell.len()].0);
                    match cell[k].1 {
                        Edge::Site(j) if j > i && start != end => {
                            Some(LineString::new(vec![start, end]))
                        }
                        _ => None,
                    }
                })
            })
            .collect();
        if edges.is_empty() {
            return empty();
        }
        return Geometry::MultiLineString(MultiLineString::new(edges));
    }

    Geometry::GeometryCollection(GeometryCollection::new_from(
        cells
            .into_iter()
            .filter(|cell| cell.len() >= 3)
            .map(|cell| {
                Geometry::Polygon(Polygon::new(
                    cell.into_iter().map(|(coord, _)| coord).collect(),
                    vec![],
                ))
            })
            .collect(),
    ))
}

fn frame(sites: &[Coord], envelope: Option<Rect>) -> Rect {
    let (mut min, mut max) = (sites[0], sites[0]);
    for site in sites {
        min = coord! { x: min.x.min(site.x), y: min.y.min(site.y) };
        max = coord! { x: max.x.max(site.x), y: max.y.max(site.y) };
    }
    let grow = (max.x - min.x).max(max.y - min.y);
    min = coord! { x: min.x - grow, y: min.y - grow };
    max = coord! { x: max.x + grow, y: max.y + grow };
    if let Some(envelope) = envelope {
        min = coord! { x: min.x.min(envelope.min().x), y: min.y.min(envelope.min().y) };
        max = coord! { x: max.x.max(envelope.max().x), y: max.y.max(envelope.max().y) };
    }
    Rect::new(min, max)
}

/// The cell of site `i`: the frame clipped by the half-plane nearer to `i` than to every other
/// site. Each vertex carries the label of the edge that starts at it.
fn cell(sites: &[Coord], i: usize, frame: Rect) -> Vec<(Coord, Edge)> {
    let (min, max) = (frame.min(), frame.max());
    let mut cell = vec![
        (min, Edge::Frame),
        (coord! { x: max.x, y: min.y }, Edge::Frame),
        (max, Edge::Frame),
        (coord! { x: min.x, y: max.y }, Edge::Frame),
    ];
    for (j, other) in sites.iter().enumerate() {
        if j != i && !cell.is_empty() {
            cell = clip(&cell, sites[i], *other, Edge::Site(j));
        }
    }
    cell
}

/// Sutherland-Hodgman clip against the half-plane closer to `site` than to `other`.
///
/// A vertex lying on the bisector is kept once, never doubled by a crossing at the same place.
fn clip(polygon: &[(Coord, Edge)], site: Coord, other: Coord, label: Edge) -> Vec<(Coord, Edge)> {
    let normal = other - site;
    let mid = (site + other) / 2.0;
    let side = |p: Coord| (p.x - mid.x) * normal.x + (p.y - mid.y) * normal.y;

    let mut clipped = Vec::with_capacity(polygon.len() + 1);
    for (k, (p, edge)) in polygon.iter().enumerate() {
        let q = polygon[(k + 1) % polygon.len()].0;
        let (sp, sq) = (side(*p), side(q));
        let crossing = || *p + (q - *p) * (sp / (sp - sq));
        match (sp <= 0.0, sq <= 0.0) {
            (true, true) => clipped.push((*p, *edge)),
            // leaving through `p` itself: the bisector edge starts at `p`
            (true, false) if sp == 0.0 => clipped.push((*p, label)),
            (true, false) => {
                clipped.push((*p, *edge));
                clipped.push((crossing(), label));
            }
            // entering through `q` itself: `q` is pushed on the next step
            (false, true) if sq == 0.0 => {}
            (false, true) => clipped.push((crossing(), *edge)),
            (false, false) => {}
        }
    }
    clipped
}
