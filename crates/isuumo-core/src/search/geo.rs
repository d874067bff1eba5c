//! Polygon ("nazotte") search support: bounding-box pre-filter plus an exact
//! point-in-polygon test over the fetched candidates.

use crate::error::{IsuumoError, Result};
use crate::models::{Coordinate, Estate};

/// Maximum number of estates a nazotte search returns.
pub const NAZOTTE_LIMIT: usize = 50;

const EDGE_EPSILON: f64 = 1e-12;

/// `top_left` holds the minimum latitude/longitude, `bottom_right` the maximum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub top_left: Coordinate,
    pub bottom_right: Coordinate,
}

impl BoundingBox {
    pub fn from_polygon(polygon: &[Coordinate]) -> Result<Self> {
        let (first, rest) = polygon
            .split_first()
            .ok_or_else(|| IsuumoError::BadRequest("polygon has no coordinates".to_string()))?;
        let seed = Self {
            top_left: *first,
            bottom_right: *first,
        };
        Ok(rest.iter().fold(seed, |mut bbox, point| {
            bbox.top_left.latitude = bbox.top_left.latitude.min(point.latitude);
            bbox.top_left.longitude = bbox.top_left.longitude.min(point.longitude);
            bbox.bottom_right.latitude = bbox.bottom_right.latitude.max(point.latitude);
            bbox.bottom_right.longitude = bbox.bottom_right.longitude.max(point.longitude);
            bbox
        }))
    }

    #[must_use]
    pub fn contains(&self, point: Coordinate) -> bool {
        (self.top_left.latitude..=self.bottom_right.latitude).contains(&point.latitude)
            && (self.top_left.longitude..=self.bottom_right.longitude).contains(&point.longitude)
    }
}

/// Exact containment in the closed polygon formed by `polygon`'s vertices.
/// Points on an edge or vertex count as contained, so a single-vertex polygon
/// contains exactly that vertex.
#[must_use]
pub fn polygon_contains(polygon: &[Coordinate], point: Coordinate) -> bool {
    if polygon.is_empty() {
        return false;
    }
    if edges(polygon).any(|(a, b)| on_segment(a, b, point)) {
        return true;
    }

    let mut inside = false;
    for (a, b) in edges(polygon) {
        if (a.longitude > point.longitude) != (b.longitude > point.longitude) {
            let crossing = (b.latitude - a.latitude) * (point.longitude - a.longitude)
                / (b.longitude - a.longitude)
                + a.latitude;
            if point.latitude < crossing {
                inside = !inside;
            }
        }
    }
    inside
}

/// Keeps candidates inside `polygon`, preserving their order, and caps the
/// result at [`NAZOTTE_LIMIT`]. Candidates outside `bbox` are rejected before
/// the exact test.
#[must_use]
pub fn select_in_polygon(
    polygon: &[Coordinate],
    bbox: &BoundingBox,
    candidates: impl IntoIterator<Item = Estate>,
) -> Vec<Estate> {
    let mut kept = Vec::new();
    for estate in candidates {
        let position = estate.position();
        if bbox.contains(position) && polygon_contains(polygon, position) {
            kept.push(estate);
        }
        if kept.len() > NAZOTTE_LIMIT {
            break;
        }
    }
    kept.truncate(NAZOTTE_LIMIT);
    kept
}

fn edges(polygon: &[Coordinate]) -> impl Iterator<Item = (Coordinate, Coordinate)> + '_ {
    polygon
        .iter()
        .zip(polygon.iter().cycle().skip(1))
        .map(|(a, b)| (*a, *b))
}

fn on_segment(a: Coordinate, b: Coordinate, p: Coordinate) -> bool {
    let cross = (b.latitude - a.latitude) * (p.longitude - a.longitude)
        - (b.longitude - a.longitude) * (p.latitude - a.latitude);
    if cross.abs() > EDGE_EPSILON {
        return false;
    }
    p.latitude >= a.latitude.min(b.latitude)
        && p.latitude <= a.latitude.max(b.latitude)
        && p.longitude >= a.longitude.min(b.longitude)
        && p.longitude <= a.longitude.max(b.longitude)
}
