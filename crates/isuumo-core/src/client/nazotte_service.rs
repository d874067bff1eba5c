use tracing::debug;

use crate::error::Result;
use crate::models::{Coordinate, EstateSearchResponse};
use crate::search::{BoundingBox, select_in_polygon};
use crate::state::usize_to_i64_saturating;

use super::Isuumo;

impl Isuumo {
    /// Estates inside the drawn polygon, most popular first, at most
    /// [`crate::search::NAZOTTE_LIMIT`].
    pub fn search_estates_in_polygon(&self, polygon: &[Coordinate]) -> Result<EstateSearchResponse> {
        let bbox = BoundingBox::from_polygon(polygon)?;
        let candidates = self.state.estates_in_bounding_box(&bbox)?;
        let fetched = candidates.len();
        let estates = select_in_polygon(polygon, &bbox, candidates);
        debug!(
            vertices = polygon.len(),
            fetched,
            kept = estates.len(),
            "nazotte search"
        );
        Ok(EstateSearchResponse {
            count: usize_to_i64_saturating(estates.len()),
            estates,
        })
    }
}
