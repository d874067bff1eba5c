mod chair;
mod estate;
mod geo;
mod search;

pub use chair::{Chair, ChairListResponse, ChairSearchResponse};
pub use estate::{Estate, EstateListResponse, EstateSearchResponse};
pub use geo::{Coordinate, Coordinates};
pub use search::{ChairSearchParams, EstateSearchParams, InitializeResponse};
