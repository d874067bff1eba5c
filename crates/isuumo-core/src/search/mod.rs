pub mod dimension;
pub mod filter;
pub mod geo;

pub use dimension::{DoorFit, RECOMMEND_LIMIT, RecommendQuery, build_recommend_query, door_fits};
pub use filter::{
    Pagination, SearchPredicate, SearchQuery, build_chair_search, build_estate_search,
};
pub use geo::{BoundingBox, NAZOTTE_LIMIT, polygon_contains, select_in_polygon};
