use serde::{Deserialize, Serialize};

/// A furniture item. `popularity` and `stock` drive ordering and
/// availability but are never sent to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chair {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub thumbnail: String,
    pub price: i64,
    pub height: i64,
    pub width: i64,
    pub depth: i64,
    pub color: String,
    pub features: String,
    pub kind: String,
    #[serde(skip)]
    pub popularity: i64,
    #[serde(skip)]
    pub stock: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChairSearchResponse {
    pub count: i64,
    pub chairs: Vec<Chair>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChairListResponse {
    pub chairs: Vec<Chair>,
}
