use std::time::Duration;

use rusqlite::types::Value;
use tracing::debug;

use crate::catalog::{ChairSearchCondition, EstateSearchCondition, RangeCondition};
use crate::error::{IsuumoError, Result};
use crate::models::{ChairSearchParams, EstateSearchParams};

pub(crate) const CHAIR_COLUMNS: &str =
    "id, name, description, thumbnail, price, height, width, depth, color, features, kind, popularity, stock";
pub(crate) const ESTATE_COLUMNS: &str = "id, name, description, thumbnail, address, latitude, longitude, rent, door_height, door_width, features, popularity";

const AVAILABILITY_CLAUSE: &str = "stock > 0";
const SEARCH_ORDER: &str = "ORDER BY popularity DESC, id ASC";

/// Conjunction of filter clauses with their positional arguments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchPredicate {
    clauses: Vec<String>,
    args: Vec<Value>,
}

impl SearchPredicate {
    #[must_use]
    pub fn clauses(&self) -> &[String] {
        &self.clauses
    }

    #[must_use]
    pub fn args(&self) -> &[Value] {
        &self.args
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    #[must_use]
    pub fn where_clause(&self) -> String {
        self.clauses.join(" AND ")
    }

    fn push(&mut self, clause: impl Into<String>, arg: Option<Value>) {
        self.clauses.push(clause.into());
        if let Some(arg) = arg {
            self.args.push(arg);
        }
    }

    fn push_range(
        &mut self,
        column: &str,
        condition: &RangeCondition,
        raw: Option<&str>,
    ) -> Result<()> {
        let Some(raw) = selected(raw) else {
            return Ok(());
        };
        let bucket = condition.resolve(raw)?;
        self.push(format!("{column} = ?"), Some(Value::Integer(bucket.id)));
        Ok(())
    }

    fn push_equals(&mut self, column: &str, raw: Option<&str>) {
        if let Some(raw) = selected(raw) {
            self.push(format!("{column} = ?"), Some(Value::Text(raw.to_string())));
        }
    }

    /// One substring clause per comma-separated token; a record must contain
    /// all of them. Returns the number of tokens added.
    fn push_features(&mut self, raw: Option<&str>) -> usize {
        let Some(raw) = selected(raw) else {
            return 0;
        };
        let mut added = 0;
        for token in raw.split(',') {
            self.push(
                "features LIKE '%' || ? || '%'",
                Some(Value::Text(token.to_string())),
            );
            added += 1;
        }
        added
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: i64,
    pub per_page: i64,
}

impl Pagination {
    pub fn parse(page: Option<&str>, per_page: Option<&str>) -> Result<Self> {
        let page = parse_page_param("page", page)?;
        let per_page = parse_page_param("perPage", per_page)?;
        Ok(Self { page, per_page })
    }

    pub fn offset(self) -> Result<i64> {
        self.page
            .checked_mul(self.per_page)
            .ok_or_else(|| IsuumoError::BadRequest("page offset overflows".to_string()))
    }
}

fn parse_page_param(name: &str, raw: Option<&str>) -> Result<i64> {
    let raw = raw.ok_or_else(|| IsuumoError::BadRequest(format!("{name} is required")))?;
    let value = raw
        .trim()
        .parse::<i64>()
        .map_err(|_| IsuumoError::BadRequest(format!("{name} must be an integer: {raw:?}")))?;
    if value < 0 {
        return Err(IsuumoError::BadRequest(format!(
            "{name} must not be negative: {value}"
        )));
    }
    Ok(value)
}

/// Count query and page query sharing one predicate.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub predicate: SearchPredicate,
    pub pagination: Pagination,
    pub count_sql: String,
    pub page_sql: String,
}

impl SearchQuery {
    fn new(table: &str, columns: &str, predicate: SearchPredicate, pagination: Pagination) -> Self {
        let where_clause = predicate.where_clause();
        let count_sql = format!("SELECT COUNT(id) FROM {table} WHERE {where_clause}");
        let page_sql =
            format!("SELECT {columns} FROM {table} WHERE {where_clause} {SEARCH_ORDER} LIMIT ? OFFSET ?");
        Self {
            predicate,
            pagination,
            count_sql,
            page_sql,
        }
    }

    #[must_use]
    pub fn count_args(&self) -> &[Value] {
        self.predicate.args()
    }

    pub fn page_args(&self) -> Result<Vec<Value>> {
        let mut args = self.predicate.args().to_vec();
        args.push(Value::Integer(self.pagination.per_page));
        args.push(Value::Integer(self.pagination.offset()?));
        Ok(args)
    }
}

/// Builds the chair search. Stock availability is always required on top of
/// the caller's selections.
pub fn build_chair_search(
    condition: &ChairSearchCondition,
    params: &ChairSearchParams,
    feature_throttle: Duration,
) -> Result<SearchQuery> {
    let mut predicate = SearchPredicate::default();
    predicate.push_range("price_range", &condition.price, params.price_range_id.as_deref())?;
    predicate.push_range(
        "height_range",
        &condition.height,
        params.height_range_id.as_deref(),
    )?;
    predicate.push_range("width_range", &condition.width, params.width_range_id.as_deref())?;
    predicate.push_range("depth_range", &condition.depth, params.depth_range_id.as_deref())?;
    predicate.push_equals("kind", params.kind.as_deref());
    predicate.push_equals("color", params.color.as_deref());
    let feature_tokens = predicate.push_features(params.features.as_deref());
    throttle_multi_feature(feature_tokens, feature_throttle);

    if predicate.is_empty() {
        return Err(IsuumoError::BadRequest(
            "chair search requires at least one filter".to_string(),
        ));
    }
    predicate.push(AVAILABILITY_CLAUSE, None);

    let pagination = Pagination::parse(params.page.as_deref(), params.per_page.as_deref())?;
    let query = SearchQuery::new("chair", CHAIR_COLUMNS, predicate, pagination);
    debug!(predicate = %query.predicate.where_clause(), "built chair search");
    Ok(query)
}

pub fn build_estate_search(
    condition: &EstateSearchCondition,
    params: &EstateSearchParams,
    feature_throttle: Duration,
) -> Result<SearchQuery> {
    let mut predicate = SearchPredicate::default();
    predicate.push_range(
        "door_height_range",
        &condition.door_height,
        params.door_height_range_id.as_deref(),
    )?;
    predicate.push_range(
        "door_width_range",
        &condition.door_width,
        params.door_width_range_id.as_deref(),
    )?;
    predicate.push_range("rent_range", &condition.rent, params.rent_range_id.as_deref())?;
    let feature_tokens = predicate.push_features(params.features.as_deref());
    throttle_multi_feature(feature_tokens, feature_throttle);

    if predicate.is_empty() {
        return Err(IsuumoError::BadRequest(
            "estate search requires at least one filter".to_string(),
        ));
    }

    let pagination = Pagination::parse(params.page.as_deref(), params.per_page.as_deref())?;
    let query = SearchQuery::new("estate", ESTATE_COLUMNS, predicate, pagination);
    debug!(predicate = %query.predicate.where_clause(), "built estate search");
    Ok(query)
}

// Multi-feature searches are deliberately slowed down. Not cancellable.
fn throttle_multi_feature(tokens: usize, delay: Duration) {
    if tokens > 1 && !delay.is_zero() {
        std::thread::sleep(delay);
    }
}

fn selected(raw: Option<&str>) -> Option<&str> {
    raw.filter(|value| !value.is_empty())
}
