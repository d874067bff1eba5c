use rusqlite::{OptionalExtension, Row, params, params_from_iter};

use crate::classify::{classify_rent, classify_size};
use crate::error::Result;
use crate::models::{Estate, EstateSearchResponse};
use crate::search::filter::ESTATE_COLUMNS;
use crate::search::{BoundingBox, RecommendQuery, SearchQuery};

use super::{SqliteCatalogStore, usize_to_i64_saturating};

impl SqliteCatalogStore {
    /// Inserts all estates in one transaction, deriving the bucket columns.
    pub fn insert_estates(&self, estates: &[Estate]) -> Result<usize> {
        self.with_tx(|tx| {
            let mut stmt = tx.prepare(
                r"
                INSERT INTO estate(
                    id, name, description, thumbnail, address, latitude, longitude,
                    rent, door_height, door_width, features, popularity,
                    door_width_range, door_height_range, rent_range
                )
                VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)
                ",
            )?;
            for estate in estates {
                stmt.execute(params![
                    estate.id,
                    estate.name,
                    estate.description,
                    estate.thumbnail,
                    estate.address,
                    estate.latitude,
                    estate.longitude,
                    estate.rent,
                    estate.door_height,
                    estate.door_width,
                    estate.features,
                    estate.popularity,
                    classify_size(estate.door_width),
                    classify_size(estate.door_height),
                    classify_rent(estate.rent),
                ])?;
            }
            Ok(estates.len())
        })
    }

    pub fn get_estate(&self, id: i64) -> Result<Option<Estate>> {
        self.with_conn(|conn| {
            let estate = conn
                .query_row(
                    &format!("SELECT {ESTATE_COLUMNS} FROM estate WHERE id = ?1 LIMIT 1"),
                    params![id],
                    estate_from_row,
                )
                .optional()?;
            Ok(estate)
        })
    }

    pub fn estate_exists(&self, id: i64) -> Result<bool> {
        self.with_conn(|conn| {
            let found = conn
                .query_row(
                    "SELECT id FROM estate WHERE id = ?1 LIMIT 1",
                    params![id],
                    |row| row.get::<_, i64>(0),
                )
                .optional()?;
            Ok(found.is_some())
        })
    }

    pub fn search_estates(&self, query: &SearchQuery) -> Result<EstateSearchResponse> {
        let page_args = query.page_args()?;
        self.with_conn(|conn| {
            let count = conn.query_row(
                &query.count_sql,
                params_from_iter(query.count_args().iter()),
                |row| row.get::<_, i64>(0),
            )?;
            let mut stmt = conn.prepare(&query.page_sql)?;
            let rows = stmt.query_map(params_from_iter(page_args.iter()), estate_from_row)?;

            let mut estates = Vec::new();
            for row in rows {
                estates.push(row?);
            }
            Ok(EstateSearchResponse { count, estates })
        })
    }

    pub fn low_priced_estates(&self, limit: usize) -> Result<Vec<Estate>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {ESTATE_COLUMNS} FROM estate ORDER BY rent ASC, id ASC LIMIT ?1"
            ))?;
            let rows = stmt.query_map(params![usize_to_i64_saturating(limit)], estate_from_row)?;

            let mut out = Vec::new();
            for row in rows {
                out.push(row?);
            }
            Ok(out)
        })
    }

    /// Every estate inside the (closed) box, most popular first.
    pub fn estates_in_bounding_box(&self, bbox: &BoundingBox) -> Result<Vec<Estate>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!(
                r"
                SELECT {ESTATE_COLUMNS} FROM estate
                WHERE latitude BETWEEN ?1 AND ?2 AND longitude BETWEEN ?3 AND ?4
                ORDER BY popularity DESC, id ASC
                "
            ))?;
            let rows = stmt.query_map(
                params![
                    bbox.top_left.latitude,
                    bbox.bottom_right.latitude,
                    bbox.top_left.longitude,
                    bbox.bottom_right.longitude,
                ],
                estate_from_row,
            )?;

            let mut out = Vec::new();
            for row in rows {
                out.push(row?);
            }
            Ok(out)
        })
    }

    pub fn recommend_estates(&self, query: &RecommendQuery) -> Result<Vec<Estate>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(&query.sql)?;
            let rows = stmt.query_map(params_from_iter(query.args.iter()), estate_from_row)?;

            let mut out = Vec::new();
            for row in rows {
                out.push(row?);
            }
            Ok(out)
        })
    }
}

fn estate_from_row(row: &Row<'_>) -> rusqlite::Result<Estate> {
    Ok(Estate {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        thumbnail: row.get(3)?,
        address: row.get(4)?,
        latitude: row.get(5)?,
        longitude: row.get(6)?,
        rent: row.get(7)?,
        door_height: row.get(8)?,
        door_width: row.get(9)?,
        features: row.get(10)?,
        popularity: row.get(11)?,
    })
}
