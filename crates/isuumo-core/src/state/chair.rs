use rusqlite::{OptionalExtension, Row, params, params_from_iter};

use crate::classify::{classify_chair_price, classify_size};
use crate::error::Result;
use crate::models::{Chair, ChairSearchResponse};
use crate::search::SearchQuery;
use crate::search::filter::CHAIR_COLUMNS;

use super::{SqliteCatalogStore, usize_to_i64_saturating};

impl SqliteCatalogStore {
    /// Inserts all chairs in one transaction, deriving the bucket columns.
    pub fn insert_chairs(&self, chairs: &[Chair]) -> Result<usize> {
        self.with_tx(|tx| {
            let mut stmt = tx.prepare(
                r"
                INSERT INTO chair(
                    id, name, description, thumbnail, price, height, width, depth,
                    color, features, kind, popularity, stock,
                    price_range, height_range, width_range, depth_range
                )
                VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17)
                ",
            )?;
            for chair in chairs {
                stmt.execute(params![
                    chair.id,
                    chair.name,
                    chair.description,
                    chair.thumbnail,
                    chair.price,
                    chair.height,
                    chair.width,
                    chair.depth,
                    chair.color,
                    chair.features,
                    chair.kind,
                    chair.popularity,
                    chair.stock,
                    classify_chair_price(chair.price),
                    classify_size(chair.height),
                    classify_size(chair.width),
                    classify_size(chair.depth),
                ])?;
            }
            Ok(chairs.len())
        })
    }

    pub fn get_chair(&self, id: i64) -> Result<Option<Chair>> {
        self.with_conn(|conn| {
            let chair = conn
                .query_row(
                    &format!("SELECT {CHAIR_COLUMNS} FROM chair WHERE id = ?1 LIMIT 1"),
                    params![id],
                    chair_from_row,
                )
                .optional()?;
            Ok(chair)
        })
    }

    pub fn search_chairs(&self, query: &SearchQuery) -> Result<ChairSearchResponse> {
        let page_args = query.page_args()?;
        self.with_conn(|conn| {
            let count = conn.query_row(
                &query.count_sql,
                params_from_iter(query.count_args().iter()),
                |row| row.get::<_, i64>(0),
            )?;
            let mut stmt = conn.prepare(&query.page_sql)?;
            let rows = stmt.query_map(params_from_iter(page_args.iter()), chair_from_row)?;

            let mut chairs = Vec::new();
            for row in rows {
                chairs.push(row?);
            }
            Ok(ChairSearchResponse { count, chairs })
        })
    }

    /// Cheapest chairs still in stock.
    pub fn low_priced_chairs(&self, limit: usize) -> Result<Vec<Chair>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {CHAIR_COLUMNS} FROM chair WHERE stock > 0 ORDER BY price ASC, id ASC LIMIT ?1"
            ))?;
            let rows = stmt.query_map(params![usize_to_i64_saturating(limit)], chair_from_row)?;

            let mut out = Vec::new();
            for row in rows {
                out.push(row?);
            }
            Ok(out)
        })
    }

    /// Takes one unit of stock. Returns `false` when the chair is missing or
    /// sold out.
    pub fn buy_chair(&self, id: i64) -> Result<bool> {
        self.with_tx(|tx| {
            let available = tx
                .query_row(
                    "SELECT id FROM chair WHERE id = ?1 AND stock > 0",
                    params![id],
                    |row| row.get::<_, i64>(0),
                )
                .optional()?;
            if available.is_none() {
                return Ok(false);
            }
            tx.execute("UPDATE chair SET stock = stock - 1 WHERE id = ?1", params![id])?;
            Ok(true)
        })
    }
}

fn chair_from_row(row: &Row<'_>) -> rusqlite::Result<Chair> {
    Ok(Chair {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        thumbnail: row.get(3)?,
        price: row.get(4)?,
        height: row.get(5)?,
        width: row.get(6)?,
        depth: row.get(7)?,
        color: row.get(8)?,
        features: row.get(9)?,
        kind: row.get(10)?,
        popularity: row.get(11)?,
        stock: row.get(12)?,
    })
}
