use rusqlite::Connection;

use crate::error::{IsuumoError, Result};

use super::SqliteCatalogStore;

// The *_range columns hold classifier buckets written at ingest time.
const MIGRATION_SCHEMA_SQL: &str = r"
    PRAGMA journal_mode = WAL;
    CREATE TABLE IF NOT EXISTS chair (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        description TEXT NOT NULL,
        thumbnail TEXT NOT NULL,
        price INTEGER NOT NULL,
        height INTEGER NOT NULL,
        width INTEGER NOT NULL,
        depth INTEGER NOT NULL,
        color TEXT NOT NULL,
        features TEXT NOT NULL,
        kind TEXT NOT NULL,
        popularity INTEGER NOT NULL,
        stock INTEGER NOT NULL,
        price_range INTEGER NOT NULL,
        height_range INTEGER NOT NULL,
        width_range INTEGER NOT NULL,
        depth_range INTEGER NOT NULL
    );

    CREATE TABLE IF NOT EXISTS estate (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        description TEXT NOT NULL,
        thumbnail TEXT NOT NULL,
        address TEXT NOT NULL,
        latitude REAL NOT NULL,
        longitude REAL NOT NULL,
        rent INTEGER NOT NULL,
        door_height INTEGER NOT NULL,
        door_width INTEGER NOT NULL,
        features TEXT NOT NULL,
        popularity INTEGER NOT NULL,
        door_width_range INTEGER NOT NULL,
        door_height_range INTEGER NOT NULL,
        rent_range INTEGER NOT NULL
    );

    CREATE INDEX IF NOT EXISTS idx_chair_popularity ON chair(popularity DESC, id ASC);
    CREATE INDEX IF NOT EXISTS idx_chair_price ON chair(price ASC, id ASC);
    CREATE INDEX IF NOT EXISTS idx_chair_price_range ON chair(price_range);
    CREATE INDEX IF NOT EXISTS idx_chair_size_ranges ON chair(width_range, height_range, depth_range);
    CREATE INDEX IF NOT EXISTS idx_estate_popularity ON estate(popularity DESC, id ASC);
    CREATE INDEX IF NOT EXISTS idx_estate_rent ON estate(rent ASC, id ASC);
    CREATE INDEX IF NOT EXISTS idx_estate_rent_range ON estate(rent_range);
    CREATE INDEX IF NOT EXISTS idx_estate_door_ranges ON estate(door_width_range, door_height_range);
    CREATE INDEX IF NOT EXISTS idx_estate_location ON estate(latitude, longitude);
";

const CHAIR_RANGE_COLUMNS: [&str; 4] = ["price_range", "height_range", "width_range", "depth_range"];
const ESTATE_RANGE_COLUMNS: [&str; 3] = ["door_width_range", "door_height_range", "rent_range"];

impl SqliteCatalogStore {
    pub fn migrate(&self) -> Result<()> {
        let conn = self
            .conn
            .lock()
            .map_err(|_| IsuumoError::lock_poisoned("sqlite"))?;
        conn.execute_batch(MIGRATION_SCHEMA_SQL)?;
        for column in CHAIR_RANGE_COLUMNS {
            ensure_required_column(&conn, "chair", column)?;
        }
        for column in ESTATE_RANGE_COLUMNS {
            ensure_required_column(&conn, "estate", column)?;
        }
        drop(conn);
        Ok(())
    }
}

fn has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table})"))?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(1))?;
    for row in rows {
        if row? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

fn ensure_required_column(conn: &Connection, table: &str, column: &str) -> Result<()> {
    if has_column(conn, table, column)? {
        Ok(())
    } else {
        Err(IsuumoError::Validation(format!(
            "unsupported {table} schema: {column} is missing; reset the catalog database"
        )))
    }
}
