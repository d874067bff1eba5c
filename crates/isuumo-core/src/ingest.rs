//! CSV bulk-load parsing for both catalogs.
//!
//! Files carry no header row. Chair rows have 13 fields and estate rows 12,
//! in storage column order. Any malformed row rejects the whole file.

use std::str::FromStr;

use csv::{ReaderBuilder, StringRecord};

use crate::error::{IsuumoError, Result};
use crate::models::{Chair, Estate};

pub const CHAIR_CSV_FIELDS: usize = 13;
pub const ESTATE_CSV_FIELDS: usize = 12;

pub fn parse_chairs_csv(input: &[u8]) -> Result<Vec<Chair>> {
    read_records(input, CHAIR_CSV_FIELDS)?
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let mut cursor = RecordCursor::new(record, index + 1);
            Ok(Chair {
                id: cursor.next_parsed("id")?,
                name: cursor.next_string("name")?,
                description: cursor.next_string("description")?,
                thumbnail: cursor.next_string("thumbnail")?,
                price: cursor.next_parsed("price")?,
                height: cursor.next_parsed("height")?,
                width: cursor.next_parsed("width")?,
                depth: cursor.next_parsed("depth")?,
                color: cursor.next_string("color")?,
                features: cursor.next_string("features")?,
                kind: cursor.next_string("kind")?,
                popularity: cursor.next_parsed("popularity")?,
                stock: cursor.next_parsed("stock")?,
            })
        })
        .collect()
}

pub fn parse_estates_csv(input: &[u8]) -> Result<Vec<Estate>> {
    read_records(input, ESTATE_CSV_FIELDS)?
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let mut cursor = RecordCursor::new(record, index + 1);
            Ok(Estate {
                id: cursor.next_parsed("id")?,
                name: cursor.next_string("name")?,
                description: cursor.next_string("description")?,
                thumbnail: cursor.next_string("thumbnail")?,
                address: cursor.next_string("address")?,
                latitude: cursor.next_parsed("latitude")?,
                longitude: cursor.next_parsed("longitude")?,
                rent: cursor.next_parsed("rent")?,
                door_height: cursor.next_parsed("door_height")?,
                door_width: cursor.next_parsed("door_width")?,
                features: cursor.next_string("features")?,
                popularity: cursor.next_parsed("popularity")?,
            })
        })
        .collect()
}

fn read_records(input: &[u8], expected_fields: usize) -> Result<Vec<StringRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);

    let mut records = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let record = result?;
        if record.len() != expected_fields {
            return Err(IsuumoError::BadRequest(format!(
                "csv row {} has {} fields, expected {expected_fields}",
                index + 1,
                record.len()
            )));
        }
        records.push(record);
    }
    Ok(records)
}

/// Walks one record left to right, naming the field on failure.
struct RecordCursor<'a> {
    record: &'a StringRecord,
    row: usize,
    position: usize,
}

impl<'a> RecordCursor<'a> {
    const fn new(record: &'a StringRecord, row: usize) -> Self {
        Self {
            record,
            row,
            position: 0,
        }
    }

    fn next_raw(&mut self, field: &str) -> Result<&'a str> {
        let value = self.record.get(self.position).ok_or_else(|| {
            IsuumoError::BadRequest(format!("csv row {}: missing {field}", self.row))
        })?;
        self.position += 1;
        Ok(value)
    }

    fn next_string(&mut self, field: &str) -> Result<String> {
        self.next_raw(field).map(str::to_string)
    }

    fn next_parsed<T: FromStr>(&mut self, field: &str) -> Result<T> {
        let row = self.row;
        let raw = self.next_raw(field)?;
        raw.parse::<T>().map_err(|_| {
            IsuumoError::BadRequest(format!("csv row {row}: invalid {field} {raw:?}"))
        })
    }
}
