//! Bucket classification for the persisted `*_range` columns.
//!
//! These thresholds are baked into every row written at ingest time. The
//! search path filters by bucket id equality, so changing a threshold here
//! without rewriting stored rows silently breaks existing data.

pub const SIZE_THRESHOLDS: [i64; 3] = [80, 110, 150];
pub const CHAIR_PRICE_THRESHOLDS: [i64; 5] = [3000, 6000, 9000, 12000, 15000];
pub const RENT_THRESHOLDS: [i64; 3] = [50000, 100_000, 150_000];

/// Bucket for chair width/height/depth and estate door width/height (0..=3).
#[must_use]
pub fn classify_size(value: i64) -> i64 {
    bucket_for(value, &SIZE_THRESHOLDS)
}

/// Bucket for chair price (0..=5).
#[must_use]
pub fn classify_chair_price(value: i64) -> i64 {
    bucket_for(value, &CHAIR_PRICE_THRESHOLDS)
}

/// Bucket for estate rent (0..=3).
#[must_use]
pub fn classify_rent(value: i64) -> i64 {
    bucket_for(value, &RENT_THRESHOLDS)
}

fn bucket_for(value: i64, thresholds: &[i64]) -> i64 {
    let index = thresholds
        .iter()
        .position(|upper| value < *upper)
        .unwrap_or(thresholds.len());
    i64::try_from(index).unwrap_or(i64::MAX)
}
