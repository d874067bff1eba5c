use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::classify::{CHAIR_PRICE_THRESHOLDS, RENT_THRESHOLDS, SIZE_THRESHOLDS};
use crate::error::{IsuumoError, Result};

/// Sentinel used by the condition fixtures for an open range end.
pub const OPEN_BOUND: i64 = -1;

pub const CHAIR_CONDITION_FILE: &str = "chair_condition.json";
pub const ESTATE_CONDITION_FILE: &str = "estate_condition.json";

const SIZE_SUFFIX: &str = "cm";
const PRICE_SUFFIX: &str = "円";

const CHAIR_COLORS: &[&str] = &[
    "黒", "白", "赤", "青", "緑", "黄", "紫", "ピンク", "オレンジ", "水色", "ネイビー", "ベージュ",
];
const CHAIR_KINDS: &[&str] = &["ゲーミングチェア", "座椅子", "エルゴノミクス", "ハンモック"];
const CHAIR_FEATURES: &[&str] = &[
    "折りたたみ可",
    "肘掛け",
    "キャスター",
    "リクライニング",
    "高さ調節可",
    "フットレスト",
];
const ESTATE_FEATURES: &[&str] = &[
    "最上階",
    "防犯カメラ",
    "ウォークインクローゼット",
    "ワンルーム",
    "ルーフバルコニー付",
    "エアコン付き",
    "駐輪場あり",
    "プロパンガス",
    "駐車場あり",
    "防音室",
    "追い焚き風呂",
    "オートロック",
    "即入居可",
    "IHコンロ",
    "エレベーター",
    "トランクルーム",
    "バス・トイレ別",
    "ペット相談可",
    "温水洗浄便座",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeBucket {
    pub id: i64,
    pub min: i64,
    pub max: i64,
}

impl RangeBucket {
    #[must_use]
    pub const fn is_open_ended(&self) -> bool {
        self.max == OPEN_BOUND
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeCondition {
    pub prefix: String,
    pub suffix: String,
    pub ranges: Vec<RangeBucket>,
}

impl RangeCondition {
    /// Buckets `[-1, t0), [t0, t1), ..., [tn, -1)` for ascending thresholds.
    #[must_use]
    pub fn from_thresholds(prefix: &str, suffix: &str, thresholds: &[i64]) -> Self {
        let mut bounds = Vec::with_capacity(thresholds.len() + 2);
        bounds.push(OPEN_BOUND);
        bounds.extend_from_slice(thresholds);
        bounds.push(OPEN_BOUND);
        let ranges = bounds
            .windows(2)
            .zip(0_i64..)
            .map(|(pair, id)| RangeBucket {
                id,
                min: pair[0],
                max: pair[1],
            })
            .collect();
        Self {
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
            ranges,
        }
    }

    /// Maps a client-supplied bucket id to its bucket.
    pub fn resolve(&self, bucket_id: &str) -> Result<&RangeBucket> {
        let index = bucket_id.trim().parse::<i64>().map_err(|_| {
            IsuumoError::InvalidArgument(format!("range id is not an integer: {bucket_id:?}"))
        })?;
        usize::try_from(index)
            .ok()
            .and_then(|index| self.ranges.get(index))
            .ok_or_else(|| {
                IsuumoError::OutOfRange(format!(
                    "range id {index} outside 0..{}",
                    self.ranges.len()
                ))
            })
    }

    fn validate(&self, name: &str) -> Result<()> {
        let Some(last) = self.ranges.last() else {
            return Err(IsuumoError::Validation(format!(
                "range condition {name} has no ranges"
            )));
        };
        for (index, bucket) in self.ranges.iter().enumerate() {
            if usize::try_from(bucket.id).ok() != Some(index) {
                return Err(IsuumoError::Validation(format!(
                    "range condition {name}: bucket at position {index} has id {}",
                    bucket.id
                )));
            }
        }
        for pair in self.ranges.windows(2) {
            if pair[0].max == OPEN_BOUND || pair[0].max != pair[1].min {
                return Err(IsuumoError::Validation(format!(
                    "range condition {name}: bucket {} does not end where bucket {} starts",
                    pair[0].id, pair[1].id
                )));
            }
        }
        if !last.is_open_ended() {
            return Err(IsuumoError::Validation(format!(
                "range condition {name}: last bucket must be open-ended"
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListCondition {
    pub list: Vec<String>,
}

impl ListCondition {
    fn from_static(values: &[&str]) -> Self {
        Self {
            list: values.iter().map(ToString::to_string).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChairSearchCondition {
    pub width: RangeCondition,
    pub height: RangeCondition,
    pub depth: RangeCondition,
    pub price: RangeCondition,
    pub color: ListCondition,
    pub feature: ListCondition,
    pub kind: ListCondition,
}

impl Default for ChairSearchCondition {
    fn default() -> Self {
        Self {
            width: RangeCondition::from_thresholds("", SIZE_SUFFIX, &SIZE_THRESHOLDS),
            height: RangeCondition::from_thresholds("", SIZE_SUFFIX, &SIZE_THRESHOLDS),
            depth: RangeCondition::from_thresholds("", SIZE_SUFFIX, &SIZE_THRESHOLDS),
            price: RangeCondition::from_thresholds("", PRICE_SUFFIX, &CHAIR_PRICE_THRESHOLDS),
            color: ListCondition::from_static(CHAIR_COLORS),
            feature: ListCondition::from_static(CHAIR_FEATURES),
            kind: ListCondition::from_static(CHAIR_KINDS),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstateSearchCondition {
    pub door_width: RangeCondition,
    pub door_height: RangeCondition,
    pub rent: RangeCondition,
    pub feature: ListCondition,
}

impl Default for EstateSearchCondition {
    fn default() -> Self {
        Self {
            door_width: RangeCondition::from_thresholds("", SIZE_SUFFIX, &SIZE_THRESHOLDS),
            door_height: RangeCondition::from_thresholds("", SIZE_SUFFIX, &SIZE_THRESHOLDS),
            rent: RangeCondition::from_thresholds("", PRICE_SUFFIX, &RENT_THRESHOLDS),
            feature: ListCondition::from_static(ESTATE_FEATURES),
        }
    }
}

/// Range and list conditions for both catalogs, loaded once at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchConditions {
    pub chair: ChairSearchCondition,
    pub estate: EstateSearchCondition,
}

impl SearchConditions {
    /// Loads `chair_condition.json` and `estate_condition.json` from `dir`.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let chair: ChairSearchCondition =
            serde_json::from_slice(&std::fs::read(dir.join(CHAIR_CONDITION_FILE))?)?;
        let estate: EstateSearchCondition =
            serde_json::from_slice(&std::fs::read(dir.join(ESTATE_CONDITION_FILE))?)?;
        let conditions = Self { chair, estate };
        conditions.validate()?;
        Ok(conditions)
    }

    pub fn validate(&self) -> Result<()> {
        self.chair.width.validate("chair.width")?;
        self.chair.height.validate("chair.height")?;
        self.chair.depth.validate("chair.depth")?;
        self.chair.price.validate("chair.price")?;
        self.estate.door_width.validate("estate.doorWidth")?;
        self.estate.door_height.validate("estate.doorHeight")?;
        self.estate.rent.validate("estate.rent")?;
        Ok(())
    }
}
