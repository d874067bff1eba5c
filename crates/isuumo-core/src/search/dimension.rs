use rusqlite::types::Value;

use super::filter::ESTATE_COLUMNS;

/// Maximum number of recommended estates per chair.
pub const RECOMMEND_LIMIT: i64 = 20;

/// Minimum door opening needed for one orientation of a chair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoorFit {
    pub door_width: i64,
    pub door_height: i64,
}

impl DoorFit {
    #[cfg(test)]
    pub(crate) const fn admits(self, door_width: i64, door_height: i64) -> bool {
        door_width >= self.door_width && door_height >= self.door_height
    }
}

/// The six ways to carry a chair through a door: every ordered pair of two
/// distinct dimensions mapped onto (door width, door height).
#[must_use]
pub const fn door_fits(width: i64, height: i64, depth: i64) -> [DoorFit; 6] {
    [
        fit(width, height),
        fit(width, depth),
        fit(height, width),
        fit(height, depth),
        fit(depth, width),
        fit(depth, height),
    ]
}

const fn fit(door_width: i64, door_height: i64) -> DoorFit {
    DoorFit {
        door_width,
        door_height,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecommendQuery {
    pub sql: String,
    pub args: Vec<Value>,
}

/// One query matching any estate whose door admits at least one orientation.
#[must_use]
pub fn build_recommend_query(width: i64, height: i64, depth: i64) -> RecommendQuery {
    let fits = door_fits(width, height, depth);
    let disjunction = fits
        .iter()
        .map(|_| "(door_width >= ? AND door_height >= ?)")
        .collect::<Vec<_>>()
        .join(" OR ");
    let mut args = fits
        .iter()
        .flat_map(|fit| [Value::Integer(fit.door_width), Value::Integer(fit.door_height)])
        .collect::<Vec<_>>();
    args.push(Value::Integer(RECOMMEND_LIMIT));

    RecommendQuery {
        sql: format!(
            "SELECT {ESTATE_COLUMNS} FROM estate WHERE {disjunction} ORDER BY popularity DESC, id ASC LIMIT ?"
        ),
        args,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permutations_follow_fixed_order() {
        let fits = door_fits(10, 20, 30);
        let pairs = fits
            .iter()
            .map(|fit| (fit.door_width, fit.door_height))
            .collect::<Vec<_>>();
        assert_eq!(
            pairs,
            vec![(10, 20), (10, 30), (20, 10), (20, 30), (30, 10), (30, 20)]
        );
    }

    #[test]
    fn door_admits_when_any_orientation_fits() {
        let fits = door_fits(10, 20, 30);
        let admits = |w: i64, h: i64| fits.iter().any(|fit| fit.admits(w, h));

        // (h, w): 20 >= 20, 10 >= 10
        assert!(admits(20, 10));
        // (d, h): 30 >= 25? no; (h, w): 25 >= 20 and 15 >= 10
        assert!(admits(25, 15));
        // (w, h) exactly
        assert!(admits(10, 20));
        // smallest dimension must pass the narrower side
        assert!(!admits(9, 100));
        assert!(!admits(100, 9));
        // both sides under the second-smallest dimension
        assert!(!admits(15, 15));
        assert!(!admits(19, 19));
    }

    #[test]
    fn query_binds_six_pairs_and_limit() {
        let query = build_recommend_query(10, 20, 30);
        assert_eq!(query.sql.matches("(door_width >= ? AND door_height >= ?)").count(), 6);
        assert_eq!(query.sql.matches(" OR ").count(), 5);
        assert!(query.sql.ends_with("ORDER BY popularity DESC, id ASC LIMIT ?"));

        let expected = [10, 20, 10, 30, 20, 10, 20, 30, 30, 10, 30, 20, RECOMMEND_LIMIT]
            .map(Value::Integer)
            .to_vec();
        assert_eq!(query.args, expected);
    }
}
