//! Free functions over `(x, y)` coordinate pairs.

use std::ops::Add;

use anyhow::{Context, Result, anyhow};

pub const ORIGIN: (i64, i64) = (0, 0);

pub fn pair<T>(x: T, y: T) -> (T, T) {
    (x, y)
}

/// First element of `items`; an empty slice is an out-of-bounds error.
pub fn first<T: Copy>(items: &[T]) -> Result<T> {
    items
        .first()
        .copied()
        .ok_or_else(|| anyhow!("index out of bounds: the len is 0 but the index is 0"))
}

pub fn identity<T>(value: T) -> T {
    value
}

/// Return `pair`, or a fresh `(0, 0)` when omitted.
pub fn make<T: Default>(pair: Option<(T, T)>) -> (T, T) {
    pair.unwrap_or_default()
}

/// Index-aligned, element-wise sum of two point sequences.
///
/// Sequences of unequal length are truncated to the shorter one.
pub fn add<T>(left: &[(T, T)], right: &[(T, T)]) -> Vec<(T, T)>
where
    T: Add<Output = T> + Copy,
{
    left.iter()
        .zip(right)
        .map(|(&(x1, y1), &(x2, y2))| (x1 + x2, y1 + y2))
        .collect()
}

/// Like [`add`] for integer points, but overflow is an error instead of a panic.
pub fn try_add(left: &[(i64, i64)], right: &[(i64, i64)]) -> Result<Vec<(i64, i64)>> {
    left.iter()
        .zip(right)
        .enumerate()
        .map(|(index, (&(x1, y1), &(x2, y2)))| -> Result<(i64, i64)> {
            let x = x1
                .checked_add(x2)
                .ok_or_else(|| anyhow!("x overflows at index {}: {} + {}", index, x1, x2))?;
            let y = y1
                .checked_add(y2)
                .ok_or_else(|| anyhow!("y overflows at index {}: {} + {}", index, y1, y2))?;
            Ok((x, y))
        })
        .collect()
}

/// Parse `"x,y"` into a point.
pub fn parse_point(raw: &str) -> Result<(i64, i64)> {
    let (x, y) = raw
        .split_once(',')
        .with_context(|| format!("point '{}' must look like x,y", raw))?;
    let x = x
        .trim()
        .parse()
        .with_context(|| format!("parse x of point '{}'", raw))?;
    let y = y
        .trim()
        .parse()
        .with_context(|| format!("parse y of point '{}'", raw))?;
    Ok((x, y))
}

/// Parse whitespace-separated `"x,y"` points.
pub fn parse_points(raw: &str) -> Result<Vec<(i64, i64)>> {
    raw.split_whitespace().map(parse_point).collect()
}

pub fn format_points<T: std::fmt::Display>(points: &[(T, T)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("({}, {})", x, y))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_first_identity_basics() {
        assert_eq!(pair(1, 2), (1, 2));
        assert_eq!(first(&[5, 9]).expect("first"), 5);
        let owned = vec![(1, 2), (3, 4)];
        assert_eq!(identity(owned.clone()), owned);
    }

    #[test]
    fn first_on_empty_is_an_error() {
        let empty: [i64; 0] = [];
        let err = first(&empty).expect_err("empty");
        assert!(err.to_string().contains("out of bounds"));
    }

    #[test]
    fn make_defaults_to_origin_every_call() {
        let mut made: (i64, i64) = make(None);
        made.0 = 42;
        assert_eq!(made, (42, 0));
        assert_eq!(make::<i64>(None), ORIGIN);
        assert_eq!(make(Some((3.5, -1.0))), (3.5, -1.0));
    }

    #[test]
    fn add_sums_pairwise() {
        let left = [(1, 1), (2, 2)];
        let right = [(10, 10), (20, 20)];
        assert_eq!(add(&left, &right), vec![(11, 11), (22, 22)]);
    }

    #[test]
    fn add_truncates_to_shorter_sequence() {
        let left = [(1, 2), (3, 4), (5, 6)];
        let right = [(10, 20)];
        assert_eq!(add(&left, &right), vec![(11, 22)]);
        assert_eq!(add::<i64>(&[], &right), Vec::new());
    }

    #[test]
    fn try_add_reports_overflow() {
        assert_eq!(
            try_add(&[(1, 1), (2, 2)], &[(10, 10), (20, 20)]).expect("sum"),
            vec![(11, 11), (22, 22)]
        );
        let err = try_add(&[(0, 0), (i64::MAX, 0)], &[(1, 1), (1, 0)]).expect_err("overflow");
        assert!(err.to_string().contains("x overflows at index 1"));
        let err = try_add(&[(0, i64::MIN)], &[(0, -1)]).expect_err("overflow");
        assert!(err.to_string().contains("y overflows at index 0"));
    }

    #[test]
    fn parse_and_format_points() {
        let points = parse_points("1,1  2,3\n-4,5").expect("parse");
        assert_eq!(points, vec![(1, 1), (2, 3), (-4, 5)]);
        assert_eq!(format_points(&points), "(1, 1) (2, 3) (-4, 5)");
        assert!(parse_point("7").is_err());
        assert!(parse_point("a,1").is_err());
    }
}
