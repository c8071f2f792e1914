use time::OffsetDateTime;

const MILLIS_PER_DAY: i128 = 86_400_000;

/// Whole days elapsed from `earlier` to `now`, rounded toward negative infinity.
///
/// A timestamp in the future yields a negative count.
pub fn days_between(earlier: OffsetDateTime, now: OffsetDateTime) -> i64 {
    let days = (now - earlier).whole_milliseconds().div_euclid(MILLIS_PER_DAY);
    i64::try_from(days).unwrap_or(if days < 0 { i64::MIN } else { i64::MAX })
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn partial_days_are_floored() {
        let now = datetime!(2025-06-01 00:00 UTC);
        assert_eq!(days_between(datetime!(2025-05-31 00:00:01 UTC), now), 0);
        assert_eq!(days_between(datetime!(2025-05-31 00:00 UTC), now), 1);
        assert_eq!(days_between(datetime!(2025-02-21 00:00 UTC), now), 100);
    }

    #[test]
    fn future_timestamps_are_negative() {
        let now = datetime!(2025-06-01 00:00 UTC);
        assert_eq!(days_between(datetime!(2025-06-01 00:00:01 UTC), now), -1);
        assert_eq!(days_between(datetime!(2025-06-03 00:00 UTC), now), -2);
    }

    #[test]
    fn offsets_are_respected() {
        let now = datetime!(2025-06-01 00:00 UTC);
        // 2025-05-31T23:00:00-02:00 is 2025-06-01T01:00:00Z, one hour in the future.
        assert_eq!(days_between(datetime!(2025-05-31 23:00 -2), now), -1);
    }
}
