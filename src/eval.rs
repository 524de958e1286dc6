//! Forward occurrence search: the next N instants satisfying every field.

use jiff::civil::{Date, DateTime, Time};

use crate::error::ExpressionError;
use crate::field::FieldKind;
use crate::schedule::Schedule;

/// How day-of-month and day-of-week combine when selecting days.
///
/// [`DayPolicy::Both`] requires a day to satisfy both sets. Standard cron
/// instead accepts a day when either set matches, whenever both sets are
/// restricted; that behavior is [`DayPolicy::Either`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DayPolicy {
    #[default]
    Both,
    Either,
}

/// Years past the reference year the search will scan before giving up.
/// An expression whose day sets never intersect a real date (e.g.
/// `0 0 31 4 *`) would otherwise loop forever.
pub const HORIZON_YEARS: i16 = 50;

/// Compute the next `n` occurrences strictly after `after`.
///
/// Months, days, hours, and minutes are visited in expansion order, so a
/// schedule built from an unsorted list yields instants in that same order
/// within a day rather than in calendar order. The result always holds
/// exactly `n` instants; exhausting the horizon first is an error.
pub fn upcoming(
    schedule: &Schedule,
    after: DateTime,
    n: usize,
    policy: DayPolicy,
) -> Result<Vec<DateTime>, ExpressionError> {
    if n < 1 {
        return Err(ExpressionError::argument(
            "occurrence count must be at least 1",
        ));
    }

    // Standard cron only unions the day sets when neither is a wildcard.
    let union_days = policy == DayPolicy::Either
        && is_restricted(&schedule.day_of_month, FieldKind::DayOfMonth)
        && is_restricted(&schedule.day_of_week, FieldKind::DayOfWeek);
    let union_candidates: Vec<u8> = (1..=31).collect();
    let days: &[u8] = if union_days {
        &union_candidates
    } else {
        &schedule.day_of_month
    };

    let mut found = Vec::with_capacity(n);
    for year in after.year()..=after.year().saturating_add(HORIZON_YEARS) {
        for &month in &schedule.month {
            // Months already behind the reference only matter in later years.
            if year == after.year() && (month as i8) < after.month() {
                continue;
            }
            for &day in days {
                let date = match Date::new(year, month as i8, day as i8) {
                    Ok(d) => d,
                    // Day does not exist in this month; infeasible, not an error.
                    Err(_) => continue,
                };
                if !day_matches(schedule, date, union_days) {
                    continue;
                }
                for &hour in &schedule.hour {
                    for &minute in &schedule.minute {
                        let time = Time::new(hour as i8, minute as i8, 0, 0).unwrap();
                        let instant = date.to_datetime(time);
                        if instant <= after {
                            continue;
                        }
                        found.push(instant);
                        if found.len() == n {
                            return Ok(found);
                        }
                    }
                }
            }
        }
    }

    Err(ExpressionError::no_occurrence(HORIZON_YEARS))
}

/// Whether a date's day and weekday satisfy the schedule's day sets.
fn day_matches(schedule: &Schedule, date: Date, union_days: bool) -> bool {
    let weekday = date.weekday().to_sunday_zero_offset() as u8;
    let in_dom = schedule.day_of_month.contains(&(date.day() as u8));
    let in_dow = schedule.day_of_week.contains(&weekday);
    if union_days {
        in_dom || in_dow
    } else {
        in_dom && in_dow
    }
}

/// A set covering its whole domain places no restriction on the day.
fn is_restricted(values: &[u8], kind: FieldKind) -> bool {
    let (min, max) = kind.domain();
    !(min..=max).all(|v| values.contains(&v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    fn schedule(expression: &str) -> Schedule {
        Schedule::parse(expression).unwrap()
    }

    #[test]
    fn test_reference_instant_itself_excluded() {
        let s = schedule("0 0 * * * /usr/bin/find");
        let after = date(2024, 1, 1).at(0, 0, 0, 0);
        let next = upcoming(&s, after, 1, DayPolicy::Both).unwrap();
        assert_eq!(next, vec![date(2024, 1, 2).at(0, 0, 0, 0)]);
    }

    #[test]
    fn test_quota_exactly_filled() {
        // 2024-06-01 and 06-15 are both Saturdays; the first weekday hits
        // land in July.
        let s = schedule("*/15 0 1,15 * 1-5 /usr/bin/find");
        let after = date(2024, 6, 1).at(0, 0, 0, 0);
        let next = upcoming(&s, after, 5, DayPolicy::Both).unwrap();
        assert_eq!(
            next,
            vec![
                date(2024, 7, 1).at(0, 0, 0, 0),
                date(2024, 7, 1).at(0, 15, 0, 0),
                date(2024, 7, 1).at(0, 30, 0, 0),
                date(2024, 7, 1).at(0, 45, 0, 0),
                date(2024, 7, 15).at(0, 0, 0, 0),
            ]
        );
    }

    #[test]
    fn test_results_strictly_increase_for_ascending_fields() {
        let s = schedule("*/15 * * * * /usr/bin/find");
        let after = date(2024, 2, 28).at(23, 50, 0, 0);
        let next = upcoming(&s, after, 10, DayPolicy::Both).unwrap();
        assert_eq!(next.len(), 10);
        assert!(next.iter().all(|instant| *instant > after));
        assert!(next.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_unsorted_list_keeps_expansion_order_within_a_day() {
        let s = schedule("30,15 0 * * * /usr/bin/find");
        let after = date(2024, 1, 1).at(0, 0, 0, 0);
        let next = upcoming(&s, after, 2, DayPolicy::Both).unwrap();
        assert_eq!(
            next,
            vec![
                date(2024, 1, 1).at(0, 30, 0, 0),
                date(2024, 1, 1).at(0, 15, 0, 0),
            ]
        );
    }

    #[test]
    fn test_leap_day_found_across_year_boundary() {
        let s = schedule("0 0 29 2 * /usr/bin/find");
        let after = date(2023, 3, 1).at(0, 0, 0, 0);
        let next = upcoming(&s, after, 1, DayPolicy::Both).unwrap();
        assert_eq!(next, vec![date(2024, 2, 29).at(0, 0, 0, 0)]);
    }

    #[test]
    fn test_months_behind_reference_skipped_in_start_year() {
        let s = schedule("0 0 1 1 * /usr/bin/find");
        let after = date(2024, 6, 10).at(12, 0, 0, 0);
        let next = upcoming(&s, after, 1, DayPolicy::Both).unwrap();
        assert_eq!(next, vec![date(2025, 1, 1).at(0, 0, 0, 0)]);
    }

    #[test]
    fn test_impossible_date_exhausts_horizon() {
        let s = schedule("0 0 31 4 * /usr/bin/find");
        let after = date(2024, 1, 1).at(0, 0, 0, 0);
        assert_eq!(
            upcoming(&s, after, 1, DayPolicy::Both),
            Err(ExpressionError::no_occurrence(HORIZON_YEARS))
        );
    }

    #[test]
    fn test_zero_count_rejected() {
        let s = schedule("* * * * * /usr/bin/find");
        let after = date(2024, 1, 1).at(0, 0, 0, 0);
        assert!(matches!(
            upcoming(&s, after, 0, DayPolicy::Both),
            Err(ExpressionError::Argument { .. })
        ));
    }

    #[test]
    fn test_both_policy_requires_day_and_weekday() {
        // Noon on the 13th, Fridays only: the first Friday the 13th after
        // 2024-01-01 is in September.
        let s = schedule("0 12 13 * 5 /usr/bin/find");
        let after = date(2024, 1, 1).at(0, 0, 0, 0);
        let next = upcoming(&s, after, 1, DayPolicy::Both).unwrap();
        assert_eq!(next, vec![date(2024, 9, 13).at(12, 0, 0, 0)]);
    }

    #[test]
    fn test_either_policy_unions_restricted_day_sets() {
        // Same expression under cron semantics: every Friday and every 13th.
        let s = schedule("0 12 13 * 5 /usr/bin/find");
        let after = date(2024, 1, 1).at(0, 0, 0, 0);
        let next = upcoming(&s, after, 3, DayPolicy::Either).unwrap();
        assert_eq!(
            next,
            vec![
                date(2024, 1, 5).at(12, 0, 0, 0),
                date(2024, 1, 12).at(12, 0, 0, 0),
                date(2024, 1, 13).at(12, 0, 0, 0),
            ]
        );
    }

    #[test]
    fn test_either_policy_with_wildcard_day_of_month_stays_intersect() {
        // Day-of-month is unrestricted, so cron semantics intersect too.
        let s = schedule("0 12 * * 5 /usr/bin/find");
        let after = date(2024, 1, 1).at(0, 0, 0, 0);
        let next = upcoming(&s, after, 1, DayPolicy::Either).unwrap();
        assert_eq!(next, vec![date(2024, 1, 5).at(12, 0, 0, 0)]);
    }
}
