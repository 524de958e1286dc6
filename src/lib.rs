//! cronoscope — cron expression expander and run-time previewer.
//!
//! Parses a five-field cron expression plus command, expands every field into
//! the concrete values it matches, and computes the next run times after a
//! reference instant. All computation is in a single implicit civil calendar;
//! there is no timezone handling and no seconds granularity.
//!
//! # Examples
//!
//! ```
//! use cronoscope::Schedule;
//!
//! let schedule: Schedule = "*/15 * * * * /usr/bin/find".parse().unwrap();
//! assert_eq!(schedule.minute, vec![0, 15, 30, 45]);
//! assert_eq!(schedule.command, "/usr/bin/find");
//! ```

pub mod display;
pub mod error;
pub mod eval;
pub mod field;
pub mod schedule;

pub use error::ExpressionError;
pub use eval::{DayPolicy, HORIZON_YEARS};
pub use field::FieldKind;
pub use schedule::Schedule;

use jiff::civil::DateTime;
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

impl Schedule {
    /// Compute the next `n` occurrences strictly after `after`.
    ///
    /// Both the day-of-month and day-of-week sets must match a day under
    /// [`DayPolicy::Both`]; pass [`DayPolicy::Either`] for standard cron
    /// union semantics.
    pub fn upcoming(
        &self,
        after: DateTime,
        n: usize,
        policy: DayPolicy,
    ) -> Result<Vec<DateTime>, ExpressionError> {
        eval::upcoming(self, after, n, policy)
    }
}

impl FromStr for Schedule {
    type Err = ExpressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl Serialize for Schedule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(6))?;
        map.serialize_entry("minute", &self.minute)?;
        map.serialize_entry("hour", &self.hour)?;
        map.serialize_entry("day_of_month", &self.day_of_month)?;
        map.serialize_entry("month", &self.month)?;
        map.serialize_entry("day_of_week", &self.day_of_week)?;
        map.serialize_entry("command", &self.command)?;
        map.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Schedule {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Schedule::parse(&s).map_err(serde::de::Error::custom)
    }
}
