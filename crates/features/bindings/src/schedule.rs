//! # Scheduling Windows
//!
//! When a receive location is active: an optional date range plus an optional daily service
//! window repeating daily, weekly or monthly. Send ports only know a plain [`TimeWindow`].
//!
//! ```toml
//! [schedule]
//! start_date = "2022-01-20"
//! stop_date = "2022-02-14"
//! service_window = { kind = "weekly", start_time = "08:00:00", stop_time = "20:00:00", interval = 2, week_days = ["Mon", "Fri"] }
//! ```

use crate::error::BindingError;
use chrono::{Month, NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

const fn one() -> u32 {
    1
}

/// Activation schedule of a transport.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Schedule {
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub stop_date: Option<NaiveDate>,
    /// Shift the service window with daylight saving time.
    #[serde(default)]
    pub adjust_for_daylight_saving: bool,
    /// Time zone the dates and times are expressed in; the server's local zone when absent.
    #[serde(default)]
    pub time_zone: Option<String>,
    #[serde(default)]
    pub service_window: Option<ServiceWindow>,
}

impl Schedule {
    /// # Errors
    /// [`BindingError::InvalidSchedule`] when the date range or the service window is empty
    /// or malformed.
    pub fn validate(&self) -> Result<(), BindingError> {
        if let (Some(start), Some(stop)) = (self.start_date, self.stop_date)
            && start >= stop
        {
            return Err(BindingError::schedule(format!(
                "start date {start} must precede stop date {stop}"
            )));
        }
        if self.time_zone.as_deref().is_some_and(|tz| tz.trim().is_empty()) {
            return Err(BindingError::schedule("time zone cannot be blank"));
        }
        self.service_window.as_ref().map_or(Ok(()), ServiceWindow::validate)
    }
}

/// Week of the month a monthly window recurs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ordinality {
    First,
    Second,
    Third,
    Fourth,
    Last,
}

/// Daily time window and its recurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
pub enum ServiceWindow {
    /// Every `interval` days, starting `from`.
    Daily {
        start_time: NaiveTime,
        stop_time: NaiveTime,
        #[serde(default)]
        from: Option<NaiveDate>,
        #[serde(default = "one")]
        interval: u32,
    },
    /// On `week_days`, every `interval` weeks, starting `from`.
    Weekly {
        start_time: NaiveTime,
        stop_time: NaiveTime,
        #[serde(default)]
        from: Option<NaiveDate>,
        #[serde(default = "one")]
        interval: u32,
        week_days: Vec<Weekday>,
    },
    /// On fixed days of `months`.
    CalendricalMonthly {
        start_time: NaiveTime,
        stop_time: NaiveTime,
        months: Vec<Month>,
        #[serde(default)]
        days: Vec<u8>,
        #[serde(default)]
        on_last_day: bool,
    },
    /// On the `ordinality` occurrence of `week_days` in `months` (e.g. the last Friday).
    OrdinalMonthly {
        start_time: NaiveTime,
        stop_time: NaiveTime,
        months: Vec<Month>,
        ordinality: Ordinality,
        week_days: Vec<Weekday>,
    },
}

impl ServiceWindow {
    #[must_use]
    pub const fn times(&self) -> (NaiveTime, NaiveTime) {
        match self {
            Self::Daily { start_time, stop_time, .. }
            | Self::Weekly { start_time, stop_time, .. }
            | Self::CalendricalMonthly { start_time, stop_time, .. }
            | Self::OrdinalMonthly { start_time, stop_time, .. } => (*start_time, *stop_time),
        }
    }

    /// # Errors
    /// [`BindingError::InvalidSchedule`] describing the first problem found.
    pub fn validate(&self) -> Result<(), BindingError> {
        let (start, stop) = self.times();
        check_times(start, stop)?;

        match self {
            Self::Daily { interval, .. } => check_interval(*interval),
            Self::Weekly { interval, week_days, .. } => {
                check_interval(*interval)?;
                check_not_empty(week_days, "week days")
            },
            Self::CalendricalMonthly { months, days, on_last_day, .. } => {
                check_not_empty(months, "months")?;
                if days.is_empty() && !on_last_day {
                    return Err(BindingError::schedule(
                        "a calendrical monthly window needs days or on_last_day",
                    ));
                }
                match days.iter().find(|day| !(1..=31).contains(*day)) {
                    Some(day) => {
                        Err(BindingError::schedule(format!("day {day} is not in 1..=31")))
                    },
                    None => Ok(()),
                }
            },
            Self::OrdinalMonthly { months, week_days, .. } => {
                check_not_empty(months, "months")?;
                check_not_empty(week_days, "week days")
            },
        }
    }
}

/// Daily start and stop times of a send port transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimeWindow {
    pub start_time: NaiveTime,
    pub stop_time: NaiveTime,
}

impl TimeWindow {
    /// # Errors
    /// [`BindingError::InvalidSchedule`] unless the start time precedes the stop time.
    pub fn validate(&self) -> Result<(), BindingError> {
        check_times(self.start_time, self.stop_time)
    }
}

fn check_times(start: NaiveTime, stop: NaiveTime) -> Result<(), BindingError> {
    if start >= stop {
        return Err(BindingError::schedule(format!(
            "service window start time {start} must precede stop time {stop}"
        )));
    }
    Ok(())
}

fn check_interval(interval: u32) -> Result<(), BindingError> {
    if interval == 0 {
        return Err(BindingError::schedule("recurrence interval must be at least 1"));
    }
    Ok(())
}

fn check_not_empty<T>(items: &[T], what: &str) -> Result<(), BindingError> {
    if items.is_empty() {
        return Err(BindingError::schedule(format!("{what} cannot be empty")));
    }
    Ok(())
}
