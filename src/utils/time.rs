use chrono::{DateTime, Local, TimeZone};

/// Layout of the rotating credential, one value per wall-clock minute
pub const MINUTE_TOKEN_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Source of wall-clock time for token derivation
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// The local system clock
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock pinned to a single instant
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

/// Format `at` truncated to the minute, e.g. `2019-01-01T13:45`
pub fn minute_token<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    at.format(MINUTE_TOKEN_FORMAT).to_string()
}

/// Token for the current minute on the local system clock
pub fn current_minute_token() -> String {
    minute_token(&SystemClock.now())
}

pub fn current_timestamp() -> i64 {
    Local::now().timestamp()
}
