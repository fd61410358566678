use crate::gtfs::GtfsError;

use chrono::{NaiveTime, Timelike};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

pub const SECONDS_PER_DAY: i64 = 86_400;

/// A GTFS service time, counted in seconds from the start of the
/// service day. May run past `24:00:00` for trips after midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct GtfsTime {
    total_seconds: i64,
}

impl GtfsTime {
    pub fn from_seconds(total_seconds: i64) -> Self {
        Self { total_seconds }
    }

    pub fn parse(value: &str) -> Result<Self, GtfsError> {
        let trimmed = value.trim();
        let parts: Vec<&str> = trimmed.split(':').collect();
        if parts.len() != 3 {
            return Err(GtfsError::InvalidTimeFormat(value.to_string()));
        }

        let field = |part: &str| {
            part.parse::<i64>()
                .map_err(|_| GtfsError::InvalidTimeFormat(value.to_string()))
        };

        let (hours, minutes, seconds) = (field(parts[0])?, field(parts[1])?, field(parts[2])?);
        if hours < 0 || !(0..=59).contains(&minutes) || !(0..=59).contains(&seconds) {
            return Err(GtfsError::InvalidTimeValue(value.to_string()));
        }

        let total_seconds = hours
            .checked_mul(3600)
            .and_then(|total| total.checked_add(minutes * 60 + seconds))
            .ok_or_else(|| GtfsError::InvalidTimeValue(value.to_string()))?;

        Ok(Self { total_seconds })
    }

    pub fn total_seconds(&self) -> i64 {
        self.total_seconds
    }

    /// Seconds from `reference` until this time. A time earlier than the
    /// reference is taken to fall on a following day, so the offset is
    /// never negative.
    pub fn offset_from(&self, reference: NaiveTime) -> i64 {
        let reference = reference.num_seconds_from_midnight() as i64;
        let offset = self.total_seconds - reference;

        if offset < 0 {
            offset + SECONDS_PER_DAY * ((-offset) / SECONDS_PER_DAY + 1)
        } else {
            offset
        }
    }
}

impl fmt::Display for GtfsTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.total_seconds / 3600,
            (self.total_seconds % 3600) / 60,
            self.total_seconds % 60
        )
    }
}

impl<'de> Deserialize<'de> for GtfsTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct GtfsTimeVisitor;

        impl<'de> Visitor<'de> for GtfsTimeVisitor {
            type Value = GtfsTime;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a GTFS time in HH:MM:SS format")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<GtfsTime, E> {
                GtfsTime::parse(value).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(GtfsTimeVisitor)
    }
}
