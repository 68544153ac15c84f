//! Clock-time normalization to zero-padded 24-hour `HH:MM`

use chrono::{NaiveTime, Timelike};

/// Part-of-day marker written next to a clock time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Am,
    Pm,
    /// 上午
    Morning,
    /// 下午
    Afternoon,
    /// 晚上
    Evening,
    /// 凌晨
    Predawn,
}

impl Period {
    pub fn parse(marker: &str) -> Option<Self> {
        match marker.trim().to_uppercase().as_str() {
            "AM" => Some(Period::Am),
            "PM" => Some(Period::Pm),
            "上午" => Some(Period::Morning),
            "下午" => Some(Period::Afternoon),
            "晚上" => Some(Period::Evening),
            "凌晨" => Some(Period::Predawn),
            _ => None,
        }
    }

    /// Convert an hour read off a 12-hour clock (`3:00 PM`, `9:30 上午`)
    pub fn clock_hour_to_24h(self, hour: u32) -> u32 {
        match self {
            Period::Pm | Period::Afternoon | Period::Evening => {
                if hour == 12 {
                    12
                } else {
                    hour + 12
                }
            }
            Period::Am | Period::Morning | Period::Predawn => {
                if hour == 12 {
                    0
                } else {
                    hour
                }
            }
        }
    }

    /// Convert an hour written as `下午3点`; a morning hour is taken as-is
    pub fn o_clock_to_24h(self, hour: u32) -> u32 {
        match self {
            Period::Morning => hour,
            other => other.clock_hour_to_24h(hour),
        }
    }
}

/// A validated time of day
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    /// Parse captured hour/minute digits; `None` for anything outside 00:00-23:59
    pub fn from_digits(hour: &str, minute: Option<&str>) -> Option<Self> {
        let hour = hour.parse::<u32>().ok()?;
        let minute = match minute {
            Some(m) => m.parse::<u32>().ok()?,
            None => 0,
        };
        Self::from_hm(hour, minute)
    }

    /// Minutes since midnight
    pub fn sort_key(&self) -> u32 {
        self.0.hour() * 60 + self.0.minute()
    }

    pub fn as_hhmm(&self) -> String {
        self.0.format("%H:%M").to_string()
    }
}

impl std::fmt::Display for ClockTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}
