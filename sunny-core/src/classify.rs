//! Threshold classification of numeric readings into named buckets.

use serde::{Deserialize, Serialize};

/// Output of threshold classification. Drives bucketed theme colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bucket {
    Low,
    Mid,
    High,
}

impl Bucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            Bucket::Low => "low",
            Bucket::Mid => "mid",
            Bucket::High => "high",
        }
    }
}

/// Bucket a temperature reading. Above 30 degrees is high, 10 and up is mid,
/// anything colder is low. The mid/low boundary is inclusive at 10.
pub fn temperature_bucket(temp: f64) -> Bucket {
    if temp > 30.0 {
        Bucket::High
    } else if temp >= 10.0 {
        Bucket::Mid
    } else {
        Bucket::Low
    }
}

/// Bucket a relative humidity percentage. Above 65 is high, 55 and up is mid,
/// anything drier is low.
pub fn humidity_bucket(humidity: u8) -> Bucket {
    if humidity > 65 {
        Bucket::High
    } else if humidity >= 55 {
        Bucket::Mid
    } else {
        Bucket::Low
    }
}
