use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::disability::DisabilityCategory;

/// Per-category counts. Every category is always present, zero when unused.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisabilityTotals {
    pub visual: i64,
    pub hearing: i64,
    pub physical: i64,
    pub intellectual: i64,
    pub psychosocial: i64,
}

impl DisabilityTotals {
    pub fn add(&mut self, category: DisabilityCategory, count: i64) {
        match category {
            DisabilityCategory::Visual => self.visual += count,
            DisabilityCategory::Hearing => self.hearing += count,
            DisabilityCategory::Physical => self.physical += count,
            DisabilityCategory::Intellectual => self.intellectual += count,
            DisabilityCategory::Psychosocial => self.psychosocial += count,
        }
    }

    pub fn total(&self) -> i64 {
        self.visual + self.hearing + self.physical + self.intellectual + self.psychosocial
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    LastThreeMonths,
    LastSixMonths,
    LastYear,
}

impl Period {
    pub fn days(&self) -> i64 {
        match self {
            Period::LastThreeMonths => 90,
            Period::LastSixMonths => 180,
            Period::LastYear => 365,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "last_three_months" => Some(Period::LastThreeMonths),
            "last_six_months" => Some(Period::LastSixMonths),
            "last_year" => Some(Period::LastYear),
            _ => None,
        }
    }
}

/// Activity counts keyed by `YYYY-MM`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityCounts {
    pub activity_type: String,
    pub months_count: BTreeMap<String, i64>,
}
