use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::keys::default_parallel_hierarchy;

/// One comparison level: the hierarchy level name and how many periods back it reaches.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ParallelPeriodLevel {
    pub level: String,
    pub offset: i32,
}

impl ParallelPeriodLevel {
    #[must_use]
    pub fn new(level: impl Into<String>, offset: i32) -> Self {
        Self {
            level: level.into(),
            offset,
        }
    }
}

/// How to compute a "same period last cycle" comparison.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ParallelPeriodConfig {
    /// Time hierarchy the offsets are applied on.
    pub hierarchy: String,
    /// Level name → level and offset.
    pub levels: BTreeMap<String, ParallelPeriodLevel>,
}

impl ParallelPeriodConfig {
    /// Same weekday last week, same day last month, same day last year.
    #[must_use]
    pub fn standard(date_field: &str) -> Self {
        let levels = [("Dia", 7), ("Mes", 1), ("Ano", 1)]
            .into_iter()
            .map(|(name, offset)| (name.to_string(), ParallelPeriodLevel::new(name, offset)))
            .collect();

        Self {
            hierarchy: default_parallel_hierarchy(date_field),
            levels,
        }
    }

    /// Offset for a level name, if configured.
    #[must_use]
    pub fn offset(&self, level: &str) -> Option<i32> {
        self.levels.get(level).map(|l| l.offset)
    }
}
