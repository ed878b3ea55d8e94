//! Per-session meal metrics.
//!
//! Input is the sequence of diet flags in the order the meals are listed
//! (newest first). The best streak is measured over that order, so with runs
//! of equal length the one found first in reverse-chronological order is the
//! one that counts.

use serde::Serialize;

/// Aggregate returned by `GET /meals/metrics`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MealMetrics {
    pub total_meals: u64,
    pub total_diet_meals: u64,
    pub total_not_diet_meals: u64,
    pub best_on_diet_sequence: u64,
}

impl MealMetrics {
    /// Compute all four counters in a single pass.
    pub fn from_diet_flags<I>(flags: I) -> Self
    where
        I: IntoIterator<Item = bool>,
    {
        let mut metrics = Self::default();
        let mut current = 0u64;

        for is_diet in flags {
            metrics.total_meals += 1;
            if is_diet {
                metrics.total_diet_meals += 1;
                current += 1;
            } else {
                metrics.total_not_diet_meals += 1;
                current = 0;
            }
            metrics.best_on_diet_sequence = metrics.best_on_diet_sequence.max(current);
        }

        metrics
    }
}
