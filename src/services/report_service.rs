use chrono::Duration;
use sqlx::PgPool;

use crate::error::{Error, Result};
use crate::models::report::{ActivityCounts, DisabilityTotals, Period};
use crate::repositories::{activity_repo, disability_repo};
use crate::utils::text::normalize;
use crate::utils::time::{empty_month_buckets, month_key, now};

/// Read-only aggregates over people, disabilities and activities.
#[derive(Clone)]
pub struct ReportService {
    pool: PgPool,
}

impl ReportService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn disability_totals(&self) -> Result<DisabilityTotals> {
        let mut conn = self.pool.acquire().await?;
        let mut totals = DisabilityTotals::default();
        for (category, count) in disability_repo::count_by_category(&mut conn).await? {
            totals.add(category, count);
        }
        Ok(totals)
    }

    /// Totals restricted to people whose address neighborhood matches
    /// `neighborhood` after accent, case and whitespace folding.
    pub async fn disability_totals_by_neighborhood(
        &self,
        neighborhood: &str,
    ) -> Result<DisabilityTotals> {
        let wanted = normalize(neighborhood);
        if wanted.is_empty() {
            return Err(Error::BadRequest("neighborhood is required".to_string()));
        }

        let mut conn = self.pool.acquire().await?;
        let rows = disability_repo::count_by_category_and_neighborhood(&mut conn).await?;
        Ok(totals_for_neighborhood(&wanted, rows))
    }

    /// Monthly counts of one activity type over the trailing period. Every
    /// month of the window is present, zero when nothing happened.
    pub async fn activity_counts(&self, activity_type: &str, period: Period) -> Result<ActivityCounts> {
        let end = now();
        let start = end - Duration::days(period.days());

        let mut conn = self.pool.acquire().await?;
        let activities =
            activity_repo::list_by_type_and_period(&mut conn, activity_type, start, end).await?;

        let mut months_count = empty_month_buckets(start, end);
        for activity in activities {
            *months_count.entry(month_key(activity.created_at)).or_insert(0) += 1;
        }

        Ok(ActivityCounts {
            activity_type: activity_type.to_string(),
            months_count,
        })
    }
}

fn totals_for_neighborhood<I>(normalized: &str, rows: I) -> DisabilityTotals
where
    I: IntoIterator<Item = (crate::models::disability::DisabilityCategory, String, i64)>,
{
    let mut totals = DisabilityTotals::default();
    for (category, neighborhood, count) in rows {
        if normalize(&neighborhood) == normalized {
            totals.add(category, count);
        }
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::disability::DisabilityCategory;

    #[test]
    fn neighborhood_rows_match_after_folding() {
        let rows = vec![
            (DisabilityCategory::Visual, "São João".to_string(), 2),
            (DisabilityCategory::Visual, "Sao  Joao".to_string(), 1),
            (DisabilityCategory::Hearing, "SÃO JOÃO".to_string(), 4),
            (DisabilityCategory::Physical, "Centro".to_string(), 9),
        ];
        let totals = totals_for_neighborhood(&normalize("sao joão"), rows);
        assert_eq!(totals.visual, 3);
        assert_eq!(totals.hearing, 4);
        assert_eq!(totals.physical, 0);
        assert_eq!(totals.total(), 7);
    }

    #[test]
    fn unknown_neighborhood_yields_zeroes() {
        let rows = vec![(DisabilityCategory::Intellectual, "Centro".to_string(), 5)];
        assert_eq!(
            totals_for_neighborhood("vilanova", rows),
            DisabilityTotals::default()
        );
    }
}
