//! BuildActiveSeriesHandler - Query handler for active-member time series.

use chrono::NaiveDate;
use std::sync::Arc;

use super::CountActiveMembersHandler;
use crate::domain::foundation::DateRange;
use crate::domain::membership::{MembershipGroup, ProductCatalog};
use crate::domain::statistics::{ActiveSeries, SamplingMode, SamplingPlan, StatisticsError};
use crate::ports::MembershipRecordSource;

/// Query for the active census sampled over `[from, to]`.
#[derive(Debug, Clone)]
pub struct BuildActiveSeriesQuery {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub member_type: Option<String>,
    /// Overrides the configured sampling mode.
    pub sampling: Option<SamplingMode>,
}

impl BuildActiveSeriesQuery {
    pub fn between(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            from,
            to,
            member_type: None,
            sampling: None,
        }
    }
}

/// Result type for the series query.
pub type BuildActiveSeriesResult = ActiveSeries;

/// Handler that samples the active census across a date range.
pub struct BuildActiveSeriesHandler {
    census: CountActiveMembersHandler,
    sampling: SamplingMode,
}

impl BuildActiveSeriesHandler {
    pub fn new(
        source: Arc<dyn MembershipRecordSource>,
        catalog: Arc<ProductCatalog>,
        sampling: SamplingMode,
    ) -> Self {
        Self {
            census: CountActiveMembersHandler::new(source, catalog),
            sampling,
        }
    }

    /// Builds the series.
    ///
    /// The candidate records are read once and tallied for every sample
    /// date. A storage failure fails the whole series.
    pub async fn handle(
        &self,
        query: BuildActiveSeriesQuery,
    ) -> Result<BuildActiveSeriesResult, StatisticsError> {
        let range = DateRange::new(query.from, query.to)?;
        let filter = query
            .member_type
            .as_deref()
            .and_then(MembershipGroup::parse_filter);
        let plan = SamplingPlan::for_range(&range, query.sampling.unwrap_or(self.sampling));
        let dates = plan.sample_dates(&range);

        tracing::debug!(
            %range,
            ?plan,
            points = dates.len(),
            filter = filter.map(|g| g.as_str()),
            "Building active member series"
        );

        let records = self.census.candidates(filter).await?;
        let mut series = ActiveSeries::new(plan);

        for (index, date) in dates.into_iter().enumerate() {
            // Malformed dates are the same on every sample; report them once.
            let counts = self.census.tally_on(&records, date, filter, index == 0);
            series.push(date, counts);
        }

        Ok(series)
    }
}
