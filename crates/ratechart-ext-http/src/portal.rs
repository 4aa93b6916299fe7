//! Public data portal holiday client.

use std::time::Duration;

use async_trait::async_trait;

use ratechart_core::calendars::HolidaySet;
use ratechart_traits::error::TraitError;
use ratechart_traits::holidays::HolidaySource;

use crate::response::parse_holiday_response;

/// Operation path appended to the portal domain.
pub const HOLIDAY_OPERATION: &str = "getRestDeInfo";

/// Rows requested per call; enough for a year of holidays.
pub const DEFAULT_NUM_OF_ROWS: u32 = 100;

/// Per-request timeout unless overridden.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

/// Query parameters of a holiday lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayQuery {
    /// Solar year to list.
    pub sol_year: i32,
    /// Maximum rows returned.
    pub num_of_rows: u32,
    /// Portal service key.
    pub service_key: String,
}

impl HolidayQuery {
    /// Query string pairs in the portal's parameter names.
    pub fn query_pairs(&self) -> [(&'static str, String); 4] {
        [
            ("solYear", self.sol_year.to_string()),
            ("_type", "json".to_string()),
            ("numOfRows", self.num_of_rows.to_string()),
            ("ServiceKey", self.service_key.clone()),
        ]
    }
}

/// Holiday source backed by the public data portal's special-day service.
pub struct DataPortalHolidaySource {
    client: reqwest::Client,
    endpoint: String,
    service_key: String,
    num_of_rows: u32,
    timeout: Duration,
}

impl DataPortalHolidaySource {
    /// Create a source for the portal at `domain`.
    pub fn new(domain: impl AsRef<str>, service_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: holiday_endpoint(domain.as_ref()),
            service_key: service_key.into(),
            num_of_rows: DEFAULT_NUM_OF_ROWS,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the number of rows requested.
    pub fn with_num_of_rows(mut self, num_of_rows: u32) -> Self {
        self.num_of_rows = num_of_rows;
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full URL of the holiday operation.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Query sent for `year`.
    pub fn query_for(&self, year: i32) -> HolidayQuery {
        HolidayQuery {
            sol_year: year,
            num_of_rows: self.num_of_rows,
            service_key: self.service_key.clone(),
        }
    }
}

#[async_trait]
impl HolidaySource for DataPortalHolidaySource {
    fn name(&self) -> &str {
        "data-portal"
    }

    async fn holidays_for_year(&self, year: i32) -> Result<HolidaySet, TraitError> {
        let query = self.query_for(year);
        tracing::debug!("Fetching holidays for {} from {}", year, self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&query.query_pairs())
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TraitError::Timeout
                } else {
                    TraitError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TraitError::ConnectionFailed(format!("HTTP {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| TraitError::ParseError(e.to_string()))?;
        let holidays = parse_holiday_response(&body)?;
        tracing::debug!("Loaded {} holidays for {}", holidays.len(), year);
        Ok(holidays)
    }
}

/// `domain` with a trailing `/`, followed by the holiday operation.
fn holiday_endpoint(domain: &str) -> String {
    if domain.ends_with('/') {
        format!("{domain}{HOLIDAY_OPERATION}")
    } else {
        format!("{domain}/{HOLIDAY_OPERATION}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_normalizes_domain() {
        let with = DataPortalHolidaySource::new("https://apis.example.kr/service/", "k");
        let without = DataPortalHolidaySource::new("https://apis.example.kr/service", "k");
        assert_eq!(with.endpoint(), "https://apis.example.kr/service/getRestDeInfo");
        assert_eq!(with.endpoint(), without.endpoint());
    }

    #[test]
    fn test_query_pairs() {
        let source = DataPortalHolidaySource::new("https://apis.example.kr/", "secret")
            .with_num_of_rows(50);
        let pairs = source.query_for(2024).query_pairs();
        assert_eq!(
            pairs,
            [
                ("solYear", "2024".to_string()),
                ("_type", "json".to_string()),
                ("numOfRows", "50".to_string()),
                ("ServiceKey", "secret".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_unreachable_portal_is_an_error() {
        let source = DataPortalHolidaySource::new("http://127.0.0.1:9/", "k")
            .with_timeout(Duration::from_millis(500));
        assert!(source.holidays_for_year(2024).await.is_err());
    }
}
