//! Controller for the `/detect` namespace: endpoints, the test queue,
//! activity reports, probes, stats, and observations.

use prelude_core::config::defaults;
use prelude_core::errors::PreludeResult;
use prelude_core::models::{
    AccountActivity, EnableTest, EndpointRegistration, Observation, Probe, QueueEntry, RunCode,
    Stats,
};
use serde::Serialize;
use tracing::debug;

use crate::transport::{ApiRequest, AuthenticatedClient, RequestOptions};

/// Wire body for enabling a test; the test id travels in the path.
#[derive(Serialize)]
struct QueueBody<'a> {
    code: RunCode,
    tags: &'a [String],
}

/// Continuous-testing operations for an account.
///
/// Every method issues exactly one request through the client and returns
/// whatever error the client raises, unchanged.
#[derive(Debug)]
pub struct DetectController<C> {
    client: C,
}

impl<C: AuthenticatedClient> DetectController<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Register (or re-register) an endpoint to the account.
    /// Returns the response body verbatim.
    pub async fn register_endpoint(
        &self,
        registration: &EndpointRegistration,
        options: RequestOptions,
    ) -> PreludeResult<String> {
        debug!(endpoint_id = %registration.id, tags = ?registration.tags, "detect: register endpoint");
        let request = ApiRequest::post("/detect/endpoint", registration)?.with_options(options);
        Ok(self.client.send(request).await?.into_text())
    }

    /// List every test in the account's active queue.
    pub async fn print_queue(&self, options: RequestOptions) -> PreludeResult<Vec<QueueEntry>> {
        debug!("detect: print queue");
        let request = ApiRequest::get("/detect/queue").with_options(options);
        self.client.send(request).await?.json()
    }

    /// Enable a test so endpoints start running it. The response body is ignored.
    pub async fn enable_test(&self, test: &EnableTest, options: RequestOptions) -> PreludeResult<()> {
        debug!(test = %test.test, run_code = %test.run_code, "detect: enable test");
        let body = QueueBody {
            code: test.run_code,
            tags: &test.tags,
        };
        let request =
            ApiRequest::post(format!("/detect/queue/{}", test.test), &body)?.with_options(options);
        self.client.send(request).await?;
        Ok(())
    }

    /// Disable a test so endpoints stop running it.
    pub async fn disable_test(&self, test: &str, options: RequestOptions) -> PreludeResult<()> {
        debug!(test, "detect: disable test");
        let request = ApiRequest::delete(format!("/detect/queue/{test}")).with_options(options);
        self.client.send(request).await?;
        Ok(())
    }

    /// Activity report for the account over the last `days` (default 7).
    pub async fn describe_activity(
        &self,
        days: Option<u32>,
        options: RequestOptions,
    ) -> PreludeResult<AccountActivity> {
        let days = days.unwrap_or(defaults::DEFAULT_ACTIVITY_DAYS);
        debug!(days, "detect: describe activity");
        let request = ApiRequest::get("/detect/activity")
            .with_query("days", days)
            .with_options(options);
        self.client.send(request).await?.json()
    }

    /// Probes associated with the account over the last `days` (default 7).
    pub async fn list_probes(
        &self,
        days: Option<u32>,
        options: RequestOptions,
    ) -> PreludeResult<Vec<Probe>> {
        let days = days.unwrap_or(defaults::DEFAULT_PROBE_DAYS);
        debug!(days, "detect: list probes");
        let request = ApiRequest::get("/detect/probes")
            .with_query("days", days)
            .with_options(options);
        self.client.send(request).await?.json()
    }

    /// Social statistics for one test over the last `days` (default 30).
    pub async fn stats(
        &self,
        test: &str,
        days: Option<u32>,
        options: RequestOptions,
    ) -> PreludeResult<Stats> {
        let days = days.unwrap_or(defaults::DEFAULT_STATS_DAYS);
        debug!(test, days, "detect: stats");
        let request = ApiRequest::get(format!("/detect/{test}/stats"))
            .with_query("days", days)
            .with_options(options);
        self.client.send(request).await?.json()
    }

    /// Mark a result as observed. Returns the response body verbatim.
    pub async fn observe(
        &self,
        row_id: &str,
        value: &str,
        options: RequestOptions,
    ) -> PreludeResult<String> {
        debug!(row_id, value, "detect: observe");
        let request =
            ApiRequest::post("/detect/observe", &Observation::new(row_id, value))?.with_options(options);
        Ok(self.client.send(request).await?.into_text())
    }
}
