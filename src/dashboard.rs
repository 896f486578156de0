//! Dashboard loading: ask the backend first, fall back to the local projection
//!
//! The result is tagged so callers can tell real backend output from a
//! locally synthesized stand-in:
//!
//! ```json
//! {"kind": "remote", "data": { ... }}
//! {"kind": "fallback", "data": { ... }}
//! ```

use crate::error::SimulatorError;
use crate::input::FinancialInput;
use crate::projection::{ProFormaEngine, ProjectionResult};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;

/// Path of the pro-forma endpoint relative to the backend base URL
pub const PRO_FORMA_PATH: &str = "/api/v1/insight/pro-forma-dashboard-data";

/// Dashboard data together with where it came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum DashboardData {
    Remote(ProjectionResult),
    Fallback(ProjectionResult),
}

impl DashboardData {
    pub fn projection(&self) -> &ProjectionResult {
        match self {
            DashboardData::Remote(data) | DashboardData::Fallback(data) => data,
        }
    }

    pub fn into_projection(self) -> ProjectionResult {
        match self {
            DashboardData::Remote(data) | DashboardData::Fallback(data) => data,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, DashboardData::Fallback(_))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            DashboardData::Remote(_) => "remote",
            DashboardData::Fallback(_) => "fallback",
        }
    }
}

/// Source of authoritative dashboard data
pub trait RemoteDashboard {
    fn fetch<'a>(
        &'a self,
        input: &'a FinancialInput,
    ) -> impl Future<Output = Result<ProjectionResult, SimulatorError>> + Send + 'a;
}

/// Connection settings for the simulator backend
#[derive(Debug, Clone)]
pub struct DashboardClientConfig {
    /// Base URL, e.g. "https://api.example.com"
    pub base_url: String,

    /// Sent as a bearer token when present
    pub access_token: Option<String>,

    pub timeout: Duration,
}

impl DashboardClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            access_token: None,
            timeout: Duration::from_secs(30),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), PRO_FORMA_PATH)
    }
}

/// HTTP client for the backend's pro-forma endpoint
#[derive(Debug, Clone)]
pub struct HttpDashboardClient {
    client: reqwest::Client,
    config: DashboardClientConfig,
}

impl HttpDashboardClient {
    pub fn new(config: DashboardClientConfig) -> Result<Self, SimulatorError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }
}

impl RemoteDashboard for HttpDashboardClient {
    fn fetch<'a>(
        &'a self,
        input: &'a FinancialInput,
    ) -> impl Future<Output = Result<ProjectionResult, SimulatorError>> + Send + 'a {
        async move {
            let mut request = self.client.post(self.config.endpoint()).json(input);
            if let Some(token) = &self.config.access_token {
                request = request.bearer_auth(token);
            }

            let response = request.send().await?;
            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(SimulatorError::Status {
                    status: status.as_u16(),
                    body,
                });
            }

            Ok(response.json::<ProjectionResult>().await?)
        }
    }
}

/// Loads dashboard data from an optional remote, falling back to local projection
#[derive(Debug, Clone)]
pub struct DashboardService<R> {
    remote: Option<R>,
    engine: ProFormaEngine,
}

impl<R: RemoteDashboard> DashboardService<R> {
    pub fn new(remote: Option<R>, engine: ProFormaEngine) -> Self {
        Self { remote, engine }
    }

    /// Try the remote once; on any failure return the local projection instead
    pub async fn load(&self, input: &FinancialInput) -> DashboardData {
        let Some(remote) = &self.remote else {
            log::info!("no backend configured, using local pro-forma");
            return DashboardData::Fallback(self.engine.project(input));
        };

        match remote.fetch(input).await {
            Ok(data) => {
                log::info!("pro-forma dashboard loaded from backend");
                DashboardData::Remote(data)
            }
            Err(e) => {
                log::warn!("pro-forma backend unavailable ({}), using local projection", e);
                DashboardData::Fallback(self.engine.project(input))
            }
        }
    }
}

impl DashboardService<HttpDashboardClient> {
    /// Service without a backend; every load is a fallback
    pub fn local(engine: ProFormaEngine) -> Self {
        Self::new(None, engine)
    }
}
