use std::time::Duration;

use async_trait::async_trait;
use base64::Engine;
use reqwest::{header::AUTHORIZATION, StatusCode};
use tracing::{debug, warn};
use validator::Validate;

use super::types::{
    wigle_search_response::{NetworkRecord, WigleSearchResponse},
    wigle_service_error::WigleServiceError,
};
use crate::types::search_request::{Credentials, SearchRequest};

pub const SEARCH_PATH: &str = "/api/v2/network/search";
pub const RESULTS_PER_PAGE: u32 = 100;

#[derive(Clone)]
pub struct WigleServiceConfig {
    pub host: String,
    pub timeout: Duration,
}

#[derive(Clone)]
pub struct WigleService {
    config: WigleServiceConfig,
    client: reqwest::Client,
}

/// Anything that can look up open networks around a point.
#[async_trait]
pub trait NetworkSearch: Send + Sync {
    async fn search_open_networks(
        &self,
        request: SearchRequest,
    ) -> Result<Vec<NetworkRecord>, WigleServiceError>;
}

pub fn basic_auth_header(credentials: &Credentials) -> String {
    let raw = format!("{}:{}", credentials.name, credentials.token);
    format!(
        "Basic {}",
        base64::engine::general_purpose::STANDARD.encode(raw)
    )
}

impl WigleService {
    pub fn new(config: WigleServiceConfig) -> Result<Self, WigleServiceError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| {
                WigleServiceError::Transport(format!("Failed to build client: {}", e))
            })?;

        Ok(Self { config, client })
    }
}

#[async_trait]
impl NetworkSearch for WigleService {
    async fn search_open_networks(
        &self,
        request: SearchRequest,
    ) -> Result<Vec<NetworkRecord>, WigleServiceError> {
        request
            .validate()
            .map_err(|e| WigleServiceError::InvalidRequest(e.to_string()))?;

        let bbox = request.bounding_box();
        let url = format!("{}{}", self.config.host, SEARCH_PATH);

        debug!(
            "Searching open networks in [{}, {}] x [{}, {}]",
            bbox.lat_range1, bbox.lat_range2, bbox.long_range1, bbox.long_range2
        );

        let resp = self
            .client
            .get(&url)
            .query(&[
                ("latrange1", bbox.lat_range1.to_string()),
                ("latrange2", bbox.lat_range2.to_string()),
                ("longrange1", bbox.long_range1.to_string()),
                ("longrange2", bbox.long_range2.to_string()),
                ("freenet", "true".to_string()),
                ("resultsPerPage", RESULTS_PER_PAGE.to_string()),
            ])
            .header(AUTHORIZATION, basic_auth_header(&request.credentials))
            .send()
            .await
            .map_err(|e| WigleServiceError::Transport(e.to_string()))?;

        let status = resp.status();
        if status != StatusCode::OK {
            let body = resp
                .text()
                .await
                .map_err(|e| WigleServiceError::Transport(e.to_string()))?;
            return Err(WigleServiceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = resp
            .json::<WigleSearchResponse>()
            .await
            .map_err(|e| {
                if e.is_decode() {
                    WigleServiceError::Decode(e.to_string())
                } else {
                    WigleServiceError::Transport(e.to_string())
                }
            })?;

        if let Some(total) = body.totalResults {
            if total > body.results.len() as u64 {
                warn!(
                    "Only the first {} of {} networks were fetched",
                    body.results.len(),
                    total
                );
            }
        }

        Ok(body.results)
    }
}
