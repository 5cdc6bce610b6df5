// src/services/api.rs

//! Homework review API client.
//!
//! Issues one authenticated GET per polling cycle, asking for statuses
//! changed since the `from_date` cursor.

use std::time::Duration;

use reqwest::header::AUTHORIZATION;
use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::error::{AppError, Result};
use crate::models::ApiConfig;

/// Client for the homework status endpoint.
pub struct HomeworkApi {
    client: Client,
    endpoint: String,
    token: String,
}

impl HomeworkApi {
    /// Create a new API client with the given configuration and credential.
    pub fn new(config: &ApiConfig, token: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            token,
        })
    }

    /// Fetch homework statuses changed since `from_date`.
    ///
    /// The body is returned as raw JSON; shape validation happens in the
    /// pipeline.
    pub async fn fetch(&self, from_date: i64) -> Result<Value> {
        log::debug!("Requesting homework statuses since {}", from_date);

        let response = self
            .client
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|e| AppError::EndpointUnreachable(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(AppError::UnexpectedStatus(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::EndpointUnreachable(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| AppError::Decode(e.to_string()))
    }
}
