// ABOUTME: JSON-over-HTTP client for the target backend
// ABOUTME: Sends one request at a time and classifies failures as soft, connection or unexpected
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::config::BackendUrl;
use crate::errors::{SeedError, SeedResult};

/// HTTP client bound to one backend base URL
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: Client,
    base_url: BackendUrl,
}

impl BackendClient {
    /// Create a client with default `reqwest` settings (no request timeout)
    #[must_use]
    pub fn new(base_url: BackendUrl) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Create a client around a preconfigured `reqwest::Client`
    #[must_use]
    pub const fn with_client(http: Client, base_url: BackendUrl) -> Self {
        Self { http, base_url }
    }

    /// Base URL requests are sent to
    #[must_use]
    pub const fn base_url(&self) -> &BackendUrl {
        &self.base_url
    }

    /// POST a JSON payload and decode the created record
    ///
    /// # Errors
    ///
    /// [`SeedError::Rejected`] on a non-success status, [`SeedError::Connection`]
    /// if the backend is unreachable, [`SeedError::Transport`] or
    /// [`SeedError::Decode`] otherwise
    pub async fn post<P, R>(&self, path: &str, payload: &P) -> SeedResult<R>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let request = self.http.post(self.base_url.endpoint(path)).json(payload);
        let body = self.execute("POST", path, request).await?;
        decode(path, &body)
    }

    /// POST a JSON payload, discarding the response body
    ///
    /// # Errors
    ///
    /// [`SeedError::Rejected`] on a non-success status, [`SeedError::Connection`]
    /// if the backend is unreachable, [`SeedError::Transport`] otherwise
    pub async fn post_discarding_body<P>(&self, path: &str, payload: &P) -> SeedResult<()>
    where
        P: Serialize + ?Sized,
    {
        let request = self.http.post(self.base_url.endpoint(path)).json(payload);
        self.execute("POST", path, request).await.map(|_| ())
    }

    /// PUT a JSON payload, discarding the response body
    ///
    /// # Errors
    ///
    /// [`SeedError::Rejected`] on a non-success status, [`SeedError::Connection`]
    /// if the backend is unreachable, [`SeedError::Transport`] otherwise
    pub async fn put<P>(&self, path: &str, payload: &P) -> SeedResult<()>
    where
        P: Serialize + ?Sized,
    {
        let request = self.http.put(self.base_url.endpoint(path)).json(payload);
        self.execute("PUT", path, request).await.map(|_| ())
    }

    /// GET and decode a JSON body
    ///
    /// # Errors
    ///
    /// [`SeedError::Rejected`] on a non-success status, [`SeedError::Connection`]
    /// if the backend is unreachable, [`SeedError::Transport`] or
    /// [`SeedError::Decode`] otherwise
    pub async fn get<R>(&self, path: &str) -> SeedResult<R>
    where
        R: DeserializeOwned,
    {
        let request = self.http.get(self.base_url.endpoint(path));
        let body = self.execute("GET", path, request).await?;
        decode(path, &body)
    }

    /// Send a request and return the body of a success response
    async fn execute(
        &self,
        method: &'static str,
        path: &str,
        request: RequestBuilder,
    ) -> SeedResult<String> {
        debug!(http.method = method, http.path = path, "Sending request");

        let response = request.send().await.map_err(|e| {
            if e.is_connect() {
                SeedError::Connection {
                    base_url: self.base_url.to_string(),
                    source: e,
                }
            } else {
                SeedError::Transport {
                    method,
                    path: path.to_owned(),
                    source: e,
                }
            }
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| SeedError::Transport {
            method,
            path: path.to_owned(),
            source: e,
        })?;
        debug!(http.method = method, http.path = path, http.status = %status, "Received response");

        if !status.is_success() {
            return Err(SeedError::Rejected {
                method,
                path: path.to_owned(),
                status,
                body,
            });
        }

        Ok(body)
    }
}

fn decode<R: DeserializeOwned>(path: &str, body: &str) -> SeedResult<R> {
    serde_json::from_str(body).map_err(|e| SeedError::Decode {
        path: path.to_owned(),
        source: e,
    })
}
