//! Network operations against the scanning platform's REST API.
//!
//! This module owns the HTTP transport: the credential exchange, the
//! paginated violations listing and the per-violation detail lookup. All
//! requests are blocking and issued one at a time; there is no retry and no
//! timeout beyond the transport's defaults, so any failure aborts the run.

use serde::de::DeserializeOwned;

use crate::error::{ReportError, Result};
use crate::models::violation::{
    AuthRequest, AuthToken, PageRequest, ViolationDetail, ViolationsFilter, ViolationsPage,
    ViolationsRequest,
};
use ureq::Agent;
use ureq::tls::TlsConfig;

/// Authenticated client for the violations API.
///
/// Certificate verification is on unless the caller explicitly opted out at
/// the CLI boundary; the transport never downgrades on its own.
pub struct XrayClient {
    agent: Agent,
    base_url: String,
    token: String,
}

impl XrayClient {
    /// Builds the transport and exchanges `user`/`password` for an API token.
    ///
    /// # Errors
    /// Returns `ReportError::Auth` when the server rejects the credentials,
    /// `ReportError::Transport` for any other failure of the exchange, and
    /// `ReportError::MalformedResponse` when the token payload cannot be
    /// decoded.
    pub fn connect(base_url: &str, insecure: bool, user: &str, password: &str) -> Result<Self> {
        let tls_config = TlsConfig::builder().disable_verification(insecure).build();
        let agent = Agent::config_builder()
            .tls_config(tls_config)
            .build()
            .new_agent();
        let base_url = base_url.trim_end_matches('/').to_string();

        let token = exchange_token(&agent, &base_url, user, password)?;

        Ok(XrayClient {
            agent,
            base_url,
            token,
        })
    }

    /// Fetches one page of the violations listing for `watch`.
    ///
    /// `page` is the 1-based page index; the server's `offset` field counts
    /// pages, not items.
    pub fn violations_page(&self, watch: &str, limit: u64, page: u64) -> Result<ViolationsPage> {
        let url = format!("{}/api/v1/violations", self.base_url);
        let body = ViolationsRequest {
            filters: ViolationsFilter { watch_name: watch },
            pagination: PageRequest {
                limit,
                offset: page,
            },
        };

        let mut response = self
            .agent
            .post(&url)
            .header("Authorization", self.bearer())
            .send_json(&body)
            .map_err(|err| transport_error(&url, err))?;

        read_json(&url, &mut response)
    }

    /// Fetches the full detail payload a listing summary points at.
    pub fn violation_details(&self, details_url: &str) -> Result<ViolationDetail> {
        let mut response = self
            .agent
            .get(details_url)
            .header("Authorization", self.bearer())
            .call()
            .map_err(|err| transport_error(details_url, err))?;

        read_json(details_url, &mut response)
    }

    fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

fn exchange_token(agent: &Agent, base_url: &str, user: &str, password: &str) -> Result<String> {
    let url = format!("{base_url}/api/v1/auth/token");
    let body = AuthRequest {
        name: user,
        password,
    };

    let mut response = agent.post(&url).send_json(&body).map_err(|err| match err {
        ureq::Error::StatusCode(code) if code == 401 || code == 403 => ReportError::Auth {
            user: user.to_string(),
            reason: format!("server rejected the credentials (HTTP {code})"),
        },
        other => transport_error(&url, other),
    })?;

    let token: AuthToken = read_json(&url, &mut response)?;
    Ok(token.token)
}

fn read_json<T: DeserializeOwned>(
    url: &str,
    response: &mut ureq::http::Response<ureq::Body>,
) -> Result<T> {
    let text = response
        .body_mut()
        .read_to_string()
        .map_err(|err| transport_error(url, err))?;

    serde_json::from_str(&text).map_err(|err| ReportError::MalformedResponse {
        url: url.to_string(),
        reason: err.to_string(),
    })
}

fn transport_error(url: &str, source: ureq::Error) -> ReportError {
    ReportError::Transport {
        url: url.to_string(),
        source: Box::new(source),
    }
}
