//! JSON transport: one request in, one parsed JSON value out.
//!
//! # Design
//! Two middleware-wrapped reqwest clients live inside the transport: a
//! retrying one (bounded exponential backoff) used exclusively for GET,
//! and a plain single-attempt one for everything else. Payment and booking
//! POSTs must never replay, so the split is by method, not per call site.
//!
//! Every request runs under `tokio::select!` against the caller's
//! cancellation token, composed with a per-request timeout. Both fire the
//! same way: the request is dropped mid-flight and the caller sees
//! `ApiError::Aborted`, distinguishable from network and server errors.

use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::policies::ExponentialBackoff;
use reqwest_retry::RetryTransientMiddleware;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio_util::sync::CancellationToken;

use crate::config::Config;
use crate::error::ApiError;

/// One outgoing JSON request, built by the API façade.
#[derive(Debug)]
pub struct ApiRequest {
    method: Method,
    url: String,
    bearer: Option<String>,
    body: Option<String>,
    timeout: Option<Duration>,
}

impl ApiRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::GET, url)
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::POST, url)
    }

    fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            bearer: None,
            body: None,
            timeout: None,
        }
    }

    /// Attach the bearer token, when one is available.
    pub fn bearer(mut self, token: Option<String>) -> Self {
        self.bearer = token;
        self
    }

    /// Attach a JSON body.
    pub fn json<B: Serialize>(mut self, body: &B) -> Result<Self, ApiError> {
        self.body = Some(serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?);
        Ok(self)
    }

    /// Override the configured timeout for this request only.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Shared HTTP layer under the typed façade.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    retrying: ClientWithMiddleware,
    plain: ClientWithMiddleware,
    default_timeout: Duration,
}

impl HttpTransport {
    pub fn new(config: &Config) -> Self {
        let backoff = ExponentialBackoff::builder()
            .retry_bounds(Duration::from_millis(100), Duration::from_secs(2))
            .build_with_max_retries(config.max_get_retries);

        let retrying = ClientBuilder::new(reqwest::Client::new())
            .with(RetryTransientMiddleware::new_with_policy(backoff))
            .build();
        let plain = ClientBuilder::new(reqwest::Client::new()).build();

        Self {
            retrying,
            plain,
            default_timeout: config.timeout,
        }
    }

    /// Execute the request and parse the response body as JSON.
    ///
    /// 2xx with an empty body parses as JSON `null`, so `T = ()` works for
    /// bodyless endpoints. Non-2xx becomes `ApiError::Http` with the error
    /// body parsed best-effort.
    pub async fn send_json<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
        cancel: &CancellationToken,
    ) -> Result<T, ApiError> {
        let client = if request.method == Method::GET {
            &self.retrying
        } else {
            &self.plain
        };
        let timeout = request.timeout.unwrap_or(self.default_timeout);

        let mut builder = client
            .request(request.method.clone(), request.url.as_str())
            .timeout(timeout)
            .header(ACCEPT, "application/json");
        if let Some(token) = &request.bearer {
            builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        if let Some(body) = request.body {
            builder = builder.header(CONTENT_TYPE, "application/json").body(body);
        }

        let round_trip = async {
            let response = builder.send().await.map_err(middleware_error)?;
            let status = response.status();
            let text = response.text().await.map_err(reqwest_error)?;
            log::debug!("{} {} -> {}", request.method, request.url, status);
            parse_body(status, &text)
        };

        tokio::select! {
            biased;
            () = cancel.cancelled() => Err(ApiError::Aborted),
            result = round_trip => result,
        }
    }
}

fn parse_body<T: DeserializeOwned>(status: StatusCode, text: &str) -> Result<T, ApiError> {
    if status.is_success() {
        let payload = if text.trim().is_empty() { "null" } else { text };
        return serde_json::from_str(payload).map_err(|e| ApiError::Decode(e.to_string()));
    }
    let details = serde_json::from_str(text).ok();
    Err(ApiError::Http {
        status: status.as_u16(),
        details,
    })
}

fn middleware_error(err: reqwest_middleware::Error) -> ApiError {
    match err {
        reqwest_middleware::Error::Reqwest(e) => reqwest_error(e),
        reqwest_middleware::Error::Middleware(e) => ApiError::Transport(e.to_string()),
    }
}

fn reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        ApiError::Aborted
    } else {
        ApiError::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_with_empty_body_parses_as_unit() {
        parse_body::<()>(StatusCode::OK, "").unwrap();
    }

    #[test]
    fn success_with_body_deserializes() {
        let value: serde_json::Value = parse_body(StatusCode::OK, r#"{"apptId": 9}"#).unwrap();
        assert_eq!(value["apptId"], 9);
    }

    #[test]
    fn non_success_carries_status_and_details() {
        let err = parse_body::<()>(StatusCode::CONFLICT, r#"{"message":"already booked"}"#)
            .unwrap_err();
        match err {
            ApiError::Http { status, details } => {
                assert_eq!(status, 409);
                assert_eq!(details.unwrap()["message"], "already booked");
            }
            other => panic!("expected Http, got {other:?}"),
        }
    }

    #[test]
    fn non_success_with_garbage_body_has_no_details() {
        let err = parse_body::<()>(StatusCode::BAD_GATEWAY, "<html>oops</html>").unwrap_err();
        match err {
            ApiError::Http { status, details } => {
                assert_eq!(status, 502);
                assert!(details.is_none());
            }
            other => panic!("expected Http, got {other:?}"),
        }
    }

    #[test]
    fn garbled_success_body_is_a_decode_error() {
        let err = parse_body::<serde_json::Value>(StatusCode::OK, "not json").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
