use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use wordsearch_api_types::{search::SearchResults, SEARCH_PARAM};

use crate::error::AppResult;

/// Everything outside RFC 3986's unreserved set gets escaped.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Status and body of a finished request. Status handling is left to the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

#[async_trait(?Send)]
pub trait SearchTransport {
    async fn get(&self, url: &str) -> AppResult<RawResponse>;
}

pub fn search_url(api_base: &str, query: &str) -> String {
    let separator = if api_base.contains('?') { '&' } else { '?' };
    format!(
        "{api_base}{separator}{SEARCH_PARAM}={}",
        utf8_percent_encode(query, QUERY_VALUE)
    )
}

pub fn parse_results(body: &str) -> AppResult<SearchResults> {
    Ok(serde_json::from_str(body)?)
}

#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

#[cfg(feature = "csr")]
#[async_trait(?Send)]
impl SearchTransport for BrowserTransport {
    async fn get(&self, url: &str) -> AppResult<RawResponse> {
        let response = gloo_net::http::Request::get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        Ok(RawResponse { status, body })
    }
}

/// reqwest backed transport for native builds.
///
/// reqwest drives its connections on Tokio, so `get` must be awaited inside a
/// Tokio runtime. Awaiting it from any other executor panics.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Debug, Default)]
pub struct NativeTransport {
    client: reqwest::Client,
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait(?Send)]
impl SearchTransport for NativeTransport {
    async fn get(&self, url: &str) -> AppResult<RawResponse> {
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(RawResponse { status, body })
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "csr")] {
        pub type DefaultTransport = BrowserTransport;
    } else if #[cfg(not(target_arch = "wasm32"))] {
        pub type DefaultTransport = NativeTransport;
    } else {
        compile_error!("wasm builds need the `csr` feature for a browser transport");
    }
}
