//! Search page fetch.
//!
//! Network collaborator of the parsing core: builds the ad search URL for a
//! keyword, requests it with desktop browser headers, and decodes the body.
//! A non-success status and a transport failure surface as distinct errors;
//! nothing here is retried or swallowed.

use chrono::{DateTime, Utc};
use reqwest::blocking::Client;
use reqwest::header::{
    HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CONTENT_TYPE, REFERER, USER_AGENT,
};
use serde::Serialize;
use tracing::{debug, info};
use url::Url;

use crate::encoding;
use crate::error::{Error, Result};
use crate::options::{FetchOptions, Options};
use crate::result::ParseOutput;

const ACCEPT_HTML: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8";

/// A fetched search page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchedPage {
    /// Requested URL.
    pub url: String,

    /// HTTP status code (always a success code).
    pub status: u16,

    /// `Content-Type` response header, if any.
    pub content_type: Option<String>,

    /// Decoded body.
    pub html: String,

    pub fetched_at: DateTime<Utc>,
}

/// Ad search URL for `keyword`: `<endpoint>?where=ad&query=<keyword>`.
pub fn search_url(endpoint: &str, keyword: &str) -> Result<Url> {
    let mut url = Url::parse(endpoint)?;
    url.query_pairs_mut()
        .append_pair("where", "ad")
        .append_pair("query", keyword);
    Ok(url)
}

/// Blocking client for the ad search page.
#[derive(Debug, Clone)]
pub struct SearchClient {
    client: Client,
    options: FetchOptions,
}

impl SearchClient {
    /// Build a client with the configured timeout and default headers.
    pub fn new(options: FetchOptions) -> Result<Self> {
        let client = Client::builder()
            .default_headers(default_headers(&options))
            .timeout(options.timeout)
            .gzip(true)
            .build()?;
        Ok(Self { client, options })
    }

    /// Fetch the search page for `keyword`.
    pub fn fetch(&self, keyword: &str) -> Result<FetchedPage> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Err(Error::MissingKeyword);
        }

        let url = search_url(&self.options.endpoint, keyword)?;
        debug!(%url, "requesting search page");
        let response = self.client.get(url.clone()).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response.bytes()?;
        let html = encoding::decode_html(&body, content_type.as_deref());
        info!(%url, status = status.as_u16(), html_len = html.len(), "fetched search page");

        Ok(FetchedPage {
            url: url.to_string(),
            status: status.as_u16(),
            content_type,
            html,
            fetched_at: Utc::now(),
        })
    }

    /// Fetch the search page for `keyword` and parse it.
    pub fn fetch_and_parse(
        &self,
        keyword: &str,
        options: &Options,
    ) -> Result<(FetchedPage, ParseOutput)> {
        let page = self.fetch(keyword)?;
        let output = crate::parse_html_with_options(&page.html, keyword.trim(), options);
        Ok((page, output))
    }
}

/// One-shot fetch with a fresh client.
pub fn fetch_search_page(keyword: &str, options: &FetchOptions) -> Result<FetchedPage> {
    SearchClient::new(options.clone())?.fetch(keyword)
}

/// One-shot fetch and parse with a fresh client.
pub fn fetch_and_parse(
    keyword: &str,
    fetch_options: &FetchOptions,
    options: &Options,
) -> Result<ParseOutput> {
    let (_page, output) =
        SearchClient::new(fetch_options.clone())?.fetch_and_parse(keyword, options)?;
    Ok(output)
}

fn default_headers(options: &FetchOptions) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_HTML));
    for (name, value) in [
        (USER_AGENT, &options.user_agent),
        (ACCEPT_LANGUAGE, &options.accept_language),
        (REFERER, &options.referer),
    ] {
        if let Ok(value) = HeaderValue::from_str(value) {
            headers.insert(name, value);
        }
    }
    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_url_encodes_keyword() {
        match search_url("https://ad.search.naver.com/search.naver", "강남 치과") {
            Ok(url) => {
                assert_eq!(url.host_str(), Some("ad.search.naver.com"));
                let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
                assert_eq!(
                    pairs,
                    vec![
                        ("where".to_string(), "ad".to_string()),
                        ("query".to_string(), "강남 치과".to_string()),
                    ]
                );
                assert!(!url.as_str().contains(' '));
            }
            Err(err) => panic!("expected Ok(_), got Err({err:?})"),
        }
    }

    #[test]
    fn invalid_endpoint_is_an_error() {
        assert!(matches!(
            search_url("not a url", "kw"),
            Err(Error::InvalidEndpoint(_))
        ));
    }

    #[test]
    fn empty_keyword_is_rejected_before_any_request() {
        let client = SearchClient::new(FetchOptions {
            endpoint: "http://127.0.0.1:9/search".to_string(),
            ..FetchOptions::default()
        });
        match client {
            Ok(client) => assert!(matches!(client.fetch("   "), Err(Error::MissingKeyword))),
            Err(err) => panic!("expected Ok(_), got Err({err:?})"),
        }
    }

    #[test]
    fn default_headers_carry_browser_identity() {
        let headers = default_headers(&FetchOptions::default());
        assert!(headers
            .get(USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ua| ua.contains("Chrome/120")));
        assert_eq!(
            headers.get(REFERER).and_then(|v| v.to_str().ok()),
            Some("https://www.naver.com/")
        );
        assert!(headers.contains_key(ACCEPT_LANGUAGE));
    }
}
