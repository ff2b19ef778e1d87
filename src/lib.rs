//! # naver-ad-parser
//!
//! Parser for Naver search advertisement result pages.
//!
//! The page is turned into the text a browser would render (`innerText`)
//! without running a browser, and that text is segmented into one structured
//! record per advertisement. Thumbnail images are collected per ad container
//! and attached to the records by position.
//!
//! ## Quick Start
//!
//! ```rust
//! use naver_ad_parser::{parse_html, NaverPay};
//!
//! let html = r#"<html><body><ul><li class="lst">
//!   <div><span>Acme</span><a>acme.co.kr</a><span>네이버페이</span></div>
//!   <p>Buy Now</p><p>Great deals here</p>
//!   <div><span>광고집행기간</span><span>3개월</span></div>
//! </li></ul></body></html>"#;
//!
//! let output = parse_html(html, "쇼핑");
//! let ad = &output.records[0];
//! assert_eq!(ad.rank, 1);
//! assert_eq!(ad.brand.domain, "acme.co.kr");
//! assert_eq!(ad.payments.naverpay, NaverPay::Y);
//! assert_eq!(ad.meta.ad_run_period.label, "3개월");
//! ```
//!
//! ## Features
//!
//! - **Inner-text extraction**: block boundaries, inline flattening and the
//!   promotion of element-only children, followed by line cleanup
//! - **Fallback chain**: raw text and regex tag stripping when the rendered
//!   text comes back empty
//! - **Block segmentation**: domain-anchored blocks read by an ordered,
//!   cursor-driven field pipeline, validated and re-ranked
//! - **Fetching** (feature `fetch`, on by default): blocking request for the
//!   ad search page with browser headers
//!
//! The `naver_ads` binary also needs the `cli` feature (clap, anyhow and
//! tracing-subscriber). Library users can build with `default-features = false`.

mod error;
mod extract;
mod options;
mod patterns;
mod result;

/// DOM adapter over `dom_query`.
pub mod dom;

/// Text Extractor: inner text, raw text, fallback chain, thumbnail map.
pub mod extractor;

/// Block Segmenter: Line Stream, line predicates and the block walk.
pub mod segmenter;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Payloads for the morpheme and insight services.
pub mod analysis;

/// Search page fetch.
#[cfg(feature = "fetch")]
pub mod fetch;

// Public API - re-exports
pub use error::{Error, Result};
pub use extractor::{TextSource, ThumbnailReport, ThumbnailStrategy};
pub use options::{FetchOptions, Options, ThumbnailSelectors, DEFAULT_USER_AGENT};
pub use result::{
    AdRecord, AdRunPeriod, AdText, Assets, Brand, Meta, NaverPay, ParseOutput, Payments,
};

/// Parses a search results page with default options.
///
/// `keyword` is copied into every record. Never fails: malformed markup and
/// incomplete ads only reduce the number of records.
#[must_use]
pub fn parse_html(html: &str, keyword: &str) -> ParseOutput {
    parse_html_with_options(html, keyword, &Options::default())
}

/// Parses a search results page with custom options.
///
/// # Example
///
/// ```rust
/// use naver_ad_parser::{parse_html_with_options, Options};
///
/// let options = Options {
///     promotion_min_chars: 12,
///     ..Options::default()
/// };
/// let output = parse_html_with_options("<html><body></body></html>", "kw", &options);
/// assert!(output.records.is_empty());
/// ```
#[must_use]
pub fn parse_html_with_options(html: &str, keyword: &str, options: &Options) -> ParseOutput {
    extract::parse_page(html, keyword, options)
}

/// Parses a search results page given as raw bytes.
///
/// The encoding is taken from the HTML meta tags and defaults to UTF-8;
/// invalid sequences become U+FFFD.
///
/// # Example
///
/// ```rust
/// use naver_ad_parser::parse_html_bytes;
///
/// // "광고" in EUC-KR
/// let mut html = b"<html><head><meta charset=\"euc-kr\"></head><body><p>".to_vec();
/// html.extend_from_slice(&[0xB1, 0xA4, 0xB0, 0xED]);
/// html.extend_from_slice(b"</p></body></html>");
/// assert_eq!(parse_html_bytes(&html, "kw").text, "광고");
/// ```
#[must_use]
pub fn parse_html_bytes(html: &[u8], keyword: &str) -> ParseOutput {
    let html = encoding::transcode_to_utf8(html);
    parse_html(&html, keyword)
}

#[cfg(feature = "fetch")]
pub use fetch::{fetch_and_parse, fetch_search_page, FetchedPage, SearchClient};
