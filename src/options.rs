//! Configuration options for parsing and fetching.
//!
//! `Options` tunes the segmenter and thumbnail lookup, `FetchOptions` the
//! HTTP request for the search page. All fields are public; start from
//! `Default::default()` and override what you need.

use std::time::Duration;

/// Configuration options for page parsing.
///
/// # Example
///
/// ```rust
/// use naver_ad_parser::Options;
///
/// let options = Options {
///     promotion_min_chars: 10,
///     ..Options::default()
/// };
/// assert_eq!(options.thumbnails_per_ad, 3);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Minimum length, in characters, for the line after the description to
    /// count as promotion text.
    ///
    /// Default: `7`
    pub promotion_min_chars: usize,

    /// Group size used when thumbnails can only be found by class marker and
    /// have to be chunked into per-ad groups.
    ///
    /// Default: `3`
    pub thumbnails_per_ad: usize,

    /// CSS selectors used to locate ad containers and their thumbnails.
    pub thumbnail_selectors: ThumbnailSelectors,

    /// Fall back to raw text and then to regex tag stripping when the
    /// inner-text extraction comes back empty.
    ///
    /// Default: `true`
    pub text_fallback: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            promotion_min_chars: 7,
            thumbnails_per_ad: 3,
            thumbnail_selectors: ThumbnailSelectors::default(),
            text_fallback: true,
        }
    }
}

/// Selectors for the layered thumbnail lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailSelectors {
    /// One element per advertisement.
    ///
    /// Default: `li.lst`
    pub container: String,

    /// Thumbnail sub-container inside an advertisement.
    ///
    /// Default: `.thumb_area`
    pub thumbnail_area: String,

    /// Class marker carried by thumbnail images themselves.
    ///
    /// Default: `img.thumb_img`
    pub image_marker: String,
}

impl Default for ThumbnailSelectors {
    fn default() -> Self {
        Self {
            container: "li.lst".to_string(),
            thumbnail_area: ".thumb_area".to_string(),
            image_marker: "img.thumb_img".to_string(),
        }
    }
}

/// Desktop Chrome user agent sent with search page requests.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Configuration for fetching the search results page.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Search endpoint; `where=ad` and `query=<keyword>` are appended.
    ///
    /// Default: `https://ad.search.naver.com/search.naver`
    pub endpoint: String,

    /// Whole-request timeout.
    ///
    /// Default: 15 seconds
    pub timeout: Duration,

    /// `User-Agent` header.
    pub user_agent: String,

    /// `Accept-Language` header.
    ///
    /// Default: `ko-KR,ko;q=0.9,en-US;q=0.8,en;q=0.7`
    pub accept_language: String,

    /// `Referer` header.
    ///
    /// Default: `https://www.naver.com/`
    pub referer: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            endpoint: "https://ad.search.naver.com/search.naver".to_string(),
            timeout: Duration::from_secs(15),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept_language: "ko-KR,ko;q=0.9,en-US;q=0.8,en;q=0.7".to_string(),
            referer: "https://www.naver.com/".to_string(),
        }
    }
}
