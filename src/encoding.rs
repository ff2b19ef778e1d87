//! Character encoding detection and transcoding.
//!
//! Search pages are served as UTF-8 today, but older Naver properties and
//! saved pages still use EUC-KR. The charset is taken from the HTTP
//! `Content-Type` header when there is one, then from the HTML meta tags,
//! and defaults to UTF-8.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Match `<meta charset="...">` tag
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;]+)"#).expect("valid regex")
});

/// Match `charset=...` inside a `Content-Type` header value
#[allow(clippy::expect_used)]
static HEADER_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)charset\s*=\s*["']?([^"'\s;]+)"#).expect("valid regex")
});

/// Detect character encoding from the HTML meta tags.
///
/// Covers both `<meta charset="...">` and
/// `<meta http-equiv="Content-Type" content="...; charset=...">`. Only the
/// first 1024 bytes are examined. Defaults to UTF-8.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    let head = &html[..html.len().min(1024)];
    let head_str = String::from_utf8_lossy(head);

    CHARSET_META_RE
        .captures(&head_str)
        .and_then(|caps| caps.get(1))
        .and_then(|charset| Encoding::for_label(charset.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}

/// Encoding named by a `Content-Type` header value, if any.
#[must_use]
pub fn charset_from_content_type(content_type: &str) -> Option<&'static Encoding> {
    HEADER_CHARSET_RE
        .captures(content_type)
        .and_then(|caps| caps.get(1))
        .and_then(|charset| Encoding::for_label(charset.as_str().as_bytes()))
}

/// Transcode HTML bytes to a UTF-8 string using the meta tags.
///
/// Invalid sequences become U+FFFD rather than errors.
///
/// # Examples
///
/// ```
/// use naver_ad_parser::encoding::transcode_to_utf8;
///
/// let html = b"<html><body>Hello, World!</body></html>";
/// assert!(transcode_to_utf8(html).contains("Hello, World!"));
/// ```
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    decode_html(html, None)
}

/// Transcode HTML bytes to UTF-8, preferring the charset from the HTTP
/// `Content-Type` header over the document's own declaration. A byte order
/// mark overrides both.
#[must_use]
pub fn decode_html(html: &[u8], content_type: Option<&str>) -> String {
    let encoding = content_type
        .and_then(charset_from_content_type)
        .unwrap_or_else(|| detect_encoding(html));

    if encoding == UTF_8 && Encoding::for_bom(html).is_none() {
        return String::from_utf8_lossy(html).into_owned();
    }

    let (decoded, _encoding_used, _had_errors) = encoding.decode(html);
    decoded.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::{EUC_KR, WINDOWS_1252};

    // "한글" in EUC-KR
    const HANGUL_EUC_KR: &[u8] = &[0xC7, 0xD1, 0xB1, 0xDB];

    fn euc_kr_page(meta: &str) -> Vec<u8> {
        let mut html = format!("<html><head>{meta}</head><body>").into_bytes();
        html.extend_from_slice(HANGUL_EUC_KR);
        html.extend_from_slice(b"</body></html>");
        html
    }

    #[test]
    fn detect_from_meta_charset() {
        let html = br#"<html><head><meta charset="euc-kr"></head><body>x</body></html>"#;
        assert_eq!(detect_encoding(html), EUC_KR);
    }

    #[test]
    fn detect_from_http_equiv() {
        let html = br#"<meta http-equiv="Content-Type" content="text/html; charset=ks_c_5601-1987">"#;
        assert_eq!(detect_encoding(html), EUC_KR);
    }

    #[test]
    fn default_is_utf8() {
        assert_eq!(detect_encoding(b"<html><body>x</body></html>"), UTF_8);
        assert_eq!(detect_encoding(br#"<meta charset="no-such-charset">"#), UTF_8);
    }

    #[test]
    fn header_charset_parsing() {
        assert_eq!(charset_from_content_type("text/html; charset=EUC-KR"), Some(EUC_KR));
        assert_eq!(charset_from_content_type("text/html;charset=\"windows-1252\""), Some(WINDOWS_1252));
        assert_eq!(charset_from_content_type("text/html"), None);
    }

    #[test]
    fn meta_declared_euc_kr_is_decoded() {
        let html = euc_kr_page(r#"<meta charset="euc-kr">"#);
        assert!(transcode_to_utf8(&html).contains("한글"));
    }

    #[test]
    fn header_wins_over_missing_meta() {
        let html = euc_kr_page("");
        assert!(!decode_html(&html, None).contains("한글"));
        assert!(decode_html(&html, Some("text/html; charset=euc-kr")).contains("한글"));
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let decoded = decode_html(b"<p>ok \xFF</p>", Some("text/html; charset=utf-8"));
        assert!(decoded.contains("ok \u{FFFD}"));
    }
}
