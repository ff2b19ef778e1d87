//! Text Extractor.
//!
//! HTML in, text and thumbnail map out. Every function here is pure and never
//! fails on malformed markup.
//!
//! # Module Structure
//!
//! - `tags`: Block, line-break and non-rendering tag catalogs
//! - `linear`: Rendered inner text with block boundaries and cleanup
//! - `raw`: Raw text content with minimal normalisation
//! - `fallback`: Static tag stripping and the ordered text-source chain
//! - `thumbnails`: Layered lookup of thumbnail URLs per ad container
//!
//! # Usage
//!
//! ```rust
//! use naver_ad_parser::extractor::{extract_linear_text, extract_thumbnails};
//!
//! let html = r#"<ul><li class="lst"><div><span>Acme</span><a>acme.co.kr</a></div>
//!     <div class="thumb_area"><img src="a.jpg"></div></li></ul>"#;
//! assert_eq!(extract_linear_text(html), "Acme\nacme.co.kr");
//! assert_eq!(extract_thumbnails(html), vec![vec!["a.jpg".to_string()]]);
//! ```

pub mod fallback;
pub mod linear;
pub mod raw;
pub mod tags;
pub mod thumbnails;

pub use fallback::{extract_with_fallback, strip_tags_text, TextSource};
pub use linear::{clean_linear_text, extract_linear_text};
pub use raw::extract_raw_text;
pub use thumbnails::{
    extract_thumbnails, extract_thumbnails_with, ThumbnailReport, ThumbnailStrategy,
};
