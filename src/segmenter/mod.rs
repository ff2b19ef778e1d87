//! Block Segmenter.
//!
//! Line Stream plus thumbnail map in, ranked `AdRecord`s out.
//!
//! # Module Structure
//!
//! - `lines`: Line Stream construction (trim, drop blanks and pagination noise)
//! - `tokens`: Named line predicates and fixed marker strings
//! - `block`: Anchors, block spans and the cursor-driven field pipeline

pub mod block;
pub mod lines;
pub mod tokens;

pub use block::{block_spans, candidate_blocks, find_anchors, rank_complete, BlockSpan};
pub use lines::LineStream;

use crate::options::Options;
use crate::result::AdRecord;

/// Segment a Line Stream into complete, ranked records.
///
/// # Example
///
/// ```rust
/// use naver_ad_parser::segmenter::{segment, LineStream};
/// use naver_ad_parser::Options;
///
/// let lines: LineStream = ["Acme", "acme.co.kr", "네이버페이", "Buy Now", "Great deals here", "광고집행기간", "3개월"]
///     .into_iter()
///     .collect();
/// let records = segment(&lines, &[], "쇼핑", &Options::default());
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].meta.ad_run_period.label, "3개월");
/// ```
#[must_use]
pub fn segment(
    lines: &LineStream,
    thumbnails: &[Vec<String>],
    keyword: &str,
    options: &Options,
) -> Vec<AdRecord> {
    rank_complete(candidate_blocks(lines, thumbnails, keyword, options))
}

/// Build the Line Stream from text and segment it.
#[must_use]
pub fn segment_text(
    text: &str,
    thumbnails: &[Vec<String>],
    keyword: &str,
    options: &Options,
) -> Vec<AdRecord> {
    segment(&LineStream::from_text(text), thumbnails, keyword, options)
}
