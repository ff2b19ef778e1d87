//! Parsing pipeline.
//!
//! HTML → text (through the fallback chain) → Line Stream → candidate blocks
//! → ranked records, with the thumbnail map computed alongside and checked
//! against the block count.

use tracing::{debug, info, warn};

use crate::dom::{self, Document};
use crate::extractor::fallback::{self, TextSource};
use crate::extractor::{linear, raw, thumbnails};
use crate::options::Options;
use crate::result::ParseOutput;
use crate::segmenter::{self, LineStream};

/// Main parsing entry point.
pub(crate) fn parse_page(html: &str, keyword: &str, options: &Options) -> ParseOutput {
    let doc = dom::parse_rendered(html);
    let raw_text = raw::raw_text_of(&doc);
    let (text_source, text) = page_text(html, &doc, &raw_text, options.text_fallback);
    debug!(
        html_len = html.len(),
        text_len = text.len(),
        raw_len = raw_text.len(),
        ?text_source,
        "extracted page text"
    );

    let mut warnings = Vec::new();
    match text_source {
        TextSource::Linear => {}
        TextSource::None => {
            warn!(keyword, "no text could be extracted from the search page");
            warnings.push("No text could be extracted from the page".to_string());
        }
        source => {
            warn!(keyword, ?source, "inner text was empty, using fallback text");
            warnings.push(format!("Inner text was empty; used {source:?} text instead"));
        }
    }

    let thumbnails = thumbnails::thumbnails_in(
        &doc,
        &options.thumbnail_selectors,
        options.thumbnails_per_ad,
    );
    debug!(
        groups = thumbnails.groups.len(),
        strategy = ?thumbnails.strategy,
        "collected thumbnail map"
    );

    let lines = LineStream::from_text(&text);
    let candidates = segmenter::candidate_blocks(&lines, &thumbnails.groups, keyword, options);
    let candidate_blocks = candidates.len();

    if thumbnails.strategy.is_some() && thumbnails.groups.len() != candidate_blocks {
        warn!(
            thumbnail_groups = thumbnails.groups.len(),
            candidate_blocks, "thumbnail map does not line up with ad blocks"
        );
        warnings.push(format!(
            "Thumbnail map has {} entries for {candidate_blocks} ad blocks; images may be attached to the wrong ads",
            thumbnails.groups.len()
        ));
    }

    let records = segmenter::rank_complete(candidates);
    info!(
        keyword,
        lines = lines.len(),
        candidate_blocks,
        records = records.len(),
        "segmented search ads"
    );

    ParseOutput {
        keyword: keyword.to_string(),
        text,
        text_source,
        raw_text,
        thumbnails,
        candidate_blocks,
        records,
        warnings,
    }
}

/// The fallback chain over one parsed document: inner text, then the raw text
/// already computed for export, then tag stripping of the source.
fn page_text(html: &str, doc: &Document, raw_text: &str, fallback: bool) -> (TextSource, String) {
    let text = linear::linear_text_of(doc);
    if !text.trim().is_empty() {
        return (TextSource::Linear, text);
    }
    if !fallback {
        return (TextSource::None, String::new());
    }
    if !raw_text.trim().is_empty() {
        return (TextSource::Raw, raw_text.to_string());
    }
    let text = fallback::strip_tags_text(html);
    if !text.trim().is_empty() {
        return (TextSource::TagStripped, text);
    }
    (TextSource::None, String::new())
}
