//! Block walk.
//!
//! Every domain line anchors one block. A block runs from its brand-name line
//! (the line before the anchor) up to the brand-name line of the next block.
//! Inside a block an explicit cursor moves forward through an ordered list of
//! field rules, each consuming lines only when its predicate accepts them.

use crate::options::Options;
use crate::result::{AdRecord, NaverPay};
use crate::segmenter::tokens::{self, MapLine, DURATION_MARKER};

/// Line indices of one block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockSpan {
    /// Domain line.
    pub anchor: usize,

    /// Brand-name line, if the line before the anchor is a genuine name.
    pub brand: Option<usize>,

    /// One past the last line of the block.
    pub end: usize,
}

/// Indices of all domain lines.
#[must_use]
pub fn find_anchors(lines: &[String]) -> Vec<usize> {
    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| tokens::is_domain_line(line))
        .map(|(index, _)| index)
        .collect()
}

/// One span per anchor, in order.
#[must_use]
pub fn block_spans(lines: &[String]) -> Vec<BlockSpan> {
    let anchors = find_anchors(lines);
    let brands: Vec<Option<usize>> = (0..anchors.len())
        .map(|k| brand_line(lines, &anchors, k))
        .collect();

    anchors
        .iter()
        .zip(&brands)
        .enumerate()
        .map(|(k, (&anchor, &brand))| {
            // A control token before the next anchor stays with this block.
            let end = match (anchors.get(k + 1), brands.get(k + 1)) {
                (Some(&next), Some(&next_brand)) => next_brand.unwrap_or(next),
                _ => lines.len(),
            };
            BlockSpan { anchor, brand, end }
        })
        .collect()
}

fn brand_line(lines: &[String], anchors: &[usize], k: usize) -> Option<usize> {
    let candidate = anchors.get(k)?.checked_sub(1)?;
    if k > 0 && anchors.get(k - 1).is_some_and(|&previous| candidate <= previous) {
        return None;
    }
    let line = lines.get(candidate)?;
    (!tokens::is_brand_blocker(line)).then_some(candidate)
}

/// Build one unranked record per anchor. `thumbnails` is matched by block
/// position.
#[must_use]
pub fn candidate_blocks(
    lines: &[String],
    thumbnails: &[Vec<String>],
    keyword: &str,
    options: &Options,
) -> Vec<AdRecord> {
    block_spans(lines)
        .iter()
        .enumerate()
        .map(|(index, span)| {
            let mut record = read_block(lines, span, options);
            record.keyword = keyword.to_string();
            record.assets.thumb_nail_images =
                thumbnails.get(index).cloned().unwrap_or_default();
            record
        })
        .collect()
}

/// Keep complete records and number them 1..N in their original order.
#[must_use]
pub fn rank_complete(candidates: Vec<AdRecord>) -> Vec<AdRecord> {
    candidates
        .into_iter()
        .filter(AdRecord::is_complete)
        .zip(1..)
        .map(|(mut record, rank)| {
            record.rank = rank;
            record
        })
        .collect()
}

struct Cursor<'a> {
    lines: &'a [String],
    pos: usize,
    end: usize,
}

impl<'a> Cursor<'a> {
    fn peek(&self) -> Option<&'a str> {
        if self.pos < self.end {
            self.lines.get(self.pos).map(String::as_str)
        } else {
            None
        }
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn take(&mut self) -> Option<&'a str> {
        let line = self.peek()?;
        self.advance();
        Some(line)
    }

    fn take_if(&mut self, accept: impl FnOnce(&str) -> bool) -> Option<&'a str> {
        let line = self.peek().filter(|&line| accept(line))?;
        self.advance();
        Some(line)
    }

    fn rest(&mut self) -> &'a [String] {
        let start = self.pos.min(self.end);
        self.pos = self.end;
        self.lines.get(start..self.end).unwrap_or_default()
    }
}

fn read_block(lines: &[String], span: &BlockSpan, options: &Options) -> AdRecord {
    let mut record = AdRecord::default();
    let mut cursor = Cursor {
        lines,
        pos: span.anchor + 1,
        end: span.end.min(lines.len()),
    };

    // brand
    record.brand.domain = lines.get(span.anchor).cloned().unwrap_or_default();
    record.brand.name = span
        .brand
        .and_then(|index| lines.get(index).cloned())
        .unwrap_or_default();

    // payment badge, optionally followed by its tooltip
    if cursor
        .take_if(|line| tokens::is_payment_marker(line) || tokens::is_login_prompt(line))
        .is_some()
    {
        record.payments.naverpay = NaverPay::Y;
        cursor.take_if(tokens::is_service_description);
    }

    record.ad_text.title = cursor.take().unwrap_or_default().to_string();
    record.ad_text.desc = cursor.take().unwrap_or_default().to_string();

    let min_chars = options.promotion_min_chars;
    if let Some(line) = cursor.take_if(|line| {
        line.chars().count() >= min_chars
            && !tokens::is_slider_label(line)
            && !tokens::is_duration(line)
    }) {
        record.assets.promotion_text = line.to_string();
    }

    while let Some(line) =
        cursor.take_if(|line| !tokens::is_slider_label(line) && !tokens::is_duration(line))
    {
        record.assets.sitelink_text.push(line.to_string());
    }

    while cursor.take_if(tokens::is_slider_label).is_some() {}

    while let Some(line) = cursor.take_if(|line| !tokens::is_duration(line)) {
        match tokens::classify_map_line(line) {
            MapLine::Review => append_field(&mut record.assets.visitor_review, line),
            MapLine::Price => append_field(&mut record.assets.naver_map_price_link, line),
            MapLine::Slider => {}
            MapLine::Tag => record.assets.naver_map_tag.push(line.to_string()),
        }
    }

    record.meta.ad_run_period.label = read_duration(&mut cursor);

    record.assets.thumb_nail_text = cursor
        .rest()
        .iter()
        .filter(|line| !tokens::is_control_token(line))
        .cloned()
        .collect();

    record
}

/// Marker with inline value, marker followed by the value line, or a bare
/// value. The marker is checked first.
fn read_duration(cursor: &mut Cursor) -> String {
    let Some(line) = cursor.peek() else {
        return String::new();
    };

    if let Some(at) = line.find(DURATION_MARKER) {
        cursor.advance();
        let inline = line[at + DURATION_MARKER.len()..]
            .trim()
            .trim_start_matches(':')
            .trim();
        if !inline.is_empty() {
            return inline.to_string();
        }
        return cursor.take().unwrap_or_default().to_string();
    }

    if tokens::is_duration_value(line) {
        cursor.advance();
        return line.to_string();
    }
    String::new()
}

fn append_field(field: &mut String, line: &str) {
    if !field.is_empty() {
        field.push_str(" · ");
    }
    field.push_str(line);
}
