//! Line classification predicates.
//!
//! One named predicate per recognition rule. The block walk combines them in
//! a fixed order; nothing here knows about cursor positions.

use crate::patterns::{DOMAIN_LINE, DURATION_VALUE, PAGE_NUMBER, PRICE, REVIEW_COUNT};

/// Naver Pay badge.
pub const PAYMENT_MARKER: &str = "네이버페이";

/// Login prompt shown in place of the badge for signed-out visitors.
pub const LOGIN_PROMPT: &str = "네이버 로그인";

/// Tooltip text that follows the payment badge.
pub const SERVICE_DESCRIPTION: &str = "결제 서비스";

/// "Register my business" prompt from the place extension.
pub const REGISTER_PROMPT: &str = "내 업체 등록";

/// Campaign duration marker.
pub const DURATION_MARKER: &str = "광고집행기간";

/// Image slider controls.
pub const SLIDER_LABELS: [&str; 6] = ["이전", "다음", "이전 슬라이드", "다음 슬라이드", "<", ">"];

/// Pagination controls.
pub const PAGINATION_LABELS: [&str; 2] = ["이전페이지", "다음페이지"];

#[must_use]
pub fn is_domain_line(line: &str) -> bool {
    DOMAIN_LINE.is_match(line)
}

#[must_use]
pub fn is_payment_marker(line: &str) -> bool {
    line.contains(PAYMENT_MARKER)
}

#[must_use]
pub fn is_login_prompt(line: &str) -> bool {
    line.contains(LOGIN_PROMPT)
}

#[must_use]
pub fn is_service_description(line: &str) -> bool {
    line.contains(SERVICE_DESCRIPTION)
}

#[must_use]
pub fn is_register_prompt(line: &str) -> bool {
    line == REGISTER_PROMPT
}

#[must_use]
pub fn has_duration_marker(line: &str) -> bool {
    line.contains(DURATION_MARKER)
}

/// `3개월`, `12개월 이상`.
#[must_use]
pub fn is_duration_value(line: &str) -> bool {
    DURATION_VALUE.is_match(line)
}

/// Marker or bare value: where the map and site-link runs stop.
#[must_use]
pub fn is_duration(line: &str) -> bool {
    has_duration_marker(line) || is_duration_value(line)
}

#[must_use]
pub fn is_slider_label(line: &str) -> bool {
    SLIDER_LABELS.contains(&line)
}

#[must_use]
pub fn is_review_count(line: &str) -> bool {
    REVIEW_COUNT.is_match(line)
}

#[must_use]
pub fn is_price_link(line: &str) -> bool {
    PRICE.is_match(line)
}

/// Page numbers and pagination labels, removed before segmentation.
#[must_use]
pub fn is_noise_line(line: &str) -> bool {
    PAGE_NUMBER.is_match(line) || PAGINATION_LABELS.contains(&line)
}

/// A line that can sit right before a domain without being its brand name.
#[must_use]
pub fn is_brand_blocker(line: &str) -> bool {
    line == PAYMENT_MARKER || is_register_prompt(line) || is_duration(line)
}

/// Any control token; never stored as a caption.
#[must_use]
pub fn is_control_token(line: &str) -> bool {
    is_brand_blocker(line) || is_slider_label(line)
}

/// Classification of a line inside the map extension run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapLine {
    Review,
    Price,
    Slider,
    Tag,
}

/// Ordered decision list for the map extension: review count first, then
/// price, then slider controls; everything else is a tag.
#[must_use]
pub fn classify_map_line(line: &str) -> MapLine {
    if is_review_count(line) {
        MapLine::Review
    } else if is_price_link(line) {
        MapLine::Price
    } else if is_slider_label(line) {
        MapLine::Slider
    } else {
        MapLine::Tag
    }
}
