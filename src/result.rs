//! Result types for parsing output.
//!
//! `AdRecord` is the per-advertisement output unit and serialises to the JSON
//! shape consumed by the analysis services. `ParseOutput` wraps the records
//! with the intermediate text and diagnostics of one parsing pass.

use serde::{Deserialize, Serialize};

use crate::extractor::{TextSource, ThumbnailReport};

/// Whether the ad advertises Naver Pay. Serialised as `"Y"` / `"N"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NaverPay {
    /// Payment marker or login prompt found after the domain.
    Y,
    /// No payment marker.
    #[default]
    N,
}

/// Advertiser identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    /// Line before the domain; empty when that line is a control token.
    pub name: String,

    /// The domain line that anchors the block.
    pub domain: String,
}

/// Payment badges.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payments {
    pub naverpay: NaverPay,
}

/// Headline copy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdText {
    pub title: String,
    pub desc: String,
}

/// Extensions shown under the headline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assets {
    /// Long line right after the description.
    pub promotion_text: String,

    /// Site links, in page order.
    pub sitelink_text: Vec<String>,

    /// Place tags from the map extension.
    pub naver_map_tag: Vec<String>,

    /// Review count line, e.g. `방문자리뷰 1,234`.
    pub visitor_review: String,

    /// Price line from the map extension.
    pub naver_map_price_link: String,

    /// Captions after the campaign duration.
    pub thumb_nail_text: Vec<String>,

    /// Image URLs taken positionally from the thumbnail map.
    pub thumb_nail_images: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdRunPeriod {
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    pub ad_run_period: AdRunPeriod,
}

/// One advertisement recovered from the search page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdRecord {
    /// Search keyword, echoed verbatim.
    pub keyword: String,

    /// 1-based position among the records that passed validation.
    pub rank: usize,

    pub brand: Brand,
    pub payments: Payments,
    pub ad_text: AdText,
    pub assets: Assets,
    pub meta: Meta,
}

impl AdRecord {
    /// Domain, title, description and campaign duration are all present.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.brand.domain.is_empty()
            && !self.ad_text.title.is_empty()
            && !self.ad_text.desc.is_empty()
            && !self.meta.ad_run_period.label.is_empty()
    }
}

/// Output of one parsing pass over a search page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseOutput {
    /// Search keyword, echoed verbatim.
    pub keyword: String,

    /// Text handed to the segmenter.
    pub text: String,

    /// Fallback strategy that produced `text`.
    pub text_source: TextSource,

    /// Raw text variant, for export and debugging.
    pub raw_text: String,

    /// Thumbnail map and the lookup that found it.
    pub thumbnails: ThumbnailReport,

    /// Blocks found before validation (one per domain line).
    pub candidate_blocks: usize,

    /// Complete records, ranked 1..N.
    pub records: Vec<AdRecord>,

    /// Non-fatal issues, such as empty text or a thumbnail count that does
    /// not match the block count.
    pub warnings: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_serializes_to_camel_case_shape() {
        let record = AdRecord {
            keyword: "치과".to_string(),
            rank: 1,
            brand: Brand {
                name: "Acme".to_string(),
                domain: "acme.co.kr".to_string(),
            },
            payments: Payments { naverpay: NaverPay::Y },
            ..AdRecord::default()
        };
        let json = serde_json::to_value(&record).unwrap_or_default();
        assert_eq!(json["payments"]["naverpay"], "Y");
        assert_eq!(json["brand"]["domain"], "acme.co.kr");
        assert!(json["adText"]["title"].is_string());
        assert!(json["assets"]["thumbNailImages"].is_array());
        assert!(json["assets"]["naverMapPriceLink"].is_string());
        assert!(json["meta"]["adRunPeriod"]["label"].is_string());
    }

    #[test]
    fn record_round_trips_from_service_json() {
        let json = r#"{"keyword":"k","rank":2,"brand":{"name":"","domain":"d.com"},
            "payments":{"naverpay":"N"},"adText":{"title":"t","desc":"d"},
            "assets":{"promotionText":"","sitelinkText":["a"],"naverMapTag":[],
            "visitorReview":"","naverMapPriceLink":"","thumbNailText":[],"thumbNailImages":[]},
            "meta":{"adRunPeriod":{"label":"3개월"}}}"#;
        match serde_json::from_str::<AdRecord>(json) {
            Ok(record) => {
                assert_eq!(record.rank, 2);
                assert_eq!(record.assets.sitelink_text, vec!["a"]);
                assert!(record.is_complete());
            }
            Err(err) => panic!("expected Ok(_), got Err({err:?})"),
        }
    }

    #[test]
    fn completeness_requires_duration_label() {
        let mut record = AdRecord::default();
        record.brand.domain = "d.com".to_string();
        record.ad_text.title = "t".to_string();
        record.ad_text.desc = "d".to_string();
        assert!(!record.is_complete());
        record.meta.ad_run_period.label = "3개월".to_string();
        assert!(record.is_complete());
    }
}
