//! Thumbnail map: image URLs per advertisement container.
//!
//! Three layered lookups are tried in order until one finds at least one
//! image:
//!
//! 1. **Container**: one entry per ad container, images taken from the
//!    thumbnail areas inside it. Containers without images give empty entries,
//!    so positions stay aligned with the ads.
//! 2. **Ancestor**: thumbnail areas found anywhere, grouped by the nearest
//!    ancestor carrying an `id` or `data-*` attribute.
//! 3. **ClassMarker**: every image with the thumbnail class, chunked into
//!    fixed-size groups.
//!
//! The entries are matched to ad blocks by position only.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::dom::{self, Document, NodeId, NodeRef, Selection};
use crate::options::ThumbnailSelectors;

/// Image URL attributes, most preferred first.
const IMAGE_URL_ATTRIBUTES: [&str; 4] = ["src", "data-src", "data-lazy-src", "data-original"];

/// Which lookup produced the thumbnail map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThumbnailStrategy {
    /// Scoped to ad containers.
    Container,
    /// Grouped by identified ancestor.
    Ancestor,
    /// Flat class-marker list in fixed-size chunks.
    ClassMarker,
}

/// Thumbnail map plus the lookup that produced it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThumbnailReport {
    /// One entry per ad container, in document order.
    pub groups: Vec<Vec<String>>,

    /// `None` when no lookup found a single image.
    pub strategy: Option<ThumbnailStrategy>,
}

impl ThumbnailReport {
    /// Images for the ad at `index`; empty when out of range.
    #[must_use]
    pub fn images_for(&self, index: usize) -> Vec<String> {
        self.groups.get(index).cloned().unwrap_or_default()
    }
}

type Lookup = fn(&Document, &ThumbnailSelectors, usize) -> Vec<Vec<String>>;

const LOOKUPS: [(ThumbnailStrategy, Lookup); 3] = [
    (ThumbnailStrategy::Container, by_container as Lookup),
    (ThumbnailStrategy::Ancestor, by_identified_ancestor as Lookup),
    (ThumbnailStrategy::ClassMarker, by_class_marker as Lookup),
];

/// Thumbnail map with the default selectors and groups of 3.
#[must_use]
pub fn extract_thumbnails(html: &str) -> Vec<Vec<String>> {
    extract_thumbnails_with(html, &ThumbnailSelectors::default(), 3).groups
}

/// Thumbnail map with explicit selectors; `per_ad` is the chunk size of the
/// class-marker lookup.
#[must_use]
pub fn extract_thumbnails_with(
    html: &str,
    selectors: &ThumbnailSelectors,
    per_ad: usize,
) -> ThumbnailReport {
    let doc = dom::parse(html);
    thumbnails_in(&doc, selectors, per_ad)
}

pub(crate) fn thumbnails_in(
    doc: &Document,
    selectors: &ThumbnailSelectors,
    per_ad: usize,
) -> ThumbnailReport {
    for (strategy, lookup) in LOOKUPS {
        let groups = lookup(doc, selectors, per_ad);
        if groups.iter().any(|group| !group.is_empty()) {
            return ThumbnailReport {
                groups,
                strategy: Some(strategy),
            };
        }
    }
    ThumbnailReport::default()
}

fn by_container(
    doc: &Document,
    selectors: &ThumbnailSelectors,
    _per_ad: usize,
) -> Vec<Vec<String>> {
    doc.select(&selectors.container)
        .nodes()
        .iter()
        .map(|container| {
            let areas = Selection::from(*container).select(&selectors.thumbnail_area);
            let mut urls = Vec::new();
            for area in outermost(areas.nodes()) {
                for url in images_in(&area) {
                    push_unique(&mut urls, url);
                }
            }
            urls
        })
        .collect()
}

fn by_identified_ancestor(
    doc: &Document,
    selectors: &ThumbnailSelectors,
    _per_ad: usize,
) -> Vec<Vec<String>> {
    let areas = doc.select(&selectors.thumbnail_area);

    let mut groups: Vec<Vec<String>> = Vec::new();
    let mut slots: HashMap<NodeId, usize> = HashMap::new();
    for area in outermost(areas.nodes()) {
        let key = dom::ancestors(&area)
            .find(dom::has_identity)
            .map_or(area.id, |ancestor| ancestor.id);
        let slot = *slots.entry(key).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        if let Some(group) = groups.get_mut(slot) {
            for url in images_in(&area) {
                push_unique(group, url);
            }
        }
    }
    groups
}

fn by_class_marker(
    doc: &Document,
    selectors: &ThumbnailSelectors,
    per_ad: usize,
) -> Vec<Vec<String>> {
    let urls: Vec<String> = doc
        .select(&selectors.image_marker)
        .nodes()
        .iter()
        .filter_map(image_url)
        .collect();
    urls.chunks(per_ad.max(1)).map(<[String]>::to_vec).collect()
}

/// Drop matches nested inside another match so no image is counted twice.
fn outermost<'a>(nodes: &[NodeRef<'a>]) -> Vec<NodeRef<'a>> {
    let ids: HashSet<NodeId> = nodes.iter().map(|node| node.id).collect();
    nodes
        .iter()
        .filter(|node| !dom::ancestors(node).any(|ancestor| ids.contains(&ancestor.id)))
        .copied()
        .collect()
}

fn images_in(area: &NodeRef) -> Vec<String> {
    let mut urls = Vec::new();
    if dom::tag_name(area).as_deref() == Some("img") {
        urls.extend(image_url(area));
    }
    for img in Selection::from(*area).select("img").nodes() {
        if let Some(url) = image_url(img) {
            push_unique(&mut urls, url);
        }
    }
    urls
}

/// First usable URL attribute. Inline `data:` placeholders (lazy-load
/// spacers) are skipped in favour of the next attribute.
fn image_url(img: &NodeRef) -> Option<String> {
    IMAGE_URL_ATTRIBUTES
        .iter()
        .filter_map(|name| dom::attribute(img, name))
        .find(|url| !url.starts_with("data:"))
}

fn push_unique(list: &mut Vec<String>, value: String) {
    if !list.contains(&value) {
        list.push(value);
    }
}
