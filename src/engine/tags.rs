use super::rules::contains_any;
use crate::types::record::ModelRecord;
use crate::types::scoring::{DisplayTag, TagKind};

pub const MAX_TAGS: usize = 5;

pub const OPEN_SOURCE_LICENSES: &[&str] = &[
    "mit",
    "apache",
    "bsd",
    "gpl",
    "lgpl",
    "unlicense",
];
pub const WEIGHTS_KEYWORDS: &[&str] = &["weights", "checkpoint"];
pub const PAID_INDICATORS: &[&str] = &[
    "enterprise",
    "pricing",
    "subscription",
    "pro plan",
    "paid",
];
pub const FREEMIUM_INDICATORS: &[&str] = &["free tier", "freemium"];

pub fn assign_tag_kinds(record: &ModelRecord) -> Vec<TagKind> {
    let license = record.license_lower();
    let readme = record.readme_lower();
    let mut kinds = Vec::new();

    if contains_any(&license, OPEN_SOURCE_LICENSES) {
        kinds.push(TagKind::OpenSource);
    }

    if (record.has_source_url() && readme.contains("safetensors"))
        || contains_any(&readme, WEIGHTS_KEYWORDS)
    {
        kinds.push(TagKind::OpenWeights);
    }

    if !contains_any(&readme, PAID_INDICATORS) {
        kinds.push(TagKind::Free);
    } else if contains_any(&readme, FREEMIUM_INDICATORS) {
        kinds.push(TagKind::Freemium);
    } else {
        kinds.push(TagKind::ClosedPaid);
    }

    kinds.truncate(MAX_TAGS);
    kinds
}

pub fn assign_tags(record: &ModelRecord) -> Vec<DisplayTag> {
    assign_tag_kinds(record)
        .iter()
        .map(TagKind::tag)
        .collect()
}
