//! Keyword sets and the case-insensitive containment test every rule uses.
//!
//! Matching is plain substring search on the lowercased message, so "floor"
//! also matches "flooring" and "subfloor".

use crate::models::ServiceKind;

pub const BATHROOM_CONTEXT: &[&str] = &["bathroom", "shower", "tub", "vanity"];
pub const KITCHEN_CONTEXT: &[&str] = &["kitchen", "backsplash", "cabinet", "counter"];
pub const FLOORING_CONTEXT: &[&str] = &["floor", "flooring", "hardwood", "vinyl", "laminate", "tile"];
pub const GENERAL_CONTEXT: &[&str] = &["remodel", "renovation", "upgrade", "project"];

pub const SCHEDULING_ENTRY: &[&str] = &["schedule", "appointment", "book", "consultation", "visit"];

pub fn contains_any(lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| lower.contains(kw))
}

/// Service named by a message, if any. `General` only means "some project"
/// was mentioned; callers keep a more specific earlier context over it.
pub fn detect_service(lower: &str) -> Option<ServiceKind> {
    if contains_any(lower, BATHROOM_CONTEXT) {
        Some(ServiceKind::Bathroom)
    } else if contains_any(lower, KITCHEN_CONTEXT) {
        Some(ServiceKind::Kitchen)
    } else if contains_any(lower, FLOORING_CONTEXT) {
        Some(ServiceKind::Flooring)
    } else if contains_any(lower, GENERAL_CONTEXT) {
        Some(ServiceKind::General)
    } else {
        None
    }
}

pub fn is_qualification_entry(lower: &str) -> bool {
    lower.contains("project") && lower.contains("fit")
}

pub fn is_scheduling_entry(lower: &str) -> bool {
    contains_any(lower, SCHEDULING_ENTRY)
}
