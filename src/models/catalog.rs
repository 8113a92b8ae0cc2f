use serde::Serialize;

use super::ServiceKind;

#[derive(Debug, Clone, Serialize)]
pub struct ServiceOptions {
    pub service: ServiceKind,
    pub title: &'static str,
    pub options: &'static [&'static str],
}

const BATHROOM_OPTIONS: &[&str] = &[
    "Master Bath Remodel",
    "Guest Bath Update",
    "Tub-to-Shower Conversion",
    "New Vanity Installation",
    "Tile Replacement",
    "Plumbing Fixture Upgrade",
];

const KITCHEN_OPTIONS: &[&str] = &[
    "Full Kitchen Remodel",
    "Cabinet Refacing",
    "Countertop Installation",
    "Backsplash Tiling",
    "Kitchen Island Addition",
    "Lighting Upgrade",
];

const FLOORING_OPTIONS: &[&str] = &[
    "Hardwood Flooring",
    "Tile Flooring",
    "Vinyl Plank (LVP)",
    "Laminate Flooring",
    "Carpet Removal",
    "Subfloor Repair",
];

/// Options offered in the service picker. `General` has no picker.
pub fn service_options(service: ServiceKind) -> Option<ServiceOptions> {
    let (title, options) = match service {
        ServiceKind::Bathroom => ("Bathroom Remodel Services", BATHROOM_OPTIONS),
        ServiceKind::Kitchen => ("Kitchen Upgrade Options", KITCHEN_OPTIONS),
        ServiceKind::Flooring => ("Flooring Selection", FLOORING_OPTIONS),
        ServiceKind::General => return None,
    };
    Some(ServiceOptions {
        service,
        title,
        options,
    })
}
