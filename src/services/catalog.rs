use url::form_urlencoded;

use crate::models::{service_options, ServiceKind};

pub const EMPTY_SELECTION: &str = "Please select at least one service option.";

/// Estimate page query string for a picker selection. Only options offered
/// for the service are accepted.
pub fn estimate_query(service: ServiceKind, selected: &[String]) -> Result<String, &'static str> {
    let offered = service_options(service).map(|o| o.options).unwrap_or(&[]);
    let details: Vec<&str> = selected
        .iter()
        .map(|s| s.trim())
        .filter(|s| offered.contains(s))
        .collect();

    if details.is_empty() {
        return Err(EMPTY_SELECTION);
    }

    Ok(form_urlencoded::Serializer::new(String::new())
        .append_pair("service", service.as_str())
        .append_pair("details", &details.join(", "))
        .finish())
}
