use serde::{Deserialize, Serialize};

/// Last service the visitor talked about. Used to personalize pricing and
/// timeline answers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ServiceKind {
    Bathroom,
    Kitchen,
    Flooring,
    General,
}

impl ServiceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceKind::Bathroom => "bathroom",
            ServiceKind::Kitchen => "kitchen",
            ServiceKind::Flooring => "flooring",
            ServiceKind::General => "general",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "bathroom" => Some(ServiceKind::Bathroom),
            "kitchen" => Some(ServiceKind::Kitchen),
            "flooring" => Some(ServiceKind::Flooring),
            "general" => Some(ServiceKind::General),
            _ => None,
        }
    }
}
