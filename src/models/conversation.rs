use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::qualification::{LocationCategory, ProjectCategory};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ConversationState {
    #[default]
    Idle,
    CollectingName,
    CollectingProjectType,
    CollectingPreferredDate,
    CollectingEmail,
    QualifyingLocation,
    QualifyingProjectType,
    QualifyingBudget,
    QualifyingTimeline,
    QualifyingOwnership,
}

impl ConversationState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConversationState::Idle => "idle",
            ConversationState::CollectingName => "collecting_name",
            ConversationState::CollectingProjectType => "collecting_project_type",
            ConversationState::CollectingPreferredDate => "collecting_preferred_date",
            ConversationState::CollectingEmail => "collecting_email",
            ConversationState::QualifyingLocation => "qualifying_location",
            ConversationState::QualifyingProjectType => "qualifying_project_type",
            ConversationState::QualifyingBudget => "qualifying_budget",
            ConversationState::QualifyingTimeline => "qualifying_timeline",
            ConversationState::QualifyingOwnership => "qualifying_ownership",
        }
    }

    pub fn is_scheduling(&self) -> bool {
        matches!(
            self,
            ConversationState::CollectingName
                | ConversationState::CollectingProjectType
                | ConversationState::CollectingPreferredDate
                | ConversationState::CollectingEmail
        )
    }

    pub fn is_qualifying(&self) -> bool {
        matches!(
            self,
            ConversationState::QualifyingLocation
                | ConversationState::QualifyingProjectType
                | ConversationState::QualifyingBudget
                | ConversationState::QualifyingTimeline
                | ConversationState::QualifyingOwnership
        )
    }
}

/// Consultation request collected one field per message by the scheduling flow.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppointmentDraft {
    pub name: Option<String>,
    pub service_type: Option<String>,
    pub preferred_date: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct QualificationDraft {
    pub location_raw: Option<String>,
    pub location_category: Option<LocationCategory>,
    pub project_raw: Option<String>,
    pub project_category: Option<ProjectCategory>,
    pub budget: Option<String>,
    pub timeline: Option<String>,
    pub ownership: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SenderRole {
    User,
    Bot,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub role: SenderRole,
    pub content: String,
    pub sent_at: NaiveDateTime,
}
