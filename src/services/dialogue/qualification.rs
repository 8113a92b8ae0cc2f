use crate::models::{
    ConversationState, LocationCategory, ProjectCategory, QualificationDraft, QuickReply, Reply,
};

use super::keywords::contains_any;
use super::responses::{ESTIMATE_URL, FALLBACK, PHONE_DISPLAY, PHONE_HREF};

const OUTSIDE_TX: &[&str] = &["outside texas", "outside of texas", "out of state", "not in texas"];
const DFW: &[&str] = &[
    "dfw", "dallas", "fort worth", "metroplex", "frisco", "plano", "mckinney", "lewisville",
    "denton", "allen", "prosper", "irving", "arlington", "carrollton", "richardson", "garland",
];
const NEAR_DFW: &[&str] = &["near dfw", "outside dfw", "outside of dfw", "close to dfw"];
const NEARBY: &[&str] = &[
    "north texas", "nearby", "sherman", "waxahachie", "weatherford", "granbury",
    "gainesville", "greenville", "cleburne", "rockwall",
];
const TEXAS: &[&str] = &["texas", "tx", "houston", "austin", "san antonio", "el paso"];

const BATHROOM: &[&str] = &["bathroom", "bath", "shower", "tub", "vanity"];
const KITCHEN: &[&str] = &["kitchen", "cabinet", "countertop", "backsplash"];
const FLOORING: &[&str] = &["floor", "hardwood", "vinyl", "laminate", "lvp", "tile"];
const WHOLE_HOME: &[&str] = &["whole home", "whole-home", "entire house", "full house", "multiple rooms"];
const SMALL_REPAIR: &[&str] = &[
    "small repair", "single door", "single window", "handyman", "small job", "minor fix",
];
const EXTERIOR: &[&str] = &["exterior", "roof", "siding", "fence", "deck", "patio", "gutter", "outdoor"];

pub const LOCATION_CHOICES: &[&str] = &[
    "In the DFW Metroplex",
    "Elsewhere in North Texas",
    "Somewhere else in Texas",
    "Outside Texas",
];
pub const PROJECT_CHOICES: &[&str] = &[
    "Bathroom remodel",
    "Kitchen remodel",
    "Flooring",
    "Whole-home renovation",
    "Small repair or single door/window",
    "Exterior work (roofing, siding, fencing)",
];
pub const BUDGET_CHOICES: &[&str] = &["Under $10k", "$10k-$25k", "$25k-$50k", "$50k+"];
pub const TIMELINE_CHOICES: &[&str] = &[
    "As soon as possible",
    "Within 1-3 months",
    "3-6 months out",
    "Just researching",
];
pub const OWNERSHIP_CHOICES: &[&str] = &["Yes, I own the home", "No, I rent", "Buying soon"];

pub fn classify_location(lower: &str) -> LocationCategory {
    if contains_any(lower, OUTSIDE_TX) {
        LocationCategory::OutsideTx
    } else if contains_any(lower, NEAR_DFW) {
        LocationCategory::Nearby
    } else if contains_any(lower, DFW) {
        LocationCategory::Dfw
    } else if contains_any(lower, NEARBY) {
        LocationCategory::Nearby
    } else if contains_any(lower, TEXAS) {
        LocationCategory::TexasFar
    } else {
        LocationCategory::Unknown
    }
}

/// Primary categories first; small repair then exterior override them.
pub fn classify_project(lower: &str) -> ProjectCategory {
    let mut category = if contains_any(lower, BATHROOM) {
        ProjectCategory::Bathroom
    } else if contains_any(lower, KITCHEN) {
        ProjectCategory::Kitchen
    } else if contains_any(lower, FLOORING) {
        ProjectCategory::Flooring
    } else if contains_any(lower, WHOLE_HOME) {
        ProjectCategory::WholeHome
    } else {
        ProjectCategory::OtherInterior
    };

    if contains_any(lower, SMALL_REPAIR) {
        category = ProjectCategory::SmallRepair;
    }
    if contains_any(lower, EXTERIOR) {
        category = ProjectCategory::Exterior;
    }
    category
}

pub fn start(draft: &mut QualificationDraft) -> (ConversationState, Reply) {
    *draft = QualificationDraft::default();
    (
        ConversationState::QualifyingLocation,
        Reply::with_choices(
            "Happy to check whether your project is a good fit! A few quick questions. First, where is the home located?",
            LOCATION_CHOICES,
        ),
    )
}

pub fn advance(
    state: ConversationState,
    draft: &mut QualificationDraft,
    message: &str,
) -> (ConversationState, Reply) {
    let lower = message.to_lowercase();

    match state {
        ConversationState::QualifyingLocation => {
            let category = classify_location(&lower);
            draft.location_raw = Some(message.to_string());
            draft.location_category = Some(category);

            let lead_in = match category {
                LocationCategory::OutsideTx => {
                    tracing::info!(location = category.as_str(), "lead disqualified");
                    return (ConversationState::Idle, Reply::text(OUTSIDE_AREA));
                }
                LocationCategory::Dfw => "Great, that's right in our service area.",
                LocationCategory::Nearby => {
                    "Thanks! We regularly work in communities near DFW, so that should work."
                }
                LocationCategory::TexasFar | LocationCategory::Unknown => {
                    "Thanks! We mainly serve the DFW metroplex, so we'll confirm travel during your consultation."
                }
            };
            (
                ConversationState::QualifyingProjectType,
                Reply::with_choices(
                    format!("{lead_in} What type of project are you planning?"),
                    PROJECT_CHOICES,
                ),
            )
        }
        ConversationState::QualifyingProjectType => {
            let category = classify_project(&lower);
            draft.project_raw = Some(message.to_string());
            draft.project_category = Some(category);

            if category.is_excluded() {
                tracing::info!(project = category.as_str(), "lead disqualified");
                return (ConversationState::Idle, Reply::text(EXCLUDED_PROJECT));
            }

            (
                ConversationState::QualifyingBudget,
                Reply::with_choices(
                    format!(
                        "A {} is right up our alley. What budget range are you working with?",
                        category.label()
                    ),
                    BUDGET_CHOICES,
                ),
            )
        }
        ConversationState::QualifyingBudget => {
            draft.budget = Some(message.to_string());
            (
                ConversationState::QualifyingTimeline,
                Reply::with_choices("Got it. When are you hoping to get started?", TIMELINE_CHOICES),
            )
        }
        ConversationState::QualifyingTimeline => {
            draft.timeline = Some(message.to_string());
            (
                ConversationState::QualifyingOwnership,
                Reply::with_choices("Last question: do you own the home?", OWNERSHIP_CHOICES),
            )
        }
        ConversationState::QualifyingOwnership => {
            draft.ownership = Some(message.to_string());
            tracing::info!(
                location = draft.location_category.map(|c| c.as_str()).unwrap_or("unknown"),
                project = draft.project_category.map(|c| c.as_str()).unwrap_or("unknown"),
                "qualified lead"
            );
            (ConversationState::Idle, qualified_summary(draft))
        }
        other => (other, Reply::text(FALLBACK)),
    }
}

const OUTSIDE_AREA: &str = "Thanks for checking! We only work on homes in Texas, primarily across the DFW metroplex, so we wouldn't be the right fit for this project. We wish you the best with it!";

const EXCLUDED_PROJECT: &str = "Thanks for the details! We focus on interior remodeling (bathrooms, kitchens, flooring, and whole-home updates), so small repairs and exterior work aren't a good fit for our team. A local handyman or exterior specialist will be able to help you faster.";

fn qualified_summary(draft: &QualificationDraft) -> Reply {
    let project = draft
        .project_category
        .map(|c| c.label())
        .unwrap_or("remodeling project");
    let text = format!(
        "Great news, your project looks like a strong fit! Here's what I have:<ul>\
         <li>Location: {}</li><li>Project: {}</li><li>Budget: {}</li>\
         <li>Timeline: {}</li><li>Homeowner: {}</li></ul>\
         The next step is a free in-home consultation. You can <a href=\"{ESTIMATE_URL}\" target=\"_blank\">request a free estimate</a>, call us at <a href=\"{PHONE_HREF}\">{PHONE_DISPLAY}</a>, or schedule right here in chat.",
        draft.location_raw.as_deref().unwrap_or("not provided"),
        project,
        draft.budget.as_deref().unwrap_or("not provided"),
        draft.timeline.as_deref().unwrap_or("not provided"),
        draft.ownership.as_deref().unwrap_or("not provided"),
    );
    Reply::text(text).with_quick_replies(vec![QuickReply::new(
        "Schedule a Consultation",
        "I want to schedule a consultation",
    )])
}
