use crate::models::{AppointmentDraft, ConversationState, Reply};

use super::responses::{ESTIMATE_URL, FALLBACK};

pub const NAME_PROMPT: &str =
    "I can help you schedule a free in-home consultation. First, what is your name?";

/// Reset the draft and return the first prompt of the flow.
pub fn start(draft: &mut AppointmentDraft) -> (ConversationState, Reply) {
    *draft = AppointmentDraft::default();
    (ConversationState::CollectingName, Reply::text(NAME_PROMPT))
}

/// Consume one message into the draft. Every step advances; nothing is
/// validated.
pub fn advance(
    state: ConversationState,
    draft: &mut AppointmentDraft,
    message: &str,
) -> (ConversationState, Reply) {
    match state {
        ConversationState::CollectingName => {
            draft.name = Some(message.to_string());
            let first_name = message.split(' ').next().unwrap_or(message);
            (
                ConversationState::CollectingProjectType,
                Reply::text(format!(
                    "Great to meet you, {first_name}! What type of project are you considering (bathroom, kitchen, flooring, or general interior)?"
                )),
            )
        }
        ConversationState::CollectingProjectType => {
            draft.service_type = Some(message.to_string());
            (
                ConversationState::CollectingPreferredDate,
                Reply::text(
                    "Excellent. When would you ideally like to have your in-home consultation? (you can share a day or date range)",
                ),
            )
        }
        ConversationState::CollectingPreferredDate => {
            draft.preferred_date = Some(message.to_string());
            (
                ConversationState::CollectingEmail,
                Reply::text(
                    "Got it. What's the best email address for us to send your confirmation and details?",
                ),
            )
        }
        ConversationState::CollectingEmail => {
            draft.email = Some(message.to_string());
            tracing::info!(
                service = draft.service_type.as_deref().unwrap_or("remodeling"),
                "consultation request captured"
            );
            (ConversationState::Idle, Reply::text(confirmation(draft)))
        }
        // Not a scheduling state; leave it untouched.
        other => (other, Reply::text(FALLBACK)),
    }
}

fn confirmation(draft: &AppointmentDraft) -> String {
    format!(
        "Perfect! I've noted a {} consultation around {}. Our team will review it and send a confirmation to {}. You can also complete our full estimate form if you'd like more detailed pricing: <a href=\"{ESTIMATE_URL}\" target=\"_blank\">Request a Free Estimate</a>.",
        draft.service_type.as_deref().unwrap_or("remodeling"),
        draft.preferred_date.as_deref().unwrap_or("your preferred date"),
        draft.email.as_deref().unwrap_or("your email"),
    )
}
