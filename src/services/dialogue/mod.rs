//! Scripted remodeling assistant: two linear flows (consultation scheduling
//! and lead qualification) on top of a keyword-driven FAQ.

pub mod intents;
pub mod keywords;
pub mod qualification;
pub mod responses;
pub mod scheduling;

use crate::models::{
    AppointmentDraft, ConversationState, QualificationDraft, Reply, ServiceKind,
};

/// All state for one open conversation. Sessions are independent; nothing is
/// shared between them.
#[derive(Debug, Clone, Default)]
pub struct DialogueSession {
    state: ConversationState,
    appointment: AppointmentDraft,
    qualification: QualificationDraft,
    service: Option<ServiceKind>,
}

impl DialogueSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ConversationState {
        self.state
    }

    pub fn appointment(&self) -> &AppointmentDraft {
        &self.appointment
    }

    pub fn qualification(&self) -> &QualificationDraft {
        &self.qualification
    }

    pub fn service_context(&self) -> Option<ServiceKind> {
        self.service
    }

    /// Back to Idle with empty drafts and no service context.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Reply to one message, rendered as transcript markup.
    pub fn get_reply(&mut self, message: &str) -> String {
        self.respond(message).to_markup()
    }

    /// Reply to one message. Expects trimmed, non-empty input; always
    /// produces a reply.
    pub fn respond(&mut self, message: &str) -> Reply {
        let lower = message.to_lowercase();

        self.update_service_context(&lower);

        if self.state.is_qualifying() {
            let (next, reply) = qualification::advance(self.state, &mut self.qualification, message);
            self.state = next;
            return reply;
        }

        if self.state.is_scheduling() {
            let (next, reply) = scheduling::advance(self.state, &mut self.appointment, message);
            self.state = next;
            return reply;
        }

        if keywords::is_qualification_entry(&lower) {
            tracing::info!("qualification flow started");
            self.appointment = AppointmentDraft::default();
            let (next, reply) = qualification::start(&mut self.qualification);
            self.state = next;
            return reply;
        }

        if keywords::is_scheduling_entry(&lower) {
            tracing::info!("scheduling flow started");
            self.qualification = QualificationDraft::default();
            let (next, reply) = scheduling::start(&mut self.appointment);
            self.state = next;
            return reply;
        }

        if let Some((intent, reply)) = intents::answer(&lower, &mut self.service) {
            tracing::debug!(intent, "static intent matched");
            return reply;
        }

        Reply::text(responses::FALLBACK)
    }

    fn update_service_context(&mut self, lower: &str) {
        match keywords::detect_service(lower) {
            Some(ServiceKind::General) => {
                self.service.get_or_insert(ServiceKind::General);
            }
            Some(kind) => self.service = Some(kind),
            None => {}
        }
    }
}
