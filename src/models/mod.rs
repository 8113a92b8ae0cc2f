pub mod catalog;
pub mod conversation;
pub mod form;
pub mod gallery;
pub mod qualification;
pub mod reply;
pub mod service;

pub use catalog::{service_options, ServiceOptions};
pub use conversation::{
    AppointmentDraft, ConversationState, QualificationDraft, SenderRole, TranscriptEntry,
};
pub use form::{ContactForm, FieldError, FormField, FormKind};
pub use gallery::GalleryImage;
pub use qualification::{LocationCategory, ProjectCategory};
pub use reply::{QuickReply, Reply};
pub use service::ServiceKind;
