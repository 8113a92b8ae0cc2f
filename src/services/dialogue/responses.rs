//! Canned replies and the fixed links they embed.

use crate::models::{QuickReply, Reply};

pub const ESTIMATE_URL: &str = "pages/estimate.html";
pub const CONTACT_URL: &str = "pages/contact.html";
pub const PHONE_HREF: &str = "tel:+14698663951";
pub const PHONE_DISPLAY: &str = "(469) 866-3951";

pub const FALLBACK: &str = "Thanks for reaching out about your project! I'm a remodeling assistant focused on bathroom, kitchen, and flooring upgrades. You can ask about pricing, timelines, our process, or say 'schedule a consultation' and I'll help you get started.";

/// First bot message of every chat.
pub fn welcome() -> Reply {
    Reply::text(
        "Hello! 👋 I'm the Tier 1 Remodeling Assistant for homeowners in the DFW area.\
         <br /><br />\
         I can answer questions about your bathroom, kitchen, or flooring project and help you:\
         <ul class=\"chatbot-capabilities\">\
         <li>Understand typical timelines and what to expect</li>\
         <li>Get a free estimate or schedule a consultation</li>\
         <li>Learn about materials, warranties, and our process</li>\
         </ul>",
    )
    .with_quick_replies(vec![
        QuickReply::new("Bathroom Remodels", "Tell me about bathroom remodels"),
        QuickReply::new("Kitchen Remodels", "Tell me about kitchen remodels"),
        QuickReply::new("Flooring Options", "Tell me about flooring options"),
        QuickReply::new("Schedule a Consultation", "I want to schedule a consultation"),
    ])
}
