//! Ordered intent table consulted when no flow is active. The first rule
//! whose predicate matches answers the message.

use crate::models::{Reply, ServiceKind};

use super::keywords::contains_any;
use super::responses::{CONTACT_URL, ESTIMATE_URL, PHONE_DISPLAY, PHONE_HREF};

pub struct IntentRule {
    pub name: &'static str,
    matches: fn(&str, Option<ServiceKind>) -> bool,
    respond: fn(&mut Option<ServiceKind>) -> Reply,
}

pub static INTENTS: &[IntentRule] = &[
    IntentRule {
        name: "greeting",
        matches: |m, _| contains_any(m, &["hello", "hi", "hey", "good morning", "good evening"]),
        respond: |_| {
            Reply::text("Hi there! 👋 Are you thinking about a bathroom remodel, kitchen upgrade, or new flooring?")
        },
    },
    IntentRule {
        name: "emergency",
        matches: |m, _| contains_any(m, &["emergency", "urgent", "leak", "flood", "water damage"]),
        respond: |_| {
            Reply::text(format!(
                "If you have an active leak or safety issue, please call us right away at <a href=\"{PHONE_HREF}\">{PHONE_DISPLAY}</a> so we can respond as quickly as possible. For planning the repair or remodel, I can also help you schedule a consultation."
            ))
        },
    },
    IntentRule {
        name: "bathroom",
        matches: |m, service| {
            m.contains("bathroom")
                || (service == Some(ServiceKind::Bathroom)
                    && contains_any(m, &["tell me more", "details"]))
        },
        respond: |service| {
            *service = Some(ServiceKind::Bathroom);
            Reply::text("Bathroom remodels can include new tile, tub or shower conversions, vanities, lighting, and more. Most projects start with a free in-home visit where we measure, discuss design, and then provide a detailed written estimate.")
        },
    },
    IntentRule {
        name: "kitchen",
        matches: |m, _| m.contains("kitchen"),
        respond: |service| {
            *service = Some(ServiceKind::Kitchen);
            Reply::text("Kitchen remodels often include new cabinets, countertops, backsplash, lighting, and flooring. We'll walk you through layout options, materials, and a clear timeline during your free consultation.")
        },
    },
    IntentRule {
        name: "flooring",
        matches: |m, _| {
            contains_any(m, &["floor", "flooring", "hardwood", "laminate", "lvp", "vinyl", "tile"])
        },
        respond: |service| {
            *service = Some(ServiceKind::Flooring);
            Reply::text("For flooring, we install tile, hardwood, and luxury vinyl plank (LVP). We can help you choose the right material for bathrooms, kitchens, and whole-home upgrades based on durability, maintenance, and budget.")
        },
    },
    IntentRule {
        name: "pricing",
        matches: |m, _| contains_any(m, &["estimate", "quote", "price", "cost", "how much"]),
        respond: |service| Reply::text(pricing(*service)),
    },
    IntentRule {
        name: "timeline",
        matches: |m, _| {
            contains_any(m, &["timeline", "how long", "time frame", "duration", "how many weeks"])
        },
        respond: |service| Reply::text(timeline(*service)),
    },
    IntentRule {
        name: "licensing",
        matches: |m, _| contains_any(m, &["license", "licensed", "insured", "insurance", "bonded"]),
        respond: |_| {
            Reply::text("Yes, Tier 1 Home Services is fully licensed and insured so you're protected throughout your project. We're happy to share documentation during your consultation.")
        },
    },
    IntentRule {
        name: "service_area",
        matches: |m, _| {
            contains_any(m, &["area", "location", "where are you", "serve", "service area"])
        },
        respond: |_| {
            Reply::text("We serve homeowners across the DFW metroplex, including Frisco, Plano, McKinney, Lewisville, Denton, and surrounding communities. If you're nearby, we can likely help. Just share your city or ZIP code.")
        },
    },
    IntentRule {
        name: "process",
        matches: |m, _| contains_any(m, &["process", "how it works", "how does this work", "steps"]),
        respond: |_| {
            Reply::text("Our process is simple: (1) Free consultation & measurements, (2) Design and material selections, (3) Detailed written estimate & schedule, (4) Demo & installation, and (5) Final walkthrough to make sure you love the result.")
        },
    },
    IntentRule {
        name: "materials",
        matches: |m, _| {
            contains_any(m, &["material", "tile", "granite", "quartz", "lvp", "hardwood", "quality"])
        },
        respond: |_| {
            Reply::text("We work with quality materials from trusted suppliers, including tile, quartz and granite countertops, hardwood, and luxury vinyl plank. During your consultation we'll help you choose options that fit your style, durability needs, and budget.")
        },
    },
    IntentRule {
        name: "warranty",
        matches: |m, _| contains_any(m, &["warranty", "guarantee", "guaranteed"]),
        respond: |_| {
            Reply::text("We stand behind our workmanship with a labor warranty, and most products we install also carry manufacturer warranties. We can go over the details for your specific project during your estimate.")
        },
    },
    IntentRule {
        name: "financing",
        matches: |m, _| contains_any(m, &["financing", "payment", "payments", "pay", "credit card"]),
        respond: |_| {
            Reply::text("We accept major payment methods and can discuss any current financing or payment-plan options during your consultation. Many customers like to see the full project price first and then decide what works best for them.")
        },
    },
    IntentRule {
        name: "contact",
        matches: |m, _| contains_any(m, &["contact", "phone", "email", "call you"]),
        respond: |_| {
            Reply::text(format!(
                "You can reach us through our <a href=\"{CONTACT_URL}\" target=\"_blank\">contact page</a>, or call us directly at <a href=\"{PHONE_HREF}\">{PHONE_DISPLAY}</a>. You can also stay here in chat and ask to schedule a consultation."
            ))
        },
    },
];

/// Answer from the first matching rule, or `None` when no rule applies.
pub fn answer(lower: &str, service: &mut Option<ServiceKind>) -> Option<(&'static str, Reply)> {
    INTENTS
        .iter()
        .find(|rule| (rule.matches)(lower, *service))
        .map(|rule| (rule.name, (rule.respond)(service)))
}

fn pricing(service: Option<ServiceKind>) -> String {
    match service {
        Some(ServiceKind::Bathroom) => format!(
            "Bathroom remodel costs depend on the size of the space, tile choices, fixtures, and layout changes. The best next step is a free in-home consultation so we can see the bathroom and provide a detailed written estimate. You can also use our online form here: <a href=\"{ESTIMATE_URL}\" target=\"_blank\">Request a Bathroom Estimate</a>."
        ),
        Some(ServiceKind::Kitchen) => format!(
            "Kitchen remodel pricing varies widely based on cabinets, countertops, appliances, and layout changes. We'll put together a customized quote after a free in-home visit. You can get started with our estimate form: <a href=\"{ESTIMATE_URL}\" target=\"_blank\">Request a Kitchen Estimate</a>."
        ),
        Some(ServiceKind::Flooring) => "Flooring project costs depend on the material (tile, hardwood, LVP), square footage, and subfloor prep. Share which rooms you're considering and we can give you ballpark guidance, then firm it up with a free in-home measurement.".to_string(),
        Some(ServiceKind::General) | None => format!(
            "We offer free, no-obligation estimates for all projects. A quick in-home visit lets us measure, talk through options, and give you clear pricing. You can request one here: <a href=\"{ESTIMATE_URL}\" target=\"_blank\">Request a Free Estimate</a> or tell me a few details about your project right here in chat."
        ),
    }
}

fn timeline(service: Option<ServiceKind>) -> String {
    let text = match service {
        Some(ServiceKind::Bathroom) => "Most bathroom remodels take about 2-3 weeks once work begins, depending on tile complexity and any layout changes. We'll give you a detailed schedule with your estimate.",
        Some(ServiceKind::Kitchen) => "Typical kitchen projects run about 3-5 weeks after materials are ready, depending on scope and any wall or layout changes. We work to keep you informed at every stage.",
        Some(ServiceKind::Flooring) => "Many single-room flooring projects can be completed in 1-3 days. Whole-home flooring takes longer depending on square footage and prep work. We'll map out exact timing with your quote.",
        Some(ServiceKind::General) | None => "Project timelines vary by scope, but we always provide a clear schedule with your estimate. Bathroom projects are often 2-3 weeks, larger kitchens 3-5 weeks, and many flooring jobs just a few days.",
    };
    text.to_string()
}
