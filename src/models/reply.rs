use serde::{Deserialize, Serialize};

/// A clickable shortcut. Activating it submits `message` exactly as if the
/// visitor had typed it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuickReply {
    pub label: String,
    pub message: String,
}

impl QuickReply {
    pub fn new(label: &str, message: &str) -> Self {
        Self {
            label: label.to_string(),
            message: message.to_string(),
        }
    }

    /// Shortcut whose label is the text it sends.
    pub fn literal(message: &str) -> Self {
        Self::new(message, message)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Reply {
    pub text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub quick_replies: Vec<QuickReply>,
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            quick_replies: Vec::new(),
        }
    }

    pub fn with_choices(text: impl Into<String>, choices: &[&str]) -> Self {
        Self {
            text: text.into(),
            quick_replies: choices.iter().map(|c| QuickReply::literal(c)).collect(),
        }
    }

    pub fn with_quick_replies(mut self, quick_replies: Vec<QuickReply>) -> Self {
        self.quick_replies = quick_replies;
        self
    }

    /// Render for the chat transcript. Text is already markup; quick replies
    /// become buttons carrying their message in `data-msg`.
    pub fn to_markup(&self) -> String {
        if self.quick_replies.is_empty() {
            return self.text.clone();
        }

        let mut html = self.text.clone();
        html.push_str("<div class=\"chat-quick-replies\">");
        for qr in &self.quick_replies {
            html.push_str(&format!(
                "<button type=\"button\" class=\"chat-quick-reply\" data-msg=\"{}\">{}</button>",
                escape_html(&qr.message),
                escape_html(&qr.label),
            ));
        }
        html.push_str("</div>");
        html
    }
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
