use std::collections::HashMap;

use chrono::{Duration, NaiveDateTime, Utc};

use crate::models::{Reply, SenderRole, TranscriptEntry};
use crate::services::dialogue::{responses, DialogueSession};

/// One open chat: the dialogue state plus everything shown in the transcript.
#[derive(Debug, Clone)]
pub struct ChatSession {
    pub id: String,
    pub dialogue: DialogueSession,
    pub transcript: Vec<TranscriptEntry>,
    pub last_activity: NaiveDateTime,
    pub expires_at: NaiveDateTime,
}

impl ChatSession {
    pub fn new(id: String, ttl: Duration) -> Self {
        let now = Utc::now().naive_utc();
        let mut session = Self {
            id,
            dialogue: DialogueSession::new(),
            transcript: Vec::new(),
            last_activity: now,
            expires_at: now + ttl,
        };
        session.push(SenderRole::Bot, responses::welcome().to_markup());
        session
    }

    /// Trim the raw input and run it through the dialogue. Blank input is
    /// ignored and leaves the transcript untouched.
    pub fn handle_user_message(&mut self, raw: &str, ttl: Duration) -> Option<Reply> {
        let message = raw.trim();
        if message.is_empty() {
            return None;
        }

        self.push(SenderRole::User, message.to_string());
        let reply = self.dialogue.respond(message);
        self.push(SenderRole::Bot, reply.to_markup());

        let now = Utc::now().naive_utc();
        self.last_activity = now;
        self.expires_at = now + ttl;

        Some(reply)
    }

    /// Start over with a fresh dialogue and transcript.
    pub fn reset(&mut self) {
        self.dialogue.reset();
        self.transcript.clear();
        self.push(SenderRole::Bot, responses::welcome().to_markup());
    }

    fn push(&mut self, role: SenderRole, content: String) {
        self.transcript.push(TranscriptEntry {
            role,
            content,
            sent_at: Utc::now().naive_utc(),
        });
    }
}

pub struct SessionStore {
    sessions: HashMap<String, ChatSession>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: HashMap::new(),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Live session by id. Expired sessions are treated as gone even before
    /// they are purged.
    pub fn get(&self, id: &str) -> Option<&ChatSession> {
        let now = Utc::now().naive_utc();
        self.sessions.get(id).filter(|s| s.expires_at > now)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut ChatSession> {
        let now = Utc::now().naive_utc();
        self.sessions.get_mut(id).filter(|s| s.expires_at > now)
    }

    /// Look up a live session, or open a new one. Unknown or expired ids get
    /// a freshly generated id.
    pub fn get_or_create(&mut self, id: Option<&str>) -> &mut ChatSession {
        self.purge_expired(Utc::now().naive_utc());

        let ttl = self.ttl;
        let id = match id {
            Some(id) if self.sessions.contains_key(id) => id.to_string(),
            _ => {
                let id = uuid::Uuid::new_v4().to_string();
                tracing::debug!(session = %id, "opening chat session");
                id
            }
        };

        self.sessions
            .entry(id.clone())
            .or_insert_with(|| ChatSession::new(id, ttl))
    }

    pub fn purge_expired(&mut self, now: NaiveDateTime) -> usize {
        let before = self.sessions.len();
        self.sessions.retain(|_, s| s.expires_at > now);
        let purged = before - self.sessions.len();
        if purged > 0 {
            tracing::info!(purged, "expired chat sessions removed");
        }
        purged
    }
}
