use std::sync::Mutex;

use crate::config::AppConfig;
use crate::services::forms::FormSubmitter;
use crate::services::sessions::SessionStore;

pub struct AppState {
    pub config: AppConfig,
    pub sessions: Mutex<SessionStore>,
    pub submitter: Box<dyn FormSubmitter>,
}
