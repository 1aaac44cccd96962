use std::sync::Arc;

use crate::application::services::{AnalysisService, ChatService};
use crate::presentation::config::Settings;

#[derive(Clone)]
pub struct AppState {
    pub analysis_service: Arc<AnalysisService>,
    pub chat_service: Arc<ChatService>,
    pub settings: Settings,
}
