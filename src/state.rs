use std::sync::atomic::AtomicUsize;

use crate::analysis::AnalysisClient;

/// Application state shared between connections. Game state itself lives
/// inside each session actor; only the analysis client and the session
/// counter are shared.
pub struct AppState {
    pub analyzer: AnalysisClient,
    pub live_sessions: AtomicUsize,
}

impl AppState {
    pub fn new(analyzer: AnalysisClient) -> Self {
        AppState {
            analyzer,
            live_sessions: AtomicUsize::new(0),
        }
    }
}
