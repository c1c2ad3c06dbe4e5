//! Client for the remote analysis service.

use std::time::Duration;

use log::warn;
use serde::Deserialize;

/// Best-move value the analysis service sends when there is nothing to
/// play; a failed request reports the same sentinel.
pub const NO_MOVE: &str = "-";

/// Score shown when a request fails.
const SCORE_ERROR: &str = "Error";

/// Progress of the analysis attached to the current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisStatus {
    /// No request has been made for this session yet
    Idle,
    /// A request is in flight
    Pending,
    /// The service answered for the current position
    Ready,
    /// The request failed; sentinel values are shown
    Failed,
}

/// Engine output as displayed beside the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisState {
    pub best_move: Option<String>,
    pub score: Option<String>,
    pub status: AnalysisStatus,
}

impl AnalysisState {
    pub fn idle() -> Self {
        AnalysisState {
            best_move: None,
            score: None,
            status: AnalysisStatus::Idle,
        }
    }

    pub fn ready(best_move: Option<String>, score: Option<String>) -> Self {
        AnalysisState {
            best_move,
            score,
            status: AnalysisStatus::Ready,
        }
    }

    /// The state every failure collapses into: `"-"` / `"Error"`.
    pub fn failed() -> Self {
        AnalysisState {
            best_move: Some(NO_MOVE.to_string()),
            score: Some(SCORE_ERROR.to_string()),
            status: AnalysisStatus::Failed,
        }
    }

    /// Mark a new request as in flight. The previously displayed values
    /// stay visible until the fresh result arrives.
    pub fn into_pending(self) -> Self {
        AnalysisState {
            status: AnalysisStatus::Pending,
            ..self
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == AnalysisStatus::Pending
    }

    pub fn is_failed(&self) -> bool {
        self.status == AnalysisStatus::Failed
    }
}

/// Response body of the service's /analyze endpoint.
#[derive(Debug, Clone, Deserialize)]
struct AnalyzeResponse {
    best_move: Option<String>,
    score: Option<String>,
    #[serde(default)]
    error: bool,
}

/// Issues analysis requests over HTTP. Cheap to clone; clones share the
/// underlying connection pool.
#[derive(Debug, Clone)]
pub struct AnalysisClient {
    http: reqwest::Client,
    base_url: String,
}

impl AnalysisClient {
    /// Build a client for the service at `base_url`, with a hard per-request
    /// timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(AnalysisClient {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Ask the service for the best move and evaluation of `fen`.
    ///
    /// Never returns an error: an unreachable service, a timeout, a non-2xx
    /// status, an unparseable body, and an error reported by the service
    /// itself all collapse into `AnalysisState::failed()`.
    pub async fn request_analysis(&self, fen: &str) -> AnalysisState {
        match self.fetch(fen).await {
            Ok(resp) if !resp.error => AnalysisState::ready(resp.best_move, resp.score),
            Ok(_) => {
                warn!("Analysis service reported an error for position {}", fen);
                AnalysisState::failed()
            }
            Err(e) => {
                warn!("Analysis request failed: {}", e);
                AnalysisState::failed()
            }
        }
    }

    async fn fetch(&self, fen: &str) -> Result<AnalyzeResponse, reqwest::Error> {
        self.http
            .get(format!("{}/analyze", self.base_url))
            .query(&[("fen", fen)])
            .send()
            .await?
            .error_for_status()?
            .json::<AnalyzeResponse>()
            .await
    }
}
