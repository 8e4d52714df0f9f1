use serde::{Deserialize, Serialize};

/// User-tunable settings, persisted across runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPreferences {
    pub voice: String,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            voice: "Direto, analítico, técnico".to_string(),
        }
    }
}

/// One self-contained idea extracted from the source content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Concept {
    pub concept: String,
    pub explanation: String,
}

/// The generated artifacts for a single concept.
///
/// Field names match the JSON schema sent to the model, so the model
/// response deserializes directly into this struct.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPosts {
    pub linkedin_post: String,
    pub twitter_thread: Vec<String>,
}

impl GeneratedPosts {
    /// Thread as a single copyable string, one blank line between tweets.
    pub fn thread_text(&self) -> String {
        self.twitter_thread.join("\n\n")
    }
}

/// A concept paired with its generated posts; the unit rendered per card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultData {
    #[serde(flatten)]
    pub concept: Concept,
    pub posts: GeneratedPosts,
}

/// Complete persisted run for re-rendering and clipboard access.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LastRun {
    pub version: String,
    pub created_at: String,
    pub voice: String,
    pub results: Vec<ResultData>,
}

impl LastRun {
    pub fn new(voice: impl Into<String>, results: Vec<ResultData>) -> Self {
        Self {
            version: "1.0".to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            voice: voice.into(),
            results,
        }
    }

    pub fn empty() -> Self {
        Self {
            version: "1.0".to_string(),
            created_at: String::new(),
            voice: String::new(),
            results: Vec::new(),
        }
    }
}
