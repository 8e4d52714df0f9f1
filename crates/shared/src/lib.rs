// Public modules
pub mod config;
pub mod constitution;
pub mod extractor;
pub mod gemini;
pub mod generator;
pub mod models;
pub mod pipeline;
pub mod store;

// Re-export commonly used types
pub use config::Config;
pub use constitution::{CreatorConstitution, GoalStatus, StrategicGoal};
pub use gemini::GeminiClient;
pub use models::{Concept, GeneratedPosts, LastRun, ResultData, UserPreferences};
pub use pipeline::{Amplifier, ContentEngine};
pub use store::{PreferenceStore, CONSTITUTION_KEY, LAST_RUN_KEY, PREFS_KEY};
