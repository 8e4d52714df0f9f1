use anyhow::{Context, Result};
use serde_json::{json, Value};

use crate::gemini::GeminiClient;
use crate::models::Concept;

const EXTRACTION_TEMPERATURE: f32 = 0.5;

/// Response schema for extraction: an array of concept/explanation pairs.
pub fn concept_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "concept": {
                    "type": "STRING",
                    "description": "A short, descriptive title for the concept, argument, or story."
                },
                "explanation": {
                    "type": "STRING",
                    "description": "A brief, self-contained explanation of the concept."
                }
            },
            "required": ["concept", "explanation"]
        }
    })
}

pub fn build_extraction_prompt(text: &str) -> String {
    format!(
        r#"Analyze the following text and extract the 5 to 7 most important, self-contained concepts, arguments, or stories. For each, provide a short, descriptive title for the concept and a brief explanation.

TEXT:
---
{}
---
"#,
        text
    )
}

/// Parse the model's JSON text into concepts. Anything that is not a JSON
/// array of the expected shape is an error, never a panic.
pub fn parse_concepts(json_text: &str) -> Result<Vec<Concept>> {
    serde_json::from_str(json_text).context("Model returned malformed concept JSON")
}

/// Extract the key concepts from `text`, in the order the model listed them.
///
/// The prompt asks for 5 to 7 concepts but the count is not enforced here;
/// callers must treat an empty list as their own failure condition.
pub async fn extract_concepts(gemini: &GeminiClient, text: &str) -> Result<Vec<Concept>> {
    let prompt = build_extraction_prompt(text);

    let json_text = gemini
        .generate_json(&prompt, concept_schema(), EXTRACTION_TEMPERATURE)
        .await
        .context("Failed to communicate with the AI to extract concepts")?;

    parse_concepts(&json_text)
}
