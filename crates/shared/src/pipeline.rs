use anyhow::Result;
use async_trait::async_trait;
use futures::future::try_join_all;
use std::io::Write;

use crate::constitution::CreatorConstitution;
use crate::gemini::GeminiClient;
use crate::models::{Concept, GeneratedPosts, ResultData};
use crate::{extractor, generator};

/// The two model operations the pipeline depends on. Implemented by
/// [`GeminiClient`] for real runs and by a mock in tests.
#[async_trait]
pub trait ContentEngine: Sync {
    async fn extract_concepts(&self, content: &str) -> Result<Vec<Concept>>;

    async fn generate_posts(
        &self,
        concept: &Concept,
        constitution: &CreatorConstitution,
        voice: &str,
    ) -> Result<GeneratedPosts>;
}

#[async_trait]
impl ContentEngine for GeminiClient {
    async fn extract_concepts(&self, content: &str) -> Result<Vec<Concept>> {
        extractor::extract_concepts(self, content).await
    }

    async fn generate_posts(
        &self,
        concept: &Concept,
        constitution: &CreatorConstitution,
        voice: &str,
    ) -> Result<GeneratedPosts> {
        generator::generate_posts(self, concept, constitution, voice).await
    }
}

/// Reject a submission unless both trimmed inputs are non-empty. Callers
/// must not touch the network or persisted state before this passes.
pub fn validate_submission(content: &str, voice: &str) -> Result<()> {
    if content.trim().is_empty() || voice.trim().is_empty() {
        anyhow::bail!("Please fill in all fields: content and voice.");
    }
    Ok(())
}

/// Runs the amplification pipeline: validate input, extract concepts,
/// generate posts for every concept concurrently, merge in extraction order.
pub struct Amplifier<E> {
    engine: E,
    constitution: CreatorConstitution,
}

impl<E: ContentEngine> Amplifier<E> {
    pub fn new(engine: E, constitution: CreatorConstitution) -> Self {
        Self {
            engine,
            constitution,
        }
    }

    /// Run the full pipeline for one submission.
    ///
    /// The generation fan-out is all-or-nothing: the first failed call fails
    /// the whole run and already-settled sibling results are discarded.
    /// Progress lines are cosmetic.
    pub async fn run(&self, content: &str, voice: &str) -> Result<Vec<ResultData>> {
        validate_submission(content, voice)?;

        println!("🧠 EchoMind is thinking... Analyzing key concepts...");
        let concepts = self.engine.extract_concepts(content).await?;

        if concepts.is_empty() {
            anyhow::bail!(
                "Could not extract any concepts from the text. Please try refining your input."
            );
        }

        println!("✓ Found {} concepts. Tuning your voice...", concepts.len());

        let generations = concepts.iter().map(|concept| async move {
            let posts = self
                .engine
                .generate_posts(concept, &self.constitution, voice)
                .await?;
            // Progress dot per finished generation
            eprint!(".");
            let _ = std::io::stderr().flush();
            Ok::<_, anyhow::Error>(ResultData {
                concept: concept.clone(),
                posts,
            })
        });

        let results = try_join_all(generations).await?;
        eprintln!();

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct MockEngine {
        concepts: Vec<Concept>,
        fail_extraction: bool,
        fail_generation_for: Option<String>,
        extract_calls: AtomicUsize,
        generate_calls: AtomicUsize,
    }

    impl MockEngine {
        fn with_concepts(titles: &[&str]) -> Self {
            let concepts = titles
                .iter()
                .map(|t| Concept {
                    concept: t.to_string(),
                    explanation: format!("explanation of {}", t),
                })
                .collect();
            Self {
                concepts,
                fail_extraction: false,
                fail_generation_for: None,
                extract_calls: AtomicUsize::new(0),
                generate_calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl ContentEngine for MockEngine {
        async fn extract_concepts(&self, _content: &str) -> Result<Vec<Concept>> {
            self.extract_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_extraction {
                anyhow::bail!("Failed to communicate with the AI to extract concepts");
            }
            Ok(self.concepts.clone())
        }

        async fn generate_posts(
            &self,
            concept: &Concept,
            _constitution: &CreatorConstitution,
            voice: &str,
        ) -> Result<GeneratedPosts> {
            self.generate_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_generation_for.as_deref() == Some(concept.concept.as_str()) {
                anyhow::bail!(
                    "Failed to generate posts for concept: \"{}\"",
                    concept.concept
                );
            }
            Ok(GeneratedPosts {
                linkedin_post: format!("post for {} in voice {}", concept.concept, voice),
                twitter_thread: vec![format!("tweet about {}", concept.concept)],
            })
        }
    }

    fn amplifier(engine: MockEngine) -> Amplifier<MockEngine> {
        Amplifier::new(engine, CreatorConstitution::builtin())
    }

    #[tokio::test]
    async fn test_successful_run_preserves_extraction_order() {
        let amp = amplifier(MockEngine::with_concepts(&["Atrito", "Vetor", "Alavancagem"]));

        let results = amp.run("conteúdo longo", "Direto").await.unwrap();

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].concept.concept, "Atrito");
        assert_eq!(results[1].concept.concept, "Vetor");
        assert_eq!(results[2].concept.concept, "Alavancagem");
        assert!(results[0].posts.linkedin_post.contains("Atrito"));
    }

    #[tokio::test]
    async fn test_empty_content_makes_no_engine_call() {
        let amp = amplifier(MockEngine::with_concepts(&["Atrito"]));

        let err = amp.run("   ", "Direto").await.unwrap_err();

        assert!(err.to_string().contains("fill in all fields"));
        assert_eq!(amp.engine.extract_calls.load(Ordering::SeqCst), 0);
        assert_eq!(amp.engine.generate_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_empty_voice_makes_no_engine_call() {
        let amp = amplifier(MockEngine::with_concepts(&["Atrito"]));

        let err = amp.run("conteúdo", "\t\n").await.unwrap_err();

        assert!(err.to_string().contains("fill in all fields"));
        assert_eq!(amp.engine.extract_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_zero_concepts_is_an_error_before_generation() {
        let amp = amplifier(MockEngine::with_concepts(&[]));

        let err = amp.run("conteúdo", "Direto").await.unwrap_err();

        assert!(err.to_string().contains("Could not extract any concepts"));
        assert_eq!(amp.engine.generate_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_extraction_failure_aborts_run() {
        let mut engine = MockEngine::with_concepts(&["Atrito"]);
        engine.fail_extraction = true;
        let amp = amplifier(engine);

        let err = amp.run("conteúdo", "Direto").await.unwrap_err();

        assert!(err.to_string().contains("extract concepts"));
        assert_eq!(amp.engine.generate_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_single_generation_failure_fails_whole_run() {
        let mut engine = MockEngine::with_concepts(&["Atrito", "Vetor", "Alavancagem"]);
        engine.fail_generation_for = Some("Vetor".to_string());
        let amp = amplifier(engine);

        let err = amp.run("conteúdo", "Direto").await.unwrap_err();

        assert!(err.to_string().contains("\"Vetor\""));
    }
}
