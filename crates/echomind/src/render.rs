use shared::{LastRun, ResultData};

const RULE: &str =
    "────────────────────────────────────────────────────────────────────────";

/// One result card: concept header, LinkedIn post, tweet thread.
pub fn format_card(index: usize, result: &ResultData) -> String {
    let mut card = String::new();

    card.push_str(RULE);
    card.push('\n');
    card.push_str(&format!("{}. {}\n", index, result.concept.concept));
    card.push_str(&format!("   {}\n", result.concept.explanation));

    card.push_str("\nLinkedIn\n\n");
    card.push_str(&result.posts.linkedin_post);
    card.push('\n');

    card.push_str("\nX/Twitter Thread\n");
    for (i, tweet) in result.posts.twitter_thread.iter().enumerate() {
        card.push_str(&format!("\n  {}/ {}\n", i + 1, tweet));
    }

    card
}

pub fn print_results(results: &[ResultData]) {
    println!("\n✨ Your Amplified Content\n");
    for (i, result) in results.iter().enumerate() {
        println!("{}", format_card(i + 1, result));
    }
    println!("{}", RULE);
    println!(
        "\nCopy a post with: echomind copy <number> [--thread]"
    );
}

pub fn print_last_run(run: &LastRun) {
    if !run.created_at.is_empty() {
        println!("Last run: {} (voice: {})", run.created_at, run.voice);
    }
    print_results(&run.results);
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{Concept, GeneratedPosts};

    fn sample_result() -> ResultData {
        ResultData {
            concept: Concept {
                concept: "Alavancagem".to_string(),
                explanation: "Pequenos esforços, grandes efeitos.".to_string(),
            },
            posts: GeneratedPosts {
                linkedin_post: "Um diagnóstico de especialista.".to_string(),
                twitter_thread: vec!["A bomba.".to_string(), "A lógica.".to_string()],
            },
        }
    }

    #[test]
    fn test_card_contains_all_sections() {
        let card = format_card(2, &sample_result());
        assert!(card.contains("2. Alavancagem"));
        assert!(card.contains("Pequenos esforços, grandes efeitos."));
        assert!(card.contains("Um diagnóstico de especialista."));
        assert!(card.contains("1/ A bomba."));
        assert!(card.contains("2/ A lógica."));
    }
}
