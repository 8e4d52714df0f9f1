use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use shared::{
    Amplifier, Config, CreatorConstitution, GeminiClient, LastRun, PreferenceStore,
    UserPreferences, CONSTITUTION_KEY, LAST_RUN_KEY, PREFS_KEY,
};
use std::io::Read as _;
use std::path::PathBuf;

mod clipboard;
mod render;

#[derive(Parser)]
#[command(name = "echomind")]
#[command(about = "Transform one idea into a content campaign: paste your content, define your voice, amplify your message")]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Extract key concepts from content and generate posts for each
    Amplify {
        /// Read content from this file instead of stdin
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Voice for this run (persisted as the new preference)
        #[arg(short, long)]
        voice: Option<String>,
    },
    /// Render the last completed run
    Show,
    /// Copy a post from the last run to the clipboard
    Copy {
        /// Card number as shown by `show` (1-based)
        index: usize,

        /// Copy the tweet thread instead of the LinkedIn post
        #[arg(long)]
        thread: bool,
    },
    /// Print or update the persisted voice preference
    Voice {
        /// New voice, e.g. "Direto, analítico, técnico"
        value: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let store = PreferenceStore::open()?;

    match args.command.unwrap_or(Command::Amplify {
        file: None,
        voice: None,
    }) {
        Command::Amplify { file, voice } => amplify(&store, file, voice).await,
        Command::Show => show(&store),
        Command::Copy { index, thread } => copy(&store, index, thread),
        Command::Voice { value } => voice_preference(&store, value),
    }
}

async fn amplify(
    store: &PreferenceStore,
    file: Option<PathBuf>,
    voice_flag: Option<String>,
) -> Result<()> {
    let config = Config::from_env()?;

    let content = read_content(file)?;

    let mut prefs: UserPreferences = store.get(PREFS_KEY, UserPreferences::default());
    if let Some(voice) = voice_flag {
        prefs.voice = voice;
        store.set(PREFS_KEY, &prefs)?;
    }

    let constitution: CreatorConstitution =
        store.get(CONSTITUTION_KEY, CreatorConstitution::builtin());

    begin_run(store, &content, &prefs.voice)?;

    let gemini = GeminiClient::new(config.gemini_api_key)?;
    let amplifier = Amplifier::new(gemini, constitution);

    let results = amplifier.run(&content, &prefs.voice).await?;

    let run = LastRun::new(prefs.voice.clone(), results);
    store.set(LAST_RUN_KEY, &run)?;

    println!("✅ Generated posts for {} concepts", run.results.len());
    render::print_results(&run.results);

    Ok(())
}

/// Start a run: a rejected submission must leave the persisted last run
/// untouched, so the previous results are cleared only after validation
/// passes (and before the new ones resolve, so runs never mix).
fn begin_run(store: &PreferenceStore, content: &str, voice: &str) -> Result<()> {
    shared::pipeline::validate_submission(content, voice)?;
    store.set(LAST_RUN_KEY, &LastRun::empty())?;
    Ok(())
}

fn read_content(file: Option<PathBuf>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read content file: {}", path.display())),
        None => {
            println!("Paste your article or transcript, then press Ctrl-D:\n");
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read content from stdin")?;
            Ok(content)
        }
    }
}

fn show(store: &PreferenceStore) -> Result<()> {
    let run: LastRun = store.get(LAST_RUN_KEY, LastRun::empty());

    if run.results.is_empty() {
        println!("No results yet. Run `echomind amplify` first.");
        return Ok(());
    }

    render::print_last_run(&run);
    Ok(())
}

fn copy(store: &PreferenceStore, index: usize, thread: bool) -> Result<()> {
    let run: LastRun = store.get(LAST_RUN_KEY, LastRun::empty());

    if index == 0 || index > run.results.len() {
        anyhow::bail!(
            "No result #{} in the last run ({} available)",
            index,
            run.results.len()
        );
    }

    let result = &run.results[index - 1];
    let (text, what) = if thread {
        (result.posts.thread_text(), "tweet thread")
    } else {
        (result.posts.linkedin_post.clone(), "LinkedIn post")
    };

    match clipboard::copy_to_clipboard(&text) {
        Ok(()) => println!("✓ Copied {} for \"{}\"", what, result.concept.concept),
        // Clipboard trouble is logged, never fatal
        Err(e) => eprintln!("Failed to copy text: {}", e),
    }

    Ok(())
}

fn voice_preference(store: &PreferenceStore, value: Option<String>) -> Result<()> {
    let mut prefs: UserPreferences = store.get(PREFS_KEY, UserPreferences::default());

    match value {
        Some(voice) => {
            prefs.voice = voice;
            store.set(PREFS_KEY, &prefs)?;
            println!("✓ Voice set to: {}", prefs.voice);
        }
        None => println!("{}", prefs.voice),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{Concept, GeneratedPosts, ResultData};
    use std::sync::atomic::{AtomicU32, Ordering};

    static DIR_SEQ: AtomicU32 = AtomicU32::new(0);

    fn test_store() -> PreferenceStore {
        let dir = std::env::temp_dir().join(format!(
            "echomind-run-test-{}-{}",
            std::process::id(),
            DIR_SEQ.fetch_add(1, Ordering::SeqCst)
        ));
        PreferenceStore::at(dir).unwrap()
    }

    fn seeded_run() -> LastRun {
        LastRun::new(
            "Direto",
            vec![ResultData {
                concept: Concept {
                    concept: "Atrito".to_string(),
                    explanation: "Onde o sistema perde energia.".to_string(),
                },
                posts: GeneratedPosts {
                    linkedin_post: "post".to_string(),
                    twitter_thread: vec!["tweet".to_string()],
                },
            }],
        )
    }

    #[test]
    fn test_rejected_submission_keeps_previous_run() {
        let store = test_store();
        store.set(LAST_RUN_KEY, &seeded_run()).unwrap();

        let err = begin_run(&store, "   ", "Direto").unwrap_err();
        assert!(err.to_string().contains("fill in all fields"));

        let run: LastRun = store.get(LAST_RUN_KEY, LastRun::empty());
        assert_eq!(run.results.len(), 1);
        assert_eq!(run.results[0].concept.concept, "Atrito");
    }

    #[test]
    fn test_rejected_empty_voice_keeps_previous_run() {
        let store = test_store();
        store.set(LAST_RUN_KEY, &seeded_run()).unwrap();

        assert!(begin_run(&store, "conteúdo", "").is_err());

        let run: LastRun = store.get(LAST_RUN_KEY, LastRun::empty());
        assert_eq!(run.results.len(), 1);
    }

    #[test]
    fn test_accepted_submission_clears_previous_run() {
        let store = test_store();
        store.set(LAST_RUN_KEY, &seeded_run()).unwrap();

        begin_run(&store, "conteúdo longo", "Direto").unwrap();

        let run: LastRun = store.get(LAST_RUN_KEY, LastRun::empty());
        assert!(run.results.is_empty());
    }
}
