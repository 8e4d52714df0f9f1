use anyhow::Result;
use std::io::Write;
use std::process::{Command, Stdio};

/// Candidate clipboard writers, tried in order. macOS first, then the
/// Wayland and X11 tools.
const WRITERS: &[(&str, &[&str])] = &[
    ("pbcopy", &[]),
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

/// Place `text` on the system clipboard via the first available platform
/// tool. Callers treat failure as non-fatal and only log it.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut last_err = None;

    for (program, args) in WRITERS {
        match try_writer(program, args, text) {
            Ok(()) => return Ok(()),
            Err(e) => last_err = Some(e),
        }
    }

    Err(last_err.unwrap_or_else(|| anyhow::anyhow!("No clipboard tool available")))
}

fn try_writer(program: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    if let Some(mut stdin) = child.stdin.take() {
        write!(stdin, "{text}")?;
    }

    let status = child.wait()?;
    if !status.success() {
        anyhow::bail!("{} exited with {}", program, status);
    }

    Ok(())
}
