//! Interactive message board session
//!
//! Reads one line at a time. Plain text is posted as a message (admins only),
//! slash commands switch the shown list or end the session. Every accepted
//! line re-renders the board.

use std::io::Write;

use anyhow::{Context, Result};
use placement_core::{BoardFilter, Clock, FeedRenderer, ImportanceClassifier, MessageBoard};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info};

/// One line of session input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Post(String),
    Show(BoardFilter),
    Quit,
    Blank,
    Unknown(String),
}

pub fn parse_input(line: &str) -> Input {
    let line = line.trim();
    if line.is_empty() {
        return Input::Blank;
    }

    match line {
        "/quit" | "/exit" => Input::Quit,
        "/all" => Input::Show(BoardFilter::All),
        "/important" => Input::Show(BoardFilter::Important),
        cmd if cmd.starts_with('/') => Input::Unknown(cmd.to_string()),
        text => Input::Post(text.to_string()),
    }
}

/// Run the board until `/quit` or end of input
pub async fn run_board<R, W, C>(
    input: R,
    out: &mut W,
    renderer: FeedRenderer,
    classifier: ImportanceClassifier,
    clock: &C,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
    C: Clock,
{
    let mut board = MessageBoard::new(classifier);
    let mut filter = BoardFilter::All;

    write!(out, "{}", renderer.render_board(&board, filter))?;
    out.flush()?;

    if !renderer.capability().can_compose() {
        return Ok(());
    }

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await.context("Failed to read input")? {
        match parse_input(&line) {
            Input::Quit => break,
            Input::Blank => continue,
            Input::Show(next) => filter = next,
            Input::Unknown(cmd) => {
                writeln!(out, "Unknown command: {}", cmd)?;
                continue;
            }
            Input::Post(text) => match board.compose(&text, clock.now()) {
                Ok(message) => {
                    debug!(id = %message.id, important = message.important, "Message posted");
                }
                Err(e) => {
                    writeln!(out, "{}", e)?;
                    continue;
                }
            },
        }

        write!(out, "\n{}", renderer.render_board(&board, filter))?;
        out.flush()?;
    }

    info!(
        messages = board.len(),
        important = board.important_count(),
        "Board session ended"
    );
    Ok(())
}
