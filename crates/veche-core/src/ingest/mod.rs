//! Concurrent ingestion of textual network commands.
//!
//! Each source file gets its own worker. A worker parses its lines
//! sequentially and applies every command through the network's mutex,
//! one acquisition per command, so workers interleave at command
//! granularity only. The entry point joins every worker before it
//! returns: once [`ingest_files`] completes, no further mutation of the
//! network happens.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::Semaphore;

use crate::config::IngestConfig;
use crate::error::Result;
use crate::social::SocialNetwork;


/// One parsed ingestion command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `adduser <name>`: create a user with no friends.
    AddUser(String),
    /// `addfriends <a> <b>`: create a symmetric friendship.
    AddFriends(String, String),
}

/// Parses one line of an ingestion source.
///
/// Fields are whitespace-separated; tokens past the expected arity are
/// ignored. Unknown prefixes, missing fields and blank lines yield
/// `None` and are skipped by the workers.
#[must_use]
pub fn parse_line(line: &str) -> Option<Command> {
    let mut fields = line.split_whitespace();
    match fields.next()? {
        "adduser" => Some(Command::AddUser(fields.next()?.to_string())),
        "addfriends" => {
            let a = fields.next()?.to_string();
            let b = fields.next()?.to_string();
            Some(Command::AddFriends(a, b))
        }
        _ => None,
    }
}

/// Summary of one [`ingest_files`] run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IngestReport {
    /// Sources opened and read to completion.
    pub sources_read: usize,
    /// Sources that could not be opened or read.
    pub sources_failed: usize,
    /// Commands parsed and applied to the network.
    pub commands_applied: usize,
    /// Non-blank lines that did not parse as a command.
    pub commands_skipped: usize,
}

/// Outcome of one source worker.
enum SourceOutcome {
    Read { applied: usize, skipped: usize },
    Failed,
}

/// Reads every source concurrently and applies the parsed commands.
///
/// One blocking worker per source, with at most `config.max_workers` in
/// flight at a time. Unreadable sources are logged and skipped while
/// their siblings still load; malformed lines are skipped per line. All
/// workers are joined before this returns.
pub async fn ingest_files(
    network: Arc<SocialNetwork>,
    sources: Vec<PathBuf>,
    config: &IngestConfig,
) -> IngestReport {
    // A zero cap would stall every worker.
    let semaphore = Arc::new(Semaphore::new(config.max_workers.max(1)));
    let mut workers = Vec::with_capacity(sources.len());

    for path in sources {
        let network = Arc::clone(&network);
        let semaphore = Arc::clone(&semaphore);
        workers.push(tokio::spawn(async move {
            // The semaphore is never closed, so acquisition cannot fail.
            let _permit = semaphore.acquire_owned().await.ok();
            let outcome =
                tokio::task::spawn_blocking(move || match ingest_source(&network, &path) {
                    Ok((applied, skipped)) => SourceOutcome::Read { applied, skipped },
                    Err(error) => {
                        tracing::warn!(?path, %error, "skipping unreadable source");
                        SourceOutcome::Failed
                    }
                })
                .await;
            match outcome {
                Ok(outcome) => outcome,
                Err(error) => {
                    tracing::error!(%error, "ingestion worker panicked");
                    SourceOutcome::Failed
                }
            }
        }));
    }

    let mut report = IngestReport::default();
    for worker in workers {
        match worker.await {
            Ok(SourceOutcome::Read { applied, skipped }) => {
                report.sources_read += 1;
                report.commands_applied += applied;
                report.commands_skipped += skipped;
            }
            Ok(SourceOutcome::Failed) => report.sources_failed += 1,
            Err(error) => {
                tracing::error!(%error, "ingestion worker aborted");
                report.sources_failed += 1;
            }
        }
    }

    tracing::info!(
        sources_read = report.sources_read,
        sources_failed = report.sources_failed,
        commands_applied = report.commands_applied,
        commands_skipped = report.commands_skipped,
        "ingestion complete"
    );
    report
}

/// Reads one source sequentially, applying each command under one lock
/// acquisition at a time. Returns `(applied, skipped)` line counts.
fn ingest_source(network: &SocialNetwork, path: &Path) -> Result<(usize, usize)> {
    let file = File::open(path)?;
    let mut applied = 0;
    let mut skipped = 0;
    for line in BufReader::new(file).lines() {
        let line = line?;
        match parse_line(&line) {
            Some(command) => {
                network.apply(&command);
                applied += 1;
            }
            None => {
                if !line.trim().is_empty() {
                    tracing::debug!(?path, line, "skipping malformed line");
                    skipped += 1;
                }
            }
        }
    }
    Ok((applied, skipped))
}
