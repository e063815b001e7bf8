//! Persistent high-score list stored as `name,score` lines.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;

/// One leaderboard line.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreEntry {
    /// Player name.
    pub name: String,
    /// Final score.
    pub score: f64,
}

/// Append-only score file.
#[derive(Debug, Clone)]
pub struct Leaderboard {
    path: PathBuf,
}

impl Leaderboard {
    /// Wraps the score file at `path`; nothing is read until asked.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Appends `name,score` with the score to two decimals, creating the file
    /// if needed.
    pub fn record(&self, name: &str, score: f64) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{},{:.2}", name.replace(',', " "), score)?;
        tracing::info!(name, score, "score recorded");
        Ok(())
    }

    /// Highest `n` scores, best first.
    ///
    /// A missing file is an empty leaderboard. Malformed lines are skipped.
    pub fn top_scores(&self, n: usize) -> io::Result<Vec<ScoreEntry>> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err),
        };

        let mut entries: Vec<ScoreEntry> = text.lines().filter_map(parse_line).collect();
        entries.sort_by(|a, b| b.score.total_cmp(&a.score));
        entries.truncate(n);
        Ok(entries)
    }
}

fn parse_line(line: &str) -> Option<ScoreEntry> {
    let (name, score) = line.trim().rsplit_once(',')?;
    let score: f64 = score.trim().parse().ok()?;
    if name.is_empty() || !score.is_finite() {
        tracing::warn!(line, "skipping malformed leaderboard line");
        return None;
    }
    Some(ScoreEntry {
        name: name.to_string(),
        score,
    })
}
