//! Score log persistence.
//!
//! Finished games append a [`ScoreRecord`] to a JSON file. The file is a
//! plain array so it stays hand-inspectable; a missing or corrupt file is
//! treated as an empty log rather than an error, so a damaged score file
//! can never block starting a game.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rand::{thread_rng, Rng};
use serde::{Deserialize, Serialize};

/// One finished game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    /// Random hex id, unique enough for list keys and deletion.
    pub id: String,
    pub player_name: String,
    pub score: u32,
    pub grid_size: usize,
    pub max_strikes: u8,
    /// Unix epoch milliseconds when the game finished.
    pub timestamp_ms: u64,
    /// Active play time, paused spans excluded.
    pub duration_ms: u64,
}

impl ScoreRecord {
    /// Fresh record with a random id.
    pub fn new(
        player_name: impl Into<String>,
        score: u32,
        grid_size: usize,
        max_strikes: u8,
        timestamp_ms: u64,
        duration_ms: u64,
    ) -> Self {
        Self {
            id: random_id(),
            player_name: player_name.into(),
            score,
            grid_size,
            max_strikes,
            timestamp_ms,
            duration_ms,
        }
    }
}

fn random_id() -> String {
    format!("{:016x}", thread_rng().gen::<u64>())
}

/// File-backed score log.
pub struct ScoreLog {
    path: PathBuf,
    records: Vec<ScoreRecord>,
}

impl ScoreLog {
    /// Load the log at `path`. Missing file or undecodable contents both
    /// yield an empty log; only genuine I/O failures (permissions) error.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let records = match fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text).unwrap_or_default(),
            Err(err) if err.kind() == ErrorKind::NotFound => Vec::new(),
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("reading score log {}", path.display()))
            }
        };
        Ok(Self { path, records })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Records in insertion order, oldest first.
    pub fn records(&self) -> &[ScoreRecord] {
        &self.records
    }

    /// Records sorted best-first by score, ties broken by shorter duration.
    pub fn ranked(&self) -> Vec<&ScoreRecord> {
        let mut ranked: Vec<&ScoreRecord> = self.records.iter().collect();
        ranked.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then(a.duration_ms.cmp(&b.duration_ms))
        });
        ranked
    }

    /// Append a record and rewrite the file.
    pub fn append(&mut self, record: ScoreRecord) -> Result<()> {
        self.records.push(record);
        self.save()
    }

    /// Remove a record by id. Returns whether anything was removed; the
    /// file is only rewritten on a hit.
    pub fn remove(&mut self, id: &str) -> Result<bool> {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        if self.records.len() == before {
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }

    /// Drop every record and truncate the file.
    pub fn clear(&mut self) -> Result<()> {
        self.records.clear();
        self.save()
    }

    fn save(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)
                    .with_context(|| format!("creating score log dir {}", dir.display()))?;
            }
        }
        let text = serde_json::to_string_pretty(&self.records)?;
        fs::write(&self.path, text)
            .with_context(|| format!("writing score log {}", self.path.display()))
    }
}
