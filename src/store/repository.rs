//! Document repository for load-mutate-save operations.
//!
//! Every mutation reads the whole document, changes it in memory and overwrites
//! the file. There is no locking: concurrent writers race and the last one wins.

use std::num::NonZeroU32;
use std::path::PathBuf;

use chrono::Utc;
use serde::{de::DeserializeOwned, Serialize};

use crate::errors::AppError;
use crate::models::{Rule, SipData};

/// File holding the player → drinks document.
pub const SIP_DATA_FILE: &str = "beer_sip_data.json";
/// File holding the ordered rule list.
pub const RULES_FILE: &str = "rules.json";
/// File holding the last refresh timestamp as plain text.
pub const LAST_REFRESH_FILE: &str = "last_refresh.txt";

/// Smallest step the refresh marker advances by when the clock has not moved.
const MARKER_EPSILON: f64 = 1e-6;

/// Repository over the documents in a single data directory.
#[derive(Debug, Clone)]
pub struct Repository {
    data_dir: PathBuf,
}

impl Repository {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    fn path(&self, file: &str) -> PathBuf {
        self.data_dir.join(file)
    }

    /// Load a JSON document, treating a missing file as the empty document.
    async fn load<T>(&self, file: &str) -> Result<T, AppError>
    where
        T: DeserializeOwned + Default,
    {
        match tokio::fs::read(self.path(file)).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(T::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Overwrite a JSON document.
    async fn save<T: Serialize>(&self, file: &str, value: &T) -> Result<(), AppError> {
        let bytes = serde_json::to_vec(value)?;
        tokio::fs::write(self.path(file), bytes).await?;
        Ok(())
    }

    // ==================== PLAYER OPERATIONS ====================

    /// Get the full player → drinks document.
    pub async fn get_sip_data(&self) -> Result<SipData, AppError> {
        self.load(SIP_DATA_FILE).await
    }

    /// Append a drink increment for a player, creating the entry on first use.
    pub async fn add_sip(&self, username: &str, count: NonZeroU32) -> Result<(), AppError> {
        let mut data = self.get_sip_data().await?;
        data.entry(username.to_string())
            .or_default()
            .sips
            .push(count.get());
        self.save(SIP_DATA_FILE, &data).await?;

        tracing::debug!(username, count = count.get(), "recorded sips");
        Ok(())
    }

    // ==================== RULE OPERATIONS ====================

    /// Get the ordered rule list.
    pub async fn get_rules(&self) -> Result<Vec<Rule>, AppError> {
        self.load(RULES_FILE).await
    }

    /// Append a rule at the end of the list.
    pub async fn add_rule(&self, text: &str, cost: NonZeroU32) -> Result<(), AppError> {
        let mut rules = self.get_rules().await?;
        rules.push(Rule::new(text, cost.get()));
        self.save(RULES_FILE, &rules).await?;

        tracing::debug!(rule = text, cost = cost.get(), "added rule");
        Ok(())
    }

    /// Remove the rule at `index`, shifting later rules down by one.
    ///
    /// The list is left untouched when the index is out of range.
    pub async fn delete_rule(&self, index: i64) -> Result<Rule, AppError> {
        let mut rules = self.get_rules().await?;
        let position = usize::try_from(index)
            .ok()
            .filter(|&i| i < rules.len())
            .ok_or(AppError::InvalidIndex(index))?;

        let removed = rules.remove(position);
        self.save(RULES_FILE, &rules).await?;

        tracing::debug!(index, rule = removed.text(), "deleted rule");
        Ok(removed)
    }

    // ==================== REFRESH MARKER ====================

    /// Get the last refresh timestamp, or 0 when none was ever written.
    pub async fn get_last_refresh(&self) -> Result<f64, AppError> {
        match tokio::fs::read_to_string(self.path(LAST_REFRESH_FILE)).await {
            Ok(text) => text.trim().parse::<f64>().map_err(|e| {
                AppError::CorruptDocument(format!("Invalid refresh marker {:?}: {}", text, e))
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(0.0),
            Err(e) => Err(e.into()),
        }
    }

    /// Stamp the refresh marker with the current time and return it.
    ///
    /// The marker never goes backwards: if the clock reads at or before the
    /// stored value, the stored value is nudged forward instead.
    pub async fn refresh(&self) -> Result<f64, AppError> {
        let previous = self.get_last_refresh().await?;
        let now = Utc::now().timestamp_micros() as f64 / 1_000_000.0;
        let timestamp = if now > previous {
            now
        } else {
            // Past ~1e10 the epsilon is below f64 resolution; step one ulp instead.
            (previous + MARKER_EPSILON).max(f64::from_bits(previous.to_bits() + 1))
        };

        tokio::fs::write(self.path(LAST_REFRESH_FILE), timestamp.to_string()).await?;
        Ok(timestamp)
    }

    // ==================== RESET ====================

    /// Clear both documents, then advance the refresh marker.
    pub async fn reset(&self) -> Result<f64, AppError> {
        self.save(SIP_DATA_FILE, &SipData::new()).await?;
        self.save(RULES_FILE, &Vec::<Rule>::new()).await?;
        let timestamp = self.refresh().await?;

        tracing::info!(timestamp, "reset all scoreboard data");
        Ok(timestamp)
    }
}
