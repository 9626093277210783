//! File-based persistence for offline debate data.
//!
//! Transcripts and queued responses are stored as a single pretty-printed
//! JSON document in a data directory, so a student can review past
//! debates without a network connection and sync them later.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::fs;
use uuid::Uuid;

use crate::coach::DebatePosition;
use crate::session::{DebateMessage, DebateSession};

/// File name of the offline data document inside the data directory.
const DATA_FILE: &str = "offline-data.json";

/// Default data directory when none is configured.
pub const DEFAULT_DATA_DIR: &str = "./debate-data";

/// Errors that can occur during offline storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// IO operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored document could not be parsed.
    #[error("Corrupt offline data: {0}")]
    Corrupt(#[from] serde_json::Error),

    /// Storage directory creation failed.
    #[error("Failed to create data directory: {0}")]
    DirectoryCreationFailed(String),
}

/// A finished or in-progress debate captured for offline review.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredDebate {
    /// Unique debate identifier.
    pub id: Uuid,
    /// Topic that was debated.
    pub topic: String,
    /// Name of the sparring partner.
    pub personality: String,
    /// Side the student argued.
    pub user_position: DebatePosition,
    /// Number of rounds played.
    pub rounds_played: u32,
    /// Full transcript, oldest first.
    pub messages: Vec<DebateMessage>,
    /// When the debate was captured.
    pub saved_at: DateTime<Utc>,
}

impl StoredDebate {
    /// Captures the current state of a session.
    pub fn from_session(session: &DebateSession) -> Self {
        Self {
            id: Uuid::new_v4(),
            topic: session.topic().to_string(),
            personality: session.personality().name.clone(),
            user_position: session.user_position(),
            rounds_played: session.round().saturating_sub(1),
            messages: session.messages().to_vec(),
            saved_at: Utc::now(),
        }
    }
}

/// A standalone student response queued while offline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredResponse {
    /// Unique response identifier.
    pub id: Uuid,
    /// Topic the response argues about.
    pub topic: String,
    /// The response text.
    pub content: String,
    /// When the response was recorded.
    pub recorded_at: DateTime<Utc>,
}

impl StoredResponse {
    /// Records a response against a topic right now.
    pub fn new(topic: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            topic: topic.into(),
            content: content.into(),
            recorded_at: Utc::now(),
        }
    }
}

/// Everything persisted between runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OfflineData {
    /// Captured debates, oldest first.
    pub debates: Vec<StoredDebate>,
    /// Queued responses, oldest first.
    pub responses: Vec<StoredResponse>,
    /// When the document was last written, `None` for a fresh store.
    pub last_saved: Option<DateTime<Utc>>,
}

/// JSON-file store for offline debate data.
pub struct OfflineStore {
    /// Directory holding the data file.
    base_path: PathBuf,
}

impl OfflineStore {
    /// Creates a store over the given data directory.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Returns the base storage path.
    pub fn base_path(&self) -> &PathBuf {
        &self.base_path
    }

    fn data_path(&self) -> PathBuf {
        self.base_path.join(DATA_FILE)
    }

    async fn ensure_directory(&self) -> Result<(), StorageError> {
        if !self.base_path.exists() {
            fs::create_dir_all(&self.base_path).await.map_err(|e| {
                StorageError::DirectoryCreationFailed(format!(
                    "Failed to create data directory {:?}: {}",
                    self.base_path, e
                ))
            })?;
        }

        Ok(())
    }

    /// Loads the stored data, or an empty document if none exists yet.
    pub async fn load(&self) -> Result<OfflineData, StorageError> {
        let path = self.data_path();
        if !path.exists() {
            return Ok(OfflineData::default());
        }

        let raw = fs::read_to_string(&path).await?;
        let data = serde_json::from_str(&raw)?;
        Ok(data)
    }

    /// Writes the document, stamping `last_saved`.
    pub async fn save(&self, mut data: OfflineData) -> Result<OfflineData, StorageError> {
        self.ensure_directory().await?;

        data.last_saved = Some(Utc::now());
        let raw = serde_json::to_string_pretty(&data)?;
        fs::write(self.data_path(), raw).await?;

        Ok(data)
    }

    /// Appends a captured debate to the stored document.
    pub async fn record_debate(&self, debate: StoredDebate) -> Result<(), StorageError> {
        let mut data = self.load().await?;
        data.debates.push(debate);
        self.save(data).await?;
        Ok(())
    }

    /// Appends a queued response to the stored document.
    pub async fn record_response(&self, response: StoredResponse) -> Result<(), StorageError> {
        let mut data = self.load().await?;
        data.responses.push(response);
        self.save(data).await?;
        Ok(())
    }

    /// Removes the stored document. A missing file is not an error.
    pub async fn clear(&self) -> Result<(), StorageError> {
        let path = self.data_path();
        if path.exists() {
            fs::remove_file(&path).await?;
        }
        Ok(())
    }

    /// Returns the stored document serialized as pretty JSON.
    pub async fn export_json(&self) -> Result<String, StorageError> {
        let data = self.load().await?;
        Ok(serde_json::to_string_pretty(&data)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, OfflineStore) {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = OfflineStore::new(dir.path().join("debate-data"));
        (dir, store)
    }

    fn sample_debate() -> StoredDebate {
        StoredDebate {
            id: Uuid::new_v4(),
            topic: "Ar mokyklose verta drausti telefonus?".to_string(),
            personality: "Draugiškas Mentorius".to_string(),
            user_position: DebatePosition::Pro,
            rounds_played: 2,
            messages: vec![
                DebateMessage::opponent("Pradedu debatus."),
                DebateMessage::user("Mano argumentas.").with_score(80),
            ],
            saved_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_load_missing_file_returns_empty() {
        let (_dir, store) = temp_store();

        let data = store.load().await.expect("load succeeds");
        assert!(data.debates.is_empty());
        assert!(data.responses.is_empty());
        assert!(data.last_saved.is_none());
    }

    #[tokio::test]
    async fn test_save_and_load_round_trip() {
        let (_dir, store) = temp_store();

        let mut data = OfflineData::default();
        data.debates.push(sample_debate());
        data.responses
            .push(StoredResponse::new("Tema", "Atsakymas dėl temos."));

        let saved = store.save(data).await.expect("save succeeds");
        assert!(saved.last_saved.is_some());

        let loaded = store.load().await.expect("load succeeds");
        assert_eq!(loaded.debates.len(), 1);
        assert_eq!(loaded.responses.len(), 1);
        assert_eq!(loaded.debates[0].topic, "Ar mokyklose verta drausti telefonus?");
        assert_eq!(loaded.debates[0].messages.len(), 2);
        assert_eq!(loaded.responses[0].content, "Atsakymas dėl temos.");
        assert_eq!(loaded.last_saved, saved.last_saved);
    }

    #[tokio::test]
    async fn test_record_debate_appends() {
        let (_dir, store) = temp_store();

        store
            .record_debate(sample_debate())
            .await
            .expect("first record succeeds");
        store
            .record_debate(sample_debate())
            .await
            .expect("second record succeeds");

        let data = store.load().await.expect("load succeeds");
        assert_eq!(data.debates.len(), 2);
    }

    #[tokio::test]
    async fn test_clear_removes_file() {
        let (_dir, store) = temp_store();

        store
            .record_debate(sample_debate())
            .await
            .expect("record succeeds");
        assert!(store.data_path().exists());

        store.clear().await.expect("clear succeeds");
        assert!(!store.data_path().exists());

        // Clearing again is a no-op rather than an error.
        store.clear().await.expect("second clear succeeds");

        let data = store.load().await.expect("load succeeds");
        assert!(data.debates.is_empty());
    }

    #[tokio::test]
    async fn test_export_json_is_parseable() {
        let (_dir, store) = temp_store();

        store
            .record_response(StoredResponse::new("Tema", "Ilgas atsakymas apie temą."))
            .await
            .expect("record succeeds");

        let json = store.export_json().await.expect("export succeeds");
        let parsed: OfflineData = serde_json::from_str(&json).expect("valid JSON");
        assert_eq!(parsed.responses.len(), 1);
    }
}
