//! # Fraud Screen
//!
//! A local check run before any order reaches the checkout service: the card
//! number is looked up in a list of blocked cards.
//!
//! The list comes from a [`FraudListSource`]. In production that is a
//! newline-delimited file ([`FileFraudList`]) read on every check, so edits
//! to the file apply to the next order. A missing file means nothing is
//! blocked. Tests use [`StaticFraudList`].

use async_trait::async_trait;
use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, instrument, warn};

/// Outcome of screening one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FraudVerdict {
    Allowed,
    Blocked,
}

/// The list exists but could not be read. Orders are refused while this
/// persists.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("fraud list {path} could not be read: {reason}")]
pub struct FraudScreenError {
    pub path: String,
    pub reason: String,
}

/// Where the blocked-card list comes from.
#[async_trait]
pub trait FraudListSource: Send + Sync {
    /// `Ok(None)` when there is no list at all.
    async fn load(&self) -> Result<Option<HashSet<String>>, FraudScreenError>;
}

/// A blocked-card list stored as a plain text file, one card per line.
#[derive(Debug, Clone)]
pub struct FileFraudList {
    path: PathBuf,
}

impl FileFraudList {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl FraudListSource for FileFraudList {
    async fn load(&self) -> Result<Option<HashSet<String>>, FraudScreenError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => Ok(Some(parse_list(&contents))),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No fraud list, allowing all cards");
                Ok(None)
            }
            Err(e) => Err(FraudScreenError {
                path: self.path.display().to_string(),
                reason: e.to_string(),
            }),
        }
    }
}

/// A fixed in-memory list.
#[derive(Debug, Clone, Default)]
pub struct StaticFraudList {
    cards: HashSet<String>,
}

impl StaticFraudList {
    pub fn new<I, S>(cards: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cards: cards.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait]
impl FraudListSource for StaticFraudList {
    async fn load(&self) -> Result<Option<HashSet<String>>, FraudScreenError> {
        Ok(Some(self.cards.clone()))
    }
}

fn parse_list(contents: &str) -> HashSet<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Classifies cards as blocked or allowed.
#[derive(Clone)]
pub struct FraudScreen {
    source: Arc<dyn FraudListSource>,
}

impl FraudScreen {
    pub fn new(source: Arc<dyn FraudListSource>) -> Self {
        Self { source }
    }

    #[instrument(skip_all)]
    pub async fn check(&self, card_number: &str) -> Result<FraudVerdict, FraudScreenError> {
        let verdict = match self.source.load().await? {
            Some(blocked) if blocked.contains(card_number.trim()) => FraudVerdict::Blocked,
            _ => FraudVerdict::Allowed,
        };
        if verdict == FraudVerdict::Blocked {
            warn!("Card is on the fraud list");
        }
        Ok(verdict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_static_list_blocks_listed_cards() {
        let screen = FraudScreen::new(Arc::new(StaticFraudList::new(["4111111111111111"])));
        assert_eq!(
            screen.check("4111111111111111").await.unwrap(),
            FraudVerdict::Blocked
        );
        assert_eq!(
            screen.check("4432801561520454").await.unwrap(),
            FraudVerdict::Allowed
        );
    }

    #[tokio::test]
    async fn test_missing_file_allows_everything() {
        let dir = tempfile::tempdir().unwrap();
        let screen = FraudScreen::new(Arc::new(FileFraudList::new(dir.path().join("absent.txt"))));
        assert_eq!(
            screen.check("4111111111111111").await.unwrap(),
            FraudVerdict::Allowed
        );
    }

    #[tokio::test]
    async fn test_file_lines_are_trimmed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "  4111111111111111  ").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "5555555555554444\r").unwrap();

        let screen = FraudScreen::new(Arc::new(FileFraudList::new(file.path())));
        assert_eq!(
            screen.check("4111111111111111").await.unwrap(),
            FraudVerdict::Blocked
        );
        assert_eq!(
            screen.check("5555555555554444").await.unwrap(),
            FraudVerdict::Blocked
        );
        assert_eq!(screen.check("").await.unwrap(), FraudVerdict::Allowed);
    }

    #[tokio::test]
    async fn test_file_changes_are_seen_on_next_check() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let screen = FraudScreen::new(Arc::new(FileFraudList::new(file.path())));
        assert_eq!(
            screen.check("4111111111111111").await.unwrap(),
            FraudVerdict::Allowed
        );

        writeln!(file, "4111111111111111").unwrap();
        file.flush().unwrap();
        assert_eq!(
            screen.check("4111111111111111").await.unwrap(),
            FraudVerdict::Blocked
        );
    }

    #[tokio::test]
    async fn test_unreadable_list_is_an_error() {
        // A directory exists but cannot be read as a file.
        let dir = tempfile::tempdir().unwrap();
        let screen = FraudScreen::new(Arc::new(FileFraudList::new(dir.path())));
        assert!(screen.check("4111111111111111").await.is_err());
    }
}
