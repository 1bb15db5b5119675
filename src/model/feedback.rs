use serde::{Deserialize, Serialize};

use super::error::FeedbackError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// A user's decision on a surfaced signal.
pub enum FeedbackLabel {
    Saved,
    Skipped,
    #[default]
    Unlabeled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Action that moves a [`FeedbackLabel`].
pub enum FeedbackAction {
    Save,
    Skip,
    Undo,
}

impl FeedbackLabel {
    /// Applies `action`, enforcing set-once semantics.
    ///
    /// A label can only be set from `Unlabeled`; `Undo` resets a set label so it can be set
    /// again.
    pub fn apply(self, action: FeedbackAction) -> Result<FeedbackLabel, FeedbackError> {
        match (self, action) {
            (FeedbackLabel::Unlabeled, FeedbackAction::Save) => Ok(FeedbackLabel::Saved),
            (FeedbackLabel::Unlabeled, FeedbackAction::Skip) => Ok(FeedbackLabel::Skipped),
            (FeedbackLabel::Unlabeled, FeedbackAction::Undo) => Err(FeedbackError::NothingToUndo),
            (_, FeedbackAction::Undo) => Ok(FeedbackLabel::Unlabeled),
            (current, action) => Err(FeedbackError::AlreadyLabeled { current, action }),
        }
    }

    /// Returns `true` for `Saved` and `Skipped`.
    pub fn is_set(&self) -> bool {
        !matches!(self, FeedbackLabel::Unlabeled)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackLabel::Saved => "saved",
            FeedbackLabel::Skipped => "skipped",
            FeedbackLabel::Unlabeled => "unlabeled",
        }
    }
}

impl std::fmt::Display for FeedbackLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FeedbackLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "saved" => Ok(Self::Saved),
            "skipped" => Ok(Self::Skipped),
            "unlabeled" | "" => Ok(Self::Unlabeled),
            _ => Err(format!("Unknown feedback label: {}", s)),
        }
    }
}

impl std::fmt::Display for FeedbackAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedbackAction::Save => write!(f, "save"),
            FeedbackAction::Skip => write!(f, "skip"),
            FeedbackAction::Undo => write!(f, "undo"),
        }
    }
}
