//! Address field state machine
//!
//! Each form field moves through
//! `Empty → Typing → Searching → {ResultsShown | NoResults} → Confirmed`.
//! The phase is a tagged enum so a confirmed field can never carry a
//! candidate list at the same time.

use serde::{Deserialize, Serialize};

use super::address_candidate::AddressCandidate;
use crate::errors::DomainError;
use crate::value_objects::FieldRole;

/// Where a field currently is in the selection flow
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", content = "data", rename_all = "snake_case")]
pub enum FieldPhase {
    /// No text and no selection
    #[default]
    Empty,
    /// Text entered, waiting for the debounce to fire
    Typing,
    /// A search request is in flight
    Searching,
    /// Candidates returned and awaiting a choice, in service order
    ResultsShown(Vec<AddressCandidate>),
    /// The last search returned nothing (or failed)
    NoResults,
    /// The user picked this candidate
    Confirmed(AddressCandidate),
}

impl FieldPhase {
    /// Short name for logs
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Typing => "typing",
            Self::Searching => "searching",
            Self::ResultsShown(_) => "results_shown",
            Self::NoResults => "no_results",
            Self::Confirmed(_) => "confirmed",
        }
    }
}

/// Outcome of feeding a search response into a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The field now shows the candidates
    Shown(usize),
    /// The response was empty; the field shows "no results"
    Empty,
    /// The field was confirmed or cleared meanwhile; response dropped
    Discarded,
}

/// State of one address field: the raw typed text plus its phase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldState {
    role: FieldRole,
    text: String,
    phase: FieldPhase,
}

impl FieldState {
    /// Create an empty field
    #[must_use]
    pub const fn new(role: FieldRole) -> Self {
        Self {
            role,
            text: String::new(),
            phase: FieldPhase::Empty,
        }
    }

    /// The role of this field
    #[must_use]
    pub const fn role(&self) -> FieldRole {
        self.role
    }

    /// The raw text the user typed
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The current phase
    #[must_use]
    pub const fn phase(&self) -> &FieldPhase {
        &self.phase
    }

    /// Number of characters typed
    #[must_use]
    pub fn text_len(&self) -> usize {
        self.text.chars().count()
    }

    /// The confirmed candidate, if any
    #[must_use]
    pub const fn confirmed(&self) -> Option<&AddressCandidate> {
        match &self.phase {
            FieldPhase::Confirmed(candidate) => Some(candidate),
            _ => None,
        }
    }

    /// Whether a candidate has been confirmed
    #[must_use]
    pub const fn is_confirmed(&self) -> bool {
        matches!(self.phase, FieldPhase::Confirmed(_))
    }

    /// Whether a search is in flight (loading indicator)
    #[must_use]
    pub const fn is_searching(&self) -> bool {
        matches!(self.phase, FieldPhase::Searching)
    }

    /// Candidates awaiting a choice; empty unless results are shown
    #[must_use]
    pub fn candidates(&self) -> &[AddressCandidate] {
        match &self.phase {
            FieldPhase::ResultsShown(list) => list,
            _ => &[],
        }
    }

    /// Replace the raw text
    ///
    /// Editing a confirmed field drops the confirmation. A shown list and an
    /// in-flight search are left alone until the next debounce replaces them.
    /// Returns `true` when a confirmation was dropped.
    pub fn set_text(&mut self, text: impl Into<String>) -> bool {
        self.text = text.into();
        let was_confirmed = self.is_confirmed();

        match self.phase {
            FieldPhase::ResultsShown(_) | FieldPhase::Searching => {},
            _ if self.text.is_empty() => self.phase = FieldPhase::Empty,
            _ => self.phase = FieldPhase::Typing,
        }

        was_confirmed
    }

    /// Whether a debounce firing now should issue a search
    #[must_use]
    pub fn wants_search(&self, min_chars: usize) -> bool {
        !self.is_confirmed() && self.text_len() >= min_chars
    }

    /// Enter `Searching` if the field wants a search, returning the query
    pub fn begin_search(&mut self, min_chars: usize) -> Option<String> {
        if !self.wants_search(min_chars) {
            return None;
        }
        self.phase = FieldPhase::Searching;
        Some(self.text.clone())
    }

    /// Replace the candidate list with a search response
    ///
    /// Responses for a field that has since been confirmed or cleared are
    /// dropped.
    pub fn apply_results(&mut self, results: Vec<AddressCandidate>) -> ApplyOutcome {
        match self.phase {
            FieldPhase::Confirmed(_) | FieldPhase::Empty => ApplyOutcome::Discarded,
            _ if results.is_empty() => {
                self.phase = FieldPhase::NoResults;
                ApplyOutcome::Empty
            },
            _ => {
                let count = results.len();
                self.phase = FieldPhase::ResultsShown(results);
                ApplyOutcome::Shown(count)
            },
        }
    }

    /// Confirm the candidate at `index` (zero-based), clearing the list
    pub fn select(&mut self, index: usize) -> Result<&AddressCandidate, DomainError> {
        match std::mem::take(&mut self.phase) {
            FieldPhase::ResultsShown(mut list) if index < list.len() => {
                self.phase = FieldPhase::Confirmed(list.swap_remove(index));
            },
            FieldPhase::ResultsShown(list) => {
                let len = list.len();
                self.phase = FieldPhase::ResultsShown(list);
                return Err(DomainError::out_of_range(index, len));
            },
            other => {
                let name = other.name();
                self.phase = other;
                return Err(DomainError::InvalidTransition(format!(
                    "{} field has no candidates to choose from ({name})",
                    self.role
                )));
            },
        }

        self.confirmed().ok_or_else(|| {
            DomainError::InvalidTransition("confirmation was not recorded".to_string())
        })
    }

    /// Activation key: confirms the top candidate when a list is present
    pub fn activate(&mut self) -> Option<&AddressCandidate> {
        if self.candidates().is_empty() {
            return None;
        }
        self.select(0).ok()
    }

    /// Explicit clear: resets text and confirmation together
    pub fn clear(&mut self) {
        self.text.clear();
        self.phase = FieldPhase::Empty;
    }
}
