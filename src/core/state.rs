//! Search result state
//!
//! Keeps "nothing searched yet" apart from "searched, nothing matched".

/// Outcome of the most recent search, if any
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SearchState {
    /// No search has run since start-up or the last reset
    #[default]
    NotSearched,
    /// A search ran; the results may be empty
    Searched(Vec<String>),
}

impl SearchState {
    /// Results of the last search, empty when none has run
    #[must_use]
    pub fn results(&self) -> &[String] {
        match self {
            Self::NotSearched => &[],
            Self::Searched(results) => results,
        }
    }

    #[must_use]
    pub const fn has_searched(&self) -> bool {
        matches!(self, Self::Searched(_))
    }

    /// Searched with no matches
    #[must_use]
    pub fn is_empty_result(&self) -> bool {
        matches!(self, Self::Searched(results) if results.is_empty())
    }

    /// Text shown instead of a result list
    #[must_use]
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            Self::NotSearched => Some("Enter letters and search to find words."),
            Self::Searched(results) if results.is_empty() => {
                Some("No matches found. Try different letters or constraints.")
            }
            Self::Searched(_) => None,
        }
    }
}
