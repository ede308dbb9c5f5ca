//! Per-section list state for content-bound page regions.
//!
//! DESIGN
//! ======
//! Every section that shows provider content owns one `SectionData<T>`. It
//! starts loading, is resolved exactly once with the provider's result, and
//! then chooses between the fetched list and the section's placeholder
//! catalog. A failed read and a successful empty read both fall back to the
//! placeholders; `outcome` keeps the distinction for markup attributes and
//! diagnostics without changing what is rendered.

#[cfg(test)]
#[path = "section_test.rs"]
mod section_test;

use crate::net::api::ApiError;

/// How the provider read ended.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadOutcome {
    /// No result yet.
    #[default]
    Pending,
    /// Non-empty list returned.
    Populated,
    /// Successful read with no rows.
    Empty,
    /// Network, status, or decode failure.
    Failed,
}

/// Where the rendered list came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplaySource {
    Live,
    Placeholder,
}

impl DisplaySource {
    /// Value for the `data-source` attribute on section markup.
    #[must_use]
    pub fn as_attr(self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Placeholder => "placeholder",
        }
    }
}

/// Loading flag plus fetched rows for one section.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionData<T> {
    pub loading: bool,
    pub items: Vec<T>,
    pub outcome: LoadOutcome,
}

impl<T> Default for SectionData<T> {
    fn default() -> Self {
        Self { loading: true, items: Vec::new(), outcome: LoadOutcome::Pending }
    }
}

impl<T: Clone> SectionData<T> {
    /// Fresh state for a section that is about to fetch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the provider result and clear the loading flag.
    ///
    /// On failure the fetched list stays empty.
    pub fn resolve(&mut self, result: Result<Vec<T>, ApiError>) {
        match result {
            Ok(items) => {
                self.outcome = if items.is_empty() { LoadOutcome::Empty } else { LoadOutcome::Populated };
                self.items = items;
            }
            Err(_) => {
                self.outcome = LoadOutcome::Failed;
                self.items.clear();
            }
        }
        self.loading = false;
    }

    #[must_use]
    pub fn source(&self) -> DisplaySource {
        if self.items.is_empty() { DisplaySource::Placeholder } else { DisplaySource::Live }
    }

    /// `data-source` attribute value; `loading` until resolved.
    #[must_use]
    pub fn source_attr(&self) -> &'static str {
        if self.loading { "loading" } else { self.source().as_attr() }
    }

    /// Rows to render: fetched rows when there are any, otherwise `placeholders`.
    #[must_use]
    pub fn display(&self, placeholders: &[T]) -> Vec<T> {
        match self.source() {
            DisplaySource::Live => self.items.clone(),
            DisplaySource::Placeholder => placeholders.to_vec(),
        }
    }
}
