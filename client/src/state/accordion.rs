//! Single-open accordion state for the FAQ section.

#[cfg(test)]
#[path = "accordion_test.rs"]
mod accordion_test;

/// Index of the open entry, if any. At most one entry is open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccordionState {
    open: Option<usize>,
}

impl Default for AccordionState {
    /// The first entry starts open.
    fn default() -> Self {
        Self { open: Some(0) }
    }
}

impl AccordionState {
    #[cfg(test)]
    pub(crate) fn all_closed() -> Self {
        Self { open: None }
    }

    #[cfg(test)]
    pub(crate) fn open_index(self) -> Option<usize> {
        self.open
    }

    #[must_use]
    pub fn is_open(self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Close `index` if it is open, otherwise make it the only open entry.
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) { None } else { Some(index) };
    }
}
