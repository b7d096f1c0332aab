//! Test utilities and mock types for fixarr development.
//!
//! Provides deterministic implementations of [`IndexSource`] so random
//! access can be asserted exactly, and value fixtures in [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use fixarr_core::IndexSource;

/// Mock [`IndexSource`] that always picks the same index.
///
/// The index is returned as-is, even when it is out of range for the
/// requested length, so callers can exercise their bounds checks.
#[derive(Clone, Copy, Debug)]
pub struct FixedIndex(pub usize);

impl IndexSource for FixedIndex {
    fn pick(&mut self, _len: usize) -> usize {
        self.0
    }
}

/// Mock [`IndexSource`] that replays a script of picks.
///
/// Picks cycle once the script is exhausted. Every `len` passed to
/// [`pick`](IndexSource::pick) is recorded for inspection with
/// [`requested_lens`](ScriptedIndices::requested_lens).
#[derive(Clone, Debug)]
pub struct ScriptedIndices {
    script: Vec<usize>,
    cursor: usize,
    requested: Vec<usize>,
}

impl ScriptedIndices {
    /// # Panics
    ///
    /// Panics if `script` is empty.
    pub fn new(script: Vec<usize>) -> Self {
        assert!(!script.is_empty(), "ScriptedIndices needs at least one pick");
        Self {
            script,
            cursor: 0,
            requested: Vec::new(),
        }
    }

    /// Lengths passed to each `pick` call, in order.
    pub fn requested_lens(&self) -> &[usize] {
        &self.requested
    }

    /// Number of picks made so far.
    pub fn pick_count(&self) -> usize {
        self.requested.len()
    }
}

impl IndexSource for ScriptedIndices {
    fn pick(&mut self, len: usize) -> usize {
        self.requested.push(len);
        let index = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        index
    }
}
