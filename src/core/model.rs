// fieldfilter - core/model.rs
//
// Data types shared by grouping, filtering and the run orchestration.

use crate::util::constants;
use std::collections::HashSet;

/// One top-level list entry of a fields file: a marker line followed by
/// every non-marker line up to the next marker.
///
/// Blocks are only built by `group_blocks`, which guarantees `lines` is
/// non-empty and that `lines[0]` is a marker line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    lines: Vec<String>,
}

impl Block {
    /// Open a new block with its marker line.
    pub(crate) fn open(marker_line: String) -> Self {
        Self {
            lines: vec![marker_line],
        }
    }

    /// Append a continuation line.
    pub(crate) fn push(&mut self, line: String) {
        self.lines.push(line);
    }

    /// The marker line that opened this block.
    pub fn first_line(&self) -> &str {
        &self.lines[0]
    }

    /// All lines in input order, marker line first.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines in the block.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Always false: a block holds at least its marker line.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Fixed allow-list of classification keys.
///
/// Membership is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeepSet {
    keys: HashSet<String>,
}

impl KeepSet {
    /// Build a keep-set from any collection of keys. Duplicates collapse.
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    /// The built-in allow-list of Beats field groups.
    pub fn builtin() -> Self {
        Self::new(constants::KEEP_KEYS)
    }

    /// Returns true if `key` is retained.
    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Counts describing one filter run, reported in the log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterSummary {
    /// Lines read from the input.
    pub lines_read: usize,
    /// Lines before the first marker line, discarded.
    pub orphan_lines: usize,
    /// Blocks found in the input.
    pub blocks_total: usize,
    /// Blocks whose key is in the keep-set.
    pub blocks_kept: usize,
    /// Lines written to the output.
    pub lines_written: usize,
}

impl FilterSummary {
    pub fn blocks_dropped(&self) -> usize {
        self.blocks_total.saturating_sub(self.blocks_kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_keep_set() {
        let keep = KeepSet::builtin();
        assert_eq!(keep.len(), 15);
        for key in ["ecs", "kubernetes", "google_workspace", "misp"] {
            assert!(keep.contains(key), "expected {key} in keep-set");
        }
        assert!(!keep.contains("apache"));
        assert!(!keep.contains("ECS"));
    }

    #[test]
    fn test_keep_set_dedups() {
        let keep = KeepSet::new(["foo", "foo", "bar"]);
        assert_eq!(keep.len(), 2);
    }

    #[test]
    fn test_block_accessors() {
        let mut block = Block::open("- key: ecs".to_string());
        block.push("  title: ECS".to_string());
        assert_eq!(block.first_line(), "- key: ecs");
        assert_eq!(block.len(), 2);
        assert!(!block.is_empty());
    }

    #[test]
    fn test_summary_dropped() {
        let summary = FilterSummary {
            blocks_total: 5,
            blocks_kept: 2,
            ..Default::default()
        };
        assert_eq!(summary.blocks_dropped(), 3);
    }

    #[test]
    fn test_summary_dropped_never_underflows() {
        let summary = FilterSummary {
            blocks_total: 1,
            blocks_kept: 4,
            ..Default::default()
        };
        assert_eq!(summary.blocks_dropped(), 0);
    }
}
