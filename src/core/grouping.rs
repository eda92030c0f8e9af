// fieldfilter - core/grouping.rs
//
// Single pass that splits a fields file into blocks at every marker line.
// Core layer: pure logic, no I/O.

use crate::core::model::Block;
use crate::util::constants::MARKER_CHAR;

/// Result of grouping: the blocks in input order plus the number of lines
/// that preceded the first marker and were discarded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grouping {
    pub blocks: Vec<Block>,
    pub orphan_lines: usize,
}

/// Returns true if `line` opens a new top-level list entry.
///
/// Only column zero counts; an indented `  - name` is a nested item and
/// stays with the current block.
pub fn is_marker_line(line: &str) -> bool {
    line.starts_with(MARKER_CHAR)
}

/// Group lines into blocks.
///
/// A marker line starts a new block; any other line is appended to the last
/// block. Lines before the first marker have no block to join and are dropped.
pub fn group_blocks<I, S>(lines: I) -> Grouping
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut grouping = Grouping::default();

    for line in lines {
        let line = line.into();
        if is_marker_line(&line) {
            grouping.blocks.push(Block::open(line));
        } else if let Some(current) = grouping.blocks.last_mut() {
            current.push(line);
        } else {
            grouping.orphan_lines += 1;
        }
    }

    if grouping.orphan_lines > 0 {
        tracing::debug!(
            orphan_lines = grouping.orphan_lines,
            "Discarded lines preceding the first list entry"
        );
    }

    grouping
}
