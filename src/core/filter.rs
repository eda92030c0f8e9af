// fieldfilter - core/filter.rs
//
// Keep-set filtering of grouped blocks.
// A block is either emitted whole or dropped whole.
// Core layer: pure logic, no I/O.

use crate::core::model::{Block, KeepSet};

/// Classification key of a block's first line: its last
/// whitespace-separated token.
///
/// A line without whitespace classifies as itself. A blank line has no
/// token and yields an empty key, which no keep-set entry matches.
pub fn classification_key(first_line: &str) -> &str {
    first_line.split_whitespace().next_back().unwrap_or("")
}

/// Returns true if the block's key is in the keep-set.
pub fn is_kept(block: &Block, keep: &KeepSet) -> bool {
    keep.contains(classification_key(block.first_line()))
}

/// Blocks retained by `keep`, in input order.
pub fn select_blocks<'a>(blocks: &'a [Block], keep: &KeepSet) -> Vec<&'a Block> {
    blocks
        .iter()
        .filter(|block| {
            let kept = is_kept(block, keep);
            if !kept {
                tracing::debug!(
                    key = classification_key(block.first_line()),
                    lines = block.len(),
                    "Dropping field group"
                );
            }
            kept
        })
        .collect()
}

/// Concatenate the lines of `blocks`, preserving block and line order.
pub fn flatten_lines<'a>(blocks: &[&'a Block]) -> Vec<&'a str> {
    blocks
        .iter()
        .flat_map(|block| block.lines().iter().map(String::as_str))
        .collect()
}

/// Flattened lines of every retained block, in input order.
pub fn kept_lines<'a>(blocks: &'a [Block], keep: &KeepSet) -> Vec<&'a str> {
    flatten_lines(&select_blocks(blocks, keep))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grouping::group_blocks;

    fn run(lines: &[&str], keep: &[&str]) -> Vec<String> {
        let grouping = group_blocks(lines.iter().copied());
        kept_lines(&grouping.blocks, &KeepSet::new(keep.iter().copied()))
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_classification_key() {
        assert_eq!(classification_key("- key: ecs"), "ecs");
        assert_eq!(classification_key("- a  foo"), "foo");
        assert_eq!(classification_key("-\tkey:\tlog"), "log");
        assert_eq!(classification_key("-"), "-");
        assert_eq!(classification_key("-key:ecs"), "-key:ecs");
    }

    #[test]
    fn test_keeps_matching_block_only() {
        let out = run(&["- a foo", "  x: 1", "- b bar", "  y: 2"], &["foo"]);
        assert_eq!(out, vec!["- a foo", "  x: 1"]);
    }

    #[test]
    fn test_orphan_line_never_emitted() {
        let out = run(&["  orphan", "- a baz", "  z: 3"], &["baz"]);
        assert_eq!(out, vec!["- a baz", "  z: 3"]);
    }

    #[test]
    fn test_empty_input_gives_empty_output() {
        assert!(run(&[], &["foo"]).is_empty());
    }

    #[test]
    fn test_no_matching_key_gives_empty_output() {
        assert!(run(&["- a foo", "  x: 1"], &["nope"]).is_empty());
    }

    #[test]
    fn test_bare_marker_block_dropped() {
        let out = run(&["-", "  x: 1", "- a foo"], &["foo"]);
        assert_eq!(out, vec!["- a foo"]);
    }

    #[test]
    fn test_block_order_preserved_across_kept_blocks() {
        let out = run(
            &["- a one", "  1", "- b skip", "  s", "- c two", "  2"],
            &["two", "one"],
        );
        assert_eq!(out, vec!["- a one", "  1", "- c two", "  2"]);
    }

    #[test]
    fn test_select_blocks_is_whole_block() {
        let grouping = group_blocks(["- a foo", "  x", "  y", "- b bar"]);
        let keep = KeepSet::new(["foo"]);
        let selected = select_blocks(&grouping.blocks, &keep);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].len(), 3);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let input = ["x", "- a foo", "  x: 1", "- b bar", "- c foo"];
        let first = run(&input, &["foo"]);
        let refs: Vec<&str> = first.iter().map(String::as_str).collect();
        let second = run(&refs, &["foo"]);
        assert_eq!(first, second);
    }
}
