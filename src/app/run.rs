// fieldfilter - app/run.rs
//
// One filter run: read the fields file in full, group, filter, then write
// the kept blocks. The output is only created after the input has been read,
// so a missing input never leaves a truncated output behind.

use crate::core::export::write_lines;
use crate::core::filter::{flatten_lines, select_blocks};
use crate::core::grouping::group_blocks;
use crate::core::model::{FilterSummary, KeepSet};
use crate::platform::fs::read_lines;
use crate::util::error::{InputError, OutputError, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Filter `input_path` into `output_path`, keeping only the blocks whose
/// classification key is in `keep`.
///
/// `output_path` is created or truncated. Returns the run's counts.
pub fn filter(input_path: &Path, output_path: &Path, keep: &KeepSet) -> Result<FilterSummary> {
    tracing::info!(
        input = %input_path.display(),
        output = %output_path.display(),
        keep_keys = keep.len(),
        "Filtering fields file"
    );

    let lines =
        read_lines(input_path).map_err(|e| InputError::from_io(input_path.to_path_buf(), e))?;
    let lines_read = lines.len();

    let grouping = group_blocks(lines);
    let selected = select_blocks(&grouping.blocks, keep);
    let output = flatten_lines(&selected);

    let file = File::create(output_path).map_err(|source| OutputError::Unwritable {
        path: output_path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);

    let write_err = |source| OutputError::Write {
        path: output_path.to_path_buf(),
        source,
    };
    let lines_written = write_lines(&output, &mut writer).map_err(write_err)?;
    writer.flush().map_err(write_err)?;

    let summary = FilterSummary {
        lines_read,
        orphan_lines: grouping.orphan_lines,
        blocks_total: grouping.blocks.len(),
        blocks_kept: selected.len(),
        lines_written,
    };

    tracing::info!(
        blocks = summary.blocks_total,
        kept = summary.blocks_kept,
        dropped = summary.blocks_dropped(),
        orphan_lines = summary.orphan_lines,
        lines_written = summary.lines_written,
        "Fields file written"
    );

    Ok(summary)
}
