use super::sink::TableSink;
use super::types::{ExportFile, ExportItem, ExportRow};
use crate::errors::{Advisory, ExportError, ScriptHelperResult};
use crate::filename::base_filename_for;
use crate::topics::parse_sections;
use log::{info, warn};

/// Collect `(title, content)` pairs for the tabular export.
///
/// Each body line is trimmed and followed by a space, then the whole content
/// is trimmed. Blank lines still add their space. Sections whose title is
/// empty after numbering removal produce no item, and their lines are dropped.
pub fn export_items_from_text(text: &str) -> Vec<ExportItem> {
    parse_sections(text)
        .into_iter()
        .filter(|section| !section.title.is_empty())
        .map(|section| {
            let content: String = section
                .lines
                .iter()
                .map(|line| format!("{} ", line.trim()))
                .collect();
            ExportItem {
                title: section.title,
                content: content.trim().to_string(),
            }
        })
        .collect()
}

/// Split items into files of at most `rows_per_file` rows.
///
/// Row indexes keep counting across files. The base name comes from the
/// first item's title.
pub fn plan_export_files(
    items: &[ExportItem],
    rows_per_file: usize,
) -> Result<Vec<ExportFile>, ExportError> {
    if rows_per_file == 0 {
        return Err(ExportError::new("rows per file must be at least 1"));
    }

    let titles: Vec<&str> = items.iter().map(|item| item.title.as_str()).collect();
    let base_name = base_filename_for(&titles);
    let total_parts = items.len().div_ceil(rows_per_file);

    let files = items
        .chunks(rows_per_file)
        .enumerate()
        .map(|(chunk_index, chunk)| ExportFile {
            base_name: base_name.clone(),
            part: chunk_index + 1,
            total_parts,
            rows: chunk
                .iter()
                .enumerate()
                .map(|(offset, item)| ExportRow {
                    index: chunk_index * rows_per_file + offset + 1,
                    input: format!("{} {}", item.title, item.content),
                })
                .collect(),
        })
        .collect();

    Ok(files)
}

/// Write all export files through `sink`, returning the file names used.
pub fn export_to_sink<T: TableSink + ?Sized>(
    sink: &mut T,
    items: &[ExportItem],
    rows_per_file: usize,
) -> ScriptHelperResult<Vec<String>> {
    if items.is_empty() {
        warn!("Nothing to export");
        return Err(Advisory::NoTopicsFound.into());
    }

    let files = plan_export_files(items, rows_per_file)?;
    let extension = sink.extension();
    let mut names = Vec::with_capacity(files.len());

    for file in &files {
        let name = file.file_name(&extension);
        sink.write_table(&name, &file.to_table())?;
        names.push(name);
    }

    info!(
        "Exported {} topics into {} file(s)",
        items.len(),
        names.len()
    );
    Ok(names)
}
