use serde::Serialize;

/// Header row written at the top of every export file
pub const EXPORT_HEADER: [&str; 2] = ["title", "input"];

/// A topic as it appears in the tabular export
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ExportItem {
    pub title: String,
    /// Trimmed body lines joined with single spaces
    pub content: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ExportRow {
    /// 1-based position of the item across all files
    pub index: usize,
    /// `title + " " + content`
    pub input: String,
}

/// One output file of an export request
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub base_name: String,
    /// 1-based part number
    pub part: usize,
    pub total_parts: usize,
    pub rows: Vec<ExportRow>,
}

impl ExportFile {
    /// `{base}.{ext}` for a single file, `{base}_{part}of{total}.{ext}` otherwise
    pub fn file_name(&self, extension: &str) -> String {
        if self.total_parts > 1 {
            format!(
                "{}_{}of{}.{}",
                self.base_name, self.part, self.total_parts, extension
            )
        } else {
            format!("{}.{}", self.base_name, extension)
        }
    }

    /// Header followed by the data rows, as text cells
    pub fn to_table(&self) -> Vec<Vec<String>> {
        let mut table = Vec::with_capacity(self.rows.len() + 1);
        table.push(EXPORT_HEADER.iter().map(|h| h.to_string()).collect());
        for row in &self.rows {
            table.push(vec![row.index.to_string(), row.input.clone()]);
        }
        table
    }
}
