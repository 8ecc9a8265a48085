mod exporter;
mod sink;
mod types;

pub use exporter::{export_items_from_text, export_to_sink, plan_export_files};
pub use sink::{CsvDirSink, TableSink};
pub use types::{ExportFile, ExportItem, ExportRow, EXPORT_HEADER};

#[cfg(test)]
pub use sink::MockTableSink;
#[cfg(test)]
pub mod unit_test;
