use crate::errors::{Advisory, ScriptHelperError};
use crate::export::{
    export_items_from_text, export_to_sink, plan_export_files, CsvDirSink, ExportItem,
    MockTableSink, TableSink,
};
use mockall::Sequence;
use std::io;

#[cfg(test)]
mod test_helpers {
    use crate::export::ExportItem;

    pub fn items(count: usize) -> Vec<ExportItem> {
        (1..=count)
            .map(|n| ExportItem {
                title: format!("Topic {}", n),
                content: format!("Body {}", n),
            })
            .collect()
    }
}

#[test]
fn test_items_trim_each_line() {
    let text = "intro text\n## 1. First\n  line one  \n\n   line two\n## Second: part\n";
    let items = export_items_from_text(text);
    assert_eq!(
        items,
        vec![
            ExportItem {
                title: "First".to_string(),
                content: "line one  line two".to_string(),
            },
            ExportItem {
                title: "Second: part".to_string(),
                content: String::new(),
            },
        ]
    );
}

#[test]
fn test_items_keep_blank_line_spacing_and_skip_untitled_sections() {
    let text = "## A\nline one\n\n   \nline two\n## \norphan\n## 3.\nalso dropped\n## B\nx";
    let items = export_items_from_text(text);
    assert_eq!(
        items,
        vec![
            ExportItem {
                title: "A".to_string(),
                content: "line one   line two".to_string(),
            },
            ExportItem {
                title: "B".to_string(),
                content: "x".to_string(),
            },
        ]
    );
}

#[test]
fn test_single_file_plan() {
    use test_helpers::*;
    let files = plan_export_files(&items(3), 20).expect("plan");
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].file_name("csv"), "Topic 1.csv");
    let table = files[0].to_table();
    assert_eq!(table[0], vec!["title", "input"]);
    assert_eq!(table[1], vec!["1", "Topic 1 Body 1"]);
    assert_eq!(table.len(), 4);
}

#[test]
fn test_multi_file_plan_keeps_global_indexes() {
    use test_helpers::*;
    let files = plan_export_files(&items(45), 20).expect("plan");
    assert_eq!(files.len(), 3);

    let names: Vec<String> = files.iter().map(|f| f.file_name("xlsx")).collect();
    assert_eq!(
        names,
        vec![
            "Topic 1_1of3.xlsx",
            "Topic 1_2of3.xlsx",
            "Topic 1_3of3.xlsx"
        ]
    );

    assert_eq!(files[0].rows.len(), 20);
    assert_eq!(files[2].rows.len(), 5);
    assert_eq!(files[1].rows[0].index, 21);
    assert_eq!(files[2].rows[4].index, 45);
    assert_eq!(files[2].rows[4].input, "Topic 45 Body 45");
}

#[test]
fn test_exact_multiple_has_no_empty_tail() {
    use test_helpers::*;
    let files = plan_export_files(&items(40), 20).expect("plan");
    assert_eq!(files.len(), 2);
    assert!(files.iter().all(|f| f.total_parts == 2 && f.rows.len() == 20));
}

#[test]
fn test_zero_rows_per_file_is_rejected() {
    use test_helpers::*;
    assert!(plan_export_files(&items(2), 0).is_err());
}

#[test]
fn test_export_writes_each_file_through_sink() {
    use test_helpers::*;
    let mut sink = MockTableSink::new();
    let mut seq = Sequence::new();
    sink.expect_extension().times(1).returning(|| "csv".to_string());
    sink.expect_write_table()
        .withf(|name, rows| name.to_string() == "Topic 1_1of2.csv" && rows.len() == 3)
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _| Ok(()));
    sink.expect_write_table()
        .withf(|name, rows| name.to_string() == "Topic 1_2of2.csv" && rows.len() == 2 && rows[1][0] == "3")
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _| Ok(()));

    let names = export_to_sink(&mut sink, &items(3), 2).expect("export");
    assert_eq!(names, vec!["Topic 1_1of2.csv", "Topic 1_2of2.csv"]);
}

#[test]
fn test_export_without_items_is_advisory() {
    let mut sink = MockTableSink::new();
    sink.expect_write_table().never();
    match export_to_sink(&mut sink, &[], 20) {
        Err(ScriptHelperError::Advisory(Advisory::NoTopicsFound)) => {}
        other => panic!("expected advisory, got {:?}", other),
    }
}

#[test]
fn test_sink_failure_is_propagated() {
    use test_helpers::*;
    let mut sink = MockTableSink::new();
    sink.expect_extension().returning(|| "csv".to_string());
    sink.expect_write_table()
        .returning(|_, _| Err(crate::errors::ExportError::new("disk full")));
    let result = export_to_sink(&mut sink, &items(1), 20);
    assert!(matches!(result, Err(ScriptHelperError::Export(_))));
}

#[test]
fn test_csv_sink_quotes_fields() -> io::Result<()> {
    let dir = tempfile::tempdir()?;
    let mut sink = CsvDirSink::new(dir.path());
    let rows = vec![
        vec!["title".to_string(), "input".to_string()],
        vec!["1".to_string(), "Intro Hello, \"world\"".to_string()],
    ];
    sink.write_table("Intro.csv", &rows)?;

    assert_eq!(sink.written().len(), 1);
    let written = std::fs::read_to_string(dir.path().join("Intro.csv"))?;
    assert_eq!(written, "title,input\r\n1,\"Intro Hello, \"\"world\"\"\"\r\n");
    Ok(())
}
