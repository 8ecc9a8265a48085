use serde::Serialize;

/// One `##`-marked section of the input with its accumulated body text
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    /// 1-based position in the input, independent of any numbering in the title
    pub number: usize,
    pub title: String,
    /// Raw body lines, each followed by a single space
    pub content: String,
}

/// A marker line and the raw lines that follow it, before any joining
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Cleaned title; empty when the marker carried no text
    pub title: String,
    pub lines: Vec<String>,
}
