use crate::core::models::message::Message;

/// Outcome of walking a fetched result set: the messages that parsed,
/// plus a diagnostic record for every document that did not.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractReport {
    pub messages: Vec<Message>,
    pub skipped: Vec<SkippedEntry>,
}

/// A document whose `msg` did not match the shape its action requires.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedEntry {
    /// Position of the document in the fetched result set.
    pub index: usize,
    pub detail: String,
}
