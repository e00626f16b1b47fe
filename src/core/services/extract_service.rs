use mongodb::bson::{Bson, Document, from_document};

use crate::core::models::extract_report::{ExtractReport, SkippedEntry};
use crate::core::models::message::Message;

/// Pulls the embedded change-log message out of fetched log documents.
pub struct ExtractService;

impl ExtractService {
    /// Walk `docs` in order and collect each nested `msg` as a typed
    /// [`Message`].
    ///
    /// Documents without a `msg` field are skipped silently. A `msg`
    /// that is not an embedded document, or does not match the shape its
    /// `action` requires, is recorded in `skipped` instead of aborting
    /// the report.
    pub fn extract(&self, docs: &[Document]) -> ExtractReport {
        let mut messages = Vec::new();
        let mut skipped = Vec::new();

        for (index, doc) in docs.iter().enumerate() {
            let Some(raw) = doc.get("msg") else { continue };

            let Bson::Document(msg) = raw else {
                skipped.push(SkippedEntry {
                    index,
                    detail: format!(
                        "`msg` is {:?} instead of an embedded document",
                        raw.element_type()
                    ),
                });
                continue;
            };

            match from_document::<Message>(msg.clone()) {
                Ok(message) => messages.push(message),
                Err(e) => skipped.push(SkippedEntry {
                    index,
                    detail: e.to_string(),
                }),
            }
        }

        ExtractReport { messages, skipped }
    }
}
