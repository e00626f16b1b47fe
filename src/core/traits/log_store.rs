use mongodb::bson::Document;

use crate::core::errors::Result;
use crate::core::models::log_query::LogQuery;

/// Port for fetching raw log documents from the backing store.
pub trait LogStore: Send + Sync {
    /// Run `query` and materialize every matching document,
    /// sorted ascending by creation time.
    fn fetch(&self, query: &LogQuery) -> Result<Vec<Document>>;
}
