use std::time::Duration;

use futures_util::stream::TryStreamExt;
use mongodb::Client;
use mongodb::bson::{Document, doc};
use mongodb::options::{ClientOptions, FindOptions};

use crate::config::app_config::AppConfig;
use crate::core::errors::Result;
use crate::core::models::log_query::LogQuery;
use crate::core::traits::log_store::LogStore;

/// How long to wait for a usable server before giving up.
const SELECTION_TIMEOUT: Duration = Duration::from_secs(10);

/// Per-connection TCP handshake timeout.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Log store backed by a MongoDB collection.
///
/// Opens a fresh client per fetch and shuts it down after the query;
/// the tool is a one-shot report, so there is nothing to pool.
pub struct MongoLogStore {
    uri: String,
    database: String,
    collection: String,
}

impl MongoLogStore {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            uri: config.uri.clone(),
            database: config.database.clone(),
            collection: config.collection.clone(),
        }
    }
}

/// Strict open-interval bound on `created`.
fn range_filter(query: &LogQuery) -> Document {
    let start = mongodb::bson::DateTime::from_millis(query.start.timestamp_millis());
    let end = mongodb::bson::DateTime::from_millis(query.end.timestamp_millis());
    doc! {
        "$and": [
            { "created": { "$gt": start } },
            { "created": { "$lt": end } },
        ],
    }
}

/// Ascending creation order, capped at the requested entry count.
fn find_options(query: &LogQuery) -> FindOptions {
    FindOptions::builder()
        .sort(doc! { "created": 1 })
        .limit(query.limit as i64)
        .build()
}

impl LogStore for MongoLogStore {
    fn fetch(&self, query: &LogQuery) -> Result<Vec<Document>> {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        rt.block_on(async {
            let mut options = ClientOptions::parse(&self.uri).await?;
            options.app_name = Some("mongaudit".into());
            options.server_selection_timeout = Some(SELECTION_TIMEOUT);
            options.connect_timeout = Some(CONNECT_TIMEOUT);

            let client = Client::with_options(options)?;
            let collection = client
                .database(&self.database)
                .collection::<Document>(&self.collection);

            let cursor = collection
                .find(range_filter(query))
                .with_options(find_options(query))
                .await?;
            let docs: Vec<Document> = cursor.try_collect().await?;

            client.shutdown().await;
            Ok(docs)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn sample_query() -> LogQuery {
        LogQuery {
            start: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2024, 1, 3, 0, 0, 0).unwrap(),
            limit: 100,
        }
    }

    #[test]
    fn filter_is_a_strict_open_interval() {
        let filter = range_filter(&sample_query());

        let expected = doc! {
            "$and": [
                { "created": { "$gt": mongodb::bson::DateTime::from_millis(1_704_067_200_000) } },
                { "created": { "$lt": mongodb::bson::DateTime::from_millis(1_704_240_000_000) } },
            ],
        };
        assert_eq!(filter, expected);
    }

    #[test]
    fn options_sort_ascending_and_cap_at_limit() {
        let options = find_options(&sample_query());

        assert_eq!(options.sort, Some(doc! { "created": 1 }));
        assert_eq!(options.limit, Some(100));
    }

    #[test]
    fn store_copies_its_target_from_config() {
        let store = MongoLogStore::new(&AppConfig {
            uri: "mongodb://localhost:27017".into(),
            database: "audit".into(),
            collection: "mongolog".into(),
        });

        assert_eq!(store.database, "audit");
        assert_eq!(store.collection, "mongolog");
    }
}
