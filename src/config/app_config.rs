use crate::core::errors::{MongauditError, Result};

/// Connection settings for the audit-log collection.
///
/// Read once at startup and passed down explicitly; nothing else in the
/// crate touches the process environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub uri: String,
    pub database: String,
    pub collection: String,
}

impl AppConfig {
    /// Load the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            uri: required(&lookup, "MONGODB_URI")?,
            database: required(&lookup, "MONGODB_NAME")?,
            collection: required(&lookup, "MONGODB_COLL_NAME")?,
        })
    }
}

/// An unset or empty variable is a startup error, not a late
/// connection failure.
fn required(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Result<String> {
    lookup(name)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| MongauditError::MissingEnv {
            name: name.to_string(),
        })
}
