/// All domain errors for mongaudit.
///
/// Each variant provides enough context to diagnose the issue
/// without needing a debugger.
#[derive(Debug, thiserror::Error)]
pub enum MongauditError {
    #[error(
        "Wrong date range: {detail}\n\n  \
         Expected format: YYYY-MM-DD_YYYY-MM-DD, e.g. 2026-08-01_2026-08-02\n  \
         Both dates must be valid calendar dates."
    )]
    InvalidRange { detail: String },

    #[error(
        "Missing environment variable: {name}\n\n  \
         mongaudit needs MONGODB_URI, MONGODB_NAME and MONGODB_COLL_NAME.\n  \
         Export them or put them in a .env file in the working directory."
    )]
    MissingEnv { name: String },

    #[error(
        "Database error: {source}\n\n  \
         Check that MONGODB_URI points to a reachable server and that\n  \
         the credentials in it are valid."
    )]
    Database {
        #[from]
        source: mongodb::error::Error,
    },

    #[error("Failed to render entry: {detail}")]
    RenderFailed { detail: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MongauditError>;
