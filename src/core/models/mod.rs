pub mod date_range;
pub mod extract_report;
pub mod log_query;
pub mod message;
