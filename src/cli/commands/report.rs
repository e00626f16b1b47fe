use std::io::Write;

use crate::adapters::store::mongo_store::MongoLogStore;
use crate::cli::{Cli, output, render};
use crate::config::app_config::AppConfig;
use crate::core::errors::Result;
use crate::core::models::date_range::DateRange;
use crate::core::models::log_query::LogQuery;
use crate::core::services::extract_service::ExtractService;
use crate::core::traits::log_store::LogStore;

/// Execute the report: resolve the date range, fetch matching log
/// entries, extract their change-log messages and pretty-print the ones
/// matching the requested action.
pub fn execute(args: &Cli) -> Result<()> {
    // Usage errors win over configuration errors: validate the range first
    let range_string = args
        .range
        .clone()
        .unwrap_or_else(DateRange::today_through_tomorrow);
    let range = DateRange::parse(&range_string)?;
    let query = LogQuery::new(range, args.last);

    let config = AppConfig::from_env()?;
    if args.verbose {
        output::header(&format!(
            "mongaudit — {}/{} ({range_string}, up to {} entries)",
            config.database, config.collection, args.last
        ));
    }

    let store = MongoLogStore::new(&config);
    let sp = output::spinner(&format!("Querying {}...", config.collection));
    let docs = store.fetch(&query)?;
    output::finish_spinner(sp, &format!("{} log entries fetched", docs.len()));

    let report = ExtractService.extract(&docs);
    for skip in &report.skipped {
        output::warning(&format!(
            "Skipping malformed entry #{}: {}",
            skip.index, skip.detail
        ));
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for message in &report.messages {
        if !args.action.matches(message.action()) {
            continue;
        }
        // Flush per entry so blocks stay contiguous next to stderr diagnostics
        out.write_all(render::entry(message)?.as_bytes())?;
        out.flush()?;
    }

    Ok(())
}
