use colored::Colorize;
use mongodb::bson::Document;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::core::errors::{MongauditError, Result};
use crate::core::models::message::Message;

/// Width of the separator line printed after every entry.
const SEPARATOR_WIDTH: usize = 100;

/// Minimum column width in the entry tables.
const MIN_COLUMN_WIDTH: usize = 8;

/// Render one message as a complete report block, separator included.
///
/// Each block is a two-row aligned table (DATE, USER, ACTION, MODEL NAME
/// and the action's key column), the highlighted data labels with their
/// payloads, and a trailing dash separator. Building the whole block as
/// one string keeps its lines contiguous on the output stream.
pub fn entry(message: &Message) -> Result<String> {
    let mut out = String::new();
    let action = message.action().as_str();

    match message {
        Message::Delete {
            time,
            user,
            model_name,
            pk,
            object_name,
        } => {
            out.push_str(&table(
                ["DATE", "USER", "ACTION", "MODEL NAME", "PK"],
                [time, user, action, model_name, pk],
            ));
            out.push_str(&format!("  {}\n", "OBJECT NAME:".bright_red()));
            out.push_str(&format!("{object_name}\n\n"));
        }
        Message::Add {
            time,
            user,
            model_name,
            fk,
            new_data,
        } => {
            out.push_str(&table(
                ["DATE", "USER", "ACTION", "MODEL NAME", "FK"],
                [time, user, action, model_name, fk],
            ));
            out.push_str(&format!("  {}\n", "NEW DATA:".bright_green()));
            out.push_str(&pretty_json(new_data)?);
            out.push_str("\n\n");
        }
        Message::Update {
            time,
            user,
            model_name,
            pk,
            old_data,
            new_data,
        } => {
            out.push_str(&table(
                ["DATE", "USER", "ACTION", "MODEL NAME", "PK"],
                [time, user, action, model_name, pk],
            ));
            out.push_str(&format!("  {}\n", "OLD DATA:".bright_yellow()));
            out.push_str(&pretty_json(old_data)?);
            out.push_str("\n\n");
            out.push_str(&format!("  {}\n", "NEW DATA:".bright_green()));
            out.push_str(&pretty_json(new_data)?);
            out.push_str("\n\n");
        }
    }

    out.push_str(&"-".repeat(SEPARATOR_WIDTH));
    out.push('\n');
    Ok(out)
}

/// Two-row aligned table: header row above value row.
///
/// Column widths adapt to the longer of header and value; cells are
/// joined with ` | `.
fn table(headers: [&str; 5], values: [&str; 5]) -> String {
    let widths: Vec<usize> = headers
        .iter()
        .zip(&values)
        .map(|(h, v)| h.chars().count().max(v.chars().count()).max(MIN_COLUMN_WIDTH))
        .collect();

    let mut out = String::from("\n");
    out.push_str(&row(&headers, &widths));
    out.push_str(&row(&values, &widths));
    out.push('\n');
    out
}

fn row(cells: &[&str; 5], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, w)| format!("{cell:<w$}"))
        .collect();
    format!("{}\n", padded.join(" | ").trim_end())
}

/// Serialize a payload document as JSON with 4-space indentation.
fn pretty_json(payload: &Document) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);

    payload
        .serialize(&mut ser)
        .map_err(|e| MongauditError::RenderFailed {
            detail: format!("payload is not valid JSON: {e}"),
        })?;

    String::from_utf8(buf).map_err(|e| MongauditError::RenderFailed {
        detail: format!("payload is not valid UTF-8: {e}"),
    })
}
