//! `routerbits session` command.

use std::path::Path;

use tracing::error;

use crate::cli::OutputFormat;
use crate::context::ServiceContext;
use crate::session::{execute, load_script};
use crate::store::{RouterBitStore, Snapshot};

/// Execute the `session` command.
///
/// Loads the script (or stdin), subscribes a printer to a fresh store and
/// runs every operation. The printer fires once for the empty collection
/// and once per operation.
///
/// # Errors
///
/// Returns an error string if the script cannot be loaded or a step fails.
pub fn run(
    ctx: &ServiceContext,
    script: Option<&Path>,
    format: OutputFormat,
) -> Result<(), String> {
    let operations = load_script(script).map_err(|e| e.to_string())?;

    let mut store = RouterBitStore::new(ctx);
    let mut seq = 0usize;
    store.subscribe(move |snapshot| {
        match format {
            OutputFormat::Text => print!("{}", format_table(seq, snapshot)),
            OutputFormat::Json => match format_json(snapshot) {
                Ok(line) => println!("{line}"),
                Err(e) => error!(snapshot = seq, "{e}"),
            },
        }
        seq += 1;
    });

    execute(&mut store, &operations).map_err(|e| e.to_string())
}

/// Renders one snapshot as a header line followed by an aligned table.
fn format_table(seq: usize, snapshot: &Snapshot) -> String {
    let mut out = format!("Snapshot {seq}: {} router bit(s)\n", snapshot.len());
    if snapshot.is_empty() {
        out.push('\n');
        return out;
    }

    let rows: Vec<[String; 5]> = snapshot
        .iter()
        .map(|bit| {
            [
                bit.id.clone(),
                bit.name.clone(),
                bit.bit_type.clone(),
                bit.diameter.to_string(),
                bit.description.clone(),
            ]
        })
        .collect();
    let headers = ["ID", "NAME", "TYPE", "DIAMETER", "DESCRIPTION"];

    let mut widths = headers.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let line = |cells: [&str; 5]| -> String {
        let joined: Vec<String> =
            cells.iter().zip(widths).map(|(cell, width)| format!("{cell:<width$}")).collect();
        format!("{}\n", joined.join("  ").trim_end())
    };

    let rule: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();

    out.push_str(&line(headers));
    out.push_str(&rule.join("  "));
    out.push('\n');
    for row in &rows {
        out.push_str(&line([
            row[0].as_str(),
            row[1].as_str(),
            row[2].as_str(),
            row[3].as_str(),
            row[4].as_str(),
        ]));
    }
    out.push('\n');
    out
}

fn format_json(snapshot: &Snapshot) -> Result<String, String> {
    serde_json::to_string(&**snapshot).map_err(|e| format!("Failed to serialize snapshot: {e}"))
}
