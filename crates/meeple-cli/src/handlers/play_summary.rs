use anyhow::Result;
use serde_json::json;

use crate::types::OutputFormat;
use crate::views;
use meeple_runtime::Workspace;

pub fn handle(workspace: &Workspace, days: Option<u32>, format: OutputFormat) -> Result<()> {
    let totals = workspace.play_summary(days)?;

    match format {
        OutputFormat::Json => {
            let rows: Vec<serde_json::Value> = totals
                .iter()
                .map(|(name, plays)| json!({ "name": name, "plays": plays }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        OutputFormat::Plain => {
            if totals.is_empty() {
                println!("No plays logged yet.");
            }
            for (name, plays) in &totals {
                println!("{}", views::summary::summary_row(name, *plays));
            }
        }
    }

    Ok(())
}
