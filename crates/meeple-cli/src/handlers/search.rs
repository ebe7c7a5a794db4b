use anyhow::Result;

use crate::types::OutputFormat;
use crate::views;
use meeple_runtime::Workspace;

pub fn handle(workspace: &Workspace, query: &str, exact: bool, format: OutputFormat) -> Result<()> {
    let games = workspace.client().search(query, exact)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&games)?),
        OutputFormat::Plain => {
            if games.is_empty() {
                println!("No items found!");
            } else {
                for game in &games {
                    println!("{}", views::game::search_row(game));
                }
            }
        }
    }

    Ok(())
}
