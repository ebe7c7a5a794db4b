use anyhow::Result;

use crate::types::OutputFormat;
use crate::views;
use meeple_runtime::Workspace;
use meeple_types::TagSet;

pub fn handle(
    workspace: &Workspace,
    wishlist: bool,
    tagged: bool,
    format: OutputFormat,
) -> Result<()> {
    let mut items = workspace.collection(wishlist)?;

    if tagged {
        items.retain(|item| !TagSet::parse(item.comment.as_deref()).is_empty());
    }

    match format {
        OutputFormat::Json => {
            let rows: Vec<serde_json::Value> =
                items.iter().map(views::collection::json_row).collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        OutputFormat::Plain => {
            if items.is_empty() {
                println!("No collection entries.");
            }
            for item in &items {
                println!("{}", views::collection::row(item));
            }
        }
    }

    Ok(())
}
