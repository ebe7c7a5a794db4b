use anyhow::Result;

use super::args::{Cli, CollectionCommand, Commands, PlayCommand};
use super::handlers;
use meeple_runtime::{resolve_workspace_path, Workspace};

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_workspace_path(cli.data_dir.as_deref())?;

    let Some(command) = cli.command else {
        show_guidance();
        return Ok(());
    };

    let workspace = Workspace::open(data_dir)?;

    match command {
        Commands::Login => handlers::login::handle(&workspace),

        Commands::Search { query, exact } => {
            handlers::search::handle(&workspace, &query, exact, cli.format)
        }

        Commands::Play { command } => match command {
            PlayCommand::Add {
                title,
                count,
                date,
                comment,
                no_cache,
                first,
            } => handlers::play_add::handle(
                &workspace, &title, count, date, &comment, no_cache, first,
            ),
            PlayCommand::Summary { days } => {
                handlers::play_summary::handle(&workspace, days, cli.format)
            }
        },

        Commands::Collection { command } => match command {
            CollectionCommand::List { wishlist, tagged } => {
                handlers::collection_list::handle(&workspace, wishlist, tagged, cli.format)
            }
            CollectionCommand::Tag { title, tags, first } => {
                handlers::collection_tag::handle(&workspace, &title, &tags, first)
            }
        },
    }
}

fn show_guidance() {
    println!("meeple - Board game collection and play log client\n");
    println!("Get started:");
    println!("  meeple login                       # Store your credentials");
    println!("  meeple play add <title>            # Log a play");
    println!("  meeple play summary --days 30      # Recent play counts");
    println!("  meeple collection list             # View your collection");
    println!("  meeple collection tag <title> --loan alice\n");
    println!("For more commands:");
    println!("  meeple --help");
}
