use anyhow::Result;
use chrono::{Local, NaiveDate};
use owo_colors::OwoColorize;

use crate::ui::picker;
use meeple_runtime::Workspace;
use meeple_types::GameSummary;

pub fn handle(
    workspace: &Workspace,
    title: &str,
    count: u32,
    date: Option<NaiveDate>,
    comment: &str,
    no_cache: bool,
    first: bool,
) -> Result<()> {
    let mut cache = workspace.open_cache();
    let threshold = workspace.config().cache.auto_select_threshold;

    let selected: GameSummary = if !no_cache
        && let Some(entry) = cache.auto_select(title, threshold)
    {
        entry.to_summary()
    } else {
        let games = workspace.client().search(title, false)?;
        match pick_game(&games, first)? {
            Some(game) => game,
            None => return Ok(()),
        }
    };

    let date = date.unwrap_or_else(|| Local::now().date_naive());
    let plays_word = if count > 1 { "plays" } else { "play" };
    println!(
        "Adding {} to {}...",
        format!("{} {}", count, plays_word).cyan(),
        selected.label().yellow()
    );

    workspace.log_play(&selected, date, count, comment)?;
    let confirmation = if count > 1 { "Plays added!" } else { "Play added!" };
    println!("{}", confirmation.green());

    cache.record_pick(title, &selected);
    if let Err(err) = cache.save() {
        eprintln!("Warning: could not update the search cache: {}", err);
    }

    Ok(())
}

fn pick_game(games: &[GameSummary], first: bool) -> Result<Option<GameSummary>> {
    match games {
        [] => {
            println!("No items found!");
            Ok(None)
        }
        [only] => Ok(Some(only.clone())),
        _ if first => Ok(Some(games[0].clone())),
        _ => {
            let rows: Vec<String> = games.iter().map(|game| format!("-> {}", game.label())).collect();
            Ok(picker::select("Select a game", &rows)?.map(|index| games[index].clone()))
        }
    }
}
