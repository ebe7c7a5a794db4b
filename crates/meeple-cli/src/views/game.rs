use owo_colors::OwoColorize;

use meeple_types::GameSummary;

/// One search result line: `-> {name} ({year}) - ID: {id}`.
pub fn search_row(game: &GameSummary) -> String {
    match &game.year {
        Some(year) => format!(
            "-> {} ({}) - ID: {}",
            game.name.yellow(),
            year,
            game.id.cyan()
        ),
        None => format!("-> {} - ID: {}", game.name.yellow(), game.id.cyan()),
    }
}
