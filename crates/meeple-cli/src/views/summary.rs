use owo_colors::OwoColorize;

/// One play-summary line: `- {game}: {plays}`.
pub fn summary_row(name: &str, plays: u32) -> String {
    format!("- {}: {}", name.yellow(), plays.cyan())
}
