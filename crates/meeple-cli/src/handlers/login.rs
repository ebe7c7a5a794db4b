use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use meeple_client::Credentials;
use meeple_runtime::Workspace;

pub fn handle(workspace: &Workspace) -> Result<()> {
    let username = prompt("Username: ")?;
    let password = prompt("Password: ")?;
    let credentials = Credentials { username, password };

    workspace
        .client()
        .login(&credentials)
        .context("login was rejected by the service")?;

    workspace.store_credentials(&credentials)?;
    println!(
        "Saved login for {}. Run {} again to switch accounts.",
        credentials.username.cyan(),
        "meeple login".yellow()
    );
    Ok(())
}

fn prompt(label: &str) -> Result<String> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
