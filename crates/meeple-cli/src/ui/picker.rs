use std::io::{self, Write};

use anyhow::{bail, Result};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::{cursor, QueueableCommand};
use is_terminal::IsTerminal;

/// Arrow-key list picker on the alternate screen. Returns the selected
/// index, or `None` if the user backed out with Esc/q.
pub fn select(header: &str, rows: &[String]) -> Result<Option<usize>> {
    if rows.is_empty() {
        return Ok(None);
    }
    if !io::stdout().is_terminal() || !io::stdin().is_terminal() {
        bail!("interactive selection needs a terminal; pass --first to take the top match");
    }

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    stdout.queue(terminal::EnterAlternateScreen)?;
    stdout.queue(cursor::Hide)?;

    let result = run_picker(&mut stdout, header, rows);

    // Restore the terminal even when the picker loop failed
    let _ = stdout.queue(cursor::Show);
    let _ = stdout.queue(terminal::LeaveAlternateScreen);
    let _ = stdout.flush();
    let _ = terminal::disable_raw_mode();

    result
}

fn run_picker(stdout: &mut io::Stdout, header: &str, rows: &[String]) -> Result<Option<usize>> {
    let mut focus = 0usize;

    loop {
        draw(stdout, header, rows, focus)?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Up => focus = if focus == 0 { rows.len() - 1 } else { focus - 1 },
                KeyCode::Down => focus = if focus + 1 == rows.len() { 0 } else { focus + 1 },
                KeyCode::Enter => return Ok(Some(focus)),
                KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => return Ok(None),
                _ => {}
            }
        }
    }
}

fn draw(stdout: &mut io::Stdout, header: &str, rows: &[String], focus: usize) -> Result<()> {
    stdout.queue(Clear(ClearType::All))?;
    stdout.queue(cursor::MoveTo(0, 0))?;
    stdout.queue(SetAttribute(Attribute::Bold))?;
    stdout.queue(Print(header))?;
    stdout.queue(SetAttribute(Attribute::Reset))?;

    for (index, row) in rows.iter().enumerate() {
        stdout.queue(cursor::MoveTo(0, (index + 1) as u16))?;
        if index == focus {
            stdout.queue(SetAttribute(Attribute::Reverse))?;
            stdout.queue(Print(row))?;
            stdout.queue(SetAttribute(Attribute::Reset))?;
        } else {
            stdout.queue(Print(row))?;
        }
    }

    stdout.flush()?;
    Ok(())
}
