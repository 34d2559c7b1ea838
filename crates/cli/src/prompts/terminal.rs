use std::io::{stdin, stdout, BufRead, IsTerminal, Write};

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{cursor, queue};
use log::debug;
use struggle_core::error::Result;

use super::input::Prompter;

struct RawModeGuard;

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        // Disable raw mode on drop
        let _ = disable_raw_mode();
    }
}

/// Reads answers from the terminal.
///
/// On a TTY keys are read in raw mode so Ctrl-C and Ctrl-D come back as a
/// cancellation instead of killing the process. Piped input is read line by
/// line and end of input counts as a cancellation.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        let mut stdout = stdout();
        queue!(stdout, Print(prompt))?;
        stdout.flush()?;

        if stdin().is_terminal() {
            read_raw_line()
        } else {
            read_buffered_line()
        }
    }
}

fn read_raw_line() -> Result<Option<String>> {
    let mut stdout = stdout();
    let mut line = String::new();

    enable_raw_mode()?;
    let _raw_mode_guard = RawModeGuard; // When this goes out of scope, raw mode is disabled

    loop {
        let Event::Key(key_event) = event::read()? else {
            continue;
        };

        if key_event.kind != KeyEventKind::Press {
            continue;
        }

        match key_event.code {
            KeyCode::Enter => {
                queue!(stdout, Print("\r\n"))?;
                stdout.flush()?;
                return Ok(Some(line));
            }
            KeyCode::Char('c' | 'd') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                debug!("Input cancelled from the keyboard");
                queue!(stdout, Print("\r\n"))?;
                stdout.flush()?;
                return Ok(None);
            }
            KeyCode::Backspace => {
                if line.pop().is_some() {
                    queue!(stdout, cursor::MoveLeft(1), Print(' '), cursor::MoveLeft(1))?;
                }
            }
            KeyCode::Char(c) => {
                line.push(c);
                queue!(stdout, Print(c))?;
            }
            _ => {}
        }

        stdout.flush()?;
    }
}

fn read_buffered_line() -> Result<Option<String>> {
    let mut input = String::new();
    let bytes_read = stdin().lock().read_line(&mut input)?;

    if bytes_read == 0 {
        debug!("End of input reached while prompting");
        return Ok(None);
    }

    Ok(Some(input.trim_end_matches(['\r', '\n']).to_string()))
}
