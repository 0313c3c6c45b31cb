//! UI utilities for the chat CLI

use colored::*;
use crossterm::{
    cursor::MoveTo,
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{Clear, ClearType, disable_raw_mode, enable_raw_mode, size},
};
use std::io::{self, IsTerminal, Write};

use docchat_core::Result;

/// One read from the user
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Line(String),
    /// Ctrl+C
    Interrupted,
    /// stdin closed (piped input exhausted)
    Eof,
}

/// Display the startup banner
pub fn display_banner() {
    let terminal_width = size().map(|(w, _)| w as usize).unwrap_or(80);
    let banner_width = std::cmp::min(60, terminal_width.saturating_sub(4));

    let top_border = format!("┌{}┐", "─".repeat(banner_width - 2));
    let bottom_border = format!("└{}┘", "─".repeat(banner_width - 2));
    let empty_line = format!("│{}│", " ".repeat(banner_width - 2));

    let title = "DocChat - Pergunte sobre o documento PDF";
    let title_line = format!(
        "│  {}{}│",
        title.blue().bold(),
        " ".repeat(banner_width.saturating_sub(title.chars().count() + 3))
    );

    println!();
    println!("{}", top_border.blue());
    println!("{}", empty_line.blue());
    println!("{}", title_line);
    println!("{}", empty_line.blue());
    println!("{}", bottom_border.blue());
    println!();
    println!("{}", "Digite 'sair', 'exit' ou 'quit' para encerrar".dimmed());
    println!("{}", "Digite 'limpar' ou 'clear' para limpar a tela".dimmed());
    println!();
}

/// Clear the terminal and move the cursor home
pub fn clear_screen() -> Result<()> {
    execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
    Ok(())
}

fn prompt_label() -> ColoredString {
    "PERGUNTA:".blue().bold()
}

/// Read one line of input with command history navigation.
///
/// Interactive terminals get a raw-mode keystroke loop (printable insert,
/// backspace, ↑/↓ history, Esc clears the line, Ctrl+C interrupts). Piped
/// stdin falls back to a plain line read.
pub fn read_input(history: &mut Vec<String>) -> Result<Input> {
    if !io::stdin().is_terminal() {
        let mut input = String::new();
        let bytes = io::stdin().read_line(&mut input)?;
        if bytes == 0 {
            return Ok(Input::Eof);
        }
        let input = input.trim().to_string();
        if !input.is_empty() {
            history.push(input.clone());
        }
        return Ok(Input::Line(input));
    }

    enable_raw_mode()?;
    let mut input = String::new();
    let mut history_index: Option<usize> = None;

    print!("{} ", prompt_label());
    io::stdout().flush()?;

    loop {
        if let Event::Key(key_event) = event::read()? {
            match key_event.code {
                KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                    disable_raw_mode()?;
                    println!();
                    return Ok(Input::Interrupted);
                }
                KeyCode::Enter => {
                    disable_raw_mode()?;
                    println!();
                    let input = input.trim().to_string();
                    if !input.is_empty() {
                        history.push(input.clone());
                    }
                    return Ok(Input::Line(input));
                }
                KeyCode::Char(c) => {
                    input.push(c);
                    print!("\r{} {}", prompt_label(), input);
                    io::stdout().flush()?;
                }
                KeyCode::Backspace => {
                    if input.pop().is_some() {
                        print!("\r{} {}  \r{} {}", prompt_label(), input, prompt_label(), input);
                        io::stdout().flush()?;
                    }
                }
                KeyCode::Up => {
                    if !history.is_empty() {
                        let new_index = match history_index {
                            None => history.len() - 1,
                            Some(idx) if idx > 0 => idx - 1,
                            Some(idx) => idx,
                        };
                        history_index = Some(new_index);
                        input = history[new_index].clone();
                        print!(
                            "\r{} {}  \r{} {}",
                            prompt_label(),
                            " ".repeat(60),
                            prompt_label(),
                            input
                        );
                        io::stdout().flush()?;
                    }
                }
                KeyCode::Down => {
                    if let Some(idx) = history_index {
                        if idx < history.len() - 1 {
                            let new_index = idx + 1;
                            history_index = Some(new_index);
                            input = history[new_index].clone();
                        } else {
                            history_index = None;
                            input.clear();
                        }
                        print!(
                            "\r{} {}  \r{} {}",
                            prompt_label(),
                            " ".repeat(60),
                            prompt_label(),
                            input
                        );
                        io::stdout().flush()?;
                    }
                }
                KeyCode::Esc => {
                    input.clear();
                    history_index = None;
                    print!("\r{} {}  \r{} ", prompt_label(), " ".repeat(60), prompt_label());
                    io::stdout().flush()?;
                }
                _ => {}
            }
        }
    }
}
