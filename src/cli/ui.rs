//! Shared UI primitives for pincmd
//!
//! Conventions:
//! - Prompts: lowercase with colon and space: `label: `
//! - Feedback: single word when possible: `Deleted.`

use anyhow::Result;
use crossterm::{
    cursor,
    terminal::{Clear, ClearType},
    ExecutableCommand,
};
use inquire::{ui::RenderConfig, Confirm, InquireError, Select, Text};
use std::io::{self, Write};

// ============================================================================
// Message Functions
// ============================================================================

/// Print a warning message to stderr
#[inline]
pub fn warning(msg: &str) {
    eprintln!("Warning: {}", msg);
}

/// Truncate a string to max_chars, adding ellipsis if needed
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    if max_chars == 0 {
        return String::new();
    }
    let text: String = s.chars().take(max_chars - 1).collect();
    format!("{}…", text.trim_end())
}

// ============================================================================
// Terminal
// ============================================================================

/// Clear the terminal screen and move cursor to top-left
pub fn clear_screen() -> Result<()> {
    let mut stdout = io::stdout();
    stdout.execute(Clear(ClearType::All))?;
    stdout.execute(cursor::MoveTo(0, 0))?;
    stdout.flush()?;
    Ok(())
}

/// Get terminal dimensions, defaulting to 80x24 if unavailable
pub fn term_size() -> (usize, usize) {
    crossterm::terminal::size()
        .map(|(w, h)| (w as usize, h as usize))
        .unwrap_or((80, 24))
}

/// Number of rows a select list can use
pub fn visible_lines() -> usize {
    let (_, height) = term_size();
    height.saturating_sub(4).max(5)
}

// ============================================================================
// Prompts
// ============================================================================

/// Get a minimal render config for inquire prompts
pub fn minimal_render_config() -> RenderConfig<'static> {
    RenderConfig::default_colored()
        .with_prompt_prefix(inquire::ui::Styled::new(""))
        .with_answered_prompt_prefix(inquire::ui::Styled::new(""))
}

/// Prompt for yes/no confirmation (default: no)
pub fn confirm(prompt: &str) -> Result<bool> {
    let result = Confirm::new(prompt)
        .with_render_config(minimal_render_config())
        .with_default(false)
        .prompt();

    match result {
        Ok(answer) => Ok(answer),
        Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => Ok(false),
        Err(e) => Err(e.into()),
    }
}

/// Display a selection menu and return the chosen index
pub fn select(prompt: &str, options: &[String]) -> Result<Option<usize>> {
    if options.is_empty() {
        return Ok(None);
    }

    let result = Select::new(prompt, options.to_vec())
        .with_render_config(minimal_render_config())
        .with_page_size(visible_lines())
        .with_vim_mode(true)
        .raw_prompt_skippable()?;

    Ok(result.map(|choice| choice.index))
}

/// Result type for form inputs that can be cancelled
pub enum FormResult<T> {
    Value(T),
    Cancelled,
}

/// Ask for a pin label. Empty input cancels, like dismissing the dialog.
pub fn prompt_label() -> Result<FormResult<String>> {
    let result = Text::new("label: ")
        .with_render_config(minimal_render_config())
        .with_placeholder("e.g. favorite café, dream destination")
        .prompt();

    match result {
        Ok(input) if input.trim().is_empty() => Ok(FormResult::Cancelled),
        Ok(input) => Ok(FormResult::Value(input.trim().to_string())),
        Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => {
            Ok(FormResult::Cancelled)
        }
        Err(e) => Err(e.into()),
    }
}

/// Ask for a coordinate. Re-prompts on anything that isn't a finite number.
pub fn prompt_coordinate(field: &str) -> Result<FormResult<f64>> {
    let prompt = format!("{}: ", field);

    loop {
        let result = Text::new(&prompt)
            .with_render_config(minimal_render_config())
            .prompt();

        match result {
            Ok(input) if input.trim().is_empty() => return Ok(FormResult::Cancelled),
            Ok(input) => match parse_coordinate(&input) {
                Some(value) => return Ok(FormResult::Value(value)),
                None => warning(&format!("'{}' is not a number.", input.trim())),
            },
            Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => {
                return Ok(FormResult::Cancelled)
            }
            Err(e) => return Err(e.into()),
        }
    }
}

/// Parse a typed coordinate, accepting a trailing degree sign
pub fn parse_coordinate(input: &str) -> Option<f64> {
    let value: f64 = input.trim().trim_end_matches('°').trim().parse().ok()?;
    value.is_finite().then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer label", 8), "a longe…");
        assert_eq!(truncate("anything", 0), "");
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate("Café du Monde", 5), "Café…");
    }

    #[test]
    fn test_parse_coordinate() {
        assert_eq!(parse_coordinate(" 51.5 "), Some(51.5));
        assert_eq!(parse_coordinate("-0.1°"), Some(-0.1));
        assert_eq!(parse_coordinate("north"), None);
        assert_eq!(parse_coordinate("NaN"), None);
        assert_eq!(parse_coordinate("inf"), None);
    }
}
