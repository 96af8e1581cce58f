//! Input handling module
//!
//! Commands take their items from positional arguments. With none given,
//! each non-blank stdin line is one item.

use anyhow::{Context, Result};
use std::io::{self, BufRead};

/// Items given on the command line, or read from stdin when there are none
pub fn collect_items(args: &[String]) -> Result<Vec<String>> {
    if !args.is_empty() {
        return Ok(args.to_vec());
    }

    log::debug!("No arguments given, reading items from stdin");
    read_lines(io::stdin().lock())
}

/// Non-blank lines of `reader`, without line terminators
pub fn read_lines<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut items = Vec::new();
    for line in reader.lines() {
        let line = line.context("Failed to read input line")?;
        let line = line.trim_end_matches('\r');
        if !line.trim().is_empty() {
            items.push(line.to_string());
        }
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_arguments_take_precedence() {
        let args = vec!["man".to_string(), "child".to_string()];
        assert_eq!(collect_items(&args).unwrap(), args);
    }

    #[test]
    fn test_read_lines_skips_blank_lines() {
        let input = Cursor::new("Привет\r\n\n   \nмир\n");
        assert_eq!(read_lines(input).unwrap(), vec!["Привет", "мир"]);
    }

    #[test]
    fn test_read_lines_keeps_inner_whitespace() {
        let input = Cursor::new("  sea bass  \n");
        assert_eq!(read_lines(input).unwrap(), vec!["  sea bass  "]);
    }
}
