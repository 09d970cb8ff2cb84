//! # Input Parsing
//!
//! Each input line stands in for one page event.
//!
//! ```text
//! "add USB-C Cable 8.25"  ──► Command::Add { name: "USB-C Cable", price: "8.25" }
//! "add Pen"               ──► Command::Add { name: "Pen", price: "" }
//! "clear"                 ──► Command::Clear
//! ""                      ──► None (ignored)
//! ```
//!
//! Parsing never validates item fields: the store does that, so the user
//! sees the same messages as for any other bad form input.

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Form submit: raw name and raw price fields.
    Add { name: String, price: String },
    /// Clear button.
    Clear,
    /// Theme toggle button.
    ToggleTheme,
    /// Re-render the list and summary.
    List,
    /// Print the list as JSON.
    Json,
    /// Print the command reference.
    Help,
    /// End the session.
    Quit,
    /// Anything else; carries the offending word.
    Unknown(String),
}

/// Help text printed by the `help` command.
pub const HELP: &str = "\
Commands:
  add <name> <price>   add an item (price is the last word)
  clear                remove every item
  theme                toggle light / dark theme
  list                 show the list again
  json                 print the list as JSON
  help                 show this help
  quit                 exit";

/// Parses one input line. Blank lines yield `None`.
pub fn parse_line(line: &str) -> Option<Command> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_lowercase().as_str() {
        "add" | "a" => parse_add(rest),
        "clear" => Command::Clear,
        "theme" | "toggle" => Command::ToggleTheme,
        "list" | "ls" | "show" => Command::List,
        "json" => Command::Json,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ => Command::Unknown(word.to_string()),
    };

    Some(command)
}

/// Splits `add` arguments: the last word is the price, the rest the name.
fn parse_add(args: &str) -> Command {
    let (name, price) = match args.rsplit_once(char::is_whitespace) {
        Some((name, price)) => (name.trim(), price),
        None => (args, ""),
    };

    Command::Add {
        name: name.to_string(),
        price: price.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(name: &str, price: &str) -> Command {
        Command::Add {
            name: name.to_string(),
            price: price.to_string(),
        }
    }

    #[test]
    fn test_blank_lines_are_ignored() {
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("   \t"), None);
    }

    #[test]
    fn test_parse_add() {
        assert_eq!(parse_line("add Mouse 19.99"), Some(add("Mouse", "19.99")));
        assert_eq!(
            parse_line("add USB-C Cable 8.25"),
            Some(add("USB-C Cable", "8.25"))
        );
        assert_eq!(
            parse_line("  ADD   Desk   Lamp   24.5  "),
            Some(add("Desk   Lamp", "24.5"))
        );
    }

    #[test]
    fn test_parse_add_missing_fields() {
        assert_eq!(parse_line("add Pen"), Some(add("Pen", "")));
        assert_eq!(parse_line("add"), Some(add("", "")));
    }

    #[test]
    fn test_parse_add_keeps_bad_price_raw() {
        assert_eq!(parse_line("add Pen abc"), Some(add("Pen", "abc")));
        assert_eq!(parse_line("add Pen -1"), Some(add("Pen", "-1")));
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(parse_line("clear"), Some(Command::Clear));
        assert_eq!(parse_line("theme"), Some(Command::ToggleTheme));
        assert_eq!(parse_line("list"), Some(Command::List));
        assert_eq!(parse_line("json"), Some(Command::Json));
        assert_eq!(parse_line("help"), Some(Command::Help));
        assert_eq!(parse_line("exit"), Some(Command::Quit));
        assert_eq!(parse_line("Quit"), Some(Command::Quit));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            parse_line("dance now"),
            Some(Command::Unknown("dance".to_string()))
        );
    }
}
