//! # View Rendering
//!
//! Redraws the whole view from the session every time. There is no diffing:
//! the list is rebuilt from the store on each render, like clearing and
//! refilling a `<ul>`.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ Tally · dark theme                           │  header (reverse video in dark)
//! │                                              │
//! │   Notebook                         $3.50     │  one line per item
//! │   Headphones                      $29.99     │
//! │   USB-C Cable                      $8.25     │
//! │                                              │
//! │ Items: 3   Total: $41.74   Average: $13.91   │  summary
//! │ Status: Welcome back, Ada! ...               │  status line
//! │ (c) 2026 Tally                               │  footer
//! └──────────────────────────────────────────────┘
//! ```

use std::io::{self, Write};

use tally_core::Item;

use crate::currency::CurrencyFormatter;
use crate::state::{Session, Theme};

const REVERSE: &str = "\x1b[7m";
const RESET: &str = "\x1b[0m";

/// Minimum width of the name column.
const NAME_WIDTH: usize = 24;

/// Renders the full view: header, list, summary, status and footer.
pub fn render<W: Write>(out: &mut W, session: &Session, fmt: &CurrencyFormatter) -> io::Result<()> {
    render_header(out, session.theme)?;
    writeln!(out)?;
    render_items(out, session.store.items(), fmt)?;
    writeln!(out)?;
    render_summary(out, session, fmt)?;
    render_status(out, &session.status)?;
    writeln!(out, "(c) {} Tally", session.year)?;
    out.flush()
}

/// Renders only the status line.
pub fn render_status<W: Write>(out: &mut W, status: &str) -> io::Result<()> {
    writeln!(out, "Status: {}", status)
}

fn render_header<W: Write>(out: &mut W, theme: Theme) -> io::Result<()> {
    match theme {
        Theme::Dark => writeln!(out, "{}Tally · {} theme{}", REVERSE, theme, RESET),
        Theme::Light => writeln!(out, "Tally · {} theme", theme),
    }
}

fn render_items<W: Write>(out: &mut W, items: &[Item], fmt: &CurrencyFormatter) -> io::Result<()> {
    if items.is_empty() {
        return writeln!(out, "  (no items)");
    }

    for item in items {
        writeln!(
            out,
            "  {:<width$} {:>12}",
            item.name(),
            fmt.format(item.price()),
            width = NAME_WIDTH
        )?;
    }

    Ok(())
}

fn render_summary<W: Write>(
    out: &mut W,
    session: &Session,
    fmt: &CurrencyFormatter,
) -> io::Result<()> {
    let summary = session.store.summary();
    writeln!(
        out,
        "Items: {}   Total: {}   Average: {}",
        summary.count,
        fmt.format(summary.total),
        fmt.format(summary.average)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppConfig;

    fn rendered(session: &Session) -> String {
        let mut buf = Vec::new();
        render(&mut buf, session, &CurrencyFormatter::default()).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_render_seeded_session() {
        let session = Session::new(&AppConfig::default());
        let text = rendered(&session);

        assert!(text.contains("Notebook"));
        assert!(text.contains("$29.99"));
        assert!(text.contains("Items: 3   Total: $41.74   Average: $13.91"));
        assert!(text.contains("Status: Welcome back, Ada! Your membership is active."));
        assert!(text.contains(&format!("(c) {} Tally", session.year)));
    }

    #[test]
    fn test_render_keeps_item_order() {
        let session = Session::new(&AppConfig::default());
        let text = rendered(&session);

        let notebook = text.find("Notebook").unwrap();
        let headphones = text.find("Headphones").unwrap();
        let cable = text.find("USB-C Cable").unwrap();
        assert!(notebook < headphones && headphones < cable);
    }

    #[test]
    fn test_render_empty_list() {
        let mut session = Session::new(&AppConfig::default());
        session.store.clear();
        let text = rendered(&session);

        assert!(text.contains("(no items)"));
        assert!(text.contains("Items: 0   Total: $0.00   Average: $0.00"));
    }

    #[test]
    fn test_theme_header() {
        let mut session = Session::new(&AppConfig::default());
        assert!(rendered(&session).contains(REVERSE));

        session.theme = Theme::Light;
        let text = rendered(&session);
        assert!(!text.contains(REVERSE));
        assert!(text.starts_with("Tally · light theme"));
    }
}
