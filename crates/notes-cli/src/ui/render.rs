//! Rendering primitives for CLI output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::{ASCII_MARKDOWN, UTF8_FULL};
use comfy_table::{ContentArrangement, Table as ComfyTable};

use super::context::UiContext;
use super::theme::{styled, styles, Badge};

/// Render a badge with optional message.
pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let colored_badge = styled(kind.display(ctx.unicode), kind.style(), ctx.color);

    if message.is_empty() {
        colored_badge
    } else {
        format!("{} {}", colored_badge, message)
    }
}

/// Render a key-value pair.
///
/// Pretty mode: "Key: value" with dim key
/// Plain mode: "key=value"
pub fn kv(ctx: &UiContext, key: &str, value: &str) -> String {
    if ctx.mode.is_pretty() {
        let styled_key = styled(&format!("{}:", key), styles::dim(), ctx.color);
        format!("{} {}", styled_key, value)
    } else {
        format!("{}={}", key.to_lowercase().replace(' ', "_"), value)
    }
}

/// Render a hint line.
pub fn hint(ctx: &UiContext, text: &str) -> String {
    if ctx.mode.is_pretty() {
        let label = styled("Hint:", styles::dim(), ctx.color);
        format!("{} {}", label, text)
    } else {
        format!("hint={}", text)
    }
}

/// Render a receipt (summary block after an action).
///
/// Pretty mode: badge + indented key-value pairs
/// Plain mode: `status=ok` + `key=value` lines
pub fn receipt(ctx: &UiContext, title: &str, items: &[(&str, &str)]) -> String {
    let mut lines = Vec::with_capacity(items.len() + 1);

    if ctx.mode.is_pretty() {
        lines.push(badge(ctx, Badge::Ok, title));
        for (key, value) in items {
            lines.push(format!("  {}", kv(ctx, key, value)));
        }
    } else {
        lines.push("status=ok".to_string());
        for (key, value) in items {
            lines.push(kv(ctx, key, value));
        }
    }

    lines.join("\n")
}

/// Column definition for table rendering.
#[derive(Debug, Clone)]
pub struct Column {
    pub header: &'static str,
}

impl Column {
    pub const fn new(header: &'static str) -> Self {
        Self { header }
    }
}

/// Render a table.
///
/// Pretty mode: bordered comfy-table
/// Plain mode: space-separated values, no header
pub fn table(ctx: &UiContext, columns: &[Column], rows: &[Vec<String>]) -> String {
    if !ctx.mode.is_pretty() {
        return rows
            .iter()
            .map(|row| row.join(" "))
            .collect::<Vec<_>>()
            .join("\n");
    }

    let mut table = ComfyTable::new();
    if ctx.unicode {
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS);
    } else {
        table.load_preset(ASCII_MARKDOWN);
    }
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(columns.iter().map(|c| c.header).collect::<Vec<_>>());
    for row in rows {
        table.add_row(row);
    }
    table.to_string()
}

/// Print a message unless JSON output is selected.
pub fn print(ctx: &UiContext, message: &str) {
    if !ctx.mode.is_json() {
        println!("{}", message);
    }
}

/// Format an error message with optional hint.
///
/// Pretty mode: "[ERR] message" with optional "Hint: ..." on the next line
/// Plain mode: "error=message" with optional "hint=suggestion"
pub fn error_message(ctx: &UiContext, message: &str, error_hint: Option<&str>) -> String {
    let mut lines = Vec::new();

    if ctx.mode.is_pretty() {
        lines.push(badge(ctx, Badge::Err, message));
        if let Some(h) = error_hint {
            lines.push(hint(ctx, h));
        }
    } else {
        lines.push(format!("error={}", message));
        if let Some(h) = error_hint {
            lines.push(format!("hint={}", h));
        }
    }

    lines.join("\n")
}

/// Print an error message to stderr with optional hint.
pub fn print_error(ctx: &UiContext, message: &str, error_hint: Option<&str>) {
    eprintln!("{}", error_message(ctx, message, error_hint));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::OutputMode;

    fn plain_ctx() -> UiContext {
        UiContext {
            color: false,
            unicode: false,
            mode: OutputMode::Plain,
        }
    }

    fn pretty_ctx() -> UiContext {
        UiContext {
            color: false,
            unicode: true,
            mode: OutputMode::Pretty,
        }
    }

    #[test]
    fn test_badge_plain() {
        let b = badge(&plain_ctx(), Badge::Ok, "Saved");
        assert_eq!(b, "[OK] Saved");
    }

    #[test]
    fn test_kv_pretty() {
        let line = kv(&pretty_ctx(), "Title", "grocery");
        assert_eq!(line, "Title: grocery");
    }

    #[test]
    fn test_kv_plain() {
        let line = kv(&plain_ctx(), "Log Path", "/tmp/x.enc");
        assert_eq!(line, "log_path=/tmp/x.enc");
    }

    #[test]
    fn test_hint_modes() {
        assert_eq!(hint(&plain_ctx(), "run it"), "hint=run it");
        assert_eq!(hint(&pretty_ctx(), "run it"), "Hint: run it");
    }

    #[test]
    fn test_receipt_plain() {
        let r = receipt(&plain_ctx(), "Saved note", &[("Title", "grocery")]);
        assert_eq!(r, "status=ok\ntitle=grocery");
    }

    #[test]
    fn test_receipt_pretty() {
        let r = receipt(&pretty_ctx(), "Saved note", &[("Title", "grocery")]);
        assert!(r.contains("[\u{2713}] Saved note"));
        assert!(r.contains("  Title: grocery"));
    }

    #[test]
    fn test_table_plain_is_one_row_per_line() {
        let columns = [Column::new("Title")];
        let rows = vec![vec!["a".to_string()], vec!["b".to_string()]];
        assert_eq!(table(&plain_ctx(), &columns, &rows), "a\nb");
    }

    #[test]
    fn test_table_pretty_has_header() {
        let columns = [Column::new("Title")];
        let rows = vec![vec!["grocery".to_string()]];
        let t = table(&pretty_ctx(), &columns, &rows);
        assert!(t.contains("Title"));
        assert!(t.contains("grocery"));
    }

    #[test]
    fn test_error_message_modes() {
        let pretty = error_message(&pretty_ctx(), "Boom", Some("Try again"));
        assert!(pretty.contains("[\u{2717}] Boom"));
        assert!(pretty.contains("Hint: Try again"));

        let plain = error_message(&plain_ctx(), "Boom", None);
        assert_eq!(plain, "error=Boom");
    }
}
