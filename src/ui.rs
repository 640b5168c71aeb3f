//! UI module - centralized styling, color detection, glyphs and tables.
//!
//! # No-color detection (in priority order):
//! 1. `--no-color` CLI flag (highest priority)
//! 2. `NO_COLOR` environment variable (any value)
//! 3. `TERM=dumb` environment variable
//! 4. Non-TTY stdout (detected via anstream)
//!
//! Renderers build `String`s through the inline helpers here and hand them to
//! [`Ui::println`], so output can be asserted on in tests.

use anstream::println;
use anstyle::{AnsiColor, Color, Style};
use comfy_table::{Cell, ContentArrangement, Table, presets};
use std::io::IsTerminal;

/// Color mode for output
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// Always emit ANSI colors
    Always,
    /// Emit colors only if TTY and not disabled
    #[default]
    Auto,
    /// Never emit ANSI colors
    Never,
}

impl std::str::FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "always" => Ok(Self::Always),
            "auto" => Ok(Self::Auto),
            "never" => Ok(Self::Never),
            _ => Err(format!("invalid color mode: {}", s)),
        }
    }
}

/// Status/section glyphs, each with an emoji and a plain fallback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Switch,
    Roles,
    Tools,
    Clipboard,
    Lock,
    Rocket,
    Chart,
    Globe,
    Lab,
    Cross,
    Check,
    CoordinatorMultisig,
    Coordinator,
    Basic,
}

impl Glyph {
    fn emoji(self) -> &'static str {
        match self {
            Glyph::Switch => "🔄",
            Glyph::Roles => "🎭",
            Glyph::Tools => "🔧",
            Glyph::Clipboard => "📋",
            Glyph::Lock => "🔐",
            Glyph::Rocket => "🚀",
            Glyph::Chart => "📊",
            Glyph::Globe => "🌍",
            Glyph::Lab => "🧪",
            Glyph::Cross => "❌",
            Glyph::Check => "✅",
            Glyph::CoordinatorMultisig => "🟢🔐",
            Glyph::Coordinator => "🟢",
            Glyph::Basic => "⚫",
        }
    }

    fn plain(self) -> &'static str {
        match self {
            Glyph::Cross => "[X]",
            Glyph::Check => "[OK]",
            Glyph::CoordinatorMultisig => "[C+M]",
            Glyph::Coordinator => "[C]  ",
            Glyph::Basic => "[ ]  ",
            _ => "",
        }
    }
}

/// UI context holding resolved display settings
#[derive(Debug, Clone)]
pub struct Ui {
    /// Whether colors (and emoji glyphs) are enabled
    pub color_enabled: bool,
}

impl Default for Ui {
    fn default() -> Self {
        Self::new(ColorMode::Auto, false)
    }
}

impl Ui {
    /// Create a new UI context with color mode detection.
    ///
    /// Priority:
    /// 1. `force_no_color` (from --no-color flag)
    /// 2. `NO_COLOR` env var
    /// 3. `TERM=dumb`
    /// 4. TTY detection (for Auto mode)
    pub fn new(mode: ColorMode, force_no_color: bool) -> Self {
        let color_enabled = Self::resolve_color(mode, force_no_color);

        // Configure anstream's color choice globally
        if !color_enabled {
            anstream::ColorChoice::write_global(anstream::ColorChoice::Never);
        }

        Self { color_enabled }
    }

    fn resolve_color(mode: ColorMode, force_no_color: bool) -> bool {
        if force_no_color {
            return false;
        }

        if std::env::var("NO_COLOR").is_ok() {
            return false;
        }

        if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
            return false;
        }

        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }

    // -------------------------------------------------------------------------
    // Inline style helpers
    // -------------------------------------------------------------------------

    /// Return a styled string (dimmed/gray) - for inline use
    pub fn dim(&self, s: impl AsRef<str>) -> String {
        if self.color_enabled {
            let st = Style::new().fg_color(Some(Color::Ansi(AnsiColor::BrightBlack)));
            format!("{st}{}{st:#}", s.as_ref())
        } else {
            s.as_ref().to_string()
        }
    }

    /// Return a styled string (bold) - for inline use
    pub fn bold(&self, s: impl AsRef<str>) -> String {
        if self.color_enabled {
            let st = Style::new().bold();
            format!("{st}{}{st:#}", s.as_ref())
        } else {
            s.as_ref().to_string()
        }
    }

    /// Return a styled string with specific color - for inline use
    pub fn colored(&self, s: impl AsRef<str>, color: AnsiColor) -> String {
        if self.color_enabled {
            let st = Style::new().fg_color(Some(Color::Ansi(color)));
            format!("{st}{}{st:#}", s.as_ref())
        } else {
            s.as_ref().to_string()
        }
    }

    // -------------------------------------------------------------------------
    // Glyphs and headings (with fallback for no-color)
    // -------------------------------------------------------------------------

    pub fn glyph(&self, glyph: Glyph) -> &'static str {
        if self.color_enabled {
            glyph.emoji()
        } else {
            glyph.plain()
        }
    }

    /// `<glyph> <text>`, dropping the separator when the glyph renders empty
    pub fn with_glyph(&self, glyph: Glyph, text: impl AsRef<str>) -> String {
        let icon = self.glyph(glyph);
        if icon.is_empty() {
            text.as_ref().to_string()
        } else {
            format!("{} {}", icon, text.as_ref())
        }
    }

    /// Bold section title prefixed by a glyph
    pub fn heading(&self, glyph: Glyph, title: impl AsRef<str>) -> String {
        self.bold(self.with_glyph(glyph, title))
    }

    /// `=` underline of the given width
    pub fn rule(&self, width: usize) -> String {
        self.dim("=".repeat(width))
    }

    // -------------------------------------------------------------------------
    // Tables (comfy-table)
    // -------------------------------------------------------------------------

    /// Create a simple table without borders (for key/value dumps)
    pub fn simple_table(&self) -> Table {
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.load_preset(presets::NOTHING);
        table
    }

    pub fn cell(&self, content: impl Into<String>) -> Cell {
        Cell::new(content.into())
    }

    /// Create a styled header cell (bold when color enabled)
    pub fn header_cell(&self, content: impl Into<String>) -> Cell {
        let cell = Cell::new(content.into());
        if self.color_enabled {
            cell.add_attribute(comfy_table::Attribute::Bold)
        } else {
            cell
        }
    }

    // -------------------------------------------------------------------------
    // Println helpers (using anstream for proper tty handling)
    // -------------------------------------------------------------------------

    /// Print a line (or a pre-rendered block) to stdout
    pub fn println(&self, msg: impl AsRef<str>) {
        println!("{}", msg.as_ref());
    }
}

/// Shorten an address to `first8...last8`.
///
/// Values shorter than the two halves together are returned unabridged.
pub fn abbreviate(value: &str) -> String {
    const HALF: usize = 8;

    let chars: Vec<char> = value.chars().collect();
    if chars.len() < HALF * 2 {
        return value.to_string();
    }

    let head: String = chars[..HALF].iter().collect();
    let tail: String = chars[chars.len() - HALF..].iter().collect();
    format!("{head}...{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_mode_parse() {
        assert_eq!("always".parse::<ColorMode>().unwrap(), ColorMode::Always);
        assert_eq!("auto".parse::<ColorMode>().unwrap(), ColorMode::Auto);
        assert_eq!("never".parse::<ColorMode>().unwrap(), ColorMode::Never);
        assert!("invalid".parse::<ColorMode>().is_err());
    }

    #[test]
    fn test_ui_force_no_color() {
        let ui = Ui::new(ColorMode::Always, true);
        assert!(!ui.color_enabled);
    }

    #[test]
    fn test_glyphs_no_color() {
        let ui = Ui::new(ColorMode::Never, false);
        assert_eq!(ui.glyph(Glyph::Cross), "[X]");
        assert_eq!(ui.glyph(Glyph::Rocket), "");
        assert_eq!(ui.with_glyph(Glyph::Rocket, "go"), "go");
        assert_eq!(ui.with_glyph(Glyph::Check, "done"), "[OK] done");
    }

    #[test]
    fn test_glyphs_color() {
        let ui = Ui {
            color_enabled: true,
        };
        assert_eq!(ui.glyph(Glyph::CoordinatorMultisig), "🟢🔐");
        assert_eq!(ui.with_glyph(Glyph::Rocket, "go"), "🚀 go");
    }

    #[test]
    fn test_rule_no_color() {
        let ui = Ui::new(ColorMode::Never, false);
        assert_eq!(ui.rule(5), "=====");
    }

    #[test]
    fn test_abbreviate() {
        assert_eq!(
            abbreviate("7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU"),
            "7xKXtg2C...uJosgAsU"
        );
        assert_eq!(abbreviate("0123456789abcdef"), "01234567...89abcdef");
        assert_eq!(abbreviate("short"), "short");
        assert_eq!(abbreviate(""), "");
    }

    #[test]
    fn test_abbreviate_multibyte() {
        let value = "ééééééééxxxxüüüüüüüü";
        assert_eq!(abbreviate(value), "éééééééé...üüüüüüüü");
    }
}
