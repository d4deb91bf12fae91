use anstyle::Ansi256Color;
use clap::builder::{styling::Style as ClapStyle, Styles};
use console::{Color, Style};
use indicatif::ProgressStyle;
use once_cell::sync::Lazy;

// ANSI 256-color constants
const DARK_BLUE: Ansi256Color = Ansi256Color(24);
const WHITE: Ansi256Color = Ansi256Color(255);
const BRIGHT_WHITE: Ansi256Color = Ansi256Color(231);
const BRIGHT_GREEN: Ansi256Color = Ansi256Color(34);
const RED: Ansi256Color = Ansi256Color(160);
const YELLOW: Ansi256Color = Ansi256Color(220);
const LIGHT_BLUE: Ansi256Color = Ansi256Color(75);
const FOREST_GREEN: Ansi256Color = Ansi256Color(65);
const MEDIUM_PURPLE4: Ansi256Color = Ansi256Color(60);
const DARK_RED: Ansi256Color = Ansi256Color(52);

fn to_console_color(color: Ansi256Color) -> Color {
    Color::Color256(color.0)
}

/// Terminal colors shared by log output, tables and clap help.
pub struct Theme {
    pub raw_primary: Ansi256Color,
    pub raw_secondary: Ansi256Color,
    pub raw_accent: Ansi256Color,
    pub raw_neutral: Ansi256Color,
    pub raw_error: Ansi256Color,
    pub raw_highlight: Ansi256Color,
    pub raw_invalid: Ansi256Color,

    pub primary: Style,
    pub secondary: Style,
    pub success: Style,
    pub error: Style,
    pub warning: Style,
    pub info: Style,
    pub highlight: Style,
}

impl Default for Theme {
    fn default() -> Self {
        let raw_primary = DARK_BLUE;
        let raw_secondary = FOREST_GREEN;
        let raw_highlight = MEDIUM_PURPLE4;

        Self {
            primary: Style::new().fg(to_console_color(raw_primary)),
            secondary: Style::new().fg(to_console_color(raw_secondary)),
            success: Style::new().fg(to_console_color(BRIGHT_GREEN)).bold(),
            error: Style::new().fg(to_console_color(RED)).bold(),
            warning: Style::new().fg(to_console_color(YELLOW)).bold(),
            info: Style::new().fg(to_console_color(LIGHT_BLUE)),
            highlight: Style::new().fg(to_console_color(raw_highlight)).bold(),

            raw_primary,
            raw_secondary,
            raw_accent: WHITE,
            raw_neutral: BRIGHT_WHITE,
            raw_error: RED,
            raw_highlight,
            raw_invalid: DARK_RED,
        }
    }
}

pub fn theme() -> &'static Theme {
    static THEME: Lazy<Theme> = Lazy::new(Theme::default);
    &THEME
}

pub fn clap_styles() -> Styles {
    let theme = theme();

    Styles::plain()
        .header(
            ClapStyle::new()
                .fg_color(Some(theme.raw_primary.into()))
                .bold(),
        )
        .usage(
            ClapStyle::new()
                .fg_color(Some(theme.raw_accent.into()))
                .bold(),
        )
        .literal(ClapStyle::new().fg_color(Some(theme.raw_neutral.into())))
        .placeholder(
            ClapStyle::new()
                .fg_color(Some(theme.raw_secondary.into()))
                .italic(),
        )
        .error(
            ClapStyle::new()
                .fg_color(Some(theme.raw_error.into()))
                .bold(),
        )
        .invalid(
            ClapStyle::new()
                .fg_color(Some(theme.raw_invalid.into()))
                .bold(),
        )
        .valid(
            ClapStyle::new()
                .fg_color(Some(theme.raw_highlight.into()))
                .bold(),
        )
}

pub fn create_generate_progress_style(bar_width: usize) -> ProgressStyle {
    ProgressStyle::with_template(&format!(
        "{{elapsed_precise}} {{bar:{bar_width}.green/yellow}} {{pos}}/{{len}} \
         samples | {{percent}}% | {{per_sec}} | ETA: {{eta}}",
        bar_width = bar_width
    ))
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("█▓▒░")
}

/// Colored pass/fail marker for a table cell.
pub fn status(passed: bool) -> String {
    let s = theme();
    if passed {
        s.success.apply_to("ok").to_string()
    } else {
        s.error.apply_to("MISMATCH").to_string()
    }
}
