//! Terminal colors.
//!
//! Color names follow the common ANSI terminal naming (`red`, `on_blue`,
//! `light_cyan`, ...). Output is wrapped in SGR escape sequences.

use std::fmt;

/// Error returned for an unrecognized color name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown color: {0:?}")]
pub struct UnknownColor(String);

/// One of the sixteen ANSI terminal colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Grey,
    LightRed,
    LightGreen,
    LightYellow,
    LightBlue,
    LightMagenta,
    LightCyan,
    LightWhite,
}

impl Color {
    /// Parse a color name, case-insensitively.
    ///
    /// ```
    /// use hsl_term::render::Color;
    ///
    /// assert_eq!(Color::parse("Red").unwrap(), Color::Red);
    /// assert_eq!(Color::parse("light_cyan").unwrap(), Color::LightCyan);
    /// assert!(Color::parse("mauve").is_err());
    /// ```
    pub fn parse(name: &str) -> Result<Self, UnknownColor> {
        let color = match name.trim().to_ascii_lowercase().as_str() {
            "black" => Color::Black,
            "red" => Color::Red,
            "green" => Color::Green,
            "yellow" => Color::Yellow,
            "blue" => Color::Blue,
            "magenta" => Color::Magenta,
            "cyan" => Color::Cyan,
            "white" | "light_grey" | "light_gray" => Color::White,
            "grey" | "gray" | "dark_grey" | "dark_gray" => Color::Grey,
            "light_red" => Color::LightRed,
            "light_green" => Color::LightGreen,
            "light_yellow" => Color::LightYellow,
            "light_blue" => Color::LightBlue,
            "light_magenta" => Color::LightMagenta,
            "light_cyan" => Color::LightCyan,
            "light_white" => Color::LightWhite,
            _ => return Err(UnknownColor(name.to_string())),
        };
        Ok(color)
    }

    /// Parse a background color name. The `on_` prefix is optional.
    pub fn parse_background(name: &str) -> Result<Self, UnknownColor> {
        let trimmed = name.trim();
        let bare = trimmed
            .strip_prefix("on_")
            .or_else(|| trimmed.strip_prefix("ON_"))
            .unwrap_or(trimmed);
        Self::parse(bare).map_err(|_| UnknownColor(name.to_string()))
    }

    /// SGR code for this color as a foreground.
    fn foreground_code(self) -> u8 {
        match self {
            Color::Black => 30,
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
            Color::Magenta => 35,
            Color::Cyan => 36,
            Color::White => 37,
            Color::Grey => 90,
            Color::LightRed => 91,
            Color::LightGreen => 92,
            Color::LightYellow => 93,
            Color::LightBlue => 94,
            Color::LightMagenta => 95,
            Color::LightCyan => 96,
            Color::LightWhite => 97,
        }
    }

    /// SGR code for this color as a background.
    fn background_code(self) -> u8 {
        self.foreground_code() + 10
    }
}

/// Foreground and background colors applied to a block of text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Style {
    pub foreground: Option<Color>,
    pub background: Option<Color>,
}

impl Style {
    /// No colors at all.
    pub fn plain() -> Self {
        Self::default()
    }

    /// Build a style from optional color names.
    ///
    /// Absent names leave that layer uncolored; an unrecognized name is an
    /// error so the caller can fall back to [`Style::plain`].
    pub fn parse(foreground: Option<&str>, background: Option<&str>) -> Result<Self, UnknownColor> {
        Ok(Self {
            foreground: foreground.map(Color::parse).transpose()?,
            background: background.map(Color::parse_background).transpose()?,
        })
    }

    pub fn is_plain(&self) -> bool {
        self.foreground.is_none() && self.background.is_none()
    }

    /// Wrap `text` in this style's escape sequences.
    pub fn paint<'a>(&self, text: &'a str) -> Painted<'a> {
        Painted { style: *self, text }
    }
}

/// Text with a style applied, rendered through `Display`.
pub struct Painted<'a> {
    style: Style,
    text: &'a str,
}

impl fmt::Display for Painted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.style.is_plain() {
            return f.write_str(self.text);
        }

        let codes: Vec<String> = [
            self.style.foreground.map(Color::foreground_code),
            self.style.background.map(Color::background_code),
        ]
        .into_iter()
        .flatten()
        .map(|code| code.to_string())
        .collect();

        write!(f, "\x1b[{}m{}\x1b[0m", codes.join(";"), self.text)
    }
}
