use xdg::BaseDirectories;
use chrono::format::{Item, StrftimeItems};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use ratatui::style::{Color, Modifier, Style};

use crate::error::{ConfigError, LayoutError};
use crate::formatting::BoxChars;
use crate::layout_constants::{DEFAULT_CELL_HEIGHT_PX, DEFAULT_CELL_WIDTH_PX, DESIGN_HEIGHT, DESIGN_WIDTH};
use crate::scale::DesignSize;

/// Default log level when not specified
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
pub const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub log_file: String,
    pub time_format: String,
    pub use_unicode: bool,
    pub design: DesignConfig,
    pub cell: CellConfig,
    pub theme: ThemeConfig,
}

/// Reference size the board is authored for
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct DesignConfig {
    pub width: f64,
    pub height: f64,
}

/// Pixel size of one terminal cell, used to turn the terminal area into a viewport
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct CellConfig {
    pub width_px: u16,
    pub height_px: u16,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ThemeConfig {
    #[serde(deserialize_with = "deserialize_color")]
    pub background: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub header_bg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub name_fg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub score_fg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub marker_fg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub logo_fg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub error_fg: Color,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_file: DEFAULT_LOG_FILE.to_string(),
            time_format: "%H:%M:%S".to_string(),
            use_unicode: true,
            design: DesignConfig::default(),
            cell: CellConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}

impl Default for DesignConfig {
    fn default() -> Self {
        DesignConfig {
            width: DESIGN_WIDTH,
            height: DESIGN_HEIGHT,
        }
    }
}

impl Default for CellConfig {
    fn default() -> Self {
        CellConfig {
            width_px: DEFAULT_CELL_WIDTH_PX,
            height_px: DEFAULT_CELL_HEIGHT_PX,
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            background: Color::Black,
            header_bg: Color::Rgb(0x1a, 0x3c, 0x5a), // Navy
            name_fg: Color::White,
            score_fg: Color::Yellow,
            marker_fg: Color::Yellow,
            logo_fg: Color::Gray,
            error_fg: Color::Red,
        }
    }
}

impl Config {
    /// Validated design size; zero or negative dimensions are rejected here,
    /// before anything is rendered
    pub fn design_size(&self) -> Result<DesignSize, LayoutError> {
        DesignSize::new(self.design.width, self.design.height)
    }

    /// Check every value that would make rendering impossible
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.design_size()?;
        if self.cell.width_px == 0 || self.cell.height_px == 0 {
            return Err(ConfigError::InvalidCellSize {
                width: self.cell.width_px,
                height: self.cell.height_px,
            });
        }
        if StrftimeItems::new(&self.time_format).any(|item| matches!(item, Item::Error)) {
            return Err(ConfigError::InvalidTimeFormat(self.time_format.clone()));
        }
        Ok(())
    }

    /// Build the renderer-facing display settings
    pub fn display(&self) -> DisplayConfig {
        DisplayConfig {
            box_chars: BoxChars::from_use_unicode(self.use_unicode),
            background: self.theme.background,
            header_bg: self.theme.header_bg,
            name_fg: self.theme.name_fg,
            score_fg: self.theme.score_fg,
            marker_fg: self.theme.marker_fg,
            logo_fg: self.theme.logo_fg,
            error_fg: self.theme.error_fg,
        }
    }
}

/// Style modifier applied to player names
pub const NAME_STYLE_MODIFIER: Modifier = Modifier::BOLD;

/// Colors and glyphs the terminal widgets draw with
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayConfig {
    pub box_chars: BoxChars,
    pub background: Color,
    pub header_bg: Color,
    pub name_fg: Color,
    pub score_fg: Color,
    pub marker_fg: Color,
    pub logo_fg: Color,
    pub error_fg: Color,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Config::default().display()
    }
}

impl DisplayConfig {
    pub fn board_style(&self) -> Style {
        Style::default().bg(self.background)
    }

    pub fn header_style(&self) -> Style {
        Style::default().fg(self.logo_fg).bg(self.header_bg)
    }

    pub fn name_style(&self) -> Style {
        self.board_style()
            .fg(self.name_fg)
            .add_modifier(NAME_STYLE_MODIFIER)
    }

    pub fn score_style(&self) -> Style {
        self.board_style().fg(self.score_fg)
    }

    pub fn marker_style(&self) -> Style {
        self.board_style().fg(self.marker_fg)
    }

    pub fn logo_style(&self) -> Style {
        self.board_style().fg(self.logo_fg)
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error_fg)
    }
}

/// Deserialize a color from a string (supports named colors, RGB hex, or RGB tuple)
fn deserialize_color<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_color(&s).ok_or_else(|| serde::de::Error::custom(format!("Invalid color: {}", s)))
}

/// Parse a color string into a ratatui Color
/// Supports:
/// - Named colors: "red", "navy", "yellow", etc.
/// - Hex colors: "#1A3C5A", "#fd0"
/// - RGB tuples: "26,60,90"
fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim().to_lowercase();

    match s.as_str() {
        "black" => return Some(Color::Black),
        "red" => return Some(Color::Red),
        "green" => return Some(Color::Green),
        "yellow" => return Some(Color::Yellow),
        "blue" => return Some(Color::Blue),
        "magenta" => return Some(Color::Magenta),
        "cyan" => return Some(Color::Cyan),
        "gray" | "grey" => return Some(Color::Gray),
        "darkgray" | "darkgrey" => return Some(Color::DarkGray),
        "white" => return Some(Color::White),
        "navy" => return Some(Color::Rgb(0x1a, 0x3c, 0x5a)),
        "orange" => return Some(Color::Rgb(255, 165, 0)),
        _ => {}
    }

    if let Some(hex) = s.strip_prefix('#') {
        if !hex.is_ascii() {
            return None;
        }
        if hex.len() == 6 {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            return Some(Color::Rgb(r, g, b));
        } else if hex.len() == 3 {
            let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
            return Some(Color::Rgb(r, g, b));
        }
        return None;
    }

    if s.contains(',') {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() == 3 {
            let r = parts[0].trim().parse::<u8>().ok()?;
            let g = parts[1].trim().parse::<u8>().ok()?;
            let b = parts[2].trim().parse::<u8>().ok()?;
            return Some(Color::Rgb(r, g, b));
        }
    }

    None
}

pub fn get_config_path() -> Option<PathBuf> {
    let pgm = env!("CARGO_PKG_NAME");
    let xdg_dirs = BaseDirectories::with_prefix(pgm);
    let config_home = xdg_dirs.get_config_home()?;
    Some(config_home.join("config.toml"))
}

/// Read the config file, falling back to defaults when there is none
///
/// A file that exists but cannot be read, parsed or validated is an error.
pub fn read() -> Result<Config, ConfigError> {
    let config_path = match get_config_path() {
        Some(path) => path,
        None => return Ok(Config::default()),
    };

    if !config_path.exists() {
        return Ok(Config::default());
    }

    read_from(&config_path)
}

pub fn read_from(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&content)
}

/// Parse and validate config file contents
pub fn parse(content: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
