use anyhow::{Context, Result, anyhow};
use log::warn;
use std::{
    fs,
    path::{Path, PathBuf},
};
use toml::Value;

use crate::classify::Bucket;
use crate::config::{Config, theme_dir};
use crate::model::Condition;

/// Theme loaded when the configured one is absent, and the name
/// `Config::theme_name` falls back to.
pub const DEFAULT_THEME: &str = "sunny_dynamic";

/// Box-drawing style names understood by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxStyle {
    Rounded,
    Square,
    Double,
    Minimal,
}

impl BoxStyle {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "rounded" => Some(BoxStyle::Rounded),
            "square" => Some(BoxStyle::Square),
            "double" => Some(BoxStyle::Double),
            "minimal" => Some(BoxStyle::Minimal),
            _ => None,
        }
    }
}

/// Geometry and border attributes for one panel, resolved with per-field
/// fallbacks.
#[derive(Debug, Clone)]
pub struct PanelStyle {
    pub border_style: String,
    pub border_colour: String,
    pub box_style: BoxStyle,
    pub padding_top_right: u16,
    pub padding_bottom_left: u16,
    pub width: u16,
    pub height: u16,
}

/// A loaded theme document.
///
/// Held as a raw TOML value rather than a typed struct: the accessor contract
/// tolerates missing keys and wrong-typed fields anywhere in the document,
/// substituting a per-attribute fallback constant with a warning instead of
/// failing the load. Loaded once per process and never invalidated.
#[derive(Debug, Clone)]
pub struct Theme {
    doc: Value,
    path: PathBuf,
}

impl Theme {
    /// Locate and load the theme selected by `config`.
    ///
    /// Missing selected theme falls back to [`DEFAULT_THEME`] with a warning;
    /// if that document is missing too, the error is fatal, since rendering
    /// cannot proceed without a theme.
    pub fn load(config: &Config) -> Result<Self> {
        let name = config.theme_name();
        let dir = theme_dir()?;

        let selected = dir.join(format!("{name}.toml"));
        if selected.exists() {
            return Self::from_file(&selected);
        }

        if name != DEFAULT_THEME {
            warn!("Theme '{name}' not found, falling back to {DEFAULT_THEME}");
        }

        let fallback = dir.join(format!("{DEFAULT_THEME}.toml"));
        if fallback.exists() {
            return Self::from_file(&fallback);
        }

        Err(anyhow!(
            "Neither theme '{name}' nor fallback '{DEFAULT_THEME}' found in {}",
            dir.display()
        ))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read theme file: {}", path.display()))?;
        Self::from_toml_str(&contents, path)
    }

    /// Parse a theme document. `path` is only used in messages.
    pub fn from_toml_str(contents: &str, path: &Path) -> Result<Self> {
        let doc: Value = toml::from_str(contents)
            .with_context(|| format!("Failed to parse theme file: {}", path.display()))?;
        Ok(Self { doc, path: path.to_path_buf() })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Walk a key path through the document. `None` on a missing key or a
    /// non-table in the middle of the path.
    fn lookup(&self, path: &[&str]) -> Option<&Value> {
        let mut value = &self.doc;
        for key in path {
            value = value.get(*key)?;
        }
        Some(value)
    }

    /// Resolve a path to a string token, or warn and fall back.
    fn str_or(&self, path: &[&str], fallback: &str) -> String {
        match self.lookup(path).and_then(Value::as_str) {
            Some(token) => token.to_string(),
            None => {
                warn!(
                    "No usable '{}' in theme {}. Using default '{fallback}'.",
                    path.join("."),
                    self.path.display()
                );
                fallback.to_string()
            }
        }
    }

    /// Resolve a path to a small non-negative integer, or warn and fall back.
    fn uint_or(&self, path: &[&str], fallback: u16) -> u16 {
        let resolved = self
            .lookup(path)
            .and_then(Value::as_integer)
            .and_then(|n| u16::try_from(n).ok());
        match resolved {
            Some(n) => n,
            None => {
                warn!(
                    "No usable '{}' in theme {}. Using default {fallback}.",
                    path.join("."),
                    self.path.display()
                );
                fallback
            }
        }
    }

    pub fn city_colour(&self) -> String {
        self.str_or(&["colours", "col_city"], "light_steel_blue")
    }

    pub fn wind_colour(&self) -> String {
        self.str_or(&["colours", "col_wind"], "sky_blue1")
    }

    /// Colour for a temperature reading's bucket.
    pub fn temp_colour(&self, bucket: Bucket) -> String {
        let (key, fallback) = match bucket {
            Bucket::Low => ("low", "deep_sky_blue1"),
            Bucket::Mid => ("mid", "chartreuse3"),
            Bucket::High => ("high", "sandy_brown"),
        };
        self.str_or(&["colours", "col_temp", key], fallback)
    }

    /// Colour for a humidity reading's bucket.
    pub fn humid_colour(&self, bucket: Bucket) -> String {
        let (key, fallback) = match bucket {
            Bucket::Low => ("low", "indian_red"),
            Bucket::Mid => ("mid", "green_yellow"),
            Bucket::High => ("high", "cornflower_blue"),
        };
        self.str_or(&["colours", "col_humid", key], fallback)
    }

    /// Colour for a weather condition category.
    ///
    /// Unknown categories silently take the `Clear` fallback colour, matching
    /// the glyph catalog's unknown-goes-to-default policy.
    pub fn condition_colour(&self, condition: Condition) -> String {
        let (key, fallback) = match condition {
            Condition::Thunderstorm => ("Thunderstorm", "dodger_blue2"),
            Condition::Drizzle => ("Drizzle", "deep_sky_blue2"),
            Condition::Rain => ("Rain", "light_steel_blue3"),
            Condition::Snow => ("Snow", "bright_white"),
            Condition::Atmosphere => ("Atmosphere", "grey53"),
            Condition::Clear => ("Clear", "dark_orange"),
            Condition::Clouds => ("Clouds", "orchid"),
            Condition::Unknown => return "dark_orange".to_string(),
        };
        self.str_or(&["colours", "col_desc", key], fallback)
    }

    fn panel_style(&self, section: &str, width: u16, height: u16) -> PanelStyle {
        let box_name = self.str_or(&[section, "box"], "rounded");
        let box_style = match BoxStyle::from_name(&box_name) {
            Some(style) => style,
            None => {
                warn!(
                    "Unknown box style '{box_name}' in theme {}. Using rounded.",
                    self.path.display()
                );
                BoxStyle::Rounded
            }
        };

        PanelStyle {
            border_style: self.str_or(&[section, "border_style"], "bold"),
            border_colour: self.str_or(&[section, "border_colour"], "light_steel_blue"),
            box_style,
            padding_top_right: self.uint_or(&[section, "padding_top_right"], 1),
            padding_bottom_left: self.uint_or(&[section, "padding_bottom_left"], 1),
            width: self.uint_or(&[section, "width"], width),
            height: self.uint_or(&[section, "height"], height),
        }
    }

    /// Geometry for the weather details panel.
    pub fn panel(&self) -> PanelStyle {
        self.panel_style("panel", 55, 12)
    }

    /// Geometry for the ASCII-art panel.
    pub fn ascii_panel(&self) -> PanelStyle {
        self.panel_style("ascii_panel", 40, 14)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, Once};

    struct CapturingLogger {
        records: Mutex<Vec<String>>,
    }

    impl CapturingLogger {
        fn drain(&self) -> Vec<String> {
            std::mem::take(&mut *self.records.lock().unwrap())
        }
    }

    impl log::Log for CapturingLogger {
        fn enabled(&self, metadata: &log::Metadata) -> bool {
            metadata.level() <= log::Level::Warn
        }

        fn log(&self, record: &log::Record) {
            if record.level() == log::Level::Warn {
                self.records.lock().unwrap().push(record.args().to_string());
            }
        }

        fn flush(&self) {}
    }

    static LOGGER: CapturingLogger = CapturingLogger {
        records: Mutex::new(Vec::new()),
    };

    fn install_logger() {
        static INSTALL: Once = Once::new();
        INSTALL.call_once(|| {
            log::set_logger(&LOGGER).expect("no other logger in tests");
            log::set_max_level(log::LevelFilter::Warn);
        });
    }

    fn theme(contents: &str) -> Theme {
        Theme::from_toml_str(contents, Path::new("/tmp/theme.toml")).expect("valid TOML")
    }

    const POPULATED: &str = r#"
        [colours]
        col_city = "red"
        col_wind = "cyan"

        [colours.col_temp]
        low = "blue"
        mid = "green"
        high = "orange"

        [colours.col_humid]
        low = "grey"
        mid = "yellow"
        high = "magenta"

        [colours.col_desc]
        Thunderstorm = "a"
        Drizzle = "b"
        Rain = "c"
        Snow = "d"
        Atmosphere = "e"
        Clear = "f"
        Clouds = "g"

        [panel]
        border_style = "dim"
        border_colour = "red"
        box = "double"
        padding_top_right = 2
        padding_bottom_left = 3
        width = 60
        height = 15
    "#;

    #[test]
    fn populated_document_resolves_configured_values() {
        let t = theme(POPULATED);
        assert_eq!(t.city_colour(), "red");
        assert_eq!(t.wind_colour(), "cyan");
        assert_eq!(t.temp_colour(Bucket::High), "orange");
        assert_eq!(t.humid_colour(Bucket::Low), "grey");
        assert_eq!(t.condition_colour(Condition::Snow), "d");

        let panel = t.panel();
        assert_eq!(panel.border_style, "dim");
        assert_eq!(panel.box_style, BoxStyle::Double);
        assert_eq!(panel.width, 60);
        assert_eq!(panel.height, 15);
    }

    #[test]
    fn missing_wind_colour_falls_back_without_failing() {
        let t = theme("[colours]\ncol_city = \"red\"\n");
        assert_eq!(t.wind_colour(), "sky_blue1");
        // Other accessors keep working off the same document.
        assert_eq!(t.city_colour(), "red");
    }

    #[test]
    fn missing_wind_colour_warns_exactly_once() {
        install_logger();

        // Unique path so records from tests running in parallel are ignored.
        let path = Path::new("/tmp/wind-warning-theme.toml");
        let t = Theme::from_toml_str("[colours]\ncol_city = \"red\"\n", path).unwrap();

        LOGGER.drain();
        assert_eq!(t.wind_colour(), "sky_blue1");
        let records = LOGGER.drain();

        let matching: Vec<&String> = records
            .iter()
            .filter(|m| m.contains("wind-warning-theme.toml"))
            .collect();
        assert_eq!(matching.len(), 1, "records: {records:?}");
        assert!(matching[0].contains("colours.col_wind"));
        assert!(matching[0].contains("sky_blue1"));
    }

    #[test]
    fn wrong_typed_colours_section_falls_back() {
        let t = theme("colours = \"not a table\"\n");
        assert_eq!(t.city_colour(), "light_steel_blue");
        assert_eq!(t.wind_colour(), "sky_blue1");
        assert_eq!(t.temp_colour(Bucket::Mid), "chartreuse3");
    }

    #[test]
    fn wrong_typed_leaf_falls_back() {
        let t = theme("[colours]\ncol_wind = 42\n");
        assert_eq!(t.wind_colour(), "sky_blue1");
    }

    #[test]
    fn empty_document_serves_every_accessor() {
        let t = theme("");
        assert_eq!(t.city_colour(), "light_steel_blue");
        assert_eq!(t.wind_colour(), "sky_blue1");
        assert_eq!(t.temp_colour(Bucket::Low), "deep_sky_blue1");
        assert_eq!(t.temp_colour(Bucket::Mid), "chartreuse3");
        assert_eq!(t.temp_colour(Bucket::High), "sandy_brown");
        assert_eq!(t.humid_colour(Bucket::Low), "indian_red");
        assert_eq!(t.humid_colour(Bucket::Mid), "green_yellow");
        assert_eq!(t.humid_colour(Bucket::High), "cornflower_blue");

        let panel = t.panel();
        assert_eq!(panel.border_style, "bold");
        assert_eq!(panel.border_colour, "light_steel_blue");
        assert_eq!(panel.box_style, BoxStyle::Rounded);
        assert_eq!(panel.padding_top_right, 1);
        assert_eq!(panel.padding_bottom_left, 1);
        assert_eq!(panel.width, 55);
        assert_eq!(panel.height, 12);

        let ascii = t.ascii_panel();
        assert_eq!(ascii.padding_top_right, 1);
        assert_eq!(ascii.padding_bottom_left, 1);
        assert_eq!(ascii.width, 40);
        assert_eq!(ascii.height, 14);
    }

    #[test]
    fn condition_colour_fallbacks_per_category() {
        let t = theme("");
        assert_eq!(t.condition_colour(Condition::Thunderstorm), "dodger_blue2");
        assert_eq!(t.condition_colour(Condition::Drizzle), "deep_sky_blue2");
        assert_eq!(t.condition_colour(Condition::Rain), "light_steel_blue3");
        assert_eq!(t.condition_colour(Condition::Snow), "bright_white");
        assert_eq!(t.condition_colour(Condition::Atmosphere), "grey53");
        assert_eq!(t.condition_colour(Condition::Clear), "dark_orange");
        assert_eq!(t.condition_colour(Condition::Clouds), "orchid");
    }

    #[test]
    fn unknown_condition_takes_the_clear_fallback() {
        // Even with a fully populated col_desc table, an unknown category
        // resolves to the hard-coded Clear fallback.
        let t = theme(POPULATED);
        assert_eq!(t.condition_colour(Condition::Unknown), "dark_orange");
    }

    #[test]
    fn negative_geometry_falls_back() {
        let t = theme("[panel]\nwidth = -3\n");
        assert_eq!(t.panel().width, 55);
    }

    #[test]
    fn unknown_box_name_falls_back_to_rounded() {
        let t = theme("[panel]\nbox = \"hexagon\"\n");
        assert_eq!(t.panel().box_style, BoxStyle::Rounded);
    }

    #[test]
    fn box_style_names_are_case_insensitive() {
        assert_eq!(BoxStyle::from_name("ROUNDED"), Some(BoxStyle::Rounded));
        assert_eq!(BoxStyle::from_name("Minimal"), Some(BoxStyle::Minimal));
        assert_eq!(BoxStyle::from_name("hexagon"), None);
    }
}
