use anyhow::{Context, Result};
use clap::Parser;
use inquire::Text;
use std::convert::TryFrom;

use sunny_core::{Config, Theme, Units, bootstrap, config, provider_from_config};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "sunny", version, about = "See weather in CLI")]
pub struct Cli {
    /// City name (use '_' if the city has a space, e.g. new_york)
    pub city: Option<String>,

    /// Temperature units - 'metric' or 'imperial'
    #[arg(short, long)]
    pub units: Option<String>,

    /// Show about information
    #[arg(short = 'a', long)]
    pub about: bool,

    /// Fetch temperature only
    #[arg(short = 't', long)]
    pub temp: bool,

    /// Fetch humidity only
    #[arg(short = 'y', long)]
    pub humidity: bool,

    /// Fetch weather description only
    #[arg(short = 'd', long)]
    pub description: bool,

    /// Show ascii art of the weather condition
    #[arg(long)]
    pub ascii: bool,

    /// Show the weather forecast for the next slots
    #[arg(long)]
    pub forecast: bool,

    /// Show all available ASCII art
    #[arg(long)]
    pub glyphs: bool,

    /// Show all available themes
    #[arg(long)]
    pub themes: bool,

    /// Initialise config files
    #[arg(long)]
    pub init: bool,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        if self.init {
            return init();
        }
        if self.about {
            println!("sunny - A minimal CLI weather tool");
            return Ok(());
        }
        if self.glyphs {
            render::show_all_glyphs();
            return Ok(());
        }
        if self.themes {
            return render::show_all_themes();
        }

        let config = Config::load()?;
        let theme = Theme::load(&config)?;

        let city = match &self.city {
            Some(city) => city.replace('_', " "),
            None => config.location()?.to_string(),
        };
        let units = match self.units.as_deref() {
            Some(raw) => Units::try_from(raw)?,
            None => config.units()?,
        };

        let provider = provider_from_config(&config)?;

        if self.forecast {
            let entries = provider.forecast(&city, units).await?;
            render::forecast_cards(&theme, &entries, units);
            return Ok(());
        }

        let snapshot = provider.current(&city, units).await?;

        let mut printed = false;
        if self.temp {
            render::temperature_line(&theme, &snapshot, units);
            printed = true;
        }
        if self.humidity {
            render::humidity_line(&theme, &snapshot);
            printed = true;
        }
        if self.description {
            render::description_line(&theme, &snapshot);
            printed = true;
        }
        if self.ascii {
            render::glyph_only(&theme, &snapshot);
            printed = true;
        }

        if !printed {
            render::full_weather(&theme, &snapshot, units);
        }

        Ok(())
    }
}

/// Materialize the default config and themes, then offer to store an API key.
fn init() -> Result<()> {
    bootstrap::materialize()?;
    let config_file = config::config_file_path()?;
    println!("Configuration ready at {}", config_file.display());

    // Skippable so a piped or scripted run still succeeds.
    let key = Text::new("OpenWeather API key (leave empty to fill in later):")
        .prompt_skippable()
        .ok()
        .flatten()
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty());

    if let Some(key) = key {
        store_api_key(&key)?;
        println!("API key saved.");
    }

    Ok(())
}

/// Rewrite `api.key` in the user config, keeping the rest of the document.
fn store_api_key(key: &str) -> Result<()> {
    let path = config::config_file_path()?;
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let mut doc: toml::Value = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    let table = doc
        .as_table_mut()
        .context("Config file is not a TOML table")?;
    let api = table
        .entry("api")
        .or_insert_with(|| toml::Value::Table(Default::default()));
    api.as_table_mut()
        .context("'api' section is not a TOML table")?
        .insert("key".to_string(), toml::Value::String(key.to_string()));

    let serialized = toml::to_string_pretty(&doc).context("Failed to serialize configuration")?;
    std::fs::write(&path, serialized)
        .with_context(|| format!("Failed to write config file: {}", path.display()))?;

    Ok(())
}
