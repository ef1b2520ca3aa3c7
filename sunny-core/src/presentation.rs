//! Maps a weather snapshot onto colours and a glyph.

use crate::classify::{humidity_bucket, temperature_bucket};
use crate::glyphs;
use crate::model::WeatherSnapshot;
use crate::theme::Theme;

/// Everything the renderer needs to colorize one snapshot.
///
/// Pure composition of the threshold classifier, the theme's colour
/// accessors, and the glyph catalog. Colour tokens are palette names as they
/// appear in the theme document.
#[derive(Debug, Clone)]
pub struct Presentation {
    pub description_colour: String,
    pub temperature_colour: String,
    pub humidity_colour: String,
    pub wind_colour: String,
    pub city_colour: String,
    pub glyph: &'static str,
    pub glyph_colour: String,
}

impl Presentation {
    pub fn of(theme: &Theme, snapshot: &WeatherSnapshot) -> Self {
        let condition_colour = theme.condition_colour(snapshot.condition);
        Self {
            description_colour: condition_colour.clone(),
            temperature_colour: theme.temp_colour(temperature_bucket(snapshot.temperature)),
            humidity_colour: theme.humid_colour(humidity_bucket(snapshot.humidity)),
            wind_colour: theme.wind_colour(),
            city_colour: theme.city_colour(),
            glyph: glyphs::glyph(snapshot.condition, &snapshot.icon),
            glyph_colour: condition_colour,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Condition, Coordinates};
    use std::path::Path;

    fn snapshot(temp: f64, humidity: u8, condition: &str, icon: &str) -> WeatherSnapshot {
        WeatherSnapshot {
            city: "Testville".to_string(),
            temperature: temp,
            feels_like: temp,
            humidity,
            wind_speed: 3.0,
            description: "test conditions".to_string(),
            condition: Condition::from_provider(condition),
            icon: icon.to_string(),
            coord: Coordinates { lon: 0.0, lat: 0.0 },
            country: "GB".to_string(),
        }
    }

    fn default_theme() -> Theme {
        Theme::from_toml_str("", Path::new("/tmp/theme.toml")).unwrap()
    }

    #[test]
    fn hot_humid_clear_day() {
        let theme = default_theme();
        let p = Presentation::of(&theme, &snapshot(32.0, 70, "Clear", "01d"));

        assert_eq!(p.temperature_colour, "sandy_brown");
        assert_eq!(p.humidity_colour, "cornflower_blue");
        assert_eq!(p.description_colour, "dark_orange");
        assert_eq!(p.glyph, glyphs::CLEAR_DAY);
        assert_eq!(p.glyph_colour, p.description_colour);
    }

    #[test]
    fn clear_night_uses_the_night_glyph() {
        let theme = default_theme();
        let p = Presentation::of(&theme, &snapshot(15.0, 40, "Clear", "01n"));
        assert_eq!(p.glyph, glyphs::CLEAR_NIGHT);
    }

    #[test]
    fn unknown_category_is_not_an_error() {
        let theme = default_theme();
        let p = Presentation::of(&theme, &snapshot(20.0, 50, "Tornado", "11d"));

        assert_eq!(p.glyph, glyphs::DEFAULT);
        assert_eq!(p.description_colour, "dark_orange");
    }

    #[test]
    fn colours_follow_the_theme_document() {
        let theme = Theme::from_toml_str(
            r#"
            [colours]
            col_city = "white"
            col_wind = "cyan"

            [colours.col_temp]
            low = "blue"

            [colours.col_desc]
            Rain = "navy"
            "#,
            Path::new("/tmp/theme.toml"),
        )
        .unwrap();

        let p = Presentation::of(&theme, &snapshot(2.0, 50, "Rain", "10d"));
        assert_eq!(p.temperature_colour, "blue");
        assert_eq!(p.description_colour, "navy");
        assert_eq!(p.city_colour, "white");
        assert_eq!(p.wind_colour, "cyan");
        // Humidity bucket colour missing from the document, so fallback.
        assert_eq!(p.humidity_colour, "indian_red");
    }
}
