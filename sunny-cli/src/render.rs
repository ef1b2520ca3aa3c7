//! Terminal rendering: colorized lines, bordered panels, forecast cards.
//!
//! Layout only; every colour and glyph decision is made by the core's
//! presentation facade and theme accessors.

use anyhow::{Context, Result};
use console::{Style, Term, measure_text_width};
use std::{fs, path::PathBuf};

use sunny_core::{
    ForecastEntry, Presentation, Theme, Units, WeatherSnapshot,
    classify::{humidity_bucket, temperature_bucket},
    config::theme_dir,
    glyphs,
    theme::{BoxStyle, PanelStyle},
};

use crate::palette;

struct BoxChars {
    tl: char,
    tr: char,
    bl: char,
    br: char,
    h: char,
    v: char,
}

fn box_chars(style: BoxStyle) -> Option<BoxChars> {
    let chars = match style {
        BoxStyle::Rounded => BoxChars { tl: '╭', tr: '╮', bl: '╰', br: '╯', h: '─', v: '│' },
        BoxStyle::Square => BoxChars { tl: '┌', tr: '┐', bl: '└', br: '┘', h: '─', v: '│' },
        BoxStyle::Double => BoxChars { tl: '╔', tr: '╗', bl: '╚', br: '╝', h: '═', v: '║' },
        BoxStyle::Minimal => return None,
    };
    Some(chars)
}

/// Horizontal border with an optional centered label.
fn bar(border: &Style, left: char, fill: char, right: char, inner: usize, label: Option<&str>) -> String {
    if let Some(label) = label {
        let label_w = measure_text_width(label) + 2;
        if label_w <= inner {
            let lead = (inner - label_w) / 2;
            let trail = inner - label_w - lead;
            let lead_s = border
                .apply_to(format!("{left}{}", String::from(fill).repeat(lead)))
                .to_string();
            let trail_s = border
                .apply_to(format!("{}{right}", String::from(fill).repeat(trail)))
                .to_string();
            return format!("{lead_s} {label} {trail_s}");
        }
    }
    border
        .apply_to(format!("{left}{}{right}", String::from(fill).repeat(inner)))
        .to_string()
}

/// Draw a panel around pre-styled content lines.
///
/// `style.width` and `style.height` are minimums; the panel grows to fit its
/// content. Padding follows the theme's two-component convention:
/// `padding_top_right` is vertical, `padding_bottom_left` horizontal.
pub fn panel(lines: &[String], title: Option<&str>, subtitle: Option<&str>, style: &PanelStyle) -> String {
    let vpad = style.padding_top_right as usize;
    let hpad = style.padding_bottom_left as usize;

    let content_width = lines.iter().map(|l| measure_text_width(l)).max().unwrap_or(0);
    let inner = (content_width + 2 * hpad).max((style.width as usize).saturating_sub(2));

    let mut body: Vec<String> = Vec::new();
    for _ in 0..vpad {
        body.push(" ".repeat(inner));
    }
    for line in lines {
        let fill = inner.saturating_sub(measure_text_width(line) + hpad);
        body.push(format!("{}{line}{}", " ".repeat(hpad), " ".repeat(fill)));
    }
    for _ in 0..vpad {
        body.push(" ".repeat(inner));
    }
    let min_body = (style.height as usize).saturating_sub(2);
    while body.len() < min_body {
        body.push(" ".repeat(inner));
    }

    let border = palette::border(&style.border_style, &style.border_colour);

    match box_chars(style.box_style) {
        Some(bx) => {
            let v = border.apply_to(bx.v.to_string()).to_string();
            let mut out = vec![bar(&border, bx.tl, bx.h, bx.tr, inner, title)];
            for line in body {
                out.push(format!("{v}{line}{v}"));
            }
            out.push(bar(&border, bx.bl, bx.h, bx.br, inner, subtitle));
            out.join("\n")
        }
        None => {
            let mut out = Vec::new();
            if let Some(title) = title {
                out.push(format!("{}{title}", " ".repeat(hpad)));
            }
            out.extend(body);
            if let Some(subtitle) = subtitle {
                out.push(format!("{}{subtitle}", " ".repeat(hpad)));
            }
            out.join("\n")
        }
    }
}

/// Join rendered blocks side by side, used for forecast card rows.
fn join_horizontally(blocks: &[String], gap: usize) -> String {
    let split: Vec<Vec<&str>> = blocks.iter().map(|b| b.lines().collect()).collect();
    let widths: Vec<usize> = split
        .iter()
        .map(|ls| ls.iter().map(|l| measure_text_width(l)).max().unwrap_or(0))
        .collect();
    let rows = split.iter().map(Vec::len).max().unwrap_or(0);

    let mut out = Vec::with_capacity(rows);
    for r in 0..rows {
        let mut row = String::new();
        for (i, ls) in split.iter().enumerate() {
            let cell = ls.get(r).copied().unwrap_or("");
            row.push_str(cell);
            let pad = widths[i].saturating_sub(measure_text_width(cell)) + gap;
            row.push_str(&" ".repeat(pad));
        }
        out.push(row.trim_end().to_string());
    }
    out.join("\n")
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn title_case(text: &str) -> String {
    text.split(' ').map(capitalize).collect::<Vec<_>>().join(" ")
}

fn detail_lines(p: &Presentation, snapshot: &WeatherSnapshot, units: Units) -> Vec<String> {
    vec![
        palette::style_for(&p.description_colour)
            .apply_to(capitalize(&snapshot.description))
            .to_string(),
        palette::style_for(&p.temperature_colour)
            .apply_to(format!(
                "Temp: {:.1}° (feels {:.1}°) {}",
                snapshot.temperature,
                snapshot.feels_like,
                units.degree_symbol()
            ))
            .to_string(),
        palette::style_for(&p.humidity_colour)
            .apply_to(format!("Humidity: {}%", snapshot.humidity))
            .to_string(),
        palette::style_for(&p.wind_colour)
            .apply_to(format!("Wind: {} {}", snapshot.wind_speed, units.wind_unit()))
            .to_string(),
    ]
}

fn styled_glyph_lines(p: &Presentation) -> Vec<String> {
    let style = palette::style_for(&p.glyph_colour);
    p.glyph.lines().map(|l| style.apply_to(l).to_string()).collect()
}

/// Glyph panel plus details panel, the default view.
pub fn full_weather(theme: &Theme, snapshot: &WeatherSnapshot, units: Units) {
    let p = Presentation::of(theme, snapshot);

    println!("{}", panel(&styled_glyph_lines(&p), None, None, &theme.ascii_panel()));

    let title = palette::style_for(&p.city_colour)
        .apply_to(title_case(&snapshot.city))
        .to_string();
    let subtitle = Style::new()
        .dim()
        .apply_to(format!(
            "Coord: ({:.2}, {:.2}) | Country: {}",
            snapshot.coord.lon, snapshot.coord.lat, snapshot.country
        ))
        .to_string();

    println!(
        "{}",
        panel(
            &detail_lines(&p, snapshot, units),
            Some(&title),
            Some(&subtitle),
            &theme.panel()
        )
    );
}

/// Colorized glyph without a panel, for `--ascii`.
pub fn glyph_only(theme: &Theme, snapshot: &WeatherSnapshot) {
    let colour = theme.condition_colour(snapshot.condition);
    let art = glyphs::glyph(snapshot.condition, &snapshot.icon);
    println!("{}", palette::style_for(&colour).apply_to(art));
}

pub fn temperature_line(theme: &Theme, snapshot: &WeatherSnapshot, units: Units) {
    let colour = theme.temp_colour(temperature_bucket(snapshot.temperature));
    println!(
        "{}",
        palette::style_for(&colour).apply_to(format!(
            "Temperature: {:.1}{}",
            snapshot.temperature,
            units.degree_symbol()
        ))
    );
}

pub fn humidity_line(theme: &Theme, snapshot: &WeatherSnapshot) {
    let colour = theme.humid_colour(humidity_bucket(snapshot.humidity));
    println!(
        "{}",
        palette::style_for(&colour).apply_to(format!("Humidity: {}%", snapshot.humidity))
    );
}

pub fn description_line(theme: &Theme, snapshot: &WeatherSnapshot) {
    let colour = theme.condition_colour(snapshot.condition);
    println!(
        "{}",
        palette::style_for(&colour).apply_to(capitalize(&snapshot.description))
    );
}

/// Forecast cards keep the theme's border and box but fix their own
/// padding and minimum geometry.
fn card_style(theme: &Theme) -> PanelStyle {
    let mut style = theme.panel();
    style.padding_top_right = 1;
    style.padding_bottom_left = 4;
    style.width = 30;
    style.height = 20;
    style
}

/// Up to five forecast cards, arranged in rows sized to the terminal.
pub fn forecast_cards(theme: &Theme, entries: &[ForecastEntry], units: Units) {
    let style = card_style(theme);

    let cards: Vec<String> = entries
        .iter()
        .take(5)
        .map(|entry| forecast_card(theme, entry, units, &style))
        .collect();

    let cols = Term::stdout().size().1 as usize;
    let card_width = cards
        .iter()
        .flat_map(|c| c.lines())
        .map(measure_text_width)
        .max()
        .unwrap_or(30)
        + 2;
    let per_row = (cols / card_width).max(1);

    for chunk in cards.chunks(per_row) {
        println!("{}", join_horizontally(chunk, 2));
        println!();
    }
}

fn forecast_card(theme: &Theme, entry: &ForecastEntry, units: Units, style: &PanelStyle) -> String {
    let p = Presentation::of(theme, &entry.snapshot);

    let mut lines = styled_glyph_lines(&p);
    lines.push(String::new());
    lines.extend(detail_lines(&p, &entry.snapshot, units));

    let title = palette::style_for(&p.city_colour)
        .apply_to(entry.at.format("%a %d %b").to_string())
        .to_string();
    let subtitle = Style::new()
        .dim()
        .apply_to(entry.at.format("%I:%M %p").to_string())
        .to_string();

    panel(&lines, Some(&title), Some(&subtitle), style)
}

/// Numbered preview of every glyph in the catalog, for `--glyphs`.
pub fn show_all_glyphs() {
    for (i, (label, art)) in glyphs::catalog().iter().enumerate() {
        println!("{}. {label}\n{art}\n", i + 1);
    }
}

/// Sample panel per theme document found in the theme directory.
pub fn show_all_themes() -> Result<()> {
    let dir = theme_dir()?;
    let mut paths: Vec<PathBuf> = fs::read_dir(&dir)
        .with_context(|| format!("Failed to read theme directory: {}", dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().is_some_and(|ext| ext == "toml"))
        .collect();
    paths.sort();

    for path in paths {
        let theme = Theme::from_file(&path)?;
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .map(capitalize)
            .unwrap_or_default();

        let lines = vec![
            palette::style_for(&theme.condition_colour(sunny_core::Condition::Thunderstorm))
                .apply_to("Thunderstorm")
                .to_string(),
            palette::style_for(&theme.temp_colour(sunny_core::Bucket::Mid))
                .apply_to("Temp: 25.0° (feels 26.0°) °C")
                .to_string(),
            palette::style_for(&theme.humid_colour(sunny_core::Bucket::High))
                .apply_to("Humidity: 70%")
                .to_string(),
            palette::style_for(&theme.wind_colour())
                .apply_to("Wind: 3 m/s")
                .to_string(),
        ];
        let title = palette::style_for(&theme.city_colour()).apply_to(&name).to_string();
        let subtitle = Style::new()
            .dim()
            .apply_to(path.display().to_string())
            .to_string();

        println!("{}\n", panel(&lines, Some(&title), Some(&subtitle), &theme.panel()));
    }

    Ok(())
}
