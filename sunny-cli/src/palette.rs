//! Resolution of theme colour tokens to terminal styles.
//!
//! Theme documents carry palette names (`dark_orange`, `sky_blue1`) rather
//! than escape codes. Unknown tokens render unstyled so a theme with exotic
//! names still produces readable output.

use console::Style;

/// ANSI-256 index for a palette name. Covers the tokens used by the shipped
/// themes and every accessor fallback, plus the base terminal colours.
fn ansi_index(token: &str) -> Option<u8> {
    let idx = match token {
        "black" => 0,
        "red" => 1,
        "green" => 2,
        "yellow" => 3,
        "blue" => 4,
        "magenta" => 5,
        "cyan" => 6,
        "white" => 7,
        "bright_white" => 15,
        "dodger_blue2" => 27,
        "deep_sky_blue2" => 38,
        "deep_sky_blue1" => 39,
        "turquoise2" => 45,
        "spring_green1" => 48,
        "cyan1" => 51,
        "cornflower_blue" => 69,
        "chartreuse3" => 76,
        "steel_blue1" => 81,
        "slate_blue1" => 99,
        "grey53" => 102,
        "medium_purple" => 104,
        "sky_blue1" => 117,
        "aquamarine1" => 122,
        "light_steel_blue3" => 146,
        "light_steel_blue" => 147,
        "green_yellow" => 154,
        "indian_red" => 167,
        "orchid" => 170,
        "deep_pink2" => 197,
        "magenta1" => 201,
        "hot_pink" => 205,
        "dark_orange" => 208,
        "sandy_brown" => 215,
        "gold1" => 220,
        "grey62" => 247,
        "grey74" => 250,
        "grey85" => 253,
        _ => return None,
    };
    Some(idx)
}

/// Build a style for a single colour token.
pub fn style_for(token: &str) -> Style {
    match ansi_index(token) {
        Some(idx) => Style::new().color256(idx),
        None => Style::new(),
    }
}

/// Build a border style from the theme's attribute and colour tokens,
/// e.g. `"bold"` + `"light_steel_blue"`.
pub fn border(attribute: &str, colour: &str) -> Style {
    apply_attribute(style_for(colour), attribute)
}

fn apply_attribute(style: Style, name: &str) -> Style {
    match name {
        "bold" => style.bold(),
        "dim" => style.dim(),
        "italic" => style.italic(),
        "underline" => style.underlined(),
        _ => style,
    }
}
