//! Weather icon map and the terminal art bound to each icon
//!
//! OpenWeather reports conditions as short icon codes (`01d`, `10n`, ...).
//! Only a closed set of codes has a dedicated icon; everything else, including
//! a missing or empty code, falls back to [`WeatherIcon::Clear`].
//!
//! Icons are drawn as layered ASCII art: each layer carries its own color and
//! spaces are transparent, so a sun can sit behind a cloud.

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span, Text};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================================
// Icon map
// ============================================================================

/// Local icon assets, one per group of provider codes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum WeatherIcon {
    #[default]
    Clear,
    Clouds,
    Drizzle,
    Rain,
    Snow,
}

/// Every provider code with a dedicated icon.
pub const KNOWN_CODES: [&str; 14] = [
    "01d", "01n", "02d", "02n", "03d", "03n", "04d", "04n", "09d", "09n", "10d", "10n", "13d",
    "13n",
];

/// Icon shown for unknown or missing codes.
pub const FALLBACK_ICON: WeatherIcon = WeatherIcon::Clear;

impl WeatherIcon {
    /// Resolve a provider icon code.
    pub fn from_code(code: &str) -> Self {
        match code {
            "01d" | "01n" => WeatherIcon::Clear,
            "02d" | "02n" => WeatherIcon::Clouds,
            "03d" | "03n" | "04d" | "04n" => WeatherIcon::Drizzle,
            "09d" | "09n" | "10d" | "10n" => WeatherIcon::Rain,
            "13d" | "13n" => WeatherIcon::Snow,
            _ => FALLBACK_ICON,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WeatherIcon::Clear => "Clear",
            WeatherIcon::Clouds => "Clouds",
            WeatherIcon::Drizzle => "Drizzle",
            WeatherIcon::Rain => "Rain",
            WeatherIcon::Snow => "Snow",
        }
    }

    /// Emoji representation for when the art doesn't fit
    pub fn emoji(self) -> &'static str {
        match self {
            WeatherIcon::Clear => "\u{2600}\u{fe0f}",
            WeatherIcon::Clouds => "\u{26c5}",
            WeatherIcon::Drizzle => "\u{1f326}\u{fe0f}",
            WeatherIcon::Rain => "\u{1f327}\u{fe0f}",
            WeatherIcon::Snow => "\u{2744}\u{fe0f}",
        }
    }

    /// Layered art for this icon.
    pub fn sprite(self) -> Text<'static> {
        let layers: Vec<SpriteLayer> = match self {
            WeatherIcon::Clear => vec![SpriteLayer {
                lines: art::SUN,
                color: Color::Yellow,
            }],
            WeatherIcon::Clouds => vec![
                SpriteLayer {
                    lines: art::SUN_BEHIND,
                    color: Color::Yellow,
                },
                SpriteLayer {
                    lines: art::CLOUD_LOW,
                    color: Color::Rgb(200, 200, 210),
                },
            ],
            WeatherIcon::Drizzle => vec![
                SpriteLayer {
                    lines: art::CLOUD_HIGH,
                    color: Color::Rgb(160, 160, 175),
                },
                SpriteLayer {
                    lines: art::DRIZZLE,
                    color: Color::Rgb(130, 170, 200),
                },
            ],
            WeatherIcon::Rain => vec![
                SpriteLayer {
                    lines: art::CLOUD_HIGH,
                    color: Color::Rgb(160, 160, 175),
                },
                SpriteLayer {
                    lines: art::RAIN,
                    color: Color::Rgb(80, 140, 200),
                },
            ],
            WeatherIcon::Snow => vec![
                SpriteLayer {
                    lines: art::CLOUD_HIGH,
                    color: Color::Rgb(160, 160, 175),
                },
                SpriteLayer {
                    lines: art::SNOW,
                    color: Color::Rgb(200, 220, 255),
                },
            ],
        };
        composite_layers(&layers)
    }
}

/// Glyph for the search-trigger control.
pub const SEARCH_GLYPH: &str = "\u{1f50d}";
/// Glyph shown next to the humidity reading.
pub const HUMIDITY_GLYPH: &str = "\u{1f4a7}";
/// Glyph shown next to the wind reading.
pub const WIND_GLYPH: &str = "\u{1f32c}\u{fe0f}";
pub const ERROR_GLYPH: &str = "\u{26a0}\u{fe0f}";

/// Rows taken by every sprite.
pub const SPRITE_HEIGHT: u16 = 5;

/// Sprite for the icon if `available_height` rows can hold it.
pub fn icon_sprite(icon: WeatherIcon, available_height: u16) -> Option<Text<'static>> {
    (available_height >= SPRITE_HEIGHT).then(|| icon.sprite())
}

// ============================================================================
// Art
// ============================================================================

mod art {
    pub const SUN: &[&str] = &[
        r"    \   |   /    ",
        r"     .-~~~-.     ",
        r" -- (       ) -- ",
        r"     `-___-'     ",
        r"    /   |   \    ",
    ];

    pub const SUN_BEHIND: &[&str] = &[
        r"   \  |  /       ",
        r"  -- ( )         ",
        r"   /  |  \       ",
        r"                 ",
        r"                 ",
    ];

    pub const CLOUD_LOW: &[&str] = &[
        r"                 ",
        r"        .--.     ",
        r"     .-(    ).   ",
        r"    (___.__)__)  ",
        r"                 ",
    ];

    pub const CLOUD_HIGH: &[&str] = &[
        r"       .--.      ",
        r"    .-(    ).    ",
        r"   (___.__)__)   ",
        r"                 ",
        r"                 ",
    ];

    pub const DRIZZLE: &[&str] = &[
        r"                 ",
        r"                 ",
        r"                 ",
        r"     '   '   '   ",
        r"    '   '   '    ",
    ];

    pub const RAIN: &[&str] = &[
        r"                 ",
        r"                 ",
        r"                 ",
        r"    / / / / /    ",
        r"   / / / / /     ",
    ];

    pub const SNOW: &[&str] = &[
        r"                 ",
        r"                 ",
        r"                 ",
        r"    *  *  *  *   ",
        r"     *  *  *     ",
    ];
}

// ============================================================================
// Layer compositing
// ============================================================================

/// A single sprite layer with its content and color
struct SpriteLayer {
    lines: &'static [&'static str],
    color: Color,
}

/// Composite layers into Text, treating spaces as transparent
fn composite_layers(layers: &[SpriteLayer]) -> Text<'static> {
    let max_lines = layers.iter().map(|l| l.lines.len()).max().unwrap_or(0);
    let max_width = layers
        .iter()
        .flat_map(|l| l.lines.iter())
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);

    let layer_chars: Vec<Vec<Vec<char>>> = layers
        .iter()
        .map(|l| l.lines.iter().map(|line| line.chars().collect()).collect())
        .collect();

    let mut result_lines = Vec::with_capacity(max_lines);
    for line_idx in 0..max_lines {
        let mut spans = Vec::with_capacity(max_width);
        for col_idx in 0..max_width {
            // Last layer is the foreground
            let (ch, color) = layers
                .iter()
                .enumerate()
                .rev()
                .find_map(|(layer_idx, layer)| {
                    layer_chars[layer_idx]
                        .get(line_idx)
                        .and_then(|line| line.get(col_idx))
                        .filter(|ch| **ch != ' ')
                        .map(|ch| (*ch, layer.color))
                })
                .unwrap_or((' ', Color::Reset));
            spans.push(Span::styled(ch.to_string(), Style::default().fg(color)));
        }
        result_lines.push(Line::from(spans));
    }

    Text::from(result_lines)
}
