use artbox::{
    Alignment as ArtAlignment, Color as ArtColor, Fill, LinearGradient, Renderer, fonts,
    integrations::ratatui::ArtBox,
};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::location_header::HEADER_HEIGHT;
use super::{Component, LocationHeader, LocationHeaderProps};
use crate::action::Action;
use crate::icons::{self, HUMIDITY_GLYPH, SPRITE_HEIGHT, WIND_GLYPH};
use crate::state::WeatherSnapshot;

/// Always-present result block: icon, temperature, location, humidity, wind
pub struct WeatherBody;

pub struct WeatherBodyProps<'a> {
    pub snapshot: &'a WeatherSnapshot,
}

/// Tallest the FIGlet temperature may grow.
const TEMP_CAP: u16 = 4;

/// Rows besides icon art and temperature: label, two spacers, header, readings.
const LAYOUT_FIXED: u16 = 1 + 2 + HEADER_HEIGHT + READINGS_HEIGHT;

/// Value line plus caption line.
const READINGS_HEIGHT: u16 = 2;

fn font_stack() -> Vec<artbox::Font> {
    fonts::stack(&["terminus", "miniwi"])
}

impl Component<Action> for WeatherBody {
    type Props<'a> = WeatherBodyProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let snapshot = props.snapshot;
        let art_budget = area.height.saturating_sub(LAYOUT_FIXED + TEMP_CAP);
        let sprite = icons::icon_sprite(snapshot.icon, art_budget);
        let icon_h = if sprite.is_some() { SPRITE_HEIGHT } else { 1 };

        let chunks = Layout::vertical([
            Constraint::Length(icon_h),          // Icon art or emoji
            Constraint::Length(1),               // Icon label
            Constraint::Max(TEMP_CAP),           // Temperature
            Constraint::Length(1),               // Spacer
            Constraint::Length(HEADER_HEIGHT),   // City, country, coordinates
            Constraint::Length(1),               // Spacer
            Constraint::Length(READINGS_HEIGHT), // Humidity & wind
        ])
        .flex(Flex::Center)
        .split(area);

        match sprite {
            Some(art) => {
                frame.render_widget(Paragraph::new(art).alignment(Alignment::Center), chunks[0]);
            }
            None => {
                let emoji = Line::from(snapshot.icon.emoji()).centered();
                frame.render_widget(Paragraph::new(emoji), chunks[0]);
            }
        }

        let label = Line::from(Span::styled(
            snapshot.icon.label(),
            Style::default().fg(Color::Gray),
        ))
        .centered();
        frame.render_widget(Paragraph::new(label), chunks[1]);

        let renderer = Renderer::new(font_stack())
            .with_plain_fallback()
            .with_alignment(ArtAlignment::Center)
            .with_fill(temperature_gradient(snapshot.temperature_celsius));
        frame.render_widget(
            ArtBox::new(&renderer, &snapshot.temperature_label()),
            chunks[2],
        );

        let mut header = LocationHeader;
        header.render(frame, chunks[4], LocationHeaderProps { snapshot });

        render_readings(frame, chunks[6], snapshot);
    }
}

fn render_readings(frame: &mut Frame, area: Rect, snapshot: &WeatherSnapshot) {
    let columns =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).split(area);

    frame.render_widget(
        reading(HUMIDITY_GLYPH, snapshot.humidity_label(), "Humidity"),
        columns[0],
    );
    frame.render_widget(
        reading(WIND_GLYPH, snapshot.wind_label(), "Wind"),
        columns[1],
    );
}

fn reading(glyph: &str, value: String, caption: &'static str) -> Paragraph<'static> {
    Paragraph::new(vec![
        Line::from(vec![
            Span::raw(format!("{glyph} ")),
            Span::styled(value, Style::default().fg(Color::White).bold()),
        ]),
        Line::from(Span::styled(caption, Style::default().fg(Color::DarkGray))),
    ])
    .alignment(Alignment::Center)
}

fn temperature_gradient(celsius: i32) -> Fill {
    let (start, end) = match celsius {
        t if t < 0 => (
            ArtColor::rgb(150, 200, 255),
            ArtColor::rgb(200, 230, 255),
        ),
        t if t < 15 => (
            ArtColor::rgb(100, 180, 255),
            ArtColor::rgb(150, 220, 200),
        ),
        t if t < 25 => (
            ArtColor::rgb(100, 200, 150),
            ArtColor::rgb(255, 220, 100),
        ),
        t if t < 35 => (
            ArtColor::rgb(255, 180, 80),
            ArtColor::rgb(255, 120, 80),
        ),
        _ => (
            ArtColor::rgb(255, 100, 80),
            ArtColor::rgb(255, 60, 60),
        ),
    };
    Fill::Linear(LinearGradient::horizontal(start, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icons::WeatherIcon;
    use tui_dispatch::testing::*;

    fn chennai() -> WeatherSnapshot {
        WeatherSnapshot {
            temperature_celsius: 31,
            city_name: "Chennai".into(),
            country_code: "IN".into(),
            latitude: 13.08,
            longitude: 80.27,
            humidity_percent: 66,
            wind_speed_kmh: 4.12,
            icon: WeatherIcon::Clear,
        }
    }

    #[test]
    fn test_render_readings() {
        let mut render = RenderHarness::new(60, 20);
        let snapshot = chennai();

        let output = render.render_to_string_plain(|frame| {
            WeatherBody.render(frame, frame.area(), WeatherBodyProps { snapshot: &snapshot });
        });

        assert!(output.contains("66%"), "{output}");
        assert!(output.contains("Humidity"), "{output}");
        assert!(output.contains("4.12 km/h"), "{output}");
        assert!(output.contains("Wind"), "{output}");
        assert!(output.contains("Chennai"), "{output}");
        assert!(output.contains("Latitude: 13.08"), "{output}");
        assert!(output.contains(".-~~~-."), "sun art expected:\n{output}");
    }

    #[test]
    fn test_render_defaults_before_first_result() {
        let mut render = RenderHarness::new(60, 20);
        let snapshot = WeatherSnapshot::default();

        let output = render.render_to_string_plain(|frame| {
            WeatherBody.render(frame, frame.area(), WeatherBodyProps { snapshot: &snapshot });
        });

        assert!(output.contains("0%"), "{output}");
        assert!(output.contains("0 km/h"), "{output}");
        assert!(output.contains("Latitude: 0"), "{output}");
    }

    #[test]
    fn test_small_area_uses_emoji() {
        let mut render = RenderHarness::new(40, 10);
        let snapshot = chennai();

        let output = render.render_to_string_plain(|frame| {
            WeatherBody.render(frame, frame.area(), WeatherBodyProps { snapshot: &snapshot });
        });

        assert!(!output.contains(".-~~~-."), "{output}");
        assert!(output.contains("66%"), "{output}");
    }
}
