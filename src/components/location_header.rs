use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use crate::action::Action;
use crate::state::WeatherSnapshot;

pub struct LocationHeader;

pub struct LocationHeaderProps<'a> {
    pub snapshot: &'a WeatherSnapshot,
}

/// Rows: city, country, coordinates.
pub const HEADER_HEIGHT: u16 = 3;

/// City tint follows the temperature band.
fn city_color(celsius: i32) -> Color {
    match celsius {
        t if t < 0 => Color::Rgb(170, 215, 255),
        t if t < 15 => Color::Rgb(120, 200, 230),
        t if t < 25 => Color::Rgb(120, 210, 160),
        t if t < 35 => Color::Rgb(255, 170, 80),
        _ => Color::Rgb(255, 90, 70),
    }
}

impl Component<Action> for LocationHeader {
    type Props<'a> = LocationHeaderProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::vertical([
            Constraint::Length(1), // City
            Constraint::Length(1), // Country
            Constraint::Length(1), // Coordinates
        ])
        .split(area);

        let snapshot = props.snapshot;

        let city = Line::from(Span::styled(
            snapshot.city_name.clone(),
            Style::default()
                .fg(city_color(snapshot.temperature_celsius))
                .bold(),
        ))
        .centered();
        frame.render_widget(Paragraph::new(city), chunks[0]);

        let country = Line::from(Span::styled(
            snapshot.country_code.clone(),
            Style::default().fg(Color::Gray),
        ))
        .centered();
        frame.render_widget(Paragraph::new(country), chunks[1]);

        let label = Style::default().fg(Color::DarkGray);
        let value = Style::default().fg(Color::White);
        let coords = Line::from(vec![
            Span::styled("Latitude: ", label),
            Span::styled(snapshot.latitude.to_string(), value),
            Span::raw("    "),
            Span::styled("Longitude: ", label),
            Span::styled(snapshot.longitude.to_string(), value),
        ])
        .centered();
        frame.render_widget(Paragraph::new(coords), chunks[2]);
    }
}
