use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use crate::action::Action;
use crate::icons::ERROR_GLYPH;

/// One row per active error message
pub struct ErrorBanner;

pub struct ErrorBannerProps<'a> {
    pub messages: &'a [&'a str],
}

impl Component<Action> for ErrorBanner {
    type Props<'a> = ErrorBannerProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let lines: Vec<Line> = props
            .messages
            .iter()
            .map(|message| {
                Line::from(vec![
                    Span::raw(format!("{ERROR_GLYPH} ")),
                    Span::styled(
                        message.to_string(),
                        Style::default().fg(Color::Rgb(230, 110, 110)).bold(),
                    ),
                ])
                .centered()
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), area);
    }
}
