use crossterm::event::{KeyCode, KeyEventKind};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{BaseStyle, Padding, TextInput, TextInputProps, TextInputStyle};

use super::Component;
use crate::action::Action;
use crate::icons::SEARCH_GLYPH;

pub const SEARCH_PLACEHOLDER: &str = "Search for a city...";

/// Width of the search-trigger control.
const BUTTON_WIDTH: u16 = 22;

/// City input plus the search-trigger control
pub struct SearchBar {
    input: TextInput,
}

pub struct SearchBarProps<'a> {
    pub value: &'a str,
    pub is_focused: bool,
    // Action constructors
    pub on_change: fn(String) -> Action,
    pub on_submit: fn(String) -> Action,
}

impl Default for SearchBar {
    fn default() -> Self {
        Self {
            input: TextInput::new(),
        }
    }
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component<Action> for SearchBar {
    type Props<'a> = SearchBarProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }

        let EventKind::Key(key) = event else {
            return Vec::new();
        };
        if key.kind == KeyEventKind::Release {
            return Vec::new();
        }

        // Submit keypress triggers the search with whatever is typed
        if key.code == KeyCode::Enter {
            return vec![(props.on_submit)(props.value.to_string())];
        }

        let input_props = TextInputProps {
            value: props.value,
            placeholder: SEARCH_PLACEHOLDER,
            is_focused: true,
            style: input_style(None),
            on_change: props.on_change,
            on_submit: props.on_submit,
            on_cursor_move: Some(|_| Action::Render),
        };
        self.input
            .handle_event(event, input_props)
            .into_iter()
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks =
            Layout::horizontal([Constraint::Min(10), Constraint::Length(BUTTON_WIDTH)]).split(area);

        let input_props = TextInputProps {
            value: props.value,
            placeholder: SEARCH_PLACEHOLDER,
            is_focused: props.is_focused,
            style: input_style(Some(Color::Rgb(50, 50, 60))),
            on_change: props.on_change,
            on_submit: props.on_submit,
            on_cursor_move: Some(|_| Action::Render),
        };
        self.input.render(frame, chunks[0], input_props);

        let button_style = Style::default().bg(Color::Rgb(70, 70, 90)).fg(Color::White);
        let button = Paragraph::new(vec![
            Line::default(),
            Line::from(vec![
                Span::raw(format!("{SEARCH_GLYPH} ")),
                Span::styled("Search", Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(" (Enter)", Style::default().fg(Color::Gray)),
            ]),
        ])
        .alignment(Alignment::Center)
        .style(button_style);
        frame.render_widget(button, chunks[1]);
    }
}

fn input_style(bg: Option<Color>) -> TextInputStyle {
    TextInputStyle {
        base: BaseStyle {
            border: None,
            padding: Padding::all(1),
            bg,
            fg: None,
        },
        placeholder_style: None,
        cursor_style: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};
    use tui_dispatch::testing::*;

    fn props(value: &str, is_focused: bool) -> SearchBarProps<'_> {
        SearchBarProps {
            value,
            is_focused,
            on_change: Action::SearchInputChange,
            on_submit: Action::WeatherQuery,
        }
    }

    #[test]
    fn test_enter_submits_current_text() {
        let mut bar = SearchBar::new();
        let enter = EventKind::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));

        let actions: Vec<_> = bar
            .handle_event(&enter, props("Paris", true))
            .into_iter()
            .collect();

        actions.assert_count(1);
        actions.assert_first(Action::WeatherQuery("Paris".into()));
    }

    #[test]
    fn test_enter_submits_blank_text() {
        let mut bar = SearchBar::new();
        let enter = EventKind::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));

        let actions: Vec<_> = bar
            .handle_event(&enter, props("", true))
            .into_iter()
            .collect();

        actions.assert_first(Action::WeatherQuery(String::new()));
    }

    #[test]
    fn test_unfocused_ignores() {
        let mut bar = SearchBar::new();
        let enter = EventKind::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));

        let actions: Vec<_> = bar
            .handle_event(&enter, props("Paris", false))
            .into_iter()
            .collect();

        actions.assert_empty();
    }

    #[test]
    fn test_render_shows_placeholder_and_button() {
        let mut render = RenderHarness::new(60, 3);
        let mut bar = SearchBar::new();

        let output = render.render_to_string_plain(|frame| {
            bar.render(frame, frame.area(), props("", true));
        });

        assert!(output.contains("Search"), "button label:\n{output}");
        assert!(output.contains("Enter"), "submit hint:\n{output}");
    }
}
