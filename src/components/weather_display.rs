use crossterm::event::{KeyCode, KeyEventKind, KeyModifiers};
use ratatui::layout::{Constraint, Layout};
use ratatui::prelude::{Frame, Rect};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::{
    Component, ErrorBanner, ErrorBannerProps, SearchBar, SearchBarProps, WeatherBody,
    WeatherBodyProps,
};
use crate::action::Action;
use crate::state::AppState;

/// Props for WeatherDisplay - read-only view of state
pub struct WeatherDisplayProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// The whole screen: search bar, error banners, result block, key hints
#[derive(Default)]
pub struct WeatherDisplay {
    search: SearchBar,
}

impl WeatherDisplay {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component<Action> for WeatherDisplay {
    type Props<'a> = WeatherDisplayProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }

        if let EventKind::Key(key) = event {
            if key.kind != KeyEventKind::Release {
                let ctrl_c = key.code == KeyCode::Char('c')
                    && key.modifiers.contains(KeyModifiers::CONTROL);
                if key.code == KeyCode::Esc || ctrl_c {
                    return vec![Action::Quit];
                }
            }
        }

        self.search
            .handle_event(
                event,
                SearchBarProps {
                    value: &props.state.search_input,
                    is_focused: true,
                    on_change: Action::SearchInputChange,
                    on_submit: Action::WeatherQuery,
                },
            )
            .into_iter()
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: WeatherDisplayProps<'_>) {
        let state = props.state;
        let banners = state.banners();

        let chunks = Layout::vertical([
            Constraint::Length(3),                   // Search bar
            Constraint::Length(banners.len() as u16), // Error banners
            Constraint::Min(1),                      // Weather block
            Constraint::Length(1),                   // Help bar
        ])
        .split(area);

        self.search.render(
            frame,
            chunks[0],
            SearchBarProps {
                value: &state.search_input,
                is_focused: props.is_focused,
                on_change: Action::SearchInputChange,
                on_submit: Action::WeatherQuery,
            },
        );

        if !banners.is_empty() {
            let mut banner = ErrorBanner;
            banner.render(frame, chunks[1], ErrorBannerProps { messages: &banners });
        }

        let mut body = WeatherBody;
        body.render(
            frame,
            chunks[2],
            WeatherBodyProps {
                snapshot: &state.snapshot,
            },
        );

        let loading = [StatusBarHint::new("\u{2026}", "loading")];
        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            chunks[3],
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&[
                    StatusBarHint::new("Enter", "search"),
                    StatusBarHint::new("Esc", "quit"),
                ]),
                right: if state.loading {
                    StatusBarSection::hints(&loading)
                } else {
                    StatusBarSection::empty()
                },
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}
