use crate::ui::app::Route;
use crate::ui::theme::{ACCENT_GREEN, GLOBAL_BORDER, HEADER_TEXT, SUBTEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    route: Route,
    base_url: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(route: Route, base_url: &'a str) -> Self {
        Self { route, base_url }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let screen = match self.route {
            Route::Dashboard => "My Habits",
            Route::Create => "New Habit",
            Route::Detail => "Habit",
        };
        let separator_style = Style::default().fg(GLOBAL_BORDER);
        let line = Line::from(vec![
            Span::raw("  "),
            Span::styled(
                "habitdeck",
                Style::default().fg(ACCENT_GREEN).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(screen, Style::default().fg(HEADER_TEXT)),
            Span::styled("  │  ", separator_style),
            Span::styled(self.base_url.to_string(), Style::default().fg(SUBTEXT)),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
