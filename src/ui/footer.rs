use crate::ui::app::Route;
use crate::ui::detail::DetailMode;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer<'a> {
    hints: &'static str,
    error: Option<&'a str>,
}

impl<'a> Footer<'a> {
    pub fn new(route: Route, detail_mode: Option<&DetailMode>, error: Option<&'a str>) -> Self {
        Self {
            hints: hints_for(route, detail_mode),
            error,
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let version = format!("v{} ", VERSION);

        // Char count, not bytes: the hints contain arrows
        let hints_width = self.hints.chars().count();
        let version_width = version.chars().count();
        let error_width = self.error.map_or(0, |err| err.chars().count() + 3);
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(error_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let mut spans = vec![Span::styled(self.hints, text_style)];
        if let Some(error) = self.error {
            spans.push(Span::styled(" │ ", text_style));
            spans.push(Span::styled(error.to_string(), Style::default().fg(STATUS_ERROR)));
        }
        spans.push(Span::styled(" ".repeat(padding), text_style));
        spans.push(Span::styled(version, text_style));

        Paragraph::new(Line::from(spans))
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

fn hints_for(route: Route, detail_mode: Option<&DetailMode>) -> &'static str {
    match route {
        Route::Dashboard => " ↑↓: Select │ Enter: Open │ n: New │ r: Reload │ q: Quit",
        Route::Create => " Tab: Next field │ ←→: Frequency │ Enter: Create │ Esc: Back",
        Route::Detail => match detail_mode {
            Some(DetailMode::Viewing) => {
                " c: Complete │ e: Edit │ d: Delete │ r: Reload │ Esc: Back"
            }
            Some(DetailMode::Editing { .. }) => {
                " Tab: Switch field │ Enter: Save │ F2: Complete │ Esc: Cancel"
            }
            Some(DetailMode::ConfirmDelete { .. }) => " y: Delete │ n: Cancel",
            None => " Esc: Back │ Ctrl+Q: Quit",
        },
    }
}
