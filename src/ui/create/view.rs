use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::api::Frequency;
use crate::ui::create::state::{CreateField, CreateState};
use crate::ui::theme::{
    ACCENT_GREEN, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR, SUBTEXT,
};

const CURSOR: &str = "▏";

pub fn render_create(frame: &mut Frame, area: Rect, state: &CreateState) {
    let mut lines = vec![
        Line::from(Span::styled(
            "Create New Habit",
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Define a habit you want to build and track your progress",
            Style::default().fg(SUBTEXT),
        )),
        Line::from(""),
    ];

    lines.extend(text_field(
        "Habit Name",
        &state.draft.title,
        "e.g., Morning meditation",
        state.focus == CreateField::Title,
    ));
    lines.extend(text_field(
        "Description (optional)",
        &state.draft.description,
        "Add details about this habit...",
        state.focus == CreateField::Description,
    ));

    lines.push(label_line("Frequency", state.focus == CreateField::Frequency));
    let mut options = vec![Span::raw("  ")];
    for frequency in Frequency::ALL {
        let style = if frequency == state.draft.frequency {
            Style::default()
                .fg(ACCENT_GREEN)
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(SUBTEXT)
        };
        options.push(Span::styled(format!(" {} ", frequency.label()), style));
        options.push(Span::raw("  "));
    }
    lines.push(Line::from(options));
    lines.push(Line::from(""));

    if let Some(error) = &state.error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(STATUS_ERROR),
        )));
        lines.push(Line::from(""));
    }

    let button = if state.submitting {
        Span::styled(" Saving... ", Style::default().fg(SUBTEXT))
    } else {
        Span::styled(
            " Create Habit (Enter) ",
            Style::default()
                .fg(HEADER_TEXT)
                .bg(ACCENT_GREEN)
                .add_modifier(Modifier::BOLD),
        )
    };
    lines.push(Line::from(vec![Span::raw("  "), button]));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

fn label_line(label: &'static str, focused: bool) -> Line<'static> {
    let marker = if focused { "▸ " } else { "  " };
    Line::from(vec![
        Span::styled(marker, Style::default().fg(ACCENT_GREEN)),
        Span::styled(label, Style::default().fg(HEADER_TEXT)),
    ])
}

fn text_field(
    label: &'static str,
    value: &str,
    placeholder: &'static str,
    focused: bool,
) -> Vec<Line<'static>> {
    let content = if value.is_empty() && !focused {
        Span::styled(placeholder, Style::default().fg(SUBTEXT))
    } else {
        Span::styled(value.to_string(), Style::default().fg(HEADER_TEXT))
    };
    let mut spans = vec![Span::raw("  "), content];
    if focused {
        spans.push(Span::styled(CURSOR, Style::default().fg(ACCENT_GREEN)));
    }
    vec![label_line(label, focused), Line::from(spans), Line::from("")]
}
