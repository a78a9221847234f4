use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::habit::{CompletionHistory, HISTORY_SLOTS};
use crate::ui::detail::state::{DetailMode, DetailState, DetailView, EditField, EditForm};
use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{
    ACCENT_GREEN, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, POPUP_BORDER, SOFT_MINT,
    SOFT_YELLOW, STATUS_ERROR, SUBTEXT,
};

/// Cells per row of the completion grid.
const GRID_COLUMNS: usize = 7;

const MODAL_WIDTH: u16 = 46;
const MODAL_HEIGHT: u16 = 7;

pub fn render_detail(frame: &mut Frame, area: Rect, state: &DetailState) {
    match state {
        DetailState::Loading { .. } => {
            frame.render_widget(message("Loading...", SUBTEXT), area);
        }
        DetailState::Error { message: text } => {
            frame.render_widget(message(text, STATUS_ERROR), area);
        }
        DetailState::Ready(view) => {
            let grid_height = (HISTORY_SLOTS / GRID_COLUMNS) as u16 * 2 + 2;
            let [card_area, grid_area] = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(grid_height)])
                .areas(area);

            render_card(frame, card_area, view);
            render_history(frame, grid_area, &view.history);

            if let DetailMode::ConfirmDelete { deleting } = view.mode {
                render_delete_modal(frame, area, &view.habit.title, deleting);
            }
        }
    }
}

fn message(text: &str, color: ratatui::style::Color) -> Paragraph<'static> {
    Paragraph::new(Line::from(Span::styled(text.to_string(), Style::default().fg(color))))
        .block(bordered(""))
}

fn bordered(title: &str) -> Block<'static> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    if title.is_empty() {
        block
    } else {
        block.title(Span::styled(format!(" {} ", title), Style::default().fg(HEADER_TEXT)))
    }
}

fn render_card(frame: &mut Frame, area: Rect, view: &DetailView) {
    let habit = &view.habit;
    let mut lines = vec![Line::from(Span::styled(
        format!(" {} ", habit.frequency.as_str()),
        Style::default().fg(SOFT_MINT).bg(ACTIVE_HIGHLIGHT).add_modifier(Modifier::BOLD),
    ))];

    match &view.mode {
        DetailMode::Editing { form, saving } => lines.extend(edit_lines(form, *saving)),
        _ => {
            lines.push(Line::from(Span::styled(
                habit.title.clone(),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                habit.description.clone(),
                Style::default().fg(SUBTEXT),
            )));
        }
    }
    lines.push(Line::from(""));

    lines.push(Line::from(vec![
        Span::styled("Total Completions: ", Style::default().fg(SUBTEXT)),
        Span::styled(
            habit.history_count.to_string(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ),
        Span::raw("    "),
        Span::styled("Streak Power: ", Style::default().fg(SUBTEXT)),
        Span::styled(
            habit.status.clone(),
            Style::default().fg(SOFT_YELLOW).add_modifier(Modifier::BOLD),
        ),
        Span::raw("    "),
        Span::styled("Today: ", Style::default().fg(SUBTEXT)),
        Span::styled(
            habit.today_completions.to_string(),
            Style::default().fg(SOFT_MINT).add_modifier(Modifier::BOLD),
        ),
    ]));

    if let Some(created_at) = &habit.created_at {
        lines.push(Line::from(Span::styled(
            format!("Created {}", created_at),
            Style::default().fg(SUBTEXT),
        )));
    }

    if view.completing {
        lines.push(Line::from(Span::styled(
            "Saving completion...",
            Style::default().fg(SUBTEXT),
        )));
    }
    if let Some(notice) = &view.notice {
        lines.push(Line::from(Span::styled(
            notice.clone(),
            Style::default().fg(STATUS_ERROR),
        )));
    }

    frame.render_widget(
        Paragraph::new(lines)
            .block(bordered("Habit"))
            .wrap(Wrap { trim: false }),
        area,
    );
}

fn edit_lines(form: &EditForm, saving: bool) -> Vec<Line<'static>> {
    let field = |label: &'static str, value: &str, focused: bool| {
        let marker = if focused && !saving { "▸ " } else { "  " };
        Line::from(vec![
            Span::styled(marker, Style::default().fg(ACCENT_GREEN)),
            Span::styled(format!("{}: ", label), Style::default().fg(SUBTEXT)),
            Span::styled(value.to_string(), Style::default().fg(HEADER_TEXT)),
        ])
    };
    let mut lines = vec![
        field("Title", &form.title, form.focus == EditField::Title),
        field("Description", &form.description, form.focus == EditField::Description),
    ];
    if saving {
        lines.push(Line::from(Span::styled("Saving...", Style::default().fg(SUBTEXT))));
    }
    lines
}

fn render_history(frame: &mut Frame, area: Rect, history: &CompletionHistory) {
    let mut lines = Vec::new();
    for row in history.slots().chunks(GRID_COLUMNS) {
        let mut spans = vec![Span::raw(" ")];
        for done in row {
            if *done {
                spans.push(Span::styled(
                    " ✓ ",
                    Style::default().fg(HEADER_TEXT).bg(ACCENT_GREEN),
                ));
            } else {
                spans.push(Span::styled(" · ", Style::default().fg(SUBTEXT)));
            }
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    frame.render_widget(
        Paragraph::new(lines).block(bordered("Completion History")),
        area,
    );
}

fn render_delete_modal(frame: &mut Frame, area: Rect, title: &str, deleting: bool) {
    let modal = centered_rect_by_size(area, MODAL_WIDTH, MODAL_HEIGHT);
    frame.render_widget(Clear, modal);

    let lines = vec![
        Line::from(Span::styled(
            format!("Delete \"{}\"?", title),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "This cannot be undone.",
            Style::default().fg(SUBTEXT),
        )),
        Line::from(""),
        if deleting {
            Line::from(Span::styled("Deleting...", Style::default().fg(SUBTEXT)))
        } else {
            Line::from(vec![
                Span::styled(" y ", Style::default().fg(HEADER_TEXT).bg(STATUS_ERROR)),
                Span::styled(" Delete    ", Style::default().fg(HEADER_TEXT)),
                Span::styled(" n ", Style::default().fg(HEADER_TEXT).bg(ACTIVE_HIGHLIGHT)),
                Span::styled(" Cancel", Style::default().fg(HEADER_TEXT)),
            ])
        },
    ];

    let block = Block::default()
        .title(" Delete habit ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), modal);
}
