use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::ui::dashboard::state::DashboardState;
use crate::ui::theme::{
    ACCENT_GREEN, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, SOFT_MINT, SOFT_YELLOW,
    STATUS_ERROR, SUBTEXT,
};

const STATS_HEIGHT: u16 = 5;

pub fn render_dashboard(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let [stats_area, list_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(STATS_HEIGHT), Constraint::Min(0)])
        .areas(area);

    render_stats(frame, stats_area, state);
    render_habits(frame, list_area, state);
}

fn render_stats(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let stats = state.stats();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let cards = [
        ("Active Habits", stats.total.to_string(), "Total habits tracked", HEADER_TEXT),
        ("Completed Today", stats.completed_today.to_string(), "Keep going!", SOFT_MINT),
        ("Total Completions", stats.completions.to_string(), "All-time progress", SOFT_YELLOW),
    ];

    for ((label, value, note, tone), column) in cards.into_iter().zip(columns.iter()) {
        frame.render_widget(stat_card(label, value, note, tone), *column);
    }
}

fn stat_card(label: &'static str, value: String, note: &'static str, tone: Color) -> Paragraph<'static> {
    let lines = vec![
        Line::from(Span::styled(value, Style::default().fg(tone).add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(note, Style::default().fg(SUBTEXT))),
    ];
    Paragraph::new(lines).block(
        Block::default()
            .title(Span::styled(format!(" {} ", label), Style::default().fg(HEADER_TEXT)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}

fn render_habits(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let mut lines = Vec::new();

    if state.is_loading() {
        lines.push(Line::from(Span::styled("Loading...", Style::default().fg(SUBTEXT))));
    }
    if let Some(message) = state.error_message() {
        lines.push(Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(STATUS_ERROR),
        )));
    }

    if let DashboardState::Ready { habits, selected } = state {
        if habits.is_empty() {
            lines.push(Line::from(Span::styled(
                "No habits yet. Press n to create one.",
                Style::default().fg(SUBTEXT),
            )));
        }
        for (index, habit) in habits.iter().enumerate() {
            let description = if habit.description.is_empty() {
                "No description"
            } else {
                habit.description.as_str()
            };
            let mut title_line = Line::from(vec![
                Span::styled(" ✓ ", Style::default().fg(ACCENT_GREEN)),
                Span::styled(
                    habit.title.clone(),
                    Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(format!("[{}]", habit.frequency.as_str()), Style::default().fg(SOFT_MINT)),
            ]);
            let mut detail_line = Line::from(vec![
                Span::raw("   "),
                Span::styled(description.to_string(), Style::default().fg(SUBTEXT)),
                Span::styled(
                    format!("  ·  {} completions", habit.history_count),
                    Style::default().fg(SUBTEXT),
                ),
            ]);
            if index == *selected {
                let highlight = Style::default().bg(ACTIVE_HIGHLIGHT);
                title_line = title_line.style(highlight);
                detail_line = detail_line.style(highlight);
            }
            lines.push(title_line);
            lines.push(detail_line);
            lines.push(Line::from(""));
        }
    }

    let block = Block::default()
        .title(Span::styled(" Your Habits ", Style::default().fg(HEADER_TEXT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
