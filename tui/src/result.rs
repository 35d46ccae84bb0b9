//! The judging overlay: spinner while the verdict is out, critique card once
//! it lands.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap},
};

use skillet_engine::{App, CookingResult};

use crate::theme::{Palette, spinner_frame};

pub fn draw(frame: &mut Frame, app: &App, palette: &Palette, frame_count: usize) {
    let session = app.session();
    if !session.loading() && session.result().is_none() {
        return;
    }

    let area = centered_rect(frame.area(), 60, 14);
    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(palette.flame))
        .padding(Padding::uniform(1))
        .style(Style::default().bg(palette.bg_popup));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if session.loading() {
        draw_spinner(frame, inner, palette, frame_count);
    } else if let Some(result) = session.result() {
        draw_verdict(frame, inner, palette, result);
    }
}

fn draw_spinner(frame: &mut Frame, area: Rect, palette: &Palette, frame_count: usize) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{} Tasting your creation...", spinner_frame(frame_count)),
            Style::default()
                .fg(palette.flame)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Gemini is judging you.",
            Style::default()
                .fg(palette.text_muted)
                .add_modifier(Modifier::ITALIC),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        area,
    );
}

fn draw_verdict(frame: &mut Frame, area: Rect, palette: &Palette, result: &CookingResult) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // dish name
            Constraint::Length(2), // rating + score
            Constraint::Min(2),    // critique
            Constraint::Length(1), // hint
        ])
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        format!("🏆 {}", result.dish_name),
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let rating = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" {} ", result.rating),
            Style::default()
                .fg(palette.bg_dark)
                .bg(palette.butter)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  •  ", Style::default().fg(palette.text_muted)),
        Span::styled(
            format!("{}/10", result.score),
            Style::default()
                .fg(palette.butter)
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(rating, chunks[1]);

    let critique = Paragraph::new(Line::from(Span::styled(
        format!("\"{}\"", result.critique),
        Style::default()
            .fg(palette.text_secondary)
            .add_modifier(Modifier::ITALIC),
    )))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    frame.render_widget(critique, chunks[2]);

    let hint = Paragraph::new(Line::from(Span::styled(
        "press r to cook again",
        Style::default().fg(palette.text_muted),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(hint, chunks[3]);
}

/// A centered rect `percent_x` wide and `height` rows tall, clamped to the
/// containing area.
fn centered_rect(container: Rect, percent_x: u16, height: u16) -> Rect {
    let height = height.min(container.height);
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(container);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Percentage(percent_x),
            Constraint::Fill(1),
        ])
        .split(vertical[1]);
    horizontal[1]
}
