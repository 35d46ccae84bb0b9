//! The stove panel: pan contents, flames, heat dial, and the clock.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
};

use skillet_engine::{App, HEAT_LEVELS, HeatLevel, Phase};

use crate::theme::Palette;

pub fn draw(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let cooking = app.session().is_cooking();
    let block = Block::default()
        .title(if cooking { " 👩‍🍳 Cooking! " } else { " Stove " })
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if cooking {
            palette.flame
        } else {
            palette.text_muted
        }))
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(palette.bg_panel));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // pan
            Constraint::Length(2), // flames
            Constraint::Length(2), // heat dial
            Constraint::Length(2), // clock
            Constraint::Min(1),    // hints
        ])
        .split(inner);

    draw_pan(frame, app, chunks[0], palette);
    draw_flames(frame, app, chunks[1], palette);
    draw_heat_dial(frame, app, chunks[2], palette);
    draw_clock(frame, app, chunks[3], palette);
    draw_hints(frame, app, chunks[4], palette);
}

fn draw_pan(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let selected = app.session().selected();
    let content: Line = if selected.is_empty() {
        Line::from(Span::styled(
            "Add ingredients to the pan...",
            Style::default().fg(palette.text_muted).add_modifier(Modifier::ITALIC),
        ))
    } else {
        Line::from(
            selected
                .iter()
                .map(|i| Span::raw(format!(" {} ", i.emoji)))
                .collect::<Vec<_>>(),
        )
    };
    let pan = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(palette.text_secondary))
                .title(" Pan "),
        );
    frame.render_widget(pan, area);
}

fn draw_flames(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    if !app.session().is_cooking() {
        return;
    }
    let heat = app.session().heat();
    let flame_color = if heat == HeatLevel::High {
        palette.flame_hot
    } else {
        palette.flame
    };
    let flames = "🔥".repeat(usize::from(heat.intensity()) * 4);
    let line = Paragraph::new(Line::from(Span::styled(
        flames,
        Style::default().fg(flame_color),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(line, area);
}

fn draw_heat_dial(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let current = app.session().heat();
    let mut spans = vec![Span::styled("Heat: ", Style::default().fg(palette.text_secondary))];
    for (n, level) in HEAT_LEVELS.iter().enumerate() {
        let style = if *level == current {
            Style::default()
                .fg(palette.bg_dark)
                .bg(palette.flame)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.text_muted)
        };
        spans.push(Span::styled(
            format!(" {} {} ", n + 1, level.as_str().to_uppercase()),
            style,
        ));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled(
        current.label(),
        Style::default().fg(palette.butter).add_modifier(Modifier::ITALIC),
    ));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_clock(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let clock = Paragraph::new(Line::from(vec![
        Span::styled("⏱ ", Style::default().fg(palette.text_secondary)),
        Span::styled(
            format!("{}s", app.session().timer()),
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    frame.render_widget(clock, area);
}

fn draw_hints(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let hint = match app.session().phase() {
        Phase::Idle => "arrows/hjkl move · enter toggles · 1/2/3 heat · c cook · r clear · q quit",
        Phase::Cooking => "s serve the dish · r abandon the cook · q quit",
        Phase::Judging => "the judge is tasting...",
        Phase::Resolved => "r cook again · q quit",
    };
    let line = Paragraph::new(Line::from(Span::styled(
        hint,
        Style::default().fg(palette.text_muted),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(line, area);
}
