//! TUI rendering for Skillet using ratatui.
//!
//! Pure presentation: every widget reads the engine's [`App`] and draws it;
//! no game decision is made in this crate. Input is reduced to [`Action`]
//! values that the binary feeds back into the engine.

mod input;
mod result;
mod shelf;
mod stove;
mod theme;

pub use input::{Action, InputPump, map_key};
pub use shelf::SHELF_COLUMNS;
pub use theme::{Palette, palette};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use skillet_engine::App;

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &App, frame_count: usize) {
    let palette = palette();
    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Min(10),   // stove + shelf
            Constraint::Length(1), // footer
        ])
        .split(frame.area());

    let title = Paragraph::new(Line::from(Span::styled(
        "🍳 Skillet — Chef Maya's Kitchen",
        Style::default().fg(palette.butter),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(58), Constraint::Percentage(42)])
        .split(chunks[1]);
    stove::draw(frame, app, panels[0], &palette);
    shelf::draw(frame, app, panels[1], &palette);

    let footer = Paragraph::new(Line::from(Span::styled(
        "🔥 Control the Heat   ⏱ Watch the Time   🤖 AI Critiques",
        Style::default().fg(palette.text_muted),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(footer, chunks[2]);

    // Judging spinner / verdict card on top of everything.
    result::draw(frame, app, &palette, frame_count);
}
