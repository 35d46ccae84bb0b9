//! The ingredient shelf panel: a 3-wide grid of catalog tiles.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use skillet_engine::{App, MAX_SELECTED};

use crate::theme::{Palette, ingredient_color};

/// Grid width; cursor movement deltas in the cli assume this.
pub const SHELF_COLUMNS: usize = 3;

pub fn draw(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let selected = app.session().selected().len();
    let block = Block::default()
        .title(format!(" Ingredient Shelf  {selected}/{MAX_SELECTED} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.butter))
        .style(Style::default().bg(palette.bg_panel));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let catalog = app.catalog();
    let rows = catalog.len().div_ceil(SHELF_COLUMNS);
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(3); rows])
        .split(inner);

    for (row, row_area) in row_areas.iter().enumerate() {
        let cell_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![
                Constraint::Ratio(1, SHELF_COLUMNS as u32);
                SHELF_COLUMNS
            ])
            .split(*row_area);
        for (col, cell_area) in cell_areas.iter().enumerate() {
            let Some(ingredient) = catalog.get(row * SHELF_COLUMNS + col) else {
                continue;
            };
            let index = row * SHELF_COLUMNS + col;
            let is_selected = app.session().is_selected(&ingredient.id);
            let under_cursor = app.shelf_cursor() == index;

            let mut style = Style::default().fg(palette.text_primary);
            if is_selected {
                style = style.bg(palette.bg_highlight).add_modifier(Modifier::BOLD);
            }
            let border_style = if under_cursor {
                Style::default().fg(palette.flame).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(ingredient_color(&ingredient.color))
            };

            let marker = if is_selected { "✔ " } else { "" };
            let tile = Paragraph::new(Line::from(vec![
                Span::raw(format!("{} ", ingredient.emoji)),
                Span::styled(ingredient.name.clone(), style),
                Span::styled(
                    format!(" {marker}"),
                    Style::default().fg(palette.herb),
                ),
            ]))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(if under_cursor {
                        BorderType::Thick
                    } else {
                        BorderType::Plain
                    })
                    .border_style(border_style),
            );
            frame.render_widget(tile, *cell_area);
        }
    }
}
