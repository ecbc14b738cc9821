use prettytable::format::consts::FORMAT_NO_BORDER;
use prettytable::{Cell, Row, Table};

use crate::shared::response::render::{Grid, Renderer};

/// Aligned grid for terminals. Numbers are right aligned.
pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn render(&self, grid: &Grid<'_>) -> Vec<u8> {
        let mut table = Table::new();
        table.set_format(*FORMAT_NO_BORDER);
        table.set_titles(Row::new(
            grid.columns.iter().map(|name| Cell::new(name)).collect(),
        ));

        for values in &grid.rows {
            let cells = values
                .iter()
                .map(|value| {
                    let cell = Cell::new(&value.to_string());
                    if value.logical_type().is_numeric() {
                        cell.style_spec("r")
                    } else {
                        cell
                    }
                })
                .collect();
            table.add_row(Row::new(cells));
        }

        let mut buf = Vec::new();
        if let Err(e) = table.print(&mut buf) {
            tracing::error!("Failed to render text table: {}", e);
            buf.clear();
        }
        buf
    }
}
