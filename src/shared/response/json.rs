use crate::engine::types::ScalarValue;
use crate::shared::response::render::{Grid, Renderer};
use serde::Serialize;

pub struct JsonRenderer;

#[derive(Serialize)]
struct JsonTable<'a> {
    count: usize,
    columns: &'a [String],
    rows: &'a [&'a [ScalarValue]],
}

impl Renderer for JsonRenderer {
    fn render(&self, grid: &Grid<'_>) -> Vec<u8> {
        let payload = JsonTable {
            count: grid.rows.len(),
            columns: grid.columns,
            rows: &grid.rows,
        };

        let mut buf = match serde_json::to_vec(&payload) {
            Ok(buf) => buf,
            Err(e) => {
                tracing::error!("Failed to serialize JSON: {}", e);
                b"{\"error\":\"Failed to serialize JSON\"}".to_vec()
            }
        };
        buf.push(b'\n');
        buf
    }
}
