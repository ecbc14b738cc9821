use crate::shared::response::render::{Grid, Renderer};

/// Bootstrap-styled HTML table without an index column.
pub struct HtmlRenderer;

pub const TABLE_CLASSES: &str = "dataframe table table-striped";

impl Renderer for HtmlRenderer {
    fn render(&self, grid: &Grid<'_>) -> Vec<u8> {
        let mut out = String::with_capacity(128 + grid.rows.len() * grid.columns.len() * 24);
        out.push_str("<table border=\"0\" class=\"");
        out.push_str(TABLE_CLASSES);
        out.push_str("\">\n  <thead>\n    <tr style=\"text-align: right;\">\n");
        for name in grid.columns {
            out.push_str("      <th>");
            escape_into(name, &mut out);
            out.push_str("</th>\n");
        }
        out.push_str("    </tr>\n  </thead>\n  <tbody>\n");
        for row in &grid.rows {
            out.push_str("    <tr>\n");
            for value in row.iter() {
                out.push_str("      <td>");
                escape_into(&value.to_string(), &mut out);
                out.push_str("</td>\n");
            }
            out.push_str("    </tr>\n");
        }
        out.push_str("  </tbody>\n</table>\n");
        out.into_bytes()
    }
}

fn escape_into(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}
