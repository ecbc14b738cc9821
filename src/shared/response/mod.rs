pub mod delimited;
pub mod html;
pub mod json;
pub mod render;
pub mod text;

pub use delimited::CsvRenderer;
pub use html::HtmlRenderer;
pub use json::JsonRenderer;
pub use render::{Grid, OutputFormat, Renderer};
pub use text::TextRenderer;
