pub mod aggregate;
mod display_mode;
mod empty_fields;
pub mod group_key;
mod request;
mod result;
pub mod rollup;
mod summarizer;
pub mod writer;

pub use aggregate::plan::{AggKind, AggregateField, AggregationSpec};
pub use display_mode::DisplayMode;
pub use empty_fields::{EmptyFieldSet, EmptyFields};
pub use request::{DEFAULT_CSV_FILENAME, DEFAULT_TOP_N, SummaryRequest};
pub use result::{RowKind, SummaryRow, SummaryTable};
pub use summarizer::{Summarizer, summarize};
