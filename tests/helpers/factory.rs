pub use super::factories::{RequestFactory, TableFactory};

pub struct Factory;

impl Factory {
    pub fn table() -> TableFactory {
        TableFactory::new()
    }

    /// Seven sales records; see `TableFactory::sales`.
    pub fn sales_table() -> TableFactory {
        TableFactory::sales()
    }

    pub fn request() -> RequestFactory {
        RequestFactory::new()
    }
}
