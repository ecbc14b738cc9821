pub mod request_factory;
pub mod table_factory;

pub use request_factory::RequestFactory;
pub use table_factory::TableFactory;

#[cfg(test)]
mod table_factory_test;
