pub mod ops;
pub mod plan;

#[cfg(test)]
mod plan_test;
