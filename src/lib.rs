//! SkyWord library exports for testing

pub mod core;
pub mod scripture;
pub mod tui;

#[cfg(test)]
pub mod test_support;
