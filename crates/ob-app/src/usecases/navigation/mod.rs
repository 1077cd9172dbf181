//! Route resolution use case

pub mod navigate;

pub use navigate::NavigateTo;
