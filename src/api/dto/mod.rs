pub mod common;

pub use common::ErrorBody;
