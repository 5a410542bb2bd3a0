pub mod mocks;
pub mod test_utils;

pub use mocks::*;
pub use test_utils::*;
