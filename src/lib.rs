pub mod config;
pub mod docker;
pub mod error;
pub mod stack;

pub use error::{Result, StackError};
pub use stack::StackManager;
