// Stack operations: registry login/logout, deploy and remove.

pub mod commands;
mod manager;

pub use manager::StackManager;
