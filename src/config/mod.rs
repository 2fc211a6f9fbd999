mod loader;
mod types;

pub use loader::{CONFIG_FILE_NAME, default_path, load, load_from_dir, parse};
pub use types::{Config, DEFAULT_BINARY_PATH};
