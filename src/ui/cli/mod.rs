mod args;

pub use args::{Args, DEFAULT_SOURCE_PATH};
