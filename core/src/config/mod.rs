pub mod load;
pub mod types;

pub use load::{load, load_default, CONFIG_FILE_NAME};
pub use types::*;
