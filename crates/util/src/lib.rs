pub mod date_handling;
pub mod path_processing;
pub mod preferences;
pub mod text_processing;

pub use date_handling::*;
pub use path_processing::{expand_tilde, export_file_path};
pub use preferences::*;
pub use text_processing::*;
