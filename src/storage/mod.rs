//! Local file storage helpers
//!
//! Budget state is owned by the API; the client only persists its local
//! API snapshot through these helpers.

pub mod file_io;

pub use file_io::{read_json, write_json_atomic};
