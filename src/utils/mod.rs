//! Shared utilities

pub mod encoding;
pub mod text;

pub use encoding::{decode_bytes, read_file_safe};
pub use text::{escape_link_target, escape_link_text, normalize_newlines, replace_emoji_codes};
