//! Output rendering (Markdown report, JSON summary)

pub mod markdown;
pub mod summary;

pub use markdown::render_markdown;
pub use summary::write_summary;
