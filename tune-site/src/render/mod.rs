//! Template rendering
//!
//! - **Html** (`html`): escaped-by-default fragment type
//! - **Placeholders** (`placeholder`): fallback vector artwork per category
//! - **Templates** (`templates`): one pure function per record kind

pub mod html;
pub mod placeholder;
pub mod templates;

pub use html::{escape, Html, Text};
pub use placeholder::Placeholder;
