//! User-facing operations.
//!
//! Each operation ties the classifier and the diary store together for one
//! command and writes its result to a caller-supplied output stream.

pub mod manage;
pub mod prompt;
pub mod view;
pub mod write;

// Re-export commonly used functions
pub use manage::{delete_entry, edit_entry, export_diary};
pub use prompt::{prompt_choice, prompt_label, prompt_yes_no, LabelAnswer};
pub use view::{list_entries, show_labels, show_status};
pub use write::{analyze_text, write_entry, Confirmation};
