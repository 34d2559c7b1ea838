//! Interactive prompts and user input handling.
//!
//! Every prompt follows the same loop: ask, validate, ask again on invalid
//! input, and finish with either a valid value or a cancellation. Input comes
//! from a [`Prompter`], so handlers can be driven by a script in tests.

// Export public items from submodules
pub mod input;
pub mod terminal;
pub mod types;

// Re-exports for convenience
pub use input::{
    confirm, prompt_field, prompt_field_update, prompt_notes, prompt_selection, prompt_status,
    prompt_title, prompt_until, Prompter,
};
pub use terminal::TerminalPrompter;
pub use types::{Confirmation, Prompted};
