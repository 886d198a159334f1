//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod confirm_dialog;
pub mod help_dialog;
pub mod history;
pub mod home;
pub mod layout;
pub mod palette;
pub mod stats;

pub use confirm_dialog::ConfirmDialog;
pub use help_dialog::HelpDialog;
pub use home::{draw_home_screen, HomeComponent};
pub use layout::{calculate_main_layout, centered_popup, MainLayout};
