pub mod delete_confirmation;
pub mod error_panel;
pub mod modal;
pub mod places;
