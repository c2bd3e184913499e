pub mod contribution_card;
pub mod contribution_editor;
pub mod navbar;
pub mod prediction_panel;
