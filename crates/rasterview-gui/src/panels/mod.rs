pub mod adjust_dialog;
pub mod help;
pub mod menu_bar;
pub mod status;
pub mod viewport;
