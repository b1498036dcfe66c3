pub mod about;
pub mod layout;
pub mod pause_menu;
pub mod stage_select;
