use crate::collision::Rect;
use crate::menu_types::ModeState;

pub const PAUSE_TITLE: &str = "Paused";

pub const ABOUT_LINES: [&str; 11] = [
    "Coconut Catching Game",
    "Created by Manav",
    "",
    "Catch falling coconuts!",
    "Use the mouse (or A/D and arrow keys) to move",
    "Click the stage selector to pick a difficulty",
    "Press SPACE to jump",
    "",
    "In Master mode, good luck...",
    "",
    "Press ESC to return...",
];

/// A clickable label
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub label: &'static str,
    pub bounds: Rect,
    pub hovered: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PauseItem {
    pub label: &'static str,
    pub bounds: Rect,
    pub selected: bool,
    pub hovered: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PauseMenuView {
    pub title: &'static str,
    pub bounds: Rect,
    pub items: Vec<PauseItem>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatcherView {
    pub basket: Rect,
    pub monkey: Rect,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreView {
    pub text: String,
    pub bounds: Rect,
}

/// Everything needed to draw one frame, in game pixel coordinates.
///
/// Produced by `App::update`; the drawing side never reads game state directly.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub mode: ModeState,
    /// Background image placement, absent on the about page
    pub background: Option<Rect>,
    pub grass: Option<Rect>,
    pub catcher: Option<CatcherView>,
    pub objects: Vec<Rect>,
    /// Only present while a session exists
    pub score: Option<ScoreView>,
    pub stage_buttons: Vec<Button>,
    pub pause_menu: Option<PauseMenuView>,
    pub about: Option<&'static [&'static str]>,
}
