#![warn(clippy::all, clippy::pedantic)]

use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::assets::{AssetCatalog, AssetError};
use crate::collision::Rect;
use crate::components::{Catcher, Controls, Input, Session};
use crate::config::Config;
use crate::difficulty::DifficultyTier;
use crate::game::{GRASS_HEIGHT, GROUND_Y, SCREEN_WIDTH};
use crate::input::{FrameInput, InputEvent, Key};
use crate::menu::layout;
use crate::menu_types::{Menu, ModeState, PauseOption};
use crate::rng::GameRng;
use crate::scene::{
    ABOUT_LINES, Button, CatcherView, PAUSE_TITLE, PauseItem, PauseMenuView, Scene, ScoreView,
};
use crate::systems;

/// Owns the game world and the mode state machine
pub struct App {
    pub world: World,
    pub should_quit: bool,
    pub menu: Menu,
    pointer: Option<(f32, f32)>,
    jump_requested: bool,
}

impl App {
    #[must_use]
    pub fn new(assets: AssetCatalog, controls: Controls, rng: GameRng) -> Self {
        let mut world = World::new();
        world.insert_resource(assets);
        world.insert_resource(controls);
        world.insert_resource(rng);
        world.insert_resource(Input::default());

        Self {
            world,
            should_quit: false,
            menu: Menu::new(),
            pointer: None,
            jump_requested: false,
        }
    }

    /// Builds the app from configuration. Fails if a sprite is unusable.
    pub fn from_config(config: &Config) -> Result<Self, AssetError> {
        let assets = AssetCatalog::load(&config.assets)?;
        let rng = config
            .gameplay
            .seed
            .map_or_else(GameRng::from_entropy, GameRng::seeded);
        Ok(Self::new(assets, Controls::from(&config.controls), rng))
    }

    #[must_use]
    pub fn mode(&self) -> ModeState {
        self.menu.state
    }

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.world.get_resource::<Session>()
    }

    #[must_use]
    pub fn score(&self) -> Option<u32> {
        self.session().map(|session| session.score)
    }

    /// Starts (or restarts) play at `tier` with a fresh session
    pub fn start_session(&mut self, tier: DifficultyTier) {
        systems::start_session(&mut self.world, tier);
        self.jump_requested = false;
        self.menu.state = ModeState::Playing;
    }

    /// Applies one input event to the state machine.
    ///
    /// Events that mean nothing in the current mode are ignored.
    pub fn handle_event(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::CloseRequested => {
                info!("Close requested");
                self.should_quit = true;
            }
            InputEvent::PointerMoved { x, y } => self.pointer = Some((x, y)),
            InputEvent::PointerDown { x, y } => {
                self.pointer = Some((x, y));
                self.click(x, y);
            }
            InputEvent::Key(key) => self.key_down(key),
        }
    }

    fn click(&mut self, x: f32, y: f32) {
        match self.menu.state {
            ModeState::StageSelect => {
                if let Some(tier) = layout::stage_button_at(x, y) {
                    self.start_session(tier);
                }
            }
            ModeState::Paused => {
                // Clicking both selects and confirms
                if let Some(option) = layout::pause_option_at(x, y) {
                    self.menu.selected_option = option;
                    self.activate(option);
                }
            }
            ModeState::Playing | ModeState::About => {}
        }
    }

    fn key_down(&mut self, key: Key) {
        match (self.menu.state, key) {
            (ModeState::Playing, Key::Escape) => {
                debug!("Paused");
                self.menu.state = ModeState::Paused;
            }
            (ModeState::Paused, Key::Escape) => {
                debug!("Resumed");
                self.menu.state = ModeState::Playing;
            }
            (ModeState::About, Key::Escape) => self.menu.state = ModeState::Paused,
            (ModeState::Paused, Key::Up) => self.menu.prev_option(),
            (ModeState::Paused, Key::Down) => self.menu.next_option(),
            (ModeState::Paused, Key::Confirm) => self.activate(self.menu.selected_option),
            (ModeState::Playing, Key::Jump) => self.jump_requested = true,
            (ModeState::StageSelect, Key::Digit(n)) => {
                if let Some(tier) = DifficultyTier::from_index(usize::from(n).wrapping_sub(1)) {
                    self.start_session(tier);
                }
            }
            _ => {}
        }
    }

    fn activate(&mut self, option: PauseOption) {
        match option {
            PauseOption::Resume => self.menu.state = ModeState::Playing,
            PauseOption::Restart => {
                let tier = self.session().map(|session| session.tier);
                if let Some(tier) = tier {
                    self.start_session(tier);
                }
            }
            PauseOption::About => self.menu.state = ModeState::About,
            PauseOption::Exit => {
                info!("Exit selected");
                self.should_quit = true;
            }
        }
    }

    /// One frame: apply input, step the game if playing, describe the result
    pub fn update(&mut self, input: &FrameInput, elapsed_ms: u64) -> Scene {
        for event in &input.events {
            self.handle_event(event);
        }

        if !self.should_quit {
            let playing = self.menu.state == ModeState::Playing;
            let jump = std::mem::take(&mut self.jump_requested);
            *self.world.resource_mut::<Input>() = Input {
                left: input.left_held,
                right: input.right_held,
                jump: jump && playing,
                pointer_x: self.pointer.map(|(x, _)| x),
            };

            systems::game_tick_system(&mut self.world, elapsed_ms, playing);
        }

        self.scene()
    }

    /// Describes the current state without advancing it
    pub fn scene(&mut self) -> Scene {
        let mode = self.menu.state;
        if mode == ModeState::About {
            return Scene {
                mode,
                background: None,
                grass: None,
                catcher: None,
                objects: Vec::new(),
                score: None,
                stage_buttons: Vec::new(),
                pause_menu: None,
                about: Some(&ABOUT_LINES),
            };
        }

        let assets = self.world.resource::<AssetCatalog>().clone();
        let session = self.world.get_resource::<Session>().cloned();
        let catcher = session
            .as_ref()
            .map_or_else(Catcher::default, |session| session.catcher);

        let objects = systems::objects(&mut self.world)
            .iter()
            .map(|object| object.bounds())
            .collect();

        let hovered = |bounds: &Rect| {
            self.pointer
                .is_some_and(|(x, y)| bounds.contains_point(x, y))
        };

        let stage_buttons = DifficultyTier::ALL
            .into_iter()
            .map(|tier| {
                let bounds = layout::stage_button_rect(tier);
                Button {
                    label: tier.label(),
                    bounds,
                    hovered: hovered(&bounds),
                }
            })
            .collect();

        let pause_menu = (mode == ModeState::Paused).then(|| PauseMenuView {
            title: PAUSE_TITLE,
            bounds: layout::pause_menu_rect(),
            items: PauseOption::ALL
                .into_iter()
                .map(|option| {
                    let bounds = layout::pause_option_rect(option);
                    PauseItem {
                        label: option.label(),
                        bounds,
                        selected: option == self.menu.selected_option,
                        hovered: hovered(&bounds),
                    }
                })
                .collect(),
        });

        Scene {
            mode,
            background: Some(assets.background_placement()),
            grass: Some(Rect::new(0.0, GROUND_Y, SCREEN_WIDTH, GRASS_HEIGHT)),
            catcher: Some(CatcherView {
                basket: catcher.basket_box(&assets),
                monkey: catcher.monkey_box(&assets),
            }),
            objects,
            score: session.map(|session| ScoreView {
                text: format!("Score: {}", session.score),
                bounds: layout::score_rect(),
            }),
            stage_buttons,
            pause_menu,
            about: None,
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(AssetCatalog::default(), Controls::default(), GameRng::from_entropy())
    }
}
