// Which screen is active. Exactly one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeState {
    StageSelect,
    Playing,
    Paused,
    About,
}

// Pause menu entries, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseOption {
    Resume,
    Restart,
    About,
    Exit,
}

impl PauseOption {
    pub const ALL: [PauseOption; 4] = [
        PauseOption::Resume,
        PauseOption::Restart,
        PauseOption::About,
        PauseOption::Exit,
    ];

    #[must_use]
    pub fn index(self) -> usize {
        match self {
            PauseOption::Resume => 0,
            PauseOption::Restart => 1,
            PauseOption::About => 2,
            PauseOption::Exit => 3,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            PauseOption::Resume => "Resume",
            PauseOption::Restart => "Restart",
            PauseOption::About => "About Us",
            PauseOption::Exit => "Exit",
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    #[must_use]
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone)]
pub struct Menu {
    pub state: ModeState,
    /// Kept across pauses for the lifetime of the process
    pub selected_option: PauseOption,
}

impl Default for Menu {
    fn default() -> Self {
        Self {
            state: ModeState::StageSelect,
            selected_option: PauseOption::Resume,
        }
    }
}

impl Menu {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_option(&mut self) {
        if self.state == ModeState::Paused {
            self.selected_option = self.selected_option.next();
        }
    }

    pub fn prev_option(&mut self) {
        if self.state == ModeState::Paused {
            self.selected_option = self.selected_option.prev();
        }
    }
}
