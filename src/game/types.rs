// Shared enums used by the front end to drive screens

/// Which screen the game is currently showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Title,
    Controls,
    Playing,
    GameOver,
}

impl Screen {
    /// The world only advances on these screens
    pub fn simulates(&self) -> bool {
        matches!(self, Screen::Playing | Screen::GameOver)
    }
}

/// Entries of the title menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleChoice {
    Play,
    Controls,
    Quit,
}

impl TitleChoice {
    pub fn all() -> Vec<Self> {
        vec![Self::Play, Self::Controls, Self::Quit]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Play => "PLAY",
            Self::Controls => "CONTROLS",
            Self::Quit => "QUIT",
        }
    }
}

/// Entries of the game over panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverChoice {
    Retry,
    MainMenu,
}

impl GameOverChoice {
    pub fn all() -> Vec<Self> {
        vec![Self::Retry, Self::MainMenu]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Retry => "RETRY",
            Self::MainMenu => "MAIN MENU",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_game_screens_simulate() {
        assert!(Screen::Playing.simulates());
        assert!(Screen::GameOver.simulates());
        assert!(!Screen::Title.simulates());
        assert!(!Screen::Controls.simulates());
    }

    #[test]
    fn test_menu_labels() {
        let labels: Vec<_> = TitleChoice::all().iter().map(|c| c.label()).collect();
        assert_eq!(labels, vec!["PLAY", "CONTROLS", "QUIT"]);
        assert_eq!(GameOverChoice::Retry.label(), "RETRY");
    }
}
