use super::surface::{game_over_text, score_text, DisplaySink};

/// Score label and game-over notice, kept as text for the terminal renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBoard {
    score_line: String,
    game_over: Option<String>,
}

impl StatusBoard {
    pub fn new() -> Self {
        Self {
            score_line: score_text(0),
            game_over: None,
        }
    }

    pub fn score_line(&self) -> &str {
        &self.score_line
    }

    /// The game-over notice, if it is showing
    pub fn game_over_message(&self) -> Option<&str> {
        self.game_over.as_deref()
    }
}

impl Default for StatusBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplaySink for StatusBoard {
    fn set_score(&mut self, score: u32) {
        self.score_line = score_text(score);
    }

    fn show_game_over(&mut self, final_score: u32) {
        self.game_over = Some(game_over_text(final_score));
    }

    fn hide_game_over(&mut self) {
        self.game_over = None;
    }
}
