//! Render model for the board.
//!
//! Everything a renderer needs to draw one frame, derived from a
//! `GameState`. Holds no game logic: it only mirrors what the state says.

use serde::{Deserialize, Serialize};

use crate::core::state::{GameState, StepState};

/// Text shown on an option before its step is revealed.
pub const HIDDEN_LABEL: &str = "???";
/// Text shown on a locked tile.
pub const LOCKED_LABEL: &str = "Locked";
/// Start tile text.
pub const START_LABEL: &str = "Ready for Development";
/// End tile text after a win.
pub const END_LABEL_WON: &str = "🎉 Closed Successfully!";
/// End tile text otherwise.
pub const END_LABEL: &str = "Closed";
/// Overlay button text.
pub const PLAY_AGAIN_LABEL: &str = "Play Again";

/// How a tile should be drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileStatus {
    /// Accepting a pick.
    Active,
    /// Beyond the current step; options are not shown.
    Locked,
    /// Visible but not selectable (passed, or the game is over).
    Inactive,
}

/// How an option should be drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OptionStyle {
    /// Not revealed yet.
    Hidden,
    /// Revealed, correct.
    Correct,
    /// Revealed, trap.
    Trap,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionView {
    pub label: String,
    pub style: OptionStyle,
    pub enabled: bool,
    /// The player picked this option.
    pub picked: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileView {
    /// 1-based step number.
    pub number: usize,
    pub status: TileStatus,
    /// Empty when the tile is locked.
    pub options: Vec<OptionView>,
}

impl TileView {
    fn new(state: &GameState, index: usize, step: &StepState) -> Self {
        let status = if state.is_locked(index) {
            TileStatus::Locked
        } else if state.is_active(index) {
            TileStatus::Active
        } else {
            TileStatus::Inactive
        };

        let options = match status {
            TileStatus::Locked => Vec::new(),
            _ => step
                .options
                .iter()
                .enumerate()
                .map(|(i, option)| OptionView {
                    label: if step.revealed {
                        option.text.clone()
                    } else {
                        HIDDEN_LABEL.to_string()
                    },
                    style: match (step.revealed, option.is_correct) {
                        (false, _) => OptionStyle::Hidden,
                        (true, true) => OptionStyle::Correct,
                        (true, false) => OptionStyle::Trap,
                    },
                    enabled: status == TileStatus::Active && !step.revealed,
                    picked: step.picked == Some(i),
                })
                .collect(),
        };

        Self {
            number: index + 1,
            status,
            options,
        }
    }

    /// Label shown when the tile has no options to draw.
    #[must_use]
    pub fn placeholder(&self) -> Option<&'static str> {
        (self.status == TileStatus::Locked).then_some(LOCKED_LABEL)
    }
}

/// Game-over overlay.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Overlay {
    pub won: bool,
    pub title: &'static str,
    pub message: &'static str,
    pub action: &'static str,
}

impl Overlay {
    fn victory() -> Self {
        Self {
            won: true,
            title: "Victory!",
            message: concat!(
                "You've successfully navigated through all the development challenges ",
                "and pushed to production!"
            ),
            action: PLAY_AGAIN_LABEL,
        }
    }

    fn blocked() -> Self {
        Self {
            won: false,
            title: "Development Blocked!",
            message: "Better luck next time! Every developer faces obstacles.",
            action: PLAY_AGAIN_LABEL,
        }
    }
}

/// One frame of the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BoardView {
    pub start_label: &'static str,
    pub tiles: Vec<TileView>,
    pub end_label: &'static str,
    /// Present once the game is over.
    pub overlay: Option<Overlay>,
}

impl BoardView {
    /// Derive the frame for a state.
    #[must_use]
    pub fn new(state: &GameState) -> Self {
        let tiles = state
            .steps()
            .iter()
            .enumerate()
            .map(|(index, step)| TileView::new(state, index, step))
            .collect();

        let overlay = match (state.is_game_over(), state.has_won()) {
            (false, _) => None,
            (true, true) => Some(Overlay::victory()),
            (true, false) => Some(Overlay::blocked()),
        };

        Self {
            start_label: START_LABEL,
            tiles,
            end_label: if state.has_won() { END_LABEL_WON } else { END_LABEL },
            overlay,
        }
    }

    /// The tile accepting picks, if any.
    #[must_use]
    pub fn active_tile(&self) -> Option<&TileView> {
        self.tiles.iter().find(|t| t.status == TileStatus::Active)
    }
}

impl From<&GameState> for BoardView {
    fn from(state: &GameState) -> Self {
        Self::new(state)
    }
}
