//! Interface text in each supported language.

use serde::Deserialize;
use timetravel_tictactoe::{GameStatus, Move};

/// Interface language.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Language {
    /// English.
    #[default]
    En,
    /// Russian.
    Ru,
}

impl Language {
    /// Returns the interface text for this language.
    pub fn labels(self) -> &'static Labels {
        match self {
            Language::En => &ENGLISH,
            Language::Ru => &RUSSIAN,
        }
    }
}

/// Static interface text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    /// Window title.
    pub title: &'static str,
    /// Heading of the history list.
    pub history_title: &'static str,
    /// Button returning to the empty board.
    pub restart: &'static str,
    /// Button prefix for a numbered move, followed by the move number.
    pub go_to_move: &'static str,
    /// Status prefix for a won game, followed by the mark.
    pub winner: &'static str,
    /// Status for a drawn game.
    pub draw: &'static str,
    /// Status prefix for a game in progress, followed by the mark.
    pub next_player: &'static str,
    /// Key help while the board has focus.
    pub help_board: &'static str,
    /// Key help while the history list has focus.
    pub help_history: &'static str,
}

static ENGLISH: Labels = Labels {
    title: "Tic-Tac-Toe",
    history_title: "Move history",
    restart: "Restart",
    go_to_move: "Go to move #",
    winner: "Winner: ",
    draw: "Draw!",
    next_player: "Next player: ",
    help_board: "Arrows/mouse: select  Enter/1-9: play  Tab: history  r: restart  q: quit",
    help_history: "Up/Down/mouse: select  Enter: jump  Tab: board  r: restart  q: quit",
};

static RUSSIAN: Labels = Labels {
    title: "Крестики-нолики",
    history_title: "История ходов",
    restart: "Начать заново",
    go_to_move: "Перейти к ходу #",
    winner: "Победитель: ",
    draw: "Ничья!",
    next_player: "Следующий ход: ",
    help_board: "Стрелки/мышь: выбор  Enter/1-9: ход  Tab: история  r: заново  q: выход",
    help_history: "Вверх/вниз/мышь: выбор  Enter: перейти  Tab: поле  r: заново  q: выход",
};

impl Labels {
    /// Status line for the active board.
    pub fn status(&self, status: GameStatus) -> String {
        match status {
            GameStatus::Won(player) => format!("{}{}", self.winner, player),
            GameStatus::Draw => self.draw.to_string(),
            GameStatus::InProgress { next } => format!("{}{}", self.next_player, next),
        }
    }

    /// Button text for history snapshot `index`.
    ///
    /// The move that produced the snapshot is appended when known.
    pub fn history_entry(&self, index: usize, played: Option<Move>) -> String {
        match (index, played) {
            (0, _) => self.restart.to_string(),
            (n, Some(played)) => format!("{}{} ({})", self.go_to_move, n, played),
            (n, None) => format!("{}{}", self.go_to_move, n),
        }
    }
}
