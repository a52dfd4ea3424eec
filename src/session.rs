//! Game session: the round state machine driving a human-vs-computer match
//!
//! A [`GameSession`] owns the one mutable round state. The presentation
//! adapter feeds it player clicks and configuration changes, calls
//! [`GameSession::poll`] once per frame so the deferred computer move can
//! fire, and drains [`GameEvent`]s to render status, scores and the round
//! log. There is no parallelism: the computer's "thinking" is a short
//! cosmetic delay, and the 3x3 search completes instantly once it elapses.
//!
//! Invalid clicks (wrong turn, occupied cell, out-of-range index) are
//! swallowed silently; a pointing-device front end produces them all the
//! time and they are not errors.

use std::time::{Duration, Instant};

use log::{debug, info};
use rand::rngs::ThreadRng;
use rand::Rng;

use crate::board::{Board, Mark};
use crate::policy::{Difficulty, MovePolicy};
use crate::rules::{detect_outcome, Outcome};

/// Pacing delay before the computer's move is played
pub const THINK_DELAY: Duration = Duration::from_millis(400);

/// Where the round currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// Waiting for the human to pick a cell
    AwaitingPlayerMove,
    /// A deferred computer move is scheduled
    ComputerThinking,
    /// The round is decided; only `start_new_round` leaves this phase
    RoundOver,
}

/// How a finished round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    PlayerWin,
    ComputerWin,
    Draw,
}

/// Outcome of the last finished round plus the line to highlight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    pub outcome: RoundOutcome,
    /// `None` for draws
    pub winning_line: Option<[usize; 3]>,
}

/// Session-lifetime win/draw counters.
///
/// Each counter is bumped exactly once per completed round and never
/// decreases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreTally {
    pub player_wins: u32,
    pub computer_wins: u32,
    pub draws: u32,
}

/// Outbound notifications for the presentation adapter.
///
/// Events are buffered inside the session and drained by the adapter each
/// frame; the session never calls into the adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A mark landed on the board
    CellFilled { index: usize, mark: Mark },
    /// The status line changed (whose turn, thinking, round over)
    StatusChanged(String),
    /// The round finished
    RoundEnded {
        outcome: RoundOutcome,
        winning_line: Option<[usize; 3]>,
    },
    /// The tally changed
    ScoreChanged(ScoreTally),
    /// A line for the round log (newest first in the reference UI)
    LogAppended(String),
}

/// Deferred computer move. The round token guards against a move scheduled
/// in one round landing on the board of a later one.
#[derive(Debug, Clone, Copy)]
struct PendingMove {
    due: Instant,
    round: u32,
}

/// One human-vs-computer match: board, turn phase, difficulty, scores.
pub struct GameSession<R: Rng> {
    board: Board,
    player_mark: Mark,
    /// Mark the player takes from the next round on
    next_player_mark: Mark,
    difficulty: Difficulty,
    phase: RoundPhase,
    round: u32,
    tally: ScoreTally,
    policy: MovePolicy<R>,
    pending: Option<PendingMove>,
    think_delay: Duration,
    result: Option<RoundResult>,
    events: Vec<GameEvent>,
}

impl GameSession<ThreadRng> {
    /// Fresh session with the thread-local random source, player as X,
    /// medium difficulty, first round started.
    #[must_use]
    pub fn new() -> Self {
        Self::with_policy(MovePolicy::new())
    }
}

impl Default for GameSession<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> GameSession<R> {
    /// Session with an explicit move policy (seeded in tests)
    #[must_use]
    pub fn with_policy(policy: MovePolicy<R>) -> Self {
        let mut session = Self {
            board: Board::new(),
            player_mark: Mark::X,
            next_player_mark: Mark::X,
            difficulty: Difficulty::default(),
            phase: RoundPhase::AwaitingPlayerMove,
            round: 0,
            tally: ScoreTally::default(),
            policy,
            pending: None,
            think_delay: THINK_DELAY,
            result: None,
            events: Vec::new(),
        };
        session.start_new_round();
        session
    }

    // --- accessors ---------------------------------------------------------

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    #[must_use]
    pub fn player_mark(&self) -> Mark {
        self.player_mark
    }

    #[must_use]
    pub fn computer_mark(&self) -> Mark {
        self.player_mark.other()
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn tally(&self) -> ScoreTally {
        self.tally
    }

    /// Result of the last finished round, cleared on round start
    #[must_use]
    pub fn round_result(&self) -> Option<RoundResult> {
        self.result
    }

    #[must_use]
    pub fn is_thinking(&self) -> bool {
        self.phase == RoundPhase::ComputerThinking
    }

    /// Override the cosmetic thinking delay (zero in tests)
    pub fn set_think_delay(&mut self, delay: Duration) {
        self.think_delay = delay;
    }

    /// Take all buffered events, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    // --- inbound operations ------------------------------------------------

    /// Handle a player's click on a cell.
    ///
    /// Ignored silently unless it is the player's turn and the cell is
    /// playable. On success the move is applied, the outcome evaluated,
    /// and either the round finishes or the computer's turn begins.
    pub fn submit_player_move(&mut self, index: usize) {
        if self.phase != RoundPhase::AwaitingPlayerMove {
            debug!("ignoring click at {index}: not awaiting a player move");
            return;
        }

        let mark = self.player_mark;
        if let Err(err) = self.board.place(index, mark) {
            debug!("ignoring click: {err}");
            return;
        }

        self.events.push(GameEvent::CellFilled { index, mark });
        let outcome = detect_outcome(&self.board);
        if outcome.is_terminal() {
            self.finish_round(outcome);
        } else {
            self.begin_computer_turn();
        }
    }

    /// Cooperative tick; call once per frame.
    ///
    /// Fires the deferred computer move once its delay has elapsed.
    /// A pending move whose round token no longer matches the active
    /// round is stale (the round was reset while it waited) and is
    /// discarded without touching the board.
    pub fn poll(&mut self) {
        let Some(pending) = self.pending else {
            return;
        };
        if pending.round != self.round {
            debug!("discarding stale computer move from round {}", pending.round);
            self.pending = None;
            return;
        }
        if Instant::now() < pending.due {
            return;
        }

        self.pending = None;
        self.play_computer_move();
    }

    /// Change opponent strength; effective from the next computer move
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        if self.difficulty == difficulty {
            return;
        }
        self.difficulty = difficulty;
        info!("difficulty set to {difficulty}");
        self.events
            .push(GameEvent::LogAppended(format!("Difficulty set to: {difficulty}.")));
    }

    /// Change the player's mark; effective from the next round start.
    ///
    /// X always opens, so this also decides which side starts.
    pub fn set_player_mark(&mut self, mark: Mark) {
        self.next_player_mark = mark;
    }

    /// Discard the current round and start a fresh one.
    ///
    /// Cancels any deferred computer move, resets all nine cells,
    /// increments the round number and applies a pending mark change.
    /// The tally is untouched.
    pub fn start_new_round(&mut self) {
        self.pending = None;
        self.board = Board::new();
        self.round += 1;
        self.player_mark = self.next_player_mark;
        self.result = None;

        if self.player_mark == Mark::X {
            self.phase = RoundPhase::AwaitingPlayerMove;
            self.push_status(format!("Your turn as {}.", self.player_mark));
        } else {
            self.begin_computer_turn();
        }
    }

    // --- internals ---------------------------------------------------------

    fn begin_computer_turn(&mut self) {
        self.phase = RoundPhase::ComputerThinking;
        self.pending = Some(PendingMove {
            due: Instant::now() + self.think_delay,
            round: self.round,
        });
        self.push_status(format!("Computer ({}) is thinking...", self.computer_mark()));
    }

    fn play_computer_move(&mut self) {
        let mark = self.computer_mark();
        let index = self
            .policy
            .select_move(&self.board, mark, self.difficulty)
            .expect("move policy invoked with a full board: terminal check was skipped");
        self.board
            .place(index, mark)
            .expect("policy selected an occupied cell");

        self.events.push(GameEvent::CellFilled { index, mark });
        let outcome = detect_outcome(&self.board);
        if outcome.is_terminal() {
            self.finish_round(outcome);
        } else {
            self.phase = RoundPhase::AwaitingPlayerMove;
            self.push_status(format!("Your turn as {}.", self.player_mark));
        }
    }

    fn finish_round(&mut self, outcome: Outcome) {
        self.phase = RoundPhase::RoundOver;
        self.pending = None;

        let (round_outcome, winning_line, summary) = match outcome {
            Outcome::Win { mark, line } if mark == self.player_mark => (
                RoundOutcome::PlayerWin,
                Some(line),
                "You won against the computer.",
            ),
            Outcome::Win { line, .. } => (
                RoundOutcome::ComputerWin,
                Some(line),
                "Computer won this round.",
            ),
            Outcome::Draw => (RoundOutcome::Draw, None, "The game ended in a draw."),
            Outcome::InProgress => unreachable!("finish_round called on a live board"),
        };

        match round_outcome {
            RoundOutcome::PlayerWin => self.tally.player_wins += 1,
            RoundOutcome::ComputerWin => self.tally.computer_wins += 1,
            RoundOutcome::Draw => self.tally.draws += 1,
        }

        self.result = Some(RoundResult {
            outcome: round_outcome,
            winning_line,
        });

        info!("round {} finished: {summary}", self.round);
        self.events.push(GameEvent::ScoreChanged(self.tally));
        self.events.push(GameEvent::RoundEnded {
            outcome: round_outcome,
            winning_line,
        });
        self.events.push(GameEvent::LogAppended(format!(
            "Round {}: {summary}",
            self.round
        )));
        self.push_status("Round over. Start a new round to keep playing.".to_string());
    }

    fn push_status(&mut self, text: String) {
        self.events.push(GameEvent::StatusChanged(text));
    }
}
