//! Session module - one running game
//!
//! Ties the pure rules from `blockfall-core` into the lock → clear → score →
//! next-piece sequence. The session owns the only mutable game state; every
//! step replaces the board and active piece with the values the rules return.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, trace};

use crate::core::{
    calculate_level, calculate_score, check_collision, clear_lines, drop_distance,
    get_drop_speed, merge_tetromino, random_tetromino, rotate_tetromino, Board, RulesError,
    Tetromino,
};
use crate::snapshot::GameSnapshot;
use crate::types::{GameAction, LockEvent, BASE_DROP_MS};

/// Runtime options for a new session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionConfig {
    /// Seed for the piece sequence; `None` seeds from the OS
    pub seed: Option<u64>,
}

/// A single game from first piece to game over
#[derive(Debug, Clone)]
pub struct Session<R = StdRng> {
    board: Board,
    active: Option<Tetromino>,
    next: Tetromino,
    rng: R,
    score: u32,
    lines: u32,
    level: u32,
    drop_speed_ms: u32,
    pieces_locked: u32,
    drop_timer_ms: u32,
    paused: bool,
    game_over: bool,
    /// Last lock event (consumed by observers)
    last_event: Option<LockEvent>,
}

impl Session<StdRng> {
    /// Create a session from config
    pub fn new(config: SessionConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(rng)
    }
}

impl Default for Session<StdRng> {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl<R: Rng> Session<R> {
    /// Create a session on an empty board drawing pieces from `rng`
    pub fn with_rng(rng: R) -> Self {
        Self::with_board(rng, Board::new())
    }

    /// Create a session that starts from an existing board.
    ///
    /// If the first piece cannot spawn the session starts out game over.
    pub fn with_board(mut rng: R, board: Board) -> Self {
        let next = random_tetromino(&mut rng);
        let mut session = Self {
            board,
            active: None,
            next,
            rng,
            score: 0,
            lines: 0,
            level: calculate_level(0),
            drop_speed_ms: BASE_DROP_MS,
            pieces_locked: 0,
            drop_timer_ms: 0,
            paused: false,
            game_over: false,
            last_event: None,
        };
        session.spawn_next();
        session
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<&Tetromino> {
        self.active.as_ref()
    }

    /// Preview of the piece that spawns after the active one
    pub fn next(&self) -> &Tetromino {
        &self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Current fall interval in milliseconds
    pub fn drop_speed_ms(&self) -> u32 {
        self.drop_speed_ms
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// True while actions and gravity have an effect
    pub fn playable(&self) -> bool {
        !self.paused && !self.game_over
    }

    /// Row the active piece would land on if hard-dropped
    pub fn ghost_y(&self) -> Option<i8> {
        self.active
            .map(|piece| piece.position.y + drop_distance(&self.board, &piece))
    }

    /// Take and clear the last lock event
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Everything a renderer needs, by value
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            active: self.active,
            ghost_y: self.ghost_y(),
            next: self.next.kind,
            score: self.score,
            lines: self.lines,
            level: self.level,
            drop_speed_ms: self.drop_speed_ms,
            paused: self.paused,
            game_over: self.game_over,
        }
    }

    /// Apply an input action.
    ///
    /// Returns whether the action had an effect. Movement and rotation are
    /// ignored while paused or after game over.
    pub fn apply_action(&mut self, action: GameAction) -> Result<bool, RulesError> {
        match action {
            GameAction::Pause => {
                if self.game_over {
                    return Ok(false);
                }
                self.paused = !self.paused;
                debug!(paused = self.paused, "pause toggled");
                return Ok(true);
            }
            GameAction::Restart => {
                self.restart();
                return Ok(true);
            }
            _ => {}
        }

        if !self.playable() || self.active.is_none() {
            return Ok(false);
        }

        match action {
            GameAction::MoveLeft => Ok(self.try_move(-1, 0)),
            GameAction::MoveRight => Ok(self.try_move(1, 0)),
            GameAction::Rotate => Ok(self.try_rotate()),
            GameAction::SoftDrop => self.step_down().map(|_| true),
            GameAction::HardDrop => self.hard_drop().map(|_| true),
            GameAction::Pause | GameAction::Restart => Ok(false),
        }
    }

    /// Advance gravity by `elapsed_ms`.
    ///
    /// Once the accumulated time reaches the level's fall interval the piece
    /// moves down one row, or locks if it cannot. Returns whether gravity acted.
    pub fn tick(&mut self, elapsed_ms: u32) -> Result<bool, RulesError> {
        if !self.playable() || self.active.is_none() {
            return Ok(false);
        }

        self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);
        if self.drop_timer_ms < self.drop_speed_ms {
            return Ok(false);
        }

        self.drop_timer_ms = 0;
        self.step_down()?;
        Ok(true)
    }

    /// Start over on an empty board, continuing the same piece stream
    pub fn restart(&mut self) {
        info!(score = self.score, lines = self.lines, "session restarted");
        self.board = Board::new();
        self.active = None;
        self.score = 0;
        self.lines = 0;
        self.level = calculate_level(0);
        self.drop_speed_ms = BASE_DROP_MS;
        self.pieces_locked = 0;
        self.drop_timer_ms = 0;
        self.paused = false;
        self.game_over = false;
        self.last_event = None;
        self.next = random_tetromino(&mut self.rng);
        self.spawn_next();
    }

    /// Promote the preview piece to active and draw a new preview
    fn spawn_next(&mut self) {
        let piece = std::mem::replace(&mut self.next, random_tetromino(&mut self.rng));
        self.drop_timer_ms = 0;

        if check_collision(&self.board, &piece, 0, 0) {
            info!(
                kind = piece.kind.as_str(),
                score = self.score,
                lines = self.lines,
                "game over: spawn blocked"
            );
            self.active = None;
            self.game_over = true;
            return;
        }

        trace!(kind = piece.kind.as_str(), x = piece.position.x, "spawned piece");
        self.active = Some(piece);
    }

    fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        if check_collision(&self.board, &active, dx, dy) {
            return false;
        }
        self.active = Some(active.moved(dx, dy));
        true
    }

    fn try_rotate(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        let rotated = active.with_shape(rotate_tetromino(&active));
        if check_collision(&self.board, &rotated, 0, 0) {
            return false;
        }
        self.active = Some(rotated);
        true
    }

    /// Move down one row; lock instead when blocked. Returns whether it moved.
    fn step_down(&mut self) -> Result<bool, RulesError> {
        if self.try_move(0, 1) {
            return Ok(true);
        }
        self.lock_active()?;
        Ok(false)
    }

    fn hard_drop(&mut self) -> Result<i8, RulesError> {
        let Some(active) = self.active else {
            return Ok(0);
        };
        let distance = drop_distance(&self.board, &active);
        self.active = Some(active.moved(0, distance));
        self.lock_active()?;
        Ok(distance)
    }

    /// Merge the active piece, clear lines, score, then spawn the next piece.
    ///
    /// All fallible work happens before any state changes.
    fn lock_active(&mut self) -> Result<(), RulesError> {
        let Some(active) = self.active else {
            return Ok(());
        };

        let merged = merge_tetromino(&self.board, &active);
        let cleared = clear_lines(&merged);
        let score_delta = calculate_score(cleared.lines_cleared, self.level)?;
        let lines = self.lines.saturating_add(cleared.lines_cleared);
        let level = calculate_level(lines);
        let drop_speed_ms = get_drop_speed(level)?;

        let level_up = level > self.level;
        self.board = cleared.board;
        self.active = None;
        self.score = self.score.saturating_add(score_delta);
        self.lines = lines;
        self.level = level;
        self.drop_speed_ms = drop_speed_ms;
        self.pieces_locked = self.pieces_locked.saturating_add(1);

        debug!(
            kind = active.kind.as_str(),
            lines_cleared = cleared.lines_cleared,
            score_delta,
            score = self.score,
            "piece locked"
        );
        if level_up {
            debug!(level, drop_speed_ms, "level up");
        }

        self.last_event = Some(LockEvent {
            kind: active.kind,
            lines_cleared: cleared.lines_cleared,
            score_delta,
            level,
            level_up,
        });

        self.spawn_next();
        Ok(())
    }
}
