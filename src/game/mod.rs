//! The `bore bore bore` snake game.
//!
//! [`SnakeGame`] is the pure state machine. [`Arcade`] owns the one live game
//! together with its tick timer. Replacing or stopping the game drops the
//! timer with it, so no stray ticks outlive the game they belong to.

mod rng;
mod snake;

use std::time::Duration;

use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};
use tracing::info;

use crate::context::TabId;

pub use rng::{FoodSource, SplitMix};
pub use snake::{Cell, Direction, GRID_SIZE, SnakeGame, StepOutcome};

pub const TICK: Duration = Duration::from_millis(150);
/// Pause between the crash and the game-over line.
pub const GAME_OVER_DELAY: Duration = Duration::from_millis(500);
pub const GAME_OVER_NOTICE: &str = "Game Over! Type \"bore bore bore\" to play again.";

struct LiveGame {
    game: SnakeGame,
    ticker: Interval,
    food: SplitMix,
    /// Tab the game was started from; the game-over line goes there.
    tab: TabId,
}

#[derive(Default)]
pub struct Arcade {
    live: Option<LiveGame>,
}

impl Arcade {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fresh game, tearing down any previous one first.
    /// Must be called from within the tokio runtime.
    pub fn launch(&mut self, tab: TabId) {
        if self.live.take().is_some() {
            info!("Replacing the running snake game");
        }
        let mut food = SplitMix::from_clock();
        let game = SnakeGame::new(&mut food);
        let mut ticker = interval_at(Instant::now() + TICK, TICK);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        self.live = Some(LiveGame {
            game,
            ticker,
            food,
            tab,
        });
        info!("Snake game started from tab {}", tab);
    }

    /// A game is on screen, running or finished.
    pub fn is_showing(&self) -> bool {
        self.live.is_some()
    }

    /// A game is on screen and still accepting input.
    pub fn is_running(&self) -> bool {
        self.live.as_ref().is_some_and(|l| !l.game.is_over())
    }

    pub fn board(&self) -> Option<&SnakeGame> {
        self.live.as_ref().map(|l| &l.game)
    }

    pub fn steer(&mut self, direction: Direction) -> bool {
        match self.live.as_mut() {
            Some(live) => live.game.turn(direction),
            None => false,
        }
    }

    /// Resolves on the next tick of a running game; pends forever otherwise.
    /// Cancel-safe, for use in `tokio::select!`.
    pub async fn tick(&mut self) {
        match self.live.as_mut() {
            Some(live) if !live.game.is_over() => {
                live.ticker.tick().await;
            }
            _ => std::future::pending::<()>().await,
        }
    }

    /// Advance the running game by one step.
    /// Returns the outcome and the tab the game belongs to.
    pub fn advance(&mut self) -> Option<(StepOutcome, TabId)> {
        let live = self.live.as_mut()?;
        if live.game.is_over() {
            return None;
        }
        let outcome = live.game.step(&mut live.food);
        if outcome == StepOutcome::GameOver {
            info!("Snake game over at length {}", live.game.len());
        }
        Some((outcome, live.tab))
    }

    /// Drop the game and its timer. Returns whether a game was running.
    pub fn stop(&mut self) -> bool {
        let was_running = self.is_running();
        if self.live.take().is_some() {
            info!("Snake game stopped");
        }
        was_running
    }

    /// Take a finished board off the screen. A running game stays.
    pub fn dismiss_finished(&mut self) {
        if self.is_showing() && !self.is_running() {
            self.live = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Session;

    fn tab() -> TabId {
        Session::new().active_id()
    }

    #[tokio::test]
    async fn test_launch_replaces_previous_game() {
        let mut arcade = Arcade::new();
        arcade.launch(tab());
        assert!(arcade.steer(Direction::Up));
        arcade.launch(tab());

        let board = arcade.board().unwrap();
        assert_eq!(board.direction(), Direction::Right);
        assert_eq!(board.len(), 1);
        assert!(arcade.is_running());
    }

    #[tokio::test]
    async fn test_running_into_wall_ends_game() {
        let mut arcade = Arcade::new();
        arcade.launch(tab());

        // From (7,7) heading right there are 7 free cells before the wall.
        let mut outcomes = Vec::new();
        while let Some((outcome, _)) = arcade.advance() {
            outcomes.push(outcome);
        }
        assert_eq!(outcomes.last(), Some(&StepOutcome::GameOver));
        assert_eq!(outcomes.len(), 8);
        assert!(arcade.is_showing());
        assert!(!arcade.is_running());
        assert!(!arcade.steer(Direction::Up));

        arcade.dismiss_finished();
        assert!(!arcade.is_showing());
    }

    #[tokio::test]
    async fn test_dismiss_keeps_running_game() {
        let mut arcade = Arcade::new();
        arcade.launch(tab());
        arcade.dismiss_finished();
        assert!(arcade.is_running());

        assert!(arcade.stop());
        assert!(!arcade.is_showing());
        assert!(!arcade.stop());
    }

    #[tokio::test]
    async fn test_idle_arcade_has_nothing_to_advance() {
        let mut arcade = Arcade::new();
        assert!(arcade.advance().is_none());
        assert!(!arcade.steer(Direction::Down));
    }
}
