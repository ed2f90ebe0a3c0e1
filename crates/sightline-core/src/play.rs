//! Match driver: one decider per agent, run to completion.
//!
//! Each [`Match::step`] runs one turn:
//!
//! 1. **RESET**: clear pending actions and ledgers
//! 2. **VIEW**: build an owned [`Knowledge`] for every agent
//! 3. **DECIDE**: query every decider in parallel, in id order
//! 4. **COMMIT**: assign the decisions and commit the turn
//!
//! Decider failures never stop a match; the agent simply stays put.
//!
//! # Example
//!
//! ```
//! use sightline_core::agent::{ActionMove, Role};
//! use sightline_core::config::{AgentConfig, GameConfig};
//! use sightline_core::decider::{ConstantDecider, IdleDecider};
//! use sightline_core::play::{Match, MatchConfig, SquadEntry};
//!
//! let config = MatchConfig::new(GameConfig::default().with_turns(3))
//!     .with_squad(
//!         SquadEntry::new("red").with_agent(AgentConfig::new("h", Role::Hunter), Box::new(IdleDecider)),
//!     )
//!     .with_squad(SquadEntry::new("blue").with_agent(
//!         AgentConfig::new("r", Role::Runner),
//!         Box::new(ConstantDecider::new(ActionMove::polar(1.0, 0.0))),
//!     ));
//!
//! let history = Match::new(config).unwrap().run_to_end().unwrap();
//!
//! assert_eq!(history.len(), 4);
//! assert!(history.last().unwrap().is_finished());
//! ```

use std::fmt;

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::agent::ActionMove;
use crate::config::{AgentConfig, GameConfig, SquadConfig};
use crate::decider::Decider;
use crate::error::{ConfigError, GameError};
use crate::game::{Game, TurnReport};
use crate::history::History;
use crate::knowledge::Knowledge;

// =============================================================================
// Configuration
// =============================================================================

/// A squad together with the deciders for its agents.
pub struct SquadEntry {
    config: SquadConfig,
    deciders: Vec<Box<dyn Decider>>,
}

impl SquadEntry {
    /// Creates an empty squad.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            config: SquadConfig::new(name),
            deciders: Vec::new(),
        }
    }

    /// Appends an agent and the decider that controls it.
    #[must_use]
    pub fn with_agent(mut self, agent: AgentConfig, decider: Box<dyn Decider>) -> Self {
        self.config.agents.push(agent);
        self.deciders.push(decider);
        self
    }
}

impl fmt::Debug for SquadEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SquadEntry")
            .field("config", &self.config)
            .field("deciders", &format!("[{} deciders]", self.deciders.len()))
            .finish()
    }
}

/// Game configuration plus one decider per agent, in global id order.
pub struct MatchConfig {
    game: GameConfig,
    deciders: Vec<Box<dyn Decider>>,
}

impl MatchConfig {
    /// Starts from `game`. Squads already in `game` have no deciders yet;
    /// prefer adding squads through [`with_squad`](Self::with_squad).
    #[must_use]
    pub fn new(game: GameConfig) -> Self {
        Self {
            game,
            deciders: Vec::new(),
        }
    }

    /// Pairs an existing configuration with a decider list.
    ///
    /// `deciders[i]` controls agent `i`; the counts are checked by
    /// [`Match::new`].
    #[must_use]
    pub fn from_parts(game: GameConfig, deciders: Vec<Box<dyn Decider>>) -> Self {
        Self { game, deciders }
    }

    /// Appends a squad and its deciders.
    #[must_use]
    pub fn with_squad(mut self, squad: SquadEntry) -> Self {
        self.game.squads.push(squad.config);
        self.deciders.extend(squad.deciders);
        self
    }

    /// The game configuration assembled so far.
    #[must_use]
    pub fn game(&self) -> &GameConfig {
        &self.game
    }
}

impl fmt::Debug for MatchConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatchConfig")
            .field("game", &self.game)
            .field("deciders", &format!("[{} deciders]", self.deciders.len()))
            .finish()
    }
}

// =============================================================================
// Match
// =============================================================================

/// A game driven by its deciders.
pub struct Match {
    game: Game,
    deciders: Vec<Box<dyn Decider>>,
}

impl fmt::Debug for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Match")
            .field("game", &self.game)
            .field("deciders", &format!("[{} deciders]", self.deciders.len()))
            .finish()
    }
}

impl Match {
    /// Validates the configuration, initializes every decider and builds the
    /// game.
    ///
    /// # Errors
    ///
    /// - any [`ConfigError`] from [`GameConfig::validate`]
    /// - [`ConfigError::DeciderCountMismatch`] unless there is exactly one
    ///   decider per agent
    /// - [`ConfigError::DeciderInit`] if a decider's `init` fails
    pub fn new(config: MatchConfig) -> Result<Self, ConfigError> {
        let MatchConfig { game, mut deciders } = config;
        game.validate()?;

        let expected = game.agent_count();
        if deciders.len() != expected {
            return Err(ConfigError::DeciderCountMismatch {
                expected,
                actual: deciders.len(),
            });
        }

        for (index, decider) in deciders.iter_mut().enumerate() {
            decider.init(&game).map_err(|source| ConfigError::DeciderInit {
                label: game.agent_label(index).unwrap_or_else(|| format!("#{index}")),
                source,
            })?;
        }

        Ok(Self {
            game: Game::new(game)?,
            deciders,
        })
    }

    /// The game being driven.
    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Consumes the match, keeping the game.
    #[must_use]
    pub fn into_game(self) -> Game {
        self.game
    }

    /// Runs one turn.
    ///
    /// # Errors
    ///
    /// Whatever [`Game::commit_turn`] reports. On
    /// [`GameError::TurnAfterFinished`] nothing is mutated.
    pub fn step(&mut self) -> Result<TurnReport, GameError> {
        if self.game.is_finished() {
            return Err(GameError::TurnAfterFinished);
        }

        // PHASE 1: RESET
        self.game.start_turn();

        // PHASE 2: VIEW
        let views: Vec<Knowledge> = self
            .game
            .agents()
            .iter()
            .map(|agent| {
                Knowledge::gather(
                    self.game.roster(),
                    self.game.field(),
                    self.game.turns_remaining(),
                    agent,
                )
            })
            .collect();

        // PHASE 3: DECIDE - indexed parallel iterators keep id order
        let actions: Vec<Option<ActionMove>> = self
            .deciders
            .par_iter()
            .zip(views.par_iter())
            .map(|(decider, view)| match decider.decide(view) {
                Ok(action) => action,
                Err(err) => {
                    warn!(agent = %view.me().id(), %err, "decider failed, agent stays put");
                    None
                }
            })
            .collect();

        // PHASE 4: COMMIT
        self.game.assign_actions(actions);
        self.game.commit_turn()
    }

    /// Runs every remaining turn and returns the snapshots.
    ///
    /// The history holds the state before the first remaining turn plus one
    /// snapshot per committed turn. Rejected moves are logged and do not
    /// stop the run.
    ///
    /// # Errors
    ///
    /// Only fatal [`GameError`]s are returned.
    pub fn run_to_end(&mut self) -> Result<History, GameError> {
        let remaining = self.game.turns_remaining() as usize;
        let mut history = History::with_capacity(remaining + 1);
        history.record(&self.game);

        while !self.game.is_finished() {
            match self.step() {
                Ok(_) => {}
                Err(err) if err.is_fatal() => return Err(err),
                Err(err) => debug!(%err, "turn committed with rejections"),
            }
            history.record(&self.game);
        }

        Ok(history)
    }
}
