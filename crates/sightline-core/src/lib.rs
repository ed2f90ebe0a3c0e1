//! # Sightline Core
//!
//! Turn engine for a multi-squad hunter/runner game on a bounded 2-D field.
//!
//! Agents belong to squads and are either Hunters or Runners. Each turn every
//! agent may move a bounded distance; afterwards every Runner in sight of at
//! least one opposing Hunter loses exactly one point, split evenly among the
//! Hunters watching it. Line-segment obstructions block sight but never
//! movement.
//!
//! ## Architecture
//!
//! - **Roster**: the ordered registry of squads and agents; ids are indices
//! - **Resolvers**: movement and scoring phases run on every commit
//! - **Game**: the state machine (`Idle` → `ActionsPending` → `Finished`)
//! - **Knowledge**: the owned, scoped view handed to deciders
//! - **Match**: pairs a game with one [`Decider`](decider::Decider) per agent
//!   and records a [`History`](history::History)
//!
//! ## Usage
//!
//! ```
//! use sightline_core::agent::Role;
//! use sightline_core::config::{AgentConfig, GameConfig, SquadConfig};
//!
//! let mut game = GameConfig::default()
//!     .with_turns(1)
//!     .with_squad(SquadConfig::new("red").with_agent(AgentConfig::new("h", Role::Hunter)))
//!     .with_squad(SquadConfig::new("blue").with_agent(AgentConfig::new("r", Role::Runner)))
//!     .build_game()
//!     .unwrap();
//!
//! game.start_turn();
//! game.commit_turn().unwrap();
//!
//! assert!(game.is_finished());
//! assert_eq!(game.scoreboard()[0].name(), "red");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

// Re-export the geometry kernel
pub use sightline_geom as geom;

pub mod agent;
pub mod config;
pub mod decider;
pub mod error;
pub mod field;
pub mod game;
pub mod history;
pub mod knowledge;
pub mod play;
pub mod resolver;
pub mod roster;
pub mod visibility;

pub use agent::{ActionMove, Agent, AgentId, PointGain, Role, Squad, SquadId};
pub use config::{AgentConfig, FieldConfig, GameConfig, SquadConfig};
pub use decider::Decider;
pub use error::{ActionError, ActionErrors, ConfigError, DecisionError, GameError};
pub use field::{Field, Obstruction};
pub use game::{Game, TurnPhase, TurnReport};
pub use history::History;
pub use knowledge::Knowledge;
pub use play::{Match, MatchConfig, SquadEntry};
pub use roster::Roster;

#[cfg(test)]
mod tests;
