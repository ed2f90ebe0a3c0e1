//! Error types for configuration, movement, turn commits and decisions.
//!
//! The turn engine distinguishes fatal from non-fatal failures:
//! - [`ActionError`] is per agent and never stops other agents from moving
//! - [`GameError::ActionsRejected`] bundles those into one value after the
//!   turn has already advanced
//! - [`GameError::TurnAfterFinished`] is the only error that halts a match

use std::fmt;

use sightline_geom::Coord;
use thiserror::Error;

use crate::agent::AgentId;

/// Failure to apply one agent's pending action.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ActionError {
    /// The move would leave the field. The agent stays where it was.
    #[error("agent {label} cannot move to {target}: outside the field")]
    Rejected {
        /// The agent whose move was rejected.
        id: AgentId,
        /// Human-readable `squad/agent` label.
        label: String,
        /// The position the move would have produced.
        target: Coord,
    },

    /// The id does not name an entry of the registry.
    #[error("agent {id} is not registered")]
    Unregistered {
        /// The offending id.
        id: AgentId,
    },
}

impl ActionError {
    /// The agent this error is about.
    #[must_use]
    pub const fn agent(&self) -> AgentId {
        match self {
            Self::Rejected { id, .. } | Self::Unregistered { id } => *id,
        }
    }
}

/// All per-agent failures collected during a single commit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActionErrors(Vec<ActionError>);

impl ActionErrors {
    /// Wraps a list of failures.
    #[must_use]
    pub fn new(errors: Vec<ActionError>) -> Self {
        Self(errors)
    }

    /// The individual failures in agent id order.
    #[must_use]
    pub fn as_slice(&self) -> &[ActionError] {
        &self.0
    }

    /// Number of failures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when nothing failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ActionErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} action(s) failed", self.0.len())?;
        for (idx, err) in self.0.iter().enumerate() {
            let sep = if idx == 0 { ": " } else { "; " };
            write!(f, "{sep}{err}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ActionErrors {}

impl IntoIterator for ActionErrors {
    type Item = ActionError;
    type IntoIter = std::vec::IntoIter<ActionError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Error returned by [`Game::commit_turn`](crate::game::Game::commit_turn).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GameError {
    /// The turn budget is already spent. Nothing was mutated.
    #[error("attempted to commit a turn on a finished game")]
    TurnAfterFinished,

    /// Some agents could not move. The turn was still scored and counted.
    #[error("turn {turn} committed with rejected actions: {errors}")]
    ActionsRejected {
        /// Zero-based index of the turn that was committed.
        turn: u32,
        /// The collected per-agent failures.
        errors: ActionErrors,
    },
}

impl GameError {
    /// True when the caller must stop driving the simulation.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::TurnAfterFinished)
    }

    /// Per-agent failures carried by this error, if any.
    #[must_use]
    pub fn action_errors(&self) -> &[ActionError] {
        match self {
            Self::TurnAfterFinished => &[],
            Self::ActionsRejected { errors, .. } => errors.as_slice(),
        }
    }
}

/// Invalid game or match configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Speed must be a positive finite number.
    #[error("speed must be positive and finite, got {0}")]
    InvalidSpeed(f64),

    /// A game needs at least one turn.
    #[error("turn budget must be at least 1")]
    ZeroTurns,

    /// The field rectangle has no area or non-finite corners.
    #[error("field rectangle must have positive finite area")]
    DegenerateField,

    /// An obstruction endpoint is NaN or infinite.
    #[error("obstruction {index} has a non-finite endpoint")]
    NonFiniteObstruction {
        /// Position of the obstruction in the field configuration.
        index: usize,
    },

    /// An agent's initial position lies outside the field.
    #[error("agent {label} starts outside the field at {position}")]
    AgentOutsideField {
        /// `squad/agent` label.
        label: String,
        /// The configured initial position.
        position: Coord,
    },

    /// A match needs exactly one decider per agent.
    #[error("expected {expected} deciders (one per agent), got {actual}")]
    DeciderCountMismatch {
        /// Number of agents.
        expected: usize,
        /// Number of deciders supplied.
        actual: usize,
    },

    /// A decider refused to initialize.
    #[error("decider for agent {label} failed to initialize: {source}")]
    DeciderInit {
        /// `squad/agent` label.
        label: String,
        /// What the decider reported.
        #[source]
        source: DecisionError,
    },

    /// A loaded registry entry does not sit at the position its id names.
    #[error("{kind} at position {position} carries id {found}")]
    RegistryOrder {
        /// `"agent"`, `"squad"` or `"squad reference"`.
        kind: &'static str,
        /// Position in the loaded list.
        position: usize,
        /// The id found there.
        found: usize,
    },

    /// The configuration text is not valid JSON for a [`GameConfig`](crate::config::GameConfig).
    #[error("invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A decider could not produce a move. The match treats this as "no action".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("decision failed: {message}")]
pub struct DecisionError {
    message: String,
}

impl DecisionError {
    /// Creates a decision error with a message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The message given at construction.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}
