//! The decision seam.
//!
//! A [`Decider`] picks one agent's move each turn from that agent's
//! [`Knowledge`]. The match driver owns one decider per agent and queries them
//! in parallel, so implementations must be `Send + Sync` and `decide` takes
//! `&self`.
//!
//! # Example
//!
//! ```
//! use sightline_core::agent::ActionMove;
//! use sightline_core::decider::{Decider, FnDecider};
//! use sightline_core::error::DecisionError;
//! use sightline_core::knowledge::Knowledge;
//!
//! struct Eastward;
//!
//! impl Decider for Eastward {
//!     fn decide(&self, _knowledge: &Knowledge) -> Result<Option<ActionMove>, DecisionError> {
//!         Ok(Some(ActionMove::polar(1.0, 0.0)))
//!     }
//! }
//!
//! let _closure = FnDecider::from_fn(|k: &Knowledge| {
//!     Ok(Some(ActionMove::polar(1.0, f64::from(k.turns_remaining()))))
//! });
//! ```

use std::fmt;

use crate::agent::ActionMove;
use crate::config::GameConfig;
use crate::error::DecisionError;
use crate::knowledge::Knowledge;

/// Chooses a move for one agent.
pub trait Decider: Send + Sync {
    /// Called once before the first turn with the full game configuration.
    ///
    /// # Errors
    ///
    /// A failure here aborts match construction.
    fn init(&mut self, _config: &GameConfig) -> Result<(), DecisionError> {
        Ok(())
    }

    /// Picks this turn's move. `Ok(None)` means "stay put".
    ///
    /// # Errors
    ///
    /// Failures are logged by the driver and treated as "no action".
    fn decide(&self, knowledge: &Knowledge) -> Result<Option<ActionMove>, DecisionError>;
}

/// Never moves.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdleDecider;

impl Decider for IdleDecider {
    fn decide(&self, _knowledge: &Knowledge) -> Result<Option<ActionMove>, DecisionError> {
        Ok(None)
    }
}

/// Issues the same move every turn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantDecider {
    action: ActionMove,
}

impl ConstantDecider {
    /// Creates a decider that always returns `action`.
    #[must_use]
    pub const fn new(action: ActionMove) -> Self {
        Self { action }
    }
}

impl Decider for ConstantDecider {
    fn decide(&self, _knowledge: &Knowledge) -> Result<Option<ActionMove>, DecisionError> {
        Ok(Some(self.action))
    }
}

/// Adapts a closure into a [`Decider`].
pub struct FnDecider<F> {
    func: F,
}

impl<F> FnDecider<F>
where
    F: Fn(&Knowledge) -> Result<Option<ActionMove>, DecisionError> + Send + Sync,
{
    /// Wraps `func`.
    #[must_use]
    pub fn from_fn(func: F) -> Self {
        Self { func }
    }
}

impl<F> fmt::Debug for FnDecider<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnDecider").finish_non_exhaustive()
    }
}

impl<F> Decider for FnDecider<F>
where
    F: Fn(&Knowledge) -> Result<Option<ActionMove>, DecisionError> + Send + Sync,
{
    fn decide(&self, knowledge: &Knowledge) -> Result<Option<ActionMove>, DecisionError> {
        (self.func)(knowledge)
    }
}
