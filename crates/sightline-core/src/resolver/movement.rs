//! Movement resolver: pending actions to positions.
//!
//! Each action's requested radius is clamped to the configured speed, then
//! the candidate position is checked against the field bounds. Moves that
//! would leave the field are rejected outright; the agent keeps its
//! position and the rejection is reported.

use tracing::debug;

use crate::agent::AgentId;
use crate::error::ActionError;
use crate::field::Field;
use crate::roster::Roster;

use super::Resolver;

/// Applies pending actions under a per-turn speed limit.
///
/// # Example
///
/// ```
/// use sightline_core::resolver::MovementResolver;
///
/// let resolver = MovementResolver::new(1.5);
/// assert_eq!(resolver.speed(), 1.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementResolver {
    speed: f64,
}

impl MovementResolver {
    /// Creates a resolver with the given speed limit.
    #[must_use]
    pub const fn new(speed: f64) -> Self {
        Self { speed }
    }

    /// Maximum displacement per turn.
    #[must_use]
    pub const fn speed(&self) -> f64 {
        self.speed
    }

    /// Applies one agent's pending action.
    ///
    /// Returns `Ok(true)` when the agent moved and `Ok(false)` when it had no
    /// action.
    ///
    /// # Errors
    ///
    /// - [`ActionError::Unregistered`] if `id` is not in the roster
    /// - [`ActionError::Rejected`] if the move would leave the field
    pub fn apply(
        &self,
        roster: &mut Roster,
        field: &Field,
        id: AgentId,
    ) -> Result<bool, ActionError> {
        let agent = roster.agent(id).ok_or(ActionError::Unregistered { id })?;

        let Some(action) = agent.action() else {
            return Ok(false);
        };

        let step = action.dir.clamp_radius(self.speed).to_vector();
        let target = agent.position() + step;

        if !field.movable_to(target) {
            return Err(ActionError::Rejected {
                id,
                label: roster.describe(id),
                target,
            });
        }

        if let Some(agent) = roster.agent_mut(id) {
            agent.pos = target;
        }
        Ok(true)
    }
}

impl Resolver for MovementResolver {
    type Report = Vec<ActionError>;

    fn resolve(&self, roster: &mut Roster, field: &Field) -> Vec<ActionError> {
        let mut errors = Vec::new();

        for idx in 0..roster.len() {
            let id = AgentId::new(idx);
            debug_assert_eq!(
                roster.agents()[idx].id(),
                id,
                "internal error: index and id do not agree"
            );

            if let Err(err) = self.apply(roster, field, id) {
                debug!(agent = %id, %err, "action not applied");
                errors.push(err);
            }
        }

        errors
    }
}
