//! Resolvers turn a turn's pending state into committed state.
//!
//! Committing a turn runs two resolvers in a fixed order:
//! 1. [`MovementResolver`] applies every pending action under the speed and
//!    bounds constraints, collecting per-agent failures
//! 2. [`ScoringResolver`] resolves visibility on the post-movement positions
//!    and transfers points from watched Runners to their Hunters
//!
//! # Invariants
//!
//! - Resolvers visit agents in ascending id order
//! - A failure for one agent never stops processing of the others
//! - Resolvers are deterministic given the same roster and field

mod movement;
mod scoring;

pub use movement::MovementResolver;
pub use scoring::{ScoreSummary, ScoringResolver};

use crate::field::Field;
use crate::roster::Roster;

/// One phase of a turn commit.
///
/// A resolver reads the field, mutates the roster and reports what happened.
///
/// # Example
///
/// ```
/// use sightline_core::field::Field;
/// use sightline_core::resolver::Resolver;
/// use sightline_core::roster::Roster;
///
/// struct CountAgents;
///
/// impl Resolver for CountAgents {
///     type Report = usize;
///
///     fn resolve(&self, roster: &mut Roster, _field: &Field) -> usize {
///         roster.len()
///     }
/// }
///
/// let mut roster = Roster::default();
/// assert_eq!(CountAgents.resolve(&mut roster, &Field::default()), 0);
/// ```
pub trait Resolver {
    /// What the resolver reports back to the turn engine.
    type Report;

    /// Applies this phase to `roster`.
    fn resolve(&self, roster: &mut Roster, field: &Field) -> Self::Report;
}
