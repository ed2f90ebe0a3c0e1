//! Line-of-sight resolution between agents.
//!
//! Two agents see each other unless an obstruction strictly crosses the
//! segment between their positions. Sightlines are symmetric: the segment is
//! always built from the lower id to the higher id, so `a` watching `b` and
//! `b` watching `a` are decided by the exact same floating-point evaluation.
//!
//! Queries return [`AgentId`]s. Callers re-resolve through the
//! [`Roster`] when they need the agent itself.
//!
//! # Example
//!
//! ```
//! use sightline_core::agent::{AgentId, Role};
//! use sightline_core::config::{AgentConfig, SquadConfig};
//! use sightline_core::field::Field;
//! use sightline_core::roster::Roster;
//! use sightline_core::visibility::find_watching_agents;
//!
//! let roster = Roster::from_squads(&[
//!     SquadConfig::new("a").with_agent(AgentConfig::new("hunter", Role::Hunter)),
//!     SquadConfig::new("b").with_agent(AgentConfig::new("runner", Role::Runner)),
//! ]);
//! let field = Field::default();
//!
//! let watchers = find_watching_agents(&roster, &field, AgentId::new(1), Some(Role::Hunter), false);
//! assert_eq!(watchers, vec![AgentId::new(0)]);
//! ```

use crate::agent::{Agent, AgentId, Role};
use crate::field::Field;
use crate::roster::Roster;

/// True unless an obstruction blocks the sightline between `from` and `to`.
#[must_use]
pub fn is_watching(field: &Field, from: &Agent, to: &Agent) -> bool {
    let (near, far) = if from.id() <= to.id() {
        (from, to)
    } else {
        (to, from)
    };
    !field.blocks_sightline(near.position(), far.position())
}

/// Agents that can see `target`.
///
/// Scans the whole registry in id order. When `role` is given, only agents
/// with that role are considered. When `include_same_squad` is false,
/// members of `target`'s squad (including `target` itself) are skipped.
///
/// An id outside the registry yields an empty set.
#[must_use]
pub fn find_watching_agents(
    roster: &Roster,
    field: &Field,
    target: AgentId,
    role: Option<Role>,
    include_same_squad: bool,
) -> Vec<AgentId> {
    let Some(me) = roster.agent(target) else {
        debug_assert!(false, "visibility query for unregistered agent {target}");
        return Vec::new();
    };

    roster
        .agents()
        .iter()
        .filter(|other| role.map_or(true, |r| other.role() == r))
        .filter(|other| include_same_squad || !other.is_ally_of(me))
        .filter(|other| is_watching(field, other, me))
        .map(Agent::id)
        .collect()
}

/// Opposing Hunters watching `runner`.
///
/// Calling this on a Hunter is a logic error: debug builds panic, release
/// builds return an empty set.
#[must_use]
pub fn watching_hunters(roster: &Roster, field: &Field, runner: AgentId) -> Vec<AgentId> {
    if !has_role(roster, runner, Role::Runner) {
        return Vec::new();
    }
    find_watching_agents(roster, field, runner, Some(Role::Hunter), false)
}

/// Opposing Runners in sight of `hunter`.
///
/// Calling this on a Runner is a logic error: debug builds panic, release
/// builds return an empty set.
#[must_use]
pub fn watched_runners(roster: &Roster, field: &Field, hunter: AgentId) -> Vec<AgentId> {
    if !has_role(roster, hunter, Role::Hunter) {
        return Vec::new();
    }
    find_watching_agents(roster, field, hunter, Some(Role::Runner), false)
}

fn has_role(roster: &Roster, id: AgentId, expected: Role) -> bool {
    let actual = roster.agent(id).map(Agent::role);
    debug_assert_eq!(
        actual,
        Some(expected),
        "agent {id} queried as a {expected}"
    );
    actual == Some(expected)
}
