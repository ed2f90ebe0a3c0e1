//! Agents, squads and the per-turn point ledger.
//!
//! - [`AgentId`] / [`SquadId`]: index newtypes into the registry
//! - [`Role`]: Hunter or Runner, fixed at creation
//! - [`ActionMove`]: the movement intent for the current turn
//! - [`PointGain`]: one ledger entry, naming its counterpart by id
//! - [`Agent`] and [`Squad`]: the registry entries
//!
//! Every type here owns its data, so `Clone` is always a deep copy. Two
//! snapshots can never share a pending action or a ledger.

use std::fmt;

use serde::{Deserialize, Serialize};
use sightline_geom::{Coord, PolarVector};

/// Global agent identifier.
///
/// Equal to the agent's index in the registry's ordered agent list. Ids are
/// assigned once, across all squads, in declaration order.
///
/// ```
/// use sightline_core::agent::AgentId;
///
/// let id = AgentId::new(3);
/// assert_eq!(id.index(), 3);
/// assert!(AgentId::new(1) < id);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentId(usize);

impl AgentId {
    /// Creates an id from a registry index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// The registry index this id refers to.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AgentId({})", self.0)
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for AgentId {
    fn from(index: usize) -> Self {
        Self::new(index)
    }
}

/// Squad identifier, equal to the squad's declaration index.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquadId(usize);

impl SquadId {
    /// Creates an id from a declaration index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// The declaration index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for SquadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SquadId({})", self.0)
    }
}

impl fmt::Display for SquadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What an agent does for its score.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Scores by keeping opposing Runners in sight.
    Hunter,
    /// Loses score while any opposing Hunter can see it.
    Runner,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hunter => write!(f, "Hunter"),
            Self::Runner => write!(f, "Runner"),
        }
    }
}

/// Movement intent for one turn.
///
/// The radius is a request; the engine clamps it to the configured speed.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ActionMove {
    /// Direction and requested distance.
    pub dir: PolarVector,
}

impl ActionMove {
    /// Creates a move along `dir`.
    #[must_use]
    pub const fn new(dir: PolarVector) -> Self {
        Self { dir }
    }

    /// Shorthand for `ActionMove::new(PolarVector::new(r, theta))`.
    #[must_use]
    pub const fn polar(r: f64, theta: f64) -> Self {
        Self::new(PolarVector::new(r, theta))
    }
}

/// One score transfer recorded on an agent this turn.
///
/// Hunters record positive gains from Runners; Runners record the negative
/// share handed to each Hunter watching them. The counterpart is named by id
/// so the ledger never points back into the registry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointGain {
    /// The agent on the other side of the transfer.
    pub counterpart: AgentId,
    /// Signed amount credited to the ledger owner.
    pub gain: f64,
}

impl PointGain {
    /// Creates a ledger entry.
    #[must_use]
    pub const fn new(counterpart: AgentId, gain: f64) -> Self {
        Self { counterpart, gain }
    }
}

/// A single participant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    id: AgentId,
    in_squad_id: usize,
    squad_id: SquadId,
    name: String,
    role: Role,
    pub(crate) pos: Coord,
    pub(crate) point: f64,
    pub(crate) point_gains: Vec<PointGain>,
    pub(crate) action: Option<ActionMove>,
}

impl Agent {
    /// Creates an agent with zero points, an empty ledger and no action.
    ///
    /// Agents built this way are not registered anywhere; the registry
    /// builds its own entries from configuration.
    #[must_use]
    pub fn new(
        id: AgentId,
        in_squad_id: usize,
        squad_id: SquadId,
        name: impl Into<String>,
        role: Role,
        pos: Coord,
    ) -> Self {
        Self {
            id,
            in_squad_id,
            squad_id,
            name: name.into(),
            role,
            pos,
            point: 0.0,
            point_gains: Vec::new(),
            action: None,
        }
    }

    /// Global id.
    #[must_use]
    pub const fn id(&self) -> AgentId {
        self.id
    }

    /// Index within the squad's own agent list.
    #[must_use]
    pub const fn in_squad_id(&self) -> usize {
        self.in_squad_id
    }

    /// Owning squad.
    #[must_use]
    pub const fn squad_id(&self) -> SquadId {
        self.squad_id
    }

    /// Display name from configuration.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Hunter or Runner.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Current position.
    #[must_use]
    pub const fn position(&self) -> Coord {
        self.pos
    }

    /// Cumulative points.
    #[must_use]
    pub const fn point(&self) -> f64 {
        self.point
    }

    /// Ledger for the current turn.
    #[must_use]
    pub fn point_gains(&self) -> &[PointGain] {
        &self.point_gains
    }

    /// Net change recorded in this turn's ledger.
    #[must_use]
    pub fn turn_delta(&self) -> f64 {
        self.point_gains.iter().map(|g| g.gain).sum()
    }

    /// Pending action, if one has been assigned this turn.
    #[must_use]
    pub const fn action(&self) -> Option<ActionMove> {
        self.action
    }

    /// True when both agents belong to the same squad.
    #[must_use]
    pub fn is_ally_of(&self, other: &Agent) -> bool {
        self.squad_id == other.squad_id
    }

    /// Clears the per-turn state: pending action and ledger.
    pub(crate) fn start_turn(&mut self) {
        self.action = None;
        self.point_gains.clear();
    }
}

/// A named group of agents that never score against each other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Squad {
    id: SquadId,
    name: String,
    pub(crate) total_point: f64,
    pub(crate) points_gained: f64,
    pub(crate) points_lost: f64,
}

impl Squad {
    /// Creates a squad with zeroed totals.
    #[must_use]
    pub fn new(id: SquadId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            total_point: 0.0,
            points_gained: 0.0,
            points_lost: 0.0,
        }
    }

    /// Declaration index.
    #[must_use]
    pub const fn id(&self) -> SquadId {
        self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sum of the members' cumulative points.
    #[must_use]
    pub const fn total_point(&self) -> f64 {
        self.total_point
    }

    /// Cumulative positive ledger entries across all turns.
    #[must_use]
    pub const fn points_gained(&self) -> f64 {
        self.points_gained
    }

    /// Cumulative negative ledger entries across all turns (non-positive).
    #[must_use]
    pub const fn points_lost(&self) -> f64 {
        self.points_lost
    }
}
