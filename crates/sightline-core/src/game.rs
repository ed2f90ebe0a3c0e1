//! The turn engine.
//!
//! A [`Game`] owns the field, the roster and the turn counter, and moves
//! through a small state machine:
//!
//! ```text
//!            start_turn             commit_turn (turns left)
//!   Idle ───────────────▶ ActionsPending ───────────────────▶ Idle
//!                               │
//!                               │ commit_turn (last turn)
//!                               ▼
//!                           Finished
//! ```
//!
//! Each committed turn runs the [`MovementResolver`] and then the
//! [`ScoringResolver`] on the post-movement positions.
//!
//! `Game` is plain owned data: `clone()` is a full snapshot that shares
//! nothing with the original.
//!
//! # Example
//!
//! ```
//! use sightline_core::agent::{ActionMove, AgentId, Role};
//! use sightline_core::config::{AgentConfig, GameConfig, SquadConfig};
//!
//! let mut game = GameConfig::default()
//!     .with_turns(2)
//!     .with_squad(SquadConfig::new("a").with_agent(AgentConfig::new("h", Role::Hunter)))
//!     .with_squad(SquadConfig::new("b").with_agent(AgentConfig::new("r", Role::Runner)))
//!     .build_game()
//!     .unwrap();
//!
//! game.start_turn();
//! game.set_action(AgentId::new(1), Some(ActionMove::polar(1.0, 0.0))).unwrap();
//! let report = game.commit_turn().unwrap();
//!
//! assert_eq!(report.moved, 1);
//! assert_eq!(game.agent(AgentId::new(0)).unwrap().point(), 1.0);
//! assert_eq!(game.turns_remaining(), 1);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::agent::{ActionMove, Agent, AgentId, Role, Squad};
use crate::config::GameConfig;
use crate::error::{ActionError, ActionErrors, ConfigError, GameError};
use crate::field::Field;
use crate::knowledge::Knowledge;
use crate::resolver::{MovementResolver, Resolver, ScoreSummary, ScoringResolver};
use crate::roster::Roster;
use crate::visibility::find_watching_agents;

// =============================================================================
// TurnPhase
// =============================================================================

/// Where the game is in its turn cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Between turns; the previous turn has been committed.
    #[default]
    Idle,
    /// Per-turn state was reset and actions may be assigned.
    ActionsPending,
    /// The turn budget is spent. No further commits are accepted.
    Finished,
}

/// Outcome of a successful [`Game::commit_turn`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurnReport {
    /// Zero-based index of the committed turn.
    pub turn: u32,
    /// Agents whose action was applied.
    pub moved: usize,
    /// Scoring totals for the turn.
    pub score: ScoreSummary,
}

// =============================================================================
// Game
// =============================================================================

/// Authoritative game state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    config: GameConfig,
    field: Field,
    roster: Roster,
    turns_remaining: u32,
    phase: TurnPhase,
}

impl Game {
    /// Validates `config` and builds a fresh game at turn zero.
    ///
    /// # Errors
    ///
    /// Any [`ConfigError`] reported by [`GameConfig::validate`].
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let field = Field::from(&config.field);
        let roster = Roster::from_squads(&config.squads);
        debug!(
            squads = roster.squad_count(),
            agents = roster.len(),
            turns = config.turns,
            "game created"
        );

        Ok(Self {
            turns_remaining: config.turns,
            config,
            field,
            roster,
            phase: TurnPhase::Idle,
        })
    }

    /// The configuration this game was built from.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The arena.
    #[must_use]
    pub fn field(&self) -> &Field {
        &self.field
    }

    /// The agent and squad registry.
    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Squads in id order.
    #[must_use]
    pub fn squads(&self) -> &[Squad] {
        self.roster.squads()
    }

    /// Agents in id order.
    #[must_use]
    pub fn agents(&self) -> &[Agent] {
        self.roster.agents()
    }

    /// Looks up an agent by id.
    #[must_use]
    pub fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.roster.agent(id)
    }

    /// Turns left to commit.
    #[must_use]
    pub const fn turns_remaining(&self) -> u32 {
        self.turns_remaining
    }

    /// Turns committed so far.
    #[must_use]
    pub const fn turns_elapsed(&self) -> u32 {
        self.config.turns.saturating_sub(self.turns_remaining)
    }

    /// Current state machine phase.
    #[must_use]
    pub const fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// True once every turn has been committed.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.turns_remaining == 0
    }

    // -------------------------------------------------------------------------
    // Turn cycle
    // -------------------------------------------------------------------------

    /// Clears every pending action and per-turn ledger.
    ///
    /// Idempotent. Cumulative points, positions and squad totals are kept.
    pub fn start_turn(&mut self) {
        for agent in self.roster.agents_mut() {
            agent.start_turn();
        }
        if !self.is_finished() {
            self.phase = TurnPhase::ActionsPending;
        }
    }

    /// Assigns (or clears) the pending action of one agent.
    ///
    /// # Errors
    ///
    /// [`ActionError::Unregistered`] if `id` is not in the roster.
    pub fn set_action(&mut self, id: AgentId, action: Option<ActionMove>) -> Result<(), ActionError> {
        let agent = self
            .roster
            .agent_mut(id)
            .ok_or(ActionError::Unregistered { id })?;
        agent.action = action;
        if self.phase == TurnPhase::Idle {
            self.phase = TurnPhase::ActionsPending;
        }
        Ok(())
    }

    /// Overwrites every pending action at once; `actions[i]` belongs to agent `i`.
    pub(crate) fn assign_actions(&mut self, actions: Vec<Option<ActionMove>>) {
        debug_assert_eq!(actions.len(), self.roster.len());
        for (agent, action) in self.roster.agents_mut().iter_mut().zip(actions) {
            agent.action = action;
        }
    }

    /// Applies one agent's pending action immediately.
    ///
    /// Returns `Ok(true)` if the agent moved and `Ok(false)` if it had no
    /// action. Scoring and the turn counter are untouched.
    ///
    /// # Errors
    ///
    /// - [`ActionError::Unregistered`] if `id` is not in the roster
    /// - [`ActionError::Rejected`] if the move would leave the field
    pub fn apply_action(&mut self, id: AgentId) -> Result<bool, ActionError> {
        MovementResolver::new(self.config.speed).apply(&mut self.roster, &self.field, id)
    }

    /// Commits the current turn: movement, scoring, counter.
    ///
    /// Rejected moves do not stop the turn. Every other agent still moves,
    /// scoring still runs and the counter still advances; the rejections are
    /// then returned together as [`GameError::ActionsRejected`].
    ///
    /// # Errors
    ///
    /// - [`GameError::TurnAfterFinished`] if no turns remain; nothing is
    ///   mutated
    /// - [`GameError::ActionsRejected`] if one or more moves were rejected;
    ///   the turn was committed anyway
    pub fn commit_turn(&mut self) -> Result<TurnReport, GameError> {
        if self.is_finished() {
            return Err(GameError::TurnAfterFinished);
        }

        let turn = self.turns_elapsed();
        let pending = self
            .roster
            .agents()
            .iter()
            .filter(|a| a.action().is_some())
            .count();

        let rejected = MovementResolver::new(self.config.speed).resolve(&mut self.roster, &self.field);
        let score = ScoringResolver.resolve(&mut self.roster, &self.field);

        self.turns_remaining -= 1;
        self.phase = if self.is_finished() {
            TurnPhase::Finished
        } else {
            TurnPhase::Idle
        };

        let report = TurnReport {
            turn,
            moved: pending - rejected.len(),
            score,
        };
        debug!(
            turn,
            moved = report.moved,
            rejected = rejected.len(),
            watched = score.watched_runners,
            transferred = score.transferred,
            "turn committed"
        );
        if self.is_finished() {
            info!(turns = self.config.turns, "game finished");
        }

        if rejected.is_empty() {
            Ok(report)
        } else {
            Err(GameError::ActionsRejected {
                turn,
                errors: ActionErrors::new(rejected),
            })
        }
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Builds the knowledge view for one agent.
    ///
    /// # Errors
    ///
    /// [`ActionError::Unregistered`] if `id` is not in the roster.
    pub fn knowledge_for(&self, id: AgentId) -> Result<Knowledge, ActionError> {
        let me = self.roster.agent(id).ok_or(ActionError::Unregistered { id })?;
        Ok(Knowledge::gather(
            &self.roster,
            &self.field,
            self.turns_remaining,
            me,
        ))
    }

    /// `squad/agent` label for diagnostics.
    #[must_use]
    pub fn describe_agent(&self, id: AgentId) -> String {
        self.roster.describe(id)
    }

    /// Agents that can currently see `target`.
    ///
    /// See [`find_watching_agents`] for the filter semantics. Unknown ids
    /// yield an empty set.
    #[must_use]
    pub fn watching_agents(
        &self,
        target: AgentId,
        role: Option<Role>,
        include_same_squad: bool,
    ) -> Vec<AgentId> {
        if self.roster.agent(target).is_none() {
            return Vec::new();
        }
        find_watching_agents(&self.roster, &self.field, target, role, include_same_squad)
    }

    /// Squads ranked by total points, highest first. Ties keep id order.
    #[must_use]
    pub fn scoreboard(&self) -> Vec<&Squad> {
        let mut ranked: Vec<&Squad> = self.roster.squads().iter().collect();
        ranked.sort_by(|a, b| b.total_point().total_cmp(&a.total_point()));
        ranked
    }
}
