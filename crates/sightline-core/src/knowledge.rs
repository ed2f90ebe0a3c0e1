//! Per-agent knowledge view.
//!
//! A [`Knowledge`] is what a decider is allowed to see when choosing a move:
//! the field, the game's dimensions, the agent itself, and every agent
//! mutually visible with it (squad-mates and the agent itself included).
//!
//! Everything in it is an owned clone of committed state. Deciders may hold,
//! mutate or send it across threads without touching the authoritative game.

use serde::{Deserialize, Serialize};

use crate::agent::{Agent, AgentId, Role};
use crate::field::Field;
use crate::roster::Roster;
use crate::visibility::find_watching_agents;

/// The scoped, owned view of the game handed to a decider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Knowledge {
    field: Field,
    num_squads: usize,
    num_agents: usize,
    turns_remaining: u32,
    me: Agent,
    visible: Vec<Agent>,
}

impl Knowledge {
    /// Builds the view for `me`. The caller guarantees `me` is registered.
    pub(crate) fn gather(
        roster: &Roster,
        field: &Field,
        turns_remaining: u32,
        me: &Agent,
    ) -> Self {
        let visible = find_watching_agents(roster, field, me.id(), None, true)
            .into_iter()
            .filter_map(|id| roster.agent(id).cloned())
            .collect();

        Self {
            field: field.clone(),
            num_squads: roster.squad_count(),
            num_agents: roster.len(),
            turns_remaining,
            me: me.clone(),
            visible,
        }
    }

    /// The arena, obstructions included.
    #[must_use]
    pub fn field(&self) -> &Field {
        &self.field
    }

    /// Number of squads in the game.
    #[must_use]
    pub const fn num_squads(&self) -> usize {
        self.num_squads
    }

    /// Number of agents in the game.
    #[must_use]
    pub const fn num_agents(&self) -> usize {
        self.num_agents
    }

    /// Turns left before the game finishes.
    #[must_use]
    pub const fn turns_remaining(&self) -> u32 {
        self.turns_remaining
    }

    /// The agent this view belongs to.
    #[must_use]
    pub fn me(&self) -> &Agent {
        &self.me
    }

    /// Agents mutually visible with [`me`](Self::me), in id order.
    ///
    /// Always contains `me` itself.
    #[must_use]
    pub fn visible(&self) -> &[Agent] {
        &self.visible
    }

    /// Visible agents from other squads.
    pub fn visible_opponents(&self) -> impl Iterator<Item = &Agent> + '_ {
        self.visible.iter().filter(|a| !a.is_ally_of(&self.me))
    }

    /// True when `id` is in the visible set.
    #[must_use]
    pub fn can_see(&self, id: AgentId) -> bool {
        self.visible.iter().any(|a| a.id() == id)
    }

    /// Closest visible opponent with the given role, ties broken by id.
    #[must_use]
    pub fn nearest_visible(&self, role: Role) -> Option<&Agent> {
        let origin = self.me.position();
        self.visible_opponents()
            .filter(|a| a.role() == role)
            .min_by(|a, b| {
                let da = a.position().distance_squared(origin);
                let db = b.position().distance_squared(origin);
                da.total_cmp(&db).then_with(|| a.id().cmp(&b.id()))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AgentConfig, SquadConfig};
    use sightline_geom::{Coord, Rect};

    fn roster() -> Roster {
        Roster::from_squads(&[
            SquadConfig::new("a")
                .with_agent(AgentConfig::new("h", Role::Hunter))
                .with_agent(
                    AgentConfig::new("r", Role::Runner).with_initial_position(Coord::new(1.0, 0.0)),
                ),
            SquadConfig::new("b")
                .with_agent(
                    AgentConfig::new("far", Role::Runner)
                        .with_initial_position(Coord::new(5.0, 5.0)),
                )
                .with_agent(
                    AgentConfig::new("near", Role::Runner)
                        .with_initial_position(Coord::new(0.0, 2.0)),
                ),
        ])
    }

    #[test]
    fn open_field_sees_everyone() {
        let roster = roster();
        let field = Field::new(Rect::centered(10.0), Vec::new());
        let me = &roster.agents()[0];

        let knowledge = Knowledge::gather(&roster, &field, 7, me);

        assert_eq!(knowledge.num_agents(), 4);
        assert_eq!(knowledge.num_squads(), 2);
        assert_eq!(knowledge.turns_remaining(), 7);
        assert_eq!(knowledge.visible().len(), 4);
        assert!(knowledge.can_see(me.id()));
        assert_eq!(knowledge.visible_opponents().count(), 2);
    }

    #[test]
    fn nearest_visible_picks_closest_opponent() {
        let roster = roster();
        let field = Field::new(Rect::centered(10.0), Vec::new());
        let knowledge = Knowledge::gather(&roster, &field, 1, &roster.agents()[0]);

        // The friendly runner at distance 1 is ignored.
        let target = knowledge.nearest_visible(Role::Runner).unwrap();
        assert_eq!(target.name(), "near");
        assert!(knowledge.nearest_visible(Role::Hunter).is_none());
    }

    #[test]
    fn view_is_detached_from_roster() {
        let roster = roster();
        let field = Field::default();
        let mut knowledge = Knowledge::gather(&roster, &field, 1, &roster.agents()[0]);

        knowledge.me.pos = Coord::new(9.0, 9.0);
        knowledge.visible.clear();

        assert_eq!(roster.agents()[0].position(), Coord::ZERO);
        assert_eq!(roster.len(), 4);
    }
}
