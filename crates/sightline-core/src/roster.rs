//! The authoritative agent and squad registry.
//!
//! The roster is built once from configuration and never grows or shrinks.
//! Its ordering is the identity scheme for the whole engine:
//!
//! - squad `i` has [`SquadId`] `i` (declaration order)
//! - agents are numbered with a single global sequence across all squads,
//!   so agent `i` has [`AgentId`] `i`
//! - each agent also carries an in-squad index local to its squad
//!
//! Everything outside the roster refers to agents by id and re-resolves
//! through [`Roster::agent`]; no references into the registry are handed out
//! beyond a borrow.

use serde::{Deserialize, Serialize};

use crate::agent::{Agent, AgentId, PointGain, Role, Squad, SquadId};
use crate::config::SquadConfig;
use crate::error::ConfigError;

/// Ordered collections of squads and agents.
///
/// Deserializing re-checks the identity scheme and rejects a registry whose
/// ids do not match their positions.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "RosterData")]
pub struct Roster {
    squads: Vec<Squad>,
    agents: Vec<Agent>,
}

/// Unchecked wire form of a [`Roster`].
#[derive(Deserialize)]
struct RosterData {
    squads: Vec<Squad>,
    agents: Vec<Agent>,
}

impl TryFrom<RosterData> for Roster {
    type Error = ConfigError;

    fn try_from(data: RosterData) -> Result<Self, Self::Error> {
        for (position, squad) in data.squads.iter().enumerate() {
            if squad.id().index() != position {
                return Err(ConfigError::RegistryOrder {
                    kind: "squad",
                    position,
                    found: squad.id().index(),
                });
            }
        }
        for (position, agent) in data.agents.iter().enumerate() {
            if agent.id().index() != position {
                return Err(ConfigError::RegistryOrder {
                    kind: "agent",
                    position,
                    found: agent.id().index(),
                });
            }
            if agent.squad_id().index() >= data.squads.len() {
                return Err(ConfigError::RegistryOrder {
                    kind: "squad reference",
                    position,
                    found: agent.squad_id().index(),
                });
            }
        }
        Ok(Self {
            squads: data.squads,
            agents: data.agents,
        })
    }
}

impl Roster {
    /// Builds the registry from squad configurations.
    ///
    /// ```
    /// use sightline_core::agent::{AgentId, Role};
    /// use sightline_core::config::{AgentConfig, SquadConfig};
    /// use sightline_core::roster::Roster;
    ///
    /// let roster = Roster::from_squads(&[
    ///     SquadConfig::new("a").with_agent(AgentConfig::new("a0", Role::Hunter)),
    ///     SquadConfig::new("b")
    ///         .with_agent(AgentConfig::new("b0", Role::Hunter))
    ///         .with_agent(AgentConfig::new("b1", Role::Runner)),
    /// ]);
    ///
    /// let b1 = roster.agent(AgentId::new(2)).unwrap();
    /// assert_eq!(b1.name(), "b1");
    /// assert_eq!(b1.in_squad_id(), 1);
    /// ```
    #[must_use]
    pub fn from_squads(configs: &[SquadConfig]) -> Self {
        let mut squads = Vec::with_capacity(configs.len());
        let mut agents = Vec::new();

        for (squad_idx, squad) in configs.iter().enumerate() {
            let squad_id = SquadId::new(squad_idx);
            squads.push(Squad::new(squad_id, squad.name.clone()));

            for (in_squad_id, agent) in squad.agents.iter().enumerate() {
                // Global numbering: do not restart per squad.
                let id = AgentId::new(agents.len());
                agents.push(Agent::new(
                    id,
                    in_squad_id,
                    squad_id,
                    agent.name.clone(),
                    agent.role,
                    agent.initial_position,
                ));
            }
        }

        Self { squads, agents }
    }

    /// All agents in id order.
    #[must_use]
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub(crate) fn agents_mut(&mut self) -> &mut [Agent] {
        &mut self.agents
    }

    /// All squads in id order.
    #[must_use]
    pub fn squads(&self) -> &[Squad] {
        &self.squads
    }

    /// Number of agents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// True when there are no agents.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Number of squads.
    #[must_use]
    pub fn squad_count(&self) -> usize {
        self.squads.len()
    }

    /// Agent ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        self.agents.iter().map(Agent::id)
    }

    /// Looks up an agent by id.
    #[must_use]
    pub fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(id.index())
    }

    pub(crate) fn agent_mut(&mut self, id: AgentId) -> Option<&mut Agent> {
        self.agents.get_mut(id.index())
    }

    /// Looks up a squad by id.
    #[must_use]
    pub fn squad(&self, id: SquadId) -> Option<&Squad> {
        self.squads.get(id.index())
    }

    /// Members of a squad, in in-squad order.
    pub fn squad_members(&self, id: SquadId) -> impl Iterator<Item = &Agent> + '_ {
        self.agents.iter().filter(move |a| a.squad_id() == id)
    }

    /// Agents with the given role, in id order.
    pub fn with_role(&self, role: Role) -> impl Iterator<Item = &Agent> + '_ {
        self.agents.iter().filter(move |a| a.role() == role)
    }

    /// True when `agent` is the registry entry stored at its own id.
    ///
    /// Registry entries are matched on id, squad, in-squad index, name and
    /// role; a value built by hand with the same id but a different identity
    /// is not registered.
    #[must_use]
    pub fn is_registered(&self, agent: &Agent) -> bool {
        self.agent(agent.id()).is_some_and(|entry| {
            entry.id() == agent.id()
                && entry.squad_id() == agent.squad_id()
                && entry.in_squad_id() == agent.in_squad_id()
                && entry.role() == agent.role()
                && entry.name() == agent.name()
        })
    }

    /// `squad/agent` label used in diagnostics.
    #[must_use]
    pub fn describe(&self, id: AgentId) -> String {
        match self.agent(id) {
            Some(agent) => {
                let squad = self.squad(agent.squad_id()).map_or("?", Squad::name);
                format!("{squad}/{}", agent.name())
            }
            None => format!("<unregistered #{id}>"),
        }
    }

    /// Applies one turn of score changes and settles the squad totals.
    ///
    /// `deltas[i]` and `ledgers[i]` belong to agent `i`. Ledger entries are
    /// appended to whatever the agent already holds for this turn.
    pub(crate) fn apply_scores(&mut self, deltas: &[f64], ledgers: Vec<Vec<PointGain>>) {
        debug_assert_eq!(deltas.len(), self.agents.len());
        debug_assert_eq!(ledgers.len(), self.agents.len());

        for ((agent, delta), gains) in self.agents.iter_mut().zip(deltas).zip(ledgers) {
            let Some(squad) = self.squads.get_mut(agent.squad_id().index()) else {
                continue;
            };
            for gain in &gains {
                if gain.gain >= 0.0 {
                    squad.points_gained += gain.gain;
                } else {
                    squad.points_lost += gain.gain;
                }
            }
            agent.point += delta;
            agent.point_gains.extend(gains);
        }

        self.refresh_squad_totals();
    }

    /// Recomputes every squad's total as the sum of its members' points.
    pub(crate) fn refresh_squad_totals(&mut self) {
        for squad in &mut self.squads {
            squad.total_point = 0.0;
        }
        for agent in &self.agents {
            if let Some(squad) = self.squads.get_mut(agent.squad_id().index()) {
                squad.total_point += agent.point;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AgentConfig;

    fn roster() -> Roster {
        Roster::from_squads(&[
            SquadConfig::new("squad-01")
                .with_agent(AgentConfig::new("agent-01h", Role::Hunter))
                .with_agent(AgentConfig::new("agent-01r", Role::Runner)),
            SquadConfig::new("squad-02")
                .with_agent(AgentConfig::new("agent-02h", Role::Hunter))
                .with_agent(AgentConfig::new("agent-02r", Role::Runner))
                .with_agent(AgentConfig::new("agent-02x", Role::Runner)),
        ])
    }

    #[test]
    fn ids_match_indices() {
        let roster = roster();
        for (idx, agent) in roster.agents().iter().enumerate() {
            assert_eq!(agent.id().index(), idx);
        }
        for (idx, squad) in roster.squads().iter().enumerate() {
            assert_eq!(squad.id().index(), idx);
        }
    }

    #[test]
    fn in_squad_ids_restart_per_squad() {
        let roster = roster();
        let second: Vec<_> = roster
            .squad_members(SquadId::new(1))
            .map(Agent::in_squad_id)
            .collect();
        assert_eq!(second, vec![0, 1, 2]);
        assert_eq!(roster.agent(AgentId::new(4)).unwrap().in_squad_id(), 2);
    }

    #[test]
    fn describe_uses_squad_and_agent_names() {
        let roster = roster();
        assert_eq!(roster.describe(AgentId::new(3)), "squad-02/agent-02r");
        assert!(roster.describe(AgentId::new(99)).contains("unregistered"));
    }

    #[test]
    fn registry_entries_are_registered() {
        let roster = roster();
        for agent in roster.agents() {
            assert!(roster.is_registered(agent));
        }
        // A clone is the same identity.
        assert!(roster.is_registered(&roster.agents()[1].clone()));
    }

    #[test]
    fn foreign_agents_are_not_registered() {
        let roster = roster();
        let impostor = Agent::new(
            AgentId::new(0),
            0,
            SquadId::new(0),
            "",
            Role::Hunter,
            sightline_geom::Coord::ZERO,
        );
        assert!(!roster.is_registered(&impostor));

        let out_of_range = Agent::new(
            AgentId::new(17),
            0,
            SquadId::new(0),
            "agent-01h",
            Role::Hunter,
            sightline_geom::Coord::ZERO,
        );
        assert!(!roster.is_registered(&out_of_range));
    }

    #[test]
    fn role_filter() {
        let roster = roster();
        assert_eq!(roster.with_role(Role::Hunter).count(), 2);
        assert_eq!(roster.with_role(Role::Runner).count(), 3);
    }

    #[test]
    fn apply_scores_updates_agents_and_squads() {
        let mut roster = roster();
        let deltas = [1.0, 0.0, 0.0, -1.0, 0.0];
        let ledgers = vec![
            vec![PointGain::new(AgentId::new(3), 1.0)],
            vec![],
            vec![],
            vec![PointGain::new(AgentId::new(0), -1.0)],
            vec![],
        ];

        roster.apply_scores(&deltas, ledgers);

        assert_eq!(roster.agents()[0].point(), 1.0);
        assert_eq!(roster.agents()[3].point(), -1.0);
        assert_eq!(roster.agents()[3].point_gains().len(), 1);

        let red = &roster.squads()[0];
        let blue = &roster.squads()[1];
        assert_eq!(red.total_point(), 1.0);
        assert_eq!(red.points_gained(), 1.0);
        assert_eq!(blue.total_point(), -1.0);
        assert_eq!(blue.points_lost(), -1.0);
    }

    #[test]
    fn json_roundtrip_keeps_the_registry() {
        let roster = roster();
        let text = serde_json::to_string(&roster).unwrap();
        let back: Roster = serde_json::from_str(&text).unwrap();
        assert_eq!(back, roster);
    }

    #[test]
    fn loading_rejects_an_agent_out_of_place() {
        let mut value = serde_json::to_value(roster()).unwrap();
        value["agents"][3]["id"] = serde_json::json!(17);

        let err = serde_json::from_value::<Roster>(value).unwrap_err();
        assert!(err.to_string().contains("agent at position 3 carries id 17"), "{err}");
    }

    #[test]
    fn loading_rejects_reordered_squads_and_dangling_members() {
        let mut swapped = serde_json::to_value(roster()).unwrap();
        swapped["squads"][0]["id"] = serde_json::json!(1);
        assert!(serde_json::from_value::<Roster>(swapped).is_err());

        let mut dangling = serde_json::to_value(roster()).unwrap();
        dangling["agents"][4]["squad_id"] = serde_json::json!(9);
        let err = serde_json::from_value::<Roster>(dangling).unwrap_err();
        assert!(err.to_string().contains("squad reference"), "{err}");
    }
}
