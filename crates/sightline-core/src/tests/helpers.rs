//! Test setup shared by the scenario and history tests.

use sightline_geom::{Coord, Segment};

use crate::agent::{AgentId, Role};
use crate::config::{AgentConfig, FieldConfig, GameConfig, SquadConfig};
use crate::decider::Decider;
use crate::game::Game;
use crate::play::{MatchConfig, SquadEntry};

// =============================================================================
// Layouts
// =============================================================================

/// `squad-NN` names, one Hunter `agent-NNh` and one Runner `agent-NNr` each,
/// everyone at the origin.
pub fn squads_config(num_squads: usize) -> GameConfig {
    (1..=num_squads).fold(GameConfig::default(), |config, i| {
        config.with_squad(
            SquadConfig::new(format!("squad-{i:02}"))
                .with_agent(AgentConfig::new(format!("agent-{i:02}h"), Role::Hunter))
                .with_agent(AgentConfig::new(format!("agent-{i:02}r"), Role::Runner)),
        )
    })
}

/// Five squads with default settings.
pub fn dummy_game() -> Game {
    squads_config(5).build_game().unwrap()
}

/// Two squads split by a wall along x = 0:
///
/// ```text
///      +h |
///      *h | *r
///      +r |
/// ```
///
/// `*` is squad-01 (ids 0, 1), `+` is squad-02 (ids 2, 3).
pub fn walled_config() -> GameConfig {
    GameConfig::default()
        .with_field(
            FieldConfig::default()
                .with_obstruction(Segment::new(Coord::new(0.0, 2.0), Coord::new(0.0, -2.0))),
        )
        .with_squad(
            SquadConfig::new("squad-01")
                .with_agent(
                    AgentConfig::new("agent-01h", Role::Hunter)
                        .with_initial_position(Coord::new(-1.0, 0.0)),
                )
                .with_agent(
                    AgentConfig::new("agent-01r", Role::Runner)
                        .with_initial_position(Coord::new(1.0, 0.0)),
                ),
        )
        .with_squad(
            SquadConfig::new("squad-02")
                .with_agent(
                    AgentConfig::new("agent-02h", Role::Hunter)
                        .with_initial_position(Coord::new(-1.0, 1.0)),
                )
                .with_agent(
                    AgentConfig::new("agent-02r", Role::Runner)
                        .with_initial_position(Coord::new(-1.0, -1.0)),
                ),
        )
}

/// Match over [`squads_config`] where every agent uses `make()`.
pub fn uniform_match(
    num_squads: usize,
    turns: u32,
    make: impl Fn() -> Box<dyn Decider>,
) -> MatchConfig {
    (1..=num_squads).fold(
        MatchConfig::new(GameConfig::default().with_turns(turns)),
        |config, i| {
            config.with_squad(
                SquadEntry::new(format!("squad-{i:02}"))
                    .with_agent(AgentConfig::new(format!("agent-{i:02}h"), Role::Hunter), make())
                    .with_agent(AgentConfig::new(format!("agent-{i:02}r"), Role::Runner), make()),
            )
        },
    )
}

// =============================================================================
// Assertions
// =============================================================================

pub fn eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-8
}

pub fn id(index: usize) -> AgentId {
    AgentId::new(index)
}
