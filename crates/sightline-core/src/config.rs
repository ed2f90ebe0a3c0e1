//! Game configuration.
//!
//! A [`GameConfig`] is consumed once to build a [`Game`]. It can be written
//! with the builder methods or loaded from JSON; missing JSON fields fall
//! back to [`GameConfig::default`].
//!
//! # Example
//!
//! ```
//! use sightline_core::agent::Role;
//! use sightline_core::config::{AgentConfig, GameConfig, SquadConfig};
//! use sightline_geom::Coord;
//!
//! let game = GameConfig::default()
//!     .with_turns(10)
//!     .with_squad(
//!         SquadConfig::new("red")
//!             .with_agent(AgentConfig::new("red-h", Role::Hunter))
//!             .with_agent(
//!                 AgentConfig::new("red-r", Role::Runner)
//!                     .with_initial_position(Coord::new(3.0, 0.0)),
//!             ),
//!     )
//!     .build_game()
//!     .unwrap();
//!
//! assert_eq!(game.roster().len(), 2);
//! assert_eq!(game.turns_remaining(), 10);
//! ```

use serde::{Deserialize, Serialize};
use sightline_geom::{Coord, Rect, Segment};

use crate::agent::Role;
use crate::error::ConfigError;
use crate::field::Obstruction;
use crate::game::Game;

/// Default half-size of the square field.
pub const DEFAULT_FIELD_HALF_SIZE: f64 = 10.0;
/// Default per-turn speed limit.
pub const DEFAULT_SPEED: f64 = 1.0;
/// Default turn budget.
pub const DEFAULT_TURNS: u32 = 100;

/// Everything needed to build a [`Game`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Arena bounds and obstructions.
    pub field: FieldConfig,
    /// Squads in declaration order.
    pub squads: Vec<SquadConfig>,
    /// Maximum displacement per turn.
    pub speed: f64,
    /// Total number of turns.
    pub turns: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field: FieldConfig::default(),
            squads: Vec::new(),
            speed: DEFAULT_SPEED,
            turns: DEFAULT_TURNS,
        }
    }
}

impl GameConfig {
    /// Appends a squad.
    #[must_use]
    pub fn with_squad(mut self, squad: SquadConfig) -> Self {
        self.squads.push(squad);
        self
    }

    /// Replaces the field configuration.
    #[must_use]
    pub fn with_field(mut self, field: FieldConfig) -> Self {
        self.field = field;
        self
    }

    /// Sets the per-turn speed limit.
    #[must_use]
    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    /// Sets the turn budget.
    #[must_use]
    pub fn with_turns(mut self, turns: u32) -> Self {
        self.turns = turns;
        self
    }

    /// Total number of agents across all squads.
    #[must_use]
    pub fn agent_count(&self) -> usize {
        self.squads.iter().map(|s| s.agents.len()).sum()
    }

    /// `squad/agent` label for the agent at global index `index`.
    #[must_use]
    pub fn agent_label(&self, index: usize) -> Option<String> {
        self.squads
            .iter()
            .flat_map(|squad| squad.agents.iter().map(move |agent| (squad, agent)))
            .nth(index)
            .map(|(squad, agent)| format!("{}/{}", squad.name, agent.name))
    }

    /// Checks the configuration.
    ///
    /// # Errors
    ///
    /// Rejects a non-positive or non-finite speed, a zero turn budget, a
    /// field without area, non-finite obstructions and agents starting
    /// outside the field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.speed.is_finite() || self.speed <= 0.0 {
            return Err(ConfigError::InvalidSpeed(self.speed));
        }
        if self.turns == 0 {
            return Err(ConfigError::ZeroTurns);
        }
        if !self.field.rect.is_proper() {
            return Err(ConfigError::DegenerateField);
        }
        for (index, obstruction) in self.field.obstructions.iter().enumerate() {
            let segment = obstruction.segment;
            if !segment.a.is_finite() || !segment.b.is_finite() {
                return Err(ConfigError::NonFiniteObstruction { index });
            }
        }
        for squad in &self.squads {
            for agent in &squad.agents {
                if !self.field.rect.contains(agent.initial_position) {
                    return Err(ConfigError::AgentOutsideField {
                        label: format!("{}/{}", squad.name, agent.name),
                        position: agent.initial_position,
                    });
                }
            }
        }
        Ok(())
    }

    /// Validates and builds a fresh game.
    ///
    /// # Errors
    ///
    /// See [`GameConfig::validate`].
    pub fn build_game(&self) -> Result<Game, ConfigError> {
        Game::new(self.clone())
    }

    /// Parses a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] on malformed input. The result is not
    /// validated; call [`GameConfig::validate`] or [`GameConfig::build_game`].
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Serializes to indented JSON.
    ///
    /// # Errors
    ///
    /// Fails only if a value cannot be represented in JSON (e.g. NaN).
    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Arena bounds and opaque obstructions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Inclusive movement bounds.
    pub rect: Rect,
    /// Sightline blockers, in order.
    pub obstructions: Vec<Obstruction>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            rect: Rect::centered(DEFAULT_FIELD_HALF_SIZE),
            obstructions: Vec::new(),
        }
    }
}

impl FieldConfig {
    /// Replaces the bounds.
    #[must_use]
    pub fn with_rect(mut self, rect: Rect) -> Self {
        self.rect = rect;
        self
    }

    /// Appends an obstruction along `segment`.
    #[must_use]
    pub fn with_obstruction(mut self, segment: Segment) -> Self {
        self.obstructions.push(Obstruction::new(segment));
        self
    }
}

/// One squad and its agents in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SquadConfig {
    /// Display name.
    pub name: String,
    /// Members.
    #[serde(default)]
    pub agents: Vec<AgentConfig>,
}

impl SquadConfig {
    /// Creates an empty squad.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            agents: Vec::new(),
        }
    }

    /// Appends an agent.
    #[must_use]
    pub fn with_agent(mut self, agent: AgentConfig) -> Self {
        self.agents.push(agent);
        self
    }
}

/// Descriptor for one agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Display name.
    pub name: String,
    /// Hunter or Runner.
    pub role: Role,
    /// Starting position; the origin when omitted.
    #[serde(default)]
    pub initial_position: Coord,
}

impl AgentConfig {
    /// Creates an agent descriptor starting at the origin.
    #[must_use]
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
            initial_position: Coord::ZERO,
        }
    }

    /// Sets the starting position.
    #[must_use]
    pub fn with_initial_position(mut self, position: Coord) -> Self {
        self.initial_position = position;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_squads() -> GameConfig {
        GameConfig::default()
            .with_squad(
                SquadConfig::new("red")
                    .with_agent(AgentConfig::new("h", Role::Hunter))
                    .with_agent(AgentConfig::new("r", Role::Runner)),
            )
            .with_squad(SquadConfig::new("blue").with_agent(AgentConfig::new("h", Role::Hunter)))
    }

    #[test]
    fn defaults_match_documented_values() {
        let config = GameConfig::default();
        assert_eq!(config.speed, 1.0);
        assert_eq!(config.turns, 100);
        assert_eq!(config.field.rect, Rect::centered(10.0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn agent_labels_follow_global_order() {
        let config = two_squads();
        assert_eq!(config.agent_count(), 3);
        assert_eq!(config.agent_label(1).as_deref(), Some("red/r"));
        assert_eq!(config.agent_label(2).as_deref(), Some("blue/h"));
        assert_eq!(config.agent_label(3), None);
    }

    #[test]
    fn rejects_bad_speed_and_turns() {
        assert!(matches!(
            two_squads().with_speed(0.0).validate(),
            Err(ConfigError::InvalidSpeed(_))
        ));
        assert!(matches!(
            two_squads().with_speed(f64::NAN).validate(),
            Err(ConfigError::InvalidSpeed(_))
        ));
        assert!(matches!(
            two_squads().with_turns(0).validate(),
            Err(ConfigError::ZeroTurns)
        ));
    }

    #[test]
    fn rejects_degenerate_field() {
        let flat = FieldConfig::default().with_rect(Rect::new(Coord::ZERO, Coord::new(5.0, 0.0)));
        assert!(matches!(
            two_squads().with_field(flat).validate(),
            Err(ConfigError::DegenerateField)
        ));
    }

    #[test]
    fn rejects_agent_outside_field() {
        let config = GameConfig::default().with_squad(
            SquadConfig::new("red").with_agent(
                AgentConfig::new("far", Role::Runner).with_initial_position(Coord::new(50.0, 0.0)),
            ),
        );
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("red/far"));
    }

    #[test]
    fn json_roundtrip_keeps_everything() {
        let config = two_squads().with_field(
            FieldConfig::default()
                .with_obstruction(Segment::new(Coord::new(0.0, 2.0), Coord::new(0.0, -2.0))),
        );
        let json = config.to_json_pretty().unwrap();
        let back = GameConfig::from_json_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn json_fields_are_optional() {
        let text = r#"{
            "squads": [
                { "name": "solo", "agents": [ { "name": "a", "role": "hunter" } ] }
            ],
            "turns": 5
        }"#;
        let config = GameConfig::from_json_str(text).unwrap();
        assert_eq!(config.turns, 5);
        assert_eq!(config.speed, DEFAULT_SPEED);
        assert_eq!(config.squads[0].agents[0].initial_position, Coord::ZERO);
    }

    #[test]
    fn malformed_json_is_reported() {
        assert!(matches!(
            GameConfig::from_json_str("{ not json"),
            Err(ConfigError::Json(_))
        ));
    }
}
