//! Built-in deciders selectable from the command line.

use std::f64::consts::PI;

use clap::ValueEnum;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sightline_core::agent::{ActionMove, Role};
use sightline_core::config::GameConfig;
use sightline_core::decider::ConstantDecider;
use sightline_core::error::DecisionError;
use sightline_core::geom::{Coord, PolarVector};
use sightline_core::{Decider, Knowledge};

/// Which decider every agent uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum DeciderKind {
    /// Everyone walks one unit east per turn, clamped to the speed limit.
    Constant,
    /// Seeded random walk.
    Wander,
    /// Hunters chase the nearest visible Runner; Runners flee the nearest Hunter.
    Pursuit,
}

impl DeciderKind {
    /// Builds a fresh decider for one agent.
    pub(crate) fn build(self, seed: u64) -> Box<dyn Decider> {
        match self {
            Self::Constant => Box::new(ConstantDecider::new(ActionMove::polar(1.0, 0.0))),
            Self::Wander => Box::new(Wander::new(seed)),
            Self::Pursuit => Box::new(Pursuit::default()),
        }
    }
}

// =============================================================================
// Wander
// =============================================================================

/// Random heading each turn, reproducible from the seed.
#[derive(Debug)]
struct Wander {
    seed: u64,
    speed: f64,
}

impl Wander {
    fn new(seed: u64) -> Self {
        Self { seed, speed: 0.0 }
    }

    fn rng_for(&self, knowledge: &Knowledge) -> ChaCha8Rng {
        let agent = knowledge.me().id().index() as u64;
        let turn = u64::from(knowledge.turns_remaining());
        let mixed = self
            .seed
            .wrapping_mul(0x9e37_79b9_7f4a_7c15)
            .wrapping_add(agent.wrapping_mul(0xbf58_476d_1ce4_e5b9))
            .wrapping_add(turn);
        ChaCha8Rng::seed_from_u64(mixed)
    }
}

impl Decider for Wander {
    fn init(&mut self, config: &GameConfig) -> Result<(), DecisionError> {
        self.speed = config.speed;
        Ok(())
    }

    fn decide(&self, knowledge: &Knowledge) -> Result<Option<ActionMove>, DecisionError> {
        let mut rng = self.rng_for(knowledge);
        let theta = rng.gen_range(-PI..PI);
        let step = PolarVector::new(self.speed, theta).to_vector();
        Ok(inside_field(knowledge, step))
    }
}

// =============================================================================
// Pursuit
// =============================================================================

#[derive(Debug, Default)]
struct Pursuit {
    speed: f64,
}

impl Decider for Pursuit {
    fn init(&mut self, config: &GameConfig) -> Result<(), DecisionError> {
        if config.squads.len() < 2 {
            return Err(DecisionError::new("pursuit needs at least two squads"));
        }
        self.speed = config.speed;
        Ok(())
    }

    fn decide(&self, knowledge: &Knowledge) -> Result<Option<ActionMove>, DecisionError> {
        let me = knowledge.me();
        let (target, sign) = match me.role() {
            Role::Hunter => (knowledge.nearest_visible(Role::Runner), 1.0),
            Role::Runner => (knowledge.nearest_visible(Role::Hunter), -1.0),
        };
        let Some(target) = target else {
            return Ok(None);
        };

        let offset = (target.position() - me.position()) * sign;
        if offset.length_squared() == 0.0 {
            return Ok(None);
        }
        let step = offset.normalize() * self.speed;
        Ok(inside_field(knowledge, step))
    }
}

/// Shortens `step` so the move stays inside the field.
fn inside_field(knowledge: &Knowledge, step: Coord) -> Option<ActionMove> {
    let rect = knowledge.field().rect();
    let from = knowledge.me().position();
    let to = (from + step).clamp(rect.min, rect.max);
    let step = to - from;
    if step.length_squared() == 0.0 {
        return None;
    }
    Some(ActionMove::new(PolarVector::from_vector(step)))
}
