//! The arena: movement bounds plus opaque obstructions.
//!
//! Obstructions are purely visual. They block sightlines and never block
//! movement; an agent may walk straight through one.

use serde::{Deserialize, Serialize};
use sightline_geom::{Coord, Rect, Segment};

use crate::config::FieldConfig;

/// A line that blocks sightlines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstruction {
    /// Extent of the obstruction.
    pub segment: Segment,
}

impl Obstruction {
    /// Creates an obstruction along `segment`.
    #[must_use]
    pub const fn new(segment: Segment) -> Self {
        Self { segment }
    }
}

/// Bounded rectangle plus ordered obstructions.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Field {
    rect: Rect,
    obstructions: Vec<Obstruction>,
}

impl Field {
    /// Creates a field.
    #[must_use]
    pub fn new(rect: Rect, obstructions: Vec<Obstruction>) -> Self {
        Self { rect, obstructions }
    }

    /// Movement bounds.
    #[must_use]
    pub const fn rect(&self) -> &Rect {
        &self.rect
    }

    /// Obstructions in configuration order.
    #[must_use]
    pub fn obstructions(&self) -> &[Obstruction] {
        &self.obstructions
    }

    /// True iff `position` is inside the bounds, edges included.
    #[must_use]
    pub fn movable_to(&self, position: Coord) -> bool {
        self.rect.contains(position)
    }

    /// True iff some obstruction strictly crosses the segment `from -> to`.
    #[must_use]
    pub fn blocks_sightline(&self, from: Coord, to: Coord) -> bool {
        let sight = Segment::new(from, to);
        self.obstructions
            .iter()
            .any(|obstruction| obstruction.segment.crosses(&sight))
    }
}

impl From<&FieldConfig> for Field {
    fn from(config: &FieldConfig) -> Self {
        Self::new(config.rect, config.obstructions.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walled() -> Field {
        Field::new(
            Rect::centered(10.0),
            vec![Obstruction::new(Segment::new(
                Coord::new(0.0, 2.0),
                Coord::new(0.0, -2.0),
            ))],
        )
    }

    #[test]
    fn movable_to_is_inclusive() {
        let field = walled();
        assert!(field.movable_to(Coord::new(10.0, 10.0)));
        assert!(!field.movable_to(Coord::new(10.5, 0.0)));
    }

    #[test]
    fn obstructions_do_not_block_movement() {
        // Standing right on the wall is fine.
        assert!(walled().movable_to(Coord::new(0.0, 0.0)));
    }

    #[test]
    fn wall_blocks_straight_sightline() {
        let field = walled();
        assert!(field.blocks_sightline(Coord::new(-1.0, 0.0), Coord::new(1.0, 0.0)));
        assert!(!field.blocks_sightline(Coord::new(-1.0, 0.0), Coord::new(-1.0, -1.0)));
    }

    #[test]
    fn sightline_around_the_wall_end_is_clear() {
        let field = walled();
        assert!(!field.blocks_sightline(Coord::new(-1.0, 3.0), Coord::new(1.0, 3.0)));
        // Grazing the endpoint exactly is not a crossing.
        assert!(!field.blocks_sightline(Coord::new(-1.0, 2.0), Coord::new(1.0, 2.0)));
    }

    #[test]
    fn built_from_config() {
        let config = FieldConfig::default()
            .with_obstruction(Segment::new(Coord::new(1.0, 1.0), Coord::new(2.0, 2.0)));
        let field = Field::from(&config);
        assert_eq!(field.obstructions().len(), 1);
        assert_eq!(*field.rect(), config.rect);
    }
}
