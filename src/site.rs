//! Core (nucleo) and satellite sites
use std::collections::{BTreeSet, HashMap};

use crate::prelude::Position;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Stable [Core] identifier (index in the loaded dataset)
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CoreId(pub usize);

/// Stable [Satellite] identifier (index in the loaded dataset)
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SatelliteId(pub usize);

impl std::fmt::Display for CoreId {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for SatelliteId {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Operator supplied current positions, by [CoreId].
pub type PositionOverrides = HashMap<CoreId, Position>;

/// Operative [Core]s, as selected by the operator.
/// Iterated in increasing [CoreId] order.
pub type ActiveSet = BTreeSet<CoreId>;

/// [Core]s by [CoreId]
pub(crate) type CoreLookup<'a> = HashMap<CoreId, &'a Core>;

pub(crate) fn core_lookup(cores: &[Core]) -> CoreLookup<'_> {
    cores.iter().map(|core| (core.id, core)).collect()
}

/// [Core] (nucleo) site, that may serve nearby [Satellite]s.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Core {
    /// [CoreId]
    pub id: CoreId,
    /// Readable name
    pub name: String,
    /// District this site belongs to
    pub district: String,
    /// Nominal (as loaded) [Position]
    pub position: Position,
    /// Number of students
    pub students: u32,
    /// Operator relocated [Position], supersedes the nominal one
    #[cfg_attr(feature = "serde", serde(default))]
    pub current: Option<Position>,
}

impl Core {
    /// Builds new [Core] at its nominal [Position].
    pub fn new(id: usize, name: &str, district: &str, position: Position, students: u32) -> Self {
        Self {
            id: CoreId(id),
            name: name.to_string(),
            district: district.to_string(),
            position,
            students,
            current: None,
        }
    }

    /// [Position] to use in any distance calculation:
    /// the relocated one if any, nominal otherwise.
    pub fn effective_position(&self) -> Position {
        self.current.unwrap_or(self.position)
    }

    /// True if this [Core] was relocated by the operator.
    pub fn is_relocated(&self) -> bool {
        self.current.is_some()
    }

    /// Relocates this [Core].
    pub fn relocate(&mut self, position: Position) {
        self.current = Some(position);
    }

    /// Copies and returns relocated [Core].
    pub fn with_current_position(&self, position: Position) -> Self {
        let mut s = self.clone();
        s.current = Some(position);
        s
    }

    /// Moves this [Core] back to its nominal [Position].
    pub fn reset_position(&mut self) {
        self.current = None;
    }
}

/// [Satellite] site, seeking a [Core] assignment.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Satellite {
    /// [SatelliteId]
    pub id: SatelliteId,
    /// Readable name
    pub name: String,
    /// District this site belongs to
    pub district: String,
    /// [Position]
    pub position: Position,
    /// Number of students
    pub students: u32,
}

impl Satellite {
    /// Builds new [Satellite].
    pub fn new(id: usize, name: &str, district: &str, position: Position, students: u32) -> Self {
        Self {
            id: SatelliteId(id),
            name: name.to_string(),
            district: district.to_string(),
            position,
            students,
        }
    }
}

/// Resolves the effective [Position] of a [Core], given external [PositionOverrides].
/// An override entry always wins over both the nominal and any embedded current position.
pub fn resolve_position(core: &Core, overrides: &PositionOverrides) -> Position {
    overrides
        .get(&core.id)
        .copied()
        .unwrap_or_else(|| core.effective_position())
}

/// Applies [PositionOverrides] to a set of [Core]s.
/// Cores without an entry keep their current state,
/// entries that do not match any [Core] are ignored.
pub fn apply_overrides(cores: &mut [Core], overrides: &PositionOverrides) {
    for core in cores.iter_mut() {
        if let Some(position) = overrides.get(&core.id) {
            core.relocate(*position);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn effective_position() {
        let nominal = Position::new(-0.2, -78.5);
        let moved = Position::new(-0.25, -78.45);

        let mut core = Core::new(0, "core", "district", nominal, 10);
        assert_eq!(core.effective_position(), nominal);
        assert!(!core.is_relocated());

        core.relocate(moved);
        assert_eq!(core.effective_position(), moved);
        assert_eq!(core.position, nominal);

        core.reset_position();
        assert_eq!(core.effective_position(), nominal);
    }

    #[test]
    fn overrides() {
        let mut cores = vec![
            Core::new(0, "a", "d", Position::new(0.0, 0.0), 0),
            Core::new(1, "b", "d", Position::new(0.0, 1.0), 0),
        ];

        let mut overrides = PositionOverrides::new();
        overrides.insert(CoreId(1), Position::new(0.5, 1.0));
        overrides.insert(CoreId(42), Position::new(9.0, 9.0));

        assert_eq!(
            resolve_position(&cores[1], &overrides),
            Position::new(0.5, 1.0)
        );
        assert_eq!(
            resolve_position(&cores[0], &overrides),
            Position::new(0.0, 0.0)
        );

        apply_overrides(&mut cores, &overrides);
        assert!(!cores[0].is_relocated());
        assert_eq!(cores[1].effective_position(), Position::new(0.5, 1.0));
    }
}
