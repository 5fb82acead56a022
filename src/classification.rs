//! Coverage classification results
use std::collections::{BTreeMap, BTreeSet};

use crate::prelude::{CoreId, SatelliteId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a [Satellite](crate::prelude::Satellite) got assigned
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AssignmentKind {
    /// Within coverage radius of an active core
    Normal,
    /// Out of reach of any active core: assigned to
    /// the nearest one, whatever the distance.
    Forced,
}

impl std::fmt::Display for AssignmentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Forced => write!(f, "FORCED"),
        }
    }
}

/// [Assignment] of a satellite to an active core
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Assignment {
    /// Serving [CoreId]
    pub core: CoreId,
    /// Satellite to core distance (meters)
    pub distance_m: f64,
    /// [AssignmentKind]
    pub kind: AssignmentKind,
}

impl Assignment {
    pub(crate) fn normal(core: CoreId, distance_m: f64) -> Self {
        Self {
            core,
            distance_m,
            kind: AssignmentKind::Normal,
        }
    }

    pub(crate) fn forced(core: CoreId, distance_m: f64) -> Self {
        Self {
            core,
            distance_m,
            kind: AssignmentKind::Forced,
        }
    }

    /// True if this is a [AssignmentKind::Normal] assignment
    pub fn is_normal(&self) -> bool {
        self.kind == AssignmentKind::Normal
    }

    /// True if this is a [AssignmentKind::Forced] assignment
    pub fn is_forced(&self) -> bool {
        self.kind == AssignmentKind::Forced
    }
}

/// Status of an active core
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CoreStatus {
    /// Serves at least one satellite (normally or forcibly)
    Active,
    /// Serves no satellite at all
    Orphan,
}

impl std::fmt::Display for CoreStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "ACTIVE"),
            Self::Orphan => write!(f, "ORPHAN"),
        }
    }
}

/// [CoverageStatistics] snapshot, produced along each [Classification].
/// `covered_normal + covered_forced + orphan_count == total_satellites`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CoverageStatistics {
    /// Total number of satellites
    pub total_satellites: usize,
    /// Number of satellites normally covered
    pub covered_normal: usize,
    /// Number of satellites forcibly assigned
    pub covered_forced: usize,
    /// Number of satellites that could not be assigned
    pub orphan_count: usize,
    /// Normal coverage [%]
    pub normal_coverage_percent: f64,
    /// Total (normal + forced) coverage [%]
    pub total_coverage_percent: f64,
}

impl CoverageStatistics {
    pub(crate) fn new(total: usize, normal: usize, forced: usize, orphans: usize) -> Self {
        Self {
            total_satellites: total,
            covered_normal: normal,
            covered_forced: forced,
            orphan_count: orphans,
            normal_coverage_percent: percent(normal, total),
            total_coverage_percent: percent(normal + forced, total),
        }
    }

    /// Number of satellites assigned to a core, normally or not
    pub fn covered_total(&self) -> usize {
        self.covered_normal + self.covered_forced
    }
}

impl std::fmt::Display for CoverageStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "total={} normal={} ({:.2}%) forced={} covered={} ({:.2}%) unassigned={}",
            self.total_satellites,
            self.covered_normal,
            self.normal_coverage_percent,
            self.covered_forced,
            self.covered_total(),
            self.total_coverage_percent,
            self.orphan_count,
        )
    }
}

fn percent(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

/// [Classification] is the complete, immutable outcome of one coverage run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Classification {
    /// [Assignment]s by satellite
    pub(crate) assignments: BTreeMap<SatelliteId, Assignment>,
    /// Satellites with no active core at all
    pub(crate) orphan_satellites: BTreeSet<SatelliteId>,
    /// Status of each (existing) active core
    pub(crate) cores: BTreeMap<CoreId, CoreStatus>,
    /// [CoverageStatistics]
    pub(crate) statistics: CoverageStatistics,
}

impl Classification {
    /// [Assignment] of given satellite, None if orphaned (or unknown).
    pub fn assignment(&self, satellite: SatelliteId) -> Option<&Assignment> {
        self.assignments.get(&satellite)
    }

    /// Iterates all [Assignment]s, by increasing [SatelliteId].
    pub fn assignments(&self) -> impl Iterator<Item = (SatelliteId, &Assignment)> + '_ {
        self.assignments.iter().map(|(id, a)| (*id, a))
    }

    /// Iterates [AssignmentKind::Normal] [Assignment]s.
    pub fn normal(&self) -> impl Iterator<Item = (SatelliteId, &Assignment)> + '_ {
        self.assignments().filter(|(_, a)| a.is_normal())
    }

    /// Iterates [AssignmentKind::Forced] [Assignment]s.
    pub fn forced(&self) -> impl Iterator<Item = (SatelliteId, &Assignment)> + '_ {
        self.assignments().filter(|(_, a)| a.is_forced())
    }

    /// Satellites that could not be assigned to any core.
    pub fn orphan_satellites(&self) -> &BTreeSet<SatelliteId> {
        &self.orphan_satellites
    }

    /// [CoreStatus] of given core, None if this core was not active.
    pub fn core_status(&self, core: CoreId) -> Option<CoreStatus> {
        self.cores.get(&core).copied()
    }

    /// Iterates active cores and their [CoreStatus], by increasing [CoreId].
    pub fn active_cores(&self) -> impl Iterator<Item = (CoreId, CoreStatus)> + '_ {
        self.cores.iter().map(|(id, status)| (*id, *status))
    }

    /// Iterates orphan cores, by increasing [CoreId].
    pub fn orphan_cores(&self) -> impl Iterator<Item = CoreId> + '_ {
        self.active_cores()
            .filter_map(|(id, status)| (status == CoreStatus::Orphan).then_some(id))
    }

    /// Number of active cores serving no satellite.
    pub fn num_orphan_cores(&self) -> usize {
        self.orphan_cores().count()
    }

    /// Number of (existing) active cores.
    pub fn num_active_cores(&self) -> usize {
        self.cores.len()
    }

    /// [CoverageStatistics] of this run.
    pub fn statistics(&self) -> &CoverageStatistics {
        &self.statistics
    }
}

#[cfg(test)]
mod test {
    use super::CoverageStatistics;

    #[test]
    fn empty_dataset_percentages() {
        let stats = CoverageStatistics::new(0, 0, 0, 0);
        assert_eq!(stats.normal_coverage_percent, 0.0);
        assert_eq!(stats.total_coverage_percent, 0.0);
    }

    #[test]
    fn percentages() {
        let stats = CoverageStatistics::new(8, 4, 2, 2);
        assert_eq!(stats.normal_coverage_percent, 50.0);
        assert_eq!(stats.total_coverage_percent, 75.0);
        assert_eq!(stats.covered_total(), 6);
        assert_eq!(
            stats.to_string(),
            "total=8 normal=4 (50.00%) forced=2 covered=6 (75.00%) unassigned=2"
        );
    }
}
