use std::collections::HashMap;

use crate::{
    prelude::{Classification, Config, Core, CoreId, CoreStatus, Satellite},
    site::core_lookup,
};

#[cfg(feature = "serde")]
use serde::Serialize;

/// Display [Metrics], all derived from a [Classification].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Metrics {
    /// Normal coverage [%]
    pub normal_coverage_percent: f64,
    /// Number of forcibly assigned satellites
    pub forced_count: usize,
    /// Total coverage [%]
    pub total_coverage_percent: f64,
    /// Number of active cores serving no satellite
    pub orphan_cores: usize,
    /// Number of active cores
    pub active_cores: usize,
    /// Number of cores in the dataset
    pub total_cores: usize,
    /// Students of all assigned satellites
    pub covered_students: u64,
    /// Professionals required for the covered students
    pub professionals_needed: u64,
    /// Average travel time between a normally covered satellite and its core (minutes),
    /// None when no satellite is normally covered.
    pub avg_travel_minutes: Option<f64>,
}

impl Metrics {
    pub(crate) fn new(
        satellites: &[Satellite],
        cores: &[Core],
        classification: &Classification,
        cfg: &Config,
    ) -> Self {
        let stats = classification.statistics();

        let covered_students = satellites
            .iter()
            .filter(|sat| classification.assignment(sat.id).is_some())
            .map(|sat| u64::from(sat.students))
            .sum::<u64>();

        let (sum_minutes, num_normal) = classification
            .normal()
            .fold((0.0, 0usize), |(sum, count), (_, assignment)| {
                (sum + cfg.travel_minutes(assignment.distance_m), count + 1)
            });

        let avg_travel_minutes = if num_normal > 0 {
            Some(sum_minutes / num_normal as f64)
        } else {
            None
        };

        Self {
            normal_coverage_percent: stats.normal_coverage_percent,
            forced_count: stats.covered_forced,
            total_coverage_percent: stats.total_coverage_percent,
            orphan_cores: classification.num_orphan_cores(),
            active_cores: classification.num_active_cores(),
            total_cores: cores.len(),
            covered_students,
            professionals_needed: cfg.professionals_needed(covered_students),
            avg_travel_minutes,
        }
    }
}

/// Load of one active core
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CoreLoad {
    /// [CoreId]
    pub core: CoreId,
    /// [CoreStatus]
    pub status: CoreStatus,
    /// Number of satellites assigned to this core (normal + forced)
    pub satellites: usize,
    /// Students of the core itself and its satellites
    pub students: u64,
    /// Professionals required for these students
    pub professionals_needed: u64,
}

impl CoreLoad {
    pub(crate) fn collect(
        satellites: &[Satellite],
        cores: &[Core],
        classification: &Classification,
        cfg: &Config,
    ) -> Vec<Self> {
        let lookup = core_lookup(cores);

        let mut totals = HashMap::<CoreId, (usize, u64)>::new();

        for satellite in satellites.iter() {
            if let Some(assignment) = classification.assignment(satellite.id) {
                let entry = totals.entry(assignment.core).or_default();
                entry.0 += 1;
                entry.1 += u64::from(satellite.students);
            }
        }

        classification
            .active_cores()
            .filter_map(|(core, status)| {
                let own = u64::from(lookup.get(&core)?.students);
                let (count, students) = totals.get(&core).copied().unwrap_or_default();
                let students = own + students;
                Some(Self {
                    core,
                    status,
                    satellites: count,
                    students,
                    professionals_needed: cfg.professionals_needed(students),
                })
            })
            .collect()
    }
}
