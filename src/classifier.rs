//! Coverage classifier
use log::{debug, info, warn};

use std::collections::{BTreeMap, BTreeSet};

use crate::{
    classification::{Assignment, Classification, CoreStatus, CoverageStatistics},
    nearest::nearest_in,
    prelude::{ActiveSet, CandidateIndex, Config, Core, Satellite},
    site::core_lookup,
};

/// [Classifier] partitions satellites into normally covered, forcibly assigned
/// or orphaned, and active cores into served or orphan.
/// It holds no state between runs: each [Classifier::classify] call returns a
/// brand new [Classification].
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    /// [Config] shared with the [CandidateIndex]
    cfg: Config,
}

impl Classifier {
    /// Builds new [Classifier] from [Config]
    pub fn new(cfg: &Config) -> Self {
        Self { cfg: cfg.clone() }
    }

    /// [Config] used by this [Classifier]
    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Classifies the dataset for given [ActiveSet].
    /// - satellites: full satellite list
    /// - cores: full core list, with current positions
    /// - index: [CandidateIndex] built from this dataset
    /// - active: operator selection
    pub fn classify(
        &self,
        satellites: &[Satellite],
        cores: &[Core],
        index: &CandidateIndex,
        active: &ActiveSet,
    ) -> Classification {
        let radius_m = self.cfg.coverage_radius_m;

        if index.radius_m() != radius_m {
            warn!(
                "candidate index built with {} m radius, classifying with {} m",
                index.radius_m(),
                radius_m
            );
        }

        let lookup = core_lookup(cores);

        let mut assignments = BTreeMap::new();
        let mut orphan_satellites = BTreeSet::new();
        let mut served = BTreeSet::new();
        let mut seen = BTreeSet::new();

        let (mut normal, mut forced, mut orphans) = (0, 0, 0);

        for satellite in satellites.iter() {
            if !seen.insert(satellite.id) {
                warn!(
                    "satellite {}: duplicate identifier, previous assignment overwritten",
                    satellite.id
                );
                assignments.remove(&satellite.id);
                orphan_satellites.remove(&satellite.id);
            }

            let mut nearest = Option::<Assignment>::None;

            for edge in index.candidates(satellite.id) {
                if !active.contains(&edge.core) || edge.distance_m > radius_m {
                    continue;
                }

                if !lookup.contains_key(&edge.core) {
                    warn!(
                        "satellite {}: candidate core {} does not exist",
                        satellite.id, edge.core
                    );
                    continue;
                }

                served.insert(edge.core);

                // edges are sorted: first match is the nearest
                if nearest.is_none() {
                    nearest = Some(Assignment::normal(edge.core, edge.distance_m));
                }
            }

            if let Some(assignment) = nearest {
                assignments.insert(satellite.id, assignment);
                normal += 1;
                continue;
            }

            match nearest_in(&satellite.position, &lookup, active) {
                Some(nearest) => {
                    debug!(
                        "satellite {} forcibly assigned to core {} ({:.2} km)",
                        satellite.id,
                        nearest.core,
                        nearest.distance_m / 1000.0
                    );
                    served.insert(nearest.core);
                    assignments.insert(
                        satellite.id,
                        Assignment::forced(nearest.core, nearest.distance_m),
                    );
                    forced += 1;
                },
                None => {
                    warn!("satellite {} could not be assigned", satellite.id);
                    orphan_satellites.insert(satellite.id);
                    orphans += 1;
                },
            }
        }

        // statistics count dataset entries, even if identifiers collide
        let statistics = CoverageStatistics::new(satellites.len(), normal, forced, orphans);

        let mut core_statuses = BTreeMap::new();

        for id in active.iter() {
            if !lookup.contains_key(id) {
                warn!("active core {} does not exist: not evaluated", id);
                continue;
            }

            let status = if served.contains(id) {
                CoreStatus::Active
            } else {
                debug!("core {} serves no satellite", id);
                CoreStatus::Orphan
            };

            core_statuses.insert(*id, status);
        }

        let classification = Classification {
            assignments,
            orphan_satellites,
            cores: core_statuses,
            statistics,
        };

        info!(
            "coverage: {} - active cores={} orphan cores={}",
            statistics,
            classification.num_active_cores(),
            classification.num_orphan_cores()
        );

        classification
    }
}
