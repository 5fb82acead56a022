//! Candidate index: [Core]s within coverage radius of each [Satellite]
use log::debug;

use std::collections::BTreeMap;

use crate::prelude::{Config, Core, CoreId, Position, Satellite, SatelliteId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// [CandidateEdge] links a [Satellite] to a [Core] lying within coverage radius.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CandidateEdge {
    /// [SatelliteId]
    pub satellite: SatelliteId,
    /// [CoreId]
    pub core: CoreId,
    /// Distance between both sites, at index build time (meters)
    pub distance_m: f64,
}

/// [CandidateIndex] stores the [CandidateEdge]s of every [Satellite],
/// sorted by increasing distance (then increasing [CoreId]).
/// It is a snapshot of the geometry: it needs to be rebuilt
/// when the dataset is reloaded or a [Core] moves.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateIndex {
    /// Radius this index was built with (meters)
    radius_m: f64,
    /// Edges, per [SatelliteId]
    edges: BTreeMap<SatelliteId, Vec<CandidateEdge>>,
}

impl CandidateIndex {
    /// Builds [CandidateIndex] against the nominal [Core] positions.
    /// This is O(N·M) for N satellites and M cores.
    pub fn build(satellites: &[Satellite], cores: &[Core], cfg: &Config) -> Self {
        Self::build_with(satellites, cores, cfg, |core| core.position)
    }

    /// Builds [CandidateIndex] against the current (possibly relocated) [Core] positions.
    /// Use this when relocations should also modify normal coverage.
    pub fn build_current(satellites: &[Satellite], cores: &[Core], cfg: &Config) -> Self {
        Self::build_with(satellites, cores, cfg, Core::effective_position)
    }

    fn build_with<F: Fn(&Core) -> Position>(
        satellites: &[Satellite],
        cores: &[Core],
        cfg: &Config,
        position: F,
    ) -> Self {
        let radius_m = cfg.coverage_radius_m;

        let core_positions = cores
            .iter()
            .map(|core| (core.id, position(core)))
            .collect::<Vec<_>>();

        let mut edges = BTreeMap::new();

        for satellite in satellites.iter() {
            let mut candidates = core_positions
                .iter()
                .filter_map(|(core, pos)| {
                    let distance_m = satellite.position.distance_m(pos);
                    if distance_m <= radius_m {
                        Some(CandidateEdge {
                            satellite: satellite.id,
                            core: *core,
                            distance_m,
                        })
                    } else {
                        None
                    }
                })
                .collect::<Vec<_>>();

            candidates.sort_by(|a, b| {
                a.distance_m
                    .total_cmp(&b.distance_m)
                    .then(a.core.cmp(&b.core))
            });

            edges.insert(satellite.id, candidates);
        }

        let s = Self { radius_m, edges };

        debug!(
            "candidate index: {} satellites, {} cores, {} edges within {} m",
            satellites.len(),
            cores.len(),
            s.num_edges(),
            radius_m,
        );

        s
    }

    /// Radius this [CandidateIndex] was built with (meters).
    pub fn radius_m(&self) -> f64 {
        self.radius_m
    }

    /// [CandidateEdge]s of given [Satellite], sorted by increasing distance.
    /// Empty for unknown satellites or satellites out of reach.
    pub fn candidates(&self, satellite: SatelliteId) -> &[CandidateEdge] {
        self.edges
            .get(&satellite)
            .map(|edges| edges.as_slice())
            .unwrap_or_default()
    }

    /// Number of indexed [Satellite]s.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// True if no [Satellite] was indexed.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Total number of [CandidateEdge]s.
    pub fn num_edges(&self) -> usize {
        self.edges.values().map(|edges| edges.len()).sum()
    }

    /// Iterates all [CandidateEdge]s, by increasing [SatelliteId].
    pub fn edges(&self) -> impl Iterator<Item = &CandidateEdge> + '_ {
        self.edges.values().flatten()
    }

    /// Iterates the [CandidateEdge]s reaching given [Core].
    pub fn reaching(&self, core: CoreId) -> impl Iterator<Item = &CandidateEdge> + '_ {
        self.edges().filter(move |edge| edge.core == core)
    }
}
