use rand::{rngs::SmallRng, Rng};

use crate::prelude::{ActiveSet, CandidateIndex, Config, Core, CoreId, Position, Satellite};

/// Test [Dataset]: sites and the [Config] they are meant to be classified with
#[derive(Debug, Clone)]
pub struct Dataset {
    pub cfg: Config,
    pub cores: Vec<Core>,
    pub satellites: Vec<Satellite>,
}

impl Dataset {
    /// Three cores at (0,0), (0,1) and (10,10), two satellites
    /// at (0,0.001) and (5,5), 50 km coverage radius.
    pub fn scenario() -> Self {
        Self {
            cfg: Config::default().with_coverage_radius(50_000.0),
            cores: vec![
                Core::new(0, "core0", "d0", Position::new(0.0, 0.0), 100),
                Core::new(1, "core1", "d0", Position::new(0.0, 1.0), 50),
                Core::new(2, "core2", "d1", Position::new(10.0, 10.0), 10),
            ],
            satellites: vec![
                Satellite::new(0, "sat0", "d0", Position::new(0.0, 0.001), 30),
                Satellite::new(1, "sat1", "d1", Position::new(5.0, 5.0), 20),
            ],
        }
    }

    /// Small urban area with the default 7.5 km radius:
    /// - satellite 0 is within reach of core 0 only (1.4 km)
    /// - satellite 1 is within reach of core 0 (2.6 km) and core 1 (4.0 km)
    /// - satellite 2 is within reach of core 1 only (2.5 km)
    /// - satellite 3 is out of reach of every core, core 0 being the closest (60 km)
    /// - core 2 covers nothing
    pub fn urban() -> Self {
        Self {
            cfg: Config::default(),
            cores: vec![
                Core::new(0, "Centro", "Quito", Position::new(-0.2200, -78.5120), 400),
                Core::new(1, "Norte", "Quito", Position::new(-0.1700, -78.4800), 250),
                Core::new(2, "Valle", "Quito", Position::new(-0.3500, -78.2000), 90),
            ],
            satellites: vec![
                Satellite::new(0, "Escuela 1", "Quito", Position::new(-0.2300, -78.5200), 120),
                Satellite::new(1, "Escuela 2", "Quito", Position::new(-0.2000, -78.5000), 80),
                Satellite::new(2, "Escuela 3", "Quito", Position::new(-0.1500, -78.4700), 60),
                Satellite::new(3, "Escuela 4", "Quito", Position::new(-0.6000, -78.9000), 45),
            ],
        }
    }

    /// Random [Dataset] around the equator
    pub fn random(rng: &mut SmallRng, num_cores: usize, num_satellites: usize) -> Self {
        let cores = (0..num_cores)
            .map(|i| {
                let position = Position::new(rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0));
                Core::new(i, &format!("core{}", i), "d", position, rng.random_range(0..500))
            })
            .collect();

        let satellites = (0..num_satellites)
            .map(|i| {
                let position = Position::new(rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0));
                Satellite::new(i, &format!("sat{}", i), "d", position, rng.random_range(0..500))
            })
            .collect();

        Self {
            cfg: Config::default().with_coverage_radius(20_000.0),
            cores,
            satellites,
        }
    }

    /// [CandidateIndex] of this [Dataset]
    pub fn index(&self) -> CandidateIndex {
        CandidateIndex::build(&self.satellites, &self.cores, &self.cfg)
    }

    /// Every core of this [Dataset], as an [ActiveSet]
    pub fn all_active(&self) -> ActiveSet {
        self.cores.iter().map(|core| core.id).collect()
    }
}

/// Builds an [ActiveSet] from raw identifiers
pub fn active(ids: &[usize]) -> ActiveSet {
    ids.iter().map(|id| CoreId(*id)).collect()
}
