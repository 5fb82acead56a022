//! Catchment of a buffer placed at an arbitrary position
use crate::prelude::{Config, Position, Satellite, SatelliteId};

/// Satellite lying within a [Catchment]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CatchmentEntry {
    /// [SatelliteId]
    pub satellite: SatelliteId,
    /// Distance to the buffer center (meters)
    pub distance_m: f64,
    /// Number of students
    pub students: u32,
}

/// [Catchment] lists the satellites a buffer would cover at a given [Position].
/// It is the live preview of a core being dragged: it does not take
/// the active selection into account.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catchment {
    /// Buffer center
    pub center: Position,
    /// Covered satellites, by increasing distance
    pub entries: Vec<CatchmentEntry>,
    /// Total number of students within the buffer
    pub total_students: u64,
    /// Professionals required to attend these students
    pub professionals_needed: u64,
}

impl Catchment {
    /// Evaluates the [Catchment] of a buffer centered on given [Position],
    /// with the configured coverage radius.
    pub fn evaluate(center: Position, satellites: &[Satellite], cfg: &Config) -> Self {
        let mut entries = satellites
            .iter()
            .filter_map(|satellite| {
                let distance_m = center.distance_m(&satellite.position);
                if distance_m <= cfg.coverage_radius_m {
                    Some(CatchmentEntry {
                        satellite: satellite.id,
                        distance_m,
                        students: satellite.students,
                    })
                } else {
                    None
                }
            })
            .collect::<Vec<_>>();

        entries.sort_by(|a, b| a.distance_m.total_cmp(&b.distance_m));

        let total_students = entries.iter().map(|e| u64::from(e.students)).sum();

        Self {
            center,
            entries,
            total_students,
            professionals_needed: cfg.professionals_needed(total_students),
        }
    }

    /// Number of covered satellites
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if this buffer covers no satellite
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::Catchment;
    use crate::prelude::{Config, Position, Satellite, SatelliteId};

    #[test]
    fn buffer_preview() {
        let satellites = vec![
            Satellite::new(0, "s0", "d", Position::new(0.0, 0.05), 300),
            Satellite::new(1, "s1", "d", Position::new(0.0, 0.01), 200),
            Satellite::new(2, "s2", "d", Position::new(0.0, 0.5), 1000),
        ];

        let cfg = Config::default();
        let catchment = Catchment::evaluate(Position::new(0.0, 0.0), &satellites, &cfg);

        assert_eq!(catchment.len(), 2);
        assert_eq!(catchment.entries[0].satellite, SatelliteId(1));
        assert_eq!(catchment.entries[1].satellite, SatelliteId(0));
        assert_eq!(catchment.total_students, 500);
        assert_eq!(catchment.professionals_needed, 2);

        let far = Catchment::evaluate(Position::new(45.0, 45.0), &satellites, &cfg);
        assert!(far.is_empty());
        assert_eq!(far.professionals_needed, 0);
    }
}
