//! Coverage report: tabular export and display metrics.
//! Nothing in here computes coverage: it only presents a [Classification].
use itertools::Itertools;
use log::{debug, warn};

use std::io::Write;

use crate::{
    prelude::{
        AssignmentKind, Classification, Config, Core, CoreId, CoreStatus, Position, Satellite,
        SatelliteId,
    },
    site::core_lookup,
    Error,
};

#[cfg(feature = "serde")]
use serde::Serialize;

mod metrics;
pub use metrics::{CoreLoad, Metrics};

/// Tabular export header
pub const HEADER: [&str; 11] = [
    "TYPE",
    "ID",
    "NAME",
    "DISTRICT",
    "LAT",
    "LNG",
    "BUFFER_LAT",
    "BUFFER_LNG",
    "DISTANCE_M",
    "STUDENTS",
    "ASSIGNMENT",
];

/// Statistics block marker
pub const STATISTICS_MARKER: &str = "--- STATISTICS ---";

/// Assigned satellite, in the tabular export
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SatelliteRow {
    /// [SatelliteId]
    pub id: SatelliteId,
    /// Readable name
    pub name: String,
    /// Administrative district
    pub district: String,
    /// Satellite position
    pub position: Position,
    /// Current position of the serving core
    pub buffer: Position,
    /// Distance to the serving core (meters)
    pub distance_m: f64,
    /// Enrolled students
    pub students: u32,
    /// Normal or forced assignment
    pub kind: AssignmentKind,
}

/// Active core, in the tabular export
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CoreRow {
    /// [CoreId]
    pub id: CoreId,
    /// Readable name
    pub name: String,
    /// Administrative district
    pub district: String,
    /// Nominal position
    pub position: Position,
    /// Current position
    pub buffer: Position,
    /// Enrolled students
    pub students: u32,
    /// Served or orphan
    pub status: CoreStatus,
}

/// [CoverageReport] renders a [Classification] for export and display.
#[derive(Debug, Clone)]
pub struct CoverageReport<'a> {
    satellites: &'a [Satellite],
    cores: &'a [Core],
    classification: &'a Classification,
    cfg: Config,
}

impl<'a> CoverageReport<'a> {
    /// Builds a new [CoverageReport] for this [Classification] of the dataset.
    pub fn new(
        satellites: &'a [Satellite],
        cores: &'a [Core],
        classification: &'a Classification,
        cfg: &Config,
    ) -> Self {
        Self {
            satellites,
            cores,
            classification,
            cfg: cfg.clone(),
        }
    }

    /// One [SatelliteRow] per assigned satellite, in dataset order.
    /// Orphaned satellites are omitted.
    pub fn satellite_rows(&self) -> Vec<SatelliteRow> {
        let lookup = core_lookup(self.cores);

        self.satellites
            .iter()
            .filter_map(|satellite| {
                let assignment = self.classification.assignment(satellite.id)?;

                let core = match lookup.get(&assignment.core) {
                    Some(core) => core,
                    None => {
                        warn!(
                            "satellite {}: serving core {} does not exist",
                            satellite.id, assignment.core
                        );
                        return None;
                    },
                };

                Some(SatelliteRow {
                    id: satellite.id,
                    name: satellite.name.clone(),
                    district: satellite.district.clone(),
                    position: satellite.position,
                    buffer: core.effective_position(),
                    distance_m: assignment.distance_m,
                    students: satellite.students,
                    kind: assignment.kind,
                })
            })
            .collect()
    }

    /// One [CoreRow] per (existing) active core, by increasing [CoreId].
    pub fn core_rows(&self) -> Vec<CoreRow> {
        let lookup = core_lookup(self.cores);

        self.classification
            .active_cores()
            .filter_map(|(id, status)| {
                let core = lookup.get(&id)?;
                Some(CoreRow {
                    id,
                    name: core.name.clone(),
                    district: core.district.clone(),
                    position: core.position,
                    buffer: core.effective_position(),
                    students: core.students,
                    status,
                })
            })
            .collect()
    }

    /// Display [Metrics].
    pub fn metrics(&self) -> Metrics {
        Metrics::new(self.satellites, self.cores, self.classification, &self.cfg)
    }

    /// [CoreLoad] of every active core, by increasing [CoreId].
    pub fn core_loads(&self) -> Vec<CoreLoad> {
        CoreLoad::collect(self.satellites, self.cores, self.classification, &self.cfg)
    }

    /// The `n` active cores serving the most satellites
    /// (ties resolved by increasing [CoreId]).
    pub fn top_cores(&self, n: usize) -> Vec<CoreLoad> {
        self.core_loads()
            .into_iter()
            .sorted_by(|a, b| b.satellites.cmp(&a.satellites).then(a.core.cmp(&b.core)))
            .take(n)
            .collect()
    }

    /// Writes the tabular export: header, satellite rows, core rows
    /// and trailing statistics block.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), Error> {
        let mut w = csv::WriterBuilder::new()
            .flexible(true)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(writer);

        w.write_record(HEADER)?;

        let satellite_rows = self.satellite_rows();
        for row in satellite_rows.iter() {
            w.write_record([
                "SATELLITE".to_string(),
                row.id.to_string(),
                row.name.clone(),
                row.district.clone(),
                row.position.lat.to_string(),
                row.position.lng.to_string(),
                row.buffer.lat.to_string(),
                row.buffer.lng.to_string(),
                format!("{:.2}", row.distance_m),
                row.students.to_string(),
                row.kind.to_string(),
            ])?;
        }

        let core_rows = self.core_rows();
        for row in core_rows.iter() {
            w.write_record([
                "CORE".to_string(),
                row.id.to_string(),
                row.name.clone(),
                row.district.clone(),
                row.position.lat.to_string(),
                row.position.lng.to_string(),
                row.buffer.lat.to_string(),
                row.buffer.lng.to_string(),
                "0".to_string(),
                row.students.to_string(),
                row.status.to_string(),
            ])?;
        }

        let stats = self.classification.statistics();

        w.write_record([STATISTICS_MARKER])?;
        w.write_record(["Total satellites".to_string(), stats.total_satellites.to_string()])?;
        w.write_record([
            "Normal coverage".to_string(),
            stats.covered_normal.to_string(),
            format!("{:.2}%", stats.normal_coverage_percent),
        ])?;
        w.write_record(["Forced assignments".to_string(), stats.covered_forced.to_string()])?;
        w.write_record([
            "Total coverage".to_string(),
            stats.covered_total().to_string(),
            format!("{:.2}%", stats.total_coverage_percent),
        ])?;
        w.write_record(["Unassigned satellites".to_string(), stats.orphan_count.to_string()])?;
        w.write_record([
            "Orphan cores".to_string(),
            self.classification.num_orphan_cores().to_string(),
        ])?;
        w.write_record([
            "Active cores".to_string(),
            self.classification.num_active_cores().to_string(),
        ])?;

        w.flush()?;

        debug!(
            "exported {} satellite rows and {} core rows",
            satellite_rows.len(),
            core_rows.len()
        );

        Ok(())
    }

    /// Renders the tabular export as a [String].
    pub fn to_csv_string(&self) -> Result<String, Error> {
        let mut buf = Vec::<u8>::new();
        self.write_csv(&mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
