#![doc = include_str!("../README.md")]
#![cfg_attr(docrs, feature(doc_cfg))]

// private modules
mod candidate;
mod catchment;
mod cfg;
mod classification;
mod classifier;
mod constants;
mod error;
mod nearest;
mod position;
mod report;
mod site;

#[cfg(test)]
mod tests;

// prelude
pub mod prelude {
    pub use crate::candidate::{CandidateEdge, CandidateIndex};
    pub use crate::catchment::{Catchment, CatchmentEntry};
    pub use crate::cfg::Config;
    pub use crate::classification::{
        Assignment, AssignmentKind, Classification, CoreStatus, CoverageStatistics,
    };
    pub use crate::classifier::Classifier;
    pub use crate::constants::{
        DEFAULT_COVERAGE_RADIUS_M, DEFAULT_STUDENTS_PER_PROFESSIONAL, DEFAULT_TRAVEL_SPEED_KMH,
        EARTH_MEAN_RADIUS_M,
    };
    pub use crate::error::Error;
    pub use crate::nearest::{nearest_active_core, NearestCore};
    pub use crate::position::{haversine_m, Position};
    pub use crate::report::{CoreLoad, CoreRow, CoverageReport, Metrics, SatelliteRow};
    pub use crate::site::{
        apply_overrides, resolve_position, ActiveSet, Core, CoreId, PositionOverrides, Satellite,
        SatelliteId,
    };
}

// pub export
pub use error::Error;
