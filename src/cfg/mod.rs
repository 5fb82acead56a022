#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::{
        DEFAULT_COVERAGE_RADIUS_M, DEFAULT_STUDENTS_PER_PROFESSIONAL, DEFAULT_TRAVEL_SPEED_KMH,
    },
    Error,
};

fn default_coverage_radius() -> f64 {
    DEFAULT_COVERAGE_RADIUS_M
}

fn default_students_per_professional() -> u32 {
    DEFAULT_STUDENTS_PER_PROFESSIONAL
}

fn default_travel_speed() -> f64 {
    DEFAULT_TRAVEL_SPEED_KMH
}

/// Coverage [Config]uration, shared by the [crate::prelude::CandidateIndex]
/// and the [crate::prelude::Classifier] so both stages always agree on the radius.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Maximal distance between a satellite and a core
    /// for normal coverage, in meters. Membership is non strict (`d <= radius`).
    #[cfg_attr(feature = "serde", serde(default = "default_coverage_radius"))]
    pub coverage_radius_m: f64,
    /// Number of students one professional can attend,
    /// used to derive staffing needs.
    #[cfg_attr(feature = "serde", serde(default = "default_students_per_professional"))]
    pub students_per_professional: u32,
    /// Assumed travel speed between a satellite and its core (km/h),
    /// used to estimate travel times.
    #[cfg_attr(feature = "serde", serde(default = "default_travel_speed"))]
    pub travel_speed_kmh: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            coverage_radius_m: default_coverage_radius(),
            students_per_professional: default_students_per_professional(),
            travel_speed_kmh: default_travel_speed(),
        }
    }
}

impl Config {
    /// Copies and returns [Config] with updated coverage radius (meters).
    pub fn with_coverage_radius(&self, radius_m: f64) -> Self {
        let mut s = self.clone();
        s.coverage_radius_m = radius_m;
        s
    }

    /// Copies and returns [Config] with updated staffing ratio.
    pub fn with_students_per_professional(&self, ratio: u32) -> Self {
        let mut s = self.clone();
        s.students_per_professional = ratio;
        s
    }

    /// Copies and returns [Config] with updated travel speed (km/h).
    pub fn with_travel_speed(&self, speed_kmh: f64) -> Self {
        let mut s = self.clone();
        s.travel_speed_kmh = speed_kmh;
        s
    }

    /// Verifies this [Config] is physically meaningful.
    pub fn validate(&self) -> Result<(), Error> {
        if !self.coverage_radius_m.is_finite() || self.coverage_radius_m <= 0.0 {
            return Err(Error::InvalidCoverageRadius(self.coverage_radius_m));
        }
        if self.students_per_professional == 0 {
            return Err(Error::NullStaffingRatio);
        }
        if !self.travel_speed_kmh.is_finite() || self.travel_speed_kmh <= 0.0 {
            return Err(Error::InvalidTravelSpeed(self.travel_speed_kmh));
        }
        Ok(())
    }

    /// Number of professionals required to attend this many students.
    pub(crate) fn professionals_needed(&self, students: u64) -> u64 {
        let ratio = u64::from(self.students_per_professional.max(1));
        students.div_ceil(ratio)
    }

    /// Travel time (minutes) over given distance (meters), at configured speed.
    pub(crate) fn travel_minutes(&self, distance_m: f64) -> f64 {
        distance_m / 1000.0 / self.travel_speed_kmh * 60.0
    }
}
