use rstest::*;

use crate::prelude::{
    Config, Error, DEFAULT_COVERAGE_RADIUS_M, DEFAULT_STUDENTS_PER_PROFESSIONAL,
    DEFAULT_TRAVEL_SPEED_KMH,
};

#[test]
fn default_config() {
    let cfg = Config::default();
    assert_eq!(cfg.coverage_radius_m, DEFAULT_COVERAGE_RADIUS_M);
    assert_eq!(cfg.students_per_professional, DEFAULT_STUDENTS_PER_PROFESSIONAL);
    assert_eq!(cfg.travel_speed_kmh, DEFAULT_TRAVEL_SPEED_KMH);
    assert!(cfg.validate().is_ok());
}

#[rstest]
#[case(0.0)]
#[case(-10.0)]
#[case(f64::NAN)]
#[case(f64::INFINITY)]
fn invalid_radius(#[case] radius: f64) {
    let cfg = Config::default().with_coverage_radius(radius);
    assert!(matches!(cfg.validate(), Err(Error::InvalidCoverageRadius(_))));
}

#[test]
fn invalid_staffing() {
    let cfg = Config::default().with_students_per_professional(0);
    assert!(matches!(cfg.validate(), Err(Error::NullStaffingRatio)));

    let cfg = Config::default().with_travel_speed(0.0);
    assert!(matches!(cfg.validate(), Err(Error::InvalidTravelSpeed(_))));
}

#[rstest]
#[case(0, 0)]
#[case(1, 1)]
#[case(450, 1)]
#[case(451, 2)]
#[case(1000, 3)]
fn professionals_needed(#[case] students: u64, #[case] expected: u64) {
    let cfg = Config::default();
    assert_eq!(cfg.professionals_needed(students), expected);
}

#[test]
fn travel_minutes() {
    let cfg = Config::default();
    assert!((cfg.travel_minutes(15_000.0) - 30.0).abs() < 1.0E-9);
}

#[cfg(feature = "serde")]
#[test]
fn config_deserialization() {
    let cfg: Config = serde_json::from_str(r#"{ "coverage_radius_m": 5000.0 }"#).unwrap();
    assert_eq!(cfg.coverage_radius_m, 5000.0);
    assert_eq!(cfg.students_per_professional, DEFAULT_STUDENTS_PER_PROFESSIONAL);
    assert_eq!(cfg.travel_speed_kmh, DEFAULT_TRAVEL_SPEED_KMH);

    let cfg: Config = serde_json::from_str("{}").unwrap();
    assert_eq!(cfg, Config::default());
}
