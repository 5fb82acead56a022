/// Mean Earth radius used by the haversine formula (meters)
pub const EARTH_MEAN_RADIUS_M: f64 = 6_371_000.0;

/// Default coverage radius (meters)
pub const DEFAULT_COVERAGE_RADIUS_M: f64 = 7_500.0;

/// Default number of students one professional can attend
pub const DEFAULT_STUDENTS_PER_PROFESSIONAL: u32 = 450;

/// Default travel speed between sites (km/h)
pub const DEFAULT_TRAVEL_SPEED_KMH: f64 = 30.0;
