//! Geodetic positions and great circle distance
use crate::constants::EARTH_MEAN_RADIUS_M;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Geodetic [Position] on the Earth surface.
#[derive(Default, Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    /// Latitude [°]
    pub lat: f64,
    /// Longitude [°]
    pub lng: f64,
}

impl Position {
    /// Builds new [Position] from latitude and longitude, both in degrees.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Great circle distance to other [Position], in meters.
    /// See [haversine_m].
    pub fn distance_m(&self, rhs: &Self) -> f64 {
        haversine_m(self, rhs)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "({:.6}°, {:.6}°)", self.lat, self.lng)
    }
}

/// Haversine great circle distance between two [Position]s, in meters,
/// on a spherical Earth of radius [EARTH_MEAN_RADIUS_M].
/// Symmetric, null for identical points and finite for any pair of
/// valid coordinates (antipodal points included).
pub fn haversine_m(a: &Position, b: &Position) -> f64 {
    let phi_1 = a.lat.to_radians();
    let phi_2 = b.lat.to_radians();
    let d_phi = (b.lat - a.lat).to_radians();
    let d_lambda = (b.lng - a.lng).to_radians();

    let h = (d_phi / 2.0).sin().powi(2)
        + phi_1.cos() * phi_2.cos() * (d_lambda / 2.0).sin().powi(2);

    // rounding may push h out of [0, 1] for (nearly) antipodal points
    let h = h.clamp(0.0, 1.0);

    EARTH_MEAN_RADIUS_M * 2.0 * h.sqrt().atan2((1.0 - h).sqrt())
}

#[cfg(test)]
mod test {
    use super::{haversine_m, Position};
    use crate::constants::EARTH_MEAN_RADIUS_M;

    #[test]
    fn identical_points() {
        let p = Position::new(-1.831239, -78.183406);
        assert_eq!(haversine_m(&p, &p), 0.0);
    }

    #[test]
    fn one_degree_of_latitude() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(1.0, 0.0);
        let d = a.distance_m(&b);
        assert!((d - 111_194.93).abs() < 1.0, "got {}", d);
    }

    #[test]
    fn symmetry() {
        let a = Position::new(-0.180653, -78.467834);
        let b = Position::new(-2.170998, -79.922359);
        let (ab, ba) = (haversine_m(&a, &b), haversine_m(&b, &a));
        assert!((ab - ba).abs() <= ab * 1.0E-6);
    }

    #[test]
    fn antipodal_points() {
        let half_circumference = std::f64::consts::PI * EARTH_MEAN_RADIUS_M;

        let a = Position::new(-20.7, -178.3);
        let b = Position::new(20.7, 1.7);
        let d = haversine_m(&a, &b);
        assert!(d.is_finite(), "got {}", d);
        assert!((d - half_circumference).abs() < 1.0, "got {}", d);

        for lat in (-900..=900).step_by(3) {
            for lng in (-1800..1800).step_by(7) {
                let a = Position::new(lat as f64 / 10.0, lng as f64 / 10.0);
                let b = Position::new(-a.lat, a.lng + 180.0);
                let d = haversine_m(&a, &b);
                assert!(d.is_finite(), "{} {}: got {}", a, b, d);
                assert!(d <= half_circumference + 1.0, "{} {}: got {}", a, b, d);
            }
        }
    }
}
