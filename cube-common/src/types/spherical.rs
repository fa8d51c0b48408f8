use crate::types::Point3D;

/// The same physical point as [`Point3D`], expressed as radius, polar angle
/// (colatitude, 0 at the +Z pole) and azimuth (longitude in the XY plane,
/// measured from +X).
///
/// Conversion convention: the origin has no direction, so a zero-radius point
/// maps to polar = 0 and azimuth = 0 rather than NaN.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
pub struct SphericalPoint {
    pub radius: f64,
    pub polar: f64,
    pub azimuth: f64,
}

impl SphericalPoint {
    pub fn new(radius: f64, polar: f64, azimuth: f64) -> Self {
        Self {
            radius,
            polar,
            azimuth,
        }
    }

    pub fn from_cartesian(point: &Point3D) -> Self {
        let [x, y, z] = point.inner();
        let radius = point.norm();
        if radius == 0.0 {
            return Self::default();
        }
        Self {
            radius,
            polar: (x * x + y * y).sqrt().atan2(z),
            azimuth: y.atan2(x),
        }
    }

    pub fn to_cartesian(&self) -> Point3D {
        Point3D::new([
            self.radius * self.polar.sin() * self.azimuth.cos(),
            self.radius * self.polar.sin() * self.azimuth.sin(),
            self.radius * self.polar.cos(),
        ])
    }

    /// Azimuth wrapped back into (-pi, pi]. Rotations accumulate the raw
    /// angle and never wrap; callers that need a canonical azimuth apply
    /// this afterwards.
    pub fn normalized_azimuth(&self) -> f64 {
        self.azimuth.sin().atan2(self.azimuth.cos())
    }
}

impl From<Point3D> for SphericalPoint {
    fn from(value: Point3D) -> Self {
        Self::from_cartesian(&value)
    }
}

impl From<SphericalPoint> for Point3D {
    fn from(value: SphericalPoint) -> Self {
        value.to_cartesian()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    const TOLERANCE: f64 = 1e-6;

    fn assert_points_close(a: &Point3D, b: &Point3D) {
        for (lhs, rhs) in a.inner().iter().zip(b.inner().iter()) {
            assert!((lhs - rhs).abs() < TOLERANCE, "{:?} != {:?}", a, b);
        }
    }

    #[test]
    fn test_from_cartesian() {
        let point = Point3D::new([1.0, 0.0, 0.0]);
        let spherical = SphericalPoint::from_cartesian(&point);
        assert!((spherical.radius - 1.0).abs() < TOLERANCE);
        assert!((spherical.polar - FRAC_PI_2).abs() < TOLERANCE);
        assert!(spherical.azimuth.abs() < TOLERANCE);
    }

    #[test]
    fn test_polar_at_pole() {
        let spherical = SphericalPoint::from_cartesian(&Point3D::new([0.0, 0.0, 2.0]));
        assert!(spherical.polar.abs() < TOLERANCE);
        let spherical = SphericalPoint::from_cartesian(&Point3D::new([0.0, 0.0, -2.0]));
        assert!((spherical.polar - PI).abs() < TOLERANCE);
    }

    #[test]
    fn test_round_trip() {
        let points = [
            Point3D::new([1.0, 2.0, 3.0]),
            Point3D::new([-0.5, 0.5, 0.5]),
            Point3D::new([0.0, -4.0, 0.0]),
            Point3D::new([1e-6, 1e-6, -1e-6]),
        ];
        for point in points {
            let round_tripped = SphericalPoint::from_cartesian(&point).to_cartesian();
            assert_points_close(&point, &round_tripped);
        }
    }

    #[test]
    fn test_origin_convention() {
        let spherical = SphericalPoint::from_cartesian(&Point3D::new([0.0, 0.0, 0.0]));
        assert_eq!(spherical.radius, 0.0);
        assert_eq!(spherical.polar, 0.0);
        assert_eq!(spherical.azimuth, 0.0);
        assert_points_close(&spherical.to_cartesian(), &Point3D::default());
    }

    #[test]
    fn test_normalized_azimuth() {
        let spherical = SphericalPoint::new(1.0, FRAC_PI_2, 2.0 * PI + 0.25);
        assert!((spherical.normalized_azimuth() - 0.25).abs() < TOLERANCE);
        let spherical = SphericalPoint::new(1.0, FRAC_PI_2, -PI - 0.5);
        assert!((spherical.normalized_azimuth() - (PI - 0.5)).abs() < TOLERANCE);
    }

    #[test]
    fn test_unnormalized_azimuth_same_point() {
        let wrapped = SphericalPoint::new(2.0, FRAC_PI_2, 0.5);
        let unwrapped = SphericalPoint::new(2.0, FRAC_PI_2, 0.5 + 2.0 * PI);
        assert_points_close(&wrapped.to_cartesian(), &unwrapped.to_cartesian());
    }
}
