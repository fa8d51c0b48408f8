use nalgebra::Vector3;
#[cfg(any(feature = "serde-serialize", test))]
use serde::{Deserialize, Deserializer, Serialize, Serializer};
#[cfg(any(feature = "serde-serialize", test))]
use serde_json::Value;

use std::ops::{Add, AddAssign, Div, Mul, Sub, SubAssign};

use crate::constants::N_POINT_COORDINATES;
use crate::types::SphericalPoint;

/// A vertex in Cartesian space.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
pub struct Point3D(pub Vector3<f64>);

impl Point3D {
    pub fn new(data: [f64; N_POINT_COORDINATES]) -> Self {
        Self(Vector3::from(data))
    }

    pub fn from_vector(data: Vector3<f64>) -> Self {
        Self(data)
    }

    pub fn x(&self) -> f64 {
        self.0.x
    }

    pub fn y(&self) -> f64 {
        self.0.y
    }

    pub fn z(&self) -> f64 {
        self.0.z
    }

    pub fn inner(&self) -> [f64; N_POINT_COORDINATES] {
        [self.0.x, self.0.y, self.0.z]
    }

    /// Distance from the origin.
    pub fn norm(&self) -> f64 {
        self.0.norm()
    }

    /// Same physical point in spherical coordinates.
    pub fn to_spherical(&self) -> SphericalPoint {
        SphericalPoint::from_cartesian(self)
    }
}

impl From<Point3D> for [f64; N_POINT_COORDINATES] {
    fn from(value: Point3D) -> Self {
        value.inner()
    }
}

impl From<[f64; N_POINT_COORDINATES]> for Point3D {
    fn from(value: [f64; N_POINT_COORDINATES]) -> Self {
        Self(Vector3::from(value))
    }
}

impl From<Point3D> for Vec<f64> {
    fn from(value: Point3D) -> Self {
        value.inner().to_vec()
    }
}

impl TryFrom<Vec<f64>> for Point3D {
    type Error = &'static str;

    fn try_from(value: Vec<f64>) -> Result<Self, Self::Error> {
        if value.len() != N_POINT_COORDINATES {
            return Err("Can't convert to Point3D");
        }
        Ok(Self(Vector3::from_vec(value)))
    }
}

impl Add for Point3D {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Point3D {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Div<f64> for Point3D {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Self(self.0 / rhs)
    }
}

impl AddAssign for Point3D {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0
    }
}

impl SubAssign for Point3D {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0
    }
}

impl Mul<f64> for Point3D {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

#[cfg(any(feature = "serde-serialize", test))]
impl Serialize for Point3D {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let vec = self.0;
        let json = serde_json::json!({
            "x": vec.x,
            "y": vec.y,
            "z": vec.z
        });
        json.serialize(serializer)
    }
}

#[cfg(any(feature = "serde-serialize", test))]
impl<'de> Deserialize<'de> for Point3D {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: Value = Value::deserialize(deserializer)?;

        // Handle array format [f64, f64, f64]
        if let Some(arr) = value.as_array() {
            if arr.len() == 3 {
                let x = arr[0].as_f64().unwrap_or_default();
                let y = arr[1].as_f64().unwrap_or_default();
                let z = arr[2].as_f64().unwrap_or_default();
                return Ok(Point3D(Vector3::new(x, y, z)));
            }
        }

        // Handle object format {"x": f64, "y": f64, "z": f64}
        if let Some(obj) = value.as_object() {
            let x = obj.get("x").and_then(Value::as_f64).unwrap_or_default();
            let y = obj.get("y").and_then(Value::as_f64).unwrap_or_default();
            let z = obj.get("z").and_then(Value::as_f64).unwrap_or_default();
            return Ok(Point3D(Vector3::new(x, y, z)));
        }

        // Handle string format "0.0, 1.0, 2.0" (comma-separated values)
        if let Some(scalar_str) = value.as_str() {
            let parts: Vec<f64> = scalar_str
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();
            if parts.len() == 3 {
                return Ok(Point3D(Vector3::new(parts[0], parts[1], parts[2])));
            }
        }

        // Fallback to a default value if nothing else matches
        Ok(Point3D(Vector3::default()))
    }
}
