//! Polar/Cartesian conversion for wind vectors.
//!
//! A wind vector points in the direction the air moves, while the sensor
//! reports the direction the wind blows *from*; both components are
//! therefore negated on decomposition. Reconstruction keeps the
//! three-branch arctan so the u == 0 boundary reports 360 (due north),
//! 180 (due south) or 0 (calm) rather than relying on atan2(0, 0).

/// Cartesian components of a wind vector, u eastward and v northward [kts].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct WindVector {
    pub u: f64,
    pub v: f64,
}

/// Decompose an instantaneous reading into its vector components.
///
/// Direction outside 0..=360 is folded by the trigonometry itself; range
/// enforcement belongs to the sensor reader.
pub fn to_components(direction: f64, speed: f64) -> WindVector {
    let rad = direction.to_radians();
    WindVector {
        u: -(speed * rad.sin()),
        v: -(speed * rad.cos()),
    }
}

/// Wind direction in degrees recovered from mean vector components.
///
/// The matching mean speed is the mean of the sample magnitudes and is
/// computed by the caller, not derived from the vector length.
pub fn direction_from_components(u: f64, v: f64) -> u16 {
    if u > 0.0 {
        (90.0 - (v / u).atan().to_degrees() + 180.0).round() as u16
    } else if u < 0.0 {
        (90.0 - (v / u).atan().to_degrees()).round() as u16
    } else if v < 0.0 {
        360
    } else if v > 0.0 {
        180
    } else {
        0
    }
}
