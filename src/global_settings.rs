// Averaging period of the short rolling wind window [sec]
pub const SHORT_AVERAGING_PERIOD: u64 = 120;
// Averaging period of the long rolling wind window [sec]
pub const LONG_AVERAGING_PERIOD: u64 = 600;
// Mean speeds below this threshold are reported as calm [kts]
pub const CALM_SPEED_THRESHOLD: f64 = 2.0;
