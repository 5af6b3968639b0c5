use crate::processor::WindReadings;
use crate::state::DecodedWind;
use crate::utils::datetime;
use serde::{Deserialize, Serialize};

pub const MEASUREMENT_NAME: &str = "WINDSONIC";

/// The published reading record, one per sensor stream.
///
/// Field names follow the aggregation-service schema the station has
/// always reported. The averaged fields (including the 2-minute pair)
/// only refresh once the long window has warmed up, and keep their last
/// value across warm-up gaps, matching the station's published behavior.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WindReport {
    pub timestamp: Option<String>,
    pub winddir: Option<u16>,
    pub windspeed: Option<u16>,
    pub windgust: Option<f64>,
    pub winddir_avg10m: Option<u16>,
    pub windspeed_avg10m: Option<u16>,
    pub winddir_avg2m: Option<u16>,
    pub windspeed_avg2m: Option<u16>,
}

impl WindReport {
    /// Refresh the record from the latest decoded message and the
    /// processor output it produced.
    pub fn update(&mut self, observed: DecodedWind, readings: WindReadings, long_warmed: bool) {
        self.timestamp = datetime::utc_timestamp().ok();
        self.winddir = observed.direction.map(|d| d.round() as u16);
        self.windspeed = observed.speed.map(|s| s.round() as u16);

        if long_warmed {
            self.windgust = readings.long.gust;
            self.winddir_avg10m = readings.long.direction;
            self.windspeed_avg10m = readings.long.speed;
            self.winddir_avg2m = readings.short.direction;
            self.windspeed_avg2m = readings.short.speed;
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
