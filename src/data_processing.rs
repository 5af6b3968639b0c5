use crate::errors::ProcessingError;
use crate::global_settings::CALM_SPEED_THRESHOLD;
use crate::vector::{self, WindVector};
use log::*;
use std::collections::VecDeque;

// Wind averaging follows the guidance provided in the following document:
//
// Guide to Meteorological Instruments and
// Methods of Observation WMO-No. 8
// 2014 edition
// Updated in 2017
// Section 1.3.2.4 Instantaneous meteorological values
// "(b) That wind, except wind gusts, be reported as 2 or 10 min averages,
// which are obtained after linearization of the sensor output"
//
// Mean direction is computed over the u/v vector components so opposing
// gust pairs cancel; mean speed is the plain average of the sample
// magnitudes, matching what the station has always published.

/// One instantaneous observation, as decoded by the sensor reader.
///
/// Direction is degrees in 0..=360 (0 and 360 are both valid inputs);
/// speed is the sensor unit (knots) and must be non-negative. Range
/// checks happen upstream in the reader.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WindSample {
    pub direction: f64,
    pub speed: f64,
}

impl WindSample {
    pub fn new(direction: f64, speed: f64) -> Self {
        Self { direction, speed }
    }
}

/// Smoothed output of one averaging window.
///
/// All fields are `None` until the window's warm-up period has elapsed,
/// and fall back to `None` whenever the input stream reports a gap.
/// Direction 0 is reserved for calm; due north is reported as 360.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct MeanWind {
    pub direction: Option<u16>,
    pub speed: Option<u16>,
    /// Highest raw sample speed retained in the window [kts]
    pub gust: Option<f64>,
    /// Lowest raw sample speed retained in the window [kts]
    pub lull: Option<f64>,
}

/// Rolling history of one averaging period.
///
/// Until `warm_up` fires the buffer only grows; afterwards it behaves as
/// a sliding window fixed at whatever length the warm-up period allowed
/// it to reach, evicting the oldest entry on every push.
pub struct RollingWindowAccumulator {
    label: &'static str,
    samples: VecDeque<WindSample>,
    components: VecDeque<WindVector>,
    warmed_up: bool,
    reading: MeanWind,
}

impl RollingWindowAccumulator {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            samples: VecDeque::new(),
            components: VecDeque::new(),
            warmed_up: false,
            reading: MeanWind::default(),
        }
    }

    /// Feed one observation, or `None` when direction or speed was
    /// unavailable this cycle.
    ///
    /// A gap clears the outputs and restarts warm-up; the buffered
    /// history is kept and resumes accumulating with the next valid
    /// sample, so the next timer fire fixes a longer window.
    pub fn push(&mut self, sample: Option<WindSample>) {
        let Some(sample) = sample else {
            self.warmed_up = false;
            self.reading = MeanWind::default();
            debug!("{}: missing sample, outputs reset", self.label);
            return;
        };

        if !self.warmed_up {
            self.accumulate(sample);
            self.reading.gust = None;
            self.reading.lull = None;
            return;
        }

        if self.samples.is_empty() {
            // Only reachable when the timer fired before any sample
            // arrived; keep the sample and skip this cycle's mean.
            warn!("{}: flag set but no values for calculation", self.label);
            self.accumulate(sample);
            return;
        }

        self.accumulate(sample);
        self.samples.pop_front();
        self.components.pop_front();

        if let Err(e) = self.recompute() {
            warn!("{}: {}", self.label, e);
        }
    }

    /// Warm-up timer callback. Idempotent; fixes the window length at
    /// whatever the buffer holds right now.
    pub fn warm_up(&mut self) {
        if !self.warmed_up {
            info!(
                "{}: averaging period elapsed, window fixed at {} samples",
                self.label,
                self.samples.len()
            );
        }
        self.warmed_up = true;
    }

    pub fn is_warmed_up(&self) -> bool {
        self.warmed_up
    }

    /// Latest computed reading; all fields `None` during warm-up.
    pub fn reading(&self) -> MeanWind {
        self.reading
    }

    /// Realized window length. Grows during warm-up, constant afterwards.
    pub fn retained_len(&self) -> usize {
        self.samples.len()
    }

    fn accumulate(&mut self, sample: WindSample) {
        self.samples.push_back(sample);
        self.components
            .push_back(vector::to_components(sample.direction, sample.speed));
    }

    fn recompute(&mut self) -> Result<(), ProcessingError> {
        if self.samples.is_empty() || self.components.is_empty() {
            return Err(ProcessingError::EmptyWindow);
        }

        let count = self.samples.len() as f64;
        let mean_u = self.components.iter().map(|c| c.u).sum::<f64>() / count;
        let mean_v = self.components.iter().map(|c| c.v).sum::<f64>() / count;
        let speed_sum: f64 = self.samples.iter().map(|s| s.speed).sum();
        let gust = self.samples.iter().map(|s| s.speed).fold(f64::MIN, f64::max);
        let lull = self.samples.iter().map(|s| s.speed).fold(f64::MAX, f64::min);

        let mut direction = vector::direction_from_components(mean_u, mean_v);
        let mut speed = (speed_sum / count).round() as i64;

        if speed < 0 {
            speed = 0;
        }
        // North wind is 360 deg by convention
        if direction == 0 && speed > 0 {
            direction = 360;
        }
        // Calm wind dir reported as 0 deg by convention, < 2 kts = calm
        if (speed as f64) < CALM_SPEED_THRESHOLD {
            direction = 0;
            speed = 0;
        }

        self.reading = MeanWind {
            direction: Some(direction),
            speed: Some(speed as u16),
            gust: Some(gust),
            lull: Some(lull),
        };

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn warmed_window(samples: &[(f64, f64)]) -> RollingWindowAccumulator {
        let mut window = RollingWindowAccumulator::new("test wind");
        for &(direction, speed) in samples {
            window.push(Some(WindSample::new(direction, speed)));
        }
        window.warm_up();
        window
    }

    #[test]
    fn no_mean_before_warm_up() {
        let mut window = RollingWindowAccumulator::new("test wind");
        for _ in 0..10 {
            window.push(Some(WindSample::new(90.0, 10.0)));
            assert_eq!(window.reading(), MeanWind::default());
        }
        assert!(!window.is_warmed_up());
        assert_eq!(window.retained_len(), 10);
    }

    #[test]
    fn window_length_fixed_after_warm_up() {
        let mut window = warmed_window(&[(90.0, 10.0); 5]);
        for _ in 0..20 {
            window.push(Some(WindSample::new(45.0, 8.0)));
            assert_eq!(window.retained_len(), 5);
        }
    }

    #[test]
    fn steady_east_wind() {
        let mut window = warmed_window(&[(90.0, 10.0); 3]);
        window.push(Some(WindSample::new(90.0, 10.0)));

        let reading = window.reading();
        assert_eq!(reading.direction, Some(90));
        assert_eq!(reading.speed, Some(10));
        assert_eq!(reading.gust, Some(10.0));
        assert_eq!(reading.lull, Some(10.0));
    }

    #[test]
    fn steady_north_wind_reports_360() {
        let mut window = warmed_window(&[(0.0, 10.0); 3]);
        window.push(Some(WindSample::new(0.0, 10.0)));

        let reading = window.reading();
        assert_eq!(reading.direction, Some(360));
        assert_eq!(reading.speed, Some(10));
    }

    #[test]
    fn light_air_reports_calm() {
        let mut window = warmed_window(&[(0.0, 1.0); 3]);
        window.push(Some(WindSample::new(0.0, 1.0)));

        let reading = window.reading();
        assert_eq!(reading.direction, Some(0));
        assert_eq!(reading.speed, Some(0));
    }

    #[test]
    fn gust_tracks_window_maximum() {
        let mut window = warmed_window(&[(180.0, 5.0), (180.0, 12.0), (180.0, 7.0)]);
        window.push(Some(WindSample::new(180.0, 6.0)));

        let reading = window.reading();
        // the 5 kt sample has been evicted
        assert_eq!(reading.gust, Some(12.0));
        assert_eq!(reading.lull, Some(6.0));

        window.push(Some(WindSample::new(180.0, 4.0)));
        window.push(Some(WindSample::new(180.0, 4.0)));
        assert_eq!(window.reading().gust, Some(6.0));
    }

    #[test]
    fn missing_sample_resets_outputs_and_flag() {
        let mut window = warmed_window(&[(270.0, 15.0); 4]);
        window.push(Some(WindSample::new(270.0, 15.0)));
        assert!(window.reading().direction.is_some());

        let retained = window.retained_len();
        window.push(None);

        assert_eq!(window.reading(), MeanWind::default());
        assert!(!window.is_warmed_up());
        // history survives the reset
        assert_eq!(window.retained_len(), retained);
    }

    #[test]
    fn accumulation_resumes_after_reset() {
        let mut window = warmed_window(&[(270.0, 15.0); 4]);
        window.push(None);
        window.push(Some(WindSample::new(270.0, 15.0)));
        assert_eq!(window.reading(), MeanWind::default());
        assert_eq!(window.retained_len(), 5);

        window.warm_up();
        window.push(Some(WindSample::new(270.0, 15.0)));
        assert_eq!(window.reading().direction, Some(270));
        assert_eq!(window.retained_len(), 5);
    }

    #[test]
    fn warm_up_before_first_sample_degrades_gracefully() {
        let mut window = RollingWindowAccumulator::new("test wind");
        window.warm_up();

        window.push(Some(WindSample::new(90.0, 10.0)));
        assert_eq!(window.reading(), MeanWind::default());
        assert_eq!(window.retained_len(), 1);

        // the next push recovers and computes over the sliding window
        window.push(Some(WindSample::new(90.0, 10.0)));
        assert_eq!(window.reading().direction, Some(90));
        assert_eq!(window.retained_len(), 1);
    }

    #[test]
    fn warm_up_is_idempotent() {
        let mut window = warmed_window(&[(90.0, 10.0); 3]);
        window.warm_up();
        window.warm_up();
        window.push(Some(WindSample::new(90.0, 10.0)));
        assert_eq!(window.retained_len(), 3);
        assert_eq!(window.reading().direction, Some(90));
    }

    #[test]
    fn mean_direction_stays_in_range() {
        let mut window = warmed_window(&[(10.0, 20.0), (350.0, 20.0), (5.0, 20.0)]);
        for &direction in &[355.0, 2.0, 8.0, 352.0, 359.0] {
            window.push(Some(WindSample::new(direction, 20.0)));
            let reading = window.reading();
            // 20 kts is well above the calm threshold, so direction must
            // land in 1..=360
            let dir = reading.direction.unwrap();
            assert!((1..=360).contains(&dir));
            assert_eq!(reading.speed, Some(20));
        }
    }

    #[test]
    fn opposing_components_with_southerly_flow_report_north() {
        // u components cancel, net v stays negative: due north, never 0
        let mut window = warmed_window(&[(45.0, 10.0), (315.0, 10.0)]);
        window.push(Some(WindSample::new(45.0, 10.0)));
        window.push(Some(WindSample::new(315.0, 10.0)));
        assert_eq!(window.reading().direction, Some(360));
    }
}
