use crate::data_processing::{MeanWind, RollingWindowAccumulator, WindSample};

/// Current readings of both averaging windows.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct WindReadings {
    pub short: MeanWind,
    pub long: MeanWind,
}

/// Routes each decoded observation into the short (2 min) and long
/// (10 min) averaging windows and hands their warm-up callbacks through.
///
/// One instance per sensor stream. The processor itself is not
/// synchronized; when samples and timer callbacks arrive from different
/// threads, wrap it in [`crate::state::SharedWindProcessor`].
pub struct DualWindowWindProcessor {
    short_window: RollingWindowAccumulator,
    long_window: RollingWindowAccumulator,
}

impl DualWindowWindProcessor {
    pub fn new() -> Self {
        Self {
            short_window: RollingWindowAccumulator::new("2min wind"),
            long_window: RollingWindowAccumulator::new("10min wind"),
        }
    }

    /// Feed one observation into both windows.
    ///
    /// An absent direction or speed counts as a gap and resets both
    /// windows' outputs.
    pub fn process(&mut self, direction: Option<f64>, speed: Option<f64>) -> WindReadings {
        let sample = match (direction, speed) {
            (Some(direction), Some(speed)) => Some(WindSample::new(direction, speed)),
            _ => None,
        };

        self.short_window.push(sample);
        self.long_window.push(sample);
        self.readings()
    }

    /// Short-period timer callback, invoked by the external scheduler.
    pub fn on_short_period_elapsed(&mut self) {
        self.short_window.warm_up();
    }

    /// Long-period timer callback, invoked by the external scheduler.
    pub fn on_long_period_elapsed(&mut self) {
        self.long_window.warm_up();
    }

    pub fn readings(&self) -> WindReadings {
        WindReadings {
            short: self.short_window.reading(),
            long: self.long_window.reading(),
        }
    }

    pub fn short_window_warmed_up(&self) -> bool {
        self.short_window.is_warmed_up()
    }

    pub fn long_window_warmed_up(&self) -> bool {
        self.long_window.is_warmed_up()
    }
}

impl Default for DualWindowWindProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windows_warm_up_independently() {
        let mut processor = DualWindowWindProcessor::new();
        for _ in 0..4 {
            processor.process(Some(90.0), Some(10.0));
        }

        processor.on_short_period_elapsed();
        let readings = processor.process(Some(90.0), Some(10.0));

        assert_eq!(readings.short.direction, Some(90));
        assert_eq!(readings.short.gust, Some(10.0));
        assert_eq!(readings.long, MeanWind::default());

        processor.on_long_period_elapsed();
        let readings = processor.process(Some(90.0), Some(10.0));
        assert_eq!(readings.long.direction, Some(90));
    }

    #[test]
    fn absent_speed_counts_as_gap_for_both_windows() {
        let mut processor = DualWindowWindProcessor::new();
        for _ in 0..3 {
            processor.process(Some(180.0), Some(15.0));
        }
        processor.on_short_period_elapsed();
        processor.on_long_period_elapsed();
        processor.process(Some(180.0), Some(15.0));

        let readings = processor.process(Some(180.0), None);

        assert_eq!(readings.short, MeanWind::default());
        assert_eq!(readings.long, MeanWind::default());
        assert!(!processor.short_window_warmed_up());
        assert!(!processor.long_window_warmed_up());
    }

    #[test]
    fn long_window_keeps_growing_while_short_is_steady() {
        let mut processor = DualWindowWindProcessor::new();
        for _ in 0..3 {
            processor.process(Some(225.0), Some(20.0));
        }
        processor.on_short_period_elapsed();
        for _ in 0..5 {
            processor.process(Some(225.0), Some(20.0));
        }

        let readings = processor.readings();
        assert_eq!(readings.short.direction, Some(225));
        // long window still warming up over all 8 samples
        assert_eq!(readings.long, MeanWind::default());
        assert!(!processor.long_window_warmed_up());
    }
}
