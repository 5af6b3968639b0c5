use anyhow::Result;
use lazy_static::lazy_static;
use log::*;
use rand::Rng;
use std::thread;
use std::time::Duration;
use wind_processor::configuration::AveragingSettings;
use wind_processor::report::WindReport;
use wind_processor::state::{DecodedWind, SharedWindProcessor};
use wind_processor::task::scheduler::WarmupScheduler;

lazy_static! {
    static ref WIND_PROCESSOR: SharedWindProcessor = SharedWindProcessor::new();
}

// Simulated sensor cadence [ms]
const SAMPLE_INTERVAL: u64 = 250;
// Shortened averaging periods so the demo warms up quickly [sec]
const DEMO_SHORT_PERIOD: u64 = 5;
const DEMO_LONG_PERIOD: u64 = 25;
// Demo length [samples]
const DEMO_SAMPLES: u32 = 400;
// Publish one report every N samples
const REPORT_EVERY: u32 = 8;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("WindSonic wind averaging simulator");

    let settings = AveragingSettings {
        short_period: Duration::from_secs(DEMO_SHORT_PERIOD),
        long_period: Duration::from_secs(DEMO_LONG_PERIOD),
    };
    let scheduler = WarmupScheduler::start(settings, WIND_PROCESSOR.clone())?;

    let mut rng = rand::thread_rng();
    let mut direction: f64 = 180.0;
    let mut speed: f64 = 12.0;
    let mut report = WindReport::default();

    for cycle in 0..DEMO_SAMPLES {
        direction = (direction + rng.gen_range(-4.0..4.0)).rem_euclid(360.0);
        speed = (speed + rng.gen_range(-1.5..1.5)).clamp(0.0, 40.0);

        // the occasional dropout exercises the gap handling
        let observed = if rng.gen_ratio(1, 200) {
            warn!("sensor line dropped");
            DecodedWind {
                direction: None,
                speed: None,
            }
        } else {
            DecodedWind {
                direction: Some(direction.round()),
                speed: Some(speed.round()),
            }
        };

        let readings = WIND_PROCESSOR.process(observed.direction, observed.speed);

        if cycle % REPORT_EVERY == 0 {
            report.update(observed, readings, WIND_PROCESSOR.long_window_warmed_up());
            info!("{}", report.to_json()?);
        }

        thread::sleep(Duration::from_millis(SAMPLE_INTERVAL));
    }

    scheduler.stop();
    info!("simulator finished");

    Ok(())
}
