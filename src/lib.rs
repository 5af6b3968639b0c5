//! Rolling vector-mean wind averaging for the station's WindSonic feed.
//!
//! The sensor reader decodes one instantaneous (direction, speed) pair
//! per received line and feeds it into a [`DualWindowWindProcessor`];
//! an interval scheduler fires each window's warm-up callback once its
//! averaging period has elapsed. Per WMO-No. 8 guidance wind is reported
//! as 2 and 10 minute means, with gusts taken as the raw window maximum.
//! Serial decoding, range checks and the outbound publishers live in
//! their own services and talk to this crate only through
//! [`DualWindowWindProcessor::process`] and [`report::WindReport`].

pub mod configuration;
pub mod data_processing;
pub mod errors;
pub mod global_settings;
pub mod processor;
pub mod report;
pub mod state;
pub mod task;
pub mod utils;
pub mod vector;

pub use configuration::AveragingSettings;
pub use data_processing::{MeanWind, RollingWindowAccumulator, WindSample};
pub use processor::{DualWindowWindProcessor, WindReadings};
pub use report::WindReport;
pub use state::{DecodedWind, SharedWindProcessor};
pub use task::scheduler::WarmupScheduler;
