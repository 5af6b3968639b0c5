/*
 * WINDSONIC Wind Processor
 *
 * MIT license
 *
 * Copyright (c) 2021-2023 Michael Zill
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 *
 * Apache license, Version 2.0
 *
 * Copyright (c) 2021-2023 Michael Zill
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */
use crate::configuration::AveragingSettings;
use crate::errors::SchedulerError;
use crate::state::SharedWindProcessor;
use log::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

// Granularity at which a sleeping timer thread rechecks the stop flag [ms]
const STOP_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Periodic warm-up timers for the two averaging windows.
///
/// Armed once at startup, each timer fires at its window's full period,
/// measured from `start`, and keeps firing so a window reset by a gap in
/// the input stream is warmed again one period later. The processor
/// stays independently testable by driving its elapsed callbacks
/// directly instead of arming a scheduler.
pub struct WarmupScheduler {
    stop: Arc<AtomicBool>,
    workers: Vec<JoinHandle<()>>,
}

impl WarmupScheduler {
    pub fn start(
        settings: AveragingSettings,
        processor: SharedWindProcessor,
    ) -> Result<Self, SchedulerError> {
        let stop = Arc::new(AtomicBool::new(false));

        let short_side = processor.clone();
        let workers = vec![
            spawn_interval_job(
                "wind-avg-short",
                settings.short_period,
                stop.clone(),
                move || short_side.on_short_period_elapsed(),
            )?,
            spawn_interval_job(
                "wind-avg-long",
                settings.long_period,
                stop.clone(),
                move || processor.on_long_period_elapsed(),
            )?,
        ];

        Ok(Self { stop, workers })
    }

    /// Request shutdown and wait for both timer threads to exit.
    pub fn stop(self) {
        self.stop.store(true, Ordering::Relaxed);
        for worker in self.workers {
            let _ = worker.join();
        }
    }
}

fn spawn_interval_job(
    name: &'static str,
    period: Duration,
    stop: Arc<AtomicBool>,
    job: impl Fn() + Send + 'static,
) -> Result<JoinHandle<()>, SchedulerError> {
    let handle = thread::Builder::new().name(name.into()).spawn(move || {
        info!("{name}: interval timer armed, period {period:?}");
        loop {
            let mut remaining = period;
            while remaining > Duration::ZERO {
                let nap = remaining.min(STOP_POLL_INTERVAL);
                thread::sleep(nap);
                if stop.load(Ordering::Relaxed) {
                    info!("{name}: interval timer stopped");
                    return;
                }
                remaining -= nap;
            }
            job();
        }
    })?;

    Ok(handle)
}
