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
use crate::processor::{DualWindowWindProcessor, WindReadings};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

/// One decoded sensor message as handed over by the external reader.
///
/// A `None` in either field marks the value as unavailable for this
/// cycle and resets the averaging windows.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct DecodedWind {
    pub direction: Option<f64>,
    pub speed: Option<f64>,
}

/// Cloneable handle owning the processor behind a single mutex.
///
/// The sample path (`process`) and the timer path (`on_*_elapsed`) both
/// mutate the window state, so everything is serialized through the one
/// lock; clone the handle into the scheduler and the reader.
#[derive(Clone)]
pub struct SharedWindProcessor {
    inner: Arc<Mutex<DualWindowWindProcessor>>,
}

impl SharedWindProcessor {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(DualWindowWindProcessor::new())),
        }
    }

    pub fn process(&self, direction: Option<f64>, speed: Option<f64>) -> WindReadings {
        self.inner.lock().unwrap().process(direction, speed)
    }

    pub fn on_short_period_elapsed(&self) {
        self.inner.lock().unwrap().on_short_period_elapsed();
    }

    pub fn on_long_period_elapsed(&self) {
        self.inner.lock().unwrap().on_long_period_elapsed();
    }

    pub fn readings(&self) -> WindReadings {
        self.inner.lock().unwrap().readings()
    }

    pub fn long_window_warmed_up(&self) -> bool {
        self.inner.lock().unwrap().long_window_warmed_up()
    }
}

impl Default for SharedWindProcessor {
    fn default() -> Self {
        Self::new()
    }
}
