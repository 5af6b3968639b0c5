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
use crate::global_settings;
use std::env;
use std::time::Duration;

pub const ENV_AVG_SHORT_SECS: &str = "WINDSONIC_AVG_SHORT_SECS";
pub const ENV_AVG_LONG_SECS: &str = "WINDSONIC_AVG_LONG_SECS";

/// Warm-up periods of the two averaging windows.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AveragingSettings {
    pub short_period: Duration,
    pub long_period: Duration,
}

impl Default for AveragingSettings {
    fn default() -> Self {
        Self {
            short_period: Duration::from_secs(global_settings::SHORT_AVERAGING_PERIOD),
            long_period: Duration::from_secs(global_settings::LONG_AVERAGING_PERIOD),
        }
    }
}

impl AveragingSettings {
    /// Settings from the environment, falling back to the station
    /// defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let mut settings = Self::default();
        if let Some(secs) = env_secs(ENV_AVG_SHORT_SECS) {
            settings.short_period = Duration::from_secs(secs);
        }
        if let Some(secs) = env_secs(ENV_AVG_LONG_SECS) {
            settings.long_period = Duration::from_secs(secs);
        }
        settings
    }
}

fn env_secs(name: &str) -> Option<u64> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_two_and_ten_minutes() {
        let settings = AveragingSettings::default();
        assert_eq!(settings.short_period, Duration::from_secs(120));
        assert_eq!(settings.long_period, Duration::from_secs(600));
    }

    // one test so the env mutations cannot interleave under the
    // parallel test runner
    #[test]
    fn env_overrides_the_periods() {
        env::set_var(ENV_AVG_SHORT_SECS, "30");
        env::set_var(ENV_AVG_LONG_SECS, "90");
        let settings = AveragingSettings::from_env();

        assert_eq!(settings.short_period, Duration::from_secs(30));
        assert_eq!(settings.long_period, Duration::from_secs(90));

        env::set_var(ENV_AVG_SHORT_SECS, "fast");
        env::remove_var(ENV_AVG_LONG_SECS);
        let settings = AveragingSettings::from_env();

        // unparsable and unset values fall back to the defaults
        assert_eq!(settings.short_period, Duration::from_secs(120));
        assert_eq!(settings.long_period, Duration::from_secs(600));

        env::remove_var(ENV_AVG_SHORT_SECS);
    }
}
