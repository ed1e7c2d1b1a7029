// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2025 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! Standard indicator presets with the periods and models most charting packages default to.
//!
//! Single presets expect exactly one preset period of prices. Bulk presets slide that period
//! across the series.

pub mod bulk;
pub mod single;

use serde::{Deserialize, Serialize};
use techan_core::{IndicatorError, IndicatorResult, correctness::check_non_empty};

use crate::{average, model::ConstantModelType, momentum};

pub const BOLLINGER_PERIOD: usize = 20;
pub const BOLLINGER_MULTIPLIER: f64 = 2.0;
pub const MACD_SHORT_PERIOD: usize = 12;
pub const MACD_LONG_PERIOD: usize = 26;
pub const MACD_SIGNAL_PERIOD: usize = 9;
/// The prices needed for one full MACD reading: a signal period of long MACD windows.
pub const MACD_PERIOD: usize = MACD_LONG_PERIOD + MACD_SIGNAL_PERIOD - 1;
pub const RSI_PERIOD: usize = 14;

/// A MACD reading with its signal line.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Macd {
    pub macd: f64,
    pub signal: f64,
    /// `macd - signal`.
    pub histogram: f64,
}

fn check_preset_length(prices: &[f64], period: usize) -> IndicatorResult<()> {
    check_non_empty(prices, "prices")?;
    if prices.len() != period {
        log::debug!("Preset of period {period} given {} prices", prices.len());
        return Err(IndicatorError::InvalidPeriod {
            period,
            length: prices.len(),
        });
    }
    Ok(())
}

pub(crate) fn macd(prices: &[f64]) -> Macd {
    let macds: Vec<f64> = prices
        .windows(MACD_LONG_PERIOD)
        .map(|window| {
            momentum::macd_line(
                window,
                MACD_SHORT_PERIOD,
                ConstantModelType::Exponential,
                ConstantModelType::Exponential,
            )
        })
        .collect();
    let signal = average::calculate(&macds, ConstantModelType::Exponential);
    let macd = macds[macds.len() - 1];
    Macd {
        macd,
        signal,
        histogram: macd - signal,
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_macd_period() {
        assert_eq!(MACD_PERIOD, 34);
    }

    #[rstest]
    #[case(19)]
    #[case(21)]
    fn test_check_preset_length_rejects_other_lengths(#[case] length: usize) {
        let prices = vec![1.0; length];
        assert_eq!(
            check_preset_length(&prices, BOLLINGER_PERIOD),
            Err(IndicatorError::InvalidPeriod {
                period: BOLLINGER_PERIOD,
                length
            })
        );
    }

    #[rstest]
    fn test_macd_of_constant_prices_is_flat() {
        let value = macd(&[50.0; MACD_PERIOD]);
        assert!(value.macd.abs() < 1e-9);
        assert!(value.signal.abs() < 1e-9);
        assert!(value.histogram.abs() < 1e-9);
    }
}
