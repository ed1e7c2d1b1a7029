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

//! Momentum indicators: oscillators measuring the speed and strength of price moves.

pub mod bulk;
pub mod single;

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use techan_core::math::{diffs, max, min};

use crate::{
    average, deviation,
    indicator::Accumulator,
    model::{ConstantModelType, DeviationModel},
};

/// An indicator value paired with the McGinley dynamic it was measured against.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct McGinleyValue {
    pub value: f64,
    pub mcginley_dynamic: f64,
}

/// The McGinley dynamic MACD line and the two dynamics it is built from.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct McGinleyMacd {
    pub macd: f64,
    pub short_mcginley: f64,
    pub long_mcginley: f64,
}

/// The Chaikin oscillator and the accumulation distribution at the end of its window.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChaikinOscillator {
    pub value: f64,
    pub accumulation_distribution: f64,
}

pub(crate) fn relative_strength_index(prices: &[f64], model: ConstantModelType) -> f64 {
    let changes = diffs(prices);
    let gains: Vec<f64> = changes.iter().copied().filter(|c| *c > 0.0).collect();
    let losses: Vec<f64> = changes.iter().filter(|c| **c < 0.0).map(|c| c.abs()).collect();

    if gains.is_empty() {
        return 0.0;
    }
    if losses.is_empty() {
        return 100.0;
    }

    let relative_strength =
        average::calculate(&gains, model) / average::calculate(&losses, model);
    100.0 - (100.0 / (1.0 + relative_strength))
}

pub(crate) fn stochastic_oscillator(prices: &[f64]) -> f64 {
    let lowest = min(prices);
    let latest = prices[prices.len() - 1];
    (latest - lowest) / (max(prices) - lowest) * 100.0
}

pub(crate) fn williams_percent_r(high: &[f64], low: &[f64], close: f64) -> f64 {
    let highest = max(high);
    -100.0 * (highest - close) / (highest - min(low))
}

pub(crate) fn money_flow_index(prices: &[f64], volume: &[f64]) -> f64 {
    let raw_flows: Vec<f64> = prices.iter().zip(volume).map(|(p, v)| p * v).collect();

    let mut positive_flow = 0.0;
    let mut negative_flow = 0.0;
    for pair in raw_flows.windows(2) {
        if pair[1] > pair[0] {
            positive_flow += pair[1];
        } else if pair[1] < pair[0] {
            negative_flow += pair[1];
        }
    }

    if negative_flow == 0.0 {
        return 100.0;
    }
    if positive_flow == 0.0 {
        return 0.0;
    }
    100.0 - (100.0 / (1.0 + positive_flow / negative_flow))
}

pub(crate) fn rate_of_change(current_price: f64, previous_price: f64) -> f64 {
    (current_price - previous_price) / previous_price * 100.0
}

pub(crate) fn commodity_channel_index(
    prices: &[f64],
    model: ConstantModelType,
    deviation_model: DeviationModel,
    multiplier: f64,
) -> f64 {
    let moving_constant = average::calculate(prices, model);
    centered_commodity_channel_index(prices, moving_constant, deviation_model, multiplier)
}

pub(crate) fn centered_commodity_channel_index(
    prices: &[f64],
    center: f64,
    deviation_model: DeviationModel,
    multiplier: f64,
) -> f64 {
    let deviation = deviation::calculate(prices, deviation_model, center);
    (prices[prices.len() - 1] - center) / (multiplier * deviation)
}

/// The short average over the most recent `short_period` prices less the long average over
/// all of them.
pub(crate) fn macd_line(
    prices: &[f64],
    short_period: usize,
    short_model: ConstantModelType,
    long_model: ConstantModelType,
) -> f64 {
    let short = average::calculate(&prices[prices.len() - short_period..], short_model);
    short - average::calculate(prices, long_model)
}

pub(crate) fn mcginley_dynamic_macd_line(
    latest_price: f64,
    short_period: usize,
    previous_short: Option<f64>,
    long_period: usize,
    previous_long: Option<f64>,
) -> McGinleyMacd {
    let short_mcginley = average::mcginley(latest_price, previous_short, short_period);
    let long_mcginley = average::mcginley(latest_price, previous_long, long_period);
    McGinleyMacd {
        macd: short_mcginley - long_mcginley,
        short_mcginley,
        long_mcginley,
    }
}

/// Reduces a window of accumulation distribution values to the Chaikin oscillator.
pub(crate) fn chaikin_oscillator(
    accumulation_distribution: &[f64],
    short_period: usize,
    short_model: ConstantModelType,
    long_model: ConstantModelType,
) -> ChaikinOscillator {
    ChaikinOscillator {
        value: macd_line(
            accumulation_distribution,
            short_period,
            short_model,
            long_model,
        ),
        accumulation_distribution: accumulation_distribution[accumulation_distribution.len() - 1],
    }
}

pub(crate) fn percentage_price_oscillator(
    prices: &[f64],
    short_period: usize,
    model: ConstantModelType,
) -> f64 {
    let short = average::calculate(&prices[prices.len() - short_period..], model);
    let long = average::calculate(prices, model);
    (short - long) / long * 100.0
}

pub(crate) fn chande_momentum_oscillator(prices: &[f64]) -> f64 {
    let (gains, losses) = diffs(prices)
        .into_iter()
        .fold((0.0, 0.0), |(gains, losses), change| {
            if change > 0.0 {
                (gains + change, losses)
            } else {
                (gains, losses - change)
            }
        });
    100.0 * (gains - losses) / (gains + losses)
}

/// The running on-balance volume.
///
/// Each step reads `(current_price, previous_price, current_volume)`: volume is added on an up
/// move, subtracted on a down move and ignored when the price is unchanged.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OnBalanceVolume {
    pub value: f64,
}

impl OnBalanceVolume {
    /// Creates a new [`OnBalanceVolume`] instance seeded with `previous_obv`.
    #[must_use]
    pub const fn new(previous_obv: f64) -> Self {
        Self {
            value: previous_obv,
        }
    }
}

impl Display for OnBalanceVolume {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.name(), self.value)
    }
}

impl Accumulator for OnBalanceVolume {
    type Input = (f64, f64, f64);
    type Output = f64;

    fn name(&self) -> String {
        stringify!(OnBalanceVolume).to_string()
    }

    fn step(self, (current_price, previous_price, current_volume): Self::Input) -> Self {
        let value = if current_price > previous_price {
            self.value + current_volume
        } else if current_price < previous_price {
            self.value - current_volume
        } else {
            self.value
        };
        Self { value }
    }

    fn value(&self) -> f64 {
        self.value
    }
}
