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

use techan_core::{IndicatorResult, correctness::check_non_empty};

use crate::{
    average,
    candle::{self, Bands},
    model::{ConstantModelType, DeviationModel},
    momentum,
    standard::{self, BOLLINGER_MULTIPLIER, BOLLINGER_PERIOD, MACD_PERIOD, Macd, RSI_PERIOD},
    window,
};

fn moving_average(
    prices: &[f64],
    model: ConstantModelType,
    period: usize,
) -> IndicatorResult<Vec<f64>> {
    check_non_empty(prices, "prices")?;
    window::bulk(prices, period, |window| average::calculate(window, model))
}

/// Calculates the simple moving average of every window of `period` prices.
///
/// # Errors
///
/// Returns an error if:
/// - `prices` is empty.
/// - `period` is zero or greater than the length of `prices`.
pub fn simple_moving_average(prices: &[f64], period: usize) -> IndicatorResult<Vec<f64>> {
    moving_average(prices, ConstantModelType::Simple, period)
}

/// Calculates the smoothed moving average of every window of `period` prices.
///
/// # Errors
///
/// Returns an error if:
/// - `prices` is empty.
/// - `period` is zero or greater than the length of `prices`.
pub fn smoothed_moving_average(prices: &[f64], period: usize) -> IndicatorResult<Vec<f64>> {
    moving_average(prices, ConstantModelType::Smoothed, period)
}

/// Calculates the exponential moving average of every window of `period` prices.
///
/// # Errors
///
/// Returns an error if:
/// - `prices` is empty.
/// - `period` is zero or greater than the length of `prices`.
pub fn exponential_moving_average(prices: &[f64], period: usize) -> IndicatorResult<Vec<f64>> {
    moving_average(prices, ConstantModelType::Exponential, period)
}

/// Calculates Bollinger bands for every window of 20 prices.
///
/// # Errors
///
/// Returns an error if `prices` holds fewer than 20 values.
pub fn bollinger_bands(prices: &[f64]) -> IndicatorResult<Vec<Bands>> {
    check_non_empty(prices, "prices")?;
    window::bulk(prices, BOLLINGER_PERIOD, |window| {
        candle::moving_constant_bands(
            window,
            ConstantModelType::Simple,
            DeviationModel::StandardDeviation,
            BOLLINGER_MULTIPLIER,
        )
    })
}

/// Calculates the MACD with its signal line for every window of 34 prices.
///
/// # Errors
///
/// Returns an error if `prices` holds fewer than 34 values.
pub fn macd(prices: &[f64]) -> IndicatorResult<Vec<Macd>> {
    check_non_empty(prices, "prices")?;
    window::bulk(prices, MACD_PERIOD, standard::macd)
}

/// Calculates the 14 period smoothed relative strength index for every window of 14 prices.
///
/// # Errors
///
/// Returns an error if `prices` holds fewer than 14 values.
pub fn rsi(prices: &[f64]) -> IndicatorResult<Vec<f64>> {
    check_non_empty(prices, "prices")?;
    window::bulk(prices, RSI_PERIOD, |window| {
        momentum::relative_strength_index(window, ConstantModelType::Smoothed)
    })
}
