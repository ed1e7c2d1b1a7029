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

fn moving_average(prices: &[f64], model: ConstantModelType) -> IndicatorResult<f64> {
    check_non_empty(prices, "prices")?;
    window::single(prices, |window| average::calculate(window, model))
}

/// Calculates the simple moving average of `prices`.
///
/// # Errors
///
/// Returns an error if `prices` is empty.
pub fn simple_moving_average(prices: &[f64]) -> IndicatorResult<f64> {
    moving_average(prices, ConstantModelType::Simple)
}

/// Calculates the smoothed moving average of `prices`.
///
/// # Errors
///
/// Returns an error if `prices` is empty.
pub fn smoothed_moving_average(prices: &[f64]) -> IndicatorResult<f64> {
    moving_average(prices, ConstantModelType::Smoothed)
}

/// Calculates the exponential moving average of `prices`.
///
/// # Errors
///
/// Returns an error if `prices` is empty.
pub fn exponential_moving_average(prices: &[f64]) -> IndicatorResult<f64> {
    moving_average(prices, ConstantModelType::Exponential)
}

/// Calculates Bollinger bands: two standard deviations either side of the simple moving
/// average of 20 prices.
///
/// # Errors
///
/// Returns an error if `prices` does not hold exactly 20 values.
pub fn bollinger_bands(prices: &[f64]) -> IndicatorResult<Bands> {
    standard::check_preset_length(prices, BOLLINGER_PERIOD)?;
    Ok(candle::moving_constant_bands(
        prices,
        ConstantModelType::Simple,
        DeviationModel::StandardDeviation,
        BOLLINGER_MULTIPLIER,
    ))
}

/// Calculates the MACD of 34 prices: the 12 over 26 exponential MACD line with a 9 period
/// exponential signal line.
///
/// # Errors
///
/// Returns an error if `prices` does not hold exactly 34 values.
pub fn macd(prices: &[f64]) -> IndicatorResult<Macd> {
    standard::check_preset_length(prices, MACD_PERIOD)?;
    Ok(standard::macd(prices))
}

/// Calculates the 14 period relative strength index using the smoothed moving average.
///
/// # Errors
///
/// Returns an error if `prices` does not hold exactly 14 values.
pub fn rsi(prices: &[f64]) -> IndicatorResult<f64> {
    standard::check_preset_length(prices, RSI_PERIOD)?;
    Ok(momentum::relative_strength_index(
        prices,
        ConstantModelType::Smoothed,
    ))
}
