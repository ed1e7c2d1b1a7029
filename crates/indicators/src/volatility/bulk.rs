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

use techan_core::{
    IndicatorResult,
    correctness::{check_non_empty, check_parallel, check_positive_f64},
};

use crate::{
    deviation,
    indicator::Accumulator,
    model::ConstantModelType,
    other,
    volatility::VolatilitySystem,
    window,
};

/// Calculates the ulcer index of every window of `period` prices.
///
/// # Errors
///
/// Returns an error if:
/// - `prices` is empty.
/// - `period` is zero or greater than the length of `prices`.
pub fn ulcer_index(prices: &[f64], period: usize) -> IndicatorResult<Vec<f64>> {
    check_non_empty(prices, "prices")?;
    window::bulk(prices, period, deviation::ulcer_index)
}

/// Calculates the volatility system stop for every window of `period` bars.
///
/// Each window's stop sits `multiplier` average true ranges away from the most significant
/// close of the current trend. The trend is seeded from the first window and reverses when a
/// close crosses the previous stop.
///
/// # Errors
///
/// Returns an error if:
/// - `high` is empty, or `low` or `close` differ in length from it.
/// - `period` is zero or greater than the number of bars.
/// - `multiplier` is not positive.
/// - `model` carries an invalid personalised smoothing constant.
pub fn volatility_system(
    high: &[f64],
    low: &[f64],
    close: &[f64],
    period: usize,
    multiplier: f64,
    model: ConstantModelType,
) -> IndicatorResult<Vec<f64>> {
    check_parallel(&[("high", high), ("low", low), ("close", close)])?;
    check_positive_f64(multiplier, "multiplier")?;
    model.validate()?;

    let inputs = window::bulk_range(high.len(), period, |range| {
        let latest_close = close[range.end - 1];
        let arc = other::average_true_range(
            &close[range.clone()],
            &high[range.clone()],
            &low[range],
            model,
        ) * multiplier;
        (latest_close, arc)
    })?;

    let seed = VolatilitySystem::seed(&close[..period], inputs[0].1);
    let mut values = Vec::with_capacity(inputs.len());
    values.push(seed.value());
    values.extend(window::fold(seed, inputs[1..].iter().copied()));
    Ok(values)
}
