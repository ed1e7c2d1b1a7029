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
    correctness::{check_equal_lengths, check_min_length, check_non_empty, check_positive_f64},
};

use crate::{
    model::ConstantModelType,
    other::{self, ReturnOnInvestment},
    window,
};

/// Calculates the chained return of `investment` across consecutive prices.
///
/// Each step reinvests the previous step's final value, producing one result per price after
/// the first.
///
/// # Errors
///
/// Returns an error if:
/// - `prices` has fewer than two values.
/// - `investment` is not positive.
pub fn return_on_investment(
    prices: &[f64],
    investment: f64,
) -> IndicatorResult<Vec<ReturnOnInvestment>> {
    check_min_length(prices, 2, "prices")?;
    check_positive_f64(investment, "investment")?;

    let mut value = investment;
    Ok(prices
        .windows(2)
        .map(|pair| {
            let roi = other::return_on_investment(pair[0], pair[1], value);
            value = roi.final_value;
            roi
        })
        .collect())
}

/// Calculates the true range of every bar.
///
/// # Errors
///
/// Returns an error if:
/// - `close` is empty.
/// - `high` or `low` differ in length from `close`.
pub fn true_range(close: &[f64], high: &[f64], low: &[f64]) -> IndicatorResult<Vec<f64>> {
    check_non_empty(close, "close")?;
    check_equal_lengths(close, high, "close", "high")?;
    check_equal_lengths(close, low, "close", "low")?;
    Ok(close
        .iter()
        .zip(high)
        .zip(low)
        .map(|((&c, &h), &l)| other::true_range(c, h, l))
        .collect())
}

/// Calculates the average true range of every window of `period` bars.
///
/// # Errors
///
/// Returns an error if:
/// - `close` is empty.
/// - `high` or `low` differ in length from `close`.
/// - `period` is zero or greater than the number of bars.
/// - `model` carries an invalid personalised smoothing constant.
pub fn average_true_range(
    close: &[f64],
    high: &[f64],
    low: &[f64],
    model: ConstantModelType,
    period: usize,
) -> IndicatorResult<Vec<f64>> {
    check_non_empty(close, "close")?;
    check_equal_lengths(close, high, "close", "high")?;
    check_equal_lengths(close, low, "close", "low")?;
    model.validate()?;
    window::bulk_range(close.len(), period, |range| {
        other::average_true_range(
            &close[range.clone()],
            &high[range.clone()],
            &low[range],
            model,
        )
    })
}

/// Calculates the internal bar strength of every bar.
///
/// # Errors
///
/// Returns an error if:
/// - `close` is empty.
/// - `high` or `low` differ in length from `close`.
pub fn internal_bar_strength(
    high: &[f64],
    low: &[f64],
    close: &[f64],
) -> IndicatorResult<Vec<f64>> {
    check_non_empty(close, "close")?;
    check_equal_lengths(close, high, "close", "high")?;
    check_equal_lengths(close, low, "close", "low")?;
    Ok(high
        .iter()
        .zip(low)
        .zip(close)
        .map(|((&h, &l), &c)| other::internal_bar_strength(h, l, c))
        .collect())
}
