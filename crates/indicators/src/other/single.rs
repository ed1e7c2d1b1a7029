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
    correctness::{check_equal_lengths, check_non_empty, check_positive_f64},
};

use crate::{
    model::ConstantModelType,
    other::{self, ReturnOnInvestment},
};

/// Calculates the final value and percentage return of `investment` held from `start_price`
/// to `end_price`.
///
/// # Errors
///
/// Returns an error if `investment` is not positive.
pub fn return_on_investment(
    start_price: f64,
    end_price: f64,
    investment: f64,
) -> IndicatorResult<ReturnOnInvestment> {
    check_positive_f64(investment, "investment")?;
    Ok(other::return_on_investment(start_price, end_price, investment))
}

/// Calculates the true range of a single bar.
#[must_use]
pub fn true_range(close: f64, high: f64, low: f64) -> f64 {
    other::true_range(close, high, low)
}

/// Calculates the average true range over all bars with `model`.
///
/// # Errors
///
/// Returns an error if:
/// - `close` is empty.
/// - `high` or `low` differ in length from `close`.
/// - `model` carries an invalid personalised smoothing constant.
pub fn average_true_range(
    close: &[f64],
    high: &[f64],
    low: &[f64],
    model: ConstantModelType,
) -> IndicatorResult<f64> {
    check_non_empty(close, "close")?;
    check_equal_lengths(close, high, "close", "high")?;
    check_equal_lengths(close, low, "close", "low")?;
    model.validate()?;
    Ok(other::average_true_range(close, high, low, model))
}

/// Calculates where the close sits within the bar's range, from 0 at the low to 1 at the high.
#[must_use]
pub fn internal_bar_strength(high: f64, low: f64, close: f64) -> f64 {
    other::internal_bar_strength(high, low, close)
}
