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

//! General purpose bar and investment arithmetic.

pub mod bulk;
pub mod single;

use serde::{Deserialize, Serialize};

use crate::{average, model::ConstantModelType};

/// The outcome of holding an investment between two prices.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReturnOnInvestment {
    /// The value of the investment at the end price.
    pub final_value: f64,
    /// The percentage return relative to the initial investment.
    pub percent_return: f64,
}

pub(crate) fn return_on_investment(
    start_price: f64,
    end_price: f64,
    investment: f64,
) -> ReturnOnInvestment {
    let final_value = investment * (end_price / start_price);
    ReturnOnInvestment {
        final_value,
        percent_return: 100.0 * (final_value - investment) / investment,
    }
}

/// The greatest of the bar's range and the distances of its close from the extremes.
pub(crate) fn true_range(close: f64, high: f64, low: f64) -> f64 {
    (high - low).max((high - close).abs()).max((low - close).abs())
}

/// Averages the bar-aligned true ranges of a window with `model`.
pub(crate) fn average_true_range(
    close: &[f64],
    high: &[f64],
    low: &[f64],
    model: ConstantModelType,
) -> f64 {
    let true_ranges: Vec<f64> = close
        .iter()
        .zip(high)
        .zip(low)
        .map(|((&c, &h), &l)| true_range(c, h, l))
        .collect();
    average::calculate(&true_ranges, model)
}

pub(crate) fn internal_bar_strength(high: f64, low: f64, close: f64) -> f64 {
    (close - low) / (high - low)
}
