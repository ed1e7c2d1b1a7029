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
    average, deviation,
    model::{ConstantModelType, DeviationModel},
    window,
};

/// Calculates the dispersion of every window of `period` prices around the window's moving
/// constant under `center_model`.
///
/// # Errors
///
/// Returns an error if:
/// - `prices` is empty.
/// - `period` is zero or greater than the length of `prices`.
/// - `center_model` carries an invalid personalised smoothing constant.
pub fn deviation(
    prices: &[f64],
    model: DeviationModel,
    center_model: ConstantModelType,
    period: usize,
) -> IndicatorResult<Vec<f64>> {
    check_non_empty(prices, "prices")?;
    center_model.validate()?;
    window::bulk(prices, period, |window| {
        let center = average::calculate(window, center_model);
        deviation::calculate(window, model, center)
    })
}
