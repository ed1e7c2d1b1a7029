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

use techan_core::{IndicatorResult, correctness::check_parallel};

use crate::{
    correlation,
    model::{ConstantModelType, DeviationModel},
};

/// Calculates the correlation between the prices of two assets.
///
/// Each asset is centered on its moving constant under `model` and scaled by its deviation
/// under `deviation_model`.
///
/// # Errors
///
/// Returns an error if:
/// - `prices_asset_a` is empty or `prices_asset_b` differs in length from it.
/// - `model` carries an invalid personalised smoothing constant.
pub fn correlate_asset_prices(
    prices_asset_a: &[f64],
    prices_asset_b: &[f64],
    model: ConstantModelType,
    deviation_model: DeviationModel,
) -> IndicatorResult<f64> {
    check_parallel(&[
        ("prices_asset_a", prices_asset_a),
        ("prices_asset_b", prices_asset_b),
    ])?;
    model.validate()?;
    Ok(correlation::correlate_asset_prices(
        prices_asset_a,
        prices_asset_b,
        model,
        deviation_model,
    ))
}
