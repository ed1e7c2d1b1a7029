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

//! Correlation between two assets.

pub mod bulk;
pub mod single;

use crate::{
    average, deviation,
    model::{ConstantModelType, DeviationModel},
};

/// The covariance of the centered prices over the product of their deviations.
///
/// A window where either asset does not move yields a non-finite value.
pub(crate) fn correlate_asset_prices(
    prices_asset_a: &[f64],
    prices_asset_b: &[f64],
    model: ConstantModelType,
    deviation_model: DeviationModel,
) -> f64 {
    let center_a = average::calculate(prices_asset_a, model);
    let center_b = average::calculate(prices_asset_b, model);
    let covariance = prices_asset_a
        .iter()
        .zip(prices_asset_b)
        .map(|(a, b)| (a - center_a) * (b - center_b))
        .sum::<f64>()
        / prices_asset_a.len() as f64;
    let deviation_a = deviation::calculate(prices_asset_a, deviation_model, center_a);
    let deviation_b = deviation::calculate(prices_asset_b, deviation_model, center_b);
    covariance / (deviation_a * deviation_b)
}
