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
    window,
};

/// Calculates the correlation between two assets for every window of `period` prices.
///
/// # Errors
///
/// Returns an error if:
/// - `prices_asset_a` is empty or `prices_asset_b` differs in length from it.
/// - `period` is zero or greater than the number of prices.
/// - `model` carries an invalid personalised smoothing constant.
pub fn correlate_asset_prices(
    prices_asset_a: &[f64],
    prices_asset_b: &[f64],
    model: ConstantModelType,
    deviation_model: DeviationModel,
    period: usize,
) -> IndicatorResult<Vec<f64>> {
    check_parallel(&[
        ("prices_asset_a", prices_asset_a),
        ("prices_asset_b", prices_asset_b),
    ])?;
    model.validate()?;
    window::bulk_range(prices_asset_a.len(), period, |range| {
        correlation::correlate_asset_prices(
            &prices_asset_a[range.clone()],
            &prices_asset_b[range],
            model,
            deviation_model,
        )
    })
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;
    use techan_core::{IndicatorError, approx_eq};

    use super::*;
    use crate::{correlation::single, stubs::*};

    #[rstest]
    fn test_correlate_asset_prices(prices: Vec<f64>, close: Vec<f64>) {
        let values = correlate_asset_prices(
            &prices,
            &close,
            ConstantModelType::Simple,
            DeviationModel::StandardDeviation,
            3,
        )
        .unwrap();
        let expected = [0.973_222_701_448_379_3, 0.896_258_159_530_271_9, 0.832_239_719_563_823_8];
        assert_eq!(values.len(), expected.len());
        for (value, expected) in values.iter().zip(expected) {
            assert!(approx_eq!(f64, *value, expected, epsilon = 1e-9));
        }
    }

    #[rstest]
    fn test_correlate_asset_prices_full_period_matches_single(prices: Vec<f64>, close: Vec<f64>) {
        let model = ConstantModelType::Exponential;
        let deviation_model = DeviationModel::MeanAbsoluteDeviation;
        assert_eq!(
            correlate_asset_prices(&prices, &close, model, deviation_model, 5).unwrap(),
            vec![single::correlate_asset_prices(&prices, &close, model, deviation_model).unwrap()]
        );
    }

    #[rstest]
    fn test_correlate_asset_prices_period_too_long(prices: Vec<f64>, close: Vec<f64>) {
        assert_eq!(
            correlate_asset_prices(
                &prices,
                &close,
                ConstantModelType::Simple,
                DeviationModel::StandardDeviation,
                6,
            ),
            Err(IndicatorError::InvalidPeriod {
                period: 6,
                length: 5
            })
        );
    }
}
