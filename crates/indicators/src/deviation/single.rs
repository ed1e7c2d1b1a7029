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

use crate::{deviation, model::DeviationModel, window};

/// Calculates the dispersion of `prices` around `center` under `model`.
///
/// # Errors
///
/// Returns an error if `prices` is empty.
pub fn deviation(prices: &[f64], model: DeviationModel, center: f64) -> IndicatorResult<f64> {
    check_non_empty(prices, "prices")?;
    window::single(prices, |window| deviation::calculate(window, model, center))
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;
    use techan_core::{IndicatorError, approx_eq};

    use super::*;
    use crate::stubs::*;

    #[rstest]
    fn test_standard_deviation(prices: Vec<f64>) {
        let value = deviation(&prices, DeviationModel::StandardDeviation, 101.0).unwrap();
        assert!(approx_eq!(f64, value, 2.0_f64.sqrt(), epsilon = 1e-12));
    }

    #[rstest]
    fn test_deviation_empty() {
        assert_eq!(
            deviation(&[], DeviationModel::MeanAbsoluteDeviation, 0.0),
            Err(IndicatorError::EmptyInput { param: "prices" })
        );
    }
}
