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

//! Single-window averaging over a whole series.

use techan_core::{
    IndicatorResult,
    correctness::{check_non_empty, check_positive_usize},
};

use crate::{average, model::ConstantModelType, window};

/// Calculates the moving constant of `prices` under `model`.
///
/// # Errors
///
/// Returns an error if:
/// - `prices` is empty.
/// - `model` carries an invalid personalised smoothing constant.
pub fn moving_average(prices: &[f64], model: ConstantModelType) -> IndicatorResult<f64> {
    check_non_empty(prices, "prices")?;
    model.validate()?;
    window::single(prices, |window| average::calculate(window, model))
}

/// Calculates the McGinley dynamic of `latest_price` given the `previous` dynamic.
///
/// Without a previous value the latest price is returned.
///
/// # Errors
///
/// Returns an error if `period` is zero.
pub fn mcginley_dynamic(
    latest_price: f64,
    previous: Option<f64>,
    period: usize,
) -> IndicatorResult<f64> {
    check_positive_usize(period, "period")?;
    Ok(average::mcginley(latest_price, previous, period))
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
    fn test_moving_average_exponential(prices: Vec<f64>) {
        let value = moving_average(&prices, ConstantModelType::Exponential).unwrap();
        assert!(approx_eq!(f64, value, 100.611_374_407_582_96, epsilon = 1e-9));
    }

    #[rstest]
    fn test_moving_average_empty() {
        assert_eq!(
            moving_average(&[], ConstantModelType::Simple),
            Err(IndicatorError::EmptyInput { param: "prices" })
        );
    }

    #[rstest]
    fn test_moving_average_rejects_zero_denominator(prices: Vec<f64>) {
        let model = ConstantModelType::Personalised {
            alpha_num: 5,
            alpha_den: 0,
        };
        assert!(matches!(
            moving_average(&prices, model),
            Err(IndicatorError::InvalidParameter { .. })
        ));
    }

    #[rstest]
    fn test_mcginley_dynamic() {
        assert_eq!(mcginley_dynamic(100.0, None, 5).unwrap(), 100.0);
        assert!(approx_eq!(
            f64,
            mcginley_dynamic(99.0, Some(101.0), 5).unwrap(),
            100.566_684_017_352_94,
            epsilon = 1e-9
        ));
        assert!(mcginley_dynamic(99.0, Some(101.0), 0).is_err());
    }
}
