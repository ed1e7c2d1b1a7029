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

//! Rolling averaging over every window of a series.

use techan_core::{
    IndicatorResult,
    correctness::{check_non_empty, check_period},
};

use crate::{
    average::{self, McGinleyDynamic},
    model::ConstantModelType,
    window,
};

/// Calculates the moving constant of every window of `period` prices.
///
/// # Errors
///
/// Returns an error if:
/// - `prices` is empty.
/// - `period` is zero or greater than the length of `prices`.
/// - `model` carries an invalid personalised smoothing constant.
pub fn moving_average(
    prices: &[f64],
    model: ConstantModelType,
    period: usize,
) -> IndicatorResult<Vec<f64>> {
    check_non_empty(prices, "prices")?;
    model.validate()?;
    window::bulk(prices, period, |window| average::calculate(window, model))
}

/// Calculates the McGinley dynamic of every window of `period` prices.
///
/// Each window contributes its latest price and the dynamic carries over to the next window,
/// starting from `previous`.
///
/// # Errors
///
/// Returns an error if:
/// - `prices` is empty.
/// - `period` is zero or greater than the length of `prices`.
pub fn mcginley_dynamic(
    prices: &[f64],
    previous: Option<f64>,
    period: usize,
) -> IndicatorResult<Vec<f64>> {
    check_non_empty(prices, "prices")?;
    check_period(period, prices.len())?;
    let seed = McGinleyDynamic::new(period, previous);
    Ok(window::fold(seed, prices[period - 1..].iter().copied()))
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rstest::rstest;
    use strum::IntoEnumIterator;
    use techan_core::{IndicatorError, approx_eq};

    use super::*;
    use crate::{average::single, stubs::*};

    fn assert_all_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!(approx_eq!(f64, *a, *e, epsilon = 1e-9), "{a} != {e}");
        }
    }

    #[rstest]
    #[case(ConstantModelType::Simple, &[101.666_666_666_666_67, 102.0, 101.0])]
    #[case(ConstantModelType::Smoothed, &[102.052_631_578_947_37, 101.842_105_263_157_9, 100.473_684_210_526_33])]
    #[case(ConstantModelType::Exponential, &[102.285_714_285_714_29, 101.714_285_714_285_71, 100.142_857_142_857_14])]
    #[case(ConstantModelType::Median, &[102.0, 102.0, 101.0])]
    #[case(ConstantModelType::Mode, &[100.0, 101.0, 99.0])]
    fn test_moving_average(
        prices: Vec<f64>,
        #[case] model: ConstantModelType,
        #[case] expected: &[f64],
    ) {
        let values = moving_average(&prices, model, 3).unwrap();
        assert_all_close(&values, expected);
    }

    #[rstest]
    fn test_moving_average_period_too_long(prices: Vec<f64>) {
        assert_eq!(
            moving_average(&prices, ConstantModelType::Simple, 6),
            Err(IndicatorError::InvalidPeriod {
                period: 6,
                length: 5
            })
        );
    }

    #[rstest]
    fn test_mcginley_dynamic(prices: Vec<f64>) {
        let values = mcginley_dynamic(&prices, None, 3).unwrap();
        assert_all_close(&values, &[103.0, 102.278_938_770_698_5, 101.033_804_672_030_97]);
    }

    #[rstest]
    fn test_full_period_matches_single(prices: Vec<f64>) {
        for model in ConstantModelType::iter() {
            let model = match model {
                ConstantModelType::Personalised { .. } => ConstantModelType::Personalised {
                    alpha_num: 5,
                    alpha_den: 4,
                },
                other => other,
            };
            let bulk_values = moving_average(&prices, model, prices.len()).unwrap();
            let single_value = single::moving_average(&prices, model).unwrap();
            assert_eq!(bulk_values, vec![single_value]);
        }
    }

    proptest! {
        #[test]
        fn prop_bulk_window_matches_single(
            series in prop::collection::vec(1.0f64..1e4, 1..60),
            period in 1usize..60,
        ) {
            prop_assume!(period <= series.len());
            let values = moving_average(&series, ConstantModelType::Exponential, period).unwrap();
            for (start, value) in values.iter().enumerate() {
                let window = &series[start..start + period];
                let expected = single::moving_average(window, ConstantModelType::Exponential).unwrap();
                prop_assert_eq!(value.to_bits(), expected.to_bits());
            }
        }
    }
}
