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
    correctness::{check_min_length, check_parallel, check_positive_usize},
};

use crate::{
    model::ConstantModelType,
    trend::{self, Aroon},
};

/// Calculates the Aroon up of `high`: how recently, as a percentage of the window, the
/// highest high occurred.
///
/// The most recent high wins ties.
///
/// # Errors
///
/// Returns an error if `high` has fewer than two values.
pub fn aroon_up(high: &[f64]) -> IndicatorResult<f64> {
    check_min_length(high, 2, "high")?;
    Ok(trend::aroon_up(high))
}

/// Calculates the Aroon down of `low`: how recently, as a percentage of the window, the
/// lowest low occurred.
///
/// The most recent low wins ties.
///
/// # Errors
///
/// Returns an error if `low` has fewer than two values.
pub fn aroon_down(low: &[f64]) -> IndicatorResult<f64> {
    check_min_length(low, 2, "low")?;
    Ok(trend::aroon_down(low))
}

/// Calculates the Aroon oscillator from an Aroon up and down.
#[must_use]
pub fn aroon_oscillator(aroon_up: f64, aroon_down: f64) -> f64 {
    aroon_up - aroon_down
}

/// Calculates the Aroon up, down and oscillator over all bars.
///
/// # Errors
///
/// Returns an error if:
/// - `high` has fewer than two values.
/// - `low` differs in length from `high`.
pub fn aroon_indicator(high: &[f64], low: &[f64]) -> IndicatorResult<Aroon> {
    check_parallel(&[("high", high), ("low", low)])?;
    check_min_length(high, 2, "high")?;
    Ok(trend::aroon_indicator(high, low))
}

/// Calculates the next stop of a long parabolic time/price system, never above `low`.
#[must_use]
pub fn long_parabolic_time_price_system(
    previous_sar: f64,
    extreme_point: f64,
    acceleration_factor: f64,
    low: f64,
) -> f64 {
    trend::long_parabolic_time_price_system(previous_sar, extreme_point, acceleration_factor, low)
}

/// Calculates the next stop of a short parabolic time/price system, never below `high`.
#[must_use]
pub fn short_parabolic_time_price_system(
    previous_sar: f64,
    extreme_point: f64,
    acceleration_factor: f64,
    high: f64,
) -> f64 {
    trend::short_parabolic_time_price_system(
        previous_sar,
        extreme_point,
        acceleration_factor,
        high,
    )
}

/// Calculates the volume price trend after one price move, starting from `previous_vpt`.
#[must_use]
pub fn volume_price_trend(
    current_price: f64,
    previous_price: f64,
    volume: f64,
    previous_vpt: f64,
) -> f64 {
    trend::volume_price_trend(current_price, previous_price, volume, previous_vpt)
}

/// Calculates the true strength index of `prices`.
///
/// Price changes are smoothed over every window of `first_period` with `first_model`, then
/// those smoothings are smoothed together with `second_model`.
///
/// # Errors
///
/// Returns an error if:
/// - `first_period` is zero.
/// - `prices` has no more than `first_period` values.
/// - Either model carries an invalid personalised smoothing constant.
pub fn true_strength_index(
    prices: &[f64],
    first_period: usize,
    first_model: ConstantModelType,
    second_model: ConstantModelType,
) -> IndicatorResult<f64> {
    check_positive_usize(first_period, "first_period")?;
    check_min_length(prices, first_period + 1, "prices")?;
    first_model.validate()?;
    second_model.validate()?;
    Ok(trend::true_strength_index(
        prices,
        first_period,
        first_model,
        second_model,
    ))
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
    fn test_aroon_up(high: Vec<f64>) {
        assert_eq!(aroon_up(&high).unwrap(), 25.0);
    }

    #[rstest]
    fn test_aroon_down(low: Vec<f64>) {
        assert_eq!(aroon_down(&low).unwrap(), 75.0);
    }

    #[rstest]
    fn test_aroon_latest_extreme_wins_ties() {
        assert_eq!(aroon_up(&[105.0, 101.0, 105.0, 103.0, 102.0]).unwrap(), 50.0);
        assert_eq!(aroon_down(&[95.0, 97.0, 99.0, 95.0, 98.0]).unwrap(), 75.0);
    }

    #[rstest]
    fn test_aroon_single_value() {
        assert_eq!(
            aroon_up(&[100.0]),
            Err(IndicatorError::InvalidPeriod {
                period: 2,
                length: 1
            })
        );
    }

    #[rstest]
    fn test_aroon_indicator(high: Vec<f64>, low: Vec<f64>) {
        let aroon = aroon_indicator(&high, &low).unwrap();
        assert_eq!(
            aroon,
            Aroon {
                up: 25.0,
                down: 75.0,
                oscillator: -50.0
            }
        );
        assert_eq!(aroon_oscillator(aroon.up, aroon.down), aroon.oscillator);
    }

    #[rstest]
    fn test_parabolic_time_price_system() {
        assert_eq!(long_parabolic_time_price_system(175.0, 210.0, 0.02, 200.0), 175.7);
        assert_eq!(long_parabolic_time_price_system(175.0, 210.0, 0.02, 174.0), 174.0);
        assert_eq!(short_parabolic_time_price_system(210.0, 174.0, 0.0, 185.0), 210.0);
        assert_eq!(short_parabolic_time_price_system(210.0, 174.0, 0.5, 195.0), 195.0);
    }

    #[rstest]
    fn test_volume_price_trend() {
        assert_eq!(volume_price_trend(102.0, 100.0, 1500.0, 0.0), 30.0);
    }

    #[rstest]
    fn test_true_strength_index(prices: Vec<f64>) {
        let tsi = true_strength_index(
            &prices,
            3,
            ConstantModelType::Simple,
            ConstantModelType::Simple,
        )
        .unwrap();
        assert!(approx_eq!(f64, tsi, -0.2, epsilon = 1e-9));
    }

    #[rstest]
    fn test_true_strength_index_first_period_too_long(prices: Vec<f64>) {
        assert_eq!(
            true_strength_index(
                &prices,
                5,
                ConstantModelType::Simple,
                ConstantModelType::Simple,
            ),
            Err(IndicatorError::InvalidPeriod {
                period: 6,
                length: 5
            })
        );
    }
}
