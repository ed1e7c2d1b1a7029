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
    correctness::{
        check_less_than, check_min_length, check_non_empty, check_parallel, check_positive_f64,
        check_positive_usize,
    },
};

use crate::{
    average,
    indicator::Accumulator,
    model::{ConstantModelType, DeviationModel},
    momentum::{self, ChaikinOscillator, McGinleyMacd, McGinleyValue, OnBalanceVolume},
    strength::AccumulationDistribution,
    window,
};

/// Calculates the relative strength index of `prices`, from 0 to 100.
///
/// Gains and losses are averaged separately with `model`. No gains yields 0 and gains without
/// losses yields 100.
///
/// # Errors
///
/// Returns an error if:
/// - `prices` is empty.
/// - `model` carries an invalid personalised smoothing constant.
pub fn relative_strength_index(prices: &[f64], model: ConstantModelType) -> IndicatorResult<f64> {
    check_non_empty(prices, "prices")?;
    model.validate()?;
    window::single(prices, |window| {
        momentum::relative_strength_index(window, model)
    })
}

/// Calculates where the latest price sits within the range of `prices`, from 0 to 100.
///
/// # Errors
///
/// Returns an error if `prices` is empty.
pub fn stochastic_oscillator(prices: &[f64]) -> IndicatorResult<f64> {
    check_non_empty(prices, "prices")?;
    window::single(prices, momentum::stochastic_oscillator)
}

/// Smooths stochastic oscillator values into the slow stochastic.
///
/// # Errors
///
/// Returns an error if:
/// - `stochastics` is empty.
/// - `model` carries an invalid personalised smoothing constant.
pub fn slow_stochastic(stochastics: &[f64], model: ConstantModelType) -> IndicatorResult<f64> {
    check_non_empty(stochastics, "stochastics")?;
    model.validate()?;
    window::single(stochastics, |window| average::calculate(window, model))
}

/// Smooths slow stochastic values into the slowest stochastic.
///
/// # Errors
///
/// Returns an error if:
/// - `slow_stochastics` is empty.
/// - `model` carries an invalid personalised smoothing constant.
pub fn slowest_stochastic(
    slow_stochastics: &[f64],
    model: ConstantModelType,
) -> IndicatorResult<f64> {
    check_non_empty(slow_stochastics, "slow_stochastics")?;
    model.validate()?;
    window::single(slow_stochastics, |window| average::calculate(window, model))
}

/// Calculates Williams %R for `close` against the range of the bars, from -100 to 0.
///
/// # Errors
///
/// Returns an error if `high` is empty or `low` differs in length from it.
pub fn williams_percent_r(high: &[f64], low: &[f64], close: f64) -> IndicatorResult<f64> {
    check_parallel(&[("high", high), ("low", low)])?;
    Ok(momentum::williams_percent_r(high, low, close))
}

/// Calculates the money flow index of `prices` weighted by `volume`, from 0 to 100.
///
/// A raw money flow counts as positive when it exceeds the previous raw money flow and as
/// negative when it falls below it.
///
/// # Errors
///
/// Returns an error if `prices` is empty or `volume` differs in length from it.
pub fn money_flow_index(prices: &[f64], volume: &[f64]) -> IndicatorResult<f64> {
    check_parallel(&[("prices", prices), ("volume", volume)])?;
    Ok(momentum::money_flow_index(prices, volume))
}

/// Calculates the percentage change from `previous_price` to `current_price`.
#[must_use]
pub fn rate_of_change(current_price: f64, previous_price: f64) -> f64 {
    momentum::rate_of_change(current_price, previous_price)
}

/// Calculates the on-balance volume after one price move, starting from `previous_obv`.
#[must_use]
pub fn on_balance_volume(
    current_price: f64,
    previous_price: f64,
    current_volume: f64,
    previous_obv: f64,
) -> f64 {
    OnBalanceVolume::new(previous_obv)
        .step((current_price, previous_price, current_volume))
        .value()
}

/// Calculates the commodity channel index of `prices`.
///
/// The latest price is measured from the moving constant in units of `multiplier` deviations.
///
/// # Errors
///
/// Returns an error if:
/// - `prices` is empty.
/// - `multiplier` is not positive.
/// - `model` carries an invalid personalised smoothing constant.
pub fn commodity_channel_index(
    prices: &[f64],
    model: ConstantModelType,
    deviation_model: DeviationModel,
    multiplier: f64,
) -> IndicatorResult<f64> {
    check_non_empty(prices, "prices")?;
    check_positive_f64(multiplier, "multiplier")?;
    model.validate()?;
    Ok(momentum::commodity_channel_index(
        prices,
        model,
        deviation_model,
        multiplier,
    ))
}

/// Calculates the commodity channel index of `prices` around the McGinley dynamic.
///
/// # Errors
///
/// Returns an error if:
/// - `prices` is empty.
/// - `multiplier` is not positive.
pub fn mcginley_dynamic_commodity_channel_index(
    prices: &[f64],
    previous: Option<f64>,
    deviation_model: DeviationModel,
    multiplier: f64,
) -> IndicatorResult<McGinleyValue> {
    check_non_empty(prices, "prices")?;
    check_positive_f64(multiplier, "multiplier")?;
    let mcginley_dynamic = average::mcginley(prices[prices.len() - 1], previous, prices.len());
    Ok(McGinleyValue {
        value: momentum::centered_commodity_channel_index(
            prices,
            mcginley_dynamic,
            deviation_model,
            multiplier,
        ),
        mcginley_dynamic,
    })
}

/// Calculates the MACD line: the short average of the last `short_period` prices less the long
/// average of all of them.
///
/// # Errors
///
/// Returns an error if:
/// - `prices` is empty.
/// - `short_period` is zero or not less than the length of `prices`.
/// - Either model carries an invalid personalised smoothing constant.
pub fn macd_line(
    prices: &[f64],
    short_period: usize,
    short_model: ConstantModelType,
    long_model: ConstantModelType,
) -> IndicatorResult<f64> {
    check_non_empty(prices, "prices")?;
    check_positive_usize(short_period, "short_period")?;
    check_less_than(short_period, prices.len(), "short_period", "prices")?;
    short_model.validate()?;
    long_model.validate()?;
    Ok(momentum::macd_line(
        prices,
        short_period,
        short_model,
        long_model,
    ))
}

/// Smooths MACD line values into the signal line.
///
/// # Errors
///
/// Returns an error if:
/// - `macds` is empty.
/// - `model` carries an invalid personalised smoothing constant.
pub fn signal_line(macds: &[f64], model: ConstantModelType) -> IndicatorResult<f64> {
    check_non_empty(macds, "macds")?;
    model.validate()?;
    window::single(macds, |window| average::calculate(window, model))
}

/// Calculates the MACD line from a short and a long McGinley dynamic of the latest price.
///
/// The long dynamic uses the length of `prices` as its period.
///
/// # Errors
///
/// Returns an error if:
/// - `prices` is empty.
/// - `short_period` is zero or not less than the length of `prices`.
pub fn mcginley_dynamic_macd_line(
    prices: &[f64],
    short_period: usize,
    previous_short: Option<f64>,
    previous_long: Option<f64>,
) -> IndicatorResult<McGinleyMacd> {
    check_non_empty(prices, "prices")?;
    check_positive_usize(short_period, "short_period")?;
    check_less_than(short_period, prices.len(), "short_period", "prices")?;
    Ok(momentum::mcginley_dynamic_macd_line(
        prices[prices.len() - 1],
        short_period,
        previous_short,
        prices.len(),
        previous_long,
    ))
}

/// Calculates the Chaikin oscillator over all bars.
///
/// The accumulation distribution line is built across the bars from `previous_ad`, then
/// reduced like a MACD line with the short average over its last `short_period` values.
///
/// # Errors
///
/// Returns an error if:
/// - `high` is empty, or `low`, `close` or `volume` differ in length from it.
/// - `short_period` is zero or not less than the number of bars.
/// - Either model carries an invalid personalised smoothing constant.
#[allow(clippy::too_many_arguments)]
pub fn chaikin_oscillator(
    high: &[f64],
    low: &[f64],
    close: &[f64],
    volume: &[f64],
    short_period: usize,
    previous_ad: f64,
    short_model: ConstantModelType,
    long_model: ConstantModelType,
) -> IndicatorResult<ChaikinOscillator> {
    check_parallel(&[
        ("high", high),
        ("low", low),
        ("close", close),
        ("volume", volume),
    ])?;
    check_positive_usize(short_period, "short_period")?;
    check_less_than(short_period, high.len(), "short_period", "high")?;
    short_model.validate()?;
    long_model.validate()?;

    let bars = (0..high.len()).map(|i| (high[i], low[i], close[i], volume[i]));
    let accumulation_distribution = window::fold(AccumulationDistribution::new(previous_ad), bars);
    Ok(momentum::chaikin_oscillator(
        &accumulation_distribution,
        short_period,
        short_model,
        long_model,
    ))
}

/// Calculates the percentage price oscillator: the MACD line as a percentage of the long
/// average, with one model for both averages.
///
/// # Errors
///
/// Returns an error if:
/// - `prices` is empty.
/// - `short_period` is zero or not less than the length of `prices`.
/// - `model` carries an invalid personalised smoothing constant.
pub fn percentage_price_oscillator(
    prices: &[f64],
    short_period: usize,
    model: ConstantModelType,
) -> IndicatorResult<f64> {
    check_non_empty(prices, "prices")?;
    check_positive_usize(short_period, "short_period")?;
    check_less_than(short_period, prices.len(), "short_period", "prices")?;
    model.validate()?;
    Ok(momentum::percentage_price_oscillator(
        prices,
        short_period,
        model,
    ))
}

/// Calculates the Chande momentum oscillator of `prices`, from -100 to 100.
///
/// # Errors
///
/// Returns an error if `prices` has fewer than two values.
pub fn chande_momentum_oscillator(prices: &[f64]) -> IndicatorResult<f64> {
    check_min_length(prices, 2, "prices")?;
    Ok(momentum::chande_momentum_oscillator(prices))
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
    #[case(ConstantModelType::Simple, 42.857_142_857_142_854)]
    #[case(ConstantModelType::Exponential, 38.461_538_461_538_46)]
    fn test_relative_strength_index(
        prices: Vec<f64>,
        #[case] model: ConstantModelType,
        #[case] expected: f64,
    ) {
        let value = relative_strength_index(&prices, model).unwrap();
        assert!(approx_eq!(f64, value, expected, epsilon = 1e-9));
    }

    #[rstest]
    #[case(&[1.0, 2.0, 3.0], 100.0)]
    #[case(&[3.0, 2.0, 1.0], 0.0)]
    #[case(&[1.0, 1.0, 1.0], 0.0)]
    fn test_relative_strength_index_one_sided(#[case] prices: &[f64], #[case] expected: f64) {
        let value = relative_strength_index(prices, ConstantModelType::Simple).unwrap();
        assert_eq!(value, expected);
    }

    #[rstest]
    fn test_stochastic_oscillator(prices: Vec<f64>) {
        assert_eq!(stochastic_oscillator(&prices).unwrap(), 0.0);
        assert_eq!(stochastic_oscillator(&prices[..3]).unwrap(), 100.0);
    }

    #[rstest]
    fn test_slow_and_slowest_stochastic(prices: Vec<f64>) {
        assert_eq!(slow_stochastic(&prices, ConstantModelType::Simple).unwrap(), 101.0);
        assert_eq!(slowest_stochastic(&prices, ConstantModelType::Median).unwrap(), 101.0);
    }

    #[rstest]
    fn test_williams_percent_r(high: Vec<f64>, low: Vec<f64>) {
        let value = williams_percent_r(&high, &low, 188.0).unwrap();
        assert!(approx_eq!(f64, value, -61.111_111_111_111_114, epsilon = 1e-9));
    }

    #[rstest]
    fn test_money_flow_index(prices: Vec<f64>, volume: Vec<f64>) {
        let value = money_flow_index(&prices, &volume).unwrap();
        assert!(approx_eq!(f64, value, 56.771_463_119_709_786, epsilon = 1e-9));
    }

    #[rstest]
    fn test_rate_of_change() {
        assert_eq!(rate_of_change(102.0, 100.0), 2.0);
    }

    #[rstest]
    #[case(103.0, 102.0, 1200.0, 1500.0, 2700.0)]
    #[case(101.0, 103.0, 900.0, 2700.0, 1800.0)]
    #[case(101.0, 101.0, 900.0, 2700.0, 2700.0)]
    fn test_on_balance_volume(
        #[case] current_price: f64,
        #[case] previous_price: f64,
        #[case] current_volume: f64,
        #[case] previous_obv: f64,
        #[case] expected: f64,
    ) {
        let value = on_balance_volume(current_price, previous_price, current_volume, previous_obv);
        assert_eq!(value, expected);
    }

    #[rstest]
    fn test_commodity_channel_index(prices: Vec<f64>) {
        let value = commodity_channel_index(
            &prices,
            ConstantModelType::Simple,
            DeviationModel::MeanAbsoluteDeviation,
            0.015,
        )
        .unwrap();
        assert!(approx_eq!(f64, value, -111.111_111_111_111_11, epsilon = 1e-9));
    }

    #[rstest]
    fn test_commodity_channel_index_constant_window_is_not_finite() {
        let value = commodity_channel_index(
            &[5.0, 5.0, 5.0],
            ConstantModelType::Simple,
            DeviationModel::StandardDeviation,
            0.015,
        )
        .unwrap();
        assert!(value.is_nan());
    }

    #[rstest]
    fn test_mcginley_dynamic_commodity_channel_index(prices: Vec<f64>) {
        let result = mcginley_dynamic_commodity_channel_index(
            &prices,
            Some(101.0),
            DeviationModel::MeanAbsoluteDeviation,
            0.015,
        )
        .unwrap();
        assert!(approx_eq!(f64, result.value, -81.175_556_616_983_88, epsilon = 1e-9));
        assert!(approx_eq!(
            f64,
            result.mcginley_dynamic,
            100.566_684_017_352_94,
            epsilon = 1e-9
        ));
    }

    #[rstest]
    fn test_macd_line(prices: Vec<f64>) {
        let value = macd_line(
            &prices,
            3,
            ConstantModelType::Exponential,
            ConstantModelType::Exponential,
        )
        .unwrap();
        assert!(approx_eq!(f64, value, -0.468_517_264_725_818_45, epsilon = 1e-9));
    }

    #[rstest]
    fn test_macd_line_short_period_not_shorter(prices: Vec<f64>) {
        assert!(matches!(
            macd_line(
                &prices,
                5,
                ConstantModelType::Simple,
                ConstantModelType::Simple
            ),
            Err(IndicatorError::InvalidParameter {
                param: "short_period",
                ..
            })
        ));
    }

    #[rstest]
    fn test_signal_line(prices: Vec<f64>) {
        assert_eq!(signal_line(&prices, ConstantModelType::Simple).unwrap(), 101.0);
    }

    #[rstest]
    fn test_mcginley_dynamic_macd_line(prices: Vec<f64>) {
        let result = mcginley_dynamic_macd_line(&prices, 3, None, None).unwrap();
        assert_eq!(
            result,
            McGinleyMacd {
                macd: 0.0,
                short_mcginley: 99.0,
                long_mcginley: 99.0
            }
        );

        let result = mcginley_dynamic_macd_line(&prices, 3, Some(102.0), Some(101.0)).unwrap();
        assert!(approx_eq!(f64, result.macd, 0.306_482_070_438_747_2, epsilon = 1e-9));
        assert!(approx_eq!(
            f64,
            result.short_mcginley,
            100.873_166_087_791_69,
            epsilon = 1e-9
        ));
        assert!(approx_eq!(
            f64,
            result.long_mcginley,
            100.566_684_017_352_94,
            epsilon = 1e-9
        ));
    }

    #[rstest]
    fn test_chaikin_oscillator(
        high: Vec<f64>,
        low: Vec<f64>,
        close: Vec<f64>,
        volume: Vec<f64>,
    ) {
        let result = chaikin_oscillator(
            &high,
            &low,
            &close,
            &volume,
            2,
            0.0,
            ConstantModelType::Simple,
            ConstantModelType::Simple,
        )
        .unwrap();
        assert!(approx_eq!(f64, result.value, 796.166_666_666_666_7, epsilon = 1e-9));
        assert!(approx_eq!(
            f64,
            result.accumulation_distribution,
            2_635.833_333_333_333_5,
            epsilon = 1e-9
        ));

        let seeded = chaikin_oscillator(
            &high,
            &low,
            &close,
            &volume,
            3,
            100.0,
            ConstantModelType::Exponential,
            ConstantModelType::Simple,
        )
        .unwrap();
        assert!(approx_eq!(f64, seeded.value, 901.523_809_523_809_6, epsilon = 1e-9));
        assert!(approx_eq!(
            f64,
            seeded.accumulation_distribution,
            2_735.833_333_333_333_5,
            epsilon = 1e-9
        ));
    }

    #[rstest]
    fn test_percentage_price_oscillator(prices: Vec<f64>) {
        let value = percentage_price_oscillator(&prices, 3, ConstantModelType::Simple).unwrap();
        assert!(approx_eq!(f64, value, 0.0, epsilon = 1e-12));
    }

    #[rstest]
    fn test_chande_momentum_oscillator(prices: Vec<f64>) {
        let value = chande_momentum_oscillator(&prices).unwrap();
        assert!(approx_eq!(f64, value, -14.285_714_285_714_286, epsilon = 1e-9));
    }
}
