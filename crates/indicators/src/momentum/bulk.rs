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
        check_less_than, check_min_length, check_non_empty, check_parallel, check_period,
        check_positive_f64, check_positive_usize,
    },
};

use crate::{
    average::{self, McGinleyDynamic},
    model::{ConstantModelType, DeviationModel},
    momentum::{self, ChaikinOscillator, McGinleyMacd, McGinleyValue, OnBalanceVolume},
    strength::AccumulationDistribution,
    window,
};

/// Calculates the relative strength index of every window of `period` prices.
///
/// # Errors
///
/// Returns an error if:
/// - `prices` is empty.
/// - `period` is zero or greater than the length of `prices`.
/// - `model` carries an invalid personalised smoothing constant.
pub fn relative_strength_index(
    prices: &[f64],
    model: ConstantModelType,
    period: usize,
) -> IndicatorResult<Vec<f64>> {
    check_non_empty(prices, "prices")?;
    model.validate()?;
    window::bulk(prices, period, |window| {
        momentum::relative_strength_index(window, model)
    })
}

/// Calculates the stochastic oscillator of every window of `period` prices.
///
/// # Errors
///
/// Returns an error if:
/// - `prices` is empty.
/// - `period` is zero or greater than the length of `prices`.
pub fn stochastic_oscillator(prices: &[f64], period: usize) -> IndicatorResult<Vec<f64>> {
    check_non_empty(prices, "prices")?;
    window::bulk(prices, period, momentum::stochastic_oscillator)
}

/// Smooths every window of `period` stochastic oscillator values into the slow stochastic.
///
/// # Errors
///
/// Returns an error if:
/// - `stochastics` is empty.
/// - `period` is zero or greater than the length of `stochastics`.
/// - `model` carries an invalid personalised smoothing constant.
pub fn slow_stochastic(
    stochastics: &[f64],
    model: ConstantModelType,
    period: usize,
) -> IndicatorResult<Vec<f64>> {
    check_non_empty(stochastics, "stochastics")?;
    model.validate()?;
    window::bulk(stochastics, period, |window| {
        average::calculate(window, model)
    })
}

/// Smooths every window of `period` slow stochastic values into the slowest stochastic.
///
/// # Errors
///
/// Returns an error if:
/// - `slow_stochastics` is empty.
/// - `period` is zero or greater than the length of `slow_stochastics`.
/// - `model` carries an invalid personalised smoothing constant.
pub fn slowest_stochastic(
    slow_stochastics: &[f64],
    model: ConstantModelType,
    period: usize,
) -> IndicatorResult<Vec<f64>> {
    check_non_empty(slow_stochastics, "slow_stochastics")?;
    model.validate()?;
    window::bulk(slow_stochastics, period, |window| {
        average::calculate(window, model)
    })
}

/// Calculates Williams %R for every window of `period` bars, using the close at the end of
/// each window.
///
/// # Errors
///
/// Returns an error if:
/// - `high` is empty, or `low` or `close` differ in length from it.
/// - `period` is zero or greater than the number of bars.
pub fn williams_percent_r(
    high: &[f64],
    low: &[f64],
    close: &[f64],
    period: usize,
) -> IndicatorResult<Vec<f64>> {
    check_parallel(&[("high", high), ("low", low), ("close", close)])?;
    window::bulk_range(high.len(), period, |range| {
        let latest_close = close[range.end - 1];
        momentum::williams_percent_r(&high[range.clone()], &low[range], latest_close)
    })
}

/// Calculates the money flow index of every window of `period` prices.
///
/// # Errors
///
/// Returns an error if:
/// - `prices` is empty or `volume` differs in length from it.
/// - `period` is zero or greater than the length of `prices`.
pub fn money_flow_index(
    prices: &[f64],
    volume: &[f64],
    period: usize,
) -> IndicatorResult<Vec<f64>> {
    check_parallel(&[("prices", prices), ("volume", volume)])?;
    window::bulk_range(prices.len(), period, |range| {
        momentum::money_flow_index(&prices[range.clone()], &volume[range])
    })
}

/// Calculates the rate of change between every pair of consecutive prices.
///
/// # Errors
///
/// Returns an error if `prices` has fewer than two values.
pub fn rate_of_change(prices: &[f64]) -> IndicatorResult<Vec<f64>> {
    check_min_length(prices, 2, "prices")?;
    window::bulk(prices, 2, |pair| momentum::rate_of_change(pair[1], pair[0]))
}

/// Calculates the running on-balance volume across `prices`, starting from `previous_obv`.
///
/// Produces one value per price after the first.
///
/// # Errors
///
/// Returns an error if:
/// - `prices` has fewer than two values.
/// - `volume` differs in length from `prices`.
pub fn on_balance_volume(
    prices: &[f64],
    volume: &[f64],
    previous_obv: f64,
) -> IndicatorResult<Vec<f64>> {
    check_parallel(&[("prices", prices), ("volume", volume)])?;
    check_min_length(prices, 2, "prices")?;
    let steps = (1..prices.len()).map(|i| (prices[i], prices[i - 1], volume[i]));
    Ok(window::fold(OnBalanceVolume::new(previous_obv), steps))
}

/// Calculates the commodity channel index of every window of `period` prices.
///
/// # Errors
///
/// Returns an error if:
/// - `prices` is empty.
/// - `period` is zero or greater than the length of `prices`.
/// - `multiplier` is not positive.
/// - `model` carries an invalid personalised smoothing constant.
pub fn commodity_channel_index(
    prices: &[f64],
    model: ConstantModelType,
    deviation_model: DeviationModel,
    multiplier: f64,
    period: usize,
) -> IndicatorResult<Vec<f64>> {
    check_non_empty(prices, "prices")?;
    check_positive_f64(multiplier, "multiplier")?;
    model.validate()?;
    window::bulk(prices, period, |window| {
        momentum::commodity_channel_index(window, model, deviation_model, multiplier)
    })
}

/// Calculates the McGinley dynamic commodity channel index of every window of `period` prices,
/// carrying the dynamic from window to window starting at `previous`.
///
/// # Errors
///
/// Returns an error if:
/// - `prices` is empty.
/// - `period` is zero or greater than the length of `prices`.
/// - `multiplier` is not positive.
pub fn mcginley_dynamic_commodity_channel_index(
    prices: &[f64],
    previous: Option<f64>,
    deviation_model: DeviationModel,
    multiplier: f64,
    period: usize,
) -> IndicatorResult<Vec<McGinleyValue>> {
    check_non_empty(prices, "prices")?;
    check_period(period, prices.len())?;
    check_positive_f64(multiplier, "multiplier")?;
    let dynamics = window::fold(
        McGinleyDynamic::new(period, previous),
        prices[period - 1..].iter().copied(),
    );
    Ok(prices
        .windows(period)
        .zip(dynamics)
        .map(|(window, mcginley_dynamic)| McGinleyValue {
            value: momentum::centered_commodity_channel_index(
                window,
                mcginley_dynamic,
                deviation_model,
                multiplier,
            ),
            mcginley_dynamic,
        })
        .collect())
}

/// Calculates the MACD line for every window of `long_period` prices.
///
/// # Errors
///
/// Returns an error if:
/// - `prices` is empty.
/// - `short_period` is zero or not less than `long_period`.
/// - `long_period` is greater than the length of `prices`.
/// - Either model carries an invalid personalised smoothing constant.
pub fn macd_line(
    prices: &[f64],
    short_period: usize,
    short_model: ConstantModelType,
    long_period: usize,
    long_model: ConstantModelType,
) -> IndicatorResult<Vec<f64>> {
    check_non_empty(prices, "prices")?;
    check_positive_usize(short_period, "short_period")?;
    check_less_than(short_period, long_period, "short_period", "long_period")?;
    short_model.validate()?;
    long_model.validate()?;
    window::bulk(prices, long_period, |window| {
        momentum::macd_line(window, short_period, short_model, long_model)
    })
}

/// Smooths every window of `period` MACD line values into the signal line.
///
/// # Errors
///
/// Returns an error if:
/// - `macds` is empty.
/// - `period` is zero or greater than the length of `macds`.
/// - `model` carries an invalid personalised smoothing constant.
pub fn signal_line(
    macds: &[f64],
    model: ConstantModelType,
    period: usize,
) -> IndicatorResult<Vec<f64>> {
    check_non_empty(macds, "macds")?;
    model.validate()?;
    window::bulk(macds, period, |window| average::calculate(window, model))
}

/// Calculates the McGinley dynamic MACD line for every window of `long_period` prices.
///
/// Both dynamics carry from window to window, starting at `previous_short` and
/// `previous_long`.
///
/// # Errors
///
/// Returns an error if:
/// - `prices` is empty.
/// - `short_period` is zero or not less than `long_period`.
/// - `long_period` is greater than the length of `prices`.
pub fn mcginley_dynamic_macd_line(
    prices: &[f64],
    short_period: usize,
    previous_short: Option<f64>,
    long_period: usize,
    previous_long: Option<f64>,
) -> IndicatorResult<Vec<McGinleyMacd>> {
    check_non_empty(prices, "prices")?;
    check_positive_usize(short_period, "short_period")?;
    check_less_than(short_period, long_period, "short_period", "long_period")?;
    check_period(long_period, prices.len())?;

    let latest_prices = &prices[long_period - 1..];
    let shorts = window::fold(
        McGinleyDynamic::new(short_period, previous_short),
        latest_prices.iter().copied(),
    );
    let longs = window::fold(
        McGinleyDynamic::new(long_period, previous_long),
        latest_prices.iter().copied(),
    );
    Ok(shorts
        .into_iter()
        .zip(longs)
        .map(|(short_mcginley, long_mcginley)| McGinleyMacd {
            macd: short_mcginley - long_mcginley,
            short_mcginley,
            long_mcginley,
        })
        .collect())
}

/// Calculates the Chaikin oscillator for every window of `long_period` bars.
///
/// The accumulation distribution line is built once across all bars from `previous_ad`.
///
/// # Errors
///
/// Returns an error if:
/// - `high` is empty, or `low`, `close` or `volume` differ in length from it.
/// - `short_period` is zero or not less than `long_period`.
/// - `long_period` is greater than the number of bars.
/// - Either model carries an invalid personalised smoothing constant.
#[allow(clippy::too_many_arguments)]
pub fn chaikin_oscillator(
    high: &[f64],
    low: &[f64],
    close: &[f64],
    volume: &[f64],
    short_period: usize,
    long_period: usize,
    previous_ad: f64,
    short_model: ConstantModelType,
    long_model: ConstantModelType,
) -> IndicatorResult<Vec<ChaikinOscillator>> {
    check_parallel(&[
        ("high", high),
        ("low", low),
        ("close", close),
        ("volume", volume),
    ])?;
    check_positive_usize(short_period, "short_period")?;
    check_less_than(short_period, long_period, "short_period", "long_period")?;
    check_period(long_period, high.len())?;
    short_model.validate()?;
    long_model.validate()?;

    let bars = (0..high.len()).map(|i| (high[i], low[i], close[i], volume[i]));
    let accumulation_distribution = window::fold(AccumulationDistribution::new(previous_ad), bars);
    window::bulk(&accumulation_distribution, long_period, |window| {
        momentum::chaikin_oscillator(window, short_period, short_model, long_model)
    })
}

/// Calculates the percentage price oscillator for every window of `long_period` prices.
///
/// # Errors
///
/// Returns an error if:
/// - `prices` is empty.
/// - `short_period` is zero or not less than `long_period`.
/// - `long_period` is greater than the length of `prices`.
/// - `model` carries an invalid personalised smoothing constant.
pub fn percentage_price_oscillator(
    prices: &[f64],
    short_period: usize,
    long_period: usize,
    model: ConstantModelType,
) -> IndicatorResult<Vec<f64>> {
    check_non_empty(prices, "prices")?;
    check_positive_usize(short_period, "short_period")?;
    check_less_than(short_period, long_period, "short_period", "long_period")?;
    model.validate()?;
    window::bulk(prices, long_period, |window| {
        momentum::percentage_price_oscillator(window, short_period, model)
    })
}

/// Calculates the Chande momentum oscillator of every window of `period` prices.
///
/// # Errors
///
/// Returns an error if:
/// - `prices` is empty.
/// - `period` is less than two or greater than the length of `prices`.
pub fn chande_momentum_oscillator(prices: &[f64], period: usize) -> IndicatorResult<Vec<f64>> {
    check_non_empty(prices, "prices")?;
    check_period(period, prices.len())?;
    check_min_length(&prices[..period], 2, "prices")?;
    window::bulk(prices, period, momentum::chande_momentum_oscillator)
}
