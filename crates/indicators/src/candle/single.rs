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
    correctness::{check_non_empty, check_parallel, check_period, check_positive_f64},
};

use crate::{
    average,
    candle::{self, Bands, IchimokuCloud, Supertrend},
    indicator::Accumulator,
    model::{ConstantModelType, DeviationModel},
};

/// Calculates envelopes a fixed percentage `difference` either side of the moving constant.
///
/// # Errors
///
/// Returns an error if:
/// - `prices` is empty.
/// - `difference` is not positive.
/// - `model` carries an invalid personalised smoothing constant.
pub fn moving_constant_envelopes(
    prices: &[f64],
    model: ConstantModelType,
    difference: f64,
) -> IndicatorResult<Bands> {
    check_non_empty(prices, "prices")?;
    check_positive_f64(difference, "difference")?;
    model.validate()?;
    Ok(candle::moving_constant_envelopes(prices, model, difference))
}

/// Calculates envelopes a fixed percentage `difference` either side of the McGinley dynamic.
///
/// The dynamic uses the latest price, `previous` and the length of `prices` as its period.
///
/// # Errors
///
/// Returns an error if:
/// - `prices` is empty.
/// - `difference` is not positive.
pub fn mcginley_dynamic_envelopes(
    prices: &[f64],
    difference: f64,
    previous: Option<f64>,
) -> IndicatorResult<Bands> {
    check_non_empty(prices, "prices")?;
    check_positive_f64(difference, "difference")?;
    let middle = average::mcginley(prices[prices.len() - 1], previous, prices.len());
    Ok(Bands::envelope(middle, difference))
}

/// Calculates bands `multiplier` deviations either side of the moving constant.
///
/// # Errors
///
/// Returns an error if:
/// - `prices` is empty.
/// - `multiplier` is not positive.
/// - `model` carries an invalid personalised smoothing constant.
pub fn moving_constant_bands(
    prices: &[f64],
    model: ConstantModelType,
    deviation_model: DeviationModel,
    multiplier: f64,
) -> IndicatorResult<Bands> {
    check_non_empty(prices, "prices")?;
    check_positive_f64(multiplier, "multiplier")?;
    model.validate()?;
    Ok(candle::moving_constant_bands(
        prices,
        model,
        deviation_model,
        multiplier,
    ))
}

/// Calculates bands `multiplier` deviations either side of the McGinley dynamic.
///
/// # Errors
///
/// Returns an error if:
/// - `prices` is empty.
/// - `multiplier` is not positive.
pub fn mcginley_dynamic_bands(
    prices: &[f64],
    deviation_model: DeviationModel,
    multiplier: f64,
    previous: Option<f64>,
) -> IndicatorResult<Bands> {
    check_non_empty(prices, "prices")?;
    check_positive_f64(multiplier, "multiplier")?;
    let mcginley_dynamic = average::mcginley(prices[prices.len() - 1], previous, prices.len());
    Ok(candle::mcginley_dynamic_bands(
        prices,
        deviation_model,
        multiplier,
        mcginley_dynamic,
    ))
}

/// Calculates the Ichimoku cloud at the end of the bars.
///
/// # Errors
///
/// Returns an error if:
/// - `high` is empty, or `low` or `close` differ in length from it.
/// - Any period is zero or greater than the number of bars.
pub fn ichimoku_cloud(
    high: &[f64],
    low: &[f64],
    close: &[f64],
    conversion_period: usize,
    base_period: usize,
    span_b_period: usize,
) -> IndicatorResult<IchimokuCloud> {
    check_parallel(&[("high", high), ("low", low), ("close", close)])?;
    for period in [conversion_period, base_period, span_b_period] {
        check_period(period, high.len())?;
    }
    Ok(candle::ichimoku_cloud(
        high,
        low,
        close,
        conversion_period,
        base_period,
        span_b_period,
    ))
}

/// Calculates the Donchian channels: the lowest low, highest high and their midpoint.
///
/// # Errors
///
/// Returns an error if `high` is empty or `low` differs in length from it.
pub fn donchian_channels(high: &[f64], low: &[f64]) -> IndicatorResult<Bands> {
    check_parallel(&[("high", high), ("low", low)])?;
    Ok(candle::donchian_channels(high, low))
}

/// Calculates the Keltner channel: the moving constant of typical prices, `multiplier`
/// average true ranges wide.
///
/// # Errors
///
/// Returns an error if:
/// - `high` is empty, or `low` or `close` differ in length from it.
/// - `multiplier` is not positive.
/// - Either model carries an invalid personalised smoothing constant.
pub fn keltner_channel(
    high: &[f64],
    low: &[f64],
    close: &[f64],
    model: ConstantModelType,
    atr_model: ConstantModelType,
    multiplier: f64,
) -> IndicatorResult<Bands> {
    check_parallel(&[("high", high), ("low", low), ("close", close)])?;
    check_positive_f64(multiplier, "multiplier")?;
    model.validate()?;
    atr_model.validate()?;
    Ok(candle::keltner_channel(
        high, low, close, model, atr_model, multiplier,
    ))
}

/// Calculates the supertrend stop for a single window of bars.
///
/// Without a previous state the trend is long only if the close is above the basic upper band.
///
/// # Errors
///
/// Returns an error if:
/// - `high` is empty, or `low` or `close` differ in length from it.
/// - `multiplier` is not positive.
/// - `model` carries an invalid personalised smoothing constant.
pub fn supertrend(
    high: &[f64],
    low: &[f64],
    close: &[f64],
    model: ConstantModelType,
    multiplier: f64,
) -> IndicatorResult<f64> {
    check_parallel(&[("high", high), ("low", low), ("close", close)])?;
    check_positive_f64(multiplier, "multiplier")?;
    model.validate()?;
    let input = candle::supertrend_input(high, low, close, model, multiplier);
    Ok(Supertrend::seed(input).value())
}
