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
    average::McGinleyDynamic,
    candle::{self, Bands, IchimokuCloud, Supertrend},
    indicator::Accumulator,
    model::{ConstantModelType, DeviationModel},
    window,
};

/// Calculates moving constant envelopes for every window of `period` prices.
///
/// # Errors
///
/// Returns an error if:
/// - `prices` is empty.
/// - `period` is zero or greater than the length of `prices`.
/// - `difference` is not positive.
/// - `model` carries an invalid personalised smoothing constant.
pub fn moving_constant_envelopes(
    prices: &[f64],
    model: ConstantModelType,
    difference: f64,
    period: usize,
) -> IndicatorResult<Vec<Bands>> {
    check_non_empty(prices, "prices")?;
    check_positive_f64(difference, "difference")?;
    model.validate()?;
    window::bulk(prices, period, |window| {
        candle::moving_constant_envelopes(window, model, difference)
    })
}

/// Calculates McGinley dynamic envelopes for every window of `period` prices, carrying the
/// dynamic from window to window starting at `previous`.
///
/// # Errors
///
/// Returns an error if:
/// - `prices` is empty.
/// - `period` is zero or greater than the length of `prices`.
/// - `difference` is not positive.
pub fn mcginley_dynamic_envelopes(
    prices: &[f64],
    difference: f64,
    previous: Option<f64>,
    period: usize,
) -> IndicatorResult<Vec<Bands>> {
    check_non_empty(prices, "prices")?;
    check_period(period, prices.len())?;
    check_positive_f64(difference, "difference")?;
    let dynamics = window::fold(
        McGinleyDynamic::new(period, previous),
        prices[period - 1..].iter().copied(),
    );
    Ok(dynamics
        .into_iter()
        .map(|middle| Bands::envelope(middle, difference))
        .collect())
}

/// Calculates moving constant bands for every window of `period` prices.
///
/// # Errors
///
/// Returns an error if:
/// - `prices` is empty.
/// - `period` is zero or greater than the length of `prices`.
/// - `multiplier` is not positive.
/// - `model` carries an invalid personalised smoothing constant.
pub fn moving_constant_bands(
    prices: &[f64],
    model: ConstantModelType,
    deviation_model: DeviationModel,
    multiplier: f64,
    period: usize,
) -> IndicatorResult<Vec<Bands>> {
    check_non_empty(prices, "prices")?;
    check_positive_f64(multiplier, "multiplier")?;
    model.validate()?;
    window::bulk(prices, period, |window| {
        candle::moving_constant_bands(window, model, deviation_model, multiplier)
    })
}

/// Calculates McGinley dynamic bands for every window of `period` prices, carrying the
/// dynamic from window to window starting at `previous`.
///
/// # Errors
///
/// Returns an error if:
/// - `prices` is empty.
/// - `period` is zero or greater than the length of `prices`.
/// - `multiplier` is not positive.
pub fn mcginley_dynamic_bands(
    prices: &[f64],
    deviation_model: DeviationModel,
    multiplier: f64,
    previous: Option<f64>,
    period: usize,
) -> IndicatorResult<Vec<Bands>> {
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
        .map(|(window, dynamic)| {
            candle::mcginley_dynamic_bands(window, deviation_model, multiplier, dynamic)
        })
        .collect())
}

/// Calculates the Ichimoku cloud for every window spanning the longest of the three periods.
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
) -> IndicatorResult<Vec<IchimokuCloud>> {
    check_parallel(&[("high", high), ("low", low), ("close", close)])?;
    for period in [conversion_period, base_period, span_b_period] {
        check_period(period, high.len())?;
    }
    let period = conversion_period.max(base_period).max(span_b_period);
    window::bulk_range(high.len(), period, |range| {
        candle::ichimoku_cloud(
            &high[range.clone()],
            &low[range.clone()],
            &close[range],
            conversion_period,
            base_period,
            span_b_period,
        )
    })
}

/// Calculates the Donchian channels for every window of `period` bars.
///
/// # Errors
///
/// Returns an error if:
/// - `high` is empty or `low` differs in length from it.
/// - `period` is zero or greater than the number of bars.
pub fn donchian_channels(high: &[f64], low: &[f64], period: usize) -> IndicatorResult<Vec<Bands>> {
    check_parallel(&[("high", high), ("low", low)])?;
    window::bulk_range(high.len(), period, |range| {
        candle::donchian_channels(&high[range.clone()], &low[range])
    })
}

/// Calculates the Keltner channel for every window of `period` bars.
///
/// # Errors
///
/// Returns an error if:
/// - `high` is empty, or `low` or `close` differ in length from it.
/// - `period` is zero or greater than the number of bars.
/// - `multiplier` is not positive.
/// - Either model carries an invalid personalised smoothing constant.
pub fn keltner_channel(
    high: &[f64],
    low: &[f64],
    close: &[f64],
    model: ConstantModelType,
    atr_model: ConstantModelType,
    multiplier: f64,
    period: usize,
) -> IndicatorResult<Vec<Bands>> {
    check_parallel(&[("high", high), ("low", low), ("close", close)])?;
    check_positive_f64(multiplier, "multiplier")?;
    model.validate()?;
    atr_model.validate()?;
    window::bulk_range(high.len(), period, |range| {
        candle::keltner_channel(
            &high[range.clone()],
            &low[range.clone()],
            &close[range],
            model,
            atr_model,
            multiplier,
        )
    })
}

/// Calculates the supertrend stop for every window of `period` bars.
///
/// The trend is seeded from the first window and flips whenever a close crosses the band on
/// the opposite side, after which the stop trails the other band.
///
/// # Errors
///
/// Returns an error if:
/// - `high` is empty, or `low` or `close` differ in length from it.
/// - `period` is zero or greater than the number of bars.
/// - `multiplier` is not positive.
/// - `model` carries an invalid personalised smoothing constant.
pub fn supertrend(
    high: &[f64],
    low: &[f64],
    close: &[f64],
    model: ConstantModelType,
    multiplier: f64,
    period: usize,
) -> IndicatorResult<Vec<f64>> {
    check_parallel(&[("high", high), ("low", low), ("close", close)])?;
    check_positive_f64(multiplier, "multiplier")?;
    model.validate()?;

    let inputs = window::bulk_range(high.len(), period, |range| {
        candle::supertrend_input(
            &high[range.clone()],
            &low[range.clone()],
            &close[range],
            model,
            multiplier,
        )
    })?;

    let seed = Supertrend::seed(inputs[0]);
    let mut values = Vec::with_capacity(inputs.len());
    values.push(seed.value());
    values.extend(window::fold(seed, inputs[1..].iter().copied()));
    Ok(values)
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;
    use techan_core::{IndicatorError, approx_eq};

    use super::*;
    use crate::{candle::single, stubs::*};

    fn assert_bands(actual: &[Bands], expected: &[(f64, f64, f64)]) {
        assert_eq!(actual.len(), expected.len());
        for (bands, (lower, middle, upper)) in actual.iter().zip(expected) {
            assert!(approx_eq!(f64, bands.lower, *lower, epsilon = 1e-9), "{bands:?}");
            assert!(approx_eq!(f64, bands.middle, *middle, epsilon = 1e-9), "{bands:?}");
            assert!(approx_eq!(f64, bands.upper, *upper, epsilon = 1e-9), "{bands:?}");
        }
    }

    #[rstest]
    fn test_moving_constant_envelopes(prices: Vec<f64>) {
        let bands =
            moving_constant_envelopes(&prices, ConstantModelType::Simple, 3.0, 3).unwrap();
        assert_bands(
            &bands,
            &[
                (98.616_666_666_666_67, 101.666_666_666_666_67, 104.716_666_666_666_67),
                (98.94, 102.0, 105.06),
                (97.97, 101.0, 104.03),
            ],
        );
    }

    #[rstest]
    fn test_mcginley_dynamic_envelopes(prices: Vec<f64>) {
        let bands = mcginley_dynamic_envelopes(&prices, 3.0, None, 3).unwrap();
        assert_bands(
            &bands,
            &[
                (99.91, 103.0, 106.09),
                (99.210_570_607_577_55, 102.278_938_770_698_5, 105.347_306_933_819_45),
                (98.002_790_531_870_03, 101.033_804_672_030_97, 104.064_818_812_191_9),
            ],
        );
    }

    #[rstest]
    fn test_moving_constant_bands(prices: Vec<f64>) {
        let bands = moving_constant_bands(
            &prices,
            ConstantModelType::Exponential,
            DeviationModel::MeanAbsoluteDeviation,
            2.0,
            3,
        )
        .unwrap();
        assert_bands(
            &bands,
            &[
                (100.095_238_095_238_1, 102.285_714_285_714_29, 104.476_190_476_190_48),
                (100.190_476_190_476_18, 101.714_285_714_285_71, 103.238_095_238_095_24),
                (96.904_761_904_761_9, 100.142_857_142_857_14, 103.380_952_380_952_38),
            ],
        );
    }

    #[rstest]
    fn test_mcginley_dynamic_bands(prices: Vec<f64>) {
        let bands =
            mcginley_dynamic_bands(&prices, DeviationModel::StandardDeviation, 2.0, None, 3)
                .unwrap();
        assert_bands(
            &bands,
            &[
                (99.348_516_283_298_89, 103.0, 106.651_483_716_701_11),
                (100.553_281_209_691_15, 102.278_938_770_698_5, 104.004_596_331_705_86),
                (97.767_118_631_091_14, 101.033_804_672_030_97, 104.300_490_712_970_8),
            ],
        );
    }

    #[rstest]
    fn test_ichimoku_cloud(high: Vec<f64>, low: Vec<f64>, close: Vec<f64>) {
        let clouds = ichimoku_cloud(&high, &low, &close, 2, 3, 4).unwrap();
        assert_eq!(clouds.len(), 2);
        assert_eq!(
            clouds[0],
            IchimokuCloud {
                leading_span_a: 190.75,
                leading_span_b: 192.0,
                base_line: 192.0,
                conversion_line: 189.5,
                lagging_span: 200.0,
            }
        );
        assert_eq!(
            clouds[1],
            single::ichimoku_cloud(&high[1..], &low[1..], &close[1..], 2, 3, 4).unwrap()
        );
    }

    #[rstest]
    fn test_donchian_channels(high: Vec<f64>, low: Vec<f64>) {
        let bands = donchian_channels(&high, &low, 3).unwrap();
        assert_eq!(
            bands,
            vec![
                Bands::new(175.0, 192.5, 210.0),
                Bands::new(174.0, 192.0, 210.0),
                Bands::new(174.0, 189.5, 205.0),
            ]
        );
    }

    #[rstest]
    fn test_keltner_channel(high: Vec<f64>, low: Vec<f64>, close: Vec<f64>) {
        let bands = keltner_channel(
            &high,
            &low,
            &close,
            ConstantModelType::Exponential,
            ConstantModelType::Simple,
            2.0,
            3,
        )
        .unwrap();
        assert_bands(
            &bands,
            &[
                (167.761_904_761_904_76, 199.761_904_761_904_76, 231.761_904_761_904_76),
                (165.333_333_333_333_31, 191.333_333_333_333_31, 217.333_333_333_333_31),
                (166.476_190_476_190_45, 186.476_190_476_190_45, 206.476_190_476_190_45),
            ],
        );
    }

    #[rstest]
    fn test_supertrend(high: Vec<f64>, low: Vec<f64>, close: Vec<f64>) {
        let values = supertrend(&high, &low, &close, ConstantModelType::Simple, 2.0, 3).unwrap();
        assert_eq!(values, vec![224.5, 218.0, 209.5]);
    }

    #[rstest]
    fn test_supertrend_flips_to_lower_band(
        extended_high: Vec<f64>,
        extended_low: Vec<f64>,
        extended_close: Vec<f64>,
    ) {
        let values = supertrend(
            &extended_high,
            &extended_low,
            &extended_close,
            ConstantModelType::Simple,
            1.0,
            3,
        )
        .unwrap();
        let expected = [
            208.5,
            205.0,
            199.5,
            190.0,
            190.0,
            190.0,
            147.833_333_333_333_34,
            165.833_333_333_333_34,
        ];
        assert_eq!(values.len(), expected.len());
        for (value, expected) in values.iter().zip(expected) {
            assert!(approx_eq!(f64, *value, expected, epsilon = 1e-9));
        }
    }

    #[rstest]
    fn test_supertrend_full_period_matches_single(
        high: Vec<f64>,
        low: Vec<f64>,
        close: Vec<f64>,
    ) {
        let values = supertrend(&high, &low, &close, ConstantModelType::Simple, 2.0, 5).unwrap();
        let value = single::supertrend(&high, &low, &close, ConstantModelType::Simple, 2.0).unwrap();
        assert_eq!(values, vec![value]);
    }

    #[rstest]
    fn test_donchian_period_zero(high: Vec<f64>, low: Vec<f64>) {
        assert_eq!(
            donchian_channels(&high, &low, 0),
            Err(IndicatorError::InvalidPeriod {
                period: 0,
                length: 5
            })
        );
    }
}
