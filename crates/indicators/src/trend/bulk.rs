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
        check_min_length, check_non_empty, check_parallel, check_period, check_positive_usize,
    },
};

use crate::{
    average,
    indicator::Accumulator,
    model::{ConstantModelType, Position},
    other,
    trend::{self, Aroon, DirectionalMovement, ParabolicConfig, ParabolicSar, VolumePriceTrend},
    window,
};

fn check_aroon_period(values: &[f64], period: usize, param: &'static str) -> IndicatorResult<()> {
    check_period(period, values.len())?;
    check_min_length(&values[..period], 2, param)
}

/// Calculates the Aroon up of every window of `period` highs.
///
/// # Errors
///
/// Returns an error if:
/// - `high` is empty.
/// - `period` is less than two or greater than the length of `high`.
pub fn aroon_up(high: &[f64], period: usize) -> IndicatorResult<Vec<f64>> {
    check_aroon_period(high, period, "high")?;
    window::bulk(high, period, trend::aroon_up)
}

/// Calculates the Aroon down of every window of `period` lows.
///
/// # Errors
///
/// Returns an error if:
/// - `low` is empty.
/// - `period` is less than two or greater than the length of `low`.
pub fn aroon_down(low: &[f64], period: usize) -> IndicatorResult<Vec<f64>> {
    check_aroon_period(low, period, "low")?;
    window::bulk(low, period, trend::aroon_down)
}

/// Calculates the Aroon oscillator for each pair of Aroon up and down values.
///
/// # Errors
///
/// Returns an error if `aroon_up` is empty or `aroon_down` differs in length from it.
pub fn aroon_oscillator(aroon_up: &[f64], aroon_down: &[f64]) -> IndicatorResult<Vec<f64>> {
    check_parallel(&[("aroon_up", aroon_up), ("aroon_down", aroon_down)])?;
    Ok(aroon_up
        .iter()
        .zip(aroon_down)
        .map(|(up, down)| up - down)
        .collect())
}

/// Calculates the Aroon up, down and oscillator for every window of `period` bars.
///
/// # Errors
///
/// Returns an error if:
/// - `high` is empty or `low` differs in length from it.
/// - `period` is less than two or greater than the number of bars.
pub fn aroon_indicator(high: &[f64], low: &[f64], period: usize) -> IndicatorResult<Vec<Aroon>> {
    check_parallel(&[("high", high), ("low", low)])?;
    check_aroon_period(high, period, "high")?;
    window::bulk_range(high.len(), period, |range| {
        trend::aroon_indicator(&high[range.clone()], &low[range])
    })
}

/// Calculates the parabolic stop and reverse for every bar.
///
/// The system starts in `start_position` on the first bar, from `previous_sar` if given and
/// otherwise from the bar's low (long) or high (short). The acceleration factor follows
/// `config`.
///
/// # Errors
///
/// Returns an error if:
/// - `high` is empty or `low` differs in length from it.
/// - `config` is invalid.
pub fn parabolic_time_price_system(
    high: &[f64],
    low: &[f64],
    config: ParabolicConfig,
    start_position: Position,
    previous_sar: Option<f64>,
) -> IndicatorResult<Vec<f64>> {
    check_parallel(&[("high", high), ("low", low)])?;
    config.validate()?;

    let seed = ParabolicSar::seed(config, start_position, high[0], low[0], previous_sar);
    let bars = high[1..].iter().copied().zip(low[1..].iter().copied());
    let mut values = Vec::with_capacity(high.len());
    values.push(seed.value());
    values.extend(window::fold(seed, bars));
    Ok(values)
}

/// Calculates the directional movement system for every bar once enough history exists.
///
/// Directional movement and true range are taken per bar against the previous bar. The
/// directional indicators divide their sums over `period`. The ADX applies `model` to the
/// directional index over `period`, and the ADXR averages the current ADX with the one
/// `period - 1` steps back.
/// Produces `len - 1 - 3 * (period - 1)` values.
///
/// # Errors
///
/// Returns an error if:
/// - `high` is empty, or `low` or `close` differ in length from it.
/// - `period` is zero.
/// - There are fewer than `3 * period - 1` bars.
/// - `model` carries an invalid personalised smoothing constant.
pub fn directional_movement_system(
    high: &[f64],
    low: &[f64],
    close: &[f64],
    period: usize,
    model: ConstantModelType,
) -> IndicatorResult<Vec<DirectionalMovement>> {
    check_parallel(&[("high", high), ("low", low), ("close", close)])?;
    check_positive_usize(period, "period")?;
    check_min_length(high, 3 * period - 1, "high")?;
    model.validate()?;

    let bars = high.len();
    let (positive_dm, negative_dm): (Vec<f64>, Vec<f64>) = (1..bars)
        .map(|i| trend::directional_movement(high[i], high[i - 1], low[i], low[i - 1]))
        .unzip();
    let true_ranges: Vec<f64> = (1..bars)
        .map(|i| other::true_range(close[i], high[i], low[i]))
        .collect();

    let positive_di = window::bulk_range(bars - 1, period, |range| {
        trend::directional_indicator(&positive_dm[range.clone()], &true_ranges[range])
    })?;
    let negative_di = window::bulk_range(bars - 1, period, |range| {
        trend::directional_indicator(&negative_dm[range.clone()], &true_ranges[range])
    })?;
    let directional_index: Vec<f64> = positive_di
        .iter()
        .zip(&negative_di)
        .map(|(&positive, &negative)| trend::directional_index(positive, negative))
        .collect();
    let adx = window::bulk(&directional_index, period, |window| {
        average::calculate(window, model)
    })?;

    let lag = period - 1;
    Ok((0..adx.len() - lag)
        .map(|i| DirectionalMovement {
            positive_di: positive_di[i + 2 * lag],
            negative_di: negative_di[i + 2 * lag],
            adx: adx[i + lag],
            adxr: f64::midpoint(adx[i + lag], adx[i]),
        })
        .collect())
}

/// Calculates the running volume price trend across `prices`, starting from `previous_vpt`.
///
/// Each move is weighted by the volume of the bar it ends on. Produces one value per price
/// after the first.
///
/// # Errors
///
/// Returns an error if:
/// - `prices` has fewer than two values.
/// - `volume` differs in length from `prices`.
pub fn volume_price_trend(
    prices: &[f64],
    volume: &[f64],
    previous_vpt: f64,
) -> IndicatorResult<Vec<f64>> {
    check_parallel(&[("prices", prices), ("volume", volume)])?;
    check_min_length(prices, 2, "prices")?;
    let steps = (1..prices.len()).map(|i| (prices[i], prices[i - 1], volume[i]));
    Ok(window::fold(VolumePriceTrend::new(previous_vpt), steps))
}

/// Calculates the true strength index of every window of `first_period + second_period`
/// prices.
///
/// # Errors
///
/// Returns an error if:
/// - `prices` is empty.
/// - Either period is zero.
/// - `first_period + second_period` is greater than the length of `prices`.
/// - Either model carries an invalid personalised smoothing constant.
pub fn true_strength_index(
    prices: &[f64],
    first_period: usize,
    first_model: ConstantModelType,
    second_period: usize,
    second_model: ConstantModelType,
) -> IndicatorResult<Vec<f64>> {
    check_non_empty(prices, "prices")?;
    check_positive_usize(first_period, "first_period")?;
    check_positive_usize(second_period, "second_period")?;
    first_model.validate()?;
    second_model.validate()?;
    window::bulk(prices, first_period + second_period, |window| {
        trend::true_strength_index(window, first_period, first_model, second_model)
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
    use crate::{stubs::*, trend::single};

    fn assert_all_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!(approx_eq!(f64, *a, *e, epsilon = 1e-9), "{a} != {e}");
        }
    }

    #[rstest]
    fn test_aroon(high: Vec<f64>, low: Vec<f64>) {
        let up = aroon_up(&high, 3).unwrap();
        let down = aroon_down(&low, 3).unwrap();
        assert_eq!(up, vec![50.0, 0.0, 0.0]);
        assert_eq!(down, vec![0.0, 100.0, 50.0]);
        assert_eq!(aroon_oscillator(&up, &down).unwrap(), vec![50.0, -100.0, -50.0]);

        let indicator = aroon_indicator(&high, &low, 3).unwrap();
        assert_eq!(
            indicator[1],
            Aroon {
                up: 0.0,
                down: 100.0,
                oscillator: -100.0
            }
        );
    }

    #[rstest]
    fn test_aroon_period_one(high: Vec<f64>) {
        assert_eq!(
            aroon_up(&high, 1),
            Err(IndicatorError::InvalidPeriod {
                period: 2,
                length: 1
            })
        );
    }

    #[rstest]
    fn test_aroon_full_period_matches_single(high: Vec<f64>, low: Vec<f64>) {
        let bulk = aroon_indicator(&high, &low, high.len()).unwrap();
        assert_eq!(bulk, vec![single::aroon_indicator(&high, &low).unwrap()]);
    }

    #[rstest]
    fn test_parabolic_time_price_system(high: Vec<f64>, low: Vec<f64>) {
        let config = ParabolicConfig {
            acceleration_factor_start: 0.0,
            acceleration_factor_max: 0.2,
            acceleration_factor_step: 0.02,
        };
        let values =
            parabolic_time_price_system(&high, &low, config, Position::Long, None).unwrap();
        assert_all_close(&values, &[175.0, 175.0, 175.7, 210.0, 210.0]);
    }

    #[rstest]
    fn test_parabolic_time_price_system_previous_sar(high: Vec<f64>, low: Vec<f64>) {
        let values = parabolic_time_price_system(
            &high,
            &low,
            ParabolicConfig::default(),
            Position::Short,
            Some(215.0),
        )
        .unwrap();
        assert_eq!(values[0], 215.0);
        assert_eq!(values.len(), high.len());
    }

    #[rstest]
    fn test_parabolic_time_price_system_invalid_config(high: Vec<f64>, low: Vec<f64>) {
        let config = ParabolicConfig {
            acceleration_factor_step: 0.0,
            ..ParabolicConfig::default()
        };
        assert!(matches!(
            parabolic_time_price_system(&high, &low, config, Position::Long, None),
            Err(IndicatorError::InvalidParameter {
                param: "acceleration_factor_step",
                ..
            })
        ));
    }

    #[rstest]
    #[case(ConstantModelType::Simple, [
        (25.0, 19.0, 41.800_356_506_238_86, 61.640_918_993_860_17),
        (30.0, 0.0, 41.800_356_506_238_856, 56.194_295_900_178_25),
        (31.578_947_368_421_05, 0.0, 71.212_121_212_121_2, 56.506_238_859_180_03),
    ])]
    #[case(ConstantModelType::Smoothed, [
        (25.0, 19.0, 31.227_132_001_125_81, 59.765_612_784_188_64),
        (30.0, 0.0, 54.151_421_334_083_87, 56.177_877_849_704_47),
        (31.578_947_368_421_05, 0.0, 81.818_181_818_181_83, 56.522_656_909_653_82),
    ])]
    #[case(ConstantModelType::Exponential, [
        (25.0, 19.0, 25.439_266_615_737_203, 58.751_379_339_614_63),
        (30.0, 0.0, 62.719_633_307_868_6, 56.149_732_620_320_85),
        (31.578_947_368_421_05, 0.0, 87.662_337_662_337_66, 56.550_802_139_037_43),
    ])]
    #[case(ConstantModelType::Personalised { alpha_num: 5, alpha_den: 4 }, [
        (25.0, 19.0, 18.401_308_963_205_363, 57.542_279_688_899_53),
        (30.0, 0.0, 76.686_088_275_201_54, 56.077_899_273_685_05),
        (31.578_947_368_421_05, 0.0, 94.843_962_008_141_1, 56.622_635_485_673_236),
    ])]
    #[case(ConstantModelType::Median, [
        (25.0, 19.0, 13.636_363_636_363_635, 56.818_181_818_181_82),
        (30.0, 0.0, 13.636_363_636_363_635, 56.818_181_818_181_82),
        (31.578_947_368_421_05, 0.0, 100.0, 56.818_181_818_181_82),
    ])]
    #[case(ConstantModelType::Mode, [
        (25.0, 19.0, 11.764_705_882_352_944, 28.104_575_163_398_69),
        (30.0, 0.0, 11.764_705_882_352_944, 11.764_705_882_352_944),
        (31.578_947_368_421_05, 0.0, 100.0, 55.882_352_941_176_47),
    ])]
    fn test_directional_movement_system(
        extended_high: Vec<f64>,
        extended_low: Vec<f64>,
        extended_close: Vec<f64>,
        #[case] model: ConstantModelType,
        #[case] expected: [(f64, f64, f64, f64); 3],
    ) {
        let values =
            directional_movement_system(&extended_high, &extended_low, &extended_close, 3, model)
                .unwrap();
        assert_eq!(values.len(), expected.len());
        for (value, (positive_di, negative_di, adx, adxr)) in values.iter().zip(expected) {
            assert!(approx_eq!(f64, value.positive_di, positive_di, epsilon = 1e-9));
            assert!(approx_eq!(f64, value.negative_di, negative_di, epsilon = 1e-9));
            assert!(approx_eq!(f64, value.adx, adx, epsilon = 1e-9));
            assert!(approx_eq!(f64, value.adxr, adxr, epsilon = 1e-9));
        }
    }

    #[rstest]
    fn test_directional_movement_system_too_few_bars(
        high: Vec<f64>,
        low: Vec<f64>,
        close: Vec<f64>,
    ) {
        assert_eq!(
            directional_movement_system(&high, &low, &close, 3, ConstantModelType::Simple),
            Err(IndicatorError::InvalidPeriod {
                period: 8,
                length: 5
            })
        );
    }

    #[rstest]
    fn test_volume_price_trend(prices: Vec<f64>, volume: Vec<f64>) {
        let values = volume_price_trend(&prices, &volume, 0.0).unwrap();
        assert_all_close(
            &values,
            &[
                30.0,
                41.764_705_882_352_94,
                24.288_977_727_013_137,
                -1.453_596_530_412_607_3,
            ],
        );
    }

    #[rstest]
    fn test_true_strength_index(prices: Vec<f64>) {
        let values = true_strength_index(
            &prices,
            2,
            ConstantModelType::Simple,
            2,
            ConstantModelType::Simple,
        )
        .unwrap();
        assert_all_close(&values, &[0.333_333_333_333_333_3, -0.714_285_714_285_714_3]);
    }

    #[rstest]
    fn test_true_strength_index_full_period_matches_single(prices: Vec<f64>) {
        let bulk = true_strength_index(
            &prices,
            3,
            ConstantModelType::Simple,
            2,
            ConstantModelType::Simple,
        )
        .unwrap();
        let single = single::true_strength_index(
            &prices,
            3,
            ConstantModelType::Simple,
            ConstantModelType::Simple,
        )
        .unwrap();
        assert_eq!(bulk, vec![single]);
    }
}
