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
    correctness::{check_min_length, check_parallel, check_period},
};

use crate::{
    model::ConstantModelType,
    strength::{self, AccumulationDistribution, VolumeIndex, VolumeIndexKind},
    window,
};

/// Calculates the accumulation distribution line over every bar, starting from `previous_ad`.
///
/// # Errors
///
/// Returns an error if `high` is empty, or `low`, `close` or `volume` differ in length from it.
pub fn accumulation_distribution(
    high: &[f64],
    low: &[f64],
    close: &[f64],
    volume: &[f64],
    previous_ad: f64,
) -> IndicatorResult<Vec<f64>> {
    check_parallel(&[
        ("high", high),
        ("low", low),
        ("close", close),
        ("volume", volume),
    ])?;
    let bars = (0..high.len()).map(|i| (high[i], low[i], close[i], volume[i]));
    Ok(window::fold(AccumulationDistribution::new(previous_ad), bars))
}

fn volume_index(
    kind: VolumeIndexKind,
    close: &[f64],
    volume: &[f64],
    previous_volume_index: f64,
) -> IndicatorResult<Vec<f64>> {
    check_parallel(&[("close", close), ("volume", volume)])?;
    check_min_length(close, 2, "close")?;
    let steps = (1..close.len()).map(|i| (close[i], close[i - 1], volume[i], volume[i - 1]));
    Ok(window::fold(
        VolumeIndex::new(kind, previous_volume_index),
        steps,
    ))
}

/// Calculates the positive volume index, updated only on bars where volume rises.
///
/// Produces one value per bar after the first.
///
/// # Errors
///
/// Returns an error if:
/// - `close` has fewer than two values.
/// - `volume` differs in length from `close`.
pub fn positive_volume_index(
    close: &[f64],
    volume: &[f64],
    previous_volume_index: f64,
) -> IndicatorResult<Vec<f64>> {
    volume_index(
        VolumeIndexKind::Positive,
        close,
        volume,
        previous_volume_index,
    )
}

/// Calculates the negative volume index, updated only on bars where volume falls.
///
/// Produces one value per bar after the first.
///
/// # Errors
///
/// Returns an error if:
/// - `close` has fewer than two values.
/// - `volume` differs in length from `close`.
pub fn negative_volume_index(
    close: &[f64],
    volume: &[f64],
    previous_volume_index: f64,
) -> IndicatorResult<Vec<f64>> {
    volume_index(
        VolumeIndexKind::Negative,
        close,
        volume,
        previous_volume_index,
    )
}

/// Calculates the relative vigor index for every window of `period` bars.
///
/// # Errors
///
/// Returns an error if:
/// - `open` is empty, or `high`, `low` or `close` differ in length from it.
/// - `period` is less than four or greater than the number of bars.
/// - `model` carries an invalid personalised smoothing constant.
pub fn relative_vigor_index(
    open: &[f64],
    high: &[f64],
    low: &[f64],
    close: &[f64],
    model: ConstantModelType,
    period: usize,
) -> IndicatorResult<Vec<f64>> {
    check_parallel(&[("open", open), ("high", high), ("low", low), ("close", close)])?;
    check_period(period, open.len())?;
    check_min_length(&open[..period], 4, "open")?;
    model.validate()?;
    window::bulk_range(open.len(), period, |range| {
        strength::relative_vigor_index(
            &open[range.clone()],
            &high[range.clone()],
            &low[range.clone()],
            &close[range],
            model,
        )
    })
}
