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
    correctness::{check_min_length, check_parallel},
};

use crate::{model::ConstantModelType, strength};

/// Calculates the accumulation distribution after one bar, starting from `previous_ad`.
#[must_use]
pub fn accumulation_distribution(
    high: f64,
    low: f64,
    close: f64,
    volume: f64,
    previous_ad: f64,
) -> f64 {
    strength::accumulation_distribution(high, low, close, volume, previous_ad)
}

/// Calculates the volume index after a close moves from `previous_close` to `current_close`.
///
/// Used for both the positive and negative volume index; the caller decides whether the
/// volume move qualifies. A zero `previous_volume_index` starts the index from the price change.
#[must_use]
pub fn volume_index(current_close: f64, previous_close: f64, previous_volume_index: f64) -> f64 {
    strength::volume_index(current_close, previous_close, previous_volume_index)
}

/// Calculates the relative vigor index over all bars.
///
/// # Errors
///
/// Returns an error if:
/// - `open` is empty, or `high`, `low` or `close` differ in length from it.
/// - There are fewer than four bars.
/// - `model` carries an invalid personalised smoothing constant.
pub fn relative_vigor_index(
    open: &[f64],
    high: &[f64],
    low: &[f64],
    close: &[f64],
    model: ConstantModelType,
) -> IndicatorResult<f64> {
    check_parallel(&[("open", open), ("high", high), ("low", low), ("close", close)])?;
    check_min_length(open, 4, "open")?;
    model.validate()?;
    Ok(strength::relative_vigor_index(open, high, low, close, model))
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
    fn test_accumulation_distribution() {
        assert_eq!(accumulation_distribution(200.0, 175.0, 192.0, 1000.0, 0.0), 360.0);
        assert!(approx_eq!(
            f64,
            accumulation_distribution(210.0, 192.0, 200.0, 1500.0, 100.0),
            -66.666_666_666_666_66,
            epsilon = 1e-9
        ));
    }

    #[rstest]
    fn test_volume_index() {
        assert!(approx_eq!(
            f64,
            volume_index(103.0, 102.0, 100.0),
            100.980_392_156_862_75,
            epsilon = 1e-9
        ));
    }

    #[rstest]
    fn test_volume_index_from_zero(close: Vec<f64>) {
        assert!(approx_eq!(
            f64,
            volume_index(close[4], close[3], 0.0),
            0.005_376_190_340_015_442,
            epsilon = 1e-12
        ));
    }

    #[rstest]
    fn test_relative_vigor_index(
        open: Vec<f64>,
        high: Vec<f64>,
        low: Vec<f64>,
        close: Vec<f64>,
    ) {
        let value =
            relative_vigor_index(&open, &high, &low, &close, ConstantModelType::Simple).unwrap();
        assert!(approx_eq!(f64, value, 0.294_117_647_058_823_54, epsilon = 1e-12));
    }

    #[rstest]
    fn test_relative_vigor_index_needs_four_bars(
        open: Vec<f64>,
        high: Vec<f64>,
        low: Vec<f64>,
        close: Vec<f64>,
    ) {
        let result = relative_vigor_index(
            &open[..3],
            &high[..3],
            &low[..3],
            &close[..3],
            ConstantModelType::Simple,
        );
        assert_eq!(
            result,
            Err(IndicatorError::InvalidPeriod {
                period: 4,
                length: 3
            })
        );
    }
}
