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

//! Dispersion strategies measuring the spread of a window around a center.

pub mod bulk;
pub mod single;

use techan_core::math::{median, mode};

pub use crate::deviation::single::deviation;
use crate::model::DeviationModel;

/// Measures the dispersion of a validated, non-empty `window` under `model`.
///
/// Standard and mean absolute deviation are measured against `center`. The median and mode
/// absolute deviations center on the window's own median and mode, and the ulcer index
/// measures drawdowns from the running peak, so those ignore `center`.
pub(crate) fn calculate(window: &[f64], model: DeviationModel, center: f64) -> f64 {
    let len = window.len() as f64;
    match model {
        DeviationModel::StandardDeviation => {
            let variance = window.iter().map(|x| (x - center).powi(2)).sum::<f64>() / len;
            variance.sqrt()
        }
        DeviationModel::MeanAbsoluteDeviation => {
            window.iter().map(|x| (x - center).abs()).sum::<f64>() / len
        }
        DeviationModel::MedianAbsoluteDeviation => {
            let own_median = median(window);
            median(&absolute_deviations(window, own_median))
        }
        DeviationModel::ModeAbsoluteDeviation => {
            let own_mode = mode(window);
            mode(&absolute_deviations(window, own_mode))
        }
        DeviationModel::UlcerIndex => ulcer_index(window),
    }
}

fn absolute_deviations(window: &[f64], center: f64) -> Vec<f64> {
    window.iter().map(|x| (x - center).abs()).collect()
}

/// Root-mean-square of the percentage drawdowns from the running peak.
pub(crate) fn ulcer_index(window: &[f64]) -> f64 {
    let mut peak = f64::NEG_INFINITY;
    let mut sum_squares = 0.0;
    for &price in window {
        peak = peak.max(price);
        let drawdown = 100.0 * (price - peak) / peak;
        sum_squares += drawdown * drawdown;
    }
    (sum_squares / window.len() as f64).sqrt()
}
