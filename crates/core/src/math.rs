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

//! Mathematical and order-statistic functions over `f64` slices.
//!
//! These are the infallible building blocks of the averaging and dispersion strategies.
//! Callers validate their inputs first, so an empty slice yields `NaN` rather than an error.

/// Macro for approximate floating-point equality comparison.
///
/// This macro compares two floating-point values with a specified epsilon tolerance,
/// providing a safe alternative to exact equality checks which can fail due to
/// floating-point precision issues.
///
/// # Usage
///
/// ```rust
/// use techan_core::approx_eq;
///
/// let a = 0.1 + 0.2;
/// let b = 0.3;
/// assert!(approx_eq!(f64, a, b, epsilon = 1e-10));
/// ```
#[macro_export]
macro_rules! approx_eq {
    ($type:ty, $left:expr, $right:expr, epsilon = $epsilon:expr) => {{
        let left_val: $type = $left;
        let right_val: $type = $right;
        (left_val - right_val).abs() < $epsilon
    }};
}

/// Returns the arithmetic mean of `values`.
#[inline]
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Returns the median of `values`.
///
/// An even number of values yields the mean of the two middle order statistics.
#[must_use]
pub fn median(values: &[f64]) -> f64 {
    let sorted = sorted(values);
    let len = sorted.len();
    match len {
        0 => f64::NAN,
        _ if len % 2 == 1 => sorted[len / 2],
        _ => f64::midpoint(sorted[len / 2 - 1], sorted[len / 2]),
    }
}

/// Returns the most frequent value in `values`.
///
/// Values are grouped under the IEEE 754 total order, so `NaN` entries count as one value.
/// Ties resolve to the smallest of the most frequent values.
#[must_use]
pub fn mode(values: &[f64]) -> f64 {
    let sorted = sorted(values);
    let mut best = f64::NAN;
    let mut best_count = 0;

    let mut start = 0;
    while start < sorted.len() {
        let value = sorted[start];
        let run = sorted[start..].iter().take_while(|v| v.total_cmp(&value).is_eq()).count();
        // Ascending scan so a strict comparison keeps the smallest value on ties
        if run > best_count {
            best = value;
            best_count = run;
        }
        start += run;
    }
    best
}

/// Returns the largest of `values`, ignoring `NaN`.
#[inline]
#[must_use]
pub fn max(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NAN, f64::max)
}

/// Returns the smallest of `values`, ignoring `NaN`.
#[inline]
#[must_use]
pub fn min(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NAN, f64::min)
}

/// Returns the index of the most recent occurrence of the largest value.
#[must_use]
pub fn last_index_of_max(values: &[f64]) -> usize {
    let mut index = 0;
    for (i, &value) in values.iter().enumerate() {
        if value >= values[index] {
            index = i;
        }
    }
    index
}

/// Returns the index of the most recent occurrence of the smallest value.
#[must_use]
pub fn last_index_of_min(values: &[f64]) -> usize {
    let mut index = 0;
    for (i, &value) in values.iter().enumerate() {
        if value <= values[index] {
            index = i;
        }
    }
    index
}

/// Returns the consecutive differences `values[i] - values[i - 1]`.
#[must_use]
pub fn diffs(values: &[f64]) -> Vec<f64> {
    values.windows(2).map(|pair| pair[1] - pair[0]).collect()
}

fn sorted(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}
