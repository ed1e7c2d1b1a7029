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

//! The windowing engine shared by every indicator family.
//!
//! Bulk evaluation slides a window of `period` values across a series with stride 1 and maps
//! each window independently, so results are ordered by window start. With the `parallel`
//! feature enabled the windows are evaluated on the rayon thread pool and reassembled by
//! window index, giving identical output.
//!
//! Sequential indicators whose next value depends on the previous one are expressed as an
//! [`Accumulator`] and evaluated strictly in series order with [`fold`].

use std::ops::Range;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use techan_core::{
    IndicatorResult,
    correctness::{check_non_empty, check_period},
};

use crate::indicator::Accumulator;

/// Returns the number of windows of `period` values a series of `length` values produces.
///
/// # Errors
///
/// Returns [`IndicatorError::InvalidPeriod`](techan_core::IndicatorError::InvalidPeriod) if
/// `period` is zero or greater than `length`.
pub fn window_count(length: usize, period: usize) -> IndicatorResult<usize> {
    check_period(period, length)?;
    Ok(length - period + 1)
}

/// Applies `f` to the whole `series` as a single window.
///
/// # Errors
///
/// Returns [`IndicatorError::EmptyInput`](techan_core::IndicatorError::EmptyInput) if `series`
/// is empty.
pub fn single<R, F>(series: &[f64], f: F) -> IndicatorResult<R>
where
    F: FnOnce(&[f64]) -> R,
{
    check_non_empty(series, "series")?;
    Ok(f(series))
}

/// Applies `f` to every window of `period` values in `series`.
///
/// # Errors
///
/// Returns an error if:
/// - `series` is empty.
/// - `period` is zero or greater than the length of `series`.
pub fn bulk<R, F>(series: &[f64], period: usize, f: F) -> IndicatorResult<Vec<R>>
where
    R: Send,
    F: Fn(&[f64]) -> R + Send + Sync,
{
    check_non_empty(series, "series")?;
    bulk_range(series.len(), period, |range| f(&series[range]))
}

/// Applies `f` to the index range of every window of `period` positions over `length` values.
///
/// Used by indicators reading several parallel series for the same window.
///
/// # Errors
///
/// Returns [`IndicatorError::InvalidPeriod`](techan_core::IndicatorError::InvalidPeriod) if
/// `period` is zero or greater than `length`.
pub fn bulk_range<R, F>(length: usize, period: usize, f: F) -> IndicatorResult<Vec<R>>
where
    R: Send,
    F: Fn(Range<usize>) -> R + Send + Sync,
{
    let count = window_count(length, period)?;
    log::trace!("Evaluating {count} windows of period {period}");

    #[cfg(feature = "parallel")]
    let values = (0..count)
        .into_par_iter()
        .map(|start| f(start..start + period))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let values = (0..count).map(|start| f(start..start + period)).collect();

    Ok(values)
}

/// Threads `seed` through `inputs` in order, collecting the value after every step.
pub fn fold<A, I>(seed: A, inputs: I) -> Vec<A::Output>
where
    A: Accumulator,
    I: IntoIterator<Item = A::Input>,
{
    log::trace!("Folding {seed}");
    inputs
        .into_iter()
        .scan(seed, |state, input| {
            *state = state.step(input);
            Some(state.value())
        })
        .collect()
}
