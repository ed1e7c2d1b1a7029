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

//! Functions for correctness checks similar to the *design by contract* philosophy.
//!
//! This module provides validation checking of function or method conditions.
//!
//! A condition is a predicate which must be true just prior to the execution of
//! some section of code - for correct behavior as per the design specification.
//!
//! Each check returns an [`IndicatorResult`] with a descriptive error if the condition
//! is violated, so every public indicator operation can validate its inputs up front.

use crate::error::{IndicatorError, IndicatorResult};

#[inline]
fn reject(error: IndicatorError) -> IndicatorResult<()> {
    log::debug!("Rejected indicator call: {error}");
    Err(error)
}

/// Checks the `values` slice contains at least one element.
///
/// # Errors
///
/// Returns [`IndicatorError::EmptyInput`] if `values` is empty.
#[inline(always)]
pub fn check_non_empty(values: &[f64], param: &'static str) -> IndicatorResult<()> {
    if values.is_empty() {
        return reject(IndicatorError::EmptyInput { param });
    }
    Ok(())
}

/// Checks the `period` is positive and no greater than `length`.
///
/// # Errors
///
/// Returns [`IndicatorError::InvalidPeriod`] if `period` is zero or exceeds `length`.
#[inline(always)]
pub fn check_period(period: usize, length: usize) -> IndicatorResult<()> {
    if period == 0 || period > length {
        return reject(IndicatorError::InvalidPeriod { period, length });
    }
    Ok(())
}

/// Checks the `values` slice is non-empty and holds at least `min` elements.
///
/// # Errors
///
/// Returns an error if:
/// - `values` is empty ([`IndicatorError::EmptyInput`]).
/// - `values` is shorter than `min` ([`IndicatorError::InvalidPeriod`]).
#[inline(always)]
pub fn check_min_length(values: &[f64], min: usize, param: &'static str) -> IndicatorResult<()> {
    check_non_empty(values, param)?;
    if values.len() < min {
        return reject(IndicatorError::InvalidPeriod {
            period: min,
            length: values.len(),
        });
    }
    Ok(())
}

/// Checks two parallel series have the same length.
///
/// # Errors
///
/// Returns [`IndicatorError::InvalidParameter`] if the lengths differ.
#[inline(always)]
pub fn check_equal_lengths(
    lhs: &[f64],
    rhs: &[f64],
    lhs_param: &'static str,
    rhs_param: &'static str,
) -> IndicatorResult<()> {
    if lhs.len() != rhs.len() {
        return reject(IndicatorError::invalid_parameter(
            rhs_param,
            format!(
                "length {} does not match '{lhs_param}' length {}",
                rhs.len(),
                lhs.len()
            ),
        ));
    }
    Ok(())
}

/// Checks a set of named parallel series is non-empty and of one length.
///
/// The first series sets the expected length.
///
/// # Errors
///
/// Returns an error if:
/// - The first series is empty ([`IndicatorError::EmptyInput`]).
/// - Any other series differs in length ([`IndicatorError::InvalidParameter`]).
pub fn check_parallel(series: &[(&'static str, &[f64])]) -> IndicatorResult<()> {
    let Some(&(first_param, first)) = series.first() else {
        return Ok(());
    };
    check_non_empty(first, first_param)?;
    for &(param, values) in &series[1..] {
        check_equal_lengths(first, values, first_param, param)?;
    }
    Ok(())
}

/// Checks the `f64` value is positive (> 0) and not `NaN`.
///
/// # Errors
///
/// Returns [`IndicatorError::InvalidParameter`] if `value` is not positive.
#[inline(always)]
pub fn check_positive_f64(value: f64, param: &'static str) -> IndicatorResult<()> {
    if value.is_nan() || value <= 0.0 {
        return reject(IndicatorError::invalid_parameter(
            param,
            format!("not positive, was {value}"),
        ));
    }
    Ok(())
}

/// Checks the `f64` value is non-negative (>= 0) and not `NaN`.
///
/// # Errors
///
/// Returns [`IndicatorError::InvalidParameter`] if `value` is negative or `NaN`.
#[inline(always)]
pub fn check_non_negative_f64(value: f64, param: &'static str) -> IndicatorResult<()> {
    if value.is_nan() || value < 0.0 {
        return reject(IndicatorError::invalid_parameter(
            param,
            format!("negative, was {value}"),
        ));
    }
    Ok(())
}

/// Checks the `usize` value is positive (> 0).
///
/// # Errors
///
/// Returns [`IndicatorError::InvalidParameter`] if `value` is zero.
#[inline(always)]
pub fn check_positive_usize(value: usize, param: &'static str) -> IndicatorResult<()> {
    if value == 0 {
        return reject(IndicatorError::invalid_parameter(param, "not positive, was 0"));
    }
    Ok(())
}

/// Checks `lhs` is strictly less than `rhs`.
///
/// # Errors
///
/// Returns [`IndicatorError::InvalidParameter`] if `lhs >= rhs`.
#[inline(always)]
pub fn check_less_than(
    lhs: usize,
    rhs: usize,
    lhs_param: &'static str,
    rhs_param: &'static str,
) -> IndicatorResult<()> {
    if lhs >= rhs {
        return reject(IndicatorError::invalid_parameter(
            lhs_param,
            format!("{lhs} is not less than '{rhs_param}' {rhs}"),
        ));
    }
    Ok(())
}
