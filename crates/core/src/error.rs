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

//! The error taxonomy shared by every indicator operation.
//!
//! All failures are detected while validating parameters, before any computation begins.
//! Degenerate numeric outcomes (a zero-dispersion window, a zero center) are not errors and
//! surface as `inf` or `NaN` in the returned values.

use thiserror::Error;

/// A `Result` alias for fallible indicator operations.
pub type IndicatorResult<T> = Result<T, IndicatorError>;

/// Represents a violated indicator contract.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IndicatorError {
    /// A required input sequence has zero length.
    #[error("empty input: '{param}' must contain at least one value")]
    EmptyInput {
        /// The name of the offending input.
        param: &'static str,
    },
    /// A period is zero or exceeds the series length available for the requested window mode.
    #[error("invalid period: {period} for a series of length {length}")]
    InvalidPeriod {
        /// The requested period.
        period: usize,
        /// The series length the period was checked against.
        length: usize,
    },
    /// A selector token, multiplier or other parameter is outside its valid domain.
    #[error("invalid parameter '{param}': {reason}")]
    InvalidParameter {
        /// The name of the offending parameter.
        param: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

impl IndicatorError {
    /// Creates a new [`IndicatorError::InvalidParameter`] instance.
    #[must_use]
    pub fn invalid_parameter(param: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            param,
            reason: reason.into(),
        }
    }
}
