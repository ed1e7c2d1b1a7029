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

use techan_core::{IndicatorResult, correctness::check_non_empty};

use crate::{deviation, window};

/// Calculates the ulcer index of `prices`: the root-mean-square of percentage drawdowns from
/// the running peak.
///
/// # Errors
///
/// Returns an error if `prices` is empty.
pub fn ulcer_index(prices: &[f64]) -> IndicatorResult<f64> {
    check_non_empty(prices, "prices")?;
    window::single(prices, deviation::ulcer_index)
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
    fn test_ulcer_index(prices: Vec<f64>) {
        let ulcer = ulcer_index(&prices).unwrap();
        assert!(approx_eq!(f64, ulcer, 1.941_747_572_815_533_8, epsilon = 1e-12));
    }

    #[rstest]
    fn test_ulcer_index_rising_prices_is_zero() {
        assert_eq!(ulcer_index(&[1.0, 2.0, 3.0]).unwrap(), 0.0);
    }

    #[rstest]
    fn test_ulcer_index_empty() {
        assert_eq!(
            ulcer_index(&[]),
            Err(IndicatorError::EmptyInput { param: "prices" })
        );
    }
}
