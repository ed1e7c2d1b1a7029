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

//! Moving-constant averaging strategies.
//!
//! A window is reduced to a central value with one of the [`ConstantModelType`] models. The
//! recursive models (smoothed, exponential and personalised) are evaluated in their normalised
//! finite-window form: the most recent value has weight one and each older value is discounted
//! by `1 - alpha`, with `alpha = alpha_num / (n + alpha_den)` for a window of `n` values. Each
//! window is independent, so bulk evaluation carries no state between windows.

pub mod bulk;
pub mod single;

use std::fmt::Display;

use techan_core::math::{mean, median, mode};

use crate::{indicator::Accumulator, model::ConstantModelType};

/// Reduces a validated, non-empty `window` to its central value under `model`.
pub(crate) fn calculate(window: &[f64], model: ConstantModelType) -> f64 {
    match model {
        ConstantModelType::Simple => mean(window),
        ConstantModelType::Smoothed => personalised(window, 1.0, 0.0),
        ConstantModelType::Exponential => personalised(window, 2.0, 1.0),
        ConstantModelType::Personalised {
            alpha_num,
            alpha_den,
        } => personalised(window, alpha_num as f64, alpha_den as f64),
        ConstantModelType::Median => median(window),
        ConstantModelType::Mode => mode(window),
    }
}

fn personalised(window: &[f64], alpha_num: f64, alpha_den: f64) -> f64 {
    if let [only] = window {
        return *only;
    }

    let alpha = alpha_num / (window.len() as f64 + alpha_den);
    let decay = 1.0 - alpha;

    let mut price_sum = 0.0;
    let mut weight_sum = 0.0;
    let mut weight = 1.0;
    for &price in window.iter().rev() {
        price_sum += price * weight;
        weight_sum += weight;
        weight *= decay;
    }
    price_sum / weight_sum
}

/// Returns the McGinley dynamic for `latest_price`, or the price itself without a previous value.
pub(crate) fn mcginley(latest_price: f64, previous: Option<f64>, period: usize) -> f64 {
    match previous {
        None => latest_price,
        Some(previous) => {
            let base = latest_price / previous;
            previous + (latest_price - previous) / (period as f64 * base.powi(4))
        }
    }
}

/// The McGinley dynamic carried from one price to the next.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct McGinleyDynamic {
    pub period: usize,
    pub value: Option<f64>,
}

impl McGinleyDynamic {
    /// Creates a new [`McGinleyDynamic`] instance seeded with the `previous` value, if any.
    #[must_use]
    pub const fn new(period: usize, previous: Option<f64>) -> Self {
        Self {
            period,
            value: previous,
        }
    }
}

impl Display for McGinleyDynamic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.name(), self.period)
    }
}

impl Accumulator for McGinleyDynamic {
    type Input = f64;
    type Output = f64;

    fn name(&self) -> String {
        stringify!(McGinleyDynamic).to_string()
    }

    fn step(self, input: f64) -> Self {
        Self {
            value: Some(mcginley(input, self.value, self.period)),
            ..self
        }
    }

    fn value(&self) -> f64 {
        self.value.unwrap_or(f64::NAN)
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;
    use techan_core::approx_eq;

    use super::*;
    use crate::stubs::*;

    #[rstest]
    #[case(ConstantModelType::Simple, 101.0)]
    #[case(ConstantModelType::Smoothed, 100.816_277_962_874_82)]
    #[case(ConstantModelType::Exponential, 100.611_374_407_582_96)]
    #[case(ConstantModelType::Personalised { alpha_num: 5, alpha_den: 4 }, 100.120_206_807_410_6)]
    #[case(ConstantModelType::Median, 101.0)]
    #[case(ConstantModelType::Mode, 99.0)]
    fn test_calculate(prices: Vec<f64>, #[case] model: ConstantModelType, #[case] expected: f64) {
        assert!(approx_eq!(f64, calculate(&prices, model), expected, epsilon = 1e-9));
    }

    #[rstest]
    fn test_recursive_models_on_single_value() {
        for model in [ConstantModelType::Smoothed, ConstantModelType::Exponential] {
            assert_eq!(calculate(&[42.0], model), 42.0);
        }
    }

    #[rstest]
    fn test_mcginley_without_previous_returns_latest() {
        assert_eq!(mcginley(103.0, None, 3), 103.0);
    }

    #[rstest]
    fn test_mcginley_with_previous() {
        assert!(approx_eq!(
            f64,
            mcginley(99.0, Some(101.0), 5),
            100.566_684_017_352_94,
            epsilon = 1e-9
        ));
    }

    #[rstest]
    fn test_mcginley_accumulator_steps() {
        let dynamic = McGinleyDynamic::new(3, None).step(103.0);
        assert_eq!(dynamic.value(), 103.0);
        let dynamic = dynamic.step(101.0);
        assert!(approx_eq!(f64, dynamic.value(), 102.278_938_770_698_5, epsilon = 1e-9));
        assert_eq!(dynamic.to_string(), "McGinleyDynamic(3)");
    }
}
