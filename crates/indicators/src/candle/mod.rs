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

//! Candle indicators: envelopes, bands and channels drawn around price.

pub mod bulk;
pub mod single;

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use techan_core::math::{max, min};

use crate::{
    average, deviation,
    indicator::Accumulator,
    model::{ConstantModelType, DeviationModel, Position},
    other,
};

/// A lower, middle and upper line drawn around price.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bands {
    pub lower: f64,
    pub middle: f64,
    pub upper: f64,
}

impl Bands {
    #[must_use]
    pub const fn new(lower: f64, middle: f64, upper: f64) -> Self {
        Self {
            lower,
            middle,
            upper,
        }
    }

    fn around(middle: f64, width: f64) -> Self {
        Self::new(middle - width, middle, middle + width)
    }

    fn envelope(middle: f64, difference: f64) -> Self {
        Self::new(
            middle * (1.0 - difference / 100.0),
            middle,
            middle * (1.0 + difference / 100.0),
        )
    }
}

/// The five lines of the Ichimoku cloud.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IchimokuCloud {
    pub leading_span_a: f64,
    pub leading_span_b: f64,
    pub base_line: f64,
    pub conversion_line: f64,
    /// The close `base_period` bars before the end of the window.
    pub lagging_span: f64,
}

pub(crate) fn moving_constant_envelopes(
    prices: &[f64],
    model: ConstantModelType,
    difference: f64,
) -> Bands {
    Bands::envelope(average::calculate(prices, model), difference)
}

pub(crate) fn moving_constant_bands(
    prices: &[f64],
    model: ConstantModelType,
    deviation_model: DeviationModel,
    multiplier: f64,
) -> Bands {
    let middle = average::calculate(prices, model);
    let width = deviation::calculate(prices, deviation_model, middle) * multiplier;
    Bands::around(middle, width)
}

pub(crate) fn mcginley_dynamic_bands(
    prices: &[f64],
    deviation_model: DeviationModel,
    multiplier: f64,
    mcginley_dynamic: f64,
) -> Bands {
    let width = deviation::calculate(prices, deviation_model, mcginley_dynamic) * multiplier;
    Bands::around(mcginley_dynamic, width)
}

fn midpoint_of_range(high: &[f64], low: &[f64], period: usize) -> f64 {
    let start = high.len() - period;
    f64::midpoint(max(&high[start..]), min(&low[start..]))
}

pub(crate) fn ichimoku_cloud(
    high: &[f64],
    low: &[f64],
    close: &[f64],
    conversion_period: usize,
    base_period: usize,
    span_b_period: usize,
) -> IchimokuCloud {
    let conversion_line = midpoint_of_range(high, low, conversion_period);
    let base_line = midpoint_of_range(high, low, base_period);
    IchimokuCloud {
        leading_span_a: f64::midpoint(conversion_line, base_line),
        leading_span_b: midpoint_of_range(high, low, span_b_period),
        base_line,
        conversion_line,
        lagging_span: close[close.len() - base_period],
    }
}

pub(crate) fn donchian_channels(high: &[f64], low: &[f64]) -> Bands {
    let upper = max(high);
    let lower = min(low);
    Bands::new(lower, f64::midpoint(lower, upper), upper)
}

pub(crate) fn keltner_channel(
    high: &[f64],
    low: &[f64],
    close: &[f64],
    model: ConstantModelType,
    atr_model: ConstantModelType,
    multiplier: f64,
) -> Bands {
    let typical_prices: Vec<f64> = high
        .iter()
        .zip(low)
        .zip(close)
        .map(|((h, l), c)| (h + l + c) / 3.0)
        .collect();
    let middle = average::calculate(&typical_prices, model);
    let width = other::average_true_range(close, high, low, atr_model) * multiplier;
    Bands::around(middle, width)
}

/// The basic supertrend bands of a window and the window's latest close.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SupertrendInput {
    pub basic_upper: f64,
    pub basic_lower: f64,
    pub close: f64,
}

pub(crate) fn supertrend_input(
    high: &[f64],
    low: &[f64],
    close: &[f64],
    model: ConstantModelType,
    multiplier: f64,
) -> SupertrendInput {
    let middle = f64::midpoint(max(high), min(low));
    let width = other::average_true_range(close, high, low, model) * multiplier;
    SupertrendInput {
        basic_upper: middle + width,
        basic_lower: middle - width,
        close: close[close.len() - 1],
    }
}

/// The supertrend stop, trailing price on the lower band while long and on the upper band
/// while short.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Supertrend {
    pub position: Position,
    pub upper: f64,
    pub lower: f64,
    pub close: f64,
}

impl Supertrend {
    /// Creates a new [`Supertrend`] from the first window, long only if it closed above the
    /// basic upper band.
    #[must_use]
    pub fn seed(input: SupertrendInput) -> Self {
        let position = if input.close > input.basic_upper {
            Position::Long
        } else {
            Position::Short
        };
        Self {
            position,
            upper: input.basic_upper,
            lower: input.basic_lower,
            close: input.close,
        }
    }
}

impl Display for Supertrend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.name(), self.position)
    }
}

impl Accumulator for Supertrend {
    type Input = SupertrendInput;
    type Output = f64;

    fn name(&self) -> String {
        stringify!(Supertrend).to_string()
    }

    fn step(self, input: SupertrendInput) -> Self {
        // Bands only tighten unless the previous close broke through them
        let upper = if input.basic_upper < self.upper || self.close > self.upper {
            input.basic_upper
        } else {
            self.upper
        };
        let lower = if input.basic_lower > self.lower || self.close < self.lower {
            input.basic_lower
        } else {
            self.lower
        };

        let position = match self.position {
            Position::Short if input.close > upper => Position::Long,
            Position::Long if input.close < lower => Position::Short,
            position => position,
        };

        Self {
            position,
            upper,
            lower,
            close: input.close,
        }
    }

    fn value(&self) -> f64 {
        match self.position {
            Position::Long => self.lower,
            Position::Short => self.upper,
        }
    }
}
