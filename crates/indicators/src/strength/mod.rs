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

//! Strength indicators: volume-weighted measures of buying and selling pressure.

pub mod bulk;
pub mod single;

use std::fmt::Display;

use crate::{average, indicator::Accumulator, model::ConstantModelType};

/// Adds the bar's money flow volume to `previous_ad`.
///
/// A bar with no range contributes no flow.
pub(crate) fn accumulation_distribution(
    high: f64,
    low: f64,
    close: f64,
    volume: f64,
    previous_ad: f64,
) -> f64 {
    let money_flow_multiplier = if high == low {
        0.0
    } else {
        ((close - low) - (high - close)) / (high - low)
    };
    money_flow_multiplier * volume + previous_ad
}

/// A zero previous index starts the series from the price change itself.
pub(crate) fn volume_index(current_close: f64, previous_close: f64, previous_index: f64) -> f64 {
    let change = (current_close - previous_close) / previous_close;
    let previous = if previous_index == 0.0 {
        change
    } else {
        previous_index
    };
    previous + change * previous
}

/// Weighted sum over the last four values: `(x[t] + 2x[t-1] + 2x[t-2] + x[t-3]) / 6`.
fn symmetric_weighted(values: &[f64]) -> Vec<f64> {
    values
        .windows(4)
        .map(|w| (w[3] + 2.0 * w[2] + 2.0 * w[1] + w[0]) / 6.0)
        .collect()
}

pub(crate) fn relative_vigor_index(
    open: &[f64],
    high: &[f64],
    low: &[f64],
    close: &[f64],
    model: ConstantModelType,
) -> f64 {
    let close_open: Vec<f64> = close.iter().zip(open).map(|(c, o)| c - o).collect();
    let high_low: Vec<f64> = high.iter().zip(low).map(|(h, l)| h - l).collect();
    let numerator = symmetric_weighted(&close_open);
    let denominator = symmetric_weighted(&high_low);
    average::calculate(&numerator, model) / average::calculate(&denominator, model)
}

/// The running accumulation distribution line over `(high, low, close, volume)` bars.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AccumulationDistribution {
    pub value: f64,
}

impl AccumulationDistribution {
    /// Creates a new [`AccumulationDistribution`] instance seeded with `previous_ad`.
    #[must_use]
    pub const fn new(previous_ad: f64) -> Self {
        Self { value: previous_ad }
    }
}

impl Display for AccumulationDistribution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.name(), self.value)
    }
}

impl Accumulator for AccumulationDistribution {
    type Input = (f64, f64, f64, f64);
    type Output = f64;

    fn name(&self) -> String {
        stringify!(AccumulationDistribution).to_string()
    }

    fn step(self, (high, low, close, volume): Self::Input) -> Self {
        Self {
            value: accumulation_distribution(high, low, close, volume, self.value),
        }
    }

    fn value(&self) -> f64 {
        self.value
    }
}

/// Which volume move updates a [`VolumeIndex`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VolumeIndexKind {
    /// Updates when volume rises.
    Positive,
    /// Updates when volume falls.
    Negative,
}

/// The running positive or negative volume index.
///
/// Each step reads `(current_close, previous_close, current_volume, previous_volume)`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VolumeIndex {
    pub kind: VolumeIndexKind,
    pub value: f64,
}

impl VolumeIndex {
    /// Creates a new [`VolumeIndex`] instance seeded with `previous_index`.
    #[must_use]
    pub const fn new(kind: VolumeIndexKind, previous_index: f64) -> Self {
        Self {
            kind,
            value: previous_index,
        }
    }
}

impl Display for VolumeIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({:?},{})", self.name(), self.kind, self.value)
    }
}

impl Accumulator for VolumeIndex {
    type Input = (f64, f64, f64, f64);
    type Output = f64;

    fn name(&self) -> String {
        stringify!(VolumeIndex).to_string()
    }

    fn step(
        self,
        (current_close, previous_close, current_volume, previous_volume): Self::Input,
    ) -> Self {
        let updates = match self.kind {
            VolumeIndexKind::Positive => current_volume > previous_volume,
            VolumeIndexKind::Negative => current_volume < previous_volume,
        };
        if !updates {
            return self;
        }
        Self {
            value: volume_index(current_close, previous_close, self.value),
            ..self
        }
    }

    fn value(&self) -> f64 {
        self.value
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_accumulation_distribution_flat_bar() {
        assert_eq!(accumulation_distribution(10.0, 10.0, 10.0, 500.0, 42.0), 42.0);
    }

    #[rstest]
    fn test_volume_index_skips_unqualified_moves() {
        let index = VolumeIndex::new(VolumeIndexKind::Negative, 1000.0);
        let next = index.step((200.0, 192.0, 1500.0, 1000.0));
        assert_eq!(next.value(), 1000.0);
        assert_eq!(next.to_string(), "VolumeIndex(Negative,1000)");
    }
}
