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

//! Volatility indicators.

pub mod bulk;
pub mod single;

use std::fmt::Display;

use techan_core::math::{max, min};

use crate::{indicator::Accumulator, model::Position};

/// The volatility system stop and reverse, trailing the most significant close by the
/// average range.
///
/// Each step reads a window's `(close, arc)` where `arc` is the multiplied average true range.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VolatilitySystem {
    pub position: Position,
    pub significant_close: f64,
    pub sar: f64,
}

impl VolatilitySystem {
    /// Creates a new [`VolatilitySystem`] from the closes of the first window, long if the
    /// window did not close lower than it opened.
    #[must_use]
    pub fn seed(closes: &[f64], arc: f64) -> Self {
        let position = if closes[closes.len() - 1] >= closes[0] {
            Position::Long
        } else {
            Position::Short
        };
        let significant_close = match position {
            Position::Long => max(closes),
            Position::Short => min(closes),
        };
        Self {
            position,
            significant_close,
            sar: stop(position, significant_close, arc),
        }
    }
}

fn stop(position: Position, significant_close: f64, arc: f64) -> f64 {
    match position {
        Position::Long => significant_close - arc,
        Position::Short => significant_close + arc,
    }
}

impl Display for VolatilitySystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.name(), self.position)
    }
}

impl Accumulator for VolatilitySystem {
    type Input = (f64, f64);
    type Output = f64;

    fn name(&self) -> String {
        stringify!(VolatilitySystem).to_string()
    }

    fn step(self, (close, arc): (f64, f64)) -> Self {
        let (position, significant_close) = match self.position {
            Position::Long if close < self.sar => (Position::Short, close),
            Position::Short if close > self.sar => (Position::Long, close),
            Position::Long => (Position::Long, self.significant_close.max(close)),
            Position::Short => (Position::Short, self.significant_close.min(close)),
        };
        Self {
            position,
            significant_close,
            sar: stop(position, significant_close, arc),
        }
    }

    fn value(&self) -> f64 {
        self.sar
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
    fn test_seed_long_uses_highest_close() {
        let system = VolatilitySystem::seed(&[192.0, 200.0, 201.0], 32.0);
        assert_eq!(system.position, Position::Long);
        assert_eq!(system.significant_close, 201.0);
        assert_eq!(system.sar, 169.0);
    }

    #[rstest]
    fn test_seed_short_uses_lowest_close() {
        let system = VolatilitySystem::seed(&[201.0, 187.0, 188.0], 10.0);
        assert_eq!(system.position, Position::Short);
        assert_eq!(system.significant_close, 187.0);
        assert_eq!(system.sar, 197.0);
    }

    #[rstest]
    fn test_step_reverses_when_close_crosses_stop() {
        let system = VolatilitySystem::seed(&[192.0, 200.0, 201.0], 32.0).step((160.0, 20.0));
        assert_eq!(system.position, Position::Short);
        assert_eq!(system.significant_close, 160.0);
        assert_eq!(system.value(), 180.0);
        assert_eq!(system.to_string(), "VolatilitySystem(short)");
    }
}
