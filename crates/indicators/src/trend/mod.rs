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

//! Trend indicators: direction and persistence of price moves.

pub mod bulk;
pub mod single;

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use techan_core::{
    IndicatorError, IndicatorResult,
    correctness::{check_non_negative_f64, check_positive_f64},
    math::{diffs, last_index_of_max, last_index_of_min},
};

use crate::{
    average,
    indicator::Accumulator,
    model::{ConstantModelType, Position},
};

/// The Aroon lines of a window.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Aroon {
    pub up: f64,
    pub down: f64,
    /// `up - down`.
    pub oscillator: f64,
}

/// The directional movement system at the end of a window.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DirectionalMovement {
    pub positive_di: f64,
    pub negative_di: f64,
    /// The average directional index.
    pub adx: f64,
    /// The average directional index rating.
    pub adxr: f64,
}

/// Acceleration factor settings for the parabolic time/price system.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParabolicConfig {
    /// The acceleration factor at the start of every trend.
    pub acceleration_factor_start: f64,
    /// The cap on the acceleration factor.
    pub acceleration_factor_max: f64,
    /// The increment applied on every new extreme point.
    pub acceleration_factor_step: f64,
}

impl ParabolicConfig {
    /// Validates the acceleration factor settings.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `acceleration_factor_start` is negative.
    /// - `acceleration_factor_max` or `acceleration_factor_step` is not positive.
    /// - `acceleration_factor_start` exceeds `acceleration_factor_max`.
    pub fn validate(&self) -> IndicatorResult<()> {
        check_non_negative_f64(self.acceleration_factor_start, "acceleration_factor_start")?;
        check_positive_f64(self.acceleration_factor_max, "acceleration_factor_max")?;
        check_positive_f64(self.acceleration_factor_step, "acceleration_factor_step")?;
        if self.acceleration_factor_start > self.acceleration_factor_max {
            return Err(IndicatorError::invalid_parameter(
                "acceleration_factor_start",
                format!(
                    "{} exceeds 'acceleration_factor_max' {}",
                    self.acceleration_factor_start, self.acceleration_factor_max
                ),
            ));
        }
        Ok(())
    }
}

impl Default for ParabolicConfig {
    /// Creates a new default [`ParabolicConfig`] instance.
    fn default() -> Self {
        Self {
            acceleration_factor_start: 0.02,
            acceleration_factor_max: 0.20,
            acceleration_factor_step: 0.02,
        }
    }
}

pub(crate) fn aroon_up(high: &[f64]) -> f64 {
    100.0 * last_index_of_max(high) as f64 / (high.len() - 1) as f64
}

pub(crate) fn aroon_down(low: &[f64]) -> f64 {
    100.0 * last_index_of_min(low) as f64 / (low.len() - 1) as f64
}

pub(crate) fn aroon_indicator(high: &[f64], low: &[f64]) -> Aroon {
    let up = aroon_up(high);
    let down = aroon_down(low);
    Aroon {
        up,
        down,
        oscillator: up - down,
    }
}

pub(crate) fn long_parabolic_time_price_system(
    previous_sar: f64,
    extreme_point: f64,
    acceleration_factor: f64,
    low: f64,
) -> f64 {
    (previous_sar + acceleration_factor * (extreme_point - previous_sar)).min(low)
}

pub(crate) fn short_parabolic_time_price_system(
    previous_sar: f64,
    extreme_point: f64,
    acceleration_factor: f64,
    high: f64,
) -> f64 {
    (previous_sar - acceleration_factor * (previous_sar - extreme_point)).max(high)
}

/// Splits the move between two bars into positive and negative directional movement.
///
/// Only the larger of the two moves counts, and only when it is positive.
pub(crate) fn directional_movement(
    current_high: f64,
    previous_high: f64,
    current_low: f64,
    previous_low: f64,
) -> (f64, f64) {
    let up_move = current_high - previous_high;
    let down_move = previous_low - current_low;
    let positive = if up_move > 0.0 && up_move > down_move {
        up_move
    } else {
        0.0
    };
    let negative = if down_move > 0.0 && down_move > up_move {
        down_move
    } else {
        0.0
    };
    (positive, negative)
}

/// The directional indicator sums movement and range over the window, independent of the model.
pub(crate) fn directional_indicator(directional_movement: &[f64], true_ranges: &[f64]) -> f64 {
    100.0 * directional_movement.iter().sum::<f64>() / true_ranges.iter().sum::<f64>()
}

/// A `0 / 0` directional index propagates as `NaN`.
pub(crate) fn directional_index(positive_di: f64, negative_di: f64) -> f64 {
    100.0 * (positive_di - negative_di).abs() / (positive_di + negative_di)
}

pub(crate) fn volume_price_trend(
    current_price: f64,
    previous_price: f64,
    volume: f64,
    previous_vpt: f64,
) -> f64 {
    previous_vpt + volume * (current_price - previous_price) / previous_price
}

/// Double smoothed momentum over double smoothed absolute momentum.
///
/// The first smoothing runs over every window of `first_period` price changes, the second
/// over all the first smoothings.
pub(crate) fn true_strength_index(
    prices: &[f64],
    first_period: usize,
    first_model: ConstantModelType,
    second_model: ConstantModelType,
) -> f64 {
    let momentum = diffs(prices);
    let absolute_momentum: Vec<f64> = momentum.iter().map(|change| change.abs()).collect();
    let first_smoothing: Vec<f64> = momentum
        .windows(first_period)
        .map(|window| average::calculate(window, first_model))
        .collect();
    let first_absolute_smoothing: Vec<f64> = absolute_momentum
        .windows(first_period)
        .map(|window| average::calculate(window, first_model))
        .collect();
    average::calculate(&first_smoothing, second_model)
        / average::calculate(&first_absolute_smoothing, second_model)
}

/// The parabolic stop and reverse, trailing price from below while long and from above while
/// short.
///
/// Each step reads a `(high, low)` bar.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ParabolicSar {
    pub config: ParabolicConfig,
    pub position: Position,
    pub sar: f64,
    pub extreme_point: f64,
    pub acceleration_factor: f64,
}

impl ParabolicSar {
    /// Creates a new [`ParabolicSar`] from the first bar.
    ///
    /// Without a `previous_sar` the stop starts at the bar's low when long and at its high
    /// when short.
    #[must_use]
    pub fn seed(
        config: ParabolicConfig,
        position: Position,
        high: f64,
        low: f64,
        previous_sar: Option<f64>,
    ) -> Self {
        let (sar, extreme_point) = match position {
            Position::Long => (previous_sar.unwrap_or(low), high),
            Position::Short => (previous_sar.unwrap_or(high), low),
        };
        Self {
            config,
            position,
            sar,
            extreme_point,
            acceleration_factor: config.acceleration_factor_start,
        }
    }

    fn reverse(self, extreme_point: f64) -> Self {
        Self {
            position: self.position.opposite(),
            sar: self.extreme_point,
            extreme_point,
            acceleration_factor: self.config.acceleration_factor_start,
            ..self
        }
    }

    fn accelerate(self, sar: f64, extreme_point: f64, is_new_extreme: bool) -> Self {
        let acceleration_factor = if is_new_extreme {
            (self.acceleration_factor + self.config.acceleration_factor_step)
                .min(self.config.acceleration_factor_max)
        } else {
            self.acceleration_factor
        };
        Self {
            sar,
            extreme_point,
            acceleration_factor,
            ..self
        }
    }
}

impl Display for ParabolicSar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.name(), self.position)
    }
}

impl Accumulator for ParabolicSar {
    type Input = (f64, f64);
    type Output = f64;

    fn name(&self) -> String {
        stringify!(ParabolicSar).to_string()
    }

    fn step(self, (high, low): (f64, f64)) -> Self {
        let projected =
            self.sar + self.acceleration_factor * (self.extreme_point - self.sar);
        match self.position {
            Position::Long if low < projected => self.reverse(low),
            Position::Short if high > projected => self.reverse(high),
            Position::Long => self.accelerate(
                long_parabolic_time_price_system(
                    self.sar,
                    self.extreme_point,
                    self.acceleration_factor,
                    low,
                ),
                self.extreme_point.max(high),
                high > self.extreme_point,
            ),
            Position::Short => self.accelerate(
                short_parabolic_time_price_system(
                    self.sar,
                    self.extreme_point,
                    self.acceleration_factor,
                    high,
                ),
                self.extreme_point.min(low),
                low < self.extreme_point,
            ),
        }
    }

    fn value(&self) -> f64 {
        self.sar
    }
}

/// The running volume price trend.
///
/// Each step reads `(current_price, previous_price, volume)`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VolumePriceTrend {
    pub value: f64,
}

impl VolumePriceTrend {
    /// Creates a new [`VolumePriceTrend`] instance seeded with `previous_vpt`.
    #[must_use]
    pub const fn new(previous_vpt: f64) -> Self {
        Self {
            value: previous_vpt,
        }
    }
}

impl Display for VolumePriceTrend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.name(), self.value)
    }
}

impl Accumulator for VolumePriceTrend {
    type Input = (f64, f64, f64);
    type Output = f64;

    fn name(&self) -> String {
        stringify!(VolumePriceTrend).to_string()
    }

    fn step(self, (current_price, previous_price, volume): Self::Input) -> Self {
        Self {
            value: volume_price_trend(current_price, previous_price, volume, self.value),
        }
    }

    fn value(&self) -> f64 {
        self.value
    }
}
