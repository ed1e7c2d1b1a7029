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

//! Closed selector types for the averaging and dispersion strategies.
//!
//! Each selector is the source of truth for dispatch. String tokens are only accepted at the
//! host boundary, through a single validated parse which rejects anything outside the fixed
//! vocabulary (including the empty string).

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};
use techan_core::{IndicatorError, IndicatorResult, correctness::check_positive_usize};

/// The moving-constant model used to reduce a window to a central value.
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    Hash,
    PartialEq,
    Eq,
    AsRefStr,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case", try_from = "RawConstantModelType")]
pub enum ConstantModelType {
    /// The arithmetic mean.
    Simple,
    /// Recursive smoothing with weight `1 / period`.
    Smoothed,
    /// Recursive smoothing with weight `2 / (period + 1)`.
    Exponential,
    /// Recursive smoothing with weight `alpha_num / (period + alpha_den)`.
    Personalised {
        /// The smoothing constant numerator.
        alpha_num: usize,
        /// The period offset of the smoothing constant denominator.
        alpha_den: usize,
    },
    /// The middle order statistic.
    Median,
    /// The most frequent value, smallest on ties.
    Mode,
}

impl ConstantModelType {
    /// Parses a host-supplied model token, ASCII case-insensitively.
    ///
    /// The `"personalised"` token additionally requires the `(alpha_num, alpha_den)` pair.
    ///
    /// # Errors
    ///
    /// Returns [`IndicatorError::InvalidParameter`] if:
    /// - `token` is empty or outside `{simple, smoothed, exponential, personalised, median, mode}`.
    /// - `token` is `"personalised"` and `personalised` is `None` or holds a zero.
    pub fn from_token(token: &str, personalised: Option<(usize, usize)>) -> IndicatorResult<Self> {
        let model = match token.to_ascii_lowercase().as_str() {
            "simple" => Self::Simple,
            "smoothed" => Self::Smoothed,
            "exponential" => Self::Exponential,
            "median" => Self::Median,
            "mode" => Self::Mode,
            "personalised" => match personalised {
                Some((alpha_num, alpha_den)) => Self::Personalised {
                    alpha_num,
                    alpha_den,
                },
                None => {
                    return Err(IndicatorError::invalid_parameter(
                        "model",
                        "'personalised' requires an (alpha_num, alpha_den) pair",
                    ));
                }
            },
            _ => return Err(unrecognized_token("model", token)),
        };
        model.validate()?;
        Ok(model)
    }

    /// Validates the parameters carried by the model.
    ///
    /// # Errors
    ///
    /// Returns [`IndicatorError::InvalidParameter`] if a personalised smoothing constant has a
    /// zero numerator or denominator.
    pub fn validate(&self) -> IndicatorResult<()> {
        if let Self::Personalised {
            alpha_num,
            alpha_den,
        } = *self
        {
            check_positive_usize(alpha_num, "alpha_num")?;
            check_positive_usize(alpha_den, "alpha_den")?;
        }
        Ok(())
    }
}

/// Unvalidated wire form of [`ConstantModelType`].
#[derive(Deserialize)]
#[serde(rename_all = "snake_case")]
enum RawConstantModelType {
    Simple,
    Smoothed,
    Exponential,
    Personalised { alpha_num: usize, alpha_den: usize },
    Median,
    Mode,
}

impl TryFrom<RawConstantModelType> for ConstantModelType {
    type Error = IndicatorError;

    fn try_from(raw: RawConstantModelType) -> Result<Self, Self::Error> {
        let model = match raw {
            RawConstantModelType::Simple => Self::Simple,
            RawConstantModelType::Smoothed => Self::Smoothed,
            RawConstantModelType::Exponential => Self::Exponential,
            RawConstantModelType::Personalised {
                alpha_num,
                alpha_den,
            } => Self::Personalised {
                alpha_num,
                alpha_den,
            },
            RawConstantModelType::Median => Self::Median,
            RawConstantModelType::Mode => Self::Mode,
        };
        model.validate()?;
        Ok(model)
    }
}

impl FromStr for ConstantModelType {
    type Err = IndicatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s, None)
    }
}

/// The dispersion model used to measure spread around a center.
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    AsRefStr,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum DeviationModel {
    /// Population standard deviation around the center.
    #[strum(to_string = "standard")]
    #[serde(rename = "standard")]
    StandardDeviation,
    /// Mean absolute deviation around the center.
    #[strum(to_string = "mean")]
    #[serde(rename = "mean")]
    MeanAbsoluteDeviation,
    /// Median absolute deviation around the window's own median.
    #[strum(to_string = "median")]
    #[serde(rename = "median")]
    MedianAbsoluteDeviation,
    /// Mode absolute deviation around the window's own mode.
    #[strum(to_string = "mode")]
    #[serde(rename = "mode")]
    ModeAbsoluteDeviation,
    /// Root-mean-square of percentage drawdowns from the running peak.
    #[strum(to_string = "ulcer")]
    #[serde(rename = "ulcer")]
    UlcerIndex,
}

impl DeviationModel {
    /// Parses a host-supplied deviation token, ASCII case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`IndicatorError::InvalidParameter`] if `token` is empty or outside
    /// `{standard, mean, median, mode, ulcer}`.
    pub fn from_token(token: &str) -> IndicatorResult<Self> {
        Self::from_str(token).map_err(|_| unrecognized_token("deviation_model", token))
    }
}

/// The trend direction carried by the stop-and-reverse style indicators.
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    Hash,
    PartialEq,
    Eq,
    AsRefStr,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Position {
    Long,
    Short,
}

impl Position {
    /// Parses a host-supplied position token, ASCII case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`IndicatorError::InvalidParameter`] if `token` is not `long` or `short`.
    pub fn from_token(token: &str) -> IndicatorResult<Self> {
        Self::from_str(token).map_err(|_| unrecognized_token("position", token))
    }

    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Long => Self::Short,
            Self::Short => Self::Long,
        }
    }
}

fn unrecognized_token(param: &'static str, token: &str) -> IndicatorError {
    if token.is_empty() {
        IndicatorError::invalid_parameter(param, "empty token")
    } else {
        IndicatorError::invalid_parameter(param, format!("unrecognized token '{token}'"))
    }
}
