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

//! Technical analysis indicators over in-memory price and volume series.
//!
//! The *indicators* crate is a library of pure functions grouped by indicator family. Every
//! family exposes a `single` module, treating the whole input as one window, and a `bulk`
//! module, sliding a window of `period` values across the series:
//!
//! - **Strategies**: pluggable [moving averages](average) and [deviations](deviation),
//!   selected with the closed [`ConstantModelType`](model::ConstantModelType) and
//!   [`DeviationModel`](model::DeviationModel) types.
//! - **Candle indicators**: envelopes, bands, Ichimoku cloud, Donchian and Keltner channels,
//!   and the supertrend.
//! - **Momentum indicators**: RSI, the stochastic family, Williams %R, MFI, rate of change,
//!   OBV, CCI, MACD, Chaikin, PPO and CMO.
//! - **Trend indicators**: Aroon, parabolic time/price system, directional movement system,
//!   volume price trend and true strength index.
//! - **Strength, volatility and correlation indicators**.
//! - **Standard presets**: the defaults most charting packages ship with.
//!
//! Indicators whose next value depends on the previous one are [`Accumulator`]s with an
//! explicit seed, folded in series order by the [window] engine.
//!
//! # Feature flags
//!
//! - `parallel`: Evaluates independent bulk windows on the [rayon](https://docs.rs/rayon)
//!   thread pool. Output is identical to the sequential build.

#![warn(rustc::all)]
#![deny(unsafe_code)]
#![deny(nonstandard_style)]
#![deny(missing_debug_implementations)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod average;
pub mod candle;
pub mod correlation;
pub mod deviation;
pub mod indicator;
pub mod model;
pub mod momentum;
pub mod other;
pub mod standard;
pub mod strength;
pub mod trend;
pub mod volatility;
pub mod window;

#[cfg(test)]
mod stubs;

// Re-exports
pub use crate::{
    indicator::Accumulator,
    model::{ConstantModelType, DeviationModel, Position},
};
