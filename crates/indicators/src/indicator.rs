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

//! A common `Accumulator` trait for sequential indicators.

use std::fmt::{Debug, Display};

/// A sequential indicator whose next value depends on its previous state.
///
/// Accumulators are small `Copy` values: each step consumes the current state and returns the
/// next one, so a bulk evaluation is an explicit fold over the series (see
/// [`window::fold`](crate::window::fold)) and the initial state is always supplied by the
/// caller.
pub trait Accumulator: Copy + Debug + Display {
    /// The per-step input, usually a tuple of the bar values the indicator reads.
    type Input;
    /// The value reported after each step.
    type Output;

    fn name(&self) -> String;

    /// Consumes one step of input and returns the updated state.
    #[must_use]
    fn step(self, input: Self::Input) -> Self;

    fn value(&self) -> Self::Output;
}
