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

//! Type stubs to facilitate testing.

use rstest::*;

////////////////////////////////////////////////////////////////////////////////
// Prices
////////////////////////////////////////////////////////////////////////////////
#[fixture]
pub fn prices() -> Vec<f64> {
    vec![100.0, 102.0, 103.0, 101.0, 99.0]
}

////////////////////////////////////////////////////////////////////////////////
// Bars
////////////////////////////////////////////////////////////////////////////////
#[fixture]
pub fn open() -> Vec<f64> {
    vec![180.0, 190.0, 200.0, 190.0, 180.0]
}

#[fixture]
pub fn high() -> Vec<f64> {
    vec![200.0, 210.0, 205.0, 190.0, 185.0]
}

#[fixture]
pub fn low() -> Vec<f64> {
    vec![175.0, 192.0, 200.0, 174.0, 179.0]
}

#[fixture]
pub fn close() -> Vec<f64> {
    vec![192.0, 200.0, 201.0, 187.0, 188.0]
}

#[fixture]
pub fn volume() -> Vec<f64> {
    vec![1000.0, 1500.0, 1200.0, 900.0, 1300.0]
}

////////////////////////////////////////////////////////////////////////////////
// Extended bars
////////////////////////////////////////////////////////////////////////////////
#[fixture]
pub fn extended_high() -> Vec<f64> {
    let mut values = high();
    values.extend([180.0, 195.0, 205.0, 210.0, 225.0]);
    values
}

#[fixture]
pub fn extended_low() -> Vec<f64> {
    let mut values = low();
    values.extend([160.0, 150.0, 170.0, 190.0, 185.0]);
    values
}

#[fixture]
pub fn extended_close() -> Vec<f64> {
    let mut values = close();
    values.extend([175.0, 160.0, 180.0, 200.0, 205.0]);
    values
}
