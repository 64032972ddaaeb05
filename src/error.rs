// Copyright (c) 2018-2022  Ministerio de Fomento
//                          Instituto de Ciencias de la Construcción Eduardo Torroja (IETcc-CSIC)

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

// Author(s): Rafael Villar Burke <pachi@ietcc.csic.es>,
//            Daniel Jiménez González <dani@ietcc.csic.es>,
//            Marta Sorribes Gil <msorribes@ietcc.csic.es>

/*!
Errores
=======

Tipos de error del cálculo de demanda mensual

Error types of the monthly demand calculation
*/

use std::fmt;

/// Errores del cálculo SIA 380.1
///
/// Errors of the SIA 380.1 calculation
#[derive(Debug, Clone, PartialEq)]
pub enum Sia380Error {
    /// Input data or metadata could not be parsed
    ParseError(String),
    /// Input data is out of range or inconsistent (series lengths, negative values...)
    InvalidInput(String),
    /// Total heat loss of a month is zero while there are heat gains (gains/losses ratio undefined)
    DegenerateBalance {
        /// Month index (0 = January)
        month: usize,
        /// Total heat gains Q_i + Q_s [Wh]
        gains: f64,
    },
}

impl fmt::Display for Sia380Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Sia380Error::*;
        match self {
            ParseError(v) => write!(f, "Could not parse input data: {}", v),
            InvalidInput(v) => write!(f, "Invalid input data: {}", v),
            DegenerateBalance { month, gains } => write!(
                f,
                "Undefined gains/losses ratio in month {}: total losses are zero with gains of {:.2} Wh",
                month + 1,
                gains
            ),
        }
    }
}

impl std::error::Error for Sia380Error {}

impl From<std::num::ParseFloatError> for Sia380Error {
    fn from(err: std::num::ParseFloatError) -> Self {
        Sia380Error::ParseError(format!("wrong number format ({})", err))
    }
}

impl From<serde_json::Error> for Sia380Error {
    fn from(err: serde_json::Error) -> Self {
        Sia380Error::ParseError(format!("wrong JSON data ({})", err))
    }
}

/// Resultado con error Sia380Error
pub type Result<T> = std::result::Result<T, Sia380Error>;
