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

// -----------------------------------------------------------------------------------
// Monthly series utilities
// -----------------------------------------------------------------------------------

use num::{Float, Zero};

// Multiply vector by scalar
pub fn veckmul<T: Float>(vec1: &[T], k: T) -> Vec<T> {
    vec1.iter().map(|el| *el * k).collect()
}

// Divide vector by scalar
pub fn veckdiv<T: Float>(vec1: &[T], k: T) -> Vec<T> {
    vec1.iter().map(|el| *el / k).collect()
}

// Sum all elements in a vector
pub fn vecsum<'a, T>(vec: &'a [T]) -> T
where
    T: Float + std::iter::Sum<&'a T>,
{
    vec.iter().sum()
}

// Swap rows and columns res[j][i] = rows[i][j]
// Missing values in shorter rows are taken as zero
pub fn transpose<T: Float>(rows: &[Vec<T>]) -> Vec<Vec<T>> {
    let maxlen: usize = rows.iter().map(Vec::len).max().unwrap_or(0_usize);
    (0..maxlen)
        .map(|col| {
            rows.iter()
                .map(|row| *row.get(col).unwrap_or(&Zero::zero()))
                .collect()
        })
        .collect()
}
