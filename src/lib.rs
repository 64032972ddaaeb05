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
Sia380
======

This crate provides a library and binary that **implements the monthly heat balance of the
SIA 380.1 standard** (*Thermische Energie im Hochbau*) for a single thermal zone, computing
the monthly heating, cooling and electricity demand from:

- static room properties (SIA 2024 data sheets)
- a floor area
- monthly ambient and indoor temperatures
- the envelope surfaces (opaque and transparent) and their monthly solar gains

It also holds the following assumptions:

- fixed month lengths (no leap years)
- solar gains are computed elsewhere and given as absolute values per surface and month
- electricity demand only includes lighting and equipment
- cooling demand keeps the sign of the heat balance (values <= 0)

Este *crate* proporciona una biblioteca y un programa que **implementa el balance térmico
mensual de la norma SIA 380.1** para una zona térmica, calculando la demanda mensual de
calefacción, refrigeración y electricidad (iluminación y equipos).

# Ejemplo

```rust
use std::fs::read_to_string;
use sia380::*;

// lectura de un archivo de datos de entrada
let input = read_to_string("test_data/efh_reference.txt")
    .unwrap()
    .parse::<DemandInput>()
    .unwrap();

// Propiedades del local tipo (SIA 2024) y superficie de referencia
let room = sia2024::room_properties("efh").unwrap();
let floor_area = 200.0; // superficie de referencia [m2]

// Cálculo de la demanda mensual según SIA 380.1
let result = input.compute(&room, floor_area).unwrap();
assert_eq!(result.len(), 12);

// Visualización compacta
println!("{}", asplain::demand_to_plain(&result));
```

*/

#![deny(missing_docs)]

mod vecops;

pub mod asplain;
pub mod demand;
pub mod error;
pub mod input;
pub mod sia2024;
pub mod types;

pub use demand::compute;
pub use error::Sia380Error;
pub use input::DemandInput;
pub use types::*;

/// Número de versión de la librería
///
/// Version number
pub static VERSION: &str = env!("CARGO_PKG_VERSION");
