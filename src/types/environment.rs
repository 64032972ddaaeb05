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
Calendario y constantes físicas
===============================

Periodos de cálculo mensuales y propiedades del aire
*/

/// Número de meses del periodo de cálculo
pub const MONTHS_PER_YEAR: usize = 12;

/// Días de cada mes (sin años bisiestos)
///
/// Days of each month (no leap years)
pub const DAYS_PER_MONTH: [f64; MONTHS_PER_YEAR] = [
    31.0, 28.0, 31.0, 30.0, 31.0, 30.0, 31.0, 31.0, 30.0, 31.0, 30.0, 31.0,
];

/// Días por año, usado para repartir las horas de plena carga anuales
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Horas por día
pub const HOURS_PER_DAY: f64 = 24.0;

/// Luftdichte, air density [kg/m3]
pub const RHO_AIR: f64 = 1.2;

/// Spez. Wärmekapazität Luft, specific heat capacity of air [J/(kg·K)]
pub const CP_AIR: f64 = 1005.0;

/// Month abbreviations, used in reports
pub const MONTH_NAMES: [&str; MONTHS_PER_YEAR] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Länge der Berechnungsperiode
///
/// Length of each monthly calculation period, t [h]
pub fn calculation_hours() -> [f64; MONTHS_PER_YEAR] {
    let mut t = [0.0; MONTHS_PER_YEAR];
    for (t_m, days) in t.iter_mut().zip(DAYS_PER_MONTH.iter()) {
        *t_m = HOURS_PER_DAY * days;
    }
    t
}

/// Vollaststunden pro Monat
///
/// Monthly full-load hours from annual full-load hours, proportional to the days of each month
pub fn monthly_full_load_hours(annual: f64) -> [f64; MONTHS_PER_YEAR] {
    let mut hours = [0.0; MONTHS_PER_YEAR];
    for (h, days) in hours.iter_mut().zip(DAYS_PER_MONTH.iter()) {
        *h = annual * (days / DAYS_PER_YEAR);
    }
    hours
}
