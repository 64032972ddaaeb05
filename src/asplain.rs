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
Salida en formato simple
========================

Resultados del cálculo de demanda en texto plano
*/

use itertools::Itertools; // join

use crate::types::{MonthlyResult, MONTH_NAMES, WH_PER_KWH};

/// Muestra los resultados de demanda de forma simplificada.
///
/// Floor area, annual totals, totals per m2 and a monthly table.
/// All energies are shown in kWh.
pub fn demand_to_plain(result: &MonthlyResult) -> String {
    let annual = result.annual();
    let annual_m2 = result.annual_m2();

    let rows = (0..result.len())
        .map(|m| {
            format!(
                "{:<4}{:>10.1}{:>10.1}{:>10.1}{:>10.1}{:>10.1}{:>10.1}{:>10.1}{:>8.3}{:>8.3}",
                MONTH_NAMES.get(m).unwrap_or(&"-"),
                result.heating[m],
                result.cooling[m],
                result.electricity[m],
                result.q_t[m] / WH_PER_KWH,
                result.q_v[m] / WH_PER_KWH,
                result.q_i[m] / WH_PER_KWH,
                result.q_s[m] / WH_PER_KWH,
                result.gamma[m],
                result.eta_g[m],
            )
        })
        .join("\n");

    format!(
        "** Demanda mensual SIA 380.1

Floor area = {:.2} [m2]
Q_H [kWh/a] = {:.1}, Q_C [kWh/a] = {:.1}, Q_El [kWh/a] = {:.1}
Q_H [kWh/m2.a] = {:.1}, Q_C [kWh/m2.a] = {:.1}, Q_El [kWh/m2.a] = {:.1}

** Balance mensual [kWh]:

{:<4}{:>10}{:>10}{:>10}{:>10}{:>10}{:>10}{:>10}{:>8}{:>8}
{}
",
        result.floor_area,
        annual.heating,
        annual.cooling,
        annual.electricity,
        annual_m2.heating,
        annual_m2.cooling,
        annual_m2.electricity,
        "",
        "Q_H",
        "Q_C",
        "Q_El",
        "Q_T",
        "Q_V",
        "Q_i",
        "Q_s",
        "gamma",
        "eta_g",
        rows
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MonthBalance, MONTHS_PER_YEAR};

    #[test]
    fn plain_report() {
        let months = vec![
            MonthBalance {
                q_t: 2000.0,
                q_h: 1500.0,
                q_el: 100.0,
                gamma: 0.25,
                eta_g: 1.0,
                ..MonthBalance::default()
            };
            MONTHS_PER_YEAR
        ];
        let res = MonthlyResult::from_months(10.0, &months);
        let out = demand_to_plain(&res);
        assert!(out.contains("Floor area = 10.00 [m2]"));
        assert!(out.contains("Q_H [kWh/a] = 18.0, Q_C [kWh/a] = 0.0, Q_El [kWh/a] = 1.2"));
        assert!(out.contains("Q_H [kWh/m2.a] = 1.8,"));
        assert!(out.contains("Jan"));
        assert!(out.contains("Dec"));
        assert_eq!(out.lines().filter(|l| l.contains("0.250")).count(), 12);
    }
}
