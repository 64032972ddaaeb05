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
Resultados
==========

Resultados mensuales y anuales del balance SIA 380.1
*/

use serde_derive::{Deserialize, Serialize};

use crate::types::MONTHS_PER_YEAR;
use crate::vecops::{veckdiv, vecsum};

/// Factor de conversión de kWh a Wh
pub const WH_PER_KWH: f64 = 1000.0;

/// Balance de un mes
///
/// Heat balance terms of a single month. All energies in Wh.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthBalance {
    /// Transmission losses Q_T [Wh]
    pub q_t: f64,
    /// Ventilation losses Q_V [Wh]
    pub q_v: f64,
    /// Internal gains Q_i [Wh]
    pub q_i: f64,
    /// Solar gains Q_s [Wh]
    pub q_s: f64,
    /// Gains/losses ratio γ [-]
    pub gamma: f64,
    /// Utilization factor for heat gains η_g [-]
    pub eta_g: f64,
    /// Heating demand Q_H [Wh], >= 0
    pub q_h: f64,
    /// Cooling demand Q_C [Wh], signed (<= 0)
    pub q_c: f64,
    /// Electricity demand Q_el [Wh]
    pub q_el: f64,
}

/// Resultados mensuales del cálculo
///
/// Monthly results (12 values per series, January first).
///
/// Heating, cooling and electricity demand are in kWh. The diagnostic terms
/// Q_T, Q_V, Q_i and Q_s are kept in Wh.
///
/// Cooling demand keeps the sign of the balance and is <= 0.
/// Use `cooling_abs` to get magnitudes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyResult {
    /// Floor area [m2]
    pub floor_area: f64,
    /// Heating demand [kWh], >= 0
    pub heating: Vec<f64>,
    /// Cooling demand [kWh], signed (<= 0)
    pub cooling: Vec<f64>,
    /// Electricity demand for lighting and equipment [kWh], >= 0
    pub electricity: Vec<f64>,
    /// Transmission losses [Wh]
    pub q_t: Vec<f64>,
    /// Ventilation losses [Wh]
    pub q_v: Vec<f64>,
    /// Internal gains [Wh]
    pub q_i: Vec<f64>,
    /// Solar gains [Wh]
    pub q_s: Vec<f64>,
    /// Gains/losses ratio [-]
    pub gamma: Vec<f64>,
    /// Utilization factor for heat gains [-]
    pub eta_g: Vec<f64>,
}

impl MonthlyResult {
    /// Agrega los balances mensuales
    ///
    /// Build results from the balances of each month
    pub fn from_months(floor_area: f64, months: &[MonthBalance]) -> Self {
        let series = |f: fn(&MonthBalance) -> f64| months.iter().map(f).collect::<Vec<f64>>();
        Self {
            floor_area,
            heating: veckdiv(&series(|m| m.q_h), WH_PER_KWH),
            cooling: veckdiv(&series(|m| m.q_c), WH_PER_KWH),
            electricity: veckdiv(&series(|m| m.q_el), WH_PER_KWH),
            q_t: series(|m| m.q_t),
            q_v: series(|m| m.q_v),
            q_i: series(|m| m.q_i),
            q_s: series(|m| m.q_s),
            gamma: series(|m| m.gamma),
            eta_g: series(|m| m.eta_g),
        }
    }

    /// Cooling demand magnitudes [kWh], >= 0
    pub fn cooling_abs(&self) -> Vec<f64> {
        self.cooling.iter().map(|v| v.abs()).collect()
    }

    /// Demanda anual
    ///
    /// Annual totals [kWh/a]
    pub fn annual(&self) -> AnnualDemand {
        AnnualDemand {
            heating: vecsum(&self.heating),
            cooling: vecsum(&self.cooling),
            electricity: vecsum(&self.electricity),
        }
    }

    /// Demanda anual por m2 de superficie de referencia
    ///
    /// Annual totals per floor area [kWh/(m2·a)]. Zero for a zero floor area
    pub fn annual_m2(&self) -> AnnualDemand {
        if self.floor_area > 0.0 {
            self.annual() / self.floor_area
        } else {
            AnnualDemand::default()
        }
    }

    /// Number of months with results
    pub fn len(&self) -> usize {
        self.heating.len()
    }

    /// Check if there are no monthly results
    pub fn is_empty(&self) -> bool {
        self.heating.is_empty()
    }
}

impl Default for MonthlyResult {
    fn default() -> Self {
        MonthlyResult::from_months(0.0, &[MonthBalance::default(); MONTHS_PER_YEAR])
    }
}

/// Demanda anual de calefacción, refrigeración y electricidad
///
/// Annual heating, cooling (signed) and electricity demand
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnnualDemand {
    /// Heating demand
    #[serde(serialize_with = "round_serialize_3")]
    pub heating: f64,
    /// Cooling demand (<= 0)
    #[serde(serialize_with = "round_serialize_3")]
    pub cooling: f64,
    /// Electricity demand
    #[serde(serialize_with = "round_serialize_3")]
    pub electricity: f64,
}

fn round_serialize_3<S>(x: &f64, s: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    s.serialize_f64((x * 1000.0).round() / 1000.0)
}

impl std::ops::Div<f64> for AnnualDemand {
    type Output = AnnualDemand;

    fn div(self, k: f64) -> AnnualDemand {
        AnnualDemand {
            heating: self.heating / k,
            cooling: self.cooling / k,
            electricity: self.electricity / k,
        }
    }
}
