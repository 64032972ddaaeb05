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
Datos de entrada
================

Define el tipo DemandInput (metadatos + series mensuales + superficies) y su formato de texto.

Formato (una línea por registro, `#` inicia un comentario):

```text
#META FLOOR_AREA: 200
#META Zeitkonstante: 164
T_E, 0.4164, 1.7143, 6.138, 8.9642, 14.281, 17.4624, 18.3993, 18.7849, 13.9542, 9.8741, 3.9746, 1.5937
T_I, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21
transp, 30, 15.9, 28.1, 52.5, 70.9, 97.4, 100.7, 110.7, 89.6, 64.2, 38.8, 19.0, 11.6 # Fenster Süd
opaque, 467.12, 0.15, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0
```

- `T_E`: temperatura exterior media mensual [ºC]
- `T_I`: temperatura interior de consigna mensual [ºC] (opcional)
- superficies: tipo, área [m2], transmitancia (opcional) y ganancias solares mensuales [kWh].
  El comentario final, si existe, es el nombre de la superficie.
*/

use std::fmt;
use std::str;

use crate::{
    demand,
    error::{Result, Sia380Error},
    sia2024,
    types::{Meta, MetaVec, MonthlyResult, RoomProperties, Surface, MONTHS_PER_YEAR, WH_PER_KWH},
    vecops::{transpose, veckmul},
};

/// Clave de metadatos de la superficie de referencia
pub const META_FLOOR_AREA: &str = "FLOOR_AREA";

/// Datos de entrada del cálculo de demanda con sus metadatos
///
/// Input data of the demand calculation bundled with its metadata
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DemandInput {
    /// Metadata
    pub meta: Vec<Meta>,
    /// Monthly mean ambient temperature [ºC]
    pub t_e: Vec<f64>,
    /// Monthly indoor temperature setpoint [ºC]
    pub t_i: Option<Vec<f64>>,
    /// Envelope surfaces
    pub surfaces: Vec<Surface>,
    /// Monthly solar gains of each surface [surface][month] [kWh]
    pub solar_kwh: Vec<Vec<f64>>,
}

impl MetaVec for DemandInput {
    fn get_metavec(&self) -> &Vec<Meta> {
        &self.meta
    }
    fn get_mut_metavec(&mut self) -> &mut Vec<Meta> {
        &mut self.meta
    }
}

fn series_to_string(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| format!("{}", v))
        .collect::<Vec<_>>()
        .join(", ")
}

fn parse_monthly(values: &[&str], line: &str) -> Result<Vec<f64>> {
    if values.len() != MONTHS_PER_YEAR {
        return Err(Sia380Error::ParseError(format!(
            "expected {} monthly values and found {} in `{}`",
            MONTHS_PER_YEAR,
            values.len(),
            line
        )));
    }
    values
        .iter()
        .map(|v| {
            v.parse::<f64>().map_err(|_| {
                Sia380Error::ParseError(format!("wrong number `{}` in `{}`", v, line))
            })
        })
        .collect()
}

impl fmt::Display for DemandInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines: Vec<String> = self.meta.iter().map(|m| format!("{}", m)).collect();
        lines.push(format!("T_E, {}", series_to_string(&self.t_e)));
        if let Some(t_i) = &self.t_i {
            lines.push(format!("T_I, {}", series_to_string(t_i)));
        }
        for (surface, gains) in self.surfaces.iter().zip(self.solar_kwh.iter()) {
            let data = format!("{}, {}", surface, series_to_string(gains));
            if surface.name.is_empty() {
                lines.push(data);
            } else {
                lines.push(format!("{} # {}", data, surface.name));
            }
        }
        write!(f, "{}", lines.join("\n"))
    }
}

impl str::FromStr for DemandInput {
    type Err = Sia380Error;

    fn from_str(s: &str) -> Result<DemandInput> {
        let s_nobom = if s.starts_with('\u{feff}') {
            &s[3..]
        } else {
            s
        };
        let mut input = DemandInput::default();
        let mut t_e = None;

        for line in s_nobom.lines().map(str::trim) {
            if line.starts_with("#META") {
                input.meta.push(line.parse()?);
                continue;
            }
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (data, comment) = match line.find('#') {
                Some(pos) => (&line[..pos], line[pos + 1..].trim()),
                None => (line, ""),
            };
            let items: Vec<&str> = data.split(',').map(str::trim).collect();
            match items[0].to_uppercase().as_str() {
                "T_E" => {
                    if t_e.is_some() {
                        return Err(Sia380Error::ParseError(format!(
                            "duplicated ambient temperature series in `{}`",
                            line
                        )));
                    }
                    t_e = Some(parse_monthly(&items[1..], line)?);
                }
                "T_I" => {
                    if input.t_i.is_some() {
                        return Err(Sia380Error::ParseError(format!(
                            "duplicated indoor temperature series in `{}`",
                            line
                        )));
                    }
                    input.t_i = Some(parse_monthly(&items[1..], line)?);
                }
                _ => {
                    // type, area[, U-value] followed by the monthly values
                    if items.len() < MONTHS_PER_YEAR + 2 {
                        return Err(Sia380Error::ParseError(format!(
                            "expected `type, area[, U-value]` and {} monthly values in `{}`",
                            MONTHS_PER_YEAR, line
                        )));
                    }
                    let split = items.len() - MONTHS_PER_YEAR;
                    let mut surface: Surface = items[..split].join(",").parse()?;
                    surface.name = comment.to_string();
                    input.solar_kwh.push(parse_monthly(&items[split..], line)?);
                    input.surfaces.push(surface);
                }
            }
        }

        input.t_e = t_e.ok_or_else(|| {
            Sia380Error::ParseError("missing ambient temperature series (T_E)".into())
        })?;
        Ok(input)
    }
}

impl DemandInput {
    /// Ganancias solares en Wh por mes y superficie
    ///
    /// Solar gains matrix [month][surface] in Wh, from the per surface kWh series
    pub fn solar_gains(&self) -> Vec<Vec<f64>> {
        if self.solar_kwh.is_empty() {
            return vec![vec![]; MONTHS_PER_YEAR];
        }
        let gains_wh: Vec<Vec<f64>> = self
            .solar_kwh
            .iter()
            .map(|row| veckmul(row, WH_PER_KWH))
            .collect();
        transpose(&gains_wh)
    }

    /// Temperaturas de consigna
    ///
    /// Indoor temperature series: the `T_I` series, else the winter design
    /// temperature of the room, else the SIA 2024 default
    pub fn setpoints(&self, room: &RoomProperties) -> Vec<f64> {
        match &self.t_i {
            Some(t_i) => t_i.clone(),
            None => {
                let theta = room
                    .theta_i_winter
                    .unwrap_or(sia2024::THETA_I_WINTER_DEFAULT);
                vec![theta; MONTHS_PER_YEAR]
            }
        }
    }

    /// Superficie de referencia de los metadatos, si existe
    pub fn floor_area(&self) -> Result<Option<f64>> {
        self.get_meta_f64(META_FLOOR_AREA)
    }

    /// Propiedades del local definidas en los metadatos
    pub fn room_properties(&self) -> Result<RoomProperties> {
        RoomProperties::from_meta(self)
    }

    /// Calcula la demanda mensual con las propiedades del local y la superficie dadas
    pub fn compute(&self, room: &RoomProperties, floor_area: f64) -> Result<MonthlyResult> {
        demand::compute(
            room,
            floor_area,
            &self.t_e,
            &self.setpoints(room),
            &self.surfaces,
            &self.solar_gains(),
        )
    }
}
