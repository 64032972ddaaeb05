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
Propiedades del local
=====================

Propiedades estáticas de un local o edificio según SIA 2024 (constante de tiempo,
transmitancias, caudales de aire, recuperación de calor y cargas internas).

Se serializan como un diccionario plano con las claves alemanas de las hojas SIA 2024.
*/

use std::fmt;

use serde_derive::{Deserialize, Serialize};

use crate::error::{Result, Sia380Error};
use crate::types::MetaVec;

/// Raumdaten nach SIA 2024
///
/// Static room (or building) properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomProperties {
    /// Room type description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Zeitkonstante, thermal time constant τ [h]
    #[serde(rename = "Zeitkonstante")]
    pub tau: f64,
    /// U-Wert opake Bauteile, U-value of opaque elements [W/(m2·K)]
    #[serde(rename = "U-Wert opake Bauteile")]
    pub u_op: f64,
    /// U-Wert Fenster, U-value of windows [W/(m2·K)]
    #[serde(rename = "U-Wert Fenster")]
    pub u_w: f64,
    /// Specific external air flow rate per floor area [m3/(m2·h)]
    #[serde(rename = "Aussenluft-Volumenstrom (pro NGF)")]
    pub vdot_e_spec: f64,
    /// Specific infiltration air flow rate per floor area [m3/(m2·h)]
    #[serde(rename = "Aussenluft-Volumenstrom durch Infiltration")]
    pub vdot_inf_spec: f64,
    /// Heat recovery effectiveness η_rec [0, 1)
    #[serde(rename = "Temperatur-Aenderungsgrad der Waermerueckgewinnung")]
    pub eta_rec: f64,
    /// Heat emission of occupants Φ_P [W/m2]
    #[serde(rename = "Waermeeintragsleistung Personen (bei 24.0 deg C, bzw. 70 W)")]
    pub phi_p: f64,
    /// Heat emission of lighting Φ_L [W/m2]
    #[serde(rename = "Waermeeintragsleistung der Raumbeleuchtung")]
    pub phi_l: f64,
    /// Heat emission of equipment Φ_A [W/m2]
    #[serde(rename = "Waermeeintragsleistung der Geraete")]
    pub phi_a: f64,
    /// Annual full-load hours of occupants t_P [h]
    #[serde(rename = "Vollaststunden pro Jahr (Personen)")]
    pub t_p: f64,
    /// Annual full-load hours of lighting t_L [h]
    #[serde(rename = "Jaehrliche Vollaststunden der Raumbeleuchtung")]
    pub t_l: f64,
    /// Annual full-load hours of equipment t_A [h]
    #[serde(rename = "Jaehrliche Vollaststunden der Geraete")]
    pub t_a: f64,
    /// Winter design indoor temperature [ºC], default setpoint
    #[serde(
        rename = "Raumlufttemperatur Auslegung Heizen (Winter)",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub theta_i_winter: Option<f64>,
}

/// Claves de los valores numéricos obligatorios
pub const KEY_TAU: &str = "Zeitkonstante";
/// U-value of opaque elements key
pub const KEY_U_OP: &str = "U-Wert opake Bauteile";
/// U-value of windows key
pub const KEY_U_W: &str = "U-Wert Fenster";
/// Specific external air flow rate key
pub const KEY_VDOT_E: &str = "Aussenluft-Volumenstrom (pro NGF)";
/// Specific infiltration air flow rate key
pub const KEY_VDOT_INF: &str = "Aussenluft-Volumenstrom durch Infiltration";
/// Heat recovery effectiveness key
pub const KEY_ETA_REC: &str = "Temperatur-Aenderungsgrad der Waermerueckgewinnung";
/// Occupants heat emission key
pub const KEY_PHI_P: &str = "Waermeeintragsleistung Personen (bei 24.0 deg C, bzw. 70 W)";
/// Lighting heat emission key
pub const KEY_PHI_L: &str = "Waermeeintragsleistung der Raumbeleuchtung";
/// Equipment heat emission key
pub const KEY_PHI_A: &str = "Waermeeintragsleistung der Geraete";
/// Occupants full-load hours key
pub const KEY_T_P: &str = "Vollaststunden pro Jahr (Personen)";
/// Lighting full-load hours key
pub const KEY_T_L: &str = "Jaehrliche Vollaststunden der Raumbeleuchtung";
/// Equipment full-load hours key
pub const KEY_T_A: &str = "Jaehrliche Vollaststunden der Geraete";
/// Winter design temperature key
pub const KEY_THETA_I_WINTER: &str = "Raumlufttemperatur Auslegung Heizen (Winter)";

impl RoomProperties {
    /// Lee propiedades desde JSON (claves SIA 2024, se ignoran claves desconocidas)
    ///
    /// Read room properties from a JSON object with SIA 2024 keys
    pub fn from_json(s: &str) -> Result<Self> {
        let room: RoomProperties = serde_json::from_str(s)?;
        room.validate()?;
        Ok(room)
    }

    /// Lee propiedades desde los metadatos (`#META clave: valor`)
    ///
    /// Read room properties from metadata with SIA 2024 keys
    pub fn from_meta<M: MetaVec>(meta: &M) -> Result<Self> {
        let required = |key: &str| -> Result<f64> {
            meta.get_meta_f64(key)?.ok_or_else(|| {
                Sia380Error::InvalidInput(format!("missing room property `{}`", key))
            })
        };
        let room = RoomProperties {
            description: meta.get_meta("description"),
            tau: required(KEY_TAU)?,
            u_op: required(KEY_U_OP)?,
            u_w: required(KEY_U_W)?,
            vdot_e_spec: required(KEY_VDOT_E)?,
            vdot_inf_spec: required(KEY_VDOT_INF)?,
            eta_rec: required(KEY_ETA_REC)?,
            phi_p: required(KEY_PHI_P)?,
            phi_l: required(KEY_PHI_L)?,
            phi_a: required(KEY_PHI_A)?,
            t_p: required(KEY_T_P)?,
            t_l: required(KEY_T_L)?,
            t_a: required(KEY_T_A)?,
            theta_i_winter: meta.get_meta_f64(KEY_THETA_I_WINTER)?,
        };
        room.validate()?;
        Ok(room)
    }

    /// Vuelca las propiedades a los metadatos
    ///
    /// Store room properties as metadata, replacing existing values
    pub fn to_meta<M: MetaVec>(&self, meta: &mut M) {
        if let Some(description) = &self.description {
            meta.set_meta("description", description);
        }
        for (key, value) in self.values() {
            meta.set_meta(key, &value.to_string());
        }
        if let Some(theta) = self.theta_i_winter {
            meta.set_meta(KEY_THETA_I_WINTER, &theta.to_string());
        }
    }

    /// Comprueba rangos de validez
    ///
    /// Check that every rate and U-value is non negative and finite and that η_rec is in [0, 1)
    pub fn validate(&self) -> Result<()> {
        for (key, value) in self.values().iter() {
            if !value.is_finite() || *value < 0.0 {
                return Err(Sia380Error::InvalidInput(format!(
                    "room property `{}` must be a non negative number and is {}",
                    key, value
                )));
            }
        }
        if self.eta_rec >= 1.0 {
            return Err(Sia380Error::InvalidInput(format!(
                "heat recovery effectiveness must be in [0, 1) and is {}",
                self.eta_rec
            )));
        }
        if let Some(theta) = self.theta_i_winter {
            if !theta.is_finite() {
                return Err(Sia380Error::InvalidInput(format!(
                    "room property `{}` is not a number",
                    KEY_THETA_I_WINTER
                )));
            }
        }
        Ok(())
    }

    /// Numeric values with their keys, in SIA 2024 order
    fn values(&self) -> [(&'static str, f64); 12] {
        [
            (KEY_TAU, self.tau),
            (KEY_U_OP, self.u_op),
            (KEY_U_W, self.u_w),
            (KEY_VDOT_E, self.vdot_e_spec),
            (KEY_VDOT_INF, self.vdot_inf_spec),
            (KEY_ETA_REC, self.eta_rec),
            (KEY_PHI_P, self.phi_p),
            (KEY_PHI_L, self.phi_l),
            (KEY_PHI_A, self.phi_a),
            (KEY_T_P, self.t_p),
            (KEY_T_L, self.t_l),
            (KEY_T_A, self.t_a),
        ]
    }
}

impl fmt::Display for RoomProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = self
            .values()
            .iter()
            .map(|(k, v)| format!("{}: {}", k, v))
            .collect::<Vec<_>>()
            .join("\n");
        match &self.description {
            Some(desc) => write!(f, "{}\n{}", desc, lines),
            None => write!(f, "{}", lines),
        }
    }
}
