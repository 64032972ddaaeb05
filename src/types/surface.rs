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
Superficies de la envolvente
============================

Superficies opacas y transparentes que intervienen en las pérdidas por transmisión.
*/

use std::fmt;
use std::str;

use serde_derive::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::error::Sia380Error;
use crate::types::RoomProperties;

/// Tipo de superficie
///
/// Surface type. Transparent surfaces use the window U-value of the room.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
pub enum SurfaceType {
    /// Opaque element (walls, roofs, floors)
    #[strum(to_string = "opaque")]
    Opaque,
    /// Transparent element (windows)
    #[strum(to_string = "transp", serialize = "transparent")]
    Transparent,
}

/// Superficie de la envolvente
///
/// Building surface used for the fabric losses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    /// Surface type
    pub kind: SurfaceType,
    /// Heat transfer area [m2]
    pub area: f64,
    /// Element U-value [W/(m2·K)]. Overrides the room U-value for this surface type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub u_value: Option<f64>,
    /// Element name
    #[serde(default)]
    pub name: String,
}

impl Surface {
    /// Opaque surface with the room U-value
    pub fn opaque(area: f64) -> Self {
        Self {
            kind: SurfaceType::Opaque,
            area,
            u_value: None,
            name: String::new(),
        }
    }

    /// Transparent surface with the room U-value
    pub fn transparent(area: f64) -> Self {
        Self {
            kind: SurfaceType::Transparent,
            area,
            u_value: None,
            name: String::new(),
        }
    }

    /// Transmissions-Wärmetransferkoeffizient
    ///
    /// Transmission heat transfer coefficient H_T [W/K]
    pub fn h_t(&self, room: &RoomProperties) -> f64 {
        let u = self.u_value.unwrap_or(match self.kind {
            SurfaceType::Opaque => room.u_op,
            SurfaceType::Transparent => room.u_w,
        });
        self.area * u
    }

    /// Comprueba que área y transmitancia son valores positivos
    pub fn validate(&self) -> Result<(), Sia380Error> {
        if !self.area.is_finite() || self.area < 0.0 {
            return Err(Sia380Error::InvalidInput(format!(
                "surface area must be a non negative number and is {}",
                self.area
            )));
        }
        match self.u_value {
            Some(u) if !u.is_finite() || u < 0.0 => Err(Sia380Error::InvalidInput(format!(
                "surface U-value must be a non negative number and is {}",
                u
            ))),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.u_value {
            Some(u) => write!(f, "{}, {}, {}", self.kind, self.area, u),
            None => write!(f, "{}, {}", self.kind, self.area),
        }
    }
}

impl str::FromStr for Surface {
    type Err = Sia380Error;

    /// Parse `type, area[, U-value]`
    fn from_str(s: &str) -> Result<Surface, Self::Err> {
        let items: Vec<&str> = s.split(',').map(str::trim).collect();
        if items.len() < 2 || items.len() > 3 {
            return Err(Sia380Error::ParseError(format!(
                "expected `type, area[, U-value]` in `{}`",
                s
            )));
        }
        let kind = items[0]
            .to_lowercase()
            .parse::<SurfaceType>()
            .map_err(|_| Sia380Error::ParseError(format!("unknown surface type `{}`", items[0])))?;
        let area = items[1].parse::<f64>()?;
        let u_value = match items.get(2) {
            Some(u) => Some(u.parse::<f64>()?),
            None => None,
        };
        Ok(Surface {
            kind,
            area,
            u_value,
            name: String::new(),
        })
    }
}
