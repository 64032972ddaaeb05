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
Metadatos
=========

- Tipo Meta y trait MetaVec para el acceso a metadatos de los datos de entrada
*/

use std::fmt;
use std::str;
use std::str::FromStr;

use serde_derive::{Deserialize, Serialize};

use crate::error::Sia380Error;

/// Metadatos de los datos de entrada
///
/// Metadata of the input data (`#META key: value`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    /// metadata name.
    pub key: String,
    /// metadata value
    pub value: String,
}

impl Meta {
    /// Metadata constructor
    pub fn new<T, U>(key: T, value: U) -> Self
    where
        T: Into<String>,
        U: Into<String>,
    {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Meta {
    /// Textual representation of metadata.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#META {}: {}", self.key, self.value)
    }
}

impl str::FromStr for Meta {
    type Err = Sia380Error;

    fn from_str(s: &str) -> Result<Meta, Self::Err> {
        let s = s.trim();
        if !s.starts_with("#META") {
            return Err(Sia380Error::ParseError(s.into()));
        }
        // Remove start of line with #META
        let items: Vec<&str> = s[5..].splitn(2, ':').map(str::trim).collect();
        match items.as_slice() {
            [key, value] if !key.is_empty() => Ok(Meta::new(*key, *value)),
            _ => Err(Sia380Error::ParseError(s.into())),
        }
    }
}

/// Trait común para gestionar metadatos
pub trait MetaVec {
    /// Get vector of metadata
    fn get_metavec(&self) -> &Vec<Meta>;

    /// Get mutable vector of metadata
    fn get_mut_metavec(&mut self) -> &mut Vec<Meta>;

    /// Check if key is included in metadata
    fn has_meta(&self, key: &str) -> bool {
        self.get_metavec().iter().any(|m| m.key == key)
    }

    /// Get (optional) metadata value by key
    fn get_meta(&self, key: &str) -> Option<String> {
        self.get_metavec()
            .iter()
            .find(|m| m.key == key)
            .map(|v| v.value.clone())
    }

    /// Get (optional) metadata value by key as f64
    ///
    /// Returns None if the key is missing and an error if the value is not a number
    fn get_meta_f64(&self, key: &str) -> Result<Option<f64>, Sia380Error> {
        match self.get_metavec().iter().find(|m| m.key == key) {
            Some(m) => f64::from_str(m.value.trim()).map(Some).map_err(|_| {
                Sia380Error::ParseError(format!(
                    "metadata `{}` is not a number (`{}`)",
                    m.key, m.value
                ))
            }),
            None => Ok(None),
        }
    }

    /// Update metadata value for key or insert new metadata.
    fn set_meta(&mut self, key: &str, value: &str) {
        let meta = self.get_mut_metavec();
        let metapos = meta.iter().position(|m| m.key == key);
        if let Some(pos) = metapos {
            meta[pos].value = value.to_string();
        } else {
            meta.push(Meta::new(key, value));
        };
    }
}

// ========================== Tests
