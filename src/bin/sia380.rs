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

#[macro_use]
extern crate clap;

use std::fs::File;
use std::io::prelude::*;
use std::path::Path;
use std::process::exit;

use clap::{App, AppSettings, Arg};
use failure::Error;
use failure::ResultExt;

use sia380::input::META_FLOOR_AREA;
use sia380::*;

// Funciones auxiliares -----------------------------------------------------------------------

fn readfile(path: &Path) -> Result<String, Error> {
    let mut f = File::open(path).context(format!("File {} not found", path.display()))?;
    let mut contents = String::new();
    f.read_to_string(&mut contents)
        .context(format!("Could not read file {}", path.display()))?;
    Ok(contents)
}

fn writefile(path: &Path, content: &[u8]) -> Result<(), Error> {
    let mut file =
        File::create(path).context(format!("Could not create file {}", path.display()))?;
    file.write_all(content)
        .context(format!("Could not write to file {}", path.display()))?;
    Ok(())
}

/// Escribe el archivo o termina con error de E/S
fn save_or_exit(path: &Path, content: &str, descr: &str, verbosity: u64) {
    if let Err(err) = writefile(path, content.as_bytes()) {
        eprintln!("ERROR: {}", err);
        exit(exitcode::IOERR);
    }
    if verbosity > 0 {
        println!("Saved {}: {}", descr, path.display());
    }
}

/// Carga los datos de entrada desde archivo
fn get_input(path: &Path) -> DemandInput {
    let inputstring = readfile(path).unwrap_or_else(|err| {
        eprintln!("ERROR: Could not read input file -> {}", err);
        exit(exitcode::IOERR);
    });
    println!("Input data: \"{}\"", path.display());
    inputstring.parse::<DemandInput>().unwrap_or_else(|err| {
        eprintln!(
            "ERROR: Wrong format in input file \"{}\" ({})",
            path.display(),
            err
        );
        exit(exitcode::DATAERR);
    })
}

/// Obtén propiedades del local
/// Archivo JSON > Local tipo SIA 2024 > Metadatos de los datos de entrada
fn get_room(
    input: &DemandInput,
    matches: &clap::ArgMatches<'_>,
    verbosity: u64,
) -> RoomProperties {
    let room = if let Some(roomfile) = matches.value_of("room") {
        let path = Path::new(roomfile);
        let roomstring = readfile(path).unwrap_or_else(|err| {
            eprintln!("ERROR: Could not read room properties file -> {}", err);
            exit(exitcode::IOERR);
        });
        println!("Room properties (user): \"{}\"", path.display());
        RoomProperties::from_json(&roomstring)
    } else if let Some(code) = matches.value_of("room_type") {
        println!("Room properties (preset): SIA 2024 {}", code);
        sia2024::room_properties(code)
    } else if input.has_meta(KEY_TAU) {
        println!("Room properties (metadata)");
        input.room_properties()
    } else {
        eprintln!("ERROR: Missing room properties (use --room, --room-type or input metadata)");
        exit(exitcode::USAGE);
    };

    let room = room.unwrap_or_else(|err| {
        eprintln!("ERROR: Wrong room properties ({})", err);
        exit(exitcode::DATAERR);
    });
    if verbosity > 1 {
        println!("{}", room);
    }
    room
}

/// Obtén superficie de referencia
/// Argumentos de CLI > Metadatos de los datos de entrada
fn get_floor_area(input: &DemandInput, matches: &clap::ArgMatches<'_>, verbosity: u64) -> f64 {
    let meta_area = input.floor_area().unwrap_or_else(|err| {
        eprintln!("ERROR: Wrong floor area in input metadata ({})", err);
        exit(exitcode::DATAERR);
    });
    let user_area = if matches.is_present("area") {
        Some(value_t!(matches, "area", f64).unwrap_or_else(|error| {
            eprintln!("ERROR: The floor area is not a valid number");
            if verbosity > 2 {
                println!("{}", error)
            };
            exit(exitcode::DATAERR);
        }))
    } else {
        None
    };

    let area = match (user_area, meta_area) {
        (Some(user), Some(meta)) => {
            if (user - meta).abs() > 1e-3 {
                println!(
                    "WARNING: Floor area of the input metadata ({:.2}) differs from the user value ({:.2})",
                    meta, user
                );
            }
            println!("Floor area (user) [m2]: {:.2}", user);
            user
        }
        (Some(user), None) => {
            println!("Floor area (user) [m2]: {:.2}", user);
            user
        }
        (None, Some(meta)) => {
            println!("Floor area (metadata) [m2]: {:.2}", meta);
            meta
        }
        (None, None) => {
            eprintln!("ERROR: Missing floor area (use --area or the FLOOR_AREA metadata)");
            exit(exitcode::USAGE);
        }
    };

    if !area.is_finite() || area < 0.0 {
        eprintln!(
            "ERROR: The floor area must be a non negative number and is {:.2}",
            area
        );
        exit(exitcode::DATAERR);
    }
    area
}

// Función principal ------------------------------------------------------------------------------

fn main() {
    let matches = App::new("Sia380")
        .bin_name("sia380")
        .version(env!("CARGO_PKG_VERSION"))
        .author("
Copyright (c) 2018-2022 Ministerio de Fomento,
                        Instituto de CC. de la Construcción Eduardo Torroja (IETcc-CSIC)

Autores: Rafael Villar Burke <pachi@ietcc.csic.es>,
         Daniel Jiménez González <danielj@ietcc.csic.es>
         Marta Sorribes Gil <msorribes@ietcc.csic.es>

Licencia: Publicado bajo licencia MIT.

")
        .about("Sia380 - Monthly heating, cooling and electricity demand (SIA 380.1).")
        .setting(AppSettings::NextLineHelp)
        .arg(Arg::with_name("input")
            .short("i")
            .long("input")
            .value_name("INPUT_FILE")
            .help("Input data file (metadata, temperatures, surfaces and solar gains)")
            .takes_value(true)
            .required_unless("showlicense")
            .display_order(1))
        .arg(Arg::with_name("room")
            .short("r")
            .long("room")
            .value_name("ROOM_FILE")
            .help("Room properties file (JSON, SIA 2024 keys)")
            .takes_value(true)
            .display_order(2))
        .arg(Arg::with_name("room_type")
            .short("t")
            .long("room-type")
            .value_name("ROOM_TYPE")
            .help("SIA 2024 room type (e.g. 1.2 or efh)")
            .takes_value(true)
            .display_order(3))
        .arg(Arg::with_name("area")
            .short("a")
            .long("area")
            .value_name("AREA")
            .help("Floor area [m2]")
            .takes_value(true)
            .display_order(4))
        .arg(Arg::with_name("output_json")
            .long("json")
            .value_name("OUTPUT_JSON")
            .help("Output file for the monthly results in JSON format")
            .takes_value(true))
        .arg(Arg::with_name("output_input")
            .long("oi")
            .value_name("OUTPUT_INPUT")
            .help("Output file for the input data with the values actually used")
            .takes_value(true))
        .arg(Arg::with_name("showlicense")
            .short("L")
            .long("license")
            .help("Shows the license of the program (MIT)"))
        .arg(Arg::with_name("v")
            .short("v")
            .multiple(true)
            .help("Sets the level of verbosity"))
        .get_matches();

    if matches.is_present("showlicense") {
        println!(
            "
Copyright (c) 2018-2022 Ministerio de Fomento
                        Instituto de Ciencias de la Construcción Eduardo Torroja (IETcc-CSIC)

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the 'Software'), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in
all copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED 'AS IS', WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.

Author(s): Rafael Villar Burke <pachi@ietcc.csic.es>
            Daniel Jiménez González <danielj@ietcc.csic.es>
            Marta Sorribes Gil <msorribes@ietcc.csic.es>"
        );
        exit(exitcode::OK);
    }

    // Prólogo ------------------------------------------------------------------------------------

    let verbosity = matches.occurrences_of("v");

    if verbosity > 2 {
        println!("Options: ----------");
        println!("{:#?}", matches);
        println!("------------------------------");
    }

    println!("** Input data");

    // Datos de entrada ---------------------------------------------------------------------------
    let inputfile = matches.value_of("input").unwrap_or_else(|| {
        eprintln!("ERROR: Missing input data file");
        exit(exitcode::USAGE);
    });
    let mut input = get_input(Path::new(inputfile));

    if verbosity > 1 && !input.meta.is_empty() {
        println!("Input metadata:");
        for meta in &input.meta {
            println!("  {}: {}", meta.key, meta.value);
        }
    }

    // Propiedades del local ----------------------------------------------------------------------
    // Archivo JSON > Local tipo SIA 2024 > Metadatos
    let room = get_room(&input, &matches, verbosity);
    room.to_meta(&mut input);

    // Superficie de referencia -------------------------------------------------------------------
    // Argumentos de CLI > Metadatos
    let floor_area = get_floor_area(&input, &matches, verbosity);
    input.set_meta(META_FLOOR_AREA, &floor_area.to_string());

    if input.t_i.is_none() {
        let setpoint = input.setpoints(&room)[0];
        println!("Indoor temperature (default) [ºC]: {:.1}", setpoint);
    }

    // Guardado de datos de entrada normalizados --------------------------------------------------
    if let Some(path) = matches.value_of("output_input") {
        let inputstring = format!("{}", input);
        if verbosity > 2 {
            println!("Input data:\n{}", inputstring);
        }
        save_or_exit(Path::new(path), &inputstring, "input data file", verbosity);
    }

    // Cálculo de la demanda ----------------------------------------------------------------------
    let result = input.compute(&room, floor_area).unwrap_or_else(|error| {
        eprintln!("ERROR: Could not compute the monthly demand ({})", error);
        if verbosity > 2 {
            println!("{:?}", error)
        };
        exit(exitcode::DATAERR);
    });

    // Salida de resultados -----------------------------------------------------------------------
    println!("\n{}", asplain::demand_to_plain(&result));

    if let Some(path) = matches.value_of("output_json") {
        let json = serde_json::to_string_pretty(&result).unwrap_or_else(|error| {
            eprintln!("ERROR: Could not serialize the results to JSON ({})", error);
            exit(exitcode::SOFTWARE);
        });
        if verbosity > 2 {
            println!("JSON results:\n{}", json);
        }
        save_or_exit(Path::new(path), &json, "JSON results file", verbosity);
    }
}
