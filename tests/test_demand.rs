use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

use pretty_assertions::assert_eq;

use sia380::{demand::*, sia2024, *};

const T_E: [f64; 12] = [
    0.4164, 1.7143, 6.1380, 8.9642, 14.2810, 17.4624, 18.3993, 18.7849, 13.9542, 9.8741, 3.9746,
    1.5937,
];

// Solar gains per surface [kWh]
const SOLAR_KWH: [[f64; 12]; 6] = [
    [
        15.93572, 28.137958, 52.534591, 70.864124, 97.429731, 100.659248, 110.715495, 89.630934,
        64.212227, 38.79425, 19.025089, 11.624501,
    ],
    [
        23.174573, 39.025397, 68.999793, 88.159866, 101.53745, 109.179217, 119.64447, 98.66428,
        77.103732, 44.753735, 21.723197, 17.185115,
    ],
    [
        11.164155, 18.686334, 29.798874, 45.721346, 57.51364, 65.652511, 66.630836, 51.430892,
        35.616327, 23.692149, 12.46553, 9.476936,
    ],
    [
        46.316597, 61.478404, 90.694507, 87.846535, 91.278904, 83.993872, 93.773866, 97.520832,
        92.037561, 70.833123, 42.180446, 29.584221,
    ],
    [
        22.257355, 38.413927, 72.508876, 100.603912, 138.930607, 144.043764, 155.043357,
        126.633178, 88.618052, 52.984679, 25.594113, 16.571932,
    ],
    [0.0; 12],
];

const HEATING: [f64; 12] = [
    2512.8279627949037,
    2018.2712959713783,
    1472.858407078302,
    932.9953177472739,
    133.2382968500708,
    0.2360780798018677,
    0.004509508522343822,
    0.001733363872859627,
    261.86544616410964,
    1005.0403302948991,
    1917.6825371756145,
    2373.5106857996693,
];

const Q_T: [f64; 12] = [
    2698729.2988416003,
    2283861.3482496,
    1948566.569472,
    1527117.709824,
    880932.4976640001,
    448855.2161280002,
    340979.48305919993,
    290423.21410559997,
    893980.1226240001,
    1458724.0475903999,
    2160204.5445120004,
    2544372.7235327996,
];

const Q_V: [f64; 12] = [
    338596.92662399996,
    286545.38774399995,
    244477.52208,
    191600.30736,
    110526.47495999999,
    56315.76192000002,
    42781.09888799999,
    36438.04058399999,
    112163.49935999999,
    183019.27485599997,
    271030.74768000003,
    319230.529992,
];

const Q_S: [f64; 12] = [
    118848.4, 185742.02, 314536.641, 393195.783, 486690.332, 503528.612, 545808.024, 463880.116,
    357587.899, 231057.936, 120988.375, 84442.705,
];

// Q_i of months with 31 and 30 days [Wh]
const Q_I_31: f64 = 405649.8630136986;
const Q_I_30: f64 = 392564.38356164383;
// Electricity of months with 31 and 30 days [kWh]
const Q_EL_31: f64 = 308.38630136986296;
const Q_EL_30: f64 = 298.4383561643836;

fn approx_equal(expected: f64, got: f64) -> bool {
    (expected - got).abs() <= 1e-3 * expected.abs() + 1e-6
}

fn assert_series(expected: &[f64], got: &[f64], name: &str) {
    assert_eq!(expected.len(), got.len());
    for (m, (e, g)) in expected.iter().zip(got.iter()).enumerate() {
        assert!(
            approx_equal(*e, *g),
            "{} of month {}: expected {}, got {}",
            name,
            m + 1,
            e,
            g
        );
    }
}

fn surfaces() -> Vec<Surface> {
    let mut surfaces: Vec<Surface> = [30.0, 30.0, 3.0, 3.0, 3.0]
        .iter()
        .map(|a| Surface::transparent(*a))
        .collect();
    surfaces.push(Surface::opaque(467.12));
    surfaces
}

// [month][surface] in Wh
fn solar_gains() -> Vec<Vec<f64>> {
    (0..12)
        .map(|m| SOLAR_KWH.iter().map(|s| s[m] * 1000.0).collect())
        .collect()
}

fn reference_result() -> MonthlyResult {
    let room = sia2024::room_properties("efh").unwrap();
    compute(&room, 200.0, &T_E, &[21.0; 12], &surfaces(), &solar_gains()).unwrap()
}

fn input_from_file(path: &str) -> DemandInput {
    let path = Path::new(path);
    let mut f = File::open(path).unwrap();
    let mut inputstring = String::new();
    f.read_to_string(&mut inputstring).unwrap();
    inputstring.parse::<DemandInput>().unwrap()
}

#[test]
fn reference_efh_monthly() {
    let res = reference_result();
    assert_series(&HEATING, &res.heating, "heating");
    assert_series(&[0.0; 12], &res.cooling, "cooling");
    assert_series(&Q_T, &res.q_t, "Q_T");
    assert_series(&Q_V, &res.q_v, "Q_V");
    assert_series(&Q_S, &res.q_s, "Q_s");
    for m in 0..12 {
        let (q_i, q_el) = match DAYS_PER_MONTH[m] as usize {
            31 => (Q_I_31, Q_EL_31),
            30 => (Q_I_30, Q_EL_30),
            _ => (366393.4246575342, 278.54246575342466),
        };
        assert!(approx_equal(q_i, res.q_i[m]), "Q_i of month {}", m + 1);
        assert!(
            approx_equal(q_el, res.electricity[m]),
            "electricity of month {}",
            m + 1
        );
    }
}

#[test]
fn reference_efh_annual() {
    let res = reference_result();
    let annual = res.annual();
    assert!(approx_equal(12628.53260082842, annual.heating));
    assert_eq!(annual.cooling, 0.0);
    assert!(approx_equal(3631.0, annual.electricity));
    let annual_m2 = res.annual_m2();
    assert!(approx_equal(63.14266300414209, annual_m2.heating));
    assert!(approx_equal(18.155, annual_m2.electricity));
}

#[test]
fn reference_efh_from_file() {
    let input = input_from_file("test_data/efh_reference.txt");
    let room = input.room_properties().unwrap();
    assert_eq!(room, sia2024::room_properties("1.2").unwrap());
    let floor_area = input.floor_area().unwrap().unwrap();
    assert_eq!(floor_area, 200.0);
    assert_eq!(input.surfaces[0].name, "Fenster 1");
    assert_eq!(input.compute(&room, floor_area).unwrap(), reference_result());
}

#[test]
fn reference_efh_default_setpoint() {
    // Without T_I the winter design temperature of the room (21 ºC) is used
    let input = input_from_file("test_data/efh_noroom.txt");
    assert!(input.t_i.is_none());
    assert!(input.room_properties().is_err());
    let room = sia2024::room_properties("efh").unwrap();
    assert_eq!(input.compute(&room, 200.0).unwrap(), reference_result());
}

#[test]
fn room_from_json_file() {
    let mut f = File::open(Path::new("test_data/room_efh.json")).unwrap();
    let mut roomstring = String::new();
    f.read_to_string(&mut roomstring).unwrap();
    let room = RoomProperties::from_json(&roomstring).unwrap();
    assert_eq!(room, sia2024::room_properties("efh").unwrap());
}

#[test]
fn demand_signs_and_exclusivity() {
    let room = sia2024::room_properties("efh").unwrap();
    // Cold months, mild months and a hot summer with indoor temperature below ambient
    let t_e = [
        -5.0, 0.0, 5.0, 10.0, 18.0, 22.0, 28.0, 30.0, 20.0, 12.0, 4.0, -2.0,
    ];
    let res = compute(&room, 200.0, &t_e, &[21.0; 12], &surfaces(), &solar_gains()).unwrap();
    for m in 0..12 {
        assert!(res.heating[m] >= 0.0);
        assert!(res.cooling[m] <= 0.0);
        assert!(res.electricity[m] >= 0.0);
        assert!(res.heating[m] == 0.0 || res.cooling[m] == 0.0);
        assert!(res.eta_g[m] >= 0.0 && res.eta_g[m] <= 1.0);
    }
    assert!(res.cooling[6] < 0.0);
    assert!(res.cooling_abs()[6] > 0.0);
    assert!(res.heating[0] > 0.0);
}

#[test]
fn demand_idempotence() {
    assert_eq!(reference_result(), reference_result());
}

#[test]
fn demand_scale_invariance() {
    let room = sia2024::room_properties("efh").unwrap();
    let base = reference_result();
    let surfaces2: Vec<Surface> = surfaces()
        .into_iter()
        .map(|mut s| {
            s.area *= 2.0;
            s
        })
        .collect();
    let gains2: Vec<Vec<f64>> = solar_gains()
        .iter()
        .map(|row| row.iter().map(|v| v * 2.0).collect())
        .collect();
    let res = compute(&room, 400.0, &T_E, &[21.0; 12], &surfaces2, &gains2).unwrap();
    assert_eq!(h_v(&room, 400.0), 2.0 * h_v(&room, 200.0));
    for m in 0..12 {
        assert!(approx_equal(2.0 * base.q_i[m], res.q_i[m]));
        assert!(approx_equal(2.0 * base.electricity[m], res.electricity[m]));
        assert!(approx_equal(2.0 * base.heating[m], res.heating[m]));
        assert!(approx_equal(base.gamma[m], res.gamma[m]));
    }
    assert!(approx_equal(
        base.annual_m2().heating,
        res.annual_m2().heating
    ));
}

#[test]
fn demand_negative_losses() {
    let mut room = sia2024::room_properties("efh").unwrap();
    room.phi_p = 0.0;
    room.phi_l = 0.0;
    room.phi_a = 0.0;
    let no_gains = vec![vec![0.0; 6]; 12];
    let res = compute(&room, 200.0, &[30.0; 12], &[21.0; 12], &surfaces(), &no_gains).unwrap();
    for m in 0..12 {
        assert_eq!(res.eta_g[m], 0.0);
        assert_eq!(res.heating[m], 0.0);
        let losses_kwh = (res.q_t[m] + res.q_v[m]) / 1000.0;
        assert!(losses_kwh < 0.0);
        assert!(approx_equal(losses_kwh, res.cooling[m]));
    }
}

#[test]
fn demand_degenerate_balance() {
    let room = sia2024::room_properties("efh").unwrap();
    match compute(&room, 200.0, &T_E, &T_E, &surfaces(), &solar_gains()) {
        Err(Sia380Error::DegenerateBalance { month, gains }) => {
            assert!(month < 12);
            assert!(gains > 0.0);
        }
        other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn demand_json_output() {
    let res = reference_result();
    let json = serde_json::to_string(&res).unwrap();
    assert!(json.starts_with(r#"{"floor_area":200.0,"heating":[2512.82"#));
    let annual = serde_json::to_string(&res.annual()).unwrap();
    assert_eq!(
        annual,
        r#"{"heating":12628.533,"cooling":0.0,"electricity":3631.0}"#
    );
}

#[test]
fn demand_gains_equal_losses() {
    // Unit transmission coefficient, no ventilation or internal gains and solar
    // gains equal to the transmission losses: gamma is exactly 1 every month
    let room = sia2024::room_properties("efh").unwrap();
    let mut wall = Surface::opaque(1.0);
    wall.u_value = Some(1.0);
    let hours = calculation_hours();
    let gains: Vec<Vec<f64>> = hours.iter().map(|t| vec![*t]).collect();
    let res = compute(&room, 0.0, &[20.0; 12], &[21.0; 12], &[wall], &gains).unwrap();
    let a = 1.0 + room.tau / 15.0;
    for m in 0..12 {
        assert_eq!(res.gamma[m], 1.0);
        assert!((res.eta_g[m] - a / (a + 1.0)).abs() < 1e-12);
        assert!(res.eta_g[m] < 1.0);
        assert!(approx_equal(hours[m] / (a + 1.0) / 1000.0, res.heating[m]));
        assert_eq!(res.cooling[m], 0.0);
    }
}

#[test]
fn demand_large_gains_ratio() {
    // Long time constant and almost no temperature difference: gamma ~ 4.5e5
    let mut room = sia2024::room_properties("efh").unwrap();
    room.tau = 1000.0;
    let res = compute(
        &room,
        200.0,
        &[20.99999; 12],
        &[21.0; 12],
        &surfaces(),
        &solar_gains(),
    )
    .unwrap();
    assert!(res.gamma[0] > 1e5);
    for m in 0..12 {
        assert!(res.eta_g[m].is_finite(), "eta_g of month {}", m + 1);
        assert!(approx_equal(1.0 / res.gamma[m], res.eta_g[m]));
        assert!(res.heating[m] >= 0.0);
        assert!(res.cooling[m] <= 0.0);
        assert!(res.heating[m] == 0.0 || res.cooling[m] == 0.0);
    }
}
