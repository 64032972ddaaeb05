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
Balance térmico mensual SIA 380.1
=================================

Cálculo de la demanda mensual de calefacción, refrigeración y electricidad
de una zona térmica según SIA 380.1.

Cada superficie (opaca o transparente) interviene por separado en las pérdidas
por transmisión, con la transmitancia del local para su tipo o con la suya propia.

Ecuaciones (Wh, W/K, m3/h):

- Heizwärmebedarf: Q_H = Q_T + Q_V - eta_g * (Q_i + Q_s)
- Ausnutzungsgrad für Wärmegewinne: eta_g = (1 - gamma^a) / (1 - gamma^(a+1)), a = 1 + tau / 15
- Wärmeeintrag/-verlust-Verhältnis: gamma = (Q_i + Q_s) / (Q_T + Q_V)
- Transmissionswärmeverluste: Q_T = H_T * (T_i - T_e) * t, H_T = A_op * U_op + A_w * U_w
- Lüftungswärmeverluste: Q_V = H_V * (T_i - T_e) * t, H_V = Vdot_th / 3600 * rho * c_p
- Thermisch wirksamer Aussenluftvolumenstrom: Vdot_th = Vdot_e * (1 - eta_rec) + Vdot_inf
- Interne Wärmeeinträge: Q_i = Phi_P * t_P + Phi_L * t_L + Phi_A * t_A

La demanda eléctrica solo incluye iluminación y equipos.
*/

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{
    error::{Result, Sia380Error},
    types::{
        calculation_hours, monthly_full_load_hours, MonthBalance, MonthlyResult, RoomProperties,
        Surface, CP_AIR, MONTHS_PER_YEAR, RHO_AIR,
    },
    vecops::vecsum,
};

/// Gains/losses ratios closer to 1 than this use the limit of the utilization factor
const GAMMA_ONE_TOLERANCE: f64 = 1e-9;

/// Ausnutzungsgrad für Wärmegewinne
///
/// Utilization factor for heat gains η_g for a gains/losses ratio `gamma`
/// and a building time constant `tau` [h].
///
/// At gamma = 1 the general expression is 0/0 and its limit a / (a + 1) is used.
/// For gamma > 1 the expression is evaluated with x = 1 / gamma, which tends to
/// 1 / gamma for large ratios instead of overflowing.
pub fn utilization_factor(gamma: f64, tau: f64) -> f64 {
    let a = 1.0 + tau / 15.0;
    if (gamma - 1.0).abs() < GAMMA_ONE_TOLERANCE {
        a / (a + 1.0)
    } else if gamma > 1.0 {
        let x = 1.0 / gamma;
        let x_a1 = x.powf(a + 1.0);
        (x_a1 - x) / (x_a1 - 1.0)
    } else {
        (1.0 - gamma.powf(a)) / (1.0 - gamma.powf(a + 1.0))
    }
}

/// Thermisch wirksamer Aussenluftvolumenstrom
///
/// Effective external air flow rate Vdot_th [m3/h]
pub fn effective_airflow(room: &RoomProperties, floor_area: f64) -> f64 {
    let vdot_e = room.vdot_e_spec * floor_area;
    let vdot_inf = room.vdot_inf_spec * floor_area;
    vdot_e * (1.0 - room.eta_rec) + vdot_inf
}

/// Lüftungs-Wärmetransferkoeffizient
///
/// Ventilation heat transfer coefficient H_V [W/K]
pub fn h_v(room: &RoomProperties, floor_area: f64) -> f64 {
    effective_airflow(room, floor_area) / 3600.0 * RHO_AIR * CP_AIR
}

/// Full-load hours of occupants, lighting and equipment for each month
#[derive(Debug, Clone)]
struct FullLoadHours {
    t_p: [f64; MONTHS_PER_YEAR],
    t_l: [f64; MONTHS_PER_YEAR],
    t_a: [f64; MONTHS_PER_YEAR],
}

impl FullLoadHours {
    fn new(room: &RoomProperties) -> Self {
        Self {
            t_p: monthly_full_load_hours(room.t_p),
            t_l: monthly_full_load_hours(room.t_l),
            t_a: monthly_full_load_hours(room.t_a),
        }
    }
}

/// Balance térmico de un mes
///
/// Heat balance of month `month` (0 = January).
///
/// * `t_e`, `t_i` - ambient and indoor temperatures of the month [ºC]
/// * `solar_gains` - solar gains of each surface during the month [Wh]
///
/// # Errors
///
/// * Zero total losses (Q_T + Q_V) with nonzero gains
/// * Month index out of range
///
pub fn month_balance(
    month: usize,
    room: &RoomProperties,
    floor_area: f64,
    t_e: f64,
    t_i: f64,
    surfaces: &[Surface],
    solar_gains: &[f64],
) -> Result<MonthBalance> {
    if month >= MONTHS_PER_YEAR {
        return Err(Sia380Error::InvalidInput(format!(
            "month index must be lower than {} and is {}",
            MONTHS_PER_YEAR, month
        )));
    }
    let hours = FullLoadHours::new(room);
    balance_for_month(month, room, floor_area, t_e, t_i, surfaces, solar_gains, &hours)
}

#[allow(clippy::too_many_arguments)]
fn balance_for_month(
    month: usize,
    room: &RoomProperties,
    floor_area: f64,
    t_e: f64,
    t_i: f64,
    surfaces: &[Surface],
    solar_gains: &[f64],
    hours: &FullLoadHours,
) -> Result<MonthBalance> {
    let t = calculation_hours()[month];
    let delta_t = t_i - t_e;

    // Ventilation losses (Lüftungswärmeverluste)
    let q_v = h_v(room, floor_area) * delta_t * t;

    // Internal gains (interne Wärmeeinträge)
    let phi_p_tot = room.phi_p * floor_area;
    let phi_l_tot = room.phi_l * floor_area;
    let phi_a_tot = room.phi_a * floor_area;
    let q_i = phi_p_tot * hours.t_p[month]
        + phi_l_tot * hours.t_l[month]
        + phi_a_tot * hours.t_a[month];

    // Transmission losses (Transmissionswärmeverluste), per surface
    let q_t_per_surface: Vec<f64> = surfaces
        .iter()
        .map(|s| s.h_t(room) * delta_t * t)
        .collect();
    let q_t = vecsum(&q_t_per_surface);

    // Solar gains (solare Wärmeeinträge), precomputed per surface
    let q_s = vecsum(solar_gains);

    let losses = q_t + q_v;
    let gains = q_i + q_s;

    let (gamma, eta_g) = if losses == 0.0 {
        if gains != 0.0 {
            return Err(Sia380Error::DegenerateBalance { month, gains });
        }
        (0.0, 0.0)
    } else {
        let gamma = gains / losses;
        let eta_g = if losses < 0.0 {
            0.0
        } else {
            utilization_factor(gamma, room.tau)
        };
        (gamma, eta_g)
    };

    let demand = losses - eta_g * gains;
    let (q_h, q_c) = if demand > 0.0 {
        (demand, 0.0)
    } else {
        (0.0, demand)
    };

    // Lighting and equipment only
    let q_el = phi_l_tot * hours.t_l[month] + phi_a_tot * hours.t_a[month];

    Ok(MonthBalance {
        q_t,
        q_v,
        q_i,
        q_s,
        gamma,
        eta_g,
        q_h,
        q_c,
        q_el,
    })
}

/// Comprueba la coherencia de los datos de entrada
fn check_input(
    room: &RoomProperties,
    floor_area: f64,
    t_e: &[f64],
    t_i: &[f64],
    surfaces: &[Surface],
    solar_gains: &[Vec<f64>],
) -> Result<()> {
    room.validate()?;
    if !floor_area.is_finite() || floor_area < 0.0 {
        return Err(Sia380Error::InvalidInput(format!(
            "floor area must be a non negative number and is {}",
            floor_area
        )));
    }
    for (name, series) in &[("ambient", t_e), ("indoor", t_i)] {
        if series.len() != MONTHS_PER_YEAR {
            return Err(Sia380Error::InvalidInput(format!(
                "{} temperatures need {} monthly values and {} were found",
                name,
                MONTHS_PER_YEAR,
                series.len()
            )));
        }
        if series.iter().any(|v| !v.is_finite()) {
            return Err(Sia380Error::InvalidInput(format!(
                "{} temperatures must be numbers",
                name
            )));
        }
    }
    for surface in surfaces {
        surface.validate()?;
    }
    if solar_gains.len() != MONTHS_PER_YEAR {
        return Err(Sia380Error::InvalidInput(format!(
            "solar gains need {} monthly rows and {} were found",
            MONTHS_PER_YEAR,
            solar_gains.len()
        )));
    }
    for (month, row) in solar_gains.iter().enumerate() {
        if row.len() != surfaces.len() {
            return Err(Sia380Error::InvalidInput(format!(
                "solar gains of month {} have {} values for {} surfaces",
                month + 1,
                row.len(),
                surfaces.len()
            )));
        }
        if row.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(Sia380Error::InvalidInput(format!(
                "solar gains of month {} must be non negative numbers",
                month + 1
            )));
        }
    }
    Ok(())
}

/// Calcula la demanda mensual de calefacción, refrigeración y electricidad
///
/// Compute monthly heating, cooling and electricity demand of a thermal zone (SIA 380.1).
///
/// * `room` - room properties
/// * `floor_area` - floor area [m2]
/// * `t_e` - monthly mean ambient temperature, 12 values [ºC]
/// * `t_i` - monthly indoor temperature setpoint, 12 values [ºC]
/// * `surfaces` - envelope surfaces
/// * `solar_gains` - solar gains [month][surface], 12 rows with one value per surface [Wh]
///
/// # Errors
///
/// * `InvalidInput` for series of wrong length, negative areas, rates or gains
///   and heat recovery effectiveness out of [0, 1)
/// * `DegenerateBalance` when a month has zero total losses and nonzero gains
///
pub fn compute(
    room: &RoomProperties,
    floor_area: f64,
    t_e: &[f64],
    t_i: &[f64],
    surfaces: &[Surface],
    solar_gains: &[Vec<f64>],
) -> Result<MonthlyResult> {
    check_input(room, floor_area, t_e, t_i, surfaces, solar_gains)?;

    let hours = FullLoadHours::new(room);
    let balance = |month: usize| {
        balance_for_month(
            month,
            room,
            floor_area,
            t_e[month],
            t_i[month],
            surfaces,
            &solar_gains[month],
            &hours,
        )
    };

    #[cfg(feature = "parallel")]
    let months = (0..MONTHS_PER_YEAR)
        .into_par_iter()
        .map(balance)
        .collect::<Result<Vec<MonthBalance>>>()?;

    #[cfg(not(feature = "parallel"))]
    let months = (0..MONTHS_PER_YEAR)
        .map(balance)
        .collect::<Result<Vec<MonthBalance>>>()?;

    Ok(MonthlyResult::from_months(floor_area, &months))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sia2024;
    use pretty_assertions::assert_eq;

    fn room() -> RoomProperties {
        sia2024::room_properties("efh").unwrap()
    }

    #[test]
    fn utilization_factor_limit() {
        let tau = 164.0;
        let at_one = utilization_factor(1.0, tau);
        let below = utilization_factor(1.0 - 1e-7, tau);
        let above = utilization_factor(1.0 + 1e-7, tau);
        assert!((at_one - below).abs() < 1e-6);
        assert!((at_one - above).abs() < 1e-6);
        assert!((at_one - 11.933_333_333 / 12.933_333_333).abs() < 1e-6);
    }

    #[test]
    fn utilization_factor_range() {
        assert_eq!(utilization_factor(0.0, 164.0), 1.0);
        for &gamma in &[0.1, 0.5, 0.9, 1.1, 2.0, 5.0] {
            let eta = utilization_factor(gamma, 20.0);
            assert!(eta > 0.0 && eta <= 1.0, "eta_g = {} for gamma = {}", eta, gamma);
            // Usable gains never exceed losses
            assert!(eta * gamma < 1.0 + 1e-12);
        }
    }

    #[test]
    fn utilization_factor_large_gamma() {
        for &(gamma, tau) in &[(448_504.57, 1000.0), (1e6, 1000.0), (1e12, 5000.0), (3.0, 164.0)] {
            let eta = utilization_factor(gamma, tau);
            assert!(eta.is_finite(), "eta_g = {} for gamma = {}", eta, gamma);
            assert!(eta > 0.0 && eta * gamma <= 1.0 + 1e-12);
        }
        assert!((utilization_factor(1e6, 1000.0) - 1e-6).abs() < 1e-15);
        // Same value as the direct expression where that one does not overflow
        let (gamma, tau) = (2.0, 20.0);
        let a = 1.0 + tau / 15.0;
        let direct = (1.0 - f64::powf(gamma, a)) / (1.0 - f64::powf(gamma, a + 1.0));
        assert!((utilization_factor(gamma, tau) - direct).abs() < 1e-12);
    }

    #[test]
    fn ventilation_coefficient() {
        // Vdot_th = 120 * 0.3 + 30 = 66 m3/h
        let room = room();
        assert!((effective_airflow(&room, 200.0) - 66.0).abs() < 1e-9);
        assert!((h_v(&room, 200.0) - 66.0 / 3600.0 * 1.2 * 1005.0).abs() < 1e-9);
    }

    #[test]
    fn month_balance_heating() {
        let room = room();
        let surfaces = [Surface::opaque(100.0), Surface::transparent(10.0)];
        let m = month_balance(0, &room, 100.0, 0.0, 20.0, &surfaces, &[0.0, 50_000.0]).unwrap();
        // H_T = 100 * 0.2 + 10 * 1.2 = 32 W/K, t = 744 h
        assert!((m.q_t - 32.0 * 20.0 * 744.0).abs() < 1e-6);
        assert_eq!(m.q_s, 50_000.0);
        assert!(m.q_h > 0.0);
        assert_eq!(m.q_c, 0.0);
        let expected = m.q_t + m.q_v - m.eta_g * (m.q_i + m.q_s);
        assert!((m.q_h - expected).abs() < 1e-6);
    }

    #[test]
    fn month_balance_negative_losses() {
        let mut room = room();
        room.phi_p = 0.0;
        room.phi_l = 0.0;
        room.phi_a = 0.0;
        let surfaces = [Surface::opaque(100.0)];
        let m = month_balance(6, &room, 100.0, 30.0, 21.0, &surfaces, &[0.0]).unwrap();
        assert!(m.q_t + m.q_v < 0.0);
        assert_eq!(m.eta_g, 0.0);
        assert_eq!(m.q_h, 0.0);
        assert_eq!(m.q_c, m.q_t + m.q_v);
    }

    #[test]
    fn month_balance_degenerate() {
        let room = room();
        let surfaces = [Surface::opaque(100.0)];
        match month_balance(3, &room, 100.0, 21.0, 21.0, &surfaces, &[0.0]) {
            Err(Sia380Error::DegenerateBalance { month, gains }) => {
                assert_eq!(month, 3);
                assert!(gains > 0.0);
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn month_balance_no_losses_no_gains() {
        let mut room = room();
        room.phi_p = 0.0;
        room.phi_l = 0.0;
        room.phi_a = 0.0;
        let m = month_balance(3, &room, 100.0, 21.0, 21.0, &[], &[]).unwrap();
        assert_eq!(m.q_h, 0.0);
        assert_eq!(m.q_c, 0.0);
        assert_eq!(m.gamma, 0.0);
    }

    #[test]
    fn compute_rejects_bad_input() {
        let room = room();
        let surfaces = vec![Surface::opaque(100.0)];
        let gains = vec![vec![0.0]; 12];
        let temps = vec![10.0; 12];
        assert!(compute(&room, -1.0, &temps, &temps, &surfaces, &gains).is_err());
        assert!(compute(&room, 100.0, &temps[..11], &temps, &surfaces, &gains).is_err());
        assert!(compute(&room, 100.0, &temps, &temps, &surfaces, &gains[..11]).is_err());
        assert!(compute(&room, 100.0, &temps, &temps, &surfaces, &vec![vec![0.0, 1.0]; 12]).is_err());
        assert!(compute(&room, 100.0, &temps, &temps, &[Surface::opaque(-5.0)], &gains).is_err());
        let mut bad_room = room.clone();
        bad_room.eta_rec = 1.2;
        match compute(&bad_room, 100.0, &temps, &temps, &surfaces, &gains) {
            Err(Sia380Error::InvalidInput(_)) => (),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn compute_aborts_on_degenerate_month() {
        let room = room();
        let surfaces = vec![Surface::opaque(100.0)];
        let gains = vec![vec![0.0]; 12];
        let t_e = vec![21.0; 12];
        let t_i = vec![21.0; 12];
        match compute(&room, 100.0, &t_e, &t_i, &surfaces, &gains) {
            Err(Sia380Error::DegenerateBalance { .. }) => (),
            other => panic!("unexpected result {:?}", other),
        }
    }
}
