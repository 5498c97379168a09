use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, ensure_non_negative, BogError, Result};

/// 한 항차로 계획할 수 있는 최대 항해일수 [day]. 일별 데이터를 만들기 전에 검사한다.
pub const MAX_VOYAGE_DAYS: f64 = 365.0;

/// 항해일수가 유한하고 [`MAX_VOYAGE_DAYS`] 이하인지 확인한다.
pub fn check_voyage_days(days: f64) -> Result<f64> {
    ensure_finite("항해일수", days)?;
    if days > MAX_VOYAGE_DAYS {
        return Err(BogError::invalid(format!(
            "항해일수 {days}일이 최대 {MAX_VOYAGE_DAYS}일을 초과합니다."
        )));
    }
    Ok(days)
}

/// 항해 거리[NM]와 속력[knot]으로 항해일수를 구한다.
pub fn voyage_days(distance_nm: f64, speed_kn: f64) -> Result<f64> {
    ensure_non_negative("항해 거리", distance_nm)?;
    ensure_non_negative("속력", speed_kn)?;
    if speed_kn <= 0.0 {
        return Err(BogError::invalid("속력은 0보다 커야 합니다."));
    }
    check_voyage_days(distance_nm / (speed_kn * 24.0))
}

/// 항차별 일일 소비량 입력.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LegInput {
    /// 항해 거리 [NM]
    pub distance_nm: f64,
    /// 속력 [knot]
    pub speed_kn: f64,
    /// 액체 연료 [t/day]
    pub liquid_fuel_t_per_day: f64,
    /// LNG 소비 [m³/day]
    pub lng_m3_per_day: f64,
    /// 재액화 [m³/day]
    pub reliq_m3_per_day: f64,
    /// GCU 소각 [m³/day]
    pub gcu_m3_per_day: f64,
}

/// 항차 합계.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct LegTotals {
    pub distance_nm: f64,
    pub voyage_days: f64,
    pub liquid_fuel_t: f64,
    pub lng_m3: f64,
    pub reliq_m3: f64,
    pub gcu_m3: f64,
}

impl LegTotals {
    fn plus(&self, other: &LegTotals) -> LegTotals {
        LegTotals {
            distance_nm: self.distance_nm + other.distance_nm,
            voyage_days: self.voyage_days + other.voyage_days,
            liquid_fuel_t: self.liquid_fuel_t + other.liquid_fuel_t,
            lng_m3: self.lng_m3 + other.lng_m3,
            reliq_m3: self.reliq_m3 + other.reliq_m3,
            gcu_m3: self.gcu_m3 + other.gcu_m3,
        }
    }
}

/// 일일 소비량에 항해일수를 곱해 항차 합계를 계산한다.
pub fn leg_totals(input: LegInput) -> Result<LegTotals> {
    let days = voyage_days(input.distance_nm, input.speed_kn)?;
    ensure_non_negative("액체 연료 소비량", input.liquid_fuel_t_per_day)?;
    ensure_non_negative("LNG 소비량", input.lng_m3_per_day)?;
    ensure_non_negative("재액화량", input.reliq_m3_per_day)?;
    ensure_non_negative("GCU 소각량", input.gcu_m3_per_day)?;
    Ok(LegTotals {
        distance_nm: input.distance_nm,
        voyage_days: days,
        liquid_fuel_t: input.liquid_fuel_t_per_day * days,
        lng_m3: input.lng_m3_per_day * days,
        reliq_m3: input.reliq_m3_per_day * days,
        gcu_m3: input.gcu_m3_per_day * days,
    })
}

/// 적하 + 공선 왕복 항해 합계.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoundTripTotals {
    pub laden: LegTotals,
    pub ballast: LegTotals,
    pub total: LegTotals,
}

/// 두 항차의 합계를 함께 계산한다.
pub fn round_trip(laden: LegInput, ballast: LegInput) -> Result<RoundTripTotals> {
    let laden = leg_totals(laden)?;
    let ballast = leg_totals(ballast)?;
    Ok(RoundTripTotals {
        laden,
        ballast,
        total: laden.plus(&ballast),
    })
}
