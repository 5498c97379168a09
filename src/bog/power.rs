use serde::Serialize;

use crate::bog::rate::REFERENCE_TEMP_C;
use crate::error::{ensure_finite, ensure_non_negative, Result};
use crate::vessel::VesselConfig;

/// 이 파고[m]를 넘으면 황천 추진 출력을 적용한다.
pub const ADVERSE_WAVE_HEIGHT_M: f64 = 3.0;

/// 소요 동력 계산 입력.
#[derive(Debug, Clone, Copy)]
pub struct PowerInput {
    /// 일일 BOG 발생량 [m³/day]
    pub daily_bog_m3: f64,
    /// 재액화 용량 [m³/day]
    pub reliq_capacity_m3_per_day: f64,
    /// 외기 온도 [°C]
    pub ambient_temp_c: f64,
    /// 파고 [m]
    pub wave_height_m: f64,
}

/// 소요 동력 결과 [MW].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PowerRequirements {
    pub base_power_mw: f64,
    pub reliq_power_mw: f64,
    pub engine_power_mw: f64,
    pub total_power_mw: f64,
}

/// 추진, 재액화, BOG 연소 엔진 동력을 추정한다.
pub fn power_requirements(vessel: &VesselConfig, input: PowerInput) -> Result<PowerRequirements> {
    ensure_non_negative("일일 BOG", input.daily_bog_m3)?;
    ensure_non_negative("재액화 용량", input.reliq_capacity_m3_per_day)?;
    ensure_finite("외기 온도", input.ambient_temp_c)?;
    ensure_non_negative("파고", input.wave_height_m)?;

    let base_power_mw = if input.wave_height_m > ADVERSE_WAVE_HEIGHT_M {
        vessel.propulsion_power_adverse_mw
    } else {
        vessel.propulsion_power_calm_mw
    };

    // 설비 부하율에 비례해 최소~최대 전력 사이를 보간
    let reliq_power_mw = match vessel.reliq_power {
        Some(band) if input.reliq_capacity_m3_per_day > 0.0 => {
            let load = input.daily_bog_m3 / input.reliq_capacity_m3_per_day;
            (band.min_mw + load * (band.max_mw - band.min_mw)).min(band.max_mw)
        }
        _ => 0.0,
    };

    let engine_power_mw = input.daily_bog_m3
        * vessel.engine_efficiency
        * (1.0 + (input.ambient_temp_c - REFERENCE_TEMP_C) / 100.0);

    Ok(PowerRequirements {
        base_power_mw,
        reliq_power_mw,
        engine_power_mw,
        total_power_mw: base_power_mw + reliq_power_mw + engine_power_mw,
    })
}
