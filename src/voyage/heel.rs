//! 공선 항차 힐(heel) 계획.
//!
//! 공선 항해 동안 힐에서 발생하는 BOG가 엔진 연료가스 수요를 충당하는지 판단하고,
//! 선박 허용 범위 안에서 충분한 최소 힐을 찾는다.

use serde::Serialize;
use tracing::info;

use crate::bog::rate::EnvironmentalConditions;
use crate::bog::simulator::{simulate, SimulationInput, SimulationOptions, VoyageProfile};
use crate::error::{ensure_non_negative, BogError, Result};
use crate::vessel::VesselConfig;

/// 힐 탐색 분해능 [m³]
pub const HEEL_RESOLUTION_M3: f64 = 1.0;

/// 힐 계획 입력. `heel_m3`는 [`assess_heel`]에서만 사용한다.
#[derive(Debug, Clone, Copy)]
pub struct HeelInput<'a> {
    pub heel_m3: f64,
    pub vessel: &'a VesselConfig,
    pub voyage_days: f64,
    pub environment: &'a [EnvironmentalConditions],
    /// 엔진 가스 소비량 [m³/day]
    pub engine_consumption_m3_per_day: f64,
    pub options: SimulationOptions,
}

/// 힐 평가 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeelAssessment {
    pub heel_m3: f64,
    /// 시뮬레이션 기간 중 발생 BOG [m³]
    pub bog_generated_m3: f64,
    /// 같은 기간 엔진 연료가스 수요 [m³]
    pub bog_required_m3: f64,
    /// 도착 시 잔량 [m³]
    pub arrival_volume_m3: f64,
    pub sufficient: bool,
    pub profile: VoyageProfile,
}

/// 주어진 힐로 공선 항차를 시뮬레이션하고 연료가스 충족 여부를 판단한다.
///
/// 수요는 실제로 시뮬레이션한 일수(`floor(voyage_days)`) 기준으로 계산한다.
pub fn assess_heel(input: HeelInput<'_>) -> Result<HeelAssessment> {
    let vessel = input.vessel;
    ensure_non_negative("힐", input.heel_m3)?;
    if input.heel_m3 < vessel.min_heel_m3 || input.heel_m3 > vessel.max_heel_m3 {
        return Err(BogError::invalid(format!(
            "힐 {:.1} m³가 허용 범위 {:.1}~{:.1} m³를 벗어났습니다.",
            input.heel_m3, vessel.min_heel_m3, vessel.max_heel_m3
        )));
    }

    let profile = simulate(SimulationInput {
        initial_volume_m3: input.heel_m3,
        vessel,
        voyage_days: input.voyage_days,
        environment: input.environment,
        is_ballast: true,
        engine_consumption_m3_per_day: input.engine_consumption_m3_per_day,
        options: input.options,
    })?;

    let bog_generated_m3 = profile.total_generated_m3();
    let bog_required_m3 = input.engine_consumption_m3_per_day * profile.len() as f64;
    Ok(HeelAssessment {
        heel_m3: input.heel_m3,
        bog_generated_m3,
        bog_required_m3,
        arrival_volume_m3: profile.final_remaining_m3(),
        sufficient: bog_generated_m3 >= bog_required_m3,
        profile,
    })
}

/// 허용 범위에서 연료가스 수요를 충족하는 최소 힐을 이분 탐색으로 찾는다.
///
/// 최대 힐로도 부족하면 `None`을 반환한다.
pub fn recommend_heel(input: HeelInput<'_>) -> Result<Option<HeelAssessment>> {
    let vessel = input.vessel;
    let at = |heel_m3: f64| assess_heel(HeelInput { heel_m3, ..input });

    let upper = at(vessel.max_heel_m3)?;
    if !upper.sufficient {
        info!(max_heel_m3 = vessel.max_heel_m3, "no heel within limits covers fuel gas demand");
        return Ok(None);
    }
    let lower = at(vessel.min_heel_m3)?;
    if lower.sufficient {
        return Ok(Some(lower));
    }

    let (mut lo, mut hi) = (vessel.min_heel_m3, vessel.max_heel_m3);
    let mut best = upper;
    while hi - lo > HEEL_RESOLUTION_M3 {
        let mid = 0.5 * (lo + hi);
        let candidate = at(mid)?;
        if candidate.sufficient {
            hi = mid;
            best = candidate;
        } else {
            lo = mid;
        }
    }
    info!(heel_m3 = best.heel_m3, "recommended heel");
    Ok(Some(best))
}
