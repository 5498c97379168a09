//! 일별 항해 BOG 수지 시뮬레이터.
//!
//! 하루 단위로 BOG율 모델을 호출하면서 잔량을 갱신하고, 발생 BOG를
//! 엔진 소비/재액화/GCU 처리로 분배한다. 재액화된 가스만 액상으로 돌아온다.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::bog::rate::{adjusted_rate, BogRateInput, EnvironmentalConditions, RateModelOptions};
use crate::error::{ensure_finite, ensure_non_negative, BogError, Result};
use crate::units::LngProperties;
use crate::vessel::VesselConfig;

/// 하루치 항해 상태.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VoyageState {
    /// 0부터 시작하는 일차
    pub day: usize,
    /// 해당일 종료 시 잔량 [m³]
    pub remaining_m3: f64,
    /// BOG율 계산에 사용한 탱크 액위 [%]
    pub tank_level_pct: f64,
    /// 보정 BOG율 [%/day]
    pub bog_rate_pct: f64,
    pub bog_generated_m3: f64,
    pub bog_consumed_m3: f64,
    pub bog_reliquefied_m3: f64,
    /// 재액화 설비에 투입되었으나 효율 손실로 액상으로 돌아오지 못한 양 [m³]
    pub bog_reliq_loss_m3: f64,
    /// 엔진/재액화 설비가 처리하지 못해 GCU로 보낸 양 [m³]
    pub bog_vented_m3: f64,
    pub ambient_temp_c: f64,
    pub wave_height_m: f64,
}

/// 일별 상태 목록과 항해 메타데이터.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct VoyageProfile {
    pub initial_volume_m3: f64,
    /// 요청된 항해일수(소수 포함)
    pub voyage_days: f64,
    /// 하루 미만이라 시뮬레이션하지 않은 잔여 일수
    pub unsimulated_days: f64,
    pub days: Vec<VoyageState>,
}

impl VoyageProfile {
    fn empty(initial_volume_m3: f64, voyage_days: f64) -> Self {
        Self {
            initial_volume_m3,
            voyage_days,
            unsimulated_days: voyage_days.max(0.0),
            days: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// 마지막 날 종료 시 잔량. 비어 있으면 초기 적재량.
    pub fn final_remaining_m3(&self) -> f64 {
        self.days
            .last()
            .map_or(self.initial_volume_m3, |d| d.remaining_m3)
    }

    pub fn total_generated_m3(&self) -> f64 {
        self.days.iter().map(|d| d.bog_generated_m3).sum()
    }

    pub fn total_consumed_m3(&self) -> f64 {
        self.days.iter().map(|d| d.bog_consumed_m3).sum()
    }

    pub fn total_reliquefied_m3(&self) -> f64 {
        self.days.iter().map(|d| d.bog_reliquefied_m3).sum()
    }

    pub fn total_reliq_loss_m3(&self) -> f64 {
        self.days.iter().map(|d| d.bog_reliq_loss_m3).sum()
    }

    pub fn total_vented_m3(&self) -> f64 {
        self.days.iter().map(|d| d.bog_vented_m3).sum()
    }
}

/// BOG율 계산에 사용할 액위 결정 방식.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TankLevelMode {
    /// 매일 `잔량 / 초기량 * 100`으로 갱신
    Tracked,
    /// 항해 내내 고정된 액위 [%]
    Fixed(f64),
}

/// 시뮬레이션 옵션.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationOptions {
    pub rate: RateModelOptions,
    pub level_mode: TankLevelMode,
    pub lng: LngProperties,
    /// 재액화 용량 [m³/day]. `None`이면 선박 사양(t/h)을 LNG 밀도로 환산한다.
    pub reliq_capacity_m3_per_day: Option<f64>,
}

impl Default for SimulationOptions {
    fn default() -> Self {
        Self {
            rate: RateModelOptions::default(),
            level_mode: TankLevelMode::Tracked,
            lng: LngProperties::default(),
            reliq_capacity_m3_per_day: None,
        }
    }
}

/// 시뮬레이션 입력.
///
/// `voyage_days`는 `distance / (speed * 24)`로 구한다. 속력이 0 이하인 경우는
/// 호출 측(`voyage::planner::voyage_days`)에서 미리 걸러야 한다.
#[derive(Debug, Clone, Copy)]
pub struct SimulationInput<'a> {
    /// 초기 적재량 또는 힐 [m³]
    pub initial_volume_m3: f64,
    pub vessel: &'a VesselConfig,
    pub voyage_days: f64,
    /// 일별 환경 조건. 길이는 `floor(voyage_days)` 이상이어야 한다.
    pub environment: &'a [EnvironmentalConditions],
    pub is_ballast: bool,
    /// 엔진 가스 소비량 [m³/day]
    pub engine_consumption_m3_per_day: f64,
    pub options: SimulationOptions,
}

/// 항해 전체를 하루 단위로 시뮬레이션한다.
///
/// 항해일수나 초기량이 0 이하이면 빈 프로파일을 반환한다. 잔량이 음수가 되는 날이
/// 생기면 그 직전까지의 프로파일을 담은 [`BogError::VolumeExhausted`]를 반환한다.
pub fn simulate(input: SimulationInput<'_>) -> Result<VoyageProfile> {
    ensure_finite("항해일수", input.voyage_days)?;
    ensure_finite("초기 적재량", input.initial_volume_m3)?;
    if input.voyage_days <= 0.0 || input.initial_volume_m3 <= 0.0 {
        debug!(
            voyage_days = input.voyage_days,
            initial_volume_m3 = input.initial_volume_m3,
            "degenerate voyage, nothing to simulate"
        );
        return Ok(VoyageProfile::empty(
            input.initial_volume_m3.max(0.0),
            input.voyage_days,
        ));
    }

    let vessel = input.vessel;
    vessel.validate()?;
    ensure_non_negative("엔진 가스 소비량", input.engine_consumption_m3_per_day)?;
    if input.initial_volume_m3 > vessel.tank_capacity_m3 {
        return Err(BogError::invalid(format!(
            "초기 적재량 {:.1} m³가 화물창 용량 {:.1} m³를 초과합니다.",
            input.initial_volume_m3, vessel.tank_capacity_m3
        )));
    }

    let full_days = input.voyage_days.floor() as usize;
    let unsimulated_days = input.voyage_days - full_days as f64;
    if input.environment.len() < full_days {
        return Err(BogError::InsufficientData {
            required: full_days,
            provided: input.environment.len(),
        });
    }

    input.options.lng.validate()?;
    let reliq_capacity = match input.options.reliq_capacity_m3_per_day {
        Some(cap) => {
            ensure_non_negative("재액화 용량", cap)?;
            cap
        }
        None => input
            .options
            .lng
            .tph_to_m3_per_day(vessel.reliq_capacity_t_per_h),
    };
    let base_rate = vessel.base_rate_for(input.is_ballast);
    let engine = input.engine_consumption_m3_per_day;
    let initial = input.initial_volume_m3;

    let mut profile = VoyageProfile {
        initial_volume_m3: initial,
        voyage_days: input.voyage_days,
        unsimulated_days,
        days: Vec::with_capacity(full_days),
    };
    let mut remaining = initial;

    for (day, env) in input.environment.iter().take(full_days).enumerate() {
        let tank_level_pct = match input.options.level_mode {
            TankLevelMode::Tracked => (remaining / initial * 100.0).clamp(0.0, 100.0),
            TankLevelMode::Fixed(level) => level,
        };
        let rate = adjusted_rate(
            &BogRateInput::from_conditions(base_rate, tank_level_pct, env),
            &input.options.rate,
        )?;

        let generated = remaining * (rate / 100.0);
        let consumed = generated.min(engine);
        let to_reliquefy = generated - consumed;
        let processed = to_reliquefy.min(reliq_capacity);
        let reliquefied = processed * vessel.reliq_efficiency;
        let reliq_loss = processed - reliquefied;
        let vented = (to_reliquefy - reliq_capacity).max(0.0);

        let next_remaining = remaining - generated + reliquefied;
        if next_remaining < 0.0 {
            warn!(day, remaining = next_remaining, "cargo volume exhausted");
            return Err(BogError::VolumeExhausted {
                day,
                remaining_m3: next_remaining,
                partial: Box::new(profile),
            });
        }

        debug!(
            day,
            rate_pct = rate,
            generated,
            consumed,
            reliquefied,
            vented,
            remaining = next_remaining,
            "simulated day"
        );

        profile.days.push(VoyageState {
            day,
            remaining_m3: next_remaining,
            tank_level_pct,
            bog_rate_pct: rate,
            bog_generated_m3: generated,
            bog_consumed_m3: consumed,
            bog_reliquefied_m3: reliquefied,
            bog_reliq_loss_m3: reliq_loss,
            bog_vented_m3: vented,
            ambient_temp_c: env.ambient_temp_c,
            wave_height_m: env.wave_height_m,
        });
        remaining = next_remaining;
    }

    if unsimulated_days > 0.0 {
        debug!(
            unsimulated_days,
            "fractional day at end of voyage is not simulated"
        );
    }
    let vented = profile.total_vented_m3();
    if vented > 0.0 {
        warn!(vented_m3 = vented, "BOG exceeded engine and reliquefaction capacity, routed to GCU");
    }
    info!(
        vessel = %vessel.vessel_type,
        ballast = input.is_ballast,
        days = profile.len(),
        final_remaining_m3 = profile.final_remaining_m3(),
        "voyage simulated"
    );
    Ok(profile)
}
