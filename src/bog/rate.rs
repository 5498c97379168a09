//! 환경 보정 BOG율 모델.
//!
//! 기본 BOG율에 탱크 압력, 액위, 외기 온도, 파고, 일사량, 탱크 노후도에 대한
//! 독립적인 곱셈 보정계수를 적용한다. 부작용이 없는 순수 함수로 구성한다.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, ensure_non_negative, BogError, Result};

/// 압력 보정 기준 [mbar abs]
pub const REFERENCE_PRESSURE_MBAR: f64 = 1013.0;
/// 온도 보정 기준 [°C] (평균 해수면 기온)
pub const REFERENCE_TEMP_C: f64 = 19.5;

const PRESSURE_SENSITIVITY: f64 = 0.1;
const LEVEL_SENSITIVITY: f64 = 0.05;
const LINEAR_WAVE_COEFF: f64 = 0.02;
const NONLINEAR_WAVE_COEFF: f64 = 0.01;
const AGING_PER_YEAR: f64 = 0.005;

/// 일사량 등급. 닫힌 열거형이며 알 수 없는 문자열은 오류로 처리한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SolarLevel {
    Low,
    Medium,
    High,
}

impl SolarLevel {
    /// 등급별 보정계수.
    pub fn factor(self) -> f64 {
        match self {
            SolarLevel::Low => 1.00,
            SolarLevel::Medium => 1.02,
            SolarLevel::High => 1.05,
        }
    }

    pub fn all() -> [SolarLevel; 3] {
        [SolarLevel::Low, SolarLevel::Medium, SolarLevel::High]
    }
}

impl fmt::Display for SolarLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SolarLevel::Low => "Low",
            SolarLevel::Medium => "Medium",
            SolarLevel::High => "High",
        };
        f.write_str(s)
    }
}

impl FromStr for SolarLevel {
    type Err = BogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(SolarLevel::Low),
            "medium" => Ok(SolarLevel::Medium),
            "high" => Ok(SolarLevel::High),
            _ => Err(BogError::invalid(format!(
                "알 수 없는 일사량 등급: {s} (Low/Medium/High)"
            ))),
        }
    }
}

/// 파고 보정 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaveEffectModel {
    /// `1 + h * 0.02`
    #[default]
    Linear,
    /// `1 + h^1.5 * 0.01`
    NonLinear,
}

impl fmt::Display for WaveEffectModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WaveEffectModel::Linear => f.write_str("linear"),
            WaveEffectModel::NonLinear => f.write_str("nonlinear"),
        }
    }
}

impl FromStr for WaveEffectModel {
    type Err = BogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace(['-', '_'], "").as_str() {
            "linear" => Ok(WaveEffectModel::Linear),
            "nonlinear" | "power" => Ok(WaveEffectModel::NonLinear),
            _ => Err(BogError::invalid(format!("알 수 없는 파고 보정 방식: {s}"))),
        }
    }
}

/// BOG율 모델 옵션.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateModelOptions {
    pub wave_model: WaveEffectModel,
    /// 보정 결과의 하한 [%/day]. 극단 입력에서 음수 BOG율이 나오지 않도록 한다.
    pub floor_pct: f64,
}

impl Default for RateModelOptions {
    fn default() -> Self {
        Self {
            wave_model: WaveEffectModel::Linear,
            floor_pct: 0.0,
        }
    }
}

/// 일별(또는 항해 평균) 환경/탱크 조건.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalConditions {
    /// 외기 온도 [°C]
    pub ambient_temp_c: f64,
    /// 유의 파고 [m]
    pub wave_height_m: f64,
    pub solar: SolarLevel,
    /// 탱크 압력 [mbar abs]
    pub tank_pressure_mbar: f64,
    /// 탱크 경과 연수 [년]. `None`이면 노후 보정을 하지 않는다.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tank_age_years: Option<f64>,
}

impl Default for EnvironmentalConditions {
    /// 모든 보정계수가 1이 되는 기준 조건.
    fn default() -> Self {
        Self {
            ambient_temp_c: REFERENCE_TEMP_C,
            wave_height_m: 0.0,
            solar: SolarLevel::Low,
            tank_pressure_mbar: REFERENCE_PRESSURE_MBAR,
            tank_age_years: None,
        }
    }
}

/// BOG율 계산 입력.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BogRateInput {
    /// 기본 BOG율 [%/day]
    pub base_rate_pct: f64,
    /// 탱크 압력 [mbar abs]
    pub tank_pressure_mbar: f64,
    /// 탱크 액위 [%]
    pub tank_level_pct: f64,
    /// 외기 온도 [°C]
    pub ambient_temp_c: f64,
    /// 파고 [m]
    pub wave_height_m: f64,
    pub solar: SolarLevel,
    /// 탱크 경과 연수 [년]
    pub tank_age_years: Option<f64>,
}

impl BogRateInput {
    /// 환경 조건과 액위로 입력을 구성한다.
    pub fn from_conditions(
        base_rate_pct: f64,
        tank_level_pct: f64,
        env: &EnvironmentalConditions,
    ) -> Self {
        Self {
            base_rate_pct,
            tank_pressure_mbar: env.tank_pressure_mbar,
            tank_level_pct,
            ambient_temp_c: env.ambient_temp_c,
            wave_height_m: env.wave_height_m,
            solar: env.solar,
            tank_age_years: env.tank_age_years,
        }
    }

    fn validate(&self) -> Result<()> {
        ensure_non_negative("기본 BOG율", self.base_rate_pct)?;
        ensure_non_negative("탱크 압력", self.tank_pressure_mbar)?;
        ensure_finite("외기 온도", self.ambient_temp_c)?;
        ensure_non_negative("파고", self.wave_height_m)?;
        ensure_finite("탱크 액위", self.tank_level_pct)?;
        if !(0.0..=100.0).contains(&self.tank_level_pct) {
            return Err(BogError::invalid(format!(
                "탱크 액위는 0~100% 범위여야 합니다: {}",
                self.tank_level_pct
            )));
        }
        if let Some(age) = self.tank_age_years {
            ensure_non_negative("탱크 경과 연수", age)?;
        }
        Ok(())
    }
}

/// 개별 보정계수.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RateFactors {
    pub pressure: f64,
    pub level: f64,
    pub temperature: f64,
    pub wave: f64,
    pub solar: f64,
    pub aging: f64,
}

impl RateFactors {
    /// 전체 보정계수(곱).
    pub fn product(&self) -> f64 {
        self.pressure * self.level * self.temperature * self.wave * self.solar * self.aging
    }
}

/// 입력값에 대한 개별 보정계수를 계산한다.
pub fn rate_factors(input: &BogRateInput, options: &RateModelOptions) -> Result<RateFactors> {
    input.validate()?;

    let pressure = 1.0
        + ((input.tank_pressure_mbar - REFERENCE_PRESSURE_MBAR) / REFERENCE_PRESSURE_MBAR)
            * PRESSURE_SENSITIVITY;
    let level = 1.0 + (1.0 - input.tank_level_pct / 100.0) * LEVEL_SENSITIVITY;
    let temperature = 1.0 + (input.ambient_temp_c - REFERENCE_TEMP_C) / 100.0;
    let wave = match options.wave_model {
        WaveEffectModel::Linear => 1.0 + input.wave_height_m * LINEAR_WAVE_COEFF,
        WaveEffectModel::NonLinear => 1.0 + input.wave_height_m.powf(1.5) * NONLINEAR_WAVE_COEFF,
    };
    let aging = input
        .tank_age_years
        .map_or(1.0, |age| 1.0 + age * AGING_PER_YEAR);

    Ok(RateFactors {
        pressure,
        level,
        temperature,
        wave,
        solar: input.solar.factor(),
        aging,
    })
}

/// 환경 보정된 BOG율 [%/day]을 계산한다. 결과는 `options.floor_pct` 이상으로 제한된다.
pub fn adjusted_rate(input: &BogRateInput, options: &RateModelOptions) -> Result<f64> {
    ensure_non_negative("BOG율 하한", options.floor_pct)?;
    let factors = rate_factors(input, options)?;
    let rate = input.base_rate_pct * factors.product();
    Ok(rate.max(options.floor_pct))
}
