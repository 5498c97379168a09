//! LNG 운반선 사양 카탈로그.
//!
//! 추진 방식별(ME-GI, DFDE) 대표 사양을 내장하며, 키 문자열로 조회한다.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ensure_non_negative, BogError, Result};

/// 카탈로그에 등록된 선박 추진 타입.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VesselType {
    /// ME-GI 2행정 고압 가스분사 엔진 + 재액화 설비
    Megi,
    /// 이중연료 디젤-전기 추진
    Dfde,
}

impl VesselType {
    /// 카탈로그 전체 목록.
    pub fn all() -> &'static [VesselType] {
        &[VesselType::Megi, VesselType::Dfde]
    }

    /// 조회 키.
    pub fn key(&self) -> &'static str {
        match self {
            VesselType::Megi => "MEGI",
            VesselType::Dfde => "DFDE",
        }
    }
}

impl fmt::Display for VesselType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for VesselType {
    type Err = BogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().replace('-', "").as_str() {
            "MEGI" => Ok(VesselType::Megi),
            "DFDE" => Ok(VesselType::Dfde),
            _ => Err(BogError::UnknownVesselType(s.to_string())),
        }
    }
}

/// 적하/공선 항차별 기본 BOG율 [%/day].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegBogRates {
    pub laden: f64,
    pub ballast: f64,
}

/// 재액화 설비 소비전력 범위 [MW].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerBand {
    pub min_mw: f64,
    pub max_mw: f64,
}

/// 선박 사양. 카탈로그에서 선택된 뒤에는 변경하지 않는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VesselConfig {
    pub vessel_type: VesselType,
    /// 화물창 총 용량 [m³]
    pub tank_capacity_m3: f64,
    /// 최소 힐 [m³]
    pub min_heel_m3: f64,
    /// 최대 힐 [m³]
    pub max_heel_m3: f64,
    /// 기본 BOG율 [%/day]
    pub base_bog_rate_pct: f64,
    /// 항차별 BOG율. 없으면 `base_bog_rate_pct`를 쓴다.
    pub leg_bog_rates: Option<LegBogRates>,
    /// 재액화 용량 [t/h]
    pub reliq_capacity_t_per_h: f64,
    /// 재액화 처리 효율 (0~1)
    pub reliq_efficiency: f64,
    /// 재액화 비소비전력 [kWh/kg BOG]
    pub reliq_specific_power_kwh_per_kg: f64,
    /// 재액화 설비 소비전력 범위. 재액화 설비가 없는 추진 방식은 `None`.
    pub reliq_power: Option<PowerBand>,
    /// 엔진 열효율 (0~1)
    pub engine_efficiency: f64,
    /// 설계 기준 일일 연료 소비량 [t/day]
    pub daily_consumption_t: f64,
    /// 재래식 대비 배출 저감률 (0~1)
    pub emissions_reduction: f64,
    /// 평온 해상 추진 출력 [MW]
    pub propulsion_power_calm_mw: f64,
    /// 황천 해상 추진 출력 [MW]
    pub propulsion_power_adverse_mw: f64,
}

/// 배출 저감률이 명시되지 않은 사양에 적용하는 기본값.
pub const DEFAULT_EMISSIONS_REDUCTION: f64 = 0.10;

impl VesselConfig {
    /// 항차 구분에 맞는 기본 BOG율을 반환한다.
    pub fn base_rate_for(&self, is_ballast: bool) -> f64 {
        match self.leg_bog_rates {
            Some(rates) if is_ballast => rates.ballast,
            Some(rates) => rates.laden,
            None => self.base_bog_rate_pct,
        }
    }

    /// 사양 값의 범위를 검증한다.
    pub fn validate(&self) -> Result<()> {
        ensure_non_negative("tank_capacity_m3", self.tank_capacity_m3)?;
        ensure_non_negative("min_heel_m3", self.min_heel_m3)?;
        ensure_non_negative("max_heel_m3", self.max_heel_m3)?;
        ensure_non_negative("base_bog_rate_pct", self.base_bog_rate_pct)?;
        ensure_non_negative("reliq_capacity_t_per_h", self.reliq_capacity_t_per_h)?;
        ensure_non_negative(
            "reliq_specific_power_kwh_per_kg",
            self.reliq_specific_power_kwh_per_kg,
        )?;
        ensure_non_negative("daily_consumption_t", self.daily_consumption_t)?;
        ensure_non_negative("propulsion_power_calm_mw", self.propulsion_power_calm_mw)?;
        ensure_non_negative(
            "propulsion_power_adverse_mw",
            self.propulsion_power_adverse_mw,
        )?;
        for (name, frac) in [
            ("reliq_efficiency", self.reliq_efficiency),
            ("engine_efficiency", self.engine_efficiency),
            ("emissions_reduction", self.emissions_reduction),
        ] {
            ensure_non_negative(name, frac)?;
            if frac > 1.0 {
                return Err(BogError::invalid(format!(
                    "{name} 값은 0~1 범위여야 합니다: {frac}"
                )));
            }
        }
        if self.min_heel_m3 > self.max_heel_m3 {
            return Err(BogError::invalid("최소 힐이 최대 힐보다 큽니다."));
        }
        if self.max_heel_m3 > self.tank_capacity_m3 {
            return Err(BogError::invalid("최대 힐이 화물창 용량보다 큽니다."));
        }
        if let Some(rates) = self.leg_bog_rates {
            ensure_non_negative("leg_bog_rates.laden", rates.laden)?;
            ensure_non_negative("leg_bog_rates.ballast", rates.ballast)?;
        }
        if let Some(band) = self.reliq_power {
            ensure_non_negative("reliq_power.min_mw", band.min_mw)?;
            ensure_non_negative("reliq_power.max_mw", band.max_mw)?;
            if band.max_mw < band.min_mw {
                return Err(BogError::invalid("재액화 전력 범위의 최대값이 최소값보다 작습니다."));
            }
        }
        Ok(())
    }
}

/// 추진 타입별 내장 사양을 반환한다.
pub fn preset(vessel_type: VesselType) -> VesselConfig {
    match vessel_type {
        VesselType::Megi => VesselConfig {
            vessel_type,
            tank_capacity_m3: 174_000.0,
            min_heel_m3: 1_500.0,
            max_heel_m3: 3_000.0,
            base_bog_rate_pct: 0.14,
            leg_bog_rates: None,
            reliq_capacity_t_per_h: 3.0,
            reliq_efficiency: 0.90,
            reliq_specific_power_kwh_per_kg: 0.75,
            reliq_power: Some(PowerBand {
                min_mw: 3.0,
                max_mw: 5.8,
            }),
            engine_efficiency: 0.78,
            daily_consumption_t: 100.0,
            emissions_reduction: 0.22,
            propulsion_power_calm_mw: 27.0,
            propulsion_power_adverse_mw: 29.0,
        },
        VesselType::Dfde => VesselConfig {
            vessel_type,
            tank_capacity_m3: 180_000.0,
            min_heel_m3: 1_600.0,
            max_heel_m3: 3_200.0,
            base_bog_rate_pct: 0.15,
            leg_bog_rates: Some(LegBogRates {
                laden: 0.15,
                ballast: 0.06,
            }),
            reliq_capacity_t_per_h: 2.8,
            reliq_efficiency: 0.85,
            reliq_specific_power_kwh_per_kg: 0.75,
            reliq_power: None,
            engine_efficiency: 0.47,
            daily_consumption_t: 130.0,
            emissions_reduction: DEFAULT_EMISSIONS_REDUCTION,
            // NBOG 적하 운항 출력 / 최대 출력
            propulsion_power_calm_mw: 20.0,
            propulsion_power_adverse_mw: 40.0,
        },
    }
}

/// 선박 타입 키로 사양을 조회한다. 대소문자와 하이픈은 무시한다.
pub fn vessel_config_lookup(key: &str) -> Result<VesselConfig> {
    let vessel_type: VesselType = key.parse()?;
    Ok(preset(vessel_type))
}
