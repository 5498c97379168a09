use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, BogError, Result};

/// LNG 수량 단위. 체적/질량/열량 사이 환산에는 [`LngProperties`]가 필요하다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LngQuantityUnit {
    /// 액상 체적 [m³]
    CubicMeter,
    /// 질량 [t]
    Tonne,
    /// 열량 [mmBTU]
    MmBtu,
}

/// LNG 물성. 카고 조성에 따라 달라지므로 설정 파일에서 덮어쓸 수 있다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LngProperties {
    /// 액상 밀도 [t/m³]
    pub density_t_per_m3: f64,
    /// 단위 체적당 발열량 [mmBTU/m³]
    pub heating_value_mmbtu_per_m3: f64,
}

impl Default for LngProperties {
    fn default() -> Self {
        Self {
            density_t_per_m3: 0.45,
            heating_value_mmbtu_per_m3: 23.12,
        }
    }
}

impl LngProperties {
    /// 체적을 질량으로 변환한다.
    pub fn m3_to_tonnes(&self, m3: f64) -> f64 {
        m3 * self.density_t_per_m3
    }

    /// 밀도와 발열량이 양수인지 확인한다. 나눗셈을 쓰는 환산 전에 호출해야 한다.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("LNG 밀도", self.density_t_per_m3),
            ("LNG 발열량", self.heating_value_mmbtu_per_m3),
        ] {
            ensure_finite(name, value)?;
            if value <= 0.0 {
                return Err(BogError::invalid(format!(
                    "{name} 값은 0보다 커야 합니다: {value}"
                )));
            }
        }
        Ok(())
    }

    /// 질량을 체적으로 변환한다.
    pub fn tonnes_to_m3(&self, tonnes: f64) -> f64 {
        tonnes / self.density_t_per_m3
    }

    /// 체적을 열량으로 변환한다.
    pub fn m3_to_mmbtu(&self, m3: f64) -> f64 {
        m3 * self.heating_value_mmbtu_per_m3
    }

    /// 재액화 설비 용량 [t/h]을 일일 액상 체적 [m³/day]로 환산한다.
    pub fn tph_to_m3_per_day(&self, tonnes_per_hour: f64) -> f64 {
        self.tonnes_to_m3(tonnes_per_hour * 24.0)
    }

    fn to_m3(&self, value: f64, unit: LngQuantityUnit) -> f64 {
        match unit {
            LngQuantityUnit::CubicMeter => value,
            LngQuantityUnit::Tonne => self.tonnes_to_m3(value),
            LngQuantityUnit::MmBtu => value / self.heating_value_mmbtu_per_m3,
        }
    }

    fn from_m3(&self, m3: f64, unit: LngQuantityUnit) -> f64 {
        match unit {
            LngQuantityUnit::CubicMeter => m3,
            LngQuantityUnit::Tonne => self.m3_to_tonnes(m3),
            LngQuantityUnit::MmBtu => self.m3_to_mmbtu(m3),
        }
    }
}

/// LNG 수량을 다른 단위로 변환한다. 물성이 유효하지 않으면 오류를 반환한다.
pub fn convert_lng_quantity(
    value: f64,
    from: LngQuantityUnit,
    to: LngQuantityUnit,
    props: &LngProperties,
) -> Result<f64> {
    props.validate()?;
    Ok(props.from_m3(props.to_m3(value, from), to))
}
