use thiserror::Error;

use crate::error::BogError;
use crate::quantity::QuantityKind;
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Error)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    #[error("알 수 없는 단위: {0}")]
    UnknownUnit(String),
    /// 환산에 쓰는 LNG 물성이 유효하지 않음
    #[error(transparent)]
    InvalidProperties(#[from] BogError),
}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열 예시는 `C`, `F`, `mbar`, `barg`, `psia`, `m3`, `t`, `mmbtu` 등을 사용할 수 있다.
/// LNG 수량 환산에는 `props`의 밀도/발열량을 사용한다.
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
    props: &LngProperties,
) -> Result<f64, ConversionError> {
    match kind {
        QuantityKind::Temperature => {
            let from = parse_temperature_unit(from_unit_str)?;
            let to = parse_temperature_unit(to_unit_str)?;
            Ok(convert_temperature(value, from, to))
        }
        QuantityKind::TankPressure => {
            let from = parse_pressure_unit(from_unit_str)?;
            let to = parse_pressure_unit(to_unit_str)?;
            Ok(convert_pressure(value, from, to))
        }
        QuantityKind::LngQuantity => {
            let from = parse_lng_quantity_unit(from_unit_str)?;
            let to = parse_lng_quantity_unit(to_unit_str)?;
            Ok(convert_lng_quantity(value, from, to, props)?)
        }
    }
}

pub fn parse_temperature_unit(s: &str) -> Result<TemperatureUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "k" | "kelvin" => Ok(TemperatureUnit::Kelvin),
        "c" | "celsius" | "°c" => Ok(TemperatureUnit::Celsius),
        "f" | "fahrenheit" | "°f" => Ok(TemperatureUnit::Fahrenheit),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_pressure_unit(s: &str) -> Result<PressureUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "mbar" | "mbara" | "millibar" => Ok(PressureUnit::MilliBarA),
        "mbarg" => Ok(PressureUnit::MilliBarG),
        "bar" | "bara" => Ok(PressureUnit::BarA),
        "barg" => Ok(PressureUnit::BarG),
        "kpa" | "kpaa" | "kilopascal" => Ok(PressureUnit::KiloPascalA),
        "psi" | "psia" => Ok(PressureUnit::PsiA),
        "psig" => Ok(PressureUnit::PsiG),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_lng_quantity_unit(s: &str) -> Result<LngQuantityUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "m3" | "m^3" | "cbm" => Ok(LngQuantityUnit::CubicMeter),
        "t" | "mt" | "tonne" | "ton" => Ok(LngQuantityUnit::Tonne),
        "mmbtu" => Ok(LngQuantityUnit::MmBtu),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}
