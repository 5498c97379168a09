use serde::{Deserialize, Serialize};

/// 탱크 압력 단위. 내부 기준은 절대압 mbar 이다.
/// 게이지 단위(`*G`)는 표준 대기압(1013.25 mbar)을 더해 절대압으로 환산한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    MilliBarA,
    MilliBarG,
    BarA,
    BarG,
    KiloPascalA,
    PsiA,
    PsiG,
}

pub(crate) const ATM_MBAR: f64 = 1013.25;
const MBAR_PER_PSI: f64 = 68.9476;

/// 주어진 압력을 절대압 mbar 로 변환한다.
pub fn to_mbar_abs(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::MilliBarA => value,
        PressureUnit::MilliBarG => value + ATM_MBAR,
        PressureUnit::BarA => value * 1000.0,
        PressureUnit::BarG => value * 1000.0 + ATM_MBAR,
        PressureUnit::KiloPascalA => value * 10.0,
        PressureUnit::PsiA => value * MBAR_PER_PSI,
        PressureUnit::PsiG => value * MBAR_PER_PSI + ATM_MBAR,
    }
}

/// 절대압 mbar 값을 원하는 단위로 변환한다.
pub fn from_mbar_abs(value_mbar: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::MilliBarA => value_mbar,
        PressureUnit::MilliBarG => value_mbar - ATM_MBAR,
        PressureUnit::BarA => value_mbar / 1000.0,
        PressureUnit::BarG => (value_mbar - ATM_MBAR) / 1000.0,
        PressureUnit::KiloPascalA => value_mbar / 10.0,
        PressureUnit::PsiA => value_mbar / MBAR_PER_PSI,
        PressureUnit::PsiG => (value_mbar - ATM_MBAR) / MBAR_PER_PSI,
    }
}

/// 압력을 원하는 단위로 변환한다.
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    from_mbar_abs(to_mbar_abs(value, from), to)
}
