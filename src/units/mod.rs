//! 단위 정의 및 변환 모듈 모음.

pub mod lng;
pub mod pressure;
pub mod temperature;

pub use lng::{convert_lng_quantity, LngProperties, LngQuantityUnit};
pub use pressure::{convert_pressure, to_mbar_abs, PressureUnit};
pub use temperature::{convert_temperature, to_celsius, TemperatureUnit};
