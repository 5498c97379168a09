use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::bog::rate::{EnvironmentalConditions, RateModelOptions};
use crate::bog::simulator::SimulationOptions;
use crate::error::{ensure_non_negative, BogError};
use crate::units::LngProperties;
use crate::vessel::{preset, VesselConfig, VesselType};
use crate::voyage::economics::VoyagePrices;
use crate::voyage::route::{RouteEntry, RouteTable};
use crate::voyage::weather::WeatherSpread;

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 시장 단가 기본값. 거래 관행대로 LNG는 열량 기준, 벙커유는 톤 기준으로 입력한다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceDefaults {
    /// LNG 단가 [$/mmBTU]
    pub lng_usd_per_mmbtu: f64,
    /// 벙커유 단가 [$/t]
    pub bunker_usd_per_t: f64,
    /// 전력 단가 [$/kWh]
    pub electricity_usd_per_kwh: f64,
    /// 탄소 단가 [$/t CO2]
    pub carbon_usd_per_t: f64,
}

impl Default for PriceDefaults {
    fn default() -> Self {
        Self {
            lng_usd_per_mmbtu: 15.0,
            bunker_usd_per_t: 800.0,
            electricity_usd_per_kwh: 0.15,
            carbon_usd_per_t: 30.0,
        }
    }
}

impl PriceDefaults {
    /// LNG 체적 기준 단가로 환산한다.
    ///
    /// 엔진이 태운 BOG 1 m³는 같은 질량의 벙커유를 대체한다고 본다.
    pub fn to_voyage_prices(&self, lng: &LngProperties) -> VoyagePrices {
        VoyagePrices {
            lng_price_per_m3: lng.m3_to_mmbtu(1.0) * self.lng_usd_per_mmbtu,
            bunker_price: lng.m3_to_tonnes(1.0) * self.bunker_usd_per_t,
            electricity_cost: self.electricity_usd_per_kwh,
            carbon_price: self.carbon_usd_per_t,
        }
    }
}

/// 항차 기본값.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoyageDefaults {
    /// 운항 속력 [knot]
    pub speed_kn: f64,
    /// 엔진 가스 소비량 [m³/day]
    pub engine_consumption_m3_per_day: f64,
    /// 적하 항차 적재율 (화물창 용량 대비)
    pub laden_fill_fraction: f64,
}

impl Default for VoyageDefaults {
    fn default() -> Self {
        Self {
            speed_kn: 15.0,
            engine_consumption_m3_per_day: 150.0,
            laden_fill_fraction: 0.98,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
///
/// TOML 출력 순서 때문에 스칼라 필드를 테이블보다 앞에, 배열 테이블(`routes`)을 맨 뒤에 둔다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub vessel_type: VesselType,
    /// `RUST_LOG`가 없을 때 사용할 로그 레벨
    pub log_level: String,
    pub rate_model: RateModelOptions,
    pub lng: LngProperties,
    pub prices: PriceDefaults,
    pub environment: EnvironmentalConditions,
    pub weather_spread: WeatherSpread,
    pub voyage: VoyageDefaults,
    pub routes: Vec<RouteEntry>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vessel_type: VesselType::Megi,
            log_level: "info".to_string(),
            rate_model: RateModelOptions::default(),
            lng: LngProperties::default(),
            prices: PriceDefaults::default(),
            environment: EnvironmentalConditions::default(),
            weather_spread: WeatherSpread::default(),
            voyage: VoyageDefaults::default(),
            routes: default_routes(),
        }
    }
}

// 대략적인 항로 거리 [NM]
fn default_routes() -> Vec<RouteEntry> {
    [
        ("RAS LAFFAN", "MILFORD HAVEN", 6_240.0),
        ("RAS LAFFAN", "INCHEON", 6_010.0),
        ("SINGAPORE", "YOKOHAMA", 2_890.0),
        ("SINGAPORE", "ROTTERDAM", 8_290.0),
        ("FUJAIRAH", "SINGAPORE", 3_290.0),
        ("BUSAN", "YOKOHAMA", 680.0),
    ]
    .into_iter()
    .map(|(from, to, distance_nm)| RouteEntry {
        from: from.to_string(),
        to: to.to_string(),
        distance_nm,
    })
    .collect()
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// 값 범위 오류
    #[error("설정 값 오류: {0}")]
    Invalid(#[from] BogError),
}

/// 설정 파일을 로드하거나, 없으면 기본 설정을 만들어 저장한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        load_from(path)
    } else {
        let cfg = Config::default();
        cfg.save_to(path)?;
        Ok(cfg)
    }
}

/// 설정 파일을 읽고 값을 검증한다.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)?;
    let cfg: Config = toml::from_str(&content)?;
    cfg.validate()?;
    Ok(cfg)
}

impl Config {
    /// 설정을 지정한 경로에 저장한다.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), BogError> {
        ensure_non_negative("rate_model.floor_pct", self.rate_model.floor_pct)?;
        self.lng.validate()?;
        self.prices.to_voyage_prices(&self.lng).validate()?;
        ensure_non_negative("voyage.speed_kn", self.voyage.speed_kn)?;
        ensure_non_negative(
            "voyage.engine_consumption_m3_per_day",
            self.voyage.engine_consumption_m3_per_day,
        )?;
        let fill = self.voyage.laden_fill_fraction;
        ensure_non_negative("voyage.laden_fill_fraction", fill)?;
        if fill > 1.0 {
            return Err(BogError::invalid(format!(
                "voyage.laden_fill_fraction 값은 0~1 범위여야 합니다: {fill}"
            )));
        }
        ensure_non_negative("weather_spread.temp_c", self.weather_spread.temp_c)?;
        ensure_non_negative("weather_spread.wave_m", self.weather_spread.wave_m)?;
        self.route_table()?;
        Ok(())
    }

    /// 설정된 선박 타입의 내장 사양.
    pub fn vessel(&self) -> VesselConfig {
        preset(self.vessel_type)
    }

    pub fn voyage_prices(&self) -> VoyagePrices {
        self.prices.to_voyage_prices(&self.lng)
    }

    /// 설정 값으로 시뮬레이션 옵션을 구성한다. 액위는 매일 추적한다.
    pub fn simulation_options(&self) -> SimulationOptions {
        SimulationOptions {
            rate: self.rate_model,
            lng: self.lng,
            ..SimulationOptions::default()
        }
    }

    pub fn route_table(&self) -> Result<RouteTable, BogError> {
        RouteTable::from_entries(&self.routes)
    }
}
