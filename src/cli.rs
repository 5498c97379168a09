//! 명령행 인자 정의.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::bog::rate::{EnvironmentalConditions, SolarLevel, WaveEffectModel};
use crate::config::DEFAULT_CONFIG_PATH;
use crate::conversion::{self, ConversionError};
use crate::units::{to_celsius, to_mbar_abs};
use crate::vessel::VesselType;

#[derive(Parser, Debug)]
#[command(author, version, about = "LNG 운반선 BOG/항해 계산 도구")]
pub struct Cli {
    /// 설정 파일 경로
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// 파고 보정 방식 (linear, nonlinear). 설정 파일 값을 덮어쓴다.
    #[arg(long, global = true)]
    pub wave_model: Option<WaveEffectModel>,

    /// 하위 명령이 없으면 대화형 메뉴를 실행한다.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// 환경 보정 BOG율과 보정계수 내역
    Rate(RateArgs),
    /// 한 항차의 일별 BOG 수지와 경제성 요약
    Simulate(SimulateArgs),
    /// 공선 항차 힐 평가/추천
    Heel(HeelArgs),
    /// 적하 + 공선 항차 소비량 합계
    Legs(LegsArgs),
    /// 내장 선박 사양 목록
    Vessels,
}

/// 기본 환경 조건을 덮어쓰는 인자.
#[derive(Args, Debug, Clone, Default)]
pub struct EnvArgs {
    /// 외기 온도
    #[arg(long)]
    pub temp: Option<f64>,
    /// 외기 온도 단위 (C, F, K)
    #[arg(long, default_value = "C")]
    pub temp_unit: String,
    /// 유의 파고 [m]
    #[arg(long)]
    pub wave: Option<f64>,
    /// 일사량 (Low, Medium, High)
    #[arg(long)]
    pub solar: Option<SolarLevel>,
    /// 탱크 압력
    #[arg(long)]
    pub pressure: Option<f64>,
    /// 탱크 압력 단위 (mbar, mbarg, bar, barg, kpa, psi, psig)
    #[arg(long, default_value = "mbar")]
    pub pressure_unit: String,
    /// 탱크 경과 연수 [년]
    #[arg(long)]
    pub tank_age: Option<f64>,
}

impl EnvArgs {
    /// 지정된 값만 `base`에 덮어쓴다.
    pub fn apply(&self, base: EnvironmentalConditions) -> Result<EnvironmentalConditions, ConversionError> {
        let mut env = base;
        if let Some(t) = self.temp {
            let unit = conversion::parse_temperature_unit(&self.temp_unit)?;
            env.ambient_temp_c = to_celsius(t, unit);
        }
        if let Some(p) = self.pressure {
            let unit = conversion::parse_pressure_unit(&self.pressure_unit)?;
            env.tank_pressure_mbar = to_mbar_abs(p, unit);
        }
        if let Some(w) = self.wave {
            env.wave_height_m = w;
        }
        if let Some(s) = self.solar {
            env.solar = s;
        }
        if self.tank_age.is_some() {
            env.tank_age_years = self.tank_age;
        }
        Ok(env)
    }
}

/// 항해일수 지정 방법. `--days`가 있으면 항로보다 우선한다.
#[derive(Args, Debug, Clone, Default)]
pub struct VoyageArgs {
    /// 항해일수 [day]
    #[arg(long)]
    pub days: Option<f64>,
    /// 출발 항구 (설정 파일 항로표 기준)
    #[arg(long = "from", requires = "to")]
    pub from: Option<String>,
    /// 도착 항구
    #[arg(long = "to", requires = "from")]
    pub to: Option<String>,
    /// 운항 속력 [knot]
    #[arg(long)]
    pub speed: Option<f64>,
    /// 엔진 가스 소비량 [m³/day]
    #[arg(long)]
    pub engine: Option<f64>,
    /// 일별 기상 산포 난수 시드. 없으면 매일 같은 조건을 쓴다.
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Args, Debug)]
pub struct RateArgs {
    #[arg(long)]
    pub vessel: Option<VesselType>,
    /// 기본 BOG율 [%/day]. 없으면 선박 사양 값.
    #[arg(long)]
    pub base_rate: Option<f64>,
    /// 탱크 액위 [%]
    #[arg(long, default_value_t = 100.0)]
    pub level: f64,
    /// 공선 항차 기본 BOG율 사용
    #[arg(long)]
    pub ballast: bool,
    #[command(flatten)]
    pub env: EnvArgs,
}

#[derive(Args, Debug)]
pub struct SimulateArgs {
    #[arg(long)]
    pub vessel: Option<VesselType>,
    /// 초기 적재량 [m³]. 없으면 적하는 용량 x 적재율, 공선은 최대 힐.
    #[arg(long)]
    pub initial: Option<f64>,
    #[arg(long)]
    pub ballast: bool,
    /// 액위를 추적하지 않고 고정 [%]
    #[arg(long)]
    pub fixed_level: Option<f64>,
    /// 일별 표 출력
    #[arg(long)]
    pub daily: bool,
    #[command(flatten)]
    pub voyage: VoyageArgs,
    #[command(flatten)]
    pub env: EnvArgs,
}

#[derive(Args, Debug)]
pub struct HeelArgs {
    #[arg(long)]
    pub vessel: Option<VesselType>,
    /// 평가할 힐 [m³]. 없으면 추천 힐만 계산한다.
    #[arg(long)]
    pub heel: Option<f64>,
    #[command(flatten)]
    pub voyage: VoyageArgs,
    #[command(flatten)]
    pub env: EnvArgs,
}

#[derive(Args, Debug)]
pub struct LegsArgs {
    /// 적하 항차 거리 [NM]
    #[arg(long)]
    pub laden_nm: f64,
    /// 공선 항차 거리 [NM]. 없으면 적하 항차와 같다.
    #[arg(long)]
    pub ballast_nm: Option<f64>,
    /// 운항 속력 [knot]
    #[arg(long)]
    pub speed: Option<f64>,
    /// 액체 연료 [t/day]
    #[arg(long, default_value_t = 0.0)]
    pub liquid_fuel: f64,
    /// 적하 항차 LNG 소비 [m³/day]
    #[arg(long, default_value_t = 0.0)]
    pub laden_lng: f64,
    /// 공선 항차 LNG 소비 [m³/day]
    #[arg(long, default_value_t = 0.0)]
    pub ballast_lng: f64,
    /// 재액화 [m³/day]
    #[arg(long, default_value_t = 0.0)]
    pub reliq: f64,
    /// GCU 소각 [m³/day]
    #[arg(long, default_value_t = 0.0)]
    pub gcu: f64,
}
