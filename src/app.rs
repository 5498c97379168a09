use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::bog::power::{power_requirements, PowerInput, PowerRequirements};
use crate::bog::rate::{adjusted_rate, rate_factors, BogRateInput, EnvironmentalConditions};
use crate::bog::simulator::{
    simulate, SimulationInput, SimulationOptions, TankLevelMode, VoyageProfile,
};
use crate::cli::{Cli, Command, HeelArgs, LegsArgs, RateArgs, SimulateArgs, VoyageArgs};
use crate::config::{self, Config, ConfigError};
use crate::conversion::ConversionError;
use crate::error::BogError;
use crate::logging;
use crate::ui_cli::{self, MenuChoice};
use crate::vessel::{preset, VesselConfig, VesselType};
use crate::voyage::economics::{summarize, EconomicsSummary};
use crate::voyage::heel::{assess_heel, recommend_heel, HeelInput};
use crate::voyage::planner::{check_voyage_days, round_trip, voyage_days, LegInput};
use crate::voyage::route::RouteDistance;
use crate::voyage::weather::{constant_profile, required_days, scattered_profile};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일/콘솔 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 단위 변환 오류
    #[error("단위 변환 오류: {0}")]
    Conversion(#[from] ConversionError),
    /// BOG/항해 계산 오류
    #[error("계산 오류: {0}")]
    Bog(#[from] BogError),
}

/// 한 항차 계산 요청.
#[derive(Debug, Clone)]
pub struct LegRequest {
    pub vessel: VesselConfig,
    pub initial_volume_m3: f64,
    pub voyage_days: f64,
    pub is_ballast: bool,
    pub engine_consumption_m3_per_day: f64,
    pub conditions: EnvironmentalConditions,
    pub seed: Option<u64>,
    pub level_mode: TankLevelMode,
}

/// 한 항차 계산 결과.
#[derive(Debug, Clone)]
pub struct LegReport {
    pub profile: VoyageProfile,
    pub summary: EconomicsSummary,
    /// 항차 평균 BOG 기준 소요 동력
    pub power: PowerRequirements,
}

/// 인자를 해석해 하위 명령 또는 대화형 메뉴를 실행한다.
pub fn run(cli: Cli) -> Result<(), AppError> {
    let mut cfg = config::load_or_default(&cli.config)?;
    logging::init(&cfg.log_level);
    if let Some(model) = cli.wave_model {
        cfg.rate_model.wave_model = model;
    }
    info!(config = %cli.config.display(), vessel = %cfg.vessel_type, "configuration loaded");

    match cli.command {
        Some(Command::Rate(args)) => cmd_rate(&cfg, &args),
        Some(Command::Simulate(args)) => cmd_simulate(&cfg, &args),
        Some(Command::Heel(args)) => cmd_heel(&cfg, &args),
        Some(Command::Legs(args)) => cmd_legs(&cfg, &args),
        Some(Command::Vessels) => {
            for vessel_type in VesselType::all() {
                ui_cli::print_vessel(&preset(*vessel_type));
            }
            Ok(())
        }
        None => interactive(&mut cfg, &cli.config),
    }
}

/// 대화형 메뉴 루프. 종료 시 설정을 저장한다.
pub fn interactive(cfg: &mut Config, config_path: &Path) -> Result<(), AppError> {
    loop {
        let result = match ui_cli::main_menu()? {
            MenuChoice::UnitConversion => ui_cli::handle_unit_conversion(cfg),
            MenuChoice::BogRate => ui_cli::handle_bog_rate(cfg),
            MenuChoice::Simulation => ui_cli::handle_simulation(cfg),
            MenuChoice::HeelPlanning => ui_cli::handle_heel(cfg),
            MenuChoice::LegTotals => ui_cli::handle_leg_totals(cfg),
            MenuChoice::Settings => ui_cli::handle_settings(cfg)
                .and_then(|()| cfg.save_to(config_path).map_err(AppError::from)),
            MenuChoice::Exit => {
                cfg.save_to(config_path)?;
                println!("프로그램을 종료합니다.");
                break;
            }
        };
        // 계산 오류는 메뉴로 돌아가고, 콘솔 입출력 오류만 루프를 끝낸다.
        match result {
            Err(AppError::Io(e)) => return Err(AppError::Io(e)),
            Err(e) => println!("오류: {e}"),
            Ok(()) => {}
        }
    }
    Ok(())
}

/// 항해일수를 직접 지정값 또는 항로표 거리/속력으로 결정한다.
pub fn resolve_voyage_days(
    cfg: &Config,
    days: Option<f64>,
    route: Option<(&str, &str)>,
    speed_kn: Option<f64>,
) -> Result<f64, BogError> {
    if let Some(days) = days {
        return check_voyage_days(days);
    }
    let Some((origin, destination)) = route else {
        return Err(BogError::invalid(
            "항해일수(--days) 또는 출발/도착 항구(--from/--to)를 지정하세요.",
        ));
    };
    let distance = cfg.route_table()?.distance_nm(origin, destination)?;
    voyage_days(distance, speed_kn.unwrap_or(cfg.voyage.speed_kn))
}

/// 기본 조건으로 일별 환경 프로파일을 만든다. 시드가 있으면 설정된 산포를 적용한다.
pub fn build_environment(
    cfg: &Config,
    conditions: EnvironmentalConditions,
    voyage_days: f64,
    seed: Option<u64>,
) -> Result<Vec<EnvironmentalConditions>, BogError> {
    let days = required_days(check_voyage_days(voyage_days)?);
    match seed {
        Some(seed) => scattered_profile(conditions, cfg.weather_spread, days, seed),
        None => Ok(constant_profile(conditions, days)),
    }
}

/// 항차 시뮬레이션, 경제성 집계, 평균 소요 동력 계산을 한 번에 수행한다.
pub fn run_leg(cfg: &Config, request: &LegRequest) -> Result<LegReport, BogError> {
    let environment = build_environment(
        cfg,
        request.conditions,
        request.voyage_days,
        request.seed,
    )?;
    let profile = simulate(SimulationInput {
        initial_volume_m3: request.initial_volume_m3,
        vessel: &request.vessel,
        voyage_days: request.voyage_days,
        environment: &environment,
        is_ballast: request.is_ballast,
        engine_consumption_m3_per_day: request.engine_consumption_m3_per_day,
        options: SimulationOptions {
            level_mode: request.level_mode,
            ..cfg.simulation_options()
        },
    })?;
    let summary = summarize(&profile, &cfg.voyage_prices(), &request.vessel)?;

    let daily_bog_m3 = if profile.is_empty() {
        0.0
    } else {
        profile.total_generated_m3() / profile.len() as f64
    };
    let power = power_requirements(
        &request.vessel,
        PowerInput {
            daily_bog_m3,
            reliq_capacity_m3_per_day: cfg
                .lng
                .tph_to_m3_per_day(request.vessel.reliq_capacity_t_per_h),
            ambient_temp_c: request.conditions.ambient_temp_c,
            wave_height_m: request.conditions.wave_height_m,
        },
    )?;

    Ok(LegReport {
        profile,
        summary,
        power,
    })
}

/// 항차 종류에 맞는 기본 초기 적재량 [m³].
pub fn default_initial_volume(cfg: &Config, vessel: &VesselConfig, is_ballast: bool) -> f64 {
    if is_ballast {
        vessel.max_heel_m3
    } else {
        vessel.tank_capacity_m3 * cfg.voyage.laden_fill_fraction
    }
}

fn voyage_days_from_args(cfg: &Config, args: &VoyageArgs) -> Result<f64, BogError> {
    let route = match (&args.from, &args.to) {
        (Some(from), Some(to)) => Some((from.as_str(), to.as_str())),
        _ => None,
    };
    resolve_voyage_days(cfg, args.days, route, args.speed)
}

fn cmd_rate(cfg: &Config, args: &RateArgs) -> Result<(), AppError> {
    let vessel = preset(args.vessel.unwrap_or(cfg.vessel_type));
    let base = args
        .base_rate
        .unwrap_or_else(|| vessel.base_rate_for(args.ballast));
    let env = args.env.apply(cfg.environment)?;
    let input = BogRateInput::from_conditions(base, args.level, &env);
    let factors = rate_factors(&input, &cfg.rate_model)?;
    let rate = adjusted_rate(&input, &cfg.rate_model)?;
    ui_cli::print_rate(&input, &factors, rate, cfg.rate_model.wave_model);
    Ok(())
}

fn cmd_simulate(cfg: &Config, args: &SimulateArgs) -> Result<(), AppError> {
    let vessel = preset(args.vessel.unwrap_or(cfg.vessel_type));
    let request = LegRequest {
        initial_volume_m3: args
            .initial
            .unwrap_or_else(|| default_initial_volume(cfg, &vessel, args.ballast)),
        voyage_days: voyage_days_from_args(cfg, &args.voyage)?,
        is_ballast: args.ballast,
        engine_consumption_m3_per_day: args
            .voyage
            .engine
            .unwrap_or(cfg.voyage.engine_consumption_m3_per_day),
        conditions: args.env.apply(cfg.environment)?,
        seed: args.voyage.seed,
        level_mode: args
            .fixed_level
            .map_or(TankLevelMode::Tracked, TankLevelMode::Fixed),
        vessel,
    };

    match run_leg(cfg, &request) {
        Ok(report) => {
            ui_cli::print_profile(&report.profile, args.daily);
            ui_cli::print_summary(&report.summary);
            ui_cli::print_power(&report.power);
            Ok(())
        }
        Err(BogError::VolumeExhausted {
            day,
            remaining_m3,
            partial,
        }) => {
            ui_cli::print_profile(&partial, true);
            Err(BogError::VolumeExhausted {
                day,
                remaining_m3,
                partial,
            }
            .into())
        }
        Err(e) => Err(e.into()),
    }
}

fn cmd_heel(cfg: &Config, args: &HeelArgs) -> Result<(), AppError> {
    let vessel = preset(args.vessel.unwrap_or(cfg.vessel_type));
    let days = voyage_days_from_args(cfg, &args.voyage)?;
    let conditions = args.env.apply(cfg.environment)?;
    let environment = build_environment(cfg, conditions, days, args.voyage.seed)?;
    let input = HeelInput {
        heel_m3: args.heel.unwrap_or(vessel.min_heel_m3),
        vessel: &vessel,
        voyage_days: days,
        environment: &environment,
        engine_consumption_m3_per_day: args
            .voyage
            .engine
            .unwrap_or(cfg.voyage.engine_consumption_m3_per_day),
        options: cfg.simulation_options(),
    };

    if args.heel.is_some() {
        ui_cli::print_heel(&assess_heel(input)?);
    }
    match recommend_heel(input)? {
        Some(best) => {
            println!("\n추천 힐 (최소 충족값):");
            ui_cli::print_heel(&best);
        }
        None => println!(
            "\n최대 힐 {:.0} m³로도 연료가스 수요를 충족하지 못합니다.",
            vessel.max_heel_m3
        ),
    }
    Ok(())
}

fn cmd_legs(cfg: &Config, args: &LegsArgs) -> Result<(), AppError> {
    let speed_kn = args.speed.unwrap_or(cfg.voyage.speed_kn);
    let laden = LegInput {
        distance_nm: args.laden_nm,
        speed_kn,
        liquid_fuel_t_per_day: args.liquid_fuel,
        lng_m3_per_day: args.laden_lng,
        reliq_m3_per_day: args.reliq,
        gcu_m3_per_day: args.gcu,
    };
    let ballast = LegInput {
        distance_nm: args.ballast_nm.unwrap_or(args.laden_nm),
        lng_m3_per_day: args.ballast_lng,
        ..laden
    };
    ui_cli::print_round_trip(&round_trip(laden, ballast)?);
    Ok(())
}
