use std::io::{self, Write};

use crate::app::{self, AppError, LegRequest};
use crate::bog::power::PowerRequirements;
use crate::bog::rate::{
    adjusted_rate, rate_factors, BogRateInput, EnvironmentalConditions, RateFactors, SolarLevel,
    WaveEffectModel,
};
use crate::bog::simulator::{TankLevelMode, VoyageProfile};
use crate::config::Config;
use crate::conversion;
use crate::quantity::QuantityKind;
use crate::units::{to_celsius, to_mbar_abs};
use crate::vessel::{preset, VesselConfig, VesselType};
use crate::voyage::economics::EconomicsSummary;
use crate::voyage::heel::{recommend_heel, HeelAssessment, HeelInput};
use crate::voyage::planner::{round_trip, LegInput, LegTotals, RoundTripTotals};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    UnitConversion,
    BogRate,
    Simulation,
    HeelPlanning,
    LegTotals,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu() -> Result<MenuChoice, AppError> {
    println!("\n=== LNG Voyage Toolbox ===");
    println!("1) 단위 변환기");
    println!("2) BOG율 계산");
    println!("3) 항해 시뮬레이션");
    println!("4) 힐 계획");
    println!("5) 항차 소비량 합계");
    println!("6) 설정");
    println!("0) 종료");
    loop {
        let sel = read_line("메뉴 선택: ")?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::UnitConversion),
            "2" => return Ok(MenuChoice::BogRate),
            "3" => return Ok(MenuChoice::Simulation),
            "4" => return Ok(MenuChoice::HeelPlanning),
            "5" => return Ok(MenuChoice::LegTotals),
            "6" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("잘못된 입력입니다. 다시 선택하세요."),
        }
    }
}

/// 단위 변환 메뉴를 처리한다.
pub fn handle_unit_conversion(cfg: &Config) -> Result<(), AppError> {
    println!("\n-- 단위 변환 --");
    println!("1) 외기 온도  2) 탱크 압력  3) LNG 수량");
    println!("참고: mbarg/barg/psig는 표준 대기압 기준 게이지압으로 처리됩니다.");
    let kind = loop {
        let sel = read_line("항목 번호를 입력: ")?;
        if let Some(kind) = sel
            .trim()
            .parse::<u32>()
            .ok()
            .and_then(QuantityKind::from_menu_number)
        {
            break kind;
        }
        println!("지원하지 않는 번호입니다.");
    };
    let value = read_f64("값 입력: ")?;
    let from_unit = read_line("입력 단위(ex: C, mbar, m3): ")?;
    let to_unit = read_line("변환 단위(ex: F, psig, mmbtu): ")?;
    let result = conversion::convert(kind, value, from_unit.trim(), to_unit.trim(), &cfg.lng)?;
    println!("변환 결과: {result:.4} {}", to_unit.trim());
    Ok(())
}

/// BOG율 계산 메뉴를 처리한다.
pub fn handle_bog_rate(cfg: &Config) -> Result<(), AppError> {
    println!("\n-- BOG율 계산 --");
    let vessel = cfg.vessel();
    let ballast = read_yes_no("공선 항차입니까? (y/N): ")?;
    let base = read_f64_or(
        "기본 BOG율 [%/day]",
        vessel.base_rate_for(ballast),
    )?;
    let level = read_f64_or("탱크 액위 [%]", 100.0)?;
    let env = read_conditions(cfg.environment)?;
    let input = BogRateInput::from_conditions(base, level, &env);
    let factors = rate_factors(&input, &cfg.rate_model)?;
    let rate = adjusted_rate(&input, &cfg.rate_model)?;
    print_rate(&input, &factors, rate, cfg.rate_model.wave_model);
    Ok(())
}

/// 항해 시뮬레이션 메뉴를 처리한다.
pub fn handle_simulation(cfg: &Config) -> Result<(), AppError> {
    println!("\n-- 항해 시뮬레이션 ({}) --", cfg.vessel_type);
    let vessel = cfg.vessel();
    let is_ballast = read_yes_no("공선 항차입니까? (y/N): ")?;
    let initial = read_f64_or(
        "초기 적재량 [m³]",
        app::default_initial_volume(cfg, &vessel, is_ballast),
    )?;
    let days = read_voyage_days(cfg)?;
    let engine = read_f64_or(
        "엔진 가스 소비량 [m³/day]",
        cfg.voyage.engine_consumption_m3_per_day,
    )?;
    let conditions = read_conditions(cfg.environment)?;
    let seed = read_seed()?;
    let request = LegRequest {
        vessel,
        initial_volume_m3: initial,
        voyage_days: days,
        is_ballast,
        engine_consumption_m3_per_day: engine,
        conditions,
        seed,
        level_mode: TankLevelMode::Tracked,
    };
    let report = app::run_leg(cfg, &request)?;
    print_profile(&report.profile, read_yes_no("일별 표를 출력할까요? (y/N): ")?);
    print_summary(&report.summary);
    print_power(&report.power);
    Ok(())
}

/// 힐 계획 메뉴를 처리한다.
pub fn handle_heel(cfg: &Config) -> Result<(), AppError> {
    let vessel = cfg.vessel();
    println!(
        "\n-- 힐 계획 ({}, 허용 {:.0}~{:.0} m³) --",
        vessel.vessel_type, vessel.min_heel_m3, vessel.max_heel_m3
    );
    let days = read_voyage_days(cfg)?;
    let engine = read_f64_or(
        "엔진 가스 소비량 [m³/day]",
        cfg.voyage.engine_consumption_m3_per_day,
    )?;
    let conditions = read_conditions(cfg.environment)?;
    let environment = app::build_environment(cfg, conditions, days, read_seed()?)?;
    let input = HeelInput {
        heel_m3: vessel.min_heel_m3,
        vessel: &vessel,
        voyage_days: days,
        environment: &environment,
        engine_consumption_m3_per_day: engine,
        options: cfg.simulation_options(),
    };
    match recommend_heel(input)? {
        Some(best) => print_heel(&best),
        None => println!(
            "최대 힐 {:.0} m³로도 연료가스 수요를 충족하지 못합니다.",
            vessel.max_heel_m3
        ),
    }
    Ok(())
}

/// 항차 소비량 합계 메뉴를 처리한다.
pub fn handle_leg_totals(cfg: &Config) -> Result<(), AppError> {
    println!("\n-- 항차 소비량 합계 --");
    let speed_kn = read_f64_or("운항 속력 [knot]", cfg.voyage.speed_kn)?;
    println!("[적하 항차]");
    let laden = read_leg(speed_kn)?;
    println!("[공선 항차]");
    let ballast = read_leg(speed_kn)?;
    print_round_trip(&round_trip(laden, ballast)?);
    Ok(())
}

/// 설정 메뉴를 처리한다. 검증을 통과한 변경만 반영한다.
pub fn handle_settings(cfg: &mut Config) -> Result<(), AppError> {
    println!("\n-- 설정 --");
    println!("1) 선박 타입 (현재 {})", cfg.vessel_type);
    println!("2) 파고 보정 방식 (현재 {})", cfg.rate_model.wave_model);
    println!("3) LNG 단가 (현재 {} $/mmBTU)", cfg.prices.lng_usd_per_mmbtu);
    println!("4) 운항 속력 (현재 {} knot)", cfg.voyage.speed_kn);
    let mut next = cfg.clone();
    let sel = read_line("변경할 번호(취소하려면 엔터): ")?;
    match sel.trim() {
        "" => return Ok(()),
        "1" => {
            let keys: Vec<&str> = VesselType::all().iter().map(|v| v.key()).collect();
            let input = read_line(&format!("선박 타입 ({}): ", keys.join("/")))?;
            next.vessel_type = input.parse::<VesselType>()?;
            print_vessel(&preset(next.vessel_type));
        }
        "2" => {
            let input = read_line("파고 보정 방식 (linear/nonlinear): ")?;
            next.rate_model.wave_model = input.parse::<WaveEffectModel>()?;
        }
        "3" => next.prices.lng_usd_per_mmbtu = read_f64("LNG 단가 [$/mmBTU]: ")?,
        "4" => next.voyage.speed_kn = read_f64("운항 속력 [knot]: ")?,
        _ => {
            println!("잘못된 입력이므로 변경하지 않습니다.");
            return Ok(());
        }
    }
    next.validate()?;
    *cfg = next;
    println!("설정이 변경되었습니다.");
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

fn read_f64(prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("숫자를 입력하세요."),
        }
    }
}

/// 빈 입력이면 기본값을 반환한다.
fn read_f64_or(label: &str, default: f64) -> Result<f64, AppError> {
    loop {
        let s = read_line(&format!("{label} (기본 {default}): "))?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(default);
        }
        match s.parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("숫자를 입력하세요."),
        }
    }
}

fn read_yes_no(prompt: &str) -> Result<bool, AppError> {
    let s = read_line(prompt)?;
    Ok(matches!(s.trim().to_lowercase().as_str(), "y" | "yes"))
}

fn read_seed() -> Result<Option<u64>, AppError> {
    loop {
        let s = read_line("기상 산포 시드 (없으면 엔터): ")?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(None);
        }
        match s.parse::<u64>() {
            Ok(seed) => return Ok(Some(seed)),
            Err(_) => println!("0 이상의 정수를 입력하세요."),
        }
    }
}

/// 기본 환경 조건을 보여주고 항목별로 덮어쓴다.
fn read_conditions(base: EnvironmentalConditions) -> Result<EnvironmentalConditions, AppError> {
    let mut env = base;
    let temp = read_f64_or("외기 온도", base.ambient_temp_c)?;
    if temp != base.ambient_temp_c {
        let unit = read_line("온도 단위 (C/F/K, 기본 C): ")?;
        env.ambient_temp_c = if unit.trim().is_empty() {
            temp
        } else {
            to_celsius(temp, conversion::parse_temperature_unit(&unit)?)
        };
    }
    env.wave_height_m = read_f64_or("파고 [m]", base.wave_height_m)?;
    let solar = read_line(&format!("일사량 (Low/Medium/High, 기본 {}): ", base.solar))?;
    if !solar.trim().is_empty() {
        env.solar = solar.parse::<SolarLevel>()?;
    }
    let pressure = read_f64_or("탱크 압력", base.tank_pressure_mbar)?;
    if pressure != base.tank_pressure_mbar {
        let unit = read_line("압력 단위 (mbar/mbarg/bar/barg/kpa/psi/psig, 기본 mbar): ")?;
        env.tank_pressure_mbar = if unit.trim().is_empty() {
            pressure
        } else {
            to_mbar_abs(pressure, conversion::parse_pressure_unit(&unit)?)
        };
    }
    Ok(env)
}

fn read_voyage_days(cfg: &Config) -> Result<f64, AppError> {
    println!("항해일수 입력 방식: 1) 직접 입력  2) 항로표");
    let sel = read_line("선택 (기본 1): ")?;
    if sel.trim() == "2" {
        let table = cfg.route_table()?;
        if table.is_empty() {
            println!("설정 파일에 등록된 항로가 없습니다.");
            return read_f64("항해일수 [day]: ");
        }
        println!("등록된 항로 {}개", table.len());
        for route in &cfg.routes {
            println!("  {} - {}: {:.0} NM", route.from, route.to, route.distance_nm);
        }
        let from = read_line("출발 항구: ")?;
        let to = read_line("도착 항구: ")?;
        let speed = read_f64_or("운항 속력 [knot]", cfg.voyage.speed_kn)?;
        let days = app::resolve_voyage_days(cfg, None, Some((from.trim(), to.trim())), Some(speed))?;
        println!("항해일수: {days:.2} day");
        Ok(days)
    } else {
        read_f64("항해일수 [day]: ")
    }
}

fn read_leg(speed_kn: f64) -> Result<LegInput, AppError> {
    Ok(LegInput {
        distance_nm: read_f64("  거리 [NM]: ")?,
        speed_kn,
        liquid_fuel_t_per_day: read_f64_or("  액체 연료 [t/day]", 0.0)?,
        lng_m3_per_day: read_f64_or("  LNG 소비 [m³/day]", 0.0)?,
        reliq_m3_per_day: read_f64_or("  재액화 [m³/day]", 0.0)?,
        gcu_m3_per_day: read_f64_or("  GCU 소각 [m³/day]", 0.0)?,
    })
}

/// 선박 사양 요약을 출력한다.
pub fn print_vessel(vessel: &VesselConfig) {
    println!("[{}]", vessel.vessel_type);
    println!("  화물창 용량: {:.0} m³", vessel.tank_capacity_m3);
    println!(
        "  힐 범위: {:.0} ~ {:.0} m³",
        vessel.min_heel_m3, vessel.max_heel_m3
    );
    match vessel.leg_bog_rates {
        Some(rates) => println!(
            "  기본 BOG율: 적하 {:.3} / 공선 {:.3} %/day",
            rates.laden, rates.ballast
        ),
        None => println!("  기본 BOG율: {:.3} %/day", vessel.base_bog_rate_pct),
    }
    println!(
        "  재액화: {:.1} t/h, 효율 {:.0}%",
        vessel.reliq_capacity_t_per_h,
        vessel.reliq_efficiency * 100.0
    );
    println!(
        "  엔진 효율: {:.0}%, 설계 소비량 {:.0} t/day, 배출 저감 {:.0}%",
        vessel.engine_efficiency * 100.0,
        vessel.daily_consumption_t,
        vessel.emissions_reduction * 100.0
    );
}

/// BOG율과 보정계수 내역을 출력한다.
pub fn print_rate(input: &BogRateInput, factors: &RateFactors, rate: f64, model: WaveEffectModel) {
    println!("기본 BOG율: {:.4} %/day", input.base_rate_pct);
    println!("  압력 보정  ({:.1} mbar): {:.4}", input.tank_pressure_mbar, factors.pressure);
    println!("  액위 보정  ({:.1} %): {:.4}", input.tank_level_pct, factors.level);
    println!("  온도 보정  ({:.1} °C): {:.4}", input.ambient_temp_c, factors.temperature);
    println!("  파고 보정  ({:.1} m, {model}): {:.4}", input.wave_height_m, factors.wave);
    println!("  일사 보정  ({}): {:.4}", input.solar, factors.solar);
    if input.tank_age_years.is_some() {
        println!("  노후 보정: {:.4}", factors.aging);
    }
    println!("보정 BOG율: {rate:.4} %/day (계수 곱 {:.4})", factors.product());
}

/// 항해 프로파일을 출력한다. `daily`가 거짓이면 요약만 출력한다.
pub fn print_profile(profile: &VoyageProfile, daily: bool) {
    if daily && !profile.is_empty() {
        println!(
            "{:>4} {:>12} {:>8} {:>8} {:>9} {:>9} {:>9} {:>9}",
            "day", "잔량 m³", "액위 %", "BOG %", "발생", "소비", "재액화", "GCU"
        );
        for d in &profile.days {
            println!(
                "{:>4} {:>12.2} {:>8.2} {:>8.4} {:>9.2} {:>9.2} {:>9.2} {:>9.2}",
                d.day + 1,
                d.remaining_m3,
                d.tank_level_pct,
                d.bog_rate_pct,
                d.bog_generated_m3,
                d.bog_consumed_m3,
                d.bog_reliquefied_m3,
                d.bog_vented_m3
            );
        }
    }
    println!(
        "시뮬레이션: {}일 (미계산 잔여 {:.2}일), 초기 {:.1} m³ → 도착 {:.1} m³",
        profile.len(),
        profile.unsimulated_days,
        profile.initial_volume_m3,
        profile.final_remaining_m3()
    );
}

/// 경제성 요약을 출력한다.
pub fn print_summary(summary: &EconomicsSummary) {
    println!(
        "BOG 합계: 발생 {:.1} / 소비 {:.1} / 재액화 {:.1} (손실 {:.1}) / GCU {:.1} m³",
        summary.total_bog_generated_m3,
        summary.total_bog_consumed_m3,
        summary.total_bog_reliquefied_m3,
        summary.total_bog_reliq_loss_m3,
        summary.total_bog_vented_m3
    );
    println!("  연료 절감:     {:>14.0} $", summary.fuel_savings);
    println!("  배출 저감 가치: {:>14.0} $", summary.emissions_value);
    println!("  재액화 전력비: {:>14.0} $", summary.reliq_cost);
    println!("  순편익:        {:>14.0} $", summary.net_benefit);
    if summary.lng_value_vented > 0.0 {
        println!("  (GCU 소각 LNG 가치: {:.0} $)", summary.lng_value_vented);
    }
}

pub fn print_power(power: &PowerRequirements) {
    println!(
        "평균 소요 동력: 추진 {:.2} + 재액화 {:.2} + 엔진 {:.2} = {:.2} MW",
        power.base_power_mw, power.reliq_power_mw, power.engine_power_mw, power.total_power_mw
    );
}

pub fn print_heel(assessment: &HeelAssessment) {
    println!(
        "힐 {:.0} m³: 발생 BOG {:.1} m³ / 수요 {:.1} m³ → {} (도착 잔량 {:.1} m³)",
        assessment.heel_m3,
        assessment.bog_generated_m3,
        assessment.bog_required_m3,
        if assessment.sufficient { "충족" } else { "부족" },
        assessment.arrival_volume_m3
    );
}

fn print_leg(label: &str, leg: &LegTotals) {
    println!(
        "{label}: {:.0} NM, {:.2} day, 액체 연료 {:.1} t, LNG {:.1} m³, 재액화 {:.1} m³, GCU {:.1} m³",
        leg.distance_nm, leg.voyage_days, leg.liquid_fuel_t, leg.lng_m3, leg.reliq_m3, leg.gcu_m3
    );
}

pub fn print_round_trip(totals: &RoundTripTotals) {
    print_leg("적하", &totals.laden);
    print_leg("공선", &totals.ballast);
    print_leg("합계", &totals.total);
}
