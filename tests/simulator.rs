//! 일별 항해 시뮬레이터 테스트.
use lng_voyage_toolbox::bog::rate::EnvironmentalConditions;
use lng_voyage_toolbox::bog::simulator::{
    simulate, SimulationInput, SimulationOptions, TankLevelMode, VoyageProfile,
};
use lng_voyage_toolbox::vessel::{preset, VesselConfig, VesselType};
use lng_voyage_toolbox::BogError;

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.9} got {actual:.9} (diff {diff:.3e}, tol {rel_tol})"
    );
}

fn vessel_with_base_rate(base_bog_rate_pct: f64) -> VesselConfig {
    VesselConfig {
        base_bog_rate_pct,
        ..preset(VesselType::Megi)
    }
}

fn calm(days: usize) -> Vec<EnvironmentalConditions> {
    vec![EnvironmentalConditions::default(); days]
}

fn run(
    vessel: &VesselConfig,
    initial: f64,
    days: f64,
    env: &[EnvironmentalConditions],
    engine: f64,
    options: SimulationOptions,
) -> Result<VoyageProfile, BogError> {
    simulate(SimulationInput {
        initial_volume_m3: initial,
        vessel,
        voyage_days: days,
        environment: env,
        is_ballast: false,
        engine_consumption_m3_per_day: engine,
        options,
    })
}

fn fixed_full() -> SimulationOptions {
    SimulationOptions {
        level_mode: TankLevelMode::Fixed(100.0),
        ..SimulationOptions::default()
    }
}

#[test]
fn small_cargo_burns_all_bog_in_engine() {
    let vessel = vessel_with_base_rate(0.15);
    let env = calm(10);
    let profile = run(&vessel, 2000.0, 10.0, &env, 150.0, fixed_full()).expect("simulate");

    assert_eq!(profile.len(), 10);
    let expected = 2000.0 * (1.0_f64 - 0.0015).powi(10);
    assert!(
        (profile.final_remaining_m3() - expected).abs() < 1e-6,
        "remaining {} expected {expected}",
        profile.final_remaining_m3()
    );
    for day in &profile.days {
        assert_eq!(day.bog_consumed_m3, day.bog_generated_m3);
        assert_eq!(day.bog_reliquefied_m3, 0.0);
        assert_eq!(day.bog_vented_m3, 0.0);
        assert_close("rate", day.bog_rate_pct, 0.15, 1e-12);
    }
    assert_close("day 0 BOG", profile.days[0].bog_generated_m3, 3.0, 1e-12);
}

#[test]
fn tracked_level_slightly_raises_boil_off() {
    let vessel = vessel_with_base_rate(0.15);
    let env = calm(10);
    let fixed = run(&vessel, 2000.0, 10.0, &env, 150.0, fixed_full()).expect("fixed");
    let tracked = run(
        &vessel,
        2000.0,
        10.0,
        &env,
        150.0,
        SimulationOptions::default(),
    )
    .expect("tracked");

    let (f, t) = (fixed.final_remaining_m3(), tracked.final_remaining_m3());
    assert!(t < f, "tracked {t} fixed {f}");
    assert!(f - t < 0.05, "tracked {t} fixed {f}");
    // 첫날은 만재 상태라 두 방식이 같다
    assert_eq!(tracked.days[0].tank_level_pct, 100.0);
    assert!(tracked.days[9].tank_level_pct < 100.0);
}

#[test]
fn zero_or_negative_days_yield_empty_profile() {
    let vessel = preset(VesselType::Megi);
    for days in [0.0, -3.0] {
        let profile = run(&vessel, 2000.0, days, &[], 150.0, fixed_full()).expect("simulate");
        assert!(profile.is_empty());
        assert_eq!(profile.final_remaining_m3(), 2000.0);
        assert_eq!(profile.total_generated_m3(), 0.0);
    }
    let profile = run(&vessel, 0.0, 5.0, &calm(5), 150.0, fixed_full()).expect("simulate");
    assert!(profile.is_empty());
}

#[test]
fn fractional_day_is_not_simulated() {
    let vessel = preset(VesselType::Megi);
    let profile = run(&vessel, 2000.0, 7.5, &calm(7), 150.0, fixed_full()).expect("simulate");
    assert_eq!(profile.len(), 7);
    assert_close("unsimulated", profile.unsimulated_days, 0.5, 1e-12);
    assert_eq!(profile.voyage_days, 7.5);
}

#[test]
fn short_environment_is_rejected() {
    let vessel = preset(VesselType::Megi);
    let err = run(&vessel, 2000.0, 10.0, &calm(5), 150.0, fixed_full()).expect_err("short");
    assert!(matches!(
        err,
        BogError::InsufficientData {
            required: 10,
            provided: 5
        }
    ));
}

#[test]
fn cargo_above_capacity_is_rejected() {
    let vessel = preset(VesselType::Megi);
    let err = run(&vessel, 200_000.0, 2.0, &calm(2), 150.0, fixed_full()).expect_err("overfill");
    assert!(matches!(err, BogError::InvalidInput(_)));
}

#[test]
fn excess_bog_goes_to_reliquefaction_then_gcu() {
    let vessel = preset(VesselType::Megi);
    let options = SimulationOptions {
        reliq_capacity_m3_per_day: Some(100.0),
        ..fixed_full()
    };
    let profile = run(&vessel, 170_000.0, 1.0, &calm(1), 0.0, options).expect("simulate");
    let day = &profile.days[0];

    assert_close("generated", day.bog_generated_m3, 238.0, 1e-12);
    assert_eq!(day.bog_consumed_m3, 0.0);
    assert_close("reliquefied", day.bog_reliquefied_m3, 90.0, 1e-12);
    assert_close("reliq loss", day.bog_reliq_loss_m3, 10.0, 1e-12);
    assert_close("vented", day.bog_vented_m3, 138.0, 1e-12);
    assert_close("remaining", day.remaining_m3, 170_000.0 - 238.0 + 90.0, 1e-12);
    assert_close(
        "balance",
        day.bog_consumed_m3 + day.bog_reliquefied_m3 + day.bog_reliq_loss_m3 + day.bog_vented_m3,
        day.bog_generated_m3,
        1e-12,
    );
}

#[test]
fn reliquefaction_capacity_defaults_to_vessel_rating() {
    // MEGI 3 t/h → 72 t/day → 160 m³/day (0.45 t/m³)
    let vessel = preset(VesselType::Megi);
    let profile = run(&vessel, 170_000.0, 1.0, &calm(1), 0.0, fixed_full()).expect("simulate");
    let day = &profile.days[0];
    assert_close("reliquefied", day.bog_reliquefied_m3, 160.0 * 0.9, 1e-12);
    assert_close("vented", day.bog_vented_m3, 238.0 - 160.0, 1e-12);
}

#[test]
fn ballast_leg_uses_ballast_rate() {
    let vessel = preset(VesselType::Dfde);
    let env = calm(1);
    let profile = simulate(SimulationInput {
        initial_volume_m3: 3000.0,
        vessel: &vessel,
        voyage_days: 1.0,
        environment: &env,
        is_ballast: true,
        engine_consumption_m3_per_day: 150.0,
        options: fixed_full(),
    })
    .expect("simulate");
    assert_close("rate", profile.days[0].bog_rate_pct, 0.06, 1e-12);
    assert_close("generated", profile.days[0].bog_generated_m3, 1.8, 1e-12);
}

#[test]
fn exhausted_cargo_returns_partial_profile() {
    let vessel = vessel_with_base_rate(60.0);
    let hot = EnvironmentalConditions {
        ambient_temp_c: 119.5,
        ..EnvironmentalConditions::default()
    };
    let env = vec![EnvironmentalConditions::default(), hot, hot];
    let options = SimulationOptions {
        reliq_capacity_m3_per_day: Some(0.0),
        ..fixed_full()
    };
    let err = run(&vessel, 1000.0, 3.0, &env, 0.0, options).expect_err("exhausted");
    match err {
        BogError::VolumeExhausted {
            day,
            remaining_m3,
            partial,
        } => {
            assert_eq!(day, 1);
            assert!(remaining_m3 < 0.0);
            assert_eq!(partial.len(), 1);
            assert_close("day 0 remaining", partial.days[0].remaining_m3, 400.0, 1e-12);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn identical_inputs_give_identical_profiles() {
    let vessel = preset(VesselType::Megi);
    let env: Vec<_> = (0..12)
        .map(|d| EnvironmentalConditions {
            ambient_temp_c: 15.0 + d as f64,
            wave_height_m: 0.25 * d as f64,
            ..EnvironmentalConditions::default()
        })
        .collect();
    let a = run(&vessel, 150_000.0, 12.0, &env, 120.0, SimulationOptions::default()).expect("a");
    let b = run(&vessel, 150_000.0, 12.0, &env, 120.0, SimulationOptions::default()).expect("b");
    assert_eq!(a, b);
}

#[test]
fn negative_rate_floor_cannot_grow_cargo() {
    let vessel = preset(VesselType::Megi);
    let cold = EnvironmentalConditions {
        ambient_temp_c: -100.0,
        ..EnvironmentalConditions::default()
    };
    let mut options = SimulationOptions::default();
    options.rate.floor_pct = -1.0;
    let err = run(&vessel, 2000.0, 2.0, &[cold, cold], 150.0, options).expect_err("floor");
    assert!(matches!(err, BogError::InvalidInput(_)), "{err}");
}

#[test]
fn non_positive_lng_properties_are_rejected() {
    let vessel = preset(VesselType::Megi);
    for (density, heating_value) in [(0.0, 23.12), (0.45, 0.0), (-0.45, 23.12)] {
        let mut options = fixed_full();
        options.lng.density_t_per_m3 = density;
        options.lng.heating_value_mmbtu_per_m3 = heating_value;
        let err = run(&vessel, 170_000.0, 1.0, &calm(1), 0.0, options).expect_err("lng");
        assert!(matches!(err, BogError::InvalidInput(_)), "{err}");
    }
}
