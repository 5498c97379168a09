use lng_voyage_toolbox::bog::rate::EnvironmentalConditions;
use lng_voyage_toolbox::bog::simulator::{
    simulate, SimulationInput, SimulationOptions, TankLevelMode, VoyageProfile, VoyageState,
};
use lng_voyage_toolbox::config::PriceDefaults;
use lng_voyage_toolbox::units::LngProperties;
use lng_voyage_toolbox::vessel::{preset, VesselType};
use lng_voyage_toolbox::voyage::economics::{combine, summarize, EconomicsSummary, VoyagePrices};
use lng_voyage_toolbox::BogError;

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.3e}, tol {rel_tol})"
    );
}

fn day(day: usize, generated: f64, consumed: f64, reliquefied: f64, vented: f64) -> VoyageState {
    VoyageState {
        day,
        remaining_m3: 0.0,
        tank_level_pct: 100.0,
        bog_rate_pct: 0.14,
        bog_generated_m3: generated,
        bog_consumed_m3: consumed,
        bog_reliquefied_m3: reliquefied,
        bog_reliq_loss_m3: 0.0,
        bog_vented_m3: vented,
        ambient_temp_c: 19.5,
        wave_height_m: 0.0,
    }
}

fn two_day_profile() -> VoyageProfile {
    VoyageProfile {
        initial_volume_m3: 150_000.0,
        voyage_days: 2.0,
        unsimulated_days: 0.0,
        days: vec![day(0, 200.0, 150.0, 40.0, 10.0), day(1, 190.0, 150.0, 30.0, 10.0)],
    }
}

fn prices() -> VoyagePrices {
    VoyagePrices {
        lng_price_per_m3: 300.0,
        bunker_price: 360.0,
        electricity_cost: 0.15,
        carbon_price: 30.0,
    }
}

#[test]
fn summary_follows_pricing_formulas() {
    let vessel = preset(VesselType::Megi);
    let summary = summarize(&two_day_profile(), &prices(), &vessel).expect("summary");

    assert_close("generated", summary.total_bog_generated_m3, 390.0, 1e-12);
    assert_close("consumed", summary.total_bog_consumed_m3, 300.0, 1e-12);
    assert_close("reliquefied", summary.total_bog_reliquefied_m3, 70.0, 1e-12);
    assert_close("vented", summary.total_bog_vented_m3, 20.0, 1e-12);

    assert_close("fuel", summary.fuel_savings, 300.0 * 360.0, 1e-12);
    assert_close("reliq", summary.reliq_cost, 70.0 * 0.75 * 0.15 * 24.0, 1e-12);
    // 0.22 * 100 t/day * 2 day * 30 $/t
    assert_close("emissions", summary.emissions_value, 1320.0, 1e-12);
    assert_close(
        "net",
        summary.net_benefit,
        summary.fuel_savings + summary.emissions_value - summary.reliq_cost,
        1e-12,
    );
    assert_close("vented value", summary.lng_value_vented, 20.0 * 300.0, 1e-12);
    assert_close("generated value", summary.lng_value_generated, 390.0 * 300.0, 1e-12);
}

#[test]
fn summarize_is_idempotent() {
    let vessel = preset(VesselType::Dfde);
    let profile = two_day_profile();
    let first = summarize(&profile, &prices(), &vessel).expect("first");
    let second = summarize(&profile, &prices(), &vessel).expect("second");
    assert_eq!(first, second);
}

#[test]
fn negative_or_nan_price_is_rejected() {
    let vessel = preset(VesselType::Megi);
    let bad = [
        VoyagePrices {
            bunker_price: -1.0,
            ..prices()
        },
        VoyagePrices {
            carbon_price: f64::NAN,
            ..prices()
        },
        VoyagePrices {
            electricity_cost: -0.01,
            ..prices()
        },
    ];
    for p in bad {
        let err = summarize(&two_day_profile(), &p, &vessel).expect_err("must fail");
        assert!(matches!(err, BogError::InvalidInput(_)));
    }
}

#[test]
fn empty_profile_has_no_value() {
    let vessel = preset(VesselType::Megi);
    let summary = summarize(&VoyageProfile::default(), &prices(), &vessel).expect("summary");
    assert_eq!(summary.total_bog_generated_m3, 0.0);
    assert_eq!(summary.fuel_savings, 0.0);
    assert_eq!(summary.reliq_cost, 0.0);
    assert_eq!(summary.emissions_value, 0.0);
    assert_eq!(summary.net_benefit, 0.0);
}

#[test]
fn combined_summary_adds_legs() {
    let vessel = preset(VesselType::Megi);
    let leg = summarize(&two_day_profile(), &prices(), &vessel).expect("summary");
    let total = combine(&[leg, leg]);
    assert_close("net", total.net_benefit, 2.0 * leg.net_benefit, 1e-12);
    assert_close("vented", total.total_bog_vented_m3, 40.0, 1e-12);
    assert_eq!(combine(&[]), EconomicsSummary::default());
}

#[test]
fn market_prices_convert_to_volume_basis() {
    let p = PriceDefaults::default().to_voyage_prices(&LngProperties::default());
    assert_close("lng", p.lng_price_per_m3, 15.0 * 23.12, 1e-12);
    assert_close("bunker", p.bunker_price, 800.0 * 0.45, 1e-12);
    assert_close("electricity", p.electricity_cost, 0.15, 1e-12);
    assert_close("carbon", p.carbon_price, 30.0, 1e-12);
}

#[test]
fn reliquefaction_loss_is_reported() {
    let vessel = preset(VesselType::Megi);
    let env = vec![EnvironmentalConditions::default(); 2];
    let profile = simulate(SimulationInput {
        initial_volume_m3: 170_000.0,
        vessel: &vessel,
        voyage_days: 2.0,
        environment: &env,
        is_ballast: false,
        engine_consumption_m3_per_day: 0.0,
        options: SimulationOptions {
            level_mode: TankLevelMode::Fixed(100.0),
            reliq_capacity_m3_per_day: Some(100.0),
            ..SimulationOptions::default()
        },
    })
    .expect("simulate");

    let summary = summarize(&profile, &prices(), &vessel).expect("summary");
    // 하루 100 m³ 투입, 효율 0.9
    assert_close("loss", summary.total_bog_reliq_loss_m3, 20.0, 1e-9);
    assert_close("profile loss", profile.total_reliq_loss_m3(), 20.0, 1e-9);
    assert_close(
        "balance",
        summary.total_bog_consumed_m3
            + summary.total_bog_reliquefied_m3
            + summary.total_bog_reliq_loss_m3
            + summary.total_bog_vented_m3,
        summary.total_bog_generated_m3,
        1e-12,
    );
    let total = combine(&[summary, summary]);
    assert_close("combined loss", total.total_bog_reliq_loss_m3, 40.0, 1e-9);
}
