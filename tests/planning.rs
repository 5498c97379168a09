//! 항차 계획 보조 모듈(항로, 기상, 선박, 동력, 단위) 테스트.
use lng_voyage_toolbox::app::{build_environment, resolve_voyage_days};
use lng_voyage_toolbox::bog::power::{power_requirements, PowerInput};
use lng_voyage_toolbox::bog::rate::{EnvironmentalConditions, SolarLevel};
use lng_voyage_toolbox::config::Config;
use lng_voyage_toolbox::conversion::{convert, ConversionError};
use lng_voyage_toolbox::quantity::QuantityKind;
use lng_voyage_toolbox::units::LngProperties;
use lng_voyage_toolbox::vessel::{
    preset, vessel_config_lookup, PowerBand, VesselConfig, VesselType,
};
use lng_voyage_toolbox::voyage::planner::{
    check_voyage_days, leg_totals, round_trip, voyage_days, LegInput, MAX_VOYAGE_DAYS,
};
use lng_voyage_toolbox::voyage::route::{RouteDistance, RouteEntry, RouteTable};
use lng_voyage_toolbox::voyage::weather::{
    constant_profile, required_days, scattered_profile, WeatherSpread,
};
use lng_voyage_toolbox::BogError;

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.3e}, tol {rel_tol})"
    );
}

#[test]
fn voyage_days_from_distance_and_speed() {
    assert_close("days", voyage_days(6240.0, 15.0).expect("days"), 17.333_333, 1e-6);
    for speed in [0.0, -5.0] {
        let err = voyage_days(1000.0, speed).expect_err("bad speed");
        assert!(matches!(err, BogError::InvalidInput(_)));
    }
    assert!(voyage_days(-1.0, 15.0).is_err());
}

#[test]
fn leg_and_round_trip_totals() {
    let laden = LegInput {
        distance_nm: 3600.0,
        speed_kn: 15.0,
        liquid_fuel_t_per_day: 2.0,
        lng_m3_per_day: 150.0,
        reliq_m3_per_day: 40.0,
        gcu_m3_per_day: 5.0,
    };
    let leg = leg_totals(laden).expect("leg");
    assert_close("days", leg.voyage_days, 10.0, 1e-12);
    assert_close("fuel", leg.liquid_fuel_t, 20.0, 1e-12);
    assert_close("lng", leg.lng_m3, 1500.0, 1e-12);
    assert_close("reliq", leg.reliq_m3, 400.0, 1e-12);
    assert_close("gcu", leg.gcu_m3, 50.0, 1e-12);

    let ballast = LegInput {
        distance_nm: 1800.0,
        lng_m3_per_day: 60.0,
        ..laden
    };
    let trip = round_trip(laden, ballast).expect("round trip");
    assert_close("total days", trip.total.voyage_days, 15.0, 1e-12);
    assert_close("total lng", trip.total.lng_m3, 1500.0 + 300.0, 1e-12);
    assert_close("total nm", trip.total.distance_nm, 5400.0, 1e-12);

    let bad = LegInput {
        gcu_m3_per_day: -1.0,
        ..laden
    };
    assert!(leg_totals(bad).is_err());
}

#[test]
fn route_table_is_symmetric_and_case_insensitive() {
    let table = RouteTable::from_entries(&[RouteEntry {
        from: "Ras Laffan".to_string(),
        to: "Milford  Haven".to_string(),
        distance_nm: 6240.0,
    }])
    .expect("table");

    assert_eq!(table.len(), 1);
    assert_eq!(table.distance_nm("RAS LAFFAN", "milford haven").expect("fwd"), 6240.0);
    assert_eq!(table.distance_nm("Milford Haven", " ras laffan ").expect("rev"), 6240.0);
    assert_eq!(table.distance_nm("Busan", "busan").expect("same"), 0.0);

    let err = table.distance_nm("Busan", "Yokohama").expect_err("missing");
    match err {
        BogError::RouteNotFound {
            origin,
            destination,
        } => {
            assert_eq!(origin, "Busan");
            assert_eq!(destination, "Yokohama");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn route_table_rejects_bad_entries() {
    let mut table = RouteTable::new();
    assert!(table.insert("A", "B", -10.0).is_err());
    assert!(table.insert("  ", "B", 10.0).is_err());
    assert!(table.is_empty());
    table.insert("A", "B", 10.0).expect("insert");
    table.insert("b", "a", 12.0).expect("overwrite");
    assert_eq!(table.len(), 1);
    assert_eq!(table.distance_nm("A", "B").expect("distance"), 12.0);
}

#[test]
fn seeded_weather_is_reproducible() {
    let base = EnvironmentalConditions {
        ambient_temp_c: 25.0,
        wave_height_m: 0.3,
        solar: SolarLevel::High,
        ..EnvironmentalConditions::default()
    };
    let spread = WeatherSpread::default();
    let a = scattered_profile(base, spread, 20, 7).expect("a");
    let b = scattered_profile(base, spread, 20, 7).expect("b");
    let c = scattered_profile(base, spread, 20, 8).expect("c");

    assert_eq!(a.len(), 20);
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert!(a.iter().all(|d| d.wave_height_m >= 0.0));
    assert!(a.iter().all(|d| d.solar == SolarLevel::High));
    assert!(a.iter().any(|d| d.ambient_temp_c != 25.0));
}

#[test]
fn zero_spread_reproduces_base_conditions() {
    let base = EnvironmentalConditions::default();
    let spread = WeatherSpread {
        temp_c: 0.0,
        wave_m: 0.0,
    };
    let scattered = scattered_profile(base, spread, 5, 1).expect("profile");
    assert_eq!(scattered, constant_profile(base, 5));

    let negative = WeatherSpread {
        temp_c: -1.0,
        wave_m: 0.5,
    };
    assert!(scattered_profile(base, negative, 5, 1).is_err());
}

#[test]
fn required_days_is_floor_of_voyage_days() {
    assert_eq!(required_days(17.9), 17);
    assert_eq!(required_days(3.0), 3);
    assert_eq!(required_days(0.4), 0);
    assert_eq!(required_days(-2.0), 0);
    assert_eq!(required_days(f64::NAN), 0);
}

#[test]
fn vessel_lookup_is_case_insensitive() {
    assert_eq!(
        vessel_config_lookup("megi").expect("megi").vessel_type,
        VesselType::Megi
    );
    assert_eq!(
        vessel_config_lookup("ME-GI").expect("me-gi").vessel_type,
        VesselType::Megi
    );
    assert_eq!(
        vessel_config_lookup(" dfde ").expect("dfde").vessel_type,
        VesselType::Dfde
    );
    let err = vessel_config_lookup("STEAM").expect_err("unknown");
    assert!(matches!(err, BogError::UnknownVesselType(_)));
}

#[test]
fn catalog_presets_validate() {
    for vessel_type in VesselType::all() {
        preset(*vessel_type).validate().expect("preset must be valid");
    }
    let dfde = preset(VesselType::Dfde);
    assert_eq!(dfde.base_rate_for(false), 0.15);
    assert_eq!(dfde.base_rate_for(true), 0.06);
    let megi = preset(VesselType::Megi);
    assert_eq!(megi.base_rate_for(true), megi.base_bog_rate_pct);

    let broken = VesselConfig {
        reliq_efficiency: 1.2,
        ..preset(VesselType::Megi)
    };
    assert!(matches!(broken.validate(), Err(BogError::InvalidInput(_))));
    let broken = VesselConfig {
        min_heel_m3: 4000.0,
        ..preset(VesselType::Megi)
    };
    assert!(broken.validate().is_err());
}

#[test]
fn power_uses_adverse_propulsion_above_three_metre_waves() {
    let vessel = preset(VesselType::Megi);
    let input = PowerInput {
        daily_bog_m3: 80.0,
        reliq_capacity_m3_per_day: 160.0,
        ambient_temp_c: 19.5,
        wave_height_m: 3.0,
    };
    let calm = power_requirements(&vessel, input).expect("calm");
    assert_eq!(calm.base_power_mw, 27.0);
    // 부하 50% → 3.0 + 0.5 * 2.8
    assert_close("reliq", calm.reliq_power_mw, 4.4, 1e-12);
    assert_close("engine", calm.engine_power_mw, 80.0 * 0.78, 1e-12);
    assert_close(
        "total",
        calm.total_power_mw,
        27.0 + 4.4 + 80.0 * 0.78,
        1e-12,
    );

    let rough = power_requirements(
        &vessel,
        PowerInput {
            wave_height_m: 3.5,
            ..input
        },
    )
    .expect("rough");
    assert_eq!(rough.base_power_mw, 29.0);
}

#[test]
fn reliquefaction_power_is_capped_at_band_maximum() {
    let megi = preset(VesselType::Megi);
    let overload = PowerInput {
        daily_bog_m3: 400.0,
        reliq_capacity_m3_per_day: 160.0,
        ambient_temp_c: 29.5,
        wave_height_m: 0.0,
    };
    let power = power_requirements(&megi, overload).expect("power");
    assert_eq!(power.reliq_power_mw, 5.8);
    assert_close("engine", power.engine_power_mw, 400.0 * 0.78 * 1.1, 1e-12);

    let dfde = preset(VesselType::Dfde);
    let power = power_requirements(&dfde, overload).expect("power");
    assert_eq!(power.reliq_power_mw, 0.0);
}

#[test]
fn unit_conversions() {
    let props = LngProperties::default();
    let c = convert(QuantityKind::Temperature, 86.0, "F", "C", &props).expect("temp");
    assert_close("F→C", c, 30.0, 1e-12);
    let mbar = convert(QuantityKind::TankPressure, 0.1, "barg", "mbar", &props).expect("pressure");
    assert_close("barg→mbar", mbar, 1113.25, 1e-12);
    let t = convert(QuantityKind::LngQuantity, 1000.0, "m3", "t", &props).expect("mass");
    assert_close("m3→t", t, 450.0, 1e-12);
    let mmbtu = convert(QuantityKind::LngQuantity, 450.0, "t", "mmbtu", &props).expect("energy");
    assert_close("t→mmbtu", mmbtu, 23_120.0, 1e-12);

    let err = convert(QuantityKind::TankPressure, 1.0, "atm", "mbar", &props).expect_err("unknown");
    assert!(matches!(err, ConversionError::UnknownUnit(u) if u == "atm"));
}

#[test]
fn implausible_voyage_length_is_rejected_before_building_weather() {
    assert_eq!(check_voyage_days(MAX_VOYAGE_DAYS).expect("max"), MAX_VOYAGE_DAYS);
    for days in [MAX_VOYAGE_DAYS + 1.0, 1e20, f64::INFINITY, f64::NAN] {
        assert!(matches!(check_voyage_days(days), Err(BogError::InvalidInput(_))));
    }
    assert!(voyage_days(1e9, 1.0).is_err());

    let cfg = Config::default();
    let err = build_environment(&cfg, cfg.environment, 1e20, None).expect_err("huge");
    assert!(matches!(err, BogError::InvalidInput(_)));
    let err = build_environment(&cfg, cfg.environment, 1e20, Some(3)).expect_err("huge");
    assert!(matches!(err, BogError::InvalidInput(_)));
    assert!(resolve_voyage_days(&cfg, Some(1e20), None, None).is_err());

    let env = build_environment(&cfg, cfg.environment, 12.5, None).expect("env");
    assert_eq!(env.len(), 12);
    let days = resolve_voyage_days(&cfg, None, Some(("busan", "Yokohama")), Some(17.0))
        .expect("route");
    assert_close("route days", days, 680.0 / (17.0 * 24.0), 1e-12);
}

#[test]
fn reliquefaction_band_must_be_finite() {
    let broken = VesselConfig {
        reliq_power: Some(PowerBand {
            min_mw: 3.0,
            max_mw: f64::NAN,
        }),
        ..preset(VesselType::Megi)
    };
    assert!(matches!(broken.validate(), Err(BogError::InvalidInput(_))));
}

#[test]
fn lng_conversion_requires_positive_properties() {
    let props = LngProperties {
        density_t_per_m3: 0.0,
        ..LngProperties::default()
    };
    let err = convert(QuantityKind::LngQuantity, 100.0, "t", "m3", &props).expect_err("density");
    assert!(matches!(err, ConversionError::InvalidProperties(_)));
    assert!(props.validate().is_err());
    LngProperties::default().validate().expect("defaults are valid");
}
