//! 항차 계획/경제성 관련 모듈 모음.

pub mod economics;
pub mod heel;
pub mod planner;
pub mod route;
pub mod weather;

pub use economics::{combine, summarize, EconomicsSummary, VoyagePrices};
pub use heel::{assess_heel, recommend_heel, HeelAssessment, HeelInput};
pub use planner::{
    check_voyage_days, leg_totals, round_trip, voyage_days, LegInput, LegTotals,
    RoundTripTotals, MAX_VOYAGE_DAYS,
};
pub use route::{RouteDistance, RouteEntry, RouteTable};
pub use weather::{constant_profile, required_days, scattered_profile, WeatherSpread};
