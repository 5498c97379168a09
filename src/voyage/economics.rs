use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bog::simulator::VoyageProfile;
use crate::error::{ensure_non_negative, Result};
use crate::vessel::VesselConfig;

/// 경제성 계산 단가.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VoyagePrices {
    /// LNG 단가 [$/m³ LNG]
    pub lng_price_per_m3: f64,
    /// 벙커유 단가. 소비된 BOG 1 m³가 대체하는 벙커 기준 [$/m³]
    pub bunker_price: f64,
    /// 전력 단가 [$/kWh]
    pub electricity_cost: f64,
    /// 탄소 배출권 단가 [$/t CO2]
    pub carbon_price: f64,
}

impl VoyagePrices {
    /// 모든 단가가 유한하고 0 이상인지 확인한다.
    pub fn validate(&self) -> Result<()> {
        ensure_non_negative("LNG 단가", self.lng_price_per_m3)?;
        ensure_non_negative("벙커유 단가", self.bunker_price)?;
        ensure_non_negative("전력 단가", self.electricity_cost)?;
        ensure_non_negative("탄소 단가", self.carbon_price)?;
        Ok(())
    }
}

/// 항해 경제성 요약.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct EconomicsSummary {
    pub total_bog_generated_m3: f64,
    pub total_bog_consumed_m3: f64,
    pub total_bog_reliquefied_m3: f64,
    /// 재액화 효율 손실 [m³]
    pub total_bog_reliq_loss_m3: f64,
    pub total_bog_vented_m3: f64,
    /// 엔진 소비로 절감한 연료비 [$]
    pub fuel_savings: f64,
    /// 재액화 전력비 [$]
    pub reliq_cost: f64,
    /// 배출 저감 가치 [$]
    pub emissions_value: f64,
    /// 순편익 = 연료 절감 + 배출 가치 - 재액화 전력비 [$]
    pub net_benefit: f64,
    /// 발생 BOG 전체의 LNG 가치 [$] (참고값, 순편익 미포함)
    pub lng_value_generated: f64,
    /// GCU로 소각한 BOG의 LNG 가치 [$] (참고값, 순편익 미포함)
    pub lng_value_vented: f64,
}

/// 일별 프로파일을 금액으로 집계한다.
///
/// - `fuel_savings = Σconsumed * bunker_price`
/// - `reliq_cost = Σreliquefied * 재액화 비소비전력 * electricity_cost * 24`
/// - `emissions_value = 배출 저감률 * 설계 일일 소비량 * 항해일수 * carbon_price`
///
/// 항해일수는 프로파일에 기록된 요청 항해일수(소수 포함)를 쓴다.
pub fn summarize(
    profile: &VoyageProfile,
    prices: &VoyagePrices,
    vessel: &VesselConfig,
) -> Result<EconomicsSummary> {
    prices.validate()?;
    ensure_non_negative(
        "재액화 비소비전력",
        vessel.reliq_specific_power_kwh_per_kg,
    )?;
    ensure_non_negative("배출 저감률", vessel.emissions_reduction)?;
    ensure_non_negative("설계 일일 소비량", vessel.daily_consumption_t)?;

    let generated = profile.total_generated_m3();
    let consumed = profile.total_consumed_m3();
    let reliquefied = profile.total_reliquefied_m3();
    let vented = profile.total_vented_m3();
    let voyage_days = profile.voyage_days.max(0.0);

    let fuel_savings = consumed * prices.bunker_price;
    let reliq_cost =
        reliquefied * vessel.reliq_specific_power_kwh_per_kg * prices.electricity_cost * 24.0;
    let emissions_value = vessel.emissions_reduction
        * vessel.daily_consumption_t
        * voyage_days
        * prices.carbon_price;
    let net_benefit = fuel_savings + emissions_value - reliq_cost;

    debug!(fuel_savings, reliq_cost, emissions_value, net_benefit, "voyage economics");

    Ok(EconomicsSummary {
        total_bog_generated_m3: generated,
        total_bog_consumed_m3: consumed,
        total_bog_reliquefied_m3: reliquefied,
        total_bog_reliq_loss_m3: profile.total_reliq_loss_m3(),
        total_bog_vented_m3: vented,
        fuel_savings,
        reliq_cost,
        emissions_value,
        net_benefit,
        lng_value_generated: generated * prices.lng_price_per_m3,
        lng_value_vented: vented * prices.lng_price_per_m3,
    })
}

/// 여러 항차(적하 + 공선 등)의 요약을 합산한다.
pub fn combine(summaries: &[EconomicsSummary]) -> EconomicsSummary {
    summaries
        .iter()
        .fold(EconomicsSummary::default(), |acc, s| EconomicsSummary {
            total_bog_generated_m3: acc.total_bog_generated_m3 + s.total_bog_generated_m3,
            total_bog_consumed_m3: acc.total_bog_consumed_m3 + s.total_bog_consumed_m3,
            total_bog_reliquefied_m3: acc.total_bog_reliquefied_m3 + s.total_bog_reliquefied_m3,
            total_bog_reliq_loss_m3: acc.total_bog_reliq_loss_m3 + s.total_bog_reliq_loss_m3,
            total_bog_vented_m3: acc.total_bog_vented_m3 + s.total_bog_vented_m3,
            fuel_savings: acc.fuel_savings + s.fuel_savings,
            reliq_cost: acc.reliq_cost + s.reliq_cost,
            emissions_value: acc.emissions_value + s.emissions_value,
            net_benefit: acc.net_benefit + s.net_benefit,
            lng_value_generated: acc.lng_value_generated + s.lng_value_generated,
            lng_value_vented: acc.lng_value_vented + s.lng_value_vented,
        })
}
