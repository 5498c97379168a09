use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

use crate::bog::rate::EnvironmentalConditions;
use crate::error::{ensure_finite, ensure_non_negative, BogError, Result};

/// 일별 기상 산포(표준편차).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherSpread {
    /// 외기 온도 표준편차 [°C]
    pub temp_c: f64,
    /// 파고 표준편차 [m]
    pub wave_m: f64,
}

impl Default for WeatherSpread {
    fn default() -> Self {
        Self {
            temp_c: 2.0,
            wave_m: 0.5,
        }
    }
}

/// 시뮬레이션에 필요한 환경 데이터 일수 (`floor(voyage_days)`).
pub fn required_days(voyage_days: f64) -> usize {
    if voyage_days.is_finite() && voyage_days > 0.0 {
        voyage_days.floor() as usize
    } else {
        0
    }
}

/// 매일 같은 조건이 이어지는 프로파일.
pub fn constant_profile(base: EnvironmentalConditions, days: usize) -> Vec<EnvironmentalConditions> {
    vec![base; days]
}

/// 기준 조건 주변으로 외기 온도와 파고를 정규분포로 흩뿌린 프로파일.
///
/// 같은 `seed`는 같은 프로파일을 만든다. 파고는 0 미만으로 내려가지 않는다.
pub fn scattered_profile(
    base: EnvironmentalConditions,
    spread: WeatherSpread,
    days: usize,
    seed: u64,
) -> Result<Vec<EnvironmentalConditions>> {
    ensure_finite("기준 외기 온도", base.ambient_temp_c)?;
    ensure_non_negative("기준 파고", base.wave_height_m)?;
    ensure_non_negative("온도 산포", spread.temp_c)?;
    ensure_non_negative("파고 산포", spread.wave_m)?;

    let temp = normal(base.ambient_temp_c, spread.temp_c)?;
    let wave = normal(base.wave_height_m, spread.wave_m)?;
    let mut rng = StdRng::seed_from_u64(seed);
    let profile = (0..days)
        .map(|_| EnvironmentalConditions {
            ambient_temp_c: temp.sample(&mut rng),
            wave_height_m: wave.sample(&mut rng).max(0.0),
            ..base
        })
        .collect();
    Ok(profile)
}

fn normal(mean: f64, std_dev: f64) -> Result<Normal<f64>> {
    Normal::new(mean, std_dev)
        .map_err(|e| BogError::invalid(format!("정규분포 매개변수 오류: {e}")))
}
