use thiserror::Error;

use crate::bog::simulator::VoyageProfile;

/// 라이브러리 전체에서 사용하는 결과 타입.
pub type Result<T> = std::result::Result<T, BogError>;

/// BOG/항해 계산 중 발생 가능한 오류.
#[derive(Debug, Clone, Error)]
pub enum BogError {
    /// 범위를 벗어나거나 형식이 잘못된 입력값
    #[error("입력 오류: {0}")]
    InvalidInput(String),

    /// 질량수지상 잔량이 음수가 되는 경우. 실패한 날 직전까지의 프로파일을 함께 반환한다.
    #[error("{day}일차에 화물 잔량이 고갈되었습니다 (잔량 {remaining_m3:.3} m³)")]
    VolumeExhausted {
        day: usize,
        remaining_m3: f64,
        partial: Box<VoyageProfile>,
    },

    /// 카탈로그에 없는 선박 타입
    #[error("알 수 없는 선박 타입: {0}")]
    UnknownVesselType(String),

    /// 항로 거리를 찾을 수 없음
    #[error("항로를 찾을 수 없습니다: {origin} -> {destination}")]
    RouteNotFound { origin: String, destination: String },

    /// 일별 환경 데이터가 항해일수보다 짧음
    #[error("환경 데이터 부족: {required}일 필요, {provided}일 제공")]
    InsufficientData { required: usize, provided: usize },
}

impl BogError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        BogError::InvalidInput(msg.into())
    }
}

/// 유한한 값인지 확인한다.
pub(crate) fn ensure_finite(name: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(BogError::invalid(format!("{name} 값이 유한하지 않습니다: {value}")))
    }
}

/// 유한하고 음수가 아닌지 확인한다.
pub(crate) fn ensure_non_negative(name: &str, value: f64) -> Result<()> {
    ensure_finite(name, value)?;
    if value < 0.0 {
        return Err(BogError::invalid(format!(
            "{name} 값은 0 이상이어야 합니다: {value}"
        )));
    }
    Ok(())
}
