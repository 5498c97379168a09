//! LNG 운반선 BOG(Boil-Off Gas) 계산 라이브러리.
//!
//! 환경 보정 BOG율 모델, 일별 항해 시뮬레이터, 경제성 집계를 핵심으로 하고
//! 힐 계획, 항차 소비량 합계, 단위 환산을 함께 제공한다. CLI는 이 라이브러리 위에 얇게 얹힌다.

pub mod app;
pub mod bog;
pub mod cli;
pub mod config;
pub mod conversion;
pub mod error;
pub mod logging;
pub mod quantity;
pub mod ui_cli;
pub mod units;
pub mod vessel;
pub mod voyage;

pub use error::{BogError, Result};
