//! BOG 발생/처리 관련 계산 모듈 모음.

pub mod power;
pub mod rate;
pub mod simulator;

pub use power::*;
pub use rate::*;
pub use simulator::*;
