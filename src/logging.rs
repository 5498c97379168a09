use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// 전역 tracing 구독자를 설치한다.
///
/// `RUST_LOG`가 설정되어 있으면 그 값을, 아니면 `default_level`을 필터로 쓴다.
/// 출력은 표준 에러로 보내 표준 출력의 계산 결과 표와 섞이지 않게 한다.
/// 이미 구독자가 설치되어 있으면 아무것도 하지 않는다.
pub fn init(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
