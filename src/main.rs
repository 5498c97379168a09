use std::process::ExitCode;

use clap::Parser;
use lng_voyage_toolbox::{app, cli::Cli};

/// 프로그램의 엔트리 포인트. 인자를 해석한 뒤 하위 명령 또는 대화형 메뉴를 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse();
    match app::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("오류: {err}");
            ExitCode::FAILURE
        }
    }
}
