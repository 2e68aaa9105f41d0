//! 실행 방법: cargo run (Run with: cargo run).
//!
//! 전체 시연을 stdout에 출력한 뒤 두 개의 단언을 실행합니다. 두 번째 단언은
//! 의도적으로 거짓이어서 프로세스가 0이 아닌 상태로 끝납니다 (Prints the
//! full demonstration to stdout, then runs two assertions; the second is
//! intentionally false, so the process exits with a non-zero status).

use std::io::{self, Write};

use arithmetic_demo::driver;
use arithmetic_demo::pow;

fn main() {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    driver::run(&mut out).expect("write to stdout");
    // 단언이 패닉하기 전에 모든 출력을 내보낸다 (Get every line out before
    // the assertion panics).
    out.flush().expect("flush stdout");

    assert_eq!(pow(2, 10), 1024);
    assert_eq!(pow(3, 3), 25, "this should fail");
}
