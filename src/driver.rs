//! 시연 드라이버 (The demonstration driver).
//!
//! 모든 시연을 고정된 순서로 실행하고 `name=value` 형식의 줄을 기록합니다
//! (Runs every demonstration in a fixed order, writing `name=value` lines).
//! 출력 대상을 `io::Write`로 받으므로 전체 출력을 버퍼에 모아 바이트 단위로
//! 검증할 수 있습니다 (The output sink is any `io::Write`, so the whole
//! transcript can be captured in a buffer and checked byte for byte).

use std::io::{self, Write};

use crate::collatz;
use crate::higher_order::fold;
use crate::iterative::{fac, fib, triag};
use crate::power::pow;
use crate::recursive::fib_slow;

/// 전체 시연 순서를 실행합니다 (Runs the full demonstration sequence).
///
/// 출력은 결정적입니다: 같은 바이너리는 항상 같은 바이트 열을 냅니다
/// (The output is deterministic: the same binary always produces the same
/// byte sequence).
pub fn run<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "5 * 4={}", 5 * 4)?;
    writeln!(out, "fac(5)={}", fac(5))?;
    writeln!(out, "fac(10)={}", fac(10))?;

    for i in 0..16 {
        writeln!(out, "fib({i}) = {}", fib(i))?;
    }
    for i in 0..16 {
        writeln!(out, "fac({i}) = {}", fac(i))?;
    }
    for i in 0..16 {
        writeln!(out, "triag({i}) = {}", triag(i))?;
    }

    let lst: Vec<u64> = (0..16).collect();
    writeln!(out, "lst={lst:?}")?;
    writeln!(out, "fold(0, add, lst)={}", fold(0, |acc, &x| acc + x, &lst))?;
    // 곱에서는 선행하는 0을 제외한다 (The product skips the leading zero).
    writeln!(
        out,
        "fold(1, mul, lst[1..])={}",
        fold(1, |acc, &x| acc * x, &lst[1..])
    )?;

    writeln!(out, "pow(2, 14)={}", pow(2, 14))?;
    writeln!(out, "pow(3, 10)={}", pow(3, 10))?;

    // 함수 자체의 표현은 고정 문자열이다: 함수 포인터 주소는 실행마다 달라
    // 결정적 출력을 깨뜨린다 (The representation of the function itself is a
    // fixed string; a function-pointer address would vary between runs and
    // break determinism).
    writeln!(out, "fib_slow=<fn(u64) -> u64>")?;
    let candidates = [30, 20];
    writeln!(out, "fib_slow([30, 20][1])={}", fib_slow(candidates[1]))?;
    writeln!(out, "fib_slow(10)={}", fib_slow(10))?;
    writeln!(out, "fib_slow(15)={}", fib_slow(15))?;

    for i in 1..32 {
        writeln!(out, "collatz({i}):")?;
        collatz::emit(i, out)?;
    }

    Ok(())
}
