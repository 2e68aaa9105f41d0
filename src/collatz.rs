//! 콜라츠 수열 (The Collatz sequence).
//!
//! 수열을 지연 평가 이터레이터로 표현합니다 (The sequence is expressed as a
//! lazy iterator): `next()`가 호출될 때마다 다음 항을 계산하며, 1에 도달하면
//! 끝납니다 (each element is computed on demand when `next()` is called, and
//! the stream ends after reaching 1). 모든 시작값에 대한 종료는 콜라츠 추측이
//! 주장할 뿐 증명되지 않았습니다 (Termination for every start is the Collatz
//! conjecture, not a theorem).

use std::io::{self, Write};

/// 시작값 n에서 1까지의 콜라츠 수열을 내는 유한 이터레이터
/// (A finite iterator over the Collatz sequence from n down to 1, inclusive).
///
/// 홀수면 3n + 1, 짝수면 n / 2를 적용합니다 (Applies 3n + 1 for odd n and
/// n / 2 for even n). 시작값은 1 이상이어야 합니다 (The start must be at
/// least 1).
///
/// # 예시 (Examples)
/// ```
/// use arithmetic_demo::Collatz;
/// let seq: Vec<u64> = Collatz::new(6).collect();
/// assert_eq!(seq, vec![6, 3, 10, 5, 16, 8, 4, 2, 1]);
/// ```
pub struct Collatz {
    current: u64,
    done: bool,
}

impl Collatz {
    pub fn new(start: u64) -> Self {
        Collatz {
            current: start,
            done: false,
        }
    }
}

impl Iterator for Collatz {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let value = self.current;
        if value == 1 {
            self.done = true;
        } else if value & 1 == 1 {
            self.current = 3 * value + 1;
        } else {
            self.current = value / 2;
        }
        Some(value)
    }
}

/// 시작값 start의 콜라츠 수열 전체를 한 줄에 한 항씩 기록합니다
/// (Writes the full Collatz sequence from start, one element per line).
pub fn emit<W: Write>(start: u64, out: &mut W) -> io::Result<()> {
    for value in Collatz::new(start) {
        writeln!(out, "{value}")?;
    }
    Ok(())
}
