//! 반복적 수치 계산 (Iterative numeric computations).
//!
//! 세 함수 모두 같은 형태를 가집니다: 누산기를 초기화하고, n이 0이 될 때까지
//! 감소시키며 누산합니다 (All three functions share the same shape: initialize
//! an accumulator, then accumulate while counting n down to zero). 상수 공간,
//! 선형 시간 (Constant space, linear time).

/// 팩토리얼을 반복적으로 계산합니다 (Computes the factorial iteratively).
///
/// 누산기를 1로 시작해 n, n-1, ..., 1을 차례로 곱합니다. n = 0이면 루프 본문이
/// 실행되지 않으므로 1을 반환합니다 (Starts the accumulator at 1 and multiplies
/// by n, n-1, ..., 1; for n = 0 the loop body never runs, so it returns 1).
/// n > 20이면 u64를 넘으므로 [`crate::big::factorial`]을 사용하세요
/// (Results overflow u64 past n = 20; use [`crate::big::factorial`] there).
///
/// # 예시 (Examples)
/// ```
/// use arithmetic_demo::fac;
/// assert_eq!(fac(0), 1);
/// assert_eq!(fac(5), 120);
/// assert_eq!(fac(10), 3628800);
/// ```
pub fn fac(mut n: u64) -> u64 {
    let mut acc = 1;
    while n != 0 {
        acc *= n;
        n -= 1;
    }
    acc
}

/// 피보나치 수를 반복적으로 계산합니다 (Computes Fibonacci numbers iteratively).
///
/// (a, b) 쌍을 (0, 1)로 시작해 매 단계 (b, a + b)로 동시에 갱신하고, n번
/// 반복한 뒤 a를 반환합니다 (Maintains the pair (a, b) starting at (0, 1),
/// simultaneously updating to (b, a + b) each step; returns a after n steps).
///
/// # 예시 (Examples)
/// ```
/// use arithmetic_demo::fib;
/// assert_eq!(fib(0), 0);
/// assert_eq!(fib(1), 1);
/// assert_eq!(fib(10), 55);
/// ```
pub fn fib(mut n: u64) -> u64 {
    let (mut a, mut b) = (0, 1);
    while n != 0 {
        (a, b) = (b, a + b);
        n -= 1;
    }
    a
}

/// n번째 삼각수를 명시적 합산으로 계산합니다
/// (Computes the nth triangular number by explicit summation).
///
/// n + (n-1) + ... + 1을 누산합니다. 닫힌 형태 n(n+1)/2와 같지만 루프로
/// 계산합니다 (Accumulates n + (n-1) + ... + 1; equal to the closed form
/// n(n+1)/2, but computed by the loop).
///
/// # 예시 (Examples)
/// ```
/// use arithmetic_demo::triag;
/// assert_eq!(triag(0), 0);
/// assert_eq!(triag(5), 15);
/// ```
pub fn triag(mut n: u64) -> u64 {
    let mut acc = 0;
    while n != 0 {
        acc += n;
        n -= 1;
    }
    acc
}
