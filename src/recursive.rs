//! 트리 재귀 (Tree recursion).
//!
//! 재귀 정의를 그대로 옮긴 피보나치입니다. 지수 시간 복잡도 O(phi^n)를
//! 가지며, 메모이제이션 없이 의도적으로 느립니다 (Fibonacci transcribed
//! directly from its recursive definition; exponential time O(phi^n),
//! intentionally slow with no memoization). 같은 입력에 대해 반복 버전
//! [`crate::iterative::fib`]과 항상 같은 값을 내야 합니다 (Must always agree
//! with the iterative version for the same input).

/// 순진한 재귀 피보나치 (Naive recursive Fibonacci).
///
/// 기저 사례: n < 2이면 n을 반환합니다 (Base cases: returns n for n < 2).
/// 그 외에는 fib_slow(n-1) + fib_slow(n-2)입니다.
///
/// # 예시 (Examples)
/// ```
/// use arithmetic_demo::fib_slow;
/// assert_eq!(fib_slow(0), 0);
/// assert_eq!(fib_slow(1), 1);
/// assert_eq!(fib_slow(10), 55);
/// ```
pub fn fib_slow(n: u64) -> u64 {
    if n < 2 {
        n
    } else {
        fib_slow(n - 1) + fib_slow(n - 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iterative::fib;

    #[test]
    fn test_base_cases() {
        assert_eq!(fib_slow(0), 0);
        assert_eq!(fib_slow(1), 1);
    }

    #[test]
    fn test_known_values() {
        assert_eq!(fib_slow(10), 55);
        assert_eq!(fib_slow(15), 610);
        assert_eq!(fib_slow(20), 6765);
    }

    #[test]
    fn test_agrees_with_iterative() {
        for n in 0..=20 {
            assert_eq!(fib_slow(n), fib(n));
        }
    }
}
