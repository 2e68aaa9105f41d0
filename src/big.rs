//! 임의 정밀도 버전 (Arbitrary-precision versions).
//!
//! 팩토리얼과 거듭제곱은 작은 입력에서도 64비트를 넘습니다 (21!이 이미 u64
//! 범위 밖) (Factorials and powers exceed 64 bits even for small inputs —
//! 21! is already out of u64 range). 이 모듈은 같은 점화식을 `BigUint` 위에서
//! 계산하여 임의 크기의 입력을 정확히 처리합니다 (This module runs the same
//! recurrences over `BigUint`, handling inputs of any size exactly).

use num_bigint::BigUint;
use num_traits::{One, Pow, Zero};

/// n!을 임의 정밀도로 계산합니다 (Computes n! with arbitrary precision).
///
/// # 예시 (Examples)
/// ```
/// use arithmetic_demo::big;
/// assert_eq!(big::factorial(5), 120u32.into());
/// assert_eq!(
///     big::factorial(25).to_string(),
///     "15511210043330985984000000",
/// );
/// ```
pub fn factorial(n: u64) -> BigUint {
    let mut acc = BigUint::one();
    for i in 2..=n {
        acc *= i;
    }
    acc
}

/// base의 exp 거듭제곱을 임의 정밀도로 계산합니다
/// (Computes base raised to exp with arbitrary precision).
pub fn pow(base: u64, exp: u32) -> BigUint {
    BigUint::from(base).pow(exp)
}

/// n번째 피보나치 수를 임의 정밀도로 계산합니다
/// (Computes the nth Fibonacci number with arbitrary precision).
pub fn fib(n: u64) -> BigUint {
    let mut a = BigUint::zero();
    let mut b = BigUint::one();
    for _ in 0..n {
        let next = &a + &b;
        a = b;
        b = next;
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::ToPrimitive;

    #[test]
    fn test_factorial_agrees_with_u64_core() {
        for n in 0..=20 {
            assert_eq!(factorial(n).to_u64(), Some(crate::iterative::fac(n)));
        }
    }

    #[test]
    fn test_factorial_past_64_bits() {
        assert_eq!(
            factorial(25).to_string(),
            "15511210043330985984000000"
        );
    }

    #[test]
    fn test_pow_past_64_bits() {
        assert_eq!(pow(2, 10), 1024u32.into());
        assert_eq!(
            pow(2, 100).to_string(),
            "1267650600228229401496703205376"
        );
    }

    #[test]
    fn test_fib_past_64_bits() {
        assert_eq!(fib(10), 55u32.into());
        assert_eq!(
            fib(200).to_string(),
            "280571172992510140037611932413038677189525"
        );
    }
}
