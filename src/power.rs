//! 정수 거듭제곱 (Integer exponentiation).

/// base의 exp 거듭제곱을 계산합니다 (Computes base raised to exp).
///
/// 내장 `u64::pow`에 위임합니다. 결과가 u64를 넘으면 디버그 빌드에서
/// 패닉합니다; 큰 결과는 [`crate::big::pow`]를 사용하세요 (Delegates to the
/// built-in `u64::pow`; overflow panics in debug builds, use
/// [`crate::big::pow`] for large results).
///
/// # 예시 (Examples)
/// ```
/// use arithmetic_demo::pow;
/// assert_eq!(pow(2, 14), 16384);
/// assert_eq!(pow(3, 10), 59049);
/// ```
pub fn pow(base: u64, exp: u32) -> u64 {
    base.pow(exp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pow() {
        assert_eq!(pow(2, 14), 16384);
        assert_eq!(pow(3, 10), 59049);
        assert_eq!(pow(2, 10), 1024);
        assert_eq!(pow(3, 3), 27);
    }

    #[test]
    fn test_pow_edge_cases() {
        assert_eq!(pow(0, 0), 1);
        assert_eq!(pow(7, 0), 1);
        assert_eq!(pow(0, 5), 0);
        assert_eq!(pow(1, 1000), 1);
    }
}
