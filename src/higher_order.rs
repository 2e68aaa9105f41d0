//! 고차 함수 (Higher-order functions).
//!
//! 합과 곱 같은 누산 패턴을 하나의 일반화된 fold로 추상화합니다
//! (Abstracts accumulation patterns like sum and product into a single
//! generic fold). 러스트에서는 결합 함수를 Fn 트레이트 바운드를 가진
//! 일급 값으로 전달합니다 (In Rust the combining function is passed as a
//! first-class value with an Fn trait bound).

/// 왼쪽 fold: 시퀀스를 왼쪽에서 오른쪽으로 누산합니다
/// (Left fold: accumulates a sequence left to right).
///
/// 결과는 `op(op(op(init, e0), e1), e2)...` 입니다. 요소 타입과 누산기
/// 타입 모두에 대해 다형적입니다 (The result is `op(op(op(init, e0), e1),
/// e2)...`; polymorphic over both the element and accumulator types).
///
/// # 예시 (Examples)
/// ```
/// use arithmetic_demo::fold;
/// let xs = [1, 2, 3, 4];
/// assert_eq!(fold(0, |acc, &x| acc + x, &xs), 10);
/// assert_eq!(fold(1, |acc, &x| acc * x, &xs), 24);
/// ```
pub fn fold<T, U, F>(init: U, mut op: F, seq: &[T]) -> U
where
    F: FnMut(U, &T) -> U,
{
    let mut acc = init;
    for e in seq {
        acc = op(acc, e);
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_sum_and_product() {
        let lst: Vec<u64> = (0..16).collect();
        assert_eq!(fold(0, |acc, &x| acc + x, &lst), 120);
        // 선행하는 0을 건너뛰어 곱이 0이 되지 않게 한다
        // (Skip the leading zero so the product is not trivially zero).
        assert_eq!(fold(1, |acc, &x| acc * x, &lst[1..]), 1307674368000);
    }

    #[test]
    fn test_fold_empty_returns_init() {
        let empty: [u64; 0] = [];
        assert_eq!(fold(42u64, |acc, &x| acc + x, &empty), 42);
    }

    #[test]
    fn test_fold_is_left_associative() {
        let lst = [1, 2, 3];
        assert_eq!(fold(0i64, |acc, &x| acc - x, &lst), -6); // 0 - 1 - 2 - 3
    }

    #[test]
    fn test_fold_changes_accumulator_type() {
        let lst = [1, 2, 3];
        let joined = fold(String::new(), |acc, x: &i32| acc + &x.to_string(), &lst);
        assert_eq!(joined, "123");
    }
}
