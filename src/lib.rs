//! 작은 수치 계산 시연 모음 (A collection of small numeric demonstrations).
//!
//! 각 모듈은 하나의 주제를 다룹니다:
//! - **반복 (Iteration)**: 누산기 루프로 계산하는 팩토리얼, 피보나치, 삼각수
//!   (factorial, Fibonacci, and triangular numbers via accumulator loops)
//! - **재귀 (Recursion)**: 트리 재귀 피보나치 (tree-recursive Fibonacci)
//! - **고차 함수 (Higher-order functions)**: 일반화된 왼쪽 fold (generic left fold)
//! - **거듭제곱 (Exponentiation)**: 정수 거듭제곱 (integer powers)
//! - **콜라츠 수열 (Collatz sequence)**: 지연 평가 이터레이터 (a lazy iterator)
//! - **큰 수 (Big numbers)**: 64비트를 넘는 결과를 위한 임의 정밀도 버전
//!   (arbitrary-precision versions for results past 64 bits)
//!
//! `driver` 모듈이 전체 시연을 순서대로 실행하며, 바이너리는 마지막에
//! 의도적으로 실패하는 단언으로 끝납니다 (The `driver` module runs the whole
//! demonstration in order; the binary ends with an intentionally failing
//! assertion).

pub mod big;
pub mod collatz;
pub mod driver;
pub mod higher_order;
pub mod iterative;
pub mod power;
pub mod recursive;

// 자주 사용되는 항목들을 재수출한다 (Re-export commonly used items).
pub use collatz::Collatz;
pub use higher_order::fold;
pub use iterative::{fac, fib, triag};
pub use power::pow;
pub use recursive::fib_slow;
