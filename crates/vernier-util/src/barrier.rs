/*
 * barrier.rs
 * Copyright (c) 2025 Vernier contributors
 */

//! Compiler optimization barriers.
//!
//! Timed code whose results are never used tends to be deleted by the
//! optimizer, which turns a benchmark into a measurement of nothing. These
//! barriers force the compiler to treat memory as observed or written.

/// Force `value` to be treated as read.
///
/// Call this on the result of the code under measurement so the compiler
/// cannot prove the computation dead.
pub fn observe<T>(value: &T) {
    std::hint::black_box(value);
}

/// Force `value` to be treated as written.
///
/// Call this on inputs the compiler might otherwise constant-fold through
/// the code under measurement.
pub fn touch<T>(value: &mut T) {
    std::hint::black_box(value);
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_barriers_pass_values_through_unchanged() {
        let data = vec![1u64, 2, 3];
        observe(&data);
        assert_eq!(data, [1, 2, 3]);

        let mut x = 42u32;
        touch(&mut x);
        assert_eq!(x, 42);
    }
}
