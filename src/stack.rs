//! Stack growth for recursive tree walks.
//!
//! Tree depth is bounded only by the input: a flat chain such as
//! `1 + 1 + ... + 1` nests one level per operator. Recursive walks over a
//! `Node` wrap each step in [`ensure_sufficient_stack`] so long chains grow
//! the stack on the heap instead of overflowing it.

/// Minimum stack space to keep available (100KB red zone).
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Runs `f`, first growing the stack if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_returns_closure_result() {
        let result: Result<i32, &str> = ensure_sufficient_stack(|| Ok(123));
        assert_eq!(result, Ok(123));
    }

    #[test]
    fn test_deep_recursion() {
        fn count_down(n: u64) -> u64 {
            ensure_sufficient_stack(|| if n == 0 { 0 } else { count_down(n - 1) + 1 })
        }

        assert_eq!(count_down(100_000), 100_000);
    }
}
