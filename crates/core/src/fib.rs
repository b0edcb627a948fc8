use std::fmt::{Debug, Display};

/// An integer type the working sequence can be built from.
///
/// Additions wrap at the width of the type, so large indices overflow silently instead of
/// panicking. `i32` reproduces the reference results bit for bit.
pub trait FibInt: Copy + Debug + Display + Eq {
    /// The name of the type, as reported in benchmark reports.
    const NAME: &'static str;

    /// The initial value of every slot before it is filled.
    const ZERO: Self;

    /// The value of the first two slots.
    const ONE: Self;

    /// The value reported when no computation ran.
    const SENTINEL: Self;

    fn wrapping_add(self, rhs: Self) -> Self;
}

macro_rules! impl_fib_int {
    ($($ty:ty),*) => {
        $(
            impl FibInt for $ty {
                const NAME: &'static str = stringify!($ty);
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const SENTINEL: Self = -1;

                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    <$ty>::wrapping_add(self, rhs)
                }
            }
        )*
    };
}

impl_fib_int!(i32, i64);

/// Compute the n-th Fibonacci number, with `fib(0) = fib(1) = 1`.
///
/// A sequence of `n + 1` slots is allocated on every call and filled left to right. Nothing is
/// cached between calls. The sequence takes `(n + 1) * size_of::<T>()` bytes, so very large
/// indices abort the process on allocation failure.
pub fn fib<T: FibInt>(n: u32) -> T {
    let n = n as usize;
    let mut seq = vec![T::ZERO; n + 1];
    seq[0] = T::ONE;
    // For n = 0 the sequence has a single slot.
    if let Some(second) = seq.get_mut(1) {
        *second = T::ONE;
    }
    for i in 2..=n {
        seq[i] = seq[i - 1].wrapping_add(seq[i - 2]);
    }
    seq[n]
}
