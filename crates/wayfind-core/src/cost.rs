use std::fmt::Debug;
use std::ops::Add;

/// Additive, totally ordered quantity accumulated along a path.
///
/// Every cost handed to a search engine must be `>= ZERO`. Negative moves
/// break both Dijkstra and A* and are rejected with a panic.
pub trait Cost: Copy + Ord + Add<Output = Self> + Debug + Send + Sync {
    const ZERO: Self;

    /// Cost of crossing an edge that carries no weight
    const ONE: Self;

    fn is_negative(&self) -> bool {
        *self < Self::ZERO
    }
}

macro_rules! impl_cost {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Cost for $ty {
                const ZERO: Self = 0;
                const ONE: Self = 1;
            }
        )*
    };
}

impl_cost!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Panic if a move cost violates the non-negative contract.
#[track_caller]
pub(crate) fn assert_non_negative<C: Cost>(cost: C) {
    assert!(
        !cost.is_negative(),
        "negative costs are disallowed (got {cost:?})"
    );
}
