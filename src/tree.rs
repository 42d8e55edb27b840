/// A tree key that can measure how far it is from another key.
///
/// `distance` is the absolute difference, so the associated type is wide enough to hold
/// it for any pair of values (`i64::MIN.distance(&i64::MAX)` fits in a `u64`).
pub trait Key: Ord + Copy {
    type Distance: Ord;

    fn distance(&self, other: &Self) -> Self::Distance;
}

macro_rules! impl_key {
    ($($t:ty => $d:ty),* $(,)?) => {
        $(
            impl Key for $t {
                type Distance = $d;

                fn distance(&self, other: &Self) -> $d {
                    self.abs_diff(*other)
                }
            }
        )*
    };
}

impl_key!(
    i8 => u8,
    i16 => u16,
    i32 => u32,
    i64 => u64,
    i128 => u128,
    isize => usize,
    u8 => u8,
    u16 => u16,
    u32 => u32,
    u64 => u64,
    u128 => u128,
    usize => usize,
);
