//! Conversion of the configured fallback limit into caller numeric types.

/// Numeric types that can stand in for the fallback limit.
///
/// Integer conversions saturate at the type's bounds; float conversions
/// round to the nearest representable value.
///
/// # Examples
///
/// ```
/// use destroy_invalids::FromLimit;
///
/// assert_eq!(u8::from_limit(300), 255);
/// assert_eq!(u32::from_limit(-1), 0);
/// assert_eq!(f64::from_limit(7), 7.0);
/// ```
pub trait FromLimit: Sized {
    /// Converts the fallback limit into `Self`.
    fn from_limit(limit: i64) -> Self;
}

macro_rules! impl_from_limit_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl FromLimit for $t {
                fn from_limit(limit: i64) -> Self {
                    match <$t>::try_from(limit) {
                        Ok(value) => value,
                        Err(_) if limit < 0 => <$t>::MIN,
                        Err(_) => <$t>::MAX,
                    }
                }
            }
        )*
    };
}

macro_rules! impl_from_limit_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl FromLimit for $t {
                fn from_limit(limit: i64) -> Self {
                    limit as $t
                }
            }
        )*
    };
}

impl_from_limit_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_from_limit_float!(f32, f64);
