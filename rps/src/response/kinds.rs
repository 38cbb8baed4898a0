//! Closed sets of types accepted for envelope codes and totals.

use serde::Serialize;

mod sealed {
    pub trait Sealed {}
}

/// Types usable as an envelope's `code`: any primitive integer or a `String`.
///
/// This trait is sealed.
pub trait ResponseCode:
    sealed::Sealed + Serialize + Clone + Default + Send + Sync + 'static
{
    /// Returns `true` for the zero value, which is omitted when serialized.
    fn is_unset(&self) -> bool;
}

/// Types usable as an envelope's `total`: any primitive integer.
///
/// This trait is sealed.
pub trait TotalCount:
    sealed::Sealed + Serialize + Copy + Default + Send + Sync + 'static
{
    /// Returns `true` for zero, which is omitted when serialized.
    fn is_unset(&self) -> bool;
}

macro_rules! integer_kinds {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl ResponseCode for $ty {
                fn is_unset(&self) -> bool {
                    *self == 0
                }
            }

            impl TotalCount for $ty {
                fn is_unset(&self) -> bool {
                    *self == 0
                }
            }
        )+
    };
}

integer_kinds!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl sealed::Sealed for String {}

impl ResponseCode for String {
    fn is_unset(&self) -> bool {
        self.is_empty()
    }
}
