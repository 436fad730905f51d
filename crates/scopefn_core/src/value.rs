//! Normalize wrapper values to their primitive.
//!
//! The `number` and `boolean` domains never hand a wrapper to a callback: a `Box<i32>`, an `Rc<bool>` or a
//! `NonZeroU8` is first reduced to the plain primitive via [`ValueOf::value_of`].
//!
//! ## Examples
//!
//! ```rust
//! use std::num::NonZeroU8;
//! use std::rc::Rc;
//! use scopefn_core::ValueOf;
//!
//! assert_eq!(Box::new(7_i32).value_of(), 7);
//! assert_eq!(Rc::new(true).value_of(), true);
//! assert_eq!(NonZeroU8::new(3).map(|n| n.value_of()), Some(3_u8));
//! ```

use std::cell::Cell;
use std::num::{
    NonZeroI8, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI128, NonZeroIsize, NonZeroU8, NonZeroU16, NonZeroU32,
    NonZeroU64, NonZeroU128, NonZeroUsize, Wrapping,
};
use std::rc::Rc;
use std::sync::Arc;

mod sealed {
    /// Sealing trait to restrict external implementations of [`super::Number`].
    pub trait Sealed {}
}

/// Reduce a value to its underlying primitive.
///
/// Primitives return themselves; wrappers delegate to what they wrap.
pub trait ValueOf {
    /// The plain value handed to callbacks.
    type Primitive: Copy;

    /// Return the primitive value without consuming or mutating `self`.
    fn value_of(&self) -> Self::Primitive;
}

/// Marker for the Rust numeric primitives (every integer and float width).
pub trait Number: sealed::Sealed + ValueOf<Primitive = Self> + Copy + PartialEq + PartialOrd + core::fmt::Debug {}

macro_rules! impl_number {
    ($($ty:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}
            impl Number for $ty {}

            impl ValueOf for $ty {
                type Primitive = $ty;

                #[inline]
                fn value_of(&self) -> $ty {
                    *self
                }
            }
        )*
    };
}

impl_number!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl ValueOf for bool {
    type Primitive = bool;

    #[inline]
    fn value_of(&self) -> bool {
        *self
    }
}

macro_rules! impl_non_zero {
    ($($nz:ty => $prim:ty),* $(,)?) => {
        $(
            impl ValueOf for $nz {
                type Primitive = $prim;

                #[inline]
                fn value_of(&self) -> $prim {
                    self.get()
                }
            }
        )*
    };
}

impl_non_zero!(
    NonZeroI8 => i8,
    NonZeroI16 => i16,
    NonZeroI32 => i32,
    NonZeroI64 => i64,
    NonZeroI128 => i128,
    NonZeroIsize => isize,
    NonZeroU8 => u8,
    NonZeroU16 => u16,
    NonZeroU32 => u32,
    NonZeroU64 => u64,
    NonZeroU128 => u128,
    NonZeroUsize => usize,
);

// --- Pointer-like wrappers ---------------------------------------------------------------------

macro_rules! impl_deref_wrapper {
    ($($wrapper:ty),* $(,)?) => {
        $(
            impl<W: ValueOf + ?Sized> ValueOf for $wrapper {
                type Primitive = W::Primitive;

                #[inline]
                fn value_of(&self) -> W::Primitive {
                    (**self).value_of()
                }
            }
        )*
    };
}

impl_deref_wrapper!(&W, &mut W, Box<W>, Rc<W>, Arc<W>);

impl<P: ValueOf + Copy> ValueOf for Cell<P> {
    type Primitive = P::Primitive;

    #[inline]
    fn value_of(&self) -> P::Primitive {
        self.get().value_of()
    }
}

impl<P: ValueOf> ValueOf for Wrapping<P> {
    type Primitive = P::Primitive;

    #[inline]
    fn value_of(&self) -> P::Primitive {
        self.0.value_of()
    }
}
