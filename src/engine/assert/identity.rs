use std::fmt::{self, Debug};
use std::ptr::{self, NonNull};
use std::rc::Rc;
use std::sync::Arc;

use crate::domain::reporter::Reporter;

use super::{Diagnostic, expected_actual, fail};

/// Values that can be compared by identity.
///
/// Pointer-like types (`&T`, `&mut T`, `Box<T>`, `Rc<T>`, `Arc<T>`, raw
/// pointers and `NonNull<T>`) are the same when they point at the same
/// address. Scalar values (integers, `bool`, `char`, `()`) have no address of
/// their own and fall back to value equality. Other types do not implement
/// this trait, so passing a struct or collection by value fails to compile.
///
/// Only the data address is compared. Pointer metadata (slice length, trait
/// object vtable) is ignored, so `dyn Trait` pointers to one value are the
/// same even if they carry different vtables, and a subslice starting at the
/// same element is the same as the whole slice. Zero-sized values may share
/// an address even when they are distinct.
pub trait Identity {
    fn same_identity(&self, other: &Self) -> bool;

    fn fmt_identity(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// Asserts that both values denote the same object.
pub fn same<R, T>(reporter: &R, expected: &T, actual: &T, diagnostic: Diagnostic<'_>) -> bool
where
    R: Reporter + ?Sized,
    T: Identity + ?Sized,
{
    if !expected.same_identity(actual) {
        return fail(
            reporter,
            &expected_actual("Not same", Show(expected), Show(actual)),
            diagnostic,
        );
    }
    true
}

/// Asserts that the values denote different objects.
pub fn not_same<R, T>(reporter: &R, expected: &T, actual: &T, diagnostic: Diagnostic<'_>) -> bool
where
    R: Reporter + ?Sized,
    T: Identity + ?Sized,
{
    if expected.same_identity(actual) {
        return fail(
            reporter,
            &expected_actual("Same", Show(expected), Show(actual)),
            diagnostic,
        );
    }
    true
}

struct Show<'a, T: ?Sized>(&'a T);

impl<T: Identity + ?Sized> fmt::Display for Show<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_identity(f)
    }
}

fn fmt_target<T: Debug + ?Sized>(target: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{target:p} {target:?}")
}

impl<T: Debug + ?Sized> Identity for &T {
    fn same_identity(&self, other: &Self) -> bool {
        ptr::addr_eq(*self, *other)
    }

    fn fmt_identity(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_target(*self, f)
    }
}

impl<T: Debug + ?Sized> Identity for &mut T {
    fn same_identity(&self, other: &Self) -> bool {
        ptr::addr_eq(&**self, &**other)
    }

    fn fmt_identity(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_target(&**self, f)
    }
}

impl<T: Debug + ?Sized> Identity for Box<T> {
    fn same_identity(&self, other: &Self) -> bool {
        ptr::addr_eq(&**self, &**other)
    }

    fn fmt_identity(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_target(&**self, f)
    }
}

impl<T: Debug + ?Sized> Identity for Rc<T> {
    fn same_identity(&self, other: &Self) -> bool {
        ptr::addr_eq(Rc::as_ptr(self), Rc::as_ptr(other))
    }

    fn fmt_identity(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_target(&**self, f)
    }
}

impl<T: Debug + ?Sized> Identity for Arc<T> {
    fn same_identity(&self, other: &Self) -> bool {
        ptr::addr_eq(Arc::as_ptr(self), Arc::as_ptr(other))
    }

    fn fmt_identity(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_target(&**self, f)
    }
}

impl<T: ?Sized> Identity for *const T {
    fn same_identity(&self, other: &Self) -> bool {
        ptr::addr_eq(*self, *other)
    }

    fn fmt_identity(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:p}", *self)
    }
}

impl<T: ?Sized> Identity for *mut T {
    fn same_identity(&self, other: &Self) -> bool {
        ptr::addr_eq(*self, *other)
    }

    fn fmt_identity(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:p}", *self)
    }
}

impl<T: ?Sized> Identity for NonNull<T> {
    fn same_identity(&self, other: &Self) -> bool {
        ptr::addr_eq(self.as_ptr(), other.as_ptr())
    }

    fn fmt_identity(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:p}", self.as_ptr())
    }
}

macro_rules! scalar_identity {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Identity for $ty {
                fn same_identity(&self, other: &Self) -> bool {
                    self == other
                }

                fn fmt_identity(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{self:?}")
                }
            }
        )*
    };
}

scalar_identity!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char, (),
);
