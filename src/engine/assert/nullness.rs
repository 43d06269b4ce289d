use std::fmt::Debug;
use std::rc::Rc;
use std::sync::Arc;

use crate::domain::reporter::Reporter;

use super::{Diagnostic, fail};

/// Values that can denote absence.
///
/// Wrappers (`&N`, `&mut N`, `Box<N>`, `Rc<N>`, `Arc<N>`) are never absent
/// themselves; they report the state of the value they hold. A boxed `None`
/// is therefore absent.
pub trait Nullable: Debug {
    fn is_nil(&self) -> bool;
}

/// Asserts that `value` denotes absence: `None`, `Ok(_)` or a null pointer.
pub fn nil<R, N>(reporter: &R, value: &N, diagnostic: Diagnostic<'_>) -> bool
where
    R: Reporter + ?Sized,
    N: Nullable + ?Sized,
{
    if !value.is_nil() {
        return fail(
            reporter,
            &format!("expected no error\nactual: {value:?}"),
            diagnostic,
        );
    }
    true
}

/// Asserts that `value` denotes presence: `Some(_)`, `Err(_)` or a non-null
/// pointer.
pub fn not_nil<R, N>(reporter: &R, value: &N, diagnostic: Diagnostic<'_>) -> bool
where
    R: Reporter + ?Sized,
    N: Nullable + ?Sized,
{
    if value.is_nil() {
        return fail(
            reporter,
            &format!("expected error\nactual: {value:?}"),
            diagnostic,
        );
    }
    true
}

impl<T: Debug> Nullable for Option<T> {
    fn is_nil(&self) -> bool {
        self.is_none()
    }
}

/// `Ok` means "no error" and counts as absent.
impl<T: Debug, E: Debug> Nullable for Result<T, E> {
    fn is_nil(&self) -> bool {
        self.is_ok()
    }
}

impl<T: ?Sized> Nullable for *const T {
    fn is_nil(&self) -> bool {
        self.is_null()
    }
}

impl<T: ?Sized> Nullable for *mut T {
    fn is_nil(&self) -> bool {
        self.is_null()
    }
}

macro_rules! delegate_nullable {
    ($($wrapper:ident),*) => {
        $(
            impl<N: Nullable + ?Sized> Nullable for $wrapper<N> {
                fn is_nil(&self) -> bool {
                    (**self).is_nil()
                }
            }
        )*
    };
}

delegate_nullable!(Box, Rc, Arc);

impl<N: Nullable + ?Sized> Nullable for &N {
    fn is_nil(&self) -> bool {
        (**self).is_nil()
    }
}

impl<N: Nullable + ?Sized> Nullable for &mut N {
    fn is_nil(&self) -> bool {
        (**self).is_nil()
    }
}
