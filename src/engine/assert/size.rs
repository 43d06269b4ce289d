use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt::Debug;
use std::rc::Rc;
use std::sync::Arc;

use crate::domain::reporter::Reporter;

use super::{Diagnostic, fail};

/// Ordered sequences and sets that expose an element count.
///
/// `None` counts as an empty container.
pub trait Countable: Debug {
    fn count(&self) -> usize;
}

/// Key-to-value mappings that expose an entry count.
///
/// `None` counts as an empty mapping.
pub trait Mapping: Debug {
    fn entry_count(&self) -> usize;
}

/// Asserts that a sequence holds exactly `expected_len` elements.
pub fn len<R, C>(
    reporter: &R,
    sequence: &C,
    expected_len: usize,
    diagnostic: Diagnostic<'_>,
) -> bool
where
    R: Reporter + ?Sized,
    C: Countable + ?Sized,
{
    check_len(reporter, sequence, sequence.count(), expected_len, diagnostic)
}

/// Asserts that a mapping holds exactly `expected_len` entries.
pub fn len_map<R, M>(
    reporter: &R,
    mapping: &M,
    expected_len: usize,
    diagnostic: Diagnostic<'_>,
) -> bool
where
    R: Reporter + ?Sized,
    M: Mapping + ?Sized,
{
    check_len(reporter, mapping, mapping.entry_count(), expected_len, diagnostic)
}

fn check_len<R, C>(
    reporter: &R,
    container: &C,
    actual_len: usize,
    expected_len: usize,
    diagnostic: Diagnostic<'_>,
) -> bool
where
    R: Reporter + ?Sized,
    C: Debug + ?Sized,
{
    if actual_len != expected_len {
        let message =
            format!("\"{container:?}\" should have {expected_len} item(s), but has {actual_len}");
        return fail(reporter, &message, diagnostic);
    }
    true
}

impl<T: Debug> Countable for [T] {
    fn count(&self) -> usize {
        self.len()
    }
}

impl<T: Debug, const N: usize> Countable for [T; N] {
    fn count(&self) -> usize {
        N
    }
}

impl<T: Debug> Countable for Vec<T> {
    fn count(&self) -> usize {
        self.len()
    }
}

impl<T: Debug> Countable for VecDeque<T> {
    fn count(&self) -> usize {
        self.len()
    }
}

impl<T: Debug, S> Countable for HashSet<T, S> {
    fn count(&self) -> usize {
        self.len()
    }
}

impl<T: Debug> Countable for BTreeSet<T> {
    fn count(&self) -> usize {
        self.len()
    }
}

impl<C: Countable> Countable for Option<C> {
    fn count(&self) -> usize {
        self.as_ref().map_or(0, Countable::count)
    }
}

impl<K: Debug, V: Debug, S> Mapping for HashMap<K, V, S> {
    fn entry_count(&self) -> usize {
        self.len()
    }
}

impl<K: Debug, V: Debug> Mapping for BTreeMap<K, V> {
    fn entry_count(&self) -> usize {
        self.len()
    }
}

impl<M: Mapping> Mapping for Option<M> {
    fn entry_count(&self) -> usize {
        self.as_ref().map_or(0, Mapping::entry_count)
    }
}

macro_rules! delegate_size {
    ($($wrapper:ident),*) => {
        $(
            impl<C: Countable + ?Sized> Countable for $wrapper<C> {
                fn count(&self) -> usize {
                    (**self).count()
                }
            }

            impl<M: Mapping + ?Sized> Mapping for $wrapper<M> {
                fn entry_count(&self) -> usize {
                    (**self).entry_count()
                }
            }
        )*
    };
}

delegate_size!(Box, Rc, Arc);

impl<C: Countable + ?Sized> Countable for &C {
    fn count(&self) -> usize {
        (**self).count()
    }
}

impl<M: Mapping + ?Sized> Mapping for &M {
    fn entry_count(&self) -> usize {
        (**self).entry_count()
    }
}
