use crate::{JsonValue, NbtValue};

mod private {
    pub trait Sealed {}
    impl Sealed for usize {}
    impl Sealed for str {}
    impl Sealed for String {}
    impl<T> Sealed for &T where T: ?Sized + Sealed {}

    pub trait SealedTree {}
    impl SealedTree for crate::NbtValue {}
    impl SealedTree for crate::JsonValue {}
}

/// A tree node that can be looked into by list position or compound key.
#[doc(hidden)]
pub trait Tree: private::SealedTree + Sized {
    fn at(&self, index: usize) -> Option<&Self>;
    fn at_mut(&mut self, index: usize) -> Option<&mut Self>;
    fn field(&self, key: &str) -> Option<&Self>;
    fn field_mut(&mut self, key: &str) -> Option<&mut Self>;
}

/// Keys accepted by `get`/`get_mut` on [`NbtValue`] and [`JsonValue`]: a
/// position into a list, or a key into a compound.
pub trait Index: private::Sealed {
    #[doc(hidden)]
    fn lookup<'v, V: Tree>(&self, value: &'v V) -> Option<&'v V>;

    #[doc(hidden)]
    fn lookup_mut<'v, V: Tree>(&self, value: &'v mut V) -> Option<&'v mut V>;
}

impl Index for usize {
    #[inline]
    fn lookup<'v, V: Tree>(&self, value: &'v V) -> Option<&'v V> {
        value.at(*self)
    }

    #[inline]
    fn lookup_mut<'v, V: Tree>(&self, value: &'v mut V) -> Option<&'v mut V> {
        value.at_mut(*self)
    }
}

impl Index for str {
    #[inline]
    fn lookup<'v, V: Tree>(&self, value: &'v V) -> Option<&'v V> {
        value.field(self)
    }

    #[inline]
    fn lookup_mut<'v, V: Tree>(&self, value: &'v mut V) -> Option<&'v mut V> {
        value.field_mut(self)
    }
}

impl Index for String {
    #[inline]
    fn lookup<'v, V: Tree>(&self, value: &'v V) -> Option<&'v V> {
        value.field(self)
    }

    #[inline]
    fn lookup_mut<'v, V: Tree>(&self, value: &'v mut V) -> Option<&'v mut V> {
        value.field_mut(self)
    }
}

impl<T: ?Sized + Index> Index for &T {
    #[inline]
    fn lookup<'v, V: Tree>(&self, value: &'v V) -> Option<&'v V> {
        (**self).lookup(value)
    }

    #[inline]
    fn lookup_mut<'v, V: Tree>(&self, value: &'v mut V) -> Option<&'v mut V> {
        (**self).lookup_mut(value)
    }
}

impl Tree for NbtValue {
    fn at(&self, index: usize) -> Option<&Self> {
        match self {
            NbtValue::List(items) => items.get(index),
            _ => None,
        }
    }

    fn at_mut(&mut self, index: usize) -> Option<&mut Self> {
        match self {
            NbtValue::List(items) => items.get_mut(index),
            _ => None,
        }
    }

    fn field(&self, key: &str) -> Option<&Self> {
        match self {
            NbtValue::Compound(compound) => compound.get(key),
            _ => None,
        }
    }

    fn field_mut(&mut self, key: &str) -> Option<&mut Self> {
        match self {
            NbtValue::Compound(compound) => compound.get_mut(key),
            _ => None,
        }
    }
}

impl Tree for JsonValue {
    fn at(&self, index: usize) -> Option<&Self> {
        match self {
            JsonValue::Array(items) => items.get(index),
            _ => None,
        }
    }

    fn at_mut(&mut self, index: usize) -> Option<&mut Self> {
        match self {
            JsonValue::Array(items) => items.get_mut(index),
            _ => None,
        }
    }

    fn field(&self, key: &str) -> Option<&Self> {
        match self {
            JsonValue::Object(object) => object.get(key),
            _ => None,
        }
    }

    fn field_mut(&mut self, key: &str) -> Option<&mut Self> {
        match self {
            JsonValue::Object(object) => object.get_mut(key),
            _ => None,
        }
    }
}
