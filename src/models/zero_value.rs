/// Types with a distinguished "unset" value.
///
/// Scalars are unset when they hold their default (`0`, `false`, `""`).
/// Collections are wrapped in `Option`, so an explicitly empty list or map
/// is still considered set.
pub trait ZeroValue {
    fn is_zero(&self) -> bool;
}

impl ZeroValue for i64 {
    fn is_zero(&self) -> bool {
        *self == 0
    }
}

impl ZeroValue for bool {
    fn is_zero(&self) -> bool {
        !*self
    }
}

impl ZeroValue for String {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T> ZeroValue for Option<T> {
    fn is_zero(&self) -> bool {
        self.is_none()
    }
}

/// Helper for `skip_serializing_if`.
pub fn is_zero<T: ZeroValue>(value: &T) -> bool {
    value.is_zero()
}
