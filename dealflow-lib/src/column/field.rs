//! Typed field keys

/// A named, typed accessor for one field of a row type.
///
/// Factories receive `Field`s instead of string keys, so a column can only be
/// built for a row type that really has the field it reads. The key doubles
/// as the default column id.
///
/// # Example
///
/// ```
/// use dealflow_lib::column::Field;
/// use dealflow_lib::model::{Investor, RawValue};
///
/// const AUM: Field<Investor, RawValue> = Field::new("aum", |r| r.aum.as_ref());
///
/// let investor = Investor { aum: Some(RawValue::from(750)), ..Default::default() };
/// assert_eq!(AUM.key(), "aum");
/// assert_eq!(AUM.get(&investor), Some(&RawValue::from(750)));
/// ```
pub struct Field<R, T: ?Sized> {
    key: &'static str,
    get: fn(&R) -> Option<&T>,
}

impl<R, T: ?Sized> Field<R, T> {
    /// Creates a field key from its name and accessor.
    pub const fn new(key: &'static str, get: fn(&R) -> Option<&T>) -> Self {
        Self { key, get }
    }

    /// Returns the field name.
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Reads the field from a row.
    pub fn get<'a>(&self, row: &'a R) -> Option<&'a T> {
        (self.get)(row)
    }
}

impl<R, T: ?Sized> Clone for Field<R, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R, T: ?Sized> Copy for Field<R, T> {}

impl<R, T: ?Sized> std::fmt::Debug for Field<R, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Field").field(&self.key).finish()
    }
}
