//! Column descriptors and the building blocks they are made of
//!
//! A [`ColumnDescriptor`] tells a table surface how to identify, extract and
//! display one column of a row type. Descriptors are built from typed
//! [`Field`]s by the reusable [`factory`] functions and assembled into entity
//! column sets in [`crate::columns`].

mod callback;
mod descriptor;
pub mod factory;
mod field;
mod fragment;

pub use callback::Action;
pub use callback::Callback;
pub use callback::FavoriteMap;
pub use descriptor::Cell;
pub use descriptor::CellValue;
pub use descriptor::ColumnDescriptor;
pub use descriptor::DisplayMeta;
pub use descriptor::Header;
pub use field::Field;
pub use fragment::Fragment;

/// An ordered list of columns for one entity type.
pub type ColumnSet<R> = Vec<ColumnDescriptor<R>>;

/// Returns the first id that appears twice in `columns`, if any.
pub fn duplicate_id<R>(columns: &[ColumnDescriptor<R>]) -> Option<&str> {
    columns.iter().enumerate().find_map(|(i, column)| {
        columns[..i]
            .iter()
            .any(|earlier| earlier.id() == column.id())
            .then(|| column.id())
    })
}

/// Returns the ids of `columns`, in order.
pub fn column_ids<R>(columns: &[ColumnDescriptor<R>]) -> Vec<&str> {
    columns.iter().map(ColumnDescriptor::id).collect()
}
