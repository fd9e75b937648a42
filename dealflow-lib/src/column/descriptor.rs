//! Column descriptors

use std::sync::Arc;

use super::Fragment;
use crate::model::RawValue;

/// The value an accessor extracts from a row.
pub type CellValue = RawValue;

type Accessor<R> = Arc<dyn Fn(&R) -> CellValue + Send + Sync>;
type CellRenderer<R> = Arc<dyn Fn(Cell<'_, R>) -> Fragment + Send + Sync>;
type HeaderRenderer = Arc<dyn Fn() -> Fragment + Send + Sync>;

/// Column header: a label, or a function for headers that need injected state.
#[derive(Clone)]
pub enum Header {
    Text(String),
    Render(HeaderRenderer),
}

impl Header {
    /// Creates a header produced by a function.
    pub fn render_with(render: impl Fn() -> Fragment + Send + Sync + 'static) -> Self {
        Header::Render(Arc::new(render))
    }

    /// Renders the header.
    pub fn render(&self) -> Fragment {
        match self {
            Header::Text(text) => Fragment::Text(text.clone()),
            Header::Render(render) => render(),
        }
    }

    /// Returns the header as plain text.
    pub fn label(&self) -> String {
        match self {
            Header::Text(text) => text.clone(),
            Header::Render(render) => render().plain_text(),
        }
    }
}

impl From<&str> for Header {
    fn from(text: &str) -> Self {
        Header::Text(text.to_string())
    }
}

impl From<String> for Header {
    fn from(text: String) -> Self {
        Header::Text(text)
    }
}

impl std::fmt::Debug for Header {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Header::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Header::Render(_) => f.write_str("Render(..)"),
        }
    }
}

/// Presentational hints. Never affects what the accessor returns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayMeta {
    /// Maximum column width, in characters.
    pub max_width: Option<u16>,
    /// Style class hints for the rendering surface.
    pub class_names: Vec<String>,
}

/// What a cell renderer receives: the accessor value and the row it came from.
pub struct Cell<'a, R> {
    pub value: &'a CellValue,
    pub row: &'a R,
}

impl<R> Clone for Cell<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Cell<'_, R> {}

/// One table column: how it is identified, where its value comes from and
/// how the value is displayed.
///
/// Descriptors hold no row data and are cheap to clone; a column set can be
/// rebuilt on every render or shared between renders of different datasets.
///
/// # Example
///
/// ```
/// use dealflow_lib::column::{ColumnDescriptor, Fragment};
/// use dealflow_lib::model::{Investor, RawValue};
///
/// let funds = ColumnDescriptor::new("funds", "Funds", |r: &Investor| {
///     r.funds.clone().unwrap_or(RawValue::from("--"))
/// })
/// .max_width(8);
///
/// let investor = Investor::default();
/// assert_eq!(funds.render(&investor).plain_text(), "--");
/// ```
pub struct ColumnDescriptor<R> {
    id: String,
    header: Header,
    accessor: Accessor<R>,
    meta: DisplayMeta,
    cell: Option<CellRenderer<R>>,
}

impl<R> ColumnDescriptor<R> {
    /// Creates a column from an id, a header and a total accessor.
    pub fn new(
        id: impl Into<String>,
        header: impl Into<Header>,
        accessor: impl Fn(&R) -> CellValue + Send + Sync + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            header: header.into(),
            accessor: Arc::new(accessor),
            meta: DisplayMeta::default(),
            cell: None,
        }
    }

    /// Sets a custom cell renderer.
    pub fn cell(mut self, render: impl Fn(Cell<'_, R>) -> Fragment + Send + Sync + 'static) -> Self {
        self.cell = Some(Arc::new(render));
        self
    }

    /// Sets the maximum width.
    pub fn max_width(mut self, width: u16) -> Self {
        self.meta.max_width = Some(width);
        self
    }

    /// Adds a style class hint.
    pub fn class(mut self, class_name: impl Into<String>) -> Self {
        self.meta.class_names.push(class_name.into());
        self
    }

    /// Replaces the header.
    pub fn with_header(mut self, header: impl Into<Header>) -> Self {
        self.header = header.into();
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn meta(&self) -> &DisplayMeta {
        &self.meta
    }

    /// Returns `true` if the column has a custom cell renderer.
    pub fn has_cell_renderer(&self) -> bool {
        self.cell.is_some()
    }

    /// Runs the accessor.
    pub fn value(&self, row: &R) -> CellValue {
        (self.accessor)(row)
    }

    /// Renders the cell for `row`.
    ///
    /// Without a custom renderer the accessor value is shown as text.
    pub fn render(&self, row: &R) -> Fragment {
        let value = self.value(row);
        match &self.cell {
            Some(render) => render(Cell { value: &value, row }),
            None => Fragment::Text(value.to_string()),
        }
    }
}

impl<R> Clone for ColumnDescriptor<R> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            header: self.header.clone(),
            accessor: self.accessor.clone(),
            meta: self.meta.clone(),
            cell: self.cell.clone(),
        }
    }
}

impl<R> std::fmt::Debug for ColumnDescriptor<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColumnDescriptor")
            .field("id", &self.id)
            .field("header", &self.header)
            .field("meta", &self.meta)
            .field("cell", &self.cell.is_some())
            .finish()
    }
}
