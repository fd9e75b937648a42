use crate::column::Callback;
use crate::column::ColumnSet;
use crate::column::Field;
use crate::column::factory;
use crate::format::Placeholder;
use crate::model::Integration;
use crate::model::RawValue;

const PROVIDER: Field<Integration, str> = Field::new("provider", |r| r.provider.as_deref());
const STATUS: Field<Integration, str> = Field::new("status", |r| r.status.as_deref());
const RECORDS: Field<Integration, RawValue> =
    Field::new("records_synced", |r| r.records_synced.as_ref());
const LAST_SYNC: Field<Integration, RawValue> =
    Field::new("last_synced_at", |r| r.last_synced_at.as_ref());
const CREATED_AT: Field<Integration, RawValue> =
    Field::new("created_at", |r| r.created_at.as_ref());

/// Provider, Status, Records, Last sync, Created, Delete.
pub fn integration_columns(on_delete: Callback<String>) -> ColumnSet<Integration> {
    vec![
        factory::text_column("provider", PROVIDER, "Provider"),
        factory::badge_column("status", STATUS, "Status"),
        factory::count_column(RECORDS, "Records"),
        factory::date_column(LAST_SYNC, "Last sync", Placeholder::Dash),
        factory::date_column(CREATED_AT, "Created", Placeholder::NotAvailable),
        factory::delete_column(on_delete),
    ]
}
