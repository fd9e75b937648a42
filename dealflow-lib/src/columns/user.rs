use crate::column::Callback;
use crate::column::ColumnSet;
use crate::column::Field;
use crate::column::factory;
use crate::format::Placeholder;
use crate::model::Choice;
use crate::model::Plan;
use crate::model::RawValue;
use crate::model::User;
use crate::model::UserStatus;

const DISPLAY_NAME: Field<User, str> = Field::new("display_name", |r| r.display_name.as_deref());
const EMAIL: Field<User, str> = Field::new("email", |r| r.email.as_deref());
const PLAN: Field<User, str> = Field::new("plan", |r| r.plan.as_deref());
const STATUS: Field<User, str> = Field::new("status", |r| r.status.as_deref());
const CREATED_AT: Field<User, RawValue> = Field::new("created_at", |r| r.created_at.as_ref());
const SUBSCRIPTION_ENDS_AT: Field<User, RawValue> =
    Field::new("subscription_ends_at", |r| r.subscription_ends_at.as_ref());

/// User, Email, Plan, Status, Created, Subscription ends, Delete.
///
/// Plan and status are inline selectors reporting `(user id, new value)`.
pub fn user_columns(
    on_plan_change: Callback<(String, String)>,
    on_status_change: Callback<(String, String)>,
    on_delete: Callback<String>,
) -> ColumnSet<User> {
    vec![
        factory::avatar_column("user", DISPLAY_NAME, "User"),
        factory::text_column("email", EMAIL, "Email"),
        factory::select_column("plan", PLAN, "Plan", Plan::options(), on_plan_change),
        factory::select_column(
            "status",
            STATUS,
            "Status",
            UserStatus::options(),
            on_status_change,
        ),
        factory::date_column(CREATED_AT, "Created", Placeholder::Dash),
        factory::date_column(SUBSCRIPTION_ENDS_AT, "Subscription ends", Placeholder::NotAvailable),
        factory::delete_column(on_delete),
    ]
}
