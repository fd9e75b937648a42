use crate::column::Callback;
use crate::column::ColumnDescriptor;
use crate::column::ColumnSet;
use crate::column::Field;
use crate::column::factory;
use crate::format::Placeholder;
use crate::model::Choice;
use crate::model::Order;
use crate::model::OrderStatus;
use crate::model::RawValue;

const CUSTOMER: Field<Order, str> = Field::new("customer_email", |r| r.customer_email.as_deref());
const PLAN: Field<Order, str> = Field::new("plan", |r| r.plan.as_deref());
const STATUS: Field<Order, str> = Field::new("status", |r| r.status.as_deref());
const CREATED_AT: Field<Order, RawValue> = Field::new("created_at", |r| r.created_at.as_ref());

/// Order, Customer, Plan, Amount, Status, Created, Delete.
pub fn order_columns(
    on_status_change: Callback<(String, String)>,
    on_delete: Callback<String>,
) -> ColumnSet<Order> {
    vec![
        ColumnDescriptor::new("order", "Order", |r: &Order| {
            RawValue::Text(format!("#{}", r.id))
        }),
        factory::text_column("customer_email", CUSTOMER, "Customer"),
        factory::text_column("plan", PLAN, "Plan"),
        ColumnDescriptor::new("amount", "Amount", order_amount).class("numeric"),
        factory::select_column(
            "status",
            STATUS,
            "Status",
            OrderStatus::options(),
            on_status_change,
        ),
        factory::date_column(CREATED_AT, "Created", Placeholder::Dash),
        factory::delete_column(on_delete),
    ]
}

/// `"49.00 EUR"`; the currency is omitted when unknown.
fn order_amount(order: &Order) -> RawValue {
    let Some(amount) = order.amount.as_ref().and_then(RawValue::as_f64) else {
        return RawValue::from(Placeholder::Dash.as_str());
    };
    let currency = order
        .currency
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty());
    match currency {
        Some(currency) => RawValue::Text(format!("{:.2} {}", amount, currency.to_uppercase())),
        None => RawValue::Text(format!("{:.2}", amount)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::column_ids;
    use crate::column::duplicate_id;
    use crate::columns::test_support::column;
    use crate::columns::test_support::headers;
    use crate::columns::test_support::recorder;

    fn order() -> Order {
        serde_json::from_str(
            r#"{
                "id": 1042,
                "customer_email": "cfo@alder.ch",
                "plan": "pro",
                "amount": "49",
                "currency": "eur",
                "status": "pending",
                "created_at": "2024-11-30"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_order_and_ids() {
        let (_, status) = recorder();
        let (_, delete) = recorder();
        let columns = order_columns(status, delete);
        assert_eq!(duplicate_id(&columns), None);
        assert_eq!(
            column_ids(&columns),
            vec!["order", "customer_email", "plan", "amount", "status", "created_at", "actions"]
        );
        assert_eq!(
            headers(&columns)[..6],
            ["Order", "Customer", "Plan", "Amount", "Status", "Created"]
        );
    }

    #[test]
    fn test_renders_sample_row() {
        let (_, status) = recorder();
        let (_, delete) = recorder();
        let columns = order_columns(status, delete);
        let row = order();
        assert_eq!(column(&columns, "order").render(&row).plain_text(), "#1042");
        assert_eq!(column(&columns, "amount").render(&row).plain_text(), "49.00 EUR");
        assert_eq!(column(&columns, "status").render(&row).plain_text(), "pending ▾");
        assert_eq!(column(&columns, "created_at").render(&row).plain_text(), "30.11.2024");
    }

    #[test]
    fn test_amount_without_currency_or_value() {
        let mut row = order();
        row.currency = None;
        assert_eq!(order_amount(&row), RawValue::from("49.00"));
        row.amount = Some(RawValue::from("n/a"));
        assert_eq!(order_amount(&row), RawValue::from("--"));
    }

    #[test]
    fn test_status_change_and_delete() {
        let (statuses, status) = recorder();
        let (deletes, delete) = recorder();
        let columns = order_columns(status, delete);
        let row = order();

        assert!(!column(&columns, "status").render(&row).choose("pending"));
        assert!(column(&columns, "status").render(&row).choose("paid"));
        column(&columns, "actions").render(&row).activate();

        assert_eq!(
            *statuses.lock().unwrap(),
            vec![("1042".to_string(), "paid".to_string())]
        );
        assert_eq!(*deletes.lock().unwrap(), vec!["1042".to_string()]);
    }
}
