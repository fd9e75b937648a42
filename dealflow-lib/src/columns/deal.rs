use crate::column::ColumnSet;
use crate::column::Field;
use crate::column::factory;
use crate::format::Placeholder;
use crate::model::Deal;
use crate::model::RawValue;

const COMPANY: Field<Deal, str> = Field::new("company_name", |r| r.company_name.as_deref());
const DEAL_TYPE: Field<Deal, str> = Field::new("deal_type", |r| r.deal_type.as_deref());
const AMOUNT: Field<Deal, RawValue> = Field::new("amount", |r| r.amount.as_ref());
const ANNOUNCED_AT: Field<Deal, RawValue> = Field::new("announced_at", |r| r.announced_at.as_ref());
const INVESTORS: Field<Deal, str> = Field::new("investors", |r| r.investors.as_deref());
const WEBSITE: Field<Deal, str> = Field::new("website", |r| r.website.as_deref());

/// Company, Deal type, Amount, Date, Investors, Website.
pub fn deal_columns() -> ColumnSet<Deal> {
    vec![
        factory::text_column("company_name", COMPANY, "Company"),
        factory::deal_type_column(DEAL_TYPE),
        factory::aum_column(AMOUNT, Some("Amount")),
        factory::date_column(ANNOUNCED_AT, "Date", Placeholder::NotAvailable),
        factory::badge_column("investors", INVESTORS, "Investors"),
        factory::website_column(WEBSITE, None),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::column_ids;
    use crate::column::duplicate_id;
    use crate::columns::test_support::headers;

    #[test]
    fn test_order_and_ids() {
        let columns = deal_columns();
        assert_eq!(duplicate_id(&columns), None);
        assert_eq!(
            column_ids(&columns),
            vec!["company_name", "deal_type", "amount", "announced_at", "investors", "website"]
        );
        assert_eq!(
            headers(&columns),
            vec!["Company", "Deal type", "Amount", "Date", "Investors", "Website"]
        );
    }

    #[test]
    fn test_renders_sample_row() {
        let deal: Deal = serde_json::from_str(
            r#"{
                "id": "d-1",
                "company_name": "Helio Labs",
                "deal_type": "Series A",
                "amount": 12.5,
                "announced_at": "2023-07-14T08:00:00.000Z",
                "investors": "Northwind, Alder",
                "website": "https://helio.example"
            }"#,
        )
        .unwrap();
        let cells: Vec<String> = deal_columns()
            .iter()
            .map(|c| c.render(&deal).plain_text())
            .collect();
        assert_eq!(
            cells,
            vec![
                "Helio Labs",
                "[Series A]",
                "12.5M",
                "14.07.2023",
                "[Northwind] [Alder]",
                "helio.example"
            ]
        );
    }

    #[test]
    fn test_empty_deal() {
        let deal = Deal::default();
        let cells: Vec<String> = deal_columns()
            .iter()
            .map(|c| c.render(&deal).plain_text())
            .collect();
        assert_eq!(cells, vec!["--", "", "N/A", "N/A", "", ""]);
    }
}
