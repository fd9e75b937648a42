use super::NAME_WIDTH;
use crate::column::ColumnSet;
use crate::column::Field;
use crate::column::factory;
use crate::model::Investor;
use crate::model::RawValue;

const NAME: Field<Investor, str> = Field::new("name", |r| r.name.as_deref());
const FIRM_TYPE: Field<Investor, str> = Field::new("firm_type", |r| r.firm_type.as_deref());
const AUM: Field<Investor, RawValue> = Field::new("aum", |r| r.aum.as_ref());
const CITY: Field<Investor, str> = Field::new("city", |r| r.city.as_deref());
const COUNTRY: Field<Investor, str> = Field::new("country", |r| r.country.as_deref());
const FOUNDED: Field<Investor, RawValue> = Field::new("founded_year", |r| r.founded_year.as_ref());
const FUNDS: Field<Investor, RawValue> = Field::new("funds", |r| r.funds.as_ref());

/// Name, Type, AUM, Location, Founded, Funds.
pub fn investor_columns() -> ColumnSet<Investor> {
    vec![
        factory::truncated_column("name", NAME, "Name", NAME_WIDTH),
        factory::firm_type_column(FIRM_TYPE),
        factory::aum_column(AUM, None),
        factory::location_column(CITY, COUNTRY, None),
        factory::founded_year_column(FOUNDED, None),
        factory::count_column(FUNDS, "Funds"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::Fragment;
    use crate::column::column_ids;
    use crate::column::duplicate_id;
    use crate::columns::test_support::column;
    use crate::columns::test_support::headers;

    fn sample() -> Investor {
        serde_json::from_str(
            r#"{
                "id": 17,
                "name": "Northwind Capital",
                "firm_type": "VC,PE",
                "aum": "2500",
                "city": "Zurich",
                "country": "Switzerland",
                "founded_year": 1998,
                "funds": "4"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_order_and_ids() {
        let columns = investor_columns();
        assert_eq!(duplicate_id(&columns), None);
        assert_eq!(
            column_ids(&columns),
            vec!["name", "firm_type", "aum", "location", "founded_year", "funds"]
        );
        assert_eq!(
            headers(&columns),
            vec!["Name", "Type", "AUM", "Location", "Founded", "Funds"]
        );
    }

    #[test]
    fn test_renders_sample_row() {
        let columns = investor_columns();
        let investor = sample();
        let cells: Vec<String> = columns
            .iter()
            .map(|c| c.render(&investor).plain_text())
            .collect();
        assert_eq!(
            cells,
            vec![
                "Northwind Capital",
                "[VC] [PE]",
                "2.5B",
                "Zurich, Switzerland",
                "1998 y.",
                "4"
            ]
        );
    }

    #[test]
    fn test_missing_fields_degrade() {
        let columns = investor_columns();
        let investor: Investor = serde_json::from_str(r#"{"id": "x", "aum": null}"#).unwrap();
        assert_eq!(column(&columns, "aum").render(&investor).plain_text(), "N/A");
        assert!(column(&columns, "firm_type").render(&investor).is_empty());
        assert_eq!(column(&columns, "location").render(&investor).plain_text(), "--");
        assert_eq!(column(&columns, "founded_year").render(&investor).plain_text(), "");
        assert_eq!(column(&columns, "funds").render(&investor).plain_text(), "--");
    }

    #[test]
    fn test_aum_in_millions() {
        let columns = investor_columns();
        let investor = Investor {
            aum: Some(RawValue::from(750)),
            ..Default::default()
        };
        assert!(matches!(
            column(&columns, "aum").render(&investor),
            Fragment::Text(ref t) if t == "750.0M"
        ));
    }

    #[test]
    fn test_rebuilt_sets_agree() {
        let investor = sample();
        for (a, b) in investor_columns().iter().zip(investor_columns().iter()) {
            assert_eq!(a.id(), b.id());
            assert_eq!(a.value(&investor), b.value(&investor));
        }
    }
}
