use super::NAME_WIDTH;
use crate::column::Callback;
use crate::column::ColumnSet;
use crate::column::FavoriteMap;
use crate::column::Field;
use crate::column::factory;
use crate::model::FamilyOffice;
use crate::model::RawValue;

const NAME: Field<FamilyOffice, str> = Field::new("name", |r| r.name.as_deref());
const FIRM_TYPE: Field<FamilyOffice, str> = Field::new("firm_type", |r| r.firm_type.as_deref());
const AUM: Field<FamilyOffice, RawValue> = Field::new("aum", |r| r.aum.as_ref());
const CITY: Field<FamilyOffice, str> = Field::new("city", |r| r.city.as_deref());
const COUNTRY: Field<FamilyOffice, str> = Field::new("country", |r| r.country.as_deref());
const FOUNDED: Field<FamilyOffice, RawValue> =
    Field::new("founded_year", |r| r.founded_year.as_ref());
const WEBSITE: Field<FamilyOffice, str> = Field::new("website", |r| r.website.as_deref());
const LINKEDIN: Field<FamilyOffice, str> = Field::new("linkedin", |r| r.linkedin.as_deref());

/// Favorite, Name, Type, AUM, Location, Founded, Website, LinkedIn.
///
/// `favorites` is the caller's current snapshot; `on_toggle_favorite`
/// receives the id of the office whose star was clicked.
pub fn family_office_columns(
    favorites: FavoriteMap,
    on_toggle_favorite: Callback<String>,
) -> ColumnSet<FamilyOffice> {
    vec![
        factory::favorite_column(favorites, on_toggle_favorite),
        factory::truncated_column("name", NAME, "Name", NAME_WIDTH),
        factory::firm_type_column(FIRM_TYPE),
        factory::aum_column(AUM, None),
        factory::location_column(CITY, COUNTRY, None),
        factory::founded_year_column(FOUNDED, None),
        factory::website_column(WEBSITE, None),
        factory::linkedin_column(LINKEDIN, None),
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
    use crate::columns::test_support::recorder;

    fn office(id: &str) -> FamilyOffice {
        FamilyOffice {
            id: id.to_string(),
            name: Some("Alder Family Office".into()),
            website: Some("alder.ch".into()),
            linkedin: Some("".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_order_and_ids() {
        let (_, on_toggle) = recorder();
        let columns = family_office_columns(FavoriteMap::new(), on_toggle);
        assert_eq!(duplicate_id(&columns), None);
        assert_eq!(
            column_ids(&columns),
            vec![
                "favorite",
                "name",
                "firm_type",
                "aum",
                "location",
                "founded_year",
                "website",
                "linkedin"
            ]
        );
        assert_eq!(
            headers(&columns)[1..],
            ["Name", "Type", "AUM", "Location", "Founded", "Website", "LinkedIn"]
        );
    }

    #[test]
    fn test_favorite_header_counts_snapshot() {
        let (_, on_toggle) = recorder();
        let favorites: FavoriteMap = ["a", "b"].into_iter().collect();
        let columns = family_office_columns(favorites, on_toggle);
        assert_eq!(columns[0].header().label(), "★ 2");
    }

    #[test]
    fn test_toggle_reports_office_id() {
        let (calls, on_toggle) = recorder();
        let favorites: FavoriteMap = ["fo-1"].into_iter().collect();
        let columns = family_office_columns(favorites, on_toggle);

        let starred = columns[0].render(&office("fo-1"));
        assert!(matches!(starred, Fragment::Toggle { active: true, .. }));

        let plain = columns[0].render(&office("fo-2"));
        assert!(matches!(plain, Fragment::Toggle { active: false, .. }));
        plain.activate();

        assert_eq!(*calls.lock().unwrap(), vec!["fo-2".to_string()]);
    }

    #[test]
    fn test_links() {
        let (_, on_toggle) = recorder();
        let columns = family_office_columns(FavoriteMap::new(), on_toggle);
        let row = office("fo-1");

        match column(&columns, "website").render(&row) {
            Fragment::Link { href, label } => {
                assert_eq!(href, "https://alder.ch");
                assert_eq!(label, "alder.ch");
            }
            other => panic!("expected link, got {:?}", other),
        }
        assert!(column(&columns, "linkedin").render(&row).is_empty());
    }
}
