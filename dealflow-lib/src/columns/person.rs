use crate::column::ColumnSet;
use crate::column::Field;
use crate::column::factory;
use crate::model::Person;

const FULL_NAME: Field<Person, str> = Field::new("full_name", |r| r.full_name.as_deref());
const TITLE: Field<Person, str> = Field::new("title", |r| r.title.as_deref());
const COMPANY: Field<Person, str> = Field::new("company", |r| r.company.as_deref());
const CITY: Field<Person, str> = Field::new("city", |r| r.city.as_deref());
const COUNTRY: Field<Person, str> = Field::new("country", |r| r.country.as_deref());
const LINKEDIN: Field<Person, str> = Field::new("linkedin", |r| r.linkedin.as_deref());

/// Name, Title, Company, Location, LinkedIn.
pub fn person_columns() -> ColumnSet<Person> {
    vec![
        factory::avatar_column("full_name", FULL_NAME, "Name"),
        factory::text_column("title", TITLE, "Title"),
        factory::text_column("company", COMPANY, "Company"),
        factory::location_column(CITY, COUNTRY, None),
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

    #[test]
    fn test_order_and_ids() {
        let columns = person_columns();
        assert_eq!(duplicate_id(&columns), None);
        assert_eq!(
            column_ids(&columns),
            vec!["full_name", "title", "company", "location", "linkedin"]
        );
        assert_eq!(
            headers(&columns),
            vec!["Name", "Title", "Company", "Location", "LinkedIn"]
        );
    }

    #[test]
    fn test_person_row() {
        let columns = person_columns();
        let person = Person {
            id: "p-1".into(),
            full_name: Some("Jane Doe".into()),
            linkedin: Some("   ".into()),
            ..Default::default()
        };
        assert!(matches!(
            column(&columns, "full_name").render(&person),
            Fragment::Avatar { ref initials, .. } if initials == "JD"
        ));
        assert_eq!(column(&columns, "title").render(&person).plain_text(), "--");
        assert!(column(&columns, "linkedin").render(&person).is_empty());
    }
}
