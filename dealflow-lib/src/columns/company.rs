use super::NAME_WIDTH;
use crate::column::ColumnSet;
use crate::column::Field;
use crate::column::factory;
use crate::model::Company;
use crate::model::RawValue;

const NAME: Field<Company, str> = Field::new("name", |r| r.name.as_deref());
const INDUSTRY: Field<Company, str> = Field::new("industry", |r| r.industry.as_deref());
const CITY: Field<Company, str> = Field::new("city", |r| r.city.as_deref());
const COUNTRY: Field<Company, str> = Field::new("country", |r| r.country.as_deref());
const FOUNDED: Field<Company, RawValue> = Field::new("founded_year", |r| r.founded_year.as_ref());
const WEBSITE: Field<Company, str> = Field::new("website", |r| r.website.as_deref());
const LINKEDIN: Field<Company, str> = Field::new("linkedin", |r| r.linkedin.as_deref());

/// Name, Industry, Location, Founded, Website, LinkedIn.
pub fn company_columns() -> ColumnSet<Company> {
    vec![
        factory::truncated_column("name", NAME, "Name", NAME_WIDTH),
        factory::badge_column("industry", INDUSTRY, "Industry"),
        factory::location_column(CITY, COUNTRY, None),
        factory::founded_year_column(FOUNDED, None),
        factory::website_column(WEBSITE, None),
        factory::linkedin_column(LINKEDIN, None),
    ]
}
