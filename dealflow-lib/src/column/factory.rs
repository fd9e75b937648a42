//! Reusable column factories
//!
//! Every factory is generic over the row type and reads only the [`Field`]s
//! it is given. Action columns also take a caller-owned [`Callback`] and
//! require `R: Row` to know which row a click refers to.

use super::Callback;
use super::CellValue;
use super::ColumnDescriptor;
use super::FavoriteMap;
use super::Field;
use super::Fragment;
use super::Header;
use crate::format;
use crate::format::Placeholder;
use crate::model::RawValue;
use crate::model::Row;

/// Reads a text field, treating blanks and sentinels as absent.
fn present<'a, R>(field: &Field<R, str>, row: &'a R) -> Option<&'a str> {
    field
        .get(row)
        .map(str::trim)
        .filter(|s| !crate::model::is_sentinel(s))
}

fn raw_text<R>(field: &Field<R, str>, row: &R) -> CellValue {
    present(field, row)
        .map(|s| RawValue::Text(s.to_string()))
        .unwrap_or(RawValue::Null)
}

/// Plain text; `"--"` when absent.
pub fn text_column<R: 'static>(id: &str, field: Field<R, str>, header: &str) -> ColumnDescriptor<R> {
    ColumnDescriptor::new(id, header, move |row: &R| {
        RawValue::Text(present(&field, row).unwrap_or(Placeholder::Dash.as_str()).to_string())
    })
}

/// Text inside a truncation container of `max_width` characters.
pub fn truncated_column<R: 'static>(
    id: &str,
    field: Field<R, str>,
    header: &str,
    max_width: u16,
) -> ColumnDescriptor<R> {
    text_column(id, field, header)
        .max_width(max_width)
        .class("truncate")
        .cell(move |cell| Fragment::Truncated {
            text: cell.value.to_string(),
            max_width,
        })
}

/// A name preceded by its initials.
pub fn avatar_column<R: 'static>(id: &str, field: Field<R, str>, header: &str) -> ColumnDescriptor<R> {
    ColumnDescriptor::new(id, header, move |row: &R| raw_text(&field, row)).cell(|cell| {
        match cell.value.as_str() {
            Some(name) => Fragment::Avatar {
                initials: format::initials(name),
                label: name.to_string(),
            },
            None => Fragment::text(Placeholder::Dash.as_str()),
        }
    })
}

/// Assets under management (or any amount in millions).
///
/// The id is the field key; the header defaults to `"AUM"`.
pub fn aum_column<R: 'static>(field: Field<R, RawValue>, header: Option<&str>) -> ColumnDescriptor<R> {
    ColumnDescriptor::new(field.key(), header.unwrap_or("AUM"), move |row: &R| {
        RawValue::Text(format::format_aum(field.get(row)))
    })
    .class("numeric")
}

/// A `dd.MM.yyyy` date with the placeholder the caller picked for this column.
pub fn date_column<R: 'static>(
    field: Field<R, RawValue>,
    header: &str,
    placeholder: Placeholder,
) -> ColumnDescriptor<R> {
    ColumnDescriptor::new(field.key(), header, move |row: &R| {
        RawValue::Text(format::format_date(field.get(row), placeholder))
    })
}

/// Founding year as `"1998 y."`; empty when unknown.
pub fn founded_year_column<R: 'static>(
    field: Field<R, RawValue>,
    header: Option<&str>,
) -> ColumnDescriptor<R> {
    ColumnDescriptor::new(field.key(), header.unwrap_or("Founded"), move |row: &R| {
        RawValue::Text(format::format_year(field.get(row)))
    })
}

/// A whole number such as a fund or record count; `"--"` when absent.
pub fn count_column<R: 'static>(field: Field<R, RawValue>, header: &str) -> ColumnDescriptor<R> {
    ColumnDescriptor::new(field.key(), header, move |row: &R| {
        let count = field
            .get(row)
            .and_then(RawValue::as_f64)
            .map(|n| format!("{}", n.round() as i64));
        RawValue::Text(count.unwrap_or_else(|| Placeholder::Dash.to_string()))
    })
    .class("numeric")
}

/// `"City, Country"` from two fields.
pub fn location_column<R: 'static>(
    city: Field<R, str>,
    country: Field<R, str>,
    header: Option<&str>,
) -> ColumnDescriptor<R> {
    ColumnDescriptor::new("location", header.unwrap_or("Location"), move |row: &R| {
        RawValue::Text(format::format_location(city.get(row), country.get(row)))
    })
}

/// A link to the entity's website, labelled with its host.
pub fn website_column<R: 'static>(field: Field<R, str>, header: Option<&str>) -> ColumnDescriptor<R> {
    ColumnDescriptor::new(field.key(), header.unwrap_or("Website"), move |row: &R| {
        raw_text(&field, row)
    })
    .cell(|cell| match cell.value.as_str() {
        Some(url) => Fragment::Link {
            href: normalize_href(url),
            label: display_host(url),
        },
        None => Fragment::Empty,
    })
}

/// A link to a LinkedIn profile.
pub fn linkedin_column<R: 'static>(field: Field<R, str>, header: Option<&str>) -> ColumnDescriptor<R> {
    ColumnDescriptor::new(field.key(), header.unwrap_or("LinkedIn"), move |row: &R| {
        raw_text(&field, row)
    })
    .cell(|cell| match cell.value.as_str() {
        Some(url) => Fragment::Link {
            href: normalize_href(url),
            label: "LinkedIn".to_string(),
        },
        None => Fragment::Empty,
    })
}

/// One badge per comma separated token; nothing when there are no tokens.
pub fn badge_column<R: 'static>(id: &str, field: Field<R, str>, header: &str) -> ColumnDescriptor<R> {
    ColumnDescriptor::new(id, header, move |row: &R| raw_text(&field, row)).cell(|cell| {
        let tokens: Vec<String> = format::split_list(cell.value.as_str())
            .into_iter()
            .filter(|t| !t.is_empty())
            .collect();
        if tokens.is_empty() {
            Fragment::Empty
        } else {
            Fragment::Badges(tokens)
        }
    })
}

pub fn role_column<R: 'static>(field: Field<R, str>) -> ColumnDescriptor<R> {
    badge_column("role", field, "Role")
}

pub fn deal_type_column<R: 'static>(field: Field<R, str>) -> ColumnDescriptor<R> {
    badge_column("deal_type", field, "Deal type")
}

pub fn firm_type_column<R: 'static>(field: Field<R, str>) -> ColumnDescriptor<R> {
    badge_column("firm_type", field, "Type")
}

/// A contact value that is masked until revealed.
///
/// Unrevealed values are masked here as well, whatever the backend sent.
/// Clicking calls `on_reveal` with the row id.
pub fn masked_column<R: Row + 'static>(
    id: &str,
    field: Field<R, str>,
    revealed: Field<R, bool>,
    header: &str,
    on_reveal: Callback<String>,
) -> ColumnDescriptor<R> {
    ColumnDescriptor::new(id, header, move |row: &R| raw_text(&field, row)).cell(move |cell| {
        let Some(value) = cell.value.as_str() else {
            return Fragment::text(Placeholder::Dash.as_str());
        };
        let is_revealed = revealed.get(cell.row).copied().unwrap_or(false);
        Fragment::Masked {
            value: if is_revealed {
                value.to_string()
            } else {
                format::mask_contact(value)
            },
            revealed: is_revealed,
            reveal: on_reveal.bind(cell.row.id()),
        }
    })
}

/// An inline selector (plan, status) reporting `(row id, new value)`.
pub fn select_column<R: Row + 'static>(
    id: &str,
    field: Field<R, str>,
    header: &str,
    options: Vec<String>,
    on_change: Callback<(String, String)>,
) -> ColumnDescriptor<R> {
    ColumnDescriptor::new(id, header, move |row: &R| raw_text(&field, row)).cell(move |cell| {
        Fragment::Select {
            value: cell
                .value
                .as_str()
                .unwrap_or(Placeholder::Dash.as_str())
                .to_string(),
            options: options.clone(),
            on_change: on_change.with_id(cell.row.id()),
        }
    })
}

/// Favorite star. The header shows how many favorites the snapshot holds.
pub fn favorite_column<R: Row + 'static>(
    favorites: FavoriteMap,
    on_toggle: Callback<String>,
) -> ColumnDescriptor<R> {
    let count = favorites.len();
    ColumnDescriptor::new("favorite", "", move |row: &R| {
        RawValue::Bool(favorites.contains(row.id()))
    })
    .with_header(Header::render_with(move || Fragment::text(format!("★ {}", count))))
    .max_width(4)
    .cell(move |cell| Fragment::Toggle {
        active: matches!(cell.value, RawValue::Bool(true)),
        action: on_toggle.bind(cell.row.id()),
    })
}

/// A delete button calling `on_delete` with the row id.
pub fn delete_column<R: Row + 'static>(on_delete: Callback<String>) -> ColumnDescriptor<R> {
    ColumnDescriptor::new("actions", "", |row: &R| RawValue::Text(row.id().to_string())).cell(
        move |cell| Fragment::Action {
            label: "Delete".to_string(),
            action: on_delete.bind(cell.row.id()),
        },
    )
}

/// Adds `https://` to links stored without a scheme.
fn normalize_href(url: &str) -> String {
    if url.contains("://") || url.starts_with("mailto:") {
        url.to_string()
    } else {
        format!("https://{}", url.trim_start_matches('/'))
    }
}

/// `https://www.acme.com/about?x=1` -> `acme.com`
fn display_host(url: &str) -> String {
    let without_scheme = url.split_once("://").map_or(url, |(_, rest)| rest);
    let authority = without_scheme
        .split(['/', '?', '#'])
        .next()
        .unwrap_or(without_scheme);
    authority.trim_start_matches("www.").to_string()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::Mutex;

    use super::*;
    use proptest::prelude::*;

    #[derive(Default)]
    struct Fund {
        id: String,
        name: Option<String>,
        aum: Option<RawValue>,
        roles: Option<String>,
        website: Option<String>,
        email: Option<String>,
        revealed: bool,
        plan: Option<String>,
    }

    impl Row for Fund {
        fn id(&self) -> &str {
            &self.id
        }
    }

    const NAME: Field<Fund, str> = Field::new("name", |r| r.name.as_deref());
    const AUM: Field<Fund, RawValue> = Field::new("aum", |r| r.aum.as_ref());
    const ROLES: Field<Fund, str> = Field::new("roles", |r| r.roles.as_deref());
    const WEBSITE: Field<Fund, str> = Field::new("website", |r| r.website.as_deref());
    const EMAIL: Field<Fund, str> = Field::new("email", |r| r.email.as_deref());
    const REVEALED: Field<Fund, bool> = Field::new("revealed", |r| Some(&r.revealed));
    const PLAN: Field<Fund, str> = Field::new("plan", |r| r.plan.as_deref());

    fn recorder() -> (Arc<Mutex<Vec<String>>>, Callback<String>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = calls.clone();
        (calls, Callback::new(move |id: String| sink.lock().unwrap().push(id)))
    }

    #[test]
    fn test_aum_column_missing_field() {
        let column = aum_column(AUM, None);
        let fund = Fund::default();
        assert_eq!(column.id(), "aum");
        assert_eq!(column.header().label(), "AUM");
        assert_eq!(column.render(&fund).plain_text(), "N/A");
    }

    #[test]
    fn test_aum_column_formats() {
        let column = aum_column(AUM, Some("Assets"));
        let fund = Fund {
            aum: Some(RawValue::from("1500")),
            ..Default::default()
        };
        assert_eq!(column.header().label(), "Assets");
        assert_eq!(column.value(&fund), RawValue::from("1.5B"));
    }

    #[test]
    fn test_badges_keep_order() {
        let column = badge_column("roles", ROLES, "Roles");
        let fund = Fund {
            roles: Some("Lead,Follow".into()),
            ..Default::default()
        };
        match column.render(&fund) {
            Fragment::Badges(tokens) => assert_eq!(tokens, vec!["Lead", "Follow"]),
            other => panic!("expected badges, got {:?}", other),
        }
    }

    #[test]
    fn test_badges_empty_renders_nothing() {
        let column = role_column(ROLES);
        for roles in [None, Some(""), Some(" , ")] {
            let fund = Fund {
                roles: roles.map(str::to_string),
                ..Default::default()
            };
            assert!(column.render(&fund).is_empty());
        }
    }

    #[test]
    fn test_website_link() {
        let column = website_column(WEBSITE, None);
        let fund = Fund {
            website: Some("www.acme.com/".into()),
            ..Default::default()
        };
        match column.render(&fund) {
            Fragment::Link { href, label } => {
                assert_eq!(href, "https://www.acme.com/");
                assert_eq!(label, "acme.com");
            }
            other => panic!("expected link, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_website_renders_no_link() {
        let column = website_column(WEBSITE, None);
        for website in [None, Some(""), Some("   ")] {
            let fund = Fund {
                website: website.map(str::to_string),
                ..Default::default()
            };
            let fragment = column.render(&fund);
            assert!(fragment.is_empty());
            assert!(!fragment.is_link());
        }
    }

    #[test]
    fn test_website_label_is_host_only() {
        let column = website_column(WEBSITE, None);
        for (website, host) in [
            ("https://acme.com/about/", "acme.com"),
            ("http://www.acme.com?ref=crm", "acme.com"),
            ("acme.com#team", "acme.com"),
            ("https://acme.com:8443/", "acme.com:8443"),
        ] {
            let fund = Fund {
                website: Some(website.into()),
                ..Default::default()
            };
            assert_eq!(column.render(&fund).plain_text(), host, "{website}");
        }
    }

    #[test]
    fn test_uppercase_sentinels_render_no_link() {
        let website = website_column(WEBSITE, None);
        let linkedin = linkedin_column(WEBSITE, None);
        for sentinel in ["NULL", "Null", " Undefined ", "UNDEFINED", "-"] {
            let fund = Fund {
                website: Some(sentinel.into()),
                ..Default::default()
            };
            assert!(website.render(&fund).is_empty(), "{sentinel}");
            assert!(!linkedin.render(&fund).is_link(), "{sentinel}");
        }
    }

    #[test]
    fn test_avatar_initials() {
        let column = avatar_column("name", NAME, "Name");
        let fund = Fund {
            name: Some("Jane Doe".into()),
            ..Default::default()
        };
        assert_eq!(column.render(&fund).plain_text(), "(JD) Jane Doe");
        assert_eq!(column.render(&Fund::default()).plain_text(), "--");
    }

    #[test]
    fn test_text_column_placeholder() {
        let column = text_column("name", NAME, "Name");
        assert_eq!(column.render(&Fund::default()).plain_text(), "--");
    }

    #[test]
    fn test_truncated_column_meta() {
        let column = truncated_column("name", NAME, "Name", 12);
        assert_eq!(column.meta().max_width, Some(12));
        let fund = Fund {
            name: Some("A very long fund name".into()),
            ..Default::default()
        };
        match column.render(&fund) {
            Fragment::Truncated { text, max_width } => {
                assert_eq!(text, "A very long fund name");
                assert_eq!(max_width, 12);
            }
            other => panic!("expected truncated, got {:?}", other),
        }
    }

    #[test]
    fn test_masked_column_reveal_wires_id() {
        let (calls, on_reveal) = recorder();
        let column = masked_column("email", EMAIL, REVEALED, "Email", on_reveal);
        let hidden = Fund {
            id: "c-1".into(),
            email: Some("jane@example.com".into()),
            ..Default::default()
        };
        let shown = Fund {
            id: "c-2".into(),
            email: Some("john@example.com".into()),
            revealed: true,
            ..Default::default()
        };

        let hidden_cell = column.render(&hidden);
        assert_eq!(hidden_cell.plain_text(), "j•••@example.com");
        assert!(hidden_cell.activate());

        let shown_cell = column.render(&shown);
        assert_eq!(shown_cell.plain_text(), "john@example.com");
        assert!(!shown_cell.activate());

        assert_eq!(*calls.lock().unwrap(), vec!["c-1"]);
    }

    #[test]
    fn test_select_column_reports_id_and_value() {
        let changes = Arc::new(Mutex::new(Vec::new()));
        let sink = changes.clone();
        let on_change = Callback::new(move |change: (String, String)| sink.lock().unwrap().push(change));
        let column = select_column(
            "plan",
            PLAN,
            "Plan",
            vec!["free".into(), "pro".into()],
            on_change,
        );
        let fund = Fund {
            id: "u-9".into(),
            plan: Some("free".into()),
            ..Default::default()
        };

        assert!(column.render(&fund).choose("pro"));
        assert_eq!(
            *changes.lock().unwrap(),
            vec![("u-9".to_string(), "pro".to_string())]
        );
    }

    #[test]
    fn test_favorite_column() {
        let (calls, on_toggle) = recorder();
        let favorites: FavoriteMap = ["f-1"].into_iter().collect();
        let column = favorite_column::<Fund>(favorites, on_toggle);

        let starred = Fund {
            id: "f-1".into(),
            ..Default::default()
        };
        let plain = Fund {
            id: "f-2".into(),
            ..Default::default()
        };

        assert_eq!(column.header().label(), "★ 1");
        assert_eq!(column.render(&starred).plain_text(), "★");
        assert_eq!(column.render(&plain).plain_text(), "☆");
        assert!(column.render(&plain).activate());
        assert_eq!(*calls.lock().unwrap(), vec!["f-2"]);
    }

    #[test]
    fn test_delete_column() {
        let (calls, on_delete) = recorder();
        let column = delete_column::<Fund>(on_delete);
        let fund = Fund {
            id: "d-3".into(),
            ..Default::default()
        };
        assert_eq!(column.render(&fund).plain_text(), "[Delete]");
        assert!(column.render(&fund).activate());
        assert_eq!(*calls.lock().unwrap(), vec!["d-3"]);
    }

    #[test]
    fn test_same_parameters_same_behavior() {
        let first = aum_column(AUM, None);
        let second = aum_column(AUM, None);
        let fund = Fund {
            aum: Some(RawValue::from(750)),
            ..Default::default()
        };
        assert_eq!(first.id(), second.id());
        assert_eq!(first.header().label(), second.header().label());
        assert_eq!(first.value(&fund), second.value(&fund));
    }

    fn raw_value() -> impl Strategy<Value = Option<RawValue>> {
        prop_oneof![
            Just(None),
            Just(Some(RawValue::Null)),
            any::<bool>().prop_map(|b| Some(RawValue::Bool(b))),
            any::<f64>().prop_map(|n| Some(RawValue::Number(n))),
            ".{0,12}".prop_map(|s| Some(RawValue::Text(s))),
        ]
    }

    proptest! {
        #[test]
        fn same_factory_same_output(
            name in proptest::option::of(".{0,16}"),
            aum in raw_value(),
            roles in proptest::option::of("[A-Za-z, ]{0,16}"),
            website in proptest::option::of("[a-z./:]{0,16}"),
        ) {
            let fund = Fund { name, aum, roles, website, ..Default::default() };
            let pairs = [
                (text_column("name", NAME, "Name"), text_column("name", NAME, "Name")),
                (avatar_column("name", NAME, "Name"), avatar_column("name", NAME, "Name")),
                (aum_column(AUM, None), aum_column(AUM, None)),
                (badge_column("roles", ROLES, "Roles"), badge_column("roles", ROLES, "Roles")),
                (website_column(WEBSITE, None), website_column(WEBSITE, None)),
            ];
            for (first, second) in &pairs {
                prop_assert_eq!(first.id(), second.id());
                prop_assert_eq!(first.header().label(), second.header().label());
                prop_assert_eq!(first.value(&fund), second.value(&fund));
                prop_assert_eq!(first.render(&fund).plain_text(), second.render(&fund).plain_text());
            }
        }
    }
}
