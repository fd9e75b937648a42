//! Renderer-neutral cell content

use super::Action;
use super::Callback;

/// What a cell (or a header) shows.
///
/// Fragments describe presentation without committing to a surface: the web
/// table turns them into elements, [`TextTable`](crate::render::TextTable)
/// into plain text. Interactive variants carry the callbacks they were wired
/// with.
#[derive(Debug, Clone)]
pub enum Fragment {
    /// Nothing is rendered, not even an empty element.
    Empty,
    /// Plain text.
    Text(String),
    /// One badge per token, in the given order.
    Badges(Vec<String>),
    /// An anchor that opens `href` in a new browsing context.
    Link { href: String, label: String },
    /// Text inside a container that cuts it at `max_width` columns.
    Truncated { text: String, max_width: u16 },
    /// Initials bubble followed by the full label.
    Avatar { initials: String, label: String },
    /// A contact value that stays masked until `reveal` runs.
    Masked {
        value: String,
        revealed: bool,
        reveal: Action,
    },
    /// Inline selector; choosing an option calls `on_change` with it.
    Select {
        value: String,
        options: Vec<String>,
        on_change: Callback<String>,
    },
    /// Two-state toggle such as a favorite star.
    Toggle { active: bool, action: Action },
    /// A button.
    Action { label: String, action: Action },
}

impl Fragment {
    /// Creates a text fragment.
    pub fn text(text: impl Into<String>) -> Self {
        Fragment::Text(text.into())
    }

    /// Returns `true` for [`Fragment::Empty`].
    pub fn is_empty(&self) -> bool {
        matches!(self, Fragment::Empty)
    }

    /// Returns `true` if the fragment renders an anchor.
    pub fn is_link(&self) -> bool {
        matches!(self, Fragment::Link { .. })
    }

    /// Flattens the fragment into text for surfaces without interaction.
    pub fn plain_text(&self) -> String {
        match self {
            Fragment::Empty => String::new(),
            Fragment::Text(text) => text.clone(),
            Fragment::Badges(tokens) => tokens
                .iter()
                .map(|t| format!("[{}]", t))
                .collect::<Vec<_>>()
                .join(" "),
            Fragment::Link { label, .. } => label.clone(),
            Fragment::Truncated { text, .. } => text.clone(),
            Fragment::Avatar { initials, label } if initials.is_empty() => label.clone(),
            Fragment::Avatar { initials, label } => format!("({}) {}", initials, label),
            Fragment::Masked { value, .. } => value.clone(),
            Fragment::Select { value, .. } => format!("{} ▾", value),
            Fragment::Toggle { active: true, .. } => "★".to_string(),
            Fragment::Toggle { active: false, .. } => "☆".to_string(),
            Fragment::Action { label, .. } => format!("[{}]", label),
        }
    }

    /// Triggers the fragment's action, as a click would.
    ///
    /// Returns `false` if the fragment has no action, or if it is an already
    /// revealed masked value.
    pub fn activate(&self) -> bool {
        match self {
            Fragment::Masked {
                revealed: false,
                reveal,
                ..
            } => {
                reveal.fire();
                true
            }
            Fragment::Toggle { action, .. } | Fragment::Action { action, .. } => {
                action.fire();
                true
            }
            _ => false,
        }
    }

    /// Picks an option of a [`Fragment::Select`].
    ///
    /// Returns `false` (and calls nothing) if this is not a selector, the
    /// option is unknown, or it is already the current value.
    pub fn choose(&self, option: &str) -> bool {
        match self {
            Fragment::Select {
                value,
                options,
                on_change,
            } if value != option && options.iter().any(|o| o == option) => {
                on_change.emit(option.to_string());
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::Mutex;

    use super::*;

    #[test]
    fn test_plain_text() {
        assert_eq!(Fragment::Empty.plain_text(), "");
        assert_eq!(
            Fragment::Badges(vec!["Lead".into(), "Follow".into()]).plain_text(),
            "[Lead] [Follow]"
        );
        assert_eq!(
            Fragment::Avatar {
                initials: "JD".into(),
                label: "Jane Doe".into()
            }
            .plain_text(),
            "(JD) Jane Doe"
        );
    }

    #[test]
    fn test_revealed_value_does_not_fire_again() {
        let fired = Arc::new(Mutex::new(0));
        let sink = fired.clone();
        let reveal = Action::new(move || *sink.lock().unwrap() += 1);

        let masked = Fragment::Masked {
            value: "j•••@x.com".into(),
            revealed: false,
            reveal: reveal.clone(),
        };
        let revealed = Fragment::Masked {
            value: "jane@x.com".into(),
            revealed: true,
            reveal,
        };

        assert!(masked.activate());
        assert!(!revealed.activate());
        assert_eq!(*fired.lock().unwrap(), 1);
    }

    #[test]
    fn test_choose_ignores_unknown_and_current() {
        let chosen = Arc::new(Mutex::new(Vec::new()));
        let sink = chosen.clone();
        let select = Fragment::Select {
            value: "free".into(),
            options: vec!["free".into(), "pro".into()],
            on_change: Callback::new(move |v: String| sink.lock().unwrap().push(v)),
        };

        assert!(!select.choose("gold"));
        assert!(!select.choose("free"));
        assert!(select.choose("pro"));
        assert_eq!(*chosen.lock().unwrap(), vec!["pro"]);
    }
}
