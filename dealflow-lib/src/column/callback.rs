//! Callbacks injected by page containers

use std::collections::HashSet;
use std::sync::Arc;

/// A caller-owned handler, e.g. "delete this row" or "change this plan".
///
/// Page containers create callbacks around their own state and hand them to
/// the column sets; columns only wire them into cells. `Callback<String>`
/// carries a row identifier, `Callback<(String, String)>` an identifier and
/// the newly chosen value.
///
/// # Example
///
/// ```
/// use std::sync::{Arc, Mutex};
/// use dealflow_lib::column::Callback;
///
/// let deleted = Arc::new(Mutex::new(Vec::new()));
/// let sink = deleted.clone();
/// let on_delete = Callback::new(move |id: String| sink.lock().unwrap().push(id));
///
/// on_delete.bind("42").fire();
/// assert_eq!(*deleted.lock().unwrap(), vec!["42".to_string()]);
/// ```
pub struct Callback<A> {
    handler: Arc<dyn Fn(A) + Send + Sync>,
}

impl<A> Callback<A> {
    /// Wraps a handler.
    pub fn new(handler: impl Fn(A) + Send + Sync + 'static) -> Self {
        Self {
            handler: Arc::new(handler),
        }
    }

    /// Invokes the handler.
    pub fn emit(&self, args: A) {
        (self.handler)(args)
    }
}

impl<A: Clone + Send + Sync + 'static> Callback<A> {
    /// Binds the arguments, producing a zero-argument [`Action`].
    pub fn bind(&self, args: impl Into<A>) -> Action {
        let handler = self.handler.clone();
        let args = args.into();
        Action::new(move || handler(args.clone()))
    }
}

impl<V: 'static> Callback<(String, V)> {
    /// Fixes the row identifier, leaving the new value open.
    pub fn with_id(&self, id: impl Into<String>) -> Callback<V> {
        let handler = self.handler.clone();
        let id = id.into();
        Callback::new(move |value: V| handler((id.clone(), value)))
    }
}

impl<A> Clone for Callback<A> {
    fn clone(&self) -> Self {
        Self {
            handler: self.handler.clone(),
        }
    }
}

impl<A> std::fmt::Debug for Callback<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Callback(..)")
    }
}

/// A callback with its arguments already bound, ready to attach to a button.
#[derive(Clone)]
pub struct Action {
    handler: Arc<dyn Fn() + Send + Sync>,
}

impl Action {
    pub fn new(handler: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            handler: Arc::new(handler),
        }
    }

    /// Runs the bound callback.
    pub fn fire(&self) {
        (self.handler)()
    }
}

impl std::fmt::Debug for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Action(..)")
    }
}

/// Snapshot of the identifiers a user marked as favorite.
///
/// Owned by the page container and passed by value into the column set on
/// every render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoriteMap {
    ids: Arc<HashSet<String>>,
}

impl FavoriteMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the row is a favorite.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Number of favorites.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Returns a new snapshot with `id` toggled.
    pub fn toggled(&self, id: &str) -> Self {
        let mut ids = (*self.ids).clone();
        if !ids.remove(id) {
            ids.insert(id.to_string());
        }
        Self { ids: Arc::new(ids) }
    }
}

impl<S: Into<String>> FromIterator<S> for FavoriteMap {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            ids: Arc::new(iter.into_iter().map(Into::into).collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[test]
    fn test_with_id_passes_id_and_value() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let on_change = Callback::new(move |(id, value): (String, String)| {
            sink.lock().unwrap().push(format!("{id}={value}"));
        });

        on_change.with_id("u1").emit("pro".to_string());
        on_change.with_id("u2").emit("free".to_string());

        assert_eq!(*seen.lock().unwrap(), vec!["u1=pro", "u2=free"]);
    }

    #[test]
    fn test_bound_action_fires_every_time() {
        let count = Arc::new(Mutex::new(0));
        let sink = count.clone();
        let action = Callback::new(move |_: String| *sink.lock().unwrap() += 1).bind("x");

        action.fire();
        action.clone().fire();

        assert_eq!(*count.lock().unwrap(), 2);
    }

    #[test]
    fn test_favorite_map_toggle_is_persistent() {
        let favorites: FavoriteMap = ["a", "b"].into_iter().collect();
        let toggled = favorites.toggled("a").toggled("c");

        assert!(favorites.contains("a"));
        assert!(!toggled.contains("a"));
        assert!(toggled.contains("c"));
        assert_eq!(toggled.len(), 2);
    }
}
