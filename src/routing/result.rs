//! Match results.

use serde::ser::{Serialize, SerializeMap, SerializeStruct, Serializer};

/// Variable bindings in template order. Ids are unique.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Variables(Vec<(String, String)>);

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `id` to `value`, replacing any previous binding.
    pub fn insert(&mut self, id: impl Into<String>, value: impl Into<String>) {
        let id = id.into();
        let value = value.into();
        if let Some(prev) = self.0.iter_mut().find(|(k, _)| *k == id) {
            prev.1 = value;
        } else {
            self.0.push((id, value));
        }
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.0
            .iter()
            .find_map(|(k, v)| if k == id { Some(v.as_str()) } else { None })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for Variables
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut variables = Self::new();
        for (id, value) in iter {
            variables.insert(id, value);
        }
        variables
    }
}

impl Serialize for Variables {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (id, value) in &self.0 {
            map.serialize_entry(id, value)?;
        }
        map.end()
    }
}

/// Outcome of matching a url against a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult {
    NoMatch,
    Matched(Variables),
}

impl MatchResult {
    pub fn is_match(&self) -> bool {
        matches!(self, MatchResult::Matched(_))
    }

    /// Bindings of a successful match.
    pub fn variables(&self) -> Option<&Variables> {
        match self {
            MatchResult::Matched(variables) => Some(variables),
            MatchResult::NoMatch => None,
        }
    }

    /// Value bound to `id`, if the match succeeded and `id` is a template variable.
    pub fn get(&self, id: &str) -> Option<&str> {
        self.variables().and_then(|v| v.get(id))
    }
}

/// Serializes as `{"success":false}` or `{"success":true,"variables":{..}}`.
impl Serialize for MatchResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            MatchResult::NoMatch => {
                let mut state = serializer.serialize_struct("MatchResult", 1)?;
                state.serialize_field("success", &false)?;
                state.end()
            }
            MatchResult::Matched(variables) => {
                let mut state = serializer.serialize_struct("MatchResult", 2)?;
                state.serialize_field("success", &true)?;
                state.serialize_field("variables", variables)?;
                state.end()
            }
        }
    }
}
