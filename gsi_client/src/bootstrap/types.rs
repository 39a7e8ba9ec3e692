use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Configuration mapping passed to the provider.
///
/// Built fresh per call from mandatory fields, fixed defaults and caller
/// overrides, merged right-biased: later sources overwrite earlier keys.
/// Never mutated after construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigMap(Map<String, Value>);

impl ConfigMap {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Right-biased union: every key of `overlay` overwrites the same key
    /// in `self`; keys only in `self` are kept.
    pub fn merge(mut self, overlay: ConfigMap) -> Self {
        for (key, value) in overlay.0 {
            self.0.insert(key, value);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for ConfigMap
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}
