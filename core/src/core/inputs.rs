// stagechain/src/core/inputs.rs

//! Named string parameters supplied once per pipeline run.

use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StageInputs {
  values: BTreeMap<String, String>,
}

impl StageInputs {
  pub fn new() -> Self {
    Self::default()
  }

  /// Builder-style insert. A later value for the same name replaces the earlier one.
  pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
    self.insert(name, value);
    self
  }

  pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
    self.values.insert(name.into(), value.into());
  }

  pub fn get(&self, name: &str) -> Option<&str> {
    self.values.get(name).map(String::as_str)
  }

  /// True when the input exists and holds something other than whitespace.
  pub fn is_filled(&self, name: &str) -> bool {
    self.get(name).is_some_and(|v| !v.trim().is_empty())
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
    self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
  }

  pub fn len(&self) -> usize {
    self.values.len()
  }

  pub fn is_empty(&self) -> bool {
    self.values.is_empty()
  }

  pub(crate) fn as_json(&self) -> serde_json::Value {
    serde_json::Value::Object(
      self
        .values
        .iter()
        .map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
        .collect(),
    )
  }
}

impl<K, V> FromIterator<(K, V)> for StageInputs
where
  K: Into<String>,
  V: Into<String>,
{
  fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
    let mut inputs = StageInputs::new();
    for (k, v) in iter {
      inputs.insert(k, v);
    }
    inputs
  }
}
