// tandem/src/core/locals.rs

//! The `Locals` accumulator: a string-keyed, type-erased mapping built up by
//! middleware contributions over the course of a single action invocation.
//!
//! Merging is shallow: contributions overwrite existing keys wholesale, value
//! by value. There is no recursive merging of nested structures.

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

/// A single type-erased local value. Values are reference-counted so a
/// `Locals` snapshot handed to a middleware step is cheap to produce.
pub type LocalValue = Arc<dyn Any + Send + Sync>;

/// The accumulator of named values contributed by middleware steps.
///
/// A fresh, empty `Locals` is created for every action invocation. Each
/// middleware step receives a snapshot of the accumulator so far and may
/// return a `Locals` of its own as a contribution; contributions are merged
/// in declaration order with last-write-wins semantics.
///
/// Cloning a `Locals` clones the map of `Arc` handles, not the values.
#[derive(Clone, Default)]
pub struct Locals {
  values: HashMap<String, LocalValue>,
}

impl Locals {
  pub fn new() -> Self {
    Self::default()
  }

  /// Inserts a value under `key`, replacing any previous value.
  ///
  /// Panics if `key` is empty. An empty key is a programming error in the
  /// contributing step, not a runtime condition, so this follows the crate's
  /// setup-error policy rather than returning a `Result`.
  pub fn insert<T: Any + Send + Sync>(&mut self, key: impl Into<String>, value: T) {
    let key: String = key.into();
    if key.is_empty() {
      panic!("Tandem setup error: locals keys must be non-empty.");
    }
    self.values.insert(key, Arc::new(value));
  }

  /// Chainable variant of [`insert`](Self::insert), convenient for building
  /// contributions inline: `Locals::new().with("count", 1_i64)`.
  pub fn with<T: Any + Send + Sync>(mut self, key: impl Into<String>, value: T) -> Self {
    self.insert(key, value);
    self
  }

  /// Returns a reference to the value under `key`, if present and of type `T`.
  ///
  /// A present value of a different type yields `None`, same as an absent key.
  pub fn get<T: Any + Send + Sync>(&self, key: &str) -> Option<&T> {
    self.values.get(key)?.downcast_ref::<T>()
  }

  pub fn contains_key(&self, key: &str) -> bool {
    self.values.contains_key(key)
  }

  pub fn len(&self) -> usize {
    self.values.len()
  }

  pub fn is_empty(&self) -> bool {
    self.values.is_empty()
  }

  /// Iterates over the keys currently present, in no particular order.
  pub fn keys(&self) -> impl Iterator<Item = &str> {
    self.values.keys().map(String::as_str)
  }

  /// Shallow-merges `contribution` into `self`: every key in the contribution
  /// is set on `self`, overwriting an existing value for the same key. Keys
  /// not mentioned by the contribution are left untouched.
  ///
  /// This is the single merge primitive the action runtime uses when folding
  /// middleware contributions into the accumulator.
  pub fn merge(&mut self, contribution: Locals) {
    self.values.extend(contribution.values);
  }
}

impl std::fmt::Debug for Locals {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    // Values are type-erased; keys are the useful part.
    f.debug_struct("Locals")
      .field("keys", &self.values.keys().collect::<Vec<_>>())
      .finish()
  }
}
