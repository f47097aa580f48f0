//! Literal pools for names, places and words.
//!
//! A [`DictionaryProvider`] answers "give me one random X" for a
//! [`Category`]. [`FakeDictionary`] is backed by the `fake` crate's English
//! data; [`StaticDictionary`] holds caller-supplied lists and loads from JSON.

use std::collections::HashMap;

use fake::Fake;
use fake::faker::address::en::{CityName, CountryName, StateName, StreetName, ZipCode};
use fake::faker::company::en::CompanyName;
use fake::faker::job::en::Title;
use fake::faker::lorem::en::Word;
use fake::faker::name::en::{FirstName, LastName, Name};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::entropy::EntropySource;
use crate::error::SynthesisError;

/// A bounded pool of literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    FirstName,
    LastName,
    FullName,
    Street,
    City,
    ZipCode,
    State,
    Country,
    JobTitle,
    Company,
    Word,
}

impl Category {
    pub const ALL: [Category; 11] = [
        Category::FirstName,
        Category::LastName,
        Category::FullName,
        Category::Street,
        Category::City,
        Category::ZipCode,
        Category::State,
        Category::Country,
        Category::JobTitle,
        Category::Company,
        Category::Word,
    ];
}

/// Source of random literals.
pub trait DictionaryProvider {
    /// One random literal of `category`, or `None` if the provider has none.
    fn lookup(&self, category: Category, rng: &mut EntropySource) -> Option<String>;
}

/// Every category, from the `fake` crate's English locale.
#[derive(Debug, Clone, Copy, Default)]
pub struct FakeDictionary;

impl DictionaryProvider for FakeDictionary {
    fn lookup(&self, category: Category, rng: &mut EntropySource) -> Option<String> {
        let value: String = match category {
            Category::FirstName => FirstName().fake_with_rng(rng),
            Category::LastName => LastName().fake_with_rng(rng),
            Category::FullName => Name().fake_with_rng(rng),
            Category::Street => StreetName().fake_with_rng(rng),
            Category::City => CityName().fake_with_rng(rng),
            Category::ZipCode => ZipCode().fake_with_rng(rng),
            Category::State => StateName().fake_with_rng(rng),
            Category::Country => CountryName().fake_with_rng(rng),
            Category::JobTitle => Title().fake_with_rng(rng),
            Category::Company => CompanyName().fake_with_rng(rng),
            Category::Word => Word().fake_with_rng(rng),
        };
        Some(value)
    }
}

/// Caller-supplied lists keyed by category.
///
/// ```json
/// { "first_name": ["Ada", "Grace"], "city": ["Vienna"] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StaticDictionary {
    entries: HashMap<Category, Vec<String>>,
}

impl StaticDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a category → list mapping.
    pub fn from_json(json: &str) -> Result<Self, SynthesisError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Adds literals to a category.
    pub fn with_entries<I, S>(mut self, category: Category, literals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries
            .entry(category)
            .or_default()
            .extend(literals.into_iter().map(Into::into));
        self
    }

    /// Number of literals stored for `category`.
    pub fn len(&self, category: Category) -> usize {
        self.entries.get(&category).map_or(0, Vec::len)
    }
}

impl DictionaryProvider for StaticDictionary {
    fn lookup(&self, category: Category, rng: &mut EntropySource) -> Option<String> {
        let found = self
            .entries
            .get(&category)
            .and_then(|literals| literals.choose(rng))
            .cloned();
        if found.is_none() {
            trace!(?category, "No literals for category");
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fake_dictionary_covers_every_category() {
        let mut rng = EntropySource::new();
        for category in Category::ALL {
            let value = FakeDictionary.lookup(category, &mut rng).unwrap();
            assert!(!value.is_empty(), "{category:?} produced an empty literal");
        }
    }

    #[test]
    fn test_static_dictionary_from_json() {
        let dict =
            StaticDictionary::from_json(r#"{ "first_name": ["Ada", "Grace"], "city": ["Vienna"] }"#)
                .unwrap();
        let mut rng = EntropySource::new();
        let name = dict.lookup(Category::FirstName, &mut rng).unwrap();
        assert!(name == "Ada" || name == "Grace");
        assert_eq!(dict.lookup(Category::City, &mut rng).as_deref(), Some("Vienna"));
        assert_eq!(dict.lookup(Category::Street, &mut rng), None);
    }

    #[test]
    fn test_static_dictionary_builder() {
        let dict = StaticDictionary::new()
            .with_entries(Category::Word, ["alpha", "beta"])
            .with_entries(Category::Word, vec![String::from("gamma")])
            .with_entries(Category::Company, Vec::<String>::new());
        assert_eq!(dict.len(Category::Word), 3);
        let mut rng = EntropySource::seeded(1);
        assert_eq!(dict.lookup(Category::Company, &mut rng), None);
    }

    #[test]
    fn test_unknown_category_in_json_is_config_error() {
        let err = StaticDictionary::from_json(r#"{ "planet": ["Mars"] }"#).unwrap_err();
        assert!(matches!(err, SynthesisError::Config(_)));
    }
}
