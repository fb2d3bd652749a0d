//! The data a template is rendered against.

use crate::error::NamingError;

/// An ordered placeholder-name → value mapping. Names are stored in canonical
/// casing and looked up case-insensitively, matching how templates are
/// matched. Insertion order is preserved so substitution and listings are
/// deterministic.
#[derive(Debug, Clone, Default)]
pub struct DataSource {
    entries: Vec<(String, String)>,
}

impl DataSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a value. Overwriting matches the existing name
    /// case-insensitively but keeps its original canonical casing.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self
            .entries
            .iter_mut()
            .find(|(n, _)| n.eq_ignore_ascii_case(&name))
        {
            Some((_, v)) => *v = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Insert an override given as `KEY=VALUE` text.
    pub fn set_pair(&mut self, pair: &str) -> Result<(), NamingError> {
        match pair.split_once('=') {
            Some((name, value)) if !name.trim().is_empty() => {
                self.set(name.trim(), value);
                Ok(())
            }
            _ => Err(NamingError::InvalidDataPair(pair.to_string())),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The fixed illustrative dataset used for template previews. A fresh
    /// value per call so callers can tweak it; the engine never reads any
    /// global copy.
    pub fn sample() -> Self {
        let mut data = Self::new();
        data.set("Series", "One Piece");
        data.set("Chapter", "1089");
        data.set("Volume", "106");
        data.set("Title", "Seeking the Flame");
        data.set("Provider", "MangaDex");
        data.set("Scanlator", "TCB Scans");
        data.set("Language", "en");
        data.set("Year", "2023");
        data.set("Month", "08");
        data.set("Day", "21");
        data.set("Type", "Manga");
        data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn lookup_is_case_insensitive() {
        let data = DataSource::sample();
        assert_eq!(data.get("series"), Some("One Piece"));
        assert_eq!(data.get("SERIES"), Some("One Piece"));
        assert_eq!(data.get("Unknown"), None);
    }

    #[test]
    fn set_overwrites_case_insensitively_and_keeps_order() {
        let mut data = DataSource::new();
        data.set("Series", "A");
        data.set("Chapter", "1");
        data.set("series", "B");
        assert_eq!(data.len(), 2);
        let first = data.iter().next().unwrap();
        assert_eq!(first, ("Series", "B"));
    }

    #[test]
    fn set_pair_splits_on_first_equals() {
        let mut data = DataSource::new();
        data.set_pair("Title=a = b").unwrap();
        assert_eq!(data.get("Title"), Some("a = b"));
        assert!(data.set_pair("no-separator").is_err());
        assert!(data.set_pair("=value").is_err());
    }

    #[test]
    fn sample_is_a_fresh_value_each_call() {
        let mut a = DataSource::sample();
        a.set("Series", "edited");
        let b = DataSource::sample();
        assert_eq!(b.get("Series"), Some("One Piece"));
    }
}
