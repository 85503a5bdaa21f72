// タイトル／固有名の変換テーブル
use crate::model::Gender;
use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Localized variants of a gendered title. Either side may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GenderedTitle {
    #[serde(rename = "MALE", default)]
    pub male: Option<String>,
    #[serde(rename = "FEMALE", default)]
    pub female: Option<String>,
}

impl GenderedTitle {
    pub fn get(&self, gender: Gender) -> Option<&str> {
        match gender {
            Gender::Male => self.male.as_deref(),
            Gender::Female => self.female.as_deref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TitleEntry {
    Plain(String),
    Gendered(GenderedTitle),
}

pub type TitleTable = HashMap<String, TitleEntry>;
pub type ProperNameTable = HashMap<String, String>;

#[derive(Debug, Clone, Default)]
pub struct LookupTables {
    titles: TitleTable,
    proper_names: ProperNameTable,
}

impl LookupTables {
    pub fn new(titles: TitleTable, proper_names: ProperNameTable) -> Self {
        Self {
            titles,
            proper_names,
        }
    }

    pub fn load(titles_path: &Path, proper_names_path: &Path) -> anyhow::Result<Self> {
        let titles: TitleTable = load_json(titles_path)?;
        let proper_names: ProperNameTable = load_json(proper_names_path)?;
        tracing::info!(
            titles = titles.len(),
            proper_names = proper_names.len(),
            "loaded lookup tables"
        );
        Ok(Self::new(titles, proper_names))
    }

    pub fn from_json_strs(titles: &str, proper_names: &str) -> anyhow::Result<Self> {
        let titles = serde_json::from_str(titles).context("Failed to parse title table JSON")?;
        let proper_names =
            serde_json::from_str(proper_names).context("Failed to parse proper-name table JSON")?;
        Ok(Self::new(titles, proper_names))
    }

    pub fn title(&self, title: &str) -> Option<&TitleEntry> {
        self.titles.get(title)
    }

    pub fn has_title(&self, title: &str) -> bool {
        self.titles.contains_key(title)
    }

    pub fn proper_name(&self, name: &str) -> Option<&str> {
        self.proper_names.get(name).map(String::as_str)
    }

    /// Proper-name substitution with pass-through for unknown names.
    pub fn translate_proper_name<'a>(&'a self, name: &'a str) -> &'a str {
        self.proper_name(name).unwrap_or(name)
    }
}

fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read lookup table at {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse JSON from {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn parses_plain_and_gendered_entries() -> Result<()> {
        let tables = LookupTables::from_json_strs(
            r#"{
                "Bug Catcher": "むしとりしょうねん",
                "Swimmer": {"MALE": "かいパンやろう", "FEMALE": "ビキニのおねえさん"},
                "Lass": {"FEMALE": "ミニスカート", "NOTE": "ignored"}
            }"#,
            r#"{"Rick": "リック"}"#,
        )?;
        assert_eq!(
            tables.title("Bug Catcher"),
            Some(&TitleEntry::Plain("むしとりしょうねん".to_string()))
        );
        match tables.title("Swimmer") {
            Some(TitleEntry::Gendered(entry)) => {
                assert_eq!(entry.get(Gender::Male), Some("かいパンやろう"));
                assert_eq!(entry.get(Gender::Female), Some("ビキニのおねえさん"));
            }
            other => panic!("expected gendered entry, got {other:?}"),
        }
        match tables.title("Lass") {
            Some(TitleEntry::Gendered(entry)) => assert_eq!(entry.get(Gender::Male), None),
            other => panic!("expected gendered entry, got {other:?}"),
        }
        assert_eq!(tables.translate_proper_name("Rick"), "リック");
        assert_eq!(tables.translate_proper_name("Jen"), "Jen");
        Ok(())
    }

    #[test]
    fn malformed_table_is_an_error() {
        assert!(LookupTables::from_json_strs("{", "{}").is_err());
        assert!(LookupTables::from_json_strs("{}", r#"{"Rick": 1}"#).is_err());
    }

    #[test]
    fn missing_file_error_names_the_path() {
        let err = LookupTables::load(
            Path::new("does/not/exist/title_map.json"),
            Path::new("does/not/exist/proper_name_map.json"),
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("title_map.json"));
    }
}
