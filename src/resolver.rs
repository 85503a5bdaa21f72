use crate::gender::{determine_gender, parse_symbol_name};
use crate::model::TrainerRecord;
use crate::tables::{LookupTables, TitleEntry};
use thiserror::Error;

pub const FULL_WIDTH_JOINER: char = '＆';
const ASCII_JOINER: char = '&';

/// Why a trainer name could not be localized. The `Display` form is the
/// reason printed in the `[skip]` line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Unresolved {
    #[error("title not found")]
    TitleNotFound { original: String },

    #[error("gender unknown")]
    GenderUnknown { original: String, title: String },

    #[error("empty localization")]
    EmptyLocalization { original: String },
}

impl Unresolved {
    pub fn original(&self) -> &str {
        match self {
            Unresolved::TitleNotFound { original }
            | Unresolved::GenderUnknown { original, .. }
            | Unresolved::EmptyLocalization { original } => original,
        }
    }
}

/// Title and personal-name portion split off an original name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleMatch {
    pub title: String,
    pub rest: String,
}

/// Longest whitespace-joined token prefix that is a known title.
pub fn match_title_prefix(name: &str, tables: &LookupTables) -> Option<TitleMatch> {
    let tokens: Vec<&str> = name.split_whitespace().collect();
    (1..=tokens.len()).rev().find_map(|len| {
        let candidate = tokens[..len].join(" ");
        tables.has_title(&candidate).then(|| TitleMatch {
            title: candidate,
            rest: tokens[len..].join(" "),
        })
    })
}

/// `Sam & Max` -> `サム＆Max`; each segment goes through the proper-name table.
pub fn substitute_personal_names(rest: &str, tables: &LookupTables) -> String {
    let normalized = rest.replace(ASCII_JOINER, &FULL_WIDTH_JOINER.to_string());
    normalized
        .split(FULL_WIDTH_JOINER)
        .map(|segment| tables.translate_proper_name(segment.trim()))
        .collect::<Vec<_>>()
        .join(&FULL_WIDTH_JOINER.to_string())
}

pub fn resolve(
    original_name: &str,
    trainer: &TrainerRecord,
    tables: &LookupTables,
) -> Result<String, Unresolved> {
    let localized = resolve_inner(original_name, trainer, tables)?;
    if localized.is_empty() {
        return Err(Unresolved::EmptyLocalization {
            original: original_name.to_string(),
        });
    }
    Ok(localized)
}

fn resolve_inner(
    original_name: &str,
    trainer: &TrainerRecord,
    tables: &LookupTables,
) -> Result<String, Unresolved> {
    // 完全一致の固有名が最優先
    if let Some(whole) = tables.proper_name(original_name) {
        return Ok(whole.to_string());
    }

    let (title, glyph_gender, rest) = match parse_symbol_name(original_name) {
        Some(symbol) => (symbol.title.to_string(), Some(symbol.gender), symbol.rest.to_string()),
        None => {
            let found = match_title_prefix(original_name, tables).ok_or_else(|| {
                Unresolved::TitleNotFound {
                    original: original_name.to_string(),
                }
            })?;
            (found.title, None, found.rest)
        }
    };

    let localized_title = match tables.title(&title) {
        Some(TitleEntry::Plain(localized)) => localized.as_str(),
        Some(TitleEntry::Gendered(variants)) => determine_gender(glyph_gender, trainer)
            .and_then(|gender| variants.get(gender))
            .ok_or_else(|| Unresolved::GenderUnknown {
                original: original_name.to_string(),
                title: title.clone(),
            })?,
        // symbol titles are fixed, so they may be absent from the table
        None => {
            return Err(Unresolved::TitleNotFound {
                original: original_name.to_string(),
            })
        }
    };

    tracing::debug!(original = original_name, title = %title, gender = ?glyph_gender, "matched title");

    if rest.is_empty() {
        return Ok(localized_title.to_string());
    }
    Ok(format!(
        "{localized_title} {}",
        substitute_personal_names(&rest, tables)
    ))
}
