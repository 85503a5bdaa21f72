use crate::model::{Gender, TrainerRecord};
use phf::{phf_map, phf_set};

/// Titles that carry a ♂/♀ glyph directly after them in the source data.
static SYMBOL_TITLES: phf::Set<&'static str> = phf_set! {
    "Swimmer",
    "Tuber",
};

static GENDER_GLYPHS: phf::Map<char, Gender> = phf_map! {
    '♂' => Gender::Male,
    '♀' => Gender::Female,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolName<'a> {
    pub title: &'a str,
    pub gender: Gender,
    pub rest: &'a str,
}

/// Parses `<Title><glyph> <rest>`, e.g. `Swimmer♂ David`.
///
/// At least one whitespace character has to follow the glyph; the rest may be
/// empty.
pub fn parse_symbol_name(name: &str) -> Option<SymbolName<'_>> {
    SYMBOL_TITLES.iter().find_map(|&title| {
        let after_title = name.strip_prefix(title)?;
        let mut chars = after_title.chars();
        let gender = *GENDER_GLYPHS.get(&chars.next()?)?;
        let after_glyph = chars.as_str();
        if !after_glyph.starts_with(char::is_whitespace) {
            return None;
        }
        Some(SymbolName {
            title,
            gender,
            rest: after_glyph.trim_start(),
        })
    })
}

/// Gender for a gendered title. Probes are tried in order: the glyph parsed
/// from the name, then the first tagged team member.
pub fn determine_gender(glyph: Option<Gender>, trainer: &TrainerRecord) -> Option<Gender> {
    let probes: [&dyn Fn() -> Option<Gender>; 2] = [&|| glyph, &|| trainer.team_gender()];
    probes.iter().find_map(|probe| probe())
}
