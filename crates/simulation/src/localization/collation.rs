//! String collation strategies for sorting localized names.

use std::cmp::Ordering;

use bevy::prelude::*;

/// Compares two display strings for sorting.
pub trait Collator: Send + Sync + 'static {
    fn compare(&self, a: &str, b: &str) -> Ordering;
}

/// Plain code-point ordering.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrdinalCollator;

impl Collator for OrdinalCollator {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        a.cmp(b)
    }
}

/// Natural-language ordering for Latin scripts.
///
/// Compares in three passes: base letters (case and accents folded), then
/// accents (unaccented first), then case (lowercase first). Remaining ties
/// fall back to code-point order so the result is total.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocaleCollator;

impl Collator for LocaleCollator {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        primary_key(a)
            .cmp(&primary_key(b))
            .then_with(|| secondary_key(a).cmp(&secondary_key(b)))
            .then_with(|| tertiary_key(a).cmp(&tertiary_key(b)))
            .then_with(|| a.cmp(b))
    }
}

fn primary_key(s: &str) -> String {
    let mut key = String::with_capacity(s.len());
    for c in s.chars().flat_map(char::to_lowercase) {
        match c {
            'ß' => key.push_str("ss"),
            'æ' => key.push_str("ae"),
            'œ' => key.push_str("oe"),
            _ => key.push(base_letter(c)),
        }
    }
    key
}

fn secondary_key(s: &str) -> Vec<bool> {
    s.chars()
        .flat_map(char::to_lowercase)
        .map(|c| base_letter(c) != c)
        .collect()
}

fn tertiary_key(s: &str) -> Vec<bool> {
    s.chars().map(char::is_uppercase).collect()
}

/// Strip the diacritic from a lowercase Latin letter.
fn base_letter(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' => 'a',
        'ç' | 'ć' | 'č' => 'c',
        'ď' => 'd',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ě' => 'e',
        'ì' | 'í' | 'î' | 'ï' | 'ī' => 'i',
        'ñ' | 'ń' | 'ň' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' => 'o',
        'ř' => 'r',
        'ś' | 'š' => 's',
        'ť' => 't',
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' => 'u',
        'ý' | 'ÿ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        _ => c,
    }
}

/// The collator UI code sorts display names with.
#[derive(Resource)]
pub struct ActiveCollator(pub Box<dyn Collator>);

impl Default for ActiveCollator {
    fn default() -> Self {
        Self(Box::new(LocaleCollator))
    }
}

impl ActiveCollator {
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.0.compare(a, b)
    }
}
