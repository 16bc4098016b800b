use std::cmp::Ordering;

use crate::buildings::BuildingKey;
use crate::definitions::{Definitions, ResourceKey};
use crate::localization::*;

// -------------------------------------------------------------------------
// Default state tests
// -------------------------------------------------------------------------

#[test]
fn test_default_locale_is_english() {
    let state = LocalizationState::default();
    assert_eq!(state.active_locale, "en");
    assert_eq!(state.active_locale_name(), "English");
}

#[test]
fn test_default_has_all_supported_locales() {
    let state = LocalizationState::default();
    for locale in SUPPORTED_LOCALES {
        assert!(
            state.tables.contains_key(*locale),
            "Missing locale: {}",
            locale
        );
    }
}

// -------------------------------------------------------------------------
// Translation lookup tests
// -------------------------------------------------------------------------

#[test]
fn test_t_returns_english_translation() {
    let state = LocalizationState::default();
    assert_eq!(state.t("ui.statistics.resources"), "Resources");
}

#[test]
fn test_t_returns_key_for_missing() {
    let state = LocalizationState::default();
    assert_eq!(state.t("nonexistent.key"), "nonexistent.key");
}

#[test]
fn test_missing_key_in_locale_falls_back_to_english() {
    let mut state = LocalizationState::default();
    state.set_locale("de");
    assert_eq!(state.t("ui.statistics.look_at"), "Click to look at this building");
}

#[test]
fn test_set_unsupported_locale_is_noop() {
    let mut state = LocalizationState::default();
    state.set_locale("xx");
    assert_eq!(state.active_locale, "en");
}

#[test]
fn test_every_english_key_is_ui_string() {
    let state = LocalizationState::default();
    let en = state.tables.get("en").unwrap();
    assert!(en.keys().all(|k| k.starts_with("ui.")));
}

// -------------------------------------------------------------------------
// Name lookup
// -------------------------------------------------------------------------

#[test]
fn test_building_name_falls_back_to_definition() {
    let state = LocalizationState::default();
    let defs = Definitions::embedded();
    let key = BuildingKey::new("WheatFarm");
    assert_eq!(state.building_name(&key, &defs), "Wheat Farm");
}

#[test]
fn test_building_name_uses_translation() {
    let mut state = LocalizationState::default();
    state.set_locale("fr");
    let defs = Definitions::embedded();
    let key = BuildingKey::new("WheatFarm");
    assert_eq!(state.building_name(&key, &defs), "Ferme de blé");
}

#[test]
fn test_unknown_resource_name_is_key() {
    let state = LocalizationState::default();
    let defs = Definitions::default();
    let key = ResourceKey::new("Unobtainium");
    assert_eq!(state.resource_name(&key, &defs), "Unobtainium");
}

#[test]
fn test_localize_decimal() {
    let mut state = LocalizationState::default();
    assert_eq!(state.localize_decimal("1.5K"), "1.5K");
    state.set_locale("de");
    assert_eq!(state.localize_decimal("1.5K"), "1,5K");
}

// -------------------------------------------------------------------------
// Collation
// -------------------------------------------------------------------------

#[test]
fn test_locale_collator_folds_accents() {
    let c = LocaleCollator;
    // "Électricité" sorts with the E words, not after "Z".
    assert_eq!(c.compare("Électricité", "Fer"), Ordering::Less);
    assert_eq!(c.compare("Eau", "Électricité"), Ordering::Less);
    assert_eq!(OrdinalCollator.compare("Électricité", "Fer"), Ordering::Greater);
}

#[test]
fn test_locale_collator_ignores_case_on_first_pass() {
    let c = LocaleCollator;
    assert_eq!(c.compare("apple", "Banana"), Ordering::Less);
    assert_eq!(OrdinalCollator.compare("apple", "Banana"), Ordering::Greater);
}

#[test]
fn test_locale_collator_tie_breaks() {
    let c = LocaleCollator;
    assert_eq!(c.compare("cote", "côte"), Ordering::Less);
    assert_eq!(c.compare("a", "A"), Ordering::Less);
    assert_eq!(c.compare("Käse", "Käse"), Ordering::Equal);
}

#[test]
fn test_locale_collator_expands_sharp_s() {
    let c = LocaleCollator;
    assert_eq!(c.compare("Straße", "Strasz"), Ordering::Less);
}

#[test]
fn test_active_collator_defaults_to_locale() {
    let active = ActiveCollator::default();
    assert_eq!(active.compare("Électricité", "Fer"), Ordering::Less);
}
