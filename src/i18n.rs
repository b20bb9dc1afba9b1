//! Localized Messages
//!
//! Message tables for error keys, advisories and month names.

/// Key used when an error carries no recognized code.
pub const UNDEFINED_ERROR: &str = "error.undefined";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    De,
}

const EN: &[(&str, &str)] = &[
    ("error.undefined", "An undefined error occurred"),
    ("error.transport", "The backend could not be reached"),
    ("error.unexpected_variant", "The backend sent an unexpected response"),
    ("error.malformed_response", "The backend sent a response that could not be read"),
    ("error.global.dataset_exists", "A dataset for this month already exists"),
    ("error.global.dataset_is_active", "Another dataset is already open"),
    ("error.global.dataset_not_active", "No dataset is open"),
    ("error.global.dataset_not_found", "The selected dataset could not be found"),
    ("error.components.not_found", "The component could not be found"),
    ("error.components.does_not_exist", "The entry does not exist"),
    ("error.components.name_empty", "The name must not be empty"),
    ("error.components.still_in_use", "The entry is still in use"),
    ("error.meals.component_not_found", "A selected component no longer exists"),
    ("error.meals.variant_not_found", "A selected variant no longer exists"),
    ("error.meals.name_empty", "The meal needs a name"),
    ("error.meals.short_empty", "The meal needs a short code"),
    ("advisory.dataset_mismatch", "The date stored in this dataset differs from its file name"),
    ("advisory.opened_backup", "The dataset could not be read and was restored from its backup"),
];

const DE: &[(&str, &str)] = &[
    ("error.undefined", "Ein unbekannter Fehler ist aufgetreten"),
    ("error.transport", "Das Backend ist nicht erreichbar"),
    ("error.unexpected_variant", "Das Backend hat eine unerwartete Antwort gesendet"),
    ("error.malformed_response", "Die Antwort des Backends konnte nicht gelesen werden"),
    ("error.global.dataset_exists", "Für diesen Monat existiert bereits ein Datensatz"),
    ("error.global.dataset_is_active", "Es ist bereits ein anderer Datensatz geöffnet"),
    ("error.global.dataset_not_active", "Es ist kein Datensatz geöffnet"),
    ("error.global.dataset_not_found", "Der gewählte Datensatz wurde nicht gefunden"),
    ("error.components.not_found", "Die Komponente wurde nicht gefunden"),
    ("error.components.does_not_exist", "Der Eintrag existiert nicht"),
    ("error.components.name_empty", "Der Name darf nicht leer sein"),
    ("error.components.still_in_use", "Der Eintrag wird noch verwendet"),
    ("error.meals.component_not_found", "Eine gewählte Komponente existiert nicht mehr"),
    ("error.meals.variant_not_found", "Eine gewählte Variante existiert nicht mehr"),
    ("error.meals.name_empty", "Das Gericht braucht einen Namen"),
    ("error.meals.short_empty", "Das Gericht braucht ein Kürzel"),
    ("advisory.dataset_mismatch", "Das gespeicherte Datum des Datensatzes weicht vom Dateinamen ab"),
    ("advisory.opened_backup", "Der Datensatz war nicht lesbar und wurde aus der Sicherung geladen"),
];

const MONTHS_EN: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

const MONTHS_DE: [&str; 12] = [
    "Januar", "Februar", "März", "April", "Mai", "Juni",
    "Juli", "August", "September", "Oktober", "November", "Dezember",
];

impl Locale {
    /// Maps a BCP 47 tag such as `de-DE` to a supported locale.
    pub fn from_tag(tag: &str) -> Self {
        let primary = tag.split(['-', '_']).next().unwrap_or_default();
        if primary.eq_ignore_ascii_case("de") {
            Self::De
        } else {
            Self::En
        }
    }

    fn table(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::En => EN,
            Self::De => DE,
        }
    }

    /// Exact lookup in this locale, then in English.
    pub fn lookup(self, key: &str) -> Option<&'static str> {
        let find = |table: &'static [(&'static str, &'static str)]| {
            table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
        };
        find(self.table()).or_else(|| find(EN))
    }

    /// Lookup that never fails: unknown keys yield the undefined-error message.
    pub fn text(self, key: &str) -> &'static str {
        self.lookup(key)
            .or_else(|| self.lookup(UNDEFINED_ERROR))
            .unwrap_or("error")
    }

    /// Month name for 1..=12.
    pub fn month_name(self, month: u32) -> Option<&'static str> {
        let names = match self {
            Self::En => &MONTHS_EN,
            Self::De => &MONTHS_DE,
        };
        let index = usize::try_from(month).ok()?.checked_sub(1)?;
        names.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_key_is_translated() {
        for (key, _) in EN {
            assert!(DE.iter().any(|(k, _)| k == key), "missing German text for {key}");
        }
        assert_eq!(EN.len(), DE.len());
    }

    #[test]
    fn test_unknown_key_falls_back() {
        assert_eq!(Locale::En.lookup("foo"), None);
        assert_eq!(Locale::En.text("foo"), "An undefined error occurred");
        assert_eq!(Locale::De.text("foo"), "Ein unbekannter Fehler ist aufgetreten");
    }

    #[test]
    fn test_month_names() {
        assert_eq!(Locale::En.month_name(1), Some("January"));
        assert_eq!(Locale::De.month_name(3), Some("März"));
        assert_eq!(Locale::En.month_name(12), Some("December"));
        assert_eq!(Locale::En.month_name(0), None);
        assert_eq!(Locale::En.month_name(13), None);
    }

    #[test]
    fn test_from_tag() {
        assert_eq!(Locale::from_tag("de"), Locale::De);
        assert_eq!(Locale::from_tag("DE_ch"), Locale::De);
        assert_eq!(Locale::from_tag("en-US"), Locale::En);
        assert_eq!(Locale::from_tag(""), Locale::En);
    }
}
