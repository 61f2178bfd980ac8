// ============================================================================
// Country Registry
// Immutable ISO 3166-1 numeric-code lookup with localized names
// ============================================================================

use crate::locale::Locale;
use std::collections::HashMap;

/// (numeric, alpha-2, English, Russian)
const COUNTRIES: &[(u16, &str, &str, &str)] = &[
    (36, "AU", "Australia", "Австралия"),
    (40, "AT", "Austria", "Австрия"),
    (56, "BE", "Belgium", "Бельгия"),
    (76, "BR", "Brazil", "Бразилия"),
    (100, "BG", "Bulgaria", "Болгария"),
    (112, "BY", "Belarus", "Беларусь"),
    (124, "CA", "Canada", "Канада"),
    (152, "CL", "Chile", "Чили"),
    (156, "CN", "China", "Китай"),
    (158, "TW", "Taiwan", "Тайвань"),
    (203, "CZ", "Czechia", "Чехия"),
    (208, "DK", "Denmark", "Дания"),
    (233, "EE", "Estonia", "Эстония"),
    (246, "FI", "Finland", "Финляндия"),
    (250, "FR", "France", "Франция"),
    (268, "GE", "Georgia", "Грузия"),
    (276, "DE", "Germany", "Германия"),
    (300, "GR", "Greece", "Греция"),
    (344, "HK", "Hong Kong", "Гонконг"),
    (348, "HU", "Hungary", "Венгрия"),
    (352, "IS", "Iceland", "Исландия"),
    (356, "IN", "India", "Индия"),
    (360, "ID", "Indonesia", "Индонезия"),
    (372, "IE", "Ireland", "Ирландия"),
    (376, "IL", "Israel", "Израиль"),
    (380, "IT", "Italy", "Италия"),
    (392, "JP", "Japan", "Япония"),
    (398, "KZ", "Kazakhstan", "Казахстан"),
    (410, "KR", "South Korea", "Республика Корея"),
    (428, "LV", "Latvia", "Латвия"),
    (440, "LT", "Lithuania", "Литва"),
    (446, "MO", "Macao", "Макао"),
    (458, "MY", "Malaysia", "Малайзия"),
    (484, "MX", "Mexico", "Мексика"),
    (528, "NL", "Netherlands", "Нидерланды"),
    (554, "NZ", "New Zealand", "Новая Зеландия"),
    (578, "NO", "Norway", "Норвегия"),
    (608, "PH", "Philippines", "Филиппины"),
    (616, "PL", "Poland", "Польша"),
    (620, "PT", "Portugal", "Португалия"),
    (642, "RO", "Romania", "Румыния"),
    (643, "RU", "Russia", "Россия"),
    (702, "SG", "Singapore", "Сингапур"),
    (710, "ZA", "South Africa", "Южно-Африканская Республика"),
    (724, "ES", "Spain", "Испания"),
    (752, "SE", "Sweden", "Швеция"),
    (756, "CH", "Switzerland", "Швейцария"),
    (764, "TH", "Thailand", "Таиланд"),
    (784, "AE", "United Arab Emirates", "ОАЭ"),
    (792, "TR", "Turkey", "Турция"),
    (804, "UA", "Ukraine", "Украина"),
    (826, "GB", "United Kingdom", "Великобритания"),
    (840, "US", "United States", "Соединенные Штаты"),
    (704, "VN", "Vietnam", "Вьетнам"),
];

/// "Unknown" in each bundled language
const UNKNOWN_WORDS: &[(&str, &str)] = &[("en", "Unknown"), ("ru", "Неизвестно")];

const BASE_LANGUAGE: &str = "en";

#[derive(Debug, Clone)]
struct CountryEntry {
    alpha2: &'static str,
    /// language -> name; always holds [`BASE_LANGUAGE`]
    names: HashMap<&'static str, &'static str>,
}

/// Read-only table from numeric country codes to localized names.
#[derive(Debug, Clone)]
pub struct CountryRegistry {
    countries: HashMap<u16, CountryEntry>,
    unknown_words: HashMap<&'static str, &'static str>,
}

impl CountryRegistry {
    /// Registry with the bundled ISO 3166-1 subset.
    pub fn iso3166() -> Self {
        let countries = COUNTRIES
            .iter()
            .map(|&(numeric, alpha2, en, ru)| {
                let names = HashMap::from([(BASE_LANGUAGE, en), ("ru", ru)]);
                (numeric, CountryEntry { alpha2, names })
            })
            .collect();

        Self {
            countries,
            unknown_words: UNKNOWN_WORDS.iter().copied().collect(),
        }
    }

    /// Localized country name.
    ///
    /// Falls back to the English name when the locale has no translation,
    /// and to `"Unknown (<code>)"` (with "Unknown" localized) for codes
    /// missing from the table.
    pub fn country_name(&self, numeric: i32, locale: &Locale) -> String {
        let language = locale.language();

        match self.entry(numeric) {
            Some(entry) => {
                let name = entry
                    .names
                    .get(language)
                    .or_else(|| entry.names.get(BASE_LANGUAGE))
                    .copied()
                    .unwrap_or(entry.alpha2);
                name.to_string()
            }
            None => {
                tracing::debug!("Unknown numeric country code {}", numeric);
                format!("{} ({})", self.unknown_word(language), numeric)
            }
        }
    }

    /// Name in the locale's own language only, without the English fallback.
    pub fn translated_name(&self, numeric: i32, locale: &Locale) -> Option<&str> {
        self.entry(numeric)?.names.get(locale.language()).copied()
    }

    /// ISO 3166-1 alpha-2 code for a numeric code.
    pub fn alpha2(&self, numeric: i32) -> Option<&str> {
        self.entry(numeric).map(|entry| entry.alpha2)
    }

    pub fn contains(&self, numeric: i32) -> bool {
        self.entry(numeric).is_some()
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    fn entry(&self, numeric: i32) -> Option<&CountryEntry> {
        let numeric = u16::try_from(numeric).ok()?;
        self.countries.get(&numeric)
    }

    fn unknown_word(&self, language: &str) -> &str {
        self.unknown_words
            .get(language)
            .or_else(|| self.unknown_words.get(BASE_LANGUAGE))
            .copied()
            .unwrap_or("Unknown")
    }
}

impl Default for CountryRegistry {
    fn default() -> Self {
        Self::iso3166()
    }
}
