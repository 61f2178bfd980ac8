// ============================================================================
// Bundled Locale Data
// English and Russian currency display names shipped with the crate
// ============================================================================

use super::Locale;
use crate::currency::CurrencyCode;
use crate::interfaces::LocaleData;
use std::collections::HashMap;

/// (code, English, Russian). Russian names keep CLDR casing: lower-case
/// nouns with proper-noun abbreviations upper-cased.
const CURRENCY_NAMES: &[(&str, &str, &str)] = &[
    ("AED", "United Arab Emirates Dirham", "дирхам ОАЭ"),
    ("AMD", "Armenian Dram", "армянский драм"),
    ("ARS", "Argentine Peso", "аргентинское песо"),
    ("AUD", "Australian Dollar", "австралийский доллар"),
    ("AZN", "Azerbaijani Manat", "азербайджанский манат"),
    ("BGN", "Bulgarian Lev", "болгарский лев"),
    ("BHD", "Bahraini Dinar", "бахрейнский динар"),
    ("BRL", "Brazilian Real", "бразильский реал"),
    ("BYN", "Belarusian Ruble", "белорусский рубль"),
    ("CAD", "Canadian Dollar", "канадский доллар"),
    ("CHF", "Swiss Franc", "швейцарский франк"),
    ("CLP", "Chilean Peso", "чилийское песо"),
    ("CNY", "Chinese Yuan", "китайский юань"),
    ("COP", "Colombian Peso", "колумбийское песо"),
    ("CZK", "Czech Koruna", "чешская крона"),
    ("DKK", "Danish Krone", "датская крона"),
    ("EUR", "Euro", "евро"),
    ("GBP", "British Pound", "британский фунт стерлингов"),
    ("GEL", "Georgian Lari", "грузинский лари"),
    ("HKD", "Hong Kong Dollar", "гонконгский доллар"),
    ("HUF", "Hungarian Forint", "венгерский форинт"),
    ("IDR", "Indonesian Rupiah", "индонезийская рупия"),
    ("ILS", "Israeli New Shekel", "новый израильский шекель"),
    ("INR", "Indian Rupee", "индийская рупия"),
    ("ISK", "Icelandic Króna", "исландская крона"),
    ("JOD", "Jordanian Dinar", "иорданский динар"),
    ("JPY", "Japanese Yen", "японская иена"),
    ("KRW", "South Korean Won", "южнокорейская вона"),
    ("KWD", "Kuwaiti Dinar", "кувейтский динар"),
    ("KZT", "Kazakhstani Tenge", "казахский тенге"),
    ("MOP", "Macanese Pataca", "патака Макао"),
    ("MXN", "Mexican Peso", "мексиканское песо"),
    ("MYR", "Malaysian Ringgit", "малайзийский ринггит"),
    ("NOK", "Norwegian Krone", "норвежская крона"),
    ("NZD", "New Zealand Dollar", "новозеландский доллар"),
    ("OMR", "Omani Rial", "оманский риал"),
    ("PEN", "Peruvian Sol", "перуанский соль"),
    ("PHP", "Philippine Peso", "филиппинский песо"),
    ("PLN", "Polish Zloty", "польский злотый"),
    ("RON", "Romanian Leu", "румынский лей"),
    ("RSD", "Serbian Dinar", "сербский динар"),
    ("RUB", "Russian Ruble", "российский рубль"),
    ("SEK", "Swedish Krona", "шведская крона"),
    ("SGD", "Singapore Dollar", "сингапурский доллар"),
    ("THB", "Thai Baht", "таиландский бат"),
    ("TND", "Tunisian Dinar", "тунисский динар"),
    ("TRY", "Turkish Lira", "турецкая лира"),
    ("TWD", "New Taiwan Dollar", "новый тайваньский доллар"),
    ("UAH", "Ukrainian Hryvnia", "украинская гривна"),
    ("USD", "US Dollar", "доллар США"),
    ("VND", "Vietnamese Dong", "вьетнамский донг"),
    ("ZAR", "South African Rand", "южноафриканский рэнд"),
];

/// Currency display names compiled into the crate, keyed by language.
#[derive(Debug, Clone)]
pub struct BundledLocaleData {
    names: HashMap<String, HashMap<String, String>>,
}

impl BundledLocaleData {
    pub fn new() -> Self {
        let mut data = Self {
            names: HashMap::new(),
        };
        data.extend(
            "en",
            CURRENCY_NAMES.iter().map(|(code, en, _)| (*code, *en)),
        );
        data.extend(
            "ru",
            CURRENCY_NAMES.iter().map(|(code, _, ru)| (*code, *ru)),
        );
        data
    }

    /// Add or replace names for a language (e.g. scheme-specific currencies).
    pub fn with_names<'a>(
        mut self,
        language: &str,
        names: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        self.extend(language, names);
        self
    }

    /// Languages with at least one name
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.names.keys().map(String::as_str)
    }

    fn extend<'a>(&mut self, language: &str, names: impl IntoIterator<Item = (&'a str, &'a str)>) {
        let table = self.names.entry(language.to_ascii_lowercase()).or_default();
        for (code, name) in names {
            table.insert(code.to_string(), name.to_string());
        }
    }
}

impl Default for BundledLocaleData {
    fn default() -> Self {
        Self::new()
    }
}

impl LocaleData for BundledLocaleData {
    fn currency_display_name(&self, code: &CurrencyCode, locale: &Locale) -> Option<String> {
        self.names
            .get(locale.language())?
            .get(code.as_str())
            .cloned()
    }

    fn name(&self) -> &str {
        "bundled"
    }

    fn supports(&self, locale: &Locale) -> bool {
        self.names.contains_key(locale.language())
    }
}
