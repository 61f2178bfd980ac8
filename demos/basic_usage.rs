// ============================================================================
// Basic Usage Example
// ============================================================================

use std::sync::Arc;
use transit_currency::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Transit Currency Example ===\n");

    let registry = Arc::new(CurrencyRegistry::iso4217());

    // Records as a card parser would hand them over: (amount, code, divisor)
    println!("Reading card records...");
    let records: [(i64, RawCurrencyCode, Option<i32>); 5] = [
        (2000, 36.into(), None),           // top-up in cents
        (-3450, 36.into(), Some(1000)),    // fare in tenths of a cent
        (-125, "AUD".into(), None),        // alphabetic code, default divisor
        (500, 392.into(), None),           // JPY, registry says divisor 1
        (1234, 9999.into(), None),         // proprietary code
    ];

    let mut values = Vec::new();
    for (amount, code, divisor) in records {
        match CurrencyValue::new(amount, code, divisor, &registry) {
            Ok(value) => {
                println!("  {:?} -> {}", code, value);
                values.push(value);
            }
            Err(e) => println!("  {:?} rejected: {}", code, e),
        }
    }

    // Sum every AUD record
    println!("\n=== Balance ===");
    let aud = registry.resolve(36);
    let balance = values
        .iter()
        .filter(|v| v.identity() == aud)
        .try_fold(CurrencyValue::aud(0), |acc, v| acc.checked_add(v));

    match balance {
        Ok(balance) => println!(
            "  {} (amount={}, divisor={})",
            balance,
            balance.amount(),
            balance.divisor()
        ),
        Err(e) => println!("  failed: {}", e),
    }

    // Mixing currencies is an invalid operation
    match CurrencyValue::aud(200).checked_add(&CurrencyValue::jpy(100)) {
        Ok(sum) => println!("  unexpected sum {}", sum),
        Err(e) => println!("  AUD + JPY: {}", e),
    }

    // Display names in two locales
    println!("\n=== Names ===");
    let resolver = NameResolverBuilder::new()
        .with_currency_registry(registry.clone())
        .build()
        .expect("bundled configuration is valid");

    for tag in ["en-US", "ru-RU", "ja-JP"] {
        let locale: Locale = tag.parse().expect("valid locale tag");
        println!("\n[{}]", locale);
        for code in [36, 392, 840, 5] {
            let name = resolver
                .currency_name_by_code(code, &locale)
                .unwrap_or_else(|| "(no data)".to_string());
            println!("  currency {:>4}: {}", code, name);
        }
        for code in [36, 756, 5] {
            println!("  country  {:>4}: {}", code, resolver.country_code_to_name(code, &locale));
        }
    }
}
