// ============================================================================
// Currency Value
// Exact minor-unit amounts with per-value divisors
// ============================================================================

use super::errors::{CurrencyError, CurrencyResult};
use super::identity::{CurrencyIdentity, RawCurrencyCode};
use crate::registry::{CurrencyRegistry, DEFAULT_DIVISOR};
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An amount of money in minor units.
///
/// The value represents `amount / divisor` major units of `identity`.
/// Different values of the same currency may use different divisors; all
/// arithmetic stays in integers and never rounds.
///
/// # Invariants
/// - `divisor > 0`
///
/// # Equality
/// `==` is *value* equality: `AUD 12.34` at divisor 100 equals `AUD 12.340`
/// at divisor 1000. Use [`CurrencyValue::exactly_equals`] to also require
/// the same amount and divisor.
///
/// # Example
/// ```
/// use transit_currency::prelude::*;
///
/// let registry = CurrencyRegistry::iso4217();
/// let fare = CurrencyValue::new(250, 36, None, &registry).unwrap();
/// assert_eq!(fare, CurrencyValue::aud(250));
///
/// let total = fare.checked_add(&CurrencyValue::aud(150)).unwrap();
/// assert!(total.exactly_equals(&CurrencyValue::aud(400)));
/// ```
#[derive(Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "CurrencyValueRepr"))]
pub struct CurrencyValue {
    amount: i64,
    divisor: i32,
    identity: CurrencyIdentity,
}

impl CurrencyValue {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Build a value from a card record's (amount, code, divisor) triple.
    ///
    /// - Numeric codes are resolved through `registry`; misses become
    ///   [`CurrencyIdentity::Unknown`]. Without an explicit divisor the
    ///   registry's override is used, else 100.
    /// - Alphabetic codes are taken verbatim and the registry is not
    ///   consulted at all: without an explicit divisor they always get 100,
    ///   even for currencies like JPY. Codes that cannot be stored become
    ///   [`CurrencyIdentity::Unknown`].
    /// - An explicit divisor always wins.
    ///
    /// # Errors
    /// Returns `InvalidDivisor` if `divisor` is zero or negative.
    pub fn new<'a>(
        amount: i64,
        code: impl Into<RawCurrencyCode<'a>>,
        divisor: Option<i32>,
        registry: &CurrencyRegistry,
    ) -> CurrencyResult<Self> {
        match code.into() {
            RawCurrencyCode::Numeric(numeric) => {
                let identity = registry.resolve(numeric);
                let divisor = divisor
                    .or_else(|| registry.divisor_override(numeric))
                    .unwrap_or(DEFAULT_DIVISOR);
                Self::with_identity(identity, amount, divisor)
            }
            RawCurrencyCode::Alphabetic(code) => {
                let identity = CurrencyIdentity::from_alphabetic(code);
                Self::with_identity(identity, amount, divisor.unwrap_or(DEFAULT_DIVISOR))
            }
        }
    }

    /// Build a value for an already-resolved identity.
    ///
    /// # Errors
    /// Returns `InvalidDivisor` if `divisor` is zero or negative.
    pub fn with_identity(
        identity: CurrencyIdentity,
        amount: i64,
        divisor: i32,
    ) -> CurrencyResult<Self> {
        if divisor <= 0 {
            return Err(CurrencyError::InvalidDivisor(i64::from(divisor)));
        }

        Ok(Self {
            amount,
            divisor,
            identity,
        })
    }

    /// Named constructors always pass a positive divisor.
    fn known(code: &str, amount: i64, divisor: i32) -> Self {
        Self {
            amount,
            divisor,
            identity: CurrencyIdentity::from_alphabetic(code),
        }
    }

    pub fn aud(cents: i64) -> Self {
        Self::known("AUD", cents, 100)
    }

    pub fn brl(centavos: i64) -> Self {
        Self::known("BRL", centavos, 100)
    }

    pub fn cad(cents: i64) -> Self {
        Self::known("CAD", cents, 100)
    }

    pub fn clp(pesos: i64) -> Self {
        Self::known("CLP", pesos, 1)
    }

    pub fn cny(fen: i64) -> Self {
        Self::known("CNY", fen, 100)
    }

    pub fn dkk(ore: i64) -> Self {
        Self::known("DKK", ore, 100)
    }

    pub fn eur(cents: i64) -> Self {
        Self::known("EUR", cents, 100)
    }

    pub fn gbp(pence: i64) -> Self {
        Self::known("GBP", pence, 100)
    }

    pub fn hkd(cents: i64) -> Self {
        Self::known("HKD", cents, 100)
    }

    pub fn idr(sen: i64) -> Self {
        Self::known("IDR", sen, 100)
    }

    pub fn ils(agorot: i64) -> Self {
        Self::known("ILS", agorot, 100)
    }

    pub fn jpy(yen: i64) -> Self {
        Self::known("JPY", yen, 1)
    }

    pub fn krw(won: i64) -> Self {
        Self::known("KRW", won, 1)
    }

    pub fn rub(kopeks: i64) -> Self {
        Self::known("RUB", kopeks, 100)
    }

    pub fn sgd(cents: i64) -> Self {
        Self::known("SGD", cents, 100)
    }

    pub fn twd(cents: i64) -> Self {
        Self::known("TWD", cents, 100)
    }

    pub fn usd(cents: i64) -> Self {
        Self::known("USD", cents, 100)
    }

    /// Unknown currency at the default divisor.
    pub fn xxx(amount: i64) -> Self {
        Self {
            amount,
            divisor: DEFAULT_DIVISOR,
            identity: CurrencyIdentity::Unknown,
        }
    }

    /// Unknown currency at an explicit divisor.
    ///
    /// # Errors
    /// Returns `InvalidDivisor` if `divisor` is zero or negative.
    pub fn xxx_with_divisor(amount: i64, divisor: i32) -> CurrencyResult<Self> {
        Self::with_identity(CurrencyIdentity::Unknown, amount, divisor)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Amount in minor units
    #[inline]
    pub const fn amount(&self) -> i64 {
        self.amount
    }

    /// Minor units per major unit (always positive)
    #[inline]
    pub const fn divisor(&self) -> i32 {
        self.divisor
    }

    #[inline]
    pub const fn identity(&self) -> CurrencyIdentity {
        self.identity
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.amount == 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.amount < 0
    }

    /// Amount in major units, e.g. `12.34` for 1234 cents.
    ///
    /// Exact whenever the divisor's prime factors are only 2 and 5 (every
    /// ISO minor unit, and halves, eighths and the like). Other divisors
    /// give a quotient rounded to `Decimal`'s 28 significant digits; use
    /// [`amount`](Self::amount) and [`divisor`](Self::divisor) when the
    /// exact fraction matters.
    pub fn major_units(&self) -> Decimal {
        let amount = Decimal::from(self.amount);
        // divisor >= 1 and |amount| <= 2^63, so the quotient always fits
        amount
            .checked_div(Decimal::from(self.divisor))
            .unwrap_or(amount)
            .normalize()
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Checked addition with divisor reconciliation.
    ///
    /// The result divisor is:
    /// - the shared divisor when both are equal
    /// - the larger divisor when it is a multiple of the smaller
    /// - otherwise the product of both divisors
    ///
    /// The choice is symmetric, so `a + b` and `b + a` are exactly equal.
    ///
    /// # Errors
    /// - `CurrencyMismatch` if the identities differ
    /// - `Overflow` if scaling or summing leaves the `i64`/`i32` range
    pub fn checked_add(&self, other: &Self) -> CurrencyResult<Self> {
        if self.identity != other.identity {
            return Err(CurrencyError::CurrencyMismatch {
                left: self.identity,
                right: other.identity,
            });
        }

        if self.divisor == other.divisor {
            let amount = self
                .amount
                .checked_add(other.amount)
                .ok_or(CurrencyError::Overflow)?;
            return Self::with_identity(self.identity, amount, self.divisor);
        }

        let (small, large) = if self.divisor < other.divisor {
            (self, other)
        } else {
            (other, self)
        };

        let (small_amount, large_amount, divisor) = if large.divisor % small.divisor == 0 {
            let factor = i64::from(large.divisor / small.divisor);
            let scaled = small
                .amount
                .checked_mul(factor)
                .ok_or(CurrencyError::Overflow)?;
            (scaled, large.amount, large.divisor)
        } else {
            let divisor = small
                .divisor
                .checked_mul(large.divisor)
                .ok_or(CurrencyError::Overflow)?;
            let scaled_small = small
                .amount
                .checked_mul(i64::from(large.divisor))
                .ok_or(CurrencyError::Overflow)?;
            let scaled_large = large
                .amount
                .checked_mul(i64::from(small.divisor))
                .ok_or(CurrencyError::Overflow)?;
            (scaled_small, scaled_large, divisor)
        };

        let amount = small_amount
            .checked_add(large_amount)
            .ok_or(CurrencyError::Overflow)?;
        Self::with_identity(self.identity, amount, divisor)
    }

    /// Checked negation.
    ///
    /// # Errors
    /// Returns `Overflow` for `i64::MIN` minor units.
    pub fn checked_neg(&self) -> CurrencyResult<Self> {
        let amount = self.amount.checked_neg().ok_or(CurrencyError::Overflow)?;
        Ok(Self { amount, ..*self })
    }

    /// Checked subtraction, defined as adding the negation.
    pub fn checked_sub(&self, other: &Self) -> CurrencyResult<Self> {
        self.checked_add(&other.checked_neg()?)
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Same currency and same real value, whatever the divisors.
    ///
    /// Cross-multiplies in `i128`, which cannot overflow for `i64 * i32`.
    #[inline]
    pub fn value_equals(&self, other: &Self) -> bool {
        self.identity == other.identity && self.cross_cmp(other) == Ordering::Equal
    }

    /// Same currency, same amount and same divisor.
    #[inline]
    pub fn exactly_equals(&self, other: &Self) -> bool {
        self.identity == other.identity
            && self.amount == other.amount
            && self.divisor == other.divisor
    }

    fn cross_cmp(&self, other: &Self) -> Ordering {
        let lhs = i128::from(self.amount) * i128::from(other.divisor);
        let rhs = i128::from(other.amount) * i128::from(self.divisor);
        lhs.cmp(&rhs)
    }

    /// `amount / divisor` in lowest terms, used for hashing.
    fn reduced(&self) -> (i64, i32) {
        let g = gcd(self.amount.unsigned_abs(), u64::from(self.divisor.unsigned_abs()));
        // g divides divisor, so it fits both i64 and i32
        let g = g.max(1);
        (self.amount / g as i64, self.divisor / g as i32)
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl PartialEq for CurrencyValue {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value_equals(other)
    }
}

impl Eq for CurrencyValue {}

impl Hash for CurrencyValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity.hash(state);
        self.reduced().hash(state);
    }
}

/// Values of different currencies are unordered.
impl PartialOrd for CurrencyValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.identity != other.identity {
            return None;
        }
        Some(self.cross_cmp(other))
    }
}

impl Add for CurrencyValue {
    type Output = CurrencyResult<CurrencyValue>;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(&rhs)
    }
}

impl Sub for CurrencyValue {
    type Output = CurrencyResult<CurrencyValue>;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(&rhs)
    }
}

impl Neg for CurrencyValue {
    type Output = CurrencyResult<CurrencyValue>;

    #[inline]
    fn neg(self) -> Self::Output {
        self.checked_neg()
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for CurrencyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CurrencyValue({}, amount={}, divisor={})",
            self.identity, self.amount, self.divisor
        )
    }
}

impl fmt::Display for CurrencyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.identity, self.major_units())
    }
}

// ============================================================================
// Serialization
// ============================================================================

/// Wire shape; deserialization re-checks the divisor invariant.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct CurrencyValueRepr {
    amount: i64,
    divisor: i32,
    identity: CurrencyIdentity,
}

#[cfg(feature = "serde")]
impl TryFrom<CurrencyValueRepr> for CurrencyValue {
    type Error = CurrencyError;

    fn try_from(repr: CurrencyValueRepr) -> Result<Self, Self::Error> {
        Self::with_identity(repr.identity, repr.amount, repr.divisor)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn registry() -> CurrencyRegistry {
        CurrencyRegistry::iso4217()
    }

    fn xxx(amount: i64, divisor: i32) -> CurrencyValue {
        CurrencyValue::xxx_with_divisor(amount, divisor).unwrap()
    }

    #[test]
    fn test_numeric_lookup() {
        let c = CurrencyValue::new(1234, 36, Some(100), &registry()).unwrap();
        assert_eq!(c, CurrencyValue::aud(1234));

        let c = CurrencyValue::new(1234, 9999, None, &registry()).unwrap();
        assert_eq!(c, CurrencyValue::xxx(1234));
        assert_eq!(c.identity(), CurrencyIdentity::Unknown);
    }

    #[test]
    fn test_numeric_default_divisor() {
        let c = CurrencyValue::new(1234, 36, None, &registry()).unwrap();
        assert_eq!(c.divisor(), 100);
        assert_eq!(c, CurrencyValue::aud(1234));

        // Registry override for zero-decimal currencies
        let c = CurrencyValue::new(1234, 392, None, &registry()).unwrap();
        assert_eq!(c.divisor(), 1);
        assert!(c.exactly_equals(&CurrencyValue::jpy(1234)));

        let c = CurrencyValue::new(1234, 414, None, &registry()).unwrap();
        assert_eq!(c.divisor(), 1000);
    }

    #[test]
    fn test_alphabetic_never_infers_divisor() {
        let c = CurrencyValue::new(1234, "JPY", None, &registry()).unwrap();
        assert_eq!(c.divisor(), 100);

        let c = CurrencyValue::new(1234, "AUD", None, &registry()).unwrap();
        assert_eq!(c.divisor(), 100);
        assert_eq!(c, CurrencyValue::aud(1234));
    }

    #[test]
    fn test_alphabetic_is_not_validated_against_registry() {
        let c = CurrencyValue::new(10, "ZZZ", None, &CurrencyRegistry::default()).unwrap();
        assert_eq!(c.identity().to_string(), "ZZZ");

        let c = CurrencyValue::new(10, "XXX", None, &registry()).unwrap();
        assert_eq!(c.identity(), CurrencyIdentity::Unknown);
    }

    #[test]
    fn test_explicit_divisor_wins() {
        let c = CurrencyValue::new(12340, "AUD", Some(1000), &registry()).unwrap();
        assert_eq!(c.divisor(), 1000);
        assert_eq!(c, CurrencyValue::aud(1234));

        let c = CurrencyValue::new(12340, 36, Some(1000), &registry()).unwrap();
        assert_eq!(c.divisor(), 1000);
        assert_eq!(c, CurrencyValue::aud(1234));

        let c = CurrencyValue::new(500, 392, Some(100), &registry()).unwrap();
        assert_eq!(c.divisor(), 100);
    }

    #[test]
    fn test_invalid_construction() {
        assert_eq!(
            CurrencyValue::new(1, 36, Some(0), &registry()),
            Err(CurrencyError::InvalidDivisor(0))
        );
        assert_eq!(
            CurrencyValue::new(1, "AUD", Some(-100), &registry()),
            Err(CurrencyError::InvalidDivisor(-100))
        );
    }

    #[test]
    fn test_malformed_alphabetic_codes_still_construct() {
        let punctuated = CurrencyValue::new(150, "TRANSIT-1", None, &registry()).unwrap();
        assert_eq!(punctuated.identity().to_string(), "TRANSIT-1");
        assert_eq!(punctuated.divisor(), 100);

        let long = CurrencyValue::new(1, "LONGCODE9", None, &registry()).unwrap();
        assert_eq!(long.identity().to_string(), "LONGCODE9");

        let too_long = CurrencyValue::new(1, "SEVENTEENCHARCODE", None, &registry()).unwrap();
        assert_eq!(too_long.identity(), CurrencyIdentity::Unknown);

        let empty = CurrencyValue::new(1, "", Some(10), &registry()).unwrap();
        assert_eq!(empty.identity(), CurrencyIdentity::Unknown);
        assert_eq!(empty.divisor(), 10);
    }

    #[test]
    fn test_plus() {
        let sum = (CurrencyValue::aud(200) + CurrencyValue::aud(100)).unwrap();
        assert!(sum.exactly_equals(&CurrencyValue::aud(300)));
    }

    #[test]
    fn test_plus_wrong_currencies() {
        let result = CurrencyValue::aud(200) + CurrencyValue::usd(100);
        assert!(matches!(result, Err(CurrencyError::CurrencyMismatch { .. })));

        let result = CurrencyValue::aud(200) + CurrencyValue::xxx(100);
        assert!(result.is_err());
    }

    #[test]
    fn test_plus_denominators() {
        let cases = [
            // other is higher, and divisible
            (xxx(1, 2), xxx(5, 10), xxx(10, 10)),
            // other is higher, and not divisible
            (xxx(1, 2), xxx(5, 5), xxx(15, 10)),
            // self is higher, and divisible
            (xxx(5, 10), xxx(1, 2), xxx(10, 10)),
            // self is higher, and not divisible
            (xxx(5, 5), xxx(1, 2), xxx(15, 10)),
        ];

        for (a, b, expected) in cases {
            let ab = a.checked_add(&b).unwrap();
            let ba = b.checked_add(&a).unwrap();
            assert!(ab.exactly_equals(&expected), "{:?} + {:?} = {:?}", a, b, ab);
            assert!(ab.exactly_equals(&ba), "{:?} is not exactly {:?}", ab, ba);
        }
    }

    #[test]
    fn test_plus_overflow() {
        let max = CurrencyValue::aud(i64::MAX);
        assert_eq!(max.checked_add(&CurrencyValue::aud(1)), Err(CurrencyError::Overflow));

        // Divisor product leaves the i32 range
        let a = xxx(1, 65_537);
        let b = xxx(1, 65_539);
        assert_eq!(a.checked_add(&b), Err(CurrencyError::Overflow));

        // Scaling the smaller-divisor amount overflows
        let a = xxx(i64::MAX / 2, 1);
        let b = xxx(1, 10);
        assert_eq!(a.checked_add(&b), Err(CurrencyError::Overflow));
    }

    #[test]
    fn test_negation() {
        let x = CurrencyValue::aud(250);
        let neg = (-x).unwrap();
        assert_eq!(neg.amount(), -250);
        assert!(neg.is_negative());
        assert!((-neg).unwrap().exactly_equals(&x));

        assert_eq!(CurrencyValue::aud(i64::MIN).checked_neg(), Err(CurrencyError::Overflow));
    }

    #[test]
    fn test_subtraction() {
        let balance = CurrencyValue::aud(1000);
        let fare = CurrencyValue::new(3500, "AUD", Some(1000), &registry()).unwrap();
        let remaining = (balance - fare).unwrap();
        assert_eq!(remaining.divisor(), 1000);
        assert_eq!(remaining.amount(), 6500);
        assert!((fare - fare).unwrap().is_zero());
    }

    #[test]
    fn test_equality_relations() {
        let a = CurrencyValue::aud(1234);
        let b = CurrencyValue::with_identity(a.identity(), 12340, 1000).unwrap();

        assert!(a.value_equals(&b));
        assert!(!a.exactly_equals(&b));
        assert_ne!(a, CurrencyValue::usd(1234));
        assert_ne!(a, CurrencyValue::aud(1235));

        // Extreme magnitudes compare without overflow
        let big = xxx(i64::MAX, i32::MAX);
        assert_eq!(big, big);
        assert_ne!(big, xxx(i64::MIN, i32::MAX));
    }

    #[test]
    fn test_hash_consistent_with_eq() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        let aud = CurrencyValue::aud(1234);
        set.insert(aud);
        let rescaled = CurrencyValue::with_identity(aud.identity(), 12340, 1000).unwrap();
        assert!(set.contains(&rescaled));
        assert!(!set.contains(&CurrencyValue::usd(1234)));

        set.insert(xxx(0, 7));
        assert!(set.contains(&xxx(0, 100)));
        assert!(set.contains(&xxx(-0, 1)));
    }

    #[test]
    fn test_ordering() {
        assert!(CurrencyValue::aud(100) < CurrencyValue::aud(101));
        assert!(xxx(1, 2) > xxx(4, 10));
        assert_eq!(CurrencyValue::aud(1).partial_cmp(&CurrencyValue::usd(1)), None);
    }

    #[test]
    fn test_major_units_and_display() {
        assert_eq!(CurrencyValue::aud(1234).to_string(), "AUD 12.34");
        assert_eq!(CurrencyValue::aud(-5).to_string(), "AUD -0.05");
        assert_eq!(CurrencyValue::jpy(500).to_string(), "JPY 500");
        assert_eq!(xxx(1, 2).to_string(), "XXX 0.5");
        assert_eq!(
            CurrencyValue::with_identity(CurrencyValue::aud(0).identity(), 12340, 1000)
                .unwrap()
                .major_units(),
            Decimal::new(1234, 2)
        );
    }

    #[test]
    fn test_major_units_rounding() {
        assert_eq!(xxx(1, 8).major_units(), Decimal::new(125, 3));
        assert_eq!(xxx(-3, 40).major_units(), Decimal::new(-75, 3));

        // A third has no finite decimal form
        let third = xxx(1, 3).major_units();
        assert_ne!(third * Decimal::from(3), Decimal::ONE);
        assert!((third - Decimal::new(3333, 4)).abs() < Decimal::new(1, 4));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_rejects_bad_divisor() {
        let value = CurrencyValue::aud(1234);
        let json = serde_json::to_string(&value).unwrap();
        let back: CurrencyValue = serde_json::from_str(&json).unwrap();
        assert!(back.exactly_equals(&value));

        let bad = r#"{"amount":1,"divisor":0,"identity":"Unknown"}"#;
        assert!(serde_json::from_str::<CurrencyValue>(bad).is_err());
    }

    // ========================================================================
    // Properties
    // ========================================================================

    fn small_value() -> impl Strategy<Value = CurrencyValue> {
        (-1_000_000_000i64..1_000_000_000, 1i32..10_000)
            .prop_map(|(amount, divisor)| xxx(amount, divisor))
    }

    proptest! {
        #[test]
        fn prop_add_is_exactly_commutative(a in small_value(), b in small_value()) {
            let ab = a.checked_add(&b).unwrap();
            let ba = b.checked_add(&a).unwrap();
            prop_assert!(ab.exactly_equals(&ba));
        }

        #[test]
        fn prop_add_preserves_value(a in small_value(), b in small_value()) {
            let sum = a.checked_add(&b).unwrap();
            // a/da + b/db == s/ds  <=>  (a*db + b*da) * ds == s * da * db
            let lhs = (i128::from(a.amount()) * i128::from(b.divisor())
                + i128::from(b.amount()) * i128::from(a.divisor()))
                * i128::from(sum.divisor());
            let rhs = i128::from(sum.amount())
                * i128::from(a.divisor())
                * i128::from(b.divisor());
            prop_assert_eq!(lhs, rhs);
        }

        #[test]
        fn prop_divisor_never_exceeds_product(a in small_value(), b in small_value()) {
            let sum = a.checked_add(&b).unwrap();
            prop_assert!(sum.divisor() >= a.divisor().max(b.divisor()));
            prop_assert!(i64::from(sum.divisor()) <= i64::from(a.divisor()) * i64::from(b.divisor()));
        }

        #[test]
        fn prop_rescaled_value_equals(amount in -1_000_000i64..1_000_000, factor in 1i32..1000) {
            let a = xxx(amount, 100);
            let b = xxx(amount * i64::from(factor), 100 * factor);
            prop_assert_eq!(a, b);
            prop_assert_eq!(a.exactly_equals(&b), factor == 1);
        }

        #[test]
        fn prop_add_then_sub_round_trips_value(
            a in (-1_000_000_000i64..1_000_000_000, 1i32..100).prop_map(|(n, d)| xxx(n, d)),
            b in (-1_000_000_000i64..1_000_000_000, 1i32..100).prop_map(|(n, d)| xxx(n, d)),
        ) {
            let back = a.checked_add(&b).unwrap().checked_sub(&b).unwrap();
            prop_assert_eq!(back, a);
        }
    }
}
