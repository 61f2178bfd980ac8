// ============================================================================
// ISO 4217 Table
// Numeric code -> alphabetic code, with minor-unit overrides
// ============================================================================
//
// The divisor column is only filled where the currency does not use two
// decimal places. 999 (XXX) is deliberately absent: it resolves to
// CurrencyIdentity::Unknown like any other unassigned code.

pub(crate) const ISO4217_TABLE: &[(u16, &str, Option<i32>)] = &[
    (8, "ALL", None),
    (12, "DZD", None),
    (32, "ARS", None),
    (36, "AUD", None),
    (44, "BSD", None),
    (48, "BHD", Some(1000)),
    (50, "BDT", None),
    (51, "AMD", None),
    (52, "BBD", None),
    (60, "BMD", None),
    (64, "BTN", None),
    (68, "BOB", None),
    (72, "BWP", None),
    (84, "BZD", None),
    (96, "BND", None),
    (108, "BIF", Some(1)),
    (116, "KHR", None),
    (124, "CAD", None),
    (132, "CVE", None),
    (136, "KYD", None),
    (144, "LKR", None),
    (152, "CLP", Some(1)),
    (156, "CNY", None),
    (170, "COP", None),
    (174, "KMF", Some(1)),
    (188, "CRC", None),
    (192, "CUP", None),
    (203, "CZK", None),
    (208, "DKK", None),
    (214, "DOP", None),
    (222, "SVC", None),
    (230, "ETB", None),
    (238, "FKP", None),
    (242, "FJD", None),
    (262, "DJF", Some(1)),
    (270, "GMD", None),
    (292, "GIP", None),
    (320, "GTQ", None),
    (324, "GNF", Some(1)),
    (328, "GYD", None),
    (332, "HTG", None),
    (340, "HNL", None),
    (344, "HKD", None),
    (348, "HUF", None),
    (352, "ISK", Some(1)),
    (356, "INR", None),
    (360, "IDR", None),
    (364, "IRR", None),
    (368, "IQD", Some(1000)),
    (376, "ILS", None),
    (388, "JMD", None),
    (392, "JPY", Some(1)),
    (398, "KZT", None),
    (400, "JOD", Some(1000)),
    (404, "KES", None),
    (408, "KPW", None),
    (410, "KRW", Some(1)),
    (414, "KWD", Some(1000)),
    (417, "KGS", None),
    (418, "LAK", None),
    (422, "LBP", None),
    (426, "LSL", None),
    (430, "LRD", None),
    (434, "LYD", Some(1000)),
    (446, "MOP", None),
    (454, "MWK", None),
    (458, "MYR", None),
    (462, "MVR", None),
    (480, "MUR", None),
    (484, "MXN", None),
    (496, "MNT", None),
    (498, "MDL", None),
    (504, "MAD", None),
    (512, "OMR", Some(1000)),
    (516, "NAD", None),
    (524, "NPR", None),
    (532, "ANG", None),
    (533, "AWG", None),
    (548, "VUV", Some(1)),
    (554, "NZD", None),
    (558, "NIO", None),
    (566, "NGN", None),
    (578, "NOK", None),
    (586, "PKR", None),
    (590, "PAB", None),
    (598, "PGK", None),
    (600, "PYG", Some(1)),
    (604, "PEN", None),
    (608, "PHP", None),
    (634, "QAR", None),
    (643, "RUB", None),
    (646, "RWF", Some(1)),
    (654, "SHP", None),
    (682, "SAR", None),
    (690, "SCR", None),
    (694, "SLL", None),
    (702, "SGD", None),
    (704, "VND", Some(1)),
    (706, "SOS", None),
    (710, "ZAR", None),
    (728, "SSP", None),
    (748, "SZL", None),
    (752, "SEK", None),
    (756, "CHF", None),
    (760, "SYP", None),
    (764, "THB", None),
    (776, "TOP", None),
    (780, "TTD", None),
    (784, "AED", None),
    (788, "TND", Some(1000)),
    (800, "UGX", Some(1)),
    (807, "MKD", None),
    (818, "EGP", None),
    (826, "GBP", None),
    (834, "TZS", None),
    (840, "USD", None),
    (858, "UYU", None),
    (860, "UZS", None),
    (882, "WST", None),
    (886, "YER", None),
    (901, "TWD", None),
    (929, "MRU", None),
    (930, "STN", None),
    (933, "BYN", None),
    (934, "TMT", None),
    (936, "GHS", None),
    (937, "VEF", None),
    (938, "SDG", None),
    (941, "RSD", None),
    (943, "MZN", None),
    (944, "AZN", None),
    (946, "RON", None),
    (949, "TRY", None),
    (950, "XAF", Some(1)),
    (951, "XCD", None),
    (952, "XOF", Some(1)),
    (953, "XPF", Some(1)),
    (967, "ZMW", None),
    (968, "SRD", None),
    (969, "MGA", None),
    (971, "AFN", None),
    (972, "TJS", None),
    (973, "AOA", None),
    (975, "BGN", None),
    (976, "CDF", None),
    (977, "BAM", None),
    (978, "EUR", None),
    (980, "UAH", None),
    (981, "GEL", None),
    (985, "PLN", None),
    (986, "BRL", None),
];
