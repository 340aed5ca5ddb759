//! Category normalization
//!
//! Raw category keys from the transaction dump are matched case-insensitively
//! against a fixed table and replaced with display names. Anything else is
//! passed through untouched.

/// Raw key (lowercase) to display category
pub const CATEGORY_TABLE: [(&str, &str); 6] = [
    ("grooming", "Personal Care"),
    ("misc", "Others"),
    ("household", "Family"),
    ("bills", "Bills & Utilities"),
    // "dinning" is the key the upstream dump actually uses.
    ("dinning", "Food & Dinning"),
    ("emi", "EMI & Loans"),
];

/// Map a raw category to its canonical display name
///
/// No trimming is done, so `" misc"` is returned as-is.
pub fn normalize_category(raw: &str) -> String {
    let key = raw.to_lowercase();

    CATEGORY_TABLE
        .iter()
        .find(|(from, _)| *from == key)
        .map(|(_, to)| (*to).to_string())
        .unwrap_or_else(|| raw.to_string())
}
