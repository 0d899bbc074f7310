use std::ops::RangeInclusive;

use unicode_normalization::UnicodeNormalization;

/// The "Combining Diacritical Marks" block. Marks outside it survive normalization.
const COMBINING_DIACRITICS: RangeInclusive<char> = '\u{0300}'..='\u{036F}';

/// Case-folds `text`, decomposes it (NFD) and drops combining diacritics.
///
/// Indexed text and incoming queries both go through this, so "café" and "CAFE" compare equal.
pub fn normalize(text: &str) -> String {
	text.to_lowercase().nfd().filter(|ch| !COMBINING_DIACRITICS.contains(ch)).collect()
}
