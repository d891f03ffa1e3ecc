//! Position to section id: `RANDOMONE` .. `RANDOMTWENTY`, then `RANDOM21`.

use shelf_proto::{SECTION_PREFIX, SectionId};

const ORDINAL_WORDS: [&str; 20] = [
    "ONE", "TWO", "THREE", "FOUR", "FIVE", "SIX", "SEVEN", "EIGHT", "NINE", "TEN", "ELEVEN",
    "TWELVE", "THIRTEEN", "FOURTEEN", "FIFTEEN", "SIXTEEN", "SEVENTEEN", "EIGHTEEN", "NINETEEN",
    "TWENTY",
];

/// Upper-case word for a 1-based position, if it has one.
pub fn ordinal_word(position: usize) -> Option<&'static str> {
    position
        .checked_sub(1)
        .and_then(|index| ORDINAL_WORDS.get(index))
        .copied()
}

/// Section id for a 1-based position.
///
/// ```
/// use shelf_present::section_id;
///
/// assert_eq!(section_id(2).as_str(), "RANDOMTWO");
/// assert_eq!(section_id(21).as_str(), "RANDOM21");
/// ```
pub fn section_id(position: usize) -> SectionId {
    match ordinal_word(position) {
        Some(word) => SectionId::new(format!("{SECTION_PREFIX}{word}")),
        None => SectionId::new(format!("{SECTION_PREFIX}{position}")),
    }
}
