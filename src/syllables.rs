//! Spelling-based syllable estimation.
//!
//! Used only for words the dictionary does not know; dictionary-backed
//! pronunciations always carry their recorded count instead. The estimate is
//! best-effort: it counts vowel groups and then corrects the count with three
//! data tables.
//!
//! ```text
//! "nation"  vowel groups: [a, io]           = 2
//!           subtract "ion"                  -1
//!           add "io"                        +1
//!           result                          = 2
//! ```
//!
//! The tables are plain `(pattern, weight)` data so they can be audited and
//! tested without touching the store. Every pattern is applied at most once
//! per word, regardless of how many times it matches.

use once_cell::sync::Lazy;
use regex::Regex;

/// A regular expression paired with the adjustment it contributes when it
/// matches anywhere in a word.
#[derive(Debug, Clone, Copy)]
pub(crate) struct WeightedPattern {
    pub source: &'static str,
    pub weight: i32,
}

/// Patterns where one vowel group was counted twice, or where a vowel is
/// silent (mostly a trailing `e`).
static SUBTRACT: &[WeightedPattern] = patterns!(-1 => [
    "cial", "tia", "cius", "cious", "uiet", "gious", "geous", "priest", "giu", "dge", "ion", "iou",
    "sia$", ".che$", ".ched$", ".abe$", ".ace$", ".ade$", ".age$", ".aged$", ".ake$", ".ale$",
    ".aled$", ".ales$", ".ane$", ".ame$", ".ape$", ".are$", ".ase$", ".ashed$", ".asque$", ".ate$",
    ".ave$", ".azed$", ".awe$", ".aze$", ".aped$", ".athe$", ".athes$", ".ece$", ".ese$", ".esque$",
    ".esques$", ".eze$", ".gue$", ".ibe$", ".ice$", ".ide$", ".ife$", ".ike$", ".ile$", ".ime$",
    ".ine$", ".ipe$", ".iped$", ".ire$", ".ise$", ".ished$", ".ite$", ".ive$", ".ize$", ".obe$",
    ".ode$", ".oke$", ".ole$", ".ome$", ".one$", ".ope$", ".oque$", ".ore$", ".ose$", ".osque$",
    ".osques$", ".ote$", ".ove$", ".pped$", ".sse$", ".ssed$", ".ste$", ".ube$", ".uce$", ".ude$",
    ".uge$", ".uke$", ".ule$", ".ules$", ".uled$", ".ume$", ".une$", ".upe$", ".ure$", ".use$",
    ".ushed$", ".ute$", ".ved$", ".we$", ".wes$", ".wed$", ".yse$", ".yze$", ".rse$", ".red$",
    ".rce$", ".rde$", ".ily$", ".ely$", ".des$", ".gged$", ".kes$", ".ced$", ".ked$", ".med$",
    ".mes$", ".ned$", ".[sz]ed$", ".nce$", ".rles$", ".nes$", ".pes$", ".tes$", ".res$", ".ves$",
    "ere$",
]);

/// Patterns where one orthographic vowel group is really two syllables.
static ADD: &[WeightedPattern] = patterns!(1 => [
    "ia", "riet", "dien", "ien", "iet", "iu", "iest", "io", "ii", "ily", ".oala$", ".iara$",
    ".ying$", ".earest", ".arer", ".aress", ".eate$", ".eation$", "[aeiouym]bl$", "[aeiou]{3}",
    "^mc", "ism", "asm", "[^l]lien", "^coa[dglx].", "[^gq]ua[^auieo]", "dnt$",
]);

/// Short irregular words the tables above overcount by one.
static EXCEPTIONS_ONE: &[&str] = &[
    "abe", "ace", "ade", "age", "ale", "ape", "are", "ate", "ave", "awe", "axe", "aze", "eke", "eve",
    "ice", "ide", "ire", "ode", "ole", "one", "ope", "ore", "owe", "ude", "use", "ute",
];

static COMPILED: Lazy<Vec<(Regex, i32)>> = Lazy::new(|| {
    SUBTRACT
        .iter()
        .chain(ADD.iter())
        .map(|p| (Regex::new(p.source).unwrap(), p.weight))
        .collect()
});

/// Estimate the syllable count of `word` from its spelling. Never returns 0.
pub fn estimate(word: &str) -> u32 {
    let word = word.to_lowercase();

    let base_groups = regex!("[^aeiouy]+").split(&word).filter(|chunk| !chunk.is_empty()).count() as i32;

    let mut adjustment: i32 = COMPILED.iter().filter(|(re, _)| re.is_match(&word)).map(|(_, weight)| weight).sum();

    if EXCEPTIONS_ONE.contains(&word.as_str()) {
        adjustment -= 1;
    }

    let total = base_groups + adjustment;
    if total <= 0 { 1 } else { total as u32 }
}
