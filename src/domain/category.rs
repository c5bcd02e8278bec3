// ============================================================
// Layer 3 — Grammatical Category Filter
// ============================================================
// The teacher picks which kind of word to blank out. Instead
// of looking groups up by free-form label (and failing on a
// typo at runtime), the choice is a closed enum. Each variant
// carries its fixed set of Penn Treebank tag codes.
//
//   All        → every tag matches
//   Verb       → VB VBD VBG VBN VBP VBZ
//   Noun       → NN NNS NNP NNPS
//   Adjective  → JJ JJR JJS
//   Adverb     → RB RBR RBS
//
// FromStr accepts the English names and the Korean labels
// of the worksheet form, so both
// `--category verb` and `--category 동사` work.
//
// Reference: Rust Book §6 (Enums), §10 (Traits: FromStr, Display)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Tag assigned to every token of a paragraph whose tagging failed.
/// A noun-like neutral category, so "all" and "noun" worksheets
/// still get blanks from that paragraph.
pub const FALLBACK_TAG: &str = "NN";

const VERB_TAGS: &[&str]      = &["VB", "VBD", "VBG", "VBN", "VBP", "VBZ"];
const NOUN_TAGS: &[&str]      = &["NN", "NNS", "NNP", "NNPS"];
const ADJECTIVE_TAGS: &[&str] = &["JJ", "JJR", "JJS"];
const ADVERB_TAGS: &[&str]    = &["RB", "RBR", "RBS"];

/// Which part of speech a worksheet should blank out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PosCategory {
    #[default]
    All,
    Verb,
    Noun,
    Adjective,
    Adverb,
}

impl PosCategory {
    /// Every variant, in the order the original form listed them
    pub const ALL_VARIANTS: [PosCategory; 5] = [
        PosCategory::All,
        PosCategory::Verb,
        PosCategory::Noun,
        PosCategory::Adjective,
        PosCategory::Adverb,
    ];

    /// The fine-grained tag codes belonging to this group.
    /// `All` has no list because it matches everything.
    pub fn tag_codes(self) -> &'static [&'static str] {
        match self {
            PosCategory::All       => &[],
            PosCategory::Verb      => VERB_TAGS,
            PosCategory::Noun      => NOUN_TAGS,
            PosCategory::Adjective => ADJECTIVE_TAGS,
            PosCategory::Adverb    => ADVERB_TAGS,
        }
    }

    /// Does a token with `tag` belong to this category?
    pub fn matches(self, tag: &str) -> bool {
        match self {
            PosCategory::All => true,
            other => other.tag_codes().contains(&tag),
        }
    }

    /// Lowercase English name, as accepted on the command line
    pub fn name(self) -> &'static str {
        match self {
            PosCategory::All       => "all",
            PosCategory::Verb      => "verb",
            PosCategory::Noun      => "noun",
            PosCategory::Adjective => "adjective",
            PosCategory::Adverb    => "adverb",
        }
    }

    /// Label used on the original Korean worksheet form
    pub fn korean_label(self) -> &'static str {
        match self {
            PosCategory::All       => "전체",
            PosCategory::Verb      => "동사",
            PosCategory::Noun      => "명사",
            PosCategory::Adjective => "형용사",
            PosCategory::Adverb    => "부사",
        }
    }
}

impl fmt::Display for PosCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PosCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();

        // Short forms are handy on the command line
        let wanted = match wanted.as_str() {
            "v"   => "verb",
            "n"   => "noun",
            "adj" => "adjective",
            "adv" => "adverb",
            other => other,
        };

        PosCategory::ALL_VARIANTS
            .into_iter()
            .find(|c| c.name() == wanted || c.korean_label() == wanted)
            .ok_or_else(|| {
                format!(
                    "unknown category '{s}' (expected one of: all, verb, noun, adjective, adverb)"
                )
            })
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_matches_any_tag() {
        assert!(PosCategory::All.matches("NN"));
        assert!(PosCategory::All.matches("."));
        assert!(PosCategory::All.matches("SYM"));
    }

    #[test]
    fn test_groups_match_only_their_codes() {
        assert!(PosCategory::Verb.matches("VBD"));
        assert!(!PosCategory::Verb.matches("NN"));
        assert!(PosCategory::Noun.matches("NNPS"));
        assert!(PosCategory::Adjective.matches("JJS"));
        assert!(PosCategory::Adverb.matches("RBR"));
        assert!(!PosCategory::Adverb.matches("JJ"));
    }

    #[test]
    fn test_parse_english_korean_and_short_forms() {
        assert_eq!("verb".parse::<PosCategory>(), Ok(PosCategory::Verb));
        assert_eq!("Noun".parse::<PosCategory>(), Ok(PosCategory::Noun));
        assert_eq!("adj".parse::<PosCategory>(), Ok(PosCategory::Adjective));
        assert_eq!("부사".parse::<PosCategory>(), Ok(PosCategory::Adverb));
        assert_eq!("전체".parse::<PosCategory>(), Ok(PosCategory::All));
    }

    #[test]
    fn test_parse_rejects_unknown_label() {
        let err = "pronoun".parse::<PosCategory>().unwrap_err();
        assert!(err.contains("pronoun"));
    }

    #[test]
    fn test_fallback_tag_is_noun_like() {
        assert!(PosCategory::Noun.matches(FALLBACK_TAG));
        assert!(!PosCategory::Verb.matches(FALLBACK_TAG));
    }
}
