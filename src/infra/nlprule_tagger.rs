// ============================================================
// Layer 6 — nlprule Tagger (cargo feature "nlprule", on by default)
// ============================================================
// A statistical part-of-speech tagger backed by nlprule's
// English tokenizer binary (en_tokenizer.bin). It produces Penn
// Treebank codes, the same vocabulary as the built-in lexicon
// tagger, so the category groups work unchanged.
//
// nlprule splits text its own way, so tags are aligned to OUR
// tokens by byte offset: each of our tokens takes the tag of the
// nlprule token whose byte range contains the token's start.
// Tokens nlprule does not cover (or only tags with pseudo tags
// like SENT_START) get the lexicon tagger's answer.
//
// The tagger only sees tokens, not the paragraph, so the text
// handed to nlprule is rebuilt from token spans with spaces in
// the gaps. Byte offsets are therefore identical to the source.
//
// Binaries: https://github.com/bminixhofer/nlprule (releases)
//
// Without --tagger-data the binary is looked up in a fixed list
// of directories (DATA_DIRS). When none has it, the caller falls
// back to the lexicon tagger.
//
// Reference: nlprule crate documentation (Tokenizer::pipe)

use anyhow::{bail, Context, Result};
use nlprule::Tokenizer;
use std::path::{Path, PathBuf};

use crate::domain::token::Token;
use crate::domain::traits::PosTagger;
use crate::engine::tagger::LexiconTagger;

pub const TOKENIZER_FILE: &str = "en_tokenizer.bin";

/// Searched in order when no data directory is given
pub const DATA_DIRS: &[&str] = &["/opt/nlprule-data", "/usr/share/nlprule", "data", "."];

pub struct NlpruleTagger {
    tokenizer: Tokenizer,
    backup:    LexiconTagger,
}

impl NlpruleTagger {
    /// Load `en_tokenizer.bin` from `dir`.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let path = dir.join(TOKENIZER_FILE);
        let tokenizer = Tokenizer::new(&path)
            .with_context(|| format!("Failed to load nlprule tokenizer from {}", path.display()))?;

        tracing::info!("Loaded nlprule tokenizer from {}", path.display());
        Ok(Self { tokenizer, backup: LexiconTagger::new() })
    }

    /// Load from the first of DATA_DIRS that holds the binary.
    pub fn from_default_locations() -> Result<Self> {
        match locate() {
            Some(dir) => Self::from_dir(&dir),
            None => bail!(
                "Could not find {} in any of: {}",
                TOKENIZER_FILE,
                DATA_DIRS.join(", ")
            ),
        }
    }
}

fn locate() -> Option<PathBuf> {
    DATA_DIRS
        .iter()
        .map(PathBuf::from)
        .find(|dir| dir.join(TOKENIZER_FILE).is_file())
}

impl PosTagger for NlpruleTagger {
    fn tag(&self, tokens: &[Token]) -> Result<Vec<String>> {
        let text = layout_text(tokens);

        // (byte range, first real PTB tag) for every nlprule token
        let mut tagged: Vec<(std::ops::Range<usize>, String)> = Vec::new();
        for sentence in self.tokenizer.pipe(&text) {
            for token in sentence.tokens() {
                let mut best = None;
                for tag in token.word().tags() {
                    let pos = tag.pos().as_str();
                    if is_treebank_tag(pos) {
                        best = Some(pos.to_string());
                        break;
                    }
                }
                if let Some(pos) = best {
                    tagged.push((token.span().byte().clone(), pos));
                }
            }
        }

        let backup = self.backup.tag(tokens)?;
        Ok(tokens
            .iter()
            .zip(backup)
            .map(|(token, fallback)| {
                tagged
                    .iter()
                    .find(|(range, _)| range.start <= token.span.0 && token.span.0 < range.end)
                    .map(|(_, pos)| pos.clone())
                    .unwrap_or(fallback)
            })
            .collect())
    }

    fn name(&self) -> &'static str {
        "nlprule"
    }
}

/// Rebuild text with every token at its original byte offset.
fn layout_text(tokens: &[Token]) -> String {
    let mut text = String::new();
    for token in tokens {
        while text.len() < token.span.0 {
            text.push(' ');
        }
        text.push_str(&token.text);
    }
    text
}

/// nlprule also emits SENT_START / SENT_END and empty tags
fn is_treebank_tag(pos: &str) -> bool {
    pos.chars().next().is_some_and(|c| c.is_ascii_uppercase() || c.is_ascii_punctuation())
        && !pos.starts_with("SENT")
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::tokenizer::WordTokenizer;

    #[test]
    fn test_layout_keeps_byte_offsets() {
        let source = "나는\u{3000}학교에  간다.";
        let tokens = WordTokenizer::new().tokenize(source);
        let text = layout_text(&tokens);
        for token in &tokens {
            assert_eq!(&text[token.span.0..token.span.1], token.text);
        }
    }

    #[test]
    fn test_missing_dir_is_an_error() {
        assert!(NlpruleTagger::from_dir(Path::new("/nonexistent/nlprule")).is_err());
    }

    #[test]
    fn test_tags_align_to_our_tokens() {
        // Needs en_tokenizer.bin in one of DATA_DIRS
        let tagger = match NlpruleTagger::from_default_locations() {
            Ok(tagger) => tagger,
            Err(_) => {
                eprintln!("Skipping alignment test: {TOKENIZER_FILE} not found");
                return;
            }
        };

        let tokens = WordTokenizer::new().tokenize("I  like green apples, don't you?");
        let tags = tagger.tag(&tokens).unwrap();
        assert_eq!(tags.len(), tokens.len());

        let tag_of = |word: &str| {
            let i = tokens.iter().position(|t| t.text == word).unwrap();
            tags[i].clone()
        };
        assert!(tag_of("like").starts_with("VB"), "like → {}", tag_of("like"));
        assert!(tag_of("apples").starts_with("NN"), "apples → {}", tag_of("apples"));
        assert!(tag_of("green").starts_with("JJ"), "green → {}", tag_of("green"));
    }

    #[test]
    fn test_pseudo_tags_are_skipped() {
        assert!(is_treebank_tag("VBD"));
        assert!(is_treebank_tag("PRP$"));
        assert!(is_treebank_tag("."));
        assert!(!is_treebank_tag("SENT_START"));
        assert!(!is_treebank_tag(""));
    }
}
