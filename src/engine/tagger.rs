// ============================================================
// Layer 5 — Lexicon Tagger
// ============================================================
// A small rule-based part-of-speech tagger that needs no model
// files. It produces Penn Treebank codes (VB, NN, JJ, RB, …) so
// its output plugs straight into PosCategory::matches().
//
// How a token is tagged, first match wins:
//
//   1. No letter or digit          → punctuation tag (".", ",", ":", …)
//   2. Only digits                 → CD
//   3. Word is in the lexicon      → lexicon tag, then context fix-ups:
//        base verb after to/modal  → VB
//        base verb after the/my/JJ → NN   ("the work")
//        base verb after a pronoun → VBP  ("they work")
//        irregular past after have → VBN  ("had taken")
//   4. Capitalised mid-sentence    → NNP
//   5. Suffix rules                → -ly RB, -ing VBG, -ed VBD/VBN,
//                                    -ous/-ful/-ive/… JJ, -s NNS/VBZ
//   6. Anything else               → NN
//
// Closed-class words (determiners, prepositions, pronouns…) are
// listed in full; open-class lists only cover common and
// irregular words the suffix rules would get wrong. Words in
// scripts without case (e.g. Hangul) fall through to NN.
//
// The tagger only fails on malformed input (an empty token or a
// token containing whitespace). The engine then falls back to a
// neutral tag for that paragraph.
//
// Reference: Penn Treebank tag set
//            Rust Book §8 (HashMaps), §18 (Patterns)

use std::collections::HashMap;

use anyhow::{bail, Result};

use crate::domain::token::Token;
use crate::domain::traits::PosTagger;

// ─── Word lists ───────────────────────────────────────────────────────────────

const DETERMINERS: &[&str] = &[
    "the", "a", "an", "this", "that", "these", "those", "every", "each", "some",
    "any", "no", "another", "either", "neither", "all", "both",
];

const PREPOSITIONS: &[&str] = &[
    "on", "in", "at", "of", "for", "with", "by", "from", "into", "onto", "over",
    "under", "about", "after", "before", "between", "through", "during", "without",
    "within", "against", "among", "since", "until", "upon", "near", "behind",
    "across", "around", "beside", "beneath", "toward", "towards", "like", "off",
    "inside", "outside", "along", "above", "below", "because", "if", "while",
    "although", "though", "whether", "than",
];

/// Listed as prepositions, but verbs right after a subject
/// pronoun, "to" or a modal ("I like", "to like", "would like")
const VERB_PREPOSITIONS: &[&str] = &["like"];

const SUBJECT_PRONOUNS: &[&str] = &["i", "you", "we", "they"];

const CONJUNCTIONS: &[&str] = &["and", "or", "but", "nor", "yet", "so"];

const PRONOUNS: &[&str] = &[
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "us", "them",
    "myself", "yourself", "himself", "herself", "itself", "ourselves", "themselves",
    "someone", "somebody", "anyone", "everyone", "everybody", "nobody",
];

const POSSESSIVES: &[&str] = &["my", "your", "his", "her", "its", "our", "their"];

const WH_WORDS: &[(&str, &str)] = &[
    ("who", "WP"), ("whom", "WP"), ("what", "WP"), ("whose", "WP$"),
    ("which", "WDT"), ("when", "WRB"), ("where", "WRB"), ("why", "WRB"), ("how", "WRB"),
];

const MODALS: &[&str] = &[
    "can", "could", "will", "would", "shall", "should", "may", "might", "must",
];

const NUMBER_WORDS: &[&str] = &[
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "twenty", "thirty", "hundred", "thousand", "million",
];

/// Fixed forms of be / have / do
const AUXILIARIES: &[(&str, &str)] = &[
    ("be", "VB"), ("am", "VBP"), ("are", "VBP"), ("is", "VBZ"), ("was", "VBD"),
    ("were", "VBD"), ("been", "VBN"), ("being", "VBG"),
    ("have", "VBP"), ("has", "VBZ"), ("had", "VBD"), ("having", "VBG"),
    ("do", "VBP"), ("does", "VBZ"), ("did", "VBD"), ("done", "VBN"),
    ("go", "VB"), ("goes", "VBZ"), ("going", "VBG"), ("gone", "VBN"),
];

/// Base forms; ambiguous with nouns, resolved by context
const BASE_VERBS: &[&str] = &[
    "make", "take", "get", "see", "know", "think", "say", "give", "find", "tell",
    "ask", "work", "seem", "feel", "try", "leave", "call", "run", "eat", "sit",
    "play", "read", "write", "like", "want", "need", "help", "learn", "study",
    "walk", "talk", "live", "love", "come", "look", "use", "keep", "begin", "show",
    "hear", "turn", "start", "move", "bring", "hold", "stand", "meet", "pay",
    "send", "build", "speak", "open", "close", "buy", "sell", "sleep", "drink",
    "sing", "swim", "fly", "draw", "grow", "throw", "wear", "win", "lose", "catch",
    "teach", "fight", "fall", "rise", "drive", "ride", "break", "choose", "forget",
    "put", "set", "cut", "let", "become", "jump", "watch", "wait", "stop", "carry",
    "climb", "cook", "clean", "dance", "listen", "answer", "travel", "visit",
];

const PAST_FORMS: &[&str] = &[
    "sat", "ran", "went", "saw", "ate", "came", "took", "made", "said", "gave",
    "found", "thought", "told", "became", "left", "felt", "brought", "began",
    "kept", "held", "wrote", "stood", "heard", "met", "paid", "sent", "built",
    "spoke", "drank", "sang", "swam", "flew", "drew", "grew", "knew", "threw",
    "wore", "won", "bought", "caught", "taught", "fought", "sold", "slept",
    "spent", "lost", "led", "fell", "rose", "drove", "rode", "broke", "chose",
    "forgot", "got", "understood", "woke", "hid", "shook", "stole", "struck",
];

const PARTICIPLES: &[&str] = &[
    "taken", "given", "written", "eaten", "seen", "known", "shown", "spoken",
    "broken", "chosen", "driven", "forgotten", "fallen", "flown", "grown",
    "drawn", "thrown", "worn", "born", "begun", "sung", "swum", "ridden",
    "risen", "stolen", "hidden", "woken", "shaken", "gotten",
];

const ADJECTIVES: &[&str] = &[
    "good", "bad", "big", "small", "new", "old", "young", "long", "short", "high",
    "low", "great", "little", "happy", "sad", "important", "different", "large",
    "late", "hot", "cold", "warm", "cool", "easy", "hard", "nice", "kind", "fast",
    "slow", "strong", "weak", "rich", "poor", "clean", "dirty", "quiet", "loud",
    "bright", "dark", "red", "blue", "green", "yellow", "black", "white", "brown",
    "friendly", "lovely", "lonely", "ugly", "silly", "likely", "early", "busy",
    "pretty", "tall", "full", "empty", "true", "real", "sure", "free", "whole",
    "own", "same", "other", "next", "last", "first", "many", "much", "few",
    "several", "sacred", "naked", "wicked", "crooked", "tired", "afraid",
];

const COMPARATIVES: &[(&str, &str)] = &[
    ("better", "JJR"), ("worse", "JJR"), ("bigger", "JJR"), ("smaller", "JJR"),
    ("larger", "JJR"), ("older", "JJR"), ("younger", "JJR"), ("more", "JJR"),
    ("less", "JJR"), ("best", "JJS"), ("worst", "JJS"), ("biggest", "JJS"),
    ("smallest", "JJS"), ("most", "JJS"), ("least", "JJS"),
];

const ADVERBS: &[&str] = &[
    "not", "n't", "very", "too", "also", "often", "never", "always", "sometimes",
    "here", "there", "now", "then", "soon", "already", "still", "just", "quite",
    "rather", "almost", "again", "well", "usually", "only", "even", "ever",
    "away", "together", "later", "today", "tomorrow", "yesterday", "once",
];

/// -ing / -ly / -ed words that are really nouns
const NOUN_EXCEPTIONS: &[&str] = &[
    "thing", "king", "ring", "morning", "evening", "building", "ceiling",
    "nothing", "something", "anything", "everything", "wing", "spring", "string",
    "sibling", "pudding", "family", "supply", "reply", "july", "italy", "belly",
    "jelly", "lily", "rally", "bed", "shed", "seed", "speed", "weed", "breed",
    "class", "glass", "bus", "news", "series", "species", "lens",
];

const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "ive", "able", "ible", "less", "ical", "ish"];

/// Tags after which a base-verb form reads as a noun
const NOMINAL_CONTEXT: &[&str] = &["DT", "PRP$", "JJ", "JJR", "JJS", "CD", "POS"];

/// be / have forms that turn a past form into a participle
const PERFECT_OR_PASSIVE: &[&str] = &[
    "have", "has", "had", "having", "is", "are", "was", "were", "be", "been",
    "being", "am", "'ve", "'s", "'re",
];

// ─── Tagger ───────────────────────────────────────────────────────────────────

pub struct LexiconTagger {
    lexicon: HashMap<String, &'static str>,
}

/// What the tagger knows about the token before the current one
struct Context<'a> {
    prev_word:      Option<&'a str>,
    prev_tag:       Option<&'static str>,
    sentence_start: bool,
}

impl<'a> Context<'a> {
    fn prev_tag_in(&self, tags: &[&str]) -> bool {
        self.prev_tag.is_some_and(|t| tags.contains(&t))
    }

    fn expects_verb(&self) -> bool {
        self.prev_tag_in(&["TO", "MD"])
            || self.prev_word.is_some_and(|w| SUBJECT_PRONOUNS.contains(&w))
    }

    fn after_perfect_or_passive(&self) -> bool {
        self.prev_word
            .is_some_and(|w| PERFECT_OR_PASSIVE.contains(&w))
    }
}

impl LexiconTagger {
    pub fn new() -> Self {
        let pairs = |list: &[(&'static str, &'static str)]| -> Vec<(String, &'static str)> {
            list.iter().map(|(w, t)| (w.to_string(), *t)).collect()
        };

        Self { lexicon: HashMap::new() }
            .with_pairs(pairs(AUXILIARIES))
            .with_pairs(pairs(WH_WORDS))
            .with_pairs(pairs(COMPARATIVES))
            .with_words("DT", DETERMINERS)
            .with_words("IN", PREPOSITIONS)
            .with_words("CC", CONJUNCTIONS)
            .with_words("PRP", PRONOUNS)
            .with_words("PRP$", POSSESSIVES)
            .with_words("MD", MODALS)
            .with_words("CD", NUMBER_WORDS)
            .with_words("TO", &["to"])
            .with_words("EX", &["there's"])
            .with_words("NN", NOUN_EXCEPTIONS)
            .with_words("VB", BASE_VERBS)
            .with_words("VBD", PAST_FORMS)
            .with_words("VBN", PARTICIPLES)
            .with_words("RB", ADVERBS)
            .with_words("JJ", ADJECTIVES)
    }

    /// Add words under one tag. Earlier entries win, so the more
    /// specific lists are registered first.
    fn with_words(mut self, tag: &'static str, words: &[&str]) -> Self {
        for word in words {
            self.lexicon.entry(word.to_string()).or_insert(tag);
        }
        self
    }

    fn with_pairs(mut self, pairs: Vec<(String, &'static str)>) -> Self {
        for (word, tag) in pairs {
            self.lexicon.entry(word).or_insert(tag);
        }
        self
    }

    fn lookup(&self, lower: &str) -> Option<&'static str> {
        self.lexicon.get(lower).copied()
    }

    fn tag_word(&self, text: &str, lower: &str, ctx: &Context<'_>) -> &'static str {
        if !text.chars().any(char::is_alphanumeric) {
            return punctuation_tag(text);
        }
        if text.chars().all(char::is_numeric) {
            return "CD";
        }
        if let Some(tag) = self.lookup(lower) {
            if tag == "IN" && VERB_PREPOSITIONS.contains(&lower) && ctx.expects_verb() {
                return resolve_known("VB", ctx);
            }
            return resolve_known(tag, ctx);
        }
        self.guess_unknown(text, lower, ctx)
    }

    fn guess_unknown(&self, text: &str, lower: &str, ctx: &Context<'_>) -> &'static str {
        let starts_upper = text.chars().next().is_some_and(char::is_uppercase);
        if starts_upper && !ctx.sentence_start {
            return "NNP";
        }

        let len = lower.chars().count();

        if len > 4 && lower.ends_with("ly") {
            return "RB";
        }
        if len > 4 && lower.ends_with("ing") {
            return if ctx.prev_tag_in(NOMINAL_CONTEXT) { "NN" } else { "VBG" };
        }
        if len > 4 && lower.ends_with("ed") {
            if ctx.after_perfect_or_passive() {
                return "VBN";
            }
            return if ctx.prev_tag_in(&["DT", "PRP$"]) { "JJ" } else { "VBD" };
        }
        if len > 4 && ADJECTIVE_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
            return "JJ";
        }
        if len > 3
            && lower.ends_with('s')
            && !lower.ends_with("ss")
            && !lower.ends_with("us")
            && !lower.ends_with("is")
        {
            return self.tag_s_form(lower, ctx);
        }

        "NN"
    }

    /// "-s" words are either plural nouns or 3rd-person verbs
    fn tag_s_form(&self, lower: &str, ctx: &Context<'_>) -> &'static str {
        let stem = &lower[..lower.len() - 1];
        let stem_es = lower.strip_suffix("es").unwrap_or(stem);
        let is_verb_stem = self.lookup(stem) == Some("VB")
            || self.lookup(stem_es) == Some("VB")
            || VERB_PREPOSITIONS.contains(&stem);

        let subject_before = ctx.prev_tag_in(&["NN", "NNP"])
            || ctx.prev_word.is_some_and(|w| matches!(w, "he" | "she" | "it"));

        if is_verb_stem && subject_before {
            "VBZ"
        } else {
            "NNS"
        }
    }
}

impl Default for LexiconTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl PosTagger for LexiconTagger {
    fn tag(&self, tokens: &[Token]) -> Result<Vec<String>> {
        let lowered: Vec<String> = tokens.iter().map(|t| t.text.to_lowercase()).collect();
        let mut tags: Vec<&'static str> = Vec::with_capacity(tokens.len());

        for (i, token) in tokens.iter().enumerate() {
            if token.text.is_empty() || token.text.chars().any(char::is_whitespace) {
                bail!("malformed token {:?} at position {}", token.text, i);
            }

            let prev_tag = i.checked_sub(1).map(|p| tags[p]);
            let ctx = Context {
                prev_word:      i.checked_sub(1).map(|p| lowered[p].as_str()),
                prev_tag,
                sentence_start: prev_tag.map_or(true, |t| t == "."),
            };

            tags.push(self.tag_word(&token.text, &lowered[i], &ctx));
        }

        Ok(tags.into_iter().map(String::from).collect())
    }

    fn name(&self) -> &'static str {
        "lexicon"
    }
}

/// Context fix-ups for words found in the lexicon
fn resolve_known(tag: &'static str, ctx: &Context<'_>) -> &'static str {
    match tag {
        "VB" => {
            if ctx.prev_tag_in(&["TO", "MD"]) {
                "VB"
            } else if ctx.prev_tag_in(NOMINAL_CONTEXT) {
                "NN"
            } else if ctx.prev_tag_in(&["PRP", "NNS", "WP"]) {
                "VBP"
            } else {
                "VB"
            }
        }
        "VBD" if ctx.after_perfect_or_passive() => "VBN",
        other => other,
    }
}

/// Tag for a token with no letters or digits
fn punctuation_tag(text: &str) -> &'static str {
    if text.chars().any(|c| matches!(c, '.' | '!' | '?')) {
        return ".";
    }
    match text.chars().next() {
        Some(',') => ",",
        Some(':' | ';' | '-' | '–' | '—') => ":",
        Some('(' | '[' | '{') => "(",
        Some(')' | ']' | '}') => ")",
        Some('"' | '\'' | '“' | '”' | '‘' | '’' | '`') => "''",
        Some('$') => "$",
        Some('#') => "#",
        _ => "SYM",
    }
}
