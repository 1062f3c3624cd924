// Word extraction — raw text to normalized tokens.
//
// The whole input is lowercased first, then words are pulled out with a
// single pattern: a run of letters from the accepted alphabets, length >= 2,
// optionally extended by hyphen-joined runs of the same shape. Everything
// else (digits, punctuation, whitespace, symbols) is a separator and never
// produces a token.
//
// The accepted alphabets are a constructor input; the pattern is compiled
// once and reused for every document.

use anyhow::Result;
use regex_lite::Regex;

/// An alphabet the tokenizer accepts, as a character range in the word
/// pattern.
///
/// The Cyrillic range is `а-я` exactly: `ё` sits outside it and acts as a
/// separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alphabet {
    Latin,
    Cyrillic,
}

impl Alphabet {
    /// The default alphabet set: Latin plus Cyrillic.
    pub const DEFAULT: &'static [Alphabet] = &[Alphabet::Latin, Alphabet::Cyrillic];

    /// The character range this alphabet contributes to the word pattern.
    pub fn range(self) -> &'static str {
        match self {
            Alphabet::Latin => "a-z",
            Alphabet::Cyrillic => "а-я",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Alphabet::Latin => "latin",
            Alphabet::Cyrillic => "cyrillic",
        }
    }

    /// Parse a comma-separated alphabet list, e.g. `"latin,cyrillic"`.
    /// Used by the configuration layer; names are case-insensitive and
    /// surrounding whitespace is ignored.
    pub fn parse_list(raw: &str) -> Result<Vec<Alphabet>> {
        let mut alphabets = Vec::new();
        for name in raw.split(',') {
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            match name.to_lowercase().as_str() {
                "latin" => alphabets.push(Alphabet::Latin),
                "cyrillic" => alphabets.push(Alphabet::Cyrillic),
                other => anyhow::bail!(
                    "Unknown alphabet {other:?}. Supported alphabets: latin, cyrillic"
                ),
            }
        }
        if alphabets.is_empty() {
            anyhow::bail!("No alphabets given. Supported alphabets: latin, cyrillic");
        }
        Ok(alphabets)
    }
}

/// Extracts normalized word tokens from text.
pub struct Tokenizer {
    word: Regex,
}

impl Tokenizer {
    /// Build a tokenizer accepting the given alphabets.
    ///
    /// The word pattern is `[ranges]{2,}(?:-[ranges]{2,})*`: each
    /// hyphen-separated segment must independently be at least two letters
    /// long, so `co-op` is one token while `a-bc` yields only `bc`.
    pub fn new(alphabets: &[Alphabet]) -> Result<Self> {
        if alphabets.is_empty() {
            anyhow::bail!("Tokenizer needs at least one alphabet");
        }
        let ranges: String = alphabets.iter().map(|a| a.range()).collect();
        let pattern = format!("[{ranges}]{{2,}}(?:-[{ranges}]{{2,}})*");
        Ok(Self {
            word: Regex::new(&pattern)?,
        })
    }

    /// Extract tokens in source order. Identical input always yields the
    /// identical sequence; empty input yields an empty vector.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        self.word
            .find_iter(&lowered)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_tokenizer() -> Tokenizer {
        Tokenizer::new(Alphabet::DEFAULT).unwrap()
    }

    #[test]
    fn lowercases_before_extraction() {
        let tokens = default_tokenizer().tokenize("Hello hello WORLD");
        assert_eq!(tokens, vec!["hello", "hello", "world"]);
    }

    #[test]
    fn short_runs_are_dropped() {
        let tokens = default_tokenizer().tokenize("a I ok go x");
        assert_eq!(tokens, vec!["ok", "go"]);
    }

    #[test]
    fn digits_and_punctuation_are_separators() {
        let tokens = default_tokenizer().tokenize("one,two;three4four");
        assert_eq!(tokens, vec!["one", "two", "three", "four"]);
    }

    #[test]
    fn only_separators_yields_nothing() {
        assert!(default_tokenizer().tokenize("123 !!! --- 456").is_empty());
        assert!(default_tokenizer().tokenize("").is_empty());
    }

    #[test]
    fn hyphen_compound_is_one_token() {
        let tokens = default_tokenizer().tokenize("co-op co op a");
        assert_eq!(tokens, vec!["co-op", "co", "op"]);
    }

    #[test]
    fn short_segment_breaks_the_compound() {
        // "a-bc": the one-letter segment cannot start a token, so only the
        // second segment survives on its own.
        assert_eq!(default_tokenizer().tokenize("a-bc"), vec!["bc"]);
        // "co-o": the trailing one-letter segment is not absorbed.
        assert_eq!(default_tokenizer().tokenize("co-o"), vec!["co"]);
    }

    #[test]
    fn compounds_may_chain() {
        let tokens = default_tokenizer().tokenize("merry-go-round");
        assert_eq!(tokens, vec!["merry-go-round"]);
    }

    #[test]
    fn double_hyphen_splits() {
        assert_eq!(default_tokenizer().tokenize("co--op"), vec!["co", "op"]);
    }

    #[test]
    fn cyrillic_words_are_tokens() {
        let tokens = default_tokenizer().tokenize("Привет мир");
        assert_eq!(tokens, vec!["привет", "мир"]);
    }

    #[test]
    fn latin_only_drops_cyrillic() {
        let tokenizer = Tokenizer::new(&[Alphabet::Latin]).unwrap();
        let tokens = tokenizer.tokenize("hello привет world");
        assert_eq!(tokens, vec!["hello", "world"]);
    }

    #[test]
    fn repeat_runs_yield_identical_tokens() {
        let tokenizer = default_tokenizer();
        let text = "The quick brown fox jumps over the lazy dog";
        assert_eq!(tokenizer.tokenize(text), tokenizer.tokenize(text));
    }

    #[test]
    fn empty_alphabet_list_is_an_error() {
        assert!(Tokenizer::new(&[]).is_err());
    }

    #[test]
    fn parse_list_accepts_names_case_insensitively() {
        let parsed = Alphabet::parse_list("Latin, CYRILLIC").unwrap();
        assert_eq!(parsed, vec![Alphabet::Latin, Alphabet::Cyrillic]);
    }

    #[test]
    fn parse_list_rejects_unknown_names() {
        let err = Alphabet::parse_list("latin,greek").unwrap_err();
        assert!(err.to_string().contains("greek"));
    }

    #[test]
    fn parse_list_rejects_empty_input() {
        assert!(Alphabet::parse_list("").is_err());
        assert!(Alphabet::parse_list(" , ,").is_err());
    }
}
