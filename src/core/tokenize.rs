use regex::Regex;
use std::sync::OnceLock;

/// Whole lowercase ASCII words of three letters or more. Shorter tokens
/// ("a", "of", "be") carry no theological weight and are skipped.
const TOKEN_PATTERN: &str = r"\b[a-z]{3,}\b";

fn token_regex() -> &'static Regex {
    static TOKEN_RE: OnceLock<Regex> = OnceLock::new();
    TOKEN_RE.get_or_init(|| Regex::new(TOKEN_PATTERN).expect("token pattern compiles"))
}

/// Lowercases `text` and returns its tokens in order of appearance.
///
/// Word boundaries are Unicode-aware, so a run like `abc1` or `caf\u{e9}`
/// yields nothing rather than a partial word.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    token_regex()
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}
