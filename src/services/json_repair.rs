//! Text-rewrite rules that turn a model reply into parseable JSON.
//!
//! Every rule is a pure `&str -> String` function and [`repair`] applies them
//! in [`RULES`] order. The rules are regex based and not string-literal aware:
//! quote normalization, bare-key quoting and comment removal can all touch the
//! contents of string values (an apostrophe in "athlete's" becomes a double
//! quote, a URL loses everything after `//`).

use std::sync::LazyLock;

use regex::Regex;

static CODE_FENCE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"```(?:json)?").unwrap());
static BARE_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([{,]\s*)([A-Za-z0-9_]+)(\s*:)").unwrap());
static TRAILING_COMMA: LazyLock<Regex> = LazyLock::new(|| Regex::new(r",(\s*[}\]])").unwrap());
static DOUBLED_QUOTE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#""([^"]*)"""#).unwrap());
static CONTROL_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\x00-\x1F\x7F-\x9F]").unwrap());
static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/\*[\s\S]*?\*/|//.*").unwrap());

pub type Rule = fn(&str) -> String;

pub const RULES: &[(&str, Rule)] = &[
    ("strip_code_fences", strip_code_fences),
    ("trim", trim),
    ("quote_bare_keys", quote_bare_keys),
    ("normalize_quotes", normalize_quotes),
    ("remove_trailing_commas", remove_trailing_commas),
    ("unescape_quotes", unescape_quotes),
    ("collapse_doubled_quotes", collapse_doubled_quotes),
    ("strip_control_chars", strip_control_chars),
    ("space_after_colon", space_after_colon),
    ("collapse_whitespace", collapse_whitespace),
    ("remove_comments", remove_comments),
    ("escape_newlines", escape_newlines),
];

pub fn repair(raw: &str) -> String {
    RULES.iter().fold(raw.to_string(), |text, (name, rule)| {
        let rewritten = rule(&text);
        if rewritten != text {
            tracing::trace!(rule = %name, "json_repair.rule_applied");
        }
        rewritten
    })
}

pub fn strip_code_fences(text: &str) -> String {
    CODE_FENCE.replace_all(text, "").into_owned()
}

pub fn trim(text: &str) -> String {
    text.trim().to_string()
}

pub fn quote_bare_keys(text: &str) -> String {
    BARE_KEY.replace_all(text, "${1}\"${2}\"${3}").into_owned()
}

pub fn normalize_quotes(text: &str) -> String {
    text.replace('\'', "\"")
}

pub fn remove_trailing_commas(text: &str) -> String {
    TRAILING_COMMA.replace_all(text, "${1}").into_owned()
}

pub fn unescape_quotes(text: &str) -> String {
    text.replace("\\\"", "\"")
}

pub fn collapse_doubled_quotes(text: &str) -> String {
    DOUBLED_QUOTE.replace_all(text, "\"${1}\"").into_owned()
}

pub fn strip_control_chars(text: &str) -> String {
    CONTROL_CHARS.replace_all(text, "").into_owned()
}

pub fn space_after_colon(text: &str) -> String {
    text.replace("\":\"", "\": \"")
}

pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").into_owned()
}

pub fn remove_comments(text: &str) -> String {
    COMMENT.replace_all(text, "").into_owned()
}

pub fn escape_newlines(text: &str) -> String {
    text.replace('\n', "\\n")
}
