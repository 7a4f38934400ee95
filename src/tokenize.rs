//! Tokenization and stop-word filtering.
//!
//! There is no dictionary segmentation: runs of CJK ideographs are expanded
//! into every overlapping 2-, 3- and 4-gram so that frequency counting can
//! surface real multi-character words. Latin and digit runs are kept whole.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

/// Shortest token (in characters) that is counted
pub const MIN_TOKEN_CHARS: usize = 2;

/// Longest CJK n-gram emitted
const MAX_NGRAM: usize = 4;

/// Words shorter than [`MIN_TOKEN_CHARS`] are dropped before this list is consulted.
const STOP_WORDS: &[&str] = &[
    // Chinese function words
    "一个", "没有", "自己", "这个", "那个", "我们", "你们", "他们", "她们", "它们", "什么",
    "因为", "所以", "但是", "而且", "或者", "如果", "虽然", "然后", "可以", "已经", "还是",
    "以及", "之后", "之前", "其中", "对于", "关于", "通过", "进行", "表示", "目前", "今天",
    "昨天",
    // English function words
    "the", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "as", "is", "was", "are", "were", "been", "be", "have", "has", "had", "do",
    "does", "did", "will", "would", "could", "should", "may", "might", "must", "can", "it",
    "its", "this", "that", "these", "those", "you", "he", "she", "we", "they", "his", "her",
    "their", "our", "your", "what", "which", "who", "when", "where", "why", "how", "all",
    "each", "more", "most", "other", "some", "such", "no", "not", "only", "so", "than",
    "too", "very", "just", "also", "now", "here", "there", "then", "if", "about", "into",
    "after", "before", "over", "up", "out", "said", "says",
    // News boilerplate: bylines, wire prefixes and the API's "[+123 chars]" suffix
    "新闻", "记者", "报道", "消息", "据悉", "日电", "chars",
];

lazy_static! {
    /// Maximal runs of CJK ideographs, ASCII letters or ASCII digits
    static ref TOKEN_PATTERN: Regex =
        Regex::new(r"[\x{4e00}-\x{9fa5}]+|[a-zA-Z]+|[0-9]+").expect("token pattern is valid");
    static ref STOP_WORD_SET: HashSet<&'static str> = STOP_WORDS.iter().copied().collect();
}

/// Split text into raw tokens.
///
/// Tokens are emitted in scan order; for a CJK run all 2-grams come first,
/// then the 3-grams, then the 4-grams.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();

    for run in TOKEN_PATTERN.find_iter(text) {
        let run = run.as_str();
        if is_cjk_run(run) {
            push_ngrams(run, &mut tokens);
        } else {
            tokens.push(run.to_string());
        }
    }

    tokens
}

/// Whether a lower-cased token is a stop word
pub fn is_stop_word(token: &str) -> bool {
    STOP_WORD_SET.contains(token)
}

/// Whether a lower-cased token should be counted at all
pub fn is_countable(token: &str) -> bool {
    token.chars().count() >= MIN_TOKEN_CHARS && !is_stop_word(token)
}

fn is_cjk_run(run: &str) -> bool {
    run.chars().next().is_some_and(is_cjk)
}

fn is_cjk(c: char) -> bool {
    ('\u{4e00}'..='\u{9fa5}').contains(&c)
}

fn push_ngrams(run: &str, tokens: &mut Vec<String>) {
    let chars: Vec<char> = run.chars().collect();
    for n in 2..=MAX_NGRAM {
        if chars.len() < n {
            break;
        }
        tokens.extend(chars.windows(n).map(|w| w.iter().collect::<String>()));
    }
}
