use super::{split_ja_spans, LineTokenizer, Span};
use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

/// ひらがな・カタカナ・CJK統合漢字の1文字にマッチするパターン
pub const JA_CHAR_PATTERN: &str = r"[\x{3040}-\x{309F}\x{30A0}-\x{30FF}\x{4E00}-\x{9FFF}]";

static JA_CHAR_REGEX: OnceLock<Regex> = OnceLock::new();

/// コンパイル済みパターンを取得（プロセス内で一度だけコンパイル）
pub fn ja_char_pattern() -> &'static Regex {
    JA_CHAR_REGEX.get_or_init(|| Regex::new(JA_CHAR_PATTERN).expect("JA_CHAR_PATTERN is valid"))
}

/// 1文字が日本語文字クラスに属するか
pub fn is_ja_char(c: char) -> bool {
    matches!(c, '\u{3040}'..='\u{309F}' | '\u{30A0}'..='\u{30FF}' | '\u{4E00}'..='\u{9FFF}')
}

/// 行・スパンの前後から落とす空白文字か
///
/// Unicode の White_Space に加えて、情報分離文字 U+001C〜U+001F も空白とみなす。
pub fn is_strip_whitespace(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

fn strip(text: &str) -> &str {
    text.trim_matches(is_strip_whitespace)
}

/// 日本語文字単位で分割するトークナイザー
///
/// 日本語文字は1文字ずつトークンになり、それ以外のテキストは
/// 前後の空白を落として大文字化する。日本語文字に挟まれた英単語列は
/// 単語ごとには分割せず、まとめて1トークンとして扱う。
///
/// ```
/// use ja_bpe_prep::tokenizer::{JaCharTokenizer, LineTokenizer};
///
/// let tokenizer = JaCharTokenizer::new();
/// assert_eq!(
///     tokenizer.tokenize("こんにちは世界は hello world の日本語"),
///     "こ ん に ち は 世 界 は HELLO WORLD の 日 本 語"
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JaCharTokenizer;

impl JaCharTokenizer {
    pub fn new() -> Self {
        Self
    }
}

impl LineTokenizer for JaCharTokenizer {
    fn tokens<'a>(&self, line: &'a str) -> Vec<Cow<'a, str>> {
        split_ja_spans(strip(line))
            .into_iter()
            .filter_map(|span| match span {
                Span::Ja(c) => Some(Cow::Borrowed(c)),
                Span::Other(text) => {
                    let text = strip(text);
                    if text.is_empty() {
                        None
                    } else {
                        Some(Cow::Owned(text.to_uppercase()))
                    }
                }
            })
            .collect()
    }
}

/// [`JaCharTokenizer`] で1行を変換する
pub fn tokenize_by_ja_char(line: &str) -> String {
    JaCharTokenizer.tokenize(line)
}
