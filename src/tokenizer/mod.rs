// 行トークナイザー
//
// 1行の書き起こしテキストをBPE学習用のトークン列に変換する。
// 現在の実装は日本語文字単位の分割のみ（ja_char.rs）。

use std::borrow::Cow;

pub mod ja_char;

pub use ja_char::{
    is_ja_char, is_strip_whitespace, ja_char_pattern, tokenize_by_ja_char, JaCharTokenizer,
};

/// 行を分割したスパン
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span<'a> {
    /// 日本語文字1文字（ひらがな・カタカナ・CJK統合漢字）
    Ja(&'a str),
    /// 日本語文字の間にあるそれ以外のテキスト（空白を含みうる）
    Other(&'a str),
}

impl<'a> Span<'a> {
    pub fn as_str(&self) -> &'a str {
        match self {
            Span::Ja(s) | Span::Other(s) => *s,
        }
    }

    pub fn is_ja(&self) -> bool {
        matches!(self, Span::Ja(_))
    }
}

/// 行トークナイザーのトレイト
pub trait LineTokenizer {
    /// 1行をトークン列に分割する
    fn tokens<'a>(&self, line: &'a str) -> Vec<Cow<'a, str>>;

    /// トークン列を単一スペースで連結した行を返す
    fn tokenize(&self, line: &str) -> String {
        self.tokens(line).join(" ")
    }
}

/// 行を日本語文字スパンとそれ以外のスパンに分割する
///
/// 日本語文字は常に1文字ずつ独立したスパンになる。それ以外のスパンは
/// 日本語文字に挟まれた最大の区間で、空の区間は含まない。
/// スパンを順に連結すると元の行に戻る。
pub fn split_ja_spans(line: &str) -> Vec<Span<'_>> {
    let mut spans = Vec::new();
    let mut last = 0;

    for m in ja_char_pattern().find_iter(line) {
        if m.start() > last {
            spans.push(Span::Other(&line[last..m.start()]));
        }
        spans.push(Span::Ja(m.as_str()));
        last = m.end();
    }

    if last < line.len() {
        spans.push(Span::Other(&line[last..]));
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_ja_spans_mixed() {
        let spans = split_ja_spans("日本 abc語");
        assert_eq!(
            spans,
            vec![
                Span::Ja("日"),
                Span::Ja("本"),
                Span::Other(" abc"),
                Span::Ja("語"),
            ]
        );
    }

    #[test]
    fn test_split_ja_spans_concatenates_back() {
        let line = "  こんにちは世界は hello world の日本語 ";
        let joined: String = split_ja_spans(line).iter().map(Span::as_str).collect();
        assert_eq!(joined, line);
    }

    #[test]
    fn test_split_ja_spans_no_ja() {
        assert_eq!(split_ja_spans("hello world"), vec![Span::Other("hello world")]);
    }

    #[test]
    fn test_split_ja_spans_empty() {
        assert!(split_ja_spans("").is_empty());
    }

    #[test]
    fn test_span_accessors() {
        assert!(Span::Ja("あ").is_ja());
        assert!(!Span::Other("a").is_ja());
        assert_eq!(Span::Other("a b").as_str(), "a b");
    }
}
