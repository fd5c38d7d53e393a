// 行分割
// `\n`・`\r\n`・単独の `\r` のいずれも行末として扱う

use std::collections::VecDeque;
use std::io::{self, BufRead};

/// ユニバーサル改行で行を返すイテレータ
///
/// 戻り値の行には行末文字を含まない。不正なUTF-8は
/// `io::ErrorKind::InvalidData` として返す。
pub struct UniversalLines<R> {
    reader: R,
    buf: Vec<u8>,
    pending: VecDeque<String>,
}

impl<R: BufRead> UniversalLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            pending: VecDeque::new(),
        }
    }

    /// `\n` までを1チャンクとして読み、`\r` で行に分ける
    fn fill(&mut self) -> io::Result<bool> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(false);
        }

        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
        }
        // `\r\n` の `\r`、またはEOF直前の単独 `\r`
        if self.buf.last() == Some(&b'\r') {
            self.buf.pop();
        }

        let chunk = std::str::from_utf8(&self.buf)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pending.extend(chunk.split('\r').map(str::to_owned));
        Ok(true)
    }
}

impl<R: BufRead> Iterator for UniversalLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(line) = self.pending.pop_front() {
            return Some(Ok(line));
        }

        match self.fill() {
            Ok(true) => self.pending.pop_front().map(Ok),
            Ok(false) => None,
            Err(e) => Some(Err(e)),
        }
    }
}

/// [`UniversalLines`] を作成する
pub fn universal_lines<R: BufRead>(reader: R) -> UniversalLines<R> {
    UniversalLines::new(reader)
}
