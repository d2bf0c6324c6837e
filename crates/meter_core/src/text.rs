//! 固定幅テキスト整形
//!
//! 画素を保持するディスプレイでは、前回より短い文字列を描くと末尾に
//! 古い文字が残ります。常に同じ幅で描画することで文字だけを書き換えます。

/// 文字数が `min_len` 以上になるまで `pad_char` を末尾に追加する
///
/// 既に `min_len` 以上の場合はそのまま返します（切り詰めはしません）。
///
/// # Examples
/// ```
/// use meter_core::text::pad;
///
/// assert_eq!(pad("abc", 6, ' '), "abc   ");
/// assert_eq!(pad("abcdefgh", 6, ' '), "abcdefgh");
/// ```
pub fn pad(text: &str, min_len: usize, pad_char: char) -> String {
    let mut padded = String::from(text);
    let mut len = padded.chars().count();
    while len < min_len {
        padded.push(pad_char);
        len += 1;
    }
    padded
}

/// 表示用の1行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayLine {
    text: String,
    min_width: usize,
}

impl DisplayLine {
    pub fn new(text: impl Into<String>, min_width: usize) -> Self {
        Self {
            text: text.into(),
            min_width,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn min_width(&self) -> usize {
        self.min_width
    }

    /// 空白で最小幅まで埋めた文字列
    pub fn render(&self) -> String {
        pad(&self.text, self.min_width, ' ')
    }
}
