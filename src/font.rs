// ============================================
// src/font.rs
// フォント（文字サイズ）と文字列の計測
// ============================================

use ratatui::text::Line;
use thiserror::Error;

/// 本文の文字サイズ
pub const FONT_SIZE: f64 = 24.0;
/// 漢字表示用の文字サイズ
pub const KANJI_SIZE: f64 = 72.0;
/// 長い選択肢用の縮小サイズ
pub const REDUCED_FONT_SIZE: f64 = FONT_SIZE * 0.8;

#[derive(Debug, Error)]
pub enum FontError {
    #[error("invalid font size: {0}")]
    InvalidSize(f64),
}

/// 計測結果（論理座標での幅と高さ）
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Extent {
    pub width: i32,
    pub height: i32,
}

/// 文字列の大きさを測れるもの
pub trait Measure {
    fn measure(&self, text: &str) -> Extent;
}

/// 等幅書体の1サイズ分
///
/// 半角1文字の送り幅はサイズの半分、全角（漢字など）はその2倍。
/// 文字幅の判定は ratatui と同じ unicode 幅を使うので、
/// 端末に描いたときの桁数と計測結果が一致する。
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    size: f64,
}

impl Face {
    pub fn new(size: f64) -> Result<Self, FontError> {
        if !size.is_finite() || size <= 0.0 {
            return Err(FontError::InvalidSize(size));
        }
        Ok(Self { size })
    }

    pub fn size(&self) -> f64 {
        self.size
    }
}

impl Measure for Face {
    fn measure(&self, text: &str) -> Extent {
        let columns = Line::from(text).width() as f64;
        Extent {
            width: (columns * self.size / 2.0).round() as i32,
            height: self.size.round() as i32,
        }
    }
}

/// ゲームで使う3種類のフォント
#[derive(Debug, Clone)]
pub struct Fonts {
    pub body: Face,
    pub large: Face,
    pub reduced: Face,
}

impl Fonts {
    /// 起動時に一度だけ作る。失敗したらゲームは始められない
    pub fn load() -> Result<Self, FontError> {
        Ok(Self {
            body: Face::new(FONT_SIZE)?,
            large: Face::new(KANJI_SIZE)?,
            reduced: Face::new(REDUCED_FONT_SIZE)?,
        })
    }
}

/// `available_width` に収まらない文字列には縮小フォントを選ぶ
pub fn choose_face<'a, F: Measure>(
    text: &str,
    available_width: i32,
    body: &'a F,
    reduced: &'a F,
) -> &'a F {
    if body.measure(text).width > available_width {
        reduced
    } else {
        body
    }
}
