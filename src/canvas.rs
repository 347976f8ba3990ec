// ============================================
// src/canvas.rs
// 描画先の抽象と配色
// ============================================

use crate::font::Face;
use crate::geometry::Bounds;

/// RGBA の色
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Rgba(pub u8, pub u8, pub u8, pub u8);

// 配色 (寿司屋のカウンターっぽい木目色)
pub const BACKGROUND: Rgba = Rgba(240, 220, 180, 255);
pub const BAR: Rgba = Rgba(80, 40, 20, 255);
pub const CARD: Rgba = Rgba(220, 220, 220, 255);
pub const CARD_PANEL: Rgba = Rgba(255, 255, 255, 255);
pub const TEXT: Rgba = Rgba(0, 0, 0, 255);
pub const SCORE_TEXT: Rgba = Rgba(255, 255, 255, 255);
pub const GAME_OVER_TEXT: Rgba = Rgba(200, 30, 30, 255);
pub const INSTRUCTION_TEXT: Rgba = Rgba(80, 40, 20, 255);

/// 論理座標 (640x480) で描画できる描画先
pub trait Canvas {
    /// 画面全体を塗りつぶす
    fn fill(&mut self, color: Rgba);

    /// 矩形を塗りつぶす
    fn fill_rect(&mut self, bounds: Bounds, color: Rgba);

    /// 文字列を描く。`(x, y)` は左端とベースライン
    fn draw_text(&mut self, text: &str, face: &Face, x: i32, y: i32, color: Rgba);
}
