// ============================================
// src/terminal.rs
// 端末（ratatui + crossterm）を描画先として使うための部品
// ============================================

use std::io::{Result, stdout};

use crossterm::{
    ExecutableCommand,
    cursor::Hide,
    event::{DisableMouseCapture, EnableMouseCapture},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    buffer::Buffer,
    prelude::*,
    style::{Color, Modifier, Style},
};

use crate::canvas::{Canvas, Rgba};
use crate::font::{FONT_SIZE, Face, Measure};
use crate::geometry::{Bounds, Point};

pub const WINDOW_TITLE: &str = "Sushi Kanji Quiz";

// --------------------------------------------------
// 座標変換
// --------------------------------------------------

/// 論理画面と端末のセルの対応
///
/// セルは中心の論理座標で代表させる。塗りつぶしもクリック位置も
/// この中心を使うので、塗られたカードのセルをクリックすると必ずそのカードに当たる。
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Viewport {
    area: Rect,
    logical_width: i32,
    logical_height: i32,
}

impl Viewport {
    /// `logical` は `QuizState::layout` が返す論理サイズ
    pub fn new(area: Rect, logical: (i32, i32)) -> Self {
        Self {
            area,
            logical_width: logical.0,
            logical_height: logical.1,
        }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    /// セル (column, row) の中心の論理座標
    pub fn to_logical(&self, column: u16, row: u16) -> Point {
        let col = i32::from(column) - i32::from(self.area.x);
        let row = i32::from(row) - i32::from(self.area.y);
        let width = i32::from(self.area.width).max(1);
        let height = i32::from(self.area.height).max(1);
        Point::new(
            ((2 * col + 1) * self.logical_width).div_euclid(2 * width),
            ((2 * row + 1) * self.logical_height).div_euclid(2 * height),
        )
    }

    /// 論理 x を含む列（画面外なら端に寄せる）
    fn column_of(&self, x: i32) -> u16 {
        let width = i32::from(self.area.width);
        let offset = (x * width).div_euclid(self.logical_width.max(1));
        let offset = offset.clamp(0, (width - 1).max(0));
        self.area.x + offset as u16
    }

    /// 論理 y を含む行（画面外なら端に寄せる）
    fn row_of(&self, y: i32) -> u16 {
        let height = i32::from(self.area.height);
        let offset = (y * height).div_euclid(self.logical_height.max(1));
        let offset = offset.clamp(0, (height - 1).max(0));
        self.area.y + offset as u16
    }

    /// 中心が `bounds` に入るセルを列挙する
    fn cells_in(&self, bounds: Bounds) -> impl Iterator<Item = (u16, u16)> + '_ {
        let area = self.area;
        (area.top()..area.bottom()).flat_map(move |row| {
            (area.left()..area.right())
                .filter(move |&column| bounds.contains(self.to_logical(column, row)))
                .map(move |column| (column, row))
        })
    }
}

fn to_color(color: Rgba) -> Color {
    // 端末にはアルファがない
    Color::Rgb(color.0, color.1, color.2)
}

// --------------------------------------------------
// 描画先
// --------------------------------------------------

/// ratatui のバッファに論理座標で描く
pub struct TerminalCanvas<'a> {
    buffer: &'a mut Buffer,
    viewport: Viewport,
}

impl<'a> TerminalCanvas<'a> {
    pub fn new(buffer: &'a mut Buffer, viewport: Viewport) -> Self {
        Self { buffer, viewport }
    }
}

impl Canvas for TerminalCanvas<'_> {
    fn fill(&mut self, color: Rgba) {
        let area = self.viewport.area().intersection(self.buffer.area);
        for row in area.top()..area.bottom() {
            for column in area.left()..area.right() {
                if let Some(cell) = self.buffer.cell_mut((column, row)) {
                    cell.reset();
                    cell.set_bg(to_color(color));
                }
            }
        }
    }

    fn fill_rect(&mut self, bounds: Bounds, color: Rgba) {
        let viewport = self.viewport;
        for (column, row) in viewport.cells_in(bounds) {
            if let Some(cell) = self.buffer.cell_mut((column, row)) {
                cell.set_bg(to_color(color));
            }
        }
    }

    fn draw_text(&mut self, text: &str, face: &Face, x: i32, y: i32, color: Rgba) {
        let area = self.viewport.area().intersection(self.buffer.area);
        if area.is_empty() {
            return;
        }

        // 論理座標での文字列の中心を、端末上の文字列の中心に合わせる
        let extent = face.measure(text);
        let center_column = self.viewport.column_of(x + extent.width / 2);
        let row = self.viewport.row_of(y - extent.height / 2);

        let columns = Line::from(text).width() as u16;
        let start = center_column
            .saturating_sub(columns / 2)
            .max(area.left())
            .min(area.right().saturating_sub(columns).max(area.left()));
        let max_width = usize::from(area.right() - start);

        let mut style = Style::default().fg(to_color(color));
        if face.size() > FONT_SIZE {
            style = style.add_modifier(Modifier::BOLD);
        }
        self.buffer.set_stringn(start, row, text, max_width, style);
    }
}

// --------------------------------------------------
// 端末のセットアップ
// --------------------------------------------------

pub fn setup_terminal() -> Result<Terminal<impl Backend>> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?; // 代替スクリーンを使用
    stdout().execute(EnableMouseCapture)?; // クリックを受け取る
    stdout().execute(Hide)?; // カーソルを非表示
    stdout().execute(SetTitle(WINDOW_TITLE))?;
    let backend = CrosstermBackend::new(stdout());
    Terminal::new(backend)
}

pub fn restore_terminal(terminal: &mut Terminal<impl Backend>) -> Result<()> {
    terminal.show_cursor()?; // カーソルを再表示
    stdout().execute(DisableMouseCapture)?;
    stdout().execute(LeaveAlternateScreen)?; // 代替スクリーンを終了
    disable_raw_mode()?;
    Ok(())
}
