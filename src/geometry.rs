// ============================================
// src/geometry.rs
// 論理座標系（640x480）と選択肢カードの配置
// ============================================

/// 論理画面の幅
pub const SCREEN_WIDTH: i32 = 640;
/// 論理画面の高さ
pub const SCREEN_HEIGHT: i32 = 480;

/// 選択肢の数
pub const OPTION_COUNT: usize = 3;

pub const CARD_WIDTH: i32 = 180;
pub const CARD_HEIGHT: i32 = 80;
pub const CARD_SPACING: i32 = 20;
/// カード内でラベルに使える幅（左右の余白を除く）
pub const CARD_LABEL_WIDTH: i32 = CARD_WIDTH - 20;

/// 論理座標上の点
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// 論理座標上の矩形（右端・下端は含まない）
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// 点が矩形の内側にあるか
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.x + self.width && p.y >= self.y && p.y < self.y + self.height
    }

    /// 各辺を `by` だけ内側に縮めた矩形
    pub fn inset(&self, by: i32) -> Self {
        Self::new(
            self.x + by,
            self.y + by,
            self.width - 2 * by,
            self.height - 2 * by,
        )
    }
}

/// `index` 番目の選択肢カードの矩形
///
/// 3枚のカードはまとめて水平方向に中央寄せされ、縦位置は共通。
/// 当たり判定と描画の両方がこの関数を使う。
pub fn card_bounds(index: usize) -> Bounds {
    let total_width = OPTION_COUNT as i32 * CARD_WIDTH + (OPTION_COUNT as i32 - 1) * CARD_SPACING;
    let start_x = (SCREEN_WIDTH - total_width) / 2;
    Bounds::new(
        start_x + index as i32 * (CARD_WIDTH + CARD_SPACING),
        SCREEN_HEIGHT - 150,
        CARD_WIDTH,
        CARD_HEIGHT,
    )
}

/// 点を含むカードの番号（どのカードにも入らなければ `None`）
pub fn card_at(p: Point) -> Option<usize> {
    (0..OPTION_COUNT).find(|&i| card_bounds(i).contains(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cards_are_centered_as_a_group() {
        assert_eq!(card_bounds(0), Bounds::new(30, 330, 180, 80));
        assert_eq!(card_bounds(1), Bounds::new(230, 330, 180, 80));
        assert_eq!(card_bounds(2), Bounds::new(430, 330, 180, 80));
    }

    #[test]
    fn contains_excludes_right_and_bottom_edges() {
        let b = card_bounds(0);
        assert!(b.contains(Point::new(30, 330)));
        assert!(b.contains(Point::new(209, 409)));
        assert!(!b.contains(Point::new(210, 330)));
        assert!(!b.contains(Point::new(30, 410)));
    }

    #[test]
    fn card_at_finds_the_hit_card() {
        assert_eq!(card_at(Point::new(100, 370)), Some(0));
        assert_eq!(card_at(Point::new(300, 370)), Some(1));
        assert_eq!(card_at(Point::new(500, 370)), Some(2));
        // カードの隙間
        assert_eq!(card_at(Point::new(215, 370)), None);
        assert_eq!(card_at(Point::new(10, 10)), None);
    }

    #[test]
    fn inset_shrinks_every_side() {
        assert_eq!(card_bounds(0).inset(2), Bounds::new(32, 332, 176, 76));
    }
}
