// ============================================
// src/input.rs
// 端末のイベントを1フレーム分の入力にまとめる
// ============================================

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::geometry::Point;
use crate::terminal::Viewport;

/// 1フレーム分の入力
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct FrameInput {
    /// マウスカーソルの論理座標
    pub cursor: Point,
    /// このフレームで左ボタンが押されたか
    pub left_pressed: bool,
    /// このフレームでリスタートキー (SPACE) が押されたか
    pub restart: bool,
}

/// フレームの間に届いたイベントを溜めておく
#[derive(Debug, Default)]
pub struct InputTracker {
    cursor: Point,
    left_pressed: bool,
    restart: bool,
    quit: bool,
}

impl InputTracker {
    pub fn handle_event(&mut self, event: &Event, viewport: &Viewport) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse, viewport),
            _ => {}
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) {
        // 押した瞬間だけを見る（離した・押しっぱなしは無視）
        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            KeyCode::Char(' ') => self.restart = true,
            KeyCode::Esc | KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit = true
            }
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent, viewport: &Viewport) {
        match mouse.kind {
            MouseEventKind::Down(button) => {
                self.cursor = viewport.to_logical(mouse.column, mouse.row);
                if button == MouseButton::Left {
                    self.left_pressed = true;
                }
            }
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.cursor = viewport.to_logical(mouse.column, mouse.row);
            }
            _ => {}
        }
    }

    /// 終了キーが押されたか
    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// 溜めた入力を取り出す。押下フラグはリセットし、カーソル位置は残す
    pub fn take_frame(&mut self) -> FrameInput {
        let input = FrameInput {
            cursor: self.cursor,
            left_pressed: self.left_pressed,
            restart: self.restart,
        };
        self.left_pressed = false;
        self.restart = false;
        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Rect;

    fn viewport() -> Viewport {
        Viewport::new(Rect::new(0, 0, 80, 24), (640, 480))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn left_click_sets_cursor_and_press() {
        let mut tracker = InputTracker::default();
        tracker.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 10, 5), &viewport());
        let frame = tracker.take_frame();
        assert!(frame.left_pressed);
        assert_eq!(frame.cursor, Point::new(84, 110));
    }

    #[test]
    fn press_flags_last_one_frame() {
        let mut tracker = InputTracker::default();
        tracker.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 10, 5), &viewport());
        tracker.handle_event(&key(KeyCode::Char(' ')), &viewport());
        let first = tracker.take_frame();
        assert!(first.left_pressed);
        assert!(first.restart);

        let second = tracker.take_frame();
        assert!(!second.left_pressed);
        assert!(!second.restart);
        // カーソルは残る
        assert_eq!(second.cursor, Point::new(84, 110));
    }

    #[test]
    fn other_buttons_only_move_the_cursor() {
        let mut tracker = InputTracker::default();
        tracker.handle_event(&mouse(MouseEventKind::Down(MouseButton::Right), 0, 0), &viewport());
        let frame = tracker.take_frame();
        assert!(!frame.left_pressed);
        assert_eq!(frame.cursor, Point::new(4, 10));
    }

    #[test]
    fn movement_updates_cursor_without_press() {
        let mut tracker = InputTracker::default();
        tracker.handle_event(&mouse(MouseEventKind::Moved, 79, 23), &viewport());
        let frame = tracker.take_frame();
        assert!(!frame.left_pressed);
        assert_eq!(frame.cursor, Point::new(636, 470));
    }

    #[test]
    fn key_release_is_ignored() {
        let mut tracker = InputTracker::default();
        let mut release = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        tracker.handle_event(&Event::Key(release), &viewport());
        assert!(!tracker.take_frame().restart);
    }

    #[test]
    fn quit_keys() {
        for event in [
            key(KeyCode::Esc),
            key(KeyCode::Char('q')),
            Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        ] {
            let mut tracker = InputTracker::default();
            tracker.handle_event(&event, &viewport());
            assert!(tracker.quit_requested());
        }

        let mut tracker = InputTracker::default();
        tracker.handle_event(&key(KeyCode::Char('c')), &viewport());
        assert!(!tracker.quit_requested());
    }
}
