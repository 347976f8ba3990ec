// ============================================
// src/quiz.rs
// クイズの状態管理（出題・判定・描画）
// ============================================

use std::collections::HashSet;

use rand::Rng;
use rand::rngs::StdRng;
use thiserror::Error;
use tracing::{debug, info};

use crate::canvas::{self, Canvas};
use crate::font::{Face, Fonts, Measure, choose_face};
use crate::geometry::{
    Bounds, CARD_LABEL_WIDTH, OPTION_COUNT, SCREEN_HEIGHT, SCREEN_WIDTH, card_at, card_bounds,
};
use crate::input::FrameInput;
use crate::vocabulary::{VOCABULARY, VocabularyEntry};

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("vocabulary needs at least {needed} entries, got {got}")]
    VocabularyTooSmall { needed: usize, got: usize },
}

/// ゲームの進行状態
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Phase {
    Playing,
    GameOver,
}

/// 1問分のデータ（出題のたびに丸ごと作り直す）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    /// 出題中の単語の番号
    pub item_index: usize,
    /// 各カードに表示する単語の番号
    pub option_indices: [usize; OPTION_COUNT],
    /// 正解カードの位置
    pub correct_index: usize,
}

impl Round {
    /// ランダムに1問作る
    ///
    /// 不正解の選択肢は、まだ使っていない番号が出るまで引き直す。
    /// `len` が選択肢の数以上でないと終わらない。
    fn generate(rng: &mut StdRng, len: usize) -> Self {
        debug_assert!(len >= OPTION_COUNT, "vocabulary smaller than option count");

        let item_index = rng.random_range(0..len);
        let correct_index = rng.random_range(0..OPTION_COUNT);

        let mut option_indices = [item_index; OPTION_COUNT];
        let mut used = HashSet::from([item_index]);
        for (slot, option) in option_indices.iter_mut().enumerate() {
            if slot == correct_index {
                continue;
            }
            *option = loop {
                let candidate = rng.random_range(0..len);
                if used.insert(candidate) {
                    break candidate;
                }
            };
        }

        Self {
            item_index,
            option_indices,
            correct_index,
        }
    }
}

/// ゲーム全体の状態
pub struct QuizState {
    vocabulary: &'static [VocabularyEntry],
    round: Round,
    score: u32,
    best_score: u32,
    phase: Phase,
    rng: StdRng,
}

impl QuizState {
    /// 組み込みの寿司ネタで初期化する
    pub fn new(rng: StdRng) -> Result<Self, QuizError> {
        Self::with_vocabulary(VOCABULARY, rng)
    }

    /// 任意の単語リストで初期化し、最初の問題を出す
    pub fn with_vocabulary(
        vocabulary: &'static [VocabularyEntry],
        mut rng: StdRng,
    ) -> Result<Self, QuizError> {
        if vocabulary.len() < OPTION_COUNT {
            return Err(QuizError::VocabularyTooSmall {
                needed: OPTION_COUNT,
                got: vocabulary.len(),
            });
        }
        let round = Round::generate(&mut rng, vocabulary.len());
        let state = Self {
            vocabulary,
            round,
            score: 0,
            best_score: 0,
            phase: Phase::Playing,
            rng,
        };
        state.trace_round();
        Ok(state)
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// 出題中の単語
    pub fn current_item(&self) -> &VocabularyEntry {
        &self.vocabulary[self.round.item_index]
    }

    /// `slot` 番目のカードに表示する英語名
    pub fn option(&self, slot: usize) -> &'static str {
        self.vocabulary[self.round.option_indices[slot]].english
    }

    /// 新しい問題に切り替える
    pub fn start_new_round(&mut self) {
        self.round = Round::generate(&mut self.rng, self.vocabulary.len());
        self.trace_round();
    }

    fn trace_round(&self) {
        let item = self.current_item();
        debug!(
            kanji = item.kanji,
            correct = item.english,
            index = self.round().correct_index,
            "new round"
        );
    }

    fn record_best(&mut self) {
        if self.score > self.best_score {
            self.best_score = self.score;
        }
    }

    /// 1フレーム分の状態更新
    pub fn update(&mut self, input: &FrameInput) {
        match self.phase {
            Phase::GameOver => {
                if input.restart {
                    info!(best = self.best_score, "restart");
                    self.phase = Phase::Playing;
                    self.score = 0;
                    self.start_new_round();
                }
            }
            Phase::Playing => {
                if !input.left_pressed {
                    return;
                }
                // カードは重ならないので、最初に当たった1枚だけを処理する
                let Some(slot) = card_at(input.cursor) else {
                    return;
                };
                if slot == self.round.correct_index {
                    self.score += 1;
                    self.record_best();
                    debug!(score = self.score, "correct answer");
                    self.start_new_round();
                } else {
                    self.record_best();
                    self.phase = Phase::GameOver;
                    info!(score = self.score, best = self.best_score, "game over");
                }
            }
        }
    }

    /// 現在の状態を描画する（状態は変更しない）
    pub fn draw(&self, screen: &mut impl Canvas, fonts: &Fonts) {
        // 背景 (寿司屋のカウンター)
        screen.fill(canvas::BACKGROUND);

        // 上下の飾り帯
        screen.fill_rect(Bounds::new(0, 0, SCREEN_WIDTH, 40), canvas::BAR);
        screen.fill_rect(
            Bounds::new(0, SCREEN_HEIGHT - 40, SCREEN_WIDTH, 40),
            canvas::BAR,
        );

        match self.phase {
            Phase::GameOver => self.draw_game_over(screen, fonts),
            Phase::Playing => self.draw_playing(screen, fonts),
        }
    }

    fn draw_game_over(&self, screen: &mut impl Canvas, fonts: &Fonts) {
        let body = &fonts.body;
        let mut y = SCREEN_HEIGHT / 2 - 40;
        draw_centered(screen, "Game Over!", body, y, canvas::GAME_OVER_TEXT);

        y += 40;
        let score = format!("Your Score: {}", self.score);
        draw_centered(screen, &score, body, y, canvas::TEXT);

        y += 40;
        let best = format!("Best Score: {}", self.best_score);
        draw_centered(screen, &best, body, y, canvas::TEXT);

        y += 60;
        draw_centered(screen, "Press SPACE to restart", body, y, canvas::TEXT);
    }

    fn draw_playing(&self, screen: &mut impl Canvas, fonts: &Fonts) {
        // スコア
        let score = format!("Score: {}  Best: {}", self.score, self.best_score);
        screen.draw_text(&score, &fonts.body, 20, 30, canvas::SCORE_TEXT);

        // 漢字
        let kanji = self.current_item().kanji;
        let extent = fonts.large.measure(kanji);
        let x = (SCREEN_WIDTH - extent.width) / 2;
        let y = SCREEN_HEIGHT / 3 + extent.height / 2;
        screen.draw_text(kanji, &fonts.large, x, y, canvas::TEXT);

        // 選択肢カード
        for slot in 0..OPTION_COUNT {
            let card = card_bounds(slot);
            screen.fill_rect(card, canvas::CARD);
            screen.fill_rect(card.inset(2), canvas::CARD_PANEL);

            let label = self.option(slot);
            let face = choose_face(label, CARD_LABEL_WIDTH, &fonts.body, &fonts.reduced);
            let extent = face.measure(label);
            let x = card.x + (card.width - extent.width) / 2;
            let y = card.y + card.height / 2 + extent.height / 4;
            screen.draw_text(label, face, x, y, canvas::TEXT);
        }

        // 操作説明
        draw_centered(
            screen,
            "Click on the correct English name",
            &fonts.body,
            SCREEN_HEIGHT - 60,
            canvas::INSTRUCTION_TEXT,
        );
    }

    /// 論理画面サイズを返す。ウィンドウの大きさには依存しない
    pub fn layout(&self, _outside_width: u16, _outside_height: u16) -> (i32, i32) {
        (SCREEN_WIDTH, SCREEN_HEIGHT)
    }
}

/// 画面幅に対して水平中央に描く
fn draw_centered(
    screen: &mut impl Canvas,
    text: &str,
    face: &Face,
    y: i32,
    color: canvas::Rgba,
) {
    let extent = face.measure(text);
    let x = (SCREEN_WIDTH - extent.width) / 2;
    screen.draw_text(text, face, x, y, color);
}
