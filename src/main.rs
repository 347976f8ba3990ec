// ============================================
// src/main.rs (メインファイル)
// ============================================

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event;
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::prelude::*;
use tracing::{Level, info};

mod canvas;
mod font;
mod geometry;
mod input;
mod quiz;
mod terminal;
mod vocabulary;

use font::Fonts;
use input::InputTracker;
use quiz::QuizState;
use terminal::{TerminalCanvas, Viewport, restore_terminal, setup_terminal};

/// 1フレームの長さ (60fps)
const FRAME: Duration = Duration::from_micros(16_667);

// --------------------------------------------------
// コマンドライン引数
// --------------------------------------------------

#[derive(Debug, Parser)]
#[command(name = "sushi-kanji-quiz", version, about = "寿司ネタの漢字クイズ")]
struct Cli {
    /// 乱数のシード（指定すると毎回同じ順番で出題される）
    #[arg(long)]
    seed: Option<u64>,

    /// ログの出力先ファイル（指定しなければログは出さない）
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// デバッグログも出力する
    #[arg(short, long)]
    verbose: bool,
}

// --------------------------------------------------
// メイン関数 (TUIセットアップと実行ループ)
// --------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    // フォントが作れなければ起動しない
    let fonts = Fonts::load().context("failed to load fonts")?;

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut state = QuizState::new(rng)?;
    info!(seed = ?cli.seed, "starting");

    let mut terminal = setup_terminal().context("failed to set up terminal")?;
    let result = run_app(&mut terminal, &mut state, &fonts);
    // ループがエラーで抜けても端末は元に戻す
    restore_terminal(&mut terminal).context("failed to restore terminal")?;

    info!(
        phase = ?state.phase(),
        score = state.score(),
        best = state.best_score(),
        "quit"
    );
    result.context("game loop failed")
}

/// 標準出力は画面描画に使うので、ログはファイルにだけ書く
fn init_logging(cli: &Cli) -> Result<()> {
    let Some(path) = &cli.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .init();
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<impl Backend>,
    state: &mut QuizState,
    fonts: &Fonts,
) -> io::Result<()> {
    let mut tracker = InputTracker::default();
    let size = terminal.size()?;
    let mut viewport = Viewport::new(
        Rect::new(0, 0, size.width, size.height),
        state.layout(size.width, size.height),
    );

    loop {
        // フレームの残り時間だけイベントを待つ
        let deadline = Instant::now() + FRAME;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() || !event::poll(remaining)? {
                break;
            }
            tracker.handle_event(&event::read()?, &viewport);
        }

        if tracker.quit_requested() {
            break;
        }

        state.update(&tracker.take_frame());

        terminal.draw(|f| {
            let area = f.area();
            viewport = Viewport::new(area, state.layout(area.width, area.height));
            let mut canvas = TerminalCanvas::new(f.buffer_mut(), viewport);
            state.draw(&mut canvas, fonts);
        })?;
    }

    Ok(())
}
