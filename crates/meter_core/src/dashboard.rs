//! 表示レイアウトと描画
//!
//! 240x135 (ST7789, 横向き) を想定した固定配置です。

use embedded_graphics::pixelcolor::{Rgb565, RgbColor, WebColors};

use crate::ports::{DisplaySink, TextSize};
use crate::reading::MeterSnapshot;
use crate::report::{level_line, panel_lines, DECORATION_TEXT};

/// 表示幅（px）
pub const SCREEN_WIDTH: u32 = 240;

/// 表示高さ（px）
pub const SCREEN_HEIGHT: u32 = 135;

pub const SCREEN_BACKGROUND: Rgb565 = Rgb565::BLACK;

pub const PANEL_FOREGROUND: Rgb565 = Rgb565::WHITE;

pub const DECORATION_FOREGROUND: Rgb565 = Rgb565::CSS_LIGHT_SKY_BLUE;

/// 装飾文字列の位置
pub const DECORATION_POSITION: (i32, i32) = (8, 4);

/// レベル値（大きい文字）の位置
pub const LEVEL_POSITION: (i32, i32) = (8, 40);

/// "dB" 単位表示の位置
pub const UNIT_POSITION: (i32, i32) = (8, 64);

/// 環境値パネルの左上
pub const PANEL_ORIGIN: (i32, i32) = (128, 40);

/// パネル行の間隔（px）
pub const PANEL_LINE_SPACING: i32 = 14;

/// 起動時に一度だけ描画する部分
pub fn render_static<D: DisplaySink>(display: &mut D) -> Result<(), D::Error> {
    display.clear(SCREEN_BACKGROUND)?;
    display.draw_text(
        DECORATION_TEXT,
        DECORATION_POSITION.0,
        DECORATION_POSITION.1,
        DECORATION_FOREGROUND,
        SCREEN_BACKGROUND,
        TextSize::Small,
    )?;
    display.draw_text(
        "dB",
        UNIT_POSITION.0,
        UNIT_POSITION.1,
        PANEL_FOREGROUND,
        SCREEN_BACKGROUND,
        TextSize::Small,
    )
}

/// 毎周期の描画
///
/// 全ての文字列は固定幅なので、画面のクリアは行いません。
pub fn render_snapshot<D: DisplaySink>(
    display: &mut D,
    snapshot: &MeterSnapshot,
) -> Result<(), D::Error> {
    let level = level_line(snapshot).render();
    display.draw_text(
        &level,
        LEVEL_POSITION.0,
        LEVEL_POSITION.1,
        snapshot.band.foreground_color(),
        snapshot.band.background_color(),
        TextSize::Large,
    )?;

    for (index, line) in panel_lines(snapshot).iter().enumerate() {
        display.draw_text(
            &line.render(),
            PANEL_ORIGIN.0,
            PANEL_ORIGIN.1 + index as i32 * PANEL_LINE_SPACING,
            PANEL_FOREGROUND,
            SCREEN_BACKGROUND,
            TextSize::Small,
        )?;
    }
    Ok(())
}
