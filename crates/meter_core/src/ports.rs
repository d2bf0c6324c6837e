//! 外部コラボレータ（センサー・表示・シリアル）の抽象
//!
//! 実機のドライバはファームウェア側で実装し、ここではジェネリクスで
//! 受け取るだけにします（トレイトオブジェクトは使いません）。

use std::io::Write;

use embedded_graphics::{
    mono_font::{
        ascii::{FONT_10X20, FONT_6X10},
        MonoFont, MonoTextStyleBuilder,
    },
    pixelcolor::Rgb565,
    prelude::*,
    text::{Baseline, Text},
};
use log::warn;

use crate::reading::EnvironmentReading;

/// マイク出力をADCで読むセンサー
pub trait SoundSampler {
    /// 現在のADC生値を返す
    fn sample(&mut self) -> u16;
}

/// 温湿度・気圧センサー
pub trait EnvironmentSource {
    /// 現在の測定値。利用できない場合は `None`
    fn read(&mut self) -> Option<EnvironmentReading>;
}

/// 照度センサー
pub trait LightSource {
    /// 現在の照度（lx）。利用できない場合は `None`
    fn read_lux(&mut self) -> Option<f32>;
}

/// 文字サイズ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSize {
    Small,
    Large,
}

impl TextSize {
    pub fn font(self) -> &'static MonoFont<'static> {
        match self {
            TextSize::Small => &FONT_6X10,
            TextSize::Large => &FONT_10X20,
        }
    }

    /// 1行分の高さ（px）
    pub fn line_height(self) -> i32 {
        self.font().character_size.height as i32
    }
}

/// 文字を描画するディスプレイ
pub trait DisplaySink {
    type Error: core::fmt::Debug;

    /// 画面全体を塗りつぶす
    fn clear(&mut self, color: Rgb565) -> Result<(), Self::Error>;

    /// (x, y) を左上として文字列を描画する
    fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        foreground: Rgb565,
        background: Rgb565,
        size: TextSize,
    ) -> Result<(), Self::Error>;
}

/// シリアル出力
pub trait TelemetrySink {
    fn write_line(&mut self, line: &str);
}

/// embedded-graphics の `DrawTarget` に描画するディスプレイ
pub struct GraphicsDisplay<D> {
    target: D,
}

impl<D> GraphicsDisplay<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    pub fn new(target: D) -> Self {
        Self { target }
    }

    pub fn target(&self) -> &D {
        &self.target
    }
}

impl<D> DisplaySink for GraphicsDisplay<D>
where
    D: DrawTarget<Color = Rgb565>,
    D::Error: core::fmt::Debug,
{
    type Error = D::Error;

    fn clear(&mut self, color: Rgb565) -> Result<(), Self::Error> {
        self.target.clear(color)
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        foreground: Rgb565,
        background: Rgb565,
        size: TextSize,
    ) -> Result<(), Self::Error> {
        // 背景色付きで描くことで前回の文字を上書きする
        let style = MonoTextStyleBuilder::new()
            .font(size.font())
            .text_color(foreground)
            .background_color(background)
            .build();
        Text::with_baseline(text, Point::new(x, y), style, Baseline::Top).draw(&mut self.target)?;
        Ok(())
    }
}

/// 任意の `Write` に1行ずつ書き出すシリアル出力
///
/// ESP-IDF では stdout が UART0 に接続されています。
pub struct WriterTelemetry<W: Write> {
    writer: W,
}

impl<W: Write> WriterTelemetry<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TelemetrySink for WriterTelemetry<W> {
    fn write_line(&mut self, line: &str) {
        if let Err(e) = writeln!(self.writer, "{}", line).and_then(|_| self.writer.flush()) {
            warn!("シリアル出力に失敗しました: {:?}", e);
        }
    }
}
