//! 騒音レベル推定と重要度バンド分類
//! ハードウェア非依存の純粋関数を提供

use embedded_graphics::pixelcolor::{Rgb565, RgbColor, WebColors};

use crate::board::BoardProfile;

/// 電圧をdB相当値へ変換する経験的係数（未校正）
pub const CONVERSION_MULTIPLIER: f32 = 50.0;

/// この値以上で Elevated
pub const ELEVATED_THRESHOLD_DB: f32 = 75.0;

/// この値以上で High
pub const HIGH_THRESHOLD_DB: f32 = 120.0;

/// ADC生値をdB相当値に変換する
///
/// # Arguments
/// - `sample`: ADC生値
/// - `resolution`: ADC分解能（段階数）
/// - `reference_voltage`: 基準電圧（V）
///
/// 範囲外の入力は検証しません（そのまま計算されます）。
///
/// # Examples
/// ```
/// use meter_core::level::estimate_level;
///
/// let level = estimate_level(2048, 4096.0, 3.3);
/// assert!((level - 82.5).abs() < 1e-4);
/// ```
pub fn estimate_level(sample: u16, resolution: f32, reference_voltage: f32) -> f32 {
    let voltage = sample as f32 / resolution * reference_voltage;
    voltage * CONVERSION_MULTIPLIER
}

/// 騒音レベルの重要度バンド
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeverityBand {
    /// 75dB未満
    Normal,
    /// 75dB以上120dB未満
    Elevated,
    /// 120dB以上
    High,
}

impl SeverityBand {
    /// 推定レベルをバンドに分類する
    pub fn classify(level: f32) -> Self {
        if level >= HIGH_THRESHOLD_DB {
            SeverityBand::High
        } else if level >= ELEVATED_THRESHOLD_DB {
            SeverityBand::Elevated
        } else {
            SeverityBand::Normal
        }
    }

    /// レベル表示の背景色
    pub fn background_color(self) -> Rgb565 {
        match self {
            SeverityBand::Normal => Rgb565::CSS_GREEN,
            SeverityBand::Elevated => Rgb565::CSS_ORANGE,
            SeverityBand::High => Rgb565::CSS_RED,
        }
    }

    /// レベル表示の文字色
    pub fn foreground_color(self) -> Rgb565 {
        match self {
            SeverityBand::Normal | SeverityBand::Elevated => Rgb565::BLACK,
            SeverityBand::High => Rgb565::WHITE,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SeverityBand::Normal => "normal",
            SeverityBand::Elevated => "elevated",
            SeverityBand::High => "high",
        }
    }
}

/// 1回分の推定結果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelEstimate {
    pub level_db: f32,
    pub band: SeverityBand,
}

/// ボードプロファイルに束縛された推定器
#[derive(Debug, Clone, Copy)]
pub struct LevelEstimator {
    profile: BoardProfile,
}

impl LevelEstimator {
    pub fn new(profile: BoardProfile) -> Self {
        Self { profile }
    }

    /// ADC生値からdB相当値を求める
    pub fn estimate(&self, sample: u16) -> f32 {
        estimate_level(
            sample,
            self.profile.adc_resolution,
            self.profile.reference_voltage,
        )
    }

    /// 推定と分類をまとめて行う
    pub fn evaluate(&self, sample: u16) -> LevelEstimate {
        let level_db = self.estimate(sample);
        LevelEstimate {
            level_db,
            band: SeverityBand::classify(level_db),
        }
    }
}

impl Default for LevelEstimator {
    fn default() -> Self {
        Self::new(BoardProfile::CURRENT)
    }
}
