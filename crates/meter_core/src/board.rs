/// ボードごとのアナログ入力特性
///
/// ピン配置やADC分解能はボードごとに固定のため、実行時ではなく
/// ビルド時にフィーチャーで選択します。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardProfile {
    /// ボード名（ログ出力用）
    pub name: &'static str,
    /// ADC分解能（段階数）
    pub adc_resolution: f32,
    /// フルスケール時の基準電圧（V）
    pub reference_voltage: f32,
}

impl BoardProfile {
    /// ESP32系: 12bit ADC, 3.3V
    pub const ESP32: Self = Self {
        name: "ESP32",
        adc_resolution: 4096.0,
        reference_voltage: 3.3,
    };

    /// AVR系 (Uno等): 10bit ADC, 5.0V
    pub const AVR_10BIT: Self = Self {
        name: "AVR 10bit",
        adc_resolution: 1024.0,
        reference_voltage: 5.0,
    };

    /// ビルド時に選択されたプロファイル
    #[cfg(not(feature = "board-avr-10bit"))]
    pub const CURRENT: Self = Self::ESP32;

    /// ビルド時に選択されたプロファイル
    #[cfg(feature = "board-avr-10bit")]
    pub const CURRENT: Self = Self::AVR_10BIT;

    /// ADCが返し得る最大の生値
    pub fn max_sample(&self) -> u16 {
        (self.adc_resolution as u32).saturating_sub(1).min(u16::MAX as u32) as u16
    }
}

impl Default for BoardProfile {
    fn default() -> Self {
        Self::CURRENT
    }
}
