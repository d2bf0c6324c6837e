use log::{info, warn};

use crate::error::check_init_signal;
use crate::level::SeverityBand;

/// BME280 のチップID（レジスタ 0xD0 の値）
pub const BME280_CHIP_ID: u8 = 0x60;

/// 温湿度・気圧センサーの1回分の測定値
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnvironmentReading {
    pub temperature_celsius: f32,
    pub humidity_percent: f32,
    pub pressure_hpa: f32,
}

/// 起動時に一度だけ決まる環境センサーの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvironmentStatus {
    Detected,
    Unavailable,
}

impl EnvironmentStatus {
    /// 初期化時の識別値とセンチネルを比較して状態を決める
    ///
    /// 一致しない場合は再試行せず、以降の周期は劣化表示で動作します。
    pub fn from_init_signal(signal: u8, sentinel: u8) -> Self {
        match check_init_signal(signal, sentinel) {
            Ok(()) => {
                info!("✓ 環境センサーを検出しました (ID: {:#04x})", signal);
                EnvironmentStatus::Detected
            }
            Err(e) => {
                warn!("{}。温度・湿度・気圧は表示しません", e);
                EnvironmentStatus::Unavailable
            }
        }
    }

    pub fn is_detected(self) -> bool {
        self == EnvironmentStatus::Detected
    }
}

/// 1周期分の環境センサー欄
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EnvironmentField {
    Available(EnvironmentReading),
    Unavailable,
}

impl EnvironmentField {
    pub fn reading(&self) -> Option<&EnvironmentReading> {
        match self {
            EnvironmentField::Available(reading) => Some(reading),
            EnvironmentField::Unavailable => None,
        }
    }
}

impl From<Option<EnvironmentReading>> for EnvironmentField {
    fn from(reading: Option<EnvironmentReading>) -> Self {
        match reading {
            Some(reading) => EnvironmentField::Available(reading),
            None => EnvironmentField::Unavailable,
        }
    }
}

/// 1周期分の全測定値（次の周期で破棄される）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeterSnapshot {
    pub raw_sample: u16,
    pub level_db: f32,
    pub band: SeverityBand,
    pub environment: EnvironmentField,
    pub lux: Option<f32>,
}
