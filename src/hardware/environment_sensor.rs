use bme280::i2c::BME280;
use bme280::{Configuration, IIRFilter, Oversampling};
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use log::{error, info, warn};
use meter_core::reading::BME280_CHIP_ID;
use meter_core::{EnvironmentReading, EnvironmentSource, EnvironmentStatus};

use crate::config::Bme280Settings;
use crate::config_validation::OversamplingFactor;

/// チップIDレジスタ
pub const CHIP_ID_REGISTER: u8 = 0xD0;

/// SDO=VCC 時のアドレス
pub const SECONDARY_ADDRESS: u8 = 0x77;

/// 応答が無かった場合の識別値
pub const NO_RESPONSE_SIGNAL: u8 = 0x00;

impl From<OversamplingFactor> for Oversampling {
    fn from(factor: OversamplingFactor) -> Self {
        match factor {
            OversamplingFactor::X1 => Oversampling::Oversampling1X,
            OversamplingFactor::X2 => Oversampling::Oversampling2X,
            OversamplingFactor::X4 => Oversampling::Oversampling4X,
            OversamplingFactor::X8 => Oversampling::Oversampling8X,
            OversamplingFactor::X16 => Oversampling::Oversampling16X,
        }
    }
}

/// チップIDを読み出す。通信できない場合は `NO_RESPONSE_SIGNAL`
pub fn probe_chip_id<I2C: I2c>(i2c: &mut I2C, address: u8) -> u8 {
    let mut id = [0u8; 1];
    match i2c.write_read(address, &[CHIP_ID_REGISTER], &mut id) {
        Ok(()) => id[0],
        Err(e) => {
            warn!("環境センサー (0x{:02x}) から応答がありません: {:?}", address, e);
            NO_RESPONSE_SIGNAL
        }
    }
}

/// BME280 温湿度・気圧センサー管理構造体
///
/// 起動時に一度だけチップIDを確認し、検出できなかった場合は
/// 以降の読み取りで常に `None` を返します（再初期化はしません）。
pub struct EnvironmentSensor<I2C, D> {
    device: Option<BME280<I2C>>,
    delay: D,
}

impl<I2C, D> EnvironmentSensor<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    /// 新しい環境センサーインスタンスを作成
    ///
    /// # 配線例（TTGO T-Display）
    /// ```text
    /// BME280:
    /// - VCC -> 3.3V
    /// - GND -> GND
    /// - SDA -> GPIO21
    /// - SCL -> GPIO22
    /// - SDO -> GND (0x76)
    /// ```
    pub fn new(mut i2c: I2C, mut delay: D, settings: &Bme280Settings) -> Self {
        info!("環境センサーを初期化中... (Address: 0x{:02x})", settings.address);

        let signal = probe_chip_id(&mut i2c, settings.address);
        if !EnvironmentStatus::from_init_signal(signal, BME280_CHIP_ID).is_detected() {
            return Self {
                device: None,
                delay,
            };
        }

        let mut device = if settings.address == SECONDARY_ADDRESS {
            BME280::new_secondary(i2c)
        } else {
            BME280::new_primary(i2c)
        };

        let configuration = Configuration::default()
            .with_temperature_oversampling(settings.temperature_oversampling.into())
            .with_pressure_oversampling(settings.pressure_oversampling.into())
            .with_humidity_oversampling(settings.humidity_oversampling.into())
            .with_iir_filter(IIRFilter::Off);

        let device = match device.init_with_config(&mut delay, configuration) {
            Ok(()) => {
                info!(
                    "✓ BME280の初期化に成功 (OS: T x{}, P x{}, H x{})",
                    settings.temperature_oversampling.factor(),
                    settings.pressure_oversampling.factor(),
                    settings.humidity_oversampling.factor()
                );
                Some(device)
            }
            Err(e) => {
                error!("BME280の初期化に失敗: {:?}", e);
                warn!("環境センサーなしで動作します");
                None
            }
        };

        Self { device, delay }
    }

    /// 起動時に確定した状態
    pub fn status(&self) -> EnvironmentStatus {
        if self.device.is_some() {
            EnvironmentStatus::Detected
        } else {
            EnvironmentStatus::Unavailable
        }
    }
}

impl<I2C, D> EnvironmentSource for EnvironmentSensor<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    fn read(&mut self) -> Option<EnvironmentReading> {
        let device = self.device.as_mut()?;
        match device.measure(&mut self.delay) {
            Ok(measurements) => Some(EnvironmentReading {
                temperature_celsius: measurements.temperature,
                humidity_percent: measurements.humidity,
                // Pa → hPa
                pressure_hpa: measurements.pressure / 100.0,
            }),
            Err(e) => {
                warn!("BME280読み取りエラー: {:?}", e);
                None
            }
        }
    }
}
