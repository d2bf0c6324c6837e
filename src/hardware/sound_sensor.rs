use esp_idf_svc::hal::{
    adc::{
        attenuation::DB_11,
        oneshot::{
            config::{AdcChannelConfig, Calibration},
            AdcChannelDriver, AdcDriver,
        },
        ADC1,
    },
    gpio::Gpio36,
};
use log::{error, info};
use meter_core::SoundSampler;

/// マイクモジュールのアナログ出力を読むセンサー
///
/// ADC1 を使用します（ADC2 は WiFi と競合するため）。
pub struct SoundSensor {
    channel: AdcChannelDriver<'static, Gpio36, AdcDriver<'static, ADC1>>,
}

impl SoundSensor {
    /// ADC1 / GPIO36 を 11dB 減衰（約0〜3.3V）で初期化する
    pub fn new(adc: ADC1, pin: Gpio36) -> anyhow::Result<Self> {
        info!("ADC1を初期化しています (GPIO36, マイク入力)");
        let adc_driver = AdcDriver::new(adc)?;
        let adc_config = AdcChannelConfig {
            attenuation: DB_11,
            // 推定式は生値を前提としているため校正しない
            calibration: Calibration::None,
            ..Default::default()
        };
        let channel = AdcChannelDriver::new(adc_driver, pin, &adc_config)?;

        Ok(Self { channel })
    }
}

impl SoundSampler for SoundSensor {
    fn sample(&mut self) -> u16 {
        match self.channel.read_raw() {
            Ok(raw) => raw,
            Err(e) => {
                error!("ADC読み取りエラー: {:?}. 0として扱います。", e);
                0
            }
        }
    }
}
