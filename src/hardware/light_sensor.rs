use bh1750::{Bh1750, Mode};
use embedded_hal::i2c::I2c;
use log::{error, info, warn};
use meter_core::LightSource;

/// BH1750 照度センサー管理構造体
///
/// 初期化に失敗した場合は照度欄を空欄にして動作を続けます。
pub struct LightSensor<I2C> {
    driver: Option<Bh1750<I2C>>,
}

impl<I2C: I2c> LightSensor<I2C> {
    /// 連続高分解能モードで測定を開始する
    pub fn new(i2c: I2C, address: u8) -> Self {
        info!("照度センサーを初期化中... (Address: 0x{:02x})", address);

        let driver = match Bh1750::new(i2c, address) {
            Ok(mut driver) => match driver.start(Mode::ContinuousHighRes) {
                Ok(()) => {
                    info!("✓ BH1750の初期化に成功");
                    Some(driver)
                }
                Err(e) => {
                    error!("BH1750の測定開始に失敗: {}", e);
                    None
                }
            },
            Err(e) => {
                error!("BH1750の初期化に失敗: {}", e);
                None
            }
        };

        if driver.is_none() {
            warn!("照度センサーなしで動作します");
        }

        Self { driver }
    }

    pub fn is_available(&self) -> bool {
        self.driver.is_some()
    }
}

impl<I2C: I2c> LightSource for LightSensor<I2C> {
    fn read_lux(&mut self) -> Option<f32> {
        let driver = self.driver.as_mut()?;
        match driver.read_lux() {
            Ok(lux) => Some(lux),
            Err(e) => {
                warn!("BH1750読み取りエラー: {}", e);
                None
            }
        }
    }
}
