use crate::config_validation::{
    parse_bh1750_address, parse_bme280_address, parse_oversampling, validate_i2c_frequency_khz,
    validate_loop_interval_ms, validate_spi_baudrate_mhz, OversamplingFactor, ValidationError,
};

/// アプリケーション設定
///
/// この構造体はビルド時に`cfg.toml`ファイルから読み込まれた設定を保持します。
/// ファイルが無い場合は既定値が使われます。
#[toml_cfg::toml_config]
pub struct Config {
    #[default(500)]
    loop_interval_ms: u32,

    #[default(400)]
    i2c_frequency_khz: u32,

    #[default(0x76)]
    bme280_address: u8,

    #[default(1)]
    bme280_temperature_oversampling: u8,

    #[default(1)]
    bme280_pressure_oversampling: u8,

    #[default(1)]
    bme280_humidity_oversampling: u8,

    #[default(0x23)]
    bh1750_address: u8,

    #[default(26)]
    display_spi_baudrate_mhz: u32,
}

/// 設定エラー
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cfg.toml の値が無効です: {0}")]
    Invalid(#[from] ValidationError),
}

/// BME280 の設定
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bme280Settings {
    pub address: u8,
    pub temperature_oversampling: OversamplingFactor,
    pub pressure_oversampling: OversamplingFactor,
    pub humidity_oversampling: OversamplingFactor,
}

impl Default for Bme280Settings {
    fn default() -> Self {
        Self {
            address: 0x76,
            temperature_oversampling: OversamplingFactor::X1,
            pressure_oversampling: OversamplingFactor::X1,
            humidity_oversampling: OversamplingFactor::X1,
        }
    }
}

/// 検証済みのアプリケーション設定
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// メインループの周期（ミリ秒）
    pub loop_interval_ms: u32,

    /// I2Cクロック（kHz）
    pub i2c_frequency_khz: u32,

    /// BME280 の設定
    pub bme280: Bme280Settings,

    /// BH1750 のI2Cアドレス
    pub bh1750_address: u8,

    /// ディスプレイのSPIクロック（MHz）
    pub display_spi_baudrate_mhz: u32,
}

impl AppConfig {
    /// 設定ファイルから設定をロードします
    pub fn load() -> Result<Self, ConfigError> {
        // toml_cfg によって生成された定数
        let config = CONFIG;

        let bme280 = Bme280Settings {
            address: parse_bme280_address(config.bme280_address)?,
            temperature_oversampling: parse_oversampling(config.bme280_temperature_oversampling)?,
            pressure_oversampling: parse_oversampling(config.bme280_pressure_oversampling)?,
            humidity_oversampling: parse_oversampling(config.bme280_humidity_oversampling)?,
        };

        Ok(AppConfig {
            loop_interval_ms: validate_loop_interval_ms(config.loop_interval_ms)?,
            i2c_frequency_khz: validate_i2c_frequency_khz(config.i2c_frequency_khz)?,
            bme280,
            bh1750_address: parse_bh1750_address(config.bh1750_address)?,
            display_spi_baudrate_mhz: validate_spi_baudrate_mhz(config.display_spi_baudrate_mhz)?,
        })
    }
}
