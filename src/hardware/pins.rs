use esp_idf_svc::hal::gpio::{Gpio16, Gpio18, Gpio19, Gpio21, Gpio22, Gpio23, Gpio4, Gpio5};

/// ST7789 (TTGO T-Display) のピン設定
pub struct DisplayPins {
    pub sclk: Gpio18,
    pub mosi: Gpio19,
    pub cs: Gpio5,
    pub dc: Gpio16,
    pub rst: Gpio23,
    pub backlight: Gpio4,
}

/// BME280 / BH1750 共用 I2C バスのピン設定
pub struct I2cPins {
    pub sda: Gpio21,
    pub scl: Gpio22,
}
