//! 設定値の検証（ハードウェア非依存）

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("ループ周期は1ms以上を指定してください: {0}")]
    InvalidLoopInterval(u32),
    #[error("I2Cクロックが範囲外です (10-400kHz): {0}")]
    InvalidI2cFrequency(u32),
    #[error("BME280のアドレスが無効です (0x76/0x77): {0:#04x}")]
    InvalidBme280Address(u8),
    #[error("BH1750のアドレスが無効です (0x23/0x5C): {0:#04x}")]
    InvalidBh1750Address(u8),
    #[error("オーバーサンプリング倍率が無効です (1/2/4/8/16): {0}")]
    InvalidOversampling(u8),
    #[error("SPIクロックが範囲外です (1-80MHz): {0}")]
    InvalidSpiBaudrate(u32),
}

/// BME280 のオーバーサンプリング倍率
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OversamplingFactor {
    X1,
    X2,
    X4,
    X8,
    X16,
}

impl OversamplingFactor {
    pub fn factor(self) -> u8 {
        match self {
            OversamplingFactor::X1 => 1,
            OversamplingFactor::X2 => 2,
            OversamplingFactor::X4 => 4,
            OversamplingFactor::X8 => 8,
            OversamplingFactor::X16 => 16,
        }
    }
}

pub fn parse_oversampling(value: u8) -> Result<OversamplingFactor, ValidationError> {
    match value {
        1 => Ok(OversamplingFactor::X1),
        2 => Ok(OversamplingFactor::X2),
        4 => Ok(OversamplingFactor::X4),
        8 => Ok(OversamplingFactor::X8),
        16 => Ok(OversamplingFactor::X16),
        _ => Err(ValidationError::InvalidOversampling(value)),
    }
}

pub fn validate_loop_interval_ms(value: u32) -> Result<u32, ValidationError> {
    if value == 0 {
        Err(ValidationError::InvalidLoopInterval(value))
    } else {
        Ok(value)
    }
}

pub fn validate_i2c_frequency_khz(value: u32) -> Result<u32, ValidationError> {
    if (10..=400).contains(&value) {
        Ok(value)
    } else {
        Err(ValidationError::InvalidI2cFrequency(value))
    }
}

pub fn parse_bme280_address(value: u8) -> Result<u8, ValidationError> {
    match value {
        0x76 | 0x77 => Ok(value),
        _ => Err(ValidationError::InvalidBme280Address(value)),
    }
}

pub fn parse_bh1750_address(value: u8) -> Result<u8, ValidationError> {
    match value {
        bh1750::ADDRESS_LOW | bh1750::ADDRESS_HIGH => Ok(value),
        _ => Err(ValidationError::InvalidBh1750Address(value)),
    }
}

pub fn validate_spi_baudrate_mhz(value: u32) -> Result<u32, ValidationError> {
    if (1..=80).contains(&value) {
        Ok(value)
    } else {
        Err(ValidationError::InvalidSpiBaudrate(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_oversampling_valid() {
        assert_eq!(parse_oversampling(1), Ok(OversamplingFactor::X1));
        assert_eq!(parse_oversampling(16), Ok(OversamplingFactor::X16));
        assert_eq!(parse_oversampling(4).unwrap().factor(), 4);
    }

    #[test]
    fn test_parse_oversampling_invalid() {
        assert_eq!(parse_oversampling(0), Err(ValidationError::InvalidOversampling(0)));
        assert_eq!(parse_oversampling(3), Err(ValidationError::InvalidOversampling(3)));
    }

    #[test]
    fn test_loop_interval() {
        assert_eq!(validate_loop_interval_ms(500), Ok(500));
        assert_eq!(
            validate_loop_interval_ms(0),
            Err(ValidationError::InvalidLoopInterval(0))
        );
    }

    #[test]
    fn test_i2c_frequency_range() {
        assert_eq!(validate_i2c_frequency_khz(100), Ok(100));
        assert_eq!(validate_i2c_frequency_khz(400), Ok(400));
        assert!(validate_i2c_frequency_khz(1000).is_err());
        assert!(validate_i2c_frequency_khz(5).is_err());
    }

    #[test]
    fn test_addresses() {
        assert_eq!(parse_bme280_address(0x77), Ok(0x77));
        assert_eq!(
            parse_bme280_address(0x23),
            Err(ValidationError::InvalidBme280Address(0x23))
        );
        assert_eq!(parse_bh1750_address(0x5C), Ok(0x5C));
        assert!(parse_bh1750_address(0x76).is_err());
    }

    #[test]
    fn test_spi_baudrate() {
        assert_eq!(validate_spi_baudrate_mhz(26), Ok(26));
        assert!(validate_spi_baudrate_mhz(0).is_err());
        assert!(validate_spi_baudrate_mhz(100).is_err());
    }

    #[test]
    fn test_error_message() {
        assert_eq!(
            ValidationError::InvalidBme280Address(0x40).to_string(),
            "BME280のアドレスが無効です (0x76/0x77): 0x40"
        );
    }
}
