use display_interface_spi::SPIInterface;
use esp_idf_svc::hal::{
    delay::FreeRtos,
    gpio::{AnyIOPin, Gpio16, Gpio23, Gpio4, Output, PinDriver},
    spi::{config::Config as SpiConfig, SpiDeviceDriver, SpiDriver, SpiDriverConfig, SPI2},
    units::FromValueType,
};
use log::info;
use meter_core::dashboard::{SCREEN_HEIGHT, SCREEN_WIDTH};
use meter_core::GraphicsDisplay;
use mipidsi::{
    models::ST7789,
    options::{ColorInversion, Orientation, Rotation},
    Builder,
};

use super::pins::DisplayPins;

/// パネルのネイティブ解像度（縦向き）
const PANEL_WIDTH: u16 = SCREEN_HEIGHT as u16;
const PANEL_HEIGHT: u16 = SCREEN_WIDTH as u16;

/// 135x240 パネルの GRAM 上のオフセット
const PANEL_OFFSET: (u16, u16) = (52, 40);

pub type MeterDisplay = mipidsi::Display<
    SPIInterface<SpiDeviceDriver<'static, SpiDriver<'static>>, PinDriver<'static, Gpio16, Output>>,
    ST7789,
    PinDriver<'static, Gpio23, Output>,
>;

/// バックライト（保持している間は点灯）
pub struct Backlight {
    _pin: PinDriver<'static, Gpio4, Output>,
}

/// ST7789 を横向きで初期化する
pub fn init_display(
    spi: SPI2,
    pins: DisplayPins,
    baudrate_mhz: u32,
) -> anyhow::Result<(GraphicsDisplay<MeterDisplay>, Backlight)> {
    info!("ディスプレイを初期化しています (ST7789, SPI {}MHz)", baudrate_mhz);

    let driver = SpiDriver::new(
        spi,
        pins.sclk,
        pins.mosi,
        None::<AnyIOPin>,
        &SpiDriverConfig::new(),
    )?;
    let spi_config = SpiConfig::new().baudrate(baudrate_mhz.MHz().into());
    let device = SpiDeviceDriver::new(driver, Some(pins.cs), &spi_config)?;

    let dc = PinDriver::output(pins.dc)?;
    let rst = PinDriver::output(pins.rst)?;
    let interface = SPIInterface::new(device, dc);

    let display = Builder::new(ST7789, interface)
        .display_size(PANEL_WIDTH, PANEL_HEIGHT)
        .display_offset(PANEL_OFFSET.0, PANEL_OFFSET.1)
        .invert_colors(ColorInversion::Inverted)
        .orientation(Orientation::new().rotate(Rotation::Deg90))
        .reset_pin(rst)
        .init(&mut FreeRtos)
        .map_err(|e| anyhow::anyhow!("ST7789の初期化に失敗しました: {:?}", e))?;

    let mut backlight = PinDriver::output(pins.backlight)?;
    backlight.set_high()?;
    info!("✓ ディスプレイの初期化が完了しました");

    Ok((GraphicsDisplay::new(display), Backlight { _pin: backlight }))
}
