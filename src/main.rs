#[cfg(target_os = "espidf")]
use std::cell::RefCell;

#[cfg(target_os = "espidf")]
use embedded_hal_bus::i2c::RefCellDevice;
#[cfg(target_os = "espidf")]
use esp_idf_svc::hal::{
    delay::FreeRtos,
    i2c::{I2cConfig, I2cDriver},
    peripherals::Peripherals,
    units::FromValueType,
};
#[cfg(target_os = "espidf")]
use log::{error, info};

#[cfg(target_os = "espidf")]
use sound_level_meter::hardware::{
    init_display, DisplayPins, EnvironmentSensor, I2cPins, LightSensor, SoundSensor,
};
#[cfg(target_os = "espidf")]
use sound_level_meter::meter_core::{BoardProfile, Meter, MeterState, WriterTelemetry};
#[cfg(target_os = "espidf")]
use sound_level_meter::AppConfig;

/// アプリケーションのメインエントリーポイント
#[cfg(target_os = "espidf")]
fn main() -> anyhow::Result<()> {
    // ESP-IDFの基本初期化
    esp_idf_sys::link_patches();
    esp_idf_svc::log::EspLogger::initialize_default();

    info!("騒音計を起動します (v{})", sound_level_meter::VERSION);

    // 設定ファイル読み込み
    let app_config = AppConfig::load().map_err(|e| {
        error!("設定ファイルの読み込みに失敗しました: {}", e);
        anyhow::anyhow!("設定ファイルの読み込みエラー: {}", e)
    })?;

    let profile = BoardProfile::CURRENT;
    info!(
        "ボード: {} (ADC分解能 {}, 基準電圧 {}V)",
        profile.name, profile.adc_resolution, profile.reference_voltage
    );

    // ペリフェラルの初期化 (一度だけ行う)
    info!("ペリフェラルを初期化しています");
    let peripherals = Peripherals::take()?;
    let pins = peripherals.pins;

    // マイク (ADC1)
    let sound = SoundSensor::new(peripherals.adc1, pins.gpio36)?;

    // I2Cバス (BME280 / BH1750 共用)
    let i2c_pins = I2cPins {
        sda: pins.gpio21,
        scl: pins.gpio22,
    };
    let i2c_config = I2cConfig::new().baudrate(app_config.i2c_frequency_khz.kHz().into());
    let i2c = I2cDriver::new(peripherals.i2c0, i2c_pins.sda, i2c_pins.scl, &i2c_config)?;
    let i2c_bus = RefCell::new(i2c);

    // 環境センサーの検出は起動時の一度だけ
    let environment = EnvironmentSensor::new(RefCellDevice::new(&i2c_bus), FreeRtos, &app_config.bme280);
    let light = LightSensor::new(RefCellDevice::new(&i2c_bus), app_config.bh1750_address);

    // ディスプレイ
    let display_pins = DisplayPins {
        sclk: pins.gpio18,
        mosi: pins.gpio19,
        cs: pins.gpio5,
        dc: pins.gpio16,
        rst: pins.gpio23,
        backlight: pins.gpio4,
    };
    let (mut display, _backlight) =
        init_display(peripherals.spi2, display_pins, app_config.display_spi_baudrate_mhz)?;

    // シリアル出力 (stdout → UART0)
    let mut telemetry = WriterTelemetry::new(std::io::stdout());

    let state = MeterState::new(profile, environment.status());
    let mut meter = Meter::new(sound, environment, light, state);
    meter.draw_static(&mut display);

    info!(
        "=== 測定ループを開始します (周期: {}ms) ===",
        app_config.loop_interval_ms
    );

    loop {
        meter.run_cycle(&mut display, &mut telemetry);
        FreeRtos::delay_ms(app_config.loop_interval_ms);
    }
}

/// ホスト向けビルドではファームウェアは動作しない
#[cfg(not(target_os = "espidf"))]
fn main() {
    eprintln!(
        "sound_level_meter v{} は ESP-IDF ターゲット向けのファームウェアです。",
        sound_level_meter::VERSION
    );
}
