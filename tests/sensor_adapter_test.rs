// Sensor adapter tests (in-memory I2C bus)
// これらのテストはホストマシンで実行されます

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, Operation};
use sound_level_meter::hardware::environment_sensor::{probe_chip_id, CHIP_ID_REGISTER};
use sound_level_meter::hardware::{EnvironmentSensor, LightSensor};
use sound_level_meter::meter_core::{EnvironmentSource, EnvironmentStatus, LightSource};
use sound_level_meter::{Bme280Settings, OversamplingFactor};

#[derive(Debug)]
struct Nack;

impl embedded_hal::i2c::Error for Nack {
    fn kind(&self) -> ErrorKind {
        ErrorKind::NoAcknowledge(embedded_hal::i2c::NoAcknowledgeSource::Address)
    }
}

/// 読み出し要求に固定のバイト列を返すバス
struct FakeBus {
    response: Vec<u8>,
    present: bool,
    writes: Vec<(u8, Vec<u8>)>,
}

impl FakeBus {
    fn responding(response: &[u8]) -> Self {
        Self {
            response: response.to_vec(),
            present: true,
            writes: Vec::new(),
        }
    }

    fn absent() -> Self {
        Self {
            response: Vec::new(),
            present: false,
            writes: Vec::new(),
        }
    }
}

impl ErrorType for FakeBus {
    type Error = Nack;
}

impl I2c for FakeBus {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        if !self.present {
            return Err(Nack);
        }
        for operation in operations {
            match operation {
                Operation::Write(bytes) => self.writes.push((address, bytes.to_vec())),
                Operation::Read(buf) => {
                    let len = buf.len();
                    buf.copy_from_slice(&self.response[..len]);
                }
            }
        }
        Ok(())
    }
}

/// BME280 のレジスタマップを模したバス
///
/// 1バイトの書き込みでレジスタポインタを設定し、2バイトの書き込みで
/// レジスタへ値を書き込みます。読み出しはポインタから連続で行います。
struct RegisterMapBus {
    registers: [u8; 256],
    pointer: usize,
}

impl RegisterMapBus {
    /// 23.0 °C / 1013.25 hPa を返すように校正値と測定値を設定する
    fn calibrated_bme280() -> Self {
        let mut registers = [0u8; 256];
        registers[CHIP_ID_REGISTER as usize] = 0x60;
        // dig_T2 = 5120
        registers[0x8A] = 0x00;
        registers[0x8B] = 0x14;
        // dig_P1 = 50000
        registers[0x8E] = 0x50;
        registers[0x8F] = 0xC3;
        // 生の気圧値 0x3A198, 生の温度値 0x5C000, 生の湿度値 0
        registers[0xF7..0xFF].copy_from_slice(&[0x3A, 0x19, 0x80, 0x5C, 0x00, 0x00, 0x00, 0x00]);
        Self {
            registers,
            pointer: 0,
        }
    }
}

impl ErrorType for RegisterMapBus {
    type Error = Nack;
}

impl I2c for RegisterMapBus {
    fn transaction(
        &mut self,
        _address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        for operation in operations {
            match operation {
                Operation::Write(bytes) => {
                    self.pointer = bytes[0] as usize;
                    if let Some(&value) = bytes.get(1) {
                        self.registers[self.pointer] = value;
                    }
                }
                Operation::Read(buf) => {
                    let end = self.pointer + buf.len();
                    buf.copy_from_slice(&self.registers[self.pointer..end]);
                }
            }
        }
        Ok(())
    }
}

struct NoDelay;

impl DelayNs for NoDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}

#[test]
fn test_probe_reads_chip_id_register() {
    let mut bus = FakeBus::responding(&[0x60]);
    let id = probe_chip_id(&mut bus, 0x76);

    assert_eq!(id, 0x60);
    assert_eq!(bus.writes, vec![(0x76, vec![CHIP_ID_REGISTER])]);
}

#[test]
fn test_probe_without_device_returns_no_response() {
    let mut bus = FakeBus::absent();
    assert_eq!(probe_chip_id(&mut bus, 0x76), 0x00);
}

#[test]
fn test_environment_sensor_absent_is_unavailable() {
    let mut sensor = EnvironmentSensor::new(FakeBus::absent(), NoDelay, &Bme280Settings::default());

    assert_eq!(sensor.status(), EnvironmentStatus::Unavailable);
    assert_eq!(sensor.read(), None);
}

#[test]
fn test_environment_sensor_other_chip_is_unavailable() {
    // BMP280 のチップID
    let bus = FakeBus::responding(&[0x58]);
    let mut sensor = EnvironmentSensor::new(bus, NoDelay, &Bme280Settings::default());

    assert_eq!(sensor.status(), EnvironmentStatus::Unavailable);
    assert_eq!(sensor.read(), None);
}

#[test]
fn test_environment_sensor_detected_reads_in_hpa() {
    let mut bus = RegisterMapBus::calibrated_bme280();
    let settings = Bme280Settings {
        temperature_oversampling: OversamplingFactor::X2,
        pressure_oversampling: OversamplingFactor::X4,
        humidity_oversampling: OversamplingFactor::X8,
        ..Bme280Settings::default()
    };

    {
        let mut sensor = EnvironmentSensor::new(&mut bus, NoDelay, &settings);
        assert_eq!(sensor.status(), EnvironmentStatus::Detected);

        let reading = sensor.read().unwrap();
        assert!((reading.temperature_celsius - 23.0).abs() < 1e-3);
        assert_eq!(reading.humidity_percent, 0.0);
        // 101325 Pa → 1013.25 hPa
        assert!((reading.pressure_hpa - 1013.25).abs() < 1e-2);
    }

    // ctrl_hum: x8
    assert_eq!(bus.registers[0xF2], 0x04);
    // ctrl_meas: T x2, P x4, forced モード
    assert_eq!(bus.registers[0xF4], 0x4D);
    // config: IIR フィルタ無効
    assert_eq!(bus.registers[0xF5], 0x00);
}

#[test]
fn test_light_sensor_reads_lux() {
    // 0x01E0 = 480 → 400 lx
    let mut sensor = LightSensor::new(FakeBus::responding(&[0x01, 0xE0]), bh1750::ADDRESS_LOW);

    assert!(sensor.is_available());
    let lux = sensor.read_lux().unwrap();
    assert!((lux - 400.0).abs() < 1e-3);
}

#[test]
fn test_light_sensor_absent_reports_none() {
    let mut sensor = LightSensor::new(FakeBus::absent(), bh1750::ADDRESS_LOW);

    assert!(!sensor.is_available());
    assert_eq!(sensor.read_lux(), None);
}

#[test]
fn test_light_sensor_invalid_address_reports_none() {
    let mut sensor = LightSensor::new(FakeBus::responding(&[0x00, 0x10]), 0x40);

    assert!(!sensor.is_available());
    assert_eq!(sensor.read_lux(), None);
}
