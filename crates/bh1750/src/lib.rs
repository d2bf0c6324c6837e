//! BH1750 環境光センサードライバ (embedded-hal 1.0)
//!
//! 連続測定モードで動作させ、最新の測定値を照度 (lx) として読み出します。

use embedded_hal::i2c::I2c;

/// ADDR ピン Low 時のアドレス
pub const ADDRESS_LOW: u8 = 0x23;
/// ADDR ピン High 時のアドレス
pub const ADDRESS_HIGH: u8 = 0x5C;

const POWER_DOWN: u8 = 0x00;
const POWER_ON: u8 = 0x01;
const RESET: u8 = 0x07;

/// 測定値 → lx 変換係数（データシート既定の測定時間）
const LUX_DIVISOR: f32 = 1.2;

#[derive(Debug, thiserror::Error)]
pub enum Bh1750Error<E: core::fmt::Debug> {
    #[error("I2C通信エラー: {0:?}")]
    I2c(E),

    #[error("無効なI2Cアドレス: {0:#04x}")]
    InvalidAddress(u8),
}

/// 測定モード
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// 1 lx 分解能, 約120ms
    ContinuousHighRes,
    /// 0.5 lx 分解能, 約120ms
    ContinuousHighRes2,
    /// 4 lx 分解能, 約16ms
    ContinuousLowRes,
}

impl Mode {
    fn opcode(self) -> u8 {
        match self {
            Mode::ContinuousHighRes => 0x10,
            Mode::ContinuousHighRes2 => 0x11,
            Mode::ContinuousLowRes => 0x13,
        }
    }

    /// 1回の測定に必要な最大時間（ms）
    pub fn measurement_time_ms(self) -> u32 {
        match self {
            Mode::ContinuousHighRes | Mode::ContinuousHighRes2 => 180,
            Mode::ContinuousLowRes => 24,
        }
    }

    fn resolution_divisor(self) -> f32 {
        match self {
            Mode::ContinuousHighRes2 => 2.0,
            _ => 1.0,
        }
    }
}

pub struct Bh1750<I2C> {
    i2c: I2C,
    address: u8,
    mode: Mode,
}

impl<I2C: I2c> Bh1750<I2C> {
    /// ドライバを作成する（まだ通信は行わない）
    pub fn new(i2c: I2C, address: u8) -> Result<Self, Bh1750Error<I2C::Error>> {
        if address != ADDRESS_LOW && address != ADDRESS_HIGH {
            return Err(Bh1750Error::InvalidAddress(address));
        }
        Ok(Self {
            i2c,
            address,
            mode: Mode::ContinuousHighRes,
        })
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// 電源を入れて連続測定を開始する
    pub fn start(&mut self, mode: Mode) -> Result<(), Bh1750Error<I2C::Error>> {
        self.command(POWER_ON)?;
        // データレジスタのリセットは電源ON状態でのみ有効
        self.command(RESET)?;
        self.command(mode.opcode())?;
        self.mode = mode;
        Ok(())
    }

    /// 測定を止めて低消費電力状態にする
    pub fn power_down(&mut self) -> Result<(), Bh1750Error<I2C::Error>> {
        self.command(POWER_DOWN)
    }

    /// 最新の測定値（生値）
    pub fn read_raw(&mut self) -> Result<u16, Bh1750Error<I2C::Error>> {
        let mut buf = [0u8; 2];
        self.i2c
            .read(self.address, &mut buf)
            .map_err(Bh1750Error::I2c)?;
        Ok(u16::from_be_bytes(buf))
    }

    /// 最新の測定値（lx）
    pub fn read_lux(&mut self) -> Result<f32, Bh1750Error<I2C::Error>> {
        let raw = self.read_raw()?;
        Ok(raw_to_lux(raw, self.mode))
    }

    /// I2Cバスを返却する
    pub fn release(self) -> I2C {
        self.i2c
    }

    fn command(&mut self, opcode: u8) -> Result<(), Bh1750Error<I2C::Error>> {
        self.i2c
            .write(self.address, &[opcode])
            .map_err(Bh1750Error::I2c)
    }
}

/// 生値を照度に変換する
pub fn raw_to_lux(raw: u16, mode: Mode) -> f32 {
    raw as f32 / LUX_DIVISOR / mode.resolution_divisor()
}
