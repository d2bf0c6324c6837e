/*!
 * # Sound Level Meter Firmware
 *
 * マイクのアナログ出力から騒音レベルを推定し、温湿度・気圧・照度とあわせて
 * ディスプレイとシリアルに出力するファームウェア
 *
 * ## モジュール構成
 * - `config`: `cfg.toml` から読み込む設定
 * - `config_validation`: 設定値の検証
 * - `hardware`: センサー・ディスプレイのドライバ接続
 *
 * 測定値の計算・整形・描画は `meter_core` クレートにあります。
 */

pub mod config;
pub mod config_validation;
pub mod hardware;

pub use config::{AppConfig, Bme280Settings, ConfigError};
pub use config_validation::OversamplingFactor;
pub use meter_core;

/// ライブラリのバージョン情報
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
