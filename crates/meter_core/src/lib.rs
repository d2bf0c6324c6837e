/*!
 * # Sound Level Meter Core
 *
 * 騒音計ファームウェアのハードウェア非依存ロジック
 *
 * ## モジュール構成
 * - `board`: ボードごとのADC分解能・基準電圧（コンパイル時に選択）
 * - `level`: ADC生値からdB相当値への変換と重要度バンド分類
 * - `text`: 固定幅テキスト整形（再描画時のちらつき防止）
 * - `reading`: 測定値と環境センサーの検出状態
 * - `report`: シリアル出力行・表示パネル行の組み立て
 * - `ports`: センサー・表示・シリアルの外部コラボレータ
 * - `dashboard`: 表示レイアウトと描画
 * - `cycle`: 1周期分の読み取り→計算→整形→描画
 */

pub mod board;
pub mod cycle;
pub mod dashboard;
pub mod error;
pub mod level;
pub mod ports;
pub mod reading;
pub mod report;
pub mod text;

pub use board::BoardProfile;
pub use cycle::{Meter, MeterState};
pub use error::SensorError;
pub use level::{estimate_level, LevelEstimate, LevelEstimator, SeverityBand};
pub use ports::{
    DisplaySink, EnvironmentSource, GraphicsDisplay, LightSource, SoundSampler, TelemetrySink,
    TextSize, WriterTelemetry,
};
pub use reading::{EnvironmentField, EnvironmentReading, EnvironmentStatus, MeterSnapshot};
pub use text::{pad, DisplayLine};
