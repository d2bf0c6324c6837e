use log::{debug, warn};

use crate::board::BoardProfile;
use crate::dashboard::{render_snapshot, render_static};
use crate::level::LevelEstimator;
use crate::ports::{DisplaySink, EnvironmentSource, LightSource, SoundSampler, TelemetrySink};
use crate::reading::{EnvironmentField, EnvironmentStatus, MeterSnapshot};
use crate::report::telemetry_lines;

/// 起動時に確定し、以降の周期で参照される状態
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeterState {
    pub profile: BoardProfile,
    pub environment: EnvironmentStatus,
}

impl MeterState {
    pub fn new(profile: BoardProfile, environment: EnvironmentStatus) -> Self {
        Self {
            profile,
            environment,
        }
    }
}

/// 騒音計本体
///
/// 1周期 = 読み取り → 計算 → 整形 → 描画 → シリアル出力。
/// 周期間の待機は呼び出し側のループで行います。
pub struct Meter<S, E, L> {
    sampler: S,
    environment: E,
    light: L,
    state: MeterState,
    estimator: LevelEstimator,
}

impl<S, E, L> Meter<S, E, L>
where
    S: SoundSampler,
    E: EnvironmentSource,
    L: LightSource,
{
    pub fn new(sampler: S, environment: E, light: L, state: MeterState) -> Self {
        Self {
            sampler,
            environment,
            light,
            estimator: LevelEstimator::new(state.profile),
            state,
        }
    }

    pub fn state(&self) -> &MeterState {
        &self.state
    }

    /// 全センサーを読み、1周期分の測定値を作る
    pub fn measure(&mut self) -> MeterSnapshot {
        let raw_sample = self.sampler.sample();
        let estimate = self.estimator.evaluate(raw_sample);

        // 未検出のセンサーには問い合わせない
        let environment = if self.state.environment.is_detected() {
            EnvironmentField::from(self.environment.read())
        } else {
            EnvironmentField::Unavailable
        };

        let lux = self.light.read_lux();

        debug!(
            "測定: raw={} level={:.2}dB ({}) env={:?} lux={:?}",
            raw_sample,
            estimate.level_db,
            estimate.band.label(),
            environment,
            lux
        );

        MeterSnapshot {
            raw_sample,
            level_db: estimate.level_db,
            band: estimate.band,
            environment,
            lux,
        }
    }

    /// 起動直後に静的な部分を描画する
    pub fn draw_static<D: DisplaySink>(&self, display: &mut D) {
        if let Err(e) = render_static(display) {
            warn!("画面の初期描画に失敗しました: {:?}", e);
        }
    }

    /// 1周期分を実行し、その周期の測定値を返す
    pub fn run_cycle<D, T>(&mut self, display: &mut D, telemetry: &mut T) -> MeterSnapshot
    where
        D: DisplaySink,
        T: TelemetrySink,
    {
        let snapshot = self.measure();

        if let Err(e) = render_snapshot(display, &snapshot) {
            warn!("画面描画に失敗しました: {:?}", e);
        }

        for line in telemetry_lines(&snapshot) {
            telemetry.write_line(&line);
        }

        snapshot
    }
}
