/// センサー関連エラー
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SensorError {
    /// 起動時の検出で識別値が期待値と一致しなかった
    #[error("環境センサーが検出されませんでした (識別値: {found:#04x}, 期待値: {expected:#04x})")]
    Unavailable { found: u8, expected: u8 },
}

/// 初期化時に返された識別値を検出センチネルと比較する
pub fn check_init_signal(signal: u8, sentinel: u8) -> Result<(), SensorError> {
    if signal == sentinel {
        Ok(())
    } else {
        Err(SensorError::Unavailable {
            found: signal,
            expected: sentinel,
        })
    }
}
