//! シリアル出力と表示パネルの文字列組み立て

use crate::reading::{EnvironmentField, MeterSnapshot};
use crate::text::DisplayLine;

/// 環境センサー未検出時に温度欄へ表示する文字列
pub const TEMPERATURE_ERROR_TEXT: &str = "Sensor error";

/// 小さい文字のパネル行の幅
pub const PANEL_LINE_WIDTH: usize = 16;

/// 大きい文字のレベル表示の幅（"123.4" + 余白）
pub const LEVEL_TEXT_WIDTH: usize = 6;

/// 装飾用の固定文字列
pub const DECORATION_TEXT: &str = "~ Sound Meter ~";

/// 各測定値の表示用文字列（単位付き）
///
/// 値が無い欄は空文字列になります。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldTexts {
    pub temperature: String,
    pub humidity: String,
    pub pressure: String,
    pub altitude: String,
    pub lux: String,
}

impl FieldTexts {
    pub fn from_snapshot(snapshot: &MeterSnapshot) -> Self {
        let (temperature, humidity, pressure) = match snapshot.environment {
            EnvironmentField::Available(reading) => (
                format!("{:.2} *C", reading.temperature_celsius),
                format!("{:.2} %", reading.humidity_percent),
                format!("{:.2} hPa", reading.pressure_hpa),
            ),
            EnvironmentField::Unavailable => (
                TEMPERATURE_ERROR_TEXT.to_string(),
                String::new(),
                String::new(),
            ),
        };

        let lux = snapshot
            .lux
            .map(|lux| format!("{:.2} lx", lux))
            .unwrap_or_default();

        Self {
            temperature,
            humidity,
            pressure,
            // 高度は現在未使用
            altitude: String::new(),
            lux,
        }
    }
}

/// シリアルへ出力する行（1測定値につき1行）
pub fn telemetry_lines(snapshot: &MeterSnapshot) -> Vec<String> {
    let fields = FieldTexts::from_snapshot(snapshot);
    vec![
        format!("DB: {:.2}", snapshot.level_db),
        format!("Temperature: {}", fields.temperature),
        format!("Humidity: {}", fields.humidity),
        format!("Pressure: {}", fields.pressure),
        format!("Altitude: {}", fields.altitude),
        format!("Light: {}", fields.lux),
    ]
}

/// 大きい文字で表示するレベル値
pub fn level_line(snapshot: &MeterSnapshot) -> DisplayLine {
    DisplayLine::new(format!("{:.1}", snapshot.level_db), LEVEL_TEXT_WIDTH)
}

/// 小さい文字で表示する環境値のパネル
pub fn panel_lines(snapshot: &MeterSnapshot) -> Vec<DisplayLine> {
    let (temperature, humidity, pressure) = match snapshot.environment {
        EnvironmentField::Available(reading) => (
            format!("T: {:.1} C", reading.temperature_celsius),
            format!("H: {:.1} %", reading.humidity_percent),
            format!("P: {:.1} hPa", reading.pressure_hpa),
        ),
        EnvironmentField::Unavailable => (
            format!("T: {}", TEMPERATURE_ERROR_TEXT),
            "H:".to_string(),
            "P:".to_string(),
        ),
    };
    let lux = match snapshot.lux {
        Some(lux) => format!("L: {:.0} lx", lux),
        None => "L:".to_string(),
    };

    [temperature, humidity, pressure, lux]
        .into_iter()
        .map(|text| DisplayLine::new(text, PANEL_LINE_WIDTH))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::SeverityBand;
    use crate::reading::EnvironmentReading;

    fn snapshot(environment: EnvironmentField, lux: Option<f32>) -> MeterSnapshot {
        MeterSnapshot {
            raw_sample: 1030,
            level_db: 42.5,
            band: SeverityBand::Normal,
            environment,
            lux,
        }
    }

    fn reading() -> EnvironmentReading {
        EnvironmentReading {
            temperature_celsius: 23.1,
            humidity_percent: 45.0,
            pressure_hpa: 1013.3,
        }
    }

    #[test]
    fn test_telemetry_lines_all_available() {
        let lines = telemetry_lines(&snapshot(EnvironmentField::Available(reading()), Some(120.0)));
        assert_eq!(
            lines,
            vec![
                "DB: 42.50",
                "Temperature: 23.10 *C",
                "Humidity: 45.00 %",
                "Pressure: 1013.30 hPa",
                "Altitude: ",
                "Light: 120.00 lx",
            ]
        );
    }

    #[test]
    fn test_telemetry_lines_sensor_unavailable() {
        let lines = telemetry_lines(&snapshot(EnvironmentField::Unavailable, Some(8.5)));
        assert_eq!(lines[0], "DB: 42.50");
        assert_eq!(lines[1], "Temperature: Sensor error");
        assert_eq!(lines[2], "Humidity: ");
        assert_eq!(lines[3], "Pressure: ");
        assert_eq!(lines[4], "Altitude: ");
        assert_eq!(lines[5], "Light: 8.50 lx");
    }

    #[test]
    fn test_field_texts_missing_lux_is_blank() {
        let fields = FieldTexts::from_snapshot(&snapshot(EnvironmentField::Available(reading()), None));
        assert_eq!(fields.lux, "");
        assert_eq!(fields.temperature, "23.10 *C");
    }

    #[test]
    fn test_level_line_is_fixed_width() {
        let line = level_line(&snapshot(EnvironmentField::Unavailable, None));
        assert_eq!(line.render(), "42.5  ");

        let mut loud = snapshot(EnvironmentField::Unavailable, None);
        loud.level_db = 123.456;
        assert_eq!(level_line(&loud).render(), "123.5 ");
    }

    #[test]
    fn test_panel_lines_available() {
        let lines = panel_lines(&snapshot(EnvironmentField::Available(reading()), Some(120.4)));
        let rendered: Vec<String> = lines.iter().map(DisplayLine::render).collect();
        assert_eq!(
            rendered,
            vec![
                "T: 23.1 C       ",
                "H: 45.0 %       ",
                "P: 1013.3 hPa   ",
                "L: 120 lx       ",
            ]
        );
    }

    #[test]
    fn test_panel_lines_unavailable_keep_width() {
        let lines = panel_lines(&snapshot(EnvironmentField::Unavailable, None));
        assert_eq!(lines[0].render(), "T: Sensor error ");
        assert_eq!(lines[1].render(), "H:              ");
        for line in &lines {
            assert_eq!(line.render().chars().count(), PANEL_LINE_WIDTH);
        }
    }
}
