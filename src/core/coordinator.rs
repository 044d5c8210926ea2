use std::path::PathBuf;
use std::time::{Duration, Instant};

use super::alerts::gate::AlertGate;
use super::alerts::model::AlertEvent;
use super::capture::ScreenSource;
use super::combinations;
use super::matcher;
use super::model::ColorCombination;

pub struct TickOutput {
    pub alert: Option<AlertEvent>,
    pub logs: Vec<String>,
}

/// Drives one capture → reload → scan → gate cycle per tick. The async loop
/// in app.rs calls [`Coordinator::tick`] then sleeps the poll interval; tests
/// call it directly for a bounded number of iterations.
pub struct Coordinator<S: ScreenSource> {
    screen: S,
    gate: AlertGate,
    combinations_path: PathBuf,
    /// Last successfully loaded list, reused when a reload fails.
    combinations: Vec<ColorCombination>,
}

impl<S: ScreenSource> Coordinator<S> {
    pub fn new(screen: S, combinations_path: PathBuf, cooldown: Duration) -> Self {
        Self {
            screen,
            gate: AlertGate::new(cooldown),
            combinations_path,
            combinations: Vec::new(),
        }
    }

    /// Runs one cycle. Capture and reload failures are reported in the output
    /// logs and skip only the affected work; the loop itself never dies.
    pub fn tick(&mut self, now: Instant) -> TickOutput {
        let mut logs = Vec::new();

        let frame = match self.screen.capture() {
            Ok(frame) => frame,
            Err(e) => {
                logs.push(format!("Screen capture failed, skipping cycle: {e}"));
                return TickOutput { alert: None, logs };
            }
        };

        // Reload every cycle so live edits to the file take effect.
        match combinations::load_combinations(&self.combinations_path) {
            Ok(loaded) => self.combinations = loaded,
            Err(e) => logs.push(format!(
                "Could not reload combinations from {:?}, keeping previous list: {e}",
                self.combinations_path
            )),
        }

        let buffer = frame.pixels();
        let mut alert = None;
        for (index, combination) in self.combinations.iter().enumerate() {
            if matcher::detect(&buffer, combination) && self.gate.can_fire(now) {
                // Positions are reported for the matched combination only.
                let hits = matcher::positions(&buffer, combination);
                self.gate.record(now);
                alert = Some(AlertEvent::new(index, hits, frame.taken_at));
                // At most one alert per cycle; later combinations are skipped.
                break;
            }
        }

        TickOutput { alert, logs }
    }

    pub fn gate(&self) -> &AlertGate {
        &self.gate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::capture::{CaptureError, Frame};
    use chrono::Utc;
    use image::{Rgba, RgbaImage};
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    const RED_COMBO_XML: &str =
        r#"<config><combination><color red="255" green="0" blue="0"/></combination></config>"#;

    /// Screen stub replaying a fixed image.
    struct StubScreen {
        image: RgbaImage,
    }

    impl ScreenSource for StubScreen {
        fn capture(&self) -> Result<Frame, CaptureError> {
            Ok(Frame::new(self.image.clone(), Utc::now()))
        }
    }

    /// Screen stub that always fails, like a session without a display.
    struct DeadScreen;

    impl ScreenSource for DeadScreen {
        fn capture(&self) -> Result<Frame, CaptureError> {
            Err(CaptureError::NoMonitor)
        }
    }

    fn image_with_red_run() -> RgbaImage {
        let mut img = RgbaImage::from_pixel(5, 5, Rgba([0, 0, 0, 255]));
        for x in 1..=3 {
            img.put_pixel(x, 2, Rgba([255, 0, 0, 255]));
        }
        img
    }

    fn write_combos(dir: &Path, xml: &str) -> PathBuf {
        let path = dir.join("config.xml");
        fs::write(&path, xml).unwrap();
        path
    }

    fn coordinator_with_red_run(dir: &Path) -> Coordinator<StubScreen> {
        let path = write_combos(dir, RED_COMBO_XML);
        let screen = StubScreen {
            image: image_with_red_run(),
        };
        Coordinator::new(screen, path, Duration::from_secs(30))
    }

    #[test]
    fn match_produces_alert_with_positions() {
        let dir = tempdir().unwrap();
        let mut coord = coordinator_with_red_run(dir.path());

        let output = coord.tick(Instant::now());
        let alert = output.alert.unwrap();
        assert_eq!(alert.combination, 0);
        // One hit per column with a red pixel, topmost row each.
        assert_eq!(alert.positions, vec![(1, 2), (2, 2), (3, 2)]);
        assert!(alert.message.contains("(2, 2)"));
    }

    #[test]
    fn second_alert_within_cooldown_is_suppressed() {
        let dir = tempdir().unwrap();
        let mut coord = coordinator_with_red_run(dir.path());
        let base = Instant::now();

        assert!(coord.tick(base).alert.is_some());
        let again = coord.tick(base + Duration::from_millis(5_000));
        assert!(again.alert.is_none());
        // The suppressed attempt must not have touched the gate.
        assert_eq!(coord.gate().last_alert(), Some(base));

        let later = coord.tick(base + Duration::from_millis(30_000));
        assert!(later.alert.is_some());
    }

    #[test]
    fn capture_failure_skips_the_cycle_without_alerting() {
        let dir = tempdir().unwrap();
        let path = write_combos(dir.path(), RED_COMBO_XML);
        let mut coord = Coordinator::new(DeadScreen, path, Duration::from_secs(30));

        let output = coord.tick(Instant::now());
        assert!(output.alert.is_none());
        assert!(output.logs.iter().any(|l| l.contains("capture failed")));
    }

    #[test]
    fn reload_failure_keeps_previous_list() {
        let dir = tempdir().unwrap();
        let mut coord = coordinator_with_red_run(dir.path());
        let base = Instant::now();

        assert!(coord.tick(base).alert.is_some());

        // Corrupt the file; the loop keeps the old list and still matches.
        fs::write(dir.path().join("config.xml"), "<config><broken").unwrap();
        let output = coord.tick(base + Duration::from_secs(31));
        assert!(output.logs.iter().any(|l| l.contains("keeping previous list")));
        assert!(output.alert.is_some());
    }

    #[test]
    fn zero_combinations_tick_forever_without_alerts() {
        let dir = tempdir().unwrap();
        let path = write_combos(dir.path(), "<config></config>");
        let screen = StubScreen {
            image: image_with_red_run(),
        };
        let mut coord = Coordinator::new(screen, path, Duration::from_secs(30));

        let base = Instant::now();
        for i in 0..100 {
            let output = coord.tick(base + Duration::from_millis(i * 50));
            assert!(output.alert.is_none());
            assert!(output.logs.is_empty());
        }
    }

    #[test]
    fn first_matching_combination_wins_and_scopes_positions() {
        let dir = tempdir().unwrap();
        // Both combinations match the red run; only the first may alert, and
        // its positions must not include the second combination's colors.
        let xml = r#"
            <config>
                <combination><color red="255" green="0" blue="0"/></combination>
                <combination>
                    <color red="255" green="0" blue="0"/>
                    <color red="0" green="0" blue="0"/>
                </combination>
            </config>
        "#;
        let path = write_combos(dir.path(), xml);
        let screen = StubScreen {
            image: image_with_red_run(),
        };
        let mut coord = Coordinator::new(screen, path, Duration::from_secs(30));

        let alert = coord.tick(Instant::now()).alert.unwrap();
        assert_eq!(alert.combination, 0);
        // Black pixels belong to the second combination only, so columns 0
        // and 4 (all black) are absent from the report.
        assert_eq!(alert.positions, vec![(1, 2), (2, 2), (3, 2)]);
    }
}
