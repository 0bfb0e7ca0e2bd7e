//! Calculator screen demo
//!
//! Builds a small calculator-style screen out of colored panels, then
//! simulates a device rotation from portrait to landscape and back while
//! logging what each frame would hand to a GPU backend.

use tilt_ui::prelude::*;

const PORTRAIT_SCREEN: (f32, f32) = (480.0, 800.0);
const FRAME_DT: f32 = 1.0 / 60.0;

struct CalcScreen {
    scene: UiScene,
    gauge: OrientationGauge,
}

impl CalcScreen {
    fn new(styles: &StyleSheet) -> Self {
        log::info!("Building calculator screen...");

        let mut scene = UiScene::new();

        scene.add_panel(
            styled_panel(styles, "background")
                .bounds(Scope::One(Orientation::Portrait), Bounds::new(0.0, 0.0, 480.0, 800.0))
                .bounds(Scope::One(Orientation::Landscape), Bounds::new(0.0, 0.0, 800.0, 480.0))
                .z_order(-10)
                .build(),
        );

        scene.add_panel(
            styled_panel(styles, "display")
                .bounds(Scope::One(Orientation::Portrait), Bounds::new(16.0, 16.0, 448.0, 160.0))
                .bounds(Scope::One(Orientation::Landscape), Bounds::new(16.0, 16.0, 768.0, 96.0))
                .build(),
        );

        scene.add_panel(
            styled_panel(styles, "keypad")
                .bounds(Scope::One(Orientation::Portrait), Bounds::new(16.0, 192.0, 448.0, 592.0))
                .bounds(Scope::One(Orientation::Landscape), Bounds::new(16.0, 128.0, 768.0, 336.0))
                .build(),
        );

        scene.add_panel(
            styled_panel(styles, "accent")
                .bounds(Scope::One(Orientation::Portrait), Bounds::new(16.0, 180.0, 448.0, 4.0))
                .bounds(Scope::One(Orientation::Landscape), Bounds::new(16.0, 118.0, 768.0, 4.0))
                .z_order(1)
                .build(),
        );

        log::info!("Scene holds {} panels", scene.len());

        Self {
            scene,
            gauge: OrientationGauge::new(Orientation::Portrait),
        }
    }

    /// Transition to an orientation, painting every intermediate frame
    fn rotate_to(&mut self, orientation: Orientation, painter: &mut BatchPainter) {
        log::info!("Rotating to {orientation:?}...");
        self.gauge.set_orientation(orientation);

        let mut frames = 0u32;
        while !self.gauge.is_settled() {
            let mix = self.gauge.step(FRAME_DT);
            self.scene.set_orientation_mix(mix);

            painter.clear();
            self.scene.paint(painter);
            frames += 1;

            log::debug!(
                "frame {frames}: mix {:.3}, {} vertices, {} draws",
                mix,
                painter.vertices().len(),
                painter.draws().len()
            );
        }

        log::info!(
            "Settled at {orientation:?} after {frames} frames ({} vertices, {} draws)",
            painter.vertices().len(),
            painter.draws().len()
        );
    }
}

fn styled_panel(styles: &StyleSheet, name: &str) -> PanelBuilder {
    let builder = PanelBuilder::new();
    match styles.panel(name) {
        Some(style) => builder.styled(style),
        None => {
            log::warn!("No style entry for panel {name:?}, using defaults");
            builder
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("Starting calculator demo...");

    let styles = StyleSheet::load_from_file("calc_demo/styles/calc.ron").unwrap_or_else(|e| {
        log::warn!("Could not load style sheet ({e}), using defaults");
        StyleSheet::default()
    });

    let mut screen = CalcScreen::new(&styles);
    let mut painter = BatchPainter::new(PORTRAIT_SCREEN.0, PORTRAIT_SCREEN.1);

    // Initial portrait frame
    painter.clear();
    screen.scene.paint(&mut painter);
    log::info!(
        "Portrait frame: {} vertices, {} draws",
        painter.vertices().len(),
        painter.draws().len()
    );

    // Full rotation there and back
    screen.rotate_to(Orientation::Landscape, &mut painter);
    screen.rotate_to(Orientation::Portrait, &mut painter);

    log::info!("Calculator demo complete");
}
