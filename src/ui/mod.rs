//! User interface using egui.
//!
//! Provides camera info panel and controls overlay.

use egui::Context;

use crate::camera::OrbitCamera;
use crate::renderer::RenderMode;

/// UI state and rendering.
pub struct Ui {
    /// Whether the side panel is visible
    pub panel_visible: bool,
}

impl Ui {
    pub fn new() -> Self {
        Self {
            panel_visible: true,
        }
    }

    /// Render the UI and return the actions it requested.
    pub fn render(
        &mut self,
        ctx: &Context,
        camera: &mut OrbitCamera,
        render_mode: &mut RenderMode,
        fps: f32,
    ) -> UiResponse {
        let mut response = UiResponse::default();

        // Toggle panel with Tab key
        if ctx.input(|i| i.key_pressed(egui::Key::Tab)) {
            self.panel_visible = !self.panel_visible;
        }

        if self.panel_visible {
            egui::SidePanel::left("controls")
                .default_width(200.0)
                .show(ctx, |ui| {
                    ui.heading("orbit-pyramid");
                    ui.separator();

                    // Performance
                    ui.label(format!("FPS: {:.1}", fps));
                    ui.separator();

                    ui.collapsing("Camera", |ui| {
                        let pose = camera.spherical();
                        ui.label(format!("Azimuth: {:.1}°", pose.theta.to_degrees()));
                        ui.label(format!("Polar: {:.1}°", pose.phi.to_degrees()));
                        ui.label(format!("Distance: {:.2}", pose.radius));

                        ui.checkbox(&mut camera.auto_rotate, "Auto-rotate");

                        ui.horizontal(|ui| {
                            ui.label("Rotate speed:");
                            ui.add(
                                egui::DragValue::new(&mut camera.rotate_speed)
                                    .speed(0.05)
                                    .range(0.05..=5.0),
                            );
                        });

                        if ui.button("Reset Camera").clicked() {
                            response.reset_camera = true;
                        }
                    });

                    ui.collapsing("Render", |ui| {
                        ui.radio_value(render_mode, RenderMode::Both, "Solid + Wireframe");
                        ui.radio_value(render_mode, RenderMode::Solid, "Solid");
                        ui.radio_value(render_mode, RenderMode::Wireframe, "Wireframe");
                    });

                    ui.separator();

                    // Help section
                    ui.collapsing("Controls", |ui| {
                        ui.label("Left Drag: Rotate");
                        ui.label("Scroll: Zoom");
                        ui.label("Arrows: Nudge");
                        ui.label("Space: Auto-rotate");
                        ui.label("R: Reset Camera");
                        ui.label("Tab: Toggle Panel");
                        ui.label("ESC: Quit");
                    });
                });
        }

        response
    }
}

impl Default for Ui {
    fn default() -> Self {
        Self::new()
    }
}

/// Response from UI indicating what actions to take.
#[derive(Default)]
pub struct UiResponse {
    pub reset_camera: bool,
}
