use std::time::{Duration, Instant};

use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints, Points};

use projectile_sim::dynamics::state::{SampleResult, SimulationParameters, State};
use projectile_sim::sim::TrajectoryIntegrator;

/// One integrator step per tick.
const TICK: Duration = Duration::from_millis(100);

fn main() -> eframe::Result {
    let app = LaunchViz::default();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1000.0, 760.0]),
        ..Default::default()
    };
    eframe::run_native("Projectile Simulator", options, Box::new(|_| Ok(Box::new(app))))
}

/// The in-progress run. Built on "Run", dropped on "Reset".
struct Run {
    integrator: TrajectoryIntegrator,
    samples: Vec<State>,
    last_tick: Instant,
}

#[derive(Default)]
struct LaunchViz {
    inputs: SimulationParameters,
    run: Option<Run>,
    error: Option<String>,
}

impl LaunchViz {
    fn start(&mut self) {
        self.error = None;
        match TrajectoryIntegrator::new(self.inputs.clone()) {
            Ok(integrator) => {
                let launch = *integrator.state();
                self.run = Some(Run {
                    integrator,
                    samples: vec![launch],
                    last_tick: Instant::now(),
                });
            }
            Err(e) => {
                self.run = None;
                self.error = Some(e.to_string());
            }
        }
    }

    fn reset(&mut self) {
        self.run = None;
        self.error = None;
    }

    /// Advance the active run by one step if a tick has elapsed.
    /// Returns true while the run still wants ticks.
    fn tick(&mut self) -> bool {
        let Some(run) = self.run.as_mut() else {
            return false;
        };
        if run.integrator.is_terminated() {
            return false;
        }
        if run.last_tick.elapsed() < TICK {
            return true;
        }
        run.last_tick = Instant::now();

        match run.integrator.next_sample() {
            Ok(SampleResult::Sample(s)) => {
                run.samples.push(s);
                true
            }
            Ok(SampleResult::Impact(s)) => {
                run.samples.push(s);
                false
            }
            Ok(SampleResult::Done) => false,
            Err(e) => {
                self.error = Some(e.to_string());
                false
            }
        }
    }

    fn inputs_panel(&mut self, ui: &mut egui::Ui) {
        let p = &mut self.inputs;
        egui::Grid::new("inputs").num_columns(4).spacing([12.0, 6.0]).show(ui, |ui| {
            ui.label("Initial Velocity (m/s)");
            ui.add(egui::DragValue::new(&mut p.initial_speed).speed(0.5));
            ui.label("Launch Angle (deg)");
            ui.add(egui::DragValue::new(&mut p.launch_angle).speed(0.5).range(-90.0..=180.0));
            ui.end_row();

            ui.label("Mass (kg)");
            ui.add(egui::DragValue::new(&mut p.mass).speed(0.05));
            ui.label("Time Step (s)");
            ui.add(egui::DragValue::new(&mut p.time_step).speed(0.001).max_decimals(4));
            ui.end_row();

            ui.label("Drag Coefficient");
            ui.add(egui::DragValue::new(&mut p.drag_coefficient).speed(0.01));
            ui.label("Include Air Resistance");
            ui.checkbox(&mut p.include_drag, "");
            ui.end_row();
        });
    }

    fn table(ui: &mut egui::Ui, samples: &[State]) {
        egui::ScrollArea::vertical()
            .max_height(160.0)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                egui::Grid::new("trajectory-table")
                    .striped(true)
                    .min_col_width(100.0)
                    .show(ui, |ui| {
                        ui.strong("Time (s)");
                        ui.strong("X Position (m)");
                        ui.strong("Y Position (m)");
                        ui.end_row();
                        for s in samples {
                            ui.label(format!("{:.3}", s.time));
                            ui.label(format!("{:.3}", s.pos.x));
                            ui.label(format!("{:.3}", s.pos.y));
                            ui.end_row();
                        }
                    });
            });
    }
}

impl eframe::App for LaunchViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.tick() {
            ctx.request_repaint_after(TICK);
        }

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.add_space(6.0);
            self.inputs_panel(ui);
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                if ui.button("Run Simulation").clicked() {
                    self.start();
                    ctx.request_repaint();
                }
                if ui.button("Reset Simulation").clicked() {
                    self.reset();
                }
                if let Some(err) = &self.error {
                    ui.colored_label(egui::Color32::RED, err.as_str());
                }
            });
            ui.add_space(6.0);
        });

        let samples: &[State] = self.run.as_ref().map(|r| r.samples.as_slice()).unwrap_or(&[]);

        egui::TopBottomPanel::bottom("table").resizable(true).show(ctx, |ui| {
            Self::table(ui, samples);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Projectile Trajectory");
            let line: PlotPoints = samples.iter().map(|s| [s.pos.x, s.pos.y]).collect();
            let markers: PlotPoints = samples.iter().map(|s| [s.pos.x, s.pos.y]).collect();
            Plot::new("trajectory")
                .x_axis_label("Distance (m)")
                .y_axis_label("Height (m)")
                .data_aspect(1.0)
                .show(ui, |plot_ui| {
                    plot_ui.line(Line::new("Trajectory", line));
                    plot_ui.points(Points::new("Samples", markers).radius(2.0));
                });
        });
    }
}
