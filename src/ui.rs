use drift_evo::simulation::trainer::TrainerPhase;
use drift_evo::simulation::world::{Mode, World};
use egui_macroquad::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};

pub fn draw_ui(world: &World) {
    egui_macroquad::ui(|egui_ctx| {
        egui::Window::new("Training")
            .default_pos([10.0, 10.0])
            .default_width(260.0)
            .resizable(true)
            .show(egui_ctx, |ui| {
                if world.is_paused() {
                    ui.label("Paused (P to resume)");
                }

                match world.mode() {
                    Mode::Manual => {
                        ui.label("Manual driving: arrow keys / WASD");
                        if let Some(car) = world.manual_car() {
                            ui.label(format!(
                                "Speed: {:.1}",
                                car.velocity.magnitude()
                            ));
                        }
                    }
                    Mode::Population => draw_trainer_stats(ui, world),
                }

                ui.separator();
                ui.label("P: pause   R: reset   Esc: quit");
            });
    });

    egui_macroquad::draw();
}

fn draw_trainer_stats(ui: &mut egui::Ui, world: &World) {
    let Some(trainer) = world.trainer() else {
        ui.label("Waiting for course...");
        return;
    };

    ui.label(format!("Generation: {}", trainer.generation()));
    ui.label(format!(
        "Alive: {}/{}",
        trainer.alive_count(),
        trainer.agents().len()
    ));
    if let Some(leader) = trainer.leader() {
        ui.label(format!("Leader fitness: {:.0}", leader.fitness));
    }
    ui.label(format!("Best ever: {:.0}", trainer.stats().best_ever()));
    if let TrainerPhase::AwaitingTurnover { remaining } = trainer.phase() {
        ui.label(format!("Next generation in {:.1}s", remaining.max(0.0)));
    }

    ui.separator();

    let records = &trainer.stats().records;
    let best: PlotPoints = records
        .iter()
        .map(|r| [f64::from(r.generation), r.best_fitness])
        .collect();
    let mean: PlotPoints = records
        .iter()
        .map(|r| [f64::from(r.generation), r.mean_fitness])
        .collect();

    Plot::new("fitness_plot")
        .height(150.0)
        .show_axes([true, true])
        .legend(Legend::default())
        .allow_zoom(false)
        .allow_drag(false)
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(best)
                    .color(egui::Color32::from_rgb(100, 200, 100))
                    .name("Best"),
            );
            plot_ui.line(
                Line::new(mean)
                    .color(egui::Color32::from_rgb(100, 150, 255))
                    .name("Mean"),
            );
        });
}
