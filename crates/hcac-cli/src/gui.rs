use eframe::egui;

use hcac_core::config::Config;
use hcac_core::{HcacError, PendingSubmission, Result, Session};

pub fn run(config: Config) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 720.0])
            .with_min_inner_size([400.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        "HCAC Services",
        options,
        Box::new(|cc| Ok(Box::new(HcacApp::new(cc, config)))),
    )
    .map_err(|e| HcacError::Gui(e.to_string()))?;

    Ok(())
}

struct HcacApp {
    session: Session,
    description_width: usize,
    product_name: String,
    product_description: String,
    pending: Option<PendingSubmission>,
    status_message: Option<(String, MessageType)>,
}

enum MessageType {
    Error,
    Info,
}

impl HcacApp {
    fn new(_cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        Self {
            session: Session::new(config.pacing()),
            description_width: config.display.description_width,
            product_name: String::new(),
            product_description: String::new(),
            pending: None,
            status_message: None,
        }
    }

    fn submit(&mut self) {
        match self
            .session
            .begin(&self.product_name, &self.product_description)
        {
            Ok(pending) => {
                self.pending = Some(pending);
                self.status_message = None;
            }
            Err(e) => {
                self.status_message = Some((e.to_string(), MessageType::Error));
            }
        }
    }

    /// Finish the pending submission once its delay is over
    fn poll_pending(&mut self, ctx: &egui::Context) {
        let Some(pending) = self.pending.take() else {
            return;
        };

        if pending.is_ready() {
            self.session.complete(pending);
            self.product_name.clear();
            self.product_description.clear();
        } else {
            ctx.request_repaint_after(pending.timer().remaining());
            self.pending = Some(pending);
        }
    }

    fn cancel(&mut self) {
        if self.pending.take().is_some() {
            self.status_message = Some(("Submission cancelled".to_string(), MessageType::Info));
        }
    }
}

impl eframe::App for HcacApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_pending(ctx);

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                ui.heading("HCAC Services");
                ui.label("Product Categorization");
            });
            ui.add_space(8.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let busy = self.pending.is_some();

            ui.label("Product Name");
            ui.add_enabled(
                !busy,
                egui::TextEdit::singleline(&mut self.product_name)
                    .hint_text("Enter product name")
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(8.0);

            ui.label("Product Description");
            ui.add_enabled(
                !busy,
                egui::TextEdit::multiline(&mut self.product_description)
                    .hint_text("Enter product description")
                    .desired_rows(5)
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(8.0);

            let mut clear_status = false;
            if let Some((msg, msg_type)) = &self.status_message {
                let color = match msg_type {
                    MessageType::Error => egui::Color32::RED,
                    MessageType::Info => egui::Color32::LIGHT_BLUE,
                };
                ui.horizontal(|ui| {
                    ui.colored_label(color, msg.clone());
                    if ui.small_button("x").clicked() {
                        clear_status = true;
                    }
                });
            }
            if clear_status {
                self.status_message = None;
            }

            ui.horizontal(|ui| {
                if busy {
                    ui.spinner();
                    ui.label("Processing...");
                    if ui.button("Cancel").clicked() {
                        self.cancel();
                    }
                } else if ui.button("Categorize Product").clicked() {
                    self.submit();
                }
            });

            if let Some(latest) = self.session.latest() {
                ui.add_space(16.0);
                ui.separator();
                ui.label("Predicted Category:");
                ui.heading(latest.category().label());
            }

            let history = self.session.history();
            if !history.is_empty() {
                ui.add_space(16.0);
                ui.separator();
                ui.heading("Recent Categorizations");
                egui::ScrollArea::vertical().show(ui, |ui| {
                    for record in history {
                        ui.horizontal(|ui| {
                            ui.vertical(|ui| {
                                ui.strong(record.name());
                                ui.weak(record.description_preview(self.description_width));
                            });
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    ui.label(record.category().label());
                                },
                            );
                        });
                        ui.separator();
                    }
                });
            }
        });
    }
}
