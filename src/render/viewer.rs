//! Native window for a rendered scatter plot

use eframe::egui;
use log::info;

use crate::error::{Error, Result};
use super::ScatterPlot;

struct PlotViewer {
    pixels: egui::ColorImage,
    texture: Option<egui::TextureHandle>,
}

impl eframe::App for PlotViewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let pixels = &self.pixels;
        let texture = self.texture.get_or_insert_with(|| {
            ctx.load_texture("scatter-plot", pixels.clone(), egui::TextureOptions::LINEAR)
        });
        let sized = egui::load::SizedTexture::from_handle(texture);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add(egui::Image::from_texture(sized).shrink_to_fit());
        });
    }
}

/// Renders `plot` and shows it, returning once the window is closed
pub fn show(plot: &ScatterPlot, title: &str) -> Result<()> {
    let image = plot.render();
    let (width, height) = image.dimensions();
    let pixels = egui::ColorImage::from_rgba_unmultiplied([width as usize, height as usize], image.as_raw());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title)
            .with_inner_size([width as f32, height as f32]),
        ..Default::default()
    };

    info!("showing {} points, close the window to exit", plot.len());
    eframe::run_native(
        title,
        options,
        Box::new(move |_cc| {
            Ok(Box::new(PlotViewer {
                pixels,
                texture: None,
            }))
        }),
    )
    .map_err(|e| Error::Display(e.to_string()))?;

    info!("viewer closed");
    Ok(())
}
