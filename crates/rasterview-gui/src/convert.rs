use rasterview_core::raster::Raster;

/// Convert an RGBA raster to an egui ColorImage for texture upload.
pub fn raster_to_color_image(raster: &Raster) -> egui::ColorImage {
    let w = raster.width() as usize;
    let h = raster.height() as usize;
    let mut pixels = Vec::with_capacity(w * h);

    for px in raster.as_raw().chunks_exact(4) {
        pixels.push(egui::Color32::from_rgba_unmultiplied(
            px[0], px[1], px[2], px[3],
        ));
    }

    egui::ColorImage {
        size: [w, h],
        pixels,
        source_size: Default::default(),
    }
}
