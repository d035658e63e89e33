//! Project image loading
//!
//! Images are decoded on the blocking pool and converted into terminal
//! graphics protocols in the background; results come back over a channel
//! that the event loop drains once per frame.

use crate::{App, ImageMetadata, ImagePreviewState};
use folio::select_layout;
use std::path::PathBuf;

/// Larger files are not decoded
const MAX_IMAGE_BYTES: u64 = 20 * 1024 * 1024;

impl App {
    /// Start decoding every image a project displays
    ///
    /// Images dropped by the gallery cap are never loaded.
    pub(crate) fn request_project_images(&mut self) {
        let Some(picker) = self.image_picker.clone() else {
            return;
        };

        let paths: Vec<PathBuf> = self
            .model
            .portfolio
            .projects
            .iter()
            .enumerate()
            .filter_map(|(index, project)| select_layout(&project.images, index).ok())
            .flat_map(|plan| plan.displayed_images().cloned().collect::<Vec<_>>())
            .collect();

        for path in paths {
            if self.image_state_map.contains_key(&path) {
                continue;
            }
            self.image_state_map
                .insert(path.clone(), ImagePreviewState::Loading);

            let picker = picker.clone();
            let image_tx = self.image_update_tx.clone();
            tokio::spawn(async move {
                tracing::debug!(target: "images", path = %path.display(), "image_load_start");
                let state = match Self::load_image_preview(path.clone(), picker).await {
                    Ok((protocol, metadata)) => ImagePreviewState::Ready { protocol, metadata },
                    Err(reason) => {
                        tracing::debug!(
                            target: "images",
                            path = %path.display(),
                            %reason,
                            "image_load_failed"
                        );
                        ImagePreviewState::Failed { reason }
                    }
                };
                let _ = image_tx.send((path, state));
            });
        }
    }

    /// Apply finished loads (non-blocking)
    pub(crate) fn drain_image_updates(&mut self) {
        while let Ok((path, state)) = self.image_update_rx.try_recv() {
            tracing::debug!(
                target: "images",
                path = %path.display(),
                state = ?state,
                "image_state_updated"
            );
            self.image_state_map.insert(path, state);
        }
    }

    async fn load_image_preview(
        path: PathBuf,
        picker: ratatui_image::picker::Picker,
    ) -> Result<(ratatui_image::protocol::StatefulProtocol, ImageMetadata), String> {
        let file_size = match tokio::fs::metadata(&path).await {
            Ok(m) => m.len(),
            Err(_) => return Err("File not found".to_string()),
        };

        if file_size > MAX_IMAGE_BYTES {
            return Err(format!(
                "Too large ({})",
                crate::utils::format_bytes(file_size)
            ));
        }

        let img = match tokio::task::spawn_blocking(move || image::open(&path)).await {
            Ok(Ok(img)) => img,
            Ok(Err(e)) => return Err(format!("Load error: {}", e)),
            Err(e) => return Err(format!("Task error: {}", e)),
        };

        let dimensions = (img.width(), img.height());
        let format = match img.color() {
            image::ColorType::L8 | image::ColorType::L16 => "Grayscale",
            image::ColorType::La8 | image::ColorType::La16 => "Grayscale+Alpha",
            image::ColorType::Rgb8 | image::ColorType::Rgb16 | image::ColorType::Rgb32F => "RGB",
            image::ColorType::Rgba8 | image::ColorType::Rgba16 | image::ColorType::Rgba32F => {
                "RGBA"
            }
            _ => "Unknown",
        };

        // Cards are at most half a wide terminal; downscale anything bigger
        let font_size = picker.font_size();
        let max_width = 120 * font_size.0 as u32;
        let max_height = 40 * font_size.1 as u32;

        let processed_img = if img.width() > max_width || img.height() > max_height {
            let scale_factor = (img.width() as f32 / max_width as f32)
                .max(img.height() as f32 / max_height as f32);

            // Adaptive filter selection based on downscale amount
            let filter = if scale_factor > 4.0 {
                image::imageops::FilterType::Triangle
            } else if scale_factor > 2.0 {
                image::imageops::FilterType::CatmullRom
            } else {
                image::imageops::FilterType::Lanczos3
            };

            tracing::debug!(
                target: "images",
                width = img.width(),
                height = img.height(),
                scale_factor,
                ?filter,
                "image_downscale"
            );
            let resized = tokio::task::spawn_blocking(move || {
                img.resize(max_width, max_height, filter)
            })
            .await
            .map_err(|e| format!("Task error: {}", e))?;
            resized
        } else {
            img
        };

        let protocol = picker.new_resize_protocol(processed_img);

        let metadata = ImageMetadata {
            dimensions: Some(dimensions),
            format: Some(format.to_string()),
            file_size,
        };

        Ok((protocol, metadata))
    }
}
