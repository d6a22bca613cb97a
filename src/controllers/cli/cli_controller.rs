use std::path::Path;
use std::time::{Duration, Instant};

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::render_frame::render_frame::{RenderFrameError, render, render_serial};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::render_params::RenderParams;

/// Renders a single frame and hands it to a file presenter.
pub struct CliController<P: FilePresenterPort> {
    presenter: P,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> CliController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            buffer: None,
        }
    }

    pub fn generate(
        &mut self,
        params: &RenderParams,
        serial: bool,
    ) -> Result<Duration, RenderFrameError> {
        let viewport = params.viewport();

        log::info!(
            "rendering {} set at {}x{}, max iterations {}",
            params.variant(),
            viewport.width(),
            viewport.height(),
            params.max_iterations()
        );

        let start = Instant::now();
        let buffer = if serial {
            render_serial(params)?
        } else {
            render(params)?
        };
        let duration = start.elapsed();

        log::info!("render finished in {:?}", duration);

        self.buffer = Some(buffer);

        Ok(duration)
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    pub fn write(&self, filepath: &Path) -> std::io::Result<()> {
        let Some(buffer) = &self.buffer else {
            return Err(std::io::Error::other("no frame has been rendered yet"));
        };

        self.presenter.present(buffer, filepath)?;
        log::info!("wrote {}", filepath.display());

        Ok(())
    }
}
