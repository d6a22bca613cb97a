use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Binary PPM (P6) writer. Alpha is dropped since the format has none.
#[derive(Debug, Default)]
pub struct PpmFilePresenter {}

impl PpmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }

    pub fn write_to<W: Write>(&self, buffer: &PixelBuffer, out: &mut W) -> std::io::Result<()> {
        // header: magic, width and height, max channel value
        writeln!(out, "P6")?;
        writeln!(out, "{} {}", buffer.width(), buffer.height())?;
        writeln!(out, "255")?;

        for rgba in buffer.buffer().chunks_exact(BYTES_PER_PIXEL) {
            out.write_all(&rgba[..3])?;
        }

        Ok(())
    }
}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> std::io::Result<()> {
        if let Some(parent) = filepath.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let mut file = BufWriter::new(std::fs::File::create(filepath)?);
        self.write_to(buffer, &mut file)?;
        file.flush()
    }
}
