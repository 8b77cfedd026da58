//! Simple containers to track images and perform operations on them.

use std::io::{Read, Write};

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ImageFormat {
    Rgba8,
}

impl ImageFormat {
    fn stride(&self) -> u32 {
        match self {
            ImageFormat::Rgba8 => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

#[derive(Debug, Error)]
pub(crate) enum DecodeError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Png(#[from] png::DecodingError),

    #[error("unsupported color type {0:?}")]
    UnsupportedColor(png::ColorType),
}

#[derive(Debug, Clone)]
pub(crate) struct Image {
    size: (u32, u32),
    data: Vec<u8>,
    format: ImageFormat,
}

impl Image {
    pub fn new_rgba8<D: Into<Vec<u8>>>(size: (u32, u32), data: D) -> Self {
        let data = data.into();
        let format = ImageFormat::Rgba8;

        assert!(data.len() == (size.0 * size.1 * format.stride()) as usize);

        Self { size, data, format }
    }

    pub fn new_empty_rgba8(size: (u32, u32)) -> Self {
        let data = vec![0; (size.0 * size.1 * ImageFormat::Rgba8.stride()) as usize];
        Self::new_rgba8(size, data)
    }

    pub fn decode_png<R: Read>(input: R) -> Result<Self, DecodeError> {
        let mut decoder = png::Decoder::new(input);

        // Normalize palettes and 16-bit depth away up front so the match
        // below only has to widen channel counts.
        decoder
            .set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);

        let (info, mut reader) = decoder.read_info()?;

        let mut data = vec![0; info.buffer_size()];
        reader.next_frame(&mut data)?;

        let data = match info.color_type {
            png::ColorType::RGBA => data,
            png::ColorType::RGB => widen(&data, 3, |px| [px[0], px[1], px[2], 0xff]),
            png::ColorType::Grayscale => widen(&data, 1, |px| [px[0], px[0], px[0], 0xff]),
            png::ColorType::GrayscaleAlpha => widen(&data, 2, |px| [px[0], px[0], px[0], px[1]]),
            other => return Err(DecodeError::UnsupportedColor(other)),
        };

        let size = (info.width, info.height);

        Ok(Self::new_rgba8(size, data))
    }

    pub fn encode_png<W: Write>(&self, output: W) -> Result<(), png::EncodingError> {
        let mut encoder = png::Encoder::new(output, self.size.0, self.size.1);

        match self.format {
            ImageFormat::Rgba8 => {
                encoder.set_color(png::ColorType::RGBA);
                encoder.set_depth(png::BitDepth::Eight);
            }
        }

        let mut output_writer = encoder.write_header()?;
        output_writer.write_image_data(&self.data)?;

        // On drop, output_writer will write the last chunk of the PNG file.
        Ok(())
    }

    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    /// Copies `other` into this image with its top-left corner at `pos`.
    ///
    /// Every channel is overwritten, alpha included; there is no blending.
    pub fn blit(&mut self, other: &Image, pos: (u32, u32)) {
        assert!(self.format == ImageFormat::Rgba8 && other.format == ImageFormat::Rgba8);

        let stride = self.format.stride();

        let other_width_bytes = other.size.0 * stride;
        let other_rows = other.data.chunks_exact(other_width_bytes as usize);

        for (other_y, other_row) in other_rows.enumerate() {
            let self_y = pos.1 + other_y as u32;

            let start_px = pos.0 + self.size.0 * self_y;

            let start_in_bytes = (stride * start_px) as usize;
            let end_in_bytes = start_in_bytes + other_row.len();

            let self_row = &mut self.data[start_in_bytes..end_in_bytes];
            self_row.copy_from_slice(other_row);
        }
    }

    /// Copies `other` into this image rotated a quarter turn clockwise:
    /// source pixel (x, y) lands at (pos.0 + height - 1 - y, pos.1 + x),
    /// so the occupied region is `other`'s size transposed.
    ///
    /// Pixels transfer exactly, alpha included; no resampling.
    pub fn blit_rotated(&mut self, other: &Image, pos: (u32, u32)) {
        assert!(self.format == ImageFormat::Rgba8 && other.format == ImageFormat::Rgba8);

        let (other_width, other_height) = other.size;

        for y in 0..other_height {
            for x in 0..other_width {
                let dest = (pos.0 + other_height - 1 - y, pos.1 + x);
                self.set_pixel(dest, other.get_pixel((x, y)));
            }
        }
    }

    pub fn get_pixel(&self, pos: (u32, u32)) -> Pixel {
        assert!(pos.0 < self.size.0);
        assert!(pos.1 < self.size.1);

        let stride = self.format.stride() as usize;
        let start = stride * (pos.0 + pos.1 * self.size.0) as usize;

        Pixel {
            r: self.data[start],
            g: self.data[start + 1],
            b: self.data[start + 2],
            a: self.data[start + 3],
        }
    }

    pub fn set_pixel(&mut self, pos: (u32, u32), pixel: Pixel) {
        assert!(pos.0 < self.size.0);
        assert!(pos.1 < self.size.1);

        let stride = self.format.stride() as usize;
        let start = stride * (pos.0 + pos.1 * self.size.0) as usize;

        self.data[start] = pixel.r;
        self.data[start + 1] = pixel.g;
        self.data[start + 2] = pixel.b;
        self.data[start + 3] = pixel.a;
    }
}

fn widen<F: Fn(&[u8]) -> [u8; 4]>(data: &[u8], stride: usize, to_rgba: F) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len() / stride * 4);

    for px in data.chunks_exact(stride) {
        out.extend_from_slice(&to_rgba(px));
    }

    out
}
