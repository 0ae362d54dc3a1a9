//! Adapter between the `image` crate and the pixel-grid codec
//!
//! Images are read into a [`PixelGrid`] holding the first three channels of
//! every pixel in row-major order. After a successful embed only the pixels
//! covered by the payload are written back, through `(index % width, index / width)`,
//! so alpha and every later pixel keep their original values.

use crate::decoder::{self, Inspection};
use crate::encoder::{self, EmbedReport};
use crate::error::StegoError;
use crate::grid::PixelGrid;
use crate::payload::Payload;
use crate::types::{Channel, Pixel};
use image::{ColorType, DynamicImage, GenericImageView, ImageBuffer, ImageError, ImageFormat};
use std::io::Cursor;
use std::path::Path;

#[cfg(feature = "logging")]
use tracing::debug;

/// Run `$body` with `$buf` bound to the typed buffer of a supported colour type
macro_rules! with_buffer {
    ($image:expr, $buf:ident => $body:expr) => {
        match $image {
            DynamicImage::ImageRgb8($buf) => $body,
            DynamicImage::ImageRgba8($buf) => $body,
            DynamicImage::ImageRgb16($buf) => $body,
            DynamicImage::ImageRgba16($buf) => $body,
            other => return Err(unsupported_color(other.color())),
        }
    };
}

/// A raster image whose RGB channels can carry a payload
#[derive(Debug, Clone)]
pub struct StegoImage {
    image: DynamicImage,
}

impl StegoImage {
    /// Open an image file
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StegoError> {
        let path = path.as_ref();

        #[cfg(feature = "logging")]
        debug!("Opening image {}", path.display());

        let image = image::io::Reader::open(path)?
            .with_guessed_format()?
            .decode()?;
        Self::from_dynamic(image)
    }

    /// Wrap an already decoded image
    ///
    /// Only 8- and 16-bit RGB and RGBA images are accepted.
    pub fn from_dynamic(image: DynamicImage) -> Result<Self, StegoError> {
        match image.color() {
            ColorType::Rgb8 | ColorType::Rgba8 | ColorType::Rgb16 | ColorType::Rgba16 => {
                Ok(Self { image })
            }
            other => Err(unsupported_color(other)),
        }
    }

    /// Underlying image
    pub fn as_dynamic(&self) -> &DynamicImage {
        &self.image
    }

    /// Consume the wrapper, returning the underlying image
    pub fn into_dynamic(self) -> DynamicImage {
        self.image
    }

    /// Width and height in pixels
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Colour type of the underlying buffer
    pub fn color_type(&self) -> ColorType {
        self.image.color()
    }

    /// Number of characters the image can hold
    pub fn group_capacity(&self) -> usize {
        let (width, height) = self.dimensions();
        crate::constants::group_capacity(width as usize * height as usize)
    }

    /// Embed `payload` into the image
    ///
    /// The image is left unmodified when embedding fails.
    pub fn embed(&mut self, payload: &Payload) -> Result<EmbedReport, StegoError> {
        with_buffer!(&mut self.image, buffer => embed_buffer(buffer, payload))
    }

    /// Recover the hidden text
    pub fn extract(&self) -> Result<String, StegoError> {
        with_buffer!(&self.image, buffer => decoder::extract(&read_grid(buffer)?))
    }

    /// Scan the image for a payload without failing when none is terminated
    pub fn inspect(&self) -> Result<Inspection, StegoError> {
        with_buffer!(&self.image, buffer => Ok(decoder::inspect(&read_grid(buffer)?)))
    }

    /// Save the image, choosing the format from the file extension
    ///
    /// The image is encoded in memory first; the file is only created once
    /// encoding has succeeded.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), StegoError> {
        let path = path.as_ref();
        let format = format_from_path(path)?;

        #[cfg(feature = "logging")]
        debug!("Saving image {} as {:?}", path.display(), format);

        let encoded = self.encode_to_vec(format)?;
        std::fs::write(path, encoded)?;
        Ok(())
    }

    /// Encode the image into `format` in memory
    pub fn encode_to_vec(&self, format: ImageFormat) -> Result<Vec<u8>, StegoError> {
        let mut buf = Cursor::new(Vec::new());
        self.image
            .write_to(&mut buf, format)
            .map_err(|err| match err {
                // Writes to memory cannot fail, so an IO error is the encoder refusing the image
                ImageError::Unsupported(_) | ImageError::IoError(_) => {
                    StegoError::UnsupportedFormat(format!(
                        "{:?} cannot store {:?}: {}",
                        format,
                        self.image.color(),
                        err
                    ))
                }
                other => other.into(),
            })?;
        Ok(buf.into_inner())
    }
}

/// Hide `text` in the image at `src` and save the result to `dst`
///
/// The payload is validated before the source image is opened.
pub fn encode_file<P: AsRef<Path>, Q: AsRef<Path>>(
    src: P,
    text: &str,
    dst: Q,
) -> Result<EmbedReport, StegoError> {
    let payload = Payload::from_text(text)?;
    let dst = dst.as_ref();
    format_from_path(dst)?;

    let mut image = StegoImage::open(src)?;
    let report = image.embed(&payload)?;
    image.save(dst)?;

    Ok(report)
}

/// Recover the text hidden in the image at `src`
pub fn decode_file<P: AsRef<Path>>(src: P) -> Result<String, StegoError> {
    StegoImage::open(src)?.extract()
}

/// Determine the output format from a path's extension, ignoring case
pub fn format_from_path(path: &Path) -> Result<ImageFormat, StegoError> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(|ext| ImageFormat::from_extension(ext.to_ascii_lowercase()))
        .ok_or_else(|| StegoError::UnsupportedFormat(path.display().to_string()))
}

fn read_grid<P>(buffer: &ImageBuffer<P, Vec<P::Subpixel>>) -> Result<PixelGrid<P::Subpixel>, StegoError>
where
    P: image::Pixel,
    P::Subpixel: Channel,
{
    let pixels = buffer
        .pixels()
        .map(|p| {
            let c = p.channels();
            Pixel::new(c[0], c[1], c[2])
        })
        .collect();

    PixelGrid::new(buffer.width(), buffer.height(), pixels)
}

fn embed_buffer<P>(
    buffer: &mut ImageBuffer<P, Vec<P::Subpixel>>,
    payload: &Payload,
) -> Result<EmbedReport, StegoError>
where
    P: image::Pixel,
    P::Subpixel: Channel,
{
    let mut grid = read_grid(buffer)?;
    let report = encoder::embed(&mut grid, payload)?;

    for (index, pixel) in grid.pixels().iter().take(report.pixels_written).enumerate() {
        let (x, y) = grid.coords(index);
        buffer.get_pixel_mut(x, y).channels_mut()[..3].copy_from_slice(&pixel.channels);
    }

    Ok(report)
}

fn unsupported_color(color: ColorType) -> StegoError {
    StegoError::UnsupportedColor(format!("{:?}", color))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Rgb, RgbImage, Rgba, RgbaImage};

    #[test]
    fn test_format_from_extension_case_insensitive() {
        assert_eq!(
            format_from_path(Path::new("out.PNG")).unwrap(),
            ImageFormat::Png
        );
        assert_eq!(
            format_from_path(Path::new("dir/out.Bmp")).unwrap(),
            ImageFormat::Bmp
        );
    }

    #[test]
    fn test_format_unknown_extension() {
        assert!(matches!(
            format_from_path(Path::new("out.nope")),
            Err(StegoError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            format_from_path(Path::new("no_extension")),
            Err(StegoError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_sixteen_bit_bmp_is_unsupported_format() {
        let buffer = ImageBuffer::from_pixel(2, 2, Rgb([1u16, 2, 3]));
        let image = StegoImage::from_dynamic(DynamicImage::ImageRgb16(buffer)).unwrap();

        assert!(matches!(
            image.encode_to_vec(ImageFormat::Bmp),
            Err(StegoError::UnsupportedFormat(_))
        ));
        assert!(!image.encode_to_vec(ImageFormat::Png).unwrap().is_empty());
    }

    #[test]
    fn test_grayscale_rejected() {
        let gray = DynamicImage::ImageLuma8(GrayImage::new(4, 4));
        assert!(matches!(
            StegoImage::from_dynamic(gray),
            Err(StegoError::UnsupportedColor(_))
        ));
    }

    #[test]
    fn test_embed_preserves_alpha() {
        let buffer = RgbaImage::from_pixel(4, 4, Rgba([10, 20, 30, 77]));
        let mut image = StegoImage::from_dynamic(DynamicImage::ImageRgba8(buffer)).unwrap();

        image.embed(&Payload::from_text("ok").unwrap()).unwrap();
        assert_eq!(image.extract().unwrap(), "ok");

        let rgba = image.into_dynamic().into_rgba8();
        assert!(rgba.pixels().all(|p| p[3] == 77));
    }

    #[test]
    fn test_embed_failure_leaves_image_untouched() {
        let buffer = RgbImage::from_pixel(2, 2, Rgb([255, 255, 255]));
        let mut image = StegoImage::from_dynamic(DynamicImage::ImageRgb8(buffer.clone())).unwrap();

        let result = image.embed(&Payload::from_text("ab").unwrap());
        assert_eq!(
            result,
            Err(StegoError::ImageTooSmall {
                group: 1,
                available_pixels: 4
            })
        );
        assert_eq!(image.into_dynamic().into_rgb8(), buffer);
    }

    #[test]
    fn test_write_back_wraps_rows() {
        let buffer = RgbImage::from_pixel(2, 3, Rgb([100, 100, 100]));
        let mut image = StegoImage::from_dynamic(DynamicImage::ImageRgb8(buffer)).unwrap();
        image.embed(&Payload::from_bytes(&[0xFF, 0xFF]).unwrap()).unwrap();

        let rgb = image.into_dynamic().into_rgb8();
        // Pixel 2 is the first pixel of the second row
        assert_eq!(rgb.get_pixel(0, 1), &Rgb([99, 99, 100]));
        // Pixel 5 ends the payload with an odd terminator
        assert_eq!(rgb.get_pixel(1, 2), &Rgb([99, 99, 99]));
    }

    #[test]
    fn test_sixteen_bit_round_trip() {
        let buffer = ImageBuffer::from_pixel(3, 3, Rgb([40000u16, 0, 65535]));
        let mut image = StegoImage::from_dynamic(DynamicImage::ImageRgb16(buffer)).unwrap();
        image.embed(&Payload::from_text("x").unwrap()).unwrap();

        assert_eq!(image.color_type(), ColorType::Rgb16);
        assert_eq!(image.extract().unwrap(), "x");
    }
}
