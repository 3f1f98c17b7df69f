//! The operation registry.
//!
//! A closed set of named pixel transforms. Each variant maps to a pure
//! `DynamicImage -> DynamicImage` function; the names double as the CLI
//! values (`INVERT`, `SOLARIZE`, matched case-sensitively).

use super::calculations::{Channel, solarize_value};
use clap::ValueEnum;
use image::{DynamicImage, ImageBuffer, Pixel};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Operation {
    /// Invert channel values at or above mid-grey, leave darker values alone
    #[value(name = "SOLARIZE")]
    Solarize,
    /// Invert every color channel
    #[value(name = "INVERT")]
    Invert,
}

impl Operation {
    pub const ALL: [Operation; 2] = [Operation::Solarize, Operation::Invert];

    pub fn name(self) -> &'static str {
        match self {
            Operation::Solarize => "SOLARIZE",
            Operation::Invert => "INVERT",
        }
    }

    /// Apply the transform. Alpha channels are left untouched.
    pub fn apply(self, mut img: DynamicImage) -> DynamicImage {
        match self {
            Operation::Invert => img.invert(),
            Operation::Solarize => solarize(&mut img),
        }
        img
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn solarize(img: &mut DynamicImage) {
    match img {
        DynamicImage::ImageLuma8(buf) => solarize_buffer(buf),
        DynamicImage::ImageLumaA8(buf) => solarize_buffer(buf),
        DynamicImage::ImageRgb8(buf) => solarize_buffer(buf),
        DynamicImage::ImageRgba8(buf) => solarize_buffer(buf),
        DynamicImage::ImageLuma16(buf) => solarize_buffer(buf),
        DynamicImage::ImageLumaA16(buf) => solarize_buffer(buf),
        DynamicImage::ImageRgb16(buf) => solarize_buffer(buf),
        DynamicImage::ImageRgba16(buf) => solarize_buffer(buf),
        DynamicImage::ImageRgb32F(buf) => solarize_buffer(buf),
        DynamicImage::ImageRgba32F(buf) => solarize_buffer(buf),
        // DynamicImage is non_exhaustive; every current variant is matched above
        _ => {
            let mut buf = img.to_rgba8();
            solarize_buffer(&mut buf);
            *img = DynamicImage::ImageRgba8(buf);
        }
    }
}

fn solarize_buffer<P>(buf: &mut ImageBuffer<P, Vec<P::Subpixel>>)
where
    P: Pixel,
    P::Subpixel: Channel,
{
    for pixel in buf.pixels_mut() {
        pixel.apply_without_alpha(solarize_value);
    }
}
