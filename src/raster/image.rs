//! The raster image: a fixed-size grid of colours.

use crate::error::{RgbError, Result};
use crate::types::Colour;

/// A width x height grid of colours with bounds-checked access.
///
/// Pixels are stored row-major in one contiguous buffer. Operations that
/// change the dimensions (crop, rotate) build a complete new buffer and
/// swap it in together with the new size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<Colour>,
}

impl Image {
    /// Create an image with every pixel set to `fill`.
    pub fn new(width: i32, height: i32, fill: Colour) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(RgbError::InvalidDimensions {
                width: width as i64,
                height: height as i64,
            });
        }
        let (width, height) = (width as u32, height as u32);
        Ok(Self {
            width,
            height,
            pixels: vec![fill; width as usize * height as usize],
        })
    }

    /// Create a white image.
    pub fn blank(width: i32, height: i32) -> Result<Self> {
        Self::new(width, height, Colour::WHITE)
    }

    /// Build an image from row-major pixels.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Colour>) -> Result<Self> {
        if width == 0 || height == 0 || pixels.len() != width as usize * height as usize {
            return Err(RgbError::InvalidDimensions {
                width: width as i64,
                height: height as i64,
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the dimensions as (width, height).
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Row-major view of all pixels.
    pub fn pixels(&self) -> &[Colour] {
        &self.pixels
    }

    /// Check whether `(x, y)` lies inside the image.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        self.contains(x, y)
            .then(|| y as usize * self.width as usize + x as usize)
    }

    fn out_of_bounds(&self, x: i32, y: i32) -> RgbError {
        RgbError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        }
    }

    /// Get the colour at `(x, y)`.
    pub fn at(&self, x: i32, y: i32) -> Result<Colour> {
        self.index(x, y)
            .map(|i| self.pixels[i])
            .ok_or_else(|| self.out_of_bounds(x, y))
    }

    /// Get a mutable reference to the colour at `(x, y)`.
    pub fn at_mut(&mut self, x: i32, y: i32) -> Result<&mut Colour> {
        match self.index(x, y) {
            Some(i) => Ok(&mut self.pixels[i]),
            None => Err(self.out_of_bounds(x, y)),
        }
    }

    /// Set the colour at `(x, y)`.
    pub fn set(&mut self, x: i32, y: i32, colour: Colour) -> Result<()> {
        *self.at_mut(x, y)? = colour;
        Ok(())
    }

    /// Set a pixel, silently ignoring coordinates outside the image.
    pub(crate) fn plot(&mut self, x: i32, y: i32, colour: Colour) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = colour;
        }
    }

    /// Invert every pixel.
    pub fn invert(&mut self) {
        self.pixels.iter_mut().for_each(Colour::invert);
    }

    /// Convert every pixel to gray scale.
    pub fn to_gray_scale(&mut self) {
        self.pixels.iter_mut().for_each(Colour::to_gray_scale);
    }

    /// Fill the rectangle `[x, x + w) x [y, y + h)` with `colour`.
    ///
    /// The part of the rectangle outside the image is ignored.
    pub fn fill(&mut self, x: i32, y: i32, w: i32, h: i32, colour: Colour) {
        let x0 = x.max(0) as i64;
        let y0 = y.max(0) as i64;
        let x1 = (x as i64 + w as i64).min(self.width as i64);
        let y1 = (y as i64 + h as i64).min(self.height as i64);

        for j in y0..y1 {
            let row = j as usize * self.width as usize;
            for i in x0..x1 {
                self.pixels[row + i as usize] = colour;
            }
        }
    }

    /// Replace every pixel equal to `a` with `b`.
    pub fn replace(&mut self, a: Colour, b: Colour) {
        for pixel in self.pixels.iter_mut().filter(|p| **p == a) {
            *pixel = b;
        }
    }

    /// Copy `other` onto this image with its top-left corner at `(x, y)`.
    ///
    /// Pixels of `other` equal to `neutral` are skipped, as are pixels that
    /// would land outside this image.
    pub fn add(&mut self, other: &Image, neutral: Colour, x: i32, y: i32) {
        for j in 0..other.height as i32 {
            for i in 0..other.width as i32 {
                let colour = other.pixels[j as usize * other.width as usize + i as usize];
                if colour == neutral {
                    continue;
                }
                let (dx, dy) = (x as i64 + i as i64, y as i64 + j as i64);
                if dx >= 0 && dy >= 0 && dx < self.width as i64 && dy < self.height as i64 {
                    self.plot(dx as i32, dy as i32, colour);
                }
            }
        }
    }

    /// Reduce the image to the `w` x `h` rectangle starting at `(x, y)`.
    ///
    /// Parts of the rectangle outside the old image are white.
    pub fn crop(&mut self, x: i32, y: i32, w: i32, h: i32) -> Result<()> {
        let mut cropped = Image::blank(w, h)?;

        for j in 0..h {
            for i in 0..w {
                let (sx, sy) = (x as i64 + i as i64, y as i64 + j as i64);
                if sx < 0 || sy < 0 || sx >= self.width as i64 || sy >= self.height as i64 {
                    continue;
                }
                let colour = self.pixels[sy as usize * self.width as usize + sx as usize];
                cropped.plot(i, j, colour);
            }
        }

        *self = cropped;
        Ok(())
    }

    /// Rotate the image 90 degrees clockwise.
    pub fn rotate_right(&mut self) {
        let (w, h) = (self.width as usize, self.height as usize);
        let mut pixels = vec![Colour::WHITE; w * h];

        // (i, j) -> (h - 1 - j, i); the new row length is h.
        for j in 0..h {
            for i in 0..w {
                pixels[i * h + (h - 1 - j)] = self.pixels[j * w + i];
            }
        }

        *self = Image {
            width: h as u32,
            height: w as u32,
            pixels,
        };
    }

    /// Rotate the image 90 degrees counter-clockwise.
    pub fn rotate_left(&mut self) {
        let (w, h) = (self.width as usize, self.height as usize);
        let mut pixels = vec![Colour::WHITE; w * h];

        // (i, j) -> (j, w - 1 - i); the new row length is h.
        for j in 0..h {
            for i in 0..w {
                pixels[(w - 1 - i) * h + j] = self.pixels[j * w + i];
            }
        }

        *self = Image {
            width: h as u32,
            height: w as u32,
            pixels,
        };
    }

    /// Blend every pixel with the matching pixel of `other`.
    ///
    /// See [`Colour::mix`] for the meaning of `factor`.
    pub fn mix(&mut self, other: &Image, factor: i32) -> Result<()> {
        if self.size() != other.size() {
            return Err(RgbError::DimensionMismatch {
                expected_width: self.width,
                expected_height: self.height,
                width: other.width,
                height: other.height,
            });
        }

        for (pixel, o) in self.pixels.iter_mut().zip(&other.pixels) {
            pixel.mix(o, factor);
        }
        Ok(())
    }
}
