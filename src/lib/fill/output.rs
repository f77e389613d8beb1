//! Defines the output of filling an image macro.

use std::ops::Deref;

use image::ImageFormat;


/// Encoded image resulting from filling an image macro.
#[derive(Clone, Debug)]
#[must_use = "unused fill output which must be used"]
pub struct FillOutput {
    format: ImageFormat,
    bytes: Vec<u8>,
}

impl FillOutput {
    #[inline]
    pub(super) fn new(format: ImageFormat, bytes: Vec<u8>) -> Self {
        FillOutput{format, bytes}
    }
}

impl FillOutput {
    /// Image format of the output.
    #[inline]
    pub fn format(&self) -> ImageFormat {
        self.format
    }

    /// Raw bytes of the output.
    ///
    /// See `FillOutput::format` for how to interpret it.
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes[..]
    }

    /// Convert the output into a vector of bytes.
    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl Deref for FillOutput {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        self.bytes()
    }
}

impl From<FillOutput> for Vec<u8> {
    fn from(output: FillOutput) -> Self {
        output.into_bytes()
    }
}
