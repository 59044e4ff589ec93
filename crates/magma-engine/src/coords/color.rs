use crate::error::{Channel, EngineError, Result};

/// Straight-alpha sRGB color with 8-bit channels.
///
/// Invariant: every channel is in `0..=255`. The fallible constructor and
/// setters accept wider integers so that out-of-range input is reported as
/// [`EngineError::InvalidChannel`] rather than silently truncated.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgba(0, 0, 0, 255);
    pub const WHITE: Color = Color::rgba(255, 255, 255, 255);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    /// Infallible constructor from bytes.
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Validated constructor. Fails on the first channel above 255.
    pub fn new(red: u32, green: u32, blue: u32, alpha: u32) -> Result<Self> {
        Ok(Self {
            r: channel(Channel::Red, red)?,
            g: channel(Channel::Green, green)?,
            b: channel(Channel::Blue, blue)?,
            a: channel(Channel::Alpha, alpha)?,
        })
    }

    #[inline]
    pub const fn red(self) -> u8 {
        self.r
    }

    #[inline]
    pub const fn green(self) -> u8 {
        self.g
    }

    #[inline]
    pub const fn blue(self) -> u8 {
        self.b
    }

    #[inline]
    pub const fn alpha(self) -> u8 {
        self.a
    }

    /// On failure the color is left unchanged.
    pub fn set_red(&mut self, value: u32) -> Result<()> {
        self.r = channel(Channel::Red, value)?;
        Ok(())
    }

    pub fn set_green(&mut self, value: u32) -> Result<()> {
        self.g = channel(Channel::Green, value)?;
        Ok(())
    }

    pub fn set_blue(&mut self, value: u32) -> Result<()> {
        self.b = channel(Channel::Blue, value)?;
        Ok(())
    }

    pub fn set_alpha(&mut self, value: u32) -> Result<()> {
        self.a = channel(Channel::Alpha, value)?;
        Ok(())
    }

    /// Returns the channels as `[r, g, b, a]`.
    #[inline]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

fn channel(channel: Channel, value: u32) -> Result<u8> {
    u8::try_from(value).map_err(|_| {
        log::warn!("rejected {channel} channel value {value}");
        EngineError::InvalidChannel { channel, value }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn new_accepts_full_range() {
        for v in [0u32, 1, 127, 254, 255] {
            let c = Color::new(v, 255 - v, v, 255).unwrap();
            assert_eq!(c.to_array(), [v as u8, (255 - v) as u8, v as u8, 255]);
        }
    }

    #[test]
    fn new_rejects_each_channel_above_255() {
        let cases = [
            (Color::new(256, 0, 0, 0), Channel::Red),
            (Color::new(0, 300, 0, 0), Channel::Green),
            (Color::new(0, 0, 1000, 0), Channel::Blue),
            (Color::new(0, 0, 0, u32::MAX), Channel::Alpha),
        ];
        for (result, expected) in cases {
            match result {
                Err(EngineError::InvalidChannel { channel, .. }) => assert_eq!(channel, expected),
                other => panic!("expected InvalidChannel, got {other:?}"),
            }
        }
    }

    // ── mutation ──────────────────────────────────────────────────────────

    #[test]
    fn setters_store_valid_values() {
        let mut c = Color::BLACK;
        c.set_red(12).unwrap();
        c.set_green(34).unwrap();
        c.set_blue(56).unwrap();
        c.set_alpha(78).unwrap();
        assert_eq!((c.red(), c.green(), c.blue(), c.alpha()), (12, 34, 56, 78));
    }

    #[test]
    fn rejected_setter_leaves_color_unchanged() {
        let mut c = Color::rgba(1, 2, 3, 4);
        assert!(c.set_green(256).is_err());
        assert_eq!(c, Color::rgba(1, 2, 3, 4));
    }
}
