//! Per-angle RGB gradient built from phase-shifted raised cosines.

use super::angle::AngleTable;

/// 8-bit RGB colour
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Normalized `[0, 1]` channels for the GPU
    pub fn to_f32_array(self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }
}

/// One colour per base angle: red, green and blue each follow the raised
/// cosine, a third of a turn apart, giving a cyclic hue sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorTable {
    colors: Vec<Color>,
}

impl ColorTable {
    pub fn new(angles: &AngleTable) -> Self {
        let resolution = angles.resolution();
        let channel = |position: f32| (255.0 * angles.raised_cosine(position.fract())) as u8;

        let colors = (0..resolution)
            .map(|i| {
                let pos = i as f32 / resolution as f32;
                Color {
                    r: channel(pos),
                    g: channel(pos + 1.0 / 3.0),
                    b: channel(pos + 2.0 / 3.0),
                }
            })
            .collect();

        Self { colors }
    }

    /// Colour for a base angle in `[0, resolution)`
    pub fn get(&self, base_angle: usize) -> Color {
        self.colors[base_angle]
    }

    pub fn as_slice(&self) -> &[Color] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_color_per_angle() {
        let angles = AngleTable::new(1024);
        let colors = ColorTable::new(&angles);
        assert_eq!(colors.len(), 1024);
    }

    #[test]
    fn test_channels_peak_a_third_apart() {
        let angles = AngleTable::new(1024);
        let colors = ColorTable::new(&angles);

        // Red starts dark and peaks half way round
        assert_eq!(colors.get(0).r, 0);
        assert_eq!(colors.get(512).r, 255);

        // Green and blue lead red by a third and two thirds of a turn
        let peak = |channel: fn(Color) -> u8| {
            (0..1024)
                .max_by_key(|&i| channel(colors.get(i)))
                .unwrap_or_default()
        };
        let r_peak = peak(|c| c.r) as i32;
        let g_peak = peak(|c| c.g) as i32;
        let b_peak = peak(|c| c.b) as i32;
        assert!(((r_peak - g_peak).rem_euclid(1024) - 341).abs() <= 2, "g peak {}", g_peak);
        assert!(((r_peak - b_peak).rem_euclid(1024) - 683).abs() <= 2, "b peak {}", b_peak);
    }

    #[test]
    fn test_to_f32_array() {
        let color = Color {
            r: 255,
            g: 0,
            b: 51,
        };
        assert_eq!(color.to_f32_array(), [1.0, 0.0, 0.2]);
    }

    #[test]
    fn test_rebuild_is_identical() {
        let angles = AngleTable::new(2048);
        assert_eq!(ColorTable::new(&angles), ColorTable::new(&angles));
    }
}
