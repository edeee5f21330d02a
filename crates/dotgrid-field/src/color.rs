//! Dot colors.

use dotgrid_core::{Dot, DotGridConfig};
use ratatui::style::Color;

/// Hue of large dots, a soft green.
const LARGE_DOT_HUE: f32 = 153.0;

/// Color for `dot`, brighter the closer it is to its maximum size.
pub fn dot_color(dot: &Dot, config: &DotGridConfig) -> Color {
    let max_size = if dot.is_large() {
        config.large_dot_max_size
    } else {
        config.small_dot_max_size
    };
    let ratio = if max_size > 0.0 {
        (dot.size().0 / max_size).clamp(0.0, 1.0) as f32
    } else {
        1.0
    };

    if dot.is_large() {
        hsl_to_rgb(LARGE_DOT_HUE, 0.6, 0.35 + ratio * 0.25)
    } else {
        hsl_to_rgb(0.0, 0.0, 0.3 + ratio * 0.45)
    }
}

/// Convert HSL to RGB color.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> Color {
    if s == 0.0 {
        let v = (l * 255.0) as u8;
        return Color::Rgb(v, v, v);
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;

    let h = h / 360.0;

    let r = hue_to_rgb(p, q, h + 1.0 / 3.0);
    let g = hue_to_rgb(p, q, h);
    let b = hue_to_rgb(p, q, h - 1.0 / 3.0);

    Color::Rgb((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
}

fn hue_to_rgb(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsl_gray() {
        assert_eq!(hsl_to_rgb(0.0, 0.0, 0.5), Color::Rgb(127, 127, 127));
    }

    #[test]
    fn test_hsl_primary() {
        assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), Color::Rgb(255, 0, 0));
        assert_eq!(hsl_to_rgb(240.0, 1.0, 0.5), Color::Rgb(0, 0, 255));
    }

    #[test]
    fn test_small_dots_are_gray_and_scale_with_size() {
        let config = DotGridConfig::default();
        let dim = dot_color(&Dot::new((0.0, 0.0), 0.0, false, None), &config);
        let bright = dot_color(&Dot::new((0.0, 0.0), 0.7, false, None), &config);

        let Color::Rgb(d, dg, db) = dim else {
            panic!("expected rgb");
        };
        let Color::Rgb(b, _, _) = bright else {
            panic!("expected rgb");
        };
        assert_eq!((d, dg), (dg, db));
        assert!(b > d);
    }

    #[test]
    fn test_large_dots_are_green() {
        let config = DotGridConfig::default();
        let Color::Rgb(r, g, b) = dot_color(&Dot::new((0.0, 0.0), 3.0, true, None), &config)
        else {
            panic!("expected rgb");
        };
        assert!(g > r && g > b);
    }
}
