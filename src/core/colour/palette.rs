use crate::core::colour::colour_scheme::ColourScheme;
use crate::core::data::colour::Colour;
use std::f64::consts::PI;

#[inline]
fn channel(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

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

/// HSL to RGB with all three inputs in `[0, 1]`.
fn hsl_to_colour(hue: f64, saturation: f64, lightness: f64) -> Colour {
    if saturation == 0.0 {
        let v = channel(lightness * 255.0);
        return Colour::opaque(v, v, v);
    }

    let q = if lightness < 0.5 {
        lightness * (1.0 + saturation)
    } else {
        lightness + saturation - lightness * saturation
    };
    let p = 2.0 * lightness - q;

    Colour::opaque(
        channel(hue_to_rgb(p, q, hue + 1.0 / 3.0) * 255.0),
        channel(hue_to_rgb(p, q, hue) * 255.0),
        channel(hue_to_rgb(p, q, hue - 1.0 / 3.0) * 255.0),
    )
}

/// Colour for an escape count under `scheme`.
///
/// Counts at or above `max_iterations` are interior points and always
/// render opaque black. Everything else is shaded by
/// `t = count / max_iterations`.
#[must_use]
pub fn colorize(count: u32, max_iterations: u32, scheme: ColourScheme) -> Colour {
    if count >= max_iterations {
        return Colour::BLACK;
    }

    let t = f64::from(count) / f64::from(max_iterations);
    let s = 1.0 - t;

    match scheme {
        ColourScheme::Grayscale => {
            let v = channel(t * 255.0);
            Colour::opaque(v, v, v)
        }
        ColourScheme::Classic => Colour::opaque(
            channel(9.0 * s * t * t * t * 255.0),
            channel(15.0 * s * s * t * t * 255.0),
            channel(8.5 * s * s * s * t * 255.0),
        ),
        ColourScheme::Fiery => Colour::opaque(
            channel(255.0 * t),
            channel(128.0 * t),
            channel(64.0 * s),
        ),
        ColourScheme::Oceanic => Colour::opaque(
            channel(64.0 * s),
            channel(128.0 * t),
            channel(255.0 * t),
        ),
        ColourScheme::Forest => Colour::opaque(
            channel(64.0 * s),
            channel(192.0 * t),
            channel(64.0 * t),
        ),
        ColourScheme::Psychedelic => Colour::opaque(
            channel(255.0 * (PI * t).sin().abs()),
            channel(255.0 * (PI * t + PI / 3.0).sin().abs()),
            channel(255.0 * (PI * t + 2.0 * PI / 3.0).sin().abs()),
        ),
        ColourScheme::Rainbow => hsl_to_colour(t, 1.0, 0.5),
        ColourScheme::Fire => Colour::opaque(channel(255.0 * t), channel(100.0 * t), 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interior_is_opaque_black_for_every_scheme() {
        for &scheme in ColourScheme::ALL {
            assert_eq!(colorize(100, 100, scheme), Colour::BLACK, "{}", scheme);
            assert_eq!(colorize(1, 1, scheme), Colour::BLACK, "{}", scheme);
        }
    }

    #[test]
    fn test_count_above_cap_is_treated_as_interior() {
        assert_eq!(colorize(7, 5, ColourScheme::Rainbow), Colour::BLACK);
    }

    #[test]
    fn test_alpha_is_always_opaque() {
        for &scheme in ColourScheme::ALL {
            for count in 0..=50 {
                assert_eq!(colorize(count, 50, scheme).a, 255);
            }
        }
    }

    #[test]
    fn test_grayscale_midpoint() {
        assert_eq!(colorize(50, 100, ColourScheme::Grayscale), Colour::opaque(128, 128, 128));
        assert_eq!(colorize(0, 100, ColourScheme::Grayscale), Colour::opaque(0, 0, 0));
    }

    #[test]
    fn test_classic_polynomial() {
        assert_eq!(colorize(50, 100, ColourScheme::Classic), Colour::opaque(143, 239, 135));
        assert_eq!(colorize(25, 100, ColourScheme::Classic), Colour::opaque(27, 134, 229));
        assert_eq!(colorize(0, 100, ColourScheme::Classic), Colour::opaque(0, 0, 0));
    }

    #[test]
    fn test_linear_schemes_at_midpoint() {
        assert_eq!(colorize(50, 100, ColourScheme::Fiery), Colour::opaque(128, 64, 32));
        assert_eq!(colorize(50, 100, ColourScheme::Oceanic), Colour::opaque(32, 64, 128));
        assert_eq!(colorize(50, 100, ColourScheme::Forest), Colour::opaque(32, 96, 32));
        assert_eq!(colorize(50, 100, ColourScheme::Fire), Colour::opaque(128, 50, 0));
    }

    #[test]
    fn test_psychedelic_phases() {
        assert_eq!(colorize(0, 100, ColourScheme::Psychedelic), Colour::opaque(0, 221, 221));
        assert_eq!(colorize(50, 100, ColourScheme::Psychedelic).r, 255);
    }

    #[test]
    fn test_rainbow_hue_wheel() {
        assert_eq!(colorize(0, 10, ColourScheme::Rainbow), Colour::opaque(255, 0, 0));
        assert_eq!(colorize(1, 6, ColourScheme::Rainbow), Colour::opaque(255, 255, 0));
        assert_eq!(colorize(1, 3, ColourScheme::Rainbow), Colour::opaque(0, 255, 0));
    }

    #[test]
    fn test_channel_rounds_half_away_from_zero_and_clamps() {
        assert_eq!(channel(127.5), 128);
        assert_eq!(channel(-3.0), 0);
        assert_eq!(channel(300.0), 255);
    }
}
