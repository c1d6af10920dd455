//! Validation pipeline for color and image sets.
//!
//! Checks run in a fixed order: name, definition count, per-definition
//! structural checks (fail-fast — later checks are meaningless on an
//! already-invalid model), then exhaustive pairwise conflict detection.
//! Validation failure prevents manifest emission entirely.

mod overlap;

pub use overlap::{detect_conflicts, Conflict};

use crate::builder::{ColorBuilder, ImageBuilder};
use crate::error::{Result, XcError};

/// Validate a color set.
pub fn validate_color_set(builder: &ColorBuilder) -> Result<()> {
    if builder.name().is_empty() {
        return Err(XcError::EmptyName);
    }

    let defs = builder.definitions();
    if defs.is_empty() {
        return Err(XcError::EmptyDefinitions {
            name: builder.name().to_string(),
        });
    }

    for (index, def) in defs.iter().enumerate() {
        let value = def.value().ok_or_else(|| XcError::PayloadMismatch {
            name: builder.name().to_string(),
            index,
            message: "no color components set".to_string(),
            help: Some("Set one of hex(), rgb(), rgb_float(), or white()".to_string()),
        })?;

        if let Err(message) = value.resolve(def.color_space.space()) {
            return Err(XcError::PayloadMismatch {
                name: builder.name().to_string(),
                index,
                message,
                help: None,
            });
        }

        let alpha = def.alpha_value();
        if !(0.0..=1.0).contains(&alpha) {
            return Err(XcError::PayloadMismatch {
                name: builder.name().to_string(),
                index,
                message: format!("alpha {} is outside [0, 1]", alpha),
                help: None,
            });
        }
    }

    let conflicts = detect_conflicts(defs, |a, b| a.overlaps(b));
    if !conflicts.is_empty() {
        return Err(XcError::Overlap {
            name: builder.name().to_string(),
            conflicts,
        });
    }

    Ok(())
}

/// Validate an image set.
pub fn validate_image_set(builder: &ImageBuilder) -> Result<()> {
    if builder.name().is_empty() {
        return Err(XcError::EmptyName);
    }

    let defs = builder.definitions();
    if defs.is_empty() {
        return Err(XcError::EmptyDefinitions {
            name: builder.name().to_string(),
        });
    }

    for (index, def) in defs.iter().enumerate() {
        let source = def.source().ok_or_else(|| XcError::PayloadMismatch {
            name: builder.name().to_string(),
            index,
            message: "no image source set".to_string(),
            help: Some("Set one of file(), url(), or data()".to_string()),
        })?;

        if source.file_name().is_none() {
            return Err(XcError::PayloadMismatch {
                name: builder.name().to_string(),
                index,
                message: format!("source '{}' has no usable file name", source.key()),
                help: None,
            });
        }
    }

    let conflicts = detect_conflicts(defs, |a, b| a.overlaps(b));
    if !conflicts.is_empty() {
        return Err(XcError::Overlap {
            name: builder.name().to_string(),
            conflicts,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{color, image};
    use crate::types::Scale;

    #[test]
    fn test_empty_name_fails() {
        let builder = color("", |b| {
            b.color(|d| {
                d.hex("#FFFFFF");
            });
        });
        assert!(matches!(builder.validate(), Err(XcError::EmptyName)));
    }

    #[test]
    fn test_zero_definitions_fails() {
        let builder = color("Brand", |_| {});
        assert!(matches!(
            builder.validate(),
            Err(XcError::EmptyDefinitions { .. })
        ));
    }

    #[test]
    fn test_single_definition_is_valid() {
        let builder = color("Brand", |b| {
            b.color(|d| {
                d.hex("#FFFFFF");
            });
        });
        assert!(builder.validate().is_ok());
    }

    #[test]
    fn test_light_and_dark_validate() {
        let builder = color("Brand", |b| {
            b.color(|d| {
                d.appearance.light();
                d.hex("#FFFFFF");
                d.alpha(1.0);
            });
            b.color(|d| {
                d.appearance.dark();
                d.hex("#000000");
                d.alpha(1.0);
            });
        });
        assert!(builder.validate().is_ok());
    }

    #[test]
    fn test_catch_all_definition_conflicts_with_both() {
        // Adding an any-appearance definition alongside light and dark
        // variants overlaps both: idiom, gamut, and color space stay at
        // their shared defaults, and "any" appearance intersects each
        // constrained one.
        let builder = color("Brand", |b| {
            b.color(|d| {
                d.appearance.light();
                d.hex("#FFFFFF");
            });
            b.color(|d| {
                d.appearance.dark();
                d.hex("#000000");
            });
            b.color(|d| {
                d.hex("#808080");
            });
        });

        match builder.validate() {
            Err(XcError::Overlap { name, conflicts }) => {
                assert_eq!(name, "Brand");
                assert_eq!(
                    conflicts,
                    vec![Conflict::new(0, 2), Conflict::new(1, 2)]
                );
            }
            other => panic!("expected Overlap, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_grayscale_with_rgb_fails_structurally() {
        // Structurally invalid even though its coordinates are unique.
        let builder = color("Gray", |b| {
            b.color(|d| {
                d.color_space.grayscale();
                d.rgb(1, 2, 3);
            });
        });

        match builder.validate() {
            Err(XcError::PayloadMismatch { index, message, .. }) => {
                assert_eq!(index, 0);
                assert!(message.contains("grayscale"));
            }
            other => panic!("expected PayloadMismatch, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_multibyte_hex_fails_structurally() {
        // Malformed hex surfaces from validation, never from the setter
        // and never as a panic.
        let builder = color("Brand", |b| {
            b.color(|d| {
                d.hex("#€€");
            });
        });

        match builder.validate() {
            Err(XcError::PayloadMismatch { index, message, .. }) => {
                assert_eq!(index, 0);
                assert!(message.contains("invalid hex color"));
            }
            other => panic!("expected PayloadMismatch, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_missing_components_fails() {
        let builder = color("Brand", |b| {
            b.color(|_| {});
        });
        assert!(matches!(
            builder.validate(),
            Err(XcError::PayloadMismatch { .. })
        ));
    }

    #[test]
    fn test_alpha_out_of_range_fails() {
        let builder = color("Brand", |b| {
            b.color(|d| {
                d.hex("#FFFFFF").alpha(1.5);
            });
        });
        assert!(matches!(
            builder.validate(),
            Err(XcError::PayloadMismatch { .. })
        ));
    }

    #[test]
    fn test_structural_check_is_fail_fast() {
        // The second definition is also invalid, but only the first is
        // reported.
        let builder = color("Brand", |b| {
            b.color(|_| {});
            b.color(|d| {
                d.hex("#GGGGGG");
            });
        });

        match builder.validate() {
            Err(XcError::PayloadMismatch { index, .. }) => assert_eq!(index, 0),
            other => panic!("expected PayloadMismatch, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_image_set_missing_source_fails() {
        let builder = image("Logo", |b| {
            b.image(|d| {
                d.scale(Scale::X2);
            });
        });
        assert!(matches!(
            builder.validate(),
            Err(XcError::PayloadMismatch { .. })
        ));
    }

    #[test]
    fn test_image_set_scale_variants_validate() {
        let builder = image("Logo", |b| {
            b.image(|d| {
                d.file("logo.png").scale(Scale::X1);
            });
            b.image(|d| {
                d.file("logo@2x.png").scale(Scale::X2);
            });
            b.image(|d| {
                d.file("logo@3x.png").scale(Scale::X3);
            });
        });
        assert!(builder.validate().is_ok());
    }

    #[test]
    fn test_image_set_duplicate_scale_conflicts() {
        let builder = image("Logo", |b| {
            b.image(|d| {
                d.file("a.png").scale(Scale::X2);
            });
            b.image(|d| {
                d.file("b.png").scale(Scale::X2);
            });
        });
        assert!(matches!(
            builder.validate(),
            Err(XcError::Overlap { .. })
        ));
    }
}
