//! Manifest descriptor emission.
//!
//! Transforms a validated builder into the `Contents.json` text the
//! platform build tooling consumes. Emission is deterministic: entries
//! come out in definition insertion order, expanded idiom → gamut →
//! appearance, so an unmodified builder always serializes to identical
//! bytes.

use serde::Serialize;

use crate::builder::{ColorBuilder, ImageBuilder};
use crate::error::{Result, XcError};
use crate::types::{Components, DeviceSelection, Gamut, Idiom, Subtype};

/// Fixed metadata written into every descriptor.
///
/// Explicit configuration rather than package-level state; the defaults
/// match what the platform tooling writes itself.
#[derive(Debug, Clone)]
pub struct ManifestOptions {
    /// `info.author` value.
    pub author: String,
    /// `info.version` value.
    pub version: u32,
    /// `properties.localizable` flag.
    pub localizable: bool,
}

impl Default for ManifestOptions {
    fn default() -> Self {
        Self {
            author: "xcode".to_string(),
            version: 1,
            localizable: true,
        }
    }
}

/// Serialize a validated color set to descriptor text.
///
/// Pure given a validated builder; an unvalidated payload surfaces as a
/// build error rather than a panic.
pub fn emit_colors(builder: &ColorBuilder, options: &ManifestOptions) -> Result<String> {
    let mut colors = Vec::new();

    for def in builder.definitions() {
        let components = match def.value() {
            Some(value) => value
                .resolve(def.color_space.space())
                .map_err(|message| XcError::Build {
                    message: format!("Emitting unvalidated definition: {}", message),
                    help: Some("Call validate() before emitting".to_string()),
                })?,
            None => {
                return Err(XcError::Build {
                    message: "Emitting a definition with no color components".to_string(),
                    help: Some("Call validate() before emitting".to_string()),
                })
            }
        };

        let color = ColorJson {
            color_space: def.color_space.space().as_str(),
            components: ComponentsJson::new(components, def.alpha_value()),
        };

        for (idiom, subtype) in device_entries(&def.devices) {
            for gamut in gamut_entries(def.gamut.gamuts()) {
                for combo in def.appearance.combinations() {
                    colors.push(ColorEntry {
                        idiom: idiom.as_str(),
                        subtype: subtype.map(Subtype::as_str),
                        display_gamut: gamut.map(Gamut::as_str),
                        appearances: combo
                            .iter()
                            .map(|pair| AppearanceJson {
                                appearance: pair.appearance,
                                value: pair.value,
                            })
                            .collect(),
                        color: color.clone(),
                    });
                }
            }
        }
    }

    let set = ColorSet {
        colors,
        info: Info::new(options),
        properties: Properties {
            localizable: options.localizable,
        },
    };

    to_pretty_json(&set)
}

/// Serialize a validated image set to descriptor text.
pub fn emit_images(builder: &ImageBuilder, options: &ManifestOptions) -> Result<String> {
    let mut images = Vec::new();

    for def in builder.definitions() {
        let filename = def
            .source()
            .and_then(|source| source.file_name())
            .ok_or_else(|| XcError::Build {
                message: "Emitting a definition with no resolvable source".to_string(),
                help: Some("Call validate() before emitting".to_string()),
            })?;

        for (idiom, subtype) in device_entries(&def.devices) {
            for gamut in gamut_entries(def.gamut.gamuts()) {
                for combo in def.appearance.combinations() {
                    images.push(ImageEntry {
                        filename: filename.clone(),
                        idiom: idiom.as_str(),
                        subtype: subtype.map(Subtype::as_str),
                        display_gamut: gamut.map(Gamut::as_str),
                        scale: def.scale_value().map(|s| s.as_str()),
                        appearances: combo
                            .iter()
                            .map(|pair| AppearanceJson {
                                appearance: pair.appearance,
                                value: pair.value,
                            })
                            .collect(),
                    });
                }
            }
        }
    }

    let set = ImageSet {
        images,
        info: Info::new(options),
        properties: Properties {
            localizable: options.localizable,
        },
    };

    to_pretty_json(&set)
}

/// Expand a device selection into `(idiom, subtype)` entries.
///
/// Each selected idiom yields one entry; an iPad selection carrying the
/// mac-catalyst subtype yields an additional subtyped entry.
fn device_entries(devices: &DeviceSelection) -> Vec<(Idiom, Option<Subtype>)> {
    let mut entries = Vec::new();
    for idiom in devices.idioms() {
        entries.push((idiom, None));
        if idiom == Idiom::IPad {
            for subtype in devices.subtypes() {
                entries.push((idiom, Some(*subtype)));
            }
        }
    }
    entries
}

/// Expand a gamut claim: wildcard emits a single entry with no
/// `display-gamut` field, exact claims one entry per gamut.
fn gamut_entries(gamuts: Option<&[Gamut]>) -> Vec<Option<Gamut>> {
    match gamuts {
        None => vec![None],
        Some(values) => values.iter().copied().map(Some).collect(),
    }
}

fn to_pretty_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| XcError::Build {
        message: format!("Failed to serialize manifest: {}", e),
        help: None,
    })
}

// --- Descriptor serialization types ---

#[derive(Serialize)]
struct ColorSet {
    colors: Vec<ColorEntry>,
    info: Info,
    properties: Properties,
}

#[derive(Serialize)]
struct ImageSet {
    images: Vec<ImageEntry>,
    info: Info,
    properties: Properties,
}

#[derive(Serialize)]
struct Info {
    author: String,
    version: u32,
}

impl Info {
    fn new(options: &ManifestOptions) -> Self {
        Self {
            author: options.author.clone(),
            version: options.version,
        }
    }
}

#[derive(Serialize)]
struct Properties {
    localizable: bool,
}

#[derive(Serialize)]
struct ColorEntry {
    idiom: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    subtype: Option<&'static str>,
    #[serde(rename = "display-gamut", skip_serializing_if = "Option::is_none")]
    display_gamut: Option<&'static str>,
    appearances: Vec<AppearanceJson>,
    color: ColorJson,
}

#[derive(Serialize)]
struct ImageEntry {
    filename: String,
    idiom: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    subtype: Option<&'static str>,
    #[serde(rename = "display-gamut", skip_serializing_if = "Option::is_none")]
    display_gamut: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    scale: Option<&'static str>,
    appearances: Vec<AppearanceJson>,
}

#[derive(Serialize)]
struct AppearanceJson {
    appearance: &'static str,
    value: &'static str,
}

#[derive(Serialize, Clone)]
struct ColorJson {
    #[serde(rename = "color-space")]
    color_space: &'static str,
    components: ComponentsJson,
}

#[derive(Serialize, Clone)]
struct ComponentsJson {
    #[serde(skip_serializing_if = "Option::is_none")]
    red: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    green: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    blue: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    white: Option<f64>,
    alpha: f64,
}

impl ComponentsJson {
    fn new(components: Components, alpha: f64) -> Self {
        match components {
            Components::Rgb { red, green, blue } => Self {
                red: Some(red),
                green: Some(green),
                blue: Some(blue),
                white: None,
                alpha,
            },
            Components::White(white) => Self {
                red: None,
                green: None,
                blue: None,
                white: Some(white),
                alpha,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{color, image};
    use crate::types::Scale;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_single_definition_contents() {
        let builder = color("Brand", |b| {
            b.color(|d| {
                d.hex("#FFFFFF");
            });
        });

        let contents = builder.build().unwrap();
        let expected = r#"{
  "colors": [
    {
      "idiom": "universal",
      "appearances": [],
      "color": {
        "color-space": "srgb",
        "components": {
          "red": 1.0,
          "green": 1.0,
          "blue": 1.0,
          "alpha": 1.0
        }
      }
    }
  ],
  "info": {
    "author": "xcode",
    "version": 1
  },
  "properties": {
    "localizable": true
  }
}"#;
        assert_eq!(contents, expected);
    }

    #[test]
    fn test_emission_is_deterministic() {
        let builder = color("Brand", |b| {
            b.color(|d| {
                d.devices.iphone().ipad().catalyst();
                d.gamut.srgb_and_display_p3();
                d.appearance.light().dark().high_contrast();
                d.rgb(38, 45, 68);
                d.alpha(0.4);
            });
        });

        let first = builder.build().unwrap();
        let second = builder.build().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_light_and_dark_emit_distinct_appearances() {
        let builder = color("Brand", |b| {
            b.color(|d| {
                d.appearance.light();
                d.hex("#FFFFFF");
            });
            b.color(|d| {
                d.appearance.dark();
                d.hex("#000000");
            });
        });

        let contents = builder.build().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
        let colors = parsed["colors"].as_array().unwrap();
        assert_eq!(colors.len(), 2);
        assert_eq!(colors[0]["appearances"][0]["value"], "light");
        assert_eq!(colors[1]["appearances"][0]["value"], "dark");
        assert_ne!(colors[0]["appearances"], colors[1]["appearances"]);
    }

    #[test]
    fn test_catalyst_emits_subtyped_entry() {
        let builder = color("Brand", |b| {
            b.color(|d| {
                d.devices.catalyst();
                d.hex("#FFFFFF");
            });
        });

        let contents = builder.build().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
        let colors = parsed["colors"].as_array().unwrap();
        assert_eq!(colors.len(), 2);
        assert_eq!(colors[0]["idiom"], "ipad");
        assert!(colors[0].get("subtype").is_none());
        assert_eq!(colors[1]["idiom"], "ipad");
        assert_eq!(colors[1]["subtype"], "mac-catalyst");
    }

    #[test]
    fn test_exact_gamuts_expand() {
        let builder = color("Brand", |b| {
            b.color(|d| {
                d.gamut.srgb_and_display_p3();
                d.hex("#FFFFFF");
            });
        });

        let contents = builder.build().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
        let colors = parsed["colors"].as_array().unwrap();
        assert_eq!(colors.len(), 2);
        assert_eq!(colors[0]["display-gamut"], "sRGB");
        assert_eq!(colors[1]["display-gamut"], "display-P3");
    }

    #[test]
    fn test_grayscale_components() {
        let builder = color("Gray", |b| {
            b.color(|d| {
                d.color_space.grayscale();
                d.white(0.5);
                d.alpha(0.75);
            });
        });

        let contents = builder.build().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
        let components = &parsed["colors"][0]["color"]["components"];
        assert_eq!(components["white"], 0.5);
        assert_eq!(components["alpha"], 0.75);
        assert!(components.get("red").is_none());
        assert_eq!(parsed["colors"][0]["color"]["color-space"], "gray-gamma-22");
    }

    #[test]
    fn test_custom_options() {
        let builder = color("Brand", |b| {
            b.color(|d| {
                d.hex("#FFFFFF");
            });
        });

        let options = ManifestOptions {
            author: "generator".to_string(),
            version: 2,
            localizable: false,
        };
        let contents = builder.build_with(&options).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed["info"]["author"], "generator");
        assert_eq!(parsed["info"]["version"], 2);
        assert_eq!(parsed["properties"]["localizable"], false);
    }

    #[test]
    fn test_image_set_entries() {
        let builder = image("Logo", |b| {
            b.image(|d| {
                d.file("logo.png").scale(Scale::X1);
            });
            b.image(|d| {
                d.appearance.dark();
                d.file("logo-dark.png").scale(Scale::X1);
            });
        });

        let contents = builder.build().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
        let images = parsed["images"].as_array().unwrap();
        assert_eq!(images.len(), 2);
        assert_eq!(images[0]["filename"], "logo.png");
        assert_eq!(images[0]["scale"], "1x");
        assert_eq!(images[1]["filename"], "logo-dark.png");
        assert_eq!(images[1]["appearances"][0]["value"], "dark");
    }

    #[test]
    fn test_invalid_set_emits_nothing() {
        let builder = color("Brand", |b| {
            b.color(|d| {
                d.appearance.light();
                d.hex("#FFFFFF");
            });
            b.color(|d| {
                d.hex("#808080");
            });
        });

        assert!(builder.build().is_err());
    }
}
