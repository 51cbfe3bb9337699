//! Diagram section: reaction scheme or product structures.

use eln_common::{presence, Reaction, Sample};
use eln_config::{DiagramMode, ImagePaths, ReportConfig};
use serde::{Deserialize, Serialize};

/// Reference to a diagram image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    /// Stored image file name.
    pub file: String,
    /// URL path under which the image is served.
    pub path: String,
    /// Position of the product in the reaction's product list; `None` for
    /// the reaction scheme.
    pub product_index: Option<usize>,
}

/// Diagram section content.
///
/// An empty image list is a valid body: the reference may simply not exist
/// yet, and the renderer decides how to show that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagramSection {
    /// Which kind of diagram was assembled.
    pub mode: DiagramMode,
    /// Images in display order.
    pub images: Vec<ImageRef>,
}

impl DiagramSection {
    /// Assemble the diagram for a reaction according to the config.
    pub fn build(reaction: &Reaction, config: &ReportConfig) -> Self {
        match config.diagram_mode() {
            DiagramMode::Scheme => {
                Self::scheme(reaction.reaction_svg_file.as_deref(), &config.image_paths)
            }
            DiagramMode::ProductsOnly => Self::products_only(&reaction.products, &config.image_paths),
        }
    }

    /// The single reaction scheme image.
    pub fn scheme(svg_file: Option<&str>, paths: &ImagePaths) -> Self {
        let images = svg_file
            .filter(|f| presence::text(Some(*f)))
            .map(|file| ImageRef {
                file: file.to_string(),
                path: paths.reaction_image(file),
                product_index: None,
            })
            .into_iter()
            .collect();
        Self {
            mode: DiagramMode::Scheme,
            images,
        }
    }

    /// One structure image per product, in product order.
    ///
    /// Products whose molecule has no image file contribute nothing; the
    /// remaining images keep their product index.
    pub fn products_only(products: &[Sample], paths: &ImagePaths) -> Self {
        let images = products
            .iter()
            .enumerate()
            .filter_map(|(idx, sample)| {
                sample
                    .molecule
                    .molecule_svg_file
                    .as_deref()
                    .filter(|file| presence::text(Some(*file)))
                    .map(|file| ImageRef {
                        file: file.to_string(),
                        path: paths.molecule_image(file),
                        product_index: Some(idx),
                    })
            })
            .collect();
        Self {
            mode: DiagramMode::ProductsOnly,
            images,
        }
    }

    /// Whether no image could be referenced.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}
