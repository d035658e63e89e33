//! Project image layout selection
//!
//! Pure decision function that turns a project's image list and its position
//! in the project list into a `LayoutPlan` the renderer draws from.

use crate::error::{PortfolioError, Result};

/// Maximum number of thumbnails shown under the primary image of a gallery.
/// Images past the fifth are not displayed.
pub const MAX_THUMBNAILS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutVariant {
    /// One image filling the image column
    Single,
    /// Two equal images side by side, in source order
    Pair,
    /// Large primary image over a row of thumbnails
    Gallery,
}

/// Which side of the project card the image column sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

impl Alignment {
    /// Even indices sit left, odd indices right (zig-zag down the list)
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 1 {
            Alignment::Right
        } else {
            Alignment::Left
        }
    }
}

/// How one project's images are arranged for a single render pass.
///
/// Borrows from the project's image list; build a fresh one per render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutPlan<'a, T> {
    pub variant: LayoutVariant,
    /// First image for `Single` and `Gallery`. `None` for `Pair`, which has no
    /// designated primary.
    pub primary_image: Option<&'a T>,
    /// Gallery thumbnails (at most `MAX_THUMBNAILS`), or both images of a `Pair`
    pub secondary_images: &'a [T],
    pub alignment: Alignment,
}

impl<'a, T> LayoutPlan<'a, T> {
    /// Every image the plan displays, in display order
    pub fn displayed_images(&self) -> impl Iterator<Item = &'a T> + '_ {
        self.primary_image
            .into_iter()
            .chain(self.secondary_images.iter())
    }
}

/// Select the image layout for a project
///
/// # Arguments
/// * `images` - The project's images in source order (must not be empty)
/// * `index` - Zero-based position of the project in the project list
///
/// # Returns
/// * `Ok(LayoutPlan)` - `Single` for one image, `Pair` for two, `Gallery` for three or more
/// * `Err(PortfolioError::InvalidInput)` - If `images` is empty
///
/// # Examples
/// ```
/// use folio::logic::layout::{select_layout, Alignment, LayoutVariant};
///
/// let images = ["a", "b", "c", "d", "e", "f"];
/// let plan = select_layout(&images, 2).unwrap();
/// assert_eq!(plan.variant, LayoutVariant::Gallery);
/// assert_eq!(plan.primary_image, Some(&"a"));
/// assert_eq!(plan.secondary_images, &["b", "c", "d", "e"]);
/// assert_eq!(plan.alignment, Alignment::Left);
///
/// assert!(select_layout::<&str>(&[], 0).is_err());
/// ```
pub fn select_layout<T>(images: &[T], index: usize) -> Result<LayoutPlan<'_, T>> {
    let alignment = Alignment::for_index(index);

    let (variant, primary_image, secondary_images) = match images {
        [] => {
            return Err(PortfolioError::InvalidInput(format!(
                "project at index {} has no images to lay out",
                index
            )))
        }
        [only] => (LayoutVariant::Single, Some(only), &images[..0]),
        [_, _] => (LayoutVariant::Pair, None, images),
        [first, rest @ ..] => {
            let shown = rest.len().min(MAX_THUMBNAILS);
            (LayoutVariant::Gallery, Some(first), &rest[..shown])
        }
    };

    Ok(LayoutPlan {
        variant,
        primary_image,
        secondary_images,
        alignment,
    })
}
