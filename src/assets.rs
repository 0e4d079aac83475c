//! Per-entity image handles and fallback loading.

use crate::entity::{Entity, Pair};
use crate::geom::Size;
use crate::surface::RasterHandle;

/// The four images a composition draws, borrowed from the caller.
///
/// Any of them may be absent; the engine skips what is missing.
#[derive(Debug)]
pub struct Assets<'a, I> {
    pub backgrounds: Pair<Option<&'a I>>,
    pub logos: Pair<Option<&'a I>>,
}

// Manual impls: derives would require `I: Clone`.
impl<I> Clone for Assets<'_, I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I> Copy for Assets<'_, I> {}

impl<I> Default for Assets<'_, I> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<'a, I> Assets<'a, I> {
    /// No images at all.
    pub const fn empty() -> Self {
        Self {
            backgrounds: Pair::new(None, None),
            logos: Pair::new(None, None),
        }
    }

    /// Set one entity's background.
    pub fn background(mut self, entity: Entity, image: &'a I) -> Self {
        self.backgrounds[entity] = Some(image);
        self
    }

    /// Set one entity's logo.
    pub fn logo(mut self, entity: Entity, image: &'a I) -> Self {
        self.logos[entity] = Some(image);
        self
    }

    /// Whether all four images are present.
    ///
    /// Hosts typically only auto-render once this holds; rendering partial
    /// assets is still allowed.
    pub fn is_complete(&self) -> bool {
        let present = |e: Entity| self.backgrounds[e].is_some() && self.logos[e].is_some();
        Entity::ALL.into_iter().all(present)
    }
}

impl<I: RasterHandle> Assets<'_, I> {
    /// Pixel sizes of whatever is present.
    pub fn sizes(&self) -> AssetSizes {
        AssetSizes {
            backgrounds: self.backgrounds.map(|i| i.map(|img| img.size())),
            logos: self.logos.map(|i| i.map(|img| img.size())),
        }
    }
}

/// Image sizes only; enough to plan a composition without pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct AssetSizes {
    pub backgrounds: Pair<Option<Size>>,
    pub logos: Pair<Option<Size>>,
}

/// Try `candidates` in order and return the first that yields a value.
///
/// Candidates are lazy, so later ones are never evaluated once one succeeds.
/// This is how hosts chain asset sources (a preferred URL, then fallbacks).
pub fn first_available<T, F>(candidates: impl IntoIterator<Item = F>) -> Option<T>
where
    F: FnOnce() -> Option<T>,
{
    for (index, candidate) in candidates.into_iter().enumerate() {
        if let Some(found) = candidate() {
            log::debug!("asset candidate {index} succeeded");
            return Some(found);
        }
        log::debug!("asset candidate {index} unavailable");
    }
    None
}
