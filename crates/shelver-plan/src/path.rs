//! Destination directory planning.
//!
//! The nesting order is fixed as `(type, book, unit)`:
//! `<output_root>/<type>/book_<book>/unit_<unit>/`. A blank book or unit
//! renders as `0`, the same fill rule interior name levels use.

use std::path::{Path, PathBuf};

use shelver_model::{Hierarchy, MediaType};

/// Plan the destination directory for one record.
pub fn destination_dir(output_root: &Path, media: MediaType, hierarchy: &Hierarchy) -> PathBuf {
    output_root
        .join(media.label())
        .join(format!("book_{}", hierarchy.book.or_zero()))
        .join(format!("unit_{}", hierarchy.unit.or_zero()))
}
