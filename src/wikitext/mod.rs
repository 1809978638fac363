//! Wikitext module root
//!
//! Text-only helpers that turn raw wikitext into something readable. Nothing in
//! here touches the network; `page` glues these steps together after a fetch.

pub mod markup;
pub mod media;
pub mod redirect;
pub mod references;
pub mod sections;
pub mod templates;

// Re-export commonly used items for ergonomic access.
pub use markup::clean_markup;
pub use media::{ImageRef, extract_gallery_images, extract_images};
pub use redirect::check_redirect;
pub use references::extract_all_references;
pub use sections::{Section, extract_first_paragraph, split_sections};
pub use templates::{remove_template_residue, remove_templates};
