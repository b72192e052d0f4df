//! Bundle decomposition and re-assembly
//!
//! Raw text → [`parse_bundle`] → [`resolve_label`] → [`emit`] → named buffers.

pub mod archive;
pub mod identity;
pub mod layout;
pub mod parser;

pub use archive::{build_archive, open_archive, ArchiveContents, ARCHIVE_FRIENDLY_NAME};
pub use identity::{resolve_label, OutputLabel, FALLBACK_LABEL};
pub use layout::{emit, Layout, LayoutPlan, Role};
pub use parser::{
    extract_blocks, parse_bundle, CertificateChain, KeyMaterial, LeafCertificate, ParsedBundle,
};

use crate::utils::BundleError;

/// Result of running the core on one bundle
#[derive(Debug)]
pub struct Sculpted {
    pub label: OutputLabel,
    pub plan: LayoutPlan,
}

/// Parse `raw`, resolve its label and build the plan for `layout`
pub fn sculpt(
    raw: &str,
    layout: Layout,
    passphrase: Option<&str>,
) -> Result<Sculpted, BundleError> {
    let bundle = parse_bundle(raw)?;
    let label = resolve_label(raw, bundle.leaf.common_name());
    let plan = emit(&bundle, layout, passphrase)?;
    Ok(Sculpted { label, plan })
}
