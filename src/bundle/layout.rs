//! Output layouts
//!
//! Turns a parsed bundle into a [`LayoutPlan`]: named byte buffers, one per
//! output role. Pure transformation; nothing here touches the filesystem.

use crate::bundle::archive;
use crate::bundle::parser::ParsedBundle;
use crate::utils::BundleError;
use serde::Deserialize;

/// Supported on-disk layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    /// Leaf followed by the rest of the chain, plus key
    FullChain,
    /// Leaf, chain and key as separate files
    LeafPlusChain,
    /// Leaf and key only
    LeafOnly,
    /// Leaf, intermediate, root and key as separate files
    FullSplit,
    /// Password-protected PKCS#12 archive
    Archive,
}

impl Layout {
    /// Menu order
    pub const ALL: [Layout; 5] = [
        Layout::FullChain,
        Layout::LeafPlusChain,
        Layout::LeafOnly,
        Layout::FullSplit,
        Layout::Archive,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Layout::FullChain => "full-chain",
            Layout::LeafPlusChain => "leaf-plus-chain",
            Layout::LeafOnly => "leaf-only",
            Layout::FullSplit => "full-split",
            Layout::Archive => "archive",
        }
    }

    /// Menu description with the ecosystem that usually wants this layout
    pub fn description(&self) -> &'static str {
        match self {
            Layout::FullChain => "FullChain (Leaf + Chain) and Key [modern bundle]",
            Layout::LeafPlusChain => "Leaf, Chain (Inter + Root), and Key [Linux/Nginx]",
            Layout::LeafOnly => "Leaf and Key only [minimal]",
            Layout::FullSplit => "Full split: Leaf, Inter, Root and Key [debug/manual]",
            Layout::Archive => "PKCS#12 archive (.p12) [Windows/Java]",
        }
    }
}

impl std::fmt::Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Logical role of one output buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Fullchain,
    Leaf,
    Chain,
    Intermediate,
    Root,
    Key,
    Archive,
}

impl Role {
    pub fn name(&self) -> &'static str {
        match self {
            Role::Fullchain => "fullchain",
            Role::Leaf => "leaf",
            Role::Chain => "chain",
            Role::Intermediate => "intermediate",
            Role::Root => "root",
            Role::Key => "key",
            Role::Archive => "archive",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Role::Key => "key",
            Role::Archive => "p12",
            _ => "crt",
        }
    }

    /// File name the role is written to
    pub fn file_name(&self) -> String {
        let stem = match self {
            Role::Key => "private",
            Role::Archive => "certificate",
            other => other.name(),
        };
        format!("{}.{}", stem, self.extension())
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Role → bytes for one layout, in emission order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutPlan {
    entries: Vec<(Role, Vec<u8>)>,
}

impl LayoutPlan {
    fn push(&mut self, role: Role, data: impl Into<Vec<u8>>) {
        self.entries.push((role, data.into()));
    }

    pub fn get(&self, role: Role) -> Option<&[u8]> {
        self.entries
            .iter()
            .find(|(r, _)| *r == role)
            .map(|(_, data)| data.as_slice())
    }

    pub fn contains(&self, role: Role) -> bool {
        self.get(role).is_some()
    }

    pub fn roles(&self) -> Vec<Role> {
        self.entries.iter().map(|(r, _)| *r).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Role, &[u8])> {
        self.entries.iter().map(|(r, data)| (*r, data.as_slice()))
    }
}

/// Produce the plan for `layout`.
///
/// `passphrase` is only read by [`Layout::Archive`]. `full-split` omits the
/// intermediate and root roles when those positions are absent;
/// `leaf-plus-chain` always carries `chain`, empty for a lone leaf.
pub fn emit(
    bundle: &ParsedBundle,
    layout: Layout,
    passphrase: Option<&str>,
) -> Result<LayoutPlan, BundleError> {
    let chain = &bundle.chain;
    let key = bundle.key.as_bytes();
    let mut plan = LayoutPlan::default();

    match layout {
        Layout::FullChain => {
            let mut fullchain = String::from(chain.leaf());
            fullchain.push('\n');
            fullchain.push_str(&chain.rest_joined());
            plan.push(Role::Fullchain, fullchain);
            plan.push(Role::Key, key);
        }
        Layout::LeafPlusChain => {
            plan.push(Role::Leaf, chain.leaf());
            plan.push(Role::Chain, chain.rest_joined());
            plan.push(Role::Key, key);
        }
        Layout::LeafOnly => {
            plan.push(Role::Leaf, chain.leaf());
            plan.push(Role::Key, key);
        }
        Layout::FullSplit => {
            plan.push(Role::Leaf, chain.leaf());
            if let Some(intermediate) = chain.intermediate() {
                plan.push(Role::Intermediate, intermediate);
            }
            if let Some(root) = chain.root() {
                plan.push(Role::Root, root);
            }
            plan.push(Role::Key, key);
        }
        Layout::Archive => {
            plan.push(Role::Archive, archive::build_archive(bundle, passphrase)?);
        }
    }

    tracing::debug!("Layout {} produced roles {:?}", layout, plan.roles());
    Ok(plan)
}
