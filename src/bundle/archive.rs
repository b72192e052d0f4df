//! PKCS#12 archive construction and read-back
//!
//! Builds a single `.p12` container holding the private key, the leaf
//! certificate and the remaining chain certificates, for Windows/Java style
//! consumers.
//!
//! With a passphrase the bags are encrypted and the container carries a MAC.
//! Without one the key sits in a plain keyBag, the certificates in plain
//! certBags, and no MAC is written.

use crate::bundle::parser::{pem_contents, ParsedBundle};
use crate::utils::BundleError;
use openssl::nid::Nid;
use openssl::pkcs12::Pkcs12;
use openssl::pkey::PKey;
use openssl::stack::Stack;
use openssl::x509::X509;

/// Friendly name set on both the key bag and the leaf certificate bag
pub const ARCHIVE_FRIENDLY_NAME: &str = "cert";

// PKCS12_create reads -1 as "plain bag" for the algorithms and "no MAC" for
// the MAC iteration count. Nid::UNDEF would select the default cipher.
const NO_ENCRYPTION: Nid = Nid::from_raw(-1);
const NO_MAC: i32 = -1;

/// What a PKCS#12 container decoded to
#[derive(Debug, Default)]
pub struct ArchiveContents {
    /// PKCS#8 DER of the private key, if the container had one
    pub key: Option<Vec<u8>>,
    /// DER of the leaf certificate
    pub leaf: Option<Vec<u8>>,
    /// Friendly name of the leaf certificate bag
    pub leaf_friendly_name: Option<String>,
    /// DER of the additional certificates
    pub chain: Vec<Vec<u8>>,
}

/// Build a PKCS#12 container from a parsed bundle.
///
/// An empty or absent passphrase stores the bags unencrypted.
pub fn build_archive(
    bundle: &ParsedBundle,
    passphrase: Option<&str>,
) -> Result<Vec<u8>, BundleError> {
    let key_der = bundle.key.decode_der()?;
    let pkey = PKey::private_key_from_pkcs8(&key_der).map_err(|e| {
        BundleError::KeyDecodeFailed {
            message: e.to_string(),
        }
    })?;

    let leaf = X509::from_der(bundle.leaf.der()).map_err(|e| BundleError::LeafDecodeFailed {
        message: e.to_string(),
    })?;

    let mut chain = Stack::new().map_err(build_failed)?;
    for (offset, block) in bundle.chain.rest().iter().enumerate() {
        chain
            .push(decode_chain_certificate(block, offset + 1)?)
            .map_err(build_failed)?;
    }

    let mut builder = Pkcs12::builder();
    builder
        .name(ARCHIVE_FRIENDLY_NAME)
        .pkey(&pkey)
        .cert(&leaf)
        .ca(chain);

    let pwd = passphrase.unwrap_or("");
    if pwd.is_empty() {
        tracing::debug!("Writing unencrypted PKCS#12 archive");
        builder
            .key_algorithm(NO_ENCRYPTION)
            .cert_algorithm(NO_ENCRYPTION)
            .mac_iter(NO_MAC as u32);
    }

    let pkcs12 = builder.build2(pwd).map_err(build_failed)?;
    pkcs12.to_der().map_err(build_failed)
}

fn build_failed(e: openssl::error::ErrorStack) -> BundleError {
    BundleError::ArchiveBuildFailed {
        message: e.to_string(),
    }
}

fn decode_chain_certificate(block: &str, position: usize) -> Result<X509, BundleError> {
    let fail = |message: String| BundleError::ChainCertificateDecodeFailed { position, message };

    let der = pem_contents(block).map_err(fail)?;
    X509::from_der(&der).map_err(|e| fail(e.to_string()))
}

/// Open a PKCS#12 container and list its key and certificates
pub fn open_archive(
    data: &[u8],
    passphrase: Option<&str>,
) -> Result<ArchiveContents, BundleError> {
    let open_failed = |e: openssl::error::ErrorStack| BundleError::ArchiveOpenFailed {
        message: e.to_string(),
    };

    let parsed = Pkcs12::from_der(data)
        .and_then(|p12| p12.parse2(passphrase.unwrap_or("")))
        .map_err(open_failed)?;

    let key = parsed
        .pkey
        .map(|pkey| pkey.private_key_to_pkcs8())
        .transpose()
        .map_err(open_failed)?;

    let mut contents = ArchiveContents {
        key,
        ..Default::default()
    };

    if let Some(cert) = parsed.cert {
        contents.leaf_friendly_name = cert
            .alias()
            .map(|alias| String::from_utf8_lossy(alias).into_owned());
        contents.leaf = Some(cert.to_der().map_err(open_failed)?);
    }

    if let Some(ca) = parsed.ca {
        for cert in &ca {
            contents.chain.push(cert.to_der().map_err(open_failed)?);
        }
    }

    Ok(contents)
}
