/// Host identification: supported ChromeOS guest vs. everything else
use std::fs;

use super::os_release::os_release_id;
use crate::config::ProbeConfig;
use crate::error::{InstallError, Result};

/// Is this the supported virtualized guest?
///
/// Compares the hypervisor-reported DMI product name against the expected
/// token. An unreadable probe is an error, not a "no".
pub fn is_supported_guest(probe: &ProbeConfig) -> Result<bool> {
    let product = fs::read_to_string(&probe.product_name_path).map_err(|source| {
        InstallError::Probe {
            path: probe.product_name_path.clone(),
            source,
        }
    })?;

    tracing::debug!("DMI product name: {:?}", product.trim());
    Ok(product.trim() == probe.expected_product)
}

/// Is this the supported guest, but inside the incompatible nested container?
pub fn is_nested_container(probe: &ProbeConfig) -> Result<bool> {
    let id = os_release_id(&probe.os_release_paths)?;
    tracing::debug!("os-release ID: {:?}", id);

    Ok(id == probe.nested_distro_id && is_supported_guest(probe)?)
}

/// Check the host, turning a mismatch into the matching error
pub fn verify_host(probe: &ProbeConfig) -> Result<()> {
    if !is_supported_guest(probe)? {
        return Err(InstallError::UnsupportedHost);
    }

    if is_nested_container(probe)? {
        return Err(InstallError::NestedContainer {
            help_url: probe.help_url.clone(),
        });
    }

    Ok(())
}
