//! System connectivity probe.
//!
//! A transport counts as available when a wired, Wi-Fi or cellular
//! interface carries at least one routable address. Loopback and virtual
//! interfaces (bridges, container veths, hypervisor adapters) never count.

mod classify;

use std::net::IpAddr;

use rxshell_common::PlatformError;
use rxshell_core::ConnectivityProbe;
use sysinfo::Networks;
use tracing::debug;

pub use classify::{classify_interface, is_routable, Transport};

/// One enumerated interface, reduced to what the probe needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceSnapshot {
    pub name: String,
    pub addrs: Vec<IpAddr>,
}

impl InterfaceSnapshot {
    /// The transport this interface provides, if it is active and validated.
    pub fn active_transport(&self) -> Option<Transport> {
        let transport = classify_interface(&self.name)?;
        self.addrs
            .iter()
            .any(|addr| is_routable(*addr))
            .then_some(transport)
    }
}

/// True iff any snapshot provides an active transport.
pub fn any_transport_active(interfaces: &[InterfaceSnapshot]) -> bool {
    interfaces.iter().any(|i| i.active_transport().is_some())
}

/// Enumerate interfaces from the OS.
pub fn list_interfaces() -> Result<Vec<InterfaceSnapshot>, PlatformError> {
    let networks = Networks::new_with_refreshed_list();
    let interfaces: Vec<InterfaceSnapshot> = networks
        .iter()
        .map(|(name, data)| InterfaceSnapshot {
            name: name.clone(),
            addrs: data.ip_networks().iter().map(|net| net.addr).collect(),
        })
        .collect();

    if interfaces.is_empty() {
        return Err(PlatformError::ConnectivityError(
            "no network interfaces reported".into(),
        ));
    }
    Ok(interfaces)
}

/// Queries the OS on every call.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemConnectivityProbe;

impl SystemConnectivityProbe {
    pub fn new() -> Self {
        Self
    }
}

impl ConnectivityProbe for SystemConnectivityProbe {
    fn is_available(&self) -> bool {
        match list_interfaces() {
            Ok(interfaces) => {
                let available = any_transport_active(&interfaces);
                debug!(available, interfaces = interfaces.len(), "connectivity probed");
                available
            }
            Err(e) => {
                debug!(error = %e, "connectivity query failed, assuming offline");
                false
            }
        }
    }
}
