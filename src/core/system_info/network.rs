use std::net::{IpAddr, ToSocketAddrs};

use crate::core::system_info::types::MetricSnapshot;
use crate::error::Result;
use sysinfo::{Networks, System};

pub fn collect(networks: &mut Networks) -> Result<MetricSnapshot> {
    networks.refresh(true);

    let hostname = System::host_name().unwrap_or_else(|| "Unknown".to_string());
    let ip_address = resolve_ipv4(&hostname)
        .map(|ip| ip.to_string())
        .unwrap_or_else(|| "unavailable".to_string());

    let (sent, received) = networks
        .values()
        .fold((0u64, 0u64), |(tx, rx), data| {
            (
                tx.saturating_add(data.total_transmitted()),
                rx.saturating_add(data.total_received()),
            )
        });

    Ok(MetricSnapshot::builder()
        .entry("Computer Name", hostname)
        .entry("IP Address", ip_address)
        .entry("Data Sent (B)", sent)
        .entry("Data Received (B)", received)
        .build())
}

/// First IPv4 address the host name resolves to
fn resolve_ipv4(hostname: &str) -> Option<IpAddr> {
    match (hostname, 0).to_socket_addrs() {
        Ok(addrs) => addrs.map(|addr| addr.ip()).find(IpAddr::is_ipv4),
        Err(e) => {
            log::debug!("Could not resolve host name {}: {}", hostname, e);
            None
        }
    }
}
