use std::{fs, path::Path};

use anyhow::Context;
use dvdnav_model::{NavigationPacket, pci::decode_pci};

/// On-disk representation of a navigation packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PacketFormat {
    /// `NavigationPacket` serialized as JSON.
    #[default]
    Json,
    /// Raw PCI packet bytes as read from the disc.
    Pci,
}

pub fn load_packet(
    path: &Path,
    format: PacketFormat,
) -> anyhow::Result<NavigationPacket> {
    match format {
        PacketFormat::Json => {
            let contents = fs::read_to_string(path).with_context(|| {
                format!("failed to read packet {}", path.display())
            })?;
            let packet: NavigationPacket = serde_json::from_str(&contents)
                .with_context(|| {
                    format!("invalid packet json {}", path.display())
                })?;
            packet.validate().with_context(|| {
                format!("packet {} failed validation", path.display())
            })?;
            Ok(packet)
        }
        PacketFormat::Pci => {
            let bytes = fs::read(path).with_context(|| {
                format!("failed to read PCI packet {}", path.display())
            })?;
            decode_pci(&bytes).with_context(|| {
                format!("failed to decode PCI packet {}", path.display())
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn json_packets_are_validated() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("menu.json");
        // x_end before x_start
        fs::write(
            &path,
            r#"{"buttons": [{"rect": {"x_start": 50, "y_start": 0, "x_end": 10, "y_end": 10}}]}"#,
        )
        .unwrap();

        let err = load_packet(&path, PacketFormat::Json).unwrap_err();
        assert!(format!("{err:#}").contains("failed validation"), "{err:#}");
    }

    #[test]
    fn short_pci_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nav.pci");
        fs::write(&path, [0u8; 64]).unwrap();

        assert!(load_packet(&path, PacketFormat::Pci).is_err());
    }
}
