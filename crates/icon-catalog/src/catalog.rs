//! The fixed icon table.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Grouping used by icon pickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Connectivity,
    Display,
    Audio,
    Storage,
    Power,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Connectivity,
        Category::Display,
        Category::Audio,
        Category::Storage,
        Category::Power,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Connectivity => "CONNECTIVITY",
            Category::Display => "DISPLAY",
            Category::Audio => "AUDIO",
            Category::Storage => "STORAGE",
            Category::Power => "POWER",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One catalog entry. `id` is the icon's upstream file stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub category: Category,
    pub tags: &'static [&'static str],
}

impl IconSpec {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

const fn icon(
    id: &'static str,
    name: &'static str,
    category: Category,
    tags: &'static [&'static str],
) -> IconSpec {
    IconSpec {
        id,
        name,
        category,
        tags,
    }
}

/// Computer and audio-visual connector icons, in packaging order.
pub const CATALOG: &[IconSpec] = &[
    icon("usb", "USB", Category::Connectivity, &["usb", "port", "connector"]),
    icon("usb-port", "USB Port", Category::Connectivity, &["usb", "port", "type-a"]),
    icon("usb-c-port", "USB-C Port", Category::Connectivity, &["usb", "usb-c", "type-c", "port"]),
    icon("usb-flash-drive", "USB Flash Drive", Category::Connectivity, &["usb", "flash", "drive", "storage"]),
    icon("hdmi-port", "HDMI Port", Category::Connectivity, &["hdmi", "port", "video"]),
    icon("video-input-hdmi", "HDMI Input", Category::Connectivity, &["hdmi", "input", "video"]),
    icon("monitor", "Monitor", Category::Display, &["monitor", "display", "screen"]),
    icon("television", "Television", Category::Display, &["tv", "television", "display"]),
    icon("projector", "Projector", Category::Display, &["projector", "display"]),
    icon("video", "Video Port", Category::Connectivity, &["video", "port", "display", "displayport", "dvi"]),
    icon("video-box", "Video Box", Category::Connectivity, &["video", "box", "display"]),
    icon("video-input-component", "Component Video", Category::Connectivity, &["component", "video", "display", "rca"]),
    icon("video-input-svideo", "S-Video", Category::Connectivity, &["svideo", "s-video", "video"]),
    icon("headphones", "Headphones", Category::Audio, &["headphones", "audio", "sound"]),
    icon("speaker", "Speaker", Category::Audio, &["speaker", "audio", "sound"]),
    icon("microphone", "Microphone", Category::Audio, &["microphone", "mic", "audio"]),
    icon("audio-input-rca", "RCA Audio", Category::Audio, &["rca", "audio", "connector"]),
    icon("audio-input-xlr", "XLR Audio", Category::Audio, &["xlr", "audio", "connector", "pro"]),
    icon("audio-input-stereo-minijack", "3.5mm Audio Jack", Category::Audio, &["3.5mm", "minijack", "audio", "headphone", "jack"]),
    icon("audio-video", "Audio/Video", Category::Audio, &["av", "audio", "video"]),
    icon("toslink", "TOSLink", Category::Audio, &["toslink", "optical", "audio", "spdif"]),
    icon("ethernet", "Ethernet", Category::Connectivity, &["ethernet", "network", "lan", "rj45"]),
    icon("ethernet-cable", "Ethernet Cable", Category::Connectivity, &["ethernet", "cable", "network", "lan"]),
    icon("lan", "LAN", Category::Connectivity, &["lan", "network", "ethernet"]),
    icon("wan", "WAN", Category::Connectivity, &["wan", "network"]),
    icon("wifi", "WiFi", Category::Connectivity, &["wifi", "wireless", "network"]),
    icon("serial-port", "Serial Port", Category::Connectivity, &["serial", "port", "rs232", "db9"]),
    icon("cable-data", "Data Cable", Category::Connectivity, &["cable", "data", "connector"]),
    icon("firewire", "FireWire", Category::Connectivity, &["firewire", "ieee1394", "port"]),
    icon("harddisk", "Hard Disk", Category::Storage, &["hdd", "hard disk", "storage"]),
    icon("sd", "SD Card", Category::Storage, &["sd", "card", "storage"]),
    icon("micro-sd", "MicroSD Card", Category::Storage, &["microsd", "micro-sd", "card", "storage"]),
    icon("disc", "Disc", Category::Storage, &["disc", "cd", "dvd", "bluray"]),
    icon("power-plug", "Power Plug", Category::Power, &["power", "plug", "ac"]),
    icon("battery", "Battery", Category::Power, &["battery", "power"]),
    icon("lightning-bolt", "Lightning Bolt", Category::Power, &["power", "electricity", "thunderbolt"]),
];

pub fn catalog() -> &'static [IconSpec] {
    CATALOG
}

pub fn find(id: &str) -> Option<&'static IconSpec> {
    CATALOG.iter().find(|icon| icon.id == id)
}

/// Entries of one category, in catalog order.
pub fn in_category(category: Category) -> impl Iterator<Item = &'static IconSpec> {
    CATALOG.iter().filter(move |icon| icon.category == category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_size() {
        assert_eq!(catalog().len(), 36);
    }

    #[test]
    fn test_ids_unique() {
        let ids: HashSet<&str> = CATALOG.iter().map(|i| i.id).collect();
        assert_eq!(ids.len(), CATALOG.len());
    }

    #[test]
    fn test_every_entry_has_name_and_tags() {
        for icon in CATALOG {
            assert!(!icon.name.is_empty(), "{}", icon.id);
            assert!(!icon.tags.is_empty(), "{}", icon.id);
        }
    }

    #[test]
    fn test_every_category_used() {
        for category in Category::ALL {
            assert!(in_category(category).next().is_some(), "{}", category);
        }
        assert_eq!(in_category(Category::Storage).count(), 4);
        assert_eq!(in_category(Category::Power).count(), 3);
    }

    #[test]
    fn test_find() {
        let hdmi = find("hdmi-port").unwrap();
        assert_eq!(hdmi.name, "HDMI Port");
        assert_eq!(hdmi.category, Category::Connectivity);
        assert!(hdmi.has_tag("VIDEO"));
        assert!(find("floppy").is_none());
    }

    #[test]
    fn test_category_serializes_uppercase() {
        assert_eq!(
            serde_json::to_string(&Category::Audio).unwrap(),
            "\"AUDIO\""
        );
    }
}
