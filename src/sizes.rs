//! The built-in icon size table.
//!
//! A static, ordered list of (relative output path, target pixel size)
//! records. Relative paths are unique; iteration order is the order icons
//! are generated and reported in.

/// One required output icon: where it goes and how big it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSpec {
    /// Output path relative to the output root.
    pub rel_path: &'static str,
    /// Side length in pixels; outputs are always `size × size`.
    pub size: u32,
}

/// Every icon the tool produces, in generation order.
pub const ICON_SPECS: &[IconSpec] = &[
    // Android mipmap densities
    IconSpec { rel_path: "android/mipmap-mdpi/ic_launcher.png", size: 48 },
    IconSpec { rel_path: "android/mipmap-hdpi/ic_launcher.png", size: 72 },
    IconSpec { rel_path: "android/mipmap-xhdpi/ic_launcher.png", size: 96 },
    IconSpec { rel_path: "android/mipmap-xxhdpi/ic_launcher.png", size: 144 },
    IconSpec { rel_path: "android/mipmap-xxxhdpi/ic_launcher.png", size: 192 },
    // Play Store listing icon
    IconSpec { rel_path: "android/playstore-icon.png", size: 512 },
    // iOS AppIcon set (83.5pt@1x is stored at 83px)
    IconSpec { rel_path: "ios/AppIcon-20.png", size: 20 },
    IconSpec { rel_path: "ios/AppIcon-29.png", size: 29 },
    IconSpec { rel_path: "ios/AppIcon-40.png", size: 40 },
    IconSpec { rel_path: "ios/AppIcon-60.png", size: 60 },
    IconSpec { rel_path: "ios/AppIcon-76.png", size: 76 },
    IconSpec { rel_path: "ios/AppIcon-83.5.png", size: 83 },
    IconSpec { rel_path: "ios/AppIcon-1024.png", size: 1024 },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn table_has_thirteen_entries() {
        assert_eq!(ICON_SPECS.len(), 13);
    }

    #[test]
    fn relative_paths_are_unique() {
        let paths: HashSet<&str> = ICON_SPECS.iter().map(|s| s.rel_path).collect();
        assert_eq!(paths.len(), ICON_SPECS.len());
    }

    #[test]
    fn all_sizes_positive() {
        assert!(ICON_SPECS.iter().all(|s| s.size > 0));
    }

    #[test]
    fn relative_paths_stay_relative() {
        // A leading slash or drive would escape the output root on join.
        for spec in ICON_SPECS {
            assert!(
                std::path::Path::new(spec.rel_path).is_relative(),
                "{} is not relative",
                spec.rel_path
            );
        }
    }

    #[test]
    fn covers_both_platforms() {
        assert!(ICON_SPECS.iter().any(|s| s.rel_path.starts_with("android/")));
        assert!(ICON_SPECS.iter().any(|s| s.rel_path.starts_with("ios/")));
    }
}
