//! Built-in page content: the project catalog and the hero tagline.
//!
//! Everything here is `'static` data baked into the binary. Records are
//! defined once, never mutated, and consumed in order by the project
//! renderer; display order matters, so the catalog is a slice, not a map.

/// One portfolio project entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    /// Card heading.
    pub title: &'static str,
    /// Short prose description shown under the title.
    pub description: &'static str,
    /// Tag badges, rendered in this order (duplicates allowed).
    pub tags: &'static [&'static str],
    /// Image URI for the card header.
    pub image: &'static str,
    /// Project link opened when the card is activated, or
    /// [`PLACEHOLDER_LINK`] for entries with nothing to link to yet.
    pub link: &'static str,
}

/// Safe no-navigation marker used by entries without a public link.
pub const PLACEHOLDER_LINK: &str = "#";

/// Hero tagline revealed by the typewriter effect.
pub const TAGLINE: &str = "Interest: SLAM, Robotics";

const CATALOG: &[Project] = &[
    Project {
        title: "AMR Autonomous Driving System",
        description: "Developed an autonomous driving system using Agilex \
                      LIMO. Implemented LiDAR-based obstacle avoidance, \
                      vision-based lane tracking, and AR marker recognition. \
                      Mastered sensor fusion and drive control logic.",
        tags: &["ROS1", "Vision", "LiDAR"],
        image: "https://via.placeholder.com/400x250/111/fff?text=AMR+Autonomous+Driving",
        link: "https://github.com/PolyGon-13/limo_project",
    },
    Project {
        title: "VR Manipulator Control & Collaboration",
        description: "Integrated Doosan A0509 and Agilex PiPER into Unity \
                      for VR teleoperation using inverse kinematics. \
                      Developed a collaboration algorithm where a Unitree \
                      Go2 quadruped robot assists the manipulator when it \
                      reaches its workspace limit.",
        tags: &["Unity", "VR", "Manipulator"],
        image: "https://via.placeholder.com/400x250/111/fff?text=VR+Manipulator+Control",
        link: "https://github.com/PolyGon-13/PiPER_Unity_VR",
    },
    Project {
        title: "Hot Cell Digital Twin for Safety",
        description: "Virtualization of a high-risk hot cell facility using \
                      Unity. Implemented bidirectional communication between \
                      VR controllers and actual PLC to control equipment \
                      safely, replacing high-risk manual operations.",
        tags: &["Unity", "VR", "PLC"],
        image: "https://via.placeholder.com/400x250/111/fff?text=Hot+Cell+Digital+Twin",
        link: PLACEHOLDER_LINK,
    },
];

/// The full catalog, in display order.
pub fn catalog() -> &'static [Project] {
    CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_is_stable() {
        let entries = catalog();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].title, "AMR Autonomous Driving System");
        assert_eq!(entries[1].title, "VR Manipulator Control & Collaboration");
        assert_eq!(entries[2].title, "Hot Cell Digital Twin for Safety");
    }

    #[test]
    fn test_tags_keep_record_order() {
        assert_eq!(catalog()[0].tags, &["ROS1", "Vision", "LiDAR"]);
        assert_eq!(catalog()[2].tags, &["Unity", "VR", "PLC"]);
    }

    #[test]
    fn test_every_entry_is_renderable() {
        for entry in catalog() {
            assert!(!entry.title.is_empty());
            assert!(!entry.description.is_empty());
            assert!(!entry.image.is_empty());
            assert!(!entry.link.is_empty());
        }
    }

    #[test]
    fn test_placeholder_marks_unlinked_entry() {
        assert_eq!(catalog()[2].link, PLACEHOLDER_LINK);
        assert!(catalog()[..2].iter().all(|p| p.link != PLACEHOLDER_LINK));
    }

    #[test]
    fn test_tagline_present() {
        assert!(!TAGLINE.is_empty());
    }
}
