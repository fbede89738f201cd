/// A community program shown in the portal gallery
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub title: &'static str,
    pub description: &'static str,
    pub icon_url: &'static str,
}

/// The organization's program catalogue. Static for now; the committee
/// updates it by editing this list at release time.
pub const PROGRAMS: &[Program] = &[
    Program {
        title: "Career Guidance Program",
        description: "Guidance for students on careers, skills and future planning.",
        icon_url: "https://cdn-icons-png.flaticon.com/512/3135/3135715.png",
    },
    Program {
        title: "Blood Donation Camp",
        description: "Emergency blood donation support for people in need.",
        icon_url: "https://cdn-icons-png.flaticon.com/512/2913/2913465.png",
    },
    Program {
        title: "Social Awareness Drive",
        description: "Programs on drugs, mobile addiction and social issues.",
        icon_url: "https://cdn-icons-png.flaticon.com/512/1046/1046784.png",
    },
    Program {
        title: "Public Issues Program",
        description: "Collecting and forwarding public issues to authorities.",
        icon_url: "https://cdn-icons-png.flaticon.com/512/3063/3063822.png",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_is_populated() {
        assert_eq!(PROGRAMS.len(), 4);
        for program in PROGRAMS {
            assert!(!program.title.is_empty());
            assert!(!program.description.is_empty());
            assert!(program.icon_url.starts_with("https://"));
        }
    }

    #[test]
    fn test_titles_are_unique() {
        for (i, a) in PROGRAMS.iter().enumerate() {
            for b in &PROGRAMS[i + 1..] {
                assert_ne!(a.title, b.title);
            }
        }
    }
}
