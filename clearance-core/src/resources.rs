//! Static reference links rendered alongside a report.

/// An external reference link. Never fetched, validated, or cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceLink {
    /// Link title.
    pub title: &'static str,
    /// Short description of what the link offers.
    pub blurb: &'static str,
    /// Destination URL.
    pub url: &'static str,
}

/// Reference links shown with every report.
pub const REFERENCE_LINKS: [ReferenceLink; 4] = [
    ReferenceLink {
        title: "YouTube Audio Library",
        blurb: "Free music and sound effects for your videos",
        url: "https://www.youtube.com/audiolibrary/",
    },
    ReferenceLink {
        title: "Copyright Guidelines",
        blurb: "Learn about YouTube's copyright policies",
        url: "https://support.google.com/youtube/answer/2797466",
    },
    ReferenceLink {
        title: "Fair Use Guidelines",
        blurb: "Understand when fair use may apply",
        url: "https://www.youtube.com/about/copyright/fair-use/",
    },
    ReferenceLink {
        title: "Creative Commons",
        blurb: "Find freely usable content",
        url: "https://creativecommons.org/",
    },
];
