//! Static profile content rendered by the portfolio page

pub const NAME_FIRST: &str = "DEEP";
pub const NAME_LAST: &str = "SENGUPTA";

/// Roles cycled by the typewriter line under the name
pub const ROLES: &[&str] = &["Bug Bounty Hunter", "Python Developer", "Android Developer"];

pub const ABOUT: &str = "I'm a passionate developer and cybersecurity enthusiast who thrives \
on solving problems, learning new technologies, and building things that matter.";

pub const EMAIL: &str = "myselfdeepsengupta@gmail.com";
pub const RESUME_PATH: &str = "Resume.pdf";

pub const EDUCATION_DEGREE: &str = "Bachelor of Computer Application";
pub const EDUCATION_YEARS: &str = "2021\u{2013}2024";

/// Skill panels: unicons class plus comma-separated items
pub const SKILL_PANELS: &[(&str, &str)] = &[
    (
        "uil-code-branch",
        "HTML, CSS, JavaScript, ReactJS, Node.js, Python, SQL, Java, Bash, PowerShell",
    ),
    (
        "uil-wrench",
        "Android Studio, Burp Suite, Linux, VS Code, Git, GitHub, Docker, Nmap, Wireshark, Postman",
    ),
];

/// One animated stat card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub target: u32,
    /// Render with thousands separators
    pub grouped: bool,
}

pub const STATS: &[Stat] = &[
    Stat { label: "Projects Done", target: 12, grouped: false },
    Stat { label: "Projects Ongoing", target: 2, grouped: false },
    Stat { label: "Lines of Code", target: 54053, grouped: true },
];

/// Outbound social profile link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub icon: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        name: "GitHub",
        icon: "uil-github",
        href: "https://github.com/deep-sengupta",
    },
    SocialLink {
        name: "LinkedIn",
        icon: "uil-linkedin",
        href: "https://www.linkedin.com/in/deepseng/",
    },
    SocialLink {
        name: "Twitter",
        icon: "uil-twitter",
        href: "https://x.com/DeepSen_Gupta",
    },
];

pub const TAGLINE: &str = "Developer and Cybersecurity";
pub const FOOTER: &str = "\u{a9} 2025 Deep SenGupta. All rights reserved.";

/// Unicons line stylesheet, the only external resource besides the page itself
pub const ICON_STYLESHEET: &str = "https://unicons.iconscout.com/release/v4.0.8/css/line.css";

/// Decorative icons drifting behind the page content
pub const FLOATING_ICONS: &[&str] = &[
    "uil-html5",
    "uil-python",
    "uil-react",
    "uil-git",
    "uil-visual-studio",
    "uil-terminal",
    "uil-database",
    "uil-wrench",
    "uil-bug",
    "uil-navigator",
    "uil-shield-check",
    "uil-brackets-curly",
    "uil-linux",
    "uil-java-script",
    "uil-cloud-lock",
    "uil-apps",
    "uil-server-network",
    "uil-terminal",
    "uil-brackets-curly",
    "uil-linux",
];
