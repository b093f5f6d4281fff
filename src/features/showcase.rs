//! Showcase catalogue
//!
//! Pages, products, screenshots and outbound links. Everything the pages
//! display comes from here so the views stay free of copy text.

use std::path::{Path, PathBuf};

use super::gallery::MallornTheme;
use super::settings::LinkSettings;

/// Top-level views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Home,
    Mallorn,
    SkinGenie,
}

impl Page {
    /// Product shown by a detail page
    pub fn product(self) -> Option<Product> {
        match self {
            Page::Home => None,
            Page::Mallorn => Some(Product::Mallorn),
            Page::SkinGenie => Some(Product::SkinGenie),
        }
    }

    /// Title revealed by the scramble effect on this page
    pub fn headline(self) -> &'static str {
        match self.product() {
            None => "Tools that respect your intelligence.",
            Some(product) => product.headline(),
        }
    }

    /// Whether this page draws `shot` anywhere
    pub fn renders(self, shot: Screenshot) -> bool {
        matches!(
            (self, shot),
            (Page::Mallorn, Screenshot::Mallorn(_)) | (Page::SkinGenie, Screenshot::SkinGenieHero)
        )
    }
}

/// Showcased products
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Product {
    Mallorn,
    SkinGenie,
}

impl Product {
    pub const ALL: [Product; 2] = [Product::Mallorn, Product::SkinGenie];

    pub fn page(self) -> Page {
        match self {
            Product::Mallorn => Page::Mallorn,
            Product::SkinGenie => Page::SkinGenie,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Product::Mallorn => "Mallorn AI",
            Product::SkinGenie => "SkinGenie",
        }
    }

    /// Tag in the "MODULE:" badge
    pub fn module_tag(self) -> &'static str {
        match self {
            Product::Mallorn => "MALLORN",
            Product::SkinGenie => "SKINGENIE",
        }
    }

    pub fn platform(self) -> &'static str {
        match self {
            Product::Mallorn => "DESKTOP • AI",
            Product::SkinGenie => "ANDROID • AI",
        }
    }

    /// Short description on the home card
    pub fn blurb(self) -> &'static str {
        match self {
            Product::Mallorn => {
                "Predictive drive health monitoring using Random Forest AI. \
                 Move beyond static thresholds and catch failures before they happen."
            }
            Product::SkinGenie => {
                "AI-driven skin analysis and routine tracker. \
                 Understand your skin health using computer vision technology."
            }
        }
    }

    pub fn headline(self) -> &'static str {
        match self {
            Product::Mallorn => "Predictive Storage Defense",
            Product::SkinGenie => "Your Pocket Dermatologist",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            Product::Mallorn => {
                "The Sentinel for your Storage. Trained on 300,000+ drives. Mallorn ignores \
                 manufacturer thresholds and uses a machine learning model to detect \
                 non-linear failure patterns."
            }
            Product::SkinGenie => {
                "Stop guessing what your skin needs. SkinGenie uses advanced computer vision \
                 to scan your face in seconds and give you personalized recommendations."
            }
        }
    }

    pub fn features(self) -> [&'static str; 3] {
        match self {
            Product::Mallorn => [
                "Random Forest AI Model",
                "Hybrid Scanning (Smartctl + WinAPI)",
                "Native System Tray Integration",
            ],
            Product::SkinGenie => [
                "Computer Vision Analysis",
                "Routine Tracking & Reminders",
                "Routine Notifications",
            ],
        }
    }

    /// Download or store action
    pub fn primary_link(self) -> Link {
        match self {
            Product::Mallorn => Link::MallornDownload,
            Product::SkinGenie => Link::SkinGenieStore,
        }
    }

    /// Source repository, when public
    pub fn source_link(self) -> Option<Link> {
        match self {
            Product::Mallorn => Some(Link::MallornRepo),
            Product::SkinGenie => None,
        }
    }

    /// Hero screenshot for the current gallery selection
    pub fn hero(self, theme: MallornTheme) -> Screenshot {
        match self {
            Product::Mallorn => Screenshot::Mallorn(theme),
            Product::SkinGenie => Screenshot::SkinGenieHero,
        }
    }
}

/// Screenshot assets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screenshot {
    Mallorn(MallornTheme),
    SkinGenieHero,
}

impl Screenshot {
    pub fn asset(self) -> &'static str {
        match self {
            Screenshot::Mallorn(theme) => theme.asset(),
            Screenshot::SkinGenieHero => "skin-hero.png",
        }
    }

    pub fn path(self, assets_dir: &Path) -> PathBuf {
        assets_dir.join(self.asset())
    }
}

/// Outbound links handed to the system opener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Link {
    MallornDownload,
    MallornRepo,
    SkinGenieStore,
    Donate,
    AuthorProfile,
}

impl Link {
    pub fn url(self, links: &LinkSettings) -> &str {
        match self {
            Link::MallornDownload => &links.mallorn_download,
            Link::MallornRepo => &links.mallorn_repo,
            Link::SkinGenieStore => &links.skin_genie_store,
            Link::Donate => &links.donate,
            Link::AuthorProfile => &links.author_profile,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Link::MallornDownload => "Download for Windows",
            Link::MallornRepo => "View on GitHub",
            Link::SkinGenieStore => "Get on Google Play",
            Link::Donate => "Buy me a Coffee",
            Link::AuthorProfile => "GitHub",
        }
    }
}
