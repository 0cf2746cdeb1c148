//! Configuration section definitions.
//!
//! Each module corresponds to a section in `autospec.toml`:
//!
//! | Module    | TOML Section | Purpose                                  |
//! |-----------|--------------|------------------------------------------|
//! | `build`   | `[build]`    | Input/output paths, clean flag           |
//! | `ping`    | `[ping]`     | Search engine ping endpoints             |
//! | `site`    | `[site]`     | Site title, description, base URL        |
//! | `sitemap` | `[sitemap]`  | changefreq and priorities                |

mod build;
mod ping;
mod site;
mod sitemap;

pub use build::BuildSectionConfig;
pub use ping::PingConfig;
pub use site::SiteSectionConfig;
pub use sitemap::{ChangeFreq, SitemapConfig};
