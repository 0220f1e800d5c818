// 🏢 Company Entity - Portfolio registry
//
// Each company is an immutable record created once at load time.
// Identity = id (stable slug, e.g. "vast"), never reused across companies.
//
// Registry order is meaningful: the first SLOT_COUNT companies are the ones
// on screen at page load (in clockwise slot order), the rest are staged and
// cycle in behind them.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// ============================================================================
// COMPANY RECORD
// ============================================================================

/// A portfolio company as shown on the landing page.
///
/// All fields are presentational values; `id` is the only identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    /// Stable identity slug - never changes, unique in the registry
    pub id: String,

    /// Display name
    pub name: String,

    /// Sector tag shown on the card ("AI Infrastructure", "Cybersecurity", ...)
    pub sector: String,

    /// Category attribute driving card theming ("ai-infra", "deep-tech", ...)
    pub category: String,

    /// One-line description (may contain inline markup)
    pub description: String,

    /// Funding round label ("Led Series B", "Series A", ...)
    pub round: String,

    /// Year of investment
    pub year: u16,

    /// Favicon image path (relative to the document root)
    pub favicon: String,

    /// Card background image path (relative to the document root)
    pub background: String,
}

// ============================================================================
// COMPANY REGISTRY
// ============================================================================

/// Registry of all portfolio companies shown in the bento grid.
///
/// Built once at startup from the compiled-in portfolio (or a JSON file) and
/// never mutated afterwards.
#[derive(Debug, Clone)]
pub struct CompanyRegistry {
    companies: Vec<Company>,
}

impl CompanyRegistry {
    /// Create the registry with the default portfolio
    pub fn new() -> Self {
        CompanyRegistry {
            companies: default_portfolio(),
        }
    }

    /// Create a registry from an explicit company list (order is preserved)
    pub fn from_companies(companies: Vec<Company>) -> Self {
        CompanyRegistry { companies }
    }

    /// Load a registry from a JSON file (array of companies)
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read portfolio file: {:?}", path.as_ref()))?;

        let companies: Vec<Company> =
            serde_json::from_str(&content).context("Failed to parse portfolio JSON")?;

        Ok(CompanyRegistry::from_companies(companies))
    }

    /// Look up a company by id
    pub fn get(&self, id: &str) -> Option<&Company> {
        self.companies.iter().find(|c| c.id == id)
    }

    /// All companies, in registry order
    pub fn all(&self) -> &[Company] {
        &self.companies
    }

    /// Number of companies in the pool
    pub fn count(&self) -> usize {
        self.companies.len()
    }

    /// Ids of the companies initially on screen, in clockwise slot order
    pub fn initial_slots(&self, slot_count: usize) -> Vec<String> {
        self.companies
            .iter()
            .take(slot_count)
            .map(|c| c.id.clone())
            .collect()
    }

    /// Full entry queue: initial companies first, staged companies behind them
    pub fn entry_queue(&self) -> Vec<String> {
        self.companies.iter().map(|c| c.id.clone()).collect()
    }

    /// Companies in a given sector
    pub fn by_sector(&self, sector: &str) -> Vec<&Company> {
        self.companies
            .iter()
            .filter(|c| c.sector.eq_ignore_ascii_case(sector))
            .collect()
    }

    /// Companies in a given category
    pub fn by_category(&self, category: &str) -> Vec<&Company> {
        self.companies
            .iter()
            .filter(|c| c.category == category)
            .collect()
    }

    /// Image paths to preload before the first rotation (background + favicon)
    pub fn preload_images(&self) -> Vec<&str> {
        self.companies
            .iter()
            .flat_map(|c| [c.background.as_str(), c.favicon.as_str()])
            .collect()
    }
}

impl Default for CompanyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn company(
    id: &str,
    name: &str,
    sector: &str,
    category: &str,
    description: &str,
    round: &str,
    year: u16,
    favicon: &str,
    background: &str,
) -> Company {
    Company {
        id: id.to_string(),
        name: name.to_string(),
        sector: sector.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        round: round.to_string(),
        year,
        favicon: favicon.to_string(),
        background: background.to_string(),
    }
}

/// The 10-company pool: 8 initial (clockwise slot order) + 2 staged
fn default_portfolio() -> Vec<Company> {
    vec![
        company(
            "vast",
            "VAST Data",
            "AI Infrastructure",
            "ai-infra",
            "The Data Platform Company for the AI Era",
            "Led Series B",
            2019,
            "assets/Favicons/vast favicon.png",
            "assets/portfolio bgs/vast bg.png",
        ),
        company(
            "exodigo",
            "Exodigo",
            "Deep Tech",
            "deep-tech",
            "Non-Intrusive Underground Mapping",
            "Led Series A",
            2023,
            "assets/Favicons/exodigo favicon.png",
            "assets/portfolio bgs/exodigo bg.png",
        ),
        company(
            "coralogix",
            "Coralogix",
            "IT Infrastructure",
            "it-infra",
            "Observability and Security that Scale with You",
            "Led Series B",
            2021,
            "assets/Coralogix/cropped-cropped-favicon-192x192.png",
            "assets/portfolio bgs/coralogix bg.png",
        ),
        company(
            "silverfort",
            "Silverfort",
            "Cybersecurity",
            "cybersecurity",
            "Where Identity Security has Never Gone Before",
            "Led Series C",
            2022,
            "assets/Favicons/silverfort favicon.png",
            "assets/portfolio bgs/silverfort bg.png",
        ),
        company(
            "aai",
            "AAI",
            "AI Infrastructure",
            "aai",
            "Cracking the Code of Superintelligence",
            "Series A",
            2025,
            "assets/Favicons/AAI favicon.png",
            "assets/portfolio bgs/aai bg.png",
        ),
        company(
            "torq",
            "Torq",
            "Cybersecurity",
            "cybersecurity",
            "The AI-Native Hyperautomation Platform for Security Teams",
            "Led Series B",
            2023,
            "assets/Favicons/torq favicon.png",
            "assets/portfolio bgs/torq bg.png",
        ),
        company(
            "robco",
            "RobCo",
            "Deep Tech",
            "deep-tech",
            "The Robot Company centered on Software and AI",
            "Series C",
            2026,
            "assets/Favicons/robco favicon.png",
            "assets/portfolio bgs/robco bg.png",
        ),
        company(
            "commcrete",
            "Commcrete",
            "Defense",
            "defense",
            "Connect Beyond Borders",
            "Series A",
            2024,
            "assets/Favicons/Commcrete.png",
            "assets/portfolio bgs/Commcrete.png",
        ),
        // Staged - cycle in after the initial rotation
        company(
            "regulus",
            "Regulus",
            "Defense",
            "defense",
            "Next Generation Counter Unmanned Systems",
            "Led Series B",
            2025,
            "assets/Favicons/regulus favicon.png",
            "assets/portfolio bgs/regulus bg.png",
        ),
        company(
            "goodship",
            "GoodShip",
            "Vertical AI",
            "vertical-ai",
            "AI Freight Orchestration & Procurement",
            "Led Series B",
            2025,
            "assets/Favicons/Goodship favicon.png",
            "assets/portfolio bgs/Goodship bg.png",
        ),
    ]
}

// ============================================================================
// TESTS
// ============================================================================
