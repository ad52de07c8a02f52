//! Portfolio designs that can be requested through the replication form.

/// A showcased site design.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortfolioItem {
    pub id: u32,
    pub title: &'static str,
    pub sector: &'static str,
    pub category: &'static str,
    /// Estimated build price, shown as-is.
    pub price_range: &'static str,
}

const CATALOG: &[PortfolioItem] = &[
    PortfolioItem {
        id: 1,
        title: "Elysian Wellness Spa",
        sector: "Health & Wellness",
        category: "wellness",
        price_range: "$1200 - $1800",
    },
    PortfolioItem {
        id: 2,
        title: "Apex Legal Advisors",
        sector: "Professional Services",
        category: "corporate",
        price_range: "$900 - $1500",
    },
    PortfolioItem {
        id: 3,
        title: "The Gilded Spoon",
        sector: "Hospitality",
        category: "hospitality",
        price_range: "$1000 - $1600",
    },
    PortfolioItem {
        id: 4,
        title: "Innovate Architecture",
        sector: "Real Estate",
        category: "corporate",
        price_range: "$1500 - $2500",
    },
    PortfolioItem {
        id: 5,
        title: "Serene Landscapes",
        sector: "Local Services",
        category: "wellness",
        price_range: "$800 - $1300",
    },
    PortfolioItem {
        id: 6,
        title: "Artisan Roast Collective",
        sector: "E-Commerce",
        category: "hospitality",
        price_range: "$2000+",
    },
];

/// Every portfolio item, in display order.
#[must_use]
pub fn catalog() -> &'static [PortfolioItem] {
    CATALOG
}

/// Look up an item by id.
#[must_use]
pub fn find(id: u32) -> Option<&'static PortfolioItem> {
    CATALOG.iter().find(|item| item.id == id)
}

impl PortfolioItem {
    /// Fixed payload entries a replication request for this item carries.
    #[must_use]
    pub fn replication_context(&self) -> Vec<(String, String)> {
        vec![
            ("projectName".to_owned(), self.title.to_owned()),
            ("estimatedPrice".to_owned(), self.price_range.to_owned()),
        ]
    }
}
