// src/catalog.rs
//! Static price and exam tables. Loaded once, never mutated.

use serde::Serialize;

use crate::services::money::Money;

#[derive(Debug, Clone, Serialize)]
pub struct Package {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub base_price: Money,
    pub features: &'static [&'static str],
    /// Order-wide discount in basis points.
    pub discount_bps: u32,
    pub popular: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct PricedItem {
    pub id: &'static str,
    pub name: &'static str,
    pub price: Money,
}

pub const DEFAULT_PACKAGE: &str = "premium";

pub static PACKAGES: &[Package] = &[
    Package {
        id: "basic",
        name: "Basic Package",
        description: "Perfect for individual exam takers",
        base_price: Money::from_dollars(0),
        features: &[
            "Exam scheduling",
            "Basic study materials",
            "Email support",
            "Secure testing environment",
        ],
        discount_bps: 0,
        popular: false,
    },
    Package {
        id: "premium",
        name: "Premium Package",
        description: "Most popular choice for serious students",
        base_price: Money::from_dollars(299),
        features: &[
            "Everything in Basic",
            "Prep course included",
            "Practice exams",
            "Priority scheduling",
            "Phone support",
            "Study progress tracking",
        ],
        discount_bps: 1_000,
        popular: true,
    },
    Package {
        id: "enterprise",
        name: "Enterprise Package",
        description: "For organizations and bulk bookings",
        base_price: Money::from_dollars(999),
        features: &[
            "Everything in Premium",
            "Bulk exam scheduling",
            "Custom training programs",
            "Dedicated account manager",
            "On-site testing options",
            "Advanced reporting",
        ],
        discount_bps: 1_500,
        popular: false,
    },
];

pub static EXAM_PRICES: &[PricedItem] = &[
    PricedItem { id: "series-7", name: "Series 7", price: Money::from_dollars(300) },
    PricedItem { id: "series-63", name: "Series 63", price: Money::from_dollars(147) },
    PricedItem { id: "mcat", name: "MCAT", price: Money::from_dollars(320) },
    PricedItem { id: "cpa-far", name: "CPA FAR", price: Money::from_dollars(208) },
    PricedItem { id: "security-plus", name: "Security+", price: Money::from_dollars(370) },
];

pub static CLASS_PRICES: &[PricedItem] = &[
    PricedItem { id: "finra-prep", name: "FINRA Prep Course", price: Money::from_dollars(899) },
    PricedItem { id: "mcat-prep", name: "MCAT Prep Course", price: Money::from_dollars(1299) },
    PricedItem { id: "cpa-review", name: "CPA Review Course", price: Money::from_dollars(1099) },
    PricedItem {
        id: "security-training",
        name: "Security Training Course",
        price: Money::from_dollars(799),
    },
];

#[derive(Debug, Clone, Serialize)]
pub struct ExamListing {
    pub id: &'static str,
    pub name: &'static str,
    pub full_name: &'static str,
    pub category: &'static str,
    pub difficulty: &'static str,
    pub duration: &'static str,
    pub fee: Money,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    /// Tenths of a star, 48 = 4.8.
    pub rating: u8,
    pub popularity: u8,
}

pub static EXAMS: &[ExamListing] = &[
    ExamListing {
        id: "series-7",
        name: "Series 7",
        full_name: "General Securities Representative",
        category: "Finance",
        difficulty: "Advanced",
        duration: "225 minutes",
        fee: Money::from_dollars(300),
        description: "Qualifies individuals to sell a broad range of securities products.",
        tags: &["Securities", "Investment", "Sales"],
        rating: 48,
        popularity: 95,
    },
    ExamListing {
        id: "mcat",
        name: "MCAT",
        full_name: "Medical College Admission Test",
        category: "Medical",
        difficulty: "Expert",
        duration: "7.5 hours",
        fee: Money::from_dollars(320),
        description: "Standardized test for medical school admission.",
        tags: &["Medical", "Graduate School", "Healthcare"],
        rating: 47,
        popularity: 88,
    },
    ExamListing {
        id: "cpa-far",
        name: "CPA FAR",
        full_name: "Financial Accounting and Reporting",
        category: "Accounting",
        difficulty: "Advanced",
        duration: "4 hours",
        fee: Money::from_dollars(208),
        description: "Tests financial accounting and reporting standards.",
        tags: &["Accounting", "Finance", "CPA"],
        rating: 46,
        popularity: 82,
    },
    ExamListing {
        id: "comptia-security",
        name: "Security+",
        full_name: "CompTIA Security+ Certification",
        category: "IT",
        difficulty: "Intermediate",
        duration: "90 minutes",
        fee: Money::from_dollars(370),
        description: "Cybersecurity fundamentals certification.",
        tags: &["Cybersecurity", "IT", "Technology"],
        rating: 49,
        popularity: 91,
    },
];
