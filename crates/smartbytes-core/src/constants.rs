// ABOUTME: Application constants for nutrition math, dessert policy, and provider defaults
// ABOUTME: Compile-time values shared by the intelligence, provider, and server crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBytes

/// Energy density of macronutrients (kcal per gram)
pub mod energy {
    /// Protein kcal/g
    pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
    /// Carbohydrate kcal/g
    pub const KCAL_PER_G_CARBS: f64 = 4.0;
    /// Fat kcal/g
    pub const KCAL_PER_G_FAT: f64 = 9.0;
    /// Upper bound on the share of calories attributed to protein by estimation
    pub const MAX_PROTEIN_CALORIE_SHARE: f64 = 0.4;
}

/// Unit conversions for profile biometrics stored in imperial units
pub mod units {
    /// Centimeters per inch
    pub const CM_PER_INCH: f64 = 2.54;
    /// Kilograms per pound
    pub const KG_PER_POUND: f64 = 0.453_592_37;
}

/// Protein estimation fallbacks
pub mod protein {
    /// Estimate returned when no food category matches (grams)
    pub const DEFAULT_ESTIMATE_G: u32 = 5;
    /// Fraction of the category estimate used to rescue a zero result
    pub const DEGENERATE_RESCUE_FACTOR: f64 = 0.3;
    /// Minimum keyword hits for a strong category match
    pub const STRONG_MATCH_KEYWORDS: usize = 2;
    /// Macro-differential results at or below this are treated as no result (grams)
    pub const MIN_DIFFERENTIAL_PROTEIN_G: u32 = 1;
}

/// Dessert suppression policy thresholds
pub mod dessert_policy {
    /// Desserts are suppressed for users strictly older than this
    pub const MAX_AGE_FOR_DESSERTS: u32 = 30;
    /// Desserts are suppressed at or above this BMI
    pub const BMI_SUPPRESSION_THRESHOLD: f64 = 25.0;
}

/// Menu ranking constants
pub mod ranking {
    /// Weight of protein grams in the composite protein score
    pub const PROTEIN_SCORE_WEIGHT: f64 = 4.0;
    /// Weight of calories in the composite protein score
    pub const CALORIE_SCORE_WEIGHT: f64 = 0.1;
    /// Keyword that always excludes an item from ranked menus
    pub const EXCLUDED_KEYWORD: &str = "sauce";
    /// Name fragments marking an item as non-vegetarian
    ///
    /// Matched at the start of a word, so fused names such as
    /// "cheeseburger" or "mcnuggets" are listed explicitly.
    pub const NON_VEGETARIAN_KEYWORDS: &[&str] = &[
        // meat
        "chicken", "mcchicken", "beef", "steak", "cheesesteak", "pork", "turkey", "lamb",
        "veal", "meat", "bacon", "ham", "sausage", "pepperoni", "salami", "prosciutto",
        "burger", "cheeseburger", "whopper", "big mac", "mcrib", "nugget", "mcnugget",
        "brisket", "chorizo", "carnitas", "barbacoa", "al pastor", "hot dog", "wings",
        // fish
        "fish", "tuna", "salmon", "tilapia", "cod", "halibut", "seafood", "shrimp", "crab",
        "lobster", "anchov",
    ];
    /// Name fragments that mark an item vegetarian even when a meat word appears
    /// (e.g. "Veggie Burger", "Impossible Whopper")
    pub const VEGETARIAN_MARKERS: &[&str] = &[
        "veggie",
        "vegetarian",
        "vegan",
        "meatless",
        "plant-based",
        "impossible",
        "beyond",
        "black bean",
    ];
}

/// Restaurant discovery defaults
pub mod places {
    /// Default search radius in meters (10 miles)
    pub const DEFAULT_RADIUS_METERS: u32 = 16_093;
    /// Default number of places requested
    pub const DEFAULT_LIMIT: u32 = 25;
    /// Places provider category id for restaurants
    pub const RESTAURANT_CATEGORY_ID: &str = "13065";
    /// Restaurants probed concurrently for menu data
    pub const MENU_PROBE_BATCH_SIZE: usize = 5;
    /// Maximum restaurants returned by the menu-data probe
    pub const MENU_PROBE_MAX_RESTAURANTS: usize = 10;
}

/// Simulated ordering timeline
pub mod orders {
    /// `(milliseconds after placement, progress percent)`
    pub const PROGRESS_STAGES: [(u64, u8); 3] = [(1_000, 25), (2_500, 65), (4_000, 100)];
    /// Milliseconds after placement when the order is reported successful
    pub const COMPLETES_AFTER_MS: u64 = 5_000;
    /// Item name used when the caller supplies none
    pub const DEFAULT_ITEM_NAME: &str = "your item";
    /// Image used when the caller supplies none
    pub const DEFAULT_IMAGE_URL: &str = "/images/Default.png";
}

/// Display names used in logs and errors
pub mod service_names {
    /// Server service name
    pub const SMARTBYTES_SERVER: &str = "smartbytes-server";
    /// Single-food nutrition provider
    pub const API_NINJAS: &str = "API Ninjas";
    /// Branded menu nutrition provider
    pub const NUTRITIONIX: &str = "Nutritionix";
    /// Places provider
    pub const FOURSQUARE: &str = "Foursquare";
    /// Profile document store
    pub const FIRESTORE: &str = "Firestore";
}
