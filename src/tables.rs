//! Static agronomic reference data.
//!
//! Read-only lookup tables seeded at first access and shared process-wide:
//! per-state soil nutrient norms, per-state crop guidance, and per-crop
//! temperature/rainfall tolerances. All keys are lowercase; callers are
//! expected to normalize before lookup. Unknown states or crops are simply
//! absent, which the validator treats as "no opinion".
use std::collections::HashMap;
use std::sync::LazyLock;

// ---

/// Inclusive (min, max) bounds.
pub type Range = (f64, f64);

/// Per-state crop guidance: crops known to do poorly in the state and the
/// alternatives usually recommended instead.
#[derive(Debug)]
pub struct CropAdvice {
    // ---
    pub unsuitable: &'static [&'static str],
    pub recommended: &'static [&'static str],
}

/// Typical soil nutrient ranges per state, in evaluation order: pH, N, P, K.
pub static SOIL_RANGES: LazyLock<HashMap<&'static str, [(&'static str, Range); 4]>> =
    LazyLock::new(|| {
        HashMap::from([
            (
                "rajasthan",
                [
                    ("pH", (7.0, 9.0)),
                    ("N", (20.0, 100.0)),
                    ("P", (10.0, 40.0)),
                    ("K", (50.0, 150.0)),
                ],
            ),
            (
                "tamil nadu",
                [
                    ("pH", (5.5, 7.5)),
                    ("N", (30.0, 150.0)),
                    ("P", (15.0, 50.0)),
                    ("K", (60.0, 180.0)),
                ],
            ),
            (
                "kerala",
                [
                    ("pH", (4.5, 6.5)),
                    ("N", (40.0, 120.0)),
                    ("P", (20.0, 60.0)),
                    ("K", (70.0, 200.0)),
                ],
            ),
            (
                "punjab",
                [
                    ("pH", (6.0, 8.5)),
                    ("N", (50.0, 180.0)),
                    ("P", (25.0, 70.0)),
                    ("K", (80.0, 220.0)),
                ],
            ),
            (
                "gujarat",
                [
                    ("pH", (6.5, 8.5)),
                    ("N", (30.0, 140.0)),
                    ("P", (20.0, 55.0)),
                    ("K", (60.0, 170.0)),
                ],
            ),
            (
                "madhya pradesh",
                [
                    ("pH", (6.0, 8.0)),
                    ("N", (40.0, 160.0)),
                    ("P", (15.0, 60.0)),
                    ("K", (70.0, 190.0)),
                ],
            ),
            (
                "uttar pradesh",
                [
                    ("pH", (6.5, 8.0)),
                    ("N", (50.0, 170.0)),
                    ("P", (20.0, 65.0)),
                    ("K", (75.0, 210.0)),
                ],
            ),
            (
                "west bengal",
                [
                    ("pH", (5.0, 7.5)),
                    ("N", (40.0, 130.0)),
                    ("P", (20.0, 55.0)),
                    ("K", (65.0, 180.0)),
                ],
            ),
            (
                "karnataka",
                [
                    ("pH", (5.5, 7.5)),
                    ("N", (35.0, 140.0)),
                    ("P", (18.0, 60.0)),
                    ("K", (70.0, 190.0)),
                ],
            ),
            (
                "bihar",
                [
                    ("pH", (6.0, 8.0)),
                    ("N", (45.0, 150.0)),
                    ("P", (20.0, 60.0)),
                    ("K", (75.0, 200.0)),
                ],
            ),
        ])
    });

/// Crop suitability guidance per state.
pub static CROP_ADVICE: LazyLock<HashMap<&'static str, CropAdvice>> = LazyLock::new(|| {
    HashMap::from([
        (
            "rajasthan",
            CropAdvice {
                unsuitable: &[
                    "rice",
                    "black pepper",
                    "coconut",
                    "banana",
                    "rubber",
                    "tea",
                    "coffee",
                    "pineapple",
                    "arecanut",
                    "cardamom",
                    "apple",
                ],
                recommended: &[
                    "wheat",
                    "pearl millet",
                    "soyabean",
                    "mustard",
                    "cumin",
                    "groundnut",
                ],
            },
        ),
        (
            "tamil nadu",
            CropAdvice {
                unsuitable: &[
                    "apple", "wheat", "barley", "cherry", "saffron", "almond", "walnut",
                    "apricot", "pear", "grapes",
                ],
                recommended: &["rice", "groundnut", "sugarcane", "cotton", "banana", "mango"],
            },
        ),
        (
            "kerala",
            CropAdvice {
                unsuitable: &[
                    "wheat", "barley", "maize", "saffron", "apple", "cherry", "grapes",
                    "almond", "apricot", "pear",
                ],
                recommended: &["rice", "coconut", "banana", "cassava", "black pepper", "rubber"],
            },
        ),
        (
            "punjab",
            CropAdvice {
                unsuitable: &[
                    "coconut",
                    "banana",
                    "rubber",
                    "tea",
                    "coffee",
                    "pineapple",
                    "arecanut",
                    "cardamom",
                    "mango",
                    "papaya",
                ],
                recommended: &["wheat", "rice", "cotton", "sugarcane", "maize"],
            },
        ),
        (
            "gujarat",
            CropAdvice {
                unsuitable: &[
                    "apple",
                    "black pepper",
                    "cardamom",
                    "tea",
                    "coffee",
                    "arecanut",
                    "saffron",
                ],
                recommended: &["cotton", "groundnut", "castor", "pearl millet", "sorghum"],
            },
        ),
        (
            "madhya pradesh",
            CropAdvice {
                unsuitable: &["coconut", "tea", "coffee", "black pepper", "rubber"],
                recommended: &["soyabean", "wheat", "maize", "cotton", "gram"],
            },
        ),
        (
            "uttar pradesh",
            CropAdvice {
                unsuitable: &[
                    "coconut",
                    "banana",
                    "rubber",
                    "tea",
                    "coffee",
                    "arecanut",
                    "black pepper",
                ],
                recommended: &["wheat", "rice", "sugarcane", "potato", "mustard"],
            },
        ),
        (
            "west bengal",
            CropAdvice {
                unsuitable: &["apple", "walnut", "almond", "saffron"],
                recommended: &["rice", "jute", "potato", "wheat", "mustard"],
            },
        ),
        (
            "karnataka",
            CropAdvice {
                unsuitable: &["apple", "walnut", "cherry", "saffron"],
                recommended: &["rice", "ragi", "sugarcane", "cotton", "groundnut"],
            },
        ),
        (
            "bihar",
            CropAdvice {
                unsuitable: &["coconut", "tea", "coffee", "rubber", "black pepper", "arecanut"],
                recommended: &["wheat", "rice", "maize", "potato", "sugarcane"],
            },
        ),
    ])
});

/// Temperature tolerances (°C) per crop.
pub static TEMPERATURE_RANGES: LazyLock<HashMap<&'static str, Range>> = LazyLock::new(|| {
    HashMap::from([
        ("wheat", (0.0, 40.0)),
        ("rice", (15.0, 45.0)),
        ("soyabean", (10.0, 35.0)),
    ])
});

/// Rainfall tolerances (mm) per crop.
pub static RAINFALL_RANGES: LazyLock<HashMap<&'static str, Range>> =
    LazyLock::new(|| HashMap::from([("rice", (1200.0, 4000.0)), ("wheat", (300.0, 1500.0))]));

// ---
