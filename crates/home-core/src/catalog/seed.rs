//! Built-in seed catalog.

use super::{Category, Product};

/// (id, category, title, description, price, rating, reviews, photo, asin, trending)
type SeedRow = (
    u32,
    Category,
    &'static str,
    &'static str,
    &'static str,
    f64,
    &'static str,
    &'static str,
    &'static str,
    bool,
);

const SEED: &[SeedRow] = &[
    (
        1,
        Category::SmartHome,
        "Amazon Echo Dot (5th Gen)",
        "Smart speaker with Alexa - perfect for new homeowners to control lights, music, and more",
        "$49.99",
        4.6,
        "125,432",
        "photo-1543512214-318c7553f230",
        "B09B8V1LZ3",
        true,
    ),
    (
        2,
        Category::SmartHome,
        "Philips Hue White Smart Bulbs",
        "4-pack smart LED bulbs that work with Alexa, Google Assistant, and Apple HomeKit",
        "$59.99",
        4.5,
        "89,234",
        "photo-1558618666-fcd25c85cd64",
        "B07354SP1C",
        false,
    ),
    (
        3,
        Category::SmartHome,
        "Ring Video Doorbell",
        "1080p HD video doorbell with motion detection and two-way talk",
        "$99.99",
        4.4,
        "156,789",
        "photo-1558618047-3c8c76ca7d13",
        "B08N5NQ869",
        false,
    ),
    (
        4,
        Category::SmartHome,
        "Nest Learning Thermostat",
        "Smart thermostat that learns your schedule and saves energy automatically",
        "$249.99",
        4.3,
        "67,543",
        "photo-1545259741-2ea3ebf61fa0",
        "B0131RG6VK",
        false,
    ),
    (
        5,
        Category::Security,
        "SimpliSafe Home Security System",
        "Complete wireless home security system with 24/7 monitoring",
        "$199.99",
        4.6,
        "45,678",
        "photo-1558618047-3c8c76ca7d13",
        "B07YDVJZ4Q",
        true,
    ),
    (
        6,
        Category::Security,
        "Arlo Essential Indoor Camera",
        "1080p wireless security camera with night vision and two-way audio",
        "$79.99",
        4.2,
        "23,456",
        "photo-1558618047-3c8c76ca7d13",
        "B08HRNG8CR",
        false,
    ),
    (
        7,
        Category::Security,
        "August Smart Lock Pro",
        "Smart lock with WiFi connectivity - control access from anywhere",
        "$279.99",
        4.1,
        "34,567",
        "photo-1558618666-fcd25c85cd64",
        "B0752V8D8D",
        false,
    ),
    (
        8,
        Category::Kitchen,
        "Instant Pot Duo 7-in-1",
        "Electric pressure cooker, slow cooker, rice cooker, and more in one",
        "$79.95",
        4.7,
        "234,567",
        "photo-1556909114-f6e7ad7d3136",
        "B00FLYWNYQ",
        true,
    ),
    (
        9,
        Category::Kitchen,
        "Ninja Foodi Personal Blender",
        "Compact blender perfect for smoothies and single servings",
        "$39.99",
        4.5,
        "78,901",
        "photo-1570197788417-0e82375c9371",
        "B07GBZ1Y3H",
        false,
    ),
    (
        10,
        Category::Kitchen,
        "Cuisinart Air Fryer Toaster Oven",
        "Compact countertop oven with air frying capability",
        "$199.99",
        4.4,
        "56,789",
        "photo-1556909114-f6e7ad7d3136",
        "B077HBQZPX",
        false,
    ),
    (
        11,
        Category::Tools,
        "BLACK+DECKER 20V MAX Drill",
        "Cordless drill/driver with LED light - essential for new homeowners",
        "$49.99",
        4.3,
        "45,678",
        "photo-1504148455328-c376907d081c",
        "B00AQZGKZ6",
        true,
    ),
    (
        12,
        Category::Tools,
        "Stanley 25ft Tape Measure",
        "Heavy-duty measuring tape with standout blade",
        "$12.99",
        4.6,
        "89,012",
        "photo-1504148455328-c376907d081c",
        "B00002X204",
        false,
    ),
    (
        13,
        Category::Tools,
        "CRAFTSMAN Home Tool Kit",
        "230-piece mechanics tool set with hard case",
        "$149.99",
        4.5,
        "23,456",
        "photo-1504148455328-c376907d081c",
        "B07QK7TGBX",
        false,
    ),
    (
        14,
        Category::Decor,
        "SONGMICS Floating Shelves",
        "Set of 3 rustic wood floating shelves for wall decor",
        "$29.99",
        4.4,
        "34,567",
        "photo-1586023492125-27b2c045efd7",
        "B07DLCQZPX",
        false,
    ),
    (
        15,
        Category::Decor,
        "Bedsure Throw Pillows Set",
        "4-pack decorative throw pillows for couch and bed",
        "$24.99",
        4.3,
        "67,890",
        "photo-1586023492125-27b2c045efd7",
        "B07VQZQZPX",
        true,
    ),
];

/// Unsplash image URL sized for a product card.
pub(crate) fn seed_image(photo: &str) -> String {
    format!(
        "https://images.unsplash.com/{}?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&q=80",
        photo
    )
}

/// Seed buckets in [`Category::ALL`] order.
pub(super) fn products() -> Vec<(Category, Vec<Product>)> {
    Category::ALL
        .into_iter()
        .map(|category| {
            let items = SEED
                .iter()
                .filter(|row| row.1 == category)
                .map(to_product)
                .collect();
            (category, items)
        })
        .collect()
}

fn to_product(row: &SeedRow) -> Product {
    let &(id, category, title, description, price, rating, reviews, photo, asin, trending) = row;
    Product {
        id,
        title: title.to_string(),
        description: description.to_string(),
        price: price.to_string(),
        rating,
        reviews: reviews.to_string(),
        image: seed_image(photo),
        affiliate_url: format!("https://amazon.com/dp/{}", asin),
        category,
        trending,
    }
}
