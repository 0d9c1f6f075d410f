use std::sync::LazyLock;

use smarteats_core::RuleTable;

type Entry = (&'static [&'static str], &'static str);

// Checked in order, first match wins. Keep more specific rows first.
const ENTRIES: &[Entry] = &[
    // Proteins
    (&["egg", "eggs", "scrambled", "fried egg", "omelette", "omelet", "frittata"], "1F95A"),
    (&["shrimp", "prawn", "scallop", "lobster", "crab"], "1F990"),
    (&["salmon", "tuna", "tilapia", "cod", "halibut", "mahi", "trout", "catfish", "fish"], "1F41F"),
    (&["sushi", "sashimi", "nigiri", "maki"], "1F363"),
    (&["bacon", "ham", "prosciutto"], "1F953"),
    (&["beef", "steak", "burger", "brisket", "meatball", "meatloaf", "ground beef"], "1F969"),
    (&["rib", "ribs", "pork chop", "pulled pork", "pork"], "1F356"),
    (&["chicken", "turkey", "poultry", "hen", "wing", "nugget"], "1F357"),
    // Grains & bread
    (&["pizza"], "1F355"),
    (&["spaghetti", "linguine", "fettuccine", "penne", "rigatoni", "lasagna", "pasta"], "1F35D"),
    (&["ramen", "lo mein", "chow mein", "pad thai", "noodle", "udon", "soba"], "1F35C"),
    (&["curry", "tikka", "masala", "biryani", "korma"], "1F35B"),
    (&["fried rice", "rice"], "1F35A"),
    (&["taco", "tacos"], "1F32E"),
    (&["burrito", "quesadilla", "enchilada", "wrap", "fajita"], "1F32F"),
    (&["hot dog", "hotdog", "corndog"], "1F32D"),
    (&["sandwich", "sub", "hoagie", "panini", "club", "blt", "reuben"], "1F96A"),
    (&["waffle"], "1F9C7"),
    (&["pancake", "flapjack"], "1F95E"),
    (&["croissant"], "1F950"),
    (&["bagel"], "1F96F"),
    (&["toast", "bread", "roll", "bun", "biscuit", "muffin", "focaccia", "ciabatta"], "1F35E"),
    (&["oat", "oatmeal", "granola", "cereal", "porridge"], "1F963"),
    // Vegetables
    (&["salad", "coleslaw", "slaw"], "1F957"),
    (&["broccoli"], "1F966"),
    (&["corn", "maize"], "1F33D"),
    (&["carrot"], "1F955"),
    (&["tomato"], "1F345"),
    (&["lettuce", "spinach", "kale", "arugula", "chard", "greens"], "1F96C"),
    (&["pepper", "bell pepper", "capsicum"], "1FAD1"),
    (&["onion", "scallion", "shallot"], "1F9C5"),
    (&["mushroom", "fungi"], "1F344"),
    // Fruits
    (&["blueberry", "blueberries"], "1FAD0"),
    (&["strawberry", "strawberries"], "1F353"),
    (&["apple"], "1F34E"),
    (&["banana"], "1F34C"),
    (&["orange", "clementine", "mandarin", "tangerine"], "1F34A"),
    (&["grape", "grapes"], "1F347"),
    (&["watermelon"], "1F349"),
    (&["peach"], "1F351"),
    // Dairy
    (&["ice cream", "gelato", "sorbet", "frozen yogurt", "froyo"], "1F366"),
    (&["cheese", "cheddar", "mozzarella", "parmesan", "brie", "gouda"], "1F9C0"),
    (&["butter", "margarine"], "1F9C8"),
    (&["yogurt", "yoghurt"], "1F95B"),
    (&["milk", "dairy"], "1F95B"),
    // Desserts
    (&["cookie", "cookies", "biscotti"], "1F36A"),
    (&["donut", "doughnut"], "1F369"),
    (&["cupcake"], "1F9C1"),
    (&["pie", "cobbler", "crumble", "tart"], "1F967"),
    (&["birthday cake", "layer cake"], "1F382"),
    (&["cake", "brownie", "cheesecake"], "1F370"),
    (&["chocolate", "fudge", "truffle"], "1F36B"),
    // Drinks
    (&["coffee", "espresso", "latte", "cappuccino", "mocha", "americano"], "2615"),
    (&["tea", "chai", "matcha", "herbal"], "1F375"),
    (&["juice", "lemonade", "cider", "smoothie"], "1F9C3"),
    (&["soda", "pop", "cola", "limeade", "agua fresca"], "1F964"),
    // Soups & stews
    (
        &["soup", "stew", "chili", "chowder", "bisque", "broth", "gumbo", "minestrone", "ramen"],
        "1F372",
    ),
];

static KEYWORD_RULES: LazyLock<RuleTable> = LazyLock::new(|| {
    let table = RuleTable::from_entries(ENTRIES).expect("Invalid OpenMoji keyword table");
    tracing::debug!("Compiled {} OpenMoji keyword rules", table.len());
    table
});

/// Ordered keyword table for OpenMoji food icons
pub fn keyword_rules() -> &'static RuleTable {
    &KEYWORD_RULES
}
