//! Built-in species registrations.

use canopy_types::Category;

use crate::catalog::{Catalog, SpeciesDescriptor};

// ══════════════════════════════════════════════════════════════════════════════
// Registration helpers
// ══════════════════════════════════════════════════════════════════════════════

fn add(
    catalog: &mut Catalog,
    name: &str,
    category: Category,
    survival_rate: f64,
    emoji: &str,
    description: &str,
) {
    let descriptor = SpeciesDescriptor {
        name: name.to_string(),
        category,
        description: description.to_string(),
        emoji: emoji.to_string(),
        survival_rate,
    };
    debug_assert!(
        descriptor.validate().is_ok(),
        "invalid built-in species '{name}'"
    );
    debug_assert!(!catalog.contains(name), "duplicate built-in species '{name}'");
    catalog.upsert(descriptor);
}

// ══════════════════════════════════════════════════════════════════════════════
// Species (34)
// ══════════════════════════════════════════════════════════════════════════════

pub(crate) fn register_builtin(catalog: &mut Catalog) {
    use Category::*;

    add(catalog, "Banyan", LargeTrees, 0.70, "🌳",
        "Sacred tree with extensive canopy, excellent for large spaces");
    add(catalog, "Gulmohar", FloweringTrees, 0.80, "🌺",
        "Beautiful orange-red flowers, perfect for ornamental purposes");
    add(catalog, "Neem", MedicinalTrees, 0.85, "🌿",
        "Natural pesticide and medicinal properties, drought resistant");
    add(catalog, "Peepal", LargeTrees, 0.75, "🍃",
        "Sacred fig tree, releases oxygen at night");
    add(catalog, "Mango", FruitTrees, 0.80, "🥭",
        "King of fruits, provides delicious mangoes and shade");
    add(catalog, "Teak", TimberTrees, 0.70, "🌲",
        "Premium hardwood, excellent for furniture and construction");
    add(catalog, "Jamun", FruitTrees, 0.75, "🫐",
        "Purple fruit with medicinal benefits, good for diabetics");
    add(catalog, "Arjun", MedicinalTrees, 0.70, "🌴",
        "Medicinal bark, good for heart health and riverbank plantation");
    add(catalog, "Sal", TimberTrees, 0.65, "🌱",
        "Sacred tree, valuable timber, good for construction");
    add(catalog, "Sissoo", TimberTrees, 0.70, "🌾",
        "Rosewood species, excellent for furniture and musical instruments");
    add(catalog, "Kadam", FloweringTrees, 0.75, "🌸",
        "Fragrant flowers, culturally significant, good shade tree");
    add(catalog, "Mahua", EconomicTrees, 0.65, "🌼",
        "Flowers used for food and beverages, tribal economic importance");
    add(catalog, "Yellow Bell", FloweringTrees, 0.80, "🔔",
        "Bright yellow trumpet-shaped flowers, ornamental tree");
    add(catalog, "Casuarina", FastGrowing, 0.75, "🌲",
        "Wind-resistant, good for coastal areas and erosion control");
    add(catalog, "Coconut", PalmTrees, 0.85, "🥥",
        "Versatile palm providing coconuts, oil, and fiber");
    add(catalog, "Kadamba", LargeTrees, 0.70, "🌻",
        "Round fragrant flowers, fast growing, good for landscaping");
    add(catalog, "Acacia", FastGrowing, 0.75, "🌵",
        "Drought tolerant, good for arid regions and soil improvement");
    add(catalog, "Indian Laburnum", FloweringTrees, 0.80, "🌕",
        "Golden yellow flowers, medicinal properties, ornamental");
    add(catalog, "Tamarind", FruitTrees, 0.75, "🍯",
        "Tangy fruit, used in cooking, long-lived shade tree");
    add(catalog, "Indian Gooseberry", MedicinalTrees, 0.80, "🍈",
        "Rich in Vitamin C, high medicinal value, hardy tree");
    add(catalog, "Eucalyptus", FastGrowing, 0.65, "🌿",
        "Rapid growth, aromatic leaves, good for paper industry");
    add(catalog, "Karanja", EconomicTrees, 0.70, "🌰",
        "Biodiesel production, coastal plantation, medicinal uses");
    add(catalog, "Jackfruit", FruitTrees, 0.70, "🍍",
        "Large nutritious fruit, timber value, sustainable food source");
    add(catalog, "Fig", FruitTrees, 0.75, "🍇",
        "Sweet figs, good for birds, religious significance");
    add(catalog, "Palmyra Palm", PalmTrees, 0.70, "🌴",
        "Traditional palm, sap used for jaggery, drought resistant");
    add(catalog, "Silk Cotton", LargeTrees, 0.70, "☁️",
        "Cotton-like fibers, large buttressed trunk, deciduous");
    add(catalog, "Indian Coral Tree", FloweringTrees, 0.75, "🪸",
        "Bright red flowers, used for living fences, nitrogen fixing");
    add(catalog, "Bael", MedicinalTrees, 0.80, "🍊",
        "Sacred fruit, digestive properties, drought tolerant");
    add(catalog, "Flame of the Forest", FloweringTrees, 0.70, "🔥",
        "Spectacular orange-red flowers, state flower of several states");
    add(catalog, "Pongamia", EconomicTrees, 0.70, "🌰",
        "Biodiesel tree, coastal areas, nitrogen fixing legume");
    add(catalog, "Amla", MedicinalTrees, 0.80, "🍈",
        "High Vitamin C content, Ayurvedic medicine, hardy tree");
    add(catalog, "Anjeer", FruitTrees, 0.75, "🍇",
        "Nutritious figs, Mediterranean climate adaptation");
    add(catalog, "Borassus", PalmTrees, 0.70, "🌴",
        "Toddy palm, multiple economic uses, drought resistant");
    add(catalog, "Semal", LargeTrees, 0.70, "☁️",
        "Silk cotton tree, large thorny trunk, kapok fiber production");
}
