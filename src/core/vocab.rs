//! Static catalog vocabulary: detection keywords, variation pools, and
//! prompt templates for each supported product category.
//!
//! Tables are immutable process-wide data. Pool sizes matter only insofar as
//! they must be at least as large as the per-axis sample counts used by
//! `core::variation`.

/// Word pools one category draws variation hints from.
///
/// Each axis is sampled without replacement, so every slice must hold more
/// entries than the sample count for its axis.
pub struct VocabPool
{
    /// Writing angles; exactly one is chosen per variation
    pub angles: &'static [&'static str],
    /// Rooms/places the product lives in
    pub settings: &'static [&'static str],
    /// Construction materials and finishes
    pub materials: &'static [&'static str],
    /// Durability and performance claims
    pub qualities: &'static [&'static str],
    /// Style adjectives
    pub style_words: &'static [&'static str],
    /// Concrete product features
    pub features: &'static [&'static str],
    /// Size and proportion phrasing
    pub dimensions: &'static [&'static str],
}

pub const WALL_CLOCK_KEYWORDS: &[&str] = &[
    "clock",
    "wall clock",
    "timepiece",
    "hour hand",
    "minute hand",
    "quartz",
    "pendulum",
    "analog",
    "dial",
    "roman numeral",
    "sweep movement",
    "ticking",
    "clock face",
    "clock hands",
];

pub const WATER_BOTTLE_KEYWORDS: &[&str] = &[
    "water bottle",
    "bottle",
    "tumbler",
    "hydration",
    "flask",
    "drink bottle",
    "sports bottle",
    "insulated bottle",
    "bpa free",
    "stainless steel bottle",
    "reusable bottle",
    "thermos",
    "beverage container",
    "sippy",
    "straw lid",
];

pub const LAMP_SHADE_KEYWORDS: &[&str] = &[
    "lamp shade",
    "lampshade",
    "shade",
    "lamp",
    "light shade",
    "lighting",
    "pendant shade",
    "table lamp",
    "floor lamp",
    "drum shade",
    "cone shade",
    "bell shade",
    "fabric shade",
    "linen shade",
    "silk shade",
];

pub const WALL_CLOCK_POOL: VocabPool = VocabPool {
    angles: &[
        "Describe the clock focusing on its design style and how it complements room decor.",
        "Describe the clock focusing on its materials and build quality.",
        "Describe the clock focusing on its movement type and timekeeping reliability.",
        "Describe the clock focusing on where it looks best — living rooms, offices, kitchens.",
        "Describe the clock focusing on its size and how it anchors a wall.",
        "Describe the clock focusing on its readability and dial design.",
        "Describe the clock as a statement piece for interior design.",
        "Describe the clock emphasizing gift-worthiness and presentation.",
        "Describe the clock from the perspective of a home decorator.",
        "Describe the clock focusing on easy installation and hanging.",
        "Describe the clock highlighting its finish and frame detailing.",
        "Describe the clock as a practical yet decorative home accent.",
    ],
    settings: &[
        "living rooms",
        "home offices",
        "kitchens",
        "bedrooms",
        "entryways",
        "dining rooms",
        "hallways",
        "lobbies",
        "waiting rooms",
        "classrooms",
        "cafés",
        "boutique shops",
        "hotel rooms",
        "loft apartments",
        "studios",
        "conference rooms",
        "coworking spaces",
        "libraries",
        "nurseries",
        "dens",
        "farmhouse kitchens",
        "gallery walls",
        "accent walls",
        "mantels",
        "above-fireplace spots",
    ],
    materials: &[
        "solid wood frame",
        "metal housing",
        "brushed aluminium case",
        "moulded plastic body",
        "tempered glass lens",
        "MDF backing",
        "wrought iron frame",
        "bamboo surround",
        "distressed wood finish",
        "powder-coated steel",
        "polished chrome bezel",
        "reclaimed wood face",
        "ceramic dial plate",
        "resin composite body",
        "hand-painted wooden frame",
        "galvanized metal trim",
        "natural oak frame",
        "matte black steel case",
        "antique brass finish",
        "whitewashed pine frame",
    ],
    qualities: &[
        "silent sweep movement for noise-free rooms",
        "accurate quartz timekeeping",
        "built to last with durable construction",
        "precision-engineered movement",
        "designed for years of reliable use",
        "quality craftsmanship throughout",
        "fade-resistant printed dial",
        "vibration-resistant wall mount",
        "consistent timekeeping with minimal drift",
        "long-lasting battery life",
    ],
    style_words: &[
        "minimalist",
        "farmhouse",
        "industrial",
        "mid-century modern",
        "vintage",
        "rustic",
        "contemporary",
        "Scandinavian",
        "art deco",
        "retro",
        "bohemian",
        "coastal",
        "traditional",
        "modern geometric",
        "shabby chic",
        "oversized statement",
        "classic round",
        "roman numeral",
        "clean-line",
        "gallery-style",
        "sunburst",
        "skeleton",
        "pendulum-style",
        "schoolhouse",
    ],
    features: &[
        "silent sweep second hand",
        "large easy-to-read numerals",
        "built-in hanging hook",
        "protective glass lens cover",
        "non-ticking quartz movement",
        "glow-in-the-dark hands",
        "temperature and humidity display",
        "date window",
        "Roman numeral dial",
        "Arabic numeral markings",
        "open-face skeleton design",
        "integrated LED backlight",
        "dual time zone display",
        "pendulum mechanism",
        "battery-powered operation",
    ],
    dimensions: &[
        "large statement size ideal for open walls",
        "compact design for smaller rooms",
        "oversized dial visible from across the room",
        "standard 12-inch diameter",
        "slim profile sits flush against the wall",
        "lightweight for easy hanging",
    ],
};

pub const WATER_BOTTLE_POOL: VocabPool = VocabPool {
    angles: &[
        "Describe the bottle focusing on its insulation and temperature retention.",
        "Describe the bottle focusing on its materials and safety certifications.",
        "Describe the bottle focusing on its portability and on-the-go convenience.",
        "Describe the bottle focusing on its lid design and leak-proof features.",
        "Describe the bottle focusing on its capacity and hydration goals.",
        "Describe the bottle focusing on its durability for outdoor and sport use.",
        "Describe the bottle focusing on its eco-friendly reusable design.",
        "Describe the bottle as a gym and fitness essential.",
        "Describe the bottle from the perspective of a daily commuter.",
        "Describe the bottle emphasizing ease of cleaning and maintenance.",
        "Describe the bottle highlighting its finish and colour options.",
        "Describe the bottle as a practical gift for health-conscious people.",
    ],
    settings: &[
        "gyms",
        "offices",
        "hiking trails",
        "yoga studios",
        "school classrooms",
        "commuter bags",
        "bike rides",
        "camping trips",
        "road trips",
        "desks",
        "outdoor festivals",
        "beach days",
        "running routes",
        "crossfit boxes",
        "travel carry-ons",
        "meal prep stations",
        "sports sidelines",
        "picnics",
        "home workouts",
        "warehouse floors",
        "workshop benches",
        "playgrounds",
        "marathon events",
        "backpacking trips",
        "daily errands",
    ],
    materials: &[
        "18/8 stainless steel",
        "BPA-free Tritan plastic",
        "double-wall vacuum insulation",
        "food-grade silicone seal",
        "powder-coated exterior",
        "copper-lined insulation",
        "borosilicate glass body",
        "recycled plastic construction",
        "medical-grade stainless",
        "rubberised grip coating",
        "bamboo lid accent",
        "shatter-resistant polymer",
        "electro-polished interior",
        "non-toxic coating",
        "FDA-approved materials",
        "scratch-resistant finish",
        "sweat-proof outer wall",
        "ergonomic soft-touch grip",
    ],
    qualities: &[
        "keeps drinks cold for 24 hours",
        "keeps beverages hot for 12 hours",
        "built for daily abuse and repeated drops",
        "designed for active lifestyles",
        "leak-proof seal you can trust in any bag",
        "engineered for one-handed drinking",
        "condensation-free exterior",
        "dishwasher-safe construction",
        "odour-resistant interior lining",
        "rust-proof and stain-resistant",
    ],
    style_words: &[
        "sleek",
        "sporty",
        "minimalist",
        "matte finish",
        "gradient colour",
        "urban",
        "outdoor-ready",
        "slim-profile",
        "wide-mouth",
        "classic",
        "bold colour-pop",
        "earth-toned",
        "monochrome",
        "textured grip",
        "pastel",
        "metallic sheen",
        "frosted",
        "transparent",
        "ombré",
    ],
    features: &[
        "flip-top straw lid",
        "wide mouth for ice cubes",
        "carry loop handle",
        "one-click open mechanism",
        "built-in fruit infuser",
        "measurement markings",
        "removable strainer",
        "carabiner clip attachment",
        "collapsible design",
        "dual-lid system — sport cap and screw top",
        "integrated tea filter",
        "spout cover for hygiene",
        "non-slip base pad",
        "finger grip indentations",
        "time marker hydration tracker",
        "compatible with car cup holders",
    ],
    dimensions: &[
        "fits standard car cup holders",
        "compact enough for side bag pockets",
        "large capacity for all-day hydration",
        "slim profile for gym bag storage",
        "lightweight at under 300 grams",
        "tall design maximises volume without bulk",
    ],
};

pub const LAMP_SHADE_POOL: VocabPool = VocabPool {
    angles: &[
        "Describe the lamp shade focusing on the quality of light it produces.",
        "Describe the lamp shade focusing on its fabric and texture.",
        "Describe the lamp shade focusing on how it transforms a room's ambiance.",
        "Describe the lamp shade focusing on its shape and silhouette.",
        "Describe the lamp shade focusing on colour and how it coordinates with decor.",
        "Describe the lamp shade focusing on its fit and compatibility with lamp bases.",
        "Describe the lamp shade focusing on its construction and lining.",
        "Describe the lamp shade as an interior design statement piece.",
        "Describe the lamp shade from the perspective of a home stager.",
        "Describe the lamp shade emphasizing easy installation and bulb compatibility.",
        "Describe the lamp shade highlighting its proportions and scale.",
        "Describe the lamp shade as a cost-effective room refresh accessory.",
    ],
    settings: &[
        "living rooms",
        "bedrooms",
        "reading nooks",
        "bedside tables",
        "home offices",
        "dining areas",
        "hotel rooms",
        "boutique lobbies",
        "nurseries",
        "guest rooms",
        "hallway console tables",
        "accent corners",
        "window seats",
        "study desks",
        "spa treatment rooms",
        "restaurant tables",
        "cocktail lounges",
        "dressing rooms",
        "libraries",
        "loft apartments",
        "cottage interiors",
        "farmhouse kitchens",
        "gallery spaces",
        "foyers",
        "cosy dens",
    ],
    materials: &[
        "linen fabric",
        "cotton drum shade",
        "silk shade panel",
        "textured burlap",
        "pleated polyester",
        "handmade paper",
        "woven rattan shell",
        "frosted glass",
        "brass-trimmed ring",
        "nickel-finished spider fitter",
        "UNO fitter ring",
        "polished chrome hardware",
        "self-trim fabric edge",
        "styrene backing",
        "PVC lining for shape retention",
        "natural jute wrapping",
        "velvet exterior",
        "recycled fabric blend",
        "organza overlay",
        "linen-look polyester",
    ],
    qualities: &[
        "casts a warm, even glow across the room",
        "eliminates harsh overhead glare",
        "diffuses light softly for comfortable ambiance",
        "built to retain shape over time",
        "designed for years of use without sagging",
        "professional-grade construction",
        "colour-fast fabric resists fading",
        "flame-retardant material for safety",
        "dust-resistant surface for easy upkeep",
        "maintains crisp edges wash after wash",
    ],
    style_words: &[
        "drum",
        "empire",
        "bell",
        "coolie",
        "rectangular",
        "tapered",
        "pleated",
        "scalloped",
        "conical",
        "cylindrical",
        "mid-century",
        "Scandinavian",
        "coastal",
        "bohemian",
        "art deco",
        "classic neutral",
        "bold accent",
        "textured weave",
        "translucent",
        "opaque",
        "two-tone",
        "monochrome",
        "patterned",
        "geometric print",
    ],
    features: &[
        "spider fitter for harp-style bases",
        "UNO fitter for socket-ring bases",
        "clip-on attachment for chandelier bulbs",
        "washer fitter with reducer ring",
        "compatible with E26/E27 standard bases",
        "suitable for LED and CFL bulbs",
        "removable diffuser panel",
        "reversible inside-out design",
        "adjustable tilt mechanism",
        "integrated reflector lining",
        "snap-on attachment system",
        "heat-resistant inner lining",
        "top and bottom trim detailing",
        "reinforced wire frame",
    ],
    dimensions: &[
        "standard size fits most table lamps",
        "oversized for floor lamp bases",
        "mini size ideal for chandelier arms",
        "proportioned for bedside lamps",
        "slim profile for narrow console tables",
        "wide diameter for maximum light spread",
    ],
};

/// Prompt templates. Placeholders `{title}`, `{body}` and `{variation_hint}`
/// are substituted by the orchestrator before the request is issued.
pub const WALL_CLOCK_PROMPT: &str = r#"You are an SEO copywriter for a brand that sells wall clocks — decorative, functional, and design-forward timepieces for homes, offices, and commercial spaces. You write like someone who genuinely understands interior design and home decor.

Your task: Generate an SEO Title and SEO Description for a Shopify product.

STRICT RULES — follow every single one:

SEO TITLE RULES:
1. The SEO Title MUST be the exact product title provided. Copy it exactly. Do NOT change, add, or rephrase any words.

SEO DESCRIPTION RULES:
2. Write 1-3 natural, descriptive sentences about the product. This is NOT a keyword list. Do NOT use comma-separated keywords.
3. Use the primary keyword (the product type, e.g. "wall clock", "decorative timepiece", "modern wall clock") once, naturally, in the first sentence.
4. Each product MUST have a unique primary modifier. Pick the most relevant one for this specific product:
   - Style (e.g. minimalist, farmhouse, industrial, mid-century modern)
   - Material or finish (e.g. solid wood frame, brushed metal, matte black)
   - Size (e.g. oversized 24-inch, compact 10-inch)
   - Setting (e.g. living rooms, offices, kitchens)
5. After the primary keyword, cover whichever of these are relevant and mentioned in the product info:
   - Materials (frame, dial, glass, movement type)
   - Movement details (silent sweep, quartz, non-ticking)
   - Readability (large numerals, Roman numerals, clean dial)
   - Installation (wall-mount, hanging hook, battery type)
   - Settings and rooms where it fits best
6. The description MUST be under 320 characters total.
7. The description MUST NOT contain any HTML tags, quotes, newlines, or special formatting.
8. Do NOT invent features or details not found in the product info. Only describe what is actually mentioned.
9. Do NOT include pricing, availability, or promotional language.
10. Write naturally and specifically about this exact product. Vary your sentence structure and word choice.
11. Do NOT start with the brand name. Start directly with what the product is.

{variation_hint}

EXAMPLE INPUT:
Product Title: Nordic Minimalist Silent Wall Clock 12 Inch
Product Description: Simple Scandinavian design wall clock with silent sweep movement. 12-inch diameter, wooden frame with clean white dial. Battery operated, easy wall mount.

EXAMPLE OUTPUT:
SEO Title: Nordic Minimalist Silent Wall Clock 12 Inch
SEO Description: Scandinavian-style wall clock with silent sweep movement and clean white dial in a natural wooden frame. The 12-inch diameter suits bedrooms, offices and living rooms without ticking noise. Battery operated with easy wall mount.

NOW GENERATE FOR THIS PRODUCT:
Product Title: {title}
Product Description: {body}

Respond with ONLY these two lines, nothing else:
SEO Title: <exact product title>
SEO Description: <1-3 descriptive sentences, under 320 characters>"#;

pub const WATER_BOTTLE_PROMPT: &str = r#"You are an SEO copywriter for a brand that sells water bottles — reusable, insulated, and purpose-built hydration products for active and everyday use. You write like someone who actually tests gear for fitness, commuting, and outdoor adventures.

Your task: Generate an SEO Title and SEO Description for a Shopify product.

STRICT RULES — follow every single one:

SEO TITLE RULES:
1. The SEO Title MUST be the exact product title provided. Copy it exactly. Do NOT change, add, or rephrase any words.

SEO DESCRIPTION RULES:
2. Write 1-3 natural, descriptive sentences about the product. This is NOT a keyword list. Do NOT use comma-separated keywords.
3. Use the primary keyword (the product type, e.g. "insulated water bottle", "stainless steel bottle", "reusable sports bottle") once, naturally, in the first sentence.
4. Each product MUST have a unique primary modifier. Pick the most relevant one for this specific product:
   - Material (e.g. 18/8 stainless steel, BPA-free Tritan, borosilicate glass)
   - Insulation (e.g. double-wall vacuum, copper-lined)
   - Capacity (e.g. 500ml, 750ml, 1 litre)
   - Use case (e.g. gym, hiking, office, commuting)
   - Lid type (e.g. flip-top straw, wide-mouth screw, sport cap)
5. After the primary keyword, cover whichever of these are relevant and mentioned in the product info:
   - Materials and safety certifications (BPA-free, food-grade)
   - Temperature retention (hours cold/hot)
   - Lid and drinking mechanism
   - Portability (cup-holder fit, carry loop, weight)
   - Cleaning and maintenance
   - Durability and drop resistance
6. The description MUST be under 320 characters total.
7. The description MUST NOT contain any HTML tags, quotes, newlines, or special formatting.
8. Do NOT invent features or details not found in the product info. Only describe what is actually mentioned.
9. Do NOT include pricing, availability, or promotional language.
10. Write naturally and specifically about this exact product. Vary your sentence structure and word choice.
11. Do NOT start with the brand name. Start directly with what the product is.

{variation_hint}

EXAMPLE INPUT:
Product Title: Arctic Pro Insulated Water Bottle 750ml Matte Black
Product Description: Double-wall vacuum insulated stainless steel water bottle. Keeps drinks cold 24 hours, hot 12 hours. BPA-free, powder-coated finish, wide mouth opening for ice cubes. Leak-proof screw cap with carry loop.

EXAMPLE OUTPUT:
SEO Title: Arctic Pro Insulated Water Bottle 750ml Matte Black
SEO Description: Double-wall vacuum insulated stainless steel water bottle that keeps drinks cold for 24 hours and hot for 12. Wide mouth fits ice cubes easily, and the leak-proof screw cap has a carry loop for on-the-go use. BPA-free with a durable powder-coated finish.

NOW GENERATE FOR THIS PRODUCT:
Product Title: {title}
Product Description: {body}

Respond with ONLY these two lines, nothing else:
SEO Title: <exact product title>
SEO Description: <1-3 descriptive sentences, under 320 characters>"#;

pub const LAMP_SHADE_PROMPT: &str = r#"You are an SEO copywriter for a brand that sells lamp shades — fabric, paper, and structured shades for table lamps, floor lamps, pendants, and chandeliers. You write like an interior designer who knows how lighting transforms a space.

Your task: Generate an SEO Title and SEO Description for a Shopify product.

STRICT RULES — follow every single one:

SEO TITLE RULES:
1. The SEO Title MUST be the exact product title provided. Copy it exactly. Do NOT change, add, or rephrase any words.

SEO DESCRIPTION RULES:
2. Write 1-3 natural, descriptive sentences about the product. This is NOT a keyword list. Do NOT use comma-separated keywords.
3. Use the primary keyword (the product type, e.g. "drum lamp shade", "linen table lamp shade", "fabric pendant shade") once, naturally, in the first sentence.
4. Each product MUST have a unique primary modifier. Pick the most relevant one for this specific product:
   - Shape (e.g. drum, empire, bell, coolie, tapered)
   - Material (e.g. linen, silk, cotton, burlap, rattan)
   - Colour or pattern (e.g. cream, navy, geometric print)
   - Fitter type (e.g. spider, UNO, clip-on, washer)
   - Lamp type (e.g. table lamp, floor lamp, pendant, chandelier)
5. After the primary keyword, cover whichever of these are relevant and mentioned in the product info:
   - Material and fabric weight
   - Light quality (warm glow, diffused, directional)
   - Fitter compatibility and installation
   - Dimensions and proportions
   - Room suitability
   - Construction (lining, frame, trim)
6. The description MUST be under 320 characters total.
7. The description MUST NOT contain any HTML tags, quotes, newlines, or special formatting.
8. Do NOT invent features or details not found in the product info. Only describe what is actually mentioned.
9. Do NOT include pricing, availability, or promotional language.
10. Write naturally and specifically about this exact product. Vary your sentence structure and word choice.
11. Do NOT start with the brand name. Start directly with what the product is.

{variation_hint}

EXAMPLE INPUT:
Product Title: Classic Linen Drum Shade Natural 14 Inch
Product Description: Natural linen drum lamp shade with spider fitter. 14-inch diameter, 10-inch height. White styrene lining for even light diffusion. Compatible with standard E26 harp-style bases.

EXAMPLE OUTPUT:
SEO Title: Classic Linen Drum Shade Natural 14 Inch
SEO Description: Natural linen drum lamp shade with a clean, modern silhouette and white styrene lining for warm, even light diffusion. The 14-inch diameter fits standard E26 harp-style bases via the included spider fitter. Ideal for living rooms and bedrooms.

NOW GENERATE FOR THIS PRODUCT:
Product Title: {title}
Product Description: {body}

Respond with ONLY these two lines, nothing else:
SEO Title: <exact product title>
SEO Description: <1-3 descriptive sentences, under 320 characters>"#;

/// System instruction sent with every chat request.
pub const SYSTEM_INSTRUCTION: &str = "You are an SEO copywriter. Follow instructions exactly. \
     Output only what is asked, nothing else.";
