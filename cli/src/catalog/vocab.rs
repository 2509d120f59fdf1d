// Genre-independent vocabulary shared by the assemblers.

pub const PRODUCTION_REVERB: &[&str] = &[
    "lush hall reverb",
    "tight room ambience",
    "spring reverb tails",
    "dry close-miked sound",
    "shimmering plate reverb",
    "cavernous echo",
];

pub const PRODUCTION_TEXTURE: &[&str] = &[
    "warm analog saturation",
    "crisp digital clarity",
    "gritty tape texture",
    "velvety smooth tone",
    "dusty vinyl grain",
    "glassy high end",
];

pub const PRODUCTION_STEREO: &[&str] = &[
    "wide stereo image",
    "centered mono punch",
    "immersive panoramic mix",
    "intimate narrow stereo field",
    "swirling stereo movement",
];

pub const PRODUCTION_DYNAMIC: &[&str] = &[
    "punchy compression",
    "open natural dynamics",
    "heavy sidechain pumping",
    "gentle bus glue",
    "loud modern mastering",
];

pub const BLENDED_PRODUCTION: &[&str] = &[
    "genre-blending production, contrasting textures, wide stereo fusion, dynamic transitions",
    "hybrid arrangement, layered sonic palette, balanced stereo blend, evolving dynamics",
    "crossover production, textural collage, panoramic mix, punchy contrast",
    "fusion mixdown, blended timbres, spacious stereo field, controlled intensity",
    "eclectic production, stitched textures, immersive stereo image, shifting energy",
];

pub const GENERIC_RECORDING: &[&str] = &[
    "recorded in a professional studio",
    "captured live off the floor",
    "produced in a home studio",
    "intimate bedroom recording",
    "recorded to analog tape",
    "mixed on a vintage console",
];

pub const PRIORITY_MOODS: &[(&str, &str)] = &[
    ("melancholy", "melancholic"),
    ("melancholic", "melancholic"),
    ("sad", "sorrowful"),
    ("happy", "joyful"),
    ("joyful", "joyful"),
    ("dark", "dark"),
    ("angry", "furious"),
    ("calm", "calm"),
    ("peaceful", "peaceful"),
    ("dreamy", "dreamy"),
    ("nostalgic", "nostalgic"),
    ("romantic", "romantic"),
    ("energetic", "energetic"),
    ("mysterious", "mysterious"),
    ("hopeful", "hopeful"),
    ("uplifting", "uplifting"),
    ("tense", "tense"),
    ("playful", "playful"),
    ("lonely", "lonely"),
    ("epic", "epic"),
];

pub const THEME_KEYWORDS: &[(&str, &str)] = &[
    ("rain", "rain-soaked ambience"),
    ("storm", "electrified storm ambience"),
    ("night", "late-night atmosphere"),
    ("midnight", "midnight city glow"),
    ("noir", "noir mystery"),
    ("forest", "woodland ambience"),
    ("ocean", "rolling ocean spray"),
    ("sea", "seaside breeze"),
    ("space", "cosmic expanse"),
    ("stars", "starlit sky"),
    ("desert", "sun-baked desert shimmer"),
    ("city", "urban nightscape"),
    ("summer", "sun-drenched summer haze"),
    ("winter", "frosty winter stillness"),
    ("love", "love story"),
    ("heartbreak", "heartbreak narrative"),
    ("road", "open-road journey"),
    ("dream", "dreamlike haze"),
    ("memory", "faded memories"),
    ("party", "party energy"),
];

pub const TEXTURE_TAGS: &[&str] = &[
    "layered textures",
    "organic warmth",
    "airy top end",
    "rich low end",
    "subtle tape hiss",
    "grainy character",
    "polished sheen",
    "hazy atmosphere",
];

pub const VOCAL_TAGS: &[&str] = &[
    "expressive vocal delivery",
    "doubled vocal hooks",
    "breathy vocal tone",
    "stacked backing harmonies",
    "ad-lib vocal flourishes",
];

pub const SPATIAL_TAGS: &[&str] = &[
    "deep spatial depth",
    "distant echoes",
    "close intimate placement",
    "expansive soundstage",
    "ping-pong delays",
];

pub const HARMONIC_TAGS: &[&str] = &[
    "rich extended chords",
    "modal harmony",
    "chromatic passing tones",
    "lush voice leading",
    "unexpected key changes",
];

pub const DYNAMIC_TAGS: &[&str] = &[
    "slow-building crescendo",
    "explosive drops",
    "quiet-loud contrast",
    "steady rising intensity",
    "breathing dynamics",
];

pub const TEMPORAL_TAGS: &[&str] = &[
    "syncopated groove",
    "swung rhythm",
    "driving pulse",
    "half-time feel",
    "polyrhythmic layers",
];

pub const HARMONIC_COMPLEXITY_KEYWORDS: &[&str] = &[
    "complex",
    "jazzy",
    "chromatic",
    "modal",
    "progressive",
    "sophisticated",
    "extended chords",
    "reharmonized",
];

pub const GENERIC_PROGRESSIONS: &[&str] = &["I-V-vi-IV", "vi-IV-I-V", "I-IV-V"];

pub const GENERIC_VOCALS: &[&str] = &["expressive lead vocals", "instrumental"];

pub const KEY_ROOTS: &[&str] = &["C", "C#", "D", "Eb", "E", "F", "F#", "G", "Ab", "A", "Bb", "B"];

pub const MINOR_MOODS: &[&str] = &[
    "dark",
    "melancholic",
    "sorrowful",
    "mournful",
    "brooding",
    "menacing",
    "moody",
    "lonely",
    "tense",
    "bittersweet",
    "furious",
    "crushing",
    "weary",
    "yearning",
];

pub const MAJOR_MOODS: &[&str] = &[
    "joyful",
    "uplifting",
    "bright",
    "carefree",
    "sunny",
    "festive",
    "playful",
    "triumphant",
    "euphoric",
    "hopeful",
    "feel-good",
];
