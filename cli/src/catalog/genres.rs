use super::{BpmRange, GenreDefinition, InstrumentGroup};
use crate::types::TagCategoryWeights;

const fn group(
    name: &'static str,
    options: &'static [&'static str],
    min: u8,
    max: u8,
    probability: f64,
    order: u8,
) -> InstrumentGroup {
    InstrumentGroup { name, options, min, max, probability, order }
}

pub const PRIORITY_GENRES: &[&str] = &[
    "jazz",
    "rock",
    "pop",
    "hiphop",
    "electronic",
    "classical",
    "ambient",
    "metal",
    "punk",
    "folk",
    "blues",
    "country",
    "rnb",
    "soul",
    "funk",
    "reggae",
    "latin",
];

pub const ALIASES: &[(&str, &str)] = &[
    ("hip-hop", "hiphop"),
    ("rap", "hiphop"),
    ("boom bap", "hiphop"),
    ("trap", "hiphop"),
    ("r&b", "rnb"),
    ("rhythm and blues", "rnb"),
    ("neo soul", "soul"),
    ("motown", "soul"),
    ("drum and bass", "dnb"),
    ("drum n bass", "dnb"),
    ("jungle", "dnb"),
    ("lo-fi", "lofi"),
    ("chillhop", "lofi"),
    ("study beats", "lofi"),
    ("bossa nova", "latin"),
    ("salsa", "latin"),
    ("reggaeton", "latin"),
    ("retrowave", "synthwave"),
    ("outrun", "synthwave"),
    ("edm", "electronic"),
    ("electronica", "electronic"),
    ("idm", "electronic"),
    ("film score", "cinematic"),
    ("soundtrack", "cinematic"),
    ("orchestral", "classical"),
    ("symphonic", "classical"),
    ("baroque", "classical"),
    ("bluegrass", "country"),
    ("americana", "folk"),
    ("singer-songwriter", "folk"),
    ("grunge", "rock"),
    ("shoegaze", "rock"),
    ("thrash", "metal"),
    ("hardcore", "punk"),
    ("ska", "reggae"),
    ("dub", "reggae"),
    ("bebop", "jazz"),
    ("big band", "jazz"),
    ("deep house", "house"),
    ("acid house", "house"),
    ("minimal techno", "techno"),
    ("drone", "ambient"),
    ("new age", "ambient"),
    ("nu disco", "disco"),
];

pub const MOOD_PHRASES: &[(&str, &str)] = &[
    ("chill", "lofi"),
    ("study", "lofi"),
    ("focus", "lofi"),
    ("relaxing", "ambient"),
    ("calm", "ambient"),
    ("peaceful", "ambient"),
    ("meditative", "ambient"),
    ("dreamy", "ambient"),
    ("sad", "blues"),
    ("melancholy", "blues"),
    ("lonely", "blues"),
    ("heartbreak", "country"),
    ("romantic", "rnb"),
    ("sensual", "rnb"),
    ("party", "house"),
    ("dancing", "house"),
    ("club", "techno"),
    ("energetic", "electronic"),
    ("hype", "hiphop"),
    ("swagger", "hiphop"),
    ("angry", "metal"),
    ("aggressive", "metal"),
    ("rebellious", "punk"),
    ("epic", "cinematic"),
    ("heroic", "cinematic"),
    ("nostalgic", "synthwave"),
    ("retro", "synthwave"),
    ("groovy", "funk"),
    ("uplifting", "pop"),
    ("happy", "pop"),
    ("sunny", "reggae"),
    ("spiritual", "soul"),
    ("rustic", "folk"),
    ("elegant", "classical"),
];

pub const GENRES: &[GenreDefinition] = &[
    GenreDefinition {
        id: "ambient",
        display_name: "Ambient",
        keywords: &["ambient", "soundscape", "atmospheric"],
        groups: &[
            group(
                "pads",
                &["evolving synth pads", "granular textures", "glass pads"],
                1,
                2,
                1.0,
                0,
            ),
            group("keys", &["glacial piano", "soft mallets", "celesta"], 1, 1, 0.7, 1),
            group("strings", &["bowed cello drones", "distant string swells"], 1, 1, 0.5, 2),
            group("bass", &["deep sine bass", "sub swells"], 1, 1, 0.4, 3),
        ],
        exclusions: &[("deep sine bass", "sub swells")],
        bpm: BpmRange::new(50, 80, 65),
        moods: &["serene", "ethereal", "meditative", "weightless", "contemplative", "vast"],
        recording: &[
            "recorded in a cavernous reverb chamber",
            "captured with long-tail tape delays",
            "layered in a quiet home studio at dawn",
        ],
        progressions: &["I-IV drone", "suspended Isus2-IVsus2", "modal i-bVII"],
        vocals: &["instrumental", "wordless breathy vocals", "distant choir pads"],
        weights: Some(TagCategoryWeights::new(0.2, 0.8, 0.35, 0.25, 0.45)),
    },
    GenreDefinition {
        id: "blues",
        display_name: "Blues",
        keywords: &["blues", "delta blues"],
        groups: &[
            group(
                "guitar",
                &["slide guitar", "overdriven electric guitar", "resonator guitar"],
                1,
                1,
                1.0,
                0,
            ),
            group("keys", &["barrelhouse piano", "hammond organ"], 1, 1, 0.6, 1),
            group("harp", &["bluesy harmonica"], 1, 1, 0.5, 2),
            group(
                "rhythm",
                &["shuffle drum kit", "walking electric bass", "upright bass"],
                1,
                2,
                1.0,
                3,
            ),
        ],
        exclusions: &[("walking electric bass", "upright bass")],
        bpm: BpmRange::new(60, 120, 84),
        moods: &["soulful", "weary", "smoky", "gritty", "mournful", "raw"],
        recording: &[
            "recorded live in a juke joint",
            "cut to tape in one take",
            "captured through a cranked tube amp",
        ],
        progressions: &["12-bar I-IV-V", "quick-change I-IV-I-V", "minor i-iv-v"],
        vocals: &["gravelly male vocals", "powerful female vocals", "call-and-response vocals"],
        weights: None,
    },
    GenreDefinition {
        id: "cinematic",
        display_name: "Cinematic",
        keywords: &["cinematic", "epic score", "trailer"],
        groups: &[
            group("strings", &["string ensemble", "soaring violins", "low cellos"], 1, 2, 1.0, 0),
            group("brass", &["french horns", "brass section", "trombone swells"], 1, 1, 0.8, 1),
            group("percussion", &["taiko drums", "orchestral percussion", "timpani"], 1, 1, 0.8, 2),
            group("choir", &["epic choir", "boys choir"], 1, 1, 0.4, 3),
        ],
        exclusions: &[("epic choir", "boys choir")],
        bpm: BpmRange::new(70, 140, 100),
        moods: &["epic", "heroic", "tense", "triumphant", "brooding", "majestic"],
        recording: &[
            "recorded on a scoring stage",
            "captured with a decca tree in a concert hall",
            "mixed for wide theatrical playback",
        ],
        progressions: &["i-bVI-bIII-bVII", "epic i-bVI-bVII", "I-V-vi-IV"],
        vocals: &["instrumental", "wordless choir", "solo soprano"],
        weights: Some(TagCategoryWeights::new(0.2, 0.7, 0.5, 0.75, 0.4)),
    },
    GenreDefinition {
        id: "classical",
        display_name: "Classical",
        keywords: &["classical", "sonata", "concerto", "chamber"],
        groups: &[
            group("strings", &["string quartet", "solo violin", "cello", "viola"], 1, 2, 1.0, 0),
            group("keys", &["grand piano", "harpsichord"], 1, 1, 0.7, 1),
            group("winds", &["flute", "oboe", "clarinet", "bassoon"], 1, 2, 0.6, 2),
        ],
        exclusions: &[("grand piano", "harpsichord")],
        bpm: BpmRange::new(60, 140, 92),
        moods: &["elegant", "graceful", "stately", "tender", "dramatic", "refined"],
        recording: &[
            "recorded in a resonant concert hall",
            "captured with a spaced pair of ribbon mics",
            "performed in an intimate chamber room",
        ],
        progressions: &["I-IV-V-I cadence", "I-vi-ii-V", "i-iv-V-i"],
        vocals: &["instrumental", "operatic soprano", "chamber choir"],
        weights: Some(TagCategoryWeights::new(0.15, 0.6, 0.65, 0.6, 0.3)),
    },
    GenreDefinition {
        id: "country",
        display_name: "Country",
        keywords: &["country", "honky tonk", "nashville"],
        groups: &[
            group("guitar", &["acoustic guitar", "telecaster twang", "pedal steel"], 1, 2, 1.0, 0),
            group("strings", &["fiddle", "banjo", "mandolin"], 1, 1, 0.7, 1),
            group("rhythm", &["brushed drum kit", "electric bass", "upright bass"], 1, 2, 1.0, 2),
        ],
        exclusions: &[("electric bass", "upright bass")],
        bpm: BpmRange::new(70, 130, 100),
        moods: &["heartfelt", "nostalgic", "rowdy", "wistful", "warm", "homespun"],
        recording: &[
            "recorded in a Nashville studio",
            "captured live at a roadside honky tonk",
            "tracked warm and close in a wooden room",
        ],
        progressions: &["I-IV-V", "I-V-vi-IV", "I-IV-I-V"],
        vocals: &["twangy male vocals", "warm female vocals", "close harmony duet"],
        weights: None,
    },
    GenreDefinition {
        id: "disco",
        display_name: "Disco",
        keywords: &["disco"],
        groups: &[
            group("rhythm", &["four-on-the-floor kick", "open hi-hats", "congas"], 1, 2, 1.0, 0),
            group("bass", &["octave bassline", "slap bass"], 1, 1, 1.0, 1),
            group("strings", &["lush string section", "string stabs"], 1, 1, 0.7, 2),
            group("guitar", &["chicken-scratch guitar", "wah guitar"], 1, 1, 0.6, 3),
        ],
        exclusions: &[("octave bassline", "slap bass")],
        bpm: BpmRange::new(110, 130, 120),
        moods: &["euphoric", "glamorous", "playful", "glittering", "feel-good", "flirty"],
        recording: &[
            "recorded at a 1978 studio session",
            "mixed for a mirrorball dancefloor",
            "captured with plate reverb and tape saturation",
        ],
        progressions: &["i-IV vamp", "ii-V vamp", "I-vi-ii-V"],
        vocals: &["diva vocals", "falsetto hooks", "group chant vocals"],
        weights: Some(TagCategoryWeights::new(0.6, 0.4, 0.3, 0.5, 0.45)),
    },
    GenreDefinition {
        id: "dnb",
        display_name: "Drum and Bass",
        keywords: &["dnb", "liquid dnb", "neurofunk"],
        groups: &[
            group(
                "drums",
                &["amen breakbeat", "rolling breakbeats", "chopped breaks"],
                1,
                1,
                1.0,
                0,
            ),
            group("bass", &["reese bass", "sub bass", "neuro bass"], 1, 1, 1.0, 1),
            group("synths", &["atmospheric pads", "stab chords", "rave piano"], 1, 2, 0.8, 2),
        ],
        exclusions: &[("reese bass", "neuro bass")],
        bpm: BpmRange::new(160, 180, 174),
        moods: &["frantic", "rolling", "futuristic", "intense", "liquid", "urgent"],
        recording: &[
            "mixed for a warehouse sound system",
            "bounced through a heavy bus compressor",
            "produced for late-night pirate radio",
        ],
        progressions: &["i-VI-VII", "i-iv", "minor one-chord vamp"],
        vocals: &["instrumental", "MC toasting", "soulful vocal samples"],
        weights: Some(TagCategoryWeights::new(0.3, 0.45, 0.25, 0.55, 0.6)),
    },
    GenreDefinition {
        id: "electronic",
        display_name: "Electronic",
        keywords: &["electronic", "electro"],
        groups: &[
            group(
                "synths",
                &["analog synth lead", "arpeggiated synths", "supersaw chords"],
                1,
                2,
                1.0,
                0,
            ),
            group("drums", &["punchy drum machine", "glitchy percussion"], 1, 1, 1.0, 1),
            group("bass", &["rolling bass synth", "acid bassline"], 1, 1, 0.8, 2),
            group("fx", &["vocoder", "white noise risers"], 1, 1, 0.4, 3),
        ],
        exclusions: &[("rolling bass synth", "acid bassline")],
        bpm: BpmRange::new(110, 140, 124),
        moods: &["energetic", "hypnotic", "futuristic", "pulsing", "euphoric", "neon"],
        recording: &[
            "produced entirely in the box",
            "sequenced on hardware synths",
            "mixed for a festival main stage",
        ],
        progressions: &["i-VI-III-VII", "i-VII-VI-VII", "I-V-vi-IV"],
        vocals: &["instrumental", "processed vocal chops", "airy female topline"],
        weights: Some(TagCategoryWeights::new(0.35, 0.5, 0.3, 0.5, 0.55)),
    },
    GenreDefinition {
        id: "folk",
        display_name: "Folk",
        keywords: &["folk", "acoustic folk"],
        groups: &[
            group(
                "guitar",
                &["fingerpicked acoustic guitar", "nylon guitar", "twelve-string guitar"],
                1,
                1,
                1.0,
                0,
            ),
            group("strings", &["fiddle", "mandolin", "banjo"], 1, 1, 0.7, 1),
            group("color", &["harmonica", "accordion", "tin whistle"], 1, 1, 0.5, 2),
            group("rhythm", &["upright bass", "stomp box"], 1, 1, 0.6, 3),
        ],
        exclusions: &[("harmonica", "accordion")],
        bpm: BpmRange::new(70, 120, 92),
        moods: &["earthy", "intimate", "wistful", "hopeful", "rustic", "tender"],
        recording: &[
            "recorded around a single microphone",
            "captured on a porch at dusk",
            "tracked live in a wooden cabin",
        ],
        progressions: &["I-V-vi-IV", "I-IV-I-V", "vi-IV-I-V"],
        vocals: &["earnest male vocals", "stacked folk harmonies", "gentle female vocals"],
        weights: Some(TagCategoryWeights::new(0.55, 0.4, 0.3, 0.3, 0.25)),
    },
    GenreDefinition {
        id: "funk",
        display_name: "Funk",
        keywords: &["funk", "funky"],
        groups: &[
            group("bass", &["slap bass", "fingerstyle electric bass"], 1, 1, 1.0, 0),
            group("guitar", &["chicken-scratch guitar", "wah guitar"], 1, 1, 1.0, 1),
            group("horns", &["tight horn section", "tenor sax"], 1, 1, 0.6, 2),
            group("keys", &["clavinet", "rhodes electric piano"], 1, 1, 0.6, 3),
        ],
        exclusions: &[("slap bass", "fingerstyle electric bass")],
        bpm: BpmRange::new(90, 120, 104),
        moods: &["groovy", "playful", "sweaty", "confident", "swaggering", "tight"],
        recording: &[
            "recorded live with the whole band in one room",
            "cut on a sixteen-track tape machine",
            "captured with punchy close-miked drums",
        ],
        progressions: &["i7 one-chord vamp", "I7-IV7", "ii7-V7 vamp"],
        vocals: &["gritty shouted vocals", "falsetto hooks", "group chant vocals"],
        weights: Some(TagCategoryWeights::new(0.5, 0.35, 0.4, 0.45, 0.55)),
    },
    GenreDefinition {
        id: "hiphop",
        display_name: "Hip Hop",
        keywords: &["hiphop", "hip hop"],
        groups: &[
            group(
                "drums",
                &["boom-bap drums", "808 drum machine", "crisp sampled claps"],
                1,
                2,
                1.0,
                0,
            ),
            group("bass", &["808 bass", "deep sub bass"], 1, 1, 1.0, 1),
            group(
                "samples",
                &["chopped soul sample", "dusty vinyl keys", "jazzy horn sample"],
                1,
                1,
                0.8,
                2,
            ),
        ],
        exclusions: &[("808 bass", "deep sub bass")],
        bpm: BpmRange::new(80, 100, 90),
        moods: &["confident", "gritty", "laid-back", "defiant", "streetwise", "moody"],
        recording: &[
            "produced on an MPC in a basement studio",
            "sampled from dusty vinyl",
            "mixed loud for car speakers",
        ],
        progressions: &["i-iv loop", "minor two-chord loop", "i-VI-iv"],
        vocals: &["rhythmic rap vocals", "melodic rap vocals", "sung hook with rap verses"],
        weights: Some(TagCategoryWeights::new(0.75, 0.3, 0.25, 0.4, 0.35)),
    },
    GenreDefinition {
        id: "house",
        display_name: "House",
        keywords: &["house"],
        groups: &[
            group(
                "drums",
                &["four-on-the-floor kick", "shuffled hi-hats", "909 claps"],
                1,
                2,
                1.0,
                0,
            ),
            group("bass", &["rubbery bassline", "organ bass"], 1, 1, 1.0, 1),
            group("keys", &["piano stabs", "organ chords", "filtered chords"], 1, 1, 0.8, 2),
        ],
        exclusions: &[("rubbery bassline", "organ bass")],
        bpm: BpmRange::new(118, 128, 124),
        moods: &["uplifting", "soulful", "hypnotic", "joyous", "sweaty", "late-night"],
        recording: &[
            "mixed for a packed basement club",
            "produced on a 909 and a sampler",
            "captured with warm analog summing",
        ],
        progressions: &["ii-V vamp", "i-VII-VI", "minor 7 chord stabs"],
        vocals: &["gospel-tinged diva vocals", "chopped vocal loops", "spoken word vocal"],
        weights: None,
    },
    GenreDefinition {
        id: "jazz",
        display_name: "Jazz",
        keywords: &["jazz", "swing"],
        groups: &[
            group(
                "rhythm",
                &["brushed drum kit", "ride cymbal", "upright bass", "electric bass"],
                2,
                2,
                1.0,
                0,
            ),
            group("keys", &["grand piano", "rhodes electric piano"], 1, 1, 1.0, 1),
            group("horns", &["tenor saxophone", "muted trumpet", "trombone"], 1, 2, 0.8, 2),
            group("guitar", &["hollow-body jazz guitar"], 1, 1, 0.4, 3),
        ],
        exclusions: &[("upright bass", "electric bass"), ("brushed drum kit", "ride cymbal")],
        bpm: BpmRange::new(80, 160, 120),
        moods: &["smoky", "sophisticated", "mellow", "late-night", "swinging", "intimate"],
        recording: &[
            "recorded live at a smoky jazz club",
            "captured in one take on analog tape",
            "tracked with the band facing each other",
        ],
        progressions: &["ii-V-I", "I-vi-ii-V turnaround", "rhythm changes"],
        vocals: &["instrumental", "sultry crooner vocals", "scat vocals"],
        weights: Some(TagCategoryWeights::new(0.35, 0.45, 0.8, 0.45, 0.4)),
    },
    GenreDefinition {
        id: "latin",
        display_name: "Latin",
        keywords: &["latin", "cumbia", "samba"],
        groups: &[
            group("percussion", &["congas", "timbales", "bongos", "shakers"], 1, 2, 1.0, 0),
            group("guitar", &["nylon guitar", "tres guitar"], 1, 1, 0.8, 1),
            group("horns", &["salsa horn section", "trumpet lead"], 1, 1, 0.6, 2),
            group("bass", &["tumbao bass"], 1, 1, 0.8, 3),
        ],
        exclusions: &[("salsa horn section", "trumpet lead")],
        bpm: BpmRange::new(90, 130, 100),
        moods: &["sensual", "fiery", "sunny", "festive", "passionate", "breezy"],
        recording: &[
            "recorded live in Havana",
            "captured with a full percussion ensemble",
            "tracked warm in a tiled studio",
        ],
        progressions: &["i-iv-V7", "ii-V-I bossa changes", "I-IV-V montuno"],
        vocals: &[
            "passionate spanish vocals",
            "breathy portuguese vocals",
            "coro call-and-response",
        ],
        weights: None,
    },
    GenreDefinition {
        id: "lofi",
        display_name: "Lo-Fi",
        keywords: &["lofi"],
        groups: &[
            group("keys", &["dusty rhodes", "detuned piano", "muted jazz guitar"], 1, 1, 1.0, 0),
            group("drums", &["lazy swung drum loop", "brushed snare"], 1, 1, 1.0, 1),
            group("bass", &["mellow upright bass", "warm sub bass"], 1, 1, 0.8, 2),
            group("texture", &["vinyl crackle", "tape wobble"], 1, 1, 0.6, 3),
        ],
        exclusions: &[("mellow upright bass", "warm sub bass")],
        bpm: BpmRange::new(70, 90, 80),
        moods: &["mellow", "nostalgic", "cozy", "drowsy", "bittersweet", "rainy"],
        recording: &[
            "recorded on a worn cassette four-track",
            "bounced through a dusty sampler",
            "made late at night in a bedroom studio",
        ],
        progressions: &["ii-V-I with 9ths", "IVmaj7-iii7-vi7", "i7-iv7"],
        vocals: &["instrumental", "hummed vocal chops", "muffled vocal sample"],
        weights: Some(TagCategoryWeights::new(0.2, 0.5, 0.5, 0.2, 0.45)),
    },
    GenreDefinition {
        id: "metal",
        display_name: "Metal",
        keywords: &["metal", "heavy metal", "doom"],
        groups: &[
            group(
                "guitar",
                &["down-tuned rhythm guitars", "shredding lead guitar", "distorted guitar"],
                1,
                2,
                1.0,
                0,
            ),
            group("drums", &["double-kick drums", "blast beats"], 1, 1, 1.0, 1),
            group("bass", &["growling bass", "distorted bass"], 1, 1, 1.0, 2),
        ],
        exclusions: &[("growling bass", "distorted bass")],
        bpm: BpmRange::new(100, 180, 140),
        moods: &["aggressive", "crushing", "menacing", "furious", "dark", "relentless"],
        recording: &[
            "recorded with a wall of stacked amps",
            "tracked with triggered drums",
            "mixed loud and compressed",
        ],
        progressions: &["i-bII power chords", "i-bVI-bVII", "chromatic riff"],
        vocals: &["harsh growled vocals", "soaring clean vocals", "screamed vocals"],
        weights: Some(TagCategoryWeights::new(0.55, 0.3, 0.3, 0.65, 0.4)),
    },
    GenreDefinition {
        id: "pop",
        display_name: "Pop",
        keywords: &["pop"],
        groups: &[
            group("keys", &["bright piano", "shimmering synth pads"], 1, 1, 1.0, 0),
            group("drums", &["punchy pop drums", "claps and snaps"], 1, 1, 1.0, 1),
            group("bass", &["synth bass", "electric bass"], 1, 1, 1.0, 2),
            group("guitar", &["clean electric guitar", "acoustic strums"], 1, 1, 0.5, 3),
        ],
        exclusions: &[("synth bass", "electric bass")],
        bpm: BpmRange::new(95, 130, 116),
        moods: &["uplifting", "catchy", "bright", "romantic", "carefree", "bittersweet"],
        recording: &[
            "polished radio-ready studio production",
            "mixed for streaming playlists",
            "produced with crisp modern vocal chains",
        ],
        progressions: &["I-V-vi-IV", "vi-IV-I-V", "I-vi-IV-V"],
        vocals: &["catchy female vocals", "smooth male vocals", "layered vocal harmonies"],
        weights: Some(TagCategoryWeights::new(0.8, 0.35, 0.3, 0.45, 0.3)),
    },
    GenreDefinition {
        id: "punk",
        display_name: "Punk",
        keywords: &["punk", "pop punk"],
        groups: &[
            group("guitar", &["buzzsaw guitars", "overdriven power chords"], 1, 1, 1.0, 0),
            group("drums", &["fast snare-driven drums"], 1, 1, 1.0, 1),
            group("bass", &["driving pick bass"], 1, 1, 1.0, 2),
        ],
        exclusions: &[],
        bpm: BpmRange::new(160, 200, 180),
        moods: &["rebellious", "raw", "reckless", "snotty", "urgent", "defiant"],
        recording: &[
            "recorded fast and loose in a garage",
            "captured live at a sweaty basement show",
            "tracked in one afternoon on cheap gear",
        ],
        progressions: &["I-IV-V power chords", "I-V-vi-IV", "I-bVII-IV"],
        vocals: &["shouted gang vocals", "snarling lead vocals", "bratty melodic vocals"],
        weights: Some(TagCategoryWeights::new(0.6, 0.2, 0.15, 0.5, 0.5)),
    },
    GenreDefinition {
        id: "reggae",
        display_name: "Reggae",
        keywords: &["reggae", "roots reggae"],
        groups: &[
            group("rhythm", &["one-drop drums", "skank guitar"], 2, 2, 1.0, 0),
            group("bass", &["deep dub bass"], 1, 1, 1.0, 1),
            group("keys", &["bubble organ", "melodica"], 1, 1, 0.6, 2),
            group("horns", &["roots horn section"], 1, 1, 0.4, 3),
        ],
        exclusions: &[],
        bpm: BpmRange::new(60, 90, 76),
        moods: &["laid-back", "sunny", "conscious", "uplifting", "breezy", "hazy"],
        recording: &[
            "recorded at a Kingston studio",
            "mixed with spring reverb dub sends",
            "tracked live off the floor",
        ],
        progressions: &["I-IV skank", "i-VII", "I-V-IV"],
        vocals: &["conscious roots vocals", "toasting deejay vocals", "harmony trio"],
        weights: None,
    },
    GenreDefinition {
        id: "rnb",
        display_name: "R&B",
        keywords: &["rnb", "contemporary rnb"],
        groups: &[
            group("keys", &["silky rhodes", "lush synth pads"], 1, 1, 1.0, 0),
            group("drums", &["crisp programmed drums", "finger snaps"], 1, 1, 1.0, 1),
            group("bass", &["sub bass", "smooth electric bass"], 1, 1, 1.0, 2),
            group("guitar", &["clean chorus guitar"], 1, 1, 0.4, 3),
        ],
        exclusions: &[("sub bass", "smooth electric bass")],
        bpm: BpmRange::new(60, 100, 80),
        moods: &["sensual", "romantic", "silky", "yearning", "late-night", "intimate"],
        recording: &[
            "polished modern studio production",
            "recorded with lush stacked vocal takes",
            "mixed warm and close",
        ],
        progressions: &["ii9-V13-Imaj9", "IVmaj7-iii7-vi7", "i9-iv9"],
        vocals: &["silky female vocals", "falsetto male vocals", "layered vocal runs"],
        weights: Some(TagCategoryWeights::new(0.85, 0.4, 0.45, 0.35, 0.3)),
    },
    GenreDefinition {
        id: "rock",
        display_name: "Rock",
        keywords: &["rock", "rock and roll", "alt rock"],
        groups: &[
            group(
                "guitar",
                &["crunchy rhythm guitars", "soaring lead guitar", "distorted guitar"],
                1,
                2,
                1.0,
                0,
            ),
            group("drums", &["live drum kit"], 1, 1, 1.0, 1),
            group("bass", &["electric bass"], 1, 1, 1.0, 2),
            group("keys", &["hammond organ", "piano"], 1, 1, 0.3, 3),
        ],
        exclusions: &[],
        bpm: BpmRange::new(100, 160, 126),
        moods: &["anthemic", "driving", "gritty", "rebellious", "energetic", "raw"],
        recording: &[
            "recorded live in a big room",
            "tracked through vintage tube amps",
            "mixed for arena playback",
        ],
        progressions: &["I-bVII-IV", "I-IV-V", "vi-IV-I-V"],
        vocals: &["raspy rock vocals", "anthemic lead vocals", "gang vocals"],
        weights: Some(TagCategoryWeights::new(0.6, 0.35, 0.3, 0.55, 0.35)),
    },
    GenreDefinition {
        id: "soul",
        display_name: "Soul",
        keywords: &["soul", "soulful"],
        groups: &[
            group("keys", &["hammond organ", "wurlitzer"], 1, 1, 1.0, 0),
            group("rhythm", &["tight pocket drums", "melodic electric bass"], 2, 2, 1.0, 1),
            group("horns", &["soul horn section", "baritone sax"], 1, 1, 0.7, 2),
            group("strings", &["sweet string section"], 1, 1, 0.3, 3),
        ],
        exclusions: &[],
        bpm: BpmRange::new(70, 110, 90),
        moods: &["soulful", "heartfelt", "warm", "yearning", "joyful", "spiritual"],
        recording: &[
            "recorded in a classic soul studio",
            "captured live to two-inch tape",
            "tracked with the rhythm section in one room",
        ],
        progressions: &["I-vi-IV-V", "ii-V-I", "I-IV gospel vamp"],
        vocals: &["powerful soul vocals", "gospel backing choir", "raspy male vocals"],
        weights: None,
    },
    GenreDefinition {
        id: "synthwave",
        display_name: "Synthwave",
        keywords: &["synthwave", "vaporwave"],
        groups: &[
            group(
                "synths",
                &["analog polysynth", "arpeggiated synths", "brass synth stabs"],
                1,
                2,
                1.0,
                0,
            ),
            group("drums", &["gated reverb drums", "linn drum machine"], 1, 1, 1.0, 1),
            group("bass", &["pulsing synth bass"], 1, 1, 1.0, 2),
            group("lead", &["neon lead synth", "saxophone solo"], 1, 1, 0.5, 3),
        ],
        exclusions: &[("gated reverb drums", "linn drum machine")],
        bpm: BpmRange::new(80, 118, 100),
        moods: &["nostalgic", "neon", "dreamy", "nocturnal", "cinematic", "bittersweet"],
        recording: &[
            "produced on vintage analog synths",
            "mixed with chorus-soaked 80s sheen",
            "bounced to VHS-warm tape",
        ],
        progressions: &["i-VI-III-VII", "vi-IV-I-V", "i-VII-VI"],
        vocals: &["instrumental", "dreamy reverb vocals", "vocoder vocals"],
        weights: Some(TagCategoryWeights::new(0.3, 0.6, 0.3, 0.4, 0.45)),
    },
    GenreDefinition {
        id: "techno",
        display_name: "Techno",
        keywords: &["techno"],
        groups: &[
            group(
                "drums",
                &["pounding kick", "909 hi-hats", "industrial percussion"],
                1,
                2,
                1.0,
                0,
            ),
            group(
                "synths",
                &["acid 303 line", "hypnotic synth stab", "modular sequence"],
                1,
                1,
                1.0,
                1,
            ),
            group("texture", &["warehouse noise", "metallic drones"], 1, 1, 0.5, 2),
        ],
        exclusions: &[],
        bpm: BpmRange::new(125, 150, 132),
        moods: &["hypnotic", "dark", "relentless", "industrial", "driving", "mechanical"],
        recording: &[
            "recorded live on hardware in a warehouse",
            "mixed for a concrete club sound system",
            "sequenced on modular gear",
        ],
        progressions: &["one-chord drone", "i-bII", "minor stab loop"],
        vocals: &["instrumental", "spoken word samples", "distant vocal shouts"],
        weights: Some(TagCategoryWeights::new(0.15, 0.55, 0.2, 0.55, 0.65)),
    },
];
