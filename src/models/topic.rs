/// An exam subject offered on the setup screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topic {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

pub const TOPICS: &[Topic] = &[
    Topic {
        id: "level1_full",
        name: "REET Level 1 (Common)",
        description: "लेवल 1 के लिए सम्पूर्ण पाठ्यक्रम - राजस्थान GK, गणित, पर्यावरण, मनोविज्ञान।",
    },
    Topic {
        id: "l2_math",
        name: "Level 2: Maths (गणित)",
        description: "गणित विषय (Maths) - अंकगणित, बीजगणित, ज्यामिति और शिक्षण विधियां।",
    },
    Topic {
        id: "l2_science",
        name: "Level 2: Science (विज्ञान)",
        description: "विज्ञान विषय (Science) - भौतिकी, रसायन, जीव विज्ञान और शिक्षण विधियां।",
    },
    Topic {
        id: "l2_sst",
        name: "Level 2: Social Studies",
        description: "सामाजिक अध्ययन (SST) - इतिहास, भूगोल, राजनीति विज्ञान।",
    },
    Topic {
        id: "l2_hindi",
        name: "Level 2: Hindi (हिंदी)",
        description: "हिंदी विषय - व्याकरण, शिक्षण विधियां और साहित्य।",
    },
    Topic {
        id: "l2_english",
        name: "Level 2: English",
        description: "English Subject - Grammar, Vocabulary, and Teaching Methods.",
    },
    Topic {
        id: "l2_sanskrit",
        name: "Level 2: Sanskrit (संस्कृत)",
        description: "संस्कृत विषय - व्याकरण और शिक्षण विधियां।",
    },
    Topic {
        id: "raj_gk",
        name: "Rajasthan GK Special",
        description: "राजस्थान का भूगोल, इतिहास, कला-संस्कृति और राजस्थानी भाषा।",
    },
    Topic {
        id: "psychology_it",
        name: "Psychology & IT",
        description: "शैक्षिक मनोविज्ञान, शिक्षण विधियां और सूचना तकनीकी (IT)।",
    },
];

/// Look a topic up by id or display name (case-insensitive).
pub fn find_topic(key: &str) -> Option<&'static Topic> {
    let key = key.trim();
    TOPICS
        .iter()
        .find(|t| t.id.eq_ignore_ascii_case(key) || t.name.eq_ignore_ascii_case(key))
}
