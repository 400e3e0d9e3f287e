use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathwayLevel {
    pub level: u32,
    pub objectives: Vec<String>,
}

/// The ordered learning objectives of one curriculum zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pathway {
    pub zone_id: String,
    pub label: String,
    pub levels: Vec<PathwayLevel>,
}

struct PathwaySeed {
    zone_id: &'static str,
    label: &'static str,
    /// Objectives for levels 1, 2, 3, ...
    levels: &'static [&'static [&'static str]],
}

impl Pathway {
    /// The built-in pathway for `zone_id`, served when the tutor backend
    /// cannot provide one.
    pub fn fallback(zone_id: &str) -> Option<Self> {
        FALLBACK_PATHWAYS
            .iter()
            .find(|seed| seed.zone_id == zone_id)
            .map(|seed| Self {
                zone_id: seed.zone_id.to_string(),
                label: seed.label.to_string(),
                levels: seed
                    .levels
                    .iter()
                    .zip(1..)
                    .map(|(objectives, level)| PathwayLevel {
                        level,
                        objectives: objectives.iter().map(|o| o.to_string()).collect(),
                    })
                    .collect(),
            })
    }
}

static FALLBACK_PATHWAYS: &[PathwaySeed] = &[
    PathwaySeed {
        zone_id: "compression",
        label: "Pratyāhāras",
        levels: &[
            &["Define pratyāhāra in own words", "Explain why Pāṇini invented them"],
            &["Name the 14 Śivasūtras in order (at least first 5)"],
            &["Given a pratyāhāra (e.g. ac), list all phonemes it includes"],
            &["Given a phoneme (e.g. i), name which pratyāhāras it belongs to"],
            &["Explain the iK pratyāhāra and its role in sandhi rules (conceptual only)"],
        ],
    },
    PathwaySeed {
        zone_id: "phonetics",
        label: "Phoneme Grid",
        levels: &[
            &["Name the 5 places of articulation in Sanskrit with one example each"],
            &["Pronounce all 16 vowels correctly"],
            &["Classify any given consonant by place AND class"],
            &["Distinguish short/long vowels by ear and in writing"],
            &["Pronounce a 5-phoneme Sanskrit sequence read cold"],
            &["Identify and write individual Devanagari characters (vowels and consonants)"],
            &["Write Sanskrit words in Devanagari from dictation or transcription"],
            &["Write simple Sanskrit sentences in Devanagari from dictation"],
        ],
    },
    PathwaySeed {
        zone_id: "gradation",
        label: "Guṇa / Vṛddhi",
        levels: &[
            &["State the guṇa and vṛddhi of any of the 4 base vowels (i, u, ṛ, a)"],
            &["Identify guṇa or vṛddhi strengthening in a given word form"],
            &["Explain why guṇa applies in a specific grammatical context"],
            &["Given root √budh (u), derive its guṇa-grade stem"],
            &["Given 5 mixed forms, identify each as base / guṇa / vṛddhi grade"],
        ],
    },
    PathwaySeed {
        zone_id: "sandhi",
        label: "Sandhi",
        levels: &[
            &["Apply savarṇa-dīrgha sandhi: ca + āgacchati → cāgacchati"],
            &["Apply guṇa sandhi: upa + indra → upendra"],
            &["Apply visarga sandhi in 3 different environments"],
            &["Given a sandhi'd string, reverse-engineer the original two words (sandhi-viccheda)"],
            &["Read aloud a 3-word Sanskrit phrase with correct sandhi pronunciation"],
            &["Explain which pratyāhāra class determines a given sandhi rule"],
        ],
    },
    PathwaySeed {
        zone_id: "roots",
        label: "Dhātus",
        levels: &[
            &["Define dhātu in own words", "Give one root and one derived form"],
            &["Identify the root in गच्छति (gacchati)", "Name the root"],
            &["Produce all 3 persons of singular present tense of √gam (class 1)"],
            &["Produce present tense 3rd person singular of √bhū, √vad, √pat"],
            &["Produce 3 valid forms from √bhū across different persons/numbers"],
            &["Identify the gaṇa (class) of 5 given roots from a mixed list"],
            &["Produce 5 forms from √kṛ across present tense, all 3 persons singular"],
        ],
    },
    PathwaySeed {
        zone_id: "words",
        label: "Words",
        levels: &[
            &["Give the Sanskrit word for 10 basic nouns (body: karaḥ, netraṃ, etc.)"],
            &["Identify the stem class (a/ā/i/u-stem) of 8 given nouns"],
            &["Give the gender of 10 common nouns"],
            &["Translate 5 simple Sanskrit noun phrases (nominative only) into English"],
            &["Recall 20 high-frequency words from spaced-repetition deck without hint"],
            &["Decline basic consonant-stem nouns (dental and nasal stems)"],
            &["Use Sanskrit numerals 1–100 in context"],
        ],
    },
    PathwaySeed {
        zone_id: "suffixes",
        label: "Suffixes",
        levels: &[
            &["Define kṛt and taddhita", "Give one example each"],
            &["Given √gam, derive: agent (gamaka/gantṛ), action (gamana), gerundive (gantavya)"],
            &["Given a kṛt-derived form (e.g. bodhana), identify the root and suffix"],
            &["Derive abstract noun using tva and tā from 3 adjectives"],
            &["Identify the suffix type (agent/action/adjective/abstract) for 8 derived forms"],
            &["Identify and produce participles: present active (ant-), past passive (ta-), future passive (tavya/anīya)"],
            &["Identify perfect active participles (ant- from liṭ)"],
            &["Form and recognize desideratives (icchāya-pratyaya — want to V)"],
        ],
    },
    PathwaySeed {
        zone_id: "karakas",
        label: "Kārakas",
        levels: &[
            &["Name all 6 kārakas and their approximate English equivalents"],
            &["Given a simple Sanskrit sentence, identify the kartṛ and karman"],
            &["Apply correct case ending for a-stem masculine noun in nominative, accusative, instrumental"],
            &["Apply all 8 cases to a single a-stem masculine noun (rāma)"],
            &["In a given sentence, identify the kāraka of every noun and justify the case used"],
            &["Translate 3 simple sentences from English → Sanskrit using correct case endings"],
        ],
    },
    PathwaySeed {
        zone_id: "verbs",
        label: "Verbs",
        levels: &[
            &["Conjugate √gam in full present tense (laṭ) — all 3 persons, 3 numbers"],
            &["Produce imperfect (laṅ) 3rd person singular of √bhū, √gam, √kṛ"],
            &["Produce imperative (loṭ) 2nd person singular of √vad, √gam"],
            &["Distinguish parasmaipada vs ātmanepada for √labh, √yaj"],
            &["Parse any given verb form: root / tense / person / number / voice"],
            &["Produce a grammatical 5-word Sanskrit sentence using a conjugated verb"],
            &["Produce 5 forms from √kṛ across different tenses/moods"],
            &["Produce passive voice (karmaṇi prayoga) 3rd sg and 3rd pl forms"],
            &["Produce aorist (luṅ) forms for √gam, √bhū"],
        ],
    },
    PathwaySeed {
        zone_id: "compounds",
        label: "Compounds",
        levels: &[
            &["Name all 6 samāsa types with one example each"],
            &["Given a tatpuruṣa compound, provide vigraha (resolution)"],
            &["Identify the compound type of 6 mixed compounds"],
            &["Form a dvandva from two given nouns with correct sandhi"],
            &["Identify and resolve a bahuvrīhi compound in a sentence context"],
            &["Construct a tatpuruṣa and a karmadhāraya from given elements, with vigraha"],
            &["Analyse a 3-member compound: split all junctions, apply vigraha, state compound type"],
        ],
    },
    PathwaySeed {
        zone_id: "reading",
        label: "Reading",
        levels: &[
            &["Navigate a Sanskrit dictionary (Apte/Monier-Williams) to find words by root"],
            &["Read an unseen Sanskrit passage with dictionary aid and identify key grammatical structures"],
            &["Translate a short Epic passage (śloka) with dictionary aid"],
            &["Read and comprehend a graded passage from Hitopadeśa or similar"],
            &["Read a passage from Mahabharata or Bhagavad Gita with dictionary aid"],
        ],
    },
];
