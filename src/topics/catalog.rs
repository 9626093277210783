//! The built-in topic catalog and its lookup functions.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::coach::Difficulty;

use super::{DebateTopic, KeyPoints, TopicCategory};

/// Static array of all built-in debate topics.
pub static DEBATE_TOPICS: &[DebateTopic] = &[
    // ==========================================================================
    // EDUCATION
    // ==========================================================================
    DebateTopic {
        id: "school-phones",
        title: "Ar mokyklose turėtų būti uždrausti išmanieji telefonai?",
        description: "Diskutuokite apie mobiliųjų įrenginių poveikį mokymuisi ir socialiniam vystymuisi",
        category: TopicCategory::Education,
        difficulty: Difficulty::Beginner,
        key_points: KeyPoints {
            pro: &[
                "Sumažina dėmesio blaškymą",
                "Gerina tiesioginio bendravimo įgūdžius",
                "Geriau sutelkia dėmesį į mokymąsi",
            ],
            con: &[
                "Skubus komunikavimas",
                "Edukacinės programėlės ir ištekliai",
                "Skaitmeninių gebėjimų ugdymas",
            ],
        },
    },
    DebateTopic {
        id: "homework-weekend",
        title: "Ar savaitgaliais turėtų būti duodami namų darbai?",
        description: "Tyrinėkite mokinių darbo ir poilsio pusiausvyrą bei mokymosi efektyvumą",
        category: TopicCategory::Education,
        difficulty: Difficulty::Beginner,
        key_points: KeyPoints {
            pro: &[
                "Stiprina mokymąsi",
                "Ugdo laiko valdymo įgūdžius",
                "Palaiko akademinį tempą",
            ],
            con: &[
                "Šeimos laiko svarba",
                "Poilsio ir pramogų poreikis",
                "Streso mažinimas",
            ],
        },
    },
    DebateTopic {
        id: "standardized-testing",
        title: "Ar standartizuoti testai efektyviai matuoja mokinių gebėjimus?",
        description: "Išnagrinėkite standartizuotų testų vaidmenį šiuolaikiniame švietime",
        category: TopicCategory::Education,
        difficulty: Difficulty::Intermediate,
        key_points: KeyPoints {
            pro: &[
                "Objektyvus vertinimas",
                "Priėmimo į aukštąsias mokyklas standartai",
                "Švietimo pažangos sekimas",
            ],
            con: &[
                "Mokymasis testui",
                "Kultūrinis šališkumas",
                "Siauras gebėjimų vertinimas",
            ],
        },
    },
    // ==========================================================================
    // TECHNOLOGY
    // ==========================================================================
    DebateTopic {
        id: "ai-education",
        title: "Ar AI įrankiai kaip ChatGPT turėtų būti leidžiami klasėse?",
        description: "Diskutuokite apie AI technologijų integraciją švietimo aplinkoje",
        category: TopicCategory::Technology,
        difficulty: Difficulty::Intermediate,
        key_points: KeyPoints {
            pro: &[
                "Padidinta mokymosi efektyvumas",
                "Personalizuotas švietimas",
                "Ateities įgūdžių ruošimas",
            ],
            con: &[
                "Akademinio sąžiningumo rūpesčiai",
                "Kritinio mąstymo mažėjimas",
                "Priklausomybės problemos",
            ],
        },
    },
    DebateTopic {
        id: "social-media-regulation",
        title: "Ar socialiniai tinklai turėtų būti reguliuojami vyriausybės?",
        description: "Tyrinėkite pusiausvyrą tarp žodžio laisvės ir platformų atsakomybės",
        category: TopicCategory::Technology,
        difficulty: Difficulty::Advanced,
        key_points: KeyPoints {
            pro: &[
                "Naudotojų privatumo apsauga",
                "Dezinformacijos kovos",
                "Žalingo turinio prevencija",
            ],
            con: &[
                "Žodžio laisvės rūpesčiai",
                "Inovacijų stabdymas",
                "Vyriausybės perdėtas įsitraukimas",
            ],
        },
    },
    // ==========================================================================
    // ENVIRONMENT
    // ==========================================================================
    DebateTopic {
        id: "plastic-bags",
        title: "Ar plastiko maišeliai turėtų būti visiškai uždrausti?",
        description: "Išnagrinėkite poveikį aplinkai ir praktinius aspektus",
        category: TopicCategory::Environment,
        difficulty: Difficulty::Beginner,
        key_points: KeyPoints {
            pro: &[
                "Taršos mažinimas",
                "Jūrų gyvūnų apsauga",
                "Daugkartinio naudojimo alternatyvų skatinimas",
            ],
            con: &[
                "Ekonominis poveikis verslui",
                "Vartotojų patogumas",
                "Alternatyvių šalinimo problemos",
            ],
        },
    },
    DebateTopic {
        id: "nuclear-energy",
        title: "Ar branduolinė energija yra klimato kaitos sprendimas?",
        description: "Diskutuokite apie švarios energijos alternatyvas ir jų kompromisus",
        category: TopicCategory::Environment,
        difficulty: Difficulty::Advanced,
        key_points: KeyPoints {
            pro: &[
                "Mažas anglies pėdsako našumas",
                "Patikima bazinė energija",
                "Išbandyta technologija",
            ],
            con: &[
                "Radioaktyvių atliekų saugojimas",
                "Avarijų rizika",
                "Aukštos statybos sąnaudos",
            ],
        },
    },
    // ==========================================================================
    // SOCIAL ISSUES
    // ==========================================================================
    DebateTopic {
        id: "four-day-workweek",
        title: "Ar standartinė darbo savaitė turėtų būti keturių dienų?",
        description: "Tyrinėkite darbo ir asmeninio gyvenimo pusiausvyrą šiuolaikiniame visuomenėje",
        category: TopicCategory::Social,
        difficulty: Difficulty::Intermediate,
        key_points: KeyPoints {
            pro: &[
                "Geresnė darbo ir gyvenimo pusiausvyra",
                "Padidėjęs produktyvumas",
                "Mažesnis pervargimas",
            ],
            con: &[
                "Klientų aptarnavimo spragos",
                "Ekonominio produktyvumo rūpesčiai",
                "Pramonės suderinamumas",
            ],
        },
    },
    DebateTopic {
        id: "universal-basic-income",
        title: "Ar vyriausybės turėtų įgyvendinti visuotines bazines pajamas?",
        description: "Diskutuokite apie ekonomikos politiką ir socialinės gerovės požiūrius",
        category: TopicCategory::Social,
        difficulty: Difficulty::Advanced,
        key_points: KeyPoints {
            pro: &[
                "Skurdo mažinimas",
                "Ekonominis saugumas",
                "Socialinės paramos sistemų supaprastinimas",
            ],
            con: &[
                "Aukštos sąnaudos mokesčių mokėtojams",
                "Galima infliacija",
                "Darbo motyvacijos mažėjimas",
            ],
        },
    },
    // ==========================================================================
    // ETHICS
    // ==========================================================================
    DebateTopic {
        id: "animal-testing",
        title: "Ar gyvūnų bandymai turėtų būti uždrausti kosmetikos produktams?",
        description: "Išnagrinėkite etinius aspektus produktų kūrime",
        category: TopicCategory::Ethics,
        difficulty: Difficulty::Intermediate,
        key_points: KeyPoints {
            pro: &[
                "Gyvūnų gerovės apsauga",
                "Alternatyvūs metodai prieinami",
                "Etiškas vartojimas",
            ],
            con: &[
                "Saugumo tyrimų būtinybė",
                "Ekonominis poveikis pramonei",
                "Mokslo pažanga",
            ],
        },
    },
    DebateTopic {
        id: "genetic-editing",
        title: "Ar žmogaus embrionų genetinis redagavimas turėtų būti leistinas?",
        description: "Diskutuokite apie genetinės modifikacijos etiką ir žmogaus tobulinimą",
        category: TopicCategory::Ethics,
        difficulty: Difficulty::Advanced,
        key_points: KeyPoints {
            pro: &[
                "Genetinių ligų prevencija",
                "Žmogaus tobulinimo potencialas",
                "Medicinos pažanga",
            ],
            con: &[
                "Etiniai rūpesčiai",
                "Genetinė nelygybė",
                "Nežinomi ilgalaikiai poveikiai",
            ],
        },
    },
    // ==========================================================================
    // LITHUANIA-SPECIFIC
    // ==========================================================================
    DebateTopic {
        id: "lithuanian-language",
        title: "Ar lietuvių kalba turėtų būti privaloma visose Lietuvos mokyklose?",
        description: "Diskutuokite apie kalbos politiką ir kultūrinio tapatumo išsaugojimą",
        category: TopicCategory::Education,
        difficulty: Difficulty::Intermediate,
        key_points: KeyPoints {
            pro: &[
                "Kultūrinio tapatumo išsaugojimas",
                "Valstybinės kalbos prestižas",
                "Integracijos skatinimas",
            ],
            con: &["Mažumų teisės", "Tarptautiškumas", "Individualus pasirinkimas"],
        },
    },
    DebateTopic {
        id: "eu-integration",
        title: "Ar Lietuva turėtų stiprinti integraciją su ES?",
        description: "Tyrinėkite Lietuvos vaidmenį Europos Sąjungoje",
        category: TopicCategory::Politics,
        difficulty: Difficulty::Advanced,
        key_points: KeyPoints {
            pro: &[
                "Ekonominės naudos",
                "Geopolitinis saugumas",
                "Europos vertybių sklaida",
            ],
            con: &[
                "Nacionalinio suverenumo išsaugojimas",
                "Kultūrinio savitumo apsauga",
                "Sprendimų autonomija",
            ],
        },
    },
];

/// Lookup table from topic id to topic, built on first use.
static TOPIC_LOOKUP: LazyLock<HashMap<&'static str, &'static DebateTopic>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    for topic in DEBATE_TOPICS {
        map.insert(topic.id, topic);
    }
    map
});

/// Returns all built-in topics.
pub fn all() -> &'static [DebateTopic] {
    DEBATE_TOPICS
}

/// Looks up a topic by its identifier.
pub fn by_id(id: &str) -> Option<&'static DebateTopic> {
    TOPIC_LOOKUP.get(id).copied()
}

/// Returns all topics in the given category.
pub fn by_category(category: TopicCategory) -> Vec<&'static DebateTopic> {
    DEBATE_TOPICS
        .iter()
        .filter(|t| t.category == category)
        .collect()
}

/// Returns all topics at the given difficulty.
pub fn by_difficulty(difficulty: Difficulty) -> Vec<&'static DebateTopic> {
    DEBATE_TOPICS
        .iter()
        .filter(|t| t.difficulty == difficulty)
        .collect()
}

/// Picks a random topic from the catalog.
pub fn random() -> &'static DebateTopic {
    use rand::RngExt;

    let mut rng = rand::rng();
    &DEBATE_TOPICS[rng.random_range(0..DEBATE_TOPICS.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_thirteen_topics() {
        assert_eq!(DEBATE_TOPICS.len(), 13);
    }

    #[test]
    fn test_topic_ids_are_unique() {
        let mut ids: Vec<&str> = DEBATE_TOPICS.iter().map(|t| t.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), DEBATE_TOPICS.len());
    }

    #[test]
    fn test_every_topic_has_key_points_for_both_sides() {
        for topic in DEBATE_TOPICS {
            assert!(
                !topic.key_points.pro.is_empty(),
                "topic '{}' has no pro points",
                topic.id
            );
            assert!(
                !topic.key_points.con.is_empty(),
                "topic '{}' has no con points",
                topic.id
            );
            assert!(!topic.title.is_empty());
            assert!(!topic.description.is_empty());
        }
    }

    #[test]
    fn test_by_id_finds_known_topics() {
        let topic = by_id("nuclear-energy").expect("known id");
        assert_eq!(topic.category, TopicCategory::Environment);
        assert_eq!(topic.difficulty, Difficulty::Advanced);

        assert!(by_id("flat-earth").is_none());
    }

    #[test]
    fn test_by_category_filters() {
        let education = by_category(TopicCategory::Education);
        assert_eq!(education.len(), 4);
        assert!(education.iter().all(|t| t.category == TopicCategory::Education));

        // Some categories exist for future topics and are empty today.
        assert!(by_category(TopicCategory::Health).is_empty());
    }

    #[test]
    fn test_by_difficulty_filters() {
        assert_eq!(by_difficulty(Difficulty::Beginner).len(), 3);
        assert_eq!(by_difficulty(Difficulty::Intermediate).len(), 5);
        assert_eq!(by_difficulty(Difficulty::Advanced).len(), 5);
    }

    #[test]
    fn test_random_returns_catalog_member() {
        for _ in 0..20 {
            let topic = random();
            assert!(by_id(topic.id).is_some());
        }
    }
}
