//! The built-in exercise catalog.

use crate::coach::Difficulty;

use super::{ExerciseKind, PracticeExercise};

/// Static array of all built-in practice exercises.
pub static PRACTICE_EXERCISES: &[PracticeExercise] = &[
    PracticeExercise {
        id: "fallacy-1",
        kind: ExerciseKind::Fallacy,
        title: "Nustatykite klaidą",
        description: "Aptikite loginius klaidingumus argumentuose",
        difficulty: Difficulty::Beginner,
        time_limit_secs: 30,
        question: "\"Visi perka naują išmanųjį telefoną, todėl jis turbūt yra geriausias.\"",
        options: &[
            "Ad Hominem",
            "Bandwagon klaidingumas",
            "Straw Man",
            "Klaidinga dilema",
        ],
        correct_answer: Some(1),
        explanation: "Tai yra Bandwagon klaidingumas - argumentavimas, kad kažkas yra tiesa ar gerai, nes daugelis žmonių tuo tiki ar taip daro.",
        points: 10,
    },
    PracticeExercise {
        id: "quick-response-1",
        kind: ExerciseKind::QuickResponse,
        title: "Greitas kontrargumentas",
        description: "Sukurkite greitą atsakymą į priešingą nuomonę",
        difficulty: Difficulty::Intermediate,
        time_limit_secs: 45,
        question: "Priešingo argumento: \"Namų darbai turėtų būti uždrausti, nes sukelia stresą ir atima šeimos laiką.\"",
        options: &[],
        correct_answer: None,
        explanation: "Geri kontrargumentai galėtų sutelkti dėmesį į: mokymosi stiprinimą, laiko valdymo įgūdžius, akademinį pasiruošimą arba subalansuoto požiūrio sprendimus.",
        points: 15,
    },
    PracticeExercise {
        id: "evidence-1",
        kind: ExerciseKind::EvidenceAnalysis,
        title: "Įrodymų vertinimas",
        description: "Įvertinkite įrodymų stiprumą",
        difficulty: Difficulty::Intermediate,
        time_limit_secs: 60,
        question: "Įvertinkite šį įrodymą: \"50 vidurinės mokyklos mokinių tyrimas parodė, kad 80% renkasi nuotolinį mokymąsi.\"",
        options: &[
            "Labai stiprus - didelė imtis, aiškūs rezultatai",
            "Vidutiniškai stiprus - geras procentas, ribota imtis",
            "Silpnas - maža imtis, galimas šališkumas",
            "Neteisingas - nepakanka informacijos",
        ],
        correct_answer: Some(2),
        explanation: "Šis įrodymas yra silpnas dėl mažos imties dydžio (50 mokinių) ir galimo atrankos šališkumo. Stipresnis tyrimas reikalautų didesnės, įvairesnės imties.",
        points: 15,
    },
    PracticeExercise {
        id: "fallacy-2",
        kind: ExerciseKind::Fallacy,
        title: "Pažangus klaidingumo aptikimas",
        description: "Nustatykite subtilias logines klaidas",
        difficulty: Difficulty::Advanced,
        time_limit_secs: 45,
        question: "\"Mano oponentas pasisako už atsinaujinančią energiją, bet jis vairuoja benzininį automobilį, todėl jo argumentas neteisingas.\"",
        options: &[
            "Tu Quoque (Tu irgi)",
            "Ad Hominem",
            "Straw Man",
            "Kreipimasis į autoritetą",
        ],
        correct_answer: Some(0),
        explanation: "Tai yra Tu Quoque klaidingumas - argumento atmetimas nurodant veidmainystę, o ne nagrinėjant argumento turinį.",
        points: 20,
    },
    PracticeExercise {
        id: "counter-argument-1",
        kind: ExerciseKind::CounterArgument,
        title: "Sukurkite kontrargumentą",
        description: "Konstruokite loginius priešingus argumentus",
        difficulty: Difficulty::Advanced,
        time_limit_secs: 90,
        question: "Pradinis argumentas: \"Socialiniai tinklai turėtų būti reguliuojami, nes skleidžia dezinformaciją ir kenkia psichikos sveikatai.\"",
        options: &[],
        correct_answer: None,
        explanation: "Stiprūs kontrargumentai galėtų paliesti: žodžio laisvės principus, platformų savireguliaciją, naudotojų švietimą, vyriausybės perdėto įsitraukimo rūpesčius ar poveikį inovacijoms.",
        points: 25,
    },
];

/// Returns all built-in exercises in catalog order.
pub fn all() -> &'static [PracticeExercise] {
    PRACTICE_EXERCISES
}

/// Returns the full exercise pool in a fresh random order.
pub fn shuffled() -> Vec<&'static PracticeExercise> {
    use rand::seq::SliceRandom;

    let mut pool: Vec<&'static PracticeExercise> = PRACTICE_EXERCISES.iter().collect();
    pool.shuffle(&mut rand::rng());
    pool
}
