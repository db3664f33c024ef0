// Composition tests: the whole pipeline from raw text to a StudyPack.
//
// These chain segmentation, keyword extraction, and the three generators
// through the public API, with a seeded RNG for the quiz. No files or
// network are touched.

use rand::rngs::StdRng;
use rand::SeedableRng;

use studypack::config::PipelineConfig;
use studypack::pipeline::{extract_keywords, generate_flashcards, generate_quiz, summarize};
use studypack::study::quiz::BLANK;
use studypack::Pipeline;

const PLANT_SENTENCES: &[&str] = &[
    "Green plants capture sunlight with pigments in their leaves",
    "Scientists have studied photosynthesis in many different plant species",
    "Photosynthesis is the process plants use",
    "Chlorophyll absorbs mostly red and blue wavelengths of light",
    "The energy from light splits water molecules inside the chloroplast",
    "Oxygen escapes through small pores called stomata",
    "Carbon dioxide enters the leaf through those same stomata",
    "Inside the chloroplast the Calvin cycle builds sugar molecules",
    "Without photosynthesis almost every food chain would collapse",
    "Glucose stores the captured energy in chemical bonds",
    "Plants later burn glucose during cellular respiration",
    "Respiration releases carbon dioxide back into the air",
    "Desert plants open their stomata at night to save water",
    "Rates of photosynthesis rise with light intensity up to a limit",
    "Temperature also changes how quickly enzymes in the chloroplast work",
    "Algae in the ocean produce a large share of the oxygen we breathe",
    "Early bacteria changed the atmosphere by releasing oxygen",
    "Farmers add light in greenhouses to boost crop growth",
    "Leaves that face the sun tend to be thicker than shaded leaves",
    "Variegated leaves have patches with little chlorophyll",
    "In autumn chlorophyll breaks down and other pigments show",
    "Researchers measure gas exchange to estimate leaf activity",
    "Artificial photosynthesis aims to turn sunlight into fuel",
    "Water moves up from the roots to replace what the leaves lose",
    "Nitrogen and other nutrients also limit how fast plants grow",
    "Shade tolerant species capture dim light more efficiently",
    "Seasonal cycles of growth follow the amount of daylight",
    "Students often draw the chloroplast as a stack of green discs",
    "A simple experiment shows bubbles of oxygen from pond weed",
    "The sugar made in leaves feeds the rest of the plant",
];

/// 30 sentences, "photosynthesis" five times, one of them a definition.
fn plant_text() -> String {
    format!("{}.", PLANT_SENTENCES.join(". "))
}

// ============================================================
// Full pipeline on a realistic document
// ============================================================

#[test]
fn vocabulary_ranks_content_words() {
    assert_eq!(
        extract_keywords(&plant_text()),
        vec![
            "leaves",
            "plants",
            "photosynthesis",
            "light",
            "chloroplast",
            "oxygen",
            "chlorophyll",
            "water",
            "stomata",
        ]
    );
}

#[test]
fn definition_sentence_becomes_the_card_back() {
    let cards = generate_flashcards(&plant_text(), 12);
    let card = cards
        .iter()
        .find(|c| c.front == "Photosynthesis")
        .expect("photosynthesis should get a card");
    // An earlier sentence mentions photosynthesis too, but the definition wins
    assert_eq!(card.back, "Photosynthesis is the process plants use");
}

#[test]
fn flashcards_follow_vocabulary_order() {
    let cards = generate_flashcards(&plant_text(), 12);
    let fronts: Vec<&str> = cards.iter().map(|c| c.front.as_str()).collect();
    assert_eq!(
        fronts,
        vec![
            "Leaves",
            "Plants",
            "Photosynthesis",
            "Light",
            "Chloroplast",
            "Oxygen",
            "Chlorophyll",
            "Water",
            "Stomata",
        ]
    );
    assert_eq!(
        cards[4].back,
        "The energy from light splits water molecules inside the chloroplast"
    );
}

#[test]
fn summary_picks_keyword_rich_early_sentences() {
    let summary = summarize(&plant_text(), 8);
    let expected = [
        "Green plants capture sunlight with pigments in their leaves",
        "Photosynthesis is the process plants use",
        "Chlorophyll absorbs mostly red and blue wavelengths of light",
        "The energy from light splits water molecules inside the chloroplast",
        "Oxygen escapes through small pores called stomata",
        "Desert plants open their stomata at night to save water",
        "Rates of photosynthesis rise with light intensity up to a limit",
        "Variegated leaves have patches with little chlorophyll",
    ]
    .join(" ");
    assert_eq!(summary, expected);
}

#[test]
fn quiz_questions_are_well_formed() {
    let text = plant_text();
    let vocab_size = extract_keywords(&text).len();

    for seed in 0..20 {
        let quizzes = generate_quiz(&text, 12, &mut StdRng::seed_from_u64(seed));
        assert_eq!(quizzes.len(), 12);

        for quiz in &quizzes {
            assert_eq!(quiz.question.matches(BLANK).count(), 1);
            assert_eq!(quiz.options.len(), vocab_size.min(4));

            // Filling the blank with the correct option restores a source sentence
            let idx = quiz.correct_index().expect("correct label in range");
            let answer = quiz.option_text(idx).unwrap().to_lowercase();
            let restored = quiz.question.replacen(BLANK, &answer, 1).to_lowercase();
            assert!(
                PLANT_SENTENCES
                    .iter()
                    .any(|s| s.to_lowercase() == restored),
                "Restored question not found in source: {restored}"
            );
        }
    }
}

#[test]
fn same_seed_same_pack() {
    let text = plant_text();
    let pipeline = Pipeline::default();
    let a = pipeline.run(&text, &mut StdRng::seed_from_u64(2024));
    let b = pipeline.run(&text, &mut StdRng::seed_from_u64(2024));
    assert_eq!(a, b);
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

#[test]
fn summary_and_flashcards_ignore_the_seed() {
    let text = plant_text();
    let pipeline = Pipeline::default();
    let a = pipeline.run(&text, &mut StdRng::seed_from_u64(1));
    let b = pipeline.run(&text, &mut StdRng::seed_from_u64(99));
    assert_eq!(a.summary, b.summary);
    assert_eq!(a.flashcards, b.flashcards);
}

#[test]
fn pipeline_config_caps_every_artifact() {
    let pipeline = Pipeline::new(PipelineConfig {
        summary_sentences: 3,
        quiz_questions: 2,
        flashcards: 4,
        ..PipelineConfig::default()
    });
    let pack = pipeline.run(&plant_text(), &mut StdRng::seed_from_u64(8));

    assert_eq!(pack.quizzes.len(), 2);
    assert_eq!(pack.flashcards.len(), 4);
    let selected = PLANT_SENTENCES
        .iter()
        .filter(|s| pack.summary.contains(*s))
        .count();
    assert_eq!(selected, 3);
}

// ============================================================
// Degenerate input
// ============================================================

#[test]
fn few_sentences_returned_whole_in_order() {
    let text = "Mercury is the closest planet to the sun. \
                Venus has a thick toxic atmosphere! \
                Earth is the only planet with known life? \
                Mars has the tallest volcano in the system. \
                Jupiter is larger than all other planets combined.";
    assert_eq!(
        summarize(text, 8),
        "Mercury is the closest planet to the sun \
         Venus has a thick toxic atmosphere \
         Earth is the only planet with known life \
         Mars has the tallest volcano in the system \
         Jupiter is larger than all other planets combined"
    );
}

#[test]
fn stopword_only_text_degrades_gracefully() {
    let sentences = [
        "They would like to think about it all",
        "We could say what he would do with them",
        "She will go out if you can come over",
        "Then we think about how they look at us",
        "There is no way any of them can get back",
        "Some people will want to take what is good",
        "He said that she had been there at first",
        "It was also well over the time we had",
        "Now you know which one of these is most new",
        "Because our work is just like your work",
    ];
    let text = format!("{}.", sentences.join(". "));

    assert!(extract_keywords(&text).is_empty());

    let pack = Pipeline::default().run(&text, &mut StdRng::seed_from_u64(0));
    assert!(pack.quizzes.is_empty());
    assert!(pack.flashcards.is_empty());
    // Positional scoring alone keeps the first eight sentences
    assert_eq!(pack.summary, sentences[..8].join(" "));
}

#[test]
fn no_qualifying_sentences() {
    let text = "Too short. Also short! Tiny? ok.";
    let pack = Pipeline::default().run(text, &mut StdRng::seed_from_u64(0));
    assert_eq!(pack.summary, "");
    assert!(pack.quizzes.is_empty());
    assert!(pack.flashcards.is_empty());
}
