use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use trivia_core::{next_question, search_questions, Pagination, QuestionRecord, QuizTurn};

fn records(n: usize) -> Vec<QuestionRecord> {
    (0..n)
        .map(|i| QuestionRecord {
            id: i as i32 + 1,
            question: format!("Question number {}", i),
            answer: "answer".into(),
            category: (i % 6) as i32 + 1,
            difficulty: 1,
        })
        .collect()
}

proptest! {
    /// Property: N items split into pages of 10 gives ceil(N/10) pages that
    /// cover every item exactly once, in order
    #[test]
    fn prop_pages_cover_every_item_once(n in 0usize..250) {
        let items: Vec<usize> = (0..n).collect();
        let pages = Pagination::new(1).paginate(items.clone()).total_pages();
        prop_assert_eq!(pages, n.div_ceil(10));

        let mut seen = Vec::with_capacity(n);
        for page in 1..=pages {
            let slice = Pagination::new(page as i64).paginate(items.clone());
            prop_assert!(slice.items.len() <= 10);
            prop_assert!(!slice.items.is_empty());
            seen.extend(slice.items);
        }
        prop_assert_eq!(seen, items);
    }

    /// Property: quiz never repeats a previously asked question
    #[test]
    fn prop_quiz_never_repeats(
        n in 1usize..40,
        asked in prop::collection::hash_set(1i32..40, 0..40),
        seed in any::<u64>(),
    ) {
        let pool = records(n);
        let previous: Vec<i32> = asked.into_iter().collect();
        let mut rng = StdRng::seed_from_u64(seed);

        match next_question(&pool, &previous, &mut rng) {
            QuizTurn::Question(q) => {
                prop_assert!(!previous.contains(&q.id));
                prop_assert!(pool.contains(&q));
            }
            QuizTurn::ForceEnd => {
                let unseen = pool.iter().filter(|q| !previous.contains(&q.id)).count();
                prop_assert!(previous.len() == pool.len() || unseen == 0);
            }
        }
    }

    /// Property: search ignores the case of the term
    #[test]
    fn prop_search_case_insensitive(term in "[a-zA-Z ]{0,8}") {
        let pool = records(30);
        prop_assert_eq!(
            search_questions(pool.clone(), &term.to_lowercase()),
            search_questions(pool, &term.to_uppercase())
        );
    }
}
