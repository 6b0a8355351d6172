//! Bundled starter dataset
//!
//! Category ids follow list position starting at 1, so `Science` is 1 and
//! `Sports` is 6.

pub const CATEGORIES: &[&str] = &[
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

#[derive(Debug, Clone, Copy)]
pub struct SeedQuestion {
    pub question: &'static str,
    pub answer: &'static str,
    pub category: i32,
    pub difficulty: i32,
}

const fn q(question: &'static str, answer: &'static str, category: i32, difficulty: i32) -> SeedQuestion {
    SeedQuestion {
        question,
        answer,
        category,
        difficulty,
    }
}

pub const QUESTIONS: &[SeedQuestion] = &[
    q("What movie earned Tom Hanks his third straight Oscar nomination, in 1996?", "Apollo 13", 5, 4),
    q("What actor did author Anne Rice first denounce, then praise in the role of her beloved Lestat?", "Tom Cruise", 5, 4),
    q("Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", 4, 2),
    q("What was the title of the 1990 fantasy directed by Tim Burton about a young man with multi-bladed appendages?", "Edward Scissorhands", 5, 3),
    q("What boxer's original name is Cassius Clay?", "Muhammad Ali", 4, 1),
    q("Which is the only team to play in every soccer World Cup tournament?", "Brazil", 6, 3),
    q("Which country won the first ever soccer World Cup in 1930?", "Uruguay", 6, 4),
    q("Who invented Peanut Butter?", "George Washington Carver", 4, 2),
    q("What is the largest lake in Africa?", "Lake Victoria", 3, 2),
    q("In which royal palace would you find the Hall of Mirrors?", "The Palace of Versailles", 3, 3),
    q("The Taj Mahal is located in which Indian city?", "Agra", 3, 2),
    q("Which Dutch graphic artist, initials M C, was a creator of optical illusions?", "Escher", 2, 1),
    q("La Giaconda is better known as what?", "Mona Lisa", 2, 3),
    q("How many paintings did Van Gogh sell in his lifetime?", "One", 2, 4),
    q("Which American artist was a pioneer of Abstract Expressionism, and a leading exponent of action painting?", "Jackson Pollock", 2, 2),
    q("What is the heaviest organ in the human body?", "The Liver", 1, 4),
    q("Who discovered penicillin?", "Alexander Fleming", 1, 3),
    q("Hematology is a branch of medicine involving the study of what?", "Blood", 1, 4),
    q("Which Egyptian pharaoh's tomb was discovered by Howard Carter in 1922?", "Tutankhamun", 4, 3),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_question_has_a_category() {
        let max = CATEGORIES.len() as i32;
        assert!(QUESTIONS.iter().all(|q| (1..=max).contains(&q.category)));
    }

    #[test]
    fn three_science_questions() {
        assert_eq!(QUESTIONS.iter().filter(|q| q.category == 1).count(), 3);
    }

    #[test]
    fn eight_questions_mention_what() {
        let hits = QUESTIONS
            .iter()
            .filter(|q| q.question.to_lowercase().contains("what"))
            .count();
        assert_eq!(hits, 8);
    }
}
