//! The fixed trivia board: five categories, five values each.

/// One trivia question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    /// Category the question belongs to.
    pub category: &'static str,
    /// Board value awarded for a correct answer.
    pub value: u32,
    /// The clue shown to the player.
    pub clue: &'static str,
    /// Answer options.
    pub answers: [&'static str; 3],
    /// Index of the correct option.
    pub correct: usize,
}

/// Board categories, in column order.
pub const CATEGORIES: [&str; 5] = ["INTERNET", "MOVIES", "SCIENCE", "GEOGRAPHY", "FOOD"];

/// Board values, in row order.
pub const VALUES: [u32; 5] = [200, 400, 600, 800, 1000];

/// All 25 questions, category-major: index = category * 5 + value row.
pub const QUESTIONS: [Question; 25] = [
    Question {
        category: "INTERNET",
        value: 200,
        clue: "This orange alien is Reddit's mascot",
        answers: ["Snoo", "Karma", "Upvote"],
        correct: 0,
    },
    Question {
        category: "INTERNET",
        value: 400,
        clue: "This video sharing site was bought by Google in 2006",
        answers: ["TikTok", "YouTube", "Vimeo"],
        correct: 1,
    },
    Question {
        category: "INTERNET",
        value: 600,
        clue: "The 'Like' button on this social network used to be called 'Awesome'",
        answers: ["Twitter", "Facebook", "Instagram"],
        correct: 1,
    },
    Question {
        category: "INTERNET",
        value: 800,
        clue: "This messaging app is known for disappearing photos",
        answers: ["Snapchat", "WhatsApp", "Telegram"],
        correct: 0,
    },
    Question {
        category: "INTERNET",
        value: 1000,
        clue: "This professional networking site was founded by Reid Hoffman",
        answers: ["LinkedIn", "AngelList", "Glassdoor"],
        correct: 0,
    },
    Question {
        category: "MOVIES",
        value: 200,
        clue: "This 2009 film about blue aliens became the highest-grossing movie",
        answers: ["Titanic", "Avatar", "Avengers"],
        correct: 1,
    },
    Question {
        category: "MOVIES",
        value: 400,
        clue: "This wizard boy defeated Voldemort in the final film",
        answers: ["Harry Potter", "Ron Weasley", "Neville Longbottom"],
        correct: 0,
    },
    Question {
        category: "MOVIES",
        value: 600,
        clue: "This Marvel hero is known as the 'First Avenger'",
        answers: ["Iron Man", "Thor", "Captain America"],
        correct: 2,
    },
    Question {
        category: "MOVIES",
        value: 800,
        clue: "This 1994 film features Tom Hanks saying 'Life is like a box of chocolates'",
        answers: ["Forrest Gump", "Cast Away", "Big"],
        correct: 0,
    },
    Question {
        category: "MOVIES",
        value: 1000,
        clue: "This director is known for films like Inception and The Dark Knight",
        answers: ["Steven Spielberg", "Christopher Nolan", "Martin Scorsese"],
        correct: 1,
    },
    Question {
        category: "SCIENCE",
        value: 200,
        clue: "H2O is the chemical formula for this essential liquid",
        answers: ["Hydrogen", "Water", "Oxygen"],
        correct: 1,
    },
    Question {
        category: "SCIENCE",
        value: 400,
        clue: "This planet is known as the 'Red Planet'",
        answers: ["Venus", "Mars", "Jupiter"],
        correct: 1,
    },
    Question {
        category: "SCIENCE",
        value: 600,
        clue: "This scientist developed the theory of relativity",
        answers: ["Isaac Newton", "Albert Einstein", "Stephen Hawking"],
        correct: 1,
    },
    Question {
        category: "SCIENCE",
        value: 800,
        clue: "This gas makes up about 78% of Earth's atmosphere",
        answers: ["Oxygen", "Nitrogen", "Carbon Dioxide"],
        correct: 1,
    },
    Question {
        category: "SCIENCE",
        value: 1000,
        clue: "This is the smallest unit of matter",
        answers: ["Molecule", "Atom", "Electron"],
        correct: 1,
    },
    Question {
        category: "GEOGRAPHY",
        value: 200,
        clue: "This is the largest country in the world by land area",
        answers: ["China", "Russia", "Canada"],
        correct: 1,
    },
    Question {
        category: "GEOGRAPHY",
        value: 400,
        clue: "This river is the longest in the world",
        answers: ["Amazon", "Nile", "Mississippi"],
        correct: 1,
    },
    Question {
        category: "GEOGRAPHY",
        value: 600,
        clue: "This mountain range contains Mount Everest",
        answers: ["Himalayas", "Rockies", "Alps"],
        correct: 0,
    },
    Question {
        category: "GEOGRAPHY",
        value: 800,
        clue: "This desert is the largest hot desert in the world",
        answers: ["Gobi", "Sahara", "Mojave"],
        correct: 1,
    },
    Question {
        category: "GEOGRAPHY",
        value: 1000,
        clue: "This city is the capital of Australia",
        answers: ["Sydney", "Melbourne", "Canberra"],
        correct: 2,
    },
    Question {
        category: "FOOD",
        value: 200,
        clue: "This Italian dish consists of dough topped with tomato sauce and cheese",
        answers: ["Pasta", "Pizza", "Lasagna"],
        correct: 1,
    },
    Question {
        category: "FOOD",
        value: 400,
        clue: "This Japanese dish features raw fish over seasoned rice",
        answers: ["Sushi", "Ramen", "Tempura"],
        correct: 0,
    },
    Question {
        category: "FOOD",
        value: 600,
        clue: "This spice is derived from the Crocus flower and is very expensive",
        answers: ["Cardamom", "Saffron", "Vanilla"],
        correct: 1,
    },
    Question {
        category: "FOOD",
        value: 800,
        clue: "This French cooking technique involves cooking food slowly in its own fat",
        answers: ["Confit", "Saute", "Braise"],
        correct: 0,
    },
    Question {
        category: "FOOD",
        value: 1000,
        clue: "This cheese is traditionally used in Greek salad",
        answers: ["Mozzarella", "Feta", "Gouda"],
        correct: 1,
    },
];
