//! Embedded word lists and secret-word selection.
//!
//! `ANSWERS` holds words eligible to be a secret word; `ALLOWED` holds
//! additional words accepted as guesses. Membership of either list makes
//! a guess a recognized dictionary word.

use crate::games::wordle::Word;
use rand::seq::IndexedRandom;
use tracing::instrument;

/// Words eligible to be chosen as the secret word.
pub const ANSWERS: &[&str] = &[
    "abide", "about", "above", "actor", "acute", "adapt", "admit", "adopt",
    "adult", "after", "again", "agent", "agree", "ahead", "alarm", "album",
    "alert", "alike", "alive", "allow", "alone", "along", "alter", "among",
    "angel", "anger", "angle", "angry", "apart", "apple", "apply", "arena",
    "argue", "arise", "armor", "aroma", "array", "arrow", "aside", "asset",
    "atlas", "audio", "audit", "avoid", "awake", "award", "aware", "badge",
    "baker", "basic", "basin", "batch", "beach", "beard", "beast", "begin",
    "being", "belly", "below", "bench", "berry", "birth", "black", "blade",
    "blame", "blank", "blast", "blaze", "bleak", "blend", "bless", "blind",
    "block", "bloom", "board", "boast", "bonus", "boost", "booth", "bound",
    "brain", "brand", "brave", "bread", "break", "breed", "brick", "bride",
    "brief", "bring", "broad", "brook", "brown", "brush", "build", "bunch",
    "burst", "cabin", "cable", "candy", "cargo", "carry", "catch", "cause",
    "cease", "chain", "chair", "chalk", "charm", "chart", "chase", "cheap",
    "check", "cheek", "cheer", "chess", "chest", "chief", "child", "chill",
    "choir", "chord", "civic", "civil", "claim", "clash", "class", "clean",
    "clear", "clerk", "click", "cliff", "climb", "clock", "close", "cloth",
    "cloud", "coach", "coast", "color", "couch", "could", "count", "court",
    "cover", "craft", "crane", "crash", "cream", "creek", "crime", "crisp",
    "cross", "crowd", "crown", "crude", "cruel", "crush", "curve", "cycle",
    "daily", "dairy", "dance", "datum", "dealt", "death", "debut", "decay",
    "delay", "delta", "dense", "depth", "derby", "devil", "diary", "dirty",
    "donor", "doubt", "dozen", "draft", "drain", "drama", "drawn", "dream",
    "dress", "drift", "drill", "drink", "drive", "dying", "eager", "eagle",
    "early", "earth", "eight", "elbow", "elect", "elite", "empty", "enemy",
    "enjoy", "enter", "entry", "equal", "error", "essay", "event", "every",
    "exact", "exist", "extra", "fable", "faint", "faith", "false", "fancy",
    "fault", "favor", "feast", "fence", "fever", "fiber", "field", "fifth",
    "fifty", "fight", "final", "first", "flame", "flash", "fleet", "flesh",
    "float", "flock", "flood", "floor", "flour", "fluid", "focus", "force",
    "forge", "forth", "forty", "forum", "found", "frame", "fraud", "fresh",
    "front", "frost", "fruit", "funny", "gauge", "geese", "ghost", "giant",
    "given", "glass", "globe", "glory", "glove", "grace", "grade", "grain",
    "grand", "grant", "grape", "grasp", "grass", "grave", "great", "green",
    "greet", "grief", "grind", "groan", "group", "grove", "guard", "guess",
    "guest", "guide", "habit", "happy", "harsh", "haste", "haven", "heart",
    "heavy", "hedge", "hello", "hence", "hobby", "honey", "honor", "horse",
    "hotel", "house", "human", "humor", "hurry", "ideal", "image", "imply",
    "index", "inner", "input", "irony", "issue", "ivory", "jeans", "joint",
    "judge", "juice", "knife", "knock", "known", "label", "labor", "large",
    "laser", "later", "laugh", "layer", "learn", "lease", "least", "leave",
    "legal", "lemon", "level", "light", "limit", "linen", "liver", "local",
    "lodge", "logic", "loose", "lorry", "loyal", "lucky", "lunch", "magic",
    "major", "maple", "march", "match", "maybe", "mayor", "medal", "media",
    "mercy", "merge", "merit", "metal", "meter", "might", "minor", "minus",
    "model", "money", "month", "moral", "motor", "mound", "mount", "mouse",
    "mouth", "movie", "music", "naive", "nerve", "never", "night", "noble",
    "noise", "north", "novel", "nurse", "occur", "ocean", "offer", "often",
    "olive", "onion", "opera", "orbit", "order", "organ", "other", "ought",
    "ounce", "outer", "owner", "oxide", "paint", "panel", "panic", "paper",
    "party", "pasta", "patch", "pause", "peace", "pearl", "penny", "petty",
    "phase", "phone", "photo", "piano", "piece", "pilot", "pitch", "place",
    "plain", "plane", "plant", "plate", "plaza", "point", "porch", "pound",
    "power", "press", "price", "pride", "prime", "print", "prior", "prize",
    "proof", "proud", "prove", "pulse", "pupil", "purse", "queen", "query",
    "quest", "quick", "quiet", "quite", "quota", "quote", "radar", "radio",
    "raise", "rally", "ranch", "range", "rapid", "ratio", "reach", "react",
    "ready", "realm", "rebel", "refer", "reign", "relax", "reply", "rifle",
    "right", "rigid", "risky", "rival", "river", "robot", "rocky", "rough",
    "round", "route", "royal", "rural", "salad", "sauce", "scale", "scene",
    "scope", "score", "sense", "serve", "seven", "shade", "shaft", "shake",
    "shall", "shame", "shape", "share", "sharp", "sheep", "sheet", "shelf",
    "shell", "shift", "shine", "shirt", "shock", "shore", "short", "shout",
    "sight", "silly", "since", "sixty", "skill", "skirt", "slate", "sleep",
    "slice", "slide", "slope", "small", "smart", "smile", "smoke", "snake",
    "solar", "solid", "solve", "sorry", "sound", "south", "space", "spare",
    "spark", "speak", "speed", "spend", "spice", "spine", "spite", "split",
    "spoon", "sport", "spray", "squad", "stack", "staff", "stage", "stain",
    "stair", "stake", "stand", "stare", "start", "state", "steam", "steel",
    "steep", "steer", "stick", "stiff", "still", "stock", "stone", "store",
    "storm", "story", "stove", "strip", "study", "stuff", "style", "sugar",
    "suite", "sunny", "super", "surge", "sweet", "swift", "swing", "sword",
    "table", "taste", "teach", "tenth", "thank", "theme", "there", "thick",
    "thing", "think", "third", "those", "three", "throw", "thumb", "tiger",
    "tight", "title", "toast", "today", "token", "total", "touch", "tough",
    "tower", "trace", "track", "trade", "trail", "train", "treat", "trend",
    "trial", "tribe", "trick", "troop", "truck", "truly", "trunk", "trust",
    "truth", "twice", "uncle", "under", "union", "unite", "unity", "until",
    "upper", "upset", "urban", "usage", "usual", "valid", "value", "vapor",
    "verse", "video", "virus", "visit", "vital", "vivid", "vocal", "voice",
    "voter", "wagon", "waste", "watch", "water", "weary", "wheat", "wheel",
    "where", "which", "while", "white", "whole", "whose", "widow", "width",
    "woman", "world", "worry", "worth", "would", "wound", "wrist", "write",
    "wrong", "yield", "young", "youth",
];

/// Additional words accepted as guesses but never chosen as answers.
pub const ALLOWED: &[&str] = &[
    "abbey", "aglow", "aloft", "amber", "amble", "anode", "arbor", "ashen",
    "aspen", "atoll", "attic", "bawdy", "bicep", "binge", "blurb", "bongo",
    "brine", "cacao", "cameo", "chute", "cider", "corgi", "credo", "crepe",
    "dandy", "ditto", "dodge", "dowry", "dummy", "dusky", "ember", "epoch",
    "erase", "ethos", "fjord", "flair", "fungi", "gecko", "gourd", "gusto",
    "hippo", "husky", "icily", "igloo", "jazzy", "jumbo", "kayak", "lanky",
    "lasso", "lilac", "lolly", "loopy", "lotus", "mango", "mirth", "mocha",
    "moody", "mossy", "nanny", "nutty", "nylon", "oakum", "octet", "otter",
    "parka", "pesto", "piney", "pixel", "plume", "polka", "proxy", "quill",
    "rhino", "rusty", "salsa", "savvy", "scoff", "snout", "spelt", "spool",
    "tabby", "tango", "tulip", "tweed", "vigor", "vinyl", "wacky", "waltz",
    "whiff", "zebra",
];

/// Checks whether a word is a recognized dictionary word.
pub fn is_allowed(word: &Word) -> bool {
    let text = word.to_string();
    ANSWERS.binary_search(&text.as_str()).is_ok()
        || ALLOWED.binary_search(&text.as_str()).is_ok()
}

/// Picks a secret word at random from the answer list.
///
/// Returns `None` only if the answer list is empty or holds an invalid
/// entry, mirroring the config-creation failure branch upstream.
#[instrument]
pub fn word_of_the_day() -> Option<Word> {
    let mut rng = rand::rng();
    ANSWERS.choose(&mut rng).and_then(|text| text.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_are_sorted_for_binary_search() {
        assert!(ANSWERS.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(ALLOWED.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_all_entries_are_valid_words() {
        for text in ANSWERS.iter().chain(ALLOWED) {
            assert!(
                text.parse::<Word>().is_ok(),
                "invalid embedded word: {text}"
            );
        }
    }

    #[test]
    fn test_membership() {
        assert!(is_allowed(&"crane".parse().unwrap()));
        assert!(is_allowed(&"lolly".parse().unwrap()));
        assert!(!is_allowed(&"zzzzz".parse().unwrap()));
    }

    #[test]
    fn test_word_of_the_day_comes_from_answers() {
        let word = word_of_the_day().expect("non-empty answer list");
        assert!(ANSWERS.contains(&word.to_string().as_str()));
    }
}
