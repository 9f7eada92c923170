use limerick::Dictionary;

pub(crate) const DICTIONARY: &str = "assets/cmudict.dict";

pub(crate) fn dictionary() -> Dictionary {
    Dictionary::load(DICTIONARY).unwrap()
}

pub(crate) fn beard() -> Vec<&'static str> {
    vec![
        "There was an old man with a beard",
        "Who said, 'It is just as I feared!'",
        "Two owls and a hen",
        "Four larks and a wren",
        "Have all built their nests in my beard",
    ]
}

pub(crate) fn lady() -> Vec<&'static str> {
    vec![
        "There was a Young Lady whose chin",
        "Resembled the point of a pin;",
        "So she had it made sharp,",
        "And purchased a harp,",
        "And played several tunes with her chin.",
    ]
}
