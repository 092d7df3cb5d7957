use std::collections::HashSet;

use crate::text::{
    Token,
    mapping::{Direction, EN_TO_RU, RU_TO_EN, map_char, map_token},
};

fn map(s: &str, direction: Direction) -> String {
    map_token(&Token::from(s), direction).to_string()
}

#[test]
fn wrong_layout_words_map_to_intended_words() {
    assert_eq!(map("руддщ", Direction::RuToEn), "hello");
    assert_eq!(map("ghbdtn", Direction::EnToRu), "привет");
    assert_eq!(map("ytn", Direction::EnToRu), "нет");
    assert_eq!(map("дштгч", Direction::RuToEn), "linux");
}

#[test]
fn case_is_preserved_per_character() {
    assert_eq!(map("Руддщ", Direction::RuToEn), "Hello");
    assert_eq!(map("ДшТгЧ", Direction::RuToEn), "LiNuX");
    assert_eq!(map("Linux", Direction::EnToRu), "Дштгч");
    assert_eq!(map("GHBDTN", Direction::EnToRu), "ПРИВЕТ");
}

#[test]
fn letters_on_punctuation_keys_map_to_punctuation() {
    assert_eq!(map("хъжэбюё", Direction::RuToEn), "[];',.`");
    // No uppercase form on the Latin side.
    assert_eq!(map("ХЪ", Direction::RuToEn), "[]");
    assert_eq!(map("[];',.`", Direction::EnToRu), "хъжэбюё");
}

#[test]
fn characters_outside_the_table_map_to_themselves() {
    assert_eq!(map_char('1', Direction::RuToEn), '1');
    assert_eq!(map_char('1', Direction::EnToRu), '1');
    assert_eq!(map_char('ß', Direction::EnToRu), 'ß');
    assert_eq!(map("h1", Direction::RuToEn), "h1");
}

#[test]
fn output_length_matches_input_length() {
    for s in ["", "a", "руддщ", "Mixed Текст", "12345"] {
        let token = Token::from(s);
        assert_eq!(map_token(&token, Direction::RuToEn).len(), token.len());
        assert_eq!(map_token(&token, Direction::EnToRu).len(), token.len());
    }
}

#[test]
fn tables_have_unique_keys_in_both_directions() {
    let ru: HashSet<char> = RU_TO_EN.pairs().map(|(from, _)| from).collect();
    let en: HashSet<char> = EN_TO_RU.pairs().map(|(from, _)| from).collect();
    assert_eq!(ru.len(), 33);
    assert_eq!(en.len(), 33);
    assert_eq!(RU_TO_EN.pairs().count(), 33);
}

#[test]
fn every_table_entry_round_trips() {
    for (ru, en) in RU_TO_EN.pairs() {
        assert_eq!(map_char(ru, Direction::RuToEn), en);
        assert_eq!(map_char(en, Direction::EnToRu), ru);
        assert_eq!(map_char(map_char(ru, Direction::RuToEn), Direction::EnToRu), ru);
        assert_eq!(map_char(map_char(en, Direction::EnToRu), Direction::RuToEn), en);
    }
}

#[test]
fn uppercase_latin_letters_round_trip() {
    for ch in 'A'..='Z' {
        let ru = map_char(ch, Direction::EnToRu);
        assert!(ru.is_uppercase(), "{ch} -> {ru}");
        assert_eq!(map_char(ru, Direction::RuToEn), ch);
    }
}

#[test]
fn involution_on_words() {
    let samples = ["руддщ", "Руддщ", "ghbdtn", "Linux", "ДшТгЧ"];
    for s in samples {
        let direction = if s.chars().any(|c| c.is_ascii_alphabetic()) {
            Direction::EnToRu
        } else {
            Direction::RuToEn
        };
        let back = match direction {
            Direction::EnToRu => Direction::RuToEn,
            Direction::RuToEn => Direction::EnToRu,
        };
        assert_eq!(map(&map(s, direction), back), s);
    }
}
