/*
 * src/vocabulary.rs
 * 出題する寿司ネタ（漢字と英語名）を管理するモジュール
 */

/// 漢字と英語名の組
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct VocabularyEntry {
    pub kanji: &'static str,   // 表示用 (漢字)
    pub english: &'static str, // 選択肢用 (英語名)
}

/// 寿司ネタのリスト
pub const VOCABULARY: &[VocabularyEntry] = &[
    VocabularyEntry { kanji: "鮪", english: "Tuna" },
    VocabularyEntry { kanji: "鮭", english: "Salmon" },
    VocabularyEntry { kanji: "鰤", english: "Yellowtail" },
    VocabularyEntry { kanji: "鯛", english: "Sea Bream" },
    VocabularyEntry { kanji: "鰹", english: "Bonito" },
    VocabularyEntry { kanji: "鱈", english: "Cod" },
    VocabularyEntry { kanji: "鰻", english: "Eel" },
    VocabularyEntry { kanji: "鱚", english: "Japanese Whiting" },
    VocabularyEntry { kanji: "鯖", english: "Mackerel" },
    VocabularyEntry { kanji: "鯵", english: "Horse Mackerel" },
    VocabularyEntry { kanji: "鮟鱇", english: "Anglerfish" },
    VocabularyEntry { kanji: "鱧", english: "Pike Conger" },
    VocabularyEntry { kanji: "鱸", english: "Sea Bass" },
    VocabularyEntry { kanji: "鰆", english: "Spanish Mackerel" },
    VocabularyEntry { kanji: "鰈", english: "Flounder" },
    VocabularyEntry { kanji: "鰺", english: "Amberjack" },
    VocabularyEntry { kanji: "鱒", english: "Trout" },
    VocabularyEntry { kanji: "鰯", english: "Sardine" },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn vocabulary_has_eighteen_entries() {
        assert_eq!(VOCABULARY.len(), 18);
    }

    #[test]
    fn english_names_are_unique() {
        let names: HashSet<&str> = VOCABULARY.iter().map(|e| e.english).collect();
        assert_eq!(names.len(), VOCABULARY.len());
    }
}
