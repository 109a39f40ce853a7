//! Sample book shown when no document has been supplied.

use reader_core::{Book, Chapter, Paragraph, Word};

fn paragraph(number: u32, words: &[(&str, &str)], translation: &str) -> Paragraph {
    Paragraph {
        id: format!("p{number}"),
        paragraph_number: number,
        words: words
            .iter()
            .enumerate()
            .map(|(i, (l2, l1))| Word::new(format!("w{number}-{}", i + 1), *l2, *l1))
            .collect(),
        translation_l1: translation.to_string(),
    }
}

/// Opening of "The Little Prince" in Arabic with English glosses.
pub fn sample_book() -> Book {
    Book {
        id: "lp-ar".to_string(),
        title: "The Little Prince".to_string(),
        author: "Antoine de Saint-Exupéry".to_string(),
        language_code: "ar".to_string(),
        chapters: vec![Chapter {
            number: 1,
            title: "Chapter 1".to_string(),
            paragraphs: vec![
                paragraph(
                    1,
                    &[
                        ("عِنْدَمَا", "when"),
                        ("كُنْتُ", "I was"),
                        ("فِي", "in"),
                        ("السَّادِسَةِ", "the sixth"),
                        ("مِنْ", "from"),
                        ("عُمْرِي", "my age"),
                        ("رَأَيْتُ", "I saw"),
                        ("مَرَّةً", "once"),
                        ("صُورَةً", "a picture"),
                        ("رَائِعَةً", "magnificent"),
                    ],
                    "When I was six years old I saw a magnificent picture in a book, \
                     called True Stories from Nature, about the primeval forest.",
                ),
                paragraph(
                    2,
                    &[
                        ("كَانَتْ", "it was"),
                        ("تُمَثِّلُ", "it represents"),
                        ("أَفْعَى", "a snake"),
                        ("بُوَاء", "boa"),
                        ("عَاصِرَة", "constrictor"),
                        ("فِي", "in"),
                        ("عَمَلِيَّةِ", "the act of"),
                        ("ابْتِلَاعِ", "swallowing"),
                        ("حَيَوَانٍ", "an animal"),
                    ],
                    "It was a picture of a boa constrictor in the act of swallowing an animal.",
                ),
                paragraph(
                    3,
                    &[
                        ("سَأَلْتُهُ", "I asked him"),
                        ("أَنْ", "to"),
                        ("يَرْسُمَ", "draw"),
                        ("لِي", "for me"),
                        ("خَرُوفًا", "a sheep"),
                    ],
                    "So I asked him to draw me a sheep.",
                ),
            ],
        }],
    }
}
