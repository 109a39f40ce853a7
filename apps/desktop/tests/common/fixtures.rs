//! Test documents.

use reader_core::{Book, Chapter, Paragraph, Word};

pub fn paragraph(number: u32, ids: &[&str]) -> Paragraph {
    Paragraph {
        id: format!("p{number}-{}", ids.first().copied().unwrap_or("empty")),
        paragraph_number: number,
        words: ids
            .iter()
            .map(|id| Word::new(*id, format!("{id}-l2"), format!("{id}-l1")))
            .collect(),
        translation_l1: format!("Paragraph {number}."),
    }
}

pub fn book(id: &str, chapters: Vec<Vec<Paragraph>>) -> Book {
    Book {
        id: id.to_string(),
        title: format!("Book {id}"),
        author: "Test Author".to_string(),
        language_code: "ha".to_string(),
        chapters: chapters
            .into_iter()
            .enumerate()
            .map(|(i, paragraphs)| Chapter {
                number: i as u32 + 1,
                title: format!("Chapter {}", i + 1),
                paragraphs,
            })
            .collect(),
    }
}

/// Two chapters whose paragraph numbers restart at 1.
pub fn two_chapter_book() -> Book {
    book(
        "two-chapters",
        vec![
            vec![paragraph(1, &["c1-a", "c1-b"]), paragraph(2, &["c1-c"])],
            vec![paragraph(1, &["c2-a"]), paragraph(2, &["c2-b", "c2-c"])],
        ],
    )
}

pub fn book_a() -> Book {
    book("a", vec![vec![paragraph(1, &["a1", "a2"]), paragraph(2, &["a3"])]])
}

/// Shares no word ids with [`book_a`].
pub fn book_b() -> Book {
    book("b", vec![vec![paragraph(1, &["b1"]), paragraph(2, &["b2", "b3"])]])
}

/// Imported text whose word ids come from position, so two stories of the same
/// shape share every id.
pub fn positional_story(id: &str, text: &[&str]) -> Book {
    let words = text
        .iter()
        .enumerate()
        .map(|(i, l2)| Word::new(format!("p1-w{}", i + 1), *l2, ""))
        .collect();
    book(
        id,
        vec![vec![Paragraph {
            id: "p1".to_string(),
            paragraph_number: 1,
            words,
            translation_l1: String::new(),
        }]],
    )
}
