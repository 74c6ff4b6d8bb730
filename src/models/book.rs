use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    pub category: String,
    pub year: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_list_decode() {
        let books: Vec<Book> = serde_json::from_str(
            r#"[{"id":"1","title":"Dune","author":"Herbert","category":"scifi","year":1965}]"#,
        )
        .unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].title, "Dune");
        assert_eq!(books[0].year, 1965);
    }
}
