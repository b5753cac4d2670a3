//! Book Context - Entity Validator
//!
//! 纯函数校验：候选图书 -> NewBook | BookValidationError

use super::{AuthorName, BookName, BookType, BookValidationError, YearInput, YearPublished};

/// 候选图书（未校验的原始输入）
///
/// `None` 表示字段缺失，与空字符串同样视为空字段。
/// `status` 不在此处：创建时由系统赋值。
#[derive(Debug, Clone, Default)]
pub struct BookCandidate {
    pub name: Option<String>,
    pub author: Option<String>,
    pub year_published: Option<YearInput>,
    pub book_type: Option<String>,
}

impl BookCandidate {
    pub fn new(
        name: impl Into<String>,
        author: impl Into<String>,
        year_published: impl Into<YearInput>,
        book_type: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            author: Some(author.into()),
            year_published: Some(year_published.into()),
            book_type: Some(book_type.into()),
        }
    }
}

/// 已通过校验、完成清洗的图书
///
/// 只能经由 [`validate`] 构造，持久化端口只接受此类型。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    name: BookName,
    author: AuthorName,
    year_published: YearPublished,
    book_type: BookType,
}

impl NewBook {
    pub fn name(&self) -> &BookName {
        &self.name
    }

    pub fn author(&self) -> &AuthorName {
        &self.author
    }

    pub fn year_published(&self) -> YearPublished {
        self.year_published
    }

    pub fn book_type(&self) -> &BookType {
        &self.book_type
    }
}

/// 校验候选图书
///
/// 按 name、author、year_published、book_type 的顺序检查，返回第一个错误。
pub fn validate(candidate: &BookCandidate) -> Result<NewBook, BookValidationError> {
    let name = BookName::new(required(&candidate.name, "name")?)?;
    let author = AuthorName::new(required(&candidate.author, "author")?)?;
    let year_published = candidate
        .year_published
        .as_ref()
        .ok_or(BookValidationError::EmptyField("year_published"))
        .and_then(YearPublished::parse)?;
    let book_type = BookType::new(required(&candidate.book_type, "book_type")?)?;

    Ok(NewBook {
        name,
        author,
        year_published,
        book_type,
    })
}

fn required<'a>(
    value: &'a Option<String>,
    field: &'static str,
) -> Result<&'a str, BookValidationError> {
    value
        .as_deref()
        .ok_or(BookValidationError::EmptyField(field))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_candidate() {
        let book = validate(&BookCandidate::new(
            "Valid Book",
            "Valid Author",
            2020,
            "Fiction",
        ))
        .unwrap();

        assert_eq!(book.name().as_str(), "Valid Book");
        assert_eq!(book.author().as_str(), "Valid Author");
        assert_eq!(book.year_published().value(), 2020);
        assert_eq!(book.book_type().as_str(), "Fiction");
    }

    #[test]
    fn test_all_fields_invalid_reports_name_first() {
        let candidate = BookCandidate::new("", "", "invalid_year", "");
        assert_eq!(
            validate(&candidate).unwrap_err(),
            BookValidationError::EmptyField("name")
        );
    }

    #[test]
    fn test_missing_fields() {
        let mut candidate = BookCandidate::new("Book", "Author", 2020, "Fiction");
        candidate.author = None;
        assert_eq!(
            validate(&candidate).unwrap_err(),
            BookValidationError::EmptyField("author")
        );

        let mut candidate = BookCandidate::new("Book", "Author", 2020, "Fiction");
        candidate.year_published = None;
        assert_eq!(
            validate(&candidate).unwrap_err(),
            BookValidationError::EmptyField("year_published")
        );

        let mut candidate = BookCandidate::new("Book", "Author", 2020, "Fiction");
        candidate.book_type = None;
        assert_eq!(
            validate(&candidate).unwrap_err().field(),
            "book_type"
        );
    }

    #[test]
    fn test_non_integer_year() {
        let candidate = BookCandidate::new(
            "Book with Invalid Year",
            "Author",
            "Two Thousand Twenty",
            "Fiction",
        );
        assert!(matches!(
            validate(&candidate),
            Err(BookValidationError::InvalidYear(_))
        ));
    }

    #[test]
    fn test_author_is_sanitized() {
        let candidate = BookCandidate::new("Book", "<b>Jane</b> Doe", 1990, "Poetry");
        let book = validate(&candidate).unwrap();
        assert_eq!(book.author().as_str(), "Jane Doe");
    }

    #[test]
    fn test_default_candidate_is_empty() {
        assert_eq!(
            validate(&BookCandidate::default()).unwrap_err(),
            BookValidationError::EmptyField("name")
        );
    }
}
