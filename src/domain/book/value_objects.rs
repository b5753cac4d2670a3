//! Book Context - Value Objects

use super::sanitizer::strip_markup;
use super::BookValidationError;

/// 名称最大字符数（按 Unicode 标量计数）
pub const MAX_NAME_CHARS: usize = 64;

/// 图书名称
///
/// 不变量:
/// - 非空（清洗后仍非空）
/// - 不超过 MAX_NAME_CHARS 字符
/// - 不含可执行标记
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BookName(String);

impl BookName {
    pub fn new(name: impl AsRef<str>) -> Result<Self, BookValidationError> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(BookValidationError::EmptyField("name"));
        }

        let length = name.chars().count();
        if length > MAX_NAME_CHARS {
            return Err(BookValidationError::NameTooLong {
                length,
                max: MAX_NAME_CHARS,
            });
        }

        let cleaned = strip_markup(name);
        if cleaned.is_empty() {
            return Err(BookValidationError::EmptyField("name"));
        }
        Ok(Self(cleaned))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BookName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 作者
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorName(String);

impl AuthorName {
    pub fn new(author: impl AsRef<str>) -> Result<Self, BookValidationError> {
        let cleaned = strip_markup(author.as_ref());
        if cleaned.is_empty() {
            return Err(BookValidationError::EmptyField("author"));
        }
        Ok(Self(cleaned))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// 图书类别（自由文本标签）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookType(String);

impl BookType {
    pub fn new(book_type: impl AsRef<str>) -> Result<Self, BookValidationError> {
        let book_type = book_type.as_ref().trim();
        if book_type.is_empty() {
            return Err(BookValidationError::EmptyField("book_type"));
        }
        Ok(Self(book_type.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// 调用方提供的出版年份原始值
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum YearInput {
    Integer(i64),
    Text(String),
}

impl From<i64> for YearInput {
    fn from(year: i64) -> Self {
        Self::Integer(year)
    }
}

impl From<i32> for YearInput {
    fn from(year: i32) -> Self {
        Self::Integer(i64::from(year))
    }
}

impl From<&str> for YearInput {
    fn from(year: &str) -> Self {
        Self::Text(year.to_string())
    }
}

impl From<String> for YearInput {
    fn from(year: String) -> Self {
        Self::Text(year)
    }
}

/// 出版年份
///
/// 没有取值范围限制：负数（公元前）和遥远的未来年份都合法
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct YearPublished(i64);

impl YearPublished {
    pub fn new(year: i64) -> Self {
        Self(year)
    }

    /// 文本只接受完整的十进制整数字面量，不做空白裁剪或其他宽松转换
    pub fn parse(input: &YearInput) -> Result<Self, BookValidationError> {
        match input {
            YearInput::Integer(year) => Ok(Self(*year)),
            YearInput::Text(text) => text
                .parse::<i64>()
                .map(Self)
                .map_err(|_| BookValidationError::InvalidYear(text.clone())),
        }
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

/// 图书状态
///
/// 创建时总是 Available；本模块不定义状态迁移
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BookStatus {
    #[default]
    Available,
    Borrowed,
}

impl BookStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookStatus::Available => "available",
            BookStatus::Borrowed => "borrowed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "available" => Some(BookStatus::Available),
            "borrowed" => Some(BookStatus::Borrowed),
            _ => None,
        }
    }
}

impl std::fmt::Display for BookStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(63, true)]
    #[case(64, true)]
    #[case(65, false)]
    fn test_name_length_boundary(#[case] length: usize, #[case] ok: bool) {
        let name = "A".repeat(length);
        assert_eq!(BookName::new(&name).is_ok(), ok);
    }

    #[test]
    fn test_name_length_counts_chars_not_bytes() {
        // 64 个多字节字符
        let name = "书".repeat(64);
        assert!(BookName::new(&name).is_ok());

        let err = BookName::new("书".repeat(65)).unwrap_err();
        assert_eq!(
            err,
            BookValidationError::NameTooLong {
                length: 65,
                max: MAX_NAME_CHARS
            }
        );
    }

    #[test]
    fn test_blank_fields_rejected() {
        assert_eq!(
            BookName::new("   ").unwrap_err(),
            BookValidationError::EmptyField("name")
        );
        assert_eq!(
            AuthorName::new("").unwrap_err(),
            BookValidationError::EmptyField("author")
        );
        assert_eq!(
            BookType::new("\t").unwrap_err(),
            BookValidationError::EmptyField("book_type")
        );
    }

    #[test]
    fn test_name_that_is_only_markup_is_empty() {
        assert_eq!(
            BookName::new("<b></b>").unwrap_err(),
            BookValidationError::EmptyField("name")
        );
    }

    #[rstest]
    #[case(YearInput::Integer(2020), 2020)]
    #[case(YearInput::Integer(-1000), -1000)]
    #[case(YearInput::Integer(3000), 3000)]
    #[case(YearInput::Integer(i64::MIN), i64::MIN)]
    #[case(YearInput::from("1999"), 1999)]
    #[case(YearInput::from("-44"), -44)]
    fn test_year_accepted(#[case] input: YearInput, #[case] expected: i64) {
        assert_eq!(YearPublished::parse(&input).unwrap().value(), expected);
    }

    #[rstest]
    #[case("Two Thousand Twenty")]
    #[case("invalid_year")]
    #[case("2020.5")]
    #[case(" 2020")]
    #[case("")]
    fn test_year_rejected(#[case] text: &str) {
        let err = YearPublished::parse(&YearInput::from(text)).unwrap_err();
        assert_eq!(err, BookValidationError::InvalidYear(text.to_string()));
    }

    #[test]
    fn test_status_round_trip_and_default() {
        assert_eq!(BookStatus::default(), BookStatus::Available);
        assert_eq!(BookStatus::Available.as_str(), "available");
        assert_eq!(BookStatus::from_str("borrowed"), Some(BookStatus::Borrowed));
        assert_eq!(BookStatus::from_str("lost"), None);
    }
}
