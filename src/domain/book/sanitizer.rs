//! Markup Sanitizer
//!
//! 去除文本中的 HTML/JS 标记，使存储的值在任何渲染上下文中都不可执行。
//! SQL 特殊字符不在此处理，持久化层统一使用参数绑定。

use regex::Regex;
use std::sync::LazyLock;

/// 任意标签: `<script>`、`</script >`、`<img src=x onerror=...>` 等
static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^<>]*>").expect("tag pattern is valid"));

/// 去除标记并裁剪首尾空白
///
/// 标签之间的文本保留为普通文本，例如
/// `<script>alert('x')</script>` 变为 `alert('x')`。
/// 删除标签后残留的 `<`/`>` 也一并去掉，避免拼接出新的标签。
pub fn strip_markup(input: &str) -> String {
    let without_tags = TAG.replace_all(input, "");
    without_tags
        .chars()
        .filter(|c| !matches!(c, '<' | '>'))
        .collect::<String>()
        .trim()
        .to_string()
}
