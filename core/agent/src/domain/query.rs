//! ユーザー入力のドメイン型（LLM に送る 1 行）

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    /// stdin から読んだ 1 行を作る（末尾の改行 `\n` / `\r\n` を除く）
    pub fn from_line(line: &str) -> Self {
        Self(line.trim_end_matches(&['\n', '\r'][..]).to_string())
    }
}

impl std::ops::Deref for Query {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for Query {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_line_strips_newline() {
        assert_eq!(&*Query::from_line("hello world\n"), "hello world");
        assert_eq!(&*Query::from_line("hello world\r\n"), "hello world");
    }

    #[test]
    fn test_from_line_keeps_inner_whitespace() {
        assert_eq!(&*Query::from_line("  a  b  \n"), "  a  b  ");
        assert_eq!(&*Query::from_line(""), "");
    }
}
