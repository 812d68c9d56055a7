/// Render state of a list page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageState {
    Loading,
    Error(String),
    Empty,
    Populated,
}

impl PageState {
    /// `loading` wins, then `error`; a finished load with no rows is `Empty`.
    pub fn derive(is_loading: bool, error: Option<String>, row_count: Option<usize>) -> Self {
        if is_loading {
            return PageState::Loading;
        }
        if let Some(message) = error {
            return PageState::Error(message);
        }
        match row_count {
            Some(n) if n > 0 => PageState::Populated,
            _ => PageState::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_first() {
        assert_eq!(PageState::derive(true, Some("x".into()), Some(3)), PageState::Loading);
    }

    #[test]
    fn test_error_before_data() {
        assert_eq!(
            PageState::derive(false, Some("HTTP 500".into()), Some(3)),
            PageState::Error("HTTP 500".into())
        );
    }

    #[test]
    fn test_empty_and_populated() {
        assert_eq!(PageState::derive(false, None, Some(0)), PageState::Empty);
        assert_eq!(PageState::derive(false, None, None), PageState::Empty);
        assert_eq!(PageState::derive(false, None, Some(1)), PageState::Populated);
    }
}
