//! Loading / ready state of an externally supplied dataset.

use serde::{Deserialize, Serialize};

/// A dataset that is either still loading or ready.
///
/// Components match on this to choose between placeholder and data rendering.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum LoadState<T> {
    #[default]
    Loading,
    Ready(T),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready(_))
    }

    pub fn as_ref(&self) -> Option<&T> {
        match self {
            LoadState::Ready(data) => Some(data),
            LoadState::Loading => None,
        }
    }

    pub fn as_mut(&mut self) -> Option<&mut T> {
        match self {
            LoadState::Ready(data) => Some(data),
            LoadState::Loading => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> LoadState<U> {
        match self {
            LoadState::Ready(data) => LoadState::Ready(f(data)),
            LoadState::Loading => LoadState::Loading,
        }
    }
}

impl<T> From<Option<T>> for LoadState<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(data) => LoadState::Ready(data),
            None => LoadState::Loading,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_option() {
        assert!(LoadState::<u8>::from(None).is_loading());
        assert_eq!(LoadState::from(Some(3)), LoadState::Ready(3));
    }

    #[test]
    fn test_map_preserves_loading() {
        let loading: LoadState<u8> = LoadState::Loading;
        assert_eq!(loading.map(|v| v * 2), LoadState::Loading);
        assert_eq!(LoadState::Ready(2).map(|v| v * 2), LoadState::Ready(4));
    }

    #[test]
    fn test_default_is_loading() {
        assert!(LoadState::<String>::default().is_loading());
    }
}
